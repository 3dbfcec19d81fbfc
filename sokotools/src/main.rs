use clap::{Args, Parser, Subcommand};
use dotenvy::dotenv;
use log::debug;
use momo_tools::{AggregatorApi, AggregatorConfig};
use soko_payment_engine::{
    db_types::NewSeller,
    db_url,
    helpers::{new_payout_reference, normalize_msisdn, MobileNetwork},
    token_cache::InMemoryTokenCache,
    PayoutApi,
    SqliteSellerStore,
};
use spg_common::Tzs;

#[derive(Parser, Debug)]
#[command(version = "0.1.0", about = "Operator tooling for the SokoPay gateway")]
pub struct Arguments {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    #[clap(name = "resolve", about = "Normalize a phone number and resolve its mobile network")]
    Resolve {
        /// The phone number, in any format
        phone: String,
    },
    #[clap(name = "reference", about = "Mint a new payout reference")]
    Reference,
    #[clap(name = "payout", about = "Send a live disbursement to a seller's mobile-money account")]
    Payout(PayoutParams),
    #[clap(name = "seller", about = "Seller record management")]
    Seller(SellerCommand),
}

#[derive(Debug, Args)]
pub struct PayoutParams {
    /// The seller id to pay out
    #[arg(short = 's', long = "seller")]
    seller_id: i64,
    /// The amount, in whole shillings
    #[arg(short = 'a', long = "amount")]
    amount: i64,
}

#[derive(Debug, Args)]
pub struct SellerCommand {
    #[command(subcommand)]
    command: SellerSubCommand,
}

#[derive(Debug, Subcommand)]
pub enum SellerSubCommand {
    #[clap(name = "add", about = "Insert a seller record into the payout database")]
    Add {
        /// The seller's display name, as it will appear on disbursements
        #[arg(short = 'n', long = "name")]
        name: String,
        /// The seller's mobile-money number
        #[arg(short = 'm', long = "msisdn")]
        msisdn: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();
    let args = Arguments::parse();
    match args.command {
        Command::Resolve { phone } => resolve(&phone),
        Command::Reference => println!("{}", new_payout_reference()),
        Command::Payout(params) => run_payout(params).await?,
        Command::Seller(cmd) => run_seller_command(cmd).await?,
    }
    Ok(())
}

fn resolve(phone: &str) {
    let msisdn = normalize_msisdn(phone);
    match MobileNetwork::from_msisdn(&msisdn) {
        Some(network) => println!("{msisdn} => {network}"),
        None => println!("{msisdn} => unresolved"),
    }
}

async fn run_payout(params: PayoutParams) -> anyhow::Result<()> {
    let config = AggregatorConfig::new_from_env_or_default();
    let store = SqliteSellerStore::new_with_url(&db_url(), 5).await?;
    let client = AggregatorApi::new(config.clone())?;
    let tokens = match std::env::var("SPG_ACCESS_TOKEN") {
        Ok(token) => InMemoryTokenCache::with_initial_token(config.token_cache_key.clone(), token),
        Err(_) => InMemoryTokenCache::new(config.token_cache_key.clone()),
    };
    debug!("Sending payout of TSh {} to seller {}", params.amount, params.seller_id);
    let api = PayoutApi::new(store, client, tokens, config);
    let outcome = api.send_payout(params.seller_id, Tzs::from(params.amount)).await;
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}

async fn run_seller_command(cmd: SellerCommand) -> anyhow::Result<()> {
    match cmd.command {
        SellerSubCommand::Add { name, msisdn } => {
            let store = SqliteSellerStore::new_with_url(&db_url(), 5).await?;
            let id = store.insert_seller(&NewSeller { display_name: name, payout_msisdn: msisdn }).await?;
            println!("Created seller {id}");
        },
    }
    Ok(())
}
