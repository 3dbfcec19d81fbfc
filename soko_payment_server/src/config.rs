use std::env;

use log::*;
use momo_tools::AggregatorConfig;
use soko_payment_engine::{helpers::MobileNetwork, MnoDispatchTable};

const DEFAULT_SPG_HOST: &str = "127.0.0.1";
const DEFAULT_SPG_PORT: u16 = 8460;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// Connection details for the mobile-money aggregator.
    pub aggregator: AggregatorConfig,
    /// The externally configured numeric dispatch codes, one per supported network.
    pub mno_codes: MnoCodes,
    /// Seed value for the process-wide token cache. The token refresher takes over from here;
    /// without either, every aggregator call fails with an explicit envelope.
    pub initial_access_token: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SPG_HOST.to_string(),
            port: DEFAULT_SPG_PORT,
            database_url: String::default(),
            aggregator: AggregatorConfig::default(),
            mno_codes: MnoCodes::default(),
            initial_access_token: None,
        }
    }
}

impl ServerConfig {
    pub fn new(host: &str, port: u16) -> Self {
        Self { host: host.to_string(), port, ..Default::default() }
    }

    pub fn from_env_or_default() -> Self {
        let host = env::var("SPG_HOST").ok().unwrap_or_else(|| DEFAULT_SPG_HOST.into());
        let port = env::var("SPG_PORT")
            .map(|s| {
                s.parse::<u16>().unwrap_or_else(|e| {
                    error!(
                        "🪛️ {s} is not a valid port for SPG_PORT. {e} Using the default, {DEFAULT_SPG_PORT}, instead."
                    );
                    DEFAULT_SPG_PORT
                })
            })
            .ok()
            .unwrap_or(DEFAULT_SPG_PORT);
        let database_url = env::var("SPG_DATABASE_URL").ok().unwrap_or_else(|| {
            error!("🪛️ SPG_DATABASE_URL is not set. Please set it to the URL for the seller database.");
            String::default()
        });
        let aggregator = AggregatorConfig::new_from_env_or_default();
        let mno_codes = MnoCodes::from_env_or_default();
        let initial_access_token = env::var("SPG_ACCESS_TOKEN").ok();
        if initial_access_token.is_none() {
            warn!(
                "🪛️ SPG_ACCESS_TOKEN is not set. Aggregator calls will fail until the token refresher has primed \
                 the cache."
            );
        }
        Self { host, port, database_url, aggregator, mno_codes, initial_access_token }
    }
}

//-------------------------------------------------  MnoCodes  --------------------------------------------------------
/// The numeric method codes the marketplace uses as dispatch keys, one per network.
///
/// Codes arrive as strings on payment methods, so they are kept as strings here; what matters
/// is that the mapping to the closed [`MobileNetwork`] set is fixed at startup.
#[derive(Clone, Debug)]
pub struct MnoCodes {
    pub vodacom: String,
    pub tigo: String,
    pub airtel: String,
    pub halotel: String,
}

impl Default for MnoCodes {
    fn default() -> Self {
        Self { vodacom: "1".to_string(), tigo: "2".to_string(), airtel: "3".to_string(), halotel: "4".to_string() }
    }
}

impl MnoCodes {
    pub fn from_env_or_default() -> Self {
        let defaults = Self::default();
        let var = |name: &str, default: String| {
            env::var(name).unwrap_or_else(|_| {
                debug!("🪛️ {name} not set, using code {default}");
                default
            })
        };
        Self {
            vodacom: var("SPG_MNO_CODE_VODACOM", defaults.vodacom),
            tigo: var("SPG_MNO_CODE_TIGO", defaults.tigo),
            airtel: var("SPG_MNO_CODE_AIRTEL", defaults.airtel),
            halotel: var("SPG_MNO_CODE_HALOTEL", defaults.halotel),
        }
    }

    pub fn dispatch_table(&self) -> MnoDispatchTable {
        MnoDispatchTable::new(vec![
            (self.vodacom.clone(), MobileNetwork::Vodacom),
            (self.tigo.clone(), MobileNetwork::Tigo),
            (self.airtel.clone(), MobileNetwork::Airtel),
            (self.halotel.clone(), MobileNetwork::Halotel),
        ])
    }
}
