use std::time::Duration;

use actix_web::{dev::Server, http::KeepAlive, middleware::Logger, web, App, HttpServer};
use momo_tools::AggregatorApi;
use soko_payment_engine::{token_cache::InMemoryTokenCache, PaymentApi, PayoutApi, SqliteSellerStore};

use crate::{
    config::ServerConfig,
    errors::ServerError,
    routes::{disbursement_callback, health, InitiatePaymentRoute, RequestPayoutRoute},
};

pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let store = SqliteSellerStore::new_with_url(&config.database_url, 25)
        .await
        .map_err(|e| ServerError::InitializeError(e.to_string()))?;
    let srv = create_server_instance(config, store)?;
    srv.await.map_err(|e| ServerError::Unspecified(e.to_string()))
}

pub fn create_server_instance(config: ServerConfig, store: SqliteSellerStore) -> Result<Server, ServerError> {
    let aggregator =
        AggregatorApi::new(config.aggregator.clone()).map_err(|e| ServerError::InitializeError(e.to_string()))?;
    // One cache for the whole process; the token refresher holds a clone and every worker reads
    // through its own clone of the same entries.
    let tokens = match &config.initial_access_token {
        Some(token) => {
            InMemoryTokenCache::with_initial_token(config.aggregator.token_cache_key.clone(), token.clone())
        },
        None => InMemoryTokenCache::new(config.aggregator.token_cache_key.clone()),
    };
    let host = config.host.clone();
    let port = config.port;
    let srv = HttpServer::new(move || {
        let payment_api = PaymentApi::new(
            aggregator.clone(),
            tokens.clone(),
            config.mno_codes.dispatch_table(),
            config.aggregator.currency.clone(),
        );
        let payout_api =
            PayoutApi::new(store.clone(), aggregator.clone(), tokens.clone(), config.aggregator.clone());
        let api_scope = web::scope("/api")
            .service(InitiatePaymentRoute::<AggregatorApi, InMemoryTokenCache>::new())
            .service(RequestPayoutRoute::<SqliteSellerStore, AggregatorApi, InMemoryTokenCache>::new());
        App::new()
            .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %U").log_target("spg::access_log"))
            .app_data(web::Data::new(payment_api))
            .app_data(web::Data::new(payout_api))
            .service(health)
            .service(api_scope)
            .service(disbursement_callback)
    })
    .keep_alive(KeepAlive::Timeout(Duration::from_secs(600)))
    .bind((host.as_str(), port))?
    .run();
    Ok(srv)
}
