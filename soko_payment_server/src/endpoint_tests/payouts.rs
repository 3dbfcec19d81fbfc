use actix_web::{body::MessageBody, http::StatusCode, test, test::TestRequest, web, web::ServiceConfig, App};
use log::*;
use momo_tools::{AggregatorApiError, AggregatorConfig, DisbursementResponse, ResponseStatus};
use soko_payment_engine::{
    db_types::SellerPayoutAccount,
    token_cache::InMemoryTokenCache,
    PaymentOutcome,
    PayoutApi,
};
use spg_common::Secret;

use super::mocks::{MockAggregator, MockSellers};
use crate::routes::RequestPayoutRoute;

fn aggregator_config() -> AggregatorConfig {
    AggregatorConfig {
        base_url: "https://sandbox.invalid".to_string(),
        country: "TZ".to_string(),
        currency: "TZS".to_string(),
        disbursement_pin: Secret::new("1234".to_string()),
        token_cache_key: "aggregator_access_token".to_string(),
    }
}

fn sellers_with_account() -> MockSellers {
    let mut sellers = MockSellers::new();
    sellers.expect_fetch_payout_account().returning(|id| {
        Ok(SellerPayoutAccount {
            seller_id: id,
            msisdn: "0712345678".to_string(),
            display_name: "Kariakoo Crafts".to_string(),
        })
    });
    sellers
}

fn configure_app(sellers: MockSellers, client: MockAggregator) -> impl FnOnce(&mut ServiceConfig) {
    move |cfg| {
        let tokens = InMemoryTokenCache::with_initial_token("aggregator_access_token", "tok".to_string());
        let api = PayoutApi::new(sellers, client, tokens, aggregator_config());
        cfg.app_data(web::Data::new(api))
            .service(RequestPayoutRoute::<MockSellers, MockAggregator, InMemoryTokenCache>::new());
    }
}

async fn post_payout(sellers: MockSellers, client: MockAggregator, body: serde_json::Value) -> (StatusCode, String) {
    let _ = env_logger::try_init().ok();
    let req = TestRequest::post().uri("/payouts").set_json(&body).to_request();
    let app = App::new().configure(configure_app(sellers, client));
    let app = test::init_service(app).await;
    let (_, res) = test::call_service(&app, req).await.into_parts();
    let status = res.status();
    let body = String::from_utf8_lossy(&res.into_body().try_into_bytes().unwrap()).into_owned();
    debug!("Response body: {body}");
    (status, body)
}

#[actix_web::test]
async fn accepted_payout_relays_the_transaction_id() {
    let mut client = MockAggregator::new();
    client.expect_disburse().returning(|req, _| {
        Ok(DisbursementResponse {
            status: ResponseStatus { success: true, message: "Disbursement queued".to_string() },
            data: Some(momo_tools::ResponseData {
                transaction: Some(momo_tools::TransactionRef { reference_id: format!("AZP-{}", req.reference.len()) }),
            }),
        })
    });
    let body = serde_json::json!({ "seller_id": 7, "amount": 50000 });
    let (status, body) = post_payout(sellers_with_account(), client, body).await;
    assert!(status.is_success());
    let outcome: PaymentOutcome = serde_json::from_str(&body).unwrap();
    assert!(outcome.status);
    assert_eq!(outcome.message, "Disbursement queued");
    assert!(outcome.reference.is_some());
    assert!(outcome.transaction_id.is_some());
}

#[actix_web::test]
async fn provider_http_failure_is_reported_with_the_status_code() {
    let mut client = MockAggregator::new();
    client.expect_disburse().returning(|_, _| {
        Err(AggregatorApiError::QueryError { status: 500, message: "Internal Server Error".to_string() })
    });
    let body = serde_json::json!({ "seller_id": 7, "amount": 50000 });
    let (status, body) = post_payout(sellers_with_account(), client, body).await;
    assert!(status.is_success());
    let outcome: PaymentOutcome = serde_json::from_str(&body).unwrap();
    assert!(!outcome.status);
    assert!(outcome.message.contains("500"), "was: {}", outcome.message);
    assert!(outcome.reference.is_some());
    assert!(outcome.transaction_id.is_none());
}

#[actix_web::test]
async fn unknown_seller_is_reported_in_the_envelope() {
    let mut sellers = MockSellers::new();
    sellers.expect_fetch_payout_account().returning(|id| {
        Err(soko_payment_engine::SellerStoreError::SellerNotFound(id))
    });
    let mut client = MockAggregator::new();
    client.expect_disburse().never();
    let body = serde_json::json!({ "seller_id": 42, "amount": 50000 });
    let (status, body) = post_payout(sellers, client, body).await;
    assert!(status.is_success());
    let outcome: PaymentOutcome = serde_json::from_str(&body).unwrap();
    assert!(!outcome.status);
    assert_eq!(outcome.message, "Exception: Seller 42 does not exist");
}

#[actix_web::test]
async fn malformed_payout_body_is_a_client_error() {
    let _ = env_logger::try_init().ok();
    let req = TestRequest::post().uri("/payouts").set_json(serde_json::json!({ "amount": 50000 })).to_request();
    let app = App::new().configure(configure_app(MockSellers::new(), MockAggregator::new()));
    let app = test::init_service(app).await;
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}
