use actix_web::{body::MessageBody, http::StatusCode, test, test::TestRequest, web, web::ServiceConfig, App};
use log::*;
use momo_tools::CheckoutResponse;
use soko_payment_engine::{
    helpers::MobileNetwork,
    token_cache::InMemoryTokenCache,
    MnoDispatchTable,
    PaymentApi,
    PaymentOutcome,
};

use super::mocks::MockAggregator;
use crate::routes::InitiatePaymentRoute;

fn configure_app(client: MockAggregator) -> impl FnOnce(&mut ServiceConfig) {
    move |cfg| {
        let tokens = InMemoryTokenCache::with_initial_token("aggregator_access_token", "tok".to_string());
        let table = MnoDispatchTable::new(vec![
            ("1".to_string(), MobileNetwork::Vodacom),
            ("2".to_string(), MobileNetwork::Tigo),
        ]);
        let api = PaymentApi::new(client, tokens, table, "TZS");
        cfg.app_data(web::Data::new(api))
            .service(InitiatePaymentRoute::<MockAggregator, InMemoryTokenCache>::new());
    }
}

async fn post_payment(client: MockAggregator, body: serde_json::Value) -> (StatusCode, String) {
    let _ = env_logger::try_init().ok();
    let req = TestRequest::post().uri("/payments").set_json(&body).to_request();
    let app = App::new().configure(configure_app(client));
    let app = test::init_service(app).await;
    let (_, res) = test::call_service(&app, req).await.into_parts();
    let status = res.status();
    let body = String::from_utf8_lossy(&res.into_body().try_into_bytes().unwrap()).into_owned();
    debug!("Response body: {body}");
    (status, body)
}

#[actix_web::test]
async fn card_payments_answer_with_a_failure_envelope() {
    let mut client = MockAggregator::new();
    client.expect_mno_checkout().never();
    let body = serde_json::json!({
        "method": { "type": "card", "provider_code": "visa", "display_name": "Card" },
        "payload": { "phone": "0712345678", "amount": 10000, "order_id": "ORD-1" },
    });
    let (status, body) = post_payment(client, body).await;
    assert!(status.is_success());
    let outcome: PaymentOutcome = serde_json::from_str(&body).unwrap();
    assert!(!outcome.status);
    assert_eq!(outcome.message, "Card payments are not configured yet.");
}

#[actix_web::test]
async fn missing_phone_fails_without_reaching_the_aggregator() {
    let mut client = MockAggregator::new();
    client.expect_mno_checkout().never();
    let body = serde_json::json!({
        "method": { "type": "mno", "provider_code": "2", "display_name": "Tigo Pesa" },
        "payload": { "amount": 10000, "order_id": "ORD-1" },
    });
    let (status, body) = post_payment(client, body).await;
    assert!(status.is_success());
    let outcome: PaymentOutcome = serde_json::from_str(&body).unwrap();
    assert!(!outcome.status);
    assert_eq!(outcome.message, "Phone number is required.");
}

#[actix_web::test]
async fn tigo_charge_is_relayed_with_the_provider_transaction_id() {
    let mut client = MockAggregator::new();
    client.expect_mno_checkout().returning(|_, _| {
        Ok(CheckoutResponse {
            success: true,
            transaction_id: Some("AZP-42".to_string()),
            message: "USSD push sent".to_string(),
        })
    });
    let body = serde_json::json!({
        "method": { "type": "mno", "provider_code": "2", "display_name": "Tigo Pesa" },
        "payload": { "phone": "0652345678", "amount": 10000, "order_id": "ORD-1" },
    });
    let (status, body) = post_payment(client, body).await;
    assert!(status.is_success());
    let outcome: PaymentOutcome = serde_json::from_str(&body).unwrap();
    assert!(outcome.status);
    assert_eq!(outcome.transaction_id.as_deref(), Some("AZP-42"));
}

#[actix_web::test]
async fn unrecognized_method_type_is_reported_in_the_envelope() {
    let body = serde_json::json!({
        "method": { "type": "crypto", "provider_code": "9", "display_name": "Bitcoin" },
        "payload": { "phone": "0712345678", "amount": 10000, "order_id": "ORD-1" },
    });
    let (status, body) = post_payment(MockAggregator::new(), body).await;
    assert!(status.is_success());
    let outcome: PaymentOutcome = serde_json::from_str(&body).unwrap();
    assert!(!outcome.status);
    assert_eq!(outcome.message, "Unknown payment type.");
}

#[actix_web::test]
async fn malformed_body_is_a_client_error() {
    let _ = env_logger::try_init().ok();
    let req = TestRequest::post().uri("/payments").set_json(serde_json::json!({ "method": {} })).to_request();
    let app = App::new().configure(configure_app(MockAggregator::new()));
    let app = test::init_service(app).await;
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}
