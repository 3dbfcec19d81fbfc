use actix_web::{body::MessageBody, test, test::TestRequest, App};
use log::*;

use crate::routes::disbursement_callback;

async fn post_callback(body: serde_json::Value) -> (bool, String) {
    let _ = env_logger::try_init().ok();
    let req = TestRequest::post().uri("/callback/disbursement").set_json(&body).to_request();
    let app = test::init_service(App::new().service(disbursement_callback)).await;
    let (_, res) = test::call_service(&app, req).await.into_parts();
    let ok = res.status().is_success();
    let body = String::from_utf8_lossy(&res.into_body().try_into_bytes().unwrap()).into_owned();
    debug!("Response body: {body}");
    (ok, body)
}

#[actix_web::test]
async fn successful_disbursement_notice_is_acknowledged() {
    let body = serde_json::json!({
        "reference": "SPG-AbCdEfGhIjKlMnOpQr",
        "transactionId": "AZP-998877",
        "success": true,
        "amount": "50000.00",
    });
    let (ok, body) = post_callback(body).await;
    assert!(ok);
    assert!(body.contains("Callback received"), "was: {body}");
}

#[actix_web::test]
async fn failed_disbursement_notice_is_still_acknowledged() {
    // The provider keeps redelivering unacknowledged callbacks, so failures are ACKed too.
    let body = serde_json::json!({
        "reference": "SPG-AbCdEfGhIjKlMnOpQr",
        "success": false,
        "message": "Payee wallet closed",
    });
    let (ok, _) = post_callback(body).await;
    assert!(ok);
}
