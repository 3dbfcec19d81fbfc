use std::fmt::Display;

use serde::{Deserialize, Serialize};
use soko_payment_engine::{ChargeRequest, PaymentMethod};
use spg_common::Tzs;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonResponse {
    pub success: bool,
    pub message: String,
}

impl JsonResponse {
    pub fn success<S: Display>(message: S) -> Self {
        Self { success: true, message: message.to_string() }
    }

    pub fn failure<S: Display>(message: S) -> Self {
        Self { success: false, message: message.to_string() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitiatePaymentParams {
    pub method: PaymentMethod,
    pub payload: ChargeRequest,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoutParams {
    pub seller_id: i64,
    pub amount: Tzs,
}
