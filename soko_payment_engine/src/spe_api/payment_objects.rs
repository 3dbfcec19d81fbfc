use std::fmt::Display;

use serde::{Deserialize, Serialize};
use spg_common::Tzs;

use crate::helpers::MobileNetwork;

/// How a payment channel is addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodType {
    Mno,
    Card,
    Bank,
    /// Any wire value this deployment does not recognize.
    #[serde(other)]
    Unknown,
}

/// A payment channel. Seeded at deployment; read-only at request time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMethod {
    #[serde(rename = "type")]
    pub method_type: MethodType,
    /// The numeric dispatch code configured for this channel (see [`MnoDispatchTable`]).
    pub provider_code: String,
    pub display_name: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// The structured payload of an initiate-payment call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeRequest {
    /// Payer phone number, in any format the normalizer accepts.
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub amount: Tzs,
    pub order_id: String,
}

/// The uniform result envelope of both payment initiation and payouts. Terminal: once built it
/// is returned to the caller and never mutated further.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentOutcome {
    pub status: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
}

impl PaymentOutcome {
    pub fn failure<S: Display>(message: S) -> Self {
        Self { status: false, message: message.to_string(), reference: None, transaction_id: None }
    }

    /// Folds an unexpected fault into the envelope. This is the outermost boundary: nothing
    /// past it may surface as an `Err` or a panic.
    pub fn exception<E: Display>(e: &E) -> Self {
        Self::failure(format!("Exception: {e}"))
    }

    pub fn with_reference(mut self, reference: String) -> Self {
        self.reference = Some(reference);
        self
    }
}

/// Maps the externally configured numeric method codes onto the closed set of supported
/// networks. Resolved once at startup; request handling only does lookups.
#[derive(Debug, Clone, Default)]
pub struct MnoDispatchTable {
    codes: Vec<(String, MobileNetwork)>,
}

impl MnoDispatchTable {
    pub fn new(codes: Vec<(String, MobileNetwork)>) -> Self {
        Self { codes }
    }

    pub fn resolve(&self, provider_code: &str) -> Option<MobileNetwork> {
        self.codes.iter().find(|(code, _)| code == provider_code).map(|(_, network)| *network)
    }
}
