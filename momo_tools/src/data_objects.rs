use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use spg_common::Tzs;

/// Wire type for `POST /standard/v2/disbursements/`.
///
/// `transaction.id` always duplicates the top-level `reference`. The provider keys its
/// asynchronous callback on the nested id, while support tooling searches on the top-level
/// field, so both must carry the same token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisbursementRequest {
    pub payee: Payee,
    pub reference: String,
    pub pin: String,
    pub transaction: TransactionDetails,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payee {
    pub currency: String,
    pub msisdn: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionDetails {
    pub amount: Tzs,
    pub id: String,
    #[serde(rename = "type")]
    pub transaction_type: String,
}

impl TransactionDetails {
    /// Business-to-business disbursement, the only transaction type the payout flow issues.
    pub fn b2b(amount: Tzs, id: String) -> Self {
        Self { amount, id, transaction_type: "B2B".to_string() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisbursementResponse {
    pub status: ResponseStatus,
    #[serde(default)]
    pub data: Option<ResponseData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseStatus {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseData {
    #[serde(default)]
    pub transaction: Option<TransactionRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRef {
    pub reference_id: String,
}

impl DisbursementResponse {
    /// The provider-side transaction id, present only when the provider accepted the request.
    pub fn transaction_id(&self) -> Option<String> {
        if !self.status.success {
            return None;
        }
        self.data.as_ref().and_then(|d| d.transaction.as_ref()).map(|t| t.reference_id.clone())
    }
}

/// Wire type for `POST /azampay/mno/checkout`, the USSD push charge.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub account_number: String,
    pub amount: Tzs,
    pub currency: String,
    pub external_id: String,
    pub provider: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub success: bool,
    #[serde(default)]
    pub transaction_id: Option<String>,
    pub message: String,
}

/// Asynchronous disbursement notification posted back by the aggregator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisbursementCallback {
    pub reference: String,
    #[serde(default)]
    pub transaction_id: Option<String>,
    pub success: bool,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn disbursement_request_wire_shape() {
        let req = DisbursementRequest {
            payee: Payee {
                currency: "TZS".to_string(),
                msisdn: "712345678".to_string(),
                name: "Mama Ntilie Supplies".to_string(),
            },
            reference: "SPG-AbCdEfGhIjKlMnOpQr".to_string(),
            pin: "1234".to_string(),
            transaction: TransactionDetails::b2b(Tzs::from(50_000), "SPG-AbCdEfGhIjKlMnOpQr".to_string()),
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "payee": { "currency": "TZS", "msisdn": "712345678", "name": "Mama Ntilie Supplies" },
                "reference": "SPG-AbCdEfGhIjKlMnOpQr",
                "pin": "1234",
                "transaction": { "amount": 50000, "id": "SPG-AbCdEfGhIjKlMnOpQr", "type": "B2B" },
            })
        );
        assert_eq!(value["reference"], value["transaction"]["id"]);
    }

    #[test]
    fn accepted_response_exposes_transaction_id() {
        let body = r#"{
            "status": { "success": true, "message": "Disbursement queued" },
            "data": { "transaction": { "reference_id": "AZP-998877" } }
        }"#;
        let response: DisbursementResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.transaction_id().as_deref(), Some("AZP-998877"));
    }

    #[test]
    fn declined_response_has_no_transaction_id() {
        // The provider sometimes echoes a transaction block even when declining. The success
        // flag, not the payload, decides whether an id is reported.
        let body = r#"{
            "status": { "success": false, "message": "Insufficient float" },
            "data": { "transaction": { "reference_id": "AZP-000000" } }
        }"#;
        let response: DisbursementResponse = serde_json::from_str(body).unwrap();
        assert!(response.transaction_id().is_none());
    }

    #[test]
    fn response_without_data_block_deserializes() {
        let body = r#"{ "status": { "success": false, "message": "PIN rejected" } }"#;
        let response: DisbursementResponse = serde_json::from_str(body).unwrap();
        assert!(response.data.is_none());
        assert!(response.transaction_id().is_none());
    }

    #[test]
    fn checkout_request_is_camel_case() {
        let req = CheckoutRequest {
            account_number: "652345678".to_string(),
            amount: Tzs::from(12_000),
            currency: "TZS".to_string(),
            external_id: "ORD-1001".to_string(),
            provider: "Tigo".to_string(),
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "accountNumber": "652345678",
                "amount": 12000,
                "currency": "TZS",
                "externalId": "ORD-1001",
                "provider": "Tigo",
            })
        );
    }

    #[test]
    fn callback_tolerates_missing_optionals() {
        let body = r#"{ "reference": "SPG-xyz", "success": true }"#;
        let cb: DisbursementCallback = serde_json::from_str(body).unwrap();
        assert_eq!(cb.reference, "SPG-xyz");
        assert!(cb.transaction_id.is_none());
        assert!(cb.amount.is_none());
        assert!(cb.message.is_empty());
    }
}
