mod msisdn;
mod network;
mod reference;

pub use msisdn::{normalize_msisdn, COUNTRY_CALLING_CODE};
pub use network::MobileNetwork;
pub use reference::{new_payout_reference, REFERENCE_PREFIX};
