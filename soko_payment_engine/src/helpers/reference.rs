use rand::{distributions::Alphanumeric, Rng};

pub const REFERENCE_PREFIX: &str = "SPG-";
const REFERENCE_TOKEN_LEN: usize = 18;

/// Mints the unique reference attached to an outbound payout.
///
/// The reference is both the idempotency key for the disbursement and the correlation key the
/// provider echoes in its asynchronous callback, so it must never be reused across attempts.
pub fn new_payout_reference() -> String {
    let token =
        rand::thread_rng().sample_iter(&Alphanumeric).take(REFERENCE_TOKEN_LEN).map(char::from).collect::<String>();
    format!("{REFERENCE_PREFIX}{token}")
}
