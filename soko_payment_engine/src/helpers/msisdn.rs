/// Tanzania's international calling code.
pub const COUNTRY_CALLING_CODE: &str = "255";

/// Reduces a raw phone number to the bare subscriber number.
///
/// All non-digit characters (spaces, dashes, a leading `+`) are dropped first, then exactly one
/// of the following prefixes is removed, checked in order: the `255` country calling code, or a
/// single trunk `0`. A number carrying both (`255 0712...`) only loses the calling code; the
/// result is returned as-is for the caller to validate.
pub fn normalize_msisdn(raw: &str) -> String {
    let digits = raw.chars().filter(|c| c.is_ascii_digit()).collect::<String>();
    if let Some(subscriber) = digits.strip_prefix(COUNTRY_CALLING_CODE) {
        subscriber.to_string()
    } else if let Some(subscriber) = digits.strip_prefix('0') {
        subscriber.to_string()
    } else {
        digits
    }
}
