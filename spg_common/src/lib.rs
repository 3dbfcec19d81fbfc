mod helpers;
pub mod op;
mod secret;
mod tzs;

pub use helpers::parse_boolean_flag;
pub use secret::Secret;
pub use tzs::{Tzs, TzsConversionError, TZS_CURRENCY_CODE, TZS_CURRENCY_CODE_LOWER};
