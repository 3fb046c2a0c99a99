pub mod refresh;

pub use refresh::{apply_crypto_quotes, apply_security_quotes, QuoteRefresher, RefreshError};
