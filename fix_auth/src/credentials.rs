use std::env;
use std::fmt;

use crate::error::AuthError;

pub const GDAX_KEY: &str = "GDAX_KEY";
pub const GDAX_PASSPHRASE: &str = "GDAX_PASSPHRASE";
pub const GDAX_SECRET: &str = "GDAX_SECRET";

/// Exchange-issued credentials, read from the process environment once per
/// logon attempt and passed around as a plain value so that logon
/// preparation stays pure and testable.
#[derive(Clone)]
pub struct EnvCredentials {
    /// API key, used as SenderCompID and as a prehash field.
    pub api_key: String,
    /// API passphrase, tag 554 and a prehash field.
    pub passphrase: String,
    /// Base64-encoded HMAC key.
    pub secret: String,
}

impl EnvCredentials {
    pub fn new(
        api_key: impl Into<String>,
        passphrase: impl Into<String>,
        secret: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            passphrase: passphrase.into(),
            secret: secret.into(),
        }
    }

    /// Reads `GDAX_KEY`, `GDAX_PASSPHRASE` and `GDAX_SECRET`. An unset or
    /// empty variable is a configuration error.
    pub fn from_env() -> Result<Self, AuthError> {
        Ok(Self {
            api_key: read_var(GDAX_KEY)?,
            passphrase: read_var(GDAX_PASSPHRASE)?,
            secret: read_var(GDAX_SECRET)?,
        })
    }
}

// Secret material must never reach a log record, so Debug redacts
// everything but the key identifier.
impl fmt::Debug for EnvCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvCredentials")
            .field("api_key", &self.api_key)
            .field("passphrase", &"<redacted>")
            .field("secret", &"<redacted>")
            .finish()
    }
}

fn read_var(name: &'static str) -> Result<String, AuthError> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(AuthError::MissingEnv(name)),
    }
}
