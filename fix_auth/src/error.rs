use thiserror::Error;

/// Failure to assemble signing material. Any of these before a Logon is a
/// configuration problem: the host must not transmit the handshake at all.
///
/// Error text never carries decoded secret bytes.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("missing environment variable {0}")]
    MissingEnv(&'static str),

    #[error("signing secret is empty")]
    EmptySecret,

    #[error("signing secret is not valid base64")]
    BadSecret(#[from] base64::DecodeError),
}
