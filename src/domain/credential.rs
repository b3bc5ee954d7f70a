use std::{fmt, str::FromStr};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{raw} is invalid format (e.g. --bittrex KEY:SECRET)")]
pub struct InvalidCredentialFormat {
    pub raw: String,
}

/// API key and secret for one exchange account.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    key: String,
    secret: String,
}

impl Credential {
    /// Parses a `key:secret` token. Exactly one `:` is allowed and neither side may
    /// be empty.
    pub fn parse(raw: &str) -> Result<Self, InvalidCredentialFormat> {
        let mut parts = raw.split(':');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(key), Some(secret), None) if !key.is_empty() && !secret.is_empty() => {
                Ok(Self {
                    key: key.to_string(),
                    secret: secret.to_string(),
                })
            }
            _ => Err(InvalidCredentialFormat {
                raw: raw.to_string(),
            }),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl FromStr for Credential {
    type Err = InvalidCredentialFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("key", &self.key)
            .field("secret", &"<redacted>")
            .finish()
    }
}
