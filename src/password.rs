//! Caller-side password handling.
//!
//! [`FileCipher`](crate::FileCipher) accepts any non-empty password. The
//! minimum length is a precondition enforced here, before encryption is
//! attempted.

use core::fmt;

use thiserror::Error;
use zeroize::Zeroizing;

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_CHARS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("password must be at least {min} characters (got {actual})")]
pub struct WeakPassword {
    pub min: usize,
    pub actual: usize,
}

/// A validated password, wiped from memory on drop.
#[derive(Clone)]
pub struct Password(Zeroizing<String>);

impl Password {
    pub fn new(password: impl Into<String>) -> Result<Self, WeakPassword> {
        let password = Zeroizing::new(password.into());
        let actual = password.chars().count();
        if actual < MIN_PASSWORD_CHARS {
            return Err(WeakPassword {
                min: MIN_PASSWORD_CHARS,
                actual,
            });
        }
        Ok(Self(password))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}
