//! Async wrappers.
//!
//! Key derivation is deliberately slow, so running it on an async worker
//! thread stalls the executor. These helpers move each operation onto the
//! blocking pool and await it as a single suspend point.

use std::sync::Arc;

use thiserror::Error;
use tokio::task::{self, JoinError};
use zeroize::Zeroizing;

use crate::engine::{Container, FileCipher};
use crate::error::{OpenError, SealError};
use crate::kdf::KeyDerivation;
use crate::password::Password;
use crate::rng::RandomSource;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error(transparent)]
    Seal(#[from] SealError),

    #[error(transparent)]
    Open(#[from] OpenError),

    #[error("cipher task did not complete: {0}")]
    Join(#[from] JoinError),
}

/// Encrypt on the blocking pool. Dropping the future does not stop the work.
pub async fn encrypt<K, R>(
    cipher: Arc<FileCipher<K, R>>,
    plaintext: Vec<u8>,
    password: Password,
) -> Result<Container, TaskError>
where
    K: KeyDerivation + Send + Sync + 'static,
    R: RandomSource + Send + Sync + 'static,
{
    let container =
        task::spawn_blocking(move || cipher.encrypt(&plaintext, password.as_str())).await??;
    Ok(container)
}

/// Decrypt on the blocking pool.
///
/// Takes a plain string: the length rule applies to new passwords only.
pub async fn decrypt<K, R>(
    cipher: Arc<FileCipher<K, R>>,
    container: Vec<u8>,
    password: Zeroizing<String>,
) -> Result<Vec<u8>, TaskError>
where
    K: KeyDerivation + Send + Sync + 'static,
    R: RandomSource + Send + Sync + 'static,
{
    let plaintext = task::spawn_blocking(move || cipher.decrypt(&container, &password)).await??;
    Ok(plaintext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kdf::Pbkdf2Sha256;
    use crate::rng::OsRandom;

    fn cipher() -> Arc<FileCipher<Pbkdf2Sha256, OsRandom>> {
        Arc::new(FileCipher::with_parts(Pbkdf2Sha256::with_iterations(32), OsRandom))
    }

    #[tokio::test]
    async fn roundtrip_on_blocking_pool() {
        let cipher = cipher();
        let password = Password::new("correcthorsebattery").unwrap();
        let container = encrypt(cipher.clone(), b"hello world".to_vec(), password)
            .await
            .unwrap();

        let plaintext = decrypt(
            cipher,
            container.into_vec(),
            "correcthorsebattery".to_string().into(),
        )
        .await
        .unwrap();
        assert_eq!(plaintext, b"hello world");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn concurrent_calls_are_independent() {
        let cipher = cipher();
        let mut handles = Vec::new();
        for i in 0..8u8 {
            let cipher = cipher.clone();
            handles.push(tokio::spawn(async move {
                let password = Password::new(format!("password-{i}")).unwrap();
                let ct = encrypt(cipher.clone(), vec![i; 64], password).await.unwrap();
                let pt = decrypt(cipher, ct.into_vec(), format!("password-{i}").into())
                    .await
                    .unwrap();
                (i, pt)
            }));
        }
        for h in handles {
            let (i, pt) = h.await.unwrap();
            assert_eq!(pt, vec![i; 64]);
        }
    }

    #[tokio::test]
    async fn wrong_password_passes_through() {
        let cipher = cipher();
        let container = encrypt(
            cipher.clone(),
            b"data".to_vec(),
            Password::new("password-one").unwrap(),
        )
        .await
        .unwrap();

        let err = decrypt(cipher, container.into_vec(), "password-two".to_string().into())
            .await
            .unwrap_err();
        assert!(matches!(err, TaskError::Open(OpenError::AuthenticationFailed)));
    }
}
