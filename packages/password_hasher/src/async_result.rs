//! Async hashing on the tokio blocking pool
//!
//! PBKDF2 is CPU bound, so each call runs on `spawn_blocking` and reports back
//! through a oneshot channel. Methods must be called from within a tokio
//! runtime.

use crate::comparer::{BytesComparer, ConstantTimeComparer};
use crate::{HasherError, PasswordHasher, Result};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tokio::sync::oneshot;
use zeroize::Zeroizing;

/// Pending result of an async hash or verify
pub struct AsyncPasswordResult<T> {
    receiver: oneshot::Receiver<Result<T>>,
}

impl<T> AsyncPasswordResult<T> {
    pub(crate) fn new(receiver: oneshot::Receiver<Result<T>>) -> Self {
        Self { receiver }
    }

    /// Create an already completed result
    #[must_use]
    pub fn ready(result: Result<T>) -> Self {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(result);
        Self { receiver: rx }
    }

    /// Create a result that yields `error`
    #[must_use]
    pub fn error(error: HasherError) -> Self {
        Self::ready(Err(error))
    }
}

impl<T> Future for AsyncPasswordResult<T> {
    type Output = Result<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.receiver).poll(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            Poll::Ready(Err(_)) => {
                Poll::Ready(Err(HasherError::internal("Password hashing task dropped")))
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Shared hasher whose operations resolve asynchronously
pub struct AsyncPasswordHasher<C = ConstantTimeComparer> {
    inner: Arc<PasswordHasher<C>>,
}

impl<C> Clone for AsyncPasswordHasher<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: BytesComparer + 'static> AsyncPasswordHasher<C> {
    /// Wrap a validated hasher
    #[must_use]
    pub fn new(hasher: PasswordHasher<C>) -> Self {
        Self {
            inner: Arc::new(hasher),
        }
    }

    /// Underlying synchronous hasher
    #[must_use]
    pub fn hasher(&self) -> &PasswordHasher<C> {
        &self.inner
    }

    /// Hash `password` with a fresh random salt
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    #[must_use]
    pub fn hash_password(&self, password: impl Into<String>) -> AsyncPasswordResult<String> {
        let hasher = Arc::clone(&self.inner);
        let password = Zeroizing::new(password.into());
        let (tx, rx) = oneshot::channel();

        tokio::task::spawn_blocking(move || {
            let _ = tx.send(Ok(hasher.hash_password(&password)));
        });

        AsyncPasswordResult::new(rx)
    }

    /// Check `provided_password` against a stored hash
    ///
    /// Resolves to the same outcomes as
    /// [`PasswordHasher::verify_hashed_password`].
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    #[must_use]
    pub fn verify_hashed_password(
        &self,
        hashed_password: impl Into<String>,
        provided_password: impl Into<String>,
    ) -> AsyncPasswordResult<bool> {
        let hasher = Arc::clone(&self.inner);
        let hashed_password = hashed_password.into();
        let provided_password = Zeroizing::new(provided_password.into());
        let (tx, rx) = oneshot::channel();

        tokio::task::spawn_blocking(move || {
            let _ = tx.send(hasher.verify_hashed_password(&hashed_password, &provided_password));
        });

        AsyncPasswordResult::new(rx)
    }
}

impl<C: BytesComparer + 'static> From<PasswordHasher<C>> for AsyncPasswordHasher<C> {
    fn from(hasher: PasswordHasher<C>) -> Self {
        Self::new(hasher)
    }
}
