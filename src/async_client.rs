//! Async wrapper around [`OwnerDashboardSdk`] for use in async runtimes (Tokio, etc.).
//!
//! Runs the blocking SDK on tokio's blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free.
//!
//! # Example
//!
//! ```no_run
//! use owner_dashboard::AsyncOwnerDashboardSdk;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let sdk = AsyncOwnerDashboardSdk::builder().build().await.unwrap();
//!     sdk.sign_in("owner@example.com", "secret").await.unwrap();
//!     sdk.refresh().await.unwrap();
//!
//!     let totals = sdk.run(|s| Ok(s.dashboard().totals())).await.unwrap();
//! }
//! ```

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{Local, NaiveDate};

use crate::config::ACCESS_TOKEN_KEY;
use crate::dashboard::Snapshot;
use crate::error::{DashboardError, Result};
use crate::models::{flatten_accounts, TokenPair};
use crate::OwnerDashboardSdk;

// ---------------------------------------------------------------------------
// AsyncOwnerDashboardSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncOwnerDashboardSdk`].
pub struct AsyncOwnerDashboardSdkBuilder {
    base_url: Option<String>,
    token_dir: Option<PathBuf>,
    timeout: Duration,
    page_size: usize,
}

impl Default for AsyncOwnerDashboardSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            token_dir: None,
            timeout: crate::config::DEFAULT_TIMEOUT,
            page_size: crate::config::DEFAULT_PAGE_SIZE,
        }
    }
}

impl AsyncOwnerDashboardSdkBuilder {
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn token_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.token_dir = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Build the async SDK on the blocking pool.
    pub async fn build(self) -> Result<AsyncOwnerDashboardSdk> {
        tokio::task::spawn_blocking(move || {
            let mut builder = OwnerDashboardSdk::builder()
                .timeout(self.timeout)
                .page_size(self.page_size);
            if let Some(url) = self.base_url {
                builder = builder.base_url(url);
            }
            if let Some(dir) = self.token_dir {
                builder = builder.token_dir(dir);
            }
            Ok(AsyncOwnerDashboardSdk::from_sdk(builder.build()?))
        })
        .await
        .map_err(|e| DashboardError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncOwnerDashboardSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`OwnerDashboardSdk`].
///
/// The SDK sits behind a [`Mutex`]. [`refresh()`](Self::refresh) does the
/// network fetch without holding the lock and only publishes its result if
/// no later refresh has started; otherwise the fetched data is dropped.
/// Dropping a pending refresh future abandons it without touching the
/// dashboard.
pub struct AsyncOwnerDashboardSdk {
    inner: Arc<Mutex<OwnerDashboardSdk>>,
    generation: Arc<AtomicU64>,
}

impl AsyncOwnerDashboardSdk {
    pub fn builder() -> AsyncOwnerDashboardSdkBuilder {
        AsyncOwnerDashboardSdkBuilder::default()
    }

    /// Wrap an already-built SDK.
    pub fn from_sdk(sdk: OwnerDashboardSdk) -> Self {
        Self {
            inner: Arc::new(Mutex::new(sdk)),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Run a sync SDK operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut OwnerDashboardSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let mut guard = sdk
                .lock()
                .map_err(|_| DashboardError::InvalidArgument("SDK lock poisoned".into()))?;
            f(&mut guard)
        })
        .await
        .map_err(|e| DashboardError::InvalidArgument(format!("Task join error: {e}")))?
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<TokenPair> {
        let email = email.to_string();
        let password = password.to_string();
        self.run(move |s| s.sign_in(&email, &password)).await
    }

    pub async fn sign_out(&self) -> Result<()> {
        self.run(|s| s.sign_out()).await
    }

    /// Refresh as of the local date. See [`refresh_at()`](Self::refresh_at).
    pub async fn refresh(&self) -> Result<bool> {
        self.refresh_at(Local::now().date_naive()).await
    }

    /// Fetch and rebuild the dashboard as of `today`.
    ///
    /// Returns `Ok(true)` when the new data was published and `Ok(false)`
    /// when it was discarded because a newer refresh started meanwhile.
    pub async fn refresh_at(&self, today: NaiveDate) -> Result<bool> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let (api, token) = self
            .run(|s| {
                let token = s
                    .token_store()
                    .get(ACCESS_TOKEN_KEY)?
                    .ok_or(DashboardError::NotSignedIn)?;
                Ok((s.api(), token))
            })
            .await?;

        let snapshot = tokio::task::spawn_blocking(move || -> Result<Snapshot> {
            let accounts = api.owner_accounts(&token)?;
            Snapshot::build(&flatten_accounts(accounts), today)
        })
        .await
        .map_err(|e| DashboardError::InvalidArgument(format!("Task join error: {e}")))??;

        let target = self.inner.clone();
        let current = self.generation.clone();
        tokio::task::spawn_blocking(move || {
            publish_if_current(&target, &current, generation, snapshot)
        })
        .await
        .map_err(|e| DashboardError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Number of refreshes started so far.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Release the SDK.
    pub async fn close(self) -> Result<()> {
        drop(self);
        Ok(())
    }
}

/// Publish `snapshot` unless a newer refresh has begun.
fn publish_if_current(
    target: &Mutex<OwnerDashboardSdk>,
    current: &AtomicU64,
    generation: u64,
    snapshot: Snapshot,
) -> Result<bool> {
    let mut guard = target
        .lock()
        .map_err(|_| DashboardError::InvalidArgument("SDK lock poisoned".into()))?;
    if current.load(Ordering::SeqCst) != generation {
        tracing::debug!(generation, "discarding superseded refresh");
        return Ok(false);
    }
    guard.dashboard_mut().publish(snapshot);
    Ok(true)
}
