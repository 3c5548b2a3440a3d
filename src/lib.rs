//! Owner dashboard SDK for Rust.
//!
//! Signs the shop owner in against the backend, fetches the cash-book
//! transactions, and turns them into dense daily income/expense/profit
//! series with independently paged chart windows. Rendering is left to the
//! caller; everything here is plain data.
//!
//! # Quick start
//!
//! ```no_run
//! use owner_dashboard::{Chart, Direction, OwnerDashboardSdk};
//!
//! let mut sdk = OwnerDashboardSdk::builder()
//!     .base_url("https://shop.example.com/api/")
//!     .build()
//!     .unwrap();
//!
//! sdk.sign_in("owner@example.com", "secret").unwrap();
//! sdk.refresh().unwrap();
//!
//! let totals = sdk.dashboard().totals();
//! sdk.dashboard_mut().advance(Chart::DailySales, Direction::Older);
//! let page = sdk.dashboard().page(Chart::DailySales);
//! ```

pub mod aggregate;
pub mod api;
#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod labels;
pub mod models;
pub mod paginate;
pub mod session;
pub mod token_store;

pub use aggregate::{aggregate, aggregate_through, Aggregation};
pub use api::{HttpApi, OwnerApi};
#[cfg(feature = "async")]
pub use async_client::AsyncOwnerDashboardSdk;
pub use dashboard::{ChartPage, Dashboard, Snapshot};
pub use error::{DashboardError, Result};
pub use paginate::{Chart, Direction, PageCursor, SeriesPaginator};
pub use token_store::{FileTokenStore, MemoryTokenStore, TokenStore};

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;

use crate::models::{Credentials, TokenPair};

// ---------------------------------------------------------------------------
// OwnerDashboardSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`OwnerDashboardSdk`].
pub struct OwnerDashboardSdkBuilder {
    base_url: Option<String>,
    token_dir: Option<PathBuf>,
    timeout: Duration,
    page_size: usize,
}

impl Default for OwnerDashboardSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            token_dir: None,
            timeout: config::DEFAULT_TIMEOUT,
            page_size: config::DEFAULT_PAGE_SIZE,
        }
    }
}

impl OwnerDashboardSdkBuilder {
    /// Set the API root. Defaults to `$OWNER_DASHBOARD_API_URL`, then
    /// [`config::DEFAULT_API_BASE`].
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Directory for the persisted session tokens.
    ///
    /// If not set, a per-user data directory is used (e.g.
    /// `~/.local/share/owner-dashboard` on Linux).
    pub fn token_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.token_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// HTTP request timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Days per chart page. Defaults to 7.
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Build against the HTTP backend and a file token store.
    pub fn build(self) -> Result<OwnerDashboardSdk> {
        let api = HttpApi::new(self.base_url, self.timeout)?;
        let store = FileTokenStore::new(self.token_dir)?;
        OwnerDashboardSdk::with_parts(Arc::new(api), Box::new(store), self.page_size)
    }
}

// ---------------------------------------------------------------------------
// OwnerDashboardSdk
// ---------------------------------------------------------------------------

/// Main entry point: owns the API client, the token store and the dashboard state.
pub struct OwnerDashboardSdk {
    api: Arc<dyn OwnerApi>,
    store: Box<dyn TokenStore>,
    dashboard: Dashboard,
}

impl OwnerDashboardSdk {
    pub fn builder() -> OwnerDashboardSdkBuilder {
        OwnerDashboardSdkBuilder::default()
    }

    /// Assemble an SDK from explicit collaborators.
    pub fn with_parts(
        api: Arc<dyn OwnerApi>,
        store: Box<dyn TokenStore>,
        page_size: usize,
    ) -> Result<Self> {
        Ok(Self {
            api,
            store,
            dashboard: Dashboard::new(page_size)?,
        })
    }

    // -- Session -----------------------------------------------------------

    pub fn sign_in(&mut self, email: &str, password: &str) -> Result<TokenPair> {
        let credentials = Credentials::new(email, password);
        session::sign_in(self.api.as_ref(), self.store.as_mut(), &credentials)
    }

    pub fn sign_out(&mut self) -> Result<()> {
        session::sign_out(self.store.as_mut())
    }

    pub fn is_signed_in(&self) -> Result<bool> {
        session::is_signed_in(self.store.as_ref())
    }

    // -- Dashboard ---------------------------------------------------------

    /// Re-fetch transactions and rebuild the dashboard as of the local date.
    pub fn refresh(&mut self) -> Result<()> {
        self.dashboard.refresh(self.api.as_ref(), self.store.as_ref())
    }

    /// Re-fetch transactions and rebuild the dashboard as of `today`.
    pub fn refresh_at(&mut self, today: NaiveDate) -> Result<()> {
        self.dashboard
            .refresh_at(self.api.as_ref(), self.store.as_ref(), today)
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn dashboard_mut(&mut self) -> &mut Dashboard {
        &mut self.dashboard
    }

    /// Shared handle to the API client, usable without borrowing the SDK.
    pub fn api(&self) -> Arc<dyn OwnerApi> {
        Arc::clone(&self.api)
    }

    pub fn token_store(&self) -> &dyn TokenStore {
        self.store.as_ref()
    }
}

impl fmt::Display for OwnerDashboardSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let signed_in = self.is_signed_in().unwrap_or(false);
        write!(
            f,
            "OwnerDashboardSdk(signed_in={}, days={}, page_size={})",
            signed_in,
            self.dashboard.series().len(),
            self.dashboard.cursor(Chart::DailySales).page_size()
        )
    }
}
