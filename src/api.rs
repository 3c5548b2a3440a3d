//! HTTP access to the dashboard backend.
//!
//! [`OwnerApi`] is the seam the session and dashboard code talk to;
//! [`HttpApi`] implements it over a blocking reqwest client.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;

use crate::config;
use crate::error::{DashboardError, Result};
use crate::models::{Credentials, LoginResponse, OwnerAccount};

/// Backend calls the dashboard depends on.
pub trait OwnerApi: Send + Sync {
    /// `POST auth/login`. A non-success status is [`DashboardError::WrongCredentials`].
    fn login(&self, credentials: &Credentials) -> Result<LoginResponse>;

    /// `GET transaction/owner-accounts` with bearer authorization.
    fn owner_accounts(&self, access_token: &str) -> Result<Vec<OwnerAccount>>;
}

// ---------------------------------------------------------------------------
// HttpApi
// ---------------------------------------------------------------------------

pub struct HttpApi {
    /// API root that endpoint paths are joined onto.
    pub base_url: String,
    client: Client,
}

impl HttpApi {
    /// Create a client against `base_url`, or the configured default when `None`.
    pub fn new(base_url: Option<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self {
            base_url: base_url.unwrap_or_else(config::api_base),
            client,
        })
    }

    pub fn url(&self, path: &str) -> String {
        config::endpoint_url(&self.base_url, path)
    }
}

impl OwnerApi for HttpApi {
    fn login(&self, credentials: &Credentials) -> Result<LoginResponse> {
        let url = self.url(config::LOGIN_PATH);
        tracing::debug!(%url, "sending login request");

        let resp = self.client.post(&url).json(credentials).send()?;
        let status = resp.status();
        if status != StatusCode::OK {
            tracing::info!(status = status.as_u16(), "login rejected");
            return Err(DashboardError::WrongCredentials);
        }
        Ok(resp.json()?)
    }

    fn owner_accounts(&self, access_token: &str) -> Result<Vec<OwnerAccount>> {
        let url = self.url(config::OWNER_ACCOUNTS_PATH);
        tracing::debug!(%url, "fetching owner accounts");

        let resp = self.client.get(&url).bearer_auth(access_token).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(DashboardError::Status {
                endpoint: config::OWNER_ACCOUNTS_PATH.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(resp.json()?)
    }
}
