use std::path::PathBuf;
use std::time::Duration;

/// Fallback API root when neither the builder nor the environment sets one.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api/";

/// Environment variable that overrides [`DEFAULT_API_BASE`].
pub const API_BASE_ENV: &str = "OWNER_DASHBOARD_API_URL";

pub const LOGIN_PATH: &str = "auth/login";
pub const OWNER_ACCOUNTS_PATH: &str = "transaction/owner-accounts";

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// The only role allowed to open the dashboard.
pub const OWNER_ROLE: &str = "owner";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Days shown per chart page.
pub const DEFAULT_PAGE_SIZE: usize = 7;

pub fn api_base() -> String {
    std::env::var(API_BASE_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

/// Join an endpoint path onto the API root, tolerating a missing trailing slash.
pub fn endpoint_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{}/{}", base, path)
}

pub fn default_token_dir() -> PathBuf {
    if let Some(data) = dirs::data_local_dir() {
        data.join("owner-dashboard")
    } else {
        PathBuf::from(".owner-dashboard")
    }
}
