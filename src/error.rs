#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("Missing credentials: email and password are required")]
    MissingCredentials,

    #[error("Wrong credentials or non-owner account")]
    WrongCredentials,

    #[error("Not signed in: no access token stored")]
    NotSignedIn,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {endpoint}")]
    Status { endpoint: String, status: u16 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Date labels ({labels}) and daily series ({days}) differ in length")]
    SpanMismatch { labels: usize, days: usize },
}

impl DashboardError {
    /// Wrong credentials, a non-owner role, or empty sign-in fields.
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            DashboardError::MissingCredentials | DashboardError::WrongCredentials
        )
    }

    /// The request never produced a usable response.
    pub fn is_network_failure(&self) -> bool {
        matches!(self, DashboardError::Http(_) | DashboardError::Status { .. })
    }

    /// Message suitable for showing to the owner as-is.
    pub fn user_message(&self) -> &'static str {
        match self {
            DashboardError::MissingCredentials => "Please fill in all fields",
            DashboardError::WrongCredentials => "Wrong email or password",
            DashboardError::NotSignedIn => "Please sign in again",
            _ => "Oops! Something went wrong, try again later.",
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
