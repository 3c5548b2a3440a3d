pub mod auth;
pub mod series;
pub mod transaction;

pub use auth::*;
pub use series::*;
pub use transaction::*;
