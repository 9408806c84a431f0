pub mod endpoint;
mod http;
mod services;

pub use endpoint::{Endpoint, StatusPolicy, ENDPOINTS};
pub use http::{error_message, ApiClient, PreparedRequest};
