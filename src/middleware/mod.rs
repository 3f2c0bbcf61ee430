mod auth;
mod error_handler;

pub use auth::{RefreshInterceptor, USERNAME_HEADER};
pub use error_handler::check_response;
