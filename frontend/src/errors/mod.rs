mod error;
mod error_fallback;
mod internal_server_error;
mod not_found;

pub use error::{Context, Error, ErrorKind, Result};
pub use error_fallback::ErrorFallback;
pub use internal_server_error::InternalServerError;
pub use not_found::NotFound;
