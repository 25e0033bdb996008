pub mod handlers;

mod error;
mod http;

pub use error::WebError;
pub use http::*;
