//! Shared HTTP plumbing for the lookup clients.
//!
//! Both upstream services are queried the same way: build a URL from an
//! origin, a relative path and ordered query parameters, issue one GET,
//! and accept only a 200 response. Decoding the body is left to callers.

mod error;
mod request;
mod url;

pub use error::LookupError;
pub use request::{decode_json, get_body};
pub use self::url::{build_url, parse_base_url};
