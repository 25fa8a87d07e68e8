//! API client for the resolver service.
//!
//! This module provides:
//! - [`ResolverApi`]: the HTTP client for the three resolver endpoints
//! - [`Envelope`]: the `{status, result|message}` response envelope

pub mod envelope;
pub mod resolver;

pub use envelope::Envelope;
pub use resolver::ResolverApi;
