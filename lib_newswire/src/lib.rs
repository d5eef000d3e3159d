//! # lib_newswire
//!
//! Client-side wire protocol for streaming collected news articles to the
//! ingestion server over a single long-lived Unix domain socket connection.
//!
//! The crate is organized leaf-first:
//! - [`protocol`] — the length-prefixed frame codec and the server-status
//!   interpreter. No dependencies on the rest of the crate.
//! - [`collectors`] — the capability every data-source adapter exposes, plus
//!   the concrete HTTP-backed adapters (behind the `adapters` feature).
//! - [`session`] — the driver that connects once, walks the registered
//!   collectors in order, frames and retries each payload, and emits the
//!   `NEXT`/`DONE` session-boundary tokens.

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms, unused_qualifications)]

pub mod collectors;
pub mod config;
pub mod errors;
pub mod protocol;
pub mod session;

// Re-export the types a caller needs to assemble and run a session.
pub use collectors::{Article, Collector};
pub use config::Settings;
pub use errors::{FramingError, SessionError};
pub use session::{SessionDriver, SessionReport};
