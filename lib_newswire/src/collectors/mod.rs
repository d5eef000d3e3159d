//! # Data-Source Collectors
//!
//! Every data source the process can gather articles from is wrapped in an
//! adapter implementing [`Collector`]. The session driver consumes the
//! adapters through this capability only; it never sees HTTP, API keys, or
//! upstream response shapes.
//!
//! The registry for a run is an ordered `Vec<Box<dyn Collector>>`, assembled
//! once at process start from configuration. One instance per source per run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "adapters")]
pub mod guardian;

/// A single normalized article record, as shipped to the ingestion server.
///
/// A collector's results are serialized to a JSON array of these records and
/// sent as one payload frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Headline as reported by the upstream source.
    pub title: String,
    /// Upstream section or category label, when the source provides one.
    pub section: Option<String>,
    /// Canonical URL of the article.
    pub url: String,
    /// Upstream publication timestamp, when the source provides one.
    pub published_at: Option<DateTime<Utc>>,
}

/// Capability every data-source adapter exposes to the session driver.
///
/// The contract mirrors the ingestion protocol's view of a source: a fetch
/// that reports an HTTP-like status code, and a result set that is only
/// meaningful after a successful fetch. A status outside `[200, 300)` means
/// "no results this run" and the driver skips the source; it is not an error.
pub trait Collector {
    /// Diagnostic identity used in logs and drop reports.
    fn name(&self) -> &str;

    /// Triggers the upstream fetch and returns an HTTP-like status code.
    ///
    /// Adapters translate transport failures into a non-2xx code (see
    /// [`STATUS_UNREACHABLE`]) instead of panicking or erroring, so a dead
    /// upstream degrades to a skipped source.
    fn request(&mut self) -> u16;

    /// The articles gathered by the most recent successful [`request`].
    ///
    /// Only called after `request` returned a code in `[200, 300)`.
    ///
    /// [`request`]: Collector::request
    fn results(&self) -> &[Article];
}

/// Status code adapters report when the upstream could not be reached at all
/// or returned a body that does not parse.
pub const STATUS_UNREACHABLE: u16 = 599;
