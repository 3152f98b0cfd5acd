//! API layer: endpoint URLs, wire models, and the concurrent fetcher.
//!
//! Everything that knows about HTTP or the JSON shapes of the stats API
//! lives here. The service layer only sees [`JsonSource`] and the models.

pub mod endpoints;
pub mod fetcher;
pub mod models;

pub use endpoints::Endpoints;
pub use fetcher::{FetchOutcome, HttpFetcher, JsonSource, fetch_all};
