//! In-memory adapters for tests and deterministic local flows.

mod fetcher;
mod probe;
mod transport;

pub use fetcher::InMemoryPartFetcher;
pub use probe::{ProbeCall, StaticMediaProbe};
pub use transport::RecordingTransport;
