//! Port contracts for the collaborators the model engine depends on.

mod fetcher;
mod probe;
mod transport;

pub use fetcher::{PartFetchError, PartFetchResult, PartFetcher};
pub use probe::{AudioMetadata, ImageDimensions, MediaProbe, MediaProbeError, MediaProbeResult};
pub use transport::{PartTransport, PartTransportError, PartTransportResult};
