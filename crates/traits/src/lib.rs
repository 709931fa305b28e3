pub mod metrics;
pub mod resolver;

pub use metrics::{InMemoryMetricsProvider, MetricsError, MetricsProvider};
pub use resolver::{SrcUrlToFilename, src_url_to_filename};
