pub mod advisor;
pub mod discovery;
pub mod progressive;
pub mod raster;

pub use advisor::{Advisor, AdvisorOptions, AdvisorSummary};
pub use discovery::{exclude_progressive, find_files, find_images};
pub use progressive::{PreparedImage, PreparedOutcome, ProgressivePreparer};
pub use raster::{FileMetadata, ImageCodec, RasterDecoder};
