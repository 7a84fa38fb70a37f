pub mod color;
pub mod config;
pub mod duration;
pub mod parse_date;
pub mod process;
pub mod render;
pub mod segment;
pub mod timeline;
pub mod validate;

pub use config::Config;
pub use segment::{CareerSegment, ProcessedSegment};
pub use timeline::Timeline;
pub use validate::ValidationReport;
