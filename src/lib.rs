pub mod detector;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod render;
pub mod taxonomy;

pub use detector::{FileDetector, FixedDetector, SymbolDetector};
pub use error::ScanError;
pub use models::{BoundingBox, DetectedObject, DetectionSet};
pub use pipeline::{
    OUTPUT_EVERYTHING, OUTPUT_FILTERED_BOXES, OUTPUT_FILTERED_LABELED, ScanPipeline, ScanReport,
    load_image,
};
pub use render::{RenderConfig, render};
pub use taxonomy::{NOTEHEAD_ACCIDENTAL_CATEGORIES, Taxonomy, filter_by_taxonomy, summarize};
