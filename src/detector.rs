use std::fs;
use std::path::Path;

use image::DynamicImage;
use serde::Deserialize;

use crate::error::ScanError;
use crate::models::{BoundingBox, DetectedObject, DetectionSet};

/// Capability interface over the external symbol detector. One synchronous
/// call per image; retries and timeouts, if any, live behind the
/// implementation.
pub trait SymbolDetector {
    fn detect(&self, image: &DynamicImage) -> Result<DetectionSet, ScanError>;
}

/// One prediction as emitted by the hosted inference API. Boxes arrive
/// center-based and are converted to corner form here.
#[derive(Debug, Deserialize)]
struct RawPrediction {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    #[serde(rename = "class")]
    category: String,
    confidence: f32,
}

#[derive(Debug, Deserialize)]
struct RawResponse {
    predictions: Vec<RawPrediction>,
}

impl RawPrediction {
    fn to_detection(&self) -> Result<DetectedObject, ScanError> {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        let bounds = BoundingBox::new(
            self.x - half_w,
            self.y - half_h,
            self.x + half_w,
            self.y + half_h,
        )?;
        DetectedObject::new(self.category.clone(), self.confidence, bounds)
    }
}

/// Detector backed by a saved inference-API response on disk. Lets the
/// pipeline run against a remote model's output without talking to it.
#[derive(Debug)]
pub struct FileDetector {
    response: RawResponse,
}

impl FileDetector {
    pub fn from_path(path: &Path) -> Result<Self, ScanError> {
        let raw = fs::read_to_string(path).map_err(|e| {
            ScanError::Detector(format!("could not read {}: {}", path.display(), e))
        })?;
        let response: RawResponse = serde_json::from_str(&raw).map_err(|e| {
            ScanError::Detector(format!("could not parse {}: {}", path.display(), e))
        })?;
        Ok(Self { response })
    }
}

impl SymbolDetector for FileDetector {
    fn detect(&self, _image: &DynamicImage) -> Result<DetectionSet, ScanError> {
        self.response
            .predictions
            .iter()
            .map(RawPrediction::to_detection)
            .collect()
    }
}

/// Detector that always returns a preset detection set. Used as the
/// stubbed collaborator in tests.
pub struct FixedDetector {
    detections: DetectionSet,
}

impl FixedDetector {
    pub fn new(detections: DetectionSet) -> Self {
        Self { detections }
    }
}

impl SymbolDetector for FixedDetector {
    fn detect(&self, _image: &DynamicImage) -> Result<DetectionSet, ScanError> {
        Ok(self.detections.clone())
    }
}
