use crate::error::ScanError;

/// Axis-aligned rectangle in source-image pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    x_min: f32,
    y_min: f32,
    x_max: f32,
    y_max: f32,
}

impl BoundingBox {
    /// Build a bounding box, rejecting inverted geometry and non-finite
    /// coordinates. Bad geometry is a detector contract violation and is
    /// never silently repaired here.
    pub fn new(x_min: f32, y_min: f32, x_max: f32, y_max: f32) -> Result<Self, ScanError> {
        if !(x_min.is_finite() && y_min.is_finite() && x_max.is_finite() && y_max.is_finite()) {
            return Err(ScanError::InvalidDetection(format!(
                "non-finite bounds ({x_min}, {y_min})-({x_max}, {y_max})"
            )));
        }
        if x_min > x_max || y_min > y_max {
            return Err(ScanError::InvalidDetection(format!(
                "inverted bounds ({x_min}, {y_min})-({x_max}, {y_max})"
            )));
        }
        Ok(Self {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    pub fn x_min(&self) -> f32 {
        self.x_min
    }

    pub fn y_min(&self) -> f32 {
        self.y_min
    }

    pub fn x_max(&self) -> f32 {
        self.x_max
    }

    pub fn y_max(&self) -> f32 {
        self.y_max
    }

    pub fn width(&self) -> f32 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f32 {
        self.y_max - self.y_min
    }
}

/// One recognized symbol instance. Category and confidence come from the
/// detector and are read-only downstream; no stage recomputes them.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectedObject {
    category: String,
    confidence: f32,
    bounds: BoundingBox,
}

impl DetectedObject {
    /// Construct a detection, rejecting a confidence outside [0, 1].
    pub fn new(
        category: impl Into<String>,
        confidence: f32,
        bounds: BoundingBox,
    ) -> Result<Self, ScanError> {
        if !(0.0..=1.0).contains(&confidence) {
            return Err(ScanError::InvalidDetection(format!(
                "confidence {confidence} outside [0, 1]"
            )));
        }
        Ok(Self {
            category: category.into(),
            confidence,
            bounds,
        })
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn confidence(&self) -> f32 {
        self.confidence
    }

    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }
}

/// Detections for one image, in producer emission order. Nothing here is
/// sorted by position or confidence; consumers needing an order must
/// establish it themselves.
pub type DetectionSet = Vec<DetectedObject>;
