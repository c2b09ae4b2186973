use image::{DynamicImage, ImageBuffer, Rgb};
use notescan::{BoundingBox, DetectedObject};

/// Creates a white "page" with horizontal gray staff lines every 20 rows,
/// so renders have a non-uniform background to draw over.
pub fn test_page(width: u32, height: u32) -> DynamicImage {
    let img = ImageBuffer::from_fn(width, height, |_, y| {
        if y % 20 == 10 {
            Rgb([80u8, 80, 80])
        } else {
            Rgb([255u8, 255, 255])
        }
    });
    DynamicImage::ImageRgb8(img)
}

/// Builds a detection, panicking on invalid input (tests pass valid data).
pub fn det(category: &str, confidence: f32, x0: f32, y0: f32, x1: f32, y1: f32) -> DetectedObject {
    let bounds = BoundingBox::new(x0, y0, x1, y1).expect("valid bounds");
    DetectedObject::new(category, confidence, bounds).expect("valid detection")
}
