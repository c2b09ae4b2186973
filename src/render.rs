use std::sync::LazyLock;

use ab_glyph::{FontRef, PxScale};
use image::{DynamicImage, Rgb, RgbImage};
use imageproc::drawing::{draw_hollow_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;

use crate::models::DetectedObject;

static FONT: LazyLock<FontRef<'static>> = LazyLock::new(|| {
    FontRef::try_from_slice(include_bytes!("../assets/DejaVuSans.ttf"))
        .expect("bundled font is valid")
});

const STROKE_COLOR: Rgb<u8> = Rgb([220, 20, 20]);
const LABEL_SCALE: f32 = 14.0;

/// Overlay verbosity for one rendered variant.
///
/// `hide_labels` wins: when set, no text is drawn and `hide_conf` is
/// irrelevant. With labels on and `hide_conf` set, the category name is
/// drawn without the numeric score.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub hide_labels: bool,
    pub hide_conf: bool,
}

/// Integer pixel rectangle already clipped to the canvas.
#[derive(Debug, Clone, Copy)]
struct PixelRect {
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
}

impl PixelRect {
    /// Clip a detection's bounds to the canvas, or None when the box lies
    /// entirely outside it. Out-of-frame boxes degrade to a partial
    /// rectangle rather than an error.
    fn clipped(det: &DetectedObject, width: u32, height: u32) -> Option<Self> {
        let b = det.bounds();
        let x0 = (b.x_min().floor() as i32).max(0);
        let y0 = (b.y_min().floor() as i32).max(0);
        let x1 = (b.x_max().ceil() as i32).min(width as i32 - 1);
        let y1 = (b.y_max().ceil() as i32).min(height as i32 - 1);
        (x0 <= x1 && y0 <= y1).then_some(Self { x0, y0, x1, y1 })
    }

    fn overlaps(&self, other: &PixelRect) -> bool {
        self.x0 <= other.x1 && other.x0 <= self.x1 && self.y0 <= other.y1 && other.y0 <= self.y1
    }
}

/// Draw boxes (and labels, per `config`) for every detection onto a copy
/// of `image`. The source image is never touched; the output has identical
/// dimensions. Placement is deterministic for a given input, so repeated
/// calls produce identical buffers.
pub fn render(image: &DynamicImage, detections: &[DetectedObject], config: &RenderConfig) -> RgbImage {
    let mut canvas = image.to_rgb8();
    let (width, height) = (canvas.width(), canvas.height());
    let mut placed_labels: Vec<PixelRect> = Vec::new();

    for det in detections {
        let Some(rect) = PixelRect::clipped(det, width, height) else {
            continue;
        };
        draw_box(&mut canvas, &rect);

        if !config.hide_labels {
            let text = if config.hide_conf {
                det.category().to_string()
            } else {
                format!("{} {:.2}", det.category(), det.confidence())
            };
            draw_label(&mut canvas, &rect, &text, &mut placed_labels);
        }
    }

    canvas
}

/// Two nested hollow rectangles give a 2px stroke that stays visible on
/// busy page backgrounds.
fn draw_box(canvas: &mut RgbImage, rect: &PixelRect) {
    let w = (rect.x1 - rect.x0 + 1) as u32;
    let h = (rect.y1 - rect.y0 + 1) as u32;
    draw_hollow_rect_mut(
        canvas,
        Rect::at(rect.x0, rect.y0).of_size(w, h),
        STROKE_COLOR,
    );
    if w > 2 && h > 2 {
        draw_hollow_rect_mut(
            canvas,
            Rect::at(rect.x0 + 1, rect.y0 + 1).of_size(w - 2, h - 2),
            STROKE_COLOR,
        );
    }
}

/// Anchor the label at the box's top-left corner: preferably in the strip
/// above the box so the symbol itself stays readable, inside the box when
/// the strip would leave the image, and nudged below any label already
/// placed there. Greedy in detection order, so placement is deterministic.
fn draw_label(
    canvas: &mut RgbImage,
    rect: &PixelRect,
    text: &str,
    placed: &mut Vec<PixelRect>,
) {
    let (width, height) = (canvas.width() as i32, canvas.height() as i32);
    let scale = PxScale::from(LABEL_SCALE);
    let (text_w, text_h) = text_size(scale, &*FONT, text);
    let (text_w, text_h) = (text_w as i32, text_h as i32);

    let x = rect.x0.clamp(0, (width - text_w).max(0));
    let mut y = rect.y0 - text_h - 2;
    if y < 0 {
        y = (rect.y0 + 2).min((height - text_h).max(0));
    }

    let mut label_rect = PixelRect {
        x0: x,
        y0: y,
        x1: x + text_w - 1,
        y1: y + text_h - 1,
    };
    while let Some(blocker) = placed.iter().find(|p| p.overlaps(&label_rect)) {
        let next_y = blocker.y1 + 1;
        if next_y + text_h > height {
            break;
        }
        label_rect.y0 = next_y;
        label_rect.y1 = next_y + text_h - 1;
    }

    draw_text_mut(
        canvas,
        STROKE_COLOR,
        label_rect.x0,
        label_rect.y0,
        scale,
        &*FONT,
        text,
    );
    placed.push(label_rect);
}
