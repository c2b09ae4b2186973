mod common;

use common::{det, test_page};
use notescan::{RenderConfig, render};

const BOXES_ONLY: RenderConfig = RenderConfig {
    hide_labels: true,
    hide_conf: true,
};

#[test]
fn test_render_does_not_mutate_source() {
    let page = test_page(100, 100);
    let before = page.to_rgb8();
    let detections = vec![det("noteheadBlackInSpace", 0.87, 10.0, 10.0, 30.0, 30.0)];

    let _ = render(&page, &detections, &RenderConfig::default());

    assert_eq!(page.to_rgb8().as_raw(), before.as_raw());
}

#[test]
fn test_render_preserves_dimensions() {
    let page = test_page(120, 80);
    let detections = vec![det("clefG", 0.9, 5.0, 5.0, 25.0, 60.0)];
    let out = render(&page, &detections, &RenderConfig::default());
    assert_eq!((out.width(), out.height()), (120, 80));
}

#[test]
fn test_empty_set_renders_source_unchanged() {
    let page = test_page(64, 64);
    for config in [RenderConfig::default(), BOXES_ONLY] {
        let out = render(&page, &[], &config);
        assert_eq!(out.as_raw(), page.to_rgb8().as_raw());
    }
}

#[test]
fn test_render_is_deterministic() {
    let page = test_page(100, 100);
    let detections = vec![
        det("noteheadBlackInSpace", 0.87, 10.0, 10.0, 30.0, 30.0),
        det("accidentalSharp", 0.71, 12.0, 12.0, 28.0, 28.0),
    ];
    let a = render(&page, &detections, &RenderConfig::default());
    let b = render(&page, &detections, &RenderConfig::default());
    assert_eq!(a.as_raw(), b.as_raw());
}

#[test]
fn test_boxes_only_draws_within_box_footprint() {
    let page = test_page(100, 100);
    let detections = vec![det("noteheadBlackInSpace", 0.87, 10.0, 10.0, 30.0, 30.0)];
    let out = render(&page, &detections, &BOXES_ONLY);
    let source = page.to_rgb8();

    let mut changed = 0usize;
    for (x, y, pixel) in out.enumerate_pixels() {
        if pixel != source.get_pixel(x, y) {
            changed += 1;
            assert!(
                (10..=30).contains(&x) && (10..=30).contains(&y),
                "pixel ({}, {}) changed outside the box footprint",
                x,
                y
            );
        }
    }
    assert!(changed > 0, "stroke drew nothing");

    // The box interior (inside the 2px stroke) stays untouched.
    assert_eq!(out.get_pixel(20, 20), source.get_pixel(20, 20));
}

#[test]
fn test_labels_add_pixels_beyond_stroke() {
    let page = test_page(200, 200);
    let detections = vec![det("noteheadBlackInSpace", 0.87, 50.0, 50.0, 80.0, 80.0)];
    let source = page.to_rgb8();

    let diff_count = |img: &image::RgbImage| {
        img.enumerate_pixels()
            .filter(|(x, y, p)| *p != source.get_pixel(*x, *y))
            .count()
    };

    let boxes = render(&page, &detections, &BOXES_ONLY);
    let labeled = render(&page, &detections, &RenderConfig::default());
    assert!(diff_count(&labeled) > diff_count(&boxes));
}

#[test]
fn test_hide_conf_still_renders_category() {
    let page = test_page(200, 200);
    let detections = vec![det("accidentalSharp", 0.71, 50.0, 50.0, 80.0, 80.0)];
    let source = page.to_rgb8();

    let diff_count = |img: &image::RgbImage| {
        img.enumerate_pixels()
            .filter(|(x, y, p)| *p != source.get_pixel(*x, *y))
            .count()
    };

    let boxes = render(&page, &detections, &BOXES_ONLY);
    let name_only = render(
        &page,
        &detections,
        &RenderConfig {
            hide_labels: false,
            hide_conf: true,
        },
    );
    let with_conf = render(&page, &detections, &RenderConfig::default());

    // Category text is drawn without the score, and the score adds more.
    assert!(diff_count(&name_only) > diff_count(&boxes));
    assert!(diff_count(&with_conf) > diff_count(&name_only));
}

#[test]
fn test_edge_straddling_box_is_clipped() {
    let page = test_page(100, 100);
    let detections = vec![det("noteheadBlackOnLine", 0.5, 90.0, 90.0, 150.0, 150.0)];
    let out = render(&page, &detections, &BOXES_ONLY);
    let source = page.to_rgb8();

    // Drawn extent stops at the boundary; only the clipped corner changes.
    let mut changed = 0usize;
    for (x, y, pixel) in out.enumerate_pixels() {
        if pixel != source.get_pixel(x, y) {
            changed += 1;
            assert!(x >= 90 && y >= 90);
        }
    }
    assert!(changed > 0);
}

#[test]
fn test_fully_outside_box_is_skipped() {
    let page = test_page(100, 100);
    let detections = vec![det("noteheadBlackOnLine", 0.5, 200.0, 200.0, 250.0, 250.0)];
    let out = render(&page, &detections, &RenderConfig::default());
    assert_eq!(out.as_raw(), page.to_rgb8().as_raw());
}

#[test]
fn test_overlapping_labels_do_not_collide() {
    let page = test_page(300, 300);
    // Two boxes with the same top-left anchor: second label must be nudged.
    let detections = vec![
        det("noteheadBlackInSpace", 0.87, 50.0, 50.0, 90.0, 90.0),
        det("accidentalSharp", 0.71, 50.0, 50.0, 70.0, 70.0),
    ];
    let one = render(&page, &detections[..1], &RenderConfig::default());
    let both = render(&page, &detections, &RenderConfig::default());

    // The second detection must contribute pixels the first render did not
    // have, i.e. its label landed somewhere instead of being drawn over
    // the first label's glyphs.
    let extra = both
        .enumerate_pixels()
        .filter(|(x, y, p)| *p != one.get_pixel(*x, *y))
        .count();
    assert!(extra > 0);
}
