use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use image::DynamicImage;

use crate::detector::SymbolDetector;
use crate::error::ScanError;
use crate::render::{RenderConfig, render};
use crate::taxonomy::{Taxonomy, filter_by_taxonomy, summarize};

/// Fixed output filenames, overwritten on re-runs.
pub const OUTPUT_EVERYTHING: &str = "output_1_everything.png";
pub const OUTPUT_FILTERED_LABELED: &str = "output_2_filtered_with_labels.png";
pub const OUTPUT_FILTERED_BOXES: &str = "output_3_filtered_boxes_only.png";

/// What one run produced, for callers that want more than console output.
#[derive(Debug)]
pub struct ScanReport {
    pub total: usize,
    pub filtered: usize,
    pub all_counts: BTreeMap<String, usize>,
    pub filtered_counts: BTreeMap<String, usize>,
    pub written: Vec<PathBuf>,
}

/// End-to-end run over one page image: detect once, summarize, filter,
/// render the three canonical variants, write them out.
pub struct ScanPipeline {
    taxonomy: Taxonomy,
    out_dir: PathBuf,
    verbose: bool,
}

impl ScanPipeline {
    pub fn new() -> Self {
        Self {
            taxonomy: Taxonomy::noteheads_and_accidentals(),
            out_dir: PathBuf::from("."),
            verbose: false,
        }
    }

    pub fn with_taxonomy(mut self, taxonomy: Taxonomy) -> Self {
        self.taxonomy = taxonomy;
        self
    }

    pub fn with_out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
        self.out_dir = out_dir.into();
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Run the pipeline. All-or-nothing up to the save stage: any earlier
    /// failure produces zero output files. A failed save aborts the run but
    /// leaves files already written on disk, since each is an independent
    /// artifact.
    pub fn run(
        &self,
        image: &DynamicImage,
        detector: &dyn SymbolDetector,
    ) -> Result<ScanReport, ScanError> {
        if self.verbose {
            println!("Running detection...");
        }
        let detections = detector.detect(image)?;
        println!("Detected {} total objects", detections.len());

        let all_counts = summarize(&detections);
        println!("\nAll detected objects:");
        print_counts(&all_counts);

        let filtered = filter_by_taxonomy(&detections, &self.taxonomy);
        let filtered_counts = summarize(&filtered);
        println!(
            "\nFiltered to {} noteheads and accidentals:",
            filtered.len()
        );
        print_counts(&filtered_counts);

        println!("\nGenerating output images...");
        let variants = [
            (OUTPUT_EVERYTHING, &detections[..], RenderConfig::default()),
            (OUTPUT_FILTERED_LABELED, &filtered[..], RenderConfig::default()),
            (
                OUTPUT_FILTERED_BOXES,
                &filtered[..],
                RenderConfig {
                    hide_labels: true,
                    hide_conf: true,
                },
            ),
        ];

        let mut written = Vec::new();
        for (name, subset, config) in variants {
            let output = render(image, subset, &config);
            let path = self.out_dir.join(name);
            output.save(&path).map_err(|source| ScanError::Save {
                path: path.clone(),
                source,
            })?;
            println!("  wrote {}", path.display());
            written.push(path);
        }

        println!("\nDone! Created {} output images.", written.len());
        Ok(ScanReport {
            total: detections.len(),
            filtered: filtered.len(),
            all_counts,
            filtered_counts,
            written,
        })
    }
}

impl Default for ScanPipeline {
    fn default() -> Self {
        Self::new()
    }
}

fn print_counts(counts: &BTreeMap<String, usize>) {
    for (category, count) in counts {
        println!("  {}: {}", category, count);
    }
}

/// Load the source image, mapping open and decode failures to the same
/// terminal error. Nothing downstream runs if this fails.
pub fn load_image(path: &Path) -> Result<DynamicImage, ScanError> {
    let reader = image::ImageReader::open(path).map_err(|e| ScanError::Load {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    reader.decode().map_err(|e| ScanError::Load {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
