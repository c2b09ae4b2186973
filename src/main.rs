use clap::Parser;
use std::path::PathBuf;

use notescan::{FileDetector, ScanPipeline, load_image};

#[derive(Parser)]
#[command(name = "notescan")]
#[command(about = "Annotate detected musical symbols on scanned sheet music")]
struct Cli {
    /// Path to input image file
    #[arg(value_name = "IMAGE")]
    image_path: PathBuf,

    /// Saved detector response (JSON) to annotate with
    #[arg(long, value_name = "JSON")]
    detections: PathBuf,

    /// Directory for the three output images
    #[arg(long, value_name = "DIR", default_value = ".")]
    out_dir: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    println!("Loading image: {}", args.image_path.display());
    let img = load_image(&args.image_path)?;
    println!("Image size: {}x{} pixels", img.width(), img.height());

    let detector = FileDetector::from_path(&args.detections)?;

    let pipeline = ScanPipeline::new()
        .with_out_dir(args.out_dir)
        .with_verbose(args.verbose);
    pipeline.run(&img, &detector)?;

    Ok(())
}
