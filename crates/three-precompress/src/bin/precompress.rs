//! three.js build precompression tool
//!
//! Applies the selective inclusion rewrite to one three.js build file outside of a
//! bundler, e.g. to inspect what a configuration keeps.
//!
//! # Usage
//! ```bash
//! precompress node_modules/three/build/three.module.js --config precompress.yaml -o three.min.js
//! precompress node_modules/three/build/three.module.js --material phong --shader common
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use three_precompress::{PrecompressOptions, ThreePrecompress, plugin};

/// Command-line arguments for the precompression tool
#[derive(Parser)]
#[command(version, about = "Removes unused shader chunks from the three.js build and minifies the rest")]
struct Args {
    /// three.js build file to rewrite
    input: PathBuf,

    /// Output file (stdout when omitted)
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// JSON or YAML configuration file (`colorKeywords`, `materials`, `shaders`)
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Shader chunk to keep (repeatable)
    #[arg(long = "shader", short = 's', value_name = "NAME")]
    shaders: Vec<String>,

    /// Material to keep (repeatable)
    #[arg(long = "material", short = 'm', value_name = "NAME")]
    materials: Vec<String>,

    /// Keep the color keyword table
    #[arg(long)]
    color_keywords: bool,

    /// Fail on unknown chunk or material names instead of excluding everything
    #[arg(long)]
    strict: bool,

    /// Rewrite even if the input is not under node_modules/three/build/
    #[arg(long, short)]
    force: bool,

    /// Enable debug logging
    #[arg(long, short)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let subscriber = tracing_subscriber::fmt().with_max_level(level).with_writer(std::io::stderr).finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: failed to install logger: {e}");
    }

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut options = match &args.config {
        Some(path) => PrecompressOptions::from_file(path)?,
        None => PrecompressOptions::default(),
    };
    options.color_keywords |= args.color_keywords;
    for name in &args.shaders {
        options.shaders.insert(name.clone(), true);
    }
    for name in &args.materials {
        options.materials.insert(name.clone(), true);
    }

    let precompress = if args.strict {
        ThreePrecompress::try_new(&options)?
    } else {
        ThreePrecompress::new(&options)
    };

    if !args.force && !ThreePrecompress::is_target(&args.input) {
        return Err(format!("'{}' is not a three.js build file (use --force to rewrite anyway)", args.input.display()).into());
    }

    let code = three_precompress::read_source(&args.input)?;
    let rewritten = precompress.transform_with_report(&code);
    plugin::log_report(&args.input, code.len(), rewritten.code.len(), &rewritten.report);

    write_output(args.output.as_deref(), &rewritten.code)
}

fn write_output(output: Option<&Path>, code: &str) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => fs::write(path, code)?,
        None => print!("{code}"),
    }
    Ok(())
}
