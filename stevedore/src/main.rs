use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use stevedore::config::StevedoreConfig;
use stevedore::io;
use stevedore::io::cli::Cli;
use stevedore::io::output::StowOutput;
use stevedore::processor::ManifestProcessor;
use stowage::io::import::import_manifest;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            StevedoreConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("Successfully parsed StevedoreConfig: {config:?}");

    let input_file_stem = args.input_file.file_stem().unwrap().to_str().unwrap();

    if !args.report_folder.exists() {
        fs::create_dir_all(&args.report_folder).unwrap_or_else(|_| {
            panic!("could not create report folder: {:?}", args.report_folder)
        });
    }

    let ext_manifest = io::read_manifest(args.input_file.as_path())?;
    let manifest = import_manifest(&ext_manifest)?;

    let mut processor = ManifestProcessor::new(manifest, config);
    let report = processor.run()?;

    let output = StowOutput {
        manifest: ext_manifest,
        report,
        config,
    };

    let report_path = args.report_folder.join(format!("report_{input_file_stem}.json"));

    io::write_report(&output, Path::new(&report_path))?;

    Ok(())
}
