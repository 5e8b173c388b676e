use clap::Parser;
use drug_central_kgx::{drug_central, TransformConfig};
use humantime::format_duration;
use log::{debug, info};
use std::time::Instant;
use std::{error, path};

#[derive(Parser, PartialEq, Debug)]
#[clap(author, version, about, long_about = None)]
struct Options {
    /// YAML file with any of input_dir, output_dir, species, data_file
    #[clap(short = 'c', long)]
    config: Option<path::PathBuf>,

    #[clap(short = 'i', long)]
    input_dir: Option<path::PathBuf>,

    #[clap(short = 'o', long)]
    output_dir: Option<path::PathBuf>,

    #[clap(short = 's', long)]
    species: Option<String>,

    /// Overrides drug.target.interaction.tsv.gz; relative to the input dir
    #[clap(short = 'd', long)]
    data_file: Option<path::PathBuf>,
}

fn main() -> Result<(), Box<dyn error::Error>> {
    let start = Instant::now();
    env_logger::init();

    let options = Options::parse();
    debug!("{:?}", options);

    let mut config = match &options.config {
        Some(config_path) => TransformConfig::from_yaml_file(config_path)?,
        None => TransformConfig::default(),
    };
    if let Some(input_dir) = options.input_dir {
        config.input_dir = input_dir;
    }
    if let Some(output_dir) = options.output_dir {
        config.output_dir = output_dir;
    }
    if let Some(species) = options.species {
        config.species = species;
    }
    if options.data_file.is_some() {
        config.data_file = options.data_file;
    }
    debug!("{:?}", config);

    drug_central::run(&config)?;

    info!("Duration: {}", format_duration(start.elapsed()).to_string());
    Ok(())
}
