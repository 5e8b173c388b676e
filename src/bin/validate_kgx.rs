use clap::Parser;
use drug_central_kgx::{read_edges_file, read_nodes_file, validate};
use humantime::format_duration;
use log::{debug, info};
use std::time::Instant;
use std::{error, path};

#[derive(Parser, PartialEq, Debug)]
#[clap(author, version, about, long_about = None)]
struct Options {
    #[clap(short = 'n', long, required = true)]
    nodes_file: path::PathBuf,

    #[clap(short = 'e', long, required = true)]
    edges_file: path::PathBuf,
}

fn main() -> Result<(), Box<dyn error::Error>> {
    let start = Instant::now();
    env_logger::init();

    let options = Options::parse();
    debug!("{:?}", options);

    let nodes = read_nodes_file(&options.nodes_file)?;
    let edges = read_edges_file(&options.edges_file)?;
    debug!("read {} nodes and {} edges", nodes.len(), edges.len());

    let node_infractions = validate::validate_nodes(&nodes);
    node_infractions.iter().for_each(|n| println!("{}", n));

    let edge_infractions = validate::validate_edges(&edges);
    edge_infractions.iter().for_each(|n| println!("{}", n));

    let missing_ids = validate::missing_edge_ids(&nodes, &edges);
    missing_ids.iter().for_each(|id| println!("edge endpoint has no node: {}", id));

    info!("{} infractions", node_infractions.len() + edge_infractions.len() + missing_ids.len());
    info!("Duration: {}", format_duration(start.elapsed()).to_string());
    Ok(())
}
