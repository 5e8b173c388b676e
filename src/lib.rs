extern crate env_logger;
extern crate log;

use serde_derive::Deserialize;
use std::{fs, io, path};

pub mod config;
pub mod drug_central;
pub mod error;
pub mod utils;
pub mod validate;

pub use config::TransformConfig;
pub use error::TransformError;

pub const NODE_HEADER: [&str; 3] = ["id", "name", "category"];
pub const EDGE_HEADER: [&str; 6] = ["subject", "edge_label", "object", "relation", "provided_by", "comment"];

#[derive(Clone, Debug, PartialEq, Eq, Default, Deserialize, Ord, PartialOrd)]
pub struct Node {
    pub id: String,
    pub name: String,
    pub category: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Default, Deserialize, Ord, PartialOrd)]
pub struct Edge {
    pub subject: String,
    pub edge_label: String,
    pub object: String,
    pub relation: String,
    pub provided_by: String,
    pub comment: String,
}

fn tsv_reader(path: &path::Path) -> Result<csv::Reader<io::BufReader<fs::File>>, TransformError> {
    let file = fs::File::open(path).map_err(|source| TransformError::Open { path: path.to_path_buf(), source })?;
    let reader = io::BufReader::with_capacity(2_usize.pow(14), file);
    Ok(csv::ReaderBuilder::new().has_headers(true).delimiter(b'\t').quoting(false).from_reader(reader))
}

pub fn read_edges_file(edges_path: &path::Path) -> Result<Vec<Edge>, TransformError> {
    let mut rdr = tsv_reader(edges_path)?;
    let mut edges = vec![];
    for result in rdr.deserialize() {
        let record: Edge = result?;
        edges.push(record);
    }
    Ok(edges)
}

pub fn read_nodes_file(nodes_path: &path::Path) -> Result<Vec<Node>, TransformError> {
    let mut rdr = tsv_reader(nodes_path)?;
    let mut nodes = vec![];
    for result in rdr.deserialize() {
        let record: Node = result?;
        nodes.push(record);
    }
    Ok(nodes)
}
