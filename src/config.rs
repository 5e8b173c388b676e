use crate::error::TransformError;
use serde_derive::Deserialize;
use std::{fs, io, path};

pub const DEFAULT_INTERACTIONS_FILE: &str = "drug.target.interaction.tsv.gz";
pub const DEFAULT_SPECIES: &str = "Homo sapiens";

/// Paths and organism filter for one run of the transform.
///
/// Unset YAML keys fall back to the defaults below.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    pub input_dir: path::PathBuf,
    pub output_dir: path::PathBuf,
    pub species: String,
    /// Relative names resolve against `input_dir`.
    pub data_file: Option<path::PathBuf>,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            input_dir: path::PathBuf::from("data/raw"),
            output_dir: path::PathBuf::from("data/transformed/drug_central"),
            species: DEFAULT_SPECIES.to_string(),
            data_file: None,
        }
    }
}

impl TransformConfig {
    pub fn from_yaml_file(path: &path::Path) -> Result<Self, TransformError> {
        let file = fs::File::open(path).map_err(|source| TransformError::Open { path: path.to_path_buf(), source })?;
        let config = serde_yml::from_reader(io::BufReader::new(file))?;
        Ok(config)
    }

    pub fn interactions_path(&self) -> path::PathBuf {
        match &self.data_file {
            Some(data_file) => self.input_dir.join(data_file),
            None => self.input_dir.join(DEFAULT_INTERACTIONS_FILE),
        }
    }

    pub fn nodes_path(&self) -> path::PathBuf {
        self.output_dir.join("nodes.tsv")
    }

    pub fn edges_path(&self) -> path::PathBuf {
        self.output_dir.join("edges.tsv")
    }
}
