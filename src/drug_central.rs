//! Drug -> gene interactions from the DrugCentral `drug.target.interaction.tsv.gz` dump.

use crate::config::TransformConfig;
use crate::error::TransformError;
use crate::utils::{get_item_by_priority, parse_header, parse_line, write_node_edge_item, Record};
use crate::{EDGE_HEADER, NODE_HEADER};
use flate2::read::GzDecoder;
use log::{debug, info, trace};
use std::fs;
use std::io::{BufRead, BufReader, BufWriter, Write};

pub const SOURCE_NAME: &str = "drug_central";

pub const DRUG_CURIE_PREFIX: &str = "DrugCentral:";
pub const GENE_CURIE_PREFIX: &str = "UniProtKB:";
pub const DRUG_NODE_TYPE: &str = "biolink:Drug";
pub const GENE_NODE_TYPE: &str = "biolink:Gene";
pub const DRUG_GENE_EDGE_LABEL: &str = "biolink:interacts_with";
// molecularly interacts with
pub const DRUG_GENE_EDGE_RELATION: &str = "RO:0002436";

const GENE_ID_KEYS: [&str; 1] = ["ACCESSION"];
const DRUG_ID_KEYS: [&str; 1] = ["STRUCT_ID"];

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct TransformSummary {
    pub rows: usize,
    pub other_species: usize,
    pub no_target: usize,
    pub drug_nodes: usize,
    pub gene_nodes: usize,
    pub edges: usize,
}

/// Reads the gzipped interactions file named by `config` and writes
/// `nodes.tsv`/`edges.tsv` into its output directory.
///
/// Any error aborts the run; whatever was already written should be discarded.
pub fn run(config: &TransformConfig) -> Result<(), TransformError> {
    let interactions_path = config.interactions_path();
    let nodes_path = config.nodes_path();
    let edges_path = config.edges_path();

    fs::create_dir_all(&config.output_dir).map_err(|source| TransformError::Create {
        path: config.output_dir.clone(),
        source,
    })?;

    info!("reading {:?}", interactions_path);
    let interactions = fs::File::open(&interactions_path).map_err(|source| TransformError::Open {
        path: interactions_path.clone(),
        source,
    })?;
    let nodes_file = fs::File::create(&nodes_path).map_err(|source| TransformError::Create {
        path: nodes_path.clone(),
        source,
    })?;
    let edges_file = fs::File::create(&edges_path).map_err(|source| TransformError::Create {
        path: edges_path.clone(),
        source,
    })?;
    let mut node_writer = BufWriter::new(nodes_file);
    let mut edge_writer = BufWriter::new(edges_file);

    let reader = BufReader::new(GzDecoder::new(interactions));
    let summary = transform(reader, &mut node_writer, &mut edge_writer, config.species.as_str())?;

    node_writer.flush()?;
    edge_writer.flush()?;

    info!("wrote {:?} and {:?}", nodes_path, edges_path);
    info!("{:?}", summary);
    Ok(())
}

/// Streams tab-separated interaction rows from `reader`, keeping rows whose
/// `ORGANISM` equals `species`.
///
/// Both outputs get their header line before the first row is read, so an
/// empty stream leaves header-only outputs.
pub fn transform<R: BufRead, N: Write, E: Write>(reader: R, node_writer: &mut N, edge_writer: &mut E, species: &str) -> Result<TransformSummary, TransformError> {
    write_node_edge_item(node_writer, &NODE_HEADER, &NODE_HEADER)?;
    write_node_edge_item(edge_writer, &EDGE_HEADER, &EDGE_HEADER)?;

    let mut lines = reader.lines();
    let header = parse_header(lines.next().transpose()?.unwrap_or_default().as_str());
    debug!("header: {:?}", header);

    let mut summary = TransformSummary::default();
    for (idx, line) in lines.enumerate() {
        // header is line 1
        let line_number = idx + 2;
        let line = line?;
        let record = parse_line(line.as_str(), &header, line_number)?;
        summary.rows += 1;

        if record.get("ORGANISM").map(String::as_str) != Some(species) {
            summary.other_species += 1;
            continue;
        }

        // rows without an accession only carry drug info, not a target
        let gene_ids = match get_item_by_priority(&record, &GENE_ID_KEYS) {
            Some(accessions) => accessions.split('|'),
            None => {
                trace!("line {}: no target, skipping", line_number);
                summary.no_target += 1;
                continue;
            }
        };

        let struct_id = get_item_by_priority(&record, &DRUG_ID_KEYS).ok_or_else(|| TransformError::ItemNotFound {
            line: line_number,
            keys: DRUG_ID_KEYS.iter().map(|k| k.to_string()).collect(),
        })?;
        let drug_id = format!("{}{}", DRUG_CURIE_PREFIX, struct_id);

        write_node_edge_item(node_writer, &NODE_HEADER, &[drug_id.as_str(), field(&record, "DRUG_NAME", line_number)?, DRUG_NODE_TYPE])?;
        summary.drug_nodes += 1;

        let gene_name = field(&record, "GENE", line_number)?;
        let comment = field(&record, "ACT_COMMENT", line_number)?;
        for gene_id in gene_ids {
            let gene_id = format!("{}{}", GENE_CURIE_PREFIX, gene_id);
            write_node_edge_item(node_writer, &NODE_HEADER, &[gene_id.as_str(), gene_name, GENE_NODE_TYPE])?;
            summary.gene_nodes += 1;

            write_node_edge_item(
                edge_writer,
                &EDGE_HEADER,
                &[drug_id.as_str(), DRUG_GENE_EDGE_LABEL, gene_id.as_str(), DRUG_GENE_EDGE_RELATION, SOURCE_NAME, comment],
            )?;
            summary.edges += 1;
        }
    }

    debug!("skipped {} rows for species and {} rows without a target", summary.other_species, summary.no_target);
    Ok(summary)
}

fn field<'r>(record: &'r Record, name: &str, line: usize) -> Result<&'r str, TransformError> {
    record.get(name).map(String::as_str).ok_or_else(|| TransformError::MissingField { line, field: name.to_string() })
}

#[cfg(test)]
mod test {
    use super::*;

    const HEADER: &str = "STRUCT_ID\tDRUG_NAME\tGENE\tACCESSION\tORGANISM\tACT_COMMENT\n";

    fn run_str(input: &str, species: &str) -> Result<(String, String, TransformSummary), TransformError> {
        let mut nodes = vec![];
        let mut edges = vec![];
        let summary = transform(input.as_bytes(), &mut nodes, &mut edges, species)?;
        Ok((String::from_utf8(nodes).unwrap(), String::from_utf8(edges).unwrap(), summary))
    }

    #[test]
    fn single_target() {
        let input = format!("{}99\tFoo\tBAR\tP00001\tHomo sapiens\tinhibits\n", HEADER);
        let (nodes, edges, summary) = run_str(input.as_str(), "Homo sapiens").unwrap();
        assert_eq!(nodes, "id\tname\tcategory\nDrugCentral:99\tFoo\tbiolink:Drug\nUniProtKB:P00001\tBAR\tbiolink:Gene\n");
        assert_eq!(
            edges,
            "subject\tedge_label\tobject\trelation\tprovided_by\tcomment\nDrugCentral:99\tbiolink:interacts_with\tUniProtKB:P00001\tRO:0002436\tdrug_central\tinhibits\n"
        );
        assert_eq!(summary.edges, 1);
    }

    #[test]
    fn other_species_and_missing_target_are_skipped() {
        let input = format!(
            "{}1\tA\tGA\tP1\tRattus norvegicus\tbinds\n2\tB\t\t\tHomo sapiens\tbinds\n3\tC\tGC\tP3\thomo sapiens\tbinds\n",
            HEADER
        );
        let (nodes, edges, summary) = run_str(input.as_str(), "Homo sapiens").unwrap();
        assert_eq!(nodes, "id\tname\tcategory\n");
        assert_eq!(edges, "subject\tedge_label\tobject\trelation\tprovided_by\tcomment\n");
        assert_eq!(summary.rows, 3);
        assert_eq!(summary.other_species, 2);
        assert_eq!(summary.no_target, 1);
    }

    #[test]
    fn missing_struct_id_is_fatal() {
        let input = format!("{}A\tGA\tP1\tHomo sapiens\tx\n", "DRUG_NAME\tGENE\tACCESSION\tORGANISM\tACT_COMMENT\n");
        match run_str(input.as_str(), "Homo sapiens") {
            Err(TransformError::ItemNotFound { line, keys }) => {
                assert_eq!(line, 2);
                assert_eq!(keys, vec!["STRUCT_ID".to_string()]);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn ragged_row_is_fatal() {
        let input = format!("{}1\tA\tGA\tP1\tHomo sapiens\n", HEADER);
        assert!(matches!(
            run_str(input.as_str(), "Homo sapiens"),
            Err(TransformError::FieldCountMismatch { line: 2, expected: 6, found: 5 })
        ));
    }

    #[test]
    fn empty_input_writes_headers_only() {
        let (nodes, edges, summary) = run_str("", "Homo sapiens").unwrap();
        assert_eq!(nodes, "id\tname\tcategory\n");
        assert_eq!(edges, "subject\tedge_label\tobject\trelation\tprovided_by\tcomment\n");
        assert_eq!(summary, TransformSummary::default());
    }

    #[test]
    fn header_without_accession_column_skips_rows() {
        let input = "STRUCT_ID\tDRUG_NAME\tGENE\tORGANISM\tACT_COMMENT\n1\tA\tGA\tHomo sapiens\tbinds\n2\tB\tGB\tHomo sapiens\tbinds\n";
        let (nodes, edges, summary) = run_str(input, "Homo sapiens").unwrap();
        assert_eq!(nodes, "id\tname\tcategory\n");
        assert_eq!(edges, "subject\tedge_label\tobject\trelation\tprovided_by\tcomment\n");
        assert_eq!(summary.rows, 2);
        assert_eq!(summary.no_target, 2);
    }

    #[test]
    fn row_after_no_target_row_is_emitted() {
        let input = format!("{}1\tA\tGA\t\tHomo sapiens\tbinds\n2\tB\tGB\tP2\tHomo sapiens\tblocks\n", HEADER);
        let (nodes, edges, summary) = run_str(input.as_str(), "Homo sapiens").unwrap();
        assert_eq!(nodes, "id\tname\tcategory\nDrugCentral:2\tB\tbiolink:Drug\nUniProtKB:P2\tGB\tbiolink:Gene\n");
        assert_eq!(
            edges,
            "subject\tedge_label\tobject\trelation\tprovided_by\tcomment\nDrugCentral:2\tbiolink:interacts_with\tUniProtKB:P2\tRO:0002436\tdrug_central\tblocks\n"
        );
        assert_eq!((summary.no_target, summary.edges), (1, 1));
    }
}
