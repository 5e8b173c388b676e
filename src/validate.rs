use crate::{Edge, Node};
use lazy_static::lazy_static;
use rayon::prelude::*;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    static ref CURIE_REGEX: Regex = Regex::new(r"^[A-Za-z_]+:.+$").unwrap();
    static ref STARTS_WITH_BIOLINK_REGEX: Regex = Regex::new("^biolink:.+$").unwrap();
}

pub fn validate_nodes(nodes: &[Node]) -> Vec<String> {
    let id_column_validation_infractions: Vec<_> = nodes
        .par_iter()
        .filter_map(|n| match CURIE_REGEX.is_match(n.id.as_str()) {
            true => None,
            false => Some(format!("id column does not have a valid CURIE: {:?}", n)),
        })
        .collect();

    let category_column_validation_infractions: Vec<_> = nodes
        .par_iter()
        .filter_map(|n| match STARTS_WITH_BIOLINK_REGEX.is_match(n.category.as_str()) {
            true => None,
            false => Some(format!("category column does not start with 'biolink': {:?}", n)),
        })
        .collect();

    id_column_validation_infractions.into_iter().chain(category_column_validation_infractions).collect()
}

pub fn validate_edges(edges: &[Edge]) -> Vec<String> {
    edges
        .par_iter()
        .flat_map_iter(|e| {
            let mut infractions = vec![];
            if !CURIE_REGEX.is_match(e.subject.as_str()) {
                infractions.push(format!("subject column does not have a valid CURIE: {:?}", e));
            }
            if !STARTS_WITH_BIOLINK_REGEX.is_match(e.edge_label.as_str()) {
                infractions.push(format!("edge_label column does not start with 'biolink': {:?}", e));
            }
            if !CURIE_REGEX.is_match(e.object.as_str()) {
                infractions.push(format!("object column does not have a valid CURIE: {:?}", e));
            }
            infractions
        })
        .collect()
}

/// Edge endpoints that have no node line.
pub fn missing_edge_ids(nodes: &[Node], edges: &[Edge]) -> Vec<String> {
    let node_ids: HashSet<&str> = nodes.par_iter().map(|n| n.id.as_str()).collect();
    let mut missing: Vec<String> = edges
        .par_iter()
        .flat_map_iter(|e| [e.subject.as_str(), e.object.as_str()])
        .filter(|id| !node_ids.contains(id))
        .map(|id| id.to_string())
        .collect();
    missing.sort();
    missing.dedup();
    missing
}

#[cfg(test)]
mod test {
    use super::*;

    fn node(id: &str, category: &str) -> Node {
        Node {
            id: id.to_string(),
            name: "x".to_string(),
            category: category.to_string(),
        }
    }

    fn edge(subject: &str, edge_label: &str, object: &str) -> Edge {
        Edge {
            subject: subject.to_string(),
            edge_label: edge_label.to_string(),
            object: object.to_string(),
            relation: "RO:0002436".to_string(),
            provided_by: "drug_central".to_string(),
            comment: String::new(),
        }
    }

    #[test]
    fn nodes() {
        let nodes = vec![node("DrugCentral:1", "biolink:Drug"), node("P00001", "biolink:Gene"), node("UniProtKB:P1", "Gene")];
        let infractions = validate_nodes(&nodes);
        assert_eq!(infractions.len(), 2);
        assert!(infractions[0].starts_with("id column"));
        assert!(infractions[1].starts_with("category column"));
    }

    #[test]
    fn edges() {
        let edges = vec![
            edge("DrugCentral:1", "biolink:interacts_with", "UniProtKB:P1"),
            edge("DrugCentral:1", "interacts_with", "P1"),
        ];
        assert_eq!(validate_edges(&edges).len(), 2);
    }

    #[test]
    fn dangling_endpoints() {
        let nodes = vec![node("DrugCentral:1", "biolink:Drug"), node("UniProtKB:P1", "biolink:Gene")];
        let edges = vec![
            edge("DrugCentral:1", "biolink:interacts_with", "UniProtKB:P1"),
            edge("DrugCentral:1", "biolink:interacts_with", "UniProtKB:P2"),
            edge("DrugCentral:2", "biolink:interacts_with", "UniProtKB:P2"),
        ];
        assert_eq!(missing_edge_ids(&nodes, &edges), vec!["DrugCentral:2".to_string(), "UniProtKB:P2".to_string()]);
    }
}
