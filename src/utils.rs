use crate::error::TransformError;
use itertools::Itertools;
use std::collections::HashMap;
use std::io::Write;

/// One input row keyed by header column name.
pub type Record<'a> = HashMap<&'a str, String>;

fn split_fields(line: &str) -> Vec<String> {
    line.trim().split('\t').map(|field| field.replace('"', "")).collect_vec()
}

pub fn parse_header(line: &str) -> Vec<String> {
    split_fields(line)
}

/// Zips the header against the tab-split, quote-stripped values of `line`.
///
/// A field count that differs from the header is an error; `line_number` is
/// carried into it so the offending row can be found in the source file.
pub fn parse_line<'a>(line: &str, header: &'a [String], line_number: usize) -> Result<Record<'a>, TransformError> {
    let data = split_fields(line);
    if data.len() != header.len() {
        return Err(TransformError::FieldCountMismatch {
            line: line_number,
            expected: header.len(),
            found: data.len(),
        });
    }
    Ok(header.iter().map(String::as_str).zip(data).collect())
}

/// First of `keys` present in `record` with a non-empty value.
pub fn get_item_by_priority<'r>(record: &'r Record, keys: &[&str]) -> Option<&'r str> {
    keys.iter().filter_map(|key| record.get(*key)).find(|value| !value.is_empty()).map(String::as_str)
}

pub fn write_node_edge_item<W: Write>(writer: &mut W, header: &[&str], data: &[&str]) -> Result<(), TransformError> {
    if header.len() != data.len() {
        return Err(TransformError::HeaderLengthMismatch {
            expected: header.len(),
            found: data.len(),
        });
    }
    writer.write_all(format!("{}\n", data.iter().join("\t")).as_bytes())?;
    Ok(())
}
