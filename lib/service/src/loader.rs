//! JSON catalog loader
//!
//! Reads a JSON array of rows keyed by the external column names
//! (`Restaurant`, `City`, `Cuisines`, `Online_Delivery`, `Average_cost`,
//! `Rating`). Files that are not valid UTF-8 are decoded as Latin-1.

use dishx_core::{Error, RawRecord, Result};
use std::path::Path;
use tracing::debug;

pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<RawRecord>> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    let records = parse_catalog(&bytes)?;
    debug!(path = %path.display(), rows = records.len(), "catalog loaded");
    Ok(records)
}

pub fn parse_catalog(bytes: &[u8]) -> Result<Vec<RawRecord>> {
    let text = decode_text(bytes);
    serde_json::from_str(&text).map_err(|e| Error::Serialization(e.to_string()))
}

fn decode_text(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}
