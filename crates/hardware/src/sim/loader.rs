use log::info;
use std::fs;
use std::path::Path;

use crate::common::LogicalAddr;
use crate::common::error::{Result, SimError};

/// Reads a reference file: one decimal address per line.
pub fn load_trace(path: impl AsRef<Path>) -> Result<Vec<LogicalAddr>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| SimError::io(path, e))?;
    let trace = parse_trace(&text)?;
    info!("loaded {} addresses from {}", trace.len(), path.display());
    Ok(trace)
}

/// Parses reference-file text. Blank lines are skipped; anything else must
/// be an integer in `0..=65535`.
pub fn parse_trace(text: &str) -> Result<Vec<LogicalAddr>> {
    let mut trace = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let token = line.trim();
        if token.is_empty() {
            continue;
        }
        let addr = token
            .parse::<u16>()
            .map_err(|_| SimError::InvalidAddress {
                line: i + 1,
                text: token.to_string(),
            })?;
        trace.push(LogicalAddr::new(addr));
    }
    Ok(trace)
}
