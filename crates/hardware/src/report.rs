//! Text rendering of per-address results.

use std::fmt::Write;

use crate::core::mmu::Resolution;

/// Renders the frame image as uppercase hex with no separators.
pub fn frame_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        // Writing to a String cannot fail.
        let _ = write!(out, "{:02X}", b);
    }
    out
}

/// `address, value, frame, HEX` line for one resolution.
pub fn format_resolution(res: &Resolution) -> String {
    format!(
        "{}, {}, {}, {}",
        res.addr,
        res.value,
        res.frame,
        frame_hex(&res.frame_bytes)
    )
}
