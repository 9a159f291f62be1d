//! Belady's optimal replacement.
//!
//! Needs the rest of the trace, so it is the only policy that reads
//! `upcoming`. A resident page that never appears again is evicted outright;
//! otherwise the page whose next use is furthest away goes.

use super::ReplacementPolicy;
use crate::common::LogicalAddr;
use crate::core::memory::Frame;

pub struct OptPolicy;

impl ReplacementPolicy for OptPolicy {
    fn get_victim(&self, frames: &[Frame], upcoming: &[LogicalAddr]) -> usize {
        let mut victim = 0;
        let mut furthest = 0;

        for (i, frame) in frames.iter().enumerate() {
            let Some(page) = frame.page() else {
                return i;
            };
            match upcoming.iter().position(|a| a.page_number() == page) {
                None => return i,
                Some(next_use) if next_use > furthest || i == 0 => {
                    victim = i;
                    furthest = next_use;
                }
                Some(_) => {}
            }
        }
        victim
    }
}
