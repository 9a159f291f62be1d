use super::ReplacementPolicy;
use crate::common::LogicalAddr;
use crate::core::memory::Frame;

/// Evicts the frame with the most ticks since its last read.
pub struct LruPolicy;

impl ReplacementPolicy for LruPolicy {
    fn get_victim(&self, frames: &[Frame], _upcoming: &[LogicalAddr]) -> usize {
        let mut victim = 0;
        for (i, frame) in frames.iter().enumerate() {
            if frame.last_access_tick() > frames[victim].last_access_tick() {
                victim = i;
            }
        }
        victim
    }
}
