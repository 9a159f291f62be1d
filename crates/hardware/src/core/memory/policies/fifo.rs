use super::ReplacementPolicy;
use crate::common::LogicalAddr;
use crate::core::memory::Frame;

/// Evicts the frame with the oldest load. Reads never change the order.
pub struct FifoPolicy;

impl ReplacementPolicy for FifoPolicy {
    fn get_victim(&self, frames: &[Frame], _upcoming: &[LogicalAddr]) -> usize {
        let mut victim = 0;
        for (i, frame) in frames.iter().enumerate() {
            if frame.load_order() < frames[victim].load_order() {
                victim = i;
            }
        }
        victim
    }
}
