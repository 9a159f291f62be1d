use super::Frame;
use crate::common::LogicalAddr;
use crate::config::PolicyKind;

/// Chooses which occupied frame to evict.
///
/// Implementations are pure: they rank the frames and return an index, all
/// state changes happen in [`super::PhysicalMemory`].
pub trait ReplacementPolicy {
    fn get_victim(&self, frames: &[Frame], upcoming: &[LogicalAddr]) -> usize;
}

pub use self::fifo::FifoPolicy;
pub use self::lru::LruPolicy;
pub use self::opt::OptPolicy;

mod fifo;
mod lru;
mod opt;

impl ReplacementPolicy for PolicyKind {
    fn get_victim(&self, frames: &[Frame], upcoming: &[LogicalAddr]) -> usize {
        match self {
            PolicyKind::Fifo => FifoPolicy.get_victim(frames, upcoming),
            PolicyKind::Lru => LruPolicy.get_victim(frames, upcoming),
            PolicyKind::Opt => OptPolicy.get_victim(frames, upcoming),
        }
    }
}
