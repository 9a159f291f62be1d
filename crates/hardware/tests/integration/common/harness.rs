use memsim::common::LogicalAddr;
use memsim::common::constants::{BACKING_STORE_SIZE, PAGE_SIZE};
use memsim::core::mmu::Resolution;
use memsim::stats::SimStats;
use memsim::system::BackingStore;
use memsim::{PolicyKind, SimConfig, Simulator};

/// Byte stored at `index` of the synthetic backing store.
pub fn pattern_byte(index: usize) -> u8 {
    let page = index / PAGE_SIZE;
    let offset = index % PAGE_SIZE;
    (page.wrapping_mul(37) ^ offset.wrapping_mul(11)) as u8
}

pub fn pattern_image() -> Vec<u8> {
    (0..BACKING_STORE_SIZE).map(pattern_byte).collect()
}

pub fn pattern_store() -> BackingStore {
    BackingStore::from_bytes("pattern.bin", &pattern_image()).unwrap()
}

pub fn addrs(raw: &[u16]) -> Vec<LogicalAddr> {
    raw.iter().copied().map(LogicalAddr::new).collect()
}

/// Addresses at offset 0 of each page, for policy scenarios.
pub fn pages(pages: &[u8]) -> Vec<LogicalAddr> {
    pages.iter().map(|&p| LogicalAddr::from_parts(p, 0)).collect()
}

pub struct TestHarness {
    pub sim: Simulator,
}

impl TestHarness {
    pub fn new(frames: usize, policy: PolicyKind) -> Self {
        let config = SimConfig {
            frames,
            policy,
            ..SimConfig::default()
        };
        Self {
            sim: Simulator::new(&config, pattern_store()).unwrap(),
        }
    }

    pub fn run(&mut self, trace: &[LogicalAddr]) -> Vec<Resolution> {
        self.sim.run(trace)
    }

    pub fn stats(&self) -> SimStats {
        self.sim.stats()
    }

    /// Convenience: fault count for a fresh run of `trace`.
    pub fn faults_for(frames: usize, policy: PolicyKind, trace: &[LogicalAddr]) -> u64 {
        let mut h = Self::new(frames, policy);
        h.run(trace);
        h.stats().page_faults
    }
}
