use log::info;

use crate::common::LogicalAddr;
use crate::common::error::Result;
use crate::config::SimConfig;
use crate::core::memory::PhysicalMemory;
use crate::core::mmu::tlb::Tlb;
use crate::core::mmu::{Mmu, Resolution};
use crate::stats::SimStats;
use crate::system::BackingStore;

/// Drives a whole trace through the MMU.
pub struct Simulator {
    pub mmu: Mmu,
    translated: u64,
}

impl Simulator {
    pub fn new(config: &SimConfig, store: BackingStore) -> Result<Self> {
        config.validate()?;
        info!(
            "{} frames, {} TLB entries, {} replacement",
            config.frames, config.tlb_entries, config.policy
        );
        let tlb = Tlb::new(config.tlb_entries);
        let memory = PhysicalMemory::new(config.frames, config.policy);
        Ok(Self {
            mmu: Mmu::new(tlb, memory, store),
            translated: 0,
        })
    }

    /// Builds the simulator, loading the backing store named in `config`.
    pub fn from_config(config: &SimConfig) -> Result<Self> {
        config.validate()?;
        let store = BackingStore::open(&config.backing_store)?;
        Self::new(config, store)
    }

    /// Resolves one address. `upcoming` must be the rest of the trace.
    pub fn step(&mut self, addr: LogicalAddr, upcoming: &[LogicalAddr]) -> Resolution {
        self.translated += 1;
        self.mmu.resolve(addr, upcoming)
    }

    /// Resolves the trace in order, calling `sink` with each result.
    pub fn run_with<F>(&mut self, trace: &[LogicalAddr], mut sink: F)
    where
        F: FnMut(&Resolution),
    {
        for (i, &addr) in trace.iter().enumerate() {
            let res = self.step(addr, &trace[i + 1..]);
            sink(&res);
        }
    }

    pub fn run(&mut self, trace: &[LogicalAddr]) -> Vec<Resolution> {
        let mut out = Vec::with_capacity(trace.len());
        self.run_with(trace, |res| out.push(res.clone()));
        out
    }

    pub fn stats(&self) -> SimStats {
        SimStats {
            translated: self.translated,
            page_faults: self.mmu.page_table.faults(),
            page_lookups: self.mmu.page_table.lookups(),
            tlb_hits: self.mmu.tlb.hits(),
            tlb_misses: self.mmu.tlb.misses(),
        }
    }
}
