//! Address translation.
//!
//! [`Mmu::resolve`] walks one logical address through the TLB, then the page
//! table, then the backing store on a fault, refilling each level on the way
//! back. The frame is always read through [`PhysicalMemory::read`] so every
//! resolution advances the LRU clock exactly once.

pub mod page_table;
pub mod tlb;

use log::debug;

use self::page_table::PageTable;
use self::tlb::Tlb;
use crate::common::LogicalAddr;
use crate::core::memory::PhysicalMemory;
use crate::system::BackingStore;
use crate::system::backing_store::Block;

/// Where a translation was satisfied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    TlbHit,
    PageTableHit,
    PageFault,
}

/// Outcome of resolving a single logical address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub addr: LogicalAddr,
    /// Byte at the offset, read as two's complement.
    pub value: i8,
    pub frame: usize,
    pub frame_bytes: Block,
    pub source: Source,
}

pub struct Mmu {
    pub tlb: Tlb,
    pub page_table: PageTable,
    pub memory: PhysicalMemory,
    store: BackingStore,
}

impl Mmu {
    pub fn new(tlb: Tlb, memory: PhysicalMemory, store: BackingStore) -> Self {
        Self {
            tlb,
            page_table: PageTable::new(),
            memory,
            store,
        }
    }

    /// Translates `addr`. `upcoming` is the part of the trace after `addr`,
    /// used for lookahead when the replacement policy needs it.
    pub fn resolve(&mut self, addr: LogicalAddr, upcoming: &[LogicalAddr]) -> Resolution {
        let page = addr.page_number();

        let (frame, source) = if let Some(frame) = self.tlb.lookup(page) {
            (frame, Source::TlbHit)
        } else if let Some(frame) = self.page_table.lookup(page) {
            self.tlb.update(page, frame);
            (frame, Source::PageTableHit)
        } else {
            (self.handle_fault(page, upcoming), Source::PageFault)
        };

        let bytes = self.memory.read(frame);
        Resolution {
            addr,
            value: bytes[addr.offset() as usize] as i8,
            frame,
            frame_bytes: *bytes,
            source,
        }
    }

    fn handle_fault(&mut self, page: u8, upcoming: &[LogicalAddr]) -> usize {
        let block = self.store.block(page);
        let frame = self.memory.install(page, block, upcoming);

        // Whatever page owned this frame before is gone.
        self.page_table.invalidate(frame);
        self.tlb.invalidate_frame(frame);

        self.page_table.update(page, frame);
        self.tlb.update(page, frame);
        debug!("page fault: page {} loaded into frame {}", page, frame);
        frame
    }
}
