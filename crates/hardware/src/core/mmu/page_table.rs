use log::trace;

use crate::common::constants::NUM_PAGES;

/// One page-table slot. `frame` is meaningless while `present` is clear.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageTableEntry {
    pub frame: usize,
    pub present: bool,
}

/// Single-level page table with one slot per 8-bit page number.
pub struct PageTable {
    entries: [PageTableEntry; NUM_PAGES],
    lookups: u64,
    faults: u64,
}

impl Default for PageTable {
    fn default() -> Self {
        Self::new()
    }
}

impl PageTable {
    pub fn new() -> Self {
        Self {
            entries: [PageTableEntry::default(); NUM_PAGES],
            lookups: 0,
            faults: 0,
        }
    }

    /// Returns the frame holding `page`, counting a fault when it is absent.
    pub fn lookup(&mut self, page: u8) -> Option<usize> {
        self.lookups += 1;
        let entry = self.entries[page as usize];
        if entry.present {
            trace!("page table hit: page {} -> frame {}", page, entry.frame);
            Some(entry.frame)
        } else {
            self.faults += 1;
            None
        }
    }

    /// Clears the present bit of every entry mapped to `frame`.
    pub fn invalidate(&mut self, frame: usize) {
        for entry in self.entries.iter_mut() {
            if entry.present && entry.frame == frame {
                entry.present = false;
            }
        }
    }

    pub fn update(&mut self, page: u8, frame: usize) {
        self.entries[page as usize] = PageTableEntry {
            frame,
            present: true,
        };
    }

    pub fn entry(&self, page: u8) -> PageTableEntry {
        self.entries[page as usize]
    }

    /// Number of pages currently marked present.
    pub fn resident(&self) -> usize {
        self.entries.iter().filter(|e| e.present).count()
    }

    pub fn lookups(&self) -> u64 {
        self.lookups
    }

    pub fn faults(&self) -> u64 {
        self.faults
    }
}
