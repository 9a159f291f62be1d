use log::trace;
use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct TlbEntry {
    page: u8,
    frame: usize,
}

/// Fully-associative TLB with strict FIFO replacement.
///
/// Entries are kept oldest-first. A hit never reorders the queue.
pub struct Tlb {
    entries: VecDeque<TlbEntry>,
    size: usize,
    hits: u64,
    misses: u64,
}

impl Tlb {
    pub fn new(size: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(size),
            size,
            hits: 0,
            misses: 0,
        }
    }

    /// Returns the cached frame for `page` and records a hit or a miss.
    pub fn lookup(&mut self, page: u8) -> Option<usize> {
        match self.entries.iter().find(|e| e.page == page) {
            Some(entry) => {
                self.hits += 1;
                trace!("TLB hit: page {} -> frame {}", page, entry.frame);
                Some(entry.frame)
            }
            None => {
                self.misses += 1;
                trace!("TLB miss: page {}", page);
                None
            }
        }
    }

    /// Inserts `page -> frame` as the newest entry, evicting the oldest when
    /// full. An existing entry for `page` is dropped first so keys stay unique.
    pub fn update(&mut self, page: u8, frame: usize) {
        if let Some(pos) = self.entries.iter().position(|e| e.page == page) {
            self.entries.remove(pos);
        }
        if self.entries.len() == self.size {
            self.entries.pop_front();
        }
        self.entries.push_back(TlbEntry { page, frame });
    }

    /// Drops every entry pointing at `frame`.
    pub fn invalidate_frame(&mut self, frame: usize) {
        self.entries.retain(|e| e.frame != frame);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}
