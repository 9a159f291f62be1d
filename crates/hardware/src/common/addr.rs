use std::fmt;

use super::constants::{OFFSET_BITS, OFFSET_MASK};

/// A 16-bit logical address: high byte is the page number, low byte the offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LogicalAddr(pub u16);

impl LogicalAddr {
    #[inline(always)]
    pub fn new(addr: u16) -> Self {
        Self(addr)
    }

    #[inline(always)]
    pub fn val(&self) -> u16 {
        self.0
    }

    #[inline(always)]
    pub fn page_number(&self) -> u8 {
        (self.0 >> OFFSET_BITS) as u8
    }

    #[inline(always)]
    pub fn offset(&self) -> u8 {
        (self.0 & OFFSET_MASK) as u8
    }

    /// Rebuilds an address from its page number and offset.
    pub fn from_parts(page: u8, offset: u8) -> Self {
        Self(((page as u16) << OFFSET_BITS) | offset as u16)
    }
}

impl fmt::Display for LogicalAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
