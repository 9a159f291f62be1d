/// Bits of page offset in a logical address.
pub const OFFSET_BITS: u32 = 8;

/// Bytes per page, per frame and per backing-store block.
pub const PAGE_SIZE: usize = 1 << OFFSET_BITS;

/// Number of distinct page numbers representable in a 16-bit address.
pub const NUM_PAGES: usize = 1 << (16 - OFFSET_BITS);

/// Mask selecting the offset bits of a logical address.
pub const OFFSET_MASK: u16 = (PAGE_SIZE as u16) - 1;

/// Exact size of the backing-store image.
pub const BACKING_STORE_SIZE: usize = NUM_PAGES * PAGE_SIZE;

/// Default TLB capacity.
pub const TLB_ENTRIES: usize = 16;

/// Upper bound on physical frames; one per page.
pub const MAX_FRAMES: usize = NUM_PAGES;

/// Default backing-store filename, resolved against the working directory.
pub const BACKING_STORE_FILE: &str = "BACKING_STORE.bin";
