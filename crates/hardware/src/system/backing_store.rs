//! Read-only backing store.
//!
//! Holds the original image of every page, loaded once at startup from a
//! file of exactly [`BACKING_STORE_SIZE`] bytes.

use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use crate::common::constants::{BACKING_STORE_SIZE, NUM_PAGES, PAGE_SIZE};
use crate::common::error::{Result, SimError};

/// A single page image.
pub type Block = [u8; PAGE_SIZE];

pub struct BackingStore {
    blocks: Box<[Block]>,
}

impl BackingStore {
    /// Reads the backing store image from `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|e| SimError::io(path, e))?;
        let store = Self::from_bytes(path, &data)?;
        info!("loaded backing store {} ({} pages)", path.display(), NUM_PAGES);
        Ok(store)
    }

    /// Splits an in-memory image into page blocks. `origin` is only used in
    /// the error when the image has the wrong size.
    pub fn from_bytes(origin: impl Into<PathBuf>, data: &[u8]) -> Result<Self> {
        if data.len() != BACKING_STORE_SIZE {
            return Err(SimError::BackingStoreSize {
                path: origin.into(),
                len: data.len(),
            });
        }

        let blocks = data
            .chunks_exact(PAGE_SIZE)
            .map(|chunk| {
                let mut block = [0u8; PAGE_SIZE];
                block.copy_from_slice(chunk);
                block
            })
            .collect();

        Ok(Self { blocks })
    }

    #[inline]
    pub fn block(&self, page: u8) -> &Block {
        &self.blocks[page as usize]
    }

    pub fn num_blocks(&self) -> usize {
        self.blocks.len()
    }
}
