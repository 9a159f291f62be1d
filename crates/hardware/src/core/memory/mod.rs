//! Physical memory: a fixed pool of page frames.
//!
//! Each frame carries the bookkeeping the replacement policies rank on:
//! the load sequence number (FIFO), ticks since the last read (LRU), and the
//! resident page number (OPT).

pub mod policies;

use log::debug;

use self::policies::ReplacementPolicy;
use crate::common::LogicalAddr;
use crate::common::constants::PAGE_SIZE;
use crate::config::PolicyKind;
use crate::system::backing_store::Block;

#[derive(Clone)]
pub struct Frame {
    data: Block,
    page: Option<u8>,
    load_order: u64,
    last_access_tick: u64,
}

impl Frame {
    fn empty() -> Self {
        Self {
            data: [0; PAGE_SIZE],
            page: None,
            load_order: 0,
            last_access_tick: 0,
        }
    }

    /// Page currently held, `None` until the first load.
    pub fn page(&self) -> Option<u8> {
        self.page
    }

    pub fn load_order(&self) -> u64 {
        self.load_order
    }

    pub fn last_access_tick(&self) -> u64 {
        self.last_access_tick
    }

    pub fn is_empty(&self) -> bool {
        self.page.is_none()
    }
}

pub struct PhysicalMemory {
    frames: Vec<Frame>,
    policy: PolicyKind,
    load_counter: u64,
}

impl PhysicalMemory {
    pub fn new(num_frames: usize, policy: PolicyKind) -> Self {
        // Built one by one so no two frames share bookkeeping.
        let frames = (0..num_frames).map(|_| Frame::empty()).collect();
        Self {
            frames,
            policy,
            load_counter: 0,
        }
    }

    pub fn frame(&self, index: usize) -> &Frame {
        &self.frames[index]
    }

    /// Reads a frame. Advances the clock of every frame by one tick, then
    /// marks `index` as just accessed.
    pub fn read(&mut self, index: usize) -> &Block {
        for frame in &mut self.frames {
            frame.last_access_tick = frame.last_access_tick.saturating_add(1);
        }
        let frame = &mut self.frames[index];
        frame.last_access_tick = 0;
        &frame.data
    }

    /// Loads `block` as the image of `page` and returns the frame used.
    ///
    /// Empty frames are filled left to right before the policy is asked for a
    /// victim. `upcoming` is the not-yet-resolved remainder of the trace, only
    /// consulted by [`PolicyKind::Opt`].
    pub fn install(&mut self, page: u8, block: &Block, upcoming: &[LogicalAddr]) -> usize {
        let victim = match self.frames.iter().position(Frame::is_empty) {
            Some(free) => free,
            None => self.policy.get_victim(&self.frames, upcoming),
        };

        let frame = &mut self.frames[victim];
        if let Some(old) = frame.page {
            debug!(
                "{}: evicting page {} from frame {} for page {}",
                self.policy, old, victim, page
            );
        }

        frame.data.copy_from_slice(block);
        frame.page = Some(page);
        frame.load_order = self.load_counter;
        frame.last_access_tick = 0;
        self.load_counter += 1;

        victim
    }
}
