//! Demand-paging simulator core library.
//!
//! Models the address translation path of a small paging system: a
//! fully-associative TLB, a single-level page table, a fixed pool of physical
//! frames with pluggable replacement, and a read-only backing store holding
//! every page's original image.
//!
//! The [`sim::Simulator`] drives a trace of 16-bit logical addresses through
//! the [`core::mmu::Mmu`] and collects per-address [`core::mmu::Resolution`]
//! records plus aggregate [`stats::SimStats`].

pub mod common;
pub mod config;
pub mod core;
pub mod report;
pub mod sim;
pub mod stats;
pub mod system;

pub use crate::common::error::{Result, SimError};
pub use crate::config::{PolicyKind, SimConfig};
pub use crate::sim::Simulator;
