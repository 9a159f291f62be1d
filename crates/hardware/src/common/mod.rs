//! Types and constants shared by every layer of the simulator.

pub mod addr;
pub mod constants;
pub mod error;

pub use self::addr::LogicalAddr;
