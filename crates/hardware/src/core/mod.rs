pub mod memory;
pub mod mmu;

pub use self::memory::PhysicalMemory;
pub use self::mmu::Mmu;
