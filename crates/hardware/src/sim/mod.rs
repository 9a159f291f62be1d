pub mod loader;
pub mod simulator;

pub use self::simulator::Simulator;
