pub mod backing_store;

pub use self::backing_store::BackingStore;
