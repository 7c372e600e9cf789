pub mod asset;
mod binding;
pub mod core;
pub mod transaction;

pub use self::core::AssetStore;
pub use transaction::LedgerTransaction;
