//! Infrastructure module containing concrete implementations

pub mod account;
pub mod audit;
pub mod identity;
pub mod invitation;
pub mod logging;
pub mod profile;
pub mod storage;
pub mod team;

pub use logging::init_logging;
