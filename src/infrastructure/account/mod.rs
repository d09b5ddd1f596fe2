//! Account infrastructure module

mod service;

pub use service::ProvisionerService;
