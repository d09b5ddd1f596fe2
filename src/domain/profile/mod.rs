//! Profile domain

mod entity;
mod repository;

pub use entity::Profile;
pub use repository::ProfileRepository;
