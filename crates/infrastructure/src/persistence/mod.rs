//! Persistence adapters.

mod property_repository;

pub use property_repository::FilePropertyRepository;
