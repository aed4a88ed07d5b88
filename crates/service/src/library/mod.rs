//! Library module: three-layer architecture (domain, repository, service).
//!
//! Validation and existence checks live in the service; repositories only
//! execute statements.

pub mod domain;
pub mod errors;
pub mod validation;
pub mod repository;
pub mod service;
pub mod repo;

pub use errors::LibraryError;
pub use service::LibraryService;
