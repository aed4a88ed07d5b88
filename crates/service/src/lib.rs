//! Service layer for the library: validation and existence-gated mutations
//! on top of the `models` persistence functions.
//! - Separates business logic from data access.
//! - Repositories are traits so the workflow runs against SeaORM or an
//!   in-memory mock.

pub mod library;
