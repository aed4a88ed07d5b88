
/// CRUD and join tests for the author and book tables
pub mod crud_tests;
