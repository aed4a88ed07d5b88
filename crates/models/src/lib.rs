pub mod errors;
pub mod db;
pub mod detail;
pub mod author;
pub mod book;

#[cfg(test)]
mod tests;
