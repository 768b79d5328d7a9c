//! Database repository layer.
//!
//! Repositories perform all database queries, inserts, updates and deletes. They use
//! SeaORM entity models internally and return domain models, keeping the service layer
//! free of database concerns. The schedule store traits are implemented here.

pub mod course;
pub mod reflection;
pub mod submission;

#[cfg(test)]
mod test;
