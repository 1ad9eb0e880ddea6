//! # Repositories
//!
//! Data access objects over the connection pool. Each repository owns the
//! SQL for one table and exposes typed async methods.

pub mod sale;
