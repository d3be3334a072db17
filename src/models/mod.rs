//! Domain models, request shapes and view conversions
//!
//! Conversions between full records, summary views and update requests are
//! pure: they never touch the store. Nested author data inside a book view is
//! carried by value, already resolved at write time.

pub mod author;
pub mod book;
