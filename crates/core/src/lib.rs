//! Domain primitives shared by the data-access and HTTP layers.
//!
//! Nothing in here talks to the database; everything is pure and unit
//! tested in place.

pub mod error;
pub mod party;
pub mod search;
pub mod types;
