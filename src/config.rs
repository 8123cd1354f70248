//! Configuration loader and schema types.
//!
//! Settings are read once at startup and handed to each command by reference.

mod load;
mod schema;

pub use load::*;
pub use schema::*;
