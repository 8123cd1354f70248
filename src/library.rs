//! Library scanning: album folders and their `pls` sidecars.
//!
//! A library is a root folder laid out as `<artist>/<NNNN> - <album>/`, where
//! each album may carry a `pls` sidecar next to its audio files.

mod model;
mod scan;

pub use model::*;
pub use scan::*;

#[cfg(test)]
mod tests;
