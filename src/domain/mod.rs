//! Domain logic module containing pure graph and condition functions.
//!
//! Nothing here performs I/O; every function works on a snapshot and a
//! dependency graph handed in by the caller.

pub mod conditions;
pub mod cycles;
