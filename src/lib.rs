// File: src/lib.rs
//
// Library interface for the seqlab exercises.
// Exposes modules for integration testing and external use.

pub mod bench;
pub mod sort;
pub mod words;
