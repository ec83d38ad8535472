//! The tools module provides the helpers that sit around the codec.
//!
//! The tools are:
//! - cli: Command line interface and options for huffpack.
//! - data_io: Whole-file reading and writing.
//! - freq_count: Frequency count of the input bytes.
//! - report: Round-trip verification and compression ratio.
//!
pub mod cli;
pub mod data_io;
pub mod freq_count;
pub mod report;
