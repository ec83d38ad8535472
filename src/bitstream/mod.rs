//! The bitstream module is the bit-level I/O for huffpack.
//!
//! - bitpacker: packs variable length codewords into bytes, MSB first, and reports how many
//!   padding bits the final byte needed.
//! - bitreader: reads the bits back out of an in-memory stream, stopping short of the padding.
//!
//! Both work purely in memory. Files are read and written whole by the caller.
//!
pub mod bitpacker;
pub mod bitreader;
