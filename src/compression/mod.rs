//! The compression module applies a codebook to data and reverses it.
//!
//! - compress: encode a byte sequence into a packed stream (a padding-length byte followed by
//!   the codewords packed MSB first), and the file-level compress command.
//! - decompress: decode a packed stream with the reverse codebook, plus the decompress and
//!   test commands.
//! - container: the on-disk format that stores the frequency table next to the packed stream
//!   so a file can be decoded without the original codebook in memory.
//!
//! A packed stream on its own carries no codebook. Whoever stores one must also keep the
//! codebook, or the frequency table it came from.

pub mod compress;
pub mod container;
pub mod decompress;
