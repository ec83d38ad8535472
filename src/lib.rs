//! Huffman coding compressor and decompressor.
//!
//! Builds a prefix code from the byte frequencies of one input, packs the input with it, and
//! reverses the process losslessly.
//!
//! ```
//! use huffpack::{build_codec, decode, encode};
//!
//! let text = b"aaaaaaaabbbbccd";
//! let (codebook, reverse) = build_codec(text)?;
//! let packed = encode(text, &codebook)?;
//! assert_eq!(decode(&packed, &reverse)?, text);
//! # Ok::<(), huffpack::HuffError>(())
//! ```
//!
//! Files written by the `huffpack` binary also carry the frequency table:
//!
//! `$> huffpack -z test.txt`
//!
//! This will compress the file and create the file test.txt.huf.
//! The original file will be deleted unless -k is given.
//!
pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use compression::compress::encode;
pub use compression::container::{pack, unpack, Container};
pub use compression::decompress::decode;
pub use error::HuffError;
pub use huffman_coding::codebook::{Code, Codebook, ReverseCodebook};
pub use huffman_coding::{build_codec, build_codec_from_frequencies};
pub use tools::freq_count::{freqs, FrequencyTable};
