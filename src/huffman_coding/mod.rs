//! The huffman module turns symbol frequencies into a prefix code.
//!
//! - tree: builds the Huffman tree with a min-priority queue and a deterministic tie-break.
//! - codebook: walks the tree to produce the codebook and its inverse.
//!
//! The tree is thrown away once the codebook exists. Decoding only ever needs the
//! reverse codebook, or the frequency table to rebuild it.

pub mod codebook;
pub mod tree;

use log::debug;

use crate::error::HuffError;
use crate::tools::freq_count::{freqs, FrequencyTable};
use codebook::{generate_codes, Codebook, ReverseCodebook};
use tree::HuffTree;

/// Count, build the tree, and derive the codebook pair for `input`.
pub fn build_codec(input: &[u8]) -> Result<(Codebook, ReverseCodebook), HuffError> {
    build_codec_from_frequencies(&freqs(input))
}

/// Same as `build_codec`, starting from an existing frequency table.
pub fn build_codec_from_frequencies(
    table: &FrequencyTable,
) -> Result<(Codebook, ReverseCodebook), HuffError> {
    let tree = HuffTree::from_frequencies(table)?;
    debug!(
        "Tree over {} symbols ({} total) is {} levels deep",
        table.len(),
        tree.root.weight,
        tree.depth()
    );
    Ok(generate_codes(&tree))
}
