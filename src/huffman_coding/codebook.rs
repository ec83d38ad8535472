//! Derives the codebook (symbol -> codeword) and its inverse from a finished tree.
//!
//! The tree is walked with an explicit stack: a 0 bit is appended going left, a 1 bit going
//! right, and each leaf binds its path to its symbol. A tree that is a single leaf gets the
//! one-bit code `0`, never an empty one.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use log::debug;
use rustc_hash::FxHashMap;

use super::tree::{HuffTree, Node, NodeData};
use crate::error::HuffError;

/// Widest codeword a `Code` can hold. Trees built from u64 counts stay well under this
/// (a depth of 128 would need a total weight around Fibonacci(130)).
pub const MAX_CODE_LEN: u8 = 128;

/// A codeword. Bits are right-aligned in `bits`; the first bit of the code is the most
/// significant of the `len` used.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code {
    bits: u128,
    len: u8,
}

impl Code {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of bits in the code.
    pub fn len(&self) -> u8 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The code with one more bit on the end.
    pub fn with_bit(self, bit: bool) -> Self {
        Self {
            bits: (self.bits << 1) | bit as u128,
            len: self.len + 1,
        }
    }

    /// Bit `i`, counting from the first (leftmost) bit of the code. None past the end.
    pub fn bit(&self, i: u8) -> Option<bool> {
        if i >= self.len {
            return None;
        }
        Some((self.bits >> (self.len - 1 - i)) & 1 == 1)
    }

    /// Iterate the bits in transmission order.
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).filter_map(move |i| self.bit(i))
    }

    /// True if `self` is a (non-strict) prefix of `other`.
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        if self.len == 0 {
            return true;
        }
        self.len <= other.len && other.bits >> (other.len - self.len) == self.bits
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for bit in self.bits() {
            write!(f, "{}", if bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl FromStr for Code {
    type Err = HuffError;

    /// Parse a string of `0` and `1` characters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() > MAX_CODE_LEN as usize {
            return Err(HuffError::malformed(format!("code longer than {} bits", MAX_CODE_LEN)));
        }
        s.chars().try_fold(Code::new(), |code, c| match c {
            '0' => Ok(code.with_bit(false)),
            '1' => Ok(code.with_bit(true)),
            other => Err(HuffError::malformed(format!("'{}' is not a bit", other))),
        })
    }
}

/// Symbol -> codeword mapping used by the encoder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Codebook {
    codes: FxHashMap<u8, Code>,
}

impl Codebook {
    pub fn get(&self, symbol: u8) -> Option<Code> {
        self.codes.get(&symbol).copied()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// (symbol, code) pairs in ascending symbol order.
    pub fn sorted(&self) -> Vec<(u8, Code)> {
        let mut pairs: Vec<(u8, Code)> = self.codes.iter().map(|(&s, &c)| (s, c)).collect();
        pairs.sort_unstable();
        pairs
    }

    /// Build the inverse mapping.
    pub fn reverse(&self) -> ReverseCodebook {
        let symbols: FxHashMap<Code, u8> = self.codes.iter().map(|(&s, &c)| (c, s)).collect();
        let max_len = symbols.keys().map(|c| c.len()).max().unwrap_or(0);
        ReverseCodebook { symbols, max_len }
    }
}

impl FromIterator<(u8, Code)> for Codebook {
    fn from_iter<I: IntoIterator<Item = (u8, Code)>>(iter: I) -> Self {
        Self {
            codes: iter.into_iter().collect(),
        }
    }
}

/// Codeword -> symbol mapping used by the decoder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReverseCodebook {
    symbols: FxHashMap<Code, u8>,
    max_len: u8,
}

impl ReverseCodebook {
    pub fn get(&self, code: &Code) -> Option<u8> {
        self.symbols.get(code).copied()
    }

    /// Length of the longest codeword. A candidate longer than this can never match.
    pub fn max_len(&self) -> u8 {
        self.max_len
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// Walk the tree and return the codebook together with its inverse.
pub fn generate_codes(tree: &HuffTree) -> (Codebook, ReverseCodebook) {
    let mut codes = FxHashMap::default();

    // A lone leaf still needs a real code.
    if let NodeData::Leaf(sym) = tree.root.node_data {
        codes.insert(sym, Code::new().with_bit(false));
    } else {
        let mut stack: Vec<(&Node, Code)> = vec![(&tree.root, Code::new())];
        while let Some((node, path)) = stack.pop() {
            match &node.node_data {
                NodeData::Kids(left, right) => {
                    stack.push((right.as_ref(), path.with_bit(true)));
                    stack.push((left.as_ref(), path.with_bit(false)));
                }
                NodeData::Leaf(sym) => {
                    codes.insert(*sym, path);
                }
            }
        }
    }

    let codebook = Codebook { codes };
    let reverse = codebook.reverse();
    debug!(
        "Generated {} codes, longest is {} bits",
        codebook.len(),
        reverse.max_len()
    );
    (codebook, reverse)
}

#[cfg(test)]
mod test {
    use super::{generate_codes, Code, Codebook};
    use crate::huffman_coding::tree::HuffTree;
    use crate::tools::freq_count::freqs;

    fn codes_for(data: &[u8]) -> Codebook {
        let tree = HuffTree::from_frequencies(&freqs(data)).unwrap();
        generate_codes(&tree).0
    }

    #[test]
    fn code_parse_test() {
        let code: Code = "0110".parse().unwrap();
        assert_eq!(code.len(), 4);
        assert_eq!(code.to_string(), "0110");
        assert_eq!(code.bit(1), Some(true));
        assert_eq!(code.bit(3), Some(false));
        assert_eq!(code.bit(4), None);
        assert!("01x".parse::<Code>().is_err());
    }

    #[test]
    fn empty_code_bit_test() {
        let code = Code::new();
        assert_eq!(code.bit(0), None);
        assert_eq!(code.bits().count(), 0);
        assert_eq!(code.to_string(), "");
    }

    #[test]
    fn prefix_test() {
        let a: Code = "01".parse().unwrap();
        let b: Code = "011".parse().unwrap();
        let c: Code = "10".parse().unwrap();
        assert!(a.is_prefix_of(&b));
        assert!(!b.is_prefix_of(&a));
        assert!(!a.is_prefix_of(&c));
    }

    #[test]
    fn single_symbol_test() {
        let book = codes_for(b"aaaa");
        assert_eq!(book.len(), 1);
        assert_eq!(book.get(b'a').unwrap().to_string(), "0");
    }

    #[test]
    fn known_codes_test() {
        // d(1)+c(2) merge first, then that with b(4), then with a(8).
        let book = codes_for(b"aaaaaaaabbbbccd");
        assert_eq!(book.get(b'a').unwrap().to_string(), "1");
        assert_eq!(book.get(b'b').unwrap().to_string(), "01");
        assert_eq!(book.get(b'c').unwrap().to_string(), "001");
        assert_eq!(book.get(b'd').unwrap().to_string(), "000");
    }

    #[test]
    fn prefix_free_test() {
        let text = b"the quick brown fox jumps over the lazy dog, again and again!";
        let pairs = codes_for(text).sorted();
        for (i, (_, a)) in pairs.iter().enumerate() {
            assert!(!a.is_empty());
            for (j, (_, b)) in pairs.iter().enumerate() {
                if i != j {
                    assert!(!a.is_prefix_of(b), "{} is a prefix of {}", a, b);
                }
            }
        }
    }

    #[test]
    fn reverse_test() {
        let data: Vec<u8> = (0..=255).chain(0..100).collect();
        let tree = HuffTree::from_frequencies(&freqs(&data)).unwrap();
        let (book, reverse) = generate_codes(&tree);
        assert_eq!(book.len(), 256);
        assert_eq!(reverse.len(), 256);
        for (sym, code) in book.sorted() {
            assert_eq!(reverse.get(&code), Some(sym));
            assert!(code.len() <= reverse.max_len());
        }
    }
}
