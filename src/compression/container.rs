//! Self-describing file format: the frequency table followed by the packed stream.
//!
//! ```text
//! "HUF"          magic
//! u8             format version (1)
//! u16 BE         number of symbols n
//! n x (u8, u64 BE)  symbol and count, symbols strictly ascending, counts >= 1
//! ...            packed stream
//! ```
//!
//! The decoder rebuilds the tree from the table with the same tie-break, so it arrives at the
//! same codebook the encoder used.

use std::io::{self, Cursor, Read};

use log::{debug, trace};

use crate::error::HuffError;
use crate::huffman_coding::build_codec_from_frequencies;
use crate::tools::freq_count::{freqs, FrequencyTable};

use super::compress::encode;
use super::decompress::decode;

pub const MAGIC: &[u8; 3] = b"HUF";
pub const VERSION: u8 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub table: FrequencyTable,
    pub stream: Vec<u8>,
}

impl Container {
    /// Count, build the codec, and encode `input`.
    pub fn pack(input: &[u8]) -> Result<Self, HuffError> {
        let table = freqs(input);
        let stream = if table.is_empty() {
            vec![0]
        } else {
            let (codebook, _) = build_codec_from_frequencies(&table)?;
            encode(input, &codebook)?
        };
        Ok(Container { table, stream })
    }

    /// Rebuild the codec from the table and decode the stream.
    pub fn unpack(&self) -> Result<Vec<u8>, HuffError> {
        let decoded = if self.table.is_empty() {
            if self.stream != [0] {
                return Err(HuffError::malformed("data present for an empty symbol table"));
            }
            Vec::new()
        } else {
            let (_, reverse) = build_codec_from_frequencies(&self.table)?;
            decode(&self.stream, &reverse)?
        };

        if decoded.len() as u64 != self.table.total() {
            return Err(HuffError::malformed(format!(
                "decoded {} symbols, table says {}",
                decoded.len(),
                self.table.total()
            )));
        }
        Ok(decoded)
    }

    pub fn serialize(&self) -> Vec<u8> {
        let n = self.table.len();
        let mut bytes = Vec::with_capacity(6 + n * 9 + self.stream.len());
        bytes.extend_from_slice(MAGIC);
        bytes.push(VERSION);
        bytes.extend_from_slice(&(n as u16).to_be_bytes());
        for (sym, count) in self.table.iter() {
            bytes.push(sym);
            bytes.extend_from_slice(&count.to_be_bytes());
        }
        bytes.extend_from_slice(&self.stream);
        trace!("Container header is {} bytes", bytes.len() - self.stream.len());
        bytes
    }

    pub fn deserialize(data: &[u8]) -> Result<Self, HuffError> {
        let mut cursor = Cursor::new(data);

        let mut magic = [0u8; 3];
        cursor.read_exact(&mut magic).map_err(truncated)?;
        if &magic != MAGIC {
            return Err(HuffError::malformed("not a huffpack file (bad magic)"));
        }

        let mut version = [0u8; 1];
        cursor.read_exact(&mut version).map_err(truncated)?;
        if version[0] != VERSION {
            return Err(HuffError::malformed(format!(
                "unsupported format version {}",
                version[0]
            )));
        }

        let mut count_bytes = [0u8; 2];
        cursor.read_exact(&mut count_bytes).map_err(truncated)?;
        let count = u16::from_be_bytes(count_bytes) as usize;
        if count > 256 {
            return Err(HuffError::malformed(format!("{} symbols in table", count)));
        }

        let mut table = FrequencyTable::new();
        let mut last: Option<u8> = None;
        let mut total: u64 = 0;
        for _ in 0..count {
            let mut sym = [0u8; 1];
            cursor.read_exact(&mut sym).map_err(truncated)?;
            let mut freq_bytes = [0u8; 8];
            cursor.read_exact(&mut freq_bytes).map_err(truncated)?;
            let freq = u64::from_be_bytes(freq_bytes);

            if last.map_or(false, |l| sym[0] <= l) {
                return Err(HuffError::malformed("symbol table is not strictly ascending"));
            }
            if freq == 0 {
                return Err(HuffError::malformed(format!(
                    "symbol {:#04x} has a zero count",
                    sym[0]
                )));
            }
            total = total
                .checked_add(freq)
                .ok_or_else(|| HuffError::malformed("symbol counts overflow a u64"))?;
            table.set(sym[0], freq);
            last = Some(sym[0]);
        }

        let stream = data[cursor.position() as usize..].to_vec();
        debug!(
            "Read table of {} symbols ({} total), stream of {} bytes",
            count,
            total,
            stream.len()
        );
        Ok(Container { table, stream })
    }
}

fn truncated(e: io::Error) -> HuffError {
    HuffError::malformed(format!("container header truncated ({})", e))
}

/// Compress `input` into container bytes.
pub fn pack(input: &[u8]) -> Result<Vec<u8>, HuffError> {
    Ok(Container::pack(input)?.serialize())
}

/// Restore the original bytes from container bytes.
pub fn unpack(data: &[u8]) -> Result<Vec<u8>, HuffError> {
    Container::deserialize(data)?.unpack()
}

#[cfg(test)]
mod test {
    use super::{pack, unpack, Container};
    use crate::error::HuffError;

    #[test]
    fn layout_test() {
        let bytes = pack(b"aab").unwrap();
        // a(2) b(1): b merges left, so a = "1", b = "0" -> 110 + 5 bits padding
        let expected = vec![
            b'H', b'U', b'F', 1, 0, 2, //
            b'a', 0, 0, 0, 0, 0, 0, 0, 2, //
            b'b', 0, 0, 0, 0, 0, 0, 0, 1, //
            5, 0b1100_0000,
        ];
        assert_eq!(bytes, expected);
        assert_eq!(unpack(&bytes).unwrap(), b"aab");
    }

    #[test]
    fn round_trip_test() {
        let text = "Peter Piper picked a peck of pickled peppers.\n".repeat(20);
        let bytes = pack(text.as_bytes()).unwrap();
        assert!(bytes.len() < text.len());
        assert_eq!(unpack(&bytes).unwrap(), text.as_bytes());
    }

    #[test]
    fn binary_round_trip_test() {
        let data: Vec<u8> = (0..4096_u32).map(|i| (i * i % 251) as u8).collect();
        assert_eq!(unpack(&pack(&data).unwrap()).unwrap(), data);
    }

    #[test]
    fn empty_test() {
        let bytes = pack(b"").unwrap();
        assert_eq!(bytes, vec![b'H', b'U', b'F', 1, 0, 0, 0]);
        assert!(unpack(&bytes).unwrap().is_empty());
    }

    #[test]
    fn bad_magic_test() {
        let mut bytes = pack(b"hello").unwrap();
        bytes[0] = b'X';
        assert!(matches!(unpack(&bytes), Err(HuffError::MalformedStream(_))));
    }

    #[test]
    fn bad_version_test() {
        let mut bytes = pack(b"hello").unwrap();
        bytes[3] = 9;
        assert!(matches!(unpack(&bytes), Err(HuffError::MalformedStream(_))));
    }

    #[test]
    fn truncated_table_test() {
        let bytes = pack(b"hello").unwrap();
        assert!(matches!(
            Container::deserialize(&bytes[..10]),
            Err(HuffError::MalformedStream(_))
        ));
    }

    #[test]
    fn zero_count_test() {
        let mut bytes = pack(b"ab").unwrap();
        // count for 'a' lives in bytes 7..15
        bytes[14] = 0;
        assert!(matches!(unpack(&bytes), Err(HuffError::MalformedStream(_))));
    }

    #[test]
    fn unsorted_table_test() {
        let mut bytes = pack(b"ab").unwrap();
        bytes[6] = b'c';
        assert!(matches!(unpack(&bytes), Err(HuffError::MalformedStream(_))));
    }

    #[test]
    fn length_mismatch_test() {
        let mut bytes = pack(b"abcabc").unwrap();
        // claim one more 'a' than was encoded
        bytes[14] += 1;
        assert!(matches!(unpack(&bytes), Err(HuffError::MalformedStream(_))));
    }
}
