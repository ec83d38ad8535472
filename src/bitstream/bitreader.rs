//! BitReader: reads a packed, MSB-first bitstream held in memory.
//!
//! The reader can be told to stop short of the end of the buffer, which is how the
//! padding bits at the tail of a packed stream are kept away from the decoder.
//!

const BIT_MASK: u8 = 0xff;

/// Reads bits out of a byte slice.
#[derive(Debug)]
pub struct BitReader<'a> {
    buffer: &'a [u8],
    cursor: usize,
    bit_index: usize,
    /// Total number of readable bits.
    limit: usize,
}

impl<'a> BitReader<'a> {
    /// Creates a reader that stops after `limit` bits (clamped to the buffer size).
    pub fn with_limit(buffer: &'a [u8], limit: usize) -> Self {
        Self {
            buffer,
            cursor: 0,
            bit_index: 0,
            limit: limit.min(buffer.len() * 8),
        }
    }

    /// Bits consumed so far.
    pub fn bits_read(&self) -> usize {
        self.cursor * 8 + self.bit_index
    }

    /// Bits left before the limit.
    pub fn remaining(&self) -> usize {
        self.limit - self.bits_read()
    }

    /// Return bit as Option<usize> (1 or 0), or None if there is no more data to read
    pub fn bit(&mut self) -> Option<usize> {
        if self.remaining() == 0 {
            return None;
        }
        let bit =
            (self.buffer[self.cursor] & BIT_MASK >> self.bit_index) >> (7 - self.bit_index);
        self.bit_index += 1;
        self.bit_index %= 8;
        if self.bit_index == 0 {
            self.cursor += 1;
        }
        Some(bit as usize)
    }

    /// Return Option<Bool> *true* if the next bit is 1, *false* if 0, consuming the bit,
    /// or None if there is no more data to read
    pub fn bool_bit(&mut self) -> Option<bool> {
        self.bit().map(|bit| bit == 1)
    }

    /// Debugging function. Report current position in the buffer.
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.cursor, self.bit_index)
    }
}

#[cfg(test)]
mod test {
    use super::BitReader;

    #[test]
    fn basic_test() {
        let x = [0b10000001_u8];
        let mut br = BitReader::with_limit(&x, 8);
        assert_eq!(br.bit(), Some(1));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(1));
        assert_eq!(br.bit(), None);
    }

    #[test]
    fn loc_test() {
        let x = "Hello, world!".as_bytes();
        let mut br = BitReader::with_limit(x, 100);
        for _ in 0..17 {
            br.bit();
        }
        assert_eq!(br.loc(), "[2.1]");
        assert_eq!(br.bits_read(), 17);
    }

    #[test]
    fn limit_test() {
        let x = [0b1010_0000, 0xff];
        let mut br = BitReader::with_limit(&x, 4);
        assert_eq!(br.remaining(), 4);
        let mut bits = vec![];
        while let Some(bit) = br.bool_bit() {
            bits.push(bit);
        }
        assert_eq!(bits, vec![true, false, true, false]);
        assert_eq!(br.bits_read(), 4);
        assert_eq!(br.bit(), None);
    }

    #[test]
    fn limit_clamp_test() {
        let x = [0xff];
        let br = BitReader::with_limit(&x, 100);
        assert_eq!(br.remaining(), 8);
    }
}
