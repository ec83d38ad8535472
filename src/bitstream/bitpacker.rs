use log::error;

use crate::huffman_coding::codebook::Code;

/// Packs codewords into bytes, most significant bit first.
pub struct BitPacker {
    pub output: Vec<u8>,
    queue: u64,
    q_bits: u8,
    bit_count: usize,
}

impl BitPacker {
    /// Create a new BitPacker with an output buffer of size specified. Call flush() to
    /// move the last partial byte into the buffer before using the output.
    pub fn new(size: usize) -> Self {
        Self {
            output: Vec::with_capacity(size),
            queue: 0,
            q_bits: 0,
            bit_count: 0,
        }
    }

    /// Internal bitstream write function common to all out.XX functions.
    fn write_stream(&mut self) {
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte); //push the packed byte out
            self.q_bits -= 8; //adjust the count of bits left in the queue
        }
    }

    /// Writes the low `depth` bits of `data` (0-32 bits).
    pub fn out_bits(&mut self, data: u32, depth: u8) {
        if depth == 0 {
            return;
        }
        self.queue <<= depth; //shift queue by bit length
        self.queue |= (data & (0xffffffff >> (32 - depth))) as u64; //add data portion to queue
        self.q_bits += depth; //update depth of queue bits
        self.bit_count += depth as usize;
        self.write_stream();
    }

    /// Puts a whole codeword on the stream, in chunks the queue can hold.
    pub fn out_code(&mut self, code: Code) {
        let mut bits = code.bits();
        let mut remaining = code.len();
        while remaining > 0 {
            let depth = remaining.min(32);
            let chunk = bits
                .by_ref()
                .take(depth as usize)
                .fold(0_u32, |acc, bit| (acc << 1) | bit as u32);
            self.out_bits(chunk, depth);
            remaining -= depth;
        }
    }

    /// Number of data bits written so far, not counting flush padding.
    pub fn bit_count(&self) -> usize {
        self.bit_count
    }

    /// Flushes the remaining bits (1-7) from the buffer, padding with 0s in the least
    /// signficant bits. Returns how many padding bits were added (0-7).
    pub fn flush(&mut self) -> u8 {
        let padding = (8 - self.q_bits % 8) % 8;
        if self.q_bits > 0 {
            self.queue <<= padding; //pad the queue with zeros
            self.q_bits += padding;
            self.write_stream(); // write out all that is left
            if self.q_bits > 0 {
                error!("Stuff left in the BitPacker queue.");
            }
        }
        padding
    }

    /// Debugging function to return the number of bytes.bits output so far
    pub fn loc(&self) -> String {
        format! {"[{}.{}]",((self.output.len() * 8) + self.q_bits as usize)/8, ((self.output.len() * 8) + self.q_bits as usize)%8}
    }
}
