use log::{debug, error, info};

use crate::bitstream::bitreader::BitReader;
use crate::error::HuffError;
use crate::huffman_coding::codebook::{Code, ReverseCodebook};
use crate::tools::cli::{HuffOpts, Output};
use crate::tools::data_io::{read_input, remove_input, write_output};
use crate::tools::report::{compression_ratio, verify_round_trip};

use super::container::{unpack, Container};

/// Decode a packed stream with the reverse codebook it was encoded against.
///
/// Bits are gathered into a candidate code until it matches a codeword, at which point the
/// symbol is emitted and the candidate starts over. Leftover bits at the end of the stream,
/// or a candidate that outgrows the longest codeword, mean the stream is corrupt.
pub fn decode(stream: &[u8], reverse: &ReverseCodebook) -> Result<Vec<u8>, HuffError> {
    let (&padding, payload) = stream
        .split_first()
        .ok_or_else(|| HuffError::malformed("stream is shorter than its header byte"))?;

    if padding > 7 {
        return Err(HuffError::malformed(format!(
            "padding length {} is out of range",
            padding
        )));
    }
    let total_bits = payload.len() * 8;
    if (padding as usize) > total_bits {
        return Err(HuffError::malformed(format!(
            "{} padding bits claimed but the payload is empty",
            padding
        )));
    }
    if let Some(&last) = payload.last() {
        let pad_mask = ((1_u16 << padding) - 1) as u8;
        if last & pad_mask != 0 {
            return Err(HuffError::malformed("padding bits are not zero"));
        }
    }

    let data_bits = total_bits - padding as usize;
    debug!("Decoding {} bits ({} bits padding)", data_bits, padding);

    let mut br = BitReader::with_limit(payload, data_bits);
    let mut result = Vec::with_capacity(data_bits / 2);
    let mut candidate = Code::new();

    while let Some(bit) = br.bool_bit() {
        candidate = candidate.with_bit(bit);
        if let Some(symbol) = reverse.get(&candidate) {
            result.push(symbol);
            candidate = Code::new();
        } else if candidate.len() >= reverse.max_len() {
            return Err(HuffError::malformed(format!(
                "no codeword matches {} at {}",
                candidate,
                br.loc()
            )));
        }
    }

    if !candidate.is_empty() {
        return Err(HuffError::malformed(format!(
            "stream ends inside a codeword ({} bits left over)",
            candidate.len()
        )));
    }
    Ok(result)
}

/// Decompress every `.huf` file named in opts.
pub fn decompress(opts: &HuffOpts) -> Result<(), HuffError> {
    for fname in &opts.files {
        let out_name = match fname.strip_suffix(".huf") {
            Some(stem) if !stem.is_empty() => stem.to_string(),
            _ => {
                error!("{} does not end in .huf", fname);
                return Err(HuffError::malformed(format!("{} does not end in .huf", fname)));
            }
        };

        let data = read_input(fname)?;
        let restored = unpack(&data)?;
        write_output(opts, &out_name, &restored)?;
        info!("{}: restored {} bytes", fname, restored.len());

        if !opts.keep_input_files && opts.output == Output::File {
            remove_input(fname)?;
        }
    }
    Ok(())
}

/// Compress each input in memory, decode it again and check the two match. Nothing is
/// written. Returns an error if any file fails.
pub fn test_integrity(opts: &HuffOpts) -> Result<(), HuffError> {
    let mut failures = 0;
    for fname in &opts.files {
        let data = read_input(fname)?;
        let container = Container::pack(&data)?;
        let restored = container.unpack()?;

        if verify_round_trip(&data, &restored) {
            info!("{}: integrity check passed", fname);
        } else {
            error!("{}: integrity check FAILED", fname);
            failures += 1;
        }
        if let Some(ratio) = compression_ratio(data.len(), &container.stream) {
            info!("{}: compression ratio {:.2}", fname, ratio);
        }
    }

    if failures > 0 {
        return Err(HuffError::malformed(format!(
            "{} file(s) did not survive the round trip",
            failures
        )));
    }
    Ok(())
}
