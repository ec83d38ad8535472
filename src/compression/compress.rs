use log::{debug, info};

use crate::bitstream::bitpacker::BitPacker;
use crate::error::HuffError;
use crate::huffman_coding::codebook::Codebook;
use crate::tools::cli::{HuffOpts, Output};
use crate::tools::data_io::{read_input, remove_input, write_output};
use crate::tools::report::compression_ratio;

use super::container::Container;

/// Encode `input` with `codebook` into a packed stream.
///
/// Byte 0 of the result is the number of zero bits (0-7) padding out the final byte. The
/// codewords follow, packed most significant bit first.
pub fn encode(input: &[u8], codebook: &Codebook) -> Result<Vec<u8>, HuffError> {
    let mut bp = BitPacker::new(input.len() / 2 + 1);

    for &symbol in input {
        let code = codebook.get(symbol).ok_or(HuffError::UnknownSymbol(symbol))?;
        bp.out_code(code);
    }
    let payload_bits = bp.bit_count();
    let padding = bp.flush();
    debug!(
        "Encoded {} symbols into {} bits, {} bits of padding {}",
        input.len(),
        payload_bits,
        padding,
        bp.loc()
    );

    let mut stream = Vec::with_capacity(bp.output.len() + 1);
    stream.push(padding);
    stream.extend_from_slice(&bp.output);
    Ok(stream)
}

/// Compress every file named in opts, writing `<name>.huf` (or to stdout).
pub fn compress(opts: &HuffOpts) -> Result<(), HuffError> {
    for fname in &opts.files {
        let data = read_input(fname)?;
        let container = Container::pack(&data)?;
        let bytes = container.serialize();

        let out_name = format!("{}.huf", fname);
        write_output(opts, &out_name, &bytes)?;

        match compression_ratio(data.len(), &container.stream) {
            Some(ratio) => info!(
                "{}: {} -> {} bytes, ratio {:.2}",
                fname,
                data.len(),
                bytes.len(),
                ratio
            ),
            None => info!("{}: empty input, nothing to compress", fname),
        }

        if !opts.keep_input_files && opts.output == Output::File {
            remove_input(fname)?;
        }
    }
    Ok(())
}
