//! Per-block Huffman entropy decoding: DC difference + AC run-length.
use crate::bitstream::{extend, BitReader};
use crate::errors::DecodeErrors;
use crate::huffman::HuffmanTable;

/// One 8x8 block's worth of coefficients, in zig-zag linear order as
/// they come off the wire (not yet dequantized or de-zigzagged).
pub type Coefficients = [i32; 64];

/// Decode one block's DC and AC coefficients, threading the
/// component's running DC predictor.
///
/// `dc_prediction` is updated in place; on return it holds the
/// absolute DC value just decoded, ready to seed the next block of
/// the same component.
pub fn decode_block(
    reader: &mut BitReader, dc_table: &HuffmanTable, ac_table: &HuffmanTable,
    dc_prediction: &mut i32,
) -> Result<Coefficients, DecodeErrors>
{
    let mut block = [0i32; 64];

    let dc_size = dc_table.decode(reader)?;
    if dc_size > 11
    {
        return Err(DecodeErrors::NoMatchingCode);
    }
    let diff = if dc_size == 0
    {
        0
    }
    else
    {
        let bits = reader.read_bits(u32::from(dc_size))?;
        extend(bits, u32::from(dc_size))
    };
    *dc_prediction += diff;
    block[0] = *dc_prediction;

    let mut k = 1usize;
    while k < 64
    {
        let symbol = ac_table.decode(reader)?;
        let run = (symbol >> 4) as usize;
        let size = symbol & 0x0F;

        if symbol == 0x00
        {
            // End of block: remaining coefficients stay zero.
            break;
        }
        if symbol == 0xF0
        {
            // ZRL: sixteen zero coefficients. Landing exactly on 64
            // is saturation (a valid, silent terminal state); only
            // overshooting past it is a genuine run-length error.
            k += 16;
            if k > 64
            {
                return Err(DecodeErrors::InvalidRunLength);
            }
            if k == 64
            {
                break;
            }
            continue;
        }

        k += run;
        if k >= 64
        {
            return Err(DecodeErrors::InvalidRunLength);
        }
        let bits = reader.read_bits(u32::from(size))?;
        block[k] = extend(bits, u32::from(size));
        k += 1;
    }

    Ok(block)
}
