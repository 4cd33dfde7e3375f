//! Canonical Huffman table construction and decoding.
use crate::bitstream::BitReader;
use crate::errors::DecodeErrors;

/// A single DC or AC Huffman table, built from its on-wire DHT form:
/// sixteen per-length code counts followed by the symbols in code
/// order.
///
/// Internally this keeps the classic `mincode`/`maxcode`/`valptr`
/// triples (one entry per code length 1..=16) alongside the flattened
/// `values` array, rather than a 256- or 65536-entry lookahead cache:
/// correctness of this representation follows directly from the
/// canonical-code construction below, which is what this decoder's
/// test suite checks against.
#[derive(Clone)]
pub struct HuffmanTable
{
    /// Smallest code of each length, or -1 if no code has that length.
    mincode: [i32; 17],
    /// Largest code of each length, or -1 if no code has that length.
    maxcode: [i32; 17],
    /// Index into `values` of the first symbol with each length.
    valptr: [i32; 17],
    values: Vec<u8>,
}

impl HuffmanTable
{
    /// Build a table from the on-wire DHT fields: sixteen counts (one
    /// per code length 1..=16) and the symbols in code order.
    pub fn build(counts: &[u8; 16], values: Vec<u8>) -> Result<Self, DecodeErrors>
    {
        let total: usize = counts.iter().map(|&c| c as usize).sum();
        if total != values.len()
        {
            return Err(DecodeErrors::MalformedStatic(
                "Huffman symbol count does not match declared code counts",
            ));
        }

        let mut mincode = [-1i32; 17];
        let mut maxcode = [-1i32; 17];
        let mut valptr = [0i32; 17];

        let mut code: i32 = 0;
        let mut value_index: i32 = 0;

        for length in 1..=16usize
        {
            let count = counts[length - 1] as i32;
            if count == 0
            {
                code <<= 1;
                continue;
            }
            valptr[length] = value_index;
            mincode[length] = code;
            code += count - 1;
            maxcode[length] = code;

            value_index += count;
            code += 1;
            code <<= 1;
        }

        Ok(HuffmanTable {
            mincode,
            maxcode,
            valptr,
            values,
        })
    }

    /// Decode the next Huffman symbol from `reader`.
    pub fn decode(&self, reader: &mut BitReader) -> Result<u8, DecodeErrors>
    {
        let mut code: i32 = 0;
        for length in 1..=16usize
        {
            code = (code << 1) | i32::from(reader.read_bit()?);
            if self.maxcode[length] != -1 && code <= self.maxcode[length] && code >= self.mincode[length]
            {
                let index = self.valptr[length] + (code - self.mincode[length]);
                return self
                    .values
                    .get(index as usize)
                    .copied()
                    .ok_or(DecodeErrors::NoMatchingCode);
            }
        }
        Err(DecodeErrors::NoMatchingCode)
    }
}
