//! Miscellaneous constants shared across the decoding pipeline.
#![allow(dead_code)]

/// Start of baseline DCT, Huffman coding.
pub const START_OF_FRAME_BASE: u16 = 0xffc0;

/// Undo run length encoding of coefficients by placing them in
/// natural (row-major spatial) order.
///
/// Linear zig-zag index `k` maps to spatial index `UN_ZIGZAG[k]`,
/// where spatial index `8*v + u` is row `v`, column `u` of the 8x8
/// block.
#[rustfmt::skip]
pub const UN_ZIGZAG: [usize; 64] = [
     0,  1,  8, 16,  9,  2,  3, 10,
    17, 24, 32, 25, 18, 11,  4,  5,
    12, 19, 26, 33, 40, 48, 41, 34,
    27, 20, 13,  6,  7, 14, 21, 28,
    35, 42, 49, 56, 57, 50, 43, 36,
    29, 22, 15, 23, 30, 37, 44, 51,
    58, 59, 52, 45, 38, 31, 39, 46,
    53, 60, 61, 54, 47, 55, 62, 63,
];

/// Markers that identify the type of Start-of-Frame segment seen.
///
/// Only `BaselineDct` is something this decoder can process; the
/// other variants exist purely so the segment parser can name the
/// specific unsupported mode in its `Unsupported` error instead of
/// failing generically.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
#[allow(clippy::upper_case_acronyms)]
pub enum SOFMarkers
{
    /// Baseline DCT, Huffman coding — the only mode this crate decodes.
    BaselineDct,
    /// SOF1: extended sequential DCT, Huffman coding.
    ExtendedSequentialHuffman,
    /// SOF2: progressive DCT, Huffman coding.
    ProgressiveDctHuffman,
    /// SOF3: lossless (sequential), Huffman coding.
    LosslessHuffman,
    /// SOF9: extended sequential DCT, arithmetic coding.
    ExtendedSequentialDctArithmetic,
    /// SOF10: progressive DCT, arithmetic coding.
    ProgressiveDctArithmetic,
    /// SOF11: lossless (sequential), arithmetic coding.
    LosslessArithmetic,
}

impl SOFMarkers
{
    pub fn is_baseline(self) -> bool
    {
        matches!(self, Self::BaselineDct)
    }

    pub fn from_byte(byte: u8) -> Option<SOFMarkers>
    {
        match byte
        {
            0xC0 => Some(Self::BaselineDct),
            0xC1 => Some(Self::ExtendedSequentialHuffman),
            0xC2 => Some(Self::ProgressiveDctHuffman),
            0xC3 => Some(Self::LosslessHuffman),
            0xC9 => Some(Self::ExtendedSequentialDctArithmetic),
            0xCA => Some(Self::ProgressiveDctArithmetic),
            0xCB => Some(Self::LosslessArithmetic),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str
    {
        match self
        {
            Self::BaselineDct => "Baseline DCT",
            Self::ExtendedSequentialHuffman => "Extended sequential DCT, Huffman coding",
            Self::ProgressiveDctHuffman => "Progressive DCT, Huffman coding",
            Self::LosslessHuffman => "Lossless (sequential), Huffman coding",
            Self::ExtendedSequentialDctArithmetic => "Extended sequential DCT, arithmetic coding",
            Self::ProgressiveDctArithmetic => "Progressive DCT, arithmetic coding",
            Self::LosslessArithmetic => "Lossless (sequential), arithmetic coding",
        }
    }
}
