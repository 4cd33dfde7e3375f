//! JPEG marker byte values recognised by the segment parser.
#![allow(dead_code)]

/// A marker code found after a `0xFF` byte in the bitstream.
///
/// Only the markers this decoder acts on have dedicated variants;
/// everything else that is structurally a length-prefixed segment is
/// folded into `Other` and skipped by its length field.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Marker
{
    /// Start of image, `0xFFD8`.
    SOI,
    /// End of image, `0xFFD9`.
    EOI,
    /// Baseline DCT start of frame, `0xFFC0`.
    SOF0,
    /// Define Huffman table(s), `0xFFC4`.
    DHT,
    /// Define quantization table(s), `0xFFDB`.
    DQT,
    /// Start of scan, `0xFFDA`.
    SOS,
    /// Define restart interval, `0xFFDD`.
    DRI,
    /// Application segment N (`0xFFE0..=0xFFEF`), carries its index.
    APP(u8),
    /// Any other length-prefixed marker, carries the raw byte.
    Other(u8),
}

impl Marker
{
    /// Classify a marker byte (the byte following `0xFF`).
    pub fn from_u8(byte: u8) -> Option<Marker>
    {
        match byte
        {
            0x00 | 0xFF => None,
            0xD8 => Some(Marker::SOI),
            0xD9 => Some(Marker::EOI),
            0xC0 => Some(Marker::SOF0),
            0xC4 => Some(Marker::DHT),
            0xDB => Some(Marker::DQT),
            0xDA => Some(Marker::SOS),
            0xDD => Some(Marker::DRI),
            0xE0..=0xEF => Some(Marker::APP(byte - 0xE0)),
            other => Some(Marker::Other(other)),
        }
    }

    /// Start-of-frame markers this decoder does not implement, used
    /// to produce a precise `Unsupported` error instead of silently
    /// misparsing the frame header.
    pub fn is_unsupported_sof(byte: u8) -> bool
    {
        matches!(byte, 0xC1..=0xCF if byte != 0xC0 && byte != 0xC4)
    }
}
