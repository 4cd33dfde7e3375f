//! Error types returned by this crate.
use std::fmt;
use std::fmt::{Debug, Formatter};

/// Errors possible during decoding of a baseline JPEG image.
///
/// The decoder is all-or-nothing: any of these is fatal to the decode
/// in progress and is returned unchanged to the caller.
pub enum DecodeErrors
{
    /// The underlying source ran out of bytes before a required field
    /// could be read.
    TruncatedInput,
    /// A marker was encountered in a position the parser's state
    /// machine does not admit (e.g. SOS before SOF0).
    UnexpectedMarker(&'static str),
    /// A feature outside baseline sequential Huffman JPEG was seen
    /// (progressive/arithmetic/lossless SOF, restart intervals, more
    /// than three components, non-8-bit sample precision).
    Unsupported(&'static str),
    /// A `0xFF` byte inside the entropy stream was followed by
    /// neither `0x00` (stuffing) nor a marker, while bits were still
    /// expected.
    CorruptStuffing,
    /// A Huffman code search exceeded 16 bits without a match.
    NoMatchingCode,
    /// AC coefficient placement would overrun the 64-coefficient
    /// block.
    InvalidRunLength,
    /// A component referenced a quantization or Huffman table id
    /// that was never loaded.
    TableMissing(&'static str, u8),
    /// Catch-all for structurally invalid segment bodies that do not
    /// map onto a more specific variant: bad lengths, zero width or
    /// height, duplicate component ids, out-of-range table ids.
    MalformedStatic(&'static str),
}

impl Debug for DecodeErrors
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result
    {
        match self
        {
            Self::TruncatedInput => writeln!(f, "Truncated input: ran out of bytes"),
            Self::UnexpectedMarker(pos) => writeln!(f, "Unexpected marker: {pos}"),
            Self::Unsupported(feature) => writeln!(f, "Unsupported: {feature}"),
            Self::CorruptStuffing =>
            {
                writeln!(f, "Corrupt byte stuffing in entropy-coded segment")
            }
            Self::NoMatchingCode => writeln!(f, "No matching Huffman code found"),
            Self::InvalidRunLength => writeln!(f, "AC run length overruns block"),
            Self::TableMissing(class, id) => writeln!(f, "Missing {class} table with id {id}"),
            Self::MalformedStatic(reason) => writeln!(f, "Malformed JPEG: {reason}"),
        }
    }
}

impl fmt::Display for DecodeErrors
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result
    {
        Debug::fmt(self, f)
    }
}

impl std::error::Error for DecodeErrors {}
