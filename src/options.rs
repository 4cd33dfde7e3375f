//! Decoder configuration.
use bitflags::bitflags;

bitflags! {
    /// Boolean toggles carried by [`DecoderOptions`].
    ///
    /// A `bitflags`-backed flag set alongside plain numeric fields,
    /// rather than a struct of `bool`s, so adding a toggle later is
    /// not a breaking field addition.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct DecoderFlags: u8 {
        /// Reject minor conformance deviations (stray marker padding,
        /// unexpected fill bytes) instead of silently tolerating them.
        const STRICT_MODE = 1 << 0;
    }
}

/// Ambient configuration for a [`crate::decoder::JpegDecoder`].
///
/// Carried alongside the parsed `Metadata`, not inside it: this is
/// caller-supplied policy, not something extracted from the file.
#[derive(Copy, Clone, Debug)]
pub struct DecoderOptions
{
    flags: DecoderFlags,
    max_width: u16,
    max_height: u16,
}

impl Default for DecoderOptions
{
    fn default() -> Self
    {
        DecoderOptions {
            flags: DecoderFlags::empty(),
            max_width: 16384,
            max_height: 16384,
        }
    }
}

impl DecoderOptions
{
    /// Create options with this crate's default guard rails:
    /// non-strict parsing, 16384x16384 maximum dimensions.
    pub fn new() -> Self
    {
        Self::default()
    }

    /// Reject minor conformance deviations instead of tolerating them.
    #[must_use]
    pub fn set_strict_mode(mut self, yes: bool) -> Self
    {
        self.flags.set(DecoderFlags::STRICT_MODE, yes);
        self
    }

    pub fn strict_mode(&self) -> bool
    {
        self.flags.contains(DecoderFlags::STRICT_MODE)
    }

    #[must_use]
    pub fn set_max_width(mut self, width: u16) -> Self
    {
        self.max_width = width;
        self
    }

    #[must_use]
    pub fn set_max_height(mut self, height: u16) -> Self
    {
        self.max_height = height;
        self
    }

    pub fn max_width(&self) -> usize
    {
        self.max_width as usize
    }

    pub fn max_height(&self) -> usize
    {
        self.max_height as usize
    }
}
