//! Bit-level reader over the entropy-coded scan payload.
use crate::errors::DecodeErrors;
use crate::marker::Marker;

/// MSB-first bit cursor with JPEG byte-stuffing removed transparently.
///
/// A literal `0xFF` in the entropy stream is written on the wire as
/// `0xFF 0x00`; this reader drops the stuffing `0x00` as it refills
/// its internal bit buffer. When a `0xFF` is instead followed by a
/// real marker byte, the scan has ended: the marker is stashed in
/// `marker` for the orchestrator to inspect, and further bit reads
/// return `TruncatedInput`.
pub struct BitReader<'a>
{
    data: &'a [u8],
    pos: usize,
    /// Bit accumulator, filled MSB-first; `bits_left` tracks how many
    /// of its low bits are valid.
    accumulator: u64,
    bits_left: u32,
    /// The marker that terminated the entropy stream, if any has been
    /// seen yet.
    marker: Option<Marker>,
}

impl<'a> BitReader<'a>
{
    pub fn new(data: &'a [u8]) -> Self
    {
        BitReader {
            data,
            pos: 0,
            accumulator: 0,
            bits_left: 0,
            marker: None,
        }
    }

    /// The marker (if any) that ended the entropy-coded segment.
    pub fn marker(&self) -> Option<Marker>
    {
        self.marker
    }

    /// Byte offset into the original slice immediately after the
    /// marker pair that ended the scan, or the end of the slice if
    /// none was found. Used by the caller to resume segment parsing.
    pub fn position_after_marker(&self) -> usize
    {
        self.pos
    }

    fn refill(&mut self, need: u32) -> Result<(), DecodeErrors>
    {
        while self.bits_left < need
        {
            if self.marker.is_some()
            {
                return Err(DecodeErrors::TruncatedInput);
            }
            if self.pos >= self.data.len()
            {
                return Err(DecodeErrors::TruncatedInput);
            }
            let byte = self.data[self.pos];
            self.pos += 1;

            if byte == 0xFF
            {
                let next = *self.data.get(self.pos).ok_or(DecodeErrors::TruncatedInput)?;
                if next == 0x00
                {
                    self.pos += 1;
                }
                else if let Some(marker) = Marker::from_u8(next)
                {
                    self.pos += 1;
                    self.marker = Some(marker);
                    // Pad the remaining accumulator with zero bits so
                    // callers draining an End-Of-Block past the last
                    // real byte do not spuriously fail.
                    self.accumulator <<= 8;
                    self.bits_left += 8;
                    continue;
                }
                else
                {
                    return Err(DecodeErrors::CorruptStuffing);
                }
            }

            self.accumulator = (self.accumulator << 8) | u64::from(byte);
            self.bits_left += 8;
        }
        Ok(())
    }

    /// Read a single bit (0 or 1).
    pub fn read_bit(&mut self) -> Result<u8, DecodeErrors>
    {
        self.refill(1)?;
        self.bits_left -= 1;
        Ok(((self.accumulator >> self.bits_left) & 1) as u8)
    }

    /// Read `n` bits (`0..=16`) as an unsigned integer, most
    /// significant bit first.
    pub fn read_bits(&mut self, n: u32) -> Result<u32, DecodeErrors>
    {
        if n == 0
        {
            return Ok(0);
        }
        self.refill(n)?;
        self.bits_left -= n;
        let value = (self.accumulator >> self.bits_left) & ((1u64 << n) - 1);
        Ok(value as u32)
    }

}

/// Sign-extend a JPEG-coded magnitude: `size` bits were read as the
/// unsigned value `value`; recover the signed coefficient per the
/// DC-difference / AC-coefficient convention shared by both.
pub fn extend(value: u32, size: u32) -> i32
{
    if size == 0
    {
        return 0;
    }
    let half = 1i32 << (size - 1);
    let value = value as i32;
    if value < half
    {
        value - (1 << size) + 1
    }
    else
    {
        value
    }
}
