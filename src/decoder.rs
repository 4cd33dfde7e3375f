//! Top-level decoder: header parse, scan decode, MCU assembly.
#![allow(clippy::doc_markdown)]

use log::{debug, trace, warn};

use crate::bytestream::ZByteReader;
use crate::components::{ComponentSpec, SampleRatios};
use crate::entropy::decode_block;
use crate::errors::DecodeErrors;
use crate::headers::{parse_app0, parse_dht, parse_dqt, parse_dri, parse_sof, parse_sos, Metadata};
use crate::image::Image;
use crate::marker::Marker;
use crate::mcu::assemble_mcu;
use crate::misc::SOFMarkers;
use crate::options::DecoderOptions;

/// Decodes a single baseline sequential JPEG/JFIF image held entirely
/// in memory.
///
/// [`JpegDecoder::decode_headers`] parses only the segment markers up
/// to (and including) the scan header, letting a caller inspect
/// [`Metadata`]/[`JpegDecoder::info`] without paying for entropy
/// decode; [`JpegDecoder::decode`] runs the whole pipeline and returns
/// the cropped pixel grid.
pub struct JpegDecoder<'a>
{
    reader: ZByteReader<'a>,
    options: DecoderOptions,
    metadata: Metadata,
    headers_decoded: bool,
}

impl<'a> JpegDecoder<'a>
{
    pub fn new(data: &'a [u8]) -> Self
    {
        Self::new_with_options(data, DecoderOptions::new())
    }

    pub fn new_with_options(data: &'a [u8], options: DecoderOptions) -> Self
    {
        JpegDecoder {
            reader: ZByteReader::new(data),
            options,
            metadata: Metadata::new(),
            headers_decoded: false,
        }
    }

    /// Parsed header metadata. Only meaningful after
    /// [`JpegDecoder::decode_headers`] (or [`JpegDecoder::decode`])
    /// has succeeded.
    pub fn info(&self) -> &Metadata
    {
        &self.metadata
    }

    /// Walk every segment up to and including `SOS`, populating
    /// [`Metadata`]. Does not touch the entropy-coded scan payload.
    pub fn decode_headers(&mut self) -> Result<(), DecodeErrors>
    {
        if self.headers_decoded
        {
            return Ok(());
        }

        let soi = self.reader.get_u16_be()?;
        if soi != 0xFFD8
        {
            return Err(DecodeErrors::UnexpectedMarker("expected SOI at start of file"));
        }
        trace!("SOI");

        loop
        {
            let marker_byte = self.next_marker_byte()?;
            let marker = Marker::from_u8(marker_byte).ok_or(DecodeErrors::UnexpectedMarker(
                "expected a marker after 0xFF",
            ))?;

            match marker
            {
                Marker::SOI => return Err(DecodeErrors::UnexpectedMarker("duplicate SOI")),
                Marker::EOI => return Err(DecodeErrors::UnexpectedMarker("EOI before SOS")),
                Marker::APP(0) =>
                {
                    let length = self.reader.get_u16_be()?;
                    self.metadata.app0 = Some(parse_app0(&mut self.reader, length)?);
                }
                Marker::DQT =>
                {
                    let length = self.reader.get_u16_be()?;
                    parse_dqt(&mut self.reader, length, &mut self.metadata.quant_tables)?;
                }
                Marker::DHT =>
                {
                    let length = self.reader.get_u16_be()?;
                    parse_dht(
                        &mut self.reader,
                        length,
                        &mut self.metadata.dc_tables,
                        &mut self.metadata.ac_tables,
                    )?;
                }
                Marker::SOF0 =>
                {
                    let _length = self.reader.get_u16_be()?;
                    let sof = SOFMarkers::BaselineDct;
                    let (width, height, precision, components) =
                        parse_sof(&mut self.reader, sof, &self.options)?;
                    self.metadata.width = width;
                    self.metadata.height = height;
                    self.metadata.precision = precision;
                    self.metadata.components = components;
                    self.metadata.sof_marker = Some(sof);
                    debug!("frame is {width}x{height}, mode {}", sof.name());
                }
                Marker::DRI =>
                {
                    let _length = self.reader.get_u16_be()?;
                    let interval = parse_dri(&mut self.reader)?;
                    if interval != 0
                    {
                        return Err(DecodeErrors::Unsupported("restart interval"));
                    }
                }
                Marker::SOS =>
                {
                    let _length = self.reader.get_u16_be()?;
                    if self.metadata.sof_marker.is_none()
                    {
                        return Err(DecodeErrors::UnexpectedMarker("SOS before SOF0"));
                    }
                    parse_sos(&mut self.reader, &mut self.metadata.components)?;
                    self.headers_decoded = true;
                    return Ok(());
                }
                Marker::Other(byte) if Marker::is_unsupported_sof(byte) =>
                {
                    let name = SOFMarkers::from_byte(byte)
                        .map(SOFMarkers::name)
                        .unwrap_or("non-baseline start of frame");
                    return Err(DecodeErrors::Unsupported(name));
                }
                Marker::APP(_) | Marker::Other(_) =>
                {
                    let length = self.reader.get_u16_be()?;
                    self.reader.skip(length.saturating_sub(2) as usize)?;
                }
            }
        }
    }

    /// Advance past any stray fill bytes and return the marker byte
    /// following the next `0xFF`.
    fn next_marker_byte(&mut self) -> Result<u8, DecodeErrors>
    {
        loop
        {
            let byte = self.reader.get_u8()?;
            if byte != 0xFF
            {
                if self.options.strict_mode()
                {
                    return Err(DecodeErrors::UnexpectedMarker("expected 0xFF marker prefix"));
                }
                warn!("skipping stray non-marker byte {byte:#x} outside a segment");
                continue;
            }
            let next = self.reader.peek_u8()?;
            if next == 0xFF
            {
                // Fill byte before the real marker; consume and retry.
                self.reader.get_u8()?;
                continue;
            }
            self.reader.get_u8()?;
            return Ok(next);
        }
    }

    /// Run the full pipeline: headers, entropy decode, MCU assembly.
    /// Returns the image cropped to its declared width/height as a
    /// row-major RGB buffer.
    pub fn decode(&mut self) -> Result<(usize, usize, Vec<u8>), DecodeErrors>
    {
        self.decode_headers()?;

        let ratios = SampleRatios::from_components(&self.metadata.components);
        let mcu_w = ratios.mcu_width();
        let mcu_h = ratios.mcu_height();
        let width = self.metadata.width as usize;
        let height = self.metadata.height as usize;

        let mcu_cols = width.div_ceil(mcu_w);
        let mcu_rows = height.div_ceil(mcu_h);
        let padded_width = mcu_cols * mcu_w;
        let padded_height = mcu_rows * mcu_h;

        let mut image = Image::new(width, height, padded_width, padded_height);

        let scan_bytes = self.reader.remaining_bytes();
        let mut bit_reader = crate::bitstream::BitReader::new(scan_bytes);

        let mut components = self.metadata.components.clone();
        for component in &mut components
        {
            component.dc_prediction = 0;
        }

        let mut scratch: Vec<Vec<[i32; 64]>> = components
            .iter()
            .map(|c| vec![[0i32; 64]; c.blocks_per_mcu()])
            .collect();

        for mcu_row in 0..mcu_rows
        {
            for mcu_col in 0..mcu_cols
            {
                for (i, component) in components.iter_mut().enumerate()
                {
                    let dc_table = self.metadata.dc_tables[component.dc_table_id as usize]
                        .as_ref()
                        .ok_or(DecodeErrors::TableMissing("DC", component.dc_table_id))?;
                    let ac_table = self.metadata.ac_tables[component.ac_table_id as usize]
                        .as_ref()
                        .ok_or(DecodeErrors::TableMissing("AC", component.ac_table_id))?;
                    let quant_table = self.metadata.quant_tables[component.quant_table_id as usize]
                        .as_ref()
                        .ok_or(DecodeErrors::TableMissing("quantization", component.quant_table_id))?;

                    for block in scratch[i].iter_mut()
                    {
                        let mut coefficients = decode_block(
                            &mut bit_reader,
                            dc_table,
                            ac_table,
                            &mut component.dc_prediction,
                        )?;
                        crate::block::reconstruct_block(&mut coefficients, quant_table);
                        *block = coefficients;
                    }
                }

                assemble_mcu(&mut image, mcu_row, mcu_col, &components, ratios, &scratch);
            }
        }

        trace!(
            "decoded {} MCUs ({mcu_cols}x{mcu_rows})",
            mcu_cols * mcu_rows
        );

        let rgb = image.into_rgb();
        Ok((width, height, rgb))
    }
}
