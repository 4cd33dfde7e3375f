//! Segment/marker parsing: SOI, APP0, DQT, DHT, SOF0, SOS.
use log::{trace, warn};

use crate::bytestream::ZByteReader;
use crate::components::ComponentSpec;
use crate::errors::DecodeErrors;
use crate::huffman::HuffmanTable;
use crate::misc::SOFMarkers;
use crate::options::DecoderOptions;

/// JFIF `APP0` fields, informational only.
#[derive(Clone, Copy, Debug, Default)]
pub struct App0
{
    pub version_major: u8,
    pub version_minor: u8,
    pub density_units: u8,
    pub x_density: u16,
    pub y_density: u16,
}

/// Aggregate decoded from the header segments, read-only after
/// `decode_headers` returns except for each component's running DC
/// predictor, which is scan-local mutable state.
#[derive(Clone, Debug, Default)]
pub struct Metadata
{
    pub app0: Option<App0>,
    pub quant_tables: [Option<[u16; 64]>; 4],
    pub dc_tables: [Option<HuffmanTable>; 4],
    pub ac_tables: [Option<HuffmanTable>; 4],
    pub width: u16,
    pub height: u16,
    pub precision: u8,
    pub sof_marker: Option<SOFMarkers>,
    pub components: Vec<ComponentSpec>,
}

impl Metadata
{
    pub fn new() -> Self
    {
        Metadata {
            quant_tables: [None, None, None, None],
            dc_tables: [None, None, None, None],
            ac_tables: [None, None, None, None],
            ..Default::default()
        }
    }
}

/// Parse an `APP0` (JFIF) segment. `length` is the segment's declared
/// length, including the two length bytes themselves.
pub fn parse_app0(reader: &mut ZByteReader, length: u16) -> Result<App0, DecodeErrors>
{
    let start = reader.position();
    let identifier = reader.get_bytes(5)?;
    if identifier != b"JFIF\0"
    {
        warn!("APP0 segment without a JFIF identifier, treating as opaque");
        let consumed = reader.position() - start;
        reader.skip((length as usize).saturating_sub(2).saturating_sub(consumed))?;
        return Ok(App0::default());
    }
    let version_major = reader.get_u8()?;
    let version_minor = reader.get_u8()?;
    let density_units = reader.get_u8()?;
    let x_density = reader.get_u16_be()?;
    let y_density = reader.get_u16_be()?;
    let thumb_w = reader.get_u8()? as usize;
    let thumb_h = reader.get_u8()? as usize;
    reader.skip(thumb_w * thumb_h * 3)?;

    Ok(App0 {
        version_major,
        version_minor,
        density_units,
        x_density,
        y_density,
    })
}

/// Parse one or more quantization tables out of a `DQT` segment.
pub fn parse_dqt(
    reader: &mut ZByteReader, length: u16, tables: &mut [Option<[u16; 64]>; 4],
) -> Result<(), DecodeErrors>
{
    let mut remaining = length as i32 - 2;
    while remaining > 0
    {
        let info = reader.get_u8()?;
        let precision = info >> 4;
        let table_id = info & 0x0F;
        if table_id > 3
        {
            return Err(DecodeErrors::MalformedStatic(
                "quantization table id greater than 3",
            ));
        }

        let mut table = [0u16; 64];
        if precision == 0
        {
            for slot in table.iter_mut()
            {
                *slot = reader.get_u8()? as u16;
            }
            remaining -= 1 + 64;
        }
        else
        {
            for slot in table.iter_mut()
            {
                *slot = reader.get_u16_be()?;
            }
            remaining -= 1 + 128;
        }
        trace!("parsed quantization table {table_id}");
        tables[table_id as usize] = Some(table);
    }
    Ok(())
}

/// Parse one or more Huffman tables out of a `DHT` segment.
pub fn parse_dht(
    reader: &mut ZByteReader, length: u16, dc_tables: &mut [Option<HuffmanTable>; 4],
    ac_tables: &mut [Option<HuffmanTable>; 4],
) -> Result<(), DecodeErrors>
{
    let mut remaining = length as i32 - 2;
    while remaining > 0
    {
        let info = reader.get_u8()?;
        let class = info >> 4;
        let table_id = info & 0x0F;
        if table_id > 3
        {
            return Err(DecodeErrors::MalformedStatic("Huffman table id greater than 3"));
        }

        let mut counts = [0u8; 16];
        let mut total = 0usize;
        for c in counts.iter_mut()
        {
            *c = reader.get_u8()?;
            total += *c as usize;
        }
        let values = reader.get_bytes(total)?.to_vec();
        remaining -= 1 + 16 + total as i32;

        let table = HuffmanTable::build(&counts, values)?;
        trace!("parsed {} Huffman table {table_id}", if class == 0 { "DC" } else { "AC" });
        if class == 0
        {
            dc_tables[table_id as usize] = Some(table);
        }
        else
        {
            ac_tables[table_id as usize] = Some(table);
        }
    }
    Ok(())
}

/// Parse a `DRI` (define restart interval) segment, returning the
/// restart interval in MCUs. A nonzero interval means the encoder
/// emits `RST0..RST7` markers between MCU groups, which this decoder
/// does not support.
pub fn parse_dri(reader: &mut ZByteReader) -> Result<u16, DecodeErrors>
{
    let interval = reader.get_u16_be()?;
    trace!("parsed DRI: restart interval {interval}");
    Ok(interval)
}

/// Parse `SOF0` (baseline DCT start of frame).
pub fn parse_sof(
    reader: &mut ZByteReader, marker: SOFMarkers, options: &DecoderOptions,
) -> Result<(u16, u16, u8, Vec<ComponentSpec>), DecodeErrors>
{
    if !marker.is_baseline()
    {
        return Err(DecodeErrors::Unsupported(marker.name()));
    }

    let precision = reader.get_u8()?;
    if precision != 8
    {
        return Err(DecodeErrors::Unsupported("sample precision other than 8 bits"));
    }
    let height = reader.get_u16_be()?;
    let width = reader.get_u16_be()?;
    if width == 0 || height == 0
    {
        return Err(DecodeErrors::MalformedStatic("zero width or height"));
    }
    if width as usize > options.max_width() || height as usize > options.max_height()
    {
        return Err(DecodeErrors::MalformedStatic(
            "image dimensions exceed the configured maximum",
        ));
    }

    let num_components = reader.get_u8()?;
    if num_components != 1 && num_components != 3
    {
        return Err(DecodeErrors::Unsupported("component count other than 1 or 3"));
    }

    let mut components = Vec::with_capacity(num_components as usize);
    for _ in 0..num_components
    {
        let id = reader.get_u8()?;
        let sampling = reader.get_u8()?;
        let quant_table_id = reader.get_u8()?;
        let sampling_h = sampling >> 4;
        let sampling_v = sampling & 0x0F;
        if sampling_h == 0 || sampling_v == 0 || sampling_h > 4 || sampling_v > 4
        {
            return Err(DecodeErrors::MalformedStatic("invalid sampling factor"));
        }
        if components.iter().any(|c: &ComponentSpec| c.id == id)
        {
            return Err(DecodeErrors::MalformedStatic("duplicate component id"));
        }
        components.push(ComponentSpec::new(id, sampling_h, sampling_v, quant_table_id));
    }

    trace!("parsed SOF0: {width}x{height}, {num_components} components");
    Ok((width, height, precision, components))
}

/// Parse `SOS` (start of scan): binds each previously declared
/// component to its DC/AC table ids for this scan. Returns the
/// number of scan components parsed.
pub fn parse_sos(
    reader: &mut ZByteReader, components: &mut [ComponentSpec],
) -> Result<usize, DecodeErrors>
{
    let num_scan_components = reader.get_u8()?;
    if num_scan_components == 0 || num_scan_components as usize > components.len()
    {
        return Err(DecodeErrors::MalformedStatic("invalid scan component count"));
    }

    for _ in 0..num_scan_components
    {
        let id = reader.get_u8()?;
        let tables = reader.get_u8()?;
        let component = components
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(DecodeErrors::MalformedStatic(
                "scan references a component absent from the frame header",
            ))?;
        let dc_table_id = tables >> 4;
        let ac_table_id = tables & 0x0F;
        if dc_table_id > 3 || ac_table_id > 3
        {
            return Err(DecodeErrors::MalformedStatic(
                "scan references a DC/AC table id greater than 3",
            ));
        }
        component.dc_table_id = dc_table_id;
        component.ac_table_id = ac_table_id;
    }

    // Ss, Se, Ah/Al: spectral selection and successive approximation,
    // meaningful only for progressive scans. Always (0, 63, 0) in a
    // baseline scan; read and ignore.
    reader.skip(3)?;

    Ok(num_scan_components as usize)
}
