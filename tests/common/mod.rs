//! Hand-built minimal JPEG byte streams for the integration tests in
//! this directory. No external fixture files or comparison crates:
//! every scenario constructs its own bytes so the test suite has no
//! dependency beyond this crate itself.

/// Route the crate's `trace!`/`debug!`/`warn!` instrumentation to
/// stderr for the duration of the test process. Safe to call from
/// every test; only the first call has any effect.
#[allow(dead_code)]
pub fn init_logging()
{
    let _ = env_logger::builder().is_test(true).try_init();
}

pub struct Component
{
    pub id: u8,
    pub sampling_h: u8,
    pub sampling_v: u8,
    pub quant_id: u8,
    pub dc_table_id: u8,
    pub ac_table_id: u8,
}

pub struct HuffmanSpec
{
    pub class: u8, // 0 = DC, 1 = AC
    pub id: u8,
    pub counts: [u8; 16],
    pub values: Vec<u8>,
}

fn push_u16_be(out: &mut Vec<u8>, value: u16)
{
    out.push((value >> 8) as u8);
    out.push((value & 0xFF) as u8);
}

/// Build a minimal baseline JFIF-less JPEG (no APP0) with the given
/// geometry, one quantization table (id 0, all entries `quant_value`),
/// the given Huffman tables, and the given scan components, followed
/// by `entropy` as the raw scan payload bytes.
#[allow(clippy::too_many_arguments)]
pub fn build_jpeg(
    width: u16, height: u16, components: &[Component], quant_value: u8,
    huffman_tables: &[HuffmanSpec], entropy: &[u8],
) -> Vec<u8>
{
    let mut out = Vec::new();
    out.extend_from_slice(&[0xFF, 0xD8]); // SOI

    // DQT: a single 8-bit precision table, id 0.
    out.extend_from_slice(&[0xFF, 0xDB]);
    push_u16_be(&mut out, 2 + 1 + 64);
    out.push(0x00); // precision 0 (8-bit), table id 0
    out.extend(std::iter::repeat(quant_value).take(64));

    // DHT: one segment per supplied table.
    for table in huffman_tables
    {
        out.extend_from_slice(&[0xFF, 0xC4]);
        let length = 2 + 1 + 16 + table.values.len();
        push_u16_be(&mut out, length as u16);
        out.push((table.class << 4) | table.id);
        out.extend_from_slice(&table.counts);
        out.extend_from_slice(&table.values);
    }

    // SOF0.
    out.extend_from_slice(&[0xFF, 0xC0]);
    let sof_length = 2 + 1 + 2 + 2 + 1 + 3 * components.len();
    push_u16_be(&mut out, sof_length as u16);
    out.push(8); // precision
    push_u16_be(&mut out, height);
    push_u16_be(&mut out, width);
    out.push(components.len() as u8);
    for component in components
    {
        out.push(component.id);
        out.push((component.sampling_h << 4) | component.sampling_v);
        out.push(component.quant_id);
    }

    // SOS.
    out.extend_from_slice(&[0xFF, 0xDA]);
    let sos_length = 2 + 1 + 2 * components.len() + 3;
    push_u16_be(&mut out, sos_length as u16);
    out.push(components.len() as u8);
    for component in components
    {
        out.push(component.id);
        out.push((component.dc_table_id << 4) | component.ac_table_id);
    }
    out.extend_from_slice(&[0, 63, 0]); // Ss, Se, Ah/Al

    out.extend_from_slice(entropy);
    out
}

/// A Huffman table with a single code of length 1 (`"0"`) mapping to
/// `symbol`. Used wherever a scenario needs a fixed, known-length
/// code rather than a full realistic table.
pub fn single_symbol_table(class: u8, id: u8, symbol: u8) -> HuffmanSpec
{
    let mut counts = [0u8; 16];
    counts[0] = 1;
    HuffmanSpec {
        class,
        id,
        counts,
        values: vec![symbol],
    }
}

/// A Huffman table with two length-1 codes: `"0"` -> `first`,
/// `"1"` -> `second`.
pub fn two_symbol_table(class: u8, id: u8, first: u8, second: u8) -> HuffmanSpec
{
    let mut counts = [0u8; 16];
    counts[0] = 2;
    HuffmanSpec {
        class,
        id,
        counts,
        values: vec![first, second],
    }
}
