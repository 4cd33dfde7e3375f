mod common;

use baseline_jpeg::errors::DecodeErrors;
use baseline_jpeg::JpegDecoder;
use common::{build_jpeg, single_symbol_table, Component};

#[test]
fn truncated_after_soi_is_truncated_input()
{
    let mut decoder = JpegDecoder::new(&[0xFF, 0xD8, 0xA4]);
    let err = decoder.decode_headers().unwrap_err();
    assert!(matches!(err, DecodeErrors::TruncatedInput));
}

#[test]
fn missing_soi_is_rejected()
{
    let mut decoder = JpegDecoder::new(&[0xFF, 0xDB, 0x00, 0x03, 0x00]);
    let err = decoder.decode_headers().unwrap_err();
    assert!(matches!(err, DecodeErrors::UnexpectedMarker(_)));
}

#[test]
fn sos_before_sof_is_rejected()
{
    let tables = [
        single_symbol_table(0, 0, 0),
        single_symbol_table(1, 0, 0x00),
    ];
    // SOS bytes built by hand, skipping SOF0 entirely.
    let mut bytes = vec![0xFF, 0xD8];
    for table in &tables
    {
        bytes.extend_from_slice(&[0xFF, 0xC4]);
        let length = 2 + 1 + 16 + table.values.len();
        bytes.push((length >> 8) as u8);
        bytes.push((length & 0xFF) as u8);
        bytes.push((table.class << 4) | table.id);
        bytes.extend_from_slice(&table.counts);
        bytes.extend_from_slice(&table.values);
    }
    bytes.extend_from_slice(&[0xFF, 0xDA, 0x00, 0x08, 0x01, 0x01, 0x00, 0x00, 0x3F, 0x00]);

    let mut decoder = JpegDecoder::new(&bytes);
    let err = decoder.decode_headers().unwrap_err();
    assert!(matches!(err, DecodeErrors::UnexpectedMarker(_)));
}

#[test]
fn quant_table_id_out_of_range_is_malformed()
{
    let mut bytes = vec![0xFF, 0xD8];
    bytes.extend_from_slice(&[0xFF, 0xDB, 0x00, 0x43, 0x04]); // table id 4
    bytes.extend(std::iter::repeat(1u8).take(64));

    let mut decoder = JpegDecoder::new(&bytes);
    let err = decoder.decode_headers().unwrap_err();
    assert!(matches!(err, DecodeErrors::MalformedStatic(_)));
}

#[test]
fn zero_width_frame_is_malformed()
{
    let components = [Component {
        id: 1,
        sampling_h: 1,
        sampling_v: 1,
        quant_id: 0,
        dc_table_id: 0,
        ac_table_id: 0,
    }];
    let tables = [
        single_symbol_table(0, 0, 0),
        single_symbol_table(1, 0, 0x00),
    ];
    let bytes = build_jpeg(0, 1, &components, 1, &tables, &[0x00]);

    let mut decoder = JpegDecoder::new(&bytes);
    let err = decoder.decode_headers().unwrap_err();
    assert!(matches!(err, DecodeErrors::MalformedStatic(_)));
}

#[test]
fn entropy_stream_exhausted_before_eob_is_truncated_input()
{
    let components = [Component {
        id: 1,
        sampling_h: 1,
        sampling_v: 1,
        quant_id: 0,
        dc_table_id: 0,
        ac_table_id: 0,
    }];
    let tables = [
        single_symbol_table(0, 0, 0),
        single_symbol_table(1, 0, 0x00),
    ];
    // No entropy bytes at all: the DC bit can never be read.
    let bytes = build_jpeg(1, 1, &components, 1, &tables, &[]);

    let mut decoder = JpegDecoder::new(&bytes);
    let err = decoder.decode().unwrap_err();
    assert!(matches!(err, DecodeErrors::TruncatedInput));
}

#[test]
fn nonzero_restart_interval_is_unsupported()
{
    let mut bytes = vec![0xFF, 0xD8]; // SOI

    // DQT: one 8-bit table, id 0.
    bytes.extend_from_slice(&[0xFF, 0xDB, 0x00, 0x43, 0x00]);
    bytes.extend(std::iter::repeat(1u8).take(64));

    // DHT: DC table id 0, single code "0" -> symbol 0.
    bytes.extend_from_slice(&[0xFF, 0xC4, 0x00, 0x14, 0x00]);
    bytes.extend_from_slice(&[1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    bytes.push(0);

    // DHT: AC table id 0, single code "0" -> symbol 0x00 (EOB).
    bytes.extend_from_slice(&[0xFF, 0xC4, 0x00, 0x14, 0x10]);
    bytes.extend_from_slice(&[1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    bytes.push(0x00);

    // SOF0: 1x1, 1 component, sampling 1x1, quant id 0.
    bytes.extend_from_slice(&[
        0xFF, 0xC0, 0x00, 0x0B, 0x08, 0x00, 0x01, 0x00, 0x01, 0x01, 0x01, 0x11, 0x00,
    ]);

    // DRI: restart interval of 1 MCU.
    bytes.extend_from_slice(&[0xFF, 0xDD, 0x00, 0x04, 0x00, 0x01]);

    let mut decoder = JpegDecoder::new(&bytes);
    let err = decoder.decode_headers().unwrap_err();
    assert!(matches!(err, DecodeErrors::Unsupported(_)));
}

#[test]
fn two_component_frame_is_unsupported()
{
    let components = [
        Component {
            id: 1,
            sampling_h: 1,
            sampling_v: 1,
            quant_id: 0,
            dc_table_id: 0,
            ac_table_id: 0,
        },
        Component {
            id: 2,
            sampling_h: 1,
            sampling_v: 1,
            quant_id: 0,
            dc_table_id: 0,
            ac_table_id: 0,
        },
    ];
    let tables = [
        single_symbol_table(0, 0, 0),
        single_symbol_table(1, 0, 0x00),
    ];
    let bytes = build_jpeg(1, 1, &components, 1, &tables, &[0x00, 0x00]);

    let mut decoder = JpegDecoder::new(&bytes);
    let err = decoder.decode_headers().unwrap_err();
    assert!(matches!(err, DecodeErrors::Unsupported(_)));
}

#[test]
fn scan_references_undeclared_component_is_malformed()
{
    let tables = [
        single_symbol_table(0, 0, 0),
        single_symbol_table(1, 0, 0x00),
    ];
    let mut bytes = vec![0xFF, 0xD8];
    bytes.extend_from_slice(&[0xFF, 0xDB, 0x00, 0x43, 0x00]);
    bytes.extend(std::iter::repeat(1u8).take(64));
    for table in &tables
    {
        bytes.extend_from_slice(&[0xFF, 0xC4]);
        let length = 2 + 1 + 16 + table.values.len();
        bytes.push((length >> 8) as u8);
        bytes.push((length & 0xFF) as u8);
        bytes.push((table.class << 4) | table.id);
        bytes.extend_from_slice(&table.counts);
        bytes.extend_from_slice(&table.values);
    }
    // SOF0 declares component id 1.
    bytes.extend_from_slice(&[
        0xFF, 0xC0, 0x00, 0x0B, 0x08, 0x00, 0x01, 0x00, 0x01, 0x01, 0x01, 0x11, 0x00,
    ]);
    // SOS references component id 2, which was never declared.
    bytes.extend_from_slice(&[0xFF, 0xDA, 0x00, 0x08, 0x01, 0x02, 0x00, 0x00, 0x3F, 0x00]);

    let mut decoder = JpegDecoder::new(&bytes);
    let err = decoder.decode_headers().unwrap_err();
    assert!(matches!(err, DecodeErrors::MalformedStatic(_)));
}
