//! This crate provides a library for decoding baseline sequential
//! ITU-T Rec. T.81 (JPEG-1) images with Huffman entropy coding.
//!
//! # Features
//!  - Scalar, single-threaded decoding of the baseline sequential
//!    profile (SOF0) only.
//!  - A simple, numerically verifiable double-precision IDCT.
//!  - Nearest-neighbour chroma upsampling and `YCbCr` to RGB
//!    conversion.
//!
//! # Usage
//!
//! ```toml
//! [dependencies]
//! baseline-jpeg = "0.1.0"
//! ```
//!
//! # Examples
//!
//! ## Decode a JPEG buffer already held in memory.
//! ```no_run
//! use baseline_jpeg::JpegDecoder;
//!
//! let compressed: &[u8] = &[]; // a real JPEG's bytes
//! let mut decoder = JpegDecoder::new(compressed);
//! let (width, height, pixels) = decoder.decode().unwrap();
//! println!("{width}x{height}, {} RGB bytes", pixels.len());
//! ```
//!
//! ## Inspect headers without paying for entropy decode.
//! ```no_run
//! use baseline_jpeg::JpegDecoder;
//!
//! let compressed: &[u8] = &[];
//! let mut decoder = JpegDecoder::new(compressed);
//! decoder.decode_headers().unwrap();
//! let info = decoder.info();
//! println!("{}x{}", info.width, info.height);
//! ```
//!
//! # Scope
//! This crate deliberately only implements the baseline sequential
//! profile: no progressive, hierarchical, lossless, or arithmetic
//! coding modes, no restart markers, and no more than three
//! components. It always produces 24-bit RGB output.

#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::inline_always,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]
#![forbid(unsafe_code)]

#[macro_use]
extern crate log;

pub use crate::decoder::JpegDecoder;
pub use crate::errors::DecodeErrors;
pub use crate::headers::{App0, Metadata};
pub use crate::options::DecoderOptions;

mod bitstream;
mod block;
mod bytestream;
mod color_convert;
mod components;
mod decoder;
pub mod errors;
mod entropy;
mod headers;
mod huffman;
mod idct;
mod image;
mod marker;
mod mcu;
mod misc;
mod options;
