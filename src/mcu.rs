/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! MCU assembly: chroma upsampling and `YCbCr`->RGB tiling.
use crate::color_convert::ycbcr_to_rgb;
use crate::components::{ComponentSpec, SampleRatios};
use crate::image::Image;

/// One component's reconstructed spatial blocks for a single MCU,
/// `sampling_v` rows of `sampling_h` blocks each, in row-major order
/// (block `(v, h)` at index `v * sampling_h + h`).
pub type ComponentBlocks<'a> = &'a [[i32; 64]];

/// Nearest-neighbour sample of a component's MCU-local blocks at
/// pixel position `(x, y)` within the MCU, expressed in that
/// component's own sampling grid (`sampling_h`/`sampling_v` blocks of
/// 8 samples each).
#[inline]
fn sample_at(blocks: ComponentBlocks, sampling_h: u8, x: usize, y: usize) -> i32
{
    let block_row = y / 8;
    let block_col = x / 8;
    let within_row = y % 8;
    let within_col = x % 8;
    let block = &blocks[block_row * sampling_h as usize + block_col];
    block[within_row * 8 + within_col]
}

/// Write one fully reconstructed MCU into `image` at MCU grid
/// position `(mcu_row, mcu_col)`.
///
/// `blocks` holds one entry per component in `components`'s order,
/// each the component's reconstructed blocks for this MCU. Chroma
/// components are up-sampled to the luma grid by nearest-neighbour
/// replication per their sampling ratio relative to `ratios`.
pub fn assemble_mcu(
    image: &mut Image, mcu_row: usize, mcu_col: usize, components: &[ComponentSpec],
    ratios: SampleRatios, blocks: &[Vec<[i32; 64]>],
)
{
    let mcu_w = ratios.mcu_width();
    let mcu_h = ratios.mcu_height();
    let origin_x = mcu_col * mcu_w;
    let origin_y = mcu_row * mcu_h;

    for y in 0..mcu_h
    {
        for x in 0..mcu_w
        {
            let mut samples = [0i32; 3];
            for (i, component) in components.iter().enumerate()
            {
                let vy = (y * component.sampling_v as usize) / ratios.max_v as usize;
                let vx = (x * component.sampling_h as usize) / ratios.max_h as usize;
                samples[i] = sample_at(&blocks[i], component.sampling_h, vx, vy);
            }

            let out = if components.len() == 1
            {
                let v = (samples[0] + 128).clamp(0, 255) as u8;
                [v, v, v]
            }
            else
            {
                ycbcr_to_rgb(samples[0], samples[1], samples[2])
            };

            image.set_pixel(origin_x + x, origin_y + y, out);
        }
    }
}
