/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Inverse discrete cosine transform.
//!
//! Straightforward double-precision separable IDCT (row pass, then
//! column pass), not a fixed-point fast variant.

const BLOCK_SIZE: usize = 8;

/// Precomputed `cos((2x+1)*u*pi/16) * alpha(u)` basis, indexed
/// `[x][u]`, shared by every row/column pass.
fn basis() -> [[f64; BLOCK_SIZE]; BLOCK_SIZE]
{
    let mut table = [[0f64; BLOCK_SIZE]; BLOCK_SIZE];
    for (x, row) in table.iter_mut().enumerate()
    {
        for (u, cell) in row.iter_mut().enumerate()
        {
            let alpha = if u == 0 { 1.0 / std::f64::consts::SQRT_2 } else { 1.0 };
            *cell = alpha * ((2 * x + 1) as f64 * u as f64 * std::f64::consts::PI / 16.0).cos();
        }
    }
    table
}

/// Inverse 1-D DCT-III over 8 coefficients.
fn idct_1d(input: &[f64; BLOCK_SIZE], basis: &[[f64; BLOCK_SIZE]; BLOCK_SIZE]) -> [f64; BLOCK_SIZE]
{
    let mut output = [0f64; BLOCK_SIZE];
    let scale = (2.0 / BLOCK_SIZE as f64).sqrt();
    for (x, out) in output.iter_mut().enumerate()
    {
        let mut sum = 0f64;
        for u in 0..BLOCK_SIZE
        {
            sum += basis[x][u] * input[u];
        }
        *out = scale * sum;
    }
    output
}

/// Apply the 2-D inverse DCT to a block in natural (spatial-frequency,
/// row-major) order, in place. Output values are left un-shifted,
/// nominally in `(-128, 128)`; the caller applies the level shift.
pub fn idct2d(block: &mut [i32; 64])
{
    let basis = basis();
    let mut floats = [0f64; 64];
    for (dst, src) in floats.iter_mut().zip(block.iter())
    {
        *dst = *src as f64;
    }

    // Rows first.
    let mut after_rows = [0f64; 64];
    for row in 0..BLOCK_SIZE
    {
        let mut input = [0f64; BLOCK_SIZE];
        input.copy_from_slice(&floats[row * BLOCK_SIZE..row * BLOCK_SIZE + BLOCK_SIZE]);
        let out = idct_1d(&input, &basis);
        after_rows[row * BLOCK_SIZE..row * BLOCK_SIZE + BLOCK_SIZE].copy_from_slice(&out);
    }

    // Then columns.
    for col in 0..BLOCK_SIZE
    {
        let mut input = [0f64; BLOCK_SIZE];
        for row in 0..BLOCK_SIZE
        {
            input[row] = after_rows[row * BLOCK_SIZE + col];
        }
        let out = idct_1d(&input, &basis);
        for row in 0..BLOCK_SIZE
        {
            block[row * BLOCK_SIZE + col] = out[row].round() as i32;
        }
    }
}
