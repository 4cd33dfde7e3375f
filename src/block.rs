//! Per-block reconstruction: dequantize, inverse zig-zag, IDCT.
use crate::idct::idct2d;
use crate::misc::UN_ZIGZAG;

/// Dequantize, de-zigzag and IDCT a block of coefficients in place,
/// in that order, leaving 8x8 spatial samples roughly in
/// `(-128, 128)` before the level shift applied in colour
/// conversion.
pub fn reconstruct_block(coefficients: &mut [i32; 64], quant_table: &[u16; 64])
{
    for (coefficient, &quant) in coefficients.iter_mut().zip(quant_table.iter())
    {
        *coefficient *= quant as i32;
    }

    let mut spatial_order = [0i32; 64];
    for (linear_index, &spatial_index) in UN_ZIGZAG.iter().enumerate()
    {
        spatial_order[spatial_index] = coefficients[linear_index];
    }

    idct2d(&mut spatial_order);
    *coefficients = spatial_order;
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn unit_quant_table_dc_only_is_constant()
    {
        let quant = [1u16; 64];
        let mut block = [0i32; 64];
        block[0] = 64;
        reconstruct_block(&mut block, &quant);
        for &value in block.iter()
        {
            assert!((value - 8).abs() <= 1, "value={value}");
        }
    }
}
