/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Flop: Reflect pixels around the central y-axis
use pixfx_image::errors::ImageErrors;
use pixfx_image::image::Image;
use pixfx_image::traits::OperationsTrait;

/// Creates a horizontal mirror image by reflecting the pixels around the central y-axis
///```text
///old image     new image
///┌─────────┐   ┌──────────┐
///│a b c d e│   │e d c b a │
///│f g h i j│   │j i h g f │
///└─────────┘   └──────────┘
///```
#[derive(Default)]
pub struct Flop;

impl Flop {
    /// Create a new flop implementation
    #[must_use]
    pub fn new() -> Flop {
        Self
    }
}

impl OperationsTrait for Flop {
    fn name(&self) -> &'static str {
        "Flop"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let (width, _) = image.dimensions();
        let channels = image.channels();

        flop(image.data_mut(), width, channels);

        Ok(())
    }
}

/// Flop an interleaved image in place.
///
/// Per row, the pixel at column `x` swaps with the pixel at column
/// `width - 1 - x`, all channels moving together. With an odd width
/// the middle column maps to itself and is untouched.
///
/// # Panics
/// If `width * channels` does not evenly divide the buffer.
pub fn flop(in_out_image: &mut [u8], width: usize, channels: usize) {
    let stride = width * channels;

    assert_eq!(
        in_out_image.len() % stride,
        0,
        "Width does not evenly divide image"
    );

    let half = (width / 2) * channels;

    for width_chunks in in_out_image.chunks_exact_mut(stride) {
        let (left_to_right, rest) = width_chunks.split_at_mut(half);
        // skips the middle pixel of odd-width rows
        let tail_start = rest.len() - half;
        let right_to_left = &mut rest[tail_start..];

        // iterate and swap whole pixels
        for (ltr, rtl) in left_to_right
            .chunks_exact_mut(channels)
            .zip(right_to_left.chunks_exact_mut(channels).rev())
        {
            ltr.swap_with_slice(rtl);
        }
    }
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;

    use crate::flop::flop;

    #[test]
    fn pixels_swap_atomically() {
        let mut pixels = [1, 2, 3, 4, 5, 6];

        flop(&mut pixels, 2, 3);

        assert_eq!(pixels, [4, 5, 6, 1, 2, 3]);
    }

    #[test]
    fn odd_width_keeps_middle_column() {
        let mut pixels = [10, 11, 20, 21, 30, 31];

        flop(&mut pixels, 3, 2);

        assert_eq!(pixels, [30, 31, 20, 21, 10, 11]);
    }

    #[test]
    fn involution() {
        let mut pixels = vec![0_u8; 31 * 17 * 4];
        nanorand::WyRand::new().fill(&mut pixels);

        let original = pixels.clone();

        flop(&mut pixels, 31, 4);
        flop(&mut pixels, 31, 4);

        assert_eq!(pixels, original);
    }

    #[test]
    fn single_column_is_noop() {
        let mut pixels = vec![0_u8; 9 * 3];
        nanorand::WyRand::new().fill(&mut pixels);

        let original = pixels.clone();

        flop(&mut pixels, 1, 3);

        assert_eq!(pixels, original);
    }

    #[test]
    fn rows_are_independent() {
        let mut pixels = [1, 2, 3, 4];

        flop(&mut pixels, 2, 1);

        assert_eq!(pixels, [2, 1, 4, 3]);
    }
}
