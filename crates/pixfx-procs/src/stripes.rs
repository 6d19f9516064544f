/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Rainbow stripes: Stamp a red/green/blue row pattern over the image
use zune_core::colorspace::ColorSpace;

use pixfx_image::errors::ImageErrors;
use pixfx_image::image::Image;
use pixfx_image::traits::OperationsTrait;

/// Overwrite the color channels with horizontal rainbow stripes.
///
/// The source content is ignored; each row is painted pure red, green
/// or blue depending on `y % 3`. Alpha, when present, keeps its
/// original values.
#[derive(Default)]
pub struct RainbowStripes;

impl RainbowStripes {
    /// Create a new stripe implementation
    #[must_use]
    pub fn new() -> RainbowStripes {
        Self
    }
}

impl OperationsTrait for RainbowStripes {
    fn name(&self) -> &'static str {
        "Rainbow stripes"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let (width, _) = image.dimensions();
        let channels = image.channels();

        rainbow_stripes(image.data_mut(), width, channels);

        Ok(())
    }

    fn supported_colorspaces(&self) -> &'static [ColorSpace] {
        &[ColorSpace::RGB, ColorSpace::RGBA]
    }
}

/// Stripe colors, cycled by row index modulo three.
const STRIPES: [[u8; 3]; 3] = [[255, 0, 0], [0, 255, 0], [0, 0, 255]];

/// Paint every row with the stripe color selected by `y % 3`,
/// writing only channels 0..3 of each pixel.
///
/// # Panics
/// If `channels` is less than three or `width * channels` does not
/// evenly divide the buffer.
pub fn rainbow_stripes(in_out_image: &mut [u8], width: usize, channels: usize) {
    let stride = width * channels;

    assert!(
        channels >= 3,
        "Rainbow stripes require at least three channels, got {channels}"
    );
    assert_eq!(
        in_out_image.len() % stride,
        0,
        "Width does not evenly divide image"
    );

    for (y, row) in in_out_image.chunks_exact_mut(stride).enumerate() {
        let stripe = &STRIPES[y % 3];

        for pixel in row.chunks_exact_mut(channels) {
            pixel[..3].copy_from_slice(stripe);
        }
    }
}
