/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Grayscale: Replace R, G and B with the pixel's luma
use zune_core::colorspace::ColorSpace;

use pixfx_image::errors::ImageErrors;
use pixfx_image::image::Image;
use pixfx_image::traits::OperationsTrait;

/// Convert an image to grayscale in place.
///
/// Every pixel's R, G and B channels are replaced with the luma
/// `Y = 0.299 R + 0.587 G + 0.114 B`, truncated to an integer.
/// The alpha channel, when present, is left as is.
#[derive(Default)]
pub struct Grayscale;

impl Grayscale {
    /// Create a new grayscale implementation
    #[must_use]
    pub fn new() -> Grayscale {
        Self
    }
}

impl OperationsTrait for Grayscale {
    fn name(&self) -> &'static str {
        "Grayscale"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let channels = image.channels();

        grayscale(image.data_mut(), channels);

        Ok(())
    }

    fn supported_colorspaces(&self) -> &'static [ColorSpace] {
        &[ColorSpace::RGB, ColorSpace::RGBA]
    }
}

/// Convert interleaved pixels to grayscale in place.
///
/// The luma is computed in `f64` and truncated toward zero, so e.g.
/// `(10, 20, 30)` maps to `18` and not `19`.
///
/// # Panics
/// If `channels` is less than three.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn grayscale(in_out_image: &mut [u8], channels: usize) {
    assert!(
        channels >= 3,
        "Grayscale requires at least three channels, got {channels}"
    );

    for pixel in in_out_image.chunks_exact_mut(channels) {
        let r = f64::from(pixel[0]);
        let g = f64::from(pixel[1]);
        let b = f64::from(pixel[2]);

        let luma = (0.299 * r + 0.587 * g + 0.114 * b) as u8;

        pixel[0] = luma;
        pixel[1] = luma;
        pixel[2] = luma;
    }
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;
    use zune_core::colorspace::ColorSpace;

    use pixfx_image::errors::ImageErrors;
    use pixfx_image::image::Image;
    use pixfx_image::traits::OperationsTrait;

    use crate::grayscale::{grayscale, Grayscale};

    #[test]
    fn known_values() {
        let mut pixels = [255, 0, 0, 0, 0, 255, 10, 20, 30];

        grayscale(&mut pixels, 3);

        // 0.299 * 255 = 76.245, 0.114 * 255 = 29.07,
        // 0.299 * 10 + 0.587 * 20 + 0.114 * 30 = 18.15
        assert_eq!(pixels, [76, 76, 76, 29, 29, 29, 18, 18, 18]);
    }

    #[test]
    fn output_channels_are_equal() {
        let mut pixels = vec![0_u8; 64 * 64 * 3];
        nanorand::WyRand::new().fill(&mut pixels);

        grayscale(&mut pixels, 3);

        for pixel in pixels.chunks_exact(3) {
            assert_eq!(pixel[0], pixel[1]);
            assert_eq!(pixel[1], pixel[2]);
        }
    }

    #[test]
    fn alpha_is_preserved() {
        let mut pixels = [100, 150, 200, 42, 1, 2, 3, 250];

        grayscale(&mut pixels, 4);

        assert_eq!(pixels[3], 42);
        assert_eq!(pixels[7], 250);
    }

    #[test]
    fn rejects_luma_images() {
        let mut image = Image::fill(128, ColorSpace::Luma, 4, 4).unwrap();

        let result = Grayscale::new().execute(&mut image);

        assert!(matches!(
            result,
            Err(ImageErrors::UnsupportedColorspace(ColorSpace::Luma, _, _))
        ));
    }
}
