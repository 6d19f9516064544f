/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Invert: Negate every sample in the image
use zune_core::colorspace::ColorSpace;

use pixfx_image::errors::ImageErrors;
use pixfx_image::image::Image;
use pixfx_image::traits::OperationsTrait;

/// Invert an image in place.
///
/// Scans the whole interleaved buffer, so on RGBA images the alpha
/// channel is inverted together with the color channels. That mirrors
/// the reference behavior and makes the operation an involution over
/// the full buffer.
#[derive(Default)]
pub struct Invert;

impl Invert {
    /// Create a new invert implementation
    #[must_use]
    pub fn new() -> Invert {
        Self
    }
}

impl OperationsTrait for Invert {
    fn name(&self) -> &'static str {
        "Invert"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        invert(image.data_mut());

        Ok(())
    }

    fn supported_colorspaces(&self) -> &'static [ColorSpace] {
        &[ColorSpace::RGB, ColorSpace::RGBA]
    }
}

/// Invert a pixel
///
/// The formula for inverting a 8 bit pixel
/// is `pixel[x,y] = 255 - pixel[x,y]`
pub fn invert(in_out_image: &mut [u8]) {
    in_out_image.iter_mut().for_each(|x| *x = u8::MAX - *x);
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;
    use zune_core::colorspace::ColorSpace;

    use pixfx_image::errors::ImageErrors;
    use pixfx_image::image::Image;
    use pixfx_image::traits::OperationsTrait;

    use crate::invert::{invert, Invert};

    #[test]
    fn known_values() {
        let mut pixels = [0, 255, 128, 127];

        invert(&mut pixels);

        assert_eq!(pixels, [255, 0, 127, 128]);
    }

    #[test]
    fn involution() {
        let mut pixels = vec![0_u8; 91 * 53 * 4];
        nanorand::WyRand::new().fill(&mut pixels);

        let original = pixels.clone();

        invert(&mut pixels);
        assert_ne!(pixels, original);

        invert(&mut pixels);
        assert_eq!(pixels, original);
    }

    #[test]
    fn alpha_is_inverted_too() {
        // full-buffer scan, channel role is not distinguished
        let mut pixels = [10, 20, 30, 100];

        invert(&mut pixels);

        assert_eq!(pixels[3], 155);
    }

    #[test]
    fn rejects_luma_images() {
        let mut image = Image::fill(128, ColorSpace::Luma, 4, 4).unwrap();

        let result = Invert::new().execute(&mut image);

        assert!(matches!(
            result,
            Err(ImageErrors::UnsupportedColorspace(ColorSpace::Luma, _, _))
        ));
    }
}
