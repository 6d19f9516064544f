/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The interleaved image representation.
//!
//! An [`Image`] owns a single flat buffer of 8-bit samples stored row
//! major with interleaved channels, i.e. sample `c` of the pixel at
//! `(x, y)` lives at `((y * width) + x) * channels + c`. The channel
//! count is implied by the colorspace (Luma=1, LumaA=2, RGB=3, RGBA=4).
use zune_core::colorspace::ColorSpace;

use crate::errors::ImageErrors;

/// Colorspaces an [`Image`] can be constructed with.
pub static SUPPORTED_COLORSPACES: [ColorSpace; 4] = [
    ColorSpace::Luma,
    ColorSpace::LumaA,
    ColorSpace::RGB,
    ColorSpace::RGBA
];

/// An 8-bit image with interleaved channels.
///
/// Cloning an image deep copies the pixel buffer, each clone is
/// fully independent of the original.
#[derive(Clone)]
pub struct Image {
    data:       Vec<u8>,
    width:      usize,
    height:     usize,
    colorspace: ColorSpace
}

impl Image {
    /// Create an image from an interleaved buffer of 8-bit samples.
    ///
    /// The buffer length must be exactly
    /// `width * height * colorspace.num_components()` and both
    /// dimensions must be non-zero.
    pub fn from_u8(
        data: Vec<u8>, width: usize, height: usize, colorspace: ColorSpace
    ) -> Result<Image, ImageErrors> {
        if width == 0 || height == 0 {
            return Err(ImageErrors::GenericStr("Image dimensions cannot be zero"));
        }
        if !SUPPORTED_COLORSPACES.contains(&colorspace) {
            return Err(ImageErrors::UnsupportedColorspace(
                colorspace,
                "image construction",
                &SUPPORTED_COLORSPACES
            ));
        }
        let expected = width * height * colorspace.num_components();

        if data.len() != expected {
            return Err(ImageErrors::DimensionsMisMatch(expected, data.len()));
        }

        Ok(Image {
            data,
            width,
            height,
            colorspace
        })
    }

    /// Create an image whose every sample is `value`.
    pub fn fill(
        value: u8, colorspace: ColorSpace, width: usize, height: usize
    ) -> Result<Image, ImageErrors> {
        let length = width * height * colorspace.num_components();

        Image::from_u8(vec![value; length], width, height, colorspace)
    }

    /// Return the image width and height
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Return the image colorspace
    pub const fn colorspace(&self) -> ColorSpace {
        self.colorspace
    }

    /// Return the number of interleaved channels per pixel
    pub fn channels(&self) -> usize {
        self.colorspace.num_components()
    }

    /// Get an immutable view of the pixel buffer
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get a mutable view of the pixel buffer
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Replace the pixel buffer with a new one of identical length.
    ///
    /// Used by operations that cannot work in place and hence write
    /// into a separate destination buffer.
    pub fn replace_data(&mut self, data: Vec<u8>) -> Result<(), ImageErrors> {
        if data.len() != self.data.len() {
            return Err(ImageErrors::DimensionsMisMatch(self.data.len(), data.len()));
        }
        self.data = data;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use zune_core::colorspace::ColorSpace;

    use crate::errors::ImageErrors;
    use crate::image::Image;

    #[test]
    fn construction_checks_length() {
        let result = Image::from_u8(vec![0; 10], 2, 2, ColorSpace::RGB);

        assert!(matches!(
            result,
            Err(ImageErrors::DimensionsMisMatch(12, 10))
        ));
    }

    #[test]
    fn construction_rejects_zero_dimensions() {
        let result = Image::from_u8(Vec::new(), 0, 4, ColorSpace::RGB);

        assert!(result.is_err());
    }

    #[test]
    fn fill_produces_expected_layout() {
        let image = Image::fill(77, ColorSpace::RGBA, 3, 2).unwrap();

        assert_eq!(image.dimensions(), (3, 2));
        assert_eq!(image.channels(), 4);
        assert!(image.data().iter().all(|x| *x == 77));
    }

    #[test]
    fn clones_are_independent() {
        let image = Image::fill(1, ColorSpace::Luma, 4, 4).unwrap();
        let mut copy = image.clone();

        copy.data_mut().fill(9);

        assert!(image.data().iter().all(|x| *x == 1));
    }

    #[test]
    fn replace_data_checks_length() {
        let mut image = Image::fill(0, ColorSpace::RGB, 2, 2).unwrap();

        assert!(image.replace_data(vec![0; 5]).is_err());
        assert!(image.replace_data(vec![0; 12]).is_ok());
    }
}
