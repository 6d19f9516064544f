/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! PNG entry and exit points for [`Image`].
//!
//! Decoding goes through `zune-png`, encoding through the `png` crate
//! since the zune PNG decoder has no matching encoder.
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use log::info;
use zune_core::colorspace::ColorSpace;
use zune_core::result::DecodingResult;
use zune_png::PngDecoder;

use crate::errors::ImageErrors;
use crate::image::{Image, SUPPORTED_COLORSPACES};

impl Image {
    /// Read and decode a PNG file into an image.
    ///
    /// # Errors
    /// - [`ImageErrors::IoErrors`] if the file cannot be read
    /// - [`ImageErrors::PngDecodeErrors`] if the contents are not a valid PNG
    /// - [`ImageErrors::UnsupportedDepth`] for sixteen bit images
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Image, ImageErrors> {
        let contents = std::fs::read(path)?;

        Image::read(&contents)
    }

    /// Decode a PNG image already in memory.
    pub fn read(contents: &[u8]) -> Result<Image, ImageErrors> {
        let mut decoder = PngDecoder::new(contents);

        let pixels = decoder.decode()?;

        // both are always present once decode succeeds
        let (width, height) = decoder
            .get_dimensions()
            .ok_or(ImageErrors::GenericStr("Png decoder returned no dimensions"))?;
        let colorspace = decoder
            .get_colorspace()
            .ok_or(ImageErrors::GenericStr("Png decoder returned no colorspace"))?;

        match pixels {
            DecodingResult::U8(data) => Image::from_u8(data, width, height, colorspace),
            // sixteen bit (or wider) results
            _ => Err(ImageErrors::UnsupportedDepth(
                "only 8 bit PNG images are supported"
            ))
        }
    }

    /// Encode the image as an eight bit PNG and write it to `path`.
    ///
    /// # Errors
    /// - [`ImageErrors::IoErrors`] if the file cannot be created
    /// - [`ImageErrors::PngEncodeErrors`] if encoding fails
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ImageErrors> {
        let color = match self.colorspace() {
            ColorSpace::Luma => png::ColorType::Grayscale,
            ColorSpace::LumaA => png::ColorType::GrayscaleAlpha,
            ColorSpace::RGB => png::ColorType::Rgb,
            ColorSpace::RGBA => png::ColorType::Rgba,
            colorspace => {
                return Err(ImageErrors::UnsupportedColorspace(
                    colorspace,
                    "png encode",
                    &SUPPORTED_COLORSPACES
                ))
            }
        };
        let (width, height) = self.dimensions();

        let file = BufWriter::new(File::create(path.as_ref())?);

        let mut encoder = png::Encoder::new(file, width as u32, height as u32);
        encoder.set_color(color);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(self.data())?;
        writer.finish()?;

        info!("Wrote {}", path.as_ref().display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use zune_core::colorspace::ColorSpace;

    use crate::errors::ImageErrors;
    use crate::image::Image;

    #[test]
    fn open_missing_file_is_io_error() {
        let result = Image::open("/definitely/not/a/real/input.png");

        assert!(matches!(result, Err(ImageErrors::IoErrors(_))));
    }

    #[test]
    fn read_garbage_is_decode_error() {
        let result = Image::read(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);

        assert!(matches!(result, Err(ImageErrors::PngDecodeErrors(_))));
    }

    #[test]
    fn save_then_open_preserves_pixels() {
        let data: Vec<u8> = (0..4 * 4 * 3).map(|x| x as u8).collect();
        let image = Image::from_u8(data, 4, 4, ColorSpace::RGB).unwrap();

        let path = std::env::temp_dir().join("pixfx_codec_roundtrip.png");
        image.save(&path).unwrap();

        let decoded = Image::open(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(decoded.dimensions(), (4, 4));
        assert_eq!(decoded.colorspace(), ColorSpace::RGB);
        assert_eq!(decoded.data(), image.data());
    }
}
