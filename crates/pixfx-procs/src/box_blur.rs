/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Box blur: Average each interior pixel over its 3×3 neighborhood
use pixfx_image::errors::ImageErrors;
use pixfx_image::image::Image;
use pixfx_image::traits::OperationsTrait;

/// Blur an image with an unweighted 3×3 box kernel.
///
/// The outermost one-pixel ring is passed through unfiltered, every
/// interior pixel becomes the mean of the nine samples centered on it,
/// computed per channel. Images narrower or shorter than three pixels
/// have no interior and come out unchanged.
#[derive(Default)]
pub struct BoxBlur;

impl BoxBlur {
    /// Create a new box blur implementation
    #[must_use]
    pub fn new() -> BoxBlur {
        Self
    }
}

impl OperationsTrait for BoxBlur {
    fn name(&self) -> &'static str {
        "Box blur"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let (width, height) = image.dimensions();
        let channels = image.channels();

        // the blur reads the original neighborhood while writing the
        // result, so it needs a destination separate from the source
        let mut destination = vec![0; image.data().len()];

        box_blur(image.data(), &mut destination, width, height, channels);

        image.replace_data(destination)
    }
}

/// Blur `in_image` into `out_image` with a 3×3 box kernel.
///
/// `out_image` is first seeded as a copy of `in_image`, which leaves
/// the border ring unfiltered; interior pixels are then overwritten
/// with the neighborhood mean (`sum / 9`, integer truncation).
///
/// # Panics
/// If the slice lengths differ or do not equal
/// `width * height * channels`.
#[allow(clippy::cast_possible_truncation)]
pub fn box_blur(
    in_image: &[u8], out_image: &mut [u8], width: usize, height: usize, channels: usize
) {
    assert_eq!(
        in_image.len(),
        width * height * channels,
        "Dimensions do not match the source buffer"
    );
    assert_eq!(
        in_image.len(),
        out_image.len(),
        "Source and destination lengths differ"
    );

    out_image.copy_from_slice(in_image);

    if width < 3 || height < 3 {
        // no interior pixels
        return;
    }

    let stride = width * channels;

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            for c in 0..channels {
                let mut sum: u32 = 0;

                for in_row in in_image[(y - 1) * stride..].chunks_exact(stride).take(3) {
                    let offset = (x - 1) * channels + c;

                    sum += u32::from(in_row[offset]);
                    sum += u32::from(in_row[offset + channels]);
                    sum += u32::from(in_row[offset + 2 * channels]);
                }

                out_image[y * stride + x * channels + c] = (sum / 9) as u8;
            }
        }
    }
}
