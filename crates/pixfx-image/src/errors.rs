/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during image loading, processing and saving
use std::fmt::{Debug, Formatter};

use zune_core::colorspace::ColorSpace;

/// All possible image errors that can occur.
///
/// Contains every decoding, processing and encoding error the
/// pixfx crates can surface.
pub enum ImageErrors {
    /// The PNG decoder rejected the input
    PngDecodeErrors(zune_png::error::PngDecodeErrors),
    /// The PNG encoder rejected the output
    PngEncodeErrors(png::EncodingError),
    /// An underlying read or write failed
    IoErrors(std::io::Error),
    /// An operation does not support the image's colorspace.
    ///
    /// Carries the offending colorspace, the operation name and
    /// the colorspaces the operation does support
    UnsupportedColorspace(ColorSpace, &'static str, &'static [ColorSpace]),
    /// The source image stores samples wider than eight bits
    UnsupportedDepth(&'static str),
    /// A pixel buffer length does not match `width * height * channels`.
    ///
    /// Stores expected length and found length
    DimensionsMisMatch(usize, usize),
    /// Generic errors
    GenericStr(&'static str),
    /// Generic errors which have more context
    GenericString(String)
}

impl Debug for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PngDecodeErrors(ref error) => {
                writeln!(f, "Png decoding failed: {error:?}")
            }
            Self::PngEncodeErrors(ref error) => {
                writeln!(f, "Png encoding failed: {error}")
            }
            Self::IoErrors(ref error) => {
                writeln!(f, "I/O error: {error}")
            }
            Self::UnsupportedColorspace(present, operation, supported) => {
                writeln!(
                    f,
                    "{operation} cannot run on {present:?}, supported colorspaces are {supported:?}"
                )
            }
            Self::UnsupportedDepth(reason) => {
                writeln!(f, "Unsupported bit depth: {reason}")
            }
            Self::DimensionsMisMatch(expected, found) => {
                writeln!(
                    f,
                    "Dimensions mismatch, expected a buffer of length {expected} but found {found}"
                )
            }
            Self::GenericStr(err) => {
                writeln!(f, "{err}")
            }
            Self::GenericString(err) => {
                writeln!(f, "{err}")
            }
        }
    }
}

impl From<zune_png::error::PngDecodeErrors> for ImageErrors {
    fn from(error: zune_png::error::PngDecodeErrors) -> Self {
        Self::PngDecodeErrors(error)
    }
}

impl From<png::EncodingError> for ImageErrors {
    fn from(error: png::EncodingError) -> Self {
        Self::PngEncodeErrors(error)
    }
}

impl From<std::io::Error> for ImageErrors {
    fn from(error: std::io::Error) -> Self {
        Self::IoErrors(error)
    }
}

impl From<&'static str> for ImageErrors {
    fn from(error: &'static str) -> Self {
        Self::GenericStr(error)
    }
}

impl From<String> for ImageErrors {
    fn from(error: String) -> Self {
        Self::GenericString(error)
    }
}
