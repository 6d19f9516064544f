/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image processing routines for `pixfx-image`
//!
//! Each module implements one pixel-level effect as a plain function
//! over interleaved sample slices, plus a wrapper struct implementing
//! the `OperationsTrait` defined by `pixfx-image`.
//!
//! # Example
//! - Invert an image
//! ```
//! use zune_core::colorspace::ColorSpace;
//! use pixfx_image::image::Image;
//! use pixfx_image::traits::OperationsTrait;
//! use pixfx_procs::invert::Invert;
//! let mut image = Image::fill(233, ColorSpace::RGB, 100, 100).unwrap();
//! // execute the filter
//! Invert::new().execute(&mut image).unwrap();
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod box_blur;
pub mod flop;
pub mod grayscale;
pub mod invert;
pub mod stripes;
