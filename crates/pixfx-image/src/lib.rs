/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core image representation for the `pixfx` crates.
//!
//! This crate provides the [`Image`](crate::image::Image) type, an
//! interleaved 8-bit pixel buffer with its width, height and colorspace,
//! together with the traits and error types shared by the filter
//! implementations in `pixfx-procs` and the driver in `pixfx-bin`.
//!
//! Decoding is handled by `zune-png`, encoding by the `png` crate, both
//! exposed through [`Image::open`](crate::image::Image::open) and
//! [`Image::save`](crate::image::Image::save).
#![warn(clippy::correctness, clippy::perf, clippy::pedantic)]
#![allow(
    clippy::needless_return,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod codecs;
pub mod errors;
pub mod image;
pub mod traits;
