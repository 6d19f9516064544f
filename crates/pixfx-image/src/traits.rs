/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Traits shared between the pixfx crates
use log::trace;
use zune_core::colorspace::ColorSpace;

use crate::errors::ImageErrors;
use crate::image::{Image, SUPPORTED_COLORSPACES};

/// This encapsulates an image operation.
///
/// Each filter in `pixfx-procs` implements this trait; the driver
/// invokes filters only through [`execute`](OperationsTrait::execute),
/// which performs the colorspace check before dispatching to the
/// filter's own [`execute_impl`](OperationsTrait::execute_impl).
pub trait OperationsTrait {
    /// Get the name of this operation
    fn name(&self) -> &'static str;

    /// Execute the operation on the image, without any
    /// preliminary checks.
    ///
    /// # Errors
    /// Any operation error is propagated to the caller
    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors>;

    /// Colorspaces the operation can handle.
    ///
    /// Defaults to every colorspace an [`Image`] can hold; operations
    /// that read pixels as R/G/B triples override this to reject
    /// grayscale inputs.
    fn supported_colorspaces(&self) -> &'static [ColorSpace] {
        &SUPPORTED_COLORSPACES
    }

    /// Execute the operation, checking that the image colorspace
    /// is supported first.
    ///
    /// # Errors
    /// - [`ImageErrors::UnsupportedColorspace`] if the image colorspace
    ///   is not in [`supported_colorspaces`](OperationsTrait::supported_colorspaces)
    /// - Any error the operation itself raises
    fn execute(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let colorspace = image.colorspace();

        if !self.supported_colorspaces().contains(&colorspace) {
            return Err(ImageErrors::UnsupportedColorspace(
                colorspace,
                self.name(),
                self.supported_colorspaces()
            ));
        }

        trace!("Running operation {}", self.name());

        self.execute_impl(image)
    }
}
