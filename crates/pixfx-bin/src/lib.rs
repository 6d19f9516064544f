/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The pixfx driver.
//!
//! Loads `input.png` from the working directory, runs each of the five
//! effects against its own copy of the decoded image and writes one
//! PNG per effect. The five outputs are independent; a failing output
//! is reported and the remaining ones are still attempted.
use std::process::exit;

use log::{error, info, Level};

use pixfx_image::image::Image;
use pixfx_image::traits::OperationsTrait;
use pixfx_procs::box_blur::BoxBlur;
use pixfx_procs::flop::Flop;
use pixfx_procs::grayscale::Grayscale;
use pixfx_procs::invert::Invert;
use pixfx_procs::stripes::RainbowStripes;

/// Fixed input file, read from the current directory
const INPUT_FILE: &str = "input.png";

/// The effects to run and the file each result is written to
fn output_plan() -> Vec<(Box<dyn OperationsTrait>, &'static str)> {
    vec![
        (Box::new(Grayscale::new()), "output_gray.png"),
        (Box::new(Invert::new()), "output_invert.png"),
        (Box::new(BoxBlur::new()), "output_blur.png"),
        (Box::new(Flop::new()), "output_flip.png"),
        (Box::new(RainbowStripes::new()), "output_rainbow.png")
    ]
}

pub fn main() {
    simple_logger::init_with_level(Level::Info).unwrap();

    let image = match Image::open(INPUT_FILE) {
        Ok(image) => image,
        Err(error) => {
            error!("Failed to load {INPUT_FILE}: {error:?}");
            exit(1);
        }
    };

    let (width, height) = image.dimensions();
    info!(
        "Image loaded: {} x {}, channels: {}",
        width,
        height,
        image.channels()
    );

    let mut failures = 0;

    for (operation, output_file) in output_plan() {
        match apply_and_save(&image, operation.as_ref(), output_file) {
            Ok(()) => info!("{} -> {}", operation.name(), output_file),
            Err(error) => {
                error!(
                    "{}: could not produce {output_file}: {error:?}",
                    operation.name()
                );
                failures += 1;
            }
        }
    }

    if failures != 0 {
        error!("{failures} output(s) could not be written");
        exit(1);
    }

    info!("All effects processed and images saved.");
}

/// Run one effect against a private copy of the decoded image and
/// encode the result.
fn apply_and_save(
    image: &Image, operation: &dyn OperationsTrait, output_file: &str
) -> Result<(), pixfx_image::errors::ImageErrors> {
    let mut copy = image.clone();

    operation.execute(&mut copy)?;
    copy.save(output_file)?;

    Ok(())
}
