// Following the book, we'll make lots of functions for use later. Everything is going to be dead code for a while.
#![allow(dead_code)]

#[cfg_attr(test, macro_use)]
extern crate approx;

// It's important that mods with macros come first so that they are available in other mods.
// The macros will automatically be available in all following mods.
#[macro_use]
pub mod matrix;
#[macro_use]
pub mod tuple;
#[macro_use]
pub mod color;

pub mod camera;
pub mod canvas;
pub mod constants;
pub mod intersection;
pub mod light;
pub mod material;
pub mod object_id;
pub mod pattern;
pub mod ray;
pub mod shape;
pub mod transformations;
pub mod world;
