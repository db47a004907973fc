use crate::canvas::Canvas;
use crate::color::Color;
use crate::matrix::Matrix;
use crate::ray::Ray;
use crate::tuple::Tuple;
use crate::world::World;
use rayon::prelude::*;

pub struct Camera {
    // in pixels
    width_pixels: u32,
    height_pixels: u32,
    // in radians
    field_of_view: f32,
    // world space units
    half_width_world: f32,
    half_height_world: f32,
    pixel_size: f32,

    transform: Matrix,
}

impl Camera {
    pub fn new(
        width_pixels: u32,
        height_pixels: u32,
        field_of_view: f32,
        transform: Matrix,
    ) -> Camera {
        // calculate size of a pixel on the canvas using the fact that the canvas is 1 unit in front of the eye.
        // Half of the canvas width can be found using trig: cut the canvas in half, forming a right triangle between
        // the eye, the half-width point of the canvas, and one horizontal edge of the canvas. The field of view
        // angle is bisected, and the eye-canvas corner is a right angle. Use sohcahtoa:
        // tangent is opposite/adjacent, or (half canvas width)/(distance to canvas). The distance to the canvas is 1,
        // so tangent of half of the field of view angle will equal half the width of the canvas.
        let half_view = (field_of_view / 2.0).tan();

        // TODO: I don't get what this is for. It seems like we pick the longer dimension to be the width
        // and the shorter to be the height. But wouldn't that turn the image sideways?
        let aspect_ratio = (width_pixels as f32) / (height_pixels as f32);
        let (half_width_world, half_height_world) = if aspect_ratio >= 1.0 {
            (half_view, half_view / aspect_ratio)
        } else {
            (half_view * aspect_ratio, half_view)
        };
        let pixel_size = (half_width_world * 2.0) / width_pixels as f32;

        Camera {
            width_pixels,
            height_pixels,
            field_of_view,
            transform,
            half_width_world,
            half_height_world,
            pixel_size,
        }
    }
}

impl Camera {
    pub fn ray_for_pixel(&self, x: u32, y: u32) -> Ray {
        // offset from edge of canvas to pixel's center
        let x_offset = (x as f32 + 0.5) * self.pixel_size;
        let y_offset = (y as f32 + 0.5) * self.pixel_size;
        // untransformed coordinates of the pixel in world space
        // camera looks toward -z, so +x is to the left
        let world_x = self.half_width_world - x_offset;
        let world_y = self.half_height_world - y_offset;
        // use camera matrix to transform the canvas point and the origin, then get ray's direction vector
        // canvas is located at z=-1
        let pixel: Tuple = &self.transform.inverse() * &point!(world_x, world_y, -1);
        let origin: Tuple = &self.transform.inverse() * &point!(0, 0, 0);
        let direction = (pixel - origin).norm();
        Ray::new(origin, direction)
    }

    // Renders row by row in parallel: the world and everything it contains (shapes, materials,
    // patterns) must stay immutable and Send + Sync for the whole render, since rows may be
    // computed on any worker thread in any order. Each row is built independently and the
    // finished rows are assembled into one canvas at the end, so there's no shared mutable state
    // for workers to contend over.
    pub fn render(&self, world: &World, reflection_recursion_depth: i16) -> Canvas {
        let rows: Vec<Vec<Color>> = (0..self.height_pixels)
            .into_par_iter()
            .map(|y| {
                (0..self.width_pixels)
                    .map(|x| {
                        let ray = self.ray_for_pixel(x, y);
                        world.color_at(ray, reflection_recursion_depth)
                    })
                    .collect()
            })
            .collect();
        Canvas::from_rows(rows)
    }
}
