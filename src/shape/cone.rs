use crate::intersection::Intersection;
use crate::material::Material;
use crate::matrix::Matrix;
use crate::ray::Ray;
use crate::shape::base_shape::BaseShape;
use crate::shape::shape::Shape;
use crate::tuple::Tuple;
use std::f32;

// Base shape is a double-napped cone with tips meeting at the origin and extending vertically
// along the y axis.

#[derive(Debug)]
pub struct Cone {
    base: BaseShape,
    pub minimum_y: f32,
    pub maximum_y: f32,
    pub closed: bool,
}

impl Cone {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(transform: Matrix, material: Material) -> Self {
        let mut s = Cone::new();
        s.set_transformation(transform);
        s.set_material(material);
        s
    }
}

impl Default for Cone {
    fn default() -> Self {
        Cone {
            base: BaseShape::new(),
            minimum_y: f32::NEG_INFINITY,
            maximum_y: f32::INFINITY,
            closed: false,
        }
    }
}

impl Shape for Cone {
    fn get_base(&self) -> &BaseShape {
        &self.base
    }
    fn get_base_mut(&mut self) -> &mut BaseShape {
        &mut self.base
    }

    fn local_intersect(&self, object_ray: Ray) -> Vec<Intersection> {
        let mut intersections: Vec<Intersection> = Vec::with_capacity(2);
        self.intersect_sides(&object_ray, &mut intersections);
        // unlike a cylinder, a closed cone's two nappes can be hit by the sides *and* both
        // caps in the same cast, so caps are always checked rather than only when the sides
        // come up short.
        self.intersect_caps(&object_ray, &mut intersections);
        intersections
    }

    // norms at the corners are the norms of one of the adjacent sides. Points within the unit
    // circle of a cap plane belong to the cap itself, since for a cone the side's own normal
    // formula degenerates exactly at the tips; checking the cap radius first sidesteps that.
    fn local_norm_at(&self, object_point: Tuple) -> Tuple {
        let dist_square = object_point.x.powi(2) + object_point.z.powi(2);
        if dist_square < 1.0 {
            if object_point.y >= self.maximum_y - CLOSE_TO_ZERO {
                return vector!(0, 1, 0);
            } else if object_point.y <= self.minimum_y + CLOSE_TO_ZERO {
                return vector!(0, -1, 0);
            }
        }
        let y = (object_point.x.powi(2) + object_point.z.powi(2)).sqrt();
        let y = if object_point.y > 0.0 { -y } else { y };
        vector!(object_point.x, y, object_point.z)
    }
}

const CLOSE_TO_ZERO: f32 = 0.000_001;
impl Cone {
    fn intersect_sides<'a>(&'a self, object_ray: &Ray, intersections: &mut Vec<Intersection<'a>>) {
        // calculating 2a here instead of a to save a multiplication later
        let two_a = 2.0
            * (object_ray.direction.x.powi(2) - object_ray.direction.y.powi(2)
                + object_ray.direction.z.powi(2));
        let b = 2.0
            * (object_ray.origin.x * object_ray.direction.x
                - object_ray.origin.y * object_ray.direction.y
                + object_ray.origin.z * object_ray.direction.z);

        if two_a.abs() < CLOSE_TO_ZERO {
            if b.abs() < CLOSE_TO_ZERO {
                // ray misses both halves of the cone
                return;
            }
            // the quadratic degenerates to linear; there's only one intersection point
            let c = Cone::calc_c(object_ray);
            let distance = -c / (2.0 * b);
            intersections.push(Intersection::new(distance, self));
            return;
        }

        let c = Cone::calc_c(object_ray);
        let discriminant = b.powi(2) - 2.0 * two_a * c;

        if discriminant < 0.0 {
            // ray does not intersect the cone
            return;
        }

        let discriminant_sqrt = discriminant.sqrt();
        let distance1 = (-b - discriminant_sqrt) / two_a;
        let distance2 = (-b + discriminant_sqrt) / two_a;

        let (distance1, distance2) = if distance1 > distance2 {
            (distance2, distance1)
        } else {
            (distance1, distance2)
        };

        let y1 = object_ray.origin.y + distance1 * object_ray.direction.y;
        if self.minimum_y < y1 && y1 < self.maximum_y {
            intersections.push(Intersection::new(distance1, self));
        }
        let y2 = object_ray.origin.y + distance2 * object_ray.direction.y;
        if self.minimum_y < y2 && y2 < self.maximum_y {
            intersections.push(Intersection::new(distance2, self));
        }
    }

    // the c term from the quadratic equation used in the side intersection check
    fn calc_c(object_ray: &Ray) -> f32 {
        object_ray.origin.x.powi(2) - object_ray.origin.y.powi(2) + object_ray.origin.z.powi(2)
    }

    // check if the intersection at distance is within radius of the y axis
    fn check_cap(radius: f32, ray: &Ray, distance: f32) -> bool {
        let x = ray.origin.x + distance * ray.direction.x;
        let z = ray.origin.z + distance * ray.direction.z;
        (x.powi(2) + z.powi(2)) <= radius.powi(2) + CLOSE_TO_ZERO
    }

    // add intersections with the end caps of the cone to intersections
    fn intersect_caps<'a>(&'a self, object_ray: &Ray, intersections: &mut Vec<Intersection<'a>>) {
        if !self.closed || object_ray.direction.y.abs() < CLOSE_TO_ZERO {
            return;
        }

        let distance = (self.minimum_y - object_ray.origin.y) / object_ray.direction.y;
        if Cone::check_cap(self.minimum_y.abs(), object_ray, distance) {
            intersections.push(Intersection::new(distance, self));
        }
        let distance = (self.maximum_y - object_ray.origin.y) / object_ray.direction.y;
        if Cone::check_cap(self.maximum_y.abs(), object_ray, distance) {
            intersections.push(Intersection::new(distance, self));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::AbsDiffEq;
    use std::f32::consts::SQRT_2;

    #[test]
    fn ray_intersects_cone_sides() {
        let c = Cone::new();
        let test_data = vec![
            ("1", point!(0, 0, -5), vector!(0, 0, 1), 5., 5.),
            (
                "2",
                point!(0, 0, -4.999999),
                vector!(1, 1, 1),
                8.660253,
                8.660253,
            ),
            (
                "3",
                point!(1, 1, -5),
                vector!(-0.5, -1, 1),
                4.5500546,
                49.449955,
            ),
        ];
        for (name, origin, direction, distance1, distance2) in test_data {
            let r = Ray::new(origin, direction.norm());
            let xs = c.local_intersect(r);
            assert_eq!(xs.len(), 2, "{}: should find 2 intersections", name);
            assert!(
                xs[0]
                    .distance
                    .abs_diff_eq(&distance1, f32::default_epsilon()),
                "{}: distance to first intersection (expected {}, got {})",
                name,
                distance1,
                xs[0].distance
            );
            assert!(
                xs[1]
                    .distance
                    .abs_diff_eq(&distance2, f32::default_epsilon()),
                "{}: distance to second intersection (expected {}, got {})",
                name,
                distance2,
                xs[1].distance
            );
        }
    }

    #[test]
    fn intersect_cone_with_ray_parallel_to_one_half() {
        let s = Cone::new();
        let r = Ray::new(point!(0, 0, -1), vector!(0, 1, 1).norm());
        let intersections = s.local_intersect(r);
        assert_eq!(intersections.len(), 1);
        assert_abs_diff_eq!(intersections[0].distance, 0.35355338);
    }

    #[test]
    fn ray_intersects_caps_of_closed_cone() {
        let c = {
            let mut c = Cone::new();
            c.minimum_y = -0.5;
            c.maximum_y = 0.5;
            c.closed = true;
            c
        };
        let test_data = vec![
            ("1", point!(0, 0, -5), vector!(0, 1, 0), 0),
            ("2", point!(0, 0, -0.25), vector!(0, 1, 1), 2),
            ("3", point!(0, 0, -0.25), vector!(0, 1, 0), 4),
        ];
        for (name, origin, direction, expected_num_intersections) in test_data {
            let r = Ray::new(origin, direction.norm());
            let xs = c.local_intersect(r);
            assert_eq!(xs.len(), expected_num_intersections, "{}", name);
        }
    }

    #[test]
    fn cone_normal_vector() {
        let c = Cone::new();
        let test_data = vec![
            ("1", point!(0, 0, 0), vector!(0, 0, 0)),
            ("2", point!(1, 1, 1), vector!(1, -SQRT_2, 1)),
            ("3", point!(-1, -1, 0), vector!(-1, 1, 0)),
        ];
        for (name, point, expected_normal) in test_data {
            let normal = c.local_norm_at(point);
            assert_eq!(normal, expected_normal, "{}", name);
        }
    }
}
