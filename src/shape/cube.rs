use crate::intersection::Intersection;
use crate::material::Material;
use crate::matrix::Matrix;
use crate::ray::Ray;
use crate::shape::base_shape::BaseShape;
use crate::shape::shape::Shape;
use crate::tuple::Tuple;

// Base shape has a dimension of two and straddles the world origin

#[derive(Debug)]
pub struct Cube {
    base: BaseShape,
}

impl Cube {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(transform: Matrix, material: Material) -> Self {
        let mut s = Cube::new();
        s.set_transformation(transform);
        s.set_material(material);
        s
    }
}

impl Default for Cube {
    fn default() -> Self {
        Cube {
            base: BaseShape::new(),
        }
    }
}

impl Shape for Cube {
    fn get_base(&self) -> &BaseShape {
        &self.base
    }
    fn get_base_mut(&mut self) -> &mut BaseShape {
        &mut self.base
    }

    fn local_intersect(&self, object_ray: Ray) -> Vec<Intersection> {
        let (xtmin, xtmax) = check_axis(object_ray.origin.x, object_ray.direction.x);
        let (ytmin, ytmax) = check_axis(object_ray.origin.y, object_ray.direction.y);
        let (ztmin, ztmax) = check_axis(object_ray.origin.z, object_ray.direction.z);

        let tmin = xtmin.max(ytmin).max(ztmin);
        let tmax = xtmax.min(ytmax).min(ztmax);

        if tmin > tmax {
            return vec![];
        }
        vec![
            Intersection::new(tmin, self),
            Intersection::new(tmax, self),
        ]
    }

    // norms at the corners are the norms of one of the adjacent sides
    fn local_norm_at(&self, object_point: Tuple) -> Tuple {
        let (x_abs, y_abs, z_abs) = (
            object_point.x.abs(),
            object_point.y.abs(),
            object_point.z.abs(),
        );
        let max_c = x_abs.max(y_abs.max(z_abs));
        if x_abs == max_c {
            vector!(object_point.x, 0, 0)
        } else if y_abs == max_c {
            vector!(0, object_point.y, 0)
        } else {
            vector!(0, 0, object_point.z)
        }
    }
}

// Intersect a ray with the pair of planes bounding one axis of the unit cube ([-1, 1]),
// returning the near/far distances along that axis in the order they're actually crossed.
fn check_axis(origin: f32, direction: f32) -> (f32, f32) {
    let tmin_numerator = -1.0 - origin;
    let tmax_numerator = 1.0 - origin;

    let (tmin, tmax) = if direction.abs() >= f32::EPSILON {
        (tmin_numerator / direction, tmax_numerator / direction)
    } else {
        (
            tmin_numerator * f32::INFINITY,
            tmax_numerator * f32::INFINITY,
        )
    };

    if tmin > tmax {
        (tmax, tmin)
    } else {
        (tmin, tmax)
    }
}
