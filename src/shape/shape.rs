use crate::intersection::Intersection;
use crate::material::Material;
use crate::matrix::Matrix;
use crate::ray::Ray;
use crate::shape::base_shape::BaseShape;
use crate::tuple::Tuple;
use std::fmt::Debug;
use std::hash::Hash;
use std::hash::Hasher;

/// A primitive that can be intersected and shaded. Implementers hold a `BaseShape` and
/// delegate the shared bookkeeping (transform, material, id) to it, implementing only the
/// local-space geometry in `local_intersect`/`local_norm_at`.
///
/// `Send + Sync` because the render loop shares `&dyn Shape` across worker threads.
pub trait Shape: Debug + Send + Sync {
    fn get_base(&self) -> &BaseShape;
    fn get_base_mut(&mut self) -> &mut BaseShape;

    /// Intersect a ray already transformed into object space.
    fn local_intersect(&self, object_ray: Ray) -> Vec<Intersection>;
    /// Surface normal at a point already transformed into object space.
    fn local_norm_at(&self, object_point: Tuple) -> Tuple;

    // The rest of these should not be overridden by Shape implementers.

    fn get_unique_id(&self) -> usize {
        self.get_base().get_unique_id()
    }
    fn transformation(&self) -> &Matrix {
        self.get_base().transformation()
    }
    fn set_transformation(&mut self, t: Matrix) {
        self.get_base_mut().set_transformation(t)
    }
    fn material(&self) -> &Material {
        self.get_base().material()
    }
    fn set_material(&mut self, m: Material) {
        self.get_base_mut().set_material(m)
    }
    fn casts_shadow(&self) -> bool {
        self.get_base().casts_shadow()
    }
    fn set_casts_shadow(&mut self, casts_shadow: bool) {
        self.get_base_mut().set_casts_shadow(casts_shadow)
    }
    // these allow BaseShape to cache the results
    fn transformation_inverse(&self) -> &Matrix {
        self.get_base().transformation_inverse()
    }
    fn transformation_inverse_transpose(&self) -> &Matrix {
        self.get_base().transformation_inverse_transpose()
    }

    // Inverse transform maps from world to object space
    fn world_to_object_point(&self, world_point: &Tuple) -> Tuple {
        self.transformation_inverse() * world_point
    }
    fn world_to_object_ray(&self, world_ray: &Ray) -> Ray {
        world_ray.transform(self.transformation_inverse())
    }

    // When intersecting the shape with a ray, all shapes need to first convert the
    // ray into object space, transforming it by the inverse of the shape's transformation
    // matrix.
    fn intersect(&self, world_ray: Ray) -> Vec<Intersection> {
        let object_ray = self.world_to_object_ray(&world_ray);
        self.local_intersect(object_ray)
    }

    fn normal_to_world(&self, object_normal: &Tuple) -> Tuple {
        // A normal was computed in object space and must be returned in world space.
        // This is a different problem from converting a *point* from object to world space.
        // We are not concerned with the location of the normal on the surface of the object,
        // but rather the direction that it points in. We have to consider several types of
        // transformations given to the parent object:
        //
        // The first is rotation. This needs to be applied to the vector as-is: if you stick
        // a toothpick in a peach to represent the normal on the peach's surface, then you will
        // see that rotating the peach rotates the toothpick in exactly the same manner.
        //
        // The next is uniform scaling. This does not affect a normal at all; as the peach
        // grows and shrinks, the toothpick will point in the same direction.
        //
        // Next is non-uniform scaling. This is more complex. If you poke several toothpicks
        // close together in a vertical row on one side of the peach so that they are almost
        // parallel and then you squish the peach downwards, scaling y by 1/2, the toothpicks
        // will change direction a little bit so that they point more away from each other.
        // Scaling the y axis by 1/2 actually doubles the y-component of all of the normals.
        // This means scaling the normals by the inverse of the matrix that scaled the
        // object; the inverse of a scaling matrix is just the same matrix but with each of
        // the scaling components inverted.
        //
        // Next is shearing. Imagine a cardboard box with no lid or bottom, sitting on its
        // side on a table. Push on the top of the box to deform it into a parallelogram
        // leaning to the right. You'll notice that as we increase this x-y shear, the
        // normals on the sides have their y-components increased or decreased proportionally
        // with the amount of shear. The normals are transformed by the inverse transpose of
        // the object's shear matrix.
        //
        // So we have the following:
        //
        // * rotation: needs to be applied to the normal as-is
        // * uniform scaling: can be applied or not applied; does not affect the normal's direction
        // * non-uniform scaling: needs to be inverted
        // * shearing: needs to be inverted and transposed
        // * translation: does not apply to vectors; handled separately below
        //
        // A few mathematical facts simplify this:
        //
        // * The transpose of a rotation matrix is its inverse
        // * The transpose of a scaling matrix is itself
        // * The inverse of a scaling matrix is also a scaling matrix, which does not affect a
        //   vector's direction
        //
        // This means we can fold the first few cases into one: just take the inverse transpose
        // of the transform.
        let mut world_normal = self.transformation_inverse_transpose() * object_normal;

        // That leaves translation. Translation does not affect vectors, so conceptually it
        // can be ignored. Multiplication by translation does not affect the 3x3 x-y-z
        // components of a transformation, so the direct way to ignore translation is to take
        // the 3x3 submatrix of the transform and inverse-transpose that. A simplified approach
        // taken by many systems, including this one, is to multiply the inverse-transpose
        // as-is and then manually zero the w component:
        world_normal.w = 0.0;
        // The final step is to renormalize the transformed normal vector, since the inverse-
        // transpose of the transform does not preserve the normal's length:
        world_normal.norm()
    }

    fn normal_at(&self, world_point: &Tuple) -> Tuple {
        let object_point = self.world_to_object_point(world_point);
        let object_normal = self.local_norm_at(object_point);
        self.normal_to_world(&object_normal)
    }
}

impl PartialEq for dyn Shape {
    fn eq(&self, other: &Self) -> bool {
        self.get_unique_id() == other.get_unique_id()
    }
}

impl Eq for dyn Shape {}

impl Hash for dyn Shape {
    fn hash<H: Hasher>(&self, hasher: &mut H) {
        self.get_unique_id().hash(hasher);
    }
}
