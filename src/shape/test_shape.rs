use crate::intersection::Intersection;
use crate::ray::Ray;
use crate::shape::base_shape::BaseShape;
use crate::shape::shape::Shape;
use crate::tuple::Tuple;
use std::sync::Mutex;

/// Test-only shape that records the object-space ray it was last intersected with, so tests
/// can assert on the world-to-object transform without depending on a concrete shape's
/// geometry. Never constructed outside `#[cfg(test)]`.
///
/// Uses a `Mutex` rather than a `RefCell` for the scratch field purely because `Shape`
/// requires `Sync`; nothing here is actually shared across threads.
#[cfg(test)]
#[derive(Debug)]
pub struct TestShape {
    base: BaseShape,
    pub saved_ray: Mutex<Option<Ray>>,
}

#[cfg(test)]
impl TestShape {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl Default for TestShape {
    fn default() -> Self {
        TestShape {
            base: BaseShape::new(),
            saved_ray: Mutex::new(None),
        }
    }
}

#[cfg(test)]
impl Shape for TestShape {
    fn get_base(&self) -> &BaseShape {
        &self.base
    }
    fn get_base_mut(&mut self) -> &mut BaseShape {
        &mut self.base
    }
    fn local_intersect(&self, object_ray: Ray) -> Vec<Intersection> {
        *self.saved_ray.lock().unwrap() = Some(object_ray);
        vec![]
    }
    fn local_norm_at(&self, object_point: Tuple) -> Tuple {
        vector!(object_point.x, object_point.y, object_point.z)
    }
}
