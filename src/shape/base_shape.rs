use crate::material::Material;
use crate::matrix::identity_4x4;
use crate::matrix::Matrix;
use crate::object_id::ObjectId;

/// Shared state every concrete `Shape` delegates to: cached transform (plus its inverse and
/// inverse-transpose, recomputed only when the transform changes), material, shadow flag, and
/// a stable identity used for equality/hashing and the refractive-index stack in `world.rs`.
#[derive(Debug)]
pub struct BaseShape {
    id: ObjectId,
    t: Matrix,
    t_inverse: Matrix,
    t_inverse_transpose: Matrix,
    m: Material,
    casts_shadow: bool,
}

impl Default for BaseShape {
    fn default() -> Self {
        let t = identity_4x4();
        let t_inverse = t.inverse();
        let t_inverse_transpose = t_inverse.transpose();
        BaseShape {
            id: ObjectId::default(),
            t,
            t_inverse,
            t_inverse_transpose,
            m: Material::default(),
            casts_shadow: true,
        }
    }
}

impl BaseShape {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_unique_id(&self) -> usize {
        self.id.get_id()
    }

    pub fn transformation(&self) -> &Matrix {
        &self.t
    }
    pub fn set_transformation(&mut self, t: Matrix) {
        self.t_inverse = t.inverse();
        self.t_inverse_transpose = self.t_inverse.transpose();
        self.t = t;
    }
    pub fn material(&self) -> &Material {
        &self.m
    }
    pub fn set_material(&mut self, m: Material) {
        self.m = m;
    }
    pub fn casts_shadow(&self) -> bool {
        self.casts_shadow
    }
    pub fn set_casts_shadow(&mut self, casts_shadow: bool) {
        self.casts_shadow = casts_shadow;
    }
    pub fn transformation_inverse(&self) -> &Matrix {
        &self.t_inverse
    }
    pub fn transformation_inverse_transpose(&self) -> &Matrix {
        &self.t_inverse_transpose
    }
}
