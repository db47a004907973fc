use crate::matrix::*;
use crate::tuple::Tuple;

pub fn translation(x: f32, y: f32, z: f32) -> Matrix {
    let mut transform = identity_4x4();
    transform.data[0][3] = x;
    transform.data[1][3] = y;
    transform.data[2][3] = z;
    transform
}

pub fn scaling(x: f32, y: f32, z: f32) -> Matrix {
    let mut transform = build_matrix(4);
    transform.data[0][0] = x;
    transform.data[1][1] = y;
    transform.data[2][2] = z;
    transform.data[3][3] = 1.0;
    transform
}

pub fn rotation_x(radians: f32) -> Matrix {
    let mut transform = build_matrix(4);

    transform.data[0][0] = 1.0;
    transform.data[3][3] = 1.0;

    let cosine = radians.cos();
    transform.data[1][1] = cosine;
    transform.data[2][2] = cosine;

    let sine = radians.sin();
    transform.data[2][1] = sine;
    transform.data[1][2] = -sine;

    transform
}

pub fn rotation_y(radians: f32) -> Matrix {
    let mut transform = build_matrix(4);

    transform.data[1][1] = 1.0;
    transform.data[3][3] = 1.0;

    let cosine = radians.cos();
    transform.data[0][0] = cosine;
    transform.data[2][2] = cosine;

    let sine = radians.sin();
    transform.data[0][2] = sine;
    transform.data[2][0] = -sine;

    transform
}

pub fn rotation_z(radians: f32) -> Matrix {
    let mut transform = build_matrix(4);

    transform.data[2][2] = 1.0;
    transform.data[3][3] = 1.0;

    let cosine = radians.cos();
    transform.data[0][0] = cosine;
    transform.data[1][1] = cosine;

    let sine = radians.sin();
    transform.data[0][1] = -sine;
    transform.data[1][0] = sine;

    transform
}

pub fn shearing(xy: f32, xz: f32, yx: f32, yz: f32, zx: f32, zy: f32) -> Matrix {
    let mut transform = identity_4x4();
    transform.data[0][1] = xy;
    transform.data[0][2] = xz;
    transform.data[1][0] = yx;
    transform.data[1][2] = yz;
    transform.data[2][0] = zx;
    transform.data[2][1] = zy;
    transform
}

/// Builds the camera-space transform that places the eye at `from`, looking toward `to`, with
/// `up` defining which way is up. The resulting matrix moves points from world space into that
/// eye's frame.
pub fn view_transform(from: Tuple, to: Tuple, up: Tuple) -> Matrix {
    let forward = (to - from).norm();
    let left = forward.cross(up.norm());
    // left and forward are already normalized, but up likely isn't, so recompute it as
    // truly orthogonal to both rather than trusting the caller's up vector directly.
    let true_up = left.cross(forward);

    let orientation = matrix!(
        [left.x, left.y, left.z, 0.0],
        [true_up.x, true_up.y, true_up.z, 0.0],
        [-forward.x, -forward.y, -forward.z, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    );

    &orientation * &translation(-from.x, -from.y, -from.z)
}
