use approx::AbsDiffEq;
use std::fmt::Display;
use std::ops::{Add, Div, Mul, Neg, Sub};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tuple {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

// TODO: implement approximate comparison via approx crate
// TODO: allow changing datatypes to f64?
impl Tuple {
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        debug_assert!(w == 1.0 || w == 0.0, "w must be 0 or 1; was {}", w);
        debug_assert!(!x.is_nan(), "x cannot be NaN");
        debug_assert!(!y.is_nan(), "x cannot be NaN");
        debug_assert!(!z.is_nan(), "z cannot be NaN");
        Tuple { x, y, z, w }
    }
    pub fn is_vector(&self) -> bool {
        self.w == 0.0
    }
    pub fn is_point(&self) -> bool {
        self.w == 1.0
    }
    pub fn magnitude(&self) -> f32 {
        debug_assert!(self.is_vector());
        // TODO: book says w is included.
        (self.x.powi(2) + self.y.powi(2) + self.z.powi(2) + (self.w as f32).powi(2)).sqrt()
    }
    pub fn norm(&self) -> Tuple {
        //TODO: should only take vectors, not tuples
        let magnitude = self.magnitude();
        Tuple {
            x: self.x / magnitude,
            y: self.y / magnitude,
            z: self.z / magnitude,
            w: self.w,
        }
    }
    pub fn dot(&self, other: Tuple) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + (self.w * other.w) as f32
    }
    pub fn cross(&self, other: Tuple) -> Tuple {
        Tuple {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
            // result is also a vector
            w: 0.0,
        }
    }
}

impl Display for Tuple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        if self.is_point() {
            write!(f, "point!(")?;
        } else {
            write!(f, "vector!(")?;
        }
        write!(f, "{}, {}, {})", self.x, self.y, self.z)?;

        Ok(())
    }
}

// Use like this: point!(1,2,3)
#[macro_export]
macro_rules! point {
    ($x:expr, $y:expr, $z:expr) => {{
        Tuple::new($x as f32, $y as f32, $z as f32, 1.0)
    }};
}

// Use like this: vector!(1,2,3)
#[macro_export]
macro_rules! vector {
    ($x:expr, $y:expr, $z:expr) => {{
        Tuple::new($x as f32, $y as f32, $z as f32, 0.0)
    }};
}

impl Add for Tuple {
    type Output = Tuple;
    fn add(self, other: Tuple) -> Tuple {
        Tuple::new(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
            self.w + other.w,
        )
    }
}

impl Sub for Tuple {
    type Output = Tuple;
    fn sub(self, other: Tuple) -> Tuple {
        Tuple::new(
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
            self.w - other.w,
        )
    }
}

impl Mul<f32> for Tuple {
    type Output = Tuple;
    fn mul(self, scalar: f32) -> Tuple {
        Tuple {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
            // TODO: book says w should only be 0 or 1, but scalar multiplication applies
            w: self.w * scalar,
        }
    }
}

impl Mul<Tuple> for f32 {
    type Output = Tuple;
    fn mul(self, tuple: Tuple) -> Tuple {
        tuple * self
    }
}

impl Div<f32> for Tuple {
    type Output = Tuple;
    fn div(self, scalar: f32) -> Tuple {
        Tuple {
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
            // TODO: book says w should only be 0 or 1, but scalar division applies
            w: self.w / scalar,
        }
    }
}

impl Neg for Tuple {
    type Output = Tuple;
    fn neg(self) -> Tuple {
        Tuple {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            // TODO: w should only be 1 or 0, but book says w should also be negated
            w: -self.w,
        }
    }
}

// required for approximate comparisons due to use of floating point numbers
impl AbsDiffEq for Tuple {
    type Epsilon = f32;

    fn default_epsilon() -> Self::Epsilon {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        f32::abs_diff_eq(&self.x, &other.x, epsilon)
            && f32::abs_diff_eq(&self.y, &other.y, epsilon)
            && f32::abs_diff_eq(&self.z, &other.z, epsilon)
            && f32::abs_diff_eq(&self.w, &other.w, epsilon)
    }
}
