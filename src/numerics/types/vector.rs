// src/numerics/types/vector.rs
// Free 3-D vector stored as a homogeneous column with w = 0.

use core::fmt;
use core::ops;
use serde::{Deserialize, Serialize};

use super::matrix::FixedMatrix;
use super::point::Point3;
use super::traits::{column, homogeneous_binop, Homogeneous};

/// Free vector `(x, y, z, 0)`.
///
/// Arithmetic keeps affine typing: vector + vector is a vector, vector +
/// point is a point. Equality is exact over all four components.
#[derive(Clone, Debug)]
pub struct Vector3 {
    xyzw: FixedMatrix<4, 1>,
}

impl Vector3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self::from_column(column(x, y, z, Self::W))
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub(crate) fn from_column(xyzw: FixedMatrix<4, 1>) -> Self {
        Self { xyzw }
    }

    pub fn add(&self, rhs: &Vector3) -> Vector3 {
        Vector3::from_column(self.xyzw.add(&rhs.xyzw))
    }

    /// Translate `rhs` by this vector.
    pub fn add_point(&self, rhs: &Point3) -> Point3 {
        Point3::from_column(self.xyzw.add(rhs.as_matrix()))
    }

    pub fn subtract(&self, rhs: &Vector3) -> Vector3 {
        Vector3::from_column(self.xyzw.subtract(&rhs.xyzw))
    }

    pub fn negate(&self) -> Vector3 {
        Vector3::new(-self.x(), -self.y(), -self.z())
    }

    pub fn scale(&self, scalar: f64) -> Vector3 {
        Vector3::new(self.x() * scalar, self.y() * scalar, self.z() * scalar)
    }

    pub fn divide_scalar(&self, scalar: f64) -> Vector3 {
        Vector3::new(self.x() / scalar, self.y() / scalar, self.z() / scalar)
    }

    /// Sum of the four componentwise products.
    pub fn dot(&self, rhs: &Vector3) -> f64 {
        self.xyzw.hadamard(&rhs.xyzw).iter().sum()
    }

    pub fn cross(&self, rhs: &Vector3) -> Vector3 {
        Vector3::new(
            self.y() * rhs.z() - self.z() * rhs.y(),
            self.z() * rhs.x() - self.x() * rhs.z(),
            self.x() * rhs.y() - self.y() * rhs.x(),
        )
    }

    /// Euclidean norm over all four stored components.
    pub fn magnitude(&self) -> f64 {
        self.xyzw.iter().map(|c| c * c).sum::<f64>().sqrt()
    }

    /// Every component divided by [`magnitude`](Self::magnitude). A zero
    /// vector comes back as NaN.
    pub fn normalize(&self) -> Vector3 {
        let magnitude = self.magnitude();
        Vector3::from_column(self.xyzw.map(|c| c / magnitude))
    }
}

impl Homogeneous for Vector3 {
    const W: f64 = 0.0;

    fn as_matrix(&self) -> &FixedMatrix<4, 1> {
        &self.xyzw
    }

    fn as_matrix_mut(&mut self) -> &mut FixedMatrix<4, 1> {
        &mut self.xyzw
    }
}

impl Default for Vector3 {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for Vector3 {
    fn eq(&self, other: &Self) -> bool {
        self.components() == other.components()
    }
}

homogeneous_binop!(Add, add, Vector3, Vector3 => Vector3, add);
homogeneous_binop!(Add, add, Vector3, Point3 => Point3, add_point);
homogeneous_binop!(Sub, sub, Vector3, Vector3 => Vector3, subtract);

impl ops::Neg for &Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        self.negate()
    }
}

impl ops::Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        self.negate()
    }
}

impl ops::Mul<f64> for &Vector3 {
    type Output = Vector3;

    fn mul(self, scalar: f64) -> Vector3 {
        self.scale(scalar)
    }
}

impl ops::Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(self, scalar: f64) -> Vector3 {
        self.scale(scalar)
    }
}

impl ops::Div<f64> for &Vector3 {
    type Output = Vector3;

    fn div(self, scalar: f64) -> Vector3 {
        self.divide_scalar(scalar)
    }
}

impl ops::Div<f64> for Vector3 {
    type Output = Vector3;

    fn div(self, scalar: f64) -> Vector3 {
        self.divide_scalar(scalar)
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from(array: [f64; 3]) -> Self {
        Self::new(array[0], array[1], array[2])
    }
}

impl From<(f64, f64, f64)> for Vector3 {
    fn from(tuple: (f64, f64, f64)) -> Self {
        Self::new(tuple.0, tuple.1, tuple.2)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "V({}, {}, {})", self.x(), self.y(), self.z())
    }
}

// Serialized as (x, y, z); w is implied by the type.
impl Serialize for Vector3 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (self.x(), self.y(), self.z()).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Vector3 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (x, y, z) = <(f64, f64, f64)>::deserialize(deserializer)?;
        Ok(Vector3::new(x, y, z))
    }
}
