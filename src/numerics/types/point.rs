// src/numerics/types/point.rs
// Affine point stored as a homogeneous column with w = 1.

use core::fmt;
use core::ops;
use serde::{Deserialize, Serialize};

use super::matrix::FixedMatrix;
use super::traits::{column, homogeneous_binop, Homogeneous};
use super::vector::Vector3;

/// Point `(x, y, z, 1)`.
///
/// Point - point is a vector; point +/- vector is a point. Equality is exact.
#[derive(Clone, Debug)]
pub struct Point3 {
    xyzw: FixedMatrix<4, 1>,
}

impl Point3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self::from_column(column(x, y, z, Self::W))
    }

    pub fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub(crate) fn from_column(xyzw: FixedMatrix<4, 1>) -> Self {
        Self { xyzw }
    }

    pub fn add(&self, rhs: &Vector3) -> Point3 {
        Point3::from_column(self.xyzw.add(rhs.as_matrix()))
    }

    /// Displacement from `rhs` to `self`.
    pub fn subtract(&self, rhs: &Point3) -> Vector3 {
        Vector3::from_column(self.xyzw.subtract(&rhs.xyzw))
    }

    pub fn subtract_vector(&self, rhs: &Vector3) -> Point3 {
        Point3::from_column(self.xyzw.subtract(rhs.as_matrix()))
    }

    pub fn negate(&self) -> Point3 {
        Point3::new(-self.x(), -self.y(), -self.z())
    }

    pub fn scale(&self, scalar: f64) -> Point3 {
        Point3::new(self.x() * scalar, self.y() * scalar, self.z() * scalar)
    }

    pub fn divide_scalar(&self, scalar: f64) -> Point3 {
        Point3::new(self.x() / scalar, self.y() / scalar, self.z() / scalar)
    }
}

impl Homogeneous for Point3 {
    const W: f64 = 1.0;

    fn as_matrix(&self) -> &FixedMatrix<4, 1> {
        &self.xyzw
    }

    fn as_matrix_mut(&mut self) -> &mut FixedMatrix<4, 1> {
        &mut self.xyzw
    }
}

impl Default for Point3 {
    fn default() -> Self {
        Self::origin()
    }
}

impl PartialEq for Point3 {
    fn eq(&self, other: &Self) -> bool {
        self.components() == other.components()
    }
}

homogeneous_binop!(Add, add, Point3, Vector3 => Point3, add);
homogeneous_binop!(Sub, sub, Point3, Point3 => Vector3, subtract);
homogeneous_binop!(Sub, sub, Point3, Vector3 => Point3, subtract_vector);

impl ops::Neg for &Point3 {
    type Output = Point3;

    fn neg(self) -> Point3 {
        self.negate()
    }
}

impl ops::Neg for Point3 {
    type Output = Point3;

    fn neg(self) -> Point3 {
        self.negate()
    }
}

impl ops::Mul<f64> for &Point3 {
    type Output = Point3;

    fn mul(self, scalar: f64) -> Point3 {
        self.scale(scalar)
    }
}

impl ops::Mul<f64> for Point3 {
    type Output = Point3;

    fn mul(self, scalar: f64) -> Point3 {
        self.scale(scalar)
    }
}

impl ops::Div<f64> for &Point3 {
    type Output = Point3;

    fn div(self, scalar: f64) -> Point3 {
        self.divide_scalar(scalar)
    }
}

impl ops::Div<f64> for Point3 {
    type Output = Point3;

    fn div(self, scalar: f64) -> Point3 {
        self.divide_scalar(scalar)
    }
}

impl From<[f64; 3]> for Point3 {
    fn from(array: [f64; 3]) -> Self {
        Self::new(array[0], array[1], array[2])
    }
}

impl From<(f64, f64, f64)> for Point3 {
    fn from(tuple: (f64, f64, f64)) -> Self {
        Self::new(tuple.0, tuple.1, tuple.2)
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P({}, {}, {})", self.x(), self.y(), self.z())
    }
}

impl Serialize for Point3 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (self.x(), self.y(), self.z()).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Point3 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (x, y, z) = <(f64, f64, f64)>::deserialize(deserializer)?;
        Ok(Point3::new(x, y, z))
    }
}
