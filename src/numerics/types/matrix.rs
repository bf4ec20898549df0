// src/numerics/types/matrix.rs
// Dense R x C matrix over f64. Shapes are const generics; the element buffer
// is inline or boxed depending on the element count (see storage.rs).

use core::fmt;
use core::marker::PhantomData;
use core::ops;

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::storage::Storage;

/// Two elements closer than this compare equal.
pub const EQUALITY_EPSILON: f64 = 1e-40;

/// Fixed-dimension matrix with row-major `f64` elements.
///
/// Matrices are `Clone` but never `Copy`: a heap-backed matrix owns its
/// buffer, so duplicating one is always an explicit [`clone_deep`] or
/// `clone()`.
///
/// [`clone_deep`]: FixedMatrix::clone_deep
#[derive(Clone, Debug)]
pub struct FixedMatrix<const R: usize, const C: usize> {
    data: Storage<R, C>,
}

impl<const R: usize, const C: usize> FixedMatrix<R, C> {
    /// Whether matrices of this shape keep their elements on the heap.
    pub const ON_HEAP: bool = Storage::<R, C>::ON_HEAP;

    /// Zero-filled matrix.
    pub fn new() -> Self {
        Self { data: Storage::zeroed() }
    }

    pub fn zero() -> Self {
        Self::new()
    }

    /// Build from a row-major element list. Missing trailing elements are
    /// zero.
    ///
    /// # Panics
    /// If `elements` holds more than `R * C` values.
    #[track_caller]
    pub fn from_elements(elements: &[f64]) -> Self {
        assert!(
            elements.len() <= R * C,
            "{} elements do not fit a {}x{} matrix",
            elements.len(),
            R,
            C
        );
        let mut matrix = Self::new();
        matrix.as_mut_slice()[..elements.len()].copy_from_slice(elements);
        matrix
    }

    pub fn rows(&self) -> usize {
        R
    }

    pub fn cols(&self) -> usize {
        C
    }

    /// Whether this value's elements live behind a heap allocation.
    pub fn on_heap(&self) -> bool {
        self.data.is_heap()
    }

    /// Row-major view of every element.
    pub fn as_slice(&self) -> &[f64] {
        self.data.as_slice()
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        self.data.as_mut_slice()
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.as_slice().iter()
    }

    #[track_caller]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        check_bounds::<R, C>(i, j);
        self.data.as_slice()[i * C + j]
    }

    #[track_caller]
    pub fn set(&mut self, i: usize, j: usize, x: f64) {
        check_bounds::<R, C>(i, j);
        self.data.as_mut_slice()[i * C + j] = x;
    }

    /// Mutable reference to element `(i, j)`.
    #[track_caller]
    pub fn get_mut(&mut self, i: usize, j: usize) -> &mut f64 {
        check_bounds::<R, C>(i, j);
        &mut self.data.as_mut_slice()[i * C + j]
    }

    /// `R x R` identity. Non-square shapes are rejected at compile time.
    pub fn identity() -> Self {
        const { assert!(R == C, "identity is only defined for square matrices") };
        let mut result = Self::new();
        for i in 0..R {
            result.set(i, i, 1.0);
        }
        result
    }

    /// Apply `f` to every element.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        let mut result = Self::new();
        for (out, &x) in result.as_mut_slice().iter_mut().zip(self.as_slice()) {
            *out = f(x);
        }
        result
    }

    fn zip_with(&self, rhs: &Self, f: impl Fn(f64, f64) -> f64) -> Self {
        let mut result = Self::new();
        let pairs = self.as_slice().iter().zip(rhs.as_slice());
        for (out, (&a, &b)) in result.as_mut_slice().iter_mut().zip(pairs) {
            *out = f(a, b);
        }
        result
    }

    pub fn add(&self, rhs: &Self) -> Self {
        self.zip_with(rhs, |a, b| a + b)
    }

    pub fn subtract(&self, rhs: &Self) -> Self {
        self.zip_with(rhs, |a, b| a - b)
    }

    /// Elementwise division; a zero divisor yields an infinity or NaN.
    pub fn divide(&self, rhs: &Self) -> Self {
        self.zip_with(rhs, |a, b| a / b)
    }

    /// Elementwise product.
    pub fn hadamard(&self, rhs: &Self) -> Self {
        self.zip_with(rhs, |a, b| a * b)
    }

    /// Multiply every element by `scalar`.
    pub fn scale(&self, scalar: f64) -> Self {
        self.map(|x| x * scalar)
    }

    /// Matrix product `self (R x C) * rhs (C x Q)`.
    pub fn multiply<const Q: usize>(&self, rhs: &FixedMatrix<C, Q>) -> FixedMatrix<R, Q> {
        let mut result = FixedMatrix::<R, Q>::new();
        for i in 0..R {
            for j in 0..Q {
                let cell = result.get_mut(i, j);
                for k in 0..C {
                    *cell += self.get(i, k) * rhs.get(k, j);
                }
            }
        }
        result
    }

    pub fn transpose(&self) -> FixedMatrix<C, R> {
        let mut result = FixedMatrix::<C, R>::new();
        if R == C {
            result.as_mut_slice().copy_from_slice(self.as_slice());
            let flat = result.as_mut_slice();
            for i in 0..R {
                for j in (i + 1)..C {
                    flat.swap(i * C + j, j * C + i);
                }
            }
        } else {
            for i in 0..R {
                for j in 0..C {
                    result.set(j, i, self.get(i, j));
                }
            }
        }
        result
    }

    /// Copy of this matrix without row `row` and column `col`.
    ///
    /// The target shape is spelled out by the caller and checked at compile
    /// time:
    ///
    /// ```
    /// # use glint::numerics::types::matrix::FixedMatrix;
    /// let m = FixedMatrix::<3, 3>::from_elements(&[1., 2., 3., 4., 5., 6., 7., 8., 9.]);
    /// let sub: FixedMatrix<2, 2> = m.submatrix(0, 2);
    /// assert_eq!(sub.as_slice(), &[4., 5., 7., 8.]);
    /// ```
    #[track_caller]
    pub fn submatrix<const R2: usize, const C2: usize>(
        &self,
        row: usize,
        col: usize,
    ) -> FixedMatrix<R2, C2> {
        const {
            assert!(R2 + 1 == R && C2 + 1 == C, "submatrix must drop exactly one row and one column")
        };
        check_bounds::<R, C>(row, col);

        let mut result = FixedMatrix::<R2, C2>::new();
        let kept = (0..R)
            .filter(|&i| i != row)
            .flat_map(|i| (0..C).filter(move |&j| j != col).map(move |j| (i, j)));
        for (out, (i, j)) in result.as_mut_slice().iter_mut().zip(kept) {
            *out = self.get(i, j);
        }
        result
    }

    /// Independent copy, whichever storage backs this matrix.
    pub fn clone_deep(&self) -> Self {
        self.clone()
    }
}

#[track_caller]
fn check_bounds<const R: usize, const C: usize>(i: usize, j: usize) {
    assert!(
        i < R && j < C,
        "index ({}, {}) out of bounds for {}x{} matrix",
        i,
        j,
        R,
        C
    );
}

impl<const R: usize, const C: usize> Default for FixedMatrix<R, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const R: usize, const C: usize> From<[[f64; C]; R]> for FixedMatrix<R, C> {
    fn from(rows: [[f64; C]; R]) -> Self {
        let mut matrix = Self::new();
        matrix.as_mut_slice().copy_from_slice(rows.as_flattened());
        matrix
    }
}

// Shapes that differ are never equal; same shapes compare within EQUALITY_EPSILON.
impl<const R: usize, const C: usize, const P: usize, const Q: usize> PartialEq<FixedMatrix<P, Q>>
    for FixedMatrix<R, C>
{
    fn eq(&self, other: &FixedMatrix<P, Q>) -> bool {
        if R != P || C != Q {
            return false;
        }
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| (a - b).abs() <= EQUALITY_EPSILON)
    }
}

impl<const R: usize, const C: usize> ops::Index<(usize, usize)> for FixedMatrix<R, C> {
    type Output = f64;

    #[track_caller]
    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        check_bounds::<R, C>(i, j);
        &self.data.as_slice()[i * C + j]
    }
}

impl<const R: usize, const C: usize> ops::IndexMut<(usize, usize)> for FixedMatrix<R, C> {
    #[track_caller]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        self.get_mut(i, j)
    }
}

/// Linear row-major access.
impl<const R: usize, const C: usize> ops::Index<usize> for FixedMatrix<R, C> {
    type Output = f64;

    #[track_caller]
    fn index(&self, index: usize) -> &f64 {
        assert!(index < R * C, "index {} out of bounds for {}x{} matrix", index, R, C);
        &self.as_slice()[index]
    }
}

impl<const R: usize, const C: usize> ops::Add for &FixedMatrix<R, C> {
    type Output = FixedMatrix<R, C>;

    fn add(self, rhs: Self) -> FixedMatrix<R, C> {
        FixedMatrix::add(self, rhs)
    }
}

impl<const R: usize, const C: usize> ops::Add for FixedMatrix<R, C> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        FixedMatrix::add(&self, &rhs)
    }
}

impl<const R: usize, const C: usize> ops::Sub for &FixedMatrix<R, C> {
    type Output = FixedMatrix<R, C>;

    fn sub(self, rhs: Self) -> FixedMatrix<R, C> {
        self.subtract(rhs)
    }
}

impl<const R: usize, const C: usize> ops::Sub for FixedMatrix<R, C> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.subtract(&rhs)
    }
}

impl<const R: usize, const C: usize> ops::Div for &FixedMatrix<R, C> {
    type Output = FixedMatrix<R, C>;

    fn div(self, rhs: Self) -> FixedMatrix<R, C> {
        self.divide(rhs)
    }
}

impl<const R: usize, const C: usize> ops::Div for FixedMatrix<R, C> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        self.divide(&rhs)
    }
}

impl<const R: usize, const C: usize, const Q: usize> ops::Mul<&FixedMatrix<C, Q>>
    for &FixedMatrix<R, C>
{
    type Output = FixedMatrix<R, Q>;

    fn mul(self, rhs: &FixedMatrix<C, Q>) -> FixedMatrix<R, Q> {
        self.multiply(rhs)
    }
}

impl<const R: usize, const C: usize, const Q: usize> ops::Mul<FixedMatrix<C, Q>>
    for FixedMatrix<R, C>
{
    type Output = FixedMatrix<R, Q>;

    fn mul(self, rhs: FixedMatrix<C, Q>) -> FixedMatrix<R, Q> {
        self.multiply(&rhs)
    }
}

impl<const R: usize, const C: usize> ops::Mul<f64> for &FixedMatrix<R, C> {
    type Output = FixedMatrix<R, C>;

    fn mul(self, scalar: f64) -> FixedMatrix<R, C> {
        self.scale(scalar)
    }
}

impl<const R: usize, const C: usize> ops::Mul<f64> for FixedMatrix<R, C> {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        self.scale(scalar)
    }
}

impl<const R: usize, const C: usize> fmt::Display for FixedMatrix<R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..R {
            for x in &self.as_slice()[i * C..(i + 1) * C] {
                write!(f, "{} ", x)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// Serialized as a flat row-major sequence of R * C numbers.
impl<const R: usize, const C: usize> Serialize for FixedMatrix<R, C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(R * C))?;
        for x in self.as_slice() {
            seq.serialize_element(x)?;
        }
        seq.end()
    }
}

impl<'de, const R: usize, const C: usize> Deserialize<'de> for FixedMatrix<R, C> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(MatrixVisitor::<R, C>(PhantomData))
    }
}

struct MatrixVisitor<const R: usize, const C: usize>(PhantomData<FixedMatrix<R, C>>);

impl<'de, const R: usize, const C: usize> Visitor<'de> for MatrixVisitor<R, C> {
    type Value = FixedMatrix<R, C>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a sequence of {} numbers", R * C)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut matrix = FixedMatrix::<R, C>::new();
        for (index, slot) in matrix.as_mut_slice().iter_mut().enumerate() {
            *slot = seq
                .next_element()?
                .ok_or_else(|| de::Error::invalid_length(index, &self))?;
        }
        if seq.next_element::<de::IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(R * C + 1, &self));
        }
        Ok(matrix)
    }
}
