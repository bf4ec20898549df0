// src/numerics/types/traits.rs
// Shared component access for the 4x1-backed geometry types.

use super::matrix::FixedMatrix;

/// A geometry value stored as a homogeneous 4x1 column `(x, y, z, w)`.
///
/// Implementors fix `w` through [`Homogeneous::W`]: 0 for free vectors,
/// 1 for points. Component indices run `0..4`; anything else panics.
pub trait Homogeneous {
    /// Homogeneous coordinate written at construction.
    const W: f64;

    fn as_matrix(&self) -> &FixedMatrix<4, 1>;

    fn as_matrix_mut(&mut self) -> &mut FixedMatrix<4, 1>;

    #[track_caller]
    fn get(&self, i: usize) -> f64 {
        self.as_matrix().get(i, 0)
    }

    #[track_caller]
    fn set(&mut self, i: usize, x: f64) {
        self.as_matrix_mut().set(i, 0, x);
    }

    #[track_caller]
    fn get_mut(&mut self, i: usize) -> &mut f64 {
        self.as_matrix_mut().get_mut(i, 0)
    }

    fn x(&self) -> f64 {
        self.get(0)
    }

    fn y(&self) -> f64 {
        self.get(1)
    }

    fn z(&self) -> f64 {
        self.get(2)
    }

    fn w(&self) -> f64 {
        self.get(3)
    }

    fn components(&self) -> [f64; 4] {
        [self.x(), self.y(), self.z(), self.w()]
    }
}

/// Column `(x, y, z, w)` for a homogeneous value.
pub(crate) fn column(x: f64, y: f64, z: f64, w: f64) -> FixedMatrix<4, 1> {
    FixedMatrix::from([[x], [y], [z], [w]])
}

/// Implements a binary operator on both references and owned values by
/// forwarding to an inherent method taking `&self, &Rhs`.
macro_rules! homogeneous_binop {
    ($Op:ident, $op:ident, $Lhs:ty, $Rhs:ty => $Out:ty, $method:ident) => {
        impl core::ops::$Op<&$Rhs> for &$Lhs {
            type Output = $Out;

            fn $op(self, rhs: &$Rhs) -> $Out {
                <$Lhs>::$method(self, rhs)
            }
        }

        impl core::ops::$Op<$Rhs> for $Lhs {
            type Output = $Out;

            fn $op(self, rhs: $Rhs) -> $Out {
                <$Lhs>::$method(&self, &rhs)
            }
        }
    };
}

pub(crate) use homogeneous_binop;
