// src/numerics/mod.rs
// Top-level numerics module. Exposes a `types` namespace with submodules.

pub mod types {
    // The submodules live in src/numerics/types/*.rs
    pub mod matrix;
    pub mod point;
    pub mod storage;
    pub mod traits;
    pub mod vector;
}

pub use types::matrix::{FixedMatrix, EQUALITY_EPSILON};
pub use types::point::Point3;
pub use types::storage::INLINE_CAPACITY;
pub use types::traits::Homogeneous;
pub use types::vector::Vector3;
