//! Prelude for glint
//!
//! Re-exports the geometry kernel, the canvas and the io helpers for convenient use.

pub use crate::canvas::{Canvas, Color, PpmConfig};
pub use crate::io::{save_ppm, write_ppm, ExportError};
pub use crate::numerics::{FixedMatrix, Homogeneous, Point3, Vector3};
pub use crate::physics::{plot_trajectory, tick, Environment, Projectile};

// Common shapes
pub type Matrix2 = FixedMatrix<2, 2>;
pub type Matrix3 = FixedMatrix<3, 3>;
pub type Matrix4 = FixedMatrix<4, 4>;
