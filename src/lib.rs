pub mod canvas;
pub mod io;
pub mod numerics;
pub mod physics;
pub mod prelude;
pub use canvas::{Canvas, Color, PpmConfig};
pub use io::ExportError;
pub use numerics::{FixedMatrix, Homogeneous, Point3, Vector3};
