//! Projectile model: a point mass pushed each tick by gravity and wind.

use tracing::debug;

use crate::canvas::{Canvas, Color};
use crate::numerics::{Homogeneous, Point3, Vector3};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Projectile {
    pub position: Point3,
    pub velocity: Vector3,
}

impl Projectile {
    pub fn new(position: Point3, velocity: Vector3) -> Self {
        Self { position, velocity }
    }

    /// Start at `start` moving along `direction` at `speed` units per tick.
    pub fn launch(start: Point3, direction: &Vector3, speed: f64) -> Self {
        Self::new(start, direction.normalize() * speed)
    }
}

/// Constant per-tick accelerations.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Environment {
    pub gravity: Vector3,
    pub wind: Vector3,
}

impl Environment {
    pub fn new(gravity: Vector3, wind: Vector3) -> Self {
        Self { gravity, wind }
    }

    /// Gravity of -0.1 along y and a light headwind of -0.01 along x.
    pub fn earth() -> Self {
        Self::new(Vector3::new(0.0, -0.1, 0.0), Vector3::new(-0.01, 0.0, 0.0))
    }

    /// No gravity, no wind.
    pub fn vacuum() -> Self {
        Self::default()
    }
}

/// Advance one step: position moves by the current velocity, then velocity
/// picks up gravity and wind.
pub fn tick(env: &Environment, projectile: &Projectile) -> Projectile {
    let position = &projectile.position + &projectile.velocity;
    let velocity = &(&projectile.velocity + &env.gravity) + &env.wind;
    Projectile::new(position, velocity)
}

/// Tick `projectile` until it drops to `y <= 0` (or `max_ticks` is reached),
/// plotting each new position at `(x, height - y)`.
///
/// Positions that fall outside the canvas are skipped. Returns the number
/// of ticks taken.
pub fn plot_trajectory(
    canvas: &mut Canvas,
    env: &Environment,
    projectile: &Projectile,
    color: Color,
    max_ticks: usize,
) -> usize {
    let height = canvas.height() as f64;
    let mut current = projectile.clone();
    let mut ticks = 0;

    while current.position.y() > 0.0 && ticks < max_ticks {
        current = tick(env, &current);
        ticks += 1;

        let x = current.position.x();
        let y = height - current.position.y();
        if x.is_finite() && y.is_finite() && x >= 0.0 && y >= 0.0 {
            canvas.set_pixel(x as usize, y as usize, color);
        }
    }

    debug!(
        ticks,
        landed_at = %current.position,
        "trajectory plotted"
    );
    ticks
}
