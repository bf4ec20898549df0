//! Projectile demo
//!
//! Launches a projectile across a 900x550 canvas under earth-like gravity
//! and wind, plots every tick and writes the result as a PPM image.
//!
//! Usage: cargo run --example projectile -- [output.ppm]

use anyhow::{Context, Result};
use glint::prelude::*;
use tracing_subscriber::EnvFilter;

const WIDTH: usize = 900;
const HEIGHT: usize = 550;
const MAX_TICKS: usize = 10_000;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let output = std::env::args().nth(1).unwrap_or_else(|| "projectile.ppm".to_string());

    println!("Glint Projectile Demo");
    println!("=====================");

    let mut canvas = Canvas::filled(WIDTH, HEIGHT, Color::WHITE);
    let projectile = Projectile::launch(Point3::new(0.0, 1.0, 0.0), &Vector3::new(1.0, 1.8, 0.0), 11.25);
    let environment = Environment::earth();

    println!("Launch: {} at {}", projectile.position, projectile.velocity);
    let ticks = plot_trajectory(&mut canvas, &environment, &projectile, Color::BLACK, MAX_TICKS);
    println!("Landed after {} ticks", ticks);

    save_ppm(&canvas, &output).with_context(|| format!("saving trajectory to {}", output))?;
    println!("Wrote {}x{} image to {}", WIDTH, HEIGHT, output);
    Ok(())
}
