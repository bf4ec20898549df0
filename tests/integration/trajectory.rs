use glint::prelude::*;

#[test]
fn test_tick_follows_environment() {
    let env = Environment::new(Vector3::new(0.0, -0.5, 0.0), Vector3::new(0.25, 0.0, 0.0));
    let mut p = Projectile::new(Point3::new(0.0, 10.0, 0.0), Vector3::new(1.0, 0.0, 0.0));

    p = tick(&env, &p);
    assert_eq!(p.position, Point3::new(1.0, 10.0, 0.0));
    assert_eq!(p.velocity, Vector3::new(1.25, -0.5, 0.0));

    p = tick(&env, &p);
    assert_eq!(p.position, Point3::new(2.25, 9.5, 0.0));
    assert_eq!(p.velocity, Vector3::new(1.5, -1.0, 0.0));
}

#[test]
fn test_launch_arc_draws_onto_canvas() {
    let mut canvas = Canvas::filled(900, 550, Color::WHITE);
    let projectile = Projectile::launch(Point3::new(0.0, 1.0, 0.0), &Vector3::new(1.0, 1.8, 0.0), 11.25);

    let ticks = plot_trajectory(&mut canvas, &Environment::earth(), &projectile, Color::BLACK, 100_000);

    let plotted = canvas.pixels().iter().filter(|&&c| c == Color::BLACK).count();
    assert!(ticks > 100);
    assert!(plotted > 100 && plotted <= ticks);

    // highest point of the arc stays inside the frame
    let top_row = (0..550)
        .find(|&y| (0..900).any(|x| canvas.get_pixel(x, y) == Color::BLACK))
        .unwrap();
    assert!(top_row > 0);
}
