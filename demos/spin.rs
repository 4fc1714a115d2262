// MIT/Apache2 License

//! Spins a plus sign with rounded arms in the terminal.
//!
//! Usage: `cargo run --example spin [frames]`. Set `RUST_LOG=debug` to see how long each frame takes.

use gpath::{fill_path, Angle, Bitmap, Path, PathBuilder, Point, Result};
use std::{
    env,
    thread,
    time::{Duration, Instant},
};

const WIDTH: u32 = 96;
const HEIGHT: u32 = 96;
const MAX_POINTS: usize = 256;

const ROTATION_STEP: i32 = 5;
const TICK: Duration = Duration::from_millis(40);

/// Every third point is on the outline; the two after it are the control points of the curve leading to the
/// next one.
const OUTLINE: [(i32, i32); 12] = [
    (-15, -15),
    (-15, -60),
    (15, -60),
    (15, -15),
    (60, -15),
    (60, 15),
    (15, 15),
    (15, 60),
    (-15, 60),
    (-15, 15),
    (-60, 15),
    (-60, -15),
];

fn build_shape(scale_down: i32) -> Result<Path> {
    let outline: Vec<Point> = OUTLINE
        .iter()
        .map(|&(x, y)| Point::new(x / scale_down, y / scale_down))
        .collect();

    let mut builder = PathBuilder::new(MAX_POINTS)?;
    builder.move_to(outline[0])?;
    for i in (0..outline.len()).step_by(3) {
        let end = outline[(i + 3) % outline.len()];
        builder.curve_to(end, outline[i + 1], outline[i + 2])?;
    }

    builder.finalize()
}

fn main() -> Result {
    env_logger::init();

    let frames: u32 = env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(72);

    let mut path = build_shape(2)?;
    path.set_offset(Point::new(WIDTH as i32 / 2, HEIGHT as i32 / 2));
    log::info!("Built a path with {} points", path.len());

    let mut bitmap = Bitmap::new(WIDTH, HEIGHT);

    for _ in 0..frames {
        let start = Instant::now();
        bitmap.clear();
        fill_path(&mut bitmap, &path);
        log::debug!(
            "render took {:?} ({} points, {} degrees)",
            start.elapsed(),
            path.len(),
            path.rotation().degrees()
        );

        // terminal cells are about twice as tall as they are wide, so only print every other row
        let frame: String = bitmap
            .to_string()
            .lines()
            .step_by(2)
            .map(|line| format!("{}\n", line))
            .collect();
        print!("\x1b[H\x1b[2J{}", frame);

        path.rotate_by(Angle::from_degrees(ROTATION_STEP));
        thread::sleep(TICK);
    }

    Ok(())
}
