//! Renders a gallery of every algorithm into a single PNG.
//!
//! Usage: `rasterlab [OUTPUT.png] [MODEL.obj]`
//!
//! The optional OBJ model replaces the reference cube in the projection
//! panel. Set `RUST_LOG=rasterlab=debug` to see degenerate-case logging.

use rasterlab::canvas::{
    COLOR_BLUE, COLOR_CYAN, COLOR_GREEN, COLOR_GRID, COLOR_MAGENTA, COLOR_ORANGE, COLOR_YELLOW,
};
use rasterlab::model;
use rasterlab::prelude::*;
use rasterlab::projection::DEFAULT_CUBE_SCALE;
use rasterlab::raster::polyline::rasterize_polyline_with;
use rasterlab::transform::translate;

const DEFAULT_OUTPUT: &str = "gallery.png";
const PANEL_SIZE: i32 = 200;
const PANEL_COLUMNS: i32 = 4;
const PANEL_ROWS: i32 = 2;
const COLOR_DIM: u32 = 0xFF555555;

/// Bottom-left corner of a panel. Row 0 is the bottom row.
fn panel(column: i32, row: i32) -> Point {
    Point::new(column * PANEL_SIZE, row * PANEL_SIZE)
}

fn at(origin: Point, x: i32, y: i32) -> Point {
    origin + Point::new(x, y)
}

fn outline(canvas: &mut Canvas, vertices: &[Point], color: u32) {
    canvas.plot(&rasterize_polygon_outline(&Polygon::new(vertices.to_vec())), color);
}

fn draw_lines(canvas: &mut Canvas, origin: Point) {
    let center = at(origin, 100, 100);
    for i in 0..12 {
        let tip = Vec2::new(80.0, 0.0).rotate((i as f64 * 30.0).to_radians());
        let end = center + tip.to_point();
        let (algorithm, color) = if i % 2 == 0 {
            (LineAlgorithm::Bresenham, COLOR_WHITE)
        } else {
            (LineAlgorithm::Dda, COLOR_CYAN)
        };
        canvas.plot(&rasterize_line_with(algorithm, center, end), color);
    }
}

fn draw_conics(canvas: &mut Canvas, origin: Point) {
    let center = at(origin, 100, 100);
    canvas.plot(&circle(center, 60), COLOR_RED);
    canvas.plot(&ellipse(center, 85, 35), COLOR_YELLOW);
    canvas.plot(&ellipse(center, 20, 70), COLOR_ORANGE);
}

fn draw_curves(canvas: &mut Canvas, origin: Point) {
    let control = [at(origin, 20, 30), at(origin, 50, 180), at(origin, 150, 10), at(origin, 180, 170)];
    canvas.plot(&rasterize_polyline_with(LineAlgorithm::Dda, &control), COLOR_DIM);
    let [p0, p1, p2, p3] = control;
    canvas.plot(&rasterize_bezier(p0, p1, p2, p3, DEFAULT_BEZIER_SEGMENTS), COLOR_GREEN);

    let coarse = sample_bezier(p0, p1, p2, p3, 4);
    canvas.plot(&rasterize_polyline(&coarse), COLOR_MAGENTA);
}

fn draw_fills(canvas: &mut Canvas, origin: Point) {
    // U-shaped notch exercises the even-odd rule.
    let notch: Vec<Point> = [(10, 110), (90, 110), (90, 190), (65, 190), (65, 140), (35, 140), (35, 190), (10, 190)]
        .iter()
        .map(|&(x, y)| at(origin, x, y))
        .collect();
    canvas.plot(&fill_scanline(&notch), COLOR_BLUE);
    outline(canvas, &notch, COLOR_WHITE);

    let triangle = [at(origin, 110, 110), at(origin, 190, 120), at(origin, 140, 190)];
    canvas.plot(&fill_polygon_interior(&triangle, None), COLOR_ORANGE);

    // Square with a square hole.
    let outer: Vec<Point> = [(10, 10), (90, 10), (90, 90), (10, 90)].iter().map(|&(x, y)| at(origin, x, y)).collect();
    let hole: Vec<Point> = [(30, 30), (70, 30), (70, 70), (30, 70)].iter().map(|&(x, y)| at(origin, x, y)).collect();
    canvas.plot(&fill_scanline_multi(&[outer, hole]), COLOR_GREEN);

    let center = at(origin, 150, 50);
    let radius = 35;
    canvas.plot(&circle(center, radius), COLOR_WHITE);
    let bounds = Rect::new(center.x - radius, center.y - radius, center.x + radius, center.y + radius);
    let region = fill_canvas(&canvas.occupied(COLOR_BACKGROUND), center, bounds);
    canvas.plot(&region, COLOR_MAGENTA);
}

fn draw_segments(canvas: &mut Canvas, origin: Point, window: &ClipWindow) {
    outline(canvas, window.outline().vertices(), COLOR_YELLOW);

    let center = at(origin, 100, 100);
    for i in 0..9 {
        let reach = Vec2::new(95.0, 0.0).rotate((i as f64 * 20.0 + 5.0).to_radians()).to_point();
        let (a, b) = (center - reach, center + reach + Point::new(0, 15));
        canvas.plot(&rasterize_line(a, b), COLOR_DIM);
        if let Some(segment) = window.clip_line(a, b) {
            canvas.plot(&segment.rasterize(), COLOR_GREEN);
        }
    }

    let subject = [at(origin, 15, 60), at(origin, 120, 5), at(origin, 190, 120), at(origin, 90, 195)];
    outline(canvas, &subject, COLOR_DIM);
    let clipped = window.clip_polygon(&subject);
    if !clipped.is_empty() {
        outline(canvas, &clipped, COLOR_RED);
    }
}

fn draw_rect_clipping(canvas: &mut Canvas, origin: Point) {
    let window = ClipWindow::from(Rect::new(origin.x + 45, origin.y + 55, origin.x + 155, origin.y + 145));
    draw_segments(canvas, origin, &window);
}

fn draw_convex_clipping(canvas: &mut Canvas, origin: Point) {
    let hexagon: Vec<Point> = (0..6)
        .map(|i| at(origin, 100, 100) + Vec2::new(60.0, 0.0).rotate((i as f64 * 60.0).to_radians()).to_point())
        .collect();
    match ClipWindow::convex(&hexagon) {
        Some(window) => draw_segments(canvas, origin, &window),
        None => log::warn!("hexagon window is not convex, skipping panel"),
    }
}

fn draw_transforms(canvas: &mut Canvas, origin: Point) {
    let center = at(origin, 100, 100);
    let arrow = [at(origin, 100, 110), at(origin, 170, 100), at(origin, 100, 90)];

    let mut step = Transform::new();
    step.rotate(45.0, center);
    let mut shape = arrow.to_vec();
    for i in 0..8 {
        let color = if i == 0 { COLOR_WHITE } else { COLOR_CYAN };
        outline(canvas, &shape, color);
        shape = step.apply(&shape);
    }

    let mut shrink = Transform::new();
    shrink.scale_uniform(0.4, center).translate(0, -70);
    outline(canvas, &shrink.apply(&arrow), COLOR_ORANGE);
}

fn draw_projections(canvas: &mut Canvas, origin: Point, wireframe: &Wireframe) {
    let views = [
        (Projection::cavalier(), at(origin, 55, 145), COLOR_WHITE),
        (Projection::cabinet(), at(origin, 150, 145), COLOR_CYAN),
        (Projection::Orthogonal(Plane::Top), at(origin, 55, 50), COLOR_YELLOW),
        (Projection::default(), at(origin, 150, 50), COLOR_GREEN),
    ];
    for (projection, center, color) in views {
        log::debug!("projecting wireframe: {}", projection);
        let cells = wireframe.rasterize(&projection);
        canvas.plot(&translate(&cells, center.x, center.y), color);
    }
}

fn main() -> rasterlab::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let output = args.next().unwrap_or_else(|| DEFAULT_OUTPUT.to_string());
    let wireframe = match args.next() {
        Some(path) => model::load_wireframe(&path)?,
        None => Wireframe::cube(DEFAULT_CUBE_SCALE),
    };

    let mut canvas = Canvas::new((PANEL_SIZE * PANEL_COLUMNS) as u32, (PANEL_SIZE * PANEL_ROWS) as u32);
    canvas.draw_grid(PANEL_SIZE as u32, COLOR_GRID);

    draw_lines(&mut canvas, panel(0, 1));
    draw_conics(&mut canvas, panel(1, 1));
    draw_curves(&mut canvas, panel(2, 1));
    draw_fills(&mut canvas, panel(3, 1));
    draw_rect_clipping(&mut canvas, panel(0, 0));
    draw_convex_clipping(&mut canvas, panel(1, 0));
    draw_transforms(&mut canvas, panel(2, 0));
    draw_projections(&mut canvas, panel(3, 0), &wireframe);

    canvas.save_png(&output)?;
    log::info!("wrote gallery to {}", output);
    Ok(())
}
