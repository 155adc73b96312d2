extern crate plotters;
use plotters::prelude::*;

extern crate contour;
use contour::{BlobParams, Path, PolygonParams, Shape, SquircleParams, SuperellipseParams};

const WIDTH: f64 = 300.0;
const HEIGHT: f64 = 200.0;

/// Sample every segment of a closed path into a polyline.
fn flatten(path: &Path, nsteps: usize) -> Vec<(f64, f64)> {
    let mut points: Vec<(f64, f64)> = path.start().map(|p| (p.x, p.y)).into_iter().collect();
    for segment in path.segments() {
        for i in 1..=nsteps {
            let p = segment.eval(i as f64 / nsteps as f64);
            points.push((p.x, p.y));
        }
    }
    // the implicit closing edge
    if let Some(&first) = points.first() {
        points.push(first);
    }
    points
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let shapes: [(&str, Shape); 4] = [
        ("blob", BlobParams::default().into()),
        (
            "polygon",
            PolygonParams {
                corner_count: 6,
                bend: 0.6,
                ..PolygonParams::default()
            }
            .into(),
        ),
        ("squircle", SquircleParams::default().into()),
        ("superellipse", SuperellipseParams::default().into()),
    ];

    let root = BitMapBackend::new("contour_shapes.png", (1280, 960)).into_drawing_area();
    root.fill(&WHITE)?;

    for ((name, shape), area) in shapes.iter().zip(root.split_evenly((2, 2))) {
        let path = shape.checked_path(WIDTH, HEIGHT)?;
        let outline = flatten(&path, 64);
        let bounds = path.bounds();
        let length: f64 = path.segments().map(|segment| segment.arclen(64)).sum();

        let mut chart = ChartBuilder::on(&area)
            .caption(format!("{name}, outline {length:.0}"), ("sans-serif", 21).into_font())
            .margin(10)
            .x_label_area_size(30)
            .y_label_area_size(30)
            .build_cartesian_2d(-20f64..(WIDTH + 20.0), -20f64..(HEIGHT + 20.0))?;

        chart.configure_mesh().draw()?;

        chart
            .draw_series(LineSeries::new(outline, &RED))?
            .label("outline")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

        // tight bounds should coincide with the target rectangle for stretched shapes
        chart
            .draw_series(std::iter::once(Rectangle::new(
                [(bounds.min_x, bounds.min_y), (bounds.max_x, bounds.max_y)],
                GREEN.stroke_width(1),
            )))?
            .label("bounding box")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN));

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    }

    root.present()?;
    Ok(())
}
