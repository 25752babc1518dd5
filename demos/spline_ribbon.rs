use plotters::prelude::*;

use camber::{polyline_bounds, CurveEngine, EngineConfig, Point2};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let control_points = vec![
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 1.0),
        Point2::new(2.0, 3.0),
        Point2::new(5.0, 1.0),
        Point2::new(7.0, 8.0),
    ];

    let engine = CurveEngine::new(
        EngineConfig {
            tension: 0.7,
            ribbon_offset: 0.25,
            ..EngineConfig::default()
        },
        control_points.clone(),
    )?;

    let curve = engine.spline_points(1.0);
    let ribbon = engine.ribbon(1.0);

    let (min, max) = polyline_bounds(&control_points).expect("non-empty path");

    let root = BitMapBackend::new("spline_ribbon.png", (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Catmull-Rom spline with stroke rails", ("sans-serif", 21).into_font())
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(min.x - 1.0..max.x + 1.0, min.y - 1.0..max.y + 1.0)?;

    chart.configure_mesh().draw()?;

    // the control points the curve threads through
    chart
        .draw_series(PointSeries::of_element(
            control_points.iter().map(|p| (p.x, p.y)),
            5,
            &BLUE,
            &|coord, size, style| {
                EmptyElement::at(coord)
                    + Circle::new((0, 0), size, style)
                    + Text::new(
                        format!("{:?}", coord),
                        (10, 0),
                        ("sans-serif", 12).into_font(),
                    )
            },
        ))?
        .label("control points")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

    // the interpolated centerline
    chart
        .draw_series(LineSeries::new(curve.iter().map(|p| (p.x, p.y)), &RED))?
        .label("spline")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));

    // the two offset rails
    chart
        .draw_series(LineSeries::new(
            ribbon.left().iter().map(|p| (p.x, p.y)),
            &GREEN,
        ))?
        .label("ribbon")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &GREEN));
    chart.draw_series(LineSeries::new(
        ribbon.right().iter().map(|p| (p.x, p.y)),
        &GREEN,
    ))?;

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    println!("wrote spline_ribbon.png");

    Ok(())
}
