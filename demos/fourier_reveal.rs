use plotters::prelude::*;

use camber::{polyline_bounds, CurveEngine, EngineConfig, Point2};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let control_points = vec![
        Point2::new(0.00, 0.00),
        Point2::new(0.10, 0.10),
        Point2::new(0.20, 0.30),
        Point2::new(0.35, 0.45),
        Point2::new(0.50, 0.10),
        Point2::new(0.60, 0.55),
        Point2::new(0.70, 0.80),
    ];

    let mut engine = CurveEngine::new(
        EngineConfig {
            tension: 0.7,
            ..EngineConfig::default()
        },
        control_points,
    )?;

    let spline = engine.spline_points(1.0);
    let (min, max) = polyline_bounds(&spline).expect("non-empty curve");

    let root = BitMapBackend::new("fourier_reveal.png", (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Fourier path reveal", ("sans-serif", 21).into_font())
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(min.x - 0.2..max.x + 0.2, min.y - 0.2..max.y + 0.2)?;

    chart.configure_mesh().draw()?;

    // the spline as the reference shape
    chart
        .draw_series(LineSeries::new(spline.iter().map(|p| (p.x, p.y)), &BLACK))?
        .label("spline")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLACK));

    // the Fourier approximation at increasing reveal fractions
    let stages = [(0.25, RED), (0.5, MAGENTA), (0.75, BLUE), (1.0, GREEN)];
    for (fraction, color) in stages {
        let approx = engine.fourier_points(fraction)?;
        chart
            .draw_series(LineSeries::new(approx.iter().map(|p| (p.x, p.y)), &color))?
            .label(format!("reveal {:.2}", fraction))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    println!("wrote fourier_reveal.png");

    Ok(())
}
