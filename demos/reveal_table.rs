use camber::{CurveEngine, Point2, RevealCycle};

fn main() {
    let control_points = vec![
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 1.0),
        Point2::new(2.0, 3.0),
        Point2::new(5.0, 1.0),
        Point2::new(7.0, 8.0),
    ];
    let engine = CurveEngine::with_defaults(control_points).expect("demo path is long enough");

    let cycle: RevealCycle<f64> = RevealCycle::default();
    println!(
        "reveal cycle: period {:.2}s, rising for the first {:.1}%",
        cycle.period,
        cycle.rise_fraction * 100.0
    );
    println!("   t  fraction  samples  progress");

    for i in 0..=26 {
        let t = i as f64;
        let fraction = engine.reveal_fraction(t);
        let samples = engine.spline_points(fraction).len();
        println!(
            "{:>4.0}  {:>8.3}  {:>7}  {}",
            t,
            fraction,
            samples,
            progress_bar(fraction)
        );
    }
}

fn progress_bar(fraction: f64) -> String {
    let width = 32usize;
    let filled = (fraction * width as f64).round() as usize;
    let mut bar = String::with_capacity(width);
    for i in 0..width {
        bar.push(if i < filled { '#' } else { '.' });
    }
    bar
}
