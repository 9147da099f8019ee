use std::f64::consts::PI;

use super::Point;

/// Default radius of the disk labels are spread over.
pub const SPREAD_RADIUS: f64 = 250.0;

/// Places `n` points on a disk of `radius` centered at `(radius, radius)` using
/// the golden-angle (sunflower seed) spiral. `alpha` controls how many points are
/// pinned to the outer ring: `round(alpha * sqrt(n))`; 0 leaves the boundary
/// unsmoothed.
pub fn distributed_points(n: usize, alpha: f64, radius: f64) -> Vec<Point> {
    if n == 0 {
        return Vec::new();
    }
    let count = n as f64;
    let boundary = (alpha.max(0.0) * count.sqrt()).round();
    let phi = (5.0_f64.sqrt() + 1.0) / 2.0;
    let step = 2.0 * PI / (phi * phi);

    (1..=n)
        .map(|k| {
            let k = k as f64;
            let r = radial_fraction(k, count, boundary);
            let theta = step * k;
            Point::new(
                r * radius * theta.cos() + radius,
                r * radius * theta.sin() + radius,
            )
        })
        .collect()
}

fn radial_fraction(k: f64, n: f64, boundary: f64) -> f64 {
    if k > n - boundary {
        return 1.0;
    }
    (k - 0.5).sqrt() / (n - (boundary + 0.5)).sqrt()
}
