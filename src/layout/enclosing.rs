//! Minimum enclosing circle of a point set.
//!
//! Incremental Welzl-style construction: each point that falls outside the
//! current circle must lie on the boundary of the circle of the points seen so
//! far, which reduces the problem to circles through one or two fixed points.
//! Points are consumed in input order so results are reproducible.

use super::Point;

const RELATIVE_EPSILON: f64 = 1e-12;
const ABSOLUTE_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnclosingCircle {
    pub center: Point,
    pub radius: f64,
}

impl EnclosingCircle {
    pub fn contains(&self, p: &Point) -> bool {
        self.center.distance_to(p) <= self.radius * (1.0 + RELATIVE_EPSILON) + ABSOLUTE_EPSILON
    }
}

/// Returns `None` only for an empty slice.
pub fn smallest_enclosing_circle(points: &[Point]) -> Option<EnclosingCircle> {
    let mut circle: Option<EnclosingCircle> = None;
    for (i, p) in points.iter().enumerate() {
        if circle.is_none_or(|c| !c.contains(p)) {
            circle = Some(circle_with_one_point(&points[..=i], *p));
        }
    }
    circle
}

// `p` is known to be on the boundary.
fn circle_with_one_point(points: &[Point], p: Point) -> EnclosingCircle {
    let mut circle = EnclosingCircle {
        center: p,
        radius: 0.0,
    };
    for (i, q) in points.iter().enumerate() {
        if circle.contains(q) {
            continue;
        }
        circle = if circle.radius == 0.0 {
            diameter_circle(p, *q)
        } else {
            circle_with_two_points(&points[..=i], p, *q)
        };
    }
    circle
}

// `p` and `q` are known to be on the boundary.
fn circle_with_two_points(points: &[Point], p: Point, q: Point) -> EnclosingCircle {
    let diameter = diameter_circle(p, q);
    let mut left: Option<EnclosingCircle> = None;
    let mut right: Option<EnclosingCircle> = None;

    for r in points {
        if diameter.contains(r) {
            continue;
        }
        let side = cross(p, q, *r);
        let Some(candidate) = circumcircle(p, q, *r) else {
            continue;
        };
        let offset = cross(p, q, candidate.center);
        if side > 0.0 && left.is_none_or(|l| offset > cross(p, q, l.center)) {
            left = Some(candidate);
        } else if side < 0.0 && right.is_none_or(|rc| offset < cross(p, q, rc.center)) {
            right = Some(candidate);
        }
    }

    match (left, right) {
        (None, None) => diameter,
        (Some(l), None) => l,
        (None, Some(r)) => r,
        (Some(l), Some(r)) => {
            if l.radius <= r.radius {
                l
            } else {
                r
            }
        }
    }
}

fn diameter_circle(a: Point, b: Point) -> EnclosingCircle {
    let center = Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0);
    let radius = center.distance_to(&a).max(center.distance_to(&b));
    EnclosingCircle { center, radius }
}

/// Circle through three points; `None` when they are collinear.
fn circumcircle(a: Point, b: Point, c: Point) -> Option<EnclosingCircle> {
    // Work relative to the bounding-box midpoint to keep magnitudes small.
    let ox = (a.x.min(b.x).min(c.x) + a.x.max(b.x).max(c.x)) / 2.0;
    let oy = (a.y.min(b.y).min(c.y) + a.y.max(b.y).max(c.y)) / 2.0;
    let (ax, ay) = (a.x - ox, a.y - oy);
    let (bx, by) = (b.x - ox, b.y - oy);
    let (cx, cy) = (c.x - ox, c.y - oy);

    let d = (ax * (by - cy) + bx * (cy - ay) + cx * (ay - by)) * 2.0;
    if d == 0.0 {
        return None;
    }
    let a2 = ax * ax + ay * ay;
    let b2 = bx * bx + by * by;
    let c2 = cx * cx + cy * cy;
    let center = Point::new(
        ox + (a2 * (by - cy) + b2 * (cy - ay) + c2 * (ay - by)) / d,
        oy + (a2 * (cx - bx) + b2 * (ax - cx) + c2 * (bx - ax)) / d,
    );
    let radius = center
        .distance_to(&a)
        .max(center.distance_to(&b))
        .max(center.distance_to(&c));
    Some(EnclosingCircle { center, radius })
}

// Signed area of the parallelogram spanned by `a->b` and `a->c`.
fn cross(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pts(raw: &[(f64, f64)]) -> Vec<Point> {
        raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    /// Tries every circle defined by two or three input points.
    fn brute_force(points: &[Point]) -> EnclosingCircle {
        let mut best = EnclosingCircle {
            center: points[0],
            radius: 0.0,
        };
        if points.iter().all(|p| best.contains(p)) {
            return best;
        }
        let mut candidates = Vec::new();
        for i in 0..points.len() {
            for j in i + 1..points.len() {
                candidates.push(diameter_circle(points[i], points[j]));
                for k in j + 1..points.len() {
                    if let Some(c) = circumcircle(points[i], points[j], points[k]) {
                        candidates.push(c);
                    }
                }
            }
        }
        best.radius = f64::INFINITY;
        for c in candidates {
            if c.radius < best.radius && points.iter().all(|p| c.contains(p)) {
                best = c;
            }
        }
        best
    }

    #[test]
    fn empty_input() {
        assert!(smallest_enclosing_circle(&[]).is_none());
    }

    #[test]
    fn single_point_has_zero_radius() {
        let c = smallest_enclosing_circle(&pts(&[(3.0, -2.0)])).unwrap();
        assert_eq!(c.center, Point::new(3.0, -2.0));
        assert_eq!(c.radius, 0.0);
    }

    #[test]
    fn two_points_span_a_diameter() {
        let c = smallest_enclosing_circle(&pts(&[(0.0, 0.0), (6.0, 8.0)])).unwrap();
        assert_close(c.center.x, 3.0);
        assert_close(c.center.y, 4.0);
        assert_close(c.radius, 5.0);
    }

    #[test]
    fn right_triangle_uses_hypotenuse() {
        let c = smallest_enclosing_circle(&pts(&[(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)])).unwrap();
        assert_close(c.center.x, 2.0);
        assert_close(c.center.y, 1.5);
        assert_close(c.radius, 2.5);
    }

    #[test]
    fn obtuse_triangle_ignores_inner_vertex() {
        let c = smallest_enclosing_circle(&pts(&[(0.0, 0.0), (10.0, 0.0), (5.0, 1.0)])).unwrap();
        assert_close(c.center.x, 5.0);
        assert_close(c.center.y, 0.0);
        assert_close(c.radius, 5.0);
    }

    #[test]
    fn equilateral_triangle_is_circumscribed() {
        let h = 3.0_f64.sqrt() / 2.0;
        let c = smallest_enclosing_circle(&pts(&[(0.0, 0.0), (1.0, 0.0), (0.5, h)])).unwrap();
        assert_close(c.radius, 1.0 / 3.0_f64.sqrt());
    }

    #[test]
    fn rectangle_corners() {
        // label boxes arrive as four corners
        let c = smallest_enclosing_circle(&pts(&[
            (10.0, 20.0),
            (70.0, 20.0),
            (10.0, 100.0),
            (70.0, 100.0),
        ]))
        .unwrap();
        assert_close(c.center.x, 40.0);
        assert_close(c.center.y, 60.0);
        assert_close(c.radius, 50.0);
    }

    #[test]
    fn duplicates_and_collinear_points() {
        let c = smallest_enclosing_circle(&pts(&[
            (1.0, 1.0),
            (1.0, 1.0),
            (2.0, 2.0),
            (3.0, 3.0),
            (2.0, 2.0),
        ]))
        .unwrap();
        assert_close(c.center.x, 2.0);
        assert_close(c.center.y, 2.0);
        assert_close(c.radius, 2.0_f64.sqrt());
    }

    proptest! {
        #[test]
        fn matches_brute_force(raw in prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 1..=8)) {
            let points: Vec<Point> = raw.iter().map(|&(x, y)| Point::new(x, y)).collect();
            let circle = smallest_enclosing_circle(&points).unwrap();
            for p in &points {
                prop_assert!(circle.contains(p), "{:?} outside {:?}", p, circle);
            }
            let reference = brute_force(&points);
            prop_assert!((circle.radius - reference.radius).abs() <= 1e-6 * reference.radius.max(1.0));
        }

        #[test]
        fn large_inputs_contain_every_point(raw in prop::collection::vec((0.0f64..500.0, 0.0f64..500.0), 1..120)) {
            let points: Vec<Point> = raw.iter().map(|&(x, y)| Point::new(x, y)).collect();
            let circle = smallest_enclosing_circle(&points).unwrap();
            for p in &points {
                prop_assert!(circle.contains(p));
            }
        }
    }
}
