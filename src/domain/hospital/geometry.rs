//! Planar geometry over longitude/latitude coordinates.
//!
//! Follows GeoJSON conventions: positions are `x = longitude`,
//! `y = latitude`, and the first ring of a polygon is its exterior.

use super::geo::GeoPoint;

/// A planar position (`x` = longitude, `y` = latitude).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn to_geo_point(self) -> GeoPoint {
        GeoPoint {
            lat: self.y,
            lon: self.x,
        }
    }
}

/// A polygon: exterior ring followed by zero or more holes.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub rings: Vec<Vec<Position>>,
}

impl Polygon {
    pub fn new(rings: Vec<Vec<Position>>) -> Self {
        Self { rings }
    }

    /// Area with holes subtracted.
    pub fn area(&self) -> f64 {
        self.rings
            .iter()
            .enumerate()
            .map(|(i, ring)| {
                let a = ring_signed_area(ring).abs();
                if i == 0 {
                    a
                } else {
                    -a
                }
            })
            .sum()
    }

    /// Area-weighted centroid, or `None` for a degenerate polygon.
    fn area_centroid(&self) -> Option<(Position, f64)> {
        let mut total = 0.0;
        let mut cx = 0.0;
        let mut cy = 0.0;
        for (i, ring) in self.rings.iter().enumerate() {
            let Some((c, signed)) = ring_centroid(ring) else {
                continue;
            };
            let weight = if i == 0 { signed.abs() } else { -signed.abs() };
            total += weight;
            cx += c.x * weight;
            cy += c.y * weight;
        }
        if total.abs() < f64::EPSILON {
            return None;
        }
        Some((Position::new(cx / total, cy / total), total))
    }

    /// Even-odd containment test across all rings.
    pub fn contains(&self, point: Position) -> bool {
        let mut inside = false;
        for ring in &self.rings {
            for (a, b) in ring_edges(ring) {
                if (a.y > point.y) != (b.y > point.y) {
                    let x_cross = a.x + (point.y - a.y) / (b.y - a.y) * (b.x - a.x);
                    if point.x < x_cross {
                        inside = !inside;
                    }
                }
            }
        }
        inside
    }

    /// Interior intervals of the horizontal line `y`, as (start, end) x pairs.
    fn scanline_spans(&self, y: f64) -> Vec<(f64, f64)> {
        let mut crossings: Vec<f64> = self
            .rings
            .iter()
            .flat_map(|ring| ring_edges(ring))
            .filter(|(a, b)| (a.y <= y && y < b.y) || (b.y <= y && y < a.y))
            .map(|(a, b)| a.x + (y - a.y) / (b.y - a.y) * (b.x - a.x))
            .collect();
        crossings.sort_by(f64::total_cmp);
        crossings
            .chunks_exact(2)
            .map(|pair| (pair[0], pair[1]))
            .collect()
    }

    fn bounds_y(&self) -> Option<(f64, f64)> {
        let exterior = self.rings.first()?;
        let mut iter = exterior.iter().map(|p| p.y);
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y))))
    }
}

/// Supported geometry kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Position),
    MultiPoint(Vec<Position>),
    LineString(Vec<Position>),
    MultiLineString(Vec<Vec<Position>>),
    Polygon(Polygon),
    MultiPolygon(Vec<Polygon>),
}

impl Geometry {
    /// Geometric centroid, or `None` for an empty geometry.
    ///
    /// Polygons are weighted by area and lines by length. Degenerate
    /// polygons fall back to their boundary and degenerate lines to their
    /// vertices.
    pub fn centroid(&self) -> Option<Position> {
        match self {
            Geometry::Point(p) => Some(*p),
            Geometry::MultiPoint(points) => mean_position(points.iter()),
            Geometry::LineString(line) => lines_centroid(std::slice::from_ref(line)),
            Geometry::MultiLineString(lines) => lines_centroid(lines),
            Geometry::Polygon(polygon) => polygons_centroid(std::slice::from_ref(polygon)),
            Geometry::MultiPolygon(polygons) => polygons_centroid(polygons),
        }
    }

    /// A point guaranteed to lie on the geometry.
    ///
    /// Polygons use the midpoint of the widest interior span of the
    /// horizontal line through the middle of their vertical extent.
    pub fn representative_point(&self) -> Option<Position> {
        match self {
            Geometry::Point(p) => Some(*p),
            Geometry::MultiPoint(points) => points.first().copied(),
            Geometry::LineString(line) => line_interior_point(std::slice::from_ref(line)),
            Geometry::MultiLineString(lines) => line_interior_point(lines),
            Geometry::Polygon(polygon) => polygons_interior_point(std::slice::from_ref(polygon)),
            Geometry::MultiPolygon(polygons) => polygons_interior_point(polygons),
        }
    }
}

fn ring_edges(ring: &[Position]) -> impl Iterator<Item = (Position, Position)> + '_ {
    let n = ring.len();
    (0..n).filter_map(move |i| {
        let a = ring[i];
        let b = ring[(i + 1) % n];
        (a != b).then_some((a, b))
    })
}

fn ring_signed_area(ring: &[Position]) -> f64 {
    ring_edges(ring)
        .map(|(a, b)| a.x * b.y - b.x * a.y)
        .sum::<f64>()
        / 2.0
}

fn ring_centroid(ring: &[Position]) -> Option<(Position, f64)> {
    let area = ring_signed_area(ring);
    if area.abs() < f64::EPSILON {
        return None;
    }
    let (mut cx, mut cy) = (0.0, 0.0);
    for (a, b) in ring_edges(ring) {
        let cross = a.x * b.y - b.x * a.y;
        cx += (a.x + b.x) * cross;
        cy += (a.y + b.y) * cross;
    }
    Some((Position::new(cx / (6.0 * area), cy / (6.0 * area)), area))
}

fn mean_position<'a>(points: impl Iterator<Item = &'a Position>) -> Option<Position> {
    let (n, sx, sy) = points.fold((0usize, 0.0, 0.0), |(n, sx, sy), p| (n + 1, sx + p.x, sy + p.y));
    (n > 0).then(|| Position::new(sx / n as f64, sy / n as f64))
}

fn lines_centroid(lines: &[Vec<Position>]) -> Option<Position> {
    let mut total = 0.0;
    let (mut cx, mut cy) = (0.0, 0.0);
    for line in lines {
        for pair in line.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let len = ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt();
            total += len;
            cx += (a.x + b.x) / 2.0 * len;
            cy += (a.y + b.y) / 2.0 * len;
        }
    }
    if total > 0.0 {
        Some(Position::new(cx / total, cy / total))
    } else {
        mean_position(lines.iter().flatten())
    }
}

fn polygons_centroid(polygons: &[Polygon]) -> Option<Position> {
    let mut total = 0.0;
    let (mut cx, mut cy) = (0.0, 0.0);
    for (c, area) in polygons.iter().filter_map(Polygon::area_centroid) {
        total += area;
        cx += c.x * area;
        cy += c.y * area;
    }
    if total.abs() >= f64::EPSILON {
        return Some(Position::new(cx / total, cy / total));
    }
    let boundaries: Vec<Vec<Position>> = polygons
        .iter()
        .flat_map(|p| p.rings.iter().cloned())
        .collect();
    lines_centroid(&boundaries)
}

/// Interior vertex nearest the centroid; endpoints only if there are no
/// interior vertices.
fn line_interior_point(lines: &[Vec<Position>]) -> Option<Position> {
    let centroid = lines_centroid(lines)?;
    let distance = |p: &Position| (p.x - centroid.x).powi(2) + (p.y - centroid.y).powi(2);
    let nearest = |candidates: Vec<Position>| {
        candidates
            .into_iter()
            .min_by(|a, b| distance(a).total_cmp(&distance(b)))
    };

    let interior: Vec<Position> = lines
        .iter()
        .filter(|l| l.len() > 2)
        .flat_map(|l| l[1..l.len() - 1].iter().copied())
        .collect();
    if !interior.is_empty() {
        return nearest(interior);
    }
    nearest(
        lines
            .iter()
            .flat_map(|l| l.first().into_iter().chain(l.last()).copied())
            .collect(),
    )
}

fn polygons_interior_point(polygons: &[Polygon]) -> Option<Position> {
    let mut best: Option<(f64, Position)> = None;
    for polygon in polygons {
        let Some((lo, hi)) = polygon.bounds_y() else {
            continue;
        };
        let y = lo + (hi - lo) / 2.0;
        for (start, end) in polygon.scanline_spans(y) {
            let width = end - start;
            if best.map_or(true, |(w, _)| width > w) {
                best = Some((width, Position::new(start + width / 2.0, y)));
            }
        }
    }
    match best {
        Some((width, point)) if width > 0.0 => Some(point),
        _ => polygons_centroid(polygons),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pos(x: f64, y: f64) -> Position {
        Position::new(x, y)
    }

    fn square(x0: f64, y0: f64, size: f64) -> Vec<Position> {
        vec![
            pos(x0, y0),
            pos(x0 + size, y0),
            pos(x0 + size, y0 + size),
            pos(x0, y0 + size),
            pos(x0, y0),
        ]
    }

    /// A "C" shape whose centroid lies outside the polygon.
    fn c_shape() -> Polygon {
        Polygon::new(vec![vec![
            pos(0.0, 0.0),
            pos(4.0, 0.0),
            pos(4.0, 1.0),
            pos(1.0, 1.0),
            pos(1.0, 3.0),
            pos(4.0, 3.0),
            pos(4.0, 4.0),
            pos(0.0, 4.0),
            pos(0.0, 0.0),
        ]])
    }

    #[test]
    fn square_centroid_is_center() {
        let g = Geometry::Polygon(Polygon::new(vec![square(0.0, 0.0, 2.0)]));
        assert_eq!(g.centroid(), Some(pos(1.0, 1.0)));
    }

    #[test]
    fn hole_shifts_centroid() {
        let g = Geometry::Polygon(Polygon::new(vec![
            square(0.0, 0.0, 4.0),
            square(2.0, 0.0, 2.0),
        ]));
        let c = g.centroid().unwrap();
        assert!(c.x < 2.0);
        assert!(c.y > 2.0);
    }

    #[test]
    fn area_subtracts_holes() {
        let p = Polygon::new(vec![square(0.0, 0.0, 4.0), square(1.0, 1.0, 1.0)]);
        assert_eq!(p.area(), 15.0);
    }

    #[test]
    fn multipolygon_centroid_is_area_weighted() {
        let g = Geometry::MultiPolygon(vec![
            Polygon::new(vec![square(0.0, 0.0, 1.0)]),
            Polygon::new(vec![square(10.0, 0.0, 1.0)]),
        ]);
        assert_eq!(g.centroid(), Some(pos(5.5, 0.5)));
    }

    #[test]
    fn line_centroid_is_length_weighted() {
        let g = Geometry::LineString(vec![pos(0.0, 0.0), pos(2.0, 0.0), pos(2.0, 1.0)]);
        let c = g.centroid().unwrap();
        assert!((c.x - 4.0 / 3.0).abs() < 1e-12);
        assert!((c.y - 1.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn multipoint_centroid_is_mean() {
        let g = Geometry::MultiPoint(vec![pos(0.0, 0.0), pos(2.0, 4.0)]);
        assert_eq!(g.centroid(), Some(pos(1.0, 2.0)));
    }

    #[test]
    fn point_is_its_own_centroid_and_representative() {
        let g = Geometry::Point(pos(106.8, -6.2));
        assert_eq!(g.centroid(), Some(pos(106.8, -6.2)));
        assert_eq!(g.representative_point(), Some(pos(106.8, -6.2)));
    }

    #[test]
    fn empty_geometry_has_no_centroid() {
        assert_eq!(Geometry::MultiPoint(vec![]).centroid(), None);
        assert_eq!(Geometry::MultiPolygon(vec![]).representative_point(), None);
    }

    #[test]
    fn c_shape_centroid_is_outside_but_representative_is_inside() {
        let polygon = c_shape();
        let g = Geometry::Polygon(polygon.clone());

        let centroid = g.centroid().unwrap();
        assert!(!polygon.contains(centroid));

        let rep = g.representative_point().unwrap();
        assert!(polygon.contains(rep));
        assert_eq!(rep, pos(0.5, 2.0));
    }

    #[test]
    fn line_representative_is_interior_vertex() {
        let g = Geometry::LineString(vec![pos(0.0, 0.0), pos(1.0, 0.0), pos(5.0, 0.0)]);
        assert_eq!(g.representative_point(), Some(pos(1.0, 0.0)));
    }

    #[test]
    fn two_point_line_representative_is_an_endpoint() {
        let g = Geometry::LineString(vec![pos(0.0, 0.0), pos(3.0, 0.0)]);
        let rep = g.representative_point().unwrap();
        assert!(rep == pos(0.0, 0.0) || rep == pos(3.0, 0.0));
    }

    #[test]
    fn degenerate_polygon_falls_back_to_boundary() {
        let g = Geometry::Polygon(Polygon::new(vec![vec![
            pos(0.0, 0.0),
            pos(2.0, 0.0),
            pos(0.0, 0.0),
        ]]));
        assert_eq!(g.centroid(), Some(pos(1.0, 0.0)));
    }

    proptest! {
        #[test]
        fn representative_point_of_rectangle_is_inside(
            x0 in -180.0..170.0_f64, y0 in -80.0..70.0_f64,
            w in 0.001..10.0_f64, h in 0.001..10.0_f64,
        ) {
            let polygon = Polygon::new(vec![vec![
                pos(x0, y0), pos(x0 + w, y0), pos(x0 + w, y0 + h), pos(x0, y0 + h), pos(x0, y0),
            ]]);
            let rep = Geometry::Polygon(polygon.clone()).representative_point().unwrap();
            prop_assert!(polygon.contains(rep));
        }

        #[test]
        fn triangle_centroid_is_vertex_mean(
            ax in -10.0..10.0_f64, ay in -10.0..10.0_f64,
            bx in -10.0..10.0_f64, by in -10.0..10.0_f64,
            cx in -10.0..10.0_f64, cy in -10.0..10.0_f64,
        ) {
            let area = ((bx - ax) * (cy - ay) - (cx - ax) * (by - ay)).abs() / 2.0;
            prop_assume!(area > 0.01);
            let g = Geometry::Polygon(Polygon::new(vec![vec![
                pos(ax, ay), pos(bx, by), pos(cx, cy), pos(ax, ay),
            ]]));
            let c = g.centroid().unwrap();
            prop_assert!((c.x - (ax + bx + cx) / 3.0).abs() < 1e-9);
            prop_assert!((c.y - (ay + by + cy) / 3.0).abs() < 1e-9);
        }
    }
}
