//! Border geometry: the four mitred trapezoids between a box's border edge and padding edge.

use kurbo::{BezPath, Line, Point, Rect};

/// The four sides of a box, in painting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    /// This side's value out of a per-side rectangle.
    pub fn pick<T: Copy>(self, sides: &taffy::Rect<T>) -> T {
        match self {
            Edge::Top => sides.top,
            Edge::Right => sides.right,
            Edge::Bottom => sides.bottom,
            Edge::Left => sides.left,
        }
    }
}

/// A quadrilateral with corners in the order top-left, top-right, bottom-right, bottom-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub corners: [Point; 4],
}

impl Quad {
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            corners: [
                Point::new(rect.x0, rect.y0),
                Point::new(rect.x1, rect.y0),
                Point::new(rect.x1, rect.y1),
                Point::new(rect.x0, rect.y1),
            ],
        }
    }

    /// The line along `edge`, running clockwise between two shared corners.
    pub fn edge(&self, edge: Edge) -> Line {
        let start = edge as usize;
        Line::new(self.corners[start], self.corners[(start + 1) % 4])
    }
}

/// The region between an outer and an inner line along one side of a box.
///
/// Both lines run in the same direction, so `outer.p0`/`inner.p0` are the two ends of one
/// mitre and `outer.p1`/`inner.p1` the ends of the other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trapezoid {
    pub outer: Line,
    pub inner: Line,
}

impl Trapezoid {
    pub fn new(outer: Line, inner: Line) -> Self {
        Self { outer, inner }
    }

    /// The four trapezoids tiling the band between `outer` and `inner`, in [`Edge::ALL`] order.
    pub fn border_band(outer: &Quad, inner: &Quad) -> [(Edge, Trapezoid); 4] {
        Edge::ALL.map(|edge| (edge, Trapezoid::new(outer.edge(edge), inner.edge(edge))))
    }

    /// The line joining the midpoints of the two mitres.
    pub fn centerline(&self) -> Line {
        Line::new(
            self.outer.p0.midpoint(self.inner.p0),
            self.outer.p1.midpoint(self.inner.p1),
        )
    }

    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.outer.p0);
        path.line_to(self.outer.p1);
        path.line_to(self.inner.p1);
        path.line_to(self.inner.p0);
        path.close_path();
        path
    }

    /// Signed area (shoelace formula); positive for the clockwise-in-y-down orientation
    /// produced by [`Quad::edge`].
    pub fn area(&self) -> f64 {
        let points = [self.outer.p0, self.outer.p1, self.inner.p1, self.inner.p0];
        let twice: f64 = (0..4)
            .map(|i| {
                let (a, b) = (points[i], points[(i + 1) % 4]);
                a.x * b.y - b.x * a.y
            })
            .sum();
        twice / 2.0
    }
}
