use truck_geometry::base::Point2;
use voxroom_base::Tolerance;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect2 {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Rect2 {
    pub fn centered(width: f64, height: f64) -> Self {
        Self {
            min_x: -width * 0.5,
            max_x: width * 0.5,
            min_y: -height * 0.5,
            max_y: height * 0.5,
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn clamped_inside(&self, bounds: &Rect2, margin: f64) -> Rect2 {
        Rect2 {
            min_x: self.min_x.max(bounds.min_x + margin),
            max_x: self.max_x.min(bounds.max_x - margin),
            min_y: self.min_y.max(bounds.min_y + margin),
            max_y: self.max_y.min(bounds.max_y - margin),
        }
    }

    pub fn overlaps_horizontally(&self, other: &Rect2, tol: &Tolerance) -> bool {
        self.min_x < other.max_x - tol.linear && other.min_x < self.max_x - tol.linear
    }

    pub fn corners_ccw(&self) -> [Point2; 4] {
        [
            Point2::new(self.min_x, self.min_y),
            Point2::new(self.max_x, self.min_y),
            Point2::new(self.max_x, self.max_y),
            Point2::new(self.min_x, self.max_y),
        ]
    }

    pub fn corners_cw(&self) -> [Point2; 4] {
        [
            Point2::new(self.min_x, self.min_y),
            Point2::new(self.min_x, self.max_y),
            Point2::new(self.max_x, self.max_y),
            Point2::new(self.max_x, self.min_y),
        ]
    }
}

// outer loop counter-clockwise, holes clockwise
#[derive(Clone, Debug, Default)]
pub struct ShapeWithHoles {
    pub outer: Vec<Point2>,
    pub holes: Vec<Vec<Point2>>,
}

impl ShapeWithHoles {
    pub fn from_outer(rect: &Rect2) -> Self {
        Self {
            outer: rect.corners_ccw().to_vec(),
            holes: Vec::new(),
        }
    }

    pub fn push_hole(&mut self, rect: &Rect2) {
        self.holes.push(rect.corners_cw().to_vec());
    }

    pub fn hole_count(&self) -> usize {
        self.holes.len()
    }

    pub fn net_area(&self) -> f64 {
        signed_area(&self.outer) + self.holes.iter().map(|hole| signed_area(hole)).sum::<f64>()
    }
}

pub fn signed_area(points: &[Point2]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut twice = 0.0;
    for idx in 0..points.len() {
        let a = points[idx];
        let b = points[(idx + 1) % points.len()];
        twice += a.x * b.y - b.x * a.y;
    }
    twice * 0.5
}
