// Stylised leaf shape.
//
// Every leaf grows along a fixed direction chosen from its index. The blade
// is described by five points: the base at the end of a short stem, the tip,
// a point a third of the way up the midrib and two lateral points either side
// of it which act as the control points of the blade outline.

use geo::Coordinate;

use crate::leaf::LeafEntry;

pub type Point2D = Coordinate<f64>;

/// Distance from the canvas centre to the base of each leaf.
pub const STEM_LENGTH: f64 = 10.0;

/// Direction of a leaf in degrees clockwise from vertical. The first four
/// leaves sit on the compass points, later ones are spread out by a fixed
/// integer step of 1800/13 degrees.
pub fn angular_offset(index: u32) -> f64 {
    match index {
        0 => 90.0,
        1 => 270.0,
        2 => 180.0,
        3 => 0.0,
        n => ((1800 * u64::from(n - 3)) / 13 % 360) as f64,
    }
}

pub fn leaf_length(area: f64) -> f64 {
    2.0 * area.sqrt()
}

pub fn leaf_width(area: f64) -> f64 {
    0.5 * area.sqrt()
}

/// Moves `radius` away from `origin` in the direction `degrees`, in canvas
/// space where y grows downwards.
pub fn project(origin: Point2D, radius: f64, degrees: f64) -> Point2D {
    let rad = degrees.to_radians();
    Point2D {
        x: origin.x + radius * rad.sin(),
        y: origin.y - radius * rad.cos(),
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LeafGeometry {
    pub base: Point2D,
    pub tip: Point2D,
    pub mid: Point2D,
    pub left: Point2D,
    pub right: Point2D,
}

impl LeafGeometry {
    pub fn compute(leaf: &LeafEntry, origin: Point2D, stem: f64) -> LeafGeometry {
        let offset = angular_offset(leaf.index);
        let length = leaf_length(leaf.area);
        let width = leaf_width(leaf.area);
        let mid = project(origin, stem + length / 3.0, offset);
        LeafGeometry {
            base: project(origin, stem, offset),
            tip: project(origin, stem + length, offset),
            mid,
            left: project(mid, width, offset + 90.0),
            right: project(mid, width, offset - 90.0),
        }
    }
}

/// Geometry for every leaf of one frame, in input order.
pub fn layout(leaves: &[LeafEntry], origin: Point2D, stem: f64) -> Vec<LeafGeometry> {
    leaves
        .iter()
        .map(|leaf| LeafGeometry::compute(leaf, origin, stem))
        .collect()
}
