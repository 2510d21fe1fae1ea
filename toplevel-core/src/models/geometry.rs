//! Axis aligned boxes and the displacement algebra built on them.
#![allow(clippy::module_name_repetitions)]
use super::{Dimensions, Displacement, Edges, Point, PointF, Rectangle};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// A box in layout coordinates: origin at the top left, extending `width` to the right and
/// `height` down.
///
/// Nothing stops `width` or `height` from being zero or negative. A zero sized box is how
/// "no geometry" is expressed, for example as the result of intersecting two disjoint boxes.
#[derive(Serialize, Deserialize, Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Geometry {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Geometry {
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub const fn construct(origin: Point, dimensions: Dimensions) -> Self {
        Self::new(origin.x, origin.y, dimensions.width, dimensions.height)
    }

    #[must_use]
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[must_use]
    pub const fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    /// Right edge, exclusive.
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Bottom edge, exclusive.
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    #[must_use]
    pub const fn contains_point(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    #[must_use]
    pub fn contains_pointf(&self, point: PointF) -> bool {
        point.x >= f64::from(self.x)
            && point.x < f64::from(self.right())
            && point.y >= f64::from(self.y)
            && point.y < f64::from(self.bottom())
    }

    /// Whether `other` lies entirely inside this box.
    #[must_use]
    pub const fn contains(&self, other: &Self) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Whether the two boxes share at least one pixel. Empty boxes overlap nothing.
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// The overlapping part of two boxes, or `None` if they are disjoint.
    #[must_use]
    pub fn intersection_opt(&self, other: &Self) -> Option<Self> {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());
        if x1 < x2 && y1 < y2 {
            Some(Self::new(x1, y1, x2 - x1, y2 - y1))
        } else {
            None
        }
    }

    /// The overlapping part of two boxes.
    ///
    /// Disjoint boxes give the zero box `(0,0 0x0)`. Check [`Geometry::is_empty`] before using
    /// the origin of the result.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        self.intersection_opt(other).unwrap_or_default()
    }

    /// The closest box to `self` that lies completely inside `bounds`. The result may be
    /// smaller than `self`, never bigger. A negative size is kept as is.
    #[must_use]
    pub fn clamp(self, bounds: Self) -> Self {
        let width = self.width.min(bounds.width.max(0));
        let height = self.height.min(bounds.height.max(0));
        Self {
            x: clamp_value(self.x, bounds.x, bounds.right() - width),
            y: clamp_value(self.y, bounds.y, bounds.bottom() - height),
            width,
            height,
        }
    }

    /// Map `self`, given relative to `from`, onto the same relative part of `to`.
    ///
    /// Edges are rounded outward, so the result never loses a partially covered pixel.
    ///
    /// `from` must have a positive width and height. For an empty `from` the result is
    /// unspecified (and debug builds panic).
    #[must_use]
    pub fn scale_box(from: Self, to: Self, geometry: Self) -> Self {
        debug_assert!(!from.is_empty(), "scale_box from an empty box {from}");
        let scale_x = f64::from(to.width) / f64::from(from.width);
        let scale_y = f64::from(to.height) / f64::from(from.height);
        let x1 = to.x + (f64::from(geometry.x - from.x) * scale_x).floor() as i32;
        let y1 = to.y + (f64::from(geometry.y - from.y) * scale_y).floor() as i32;
        let x2 = to.x + (f64::from(geometry.right() - from.x) * scale_x).ceil() as i32;
        let y2 = to.y + (f64::from(geometry.bottom() - from.y) * scale_y).ceil() as i32;
        Self::new(x1, y1, x2 - x1, y2 - y1)
    }

    /// Move each edge outward by `active` where the edge is in `edges`, and by `inactive`
    /// everywhere else.
    #[must_use]
    pub fn expand_if(self, edges: Edges, active: &Displacement, inactive: &Displacement) -> Self {
        let pick = |edge: Edges, on: i32, off: i32| if edges.contains(edge) { on } else { off };
        let mut rectangle = Rectangle::from(self);
        rectangle.x1 -= pick(Edges::LEFT, active.left, inactive.left);
        rectangle.y1 -= pick(Edges::TOP, active.top, inactive.top);
        rectangle.x2 += pick(Edges::RIGHT, active.right, inactive.right);
        rectangle.y2 += pick(Edges::BOTTOM, active.bottom, inactive.bottom);
        rectangle.into()
    }
}

fn clamp_value(value: i32, min: i32, max: i32) -> i32 {
    value.max(min).min(max)
}

impl Add<Displacement> for Geometry {
    type Output = Self;
    fn add(self, d: Displacement) -> Self {
        Self {
            x: self.x - d.left,
            y: self.y - d.top,
            width: self.width + d.left + d.right,
            height: self.height + d.top + d.bottom,
        }
    }
}

impl Sub<Displacement> for Geometry {
    type Output = Self;
    fn sub(self, d: Displacement) -> Self {
        Self {
            x: self.x + d.left,
            y: self.y + d.top,
            width: self.width - d.left - d.right,
            height: self.height - d.top - d.bottom,
        }
    }
}

/// `to - from` is the displacement that takes `from` to `to`.
impl Sub for Geometry {
    type Output = Displacement;
    fn sub(self, from: Self) -> Displacement {
        Displacement {
            left: from.x - self.x,
            right: self.right() - from.right(),
            top: from.y - self.y,
            bottom: self.bottom() - from.bottom(),
        }
    }
}

impl Add<Point> for Geometry {
    type Output = Self;
    fn add(self, offset: Point) -> Self {
        Self {
            x: self.x + offset.x,
            y: self.y + offset.y,
            ..self
        }
    }
}

impl Sub<Point> for Geometry {
    type Output = Self;
    fn sub(self, offset: Point) -> Self {
        self + -offset
    }
}

impl Add<Geometry> for Point {
    type Output = Self;
    fn add(self, geometry: Geometry) -> Self {
        self + geometry.origin()
    }
}

impl Mul<f64> for Geometry {
    type Output = Self;
    fn mul(self, scale: f64) -> Self {
        let x = (f64::from(self.x) * scale).floor() as i32;
        let y = (f64::from(self.y) * scale).floor() as i32;
        let right = (f64::from(self.right()) * scale).ceil() as i32;
        let bottom = (f64::from(self.bottom()) * scale).ceil() as i32;
        Self::new(x, y, right - x, bottom - y)
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{} {}x{})", self.x, self.y, self.width, self.height)
    }
}
