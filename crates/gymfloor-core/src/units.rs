//! Coordinate spaces and geometry primitives
//!
//! Every length in a layout lives in exactly one coordinate space:
//! - [`Floor`]: floor-absolute units, origin at the main room's top-left corner
//! - [`ZoneLocal`]: units relative to the owning zone's top-left corner (machines)
//! - [`Device`]: rendered pixels as reported by the rendering collaborator
//!
//! The space is a type parameter, so a zone-local rectangle cannot be passed
//! where a floor rectangle is expected. Conversions are explicit calls
//! ([`ZoneRect::to_floor`], or the viewport calculator for device pixels).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// Floor-absolute coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Floor;

/// Coordinates relative to a zone's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ZoneLocal;

/// Rendered device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Device;

/// A point in coordinate space `S`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point<S> {
    pub x: f64,
    pub y: f64,
    space: PhantomData<S>,
}

impl<S> Point<S> {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            space: PhantomData,
        }
    }

    /// Delta that moves `self` onto `other`.
    pub fn delta_to(&self, other: &Point<S>) -> Delta<S> {
        Delta::new(other.x - self.x, other.y - self.y)
    }

    pub fn translate(&self, delta: Delta<S>) -> Self {
        Self::new(self.x + delta.dx, self.y + delta.dy)
    }
}

/// A size in coordinate space `S`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size<S> {
    pub width: f64,
    pub height: f64,
    space: PhantomData<S>,
}

impl<S> Size<S> {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            space: PhantomData,
        }
    }
}

/// A displacement in coordinate space `S`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Delta<S> {
    pub dx: f64,
    pub dy: f64,
    space: PhantomData<S>,
}

impl<S> Delta<S> {
    pub fn new(dx: f64, dy: f64) -> Self {
        Self {
            dx,
            dy,
            space: PhantomData,
        }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl Delta<Floor> {
    /// The same displacement seen from inside a zone. Zone-local space is a
    /// pure translation of floor space, so the components carry over.
    pub fn to_zone_local(self) -> Delta<ZoneLocal> {
        Delta::new(self.dx, self.dy)
    }
}

/// Axis-aligned rectangle in coordinate space `S`.
///
/// Serializes as flat `{x, y, width, height}`; the space marker is type-level only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Rect<S> {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(skip)]
    space: PhantomData<S>,
}

pub type FloorRect = Rect<Floor>;
pub type ZoneRect = Rect<ZoneLocal>;
pub type FloorPoint = Point<Floor>;
pub type DevicePoint = Point<Device>;
pub type DeviceSize = Size<Device>;

impl<S> Default for Rect<S> {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

impl<S> Rect<S> {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            space: PhantomData,
        }
    }

    pub fn from_origin_size(origin: Point<S>, size: Size<S>) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn origin(&self) -> Point<S> {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size<S> {
        Size::new(self.width, self.height)
    }

    /// All fields finite and both dimensions strictly positive.
    pub fn is_valid(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    /// Whether `other` lies fully inside `self` (shared edges count as inside).
    pub fn contains_rect(&self, other: &Rect<S>) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    pub fn contains_point(&self, p: &Point<S>) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    /// Smallest rectangle covering both.
    pub fn union(&self, other: &Rect<S>) -> Self {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Self::new(
            x,
            y,
            self.right().max(other.right()) - x,
            self.bottom().max(other.bottom()) - y,
        )
    }

    pub fn translate(&self, delta: Delta<S>) -> Self {
        Self::new(self.x + delta.dx, self.y + delta.dy, self.width, self.height)
    }

    pub fn with_origin(&self, x: f64, y: f64) -> Self {
        Self::new(x, y, self.width, self.height)
    }

    pub fn with_size(&self, width: f64, height: f64) -> Self {
        Self::new(self.x, self.y, width, height)
    }

    /// Grow width/height up to `min` where they fall below it. Origin is kept.
    pub fn clamp_min_size(&self, min: f64) -> Self {
        self.with_size(self.width.max(min), self.height.max(min))
    }
}

impl ZoneRect {
    /// Convert to floor-absolute coordinates given the owning zone's origin.
    pub fn to_floor(&self, zone_origin: FloorPoint) -> FloorRect {
        FloorRect::new(
            zone_origin.x + self.x,
            zone_origin.y + self.y,
            self.width,
            self.height,
        )
    }
}

impl<S> fmt::Display for Rect<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}×{})",
            self.x, self.y, self.width, self.height
        )
    }
}
