//! Point-like coordinates accepted by the sugar methods

/// A 2D point in user space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Anything that exposes an `x` and a `y` coordinate
///
/// Implement this for your own geometry types to pass them by reference to
/// [`crate::PathBuilder::to`], [`crate::PathBuilder::line`] and friends.
///
/// ```rust
/// use svg_path_builder::{path, PointLike};
///
/// struct Vertex { px: f32, py: f32 }
///
/// impl PointLike for Vertex {
///     fn x(&self) -> f64 { self.px as f64 }
///     fn y(&self) -> f64 { self.py as f64 }
/// }
///
/// let v = Vertex { px: 3.0, py: 4.0 };
/// assert_eq!(path().to(&v).render(), "M 3 4");
/// ```
pub trait PointLike {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

impl PointLike for Point {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl<P: PointLike + ?Sized> From<&P> for Point {
    fn from(p: &P) -> Self {
        Point::new(p.x(), p.y())
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Point::new(x, y)
    }
}
