//! Point primitives: translate, rotate, scale, shear.
//!
//! All operations are total over `f64` and work in plotter units about the
//! origin. Trigonometry goes through [`num_traits::Float`] so the module builds
//! without `std` (libm backend).

use num_traits::Float;

/// A coordinate pair in plotter units.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// The origin.
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a point from its coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

/// Move `p` by `(dx, dy)`.
pub fn translate(dx: f64, dy: f64, p: Point) -> Point {
    Point::new(p.x + dx, p.y + dy)
}

/// Rotate `p` counter-clockwise by `degrees` about the origin.
///
/// There is no pivot argument; rotating about another point means composing
/// translate → rotate → translate.
pub fn rotate(degrees: f64, p: Point) -> Point {
    let (sin, cos) = Float::sin_cos(Float::to_radians(degrees));
    Point::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos)
}

/// Scale `p` by `sx` horizontally and `sy` vertically.
pub fn scale(sx: f64, sy: f64, p: Point) -> Point {
    Point::new(sx * p.x, sy * p.y)
}

/// Shear `p`.
///
/// The x output is coupled through `ky` and the y output through `kx`:
/// `(x + ky·y, kx·x + y)`. Existing plot files were produced with this
/// coupling, so it must not be "straightened out".
pub fn shear(kx: f64, ky: f64, p: Point) -> Point {
    Point::new(p.x + ky * p.y, kx * p.x + p.y)
}
