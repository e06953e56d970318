//! Multipoint color gradients with 8-bit integer interpolation.
//!
//! A gradient is an ordered table of up to eight control points, each a
//! (position, color) pair. Lookup linearly interpolates each channel
//! between the two bracketing points; queries outside the table clamp
//! to the endpoint colors. Tables are validated at construction, so
//! lookup itself is total.

use crate::color::{Rgb, rgb_from_u32};

/// Maximum number of control points a gradient can hold.
pub const MAX_GRADIENT_POINTS: usize = 8;

/// One gradient control point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientPoint {
    pub position: u8,
    pub color: Rgb,
}

impl GradientPoint {
    pub const fn new(position: u8, color: u32) -> Self {
        Self {
            position,
            color: rgb_from_u32(color),
        }
    }
}

/// Rejected gradient table.
///
/// A malformed table is a programmer error, caught once at construction
/// time — lookup never validates per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientError {
    /// The table has no control points.
    Empty,
    /// The table exceeds [`MAX_GRADIENT_POINTS`].
    TooManyPoints,
    /// Positions are not strictly increasing by index.
    NonIncreasing,
}

/// An immutable multipoint gradient.
///
/// Built-in instances are `const`-constructed, so an invalid built-in
/// table fails at compile time rather than at runtime.
#[derive(Debug, Clone)]
pub struct Gradient {
    points: [GradientPoint; MAX_GRADIENT_POINTS],
    len: usize,
}

const ZERO_POINT: GradientPoint = GradientPoint::new(0, 0x000000);

impl Gradient {
    /// Create a gradient from a table of control points.
    ///
    /// Panics if the table is empty, oversized, or has non-increasing
    /// positions. In `const` context that is a compile-time failure;
    /// for tables built at runtime prefer [`Gradient::try_new`].
    pub const fn new(table: &[GradientPoint]) -> Self {
        assert!(!table.is_empty(), "gradient table is empty");
        assert!(
            table.len() <= MAX_GRADIENT_POINTS,
            "gradient table exceeds capacity"
        );

        let mut points = [ZERO_POINT; MAX_GRADIENT_POINTS];
        let mut i = 0;
        while i < table.len() {
            if i > 0 {
                assert!(
                    table[i - 1].position < table[i].position,
                    "gradient positions must be strictly increasing"
                );
            }
            points[i] = table[i];
            i += 1;
        }

        Self {
            points,
            len: table.len(),
        }
    }

    /// Fallible construction for tables assembled at runtime.
    pub fn try_new(table: &[GradientPoint]) -> Result<Self, GradientError> {
        if table.is_empty() {
            return Err(GradientError::Empty);
        }
        if table.len() > MAX_GRADIENT_POINTS {
            return Err(GradientError::TooManyPoints);
        }
        if table.windows(2).any(|w| w[0].position >= w[1].position) {
            return Err(GradientError::NonIncreasing);
        }

        Ok(Self::new(table))
    }

    /// Number of control points in the table.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Evaluate the gradient at an 8-bit position.
    ///
    /// Queries at or below the first point's position return the first
    /// color verbatim; at or above the last, the last color. In between,
    /// each channel is interpolated independently with integer math and
    /// truncating division. At most [`MAX_GRADIENT_POINTS`] comparisons.
    pub fn color_at(&self, position: u8) -> Rgb {
        let first = self.points[0];
        if position <= first.position {
            return first.color;
        }
        let last = self.points[self.len - 1];
        if position >= last.position {
            return last.color;
        }

        // Strictly increasing positions and position < last guarantee
        // a bracketing point exists.
        let mut i = 1;
        while self.points[i].position < position {
            i += 1;
        }

        let lower = self.points[i - 1];
        let upper = self.points[i];
        Rgb {
            r: lerp_channel(lower.color.r, upper.color.r, lower.position, upper.position, position),
            g: lerp_channel(lower.color.g, upper.color.g, lower.position, upper.position, position),
            b: lerp_channel(lower.color.b, upper.color.b, lower.position, upper.position, position),
        }
    }
}

/// `c0 + (c1 - c0) * (p - p0) / (p1 - p0)`, widened so intermediate
/// products cannot overflow, division truncating toward zero.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lerp_channel(c0: u8, c1: u8, p0: u8, p1: u8, p: u8) -> u8 {
    let delta = i32::from(c1) - i32::from(c0);
    let num = delta * (i32::from(p) - i32::from(p0));
    let den = i32::from(p1) - i32::from(p0);
    (i32::from(c0) + num / den) as u8
}

/// Black-body radiation gradient: black through red-orange and peach to
/// near-white. This is the palette the fire renderer runs on.
pub const BLACK_BODY: Gradient = Gradient::new(&[
    GradientPoint::new(0x00, 0x000000),
    GradientPoint::new(0x08, 0xFF3800),
    GradientPoint::new(0x3F, 0xFF932C),
    GradientPoint::new(0x7F, 0xFFC184),
    GradientPoint::new(0xFF, 0xFFEEE3),
]);

/// Seven-point rainbow gradient, selectable as an alternative palette.
pub const RAINBOW: Gradient = Gradient::new(&[
    GradientPoint::new(0x00, 0x000000),
    GradientPoint::new(0x2F, 0xFF7F00),
    GradientPoint::new(0x5F, 0xFFFF00),
    GradientPoint::new(0x8F, 0x00FF00),
    GradientPoint::new(0xBF, 0x0000FF),
    GradientPoint::new(0xDF, 0x4B0082),
    GradientPoint::new(0xFF, 0x9400FF),
]);
