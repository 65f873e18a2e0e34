use std::ops::{Add, Div, Mul, Sub};

use image::Rgba;

/// A pixel widened to four `i32` lanes (R, G, B, A) for lane-wise arithmetic.
///
/// Channel values are conceptually `0..=255`; the wider lanes exist so that
/// intermediate fixed-point products never overflow. Arithmetic that must
/// ignore the alpha channel multiplies by [`ChannelVec::RGB_MASK`] first,
/// which zeroes the alpha lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChannelVec([i32; 4]);

impl ChannelVec {
    /// All lanes one.
    pub const ONE: Self = Self([1, 1, 1, 1]);

    /// Color lanes one, alpha lane zero. Multiplying by this mask removes
    /// the alpha channel from a computation.
    pub const RGB_MASK: Self = Self([1, 1, 1, 0]);

    pub const fn new(red: i32, green: i32, blue: i32, alpha: i32) -> Self {
        Self([red, green, blue, alpha])
    }

    /// Widening read of one RGBA pixel slot out of a raw byte buffer.
    ///
    /// The slice must hold at least four bytes; the caller guarantees it
    /// points at a pixel boundary.
    pub fn from_slice(channels: &[u8]) -> Self {
        Self([
            i32::from(channels[0]),
            i32::from(channels[1]),
            i32::from(channels[2]),
            i32::from(channels[3]),
        ])
    }

    pub const fn red(self) -> i32 {
        self.0[0]
    }

    pub const fn green(self) -> i32 {
        self.0[1]
    }

    pub const fn blue(self) -> i32 {
        self.0[2]
    }

    pub const fn alpha(self) -> i32 {
        self.0[3]
    }

    pub const fn lanes(self) -> [i32; 4] {
        self.0
    }

    /// Lane-wise dot product.
    pub fn dot(self, other: Self) -> i32 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| a * b)
            .sum()
    }

    /// Copy of `self` with the alpha lane zeroed.
    pub fn mask_alpha(self) -> Self {
        self * Self::RGB_MASK
    }

    /// `true` if every lane of `self` is `<=` the corresponding lane of `other`.
    pub fn le_all(self, other: Self) -> bool {
        self.0.iter().zip(other.0.iter()).all(|(a, b)| a <= b)
    }

    /// `true` if any lane exceeds `limit`.
    pub fn any_gt(self, limit: i32) -> bool {
        self.0.iter().any(|&lane| lane > limit)
    }

    /// `true` if any lane is below `limit`.
    pub fn any_lt(self, limit: i32) -> bool {
        self.0.iter().any(|&lane| lane < limit)
    }
}

impl From<Rgba<u8>> for ChannelVec {
    fn from(Rgba([red, green, blue, alpha]): Rgba<u8>) -> Self {
        Self([
            i32::from(red),
            i32::from(green),
            i32::from(blue),
            i32::from(alpha),
        ])
    }
}

macro_rules! lanewise_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait for ChannelVec {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                Self([
                    self.0[0] $op rhs.0[0],
                    self.0[1] $op rhs.0[1],
                    self.0[2] $op rhs.0[2],
                    self.0[3] $op rhs.0[3],
                ])
            }
        }
    };
}

lanewise_op!(Add, add, +);
lanewise_op!(Sub, sub, -);
lanewise_op!(Mul, mul, *);
lanewise_op!(Div, div, /);

impl Mul<i32> for ChannelVec {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self {
        Self([
            self.0[0] * rhs,
            self.0[1] * rhs,
            self.0[2] * rhs,
            self.0[3] * rhs,
        ])
    }
}
