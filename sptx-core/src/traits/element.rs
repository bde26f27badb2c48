//! Matrix element type constraints for the SPTX format
//!
//! The text format carries signed integers and all arithmetic is exact, so
//! elements are the signed integer types: closed under negation, no
//! rounding concerns.

use core::fmt::Display;
use core::ops::{Add, Mul, Neg, Sub};
use core::str::FromStr;

/// Trait for types that can be stored as matrix elements
///
/// An element type must be cheaply copyable, comparable against its own
/// zero, parseable from and printable to the text format, and closed under
/// the ring operations used by matrix arithmetic.
pub trait MatrixElement:
    Copy
    + PartialEq
    + FromStr
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// Additive identity; by the sparsity invariant this value is never stored
    const ZERO: Self;

    /// Whether this value is the additive identity
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

impl MatrixElement for i32 {
    const ZERO: Self = 0;
}

impl MatrixElement for i64 {
    const ZERO: Self = 0;
}

impl MatrixElement for i128 {
    const ZERO: Self = 0;
}
