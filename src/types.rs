//! Fundamental data types used throughout brainfudge

use std::{
    fmt::{Debug, Display},
    ops::{Add, AddAssign, Sub, SubAssign},
    str::FromStr,
};
use thiserror::Error;

/// Newtype for the memory pointer.
///
/// The pointer is 16 bits wide and the tape always has one cell per
/// representable pointer value, so a wrapped pointer can never address a
/// slot outside the tape.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct TapeAddr(pub u16);

impl TapeAddr {
    /// Highest address the pointer can hold.
    pub const MAX: TapeAddr = TapeAddr(u16::MAX);

    pub fn new(val: u16) -> Self {
        Self(val)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl From<u16> for TapeAddr {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl From<TapeAddr> for u16 {
    fn from(value: TapeAddr) -> Self {
        value.0
    }
}

impl From<TapeAddr> for usize {
    fn from(value: TapeAddr) -> Self {
        value.0 as usize
    }
}

impl Add for TapeAddr {
    type Output = TapeAddr;

    fn add(self, rhs: Self) -> Self::Output {
        TapeAddr(self.0.wrapping_add(rhs.0))
    }
}

impl AddAssign for TapeAddr {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.wrapping_add(rhs.0);
    }
}

impl Sub for TapeAddr {
    type Output = TapeAddr;

    fn sub(self, rhs: Self) -> Self::Output {
        TapeAddr(self.0.wrapping_sub(rhs.0))
    }
}

impl SubAssign for TapeAddr {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 = self.0.wrapping_sub(rhs.0);
    }
}

impl Display for TapeAddr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Integer widths a cell could be asked to have.
///
/// All fixed width integers are named so that a request for a signed cell can
/// be parsed and then refused with a proper error, rather than failing as an
/// unknown name.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum CellWidth {
    #[default]
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
}

impl CellWidth {
    /// Number of bits in a cell of this width.
    pub fn bits(&self) -> u32 {
        match self {
            CellWidth::U8 | CellWidth::I8 => 8,
            CellWidth::U16 | CellWidth::I16 => 16,
            CellWidth::U32 | CellWidth::I32 => 32,
            CellWidth::U64 | CellWidth::I64 => 64,
        }
    }

    pub fn is_signed(&self) -> bool {
        matches!(
            self,
            CellWidth::I8 | CellWidth::I16 | CellWidth::I32 | CellWidth::I64
        )
    }
}

impl Display for CellWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let sign = if self.is_signed() { 'i' } else { 'u' };
        write!(f, "{}{}", sign, self.bits())
    }
}

/// Error when parsing a [`CellWidth`] from a string.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown cell width '{0}' (expected one of u8, u16, u32, u64)")]
pub struct ParseCellWidthError(String);

impl FromStr for CellWidth {
    type Err = ParseCellWidthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "u8" => Ok(CellWidth::U8),
            "u16" => Ok(CellWidth::U16),
            "u32" => Ok(CellWidth::U32),
            "u64" => Ok(CellWidth::U64),
            "i8" => Ok(CellWidth::I8),
            "i16" => Ok(CellWidth::I16),
            "i32" => Ok(CellWidth::I32),
            "i64" => Ok(CellWidth::I64),
            _ => Err(ParseCellWidthError(s.to_owned())),
        }
    }
}

/// Construction of an engine with a width that has no cell implementation.
#[derive(Debug, Clone, Copy, Error, Hash, PartialEq, Eq)]
#[error("Unsupported cell width {0}: cells must be unsigned (u8, u16, u32 or u64)")]
pub struct UnsupportedCellWidth(pub CellWidth);

mod sealed {
    pub trait Sealed {}
}

/// A tape cell: an unsigned integer with wrapping semantics.
///
/// Sealed, only the four unsigned fixed width integers implement it.
pub trait Cell:
    Copy + Debug + Default + Display + Eq + Send + Sync + sealed::Sealed + 'static
{
    /// Width tag matching this type.
    const WIDTH: CellWidth;
    /// Largest value a cell can hold.
    const MAX: Self;

    /// Add one, wrapping at the maximum.
    fn increment(self) -> Self;
    /// Subtract one, wrapping at zero.
    fn decrement(self) -> Self;
    fn is_zero(self) -> bool;
    /// Widen a byte read from an input stream.
    fn from_byte(byte: u8) -> Self;
    /// Truncate to the byte written to an output stream.
    fn low_byte(self) -> u8;
}

macro_rules! impl_cell {
    ($($ty:ty => $width:ident),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Cell for $ty {
                const WIDTH: CellWidth = CellWidth::$width;
                const MAX: Self = <$ty>::MAX;

                #[inline]
                fn increment(self) -> Self {
                    self.wrapping_add(1)
                }

                #[inline]
                fn decrement(self) -> Self {
                    self.wrapping_sub(1)
                }

                #[inline]
                fn is_zero(self) -> bool {
                    self == 0
                }

                #[inline]
                fn from_byte(byte: u8) -> Self {
                    byte as $ty
                }

                #[inline]
                fn low_byte(self) -> u8 {
                    self as u8
                }
            }
        )*
    };
}

impl_cell!(u8 => U8, u16 => U16, u32 => U32, u64 => U64);
