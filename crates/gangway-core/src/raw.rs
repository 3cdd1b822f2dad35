// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Raw Bit Carriers (Zero-Cost)
//!
//! Phantom-tagged wrappers around a primitive integer for bitmask families
//! whose value set is open. `RawBits<T, B>` carries a tag type
//! `T: RawBitsTag` that encodes which family the bits belong to, while
//! compiling down to a transparent `B` (no runtime overhead).
//!
//! ## Motivation
//!
//! A closed Rust enum can only hold its declared members. Bitmask-style
//! families routinely produce values outside that set: the union of two
//! single-bit members usually has no name of its own. Libraries that model
//! flags this way need a carrier that accepts every bit pattern, and the
//! phantom tag keeps carriers of different families from being mixed.
//!
//! ## Highlights
//!
//! - `RawBitsTag` defines a human-readable `NAME` used for `Display`/`Debug`.
//! - `RawBits<T, B>` offers `new`, `get`, and `is_empty`.
//! - Bit operators and assignment variants (`|`, `&`, `^`) are implemented
//!   for convenience.
//! - Implements [`EnumBits`] with a trivially total `from_bits`, so raw
//!   carriers plug straight into the conversion machinery.
//! - Zero-cost: `#[repr(transparent)]` over `B`.
//!
//! ## Usage
//!
//! ```rust
//! use gangway_core::raw::{RawBits, RawBitsTag};
//!
//! #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
//! struct AccessTag;
//! impl RawBitsTag for AccessTag { const NAME: &'static str = "Access"; }
//!
//! type Access = RawBits<AccessTag, u32>;
//! const READ: Access = Access::new(0b01);
//! const WRITE: Access = Access::new(0b10);
//!
//! let rw = READ | WRITE;
//! assert_eq!(rw.get(), 0b11);
//! assert_eq!(format!("{}", rw), "Access(3)");
//! ```

use crate::bits::EnumBits;
use num_traits::PrimInt;

/// A trait to tag raw bit carriers with a name for debugging and display
/// purposes.
///
/// # Examples
///
/// ```rust
/// # use gangway_core::raw::RawBitsTag;
///
/// #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
/// struct MyTag;
///
/// impl RawBitsTag for MyTag {
///     const NAME: &'static str = "MyFlags";
/// }
/// ```
pub trait RawBitsTag: Clone {
    const NAME: &'static str;
}

/// A strongly typed bit carrier associated with a specific tag type `T`.
///
/// This struct wraps a primitive integer `B` and uses a phantom type
/// parameter `T` to keep bit patterns of different flag families apart.
/// Unlike a fieldless enum, it accepts every bit pattern of `B`, which
/// makes it the right representation for bitmask families without named
/// union members.
///
/// # Examples
///
/// ```rust
/// # use gangway_core::raw::{RawBits, RawBitsTag};
///
/// #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
/// struct MyTag;
///
/// impl RawBitsTag for MyTag {
///     const NAME: &'static str = "MyFlags";
/// }
///
/// type MyFlags = RawBits<MyTag, u8>;
///
/// let flags = MyFlags::new(0b101);
/// assert_eq!(flags.get(), 0b101);
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RawBits<T, B> {
    bits: B,
    _marker: std::marker::PhantomData<T>,
}

impl<T, B: PrimInt> RawBits<T, B> {
    /// Creates a new `RawBits` carrying the given bit pattern.
    #[inline(always)]
    pub const fn new(bits: B) -> Self {
        Self {
            bits,
            _marker: std::marker::PhantomData,
        }
    }

    /// Returns the underlying bit pattern.
    #[inline(always)]
    pub const fn get(&self) -> B {
        self.bits
    }

    /// Checks if no bit is set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gangway_core::raw::{RawBits, RawBitsTag};
    ///
    /// #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
    /// struct MyTag;
    ///
    /// impl RawBitsTag for MyTag {
    ///     const NAME: &'static str = "MyFlags";
    /// }
    ///
    /// type MyFlags = RawBits<MyTag, u8>;
    ///
    /// assert!(MyFlags::new(0).is_empty());
    /// assert!(!MyFlags::new(0b10).is_empty());
    /// ```
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }
}

impl<T, B> std::fmt::Debug for RawBits<T, B>
where
    T: RawBitsTag,
    B: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.bits)
    }
}

impl<T, B> std::fmt::Display for RawBits<T, B>
where
    T: RawBitsTag,
    B: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.bits)
    }
}

impl<T, B: PrimInt> From<B> for RawBits<T, B> {
    fn from(bits: B) -> Self {
        Self::new(bits)
    }
}

macro_rules! impl_raw_bits_op {
    ($trait_name:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl<T, B: PrimInt> std::ops::$trait_name for RawBits<T, B> {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                Self::new(self.bits $op rhs.bits)
            }
        }
        impl<T, B: PrimInt> std::ops::$assign_trait for RawBits<T, B> {
            fn $assign_method(&mut self, rhs: Self) {
                self.bits = self.bits $op rhs.bits;
            }
        }
    };
}

impl_raw_bits_op!(BitOr, bitor, BitOrAssign, bitor_assign, |);
impl_raw_bits_op!(BitAnd, bitand, BitAndAssign, bitand_assign, &);
impl_raw_bits_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, ^);

impl<T, B> EnumBits for RawBits<T, B>
where
    T: RawBitsTag + Copy + Eq + 'static,
    B: PrimInt + 'static,
{
    type Bits = B;

    #[inline(always)]
    fn to_bits(self) -> B {
        self.bits
    }

    #[inline(always)]
    fn from_bits(bits: B) -> Self {
        Self::new(bits)
    }
}
