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

//! # Enum Value Capability
//!
//! The [`EnumBits`] trait is the single capability the conversion machinery
//! requires of a participating type: a primitive integer representation
//! (`Bits`), a way to read it, and a way to rebuild a value from it. On top
//! of those two methods the trait provides the bitwise helpers that flag
//! translation needs, so that enumerated types whose host library never
//! implemented bitwise operators can still be combined and tested.
//!
//! ## Motivation
//!
//! Enum definitions from different libraries are incompatible types even
//! when they describe the same concept. Conversion code must therefore be
//! written against a capability, not against any concrete enum. `EnumBits`
//! is that capability; the [`enum_bits!`] macro implements it mechanically
//! for fieldless enums with explicit discriminants.
//!
//! ## Highlights
//!
//! - `Bits` is bounded by `num_traits::PrimInt`, so every underlying
//!   representation supports the full complement of bitwise operations.
//! - `zero_value` returns the value whose representation is all-zero bits,
//!   which conversion lookups use as their miss fallback.
//! - `union` and `intersects` perform OR/AND on the underlying
//!   representation and re-wrap, which makes pre-combined enumerants (such
//!   as a `ReadWrite` member) behave correctly under bit tests.

use num_traits::{PrimInt, Zero};

/// The capability required of every type that participates in enum
/// conversion.
///
/// Implementors expose their underlying primitive integer representation
/// and can be rebuilt from one. For fieldless enums with explicit
/// discriminants, prefer the [`enum_bits!`] macro over a manual
/// implementation.
///
/// # Contract
///
/// `from_bits` must be total. At minimum it must accept
/// `Self::Bits::zero()`, yielding the type's zero-valued member where one
/// exists (or its documented fallback member otherwise). Types used with
/// flag-bits conversion must additionally accept every union of bit
/// patterns that appears in their mapping entries; closed enums satisfy
/// this by declaring the combined members, open flag sets by using a
/// [`RawBits`](crate::raw::RawBits) carrier instead.
///
/// # Examples
///
/// ```rust
/// use gangway_core::bits::EnumBits;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// enum Mode {
///     Off = 0,
///     On = 1,
/// }
///
/// impl EnumBits for Mode {
///     type Bits = u8;
///
///     fn to_bits(self) -> u8 {
///         self as u8
///     }
///
///     fn from_bits(bits: u8) -> Self {
///         match bits {
///             1 => Mode::On,
///             _ => Mode::Off,
///         }
///     }
/// }
///
/// assert_eq!(Mode::On.to_bits(), 1);
/// assert_eq!(Mode::zero_value(), Mode::Off);
/// ```
pub trait EnumBits: Copy + Eq + 'static {
    /// The underlying primitive integer representation.
    type Bits: PrimInt;

    /// Returns the underlying representation of this value.
    fn to_bits(self) -> Self::Bits;

    /// Rebuilds a value from its underlying representation.
    ///
    /// See the trait-level contract for the totality requirements.
    fn from_bits(bits: Self::Bits) -> Self;

    /// Returns the value whose underlying representation is zero.
    ///
    /// For types with a zero-valued member this is that member; conversion
    /// lookups return it when no mapping entry matches.
    #[inline]
    fn zero_value() -> Self {
        Self::from_bits(Self::Bits::zero())
    }

    /// Combines two values by OR-ing their underlying representations and
    /// re-wrapping the result.
    ///
    /// This is the bitwise-OR operator for enumerated types whose host
    /// library does not provide one natively.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gangway_core::enum_bits;
    /// use gangway_core::bits::EnumBits;
    ///
    /// enum_bits! {
    ///     pub enum Permission: u32 {
    ///         None = 0x00,
    ///         Read = 0x01,
    ///         Write = 0x02,
    ///         ReadWrite = 0x03,
    ///     }
    /// }
    ///
    /// assert_eq!(Permission::Read.union(Permission::Write), Permission::ReadWrite);
    /// ```
    #[inline]
    fn union(self, other: Self) -> Self {
        Self::from_bits(self.to_bits() | other.to_bits())
    }

    /// Returns `true` if the two values share at least one set bit in
    /// their underlying representations.
    #[inline]
    fn intersects(self, other: Self) -> bool {
        !(self.to_bits() & other.to_bits()).is_zero()
    }
}

/// Declares a fieldless enum with explicit discriminants together with its
/// [`EnumBits`] implementation.
///
/// The generated enum is `#[repr(Bits)]` and derives `Clone`, `Copy`,
/// `PartialEq`, `Eq`, `Hash`, and `Debug`. The generated `from_bits`
/// matches every declared discriminant and falls back to the **first
/// listed variant** for any other bit pattern, so list the zero-valued
/// member first where one exists.
///
/// # Examples
///
/// ```rust
/// use gangway_core::enum_bits;
/// use gangway_core::bits::EnumBits;
///
/// enum_bits! {
///     /// Traffic light phases as used by the signalling library.
///     pub enum Phase: u8 {
///         Red = 0,
///         Amber = 1,
///         Green = 2,
///     }
/// }
///
/// assert_eq!(Phase::Green.to_bits(), 2);
/// assert_eq!(Phase::from_bits(1), Phase::Amber);
/// assert_eq!(Phase::from_bits(200), Phase::Red);
/// ```
#[macro_export]
macro_rules! enum_bits {
    (
        $(#[$attr:meta])*
        $vis:vis enum $name:ident : $bits:ty {
            $(#[$first_attr:meta])*
            $first:ident = $first_value:expr
            $(, $(#[$variant_attr:meta])* $variant:ident = $value:expr)* $(,)?
        }
    ) => {
        $(#[$attr])*
        #[repr($bits)]
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(#[$first_attr])*
            $first = $first_value,
            $($(#[$variant_attr])* $variant = $value,)*
        }

        impl $crate::bits::EnumBits for $name {
            type Bits = $bits;

            #[inline(always)]
            fn to_bits(self) -> $bits {
                self as $bits
            }

            #[inline]
            fn from_bits(bits: $bits) -> Self {
                match bits {
                    b if b == $first_value => Self::$first,
                    $(b if b == $value => Self::$variant,)*
                    _ => Self::$first,
                }
            }
        }
    };
}
