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

//! # Category Registry
//!
//! Associates every participating enumerated type with a category tag: a
//! zero-sized marker type identifying the conceptual family the type
//! belongs to (all the `Color` enums, all the `Permission` enums, and so
//! on). Conversion is only defined between types of the same category, and
//! the association is established once at definition time.
//!
//! The association is a trait implementation, so there is nothing to look
//! up at runtime and nothing that can be absent at runtime: using a type
//! without a declared category simply does not satisfy the converter's
//! bounds and is rejected by the compiler.

use gangway_core::bits::EnumBits;

/// A marker type identifying a family of interchangeable enumerated types.
///
/// Category tags carry no data. `NAME` is a human-readable family name
/// used for diagnostics.
///
/// Tags are normally generated by
/// [`enum_category!`](crate::enum_category), but can be declared by hand:
///
/// # Examples
///
/// ```rust
/// # use gangway_cast::category::CategoryTag;
///
/// #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
/// struct ColorTag;
///
/// impl CategoryTag for ColorTag {
///     const NAME: &'static str = "Color";
/// }
/// ```
pub trait CategoryTag: 'static {
    const NAME: &'static str;
}

/// The category association for a participating enumerated type.
///
/// Exactly one category per type, declared by the code author at
/// definition time. Converters require source and destination to resolve
/// to the same `Category`; anything else fails to compile.
pub trait InCategory: EnumBits {
    /// The category tag this type belongs to.
    type Category: CategoryTag;
}

/// Returns the family name of the category `E` belongs to.
///
/// # Examples
///
/// ```rust
/// use gangway_cast::category::category_name;
/// use gangway_cast::enum_category;
/// use gangway_core::enum_bits;
///
/// enum_bits! {
///     pub enum Level: u8 {
///         Low = 0,
///         High = 1,
///     }
/// }
///
/// enum_bits! {
///     pub enum Intensity: u8 {
///         Weak = 0,
///         Strong = 1,
///     }
/// }
///
/// enum_category! {
///     pub struct LevelTag("Level") {
///         entry = (Level, Intensity);
///         members = { 0 => Level, 1 => Intensity };
///         entries = [
///             (Level::Low, Intensity::Weak),
///             (Level::High, Intensity::Strong),
///         ];
///     }
/// }
///
/// assert_eq!(category_name::<Level>(), "Level");
/// assert_eq!(category_name::<Intensity>(), "Level");
/// ```
#[inline]
pub fn category_name<E: InCategory>() -> &'static str {
    E::Category::NAME
}
