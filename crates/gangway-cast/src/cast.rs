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

//! # Scalar Conversion
//!
//! Translates a single enumerant value between two types of the same
//! category by scanning the category's mapping table in declaration order.
//! The first entry whose source slot equals the input determines the
//! result; if no entry matches, the destination's zero value is returned
//! without signaling anything.

use crate::category::InCategory;
use crate::mapping::{EntrySlot, MappingTable};
use gangway_core::bits::EnumBits;

/// Converts an enum value from one type to another within the same
/// category.
///
/// Source and destination must belong to the same category; this is
/// enforced through the `Category = Src::Category` bound, so a
/// cross-category call is a compile error:
///
/// ```compile_fail
/// use gangway_cast::cast::enum_cast;
/// use gangway_cast::enum_category;
/// use gangway_core::enum_bits;
///
/// enum_bits! {
///     pub enum Color: u8 { Red = 0, Green = 1 }
/// }
/// enum_bits! {
///     pub enum Tint: u8 { Red = 0, Green = 1 }
/// }
/// enum_bits! {
///     pub enum Shape: u8 { Circle = 0, Square = 1 }
/// }
/// enum_bits! {
///     pub enum Outline: u8 { Circle = 0, Square = 1 }
/// }
///
/// enum_category! {
///     pub struct ColorTag("Color") {
///         entry = (Color, Tint);
///         members = { 0 => Color, 1 => Tint };
///         entries = [(Color::Red, Tint::Red), (Color::Green, Tint::Green)];
///     }
/// }
/// enum_category! {
///     pub struct ShapeTag("Shape") {
///         entry = (Shape, Outline);
///         members = { 0 => Shape, 1 => Outline };
///         entries = [(Shape::Circle, Outline::Circle), (Shape::Square, Outline::Square)];
///     }
/// }
///
/// // Color and Shape are different categories.
/// let _ = enum_cast::<Shape, Color>(Color::Red);
/// ```
///
/// # Miss policy
///
/// If no entry's source slot matches, the destination's zero value is
/// returned without signaling an error. A result equal to the
/// destination's zero-valued member is therefore ambiguous between an
/// explicit mapping to zero and a lookup miss; use [`checked_enum_cast`]
/// where that distinction matters. For destination types without a
/// zero-valued member the fallback is whatever their `from_bits` maps
/// zero to (see the `EnumBits` contract).
///
/// # Examples
///
/// ```rust
/// use gangway_cast::cast::enum_cast;
/// use gangway_cast::enum_category;
/// use gangway_core::enum_bits;
///
/// enum_bits! {
///     pub enum Color: i32 { Red = 3, Green = 4, Blue = 5 }
/// }
/// enum_bits! {
///     pub enum Paint: i32 { Red = 9, Green = 100, Blue = 101 }
/// }
///
/// enum_category! {
///     pub struct ColorTag("Color") {
///         entry = (Color, Paint);
///         members = { 0 => Color, 1 => Paint };
///         entries = [
///             (Color::Red, Paint::Red),
///             (Color::Green, Paint::Green),
///             (Color::Blue, Paint::Blue),
///         ];
///     }
/// }
///
/// assert_eq!(enum_cast::<Color, Paint>(Paint::Green), Color::Green);
/// assert_eq!(enum_cast::<Paint, Color>(Color::Red), Paint::Red);
/// ```
#[inline]
pub fn enum_cast<Dst, Src>(src: Src) -> Dst
where
    Src: InCategory,
    Dst: InCategory<Category = Src::Category>,
    Src::Category: MappingTable,
    Src: EntrySlot<<Src::Category as MappingTable>::Entry>,
    Dst: EntrySlot<<Src::Category as MappingTable>::Entry>,
{
    match checked_enum_cast::<Dst, Src>(src) {
        Some(dst) => dst,
        None => Dst::zero_value(),
    }
}

/// Converts an enum value within its category, returning `None` when no
/// mapping entry matches.
///
/// Identical to [`enum_cast`] except that a lookup miss is observable
/// instead of resolving to the destination's zero value.
///
/// # Examples
///
/// ```rust
/// use gangway_cast::cast::checked_enum_cast;
/// use gangway_cast::enum_category;
/// use gangway_core::enum_bits;
///
/// enum_bits! {
///     pub enum Color: i32 { Red = 0, Green = 1, Blue = 2, Yellow = 3 }
/// }
/// enum_bits! {
///     pub enum Paint: i32 { Red = 9, Green = 100, Blue = 101 }
/// }
///
/// enum_category! {
///     pub struct ColorTag("Color") {
///         entry = (Color, Paint);
///         members = { 0 => Color, 1 => Paint };
///         entries = [
///             (Color::Red, Paint::Red),
///             (Color::Green, Paint::Green),
///             (Color::Blue, Paint::Blue),
///         ];
///     }
/// }
///
/// assert_eq!(checked_enum_cast::<Paint, Color>(Color::Blue), Some(Paint::Blue));
/// // Yellow has no equivalent in Paint.
/// assert_eq!(checked_enum_cast::<Paint, Color>(Color::Yellow), None);
/// ```
#[inline]
pub fn checked_enum_cast<Dst, Src>(src: Src) -> Option<Dst>
where
    Src: InCategory,
    Dst: InCategory<Category = Src::Category>,
    Src::Category: MappingTable,
    Src: EntrySlot<<Src::Category as MappingTable>::Entry>,
    Dst: EntrySlot<<Src::Category as MappingTable>::Entry>,
{
    // Declaration order is the scan order: on duplicate source slots the
    // first declared entry wins.
    for entry in <Src::Category as MappingTable>::ENTRIES {
        if Src::of(entry) == src {
            return Some(Dst::of(entry));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::{checked_enum_cast, enum_cast};
    use crate::fixtures::{lib_a, lib_b, lib_c};

    #[test]
    fn test_color_across_libraries() {
        let a: lib_a::Color = enum_cast(lib_c::Color::Red);
        assert_eq!(a, lib_a::Color::Red);

        let b: lib_b::Color = enum_cast(a);
        assert_eq!(b, lib_b::Color::Red);

        let c: lib_c::Color = enum_cast(lib_a::Color::Green);
        assert_eq!(c, lib_c::Color::Green);
    }

    #[test]
    fn test_shape_across_libraries() {
        let a: lib_a::Shape = enum_cast(lib_b::Shape::Circle);
        assert_eq!(a, lib_a::Shape::Circle);

        let c: lib_c::Shape = enum_cast(lib_a::Shape::Triangle);
        assert_eq!(c, lib_c::Shape::Triangle);
    }

    #[test]
    fn test_round_trip_over_mapped_values() {
        let entries =
            <crate::fixtures::ColorTag as crate::mapping::MappingTable>::ENTRIES;
        for &(a, b, c) in entries {
            assert_eq!(enum_cast::<lib_a::Color, lib_b::Color>(b), a);
            assert_eq!(enum_cast::<lib_b::Color, lib_a::Color>(a), b);
            assert_eq!(enum_cast::<lib_c::Color, lib_b::Color>(b), c);

            let there: lib_c::Color = enum_cast(b);
            let back: lib_b::Color = enum_cast(there);
            assert_eq!(back, b);
        }
    }

    #[test]
    fn test_miss_returns_zero_member() {
        // A raw bit pattern matching no entry falls back to the
        // destination's zero-valued member.
        let raw = lib_b::Permission::new(42);
        let a: lib_a::Permission = enum_cast(raw);
        assert_eq!(a, lib_a::Permission::None);
    }

    #[test]
    fn test_miss_without_zero_member_uses_fallback() {
        // lib_a::Color has no zero-valued member (3, 4, 5); its declared
        // fallback is the first listed variant.
        let a: lib_a::Color = enum_cast(lib_b::Color::Yellow);
        assert_eq!(a, lib_a::Color::Red);
    }

    #[test]
    fn test_checked_hit_and_miss() {
        assert_eq!(
            checked_enum_cast::<lib_a::Color, lib_b::Color>(lib_b::Color::Blue),
            Some(lib_a::Color::Blue)
        );
        assert_eq!(
            checked_enum_cast::<lib_a::Color, lib_b::Color>(lib_b::Color::Yellow),
            None
        );
        assert_eq!(
            checked_enum_cast::<lib_c::Color, lib_b::Color>(lib_b::Color::Yellow),
            None
        );
    }

    #[test]
    fn test_duplicate_source_slots_first_wins() {
        use crate::fixtures::dup::{Left, Right};

        // Both entries carry Left::Same on the source side; the first
        // declared one decides.
        assert_eq!(enum_cast::<Right, Left>(Left::Same), Right::First);
    }

    #[test]
    fn test_zero_mapping_and_miss_are_ambiguous() {
        // An explicit mapping to the zero member and a miss produce the
        // same total result; only the checked variant tells them apart.
        let mapped: lib_a::Permission = enum_cast(lib_b::NONE);
        let missed: lib_a::Permission = enum_cast(lib_b::Permission::new(1 << 30));
        assert_eq!(mapped, lib_a::Permission::None);
        assert_eq!(missed, lib_a::Permission::None);

        assert_eq!(
            checked_enum_cast::<lib_a::Permission, _>(lib_b::NONE),
            Some(lib_a::Permission::None)
        );
        assert_eq!(
            checked_enum_cast::<lib_a::Permission, _>(lib_b::Permission::new(1 << 30)),
            None
        );
    }
}
