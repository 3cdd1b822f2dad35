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

//! # Category Declarator
//!
//! The [`enum_category!`] macro declares a complete category in one block:
//! the tag type, the category association for every member, each member's
//! role within a mapping entry, and the ordered mapping table itself.

/// Declares a category: its tag type, member associations, entry roles,
/// and mapping table.
///
/// One declaration per category covers all member types simultaneously,
/// which is what makes every ordered pair of members convertible through a
/// single table. The block has three parts:
///
/// - `entry`: the entry tuple type, one slot per member, consistently
///   ordered across all entries.
/// - `members`: the member types with their tuple positions.
/// - `entries`: the ordered mapping table; declaration order is the scan
///   order of every conversion.
///
/// # Examples
///
/// ```rust
/// use gangway_cast::cast::enum_cast;
/// use gangway_cast::enum_category;
/// use gangway_core::enum_bits;
///
/// enum_bits! {
///     pub enum Shape: i32 { Circle = 1, Square = 9, Triangle = 16 }
/// }
/// enum_bits! {
///     pub enum Figure: i32 { Circle = 0, Square = 1, Triangle = 2 }
/// }
/// enum_bits! {
///     pub enum Outline: i32 { Circle = 2, Square = 3, Triangle = 4 }
/// }
///
/// enum_category! {
///     /// Shapes shared by the three drawing libraries.
///     pub struct ShapeTag("Shape") {
///         entry = (Shape, Figure, Outline);
///         members = { 0 => Shape, 1 => Figure, 2 => Outline };
///         entries = [
///             (Shape::Circle, Figure::Circle, Outline::Circle),
///             (Shape::Square, Figure::Square, Outline::Square),
///             (Shape::Triangle, Figure::Triangle, Outline::Triangle),
///         ];
///     }
/// }
///
/// assert_eq!(enum_cast::<Shape, Figure>(Figure::Circle), Shape::Circle);
/// assert_eq!(enum_cast::<Outline, Shape>(Shape::Square), Outline::Square);
/// ```
#[macro_export]
macro_rules! enum_category {
    (
        $(#[$attr:meta])*
        $vis:vis struct $tag:ident($name:literal) {
            entry = $entry:ty;
            members = { $($idx:tt => $member:ty),+ $(,)? };
            entries = [ $($row:expr),* $(,)? ];
        }
    ) => {
        $(#[$attr])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
        $vis struct $tag;

        impl $crate::category::CategoryTag for $tag {
            const NAME: &'static str = $name;
        }

        $(
            impl $crate::category::InCategory for $member {
                type Category = $tag;
            }

            impl $crate::mapping::EntrySlot<$entry> for $member {
                #[inline(always)]
                fn of(entry: &$entry) -> Self {
                    entry.$idx
                }
            }
        )+

        impl $crate::mapping::MappingTable for $tag {
            type Entry = $entry;
            const ENTRIES: &'static [$entry] = &[ $($row),* ];
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::category::CategoryTag;
    use crate::category::InCategory;
    use crate::mapping::MappingTable;
    use gangway_core::enum_bits;

    enum_bits! {
        pub enum Side: u8 { Port = 0, Starboard = 1 }
    }

    enum_bits! {
        pub enum Board: u8 { Left = 0, Right = 1 }
    }

    crate::enum_category! {
        pub struct SideTag("Side") {
            entry = (Side, Board);
            members = { 0 => Side, 1 => Board };
            entries = [
                (Side::Port, Board::Left),
                (Side::Starboard, Board::Right),
            ];
        }
    }

    // Compile-time check that both members resolve to the declared tag.
    fn same_category<A, B>()
    where
        A: InCategory,
        B: InCategory<Category = A::Category>,
    {
    }

    #[test]
    fn test_generated_tag_and_table() {
        assert_eq!(<SideTag as CategoryTag>::NAME, "Side");
        assert_eq!(<SideTag as MappingTable>::ENTRIES.len(), 2);
        same_category::<Side, Board>();
    }
}
