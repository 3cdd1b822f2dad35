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

//! Shared conversion families for the unit tests: three fictional client
//! libraries that each ship their own `Color` and `Shape` enums, plus a
//! pair of incompatible `Permission` bitmask types. Each library assigns
//! its own discriminants, so a conversion that leaks raw values through
//! instead of consulting the table is caught immediately.

/// First client library: offset scalar discriminants, bitmask permissions
/// with every pre-combined member named.
pub mod lib_a {
    gangway_core::enum_bits! {
        pub enum Color: i32 {
            Red = 3,
            Green = 4,
            Blue = 5,
        }
    }

    gangway_core::enum_bits! {
        pub enum Shape: i32 {
            Circle = 1,
            Square = 9,
            Triangle = 16,
        }
    }

    gangway_core::enum_bits! {
        pub enum Permission: u32 {
            None = 0x00,
            Read = 0x01,
            Write = 0x02,
            Execute = 0x04,
            ReadWrite = 0x03,
            ReadExecute = 0x05,
            WriteExecute = 0x06,
            All = 0x07,
        }
    }
}

/// Second client library: zero-based scalar discriminants (and an extra
/// `Yellow` no other library knows about), permissions as an open bit
/// carrier with shifted single-bit constants.
pub mod lib_b {
    use gangway_core::raw::{RawBits, RawBitsTag};

    gangway_core::enum_bits! {
        pub enum Color: i32 {
            Red = 0,
            Green = 1,
            Blue = 2,
            Yellow = 3,
        }
    }

    gangway_core::enum_bits! {
        pub enum Shape: i32 {
            Circle = 0,
            Square = 1,
            Triangle = 2,
        }
    }

    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
    pub struct PermissionBitsTag;

    impl RawBitsTag for PermissionBitsTag {
        const NAME: &'static str = "Permission";
    }

    /// This library never named its unions, so its permissions travel as
    /// raw bits.
    pub type Permission = RawBits<PermissionBitsTag, u32>;

    pub const NONE: Permission = Permission::new(0);
    pub const READ: Permission = Permission::new(1 << 2);
    pub const WRITE: Permission = Permission::new(1 << 3);
    pub const EXECUTE: Permission = Permission::new(1 << 4);
}

/// Third client library: large, widely spaced scalar discriminants.
pub mod lib_c {
    gangway_core::enum_bits! {
        pub enum Color: i32 {
            Red = 9,
            Green = 100,
            Blue = 101,
        }
    }

    gangway_core::enum_bits! {
        pub enum Shape: i32 {
            Circle = 2,
            Square = 3,
            Triangle = 4,
        }
    }
}

crate::enum_category! {
    /// The color family shared by all three libraries.
    pub struct ColorTag("Color") {
        entry = (lib_a::Color, lib_b::Color, lib_c::Color);
        members = { 0 => lib_a::Color, 1 => lib_b::Color, 2 => lib_c::Color };
        entries = [
            (lib_a::Color::Red, lib_b::Color::Red, lib_c::Color::Red),
            (lib_a::Color::Green, lib_b::Color::Green, lib_c::Color::Green),
            (lib_a::Color::Blue, lib_b::Color::Blue, lib_c::Color::Blue),
        ];
    }
}

crate::enum_category! {
    /// The shape family shared by all three libraries.
    pub struct ShapeTag("Shape") {
        entry = (lib_a::Shape, lib_b::Shape, lib_c::Shape);
        members = { 0 => lib_a::Shape, 1 => lib_b::Shape, 2 => lib_c::Shape };
        entries = [
            (lib_a::Shape::Circle, lib_b::Shape::Circle, lib_c::Shape::Circle),
            (lib_a::Shape::Square, lib_b::Shape::Square, lib_c::Shape::Square),
            (lib_a::Shape::Triangle, lib_b::Shape::Triangle, lib_c::Shape::Triangle),
        ];
    }
}

crate::enum_category! {
    /// The permission family; only the single-bit members are mapped.
    pub struct PermissionTag("Permission") {
        entry = (lib_a::Permission, lib_b::Permission);
        members = { 0 => lib_a::Permission, 1 => lib_b::Permission };
        entries = [
            (lib_a::Permission::None, lib_b::NONE),
            (lib_a::Permission::Read, lib_b::READ),
            (lib_a::Permission::Write, lib_b::WRITE),
            (lib_a::Permission::Execute, lib_b::EXECUTE),
        ];
    }
}

/// A deliberately ambiguous table: both entries claim the same source
/// value, so scan order decides.
pub mod dup {
    gangway_core::enum_bits! {
        pub enum Left: u8 {
            Same = 1,
        }
    }

    gangway_core::enum_bits! {
        pub enum Right: u8 {
            First = 10,
            Second = 20,
        }
    }

    crate::enum_category! {
        pub struct DupTag("Dup") {
            entry = (Left, Right);
            members = { 0 => Left, 1 => Right };
            entries = [
                (Left::Same, Right::First),
                (Left::Same, Right::Second),
            ];
        }
    }
}
