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

//! # Mapping Registry
//!
//! Per category, an ordered table of equivalent-value entries. Each entry
//! is a tuple with one slot per participating type, all slots denoting the
//! same logical value; the entry order is declaration order and is the
//! scan order of every conversion.
//!
//! The shape requirements on a table provider are expressed entirely as
//! associated items: a provider must name its entry type and expose a
//! `'static` ordered sequence of entries. A type that cannot do both does
//! not implement [`MappingTable`] and is rejected when a converter is
//! instantiated, before any conversion can run. Role-in-entry resolution
//! (which tuple slot belongs to which member type) is the
//! [`EntrySlot`] trait, implemented positionally per member.
//!
//! Tables are declared once per category, covering all member types in one
//! place. That single table serves every ordered pair of members, so N
//! interchangeable types need one declaration, not N·(N-1) pair tables.

use crate::category::CategoryTag;

/// The mapping table provider for a category.
///
/// Implemented on the category tag itself, once per category, normally by
/// [`enum_category!`](crate::enum_category). `ENTRIES` is ordered,
/// immutable, and lives for the whole program; conversions scan it front
/// to back.
pub trait MappingTable: CategoryTag {
    /// One row of equivalents: a tuple with one slot per member type.
    type Entry: Copy + 'static;

    /// The ordered mapping entries of this category.
    const ENTRIES: &'static [Self::Entry];
}

/// A member type's role within a category's mapping entries: how to
/// extract its own slot from an entry.
///
/// Resolved at definition time by the category declaration; converters use
/// it to read the source and destination slots of each entry without
/// knowing the entry's full shape.
pub trait EntrySlot<Entry>: Sized {
    /// Extracts this type's slot from the given entry.
    fn of(entry: &Entry) -> Self;
}
