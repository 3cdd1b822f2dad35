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

//! # Flag-Bits Conversion
//!
//! Translates bitmask values between two types of the same category, bit
//! group by bit group. The input is treated as a union of the source bits
//! declared in the category's mapping table: every entry whose source slot
//! shares at least one bit with the input contributes its destination
//! slot's bits, and all contributions are OR-ed together. Entries fire
//! independently; a pre-combined source enumerant can satisfy several
//! entries at once.
//!
//! Bits of the input that no entry claims are dropped silently. Use the
//! checked variant to observe them instead.

use crate::category::InCategory;
use crate::mapping::{EntrySlot, MappingTable};
use gangway_core::bits::EnumBits;
use num_traits::Zero;

/// Converts a bitmask enum value from one type to another within the same
/// category.
///
/// Source and destination must belong to the same category, exactly as
/// with [`enum_cast`](crate::cast::enum_cast). Each mapping entry is
/// tested against the input with a bitwise AND on the source's underlying
/// representation; matching entries OR their destination bits into an
/// accumulator that starts at zero. The accumulated pattern is then
/// re-wrapped as the destination type, so destinations must either name
/// their reachable unions as enumerants or use a
/// [`RawBits`](gangway_core::raw::RawBits) carrier.
///
/// Unmapped input bits contribute nothing and are not reported.
///
/// # Examples
///
/// ```rust
/// use gangway_cast::enum_category;
/// use gangway_cast::flags::enum_flag_bits_cast;
/// use gangway_core::bits::EnumBits;
/// use gangway_core::enum_bits;
///
/// enum_bits! {
///     pub enum Permission: u32 {
///         None = 0x00,
///         Read = 0x01,
///         Write = 0x02,
///         Execute = 0x04,
///         ReadWrite = 0x03,
///         ReadExecute = 0x05,
///         WriteExecute = 0x06,
///         All = 0x07,
///     }
/// }
///
/// enum_bits! {
///     pub enum Access: u32 {
///         Nothing = 0,
///         Reading = 1 << 4,
///         Writing = 1 << 5,
///         ReadingWriting = 0b11 << 4,
///     }
/// }
///
/// enum_category! {
///     pub struct PermissionTag("Permission") {
///         entry = (Permission, Access);
///         members = { 0 => Permission, 1 => Access };
///         entries = [
///             (Permission::None, Access::Nothing),
///             (Permission::Read, Access::Reading),
///             (Permission::Write, Access::Writing),
///         ];
///     }
/// }
///
/// let combined = Access::Reading.union(Access::Writing);
/// assert_eq!(
///     enum_flag_bits_cast::<Permission, Access>(combined),
///     Permission::ReadWrite
/// );
/// ```
#[inline]
pub fn enum_flag_bits_cast<Dst, Src>(src: Src) -> Dst
where
    Src: InCategory,
    Dst: InCategory<Category = Src::Category>,
    Src::Category: MappingTable,
    Src: EntrySlot<<Src::Category as MappingTable>::Entry>,
    Dst: EntrySlot<<Src::Category as MappingTable>::Entry>,
{
    // The accumulator must start at zero; entries only ever OR bits in.
    let mut acc = <Dst as EnumBits>::Bits::zero();
    for entry in <Src::Category as MappingTable>::ENTRIES {
        if Src::of(entry).intersects(src) {
            acc = acc | Dst::of(entry).to_bits();
        }
    }
    Dst::from_bits(acc)
}

/// Converts a bitmask enum value within its category, returning `None`
/// when any set input bit is claimed by no mapping entry.
///
/// Identical accumulation to [`enum_flag_bits_cast`]; the only difference
/// is that leftover input bits make the conversion observable as a miss
/// instead of being dropped.
///
/// # Examples
///
/// ```rust
/// use gangway_cast::enum_category;
/// use gangway_cast::flags::checked_enum_flag_bits_cast;
/// use gangway_core::raw::{RawBits, RawBitsTag};
/// use gangway_core::enum_bits;
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
/// #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
/// pub struct AccessTag;
/// impl RawBitsTag for AccessTag { const NAME: &'static str = "Access"; }
/// pub type Access = RawBits<AccessTag, u32>;
/// pub const READ: Access = Access::new(1 << 2);
/// pub const WRITE: Access = Access::new(1 << 3);
///
/// enum_category! {
///     pub struct PermissionTag("Permission") {
///         entry = (Permission, Access);
///         members = { 0 => Permission, 1 => Access };
///         entries = [
///             (Permission::Read, READ),
///             (Permission::Write, WRITE),
///         ];
///     }
/// }
///
/// assert_eq!(
///     checked_enum_flag_bits_cast::<Permission, Access>(READ | WRITE),
///     Some(Permission::ReadWrite)
/// );
/// // Bit 7 is claimed by no entry.
/// assert_eq!(
///     checked_enum_flag_bits_cast::<Permission, Access>(READ | Access::new(1 << 7)),
///     None
/// );
/// ```
#[inline]
pub fn checked_enum_flag_bits_cast<Dst, Src>(src: Src) -> Option<Dst>
where
    Src: InCategory,
    Dst: InCategory<Category = Src::Category>,
    Src::Category: MappingTable,
    Src: EntrySlot<<Src::Category as MappingTable>::Entry>,
    Dst: EntrySlot<<Src::Category as MappingTable>::Entry>,
{
    let probe = src.to_bits();
    let mut acc = <Dst as EnumBits>::Bits::zero();
    let mut covered = <Src as EnumBits>::Bits::zero();
    for entry in <Src::Category as MappingTable>::ENTRIES {
        let slot = Src::of(entry).to_bits();
        if !(slot & probe).is_zero() {
            covered = covered | slot;
            acc = acc | Dst::of(entry).to_bits();
        }
    }
    if !(probe & !covered).is_zero() {
        return None;
    }
    Some(Dst::from_bits(acc))
}
