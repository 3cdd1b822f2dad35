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

//! Gangway-Cast: category-checked enum translation
//!
//! Translates enumerant values between enumerated types from different
//! libraries that describe the same concept, driven by statically declared
//! correspondence tables. Two conversion modes exist: scalar (one value to
//! one value) and flag-bits (each set bit translated independently).
//!
//! Core flow
//! - Give every participating type the `EnumBits` capability
//!   (`gangway_core`), directly or via the `enum_bits!` macro.
//! - Declare a category with `enum_category!`: one tag type, the member
//!   association for every participating type, and one ordered table of
//!   equivalent-value entries covering all members at once.
//! - Call `cast::enum_cast` or `flags::enum_flag_bits_cast` from anywhere.
//!
//! Design highlights
//! - Category agreement is a trait bound, so converting between types of
//!   different categories fails to compile, never at runtime.
//! - Tables are `'static` and immutable; every conversion is a pure linear
//!   scan, safe for unsynchronized concurrent use.
//! - Lookup misses resolve silently: scalar conversion falls back to the
//!   destination's zero value, flag conversion drops unmapped bits. The
//!   `checked_*` entry points return `Option` for callers that want
//!   strictness instead.
//!
//! Module map
//! - `category`: category tags and the per-type category association.
//! - `mapping`: the per-category mapping table and role-in-entry access.
//! - `cast`: scalar conversion (total and checked).
//! - `flags`: flag-bits conversion (total and checked).
//! - `macros`: the `enum_category!` declarator.

pub mod cast;
pub mod category;
pub mod flags;
pub mod macros;
pub mod mapping;

#[cfg(test)]
pub(crate) mod fixtures;
