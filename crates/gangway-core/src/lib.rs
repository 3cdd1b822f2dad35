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

//! # Gangway Core
//!
//! Foundational capability traits for the Gangway enum translation
//! ecosystem. This crate defines what it means for a type to participate in
//! enum-to-enum conversion at all: it must expose an underlying primitive
//! integer representation and be reconstructible from one. Everything the
//! higher-level cast crate does is expressed against these capabilities
//! rather than against concrete enum definitions.
//!
//! ## Modules
//!
//! - `bits`: The [`bits::EnumBits`] capability trait (underlying
//!   representation, bit-level reconstruction, and bitwise combination
//!   helpers) together with the [`enum_bits!`] declaration macro for
//!   fieldless enums.
//! - `raw`: Phantom-tagged raw bit carriers ([`raw::RawBits<T, B>`]) for
//!   libraries whose flag sets are open, i.e. where arbitrary unions of
//!   bits must be representable even though no named enumerant exists for
//!   them.
//!
//! ## Purpose
//!
//! These primitives let conversion code stay fully generic over the
//! participating enumerated types, reducing accidental coupling to any one
//! library's value set while keeping runtime overhead at zero.
//!
//! Refer to each module for detailed APIs and examples.

pub mod bits;
pub mod raw;
