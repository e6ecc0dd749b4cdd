// Copyright (C) 2025 Ryan Daum <ryan.daum@gmail.com> This program is free
// software: you can redistribute it and/or modify it under the terms of the GNU
// General Public License as published by the Free Software Foundation, version
// 3.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.
//

//! A type-safe closed-set tagged union: exactly one value at a time, drawn
//! from a fixed compile-time list of alternatives, stored inline in a single
//! cell sized for the widest of them.
//!
//! ```
//! use varcell::{Variant, VariantError};
//!
//! type Scalar = varcell::alts![i64, f64, String];
//!
//! let mut v: Variant<Scalar> = Variant::new(42i64);
//! assert!(v.holds::<i64, _>());
//!
//! v.set("moop".to_string());
//! assert_eq!(v.get::<String, _>().map(String::as_str), Ok("moop"));
//!
//! // A failed transition never leaves a torn value behind; the variant
//! // lands vacant and says so until a fresh value arrives.
//! let r = v.try_set_with::<f64, _, _, _>(|| Err("no dice"));
//! assert_eq!(r, Err("no dice"));
//! assert_eq!(v.get::<f64, _>(), Err(VariantError::Empty));
//! ```
//!
//! The discriminator is 0 when vacant and `1..=N` in list order otherwise.
//! Membership of a type in the alternative list is resolved entirely at
//! compile time; asking a variant about a type outside its list does not
//! compile. A `Variant` has one logical owner, carries no internal
//! synchronization, and is `Send`/`Sync` exactly when all its alternatives
//! are.

mod alts;
mod dispatch;
mod error;
mod eq;
mod slot;
mod storage;
mod variant;

pub use alts::{Alt, AltList, End, Here, ICons, INil, Member, RawPair, There};
pub use dispatch::{
    CloneActive, DebugActive, DispatchMut, DispatchOnce, DispatchRef, EmbedActive, EqActive, Visit,
    VisitMut, VisitOnce,
};
pub use error::VariantError;
pub use eq::ProbeEq;
pub use variant::Variant;
