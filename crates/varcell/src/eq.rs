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

//! Lazily probed equality capability.
//!
//! Variant equality must not require every alternative to be comparable at
//! variant-definition time; many variants never have their equality asked at
//! all. Each payload type instead declares its capability through [`ProbeEq`]:
//! the default method answers `NotComparable` at runtime, and comparable
//! types opt in (usually via the [`probe_eq!`] macro, which delegates to
//! `PartialEq`). The capability is only demanded where `Variant::try_eq` is
//! actually called.

use crate::error::VariantError;

/// Equality capability probe for one payload type. Implement with an empty
/// body (`impl ProbeEq for Opaque {}`) to participate in variants whose
/// equality, when it lands on this type, reports
/// [`VariantError::NotComparable`].
pub trait ProbeEq {
    fn probe_eq(&self, _other: &Self) -> Result<bool, VariantError> {
        Err(VariantError::NotComparable)
    }
}

/// Declare that the given types answer equality probes through their
/// `PartialEq` impls.
#[macro_export]
macro_rules! probe_eq {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::ProbeEq for $ty {
                fn probe_eq(&self, other: &Self) -> Result<bool, $crate::VariantError> {
                    Ok(self == other)
                }
            }
        )+
    };
}

probe_eq!(
    (),
    bool,
    char,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    f32,
    f64,
    String,
    &'static str,
);

impl<T: PartialEq> ProbeEq for Vec<T> {
    fn probe_eq(&self, other: &Self) -> Result<bool, VariantError> {
        Ok(self == other)
    }
}

impl<T: PartialEq> ProbeEq for Option<T> {
    fn probe_eq(&self, other: &Self) -> Result<bool, VariantError> {
        Ok(self == other)
    }
}

impl<T: PartialEq> ProbeEq for Box<T> {
    fn probe_eq(&self, other: &Self) -> Result<bool, VariantError> {
        Ok(self == other)
    }
}
