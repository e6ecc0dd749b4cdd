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

use thiserror::Error;

/// Runtime failures of a variant. Structural misuse (asking about a type that
/// is not in the alternative list) never reaches runtime; it is a trait bound
/// failure at compile time.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
pub enum VariantError {
    /// The variant holds no live value. Raised by queries, typed extraction
    /// and visitation on a vacant variant; recoverable by assigning a fresh
    /// value.
    #[error("variant holds no value")]
    Empty,
    /// Equality was invoked while the live alternative does not support it.
    #[error("live alternative does not support equality")]
    NotComparable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(VariantError::Empty.to_string(), "variant holds no value");
        assert_eq!(
            VariantError::NotComparable.to_string(),
            "live alternative does not support equality"
        );
    }
}
