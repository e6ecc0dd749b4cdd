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

//! Raw shared storage: one uninitialized cell sized and aligned for the
//! widest alternative, plus the discriminator tag. Storage performs no
//! construction or destruction of its own; the accessor and dispatch layers
//! maintain the tag/contents invariant.

use crate::alts::AltList;
use core::mem::MaybeUninit;

/// Discriminator value for "no live alternative".
pub(crate) const VACANT: u8 = 0;

/// The shared cell for one variant. Tag `VACANT` (0) means no live value;
/// tags `1..=A::LEN` map onto the alternatives in list order.
pub(crate) struct Storage<A: AltList> {
    cell: MaybeUninit<A::Raw>,
    tag: u8,
}

impl<A: AltList> Storage<A> {
    pub(crate) fn vacant() -> Self {
        Storage {
            cell: MaybeUninit::uninit(),
            tag: VACANT,
        }
    }

    pub(crate) fn tag(&self) -> u8 {
        self.tag
    }

    pub(crate) fn set_tag(&mut self, tag: u8) {
        debug_assert!(tag <= A::LEN, "tag {tag} out of range for {} alternatives", A::LEN);
        self.tag = tag;
    }

    /// Base of the cell. Every alternative lives at offset zero.
    pub(crate) fn base(&self) -> *const u8 {
        self.cell.as_ptr().cast()
    }

    pub(crate) fn base_mut(&mut self) -> *mut u8 {
        self.cell.as_mut_ptr().cast()
    }

    /// Reinterpret the cell as a live `T`.
    ///
    /// # Safety
    /// The tag must prove that a live `T` is currently constructed in the
    /// cell.
    pub(crate) unsafe fn interpret<T>(&self) -> &T {
        unsafe { &*self.base().cast::<T>() }
    }

    /// # Safety
    /// Same as [`Storage::interpret`].
    pub(crate) unsafe fn interpret_mut<T>(&mut self) -> &mut T {
        unsafe { &mut *self.base_mut().cast::<T>() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{align_of, size_of};

    type Pair = crate::alts![u8, u64];

    #[test]
    fn test_fresh_storage_is_vacant() {
        let store: Storage<Pair> = Storage::vacant();
        assert_eq!(store.tag(), VACANT);
    }

    #[test]
    fn test_cell_alignment_suits_every_alternative() {
        let store: Storage<Pair> = Storage::vacant();
        let base = store.base() as usize;
        assert_eq!(base % align_of::<u64>(), 0);
        assert!(size_of::<<Pair as AltList>::Raw>() >= size_of::<u64>());
    }
}
