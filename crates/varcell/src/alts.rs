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

//! The fixed alternative list and its compile-time type registry.
//!
//! Alternative sets are written as cons cells (`Alt<H, T>` terminated by
//! `End`), usually through the [`alts!`] macro. Two things are computed from
//! the list entirely at compile time:
//! - a layout donor ([`AltList::Raw`]) whose size and alignment are the
//!   maximum over all alternatives, and
//! - a 1-based discriminator tag per member type ([`Member::TAG`]), assigned
//!   in list order.
//!
//! Membership lookup uses the `Here`/`There` marker-index technique: the
//! index parameter is inferred, so a type not present in the list is a trait
//! bound failure at compile time, never a runtime condition. Lists with
//! duplicate entries make the lookup ambiguous and are rejected by inference;
//! alternative sets are expected to be duplicate-free.

use core::marker::PhantomData;
use core::mem::ManuallyDrop;
use core::ptr;

/// Empty alternative list terminator.
pub struct End;

/// Cons cell prepending alternative `H` to the list `T`. Marker only; values
/// of the alternatives live in [`crate::storage::Storage`], never in the
/// list itself.
pub struct Alt<H, T>(PhantomData<(H, T)>);

/// Layout donor for one cons cell: a `#[repr(C)]` union of the head type and
/// the tail's donor. Both fields sit at offset zero, so every alternative in
/// the full list is addressable at the base of the cell, and the union's
/// size/alignment are the pairwise maximum. Never constructed.
#[repr(C)]
pub union RawPair<H, T> {
    _head: ManuallyDrop<H>,
    _tail: ManuallyDrop<T>,
}

/// A fixed, compile-time-known list of alternative types.
///
/// # Safety
/// Implementations must report a `Raw` type whose size and alignment cover
/// every alternative at offset zero, a `LEN` equal to the number of
/// alternatives, and a `drop_active` that runs exactly the destructor of the
/// alternative at the given 1-based tag. `Variant` trusts all three for its
/// raw-memory operations. Only `End` and `Alt` implement this.
pub unsafe trait AltList {
    /// Size/alignment donor for the shared cell.
    type Raw;
    /// Number of alternatives in the list.
    const LEN: u8;

    /// Run the destructor of the alternative at 1-based `tag` (relative to
    /// this list) in place.
    ///
    /// # Safety
    /// `base` must point at a cell holding a live, properly aligned value of
    /// the alternative at `tag`, and the value must not be used afterwards.
    unsafe fn drop_active(base: *mut u8, tag: u8);
}

unsafe impl AltList for End {
    type Raw = ();
    const LEN: u8 = 0;

    unsafe fn drop_active(_base: *mut u8, tag: u8) {
        unreachable!("no alternative matches tag {tag}")
    }
}

unsafe impl<H, T: AltList> AltList for Alt<H, T> {
    type Raw = RawPair<H, T::Raw>;
    const LEN: u8 = 1 + T::LEN;

    unsafe fn drop_active(base: *mut u8, tag: u8) {
        if tag == 1 {
            unsafe { ptr::drop_in_place(base.cast::<H>()) }
        } else {
            unsafe { T::drop_active(base, tag - 1) }
        }
    }
}

/// Index marker: the sought type is the head of this sublist.
pub struct Here;

/// Index marker: the sought type is somewhere in the tail, at `I`.
pub struct There<I>(PhantomData<I>);

/// Empty index list, for operations carrying one index per alternative.
pub struct INil;

/// Index list cons cell.
pub struct ICons<I, Rest>(PhantomData<(I, Rest)>);

/// The type registry: membership of `T` in an alternative list, witnessed by
/// the inferred index `I` and carrying the 1-based discriminator tag.
///
/// # Safety
/// `TAG` must be the 1-based position of `T` in the list; `Variant` uses it
/// to reinterpret raw storage as a `T`. Only the two list impls below are
/// valid.
pub unsafe trait Member<T, I>: AltList {
    /// 1-based discriminator tag of `T` within this list.
    const TAG: u8;
}

unsafe impl<T, Tail: AltList> Member<T, Here> for Alt<T, Tail> {
    const TAG: u8 = 1;
}

unsafe impl<T, H, Tail, I> Member<T, There<I>> for Alt<H, Tail>
where
    Tail: Member<T, I>,
{
    const TAG: u8 = 1 + <Tail as Member<T, I>>::TAG;
}

/// Write an alternative list as `alts![A, B, C]` instead of spelling out the
/// cons cells.
#[macro_export]
macro_rules! alts {
    [] => { $crate::End };
    [$head:ty $(, $tail:ty)* $(,)?] => {
        $crate::Alt<$head, $crate::alts![$($tail),*]>
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{align_of, size_of};

    type Three = alts![i64, bool, String];

    #[test]
    fn test_tags_follow_list_order() {
        assert_eq!(<Three as Member<i64, _>>::TAG, 1);
        assert_eq!(<Three as Member<bool, _>>::TAG, 2);
        assert_eq!(<Three as Member<String, _>>::TAG, 3);
        assert_eq!(<Three as AltList>::LEN, 3);
    }

    #[test]
    fn test_raw_layout_covers_widest_alternative() {
        type Raw = <Three as AltList>::Raw;
        assert!(size_of::<Raw>() >= size_of::<String>());
        assert!(size_of::<Raw>() >= size_of::<i64>());
        assert_eq!(align_of::<Raw>() % align_of::<String>(), 0);
        assert_eq!(align_of::<Raw>() % align_of::<i64>(), 0);
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(<End as AltList>::LEN, 0);
        assert_eq!(size_of::<<End as AltList>::Raw>(), 0);
    }
}
