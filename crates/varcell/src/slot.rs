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

//! Per-alternative accessor: all lifetime operations for exactly one
//! alternative type, identified by its registry tag. The shared storage is
//! passed in explicitly; the slot itself is a zero-sized lens.

use crate::alts::Member;
use crate::storage::{Storage, VACANT};
use core::marker::PhantomData;
use core::ptr;

/// Lifetime operations for alternative `T` at the index witnessed by `I`.
pub(crate) struct Slot<T, I>(PhantomData<(T, I)>);

impl<T, I> Slot<T, I> {
    pub(crate) fn is_active<A>(storage: &Storage<A>) -> bool
    where
        A: Member<T, I>,
    {
        storage.tag() == <A as Member<T, I>>::TAG
    }

    /// In-place construct a `T` and tag the storage with it.
    ///
    /// Precondition: the storage holds no live value of any type; the caller
    /// must have destroyed the prior value first.
    pub(crate) fn emplace<A>(storage: &mut Storage<A>, value: T)
    where
        A: Member<T, I>,
    {
        debug_assert_eq!(storage.tag(), VACANT, "emplace into non-vacant storage");
        unsafe { ptr::write(storage.base_mut().cast::<T>(), value) };
        storage.set_tag(<A as Member<T, I>>::TAG);
    }

    /// If this slot's alternative is live, destroy it and return true;
    /// otherwise do nothing. The tag is cleared before the destructor runs so
    /// a panicking payload drop leaves the storage vacant, not torn.
    pub(crate) fn drop_active<A>(storage: &mut Storage<A>) -> bool
    where
        A: Member<T, I>,
    {
        if storage.tag() != <A as Member<T, I>>::TAG {
            return false;
        }
        storage.set_tag(VACANT);
        unsafe { ptr::drop_in_place(storage.base_mut().cast::<T>()) };
        true
    }

    /// Same-type assignment: drop the replaced payload and write the new one
    /// into the same cell, with no teardown of the variant machinery. The tag
    /// is cleared for the duration of the swap (unobservable through the
    /// exclusive borrow) so a panicking payload drop leaves the storage
    /// vacant rather than tagged over destroyed bytes.
    ///
    /// Precondition: this slot's alternative is live.
    pub(crate) fn assign<A>(storage: &mut Storage<A>, value: T)
    where
        A: Member<T, I>,
    {
        debug_assert_eq!(storage.tag(), <A as Member<T, I>>::TAG);
        storage.set_tag(VACANT);
        unsafe {
            ptr::drop_in_place(storage.base_mut().cast::<T>());
            ptr::write(storage.base_mut().cast::<T>(), value);
        }
        storage.set_tag(<A as Member<T, I>>::TAG);
    }

    /// Move the live value out, leaving the storage vacant.
    ///
    /// Precondition: this slot's alternative is live.
    pub(crate) fn take<A>(storage: &mut Storage<A>) -> T
    where
        A: Member<T, I>,
    {
        debug_assert_eq!(storage.tag(), <A as Member<T, I>>::TAG);
        storage.set_tag(VACANT);
        unsafe { ptr::read(storage.base().cast::<T>()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alts::{Here, There};

    type Pair = crate::alts![i64, String];

    #[test]
    fn test_emplace_then_take_round_trips() {
        let mut store: Storage<Pair> = Storage::vacant();
        Slot::<String, There<Here>>::emplace(&mut store, "hello".to_string());
        assert!(Slot::<String, There<Here>>::is_active(&store));
        assert!(!Slot::<i64, Here>::is_active(&store));

        let s = Slot::<String, There<Here>>::take(&mut store);
        assert_eq!(s, "hello");
        assert_eq!(store.tag(), VACANT);
    }

    #[test]
    fn test_drop_active_reports_exactly_one_slot() {
        let mut store: Storage<Pair> = Storage::vacant();
        Slot::<i64, Here>::emplace(&mut store, 7);
        assert!(!Slot::<String, There<Here>>::drop_active(&mut store));
        assert!(Slot::<i64, Here>::drop_active(&mut store));
        assert_eq!(store.tag(), VACANT);
    }

    #[test]
    fn test_assign_keeps_tag() {
        let mut store: Storage<Pair> = Storage::vacant();
        Slot::<i64, Here>::emplace(&mut store, 1);
        Slot::<i64, Here>::assign(&mut store, 2);
        assert!(Slot::<i64, Here>::is_active(&store));
        let got = Slot::<i64, Here>::take(&mut store);
        assert_eq!(got, 2);
    }
}
