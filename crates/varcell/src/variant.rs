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

//! The public facade: one storage cell plus the accessor/dispatch machinery,
//! exposed as a closed-set tagged union.
//!
//! A `Variant` is either vacant (no live value; only reachable through
//! explicit clearing, a whole-value take, or a failed transition) or holds
//! exactly one value of one alternative. The discriminator tag and the cell
//! contents agree at every observable instant: transitions clear the tag
//! before destroying the old payload and only re-tag after the new payload is
//! fully constructed, so a failing or panicking constructor leaves the
//! variant vacant rather than torn.

use crate::alts::{Alt, AltList, Here, Member};
use crate::dispatch::{
    CloneActive, DebugActive, DispatchMut, DispatchOnce, DispatchRef, EmbedActive, EqActive,
};
use crate::error::VariantError;
use crate::slot::Slot;
use crate::storage::{Storage, VACANT};
use core::fmt;
use core::mem;

/// A value of exactly one of the alternative types in `A`, stored inline in
/// a cell sized for the widest alternative.
pub struct Variant<A: AltList> {
    store: Storage<A>,
}

impl<A: AltList> Variant<A> {
    /// Construct a variant holding `value`. The membership index is inferred;
    /// a `T` outside the alternative list does not compile.
    pub fn new<T, I>(value: T) -> Self
    where
        A: Member<T, I>,
    {
        let mut store = Storage::vacant();
        Slot::<T, I>::emplace(&mut store, value);
        Variant { store }
    }

    pub(crate) fn from_store(store: Storage<A>) -> Self {
        Variant { store }
    }

    /// The live discriminator: 0 when vacant, otherwise the 1-based position
    /// of the live alternative in list order.
    pub fn tag(&self) -> u8 {
        self.store.tag()
    }

    pub fn is_vacant(&self) -> bool {
        self.store.tag() == VACANT
    }

    /// True when the live value is a `T`.
    pub fn holds<T, I>(&self) -> bool
    where
        A: Member<T, I>,
    {
        Slot::<T, I>::is_active(&self.store)
    }

    /// Borrow the live value as a `T`. Fails with [`VariantError::Empty`] on
    /// a vacant variant; calling with the wrong `T` while another alternative
    /// is live is misuse and panics on the tag assertion.
    pub fn get<T, I>(&self) -> Result<&T, VariantError>
    where
        A: Member<T, I>,
    {
        if self.is_vacant() {
            return Err(VariantError::Empty);
        }
        let want = <A as Member<T, I>>::TAG;
        assert_eq!(
            self.store.tag(),
            want,
            "requested alternative tag {want} but tag {} is live",
            self.store.tag()
        );
        Ok(unsafe { self.store.interpret::<T>() })
    }

    /// Mutable counterpart of [`Variant::get`].
    pub fn get_mut<T, I>(&mut self) -> Result<&mut T, VariantError>
    where
        A: Member<T, I>,
    {
        if self.is_vacant() {
            return Err(VariantError::Empty);
        }
        let want = <A as Member<T, I>>::TAG;
        assert_eq!(
            self.store.tag(),
            want,
            "requested alternative tag {want} but tag {} is live",
            self.store.tag()
        );
        Ok(unsafe { self.store.interpret_mut::<T>() })
    }

    /// Non-panicking probe: the live value as a `T`, or `None` when vacant or
    /// holding a different alternative.
    pub fn as_alt<T, I>(&self) -> Option<&T>
    where
        A: Member<T, I>,
    {
        if Slot::<T, I>::is_active(&self.store) {
            Some(unsafe { self.store.interpret::<T>() })
        } else {
            None
        }
    }

    pub fn as_alt_mut<T, I>(&mut self) -> Option<&mut T>
    where
        A: Member<T, I>,
    {
        if Slot::<T, I>::is_active(&self.store) {
            Some(unsafe { self.store.interpret_mut::<T>() })
        } else {
            None
        }
    }

    /// Assign from any alternative. Same-type assignment goes straight into
    /// the live value with no teardown of the variant machinery; a
    /// cross-type assignment destroys the old value and constructs the new
    /// one in its place.
    pub fn set<T, I>(&mut self, value: T)
    where
        A: Member<T, I>,
    {
        if Slot::<T, I>::is_active(&self.store) {
            Slot::<T, I>::assign(&mut self.store, value);
        } else {
            self.clear();
            Slot::<T, I>::emplace(&mut self.store, value);
        }
    }

    /// Fallible transition: destroy the current value, then run `ctor`. On
    /// `Err` (or a panic inside `ctor`) the variant is left vacant and the
    /// failure propagates unmodified; the old value is already gone either
    /// way.
    pub fn try_set_with<T, I, E, F>(&mut self, ctor: F) -> Result<(), E>
    where
        A: Member<T, I>,
        F: FnOnce() -> Result<T, E>,
    {
        self.clear();
        let value = ctor()?;
        Slot::<T, I>::emplace(&mut self.store, value);
        Ok(())
    }

    /// Destroy the live value, if any, leaving the variant vacant. The tag is
    /// cleared before the destructor runs.
    pub fn clear(&mut self) {
        let tag = self.store.tag();
        if tag == VACANT {
            return;
        }
        self.store.set_tag(VACANT);
        unsafe { A::drop_active(self.store.base_mut(), tag) };
    }

    /// Move the whole contents out, leaving this variant vacant.
    pub fn take(&mut self) -> Self {
        let store = mem::replace(&mut self.store, Storage::vacant());
        Variant { store }
    }

    /// Move the live value out as a `T`, leaving the variant vacant. Vacant
    /// fails with [`VariantError::Empty`]; the wrong `T` while live panics on
    /// the tag assertion, like [`Variant::get`].
    pub fn take_alt<T, I>(&mut self) -> Result<T, VariantError>
    where
        A: Member<T, I>,
    {
        if self.is_vacant() {
            return Err(VariantError::Empty);
        }
        let want = <A as Member<T, I>>::TAG;
        assert_eq!(
            self.store.tag(),
            want,
            "requested alternative tag {want} but tag {} is live",
            self.store.tag()
        );
        Ok(Slot::<T, I>::take(&mut self.store))
    }

    /// Dispatch the visitor over a shared reference to the live value. Every
    /// branch output converts into the result type `R`.
    pub fn visit<V, R>(&self, visitor: V) -> Result<R, VariantError>
    where
        A: DispatchRef<V, R>,
    {
        let tag = self.store.tag();
        if tag == VACANT {
            return Err(VariantError::Empty);
        }
        Ok(unsafe { <A as DispatchRef<V, R>>::scan_ref(self.store.base(), tag, visitor) })
    }

    /// Dispatch the visitor over a mutable reference to the live value.
    pub fn visit_mut<V, R>(&mut self, visitor: V) -> Result<R, VariantError>
    where
        A: DispatchMut<V, R>,
    {
        let tag = self.store.tag();
        if tag == VACANT {
            return Err(VariantError::Empty);
        }
        Ok(unsafe { <A as DispatchMut<V, R>>::scan_mut(self.store.base_mut(), tag, visitor) })
    }

    /// Consume the variant, dispatching the visitor over the live value by
    /// move.
    pub fn visit_take<V, R>(mut self, visitor: V) -> Result<R, VariantError>
    where
        A: DispatchOnce<V, R>,
    {
        let tag = self.store.tag();
        if tag == VACANT {
            return Err(VariantError::Empty);
        }
        self.store.set_tag(VACANT);
        Ok(unsafe { <A as DispatchOnce<V, R>>::scan_once(self.store.base_mut(), tag, visitor) })
    }

    /// Equality: discriminators first (two vacants are equal, a tag mismatch
    /// is plainly unequal), then the live type's probed capability. A live
    /// type without equality support answers
    /// [`VariantError::NotComparable`].
    pub fn try_eq(&self, other: &Self) -> Result<bool, VariantError>
    where
        A: EqActive,
    {
        let tag = self.store.tag();
        if tag != other.store.tag() {
            return Ok(false);
        }
        if tag == VACANT {
            return Ok(true);
        }
        unsafe { A::eq_active(self.store.base(), other.store.base(), tag) }
    }

    /// Move this variant's contents into a variant over a wider alternative
    /// list. Every alternative of `A` must be a member of `B`; the positions
    /// are inferred. A vacant variant embeds vacant.
    pub fn embed<B, Is>(mut self) -> Variant<B>
    where
        B: AltList,
        A: EmbedActive<B, Is>,
    {
        let tag = self.store.tag();
        let mut store = Storage::vacant();
        if tag != VACANT {
            self.store.set_tag(VACANT);
            let dst_tag = unsafe {
                <A as EmbedActive<B, Is>>::embed_active(
                    self.store.base_mut(),
                    tag,
                    store.base_mut(),
                )
            };
            store.set_tag(dst_tag);
        }
        Variant::from_store(store)
    }
}

impl<A: AltList> Drop for Variant<A> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Default-construction builds the *first* alternative's default value,
/// deterministically, rather than introducing a second "empty" semantic
/// beside the failure-only vacant state.
impl<H: Default, T: AltList> Default for Variant<Alt<H, T>> {
    fn default() -> Self {
        Variant::new::<H, Here>(H::default())
    }
}

impl<A: CloneActive> Clone for Variant<A> {
    fn clone(&self) -> Self {
        let mut store = Storage::vacant();
        let tag = self.store.tag();
        if tag != VACANT {
            unsafe { A::clone_active(self.store.base(), store.base_mut(), tag) };
            store.set_tag(tag);
        }
        Variant::from_store(store)
    }
}

impl<A: DebugActive> fmt::Debug for Variant<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = self.store.tag();
        if tag == VACANT {
            return write!(f, "Variant(vacant)");
        }
        write!(f, "Variant[{tag}](")?;
        unsafe { A::debug_active(self.store.base(), tag, f)? };
        write!(f, ")")
    }
}
