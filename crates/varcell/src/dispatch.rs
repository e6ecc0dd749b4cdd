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

//! Dispatch: turn the runtime discriminator into a statically-typed call.
//!
//! Each operation is a single linear scan over the alternative list. The scan
//! compares the relative tag against 1 at every cons cell and recurses into
//! the tail with `tag - 1`; exactly one branch matches a live tag, so the
//! `End` base case is unreachable for a live variant (the facade rejects the
//! vacant case before scanning). Scan order affects only cost, never
//! correctness, and the list length is a small fixed constant.
//!
//! Visitation comes in three value categories sharing the same scan shape:
//! shared reference ([`DispatchRef`]), mutable reference ([`DispatchMut`]),
//! and consuming by value ([`DispatchOnce`]). Result typing follows the
//! common-type rule: every branch's visitor output must convert [`Into`] the
//! overall result type `R`, and a list with no such `R` fails to compile.
//!
//! The same scan also powers the type-generic whole-variant operations:
//! cloning, debug formatting, equality probing, and cross-set embedding.

use crate::alts::{Alt, AltList, End, ICons, INil, Member};
use crate::error::VariantError;
use crate::eq::ProbeEq;
use core::fmt;
use core::ptr;

/// Visitor branch over a shared reference to alternative `T`.
pub trait Visit<T>: Sized {
    type Output;
    fn visit(self, value: &T) -> Self::Output;
}

/// Visitor branch over a mutable reference to alternative `T`.
pub trait VisitMut<T>: Sized {
    type Output;
    fn visit_mut(self, value: &mut T) -> Self::Output;
}

/// Visitor branch consuming alternative `T` by value.
pub trait VisitOnce<T>: Sized {
    type Output;
    fn visit_once(self, value: T) -> Self::Output;
}

/// Scan yielding `&T` to the matching visitor branch.
pub trait DispatchRef<V, R>: AltList {
    /// # Safety
    /// `base` must point at a cell holding a live value of the alternative at
    /// 1-based `tag` relative to this list.
    unsafe fn scan_ref(base: *const u8, tag: u8, visitor: V) -> R;
}

impl<V, R> DispatchRef<V, R> for End {
    unsafe fn scan_ref(_base: *const u8, tag: u8, _visitor: V) -> R {
        unreachable!("no alternative matches tag {tag}")
    }
}

impl<H, T, V, R> DispatchRef<V, R> for Alt<H, T>
where
    T: DispatchRef<V, R>,
    V: Visit<H>,
    <V as Visit<H>>::Output: Into<R>,
{
    unsafe fn scan_ref(base: *const u8, tag: u8, visitor: V) -> R {
        if tag == 1 {
            let value = unsafe { &*base.cast::<H>() };
            visitor.visit(value).into()
        } else {
            unsafe { T::scan_ref(base, tag - 1, visitor) }
        }
    }
}

/// Scan yielding `&mut T` to the matching visitor branch.
pub trait DispatchMut<V, R>: AltList {
    /// # Safety
    /// Same as [`DispatchRef::scan_ref`], with exclusive access to the cell.
    unsafe fn scan_mut(base: *mut u8, tag: u8, visitor: V) -> R;
}

impl<V, R> DispatchMut<V, R> for End {
    unsafe fn scan_mut(_base: *mut u8, tag: u8, _visitor: V) -> R {
        unreachable!("no alternative matches tag {tag}")
    }
}

impl<H, T, V, R> DispatchMut<V, R> for Alt<H, T>
where
    T: DispatchMut<V, R>,
    V: VisitMut<H>,
    <V as VisitMut<H>>::Output: Into<R>,
{
    unsafe fn scan_mut(base: *mut u8, tag: u8, visitor: V) -> R {
        if tag == 1 {
            let value = unsafe { &mut *base.cast::<H>() };
            visitor.visit_mut(value).into()
        } else {
            unsafe { T::scan_mut(base, tag - 1, visitor) }
        }
    }
}

/// Scan moving the live value out of the cell into the matching visitor
/// branch. The caller clears the tag before scanning; ownership of the
/// payload transfers to the visitor.
pub trait DispatchOnce<V, R>: AltList {
    /// # Safety
    /// Same as [`DispatchRef::scan_ref`]; additionally the caller must have
    /// already marked the cell vacant, since the value is moved out.
    unsafe fn scan_once(base: *mut u8, tag: u8, visitor: V) -> R;
}

impl<V, R> DispatchOnce<V, R> for End {
    unsafe fn scan_once(_base: *mut u8, tag: u8, _visitor: V) -> R {
        unreachable!("no alternative matches tag {tag}")
    }
}

impl<H, T, V, R> DispatchOnce<V, R> for Alt<H, T>
where
    T: DispatchOnce<V, R>,
    V: VisitOnce<H>,
    <V as VisitOnce<H>>::Output: Into<R>,
{
    unsafe fn scan_once(base: *mut u8, tag: u8, visitor: V) -> R {
        if tag == 1 {
            let value = unsafe { ptr::read(base.cast::<H>()) };
            visitor.visit_once(value).into()
        } else {
            unsafe { T::scan_once(base, tag - 1, visitor) }
        }
    }
}

/// Clone the live value into a second cell. Requires every alternative to be
/// `Clone`; backs `Variant`'s `Clone` impl.
pub trait CloneActive: AltList {
    /// # Safety
    /// `src` must hold a live value at `tag`; `dst` must be a vacant cell of
    /// the same list's layout.
    unsafe fn clone_active(src: *const u8, dst: *mut u8, tag: u8);
}

impl CloneActive for End {
    unsafe fn clone_active(_src: *const u8, _dst: *mut u8, tag: u8) {
        unreachable!("no alternative matches tag {tag}")
    }
}

impl<H: Clone, T: CloneActive> CloneActive for Alt<H, T> {
    unsafe fn clone_active(src: *const u8, dst: *mut u8, tag: u8) {
        if tag == 1 {
            let cloned = unsafe { &*src.cast::<H>() }.clone();
            unsafe { ptr::write(dst.cast::<H>(), cloned) };
        } else {
            unsafe { T::clone_active(src, dst, tag - 1) }
        }
    }
}

/// Debug-format the live value. Requires every alternative to be `Debug`.
pub trait DebugActive: AltList {
    /// # Safety
    /// `base` must hold a live value at `tag`.
    unsafe fn debug_active(base: *const u8, tag: u8, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl DebugActive for End {
    unsafe fn debug_active(_base: *const u8, tag: u8, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        unreachable!("no alternative matches tag {tag}")
    }
}

impl<H: fmt::Debug, T: DebugActive> DebugActive for Alt<H, T> {
    unsafe fn debug_active(base: *const u8, tag: u8, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if tag == 1 {
            let value = unsafe { &*base.cast::<H>() };
            write!(f, "{value:?}")
        } else {
            unsafe { T::debug_active(base, tag - 1, f) }
        }
    }
}

/// Compare two live values of the same alternative through the lazily probed
/// equality capability. A live type without the capability answers
/// `NotComparable` at runtime rather than blocking compilation.
pub trait EqActive: AltList {
    /// # Safety
    /// Both cells must hold live values of the alternative at `tag`.
    unsafe fn eq_active(a: *const u8, b: *const u8, tag: u8) -> Result<bool, VariantError>;
}

impl EqActive for End {
    unsafe fn eq_active(_a: *const u8, _b: *const u8, tag: u8) -> Result<bool, VariantError> {
        unreachable!("no alternative matches tag {tag}")
    }
}

impl<H: ProbeEq, T: EqActive> EqActive for Alt<H, T> {
    unsafe fn eq_active(a: *const u8, b: *const u8, tag: u8) -> Result<bool, VariantError> {
        if tag == 1 {
            let (a, b) = unsafe { (&*a.cast::<H>(), &*b.cast::<H>()) };
            a.probe_eq(b)
        } else {
            unsafe { T::eq_active(a, b, tag - 1) }
        }
    }
}

/// Move the live value into the cell of a variant over a different (wider)
/// alternative list. Every source alternative must be a member of the target
/// list; the membership positions `Is` are inferred.
pub trait EmbedActive<B, Is>: AltList
where
    B: AltList,
{
    /// Moves the value at relative `tag` into `dst` and returns the target
    /// list's tag for it.
    ///
    /// # Safety
    /// `src` must hold a live value at `tag` and must already be marked
    /// vacant by the caller (the value is moved out); `dst` must be a vacant
    /// cell laid out for `B`.
    unsafe fn embed_active(src: *mut u8, tag: u8, dst: *mut u8) -> u8;
}

impl<B: AltList> EmbedActive<B, INil> for End {
    unsafe fn embed_active(_src: *mut u8, tag: u8, _dst: *mut u8) -> u8 {
        unreachable!("no alternative matches tag {tag}")
    }
}

impl<H, T, B, I, Is> EmbedActive<B, ICons<I, Is>> for Alt<H, T>
where
    T: EmbedActive<B, Is>,
    B: Member<H, I>,
{
    unsafe fn embed_active(src: *mut u8, tag: u8, dst: *mut u8) -> u8 {
        if tag == 1 {
            unsafe { ptr::write(dst.cast::<H>(), ptr::read(src.cast::<H>())) };
            <B as Member<H, I>>::TAG
        } else {
            unsafe { T::embed_active(src, tag - 1, dst) }
        }
    }
}
