// Copyright 2015 The Ramp Developers
//
//    Licensed under the Apache License, Version 2.0 (the "License");
//    you may not use this file except in compliance with the License.
//    You may obtain a copy of the License at
//
//        http://www.apache.org/licenses/LICENSE-2.0
//
//    Unless required by applicable law or agreed to in writing, software
//    distributed under the License is distributed on an "AS IS" BASIS,
//    WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//    See the License for the specific language governing permissions and
//    limitations under the License.

use crate::ll::limb::Limb;

/**
 * Adds the limbs of `yp` to the limbs of `wp`, which must be the same length, storing the
 * result in `wp`. If there was a carry, it is returned.
 */
pub fn add_n(wp: &mut [Limb], yp: &[Limb]) -> Limb {
    debug_assert!(wp.len() == yp.len());

    let mut carry = false;
    for (w, &y) in wp.iter_mut().zip(yp) {
        let (s, c) = w.add_carry(y, carry);
        *w = s;
        carry = c;
    }

    Limb(carry as u32)
}

/**
 * Adds `{yp, ys}` to `{wp, ws}`, where `ws >= ys`, storing the result in `wp`. The carry
 * is propagated through the high limbs of `wp` and returned if it falls off the top.
 */
pub fn add(wp: &mut [Limb], yp: &[Limb]) -> Limb {
    debug_assert!(wp.len() >= yp.len());

    let ys = yp.len();
    let (lo, hi) = wp.split_at_mut(ys);
    let carry = add_n(lo, yp);
    if carry == 0 {
        carry
    } else {
        add_1(hi, carry)
    }
}

/**
 * Adds the single limb `x` to `wp` in place, returning the carry out of the top limb.
 */
pub fn add_1(wp: &mut [Limb], x: Limb) -> Limb {
    let mut carry = x;
    for w in wp.iter_mut() {
        if carry == 0 {
            break;
        }
        let (s, c) = w.add_overflow(carry);
        *w = s;
        carry = Limb(c as u32);
    }

    carry
}

/**
 * Subtracts the limbs of `yp` from the limbs of `wp`, which must be the same length, storing
 * the result in `wp`. If there was a borrow from a higher-limb (i.e., the result would be
 * negative), it is returned.
 */
pub fn sub_n(wp: &mut [Limb], yp: &[Limb]) -> Limb {
    debug_assert!(wp.len() == yp.len());

    let mut borrow = false;
    for (w, &y) in wp.iter_mut().zip(yp) {
        let (d, b) = w.sub_borrow(y, borrow);
        *w = d;
        borrow = b;
    }

    Limb(borrow as u32)
}

/**
 * Subtracts `{yp, ys}` from `{wp, ws}`, where `ws >= ys`, storing the result in `wp`.
 * Returns the borrow out of the top limb.
 */
pub fn sub(wp: &mut [Limb], yp: &[Limb]) -> Limb {
    debug_assert!(wp.len() >= yp.len());

    let ys = yp.len();
    let (lo, hi) = wp.split_at_mut(ys);
    let borrow = sub_n(lo, yp);
    if borrow == 0 {
        borrow
    } else {
        sub_1(hi, borrow)
    }
}

/**
 * Subtracts the single limb `x` from `wp` in place, returning the borrow out of the top limb.
 */
pub fn sub_1(wp: &mut [Limb], x: Limb) -> Limb {
    let mut borrow = x;
    for w in wp.iter_mut() {
        if borrow == 0 {
            break;
        }
        let (d, b) = w.sub_overflow(borrow);
        *w = d;
        borrow = Limb(b as u32);
    }

    borrow
}
