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
 * Shifts the limbs of `wp` left by `cnt` bits in place. The top-most shifted bits are
 * returned in the low bits of the result.
 *
 * `cnt` must be in `1..Limb::BITS`.
 */
pub fn shl(wp: &mut [Limb], cnt: u32) -> Limb {
    debug_assert!(cnt >= 1);
    debug_assert!((cnt as usize) < Limb::BITS);

    let inv_cnt = Limb::BITS as u32 - cnt;

    let mut carry = Limb(0);
    for w in wp.iter_mut() {
        let l = *w;
        *w = (l << cnt) | carry;
        carry = l >> inv_cnt;
    }

    carry
}

/**
 * Shifts the limbs of `wp` right by `cnt` bits in place. The bottom-most shifted bits are
 * returned in the high bits of the result.
 *
 * `cnt` must be in `1..Limb::BITS`.
 */
pub fn shr(wp: &mut [Limb], cnt: u32) -> Limb {
    debug_assert!(cnt >= 1);
    debug_assert!((cnt as usize) < Limb::BITS);

    let inv_cnt = Limb::BITS as u32 - cnt;

    let mut carry = Limb(0);
    for w in wp.iter_mut().rev() {
        let h = *w;
        *w = (h >> cnt) | carry;
        carry = h << inv_cnt;
    }

    carry
}

// Common function for the operations below, since they're all essentially the same
#[inline(always)]
fn bitop<F: Fn(Limb, Limb) -> Limb>(wp: &mut [Limb], yp: &[Limb], op: F) {
    debug_assert!(wp.len() == yp.len());

    for (w, &y) in wp.iter_mut().zip(yp) {
        *w = op(*w, y);
    }
}

/**
 * Performs a bitwise "and" (`&`) of the limbs of `wp` and `yp`, storing the result in `wp`
 */
pub fn and_n(wp: &mut [Limb], yp: &[Limb]) {
    bitop(wp, yp, |x, y| x & y);
}

/**
 * Performs a bitwise "or" (`|`) of the limbs of `wp` and `yp`, storing the result in `wp`
 */
pub fn or_n(wp: &mut [Limb], yp: &[Limb]) {
    bitop(wp, yp, |x, y| x | y);
}

/**
 * Performs a bitwise "xor" (`^`) of the limbs of `wp` and `yp`, storing the result in `wp`
 */
pub fn xor_n(wp: &mut [Limb], yp: &[Limb]) {
    bitop(wp, yp, |x, y| x ^ y);
}

/**
 * Performs a bitwise inversion ("not") of the limbs in `wp`
 */
pub fn not(wp: &mut [Limb]) {
    for w in wp.iter_mut() {
        *w = !*w;
    }
}
