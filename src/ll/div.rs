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

use std::cmp::Ordering;

use crate::ll;
use crate::ll::limb::{self, BaseInt, DoubleBaseInt, Limb};

/**
 * Divides the limbs of `np` by `d` in place, leaving the quotient in `np`. The remainder
 * is returned.
 *
 * Works from the most-significant limb down, dividing the running remainder shifted up by
 * one limb plus the next limb of `np` by `d`. The running remainder is always less than
 * `d`, so every step produces exactly one quotient limb.
 */
pub fn divrem_1(np: &mut [Limb], d: Limb) -> Limb {
    debug_assert!(d != 0);

    let mut r = Limb(0);
    for n in np.iter_mut().rev() {
        let (q, rem) = limb::div(r, *n, d);
        *n = q;
        r = rem;
    }

    r
}

/**
 * Estimates the quotient limb of `(n2, n1, n0) / (d1, d0)`.
 *
 * The divisor must be normalized (`d1` has its high bit set) and `(n2, n1) <= (d1, d0)`.
 * The trial digit comes from one double-limb division of `(n2, n1)` by `d1`, clamped to
 * the largest limb value, and is then decremented at most twice while `q * d0` exceeds
 * what is left of the numerator. The result is either exact or one too large.
 */
pub fn div_3by2(n2: Limb, n1: Limb, n0: Limb, d1: Limb, d0: Limb) -> Limb {
    debug_assert!(d1.high_bit_set());
    debug_assert!(n2 <= d1);

    const B: DoubleBaseInt = 1 << Limb::BITS;

    let num = limb::join(n2, n1);
    let d1 = d1.0 as DoubleBaseInt;
    let d0 = d0.0 as DoubleBaseInt;

    let mut q = num / d1;
    if q > Limb::MAX.0 as DoubleBaseInt {
        q = Limb::MAX.0 as DoubleBaseInt;
    }
    let mut r = num - q * d1;

    while r < B && q * d0 > ((r << Limb::BITS) | n0.0 as DoubleBaseInt) {
        q -= 1;
        r += d1;
    }

    Limb(q as BaseInt)
}

/**
 * Divides `{np, ns}` by `{dp, ds}`, storing the quotient in `{qp, ns - ds + 1}` and the
 * remainder in `{rp, ds}`.
 *
 * Requires `ds >= 2`, `ns >= ds` and the most significant limb of `dp` to be non-zero.
 * Single-limb divisors go through `divrem_1` instead.
 */
pub fn divrem(qp: &mut [Limb], rp: &mut [Limb], np: &[Limb], dp: &[Limb]) {
    let ns = np.len();
    let ds = dp.len();
    debug_assert!(ds >= 2);
    debug_assert!(ns >= ds);
    debug_assert!(dp[ds - 1] != 0);
    debug_assert!(qp.len() == ns - ds + 1);
    debug_assert!(rp.len() == ds);

    // Shift both operands so the top bit of the divisor is set. The numerator gets one
    // extra limb to hold whatever falls off its top.
    let cnt = dp[ds - 1].leading_zeros();

    let mut d = dp.to_vec();
    let mut n = Vec::with_capacity(ns + 1);
    n.extend_from_slice(np);
    n.push(Limb(0));
    if cnt > 0 {
        ll::shl(&mut d, cnt);
        n[ns] = ll::shl(&mut n[..ns], cnt);
    }

    let d1 = d[ds - 1];
    let d0 = d[ds - 2];

    for j in (0..ns - ds + 1).rev() {
        let mut q = div_3by2(n[j + ds], n[j + ds - 1], n[j + ds - 2], d1, d0);

        let borrow = ll::submul_1(&mut n[j..j + ds], &d, q);
        let (top, under) = n[j + ds].sub_overflow(borrow);
        n[j + ds] = top;

        // The estimate is at most one too large, so one add-back is always enough.
        if under {
            q = q - 1;
            let c = ll::add_n(&mut n[j..j + ds], &d);
            n[j + ds] = n[j + ds] + c;
        }
        debug_assert!(n[j + ds] == 0);
        debug_assert!(ll::cmp(&n[j..j + ds], &d) == Ordering::Less);

        qp[j] = q;
    }

    rp.copy_from_slice(&n[..ds]);
    if cnt > 0 {
        ll::shr(rp, cnt);
    }
}
