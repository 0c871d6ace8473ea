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
 * Multiplies the limbs of `wp` by `vl` in place.
 *
 * Returns the highest limb of the product
 */
pub fn mul_1(wp: &mut [Limb], vl: Limb) -> Limb {
    let mut cl = Limb(0);
    for w in wp.iter_mut() {
        let (hpl, lpl) = w.mul_add_hilo(vl, cl, Limb(0));
        *w = lpl;
        cl = hpl;
    }

    cl
}

/**
 * Multiplies the limbs of `xp` by `vl` and adds them to the limbs of `wp`, which must be the
 * same length. Returns the highest limb of the result.
 */
pub fn addmul_1(wp: &mut [Limb], xp: &[Limb], vl: Limb) -> Limb {
    debug_assert!(wp.len() == xp.len());

    let mut cl = Limb(0);
    for (w, &x) in wp.iter_mut().zip(xp) {
        let (hpl, lpl) = x.mul_add_hilo(vl, cl, *w);
        *w = lpl;
        cl = hpl;
    }

    cl
}

/**
 * Multiplies the limbs of `xp` by `vl` and subtracts them from the limbs of `wp`, which must
 * be the same length. Returns the amount that has to be borrowed from above the top limb.
 */
pub fn submul_1(wp: &mut [Limb], xp: &[Limb], vl: Limb) -> Limb {
    debug_assert!(wp.len() == xp.len());

    let mut cl = Limb(0);
    for (w, &x) in wp.iter_mut().zip(xp) {
        let (hpl, lpl) = x.mul_add_hilo(vl, cl, Limb(0));
        let (d, b) = w.sub_overflow(lpl);
        *w = d;
        cl = hpl + b;
    }

    cl
}

/**
 * Multiplies `{xp, xs}` by `{yp, ys}`, storing the product in `wp`, whose length must be
 * exactly `xs + ys`.
 *
 * This is a plain schoolbook multiplication: every limb of `xp` is multiplied across all
 * of `yp` and accumulated into the partial product.
 */
pub fn mul(wp: &mut [Limb], xp: &[Limb], yp: &[Limb]) {
    let xs = xp.len();
    let ys = yp.len();
    debug_assert!(wp.len() == xs + ys);

    for w in wp.iter_mut() {
        *w = Limb(0);
    }
    if ys == 0 {
        return;
    }

    for (i, &xl) in xp.iter().enumerate() {
        let c = addmul_1(&mut wp[i..i + ys], yp, xl);
        wp[i + ys] = c;
    }
}
