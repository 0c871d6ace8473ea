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

//! Low-level routines operating on little-endian slices of limbs.
//!
//! Nothing in here knows about signs or about how the limbs are stored; carries and
//! borrows are always passed in and returned explicitly.

use std::cmp::Ordering;

mod addsub;
mod bit;
mod div;
mod mul;

pub mod limb;
use self::limb::Limb;

pub use self::addsub::{add, add_1, add_n, sub, sub_1, sub_n};
pub use self::bit::{and_n, not, or_n, shl, shr, xor_n};
pub use self::div::{div_3by2, divrem, divrem_1};
pub use self::mul::{addmul_1, mul, mul_1, submul_1};

/**
 * Called when a divide by zero occurs.
 */
#[cold]
#[inline(never)]
pub fn divide_by_zero() -> ! {
    panic!("divide by zero")
}

/**
 * Checks that all limbs in `np` are zero
 */
pub fn is_zero(np: &[Limb]) -> bool {
    np.iter().all(|&l| l == 0)
}

/**
 * Compares `xp` and `yp`, which must be the same length, returning whether
 * `xp` is less than, equal to or greater than `yp`
 */
pub fn cmp(xp: &[Limb], yp: &[Limb]) -> Ordering {
    debug_assert!(xp.len() == yp.len());

    for (x, y) in xp.iter().rev().zip(yp.iter().rev()) {
        if x != y {
            return x.cmp(y);
        }
    }

    Ordering::Equal
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ll::limb::Limb;

    macro_rules! limbs {
        ($($d:expr),*) => ([$(Limb($d)),*]);
    }

    #[test]
    fn test_add() {
        let mut c = limbs!(1);
        assert_eq!(add_n(&mut c, &limbs!(2)), 0);
        assert_eq!(c, [3]);

        let mut c = limbs!(!0);
        assert_eq!(add_n(&mut c, &limbs!(5)), 1);
        assert_eq!(c, [4]);

        let mut c = limbs!(!0, 0);
        assert_eq!(add(&mut c, &limbs!(5)), 0);
        assert_eq!(c, [4, 1]);

        let mut c = limbs!(!0, !9);
        assert_eq!(add_n(&mut c, &limbs!(5, 10)), 1);
        assert_eq!(c, [4, 1]);
    }

    #[test]
    fn test_add_1() {
        let mut c = limbs!(!0, !0, 7);
        assert_eq!(add_1(&mut c, Limb(1)), 0);
        assert_eq!(c, [0, 0, 8]);

        let mut c = limbs!(!0, !0);
        assert_eq!(add_1(&mut c, Limb(1)), 1);
        assert_eq!(c, [0, 0]);
    }

    #[test]
    fn test_sub() {
        let mut c = limbs!(2);
        assert_eq!(sub_n(&mut c, &limbs!(1)), 0);
        assert_eq!(c, [1]);

        let mut c = limbs!(0, 2);
        assert_eq!(sub(&mut c, &limbs!(1)), 0);
        assert_eq!(c, [!0, 1]);

        let mut c = limbs!(0, 2);
        assert_eq!(sub_n(&mut c, &limbs!(2, 1)), 0);
        assert_eq!(c, [!1, 0]);

        let mut c = limbs!(0, 1);
        assert_eq!(sub_n(&mut c, &limbs!(1, 1)), 1);
        assert_eq!(c, [!0, !0]);
    }

    #[test]
    fn test_sub_1() {
        let mut c = limbs!(0, 0, 1);
        assert_eq!(sub_1(&mut c, Limb(1)), 0);
        assert_eq!(c, [!0, !0, 0]);

        let mut c = limbs!(0);
        assert_eq!(sub_1(&mut c, Limb(1)), 1);
        assert_eq!(c, [!0]);
    }

    #[test]
    fn test_cmp() {
        assert_eq!(cmp(&limbs!(1, 2), &limbs!(2, 1)), Ordering::Greater);
        assert_eq!(cmp(&limbs!(2, 1), &limbs!(1, 2)), Ordering::Less);
        assert_eq!(cmp(&limbs!(7, 7), &limbs!(7, 7)), Ordering::Equal);
        assert_eq!(cmp(&[], &[]), Ordering::Equal);
        assert!(is_zero(&limbs!(0, 0, 0)));
        assert!(!is_zero(&limbs!(0, 1, 0)));
    }

    #[test]
    fn test_limb_ops() {
        assert_eq!(Limb(!0) + Limb(2), Limb(1));
        assert_eq!(Limb(5) + true, Limb(6));
        assert_eq!(Limb(!0) + true, Limb(0));
        assert_eq!(Limb(5) + false, Limb(5));
        assert_eq!(Limb(0) - 1, Limb(!0));
        assert_eq!(Limb(7) - 2, Limb(5));
    }

    #[test]
    fn test_mul_hilo() {
        let r = Limb(10).mul_hilo(Limb(20));
        assert_eq!((Limb(0), Limb(200)), r);

        let r = Limb(!1).mul_hilo(Limb(2));
        assert_eq!((Limb(1), Limb(!3)), r);

        let r = Limb(2).mul_hilo(Limb(!1));
        assert_eq!((Limb(1), Limb(!3)), r);

        let r = Limb(!0).mul_hilo(Limb(!0));
        assert_eq!((Limb(!1), Limb(1)), r);

        let r = Limb(!0).mul_add_hilo(Limb(!0), Limb(!0), Limb(!0));
        assert_eq!((Limb(!0), Limb(!0)), r);
    }

    #[test]
    fn test_mul_1() {
        let mut b = limbs!(10);
        assert_eq!(mul_1(&mut b, Limb(20)), 0);
        assert_eq!(b, [200]);

        let mut b = limbs!(!1);
        assert_eq!(mul_1(&mut b, Limb(2)), 1);
        assert_eq!(b, [!3]);

        let mut b = limbs!(10, 10);
        assert_eq!(mul_1(&mut b, Limb(2)), 0);
        assert_eq!(b, [20, 20]);
    }

    #[test]
    fn test_submul_1() {
        let mut w = limbs!(0, 0, 1);
        assert_eq!(submul_1(&mut w, &limbs!(!0, !0, 0), Limb(1)), 0);
        assert_eq!(w, [1, 0, 0]);

        let mut w = limbs!(5);
        assert_eq!(submul_1(&mut w, &limbs!(3), Limb(2)), 1);
        assert_eq!(w, [!0]);
    }

    #[test]
    fn test_mul() {
        let mut c = limbs!(0, 0);
        mul(&mut c, &limbs!(2), &limbs!(2));
        assert_eq!(c, [4, 0]);

        let mut c = limbs!(0, 0);
        mul(&mut c, &limbs!(!1), &limbs!(2));
        assert_eq!(c, [!3, 1]);

        let mut c = limbs!(0, 0, 0);
        mul(&mut c, &limbs!(!1, 1), &limbs!(4));
        assert_eq!(c, [!7, 7, 0]);

        let mut c = limbs!(9, 9, 9, 9);
        mul(&mut c, &limbs!(!1, 1), &limbs!(0, 1));
        assert_eq!(c, [0, !1, 1, 0]);
    }

    #[test]
    fn test_shl_shr() {
        let mut w = limbs!(0x8000_0001, 0x8000_0000);
        assert_eq!(shl(&mut w, 1), 1);
        assert_eq!(w, [2, 1]);

        assert_eq!(shr(&mut w, 1), 0);
        assert_eq!(w, [0x8000_0001, 0]);

        let mut w = limbs!(0xF, 0);
        assert_eq!(shr(&mut w, 4), 0xF000_0000);
        assert_eq!(w, [0, 0]);
    }

    #[test]
    fn test_bitops() {
        let mut w = limbs!(0b1100, !0);
        and_n(&mut w, &limbs!(0b1010, 0));
        assert_eq!(w, [0b1000, 0]);

        let mut w = limbs!(0b1100, 0);
        or_n(&mut w, &limbs!(0b1010, 1));
        assert_eq!(w, [0b1110, 1]);

        let mut w = limbs!(0b1100, 1);
        xor_n(&mut w, &limbs!(0b1010, 1));
        assert_eq!(w, [0b0110, 0]);

        not(&mut w);
        assert_eq!(w, [!0b0110, !0]);
    }

    #[test]
    fn test_divrem_1() {
        let mut b = limbs!(2);
        assert_eq!(divrem_1(&mut b, Limb(2)), 0);
        assert_eq!(b, [1]);

        let mut b = limbs!(7);
        assert_eq!(divrem_1(&mut b, Limb(1)), 0);
        assert_eq!(b, [7]);

        let mut b = limbs!(7);
        assert_eq!(divrem_1(&mut b, Limb(2)), 1);
        assert_eq!(b, [3]);

        let mut b = limbs!(0, 1);
        assert_eq!(divrem_1(&mut b, Limb(4)), 0);
        assert_eq!(b, [1 << (Limb::BITS - 2), 0]);

        let mut b = limbs!(5, 3);
        assert_eq!(divrem_1(&mut b, Limb(2)), 1);
        assert_eq!(b, [(1 << (Limb::BITS - 1)) | 2, 1]);
    }

    #[test]
    fn test_div_3by2() {
        // (1, 0, 0) / (0x8000_0000, 0) == 2
        assert_eq!(div_3by2(Limb(1), Limb(0), Limb(0), Limb(0x8000_0000), Limb(0)), 2);
        // A top limb equal to the divisor's top limb clamps the estimate.
        assert_eq!(div_3by2(Limb(0x8000_0000), Limb(0), Limb(0), Limb(0x8000_0000), Limb(1)),
                   !0);
        // The low divisor limb pulls the first estimate down once.
        assert_eq!(div_3by2(Limb(0x7FFF_FFFF), Limb(!0), Limb(0), Limb(0x8000_0000), Limb(!0)),
                   !1);
    }

    #[test]
    fn test_divrem() {
        let mut q = limbs!(0, 0);
        let mut r = limbs!(0, 0);
        divrem(&mut q, &mut r, &limbs!(4, 3, 4), &limbs!(1, !0));
        assert_eq!(q, [4, 0]);
        assert_eq!(r, [0, 7]);

        let mut q = limbs!(0, 0, 0, 0);
        let mut r = limbs!(0, 0);
        divrem(&mut q, &mut r, &limbs!(0, 4, 3, 4, 2), &limbs!(0, !1));
        assert_eq!(q, [19, 8, 2, 0]);
        assert_eq!(r, [0, 42]);

        let mut q = limbs!(0, 0, 0, 0);
        let mut r = limbs!(0, 0);
        divrem(&mut q, &mut r, &limbs!(8, 1, 3, 4, 1), &limbs!(0, 1));
        assert_eq!(q, [1, 3, 4, 1]);
        assert_eq!(r, [8, 0]);

        {
            let mut q = [Limb(0); 9];
            let mut r = [Limb(0); 4];

            // (B^4 - 1)(B^8 - 1)
            let a = limbs!(1, 0, 0, 0, !0, !0, !0, !0, !1, !0, !0, !0);
            // (B^4 - 1)
            let b = limbs!(!0, !0, !0, !0);

            divrem(&mut q, &mut r, &a, &b);

            // q = (B^8 - 1)
            assert_eq!(q, [!0, !0, !0, !0, !0, !0, !0, !0, 0]);
            assert_eq!(r, [0, 0, 0, 0]);
        }
    }
}
