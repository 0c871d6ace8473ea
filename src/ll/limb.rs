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
use std::fmt;
use std::ops::{Add, BitAnd, BitOr, BitXor, Not, Shl, Shr, Sub};

pub type BaseInt = u32;
pub type DoubleBaseInt = u64;

/**
 * Helper newtype for operations.
 *
 * A "Limb" is a single digit in base 2^32.
 */
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Limb(pub BaseInt);

impl Limb {
    pub const BITS: usize = 32;

    pub const MAX: Limb = Limb(!0);

    /**
     * Performs `self + other`, returning the result and whether or not the addition overflowed
     */
    #[inline(always)]
    pub fn add_overflow(self, other: Limb) -> (Limb, bool) {
        let (val, c) = self.0.overflowing_add(other.0);
        (Limb(val), c)
    }

    /**
     * Performs `self - other`, returning the result and whether or not the subtraction overflowed
     */
    #[inline(always)]
    pub fn sub_overflow(self, other: Limb) -> (Limb, bool) {
        let (val, c) = self.0.overflowing_sub(other.0);
        (Limb(val), c)
    }

    /**
     * Performs `self + other + carry`, returning the sum and the carry out of the limb.
     */
    #[inline(always)]
    pub fn add_carry(self, other: Limb, carry: bool) -> (Limb, bool) {
        let (s, c1) = self.add_overflow(other);
        let (s, c2) = s.add_overflow(Limb(carry as BaseInt));
        (s, c1 || c2)
    }

    /**
     * Performs `self - other - borrow`, returning the difference and the borrow out of the limb.
     */
    #[inline(always)]
    pub fn sub_borrow(self, other: Limb, borrow: bool) -> (Limb, bool) {
        let (d, b1) = self.sub_overflow(other);
        let (d, b2) = d.sub_overflow(Limb(borrow as BaseInt));
        (d, b1 || b2)
    }

    /**
     * Performs `self * other` returning the two-limb result as (high, low).
     */
    #[inline(always)]
    pub fn mul_hilo(self, other: Limb) -> (Limb, Limb) {
        split(self.0 as DoubleBaseInt * other.0 as DoubleBaseInt)
    }

    /**
     * Performs `self * other + a + b` returning the two-limb result as (high, low).
     *
     * The sum can never overflow two limbs: (B-1)^2 + 2(B-1) = B^2 - 1.
     */
    #[inline(always)]
    pub fn mul_add_hilo(self, other: Limb, a: Limb, b: Limb) -> (Limb, Limb) {
        split(self.0 as DoubleBaseInt * other.0 as DoubleBaseInt
              + a.0 as DoubleBaseInt
              + b.0 as DoubleBaseInt)
    }

    /**
     * Returns whether or not the highest bit in the limb is set.
     *
     * Division algorithms often require the highest limb of the divisor
     * to be `d >= BASE/2`.
     */
    #[inline(always)]
    pub fn high_bit_set(self) -> bool {
        (self.0 >> (Limb::BITS - 1)) != 0
    }

    /**
     * Returns the number of leading zeros in the limb
     */
    #[inline(always)]
    pub fn leading_zeros(self) -> u32 {
        self.0.leading_zeros()
    }

    /**
     * Returns the number of trailing zeros in the limb
     */
    #[inline(always)]
    pub fn trailing_zeros(self) -> u32 {
        self.0.trailing_zeros()
    }
}

/// Joins `(high, low)` into a double-width integer.
#[inline(always)]
pub fn join(high: Limb, low: Limb) -> DoubleBaseInt {
    ((high.0 as DoubleBaseInt) << Limb::BITS) | low.0 as DoubleBaseInt
}

/// Splits a double-width integer into `(high, low)`.
#[inline(always)]
pub fn split(n: DoubleBaseInt) -> (Limb, Limb) {
    (Limb((n >> Limb::BITS) as BaseInt), Limb(n as BaseInt))
}

/**
 * Divides the two-limb numerator `(nh, nl)` by `d`, returning a single-limb
 * quotient, Q, and remainder, R, as (Q, R).
 *
 * In order to ensure a single-limb result, `nh` must be less than `d`.
 */
#[inline(always)]
pub fn div(nh: Limb, nl: Limb, d: Limb) -> (Limb, Limb) {
    debug_assert!(d != 0);
    debug_assert!(nh < d);

    let n = join(nh, nl);
    let d = d.0 as DoubleBaseInt;
    (Limb((n / d) as BaseInt), Limb((n % d) as BaseInt))
}

impl Add<Limb> for Limb {
    type Output = Limb;

    #[inline(always)]
    fn add(self, other: Limb) -> Limb {
        Limb(self.0.wrapping_add(other.0))
    }
}

impl Add<bool> for Limb {
    type Output = Limb;

    #[inline(always)]
    fn add(self, other: bool) -> Limb {
        Limb(self.0.wrapping_add(other as BaseInt))
    }
}

impl Sub<BaseInt> for Limb {
    type Output = Limb;

    #[inline(always)]
    fn sub(self, other: BaseInt) -> Limb {
        Limb(self.0.wrapping_sub(other))
    }
}

impl Shl<u32> for Limb {
    type Output = Limb;

    #[inline(always)]
    fn shl(self, cnt: u32) -> Limb {
        Limb(self.0 << cnt)
    }
}

impl Shr<u32> for Limb {
    type Output = Limb;

    #[inline(always)]
    fn shr(self, cnt: u32) -> Limb {
        Limb(self.0 >> cnt)
    }
}

impl Not for Limb {
    type Output = Limb;

    #[inline(always)]
    fn not(self) -> Limb {
        Limb(!self.0)
    }
}

impl BitAnd<Limb> for Limb {
    type Output = Limb;

    #[inline(always)]
    fn bitand(self, other: Limb) -> Limb {
        Limb(self.0 & other.0)
    }
}

impl BitOr<Limb> for Limb {
    type Output = Limb;

    #[inline(always)]
    fn bitor(self, other: Limb) -> Limb {
        Limb(self.0 | other.0)
    }
}

impl BitXor<Limb> for Limb {
    type Output = Limb;

    #[inline(always)]
    fn bitxor(self, other: Limb) -> Limb {
        Limb(self.0 ^ other.0)
    }
}

impl PartialEq<BaseInt> for Limb {
    #[inline(always)]
    fn eq(&self, other: &BaseInt) -> bool {
        self.0 == *other
    }
}

impl PartialOrd<BaseInt> for Limb {
    #[inline(always)]
    fn partial_cmp(&self, other: &BaseInt) -> Option<Ordering> {
        self.0.partial_cmp(other)
    }
}

impl fmt::Debug for Limb {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}
