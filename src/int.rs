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

use std::cmp::{self, Ordering};
use std::convert::TryFrom;
use std::error::Error;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

use num_traits::{CheckedDiv, CheckedRem, FromPrimitive, One, ToPrimitive, Zero};
use rand::Rng;

use crate::ll;
use crate::ll::limb::{BaseInt, Limb};
use crate::mem::LimbVec;
use crate::traits::DivRem;

/**
 * An arbitrary-precision signed integer.
 *
 * The value is kept in sign-magnitude form: `limbs` holds the magnitude, least-significant
 * limb first, and `negative` the sign. The magnitude never has a zero limb at the top, and
 * zero is always the empty magnitude with `negative` unset, so every value has exactly one
 * representation.
 *
 * Cloning an `Int` is cheap; clones share their limbs until one of them is modified.
 *
 * Division truncates toward zero and the remainder takes the sign of the dividend, the
 * same as Rust's primitive integers.
 */
#[derive(Clone, Default)]
pub struct Int {
    limbs: LimbVec,
    negative: bool,
}

/// The error returned by the fallible division methods when the divisor is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivideByZero;

impl fmt::Display for DivideByZero {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("divide by zero")
    }
}

impl Error for DivideByZero {}

impl Int {
    pub fn zero() -> Int {
        Int {
            limbs: LimbVec::new(),
            negative: false,
        }
    }

    pub fn one() -> Int {
        Int::from_single_limb(Limb(1))
    }

    /// Creates a new Int from the given Limb.
    pub fn from_single_limb(limb: Limb) -> Int {
        let mut i = Int::zero();
        if limb != 0 {
            i.limbs.push(limb);
        }
        i
    }

    fn from_magnitude(mut mag: u128, negative: bool) -> Int {
        let mut i = Int::zero();
        while mag != 0 {
            i.limbs.push(Limb(mag as BaseInt));
            mag >>= Limb::BITS;
        }
        i.negative = negative && !i.limbs.is_empty();
        i
    }

    fn abs_size(&self) -> usize {
        self.limbs.len()
    }

    /**
     * Returns the sign of the Int as either -1, 0 or 1 for self being negative, zero
     * or positive, respectively.
     */
    #[inline]
    pub fn sign(&self) -> i32 {
        if self.limbs.is_empty() {
            0
        } else if self.negative {
            -1
        } else {
            1
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Consumes self and returns the absolute value
    #[inline]
    pub fn abs(mut self) -> Int {
        self.negative = false;
        self
    }

    /**
     * Returns the least-significant limb of self.
     */
    #[inline]
    pub fn to_single_limb(&self) -> Limb {
        if self.is_zero() {
            Limb(0)
        } else {
            self.limbs[0]
        }
    }

    /**
     * Compares the absolute value of self to the absolute value of other,
     * returning an Ordering with the result.
     */
    pub fn abs_cmp(&self, other: &Int) -> Ordering {
        match self.abs_size().cmp(&other.abs_size()) {
            Ordering::Equal => ll::cmp(&self.limbs, &other.limbs),
            ord => ord,
        }
    }

    /**
     * Returns whether self and other have the same absolute value
     */
    pub fn abs_eq(&self, other: &Int) -> bool {
        self.abs_cmp(other) == Ordering::Equal
    }

    /**
     * Flips the sign of self in place. Zero stays zero.
     */
    #[inline]
    pub fn negate(&mut self) {
        if !self.is_zero() {
            self.negative = !self.negative;
        }
    }

    /**
     * Releases any spare capacity held by the limb storage.
     */
    pub fn shrink_to_fit(&mut self) {
        self.limbs.shrink_to_fit();
    }

    /// Returns whether or not this number is even.
    #[inline]
    pub fn is_even(&self) -> bool {
        self.to_single_limb().0 & 1 == 0
    }

    /**
     * Returns the number of trailing zero bits in this number.
     *
     * Returns 0 for zero.
     */
    pub fn trailing_zeros(&self) -> u32 {
        match self.limbs.iter().position(|&l| l != 0) {
            Some(i) => (i * Limb::BITS) as u32 + self.limbs[i].trailing_zeros(),
            None => 0,
        }
    }

    /**
     * Returns the number of ones in the binary representation of this number. Negative
     * numbers have an infinite number of ones, so `usize::MAX` is returned for them.
     */
    pub fn count_ones(&self) -> usize {
        if self.negative {
            return usize::MAX;
        }
        let bytes: Vec<u8> = self
            .limbs
            .iter()
            .flat_map(|l| l.0.to_le_bytes())
            .collect();
        hamming::weight(&bytes) as usize
    }

    /**
     * Returns the number of bits required to represent (the absolute value of) this
     * number. Zero takes one bit.
     */
    pub fn bit_length(&self) -> u32 {
        if self.is_zero() {
            return 1;
        }
        let top = self.limbs.back();
        ((self.abs_size() * Limb::BITS) as u32) - top.leading_zeros()
    }

    /**
     * Returns the value of the `bit`th bit in this number, as if it were represented in
     * two's complement with infinite sign extension.
     */
    pub fn bit(&self, bit: u32) -> bool {
        let word = (bit as usize) / Limb::BITS;
        let offset = (bit as usize % Limb::BITS) as u32;
        if word >= self.abs_size() {
            return self.negative;
        }

        let b = (self.limbs[word] >> offset).0 & 1 == 1;
        if self.negative {
            // Below the lowest set bit, -x and x agree; above it every bit is flipped.
            b ^ (bit > self.trailing_zeros())
        } else {
            b
        }
    }

    /**
     * Divides self by other, returning the quotient and the remainder. The quotient is
     * truncated toward zero and the remainder has the sign of self.
     */
    pub fn divmod(&self, other: &Int) -> Result<(Int, Int), DivideByZero> {
        if other.is_zero() {
            return Err(DivideByZero);
        }
        let q = self.quotient(other);
        let r = self - &(&q * other);
        Ok((q, r))
    }

    /// Like `/`, but reports a zero divisor instead of panicking.
    pub fn try_div(&self, other: &Int) -> Result<Int, DivideByZero> {
        if other.is_zero() {
            return Err(DivideByZero);
        }
        Ok(self.quotient(other))
    }

    /// Like `%`, but reports a zero divisor instead of panicking.
    pub fn try_rem(&self, other: &Int) -> Result<Int, DivideByZero> {
        if other.is_zero() {
            return Err(DivideByZero);
        }
        Ok(self.remainder(other))
    }

    /// Adds one to self, returning self.
    pub fn inc(&mut self) -> &mut Int {
        *self += &Int::one();
        self
    }

    /// Subtracts one from self, returning self.
    pub fn dec(&mut self) -> &mut Int {
        *self -= &Int::one();
        self
    }

    /// Adds one to self, returning the value self had before.
    pub fn post_inc(&mut self) -> Int {
        let old = self.clone();
        self.inc();
        old
    }

    /// Subtracts one from self, returning the value self had before.
    pub fn post_dec(&mut self) -> Int {
        let old = self.clone();
        self.dec();
        old
    }

    /**
     * Trims zero limbs off the top of the magnitude and clears the sign of zero.
     */
    fn normalize(&mut self) {
        while !self.limbs.is_empty() && self.limbs.back() == 0 {
            self.limbs.pop();
        }
        if self.limbs.is_empty() {
            self.negative = false;
        }
    }

    /**
     * Make sure the Int is "well-formed", i.e. that the top limb is non-zero and that
     * zero is never negative.
     */
    fn well_formed(&self) -> bool {
        if self.limbs.is_empty() {
            return !self.negative;
        }
        self.limbs.back() != 0
    }

    /**
     * Adds the magnitude of other to the magnitude of self.
     */
    fn add_abs(&mut self, other: &Int) {
        let size = cmp::max(self.abs_size(), other.abs_size());
        self.limbs.resize(size);
        let carry = ll::add(&mut self.limbs, &other.limbs);
        if carry != 0 {
            self.limbs.push(carry);
        }
    }

    /**
     * Subtracts the magnitude of other from the magnitude of self, flipping the sign of
     * self if the magnitude of other was the larger.
     */
    fn sub_abs(&mut self, other: &Int) {
        match self.abs_cmp(other) {
            Ordering::Equal => {
                *self = Int::zero();
            }
            Ordering::Greater => {
                let borrow = ll::sub(&mut self.limbs, &other.limbs);
                debug_assert!(borrow == 0);
                self.normalize();
            }
            Ordering::Less => {
                let mut diff = other.limbs.clone();
                let borrow = ll::sub(&mut diff, &self.limbs);
                debug_assert!(borrow == 0);
                self.limbs.swap(&mut diff);
                self.negative = !self.negative;
                self.normalize();
            }
        }
    }

    /**
     * Computes `self / other`, truncated toward zero. `other` must not be zero.
     */
    fn quotient(&self, other: &Int) -> Int {
        debug_assert!(!other.is_zero());

        if self.abs_cmp(other) == Ordering::Less {
            return Int::zero();
        }

        let ns = self.abs_size();
        let ds = other.abs_size();

        let limbs = if ds == 1 {
            let mut q = self.limbs.clone();
            ll::divrem_1(&mut q, other.limbs[0]);
            q
        } else {
            let mut q = LimbVec::with_len(ns - ds + 1);
            let mut r = vec![Limb(0); ds];
            ll::divrem(&mut q, &mut r, &self.limbs, &other.limbs);
            q
        };

        let mut q = Int {
            limbs,
            negative: self.negative != other.negative,
        };
        q.normalize();
        q
    }

    /**
     * Computes `self % other` as `self - (self / other) * other`. `other` must not be zero.
     */
    fn remainder(&self, other: &Int) -> Int {
        let q = self.quotient(other);
        self - &(&q * other)
    }

    /**
     * Converts a negative magnitude into its two's complement form over the current
     * number of limbs. The sign flag is left as it is.
     */
    fn to_twos_complement(&mut self) {
        if self.negative {
            ll::not(&mut self.limbs);
            let carry = ll::add_1(&mut self.limbs, Limb(1));
            debug_assert!(carry == 0);
        }
    }

    /**
     * The inverse of `to_twos_complement`, followed by normalization.
     */
    fn from_twos_complement(&mut self) {
        if self.negative {
            let borrow = ll::sub_1(&mut self.limbs, Limb(1));
            debug_assert!(borrow == 0);
            ll::not(&mut self.limbs);
        }
        self.normalize();
    }

    /**
     * Applies a bitwise operation to self and other as infinite-width two's complement
     * numbers.
     */
    fn bitop(&mut self, other: &Int, op: BitOp) {
        // One extra limb so a negative result that needs one more limb than either operand
        // (e.g. -0x80000000 & -0xFFFFFFFF) doesn't wrap to zero.
        let size = cmp::max(self.abs_size(), other.abs_size()) + 1;

        let mut other = other.clone();
        self.limbs.resize(size);
        other.limbs.resize(size);

        self.to_twos_complement();
        other.to_twos_complement();

        op.apply(&mut self.limbs, &other.limbs);
        self.negative = op.sign(self.negative, other.negative);

        self.from_twos_complement();
    }
}

#[derive(Copy, Clone)]
enum BitOp {
    And,
    Or,
    Xor,
}

impl BitOp {
    fn apply(self, wp: &mut [Limb], yp: &[Limb]) {
        match self {
            BitOp::And => ll::and_n(wp, yp),
            BitOp::Or => ll::or_n(wp, yp),
            BitOp::Xor => ll::xor_n(wp, yp),
        }
    }

    fn sign(self, x: bool, y: bool) -> bool {
        match self {
            BitOp::And => x & y,
            BitOp::Or => x | y,
            BitOp::Xor => x ^ y,
        }
    }
}

impl PartialEq<Int> for Int {
    #[inline]
    fn eq(&self, other: &Int) -> bool {
        debug_assert!(self.well_formed());
        debug_assert!(other.well_formed());
        self.negative == other.negative && self.limbs.as_slice() == other.limbs.as_slice()
    }
}

impl Eq for Int {}

impl Ord for Int {
    #[inline]
    fn cmp(&self, other: &Int) -> Ordering {
        debug_assert!(self.well_formed());
        debug_assert!(other.well_formed());
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.abs_cmp(other),
            (true, true) => other.abs_cmp(self),
        }
    }
}

impl PartialOrd<Int> for Int {
    #[inline]
    fn partial_cmp(&self, other: &Int) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for Int {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        debug_assert!(self.well_formed());
        self.negative.hash(state);
        self.limbs.as_slice().hash(state);
    }
}

impl<'a> AddAssign<&'a Int> for Int {
    fn add_assign(&mut self, other: &'a Int) {
        debug_assert!(self.well_formed());
        debug_assert!(other.well_formed());

        if other.is_zero() {
            return;
        }
        if self.is_zero() {
            self.clone_from(other);
            return;
        }

        if self.negative == other.negative {
            self.add_abs(other);
        } else {
            self.sub_abs(other);
        }
    }
}

impl<'a, 'b> Add<&'a Int> for &'b Int {
    type Output = Int;

    #[inline]
    fn add(self, other: &'a Int) -> Int {
        // Start from the longer operand, so the sum has room without reallocating.
        if self.abs_size() >= other.abs_size() {
            self.clone() + other
        } else {
            other.clone() + self
        }
    }
}

impl<'a> SubAssign<&'a Int> for Int {
    fn sub_assign(&mut self, other: &'a Int) {
        debug_assert!(self.well_formed());
        debug_assert!(other.well_formed());

        if other.is_zero() {
            return;
        }
        if self.is_zero() {
            self.clone_from(other);
            self.negate();
            return;
        }

        if self.negative == other.negative {
            self.sub_abs(other);
        } else {
            self.add_abs(other);
        }
    }
}

impl<'a, 'b> Sub<&'a Int> for &'b Int {
    type Output = Int;

    #[inline]
    fn sub(self, other: &'a Int) -> Int {
        self.clone() - other
    }
}

impl<'a, 'b> Mul<&'a Int> for &'b Int {
    type Output = Int;

    fn mul(self, other: &'a Int) -> Int {
        debug_assert!(self.well_formed());
        debug_assert!(other.well_formed());

        if self.is_zero() || other.is_zero() {
            return Int::zero();
        }

        let mut limbs = LimbVec::with_len(self.abs_size() + other.abs_size());
        ll::mul(&mut limbs, &self.limbs, &other.limbs);

        let mut ret = Int {
            limbs,
            negative: self.negative != other.negative,
        };
        ret.normalize();
        ret
    }
}

impl<'a> MulAssign<&'a Int> for Int {
    #[inline]
    fn mul_assign(&mut self, other: &'a Int) {
        *self = &*self * other;
    }
}

impl<'a, 'b> Div<&'a Int> for &'b Int {
    type Output = Int;

    #[inline]
    fn div(self, other: &'a Int) -> Int {
        if other.is_zero() {
            ll::divide_by_zero();
        }
        self.quotient(other)
    }
}

impl<'a> DivAssign<&'a Int> for Int {
    #[inline]
    fn div_assign(&mut self, other: &'a Int) {
        *self = &*self / other;
    }
}

impl<'a, 'b> Rem<&'a Int> for &'b Int {
    type Output = Int;

    #[inline]
    fn rem(self, other: &'a Int) -> Int {
        if other.is_zero() {
            ll::divide_by_zero();
        }
        self.remainder(other)
    }
}

impl<'a> RemAssign<&'a Int> for Int {
    #[inline]
    fn rem_assign(&mut self, other: &'a Int) {
        *self = &*self % other;
    }
}

impl<'a, 'b> DivRem<&'a Int> for &'b Int {
    type Output = (Int, Int);

    #[inline]
    fn divrem(self, other: &'a Int) -> (Int, Int) {
        match self.divmod(other) {
            Ok(qr) => qr,
            Err(DivideByZero) => ll::divide_by_zero(),
        }
    }
}

impl<'a> DivRem<&'a Int> for Int {
    type Output = (Int, Int);

    #[inline]
    fn divrem(self, other: &'a Int) -> (Int, Int) {
        (&self).divrem(other)
    }
}

impl DivRem<Int> for Int {
    type Output = (Int, Int);

    #[inline]
    fn divrem(self, other: Int) -> (Int, Int) {
        (&self).divrem(&other)
    }
}

macro_rules! impl_bitop {
    ($tr:ident, $method:ident, $assign_tr:ident, $assign_method:ident, $op:expr) => {
        impl<'a> $assign_tr<&'a Int> for Int {
            #[inline]
            fn $assign_method(&mut self, other: &'a Int) {
                debug_assert!(self.well_formed());
                debug_assert!(other.well_formed());
                self.bitop(other, $op);
            }
        }

        impl<'a, 'b> $tr<&'a Int> for &'b Int {
            type Output = Int;

            #[inline]
            fn $method(self, other: &'a Int) -> Int {
                let mut ret = self.clone();
                ret.bitop(other, $op);
                ret
            }
        }
    };
}

impl_bitop!(BitAnd, bitand, BitAndAssign, bitand_assign, BitOp::And);
impl_bitop!(BitOr, bitor, BitOrAssign, bitor_assign, BitOp::Or);
impl_bitop!(BitXor, bitxor, BitXorAssign, bitxor_assign, BitOp::Xor);

// Builds the by-value and mixed forms of a binary operator out of its `&Int op &Int` and
// `Int op= &Int` forms.
macro_rules! forward_binop {
    ($tr:ident, $method:ident, $assign_tr:ident, $assign_method:ident) => {
        impl<'a> $tr<&'a Int> for Int {
            type Output = Int;

            #[inline]
            fn $method(mut self, other: &'a Int) -> Int {
                $assign_tr::$assign_method(&mut self, other);
                self
            }
        }

        impl<'a> $tr<Int> for &'a Int {
            type Output = Int;

            #[inline]
            fn $method(self, other: Int) -> Int {
                $tr::$method(self, &other)
            }
        }

        impl $tr<Int> for Int {
            type Output = Int;

            #[inline]
            fn $method(mut self, other: Int) -> Int {
                $assign_tr::$assign_method(&mut self, &other);
                self
            }
        }

        impl $assign_tr<Int> for Int {
            #[inline]
            fn $assign_method(&mut self, other: Int) {
                $assign_tr::$assign_method(self, &other)
            }
        }
    };
}

forward_binop!(Add, add, AddAssign, add_assign);
forward_binop!(Sub, sub, SubAssign, sub_assign);
forward_binop!(Mul, mul, MulAssign, mul_assign);
forward_binop!(Div, div, DivAssign, div_assign);
forward_binop!(Rem, rem, RemAssign, rem_assign);
forward_binop!(BitAnd, bitand, BitAndAssign, bitand_assign);
forward_binop!(BitOr, bitor, BitOrAssign, bitor_assign);
forward_binop!(BitXor, bitxor, BitXorAssign, bitxor_assign);

impl Neg for Int {
    type Output = Int;

    #[inline]
    fn neg(mut self) -> Int {
        debug_assert!(self.well_formed());
        self.negate();
        self
    }
}

impl<'a> Neg for &'a Int {
    type Output = Int;

    #[inline]
    fn neg(self) -> Int {
        -self.clone()
    }
}

impl Not for Int {
    type Output = Int;

    /// Returns `-self - 1`, the bitwise complement of self in two's complement.
    fn not(mut self) -> Int {
        debug_assert!(self.well_formed());

        let size = self.abs_size() + 1;
        self.limbs.resize(size);
        self.to_twos_complement();
        ll::not(&mut self.limbs);
        self.negative = !self.negative;
        self.from_twos_complement();
        self
    }
}

impl<'a> Not for &'a Int {
    type Output = Int;

    #[inline]
    fn not(self) -> Int {
        !self.clone()
    }
}

impl ShlAssign<usize> for Int {
    fn shl_assign(&mut self, cnt: usize) {
        debug_assert!(self.well_formed());
        if self.is_zero() || cnt == 0 {
            return;
        }

        let limb_shift = cnt / Limb::BITS;
        let bit_shift = (cnt % Limb::BITS) as u32;

        if limb_shift > 0 {
            let size = self.abs_size();
            self.limbs.resize(size + limb_shift);
            let limbs = &mut self.limbs[..];
            limbs.copy_within(0..size, limb_shift);
            for l in &mut limbs[..limb_shift] {
                *l = Limb(0);
            }
        }

        if bit_shift > 0 {
            let carry = ll::shl(&mut self.limbs, bit_shift);
            if carry != 0 {
                self.limbs.push(carry);
            }
        }
    }
}

impl ShrAssign<usize> for Int {
    fn shr_assign(&mut self, cnt: usize) {
        debug_assert!(self.well_formed());
        if self.is_zero() || cnt == 0 {
            return;
        }

        let limb_shift = cnt / Limb::BITS;
        let bit_shift = (cnt % Limb::BITS) as u32;
        let size = self.abs_size();

        if limb_shift >= size {
            *self = if self.negative {
                -Int::one()
            } else {
                Int::zero()
            };
            return;
        }

        // Shifting a negative number rounds toward negative infinity, so if any of the
        // bits falling off are set the magnitude has to go up by one afterwards.
        let round_down = self.negative
            && (!ll::is_zero(&self.limbs[..limb_shift])
                || (bit_shift > 0
                    && self.limbs[limb_shift] << (Limb::BITS as u32 - bit_shift) != 0));

        if limb_shift > 0 {
            let limbs = &mut self.limbs[..];
            limbs.copy_within(limb_shift.., 0);
            self.limbs.truncate(size - limb_shift);
        }

        if bit_shift > 0 {
            ll::shr(&mut self.limbs, bit_shift);
        }
        self.normalize();

        if round_down {
            self.dec();
        }
    }
}

impl Shl<usize> for Int {
    type Output = Int;

    #[inline]
    fn shl(mut self, cnt: usize) -> Int {
        self <<= cnt;
        self
    }
}

impl<'a> Shl<usize> for &'a Int {
    type Output = Int;

    #[inline]
    fn shl(self, cnt: usize) -> Int {
        self.clone() << cnt
    }
}

impl Shr<usize> for Int {
    type Output = Int;

    #[inline]
    fn shr(mut self, cnt: usize) -> Int {
        self >>= cnt;
        self
    }
}

impl<'a> Shr<usize> for &'a Int {
    type Output = Int;

    #[inline]
    fn shr(self, cnt: usize) -> Int {
        self.clone() >> cnt
    }
}

macro_rules! impl_from_prim {
    (signed $($t:ty),*) => {
        $(impl From<$t> for Int {
            #[inline]
            fn from(val: $t) -> Int {
                Int::from_magnitude((val as i128).unsigned_abs(), val < 0)
            }
        })*
    };
    (unsigned $($t:ty),*) => {
        $(impl From<$t> for Int {
            #[inline]
            fn from(val: $t) -> Int {
                Int::from_magnitude(val as u128, false)
            }
        })*
    };
}

impl_from_prim!(signed i8, i16, i32, i64, i128, isize);
impl_from_prim!(unsigned u8, u16, u32, u64, u128, usize);

// Operators and comparisons between an Int and a primitive integer, in both orders. The
// primitive is converted to an Int first; for values that fit a limb this doesn't
// allocate.
macro_rules! impl_arith_prim {
    ($t:ty; $($tr:ident, $method:ident, $assign_tr:ident, $assign_method:ident);*) => {
        $(
            impl $tr<$t> for Int {
                type Output = Int;

                #[inline]
                fn $method(self, other: $t) -> Int {
                    $tr::$method(self, &Int::from(other))
                }
            }

            impl<'a> $tr<$t> for &'a Int {
                type Output = Int;

                #[inline]
                fn $method(self, other: $t) -> Int {
                    $tr::$method(self, &Int::from(other))
                }
            }

            impl $tr<Int> for $t {
                type Output = Int;

                #[inline]
                fn $method(self, other: Int) -> Int {
                    $tr::$method(Int::from(self), &other)
                }
            }

            impl<'a> $tr<&'a Int> for $t {
                type Output = Int;

                #[inline]
                fn $method(self, other: &'a Int) -> Int {
                    $tr::$method(Int::from(self), other)
                }
            }

            impl $assign_tr<$t> for Int {
                #[inline]
                fn $assign_method(&mut self, other: $t) {
                    $assign_tr::$assign_method(self, &Int::from(other))
                }
            }
        )*

        impl PartialEq<$t> for Int {
            #[inline]
            fn eq(&self, other: &$t) -> bool {
                *self == Int::from(*other)
            }
        }

        impl PartialEq<Int> for $t {
            #[inline]
            fn eq(&self, other: &Int) -> bool {
                Int::from(*self) == *other
            }
        }

        impl PartialOrd<$t> for Int {
            #[inline]
            fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                Some(self.cmp(&Int::from(*other)))
            }
        }

        impl PartialOrd<Int> for $t {
            #[inline]
            fn partial_cmp(&self, other: &Int) -> Option<Ordering> {
                Some(Int::from(*self).cmp(other))
            }
        }
    };
}

macro_rules! impl_prims {
    ($($t:ty),*) => {
        $(impl_arith_prim!($t;
            Add, add, AddAssign, add_assign;
            Sub, sub, SubAssign, sub_assign;
            Mul, mul, MulAssign, mul_assign;
            Div, div, DivAssign, div_assign;
            Rem, rem, RemAssign, rem_assign;
            BitAnd, bitand, BitAndAssign, bitand_assign;
            BitOr, bitor, BitOrAssign, bitor_assign;
            BitXor, bitxor, BitXorAssign, bitxor_assign);)*
    };
}

impl_prims!(i32, i64, u32, u64, usize);

impl Zero for Int {
    fn zero() -> Int {
        Int::zero()
    }

    fn is_zero(&self) -> bool {
        Int::is_zero(self)
    }
}

impl One for Int {
    fn one() -> Int {
        Int::one()
    }
}

impl CheckedDiv for Int {
    fn checked_div(&self, v: &Int) -> Option<Int> {
        self.try_div(v).ok()
    }
}

impl CheckedRem for Int {
    fn checked_rem(&self, v: &Int) -> Option<Int> {
        self.try_rem(v).ok()
    }
}

impl ToPrimitive for Int {
    fn to_i64(&self) -> Option<i64> {
        self.to_i128().and_then(|v| i64::try_from(v).ok())
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_u128().and_then(|v| u64::try_from(v).ok())
    }

    fn to_i128(&self) -> Option<i128> {
        if self.abs_size() * Limb::BITS > 128 {
            return None;
        }
        let mag = self
            .limbs
            .iter()
            .rev()
            .fold(0u128, |acc, l| (acc << Limb::BITS) | l.0 as u128);
        if self.negative {
            if mag <= i128::MAX as u128 + 1 {
                Some((mag as i128).wrapping_neg())
            } else {
                None
            }
        } else {
            i128::try_from(mag).ok()
        }
    }

    fn to_u128(&self) -> Option<u128> {
        if self.negative || self.abs_size() * Limb::BITS > 128 {
            return None;
        }
        Some(
            self.limbs
                .iter()
                .rev()
                .fold(0u128, |acc, l| (acc << Limb::BITS) | l.0 as u128),
        )
    }
}

impl FromPrimitive for Int {
    fn from_i64(n: i64) -> Option<Int> {
        Some(Int::from(n))
    }

    fn from_u64(n: u64) -> Option<Int> {
        Some(Int::from(n))
    }

    fn from_i128(n: i128) -> Option<Int> {
        Some(Int::from(n))
    }

    fn from_u128(n: u128) -> Option<Int> {
        Some(Int::from(n))
    }
}

/// Trait for generating random `Int`s.
pub trait RandomInt {
    /// Generate a random unsigned `Int` of given bit size.
    fn gen_uint(&mut self, bits: usize) -> Int;

    /// Generate a random `Int` of given bit size.
    fn gen_int(&mut self, bits: usize) -> Int;

    /// Generate a random unsigned `Int` less than the given bound.
    /// Fails when the bound is zero or negative.
    fn gen_uint_below(&mut self, bound: &Int) -> Int;

    /// Generate a random `Int` within the given range.
    /// The lower bound is inclusive; the upper bound is exclusive.
    /// Fails when the upper bound is not greater than the lower bound.
    fn gen_int_range(&mut self, lbound: &Int, ubound: &Int) -> Int;
}

impl<R: Rng> RandomInt for R {
    fn gen_uint(&mut self, bits: usize) -> Int {
        assert!(bits > 0);

        let whole = bits / Limb::BITS;
        let rem = bits % Limb::BITS;

        let mut i = Int::zero();
        for _ in 0..whole {
            i.limbs.push(Limb(self.gen::<BaseInt>()));
        }
        if rem > 0 {
            let top = self.gen::<BaseInt>() >> (Limb::BITS - rem);
            i.limbs.push(Limb(top));
        }

        i.normalize();
        i
    }

    fn gen_int(&mut self, bits: usize) -> Int {
        let mut i = self.gen_uint(bits);
        if self.gen::<bool>() {
            i.negate();
        }
        i
    }

    fn gen_uint_below(&mut self, bound: &Int) -> Int {
        assert!(bound.sign() > 0, "bound must be positive");

        let bits = bound.bit_length() as usize;
        loop {
            let n = self.gen_uint(bits);
            if n < *bound {
                return n;
            }
        }
    }

    fn gen_int_range(&mut self, lbound: &Int, ubound: &Int) -> Int {
        assert!(*lbound < *ubound, "empty range");
        lbound + self.gen_uint_below(&(ubound - lbound))
    }
}
