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

use cowint::ll;
use cowint::ll::limb;
use cowint::ll::limb::Limb;
use num_bigint::BigUint;
use quickcheck::TestResult;

#[cfg(feature = "full-quickcheck")]
const QUICKCHECK_THOROUGNESS: u64 = 100;
#[cfg(not(feature = "full-quickcheck"))]
const QUICKCHECK_THOROUGNESS: u64 = 1;

macro_rules! quickcheck {
    (@as_items $($i:item)*) => ($($i)*);
    {
        $(
            fn $fn_name:ident($($arg_name:ident : $arg_ty:ty),*) -> $ret:ty {
                $($code:tt)*
            }
        )*
    } => (
        quickcheck! {
            @as_items
            $(
                #[test]
                fn $fn_name() {
                    fn prop($($arg_name: $arg_ty),*) -> $ret {
                        $($code)*
                    }
                    quickcheck::QuickCheck::new()
                        .tests(QUICKCHECK_THOROUGNESS*10_000)
                        .max_tests(QUICKCHECK_THOROUGNESS*100_000)
                        .quickcheck(prop as fn($($arg_ty),*) -> $ret);
                }
            )*
        }
    )
}

macro_rules! B { () => { BigUint::from(1u64 << 32) } }
macro_rules! b  {   ($e:expr) => { BigUint::from($e as u32) };
                    ($h:expr,$l:expr) => { b!($h) * B!() + b!($l) }
                }

fn limbs(v: &[u32]) -> Vec<Limb> {
    v.iter().map(|&x| Limb(x)).collect()
}

fn big(v: &[Limb]) -> BigUint {
    let digits: Vec<u32> = v.iter().map(|l| l.0).collect();
    BigUint::new(digits)
}

quickcheck!{
    fn check_add_carry(a: u32, b: u32, c: bool) -> TestResult {
        let num_sum = b!(a) + b!(b) + b!(c as u32);

        let (w, carry) = Limb(a).add_carry(Limb(b), c);
        let sum = b!(carry as u32, w.0);

        TestResult::from_bool(num_sum == sum)
    }
}

quickcheck!{
    fn check_sub_borrow(a: u32, b: u32, c: bool) -> TestResult {
        let (w, borrow) = Limb(a).sub_borrow(Limb(b), c);

        // a - b - c + borrow * B == w
        let lhs = b!(a) + b!(borrow as u32) * B!();
        let rhs = b!(w.0) + b!(b) + b!(c as u32);

        TestResult::from_bool(lhs == rhs)
    }
}

quickcheck!{
    fn check_mul(a: u32, b: u32) -> TestResult {
        let num_prod = b!(a) * b!(b);

        let (hw, lw) = Limb(a).mul_hilo(Limb(b));
        let prod = b!(hw.0, lw.0);

        TestResult::from_bool(prod == num_prod)
    }
}

quickcheck!{
    fn check_div(hn: u32, ln: u32, d: u32) -> TestResult {
        if d == 0 || hn >= d {
            return TestResult::discard();
        }

        let num_n = b!(hn, ln);
        let num_q = &num_n / b!(d);
        let num_r = &num_n % b!(d);

        let (q, r) = limb::div(Limb(hn), Limb(ln), Limb(d));

        TestResult::from_bool(num_q == b!(q.0) && num_r == b!(r.0))
    }
}

quickcheck!{
    fn check_div_3by2(n2: u32, n1: u32, n0: u32, d1: u32, d0: u32) -> TestResult {
        let d1 = d1 | 0x8000_0000;
        if (n2, n1) >= (d1, d0) {
            return TestResult::discard();
        }

        let n = b!(n2, n1) * B!() + b!(n0);
        let d = b!(d1, d0);
        let q = ll::div_3by2(Limb(n2), Limb(n1), Limb(n0), Limb(d1), Limb(d0));

        let num_q = n / d;
        TestResult::from_bool(num_q == b!(q.0) || num_q + b!(1) == b!(q.0))
    }
}

quickcheck!{
    fn check_add_sub(a: Vec<u32>, b: Vec<u32>) -> TestResult {
        if a.len() < b.len() {
            return TestResult::discard();
        }
        let mut w = limbs(&a);
        let y = limbs(&b);

        let carry = ll::add(&mut w, &y);
        let mut sum = big(&w);
        if carry != 0 {
            sum += b!(carry.0) << (32 * a.len());
        }
        if sum != big(&limbs(&a)) + big(&y) {
            return TestResult::failed();
        }

        let borrow = ll::sub(&mut w, &y);
        TestResult::from_bool(borrow == carry && w == limbs(&a))
    }
}

quickcheck!{
    fn check_mul_n(a: Vec<u32>, b: Vec<u32>) -> TestResult {
        let x = limbs(&a);
        let y = limbs(&b);
        let mut w = vec![Limb(0); x.len() + y.len()];

        ll::mul(&mut w, &x, &y);

        TestResult::from_bool(big(&w) == big(&x) * big(&y))
    }
}

quickcheck!{
    fn check_divrem(n: Vec<u32>, d: Vec<u32>) -> TestResult {
        let np = limbs(&n);
        let dp = limbs(&d);
        if dp.len() < 2 || np.len() < dp.len() || dp[dp.len() - 1] == 0 {
            return TestResult::discard();
        }

        let mut q = vec![Limb(0); np.len() - dp.len() + 1];
        let mut r = vec![Limb(0); dp.len()];
        ll::divrem(&mut q, &mut r, &np, &dp);

        let num_n = big(&np);
        let num_d = big(&dp);
        TestResult::from_bool(big(&q) == &num_n / &num_d && big(&r) == &num_n % &num_d)
    }
}

quickcheck!{
    fn check_divrem_1(n: Vec<u32>, d: u32) -> TestResult {
        if d == 0 {
            return TestResult::discard();
        }
        let mut q = limbs(&n);
        let r = ll::divrem_1(&mut q, Limb(d));

        let num_n = big(&limbs(&n));
        TestResult::from_bool(big(&q) == &num_n / b!(d) && b!(r.0) == &num_n % b!(d))
    }
}

quickcheck!{
    fn check_shl_shr(a: Vec<u32>, cnt: u32) -> TestResult {
        if a.is_empty() {
            return TestResult::discard();
        }
        let cnt = cnt % 31 + 1;
        let mut w = limbs(&a);

        let carry = ll::shl(&mut w, cnt);
        let mut shifted = big(&w);
        if carry != 0 {
            shifted += b!(carry.0) << (32 * a.len());
        }
        if shifted != big(&limbs(&a)) << cnt as usize {
            return TestResult::failed();
        }

        // The low bits of the original limbs are gone, everything else comes back.
        let out = ll::shr(&mut w, cnt);
        let restored = big(&w) + (b!(carry.0) << (32 * a.len() - cnt as usize));
        TestResult::from_bool(out == 0 && restored == big(&limbs(&a)))
    }
}
