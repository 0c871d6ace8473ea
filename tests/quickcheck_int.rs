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

use cowint::traits::DivRem;
use cowint::Int;
use num_bigint::{BigInt, BigUint, Sign};
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
                        .tests(QUICKCHECK_THOROUGNESS*1_000)
                        .max_tests(QUICKCHECK_THOROUGNESS*10_000)
                        .quickcheck(prop as fn($($arg_ty),*) -> $ret);
                }
            )*
        }
    )
}

/// Builds the same value as an `Int` and as a `BigInt`, going through the decimal string.
fn pair(limbs: Vec<u32>, negative: bool) -> (Int, BigInt) {
    let mag = BigUint::new(limbs);
    let sign = if negative { Sign::Minus } else { Sign::Plus };
    let big = BigInt::from_biguint(sign, mag);
    let int: Int = big.to_string().parse().unwrap();
    (int, big)
}

fn eq(a: &Int, b: &BigInt) -> bool {
    a.to_string() == b.to_string()
}

quickcheck!{
    fn check_round_trip(a: Vec<u32>, an: bool) -> TestResult {
        let (a, ba) = pair(a, an);
        TestResult::from_bool(eq(&a, &ba))
    }

    fn check_add(a: Vec<u32>, an: bool, b: Vec<u32>, bn: bool) -> TestResult {
        let (a, ba) = pair(a, an);
        let (b, bb) = pair(b, bn);

        let sum = &a + &b;
        TestResult::from_bool(eq(&sum, &(&ba + &bb)) && &sum - &b == a)
    }

    fn check_sub(a: Vec<u32>, an: bool, b: Vec<u32>, bn: bool) -> TestResult {
        let (a, ba) = pair(a, an);
        let (b, bb) = pair(b, bn);

        let diff = &a - &b;
        TestResult::from_bool(eq(&diff, &(&ba - &bb)) && &diff + &b == a)
    }

    fn check_mul(a: Vec<u32>, an: bool, b: Vec<u32>, bn: bool) -> TestResult {
        let (a, ba) = pair(a, an);
        let (b, bb) = pair(b, bn);

        TestResult::from_bool(eq(&(&a * &b), &(&ba * &bb)))
    }

    fn check_divrem(a: Vec<u32>, an: bool, b: Vec<u32>, bn: bool) -> TestResult {
        let (a, ba) = pair(a, an);
        let (b, bb) = pair(b, bn);
        if b.is_zero() {
            return TestResult::from_bool(a.divmod(&b).is_err());
        }

        let (q, r) = (&a).divrem(&b);
        TestResult::from_bool(eq(&q, &(&ba / &bb))
                              && eq(&r, &(&ba % &bb))
                              && &(&q * &b) + &r == a)
    }

    fn check_bitops(a: Vec<u32>, an: bool, b: Vec<u32>, bn: bool) -> TestResult {
        let (a, ba) = pair(a, an);
        let (b, bb) = pair(b, bn);

        TestResult::from_bool(eq(&(&a & &b), &(&ba & &bb))
                              && eq(&(&a | &b), &(&ba | &bb))
                              && eq(&(&a ^ &b), &(&ba ^ &bb)))
    }

    fn check_not(a: Vec<u32>, an: bool) -> TestResult {
        let (a, ba) = pair(a, an);
        TestResult::from_bool(eq(&!&a, &!&ba) && !&a == -&a - 1i32)
    }

    fn check_shifts(a: Vec<u32>, an: bool, k: u16) -> TestResult {
        let (a, ba) = pair(a, an);
        let k = k as usize % 300;

        TestResult::from_bool(eq(&(&a << k), &(&ba << k))
                              && eq(&(&a >> k), &(&ba >> k)))
    }

    fn check_cmp(a: Vec<u32>, an: bool, b: Vec<u32>, bn: bool) -> TestResult {
        let (a, ba) = pair(a, an);
        let (b, bb) = pair(b, bn);

        TestResult::from_bool(a.cmp(&b) == ba.cmp(&bb) && (a == b) == (ba == bb))
    }

    fn check_copy_independence(a: Vec<u32>, an: bool, b: Vec<u32>, bn: bool) -> TestResult {
        let (a, ba) = pair(a, an);
        let (b, _) = pair(b, bn);

        let mut c = a.clone();
        c += &b;
        c *= &b;
        c <<= 7;
        c ^= &b;
        TestResult::from_bool(eq(&a, &ba))
    }
}
