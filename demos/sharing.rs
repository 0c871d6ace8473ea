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

//! Clones of an `Int` share their limbs until one of them is written to.

use cowint::Int;

fn main() {
    let mut big = Int::one();
    for i in 2..=300u32 {
        big *= i;
    }
    println!("300! has {} bits", big.bit_length());

    // Cheap: no limbs are copied here.
    let copies: Vec<Int> = (0..4).map(|_| big.clone()).collect();

    // Each write gives the written copy a buffer of its own.
    let mut bumped = copies[0].clone();
    bumped.inc();
    let mut halved = copies[1].clone();
    halved >>= 1;
    let mut flipped = copies[2].clone();
    flipped.negate();

    println!("original ends in   ...{}", tail(&big));
    println!("incremented        ...{}", tail(&bumped));
    println!("halved             ...{}", tail(&halved));
    println!("negated            ...{}", tail(&flipped));
    println!("untouched copy == original: {}", copies[3] == big);
    println!("bumped - original = {}", &bumped - &big);
}

/// The last few decimal digits, with the sign.
fn tail(n: &Int) -> String {
    let s = n.clone().abs().to_string();
    let sign = if n.is_negative() { "-" } else { "" };
    format!("{}{}", sign, &s[s.len().saturating_sub(12)..])
}
