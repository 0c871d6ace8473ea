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

//! Sign handling: truncating division, floor shifts and two's-complement bitwise ops.

use cowint::Int;

fn main() {
    let pairs = [(7i32, 3i32), (-7, 3), (7, -3), (-7, -3)];
    for &(a, b) in pairs.iter() {
        let (x, y) = (Int::from(a), Int::from(b));
        println!("{:>3} / {:>2} = {:>2}   {:>3} % {:>2} = {:>2}", a, b, &x / &y, a, b, &x % &y);
    }

    let n: Int = "-123456789012345678901234567890".parse().unwrap();
    let d: Int = "987654321".parse().unwrap();
    let (q, r) = n.divmod(&d).unwrap();
    println!("{} = {} * {} + {}", n, d, q, r);
    println!("check: {}", &q * &d + &r == n);

    match n.try_div(&Int::zero()) {
        Ok(q) => println!("unexpected quotient {}", q),
        Err(e) => println!("{} / 0: {}", n, e),
    }

    // Right shifts of negative values round toward negative infinity.
    for &v in [-1i32, -7, -8, -9].iter() {
        println!("{:>2} >> 2 = {:>2}", v, Int::from(v) >> 2);
    }
    println!("{} >> 100 = {}", n, n.clone() >> 100);

    // Negative values act as if they had infinitely many leading ones.
    let a = Int::from(-12);
    let b = Int::from(10);
    println!("-12 & 10 = {}", &a & &b);
    println!("-12 | 10 = {}", &a | &b);
    println!("-12 ^ 10 = {}", &a ^ &b);
    println!("!-12 = {}", !a);
}
