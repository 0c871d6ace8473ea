// Spigot computation of the digits of pi, after TeXitoi's Rust version on
// http://benchmarksgame.alioth.debian.org/

use std::mem;

use cowint::Int;

fn main() {
    let n = std::env::args_os().nth(1)
        .and_then(|s| s.into_string().ok())
        .and_then(|n| n.parse().ok())
        .unwrap_or(27);
    for (i, d) in Context::new().enumerate().take(n) {
        print!("{}", d);
        if (i + 1) % 10 == 0 { println!("\t:{}", i + 1); }
    }
    if n % 10 != 0 {
        for _ in n % 10 .. 10 { print!(" "); }
        println!("\t:{}", n);
    }
}

trait Take {
    fn take(&mut self) -> Self;
}
impl Take for Int {
    fn take(&mut self) -> Int {
        mem::replace(self, Int::zero())
    }
}

pub struct Context {
    k: u32,
    tmp1: Int,
    acc: Int,
    den: Int,
    num: Int
}
impl Context {
    pub fn new() -> Context {
        Context {
            k: 0,
            tmp1: Int::zero(),
            acc: Int::zero(),
            den: Int::one(),
            num: Int::one()
        }
    }
    fn extract_digit(&mut self, nth: u32) -> u32 {
        self.tmp1.clone_from(&self.num);
        self.tmp1 = (self.tmp1.take() * nth + &self.acc) / &self.den;

        self.tmp1.to_single_limb().0
    }
    fn eliminate_digit(&mut self, d: u32) {
        self.acc = (self.acc.take() - self.den.clone() * d) * 10u32;
        self.num = self.num.take() * 10u32;
    }
    fn next_term(&mut self) {
        self.k = self.k + 1;
        let k2 = self.k * 2 + 1;
        self.acc = (self.acc.take() + &self.num + &self.num) * k2;

        self.den = self.den.take() * k2;
        self.num = self.num.take() * self.k;
    }
}
impl Iterator for Context {
    type Item = u32;
    fn next(&mut self) -> Option<u32> {
        loop {
            self.next_term();
            if self.num > self.acc { continue; }
            let d = self.extract_digit(3);
            if d != self.extract_digit(4) { continue; }

            self.eliminate_digit(d);
            return Some(d);
        }
    }
}
