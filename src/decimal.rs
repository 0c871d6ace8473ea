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

//! Decimal string conversion for `Int`.
//!
//! Only the public arithmetic of `Int` is used here. Digits are handled nine at a time,
//! since `10^9` is the largest power of ten that fits in a limb.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use crate::int::Int;
use crate::traits::DivRem;

const CHUNK_DIGITS: usize = 9;
const CHUNK_BASE: u32 = 1_000_000_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIntError {
    kind: ErrorKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ErrorKind {
    Empty,
    InvalidDigit,
    InvalidSign,
}

impl ParseIntError {
    fn message(&self) -> &'static str {
        match self.kind {
            ErrorKind::Empty => "cannot parse integer from empty string",
            ErrorKind::InvalidDigit => "invalid digit found in string",
            ErrorKind::InvalidSign => "minus sign is only allowed at the start",
        }
    }
}

impl Error for ParseIntError {}

impl fmt::Display for ParseIntError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl FromStr for Int {
    type Err = ParseIntError;

    /// Parses a string of the form `-?[0-9]+`. Leading zeros are allowed, and `-0` is zero.
    fn from_str(src: &str) -> Result<Int, ParseIntError> {
        // The first bad character decides the error.
        for (i, b) in src.bytes().enumerate() {
            match b {
                b'0'..=b'9' => {}
                b'-' if i == 0 => {}
                b'-' => return Err(ParseIntError { kind: ErrorKind::InvalidSign }),
                _ => return Err(ParseIntError { kind: ErrorKind::InvalidDigit }),
            }
        }

        let (negative, digits) = match src.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, src),
        };
        if digits.is_empty() {
            return Err(ParseIntError { kind: ErrorKind::Empty });
        }

        let mut value = Int::zero();
        for chunk in digits.as_bytes().chunks(CHUNK_DIGITS) {
            let n = chunk
                .iter()
                .fold(0u32, |acc, &d| acc * 10 + (d - b'0') as u32);
            value *= 10u32.pow(chunk.len() as u32);
            value += n;
        }

        if negative {
            value.negate();
        }
        Ok(value)
    }
}

/// Returns the decimal digits of the magnitude of `n`, without a sign.
fn magnitude_digits(n: &Int) -> String {
    if n.is_zero() {
        return "0".to_string();
    }

    let base = Int::from(CHUNK_BASE);
    let mut rest = n.clone().abs();
    let mut chunks = Vec::new();
    while !rest.is_zero() {
        let (q, r) = (&rest).divrem(&base);
        chunks.push(r.to_single_limb().0);
        rest = q;
    }

    let mut s = String::with_capacity(chunks.len() * CHUNK_DIGITS);
    let mut iter = chunks.iter().rev();
    if let Some(top) = iter.next() {
        s.push_str(&top.to_string());
    }
    for chunk in iter {
        s.push_str(&format!("{:09}", chunk));
    }
    s
}

impl fmt::Display for Int {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad_integral(self.sign() >= 0, "", &magnitude_digits(self))
    }
}

impl fmt::Debug for Int {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
