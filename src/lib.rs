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

//! Arbitrary-precision signed integers.
//!
//! [`Int`] stores its magnitude as a sequence of 32-bit limbs. Values that fit in a single
//! limb never allocate, and larger values share their limbs between clones until one of
//! them is written to, so passing `Int`s around by value is cheap.
//!
//! ```
//! use cowint::Int;
//!
//! let a: Int = "123456789123456789".parse().unwrap();
//! let b: Int = &a * 2;
//! assert_eq!(b.to_string(), "246913578246913578");
//! assert_eq!(-7i32 / Int::from(3i32), -2i32);
//! assert_eq!(Int::from(-7i32) % 3i32, -1i32);
//! ```

pub mod ll;
mod mem;

mod decimal;
pub mod int;
pub mod traits;

// Re-exports

pub use crate::decimal::ParseIntError;
pub use crate::int::{DivideByZero, Int, RandomInt};
