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

/*!
 * Operator-like traits that don't have a counterpart in `std::ops`.
 */

/**
 * Division returning both the quotient and the remainder.
 *
 * ```ignore
 *     let (q, r) = (&a).divrem(&b);
 * ```
 *
 * is equivalent to `(&a / &b, &a % &b)`, but only divides once. Like `/` and `%`, this
 * panics when the divisor is zero.
 */
pub trait DivRem<RHS = Self> {
    type Output;

    fn divrem(self, rhs: RHS) -> Self::Output;
}
