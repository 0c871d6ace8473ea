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

//! Limb storage. A `LimbVec` behaves like a `Vec<Limb>`, but a single limb is stored inline
//! and anything longer lives in a reference-counted buffer that is shared between clones
//! until one of them writes to it.

use std::cmp;
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::slice;
use std::sync::Arc;

use crate::ll::limb::Limb;

/// Extra limbs allocated whenever a private copy of shared storage is made.
const SLACK: usize = 8;

#[derive(Clone)]
enum Storage {
    /// Used for lengths 0 and 1. The limb is zero when the length is 0.
    Inline(Limb),
    /// Used for lengths of 2 and up. The vector's length is the capacity of the buffer;
    /// limbs past the logical length are unspecified.
    Shared(Arc<Vec<Limb>>),
}

/**
 * A growable sequence of limbs, least-significant first, with copy-on-write sharing.
 *
 * Cloning a `LimbVec` never copies limbs: the clone shares the heap buffer (if any) with
 * the original. Any access that may write to the limbs makes the buffer unique first,
 * copying it if another `LimbVec` still refers to it.
 */
#[derive(Clone)]
pub struct LimbVec {
    len: usize,
    storage: Storage,
}

impl LimbVec {
    pub fn new() -> LimbVec {
        LimbVec {
            len: 0,
            storage: Storage::Inline(Limb(0)),
        }
    }

    /// Creates a zero-filled `LimbVec` of length `len`.
    pub fn with_len(len: usize) -> LimbVec {
        let storage = if len <= 1 {
            Storage::Inline(Limb(0))
        } else {
            Storage::Shared(Arc::new(vec![Limb(0); len + SLACK]))
        };

        LimbVec { len, storage }
    }

    #[cfg(test)]
    pub fn from_slice(limbs: &[Limb]) -> LimbVec {
        let mut v = LimbVec::with_len(limbs.len());
        v.as_mut_slice().copy_from_slice(limbs);
        v
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of limbs that can be held without reallocating.
    #[cfg(test)]
    pub fn capacity(&self) -> usize {
        match self.storage {
            Storage::Inline(_) => 1,
            Storage::Shared(ref heap) => heap.len(),
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[Limb] {
        match self.storage {
            Storage::Inline(ref l) => {
                if self.len == 0 {
                    &[]
                } else {
                    slice::from_ref(l)
                }
            }
            Storage::Shared(ref heap) => &heap[..self.len],
        }
    }

    /// Returns the limbs for writing, copying shared storage first.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Limb] {
        let len = self.len;
        if len <= 1 {
            return match self.storage {
                Storage::Inline(ref mut l) => {
                    if len == 0 {
                        &mut []
                    } else {
                        slice::from_mut(l)
                    }
                }
                Storage::Shared(ref mut heap) => &mut Arc::make_mut(heap)[..len],
            };
        }

        &mut self.make_unique(len)[..len]
    }

    /**
     * Ensures the heap buffer is owned by `self` alone and can hold at least `min_cap`
     * limbs, then returns it.
     *
     * Shared buffers are copied into a fresh one with some slack; a unique buffer that is
     * too small is grown to at least double its size.
     */
    fn make_unique(&mut self, min_cap: usize) -> &mut Vec<Limb> {
        let len = self.len;
        if let Storage::Inline(l) = self.storage {
            let mut heap = vec![Limb(0); cmp::max(min_cap, len) + SLACK];
            heap[0] = l;
            self.storage = Storage::Shared(Arc::new(heap));
        }

        match self.storage {
            Storage::Shared(ref mut heap) => {
                let unique = Arc::get_mut(heap).is_some();
                if !unique || heap.len() < min_cap {
                    let cap = if unique {
                        cmp::max(min_cap, heap.len() * 2)
                    } else {
                        cmp::max(min_cap, len) + SLACK
                    };
                    let mut fresh = Vec::with_capacity(cap);
                    fresh.extend_from_slice(&heap[..len]);
                    fresh.resize(cap, Limb(0));
                    *heap = Arc::new(fresh);
                }
                // Unique at this point, so this never clones.
                Arc::make_mut(heap)
            }
            Storage::Inline(_) => unreachable!("storage was just moved to the heap"),
        }
    }

    /**
     * Resizes to `new_len` limbs. Growing fills the new limbs with zeros, shrinking drops the
     * high limbs.
     */
    pub fn resize(&mut self, new_len: usize) {
        let old_len = self.len;
        if new_len <= 1 {
            let low = if new_len == 1 && old_len > 0 {
                self.as_slice()[0]
            } else {
                Limb(0)
            };
            self.storage = Storage::Inline(low);
        } else if new_len > old_len {
            let heap = self.make_unique(new_len);
            for l in &mut heap[old_len..new_len] {
                *l = Limb(0);
            }
        }
        self.len = new_len;
    }

    /// Shortens to `new_len` limbs. Does nothing if already that short.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len < self.len {
            self.resize(new_len);
        }
    }

    /// Appends a limb at the most-significant end.
    pub fn push(&mut self, limb: Limb) {
        let len = self.len;
        if len == 0 {
            self.storage = Storage::Inline(limb);
        } else {
            let heap = self.make_unique(len + 1);
            heap[len] = limb;
        }
        self.len = len + 1;
    }

    /// Removes and returns the most-significant limb, or `None` if empty.
    pub fn pop(&mut self) -> Option<Limb> {
        let len = self.len;
        if len == 0 {
            return None;
        }

        let top = self.as_slice()[len - 1];
        if len <= 2 {
            // back to inline storage, releasing the heap buffer
            self.resize(len - 1);
        } else {
            self.len = len - 1;
        }

        Some(top)
    }

    /// The most-significant limb. Must not be called on an empty `LimbVec`.
    #[inline]
    pub fn back(&self) -> Limb {
        debug_assert!(self.len > 0);
        self.as_slice()[self.len - 1]
    }

    #[cfg(test)]
    pub fn back_mut(&mut self) -> &mut Limb {
        debug_assert!(self.len > 0);
        let len = self.len;
        &mut self.as_mut_slice()[len - 1]
    }

    /// Exchanges the contents of two `LimbVec`s without copying any limbs.
    #[inline]
    pub fn swap(&mut self, other: &mut LimbVec) {
        std::mem::swap(self, other);
    }

    /// Releases excess capacity, moving to inline storage where possible.
    pub fn shrink_to_fit(&mut self) {
        let len = self.len;
        if len <= 1 {
            return;
        }
        let excess = match self.storage {
            Storage::Shared(ref heap) => heap.len() > len,
            Storage::Inline(_) => false,
        };
        if excess {
            let heap = self.as_slice().to_vec();
            self.storage = Storage::Shared(Arc::new(heap));
        }
    }

    /// Whether the limbs are stored inline, without a heap buffer.
    #[cfg(test)]
    pub fn is_inline(&self) -> bool {
        match self.storage {
            Storage::Inline(_) => true,
            Storage::Shared(_) => false,
        }
    }

    /// Whether `self` and `other` currently share the same heap buffer.
    #[cfg(test)]
    pub fn shares_with(&self, other: &LimbVec) -> bool {
        match (&self.storage, &other.storage) {
            (&Storage::Shared(ref a), &Storage::Shared(ref b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Default for LimbVec {
    fn default() -> LimbVec {
        LimbVec::new()
    }
}

impl Deref for LimbVec {
    type Target = [Limb];

    #[inline]
    fn deref(&self) -> &[Limb] {
        self.as_slice()
    }
}

impl DerefMut for LimbVec {
    #[inline]
    fn deref_mut(&mut self) -> &mut [Limb] {
        self.as_mut_slice()
    }
}

impl fmt::Debug for LimbVec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
