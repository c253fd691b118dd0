// Copyright 2026 dexter Project Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::hash::{Hash, Hasher};

/// Either type representing a value of one of two possible types.
///
/// By convention [`Either::Left`] holds a failure and [`Either::Right`] holds a success. All combinators are
/// right-biased: they act on the success value and let a failure pass through untouched.
///
/// An instance is immutable. Every transformation consumes `self` and returns a new instance.
#[derive(Debug, Clone, Copy, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// Left variant, the failure branch.
    Left(L),
    /// Right variant, the success branch.
    Right(R),
}

impl<L, R> PartialEq for Either<L, R>
where
    L: PartialEq,
    R: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Either::Left(a), Either::Left(b)) => a == b,
            (Either::Right(a), Either::Right(b)) => a == b,
            (Either::Left(_), Either::Right(_)) | (Either::Right(_), Either::Left(_)) => false,
        }
    }
}

impl<L, R> Eq for Either<L, R>
where
    L: Eq,
    R: Eq,
{
}

impl<L, R> Hash for Either<L, R>
where
    L: Hash,
    R: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Either::Left(l) => {
                state.write_u8(0);
                l.hash(state);
            }
            Either::Right(r) => {
                state.write_u8(1);
                r.hash(state);
            }
        }
    }
}

impl<L, R> Either<L, R> {
    /// Returns `true` if the either holds a left value.
    #[inline]
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// Returns `true` if the either holds a right value.
    #[inline]
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// Converts the either into the left value, if any.
    pub fn left(self) -> Option<L> {
        match self {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        }
    }

    /// Converts the either into the right value, if any.
    pub fn right(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }

    /// Alias of [`Either::right`].
    pub fn to_option(self) -> Option<R> {
        self.right()
    }

    /// Borrow the left value, if any.
    pub fn left_ref(&self) -> Option<&L> {
        self.as_ref().left()
    }

    /// Borrow the right value, if any.
    pub fn right_ref(&self) -> Option<&R> {
        self.as_ref().right()
    }

    /// Converts from `&Either<L, R>` to `Either<&L, &R>`.
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Converts from `&mut Either<L, R>` to `Either<&mut L, &mut R>`.
    pub fn as_mut(&mut self) -> Either<&mut L, &mut R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Maps the right value of the either type.
    pub fn map<F, C>(self, f: F) -> Either<L, C>
    where
        F: FnOnce(R) -> C,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(f(r)),
        }
    }

    /// Maps the left value of the either type.
    pub fn map_left<F, C>(self, f: F) -> Either<C, R>
    where
        F: FnOnce(L) -> C,
    {
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Maps whichever value the either holds.
    pub fn bimap<FL, FR, CL, CR>(self, fl: FL, fr: FR) -> Either<CL, CR>
    where
        FL: FnOnce(L) -> CL,
        FR: FnOnce(R) -> CR,
    {
        match self {
            Either::Left(l) => Either::Left(fl(l)),
            Either::Right(r) => Either::Right(fr(r)),
        }
    }

    /// Chains a computation on the right value.
    ///
    /// This is where failures propagate: a left value is returned as is and `f` is never invoked. The other chaining
    /// combinators ([`Either::and_then`], [`Either::ap`], [`Either::map2`], [`Either::map3`]) are built on it.
    pub fn flat_map<F, C>(self, f: F) -> Either<L, C>
    where
        F: FnOnce(R) -> Either<L, C>,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => f(r),
        }
    }

    /// Runs `f` if the either holds a right value, discarding that value.
    ///
    /// NOTE: Unlike [`Result::and_then`], `f` takes no argument. Use [`Either::flat_map`] to chain on the value.
    pub fn and_then<F, C>(self, f: F) -> Either<L, C>
    where
        F: FnOnce() -> Either<L, C>,
    {
        self.flat_map(|_| f())
    }

    /// Applies the function wrapped in `fr` to the right value.
    ///
    /// The failure of `self` is reported before the failure of `fr`.
    pub fn ap<F, C>(self, fr: Either<L, F>) -> Either<L, C>
    where
        F: FnOnce(R) -> C,
    {
        self.flat_map(|r| fr.map(|f| f(r)))
    }

    /// Combines the right values of two eithers.
    ///
    /// Operands are inspected left to right, the first left value wins.
    pub fn map2<B, F, C>(self, other: Either<L, B>, f: F) -> Either<L, C>
    where
        F: FnOnce(R, B) -> C,
    {
        self.flat_map(|r| other.map(|b| f(r, b)))
    }

    /// Combines the right values of three eithers.
    ///
    /// Operands are inspected left to right, the first left value wins.
    pub fn map3<B, D, F, C>(self, other1: Either<L, B>, other2: Either<L, D>, f: F) -> Either<L, C>
    where
        F: FnOnce(R, B, D) -> C,
    {
        self.flat_map(|r| other1.flat_map(|b| other2.map(|d| f(r, b, d))))
    }

    /// Returns `self` if it holds a right value, otherwise the result of `f`.
    pub fn alt<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Either::Left(_) => f(),
            right => right,
        }
    }

    /// Recovers from a left value with `f`.
    pub fn or_else<F, L1>(self, f: F) -> Either<L1, R>
    where
        F: FnOnce(L) -> Either<L1, R>,
    {
        match self {
            Either::Left(l) => f(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Returns the right value, or computes one from the left value.
    pub fn get_or_else<F>(self, f: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        match self {
            Either::Left(l) => f(l),
            Either::Right(r) => r,
        }
    }

    /// Eliminates the either with one handler per variant.
    pub fn fold<FL, FR, C>(self, on_left: FL, on_right: FR) -> C
    where
        FL: FnOnce(L) -> C,
        FR: FnOnce(R) -> C,
    {
        match self {
            Either::Left(l) => on_left(l),
            Either::Right(r) => on_right(r),
        }
    }

    /// Folds the right value into `seed`. A left value leaves `seed` unchanged.
    pub fn fold_right<F, C>(self, seed: C, f: F) -> C
    where
        F: FnOnce(R, C) -> C,
    {
        match self {
            Either::Left(_) => seed,
            Either::Right(r) => f(r, seed),
        }
    }

    /// Applies `f` to the whole either and wraps its output as a right value.
    ///
    /// A left value is propagated and `f` is not invoked.
    pub fn extend<F, Z>(self, f: F) -> Either<L, Z>
    where
        F: FnOnce(Either<L, R>) -> Z,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            this @ Either::Right(_) => Either::Right(f(this)),
        }
    }

    /// Wraps a right value in one more right layer.
    pub fn duplicate(self) -> Either<L, Either<L, R>> {
        self.extend(|this| this)
    }

    /// Exchanges the variants.
    pub fn swap(self) -> Either<R, L> {
        match self {
            Either::Left(l) => Either::Right(l),
            Either::Right(r) => Either::Left(r),
        }
    }

    /// Turns a right value into a left value unless it passes `pred`.
    pub fn filter_or_else<P, F>(self, pred: P, on_false: F) -> Self
    where
        P: FnOnce(&R) -> bool,
        F: FnOnce(R) -> L,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => {
                if pred(&r) {
                    Either::Right(r)
                } else {
                    Either::Left(on_false(r))
                }
            }
        }
    }

    /// Checks the right value against `v` with the given equality.
    pub fn elem<E>(&self, v: &R, eq: E) -> bool
    where
        E: FnOnce(&R, &R) -> bool,
    {
        match self {
            Either::Left(_) => false,
            Either::Right(r) => eq(v, r),
        }
    }

    /// Checks the right value against `v` with [`PartialEq`].
    pub fn contains(&self, v: &R) -> bool
    where
        R: PartialEq,
    {
        self.elem(v, |a, b| a == b)
    }

    /// Returns `true` if the either holds a right value that passes `pred`.
    pub fn exists<P>(&self, pred: P) -> bool
    where
        P: FnOnce(&R) -> bool,
    {
        match self {
            Either::Left(_) => false,
            Either::Right(r) => pred(r),
        }
    }

    /// Returns the right value.
    ///
    /// # Panics
    ///
    /// Panics with `msg` if the either holds a left value.
    #[track_caller]
    pub fn expect_right(self, msg: &str) -> R
    where
        L: std::fmt::Debug,
    {
        match self {
            Either::Left(l) => panic!("{msg}: {l:?}"),
            Either::Right(r) => r,
        }
    }

    /// Returns the left value.
    ///
    /// # Panics
    ///
    /// Panics with `msg` if the either holds a right value.
    #[track_caller]
    pub fn expect_left(self, msg: &str) -> L
    where
        R: std::fmt::Debug,
    {
        match self {
            Either::Left(l) => l,
            Either::Right(r) => panic!("{msg}: {r:?}"),
        }
    }
}
