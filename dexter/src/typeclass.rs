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

//! Container capabilities, implemented once for [`Either`].
//!
//! The traits use generic associated types to name "the same container holding another type". For
//! `Either<L, R>`, `Wrapped<T>` is `Either<L, T>`: the left type is fixed and the capabilities act on the right side.
//!
//! The `Either` impls forward to the inherent methods, so `either.fmap(f)` and `either.map(f)` always agree.

use crate::either::Either;

/// A container whose content can be mapped.
///
/// Laws:
///
/// - `fa.fmap(|x| x) == fa`
/// - `fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))`
pub trait Functor {
    /// The mapped content.
    type Inner;
    /// The same container holding `T`.
    type Wrapped<T>;

    /// Map the content with `f`.
    fn fmap<T, F>(self, f: F) -> Self::Wrapped<T>
    where
        F: FnOnce(Self::Inner) -> T;
}

/// A functor that can apply a wrapped function.
pub trait Apply: Functor {
    /// Apply the function held by `f` to the content.
    fn apply<T, F>(self, f: Self::Wrapped<F>) -> Self::Wrapped<T>
    where
        F: FnOnce(Self::Inner) -> T;
}

/// A functor with lifting and chaining.
///
/// Laws:
///
/// - `M::pure(a).bind(f) == f(a)`
/// - `m.bind(M::pure) == m`
/// - `m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))`
pub trait Monad: Functor + Sized {
    /// Lift a value into the container.
    fn pure(value: Self::Inner) -> Self;

    /// Chain a computation on the content.
    fn bind<T, F>(self, f: F) -> Self::Wrapped<T>
    where
        F: FnOnce(Self::Inner) -> Self::Wrapped<T>;
}

/// A container whose items can be folded from the right.
pub trait Foldable {
    /// The folded item.
    type Item;

    /// Fold the items into `seed`.
    fn fold_r<C, F>(self, seed: C, f: F) -> C
    where
        F: FnMut(Self::Item, C) -> C;
}

/// A container with a fallback choice.
///
/// `alt_with` must be associative.
pub trait Alt: Sized {
    /// Return `self` if it is usable, otherwise the container produced by `f`.
    fn alt_with<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Self;
}

/// A functor that can be extended by a function of the whole container.
///
/// Laws:
///
/// - `w.extend_with(f).extend_with(g) == w.extend_with(|w| g(w.extend_with(f)))`
pub trait Extendable: Functor + Sized {
    /// Apply `f` to the whole container and wrap its output.
    fn extend_with<Z, F>(self, f: F) -> Self::Wrapped<Z>
    where
        F: FnOnce(Self) -> Z;
}

impl<L, R> Functor for Either<L, R> {
    type Inner = R;
    type Wrapped<T> = Either<L, T>;

    fn fmap<T, F>(self, f: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        self.map(f)
    }
}

impl<L, R> Apply for Either<L, R> {
    fn apply<T, F>(self, f: Either<L, F>) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        self.ap(f)
    }
}

impl<L, R> Monad for Either<L, R> {
    fn pure(value: R) -> Self {
        Either::of(value)
    }

    fn bind<T, F>(self, f: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        self.flat_map(f)
    }
}

impl<L, R> Foldable for Either<L, R> {
    type Item = R;

    fn fold_r<C, F>(self, seed: C, f: F) -> C
    where
        F: FnMut(R, C) -> C,
    {
        self.fold_right(seed, f)
    }
}

impl<L, R> Alt for Either<L, R> {
    fn alt_with<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        self.alt(f)
    }
}

impl<L, R> Extendable for Either<L, R> {
    fn extend_with<Z, F>(self, f: F) -> Either<L, Z>
    where
        F: FnOnce(Self) -> Z,
    {
        self.extend(f)
    }
}

/// Discard the content of a functor.
pub fn void<F>(fa: F) -> F::Wrapped<()>
where
    F: Functor,
{
    fa.fmap(|_| ())
}

/// Replace the content of a functor with `value`.
pub fn replace<F, T>(fa: F, value: T) -> F::Wrapped<T>
where
    F: Functor,
{
    fa.fmap(move |_| value)
}

/// Collapse one layer of a nested monad.
pub fn join<M, T>(mm: M) -> <M as Functor>::Wrapped<T>
where
    M: Monad<Inner = <M as Functor>::Wrapped<T>>,
{
    mm.bind(|m| m)
}
