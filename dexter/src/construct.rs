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

use std::{
    backtrace::Backtrace,
    panic::{catch_unwind, AssertUnwindSafe},
};

use crate::{either::Either, panic::Panic};

impl<L, R> Either<L, R> {
    /// Wrap a success value.
    #[inline]
    pub fn of(r: R) -> Self {
        Either::Right(r)
    }

    /// Wrap a failure value.
    #[inline]
    pub fn of_left(l: L) -> Self {
        Either::Left(l)
    }

    /// Build an either from an option, calling `on_absent` for the failure value if the option is `None`.
    pub fn from_option<F>(opt: Option<R>, on_absent: F) -> Self
    where
        F: FnOnce() -> L,
    {
        match opt {
            Some(r) => Either::Right(r),
            None => Either::Left(on_absent()),
        }
    }

    /// Build a right value if `r` passes `pred`, otherwise a left value made by `on_false`.
    pub fn from_predicate<P, F>(r: R, pred: P, on_false: F) -> Self
    where
        P: FnOnce(&R) -> bool,
        F: FnOnce(R) -> L,
    {
        if pred(&r) {
            Either::Right(r)
        } else {
            Either::Left(on_false(r))
        }
    }

    /// Build an either from a value that may be missing.
    ///
    /// Accepts both plain values and options, so `from_nullable(5, ..)` and `from_nullable(None, ..)` both work.
    pub fn from_nullable<V, F>(value: V, on_null: F) -> Self
    where
        V: Into<Option<R>>,
        F: FnOnce() -> L,
    {
        Self::from_option(value.into(), on_null)
    }

    /// Run `run` and wrap its output as a right value.
    ///
    /// If `run` panics, the panic is caught and handed to `on_error` together with a backtrace captured at the catch
    /// site, and the output of `on_error` becomes the left value. Capturing respects `RUST_BACKTRACE` as described in
    /// [`Backtrace::capture`].
    ///
    /// This is the only operation of [`Either`] that catches panics. Panics raised by callbacks of every other
    /// combinator, and by `on_error` itself, propagate to the caller.
    ///
    /// NOTE: The default panic hook still prints the panic message. With `panic = "abort"` nothing can be caught.
    pub fn try_catch<F, E>(run: F, on_error: E) -> Self
    where
        F: FnOnce() -> R,
        E: FnOnce(Panic, Backtrace) -> L,
    {
        match catch_unwind(AssertUnwindSafe(run)) {
            Ok(r) => Either::Right(r),
            Err(payload) => {
                let panic = Panic::new(payload);
                tracing::debug!("[either]: caught panic in try_catch: {panic}");
                Either::Left(on_error(panic, Backtrace::capture()))
            }
        }
    }

    /// Converts the either into a [`Result`], mapping right to `Ok` and left to `Err`.
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Either::Left(l) => Err(l),
            Either::Right(r) => Ok(r),
        }
    }
}

impl<L, R> Either<L, Either<L, R>> {
    /// Collapse one layer of nesting.
    pub fn flatten(self) -> Either<L, R> {
        self.flat_map(|inner| inner)
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(res: Result<R, L>) -> Self {
        match res {
            Ok(r) => Either::Right(r),
            Err(l) => Either::Left(l),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        either.into_result()
    }
}
