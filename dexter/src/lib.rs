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

//! A law-abiding two-armed result type.
//!
//! [`Either<L, R>`] holds exactly one of a failure value ([`Either::Left`]) or a success value ([`Either::Right`]).
//! All combinators are right-biased and short-circuit on the first failure:
//!
//! ```
//! use dexter::Either;
//!
//! let parsed: Either<String, i32> = Either::of(5);
//! let doubled = parsed
//!     .filter_or_else(|x| *x > 0, |x| format!("{x} is not positive"))
//!     .map(|x| x * 2);
//! assert_eq!(doubled, Either::Right(10));
//!
//! let failed: Either<String, i32> = Either::of_left("boom".to_string());
//! assert_eq!(failed.map(|x| x * 2).get_or_else(|e| e.len() as i32), 4);
//! ```
//!
//! Panics are only ever caught by [`Either::try_catch`]; a panic raised by any other callback reaches the caller.

mod construct;
mod either;
mod iter;
mod panic;

pub mod algebra;
/// Commonly used types, traits and functions.
pub mod prelude;
pub mod typeclass;

pub use crate::{either::Either, iter::partition, panic::Panic};
