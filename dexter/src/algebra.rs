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

//! Equality and combination rules for [`Either`], built from rules for the contained types.

use crate::either::Either;

/// Build an equality check for eithers from equality checks for each side.
///
/// Two eithers are equal iff they hold the same variant and the held values are equal under the matching check.
pub fn equality_for<L, R, EL, ER>(eq_l: EL, eq_r: ER) -> impl Fn(&Either<L, R>, &Either<L, R>) -> bool
where
    EL: Fn(&L, &L) -> bool,
    ER: Fn(&R, &R) -> bool,
{
    move |a, b| match (a, b) {
        (Either::Left(a), Either::Left(b)) => eq_l(a, b),
        (Either::Right(a), Either::Right(b)) => eq_r(a, b),
        (Either::Left(_), Either::Right(_)) | (Either::Right(_), Either::Left(_)) => false,
    }
}

/// Build a combination rule for eithers from a combination rule for right values.
///
/// - Two right values are combined with `combine_r`.
/// - A right value wins over a left value, on either side.
/// - Of two left values, the first one wins.
pub fn combiner_for<L, R, CR>(combine_r: CR) -> impl Fn(Either<L, R>, Either<L, R>) -> Either<L, R>
where
    CR: Fn(R, R) -> R,
{
    move |a, b| match (a, b) {
        (Either::Right(a), Either::Right(b)) => Either::Right(combine_r(a, b)),
        (right @ Either::Right(_), Either::Left(_)) => right,
        (Either::Left(_), right @ Either::Right(_)) => right,
        (left @ Either::Left(_), Either::Left(_)) => left,
    }
}

/// An associative binary operation.
///
/// Implementations must satisfy `a.combine(b).combine(c) == a.combine(b.combine(c))`.
pub trait Semigroup {
    /// Combine two values into one.
    fn combine(self, other: Self) -> Self;
}

impl Semigroup for () {
    fn combine(self, _: Self) -> Self {}
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

impl<L, R> Semigroup for Either<L, R>
where
    R: Semigroup,
{
    fn combine(self, other: Self) -> Self {
        combiner_for(R::combine)(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type E = Either<&'static str, i32>;

    #[test]
    fn test_equality_for() {
        let eq = equality_for(
            |a: &&'static str, b: &&'static str| a.eq_ignore_ascii_case(b),
            |a: &i32, b: &i32| a % 10 == b % 10,
        );

        assert!(eq(&E::Left("ERR"), &E::Left("err")));
        assert!(!eq(&E::Left("err"), &E::Left("other")));
        assert!(eq(&E::Right(1), &E::Right(11)));
        assert!(!eq(&E::Right(1), &E::Right(2)));
    }

    #[test]
    fn test_equality_for_cross_variant() {
        let eq = equality_for(|_: &i32, _: &i32| true, |_: &i32, _: &i32| true);
        assert!(!eq(&Either::Left(1), &Either::Right(1)));
        assert!(!eq(&Either::Right(1), &Either::Left(1)));
    }

    #[test]
    fn test_combiner_for() {
        let combine = combiner_for(|a: i32, b: i32| a + b);

        assert_eq!(combine(E::Right(1), E::Right(2)), Either::Right(3));
        assert_eq!(combine(E::Right(1), E::Left("b")), Either::Right(1));
        assert_eq!(combine(E::Left("a"), E::Right(2)), Either::Right(2));
        assert_eq!(combine(E::Left("a"), E::Left("b")), Either::Left("a"));
    }

    #[test]
    fn test_semigroup() {
        assert_eq!("ab".to_string().combine("cd".to_string()), "abcd");
        assert_eq!(vec![1].combine(vec![2, 3]), vec![1, 2, 3]);

        let a: Either<&str, String> = Either::Right("a".to_string());
        let b: Either<&str, String> = Either::Right("b".to_string());
        assert_eq!(a.combine(b), Either::Right("ab".to_string()));

        let a: Either<&str, Vec<i32>> = Either::Left("x");
        let b: Either<&str, Vec<i32>> = Either::Left("y");
        assert_eq!(a.combine(b), Either::Left("x"));
    }

    #[test]
    fn test_semigroup_associative() {
        let values: Vec<Either<&str, String>> = vec![
            Either::Left("l1"),
            Either::Left("l2"),
            Either::Right("r1".to_string()),
            Either::Right("r2".to_string()),
        ];
        for a in &values {
            for b in &values {
                for c in &values {
                    let lhs = a.clone().combine(b.clone()).combine(c.clone());
                    let rhs = a.clone().combine(b.clone().combine(c.clone()));
                    assert_eq!(lhs, rhs, "a={a:?}, b={b:?}, c={c:?}");
                }
            }
        }
    }
}
