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

use std::cell::Cell;

use dexter::prelude::*;
use proptest::prelude::*;

type E = Either<String, i32>;

fn either() -> impl Strategy<Value = E> {
    prop_oneof![
        "[a-z]{0,8}".prop_map(E::Left),
        any::<i32>().prop_map(E::Right),
    ]
}

fn halve(x: i32) -> E {
    if x % 2 == 0 {
        Either::Right(x / 2)
    } else {
        Either::Left(format!("{x} is odd"))
    }
}

fn shrink(x: i32) -> E {
    if x > 100 {
        Either::Right(x - 100)
    } else {
        Either::Left(format!("{x} is too small"))
    }
}

proptest! {
    #[test]
    fn functor_identity(e in either()) {
        prop_assert_eq!(e.clone().map(|x| x), e);
    }

    #[test]
    fn functor_composition(e in either()) {
        let f = |x: i32| x.wrapping_add(7);
        let g = |x: i32| x.wrapping_mul(3);
        prop_assert_eq!(e.clone().map(f).map(g), e.map(|x| g(f(x))));
    }

    #[test]
    fn monad_left_identity(x in any::<i32>()) {
        prop_assert_eq!(E::of(x).flat_map(halve), halve(x));
    }

    #[test]
    fn monad_right_identity(e in either()) {
        prop_assert_eq!(e.clone().flat_map(E::of), e);
    }

    #[test]
    fn monad_associativity(e in either()) {
        prop_assert_eq!(
            e.clone().flat_map(halve).flat_map(shrink),
            e.flat_map(|x| halve(x).flat_map(shrink))
        );
    }

    #[test]
    fn swap_involution(e in either()) {
        prop_assert_eq!(e.clone().swap().swap(), e);
    }

    #[test]
    fn left_right_exclusive(e in either()) {
        prop_assert!(e.is_left() != e.is_right());
    }

    #[test]
    fn short_circuit_on_left(l in "[a-z]{1,8}", steps in 1usize..8) {
        let calls = Cell::new(0);
        let mut e = E::Left(l.clone());
        for _ in 0..steps {
            e = e.flat_map(|x| {
                calls.set(calls.get() + 1);
                E::Right(x)
            });
        }
        prop_assert_eq!(e, E::Left(l));
        prop_assert_eq!(calls.get(), 0);
    }

    #[test]
    fn duplicate_then_flatten(e in either()) {
        prop_assert_eq!(e.clone().duplicate().flatten(), e);
    }

    #[test]
    fn map_agrees_with_fmap(e in either()) {
        prop_assert_eq!(e.clone().map(|x| x / 3), e.fmap(|x| x / 3));
    }

    #[test]
    fn equality_for_agrees_with_eq(a in either(), b in either()) {
        let eq = equality_for(|a: &String, b: &String| a == b, |a: &i32, b: &i32| a == b);
        prop_assert_eq!(eq(&a, &b), a == b);
    }
}

#[test]
fn test_scenarios() {
    assert_eq!(E::of(5).map(|x| x * 2), Either::Right(10));
    assert_eq!(
        E::of_left("err".to_string()).map(|_| -> i32 { unreachable!() }),
        Either::Left("err".to_string())
    );
    assert_eq!(
        E::of(5).flat_map(|x| if x > 0 { E::of(x) } else { E::of_left("neg".to_string()) }),
        Either::Right(5)
    );
    assert_eq!(
        E::of_left("e".to_string()).or_else(|_| Either::<String, i32>::of(0)),
        Either::Right(0)
    );
    assert_eq!(
        E::from_nullable(None, || "was null".to_string()),
        Either::Left("was null".to_string())
    );
}

#[test_log::test]
fn test_try_catch_scenario() {
    let res = E::try_catch(|| panic!("boom"), |e, _| e.message().to_string());
    assert_eq!(res, Either::Left("boom".to_string()));
}

#[test]
fn test_variant_sensitive_equality() {
    assert_ne!(Either::<i32, i32>::Left(1), Either::<i32, i32>::Right(1));
}
