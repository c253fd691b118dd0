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

use crate::either::Either;

impl<L, R> Either<L, R> {
    /// Iterate over the right value, if any.
    pub fn iter(&self) -> std::option::IntoIter<&R> {
        self.right_ref().into_iter()
    }

    /// Iterate mutably over the right value, if any.
    pub fn iter_mut(&mut self) -> std::option::IntoIter<&mut R> {
        self.as_mut().right().into_iter()
    }
}

impl<L, R> IntoIterator for Either<L, R> {
    type Item = R;
    type IntoIter = std::option::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.right().into_iter()
    }
}

impl<'a, L, R> IntoIterator for &'a Either<L, R> {
    type Item = &'a R;
    type IntoIter = std::option::IntoIter<&'a R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, L, R> IntoIterator for &'a mut Either<L, R> {
    type Item = &'a mut R;
    type IntoIter = std::option::IntoIter<&'a mut R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Collects the right values, stopping at the first left value.
///
/// No item is pulled from the source after the first left value.
impl<L, R, V> FromIterator<Either<L, R>> for Either<L, V>
where
    V: FromIterator<R>,
{
    fn from_iter<I: IntoIterator<Item = Either<L, R>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Either::into_result)
            .collect::<Result<V, L>>()
            .into()
    }
}

/// Split eithers into left values and right values, keeping their order.
pub fn partition<L, R, I>(iter: I) -> (Vec<L>, Vec<R>)
where
    I: IntoIterator<Item = Either<L, R>>,
{
    let mut lefts = vec![];
    let mut rights = vec![];
    for either in iter {
        match either {
            Either::Left(l) => lefts.push(l),
            Either::Right(r) => rights.push(r),
        }
    }
    (lefts, rights)
}
