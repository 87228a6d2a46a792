//! The List category
//!
//! An ordered, 0-indexed sequence. `List` (i.e. `List<Object>`) holds
//! values of any category; `List<T>` for a concrete `T` holds only that
//! type and converts foreign handles with a checked downcast.
//!
//! Ordering is lexicographic and fail-fast: the first pair of elements
//! that cannot be ordered aborts the comparison with
//! `UnsupportedOperation`.

use std::fmt;
use std::ops::Range;

use crate::core::category::Category;
use crate::core::display::{DebugConfig, DebugRender, write_sequence};
use crate::core::object::Object;
use crate::core::traits::BaseObject;
use crate::error::{ValueError, ValueResult};

/// Ordered sequence of `T`
#[derive(Debug, Clone, PartialEq)]
pub struct List<T = Object> {
    items: Vec<T>,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> List<T> {
    /// Create an empty list
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty list with room for `capacity` elements
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the list has no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Element at `index`, or `IndexError`
    pub fn at(&self, index: usize) -> ValueResult<&T> {
        let len = self.len();
        self.items
            .get(index)
            .ok_or_else(|| ValueError::index_error(index, len))
    }

    /// Mutable element at `index`, or `IndexError`
    pub fn at_mut(&mut self, index: usize) -> ValueResult<&mut T> {
        let len = self.len();
        self.items
            .get_mut(index)
            .ok_or_else(|| ValueError::index_error(index, len))
    }

    /// Element at `index`, `None` when out of range
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Get the first element
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Get the last element
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Append one element
    pub fn push(&mut self, value: impl Into<T>) {
        self.items.push(value.into());
    }

    /// Remove and return the last element
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Insert before `index`; `index == len()` appends
    pub fn insert(&mut self, index: usize, value: impl Into<T>) -> ValueResult<()> {
        if index > self.len() {
            return Err(ValueError::index_error(index, self.len()));
        }
        self.items.insert(index, value.into());
        Ok(())
    }

    /// Remove the element at `index`, or `IndexError`
    pub fn remove(&mut self, index: usize) -> ValueResult<T> {
        if index >= self.len() {
            return Err(ValueError::index_error(index, self.len()));
        }
        Ok(self.items.remove(index))
    }

    /// Move every element of `other` to the end of this list
    pub fn append(&mut self, mut other: List<T>) {
        self.items.append(&mut other.items);
    }

    /// Append every item of `iter`, converting each into `T`
    pub fn extend_from<I>(&mut self, iter: I)
    where
        I: IntoIterator,
        I::Item: Into<T>,
    {
        self.items.extend(iter.into_iter().map(Into::into));
    }

    pub fn reserve(&mut self, additional: usize) {
        self.items.reserve(additional);
    }

    /// Keep the first `len` elements
    pub fn truncate(&mut self, len: usize) {
        self.items.truncate(len);
    }

    /// Remove all elements
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterate over elements, front to back
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Borrow the elements as a slice
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: Clone> List<T> {
    /// Grow with copies of `value` or shrink to `len` elements
    pub fn resize(&mut self, len: usize, value: T) {
        self.items.resize(len, value);
    }

    /// Copy `other[range]` onto the end of this list
    pub fn append_range(&mut self, other: &List<T>, range: Range<usize>) -> ValueResult<()> {
        if range.start > range.end || range.end > other.len() {
            return Err(ValueError::index_error(range.end, other.len()));
        }
        self.items.extend_from_slice(&other.items[range]);
        Ok(())
    }
}

impl<T: PartialEq> List<T> {
    /// Check if any element equals `value`
    pub fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }

    /// Position of the first element equal to `value`
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.items.iter().position(|item| item == value)
    }
}

impl<T: BaseObject> List<T> {
    /// Push a type-erased value, downcasting it to `T`
    pub fn push_object(&mut self, value: Object) -> ValueResult<()> {
        self.items.push(T::from_object(value)?);
        Ok(())
    }

    /// Insert a type-erased value before `index`, downcasting it to `T`
    pub fn insert_object(&mut self, index: usize, value: Object) -> ValueResult<()> {
        if index > self.len() {
            return Err(ValueError::index_error(index, self.len()));
        }
        self.items.insert(index, T::from_object(value)?);
        Ok(())
    }

    /// Append every value or none: a single failed downcast leaves the
    /// list unchanged
    pub fn append_objects<I>(&mut self, values: I) -> ValueResult<()>
    where
        I: IntoIterator<Item = Object>,
    {
        let converted = values
            .into_iter()
            .map(T::from_object)
            .collect::<ValueResult<Vec<T>>>()?;
        self.items.extend(converted);
        Ok(())
    }
}

impl<T: DebugRender> DebugRender for List<T> {
    fn render(&self, out: &mut dyn fmt::Write, cfg: &DebugConfig, depth: usize) -> fmt::Result {
        write_sequence(out, cfg, depth, self.items.iter())
    }
}

impl<T: BaseObject> BaseObject for List<T> {
    const TYPE_NAME: &'static str = "List";

    fn category(&self) -> Category {
        Category::List
    }

    fn less(&self, other: &Self) -> ValueResult<bool> {
        for (a, b) in self.items.iter().zip(&other.items) {
            if a.less(b)? {
                return Ok(true);
            }
            if b.less(a)? {
                return Ok(false);
            }
        }
        Ok(self.len() < other.len())
    }

    fn greater(&self, other: &Self) -> ValueResult<bool> {
        for (a, b) in self.items.iter().zip(&other.items) {
            if a.greater(b)? {
                return Ok(true);
            }
            if b.greater(a)? {
                return Ok(false);
            }
        }
        Ok(self.len() > other.len())
    }

    fn into_object(self) -> Object {
        Object::List(self.items.into_iter().map(T::into_object).collect())
    }

    fn from_object(object: Object) -> ValueResult<Self> {
        match object {
            Object::List(list) => list.items.into_iter().map(T::from_object).collect(),
            other => Err(ValueError::type_error(Self::TYPE_NAME, other.category_name())),
        }
    }
}

impl<T: BaseObject> fmt::Display for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.debug_string())
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T, const N: usize> From<[T; N]> for List<T> {
    fn from(items: [T; N]) -> Self {
        Self {
            items: items.into(),
        }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::{Int32, Null, Text};

    fn ints(values: &[i64]) -> List {
        values.iter().map(|v| Object::from(*v)).collect()
    }

    #[test]
    fn test_index_access() {
        let mut list = ints(&[1, 2, 3]);
        assert_eq!(list.at(0).unwrap(), &Object::from(1i64));
        assert!(list.at(3).unwrap_err().is_index_error());
        *list.at_mut(1).unwrap() = Object::from("two");
        assert_eq!(list.at(1).unwrap(), &Object::from("two"));
        assert!(list.at_mut(10).is_err());
    }

    #[test]
    fn test_empty_list_access_fails() {
        let mut list = List::<Object>::new();
        assert_eq!(list.at(0).unwrap_err(), ValueError::index_error(0, 0));
        assert!(list.at_mut(0).unwrap_err().is_index_error());
        assert!(list.remove(0).unwrap_err().is_index_error());
        assert!(list.get(0).is_none());
    }

    #[test]
    fn test_insert_remove() {
        let mut list = ints(&[1, 3]);
        list.insert(1, 2i64).unwrap();
        list.insert(3, 4i64).unwrap();
        assert_eq!(list, ints(&[1, 2, 3, 4]));
        assert!(list.insert(9, 0i64).unwrap_err().is_index_error());

        assert_eq!(list.remove(0).unwrap(), Object::from(1i64));
        assert!(list.remove(3).is_err());
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_append_and_contains() {
        let mut list = ints(&[1]);
        list.append(ints(&[2, 3]));
        list.append_range(&ints(&[7, 8, 9]), 1..3).unwrap();
        assert_eq!(list, ints(&[1, 2, 3, 8, 9]));
        assert!(list.append_range(&ints(&[1]), 0..2).is_err());

        assert!(list.contains(&Object::from(8u8)));
        assert!(!list.contains(&Object::from("8")));
        assert_eq!(list.index_of(&Object::from(3.0f64)), Some(2));
    }

    #[test]
    fn test_lexicographic_order() {
        assert!(ints(&[1, 2, 3]).less(&ints(&[3, 2])).unwrap());
        assert!(ints(&[3, 2]).greater(&ints(&[1, 2, 3])).unwrap());
        assert!(ints(&[1, 2]).less(&ints(&[1, 2, 0])).unwrap());
        assert!(!ints(&[1, 2]).less(&ints(&[1, 2])).unwrap());
        assert!(ints(&[1, 2]).less_equal(&ints(&[1, 2])).unwrap());
    }

    #[test]
    fn test_incomparable_elements_fail() {
        let a: List = vec![Object::from(1i32), Object::from(2i32), Object::Null].into();
        let err = a.less(&a.clone()).unwrap_err();
        assert!(err.is_unsupported());

        let b: List = vec![Object::from("x")].into();
        let c: List = vec![Object::from(1i32)].into();
        assert!(b.less(&c).is_err());
        assert!(b.greater(&c).is_err());
    }

    #[test]
    fn test_equality() {
        assert_eq!(ints(&[1, 2]), ints(&[1, 2]));
        assert_ne!(ints(&[1, 2]), ints(&[1, 2, 3]));
        let mixed: List = vec![Object::from(1.0f32), Object::from(true)].into();
        assert_eq!(mixed, ints(&[1, 1]));
    }

    #[test]
    fn test_typed_list_downcasts() {
        let mut list = List::<Int32>::new();
        list.push_object(Object::from(Int32::new(5))).unwrap();
        assert!(list.push_object(Object::from("x")).unwrap_err().is_type_error());

        let err = list
            .append_objects([Object::from(Int32::new(6)), Object::Null])
            .unwrap_err();
        assert!(err.is_type_error());
        assert_eq!(list.len(), 1);

        list.insert_object(0, Object::from(Int32::new(4))).unwrap();
        assert_eq!(list.as_slice(), &[Int32::new(4), Int32::new(5)]);
    }

    #[test]
    fn test_erasure_round_trip() {
        let typed: List<Text> = vec![Text::from("a"), Text::from("b")].into();
        let erased = typed.clone().into_object();
        assert_eq!(erased.as_list().unwrap().len(), 2);
        assert_eq!(List::<Text>::from_object(erased).unwrap(), typed);

        let bad = Object::from(List::from(vec![Object::from(1i32)]));
        assert!(List::<Text>::from_object(bad).is_err());
        assert!(List::<Null>::from_object(Object::Null).is_err());
    }

    #[test]
    fn test_resize_truncate_iterate() {
        let mut list = ints(&[1]);
        list.resize(3, Object::Null);
        assert_eq!(list.len(), 3);
        assert!(list.at(2).unwrap().is_null());
        list.truncate(1);
        list.extend_from([2i64, 3]);

        let reversed: Vec<Object> = list.iter().rev().cloned().collect();
        assert_eq!(reversed, ints(&[3, 2, 1]).into_vec());

        for item in &mut list {
            item.set(0i32);
        }
        assert_eq!(list, ints(&[0, 0, 0]));
    }

    #[test]
    fn test_rendering() {
        let list: List = vec![Object::from(1i32), Object::from("a"), Object::Null].into();
        assert_eq!(list.debug_string(), "[ 1, \"a\", null ]");
        assert_eq!(list.short_debug_string(), "[1,\"a\",null]");
        assert_eq!(List::<Object>::new().debug_string(), "[]");
    }
}
