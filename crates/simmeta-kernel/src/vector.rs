//! Fixed-dimension numeric vectors
//!
//! Components describe positions, velocities and grid extents with small
//! vectors. In a document a vector is an array whose element `i` is component
//! `i`.

use crate::document::Document;
use serde::ser::{Serialize, Serializer};
use std::ops::{Index, IndexMut};

/// A vector of `D` components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector<T, const D: usize>(pub [T; D]);

/// Three-component vector of `f64`, the common case for SI quantities.
pub type Float3 = Vector<f64, 3>;

impl<T, const D: usize> Vector<T, D> {
    pub const fn new(components: [T; D]) -> Self {
        Self(components)
    }

    /// Number of components.
    pub const fn dim(&self) -> usize {
        D
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }
}

impl<T: Copy, const D: usize> Vector<T, D> {
    /// Vector with every component set to `value`.
    pub fn splat(value: T) -> Self {
        Self([value; D])
    }
}

impl<T: Clone, const D: usize> Vector<T, D> {
    /// Components in index order.
    pub fn to_sequence(&self) -> Vec<T> {
        self.0.to_vec()
    }
}

/// Components of `vector` in index order.
pub fn to_sequence<T: Clone, const D: usize>(vector: &Vector<T, D>) -> Vec<T> {
    vector.to_sequence()
}

impl<T, const D: usize> From<[T; D]> for Vector<T, D> {
    fn from(components: [T; D]) -> Self {
        Self(components)
    }
}

impl<T, const D: usize> Index<usize> for Vector<T, D> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T, const D: usize> IndexMut<usize> for Vector<T, D> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}

impl<T: Serialize, const D: usize> Serialize for Vector<T, D> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}

impl<T, const D: usize> From<Vector<T, D>> for Document
where
    T: Into<Document>,
{
    fn from(vector: Vector<T, D>) -> Self {
        Document::Array(vector.0.into_iter().map(Into::into).collect())
    }
}
