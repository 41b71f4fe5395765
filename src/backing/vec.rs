use std::slice;

use super::Backing;

impl<T> Backing<T> for Vec<T> {
    type Iter<'a> = slice::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn push_back(&mut self, value: T) {
        self.push(value);
    }

    #[inline]
    fn pop_back(&mut self) -> Option<T> {
        self.pop()
    }

    #[inline]
    fn back(&self) -> Option<&T> {
        self.last()
    }

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn reserve(&mut self, additional: usize) {
        Vec::reserve(self, additional);
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }
}
