use std::collections::{vec_deque, VecDeque};

use super::{Backing, DoubleEndedBacking};

impl<T> Backing<T> for VecDeque<T> {
    type Iter<'a> = vec_deque::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn push_back(&mut self, value: T) {
        VecDeque::push_back(self, value);
    }

    #[inline]
    fn pop_back(&mut self) -> Option<T> {
        VecDeque::pop_back(self)
    }

    #[inline]
    fn back(&self) -> Option<&T> {
        VecDeque::back(self)
    }

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn clear(&mut self) {
        VecDeque::clear(self);
    }

    fn reserve(&mut self, additional: usize) {
        VecDeque::reserve(self, additional);
    }

    fn iter(&self) -> Self::Iter<'_> {
        VecDeque::iter(self)
    }
}

impl<T> DoubleEndedBacking<T> for VecDeque<T> {
    #[inline]
    fn push_front(&mut self, value: T) {
        VecDeque::push_front(self, value);
    }

    #[inline]
    fn pop_front(&mut self) -> Option<T> {
        VecDeque::pop_front(self)
    }

    #[inline]
    fn front(&self) -> Option<&T> {
        VecDeque::front(self)
    }
}
