use std::{fmt, slice};

use crate::{error::Operation, Lifo, StackError};

#[derive(Clone)]
pub struct BoundedStack<T, const N: usize> {
    elements: [T; N],
    len: usize,
}

impl<T: Default, const N: usize> BoundedStack<T, N> {
    pub fn new() -> Self {
        Self {
            elements: std::array::from_fn(|_| T::default()),
            len: 0,
        }
    }

    pub fn pop(&mut self) -> Result<(), StackError> {
        let Some(top) = self.len.checked_sub(1) else {
            return Err(StackError::empty(dbg_line!(), Operation::Pop));
        };
        self.elements[top] = T::default();
        self.len = top;
        Ok(())
    }

    pub fn clear(&mut self) {
        for slot in &mut self.elements[..self.len] {
            *slot = T::default();
        }
        self.len = 0;
    }

    pub fn assign_from<S>(&mut self, source: &S) -> Result<(), StackError>
    where
        S: Lifo,
        S::Item: Clone,
        T: From<S::Item>,
    {
        crate::assign(self, source)
    }
}

impl<T, const N: usize> BoundedStack<T, N> {
    pub const CAPACITY: usize = N;

    pub fn push(&mut self, value: T) -> Result<(), StackError> {
        if self.len == N {
            return Err(StackError::capacity_exceeded(
                dbg_line!(),
                Operation::Push,
                N,
                N + 1,
            ));
        }
        self.elements[self.len] = value;
        self.len += 1;
        Ok(())
    }

    pub fn top(&self) -> Result<&T, StackError> {
        self.as_slice()
            .last()
            .ok_or_else(|| StackError::empty(dbg_line!(), Operation::Top))
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == N
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn as_slice(&self) -> &[T] {
        &self.elements[..self.len]
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }
}

impl<T: Default, const N: usize> Default for BoundedStack<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for BoundedStack<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedStack")
            .field("capacity", &N)
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq, const N: usize> PartialEq for BoundedStack<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a BoundedStack<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Default, const N: usize> Lifo for BoundedStack<T, N> {
    type Item = T;
    type Popped = ();
    type Iter<'a> = slice::Iter<'a, T>
    where
        Self: 'a;

    fn push(&mut self, value: T) -> Result<(), StackError> {
        BoundedStack::push(self, value)
    }

    fn pop(&mut self) -> Result<(), StackError> {
        BoundedStack::pop(self)
    }

    fn top(&self) -> Result<&T, StackError> {
        BoundedStack::top(self)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> Option<usize> {
        Some(N)
    }

    fn clear(&mut self) {
        BoundedStack::clear(self);
    }

    fn iter(&self) -> Self::Iter<'_> {
        BoundedStack::iter(self)
    }
}
