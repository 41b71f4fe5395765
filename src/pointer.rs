use std::fmt;

use crate::{backing::Backing, Lifo, Stack, StackError};

/// Stores addresses only. Pointees are never read, written or freed.
pub struct PointerStack<T, B: Backing<*mut T> = Vec<*mut T>> {
    addresses: Stack<*mut T, B>,
}

impl<T, B: Backing<*mut T>> PointerStack<T, B> {
    pub fn new() -> Self {
        Self {
            addresses: Stack::new(),
        }
    }

    pub fn push(&mut self, address: *mut T) {
        self.addresses.push(address);
    }

    pub fn push_ref(&mut self, value: &mut T) {
        self.push(value);
    }

    pub fn pop(&mut self) -> Result<*mut T, StackError> {
        self.addresses.take()
    }

    pub fn top(&self) -> Result<*mut T, StackError> {
        self.addresses.top().copied()
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    pub fn clear(&mut self) {
        self.addresses.clear();
    }

    pub fn iter(&self) -> B::Iter<'_> {
        self.addresses.iter()
    }
}

impl<T, B: Backing<*mut T>> Default for PointerStack<T, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, B: Backing<*mut T> + Clone> Clone for PointerStack<T, B> {
    fn clone(&self) -> Self {
        Self {
            addresses: self.addresses.clone(),
        }
    }
}

impl<T, B: Backing<*mut T>> fmt::Debug for PointerStack<T, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, B: Backing<*mut T>> Lifo for PointerStack<T, B> {
    type Item = *mut T;
    type Popped = *mut T;
    type Iter<'a> = B::Iter<'a>
    where
        Self: 'a;

    fn push(&mut self, address: *mut T) -> Result<(), StackError> {
        PointerStack::push(self, address);
        Ok(())
    }

    fn pop(&mut self) -> Result<*mut T, StackError> {
        PointerStack::pop(self)
    }

    fn top(&self) -> Result<&*mut T, StackError> {
        self.addresses.top()
    }

    fn len(&self) -> usize {
        self.addresses.len()
    }

    fn clear(&mut self) {
        self.addresses.clear();
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.addresses.iter()
    }
}
