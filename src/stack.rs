use std::{fmt, marker::PhantomData};

use crate::{backing::Backing, error::Operation, Lifo, StackError};

pub struct Stack<T, B: Backing<T> = Vec<T>> {
    elements: B,
    element: PhantomData<T>,
}

impl<T, B: Backing<T>> Stack<T, B> {
    pub fn new() -> Self {
        Self {
            elements: B::default(),
            element: PhantomData,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut stack = Self::new();
        stack.elements.reserve(capacity);
        stack
    }

    pub fn push(&mut self, value: T) {
        self.elements.push_back(value);
    }

    pub fn pop(&mut self) -> Result<(), StackError> {
        self.take().map(drop)
    }

    pub fn top(&self) -> Result<&T, StackError> {
        self.elements
            .back()
            .ok_or_else(|| StackError::empty(dbg_line!(), Operation::Top))
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    pub fn iter(&self) -> B::Iter<'_> {
        self.elements.iter()
    }

    pub fn assign_from<S>(&mut self, source: &S)
    where
        S: Lifo,
        S::Item: Clone,
        T: From<S::Item>,
    {
        self.elements.clear();
        self.extend(source.iter().cloned().map(T::from));
        tracing::trace!(elements = self.len(), "assigned stack contents");
    }

    pub(crate) fn take(&mut self) -> Result<T, StackError> {
        self.elements
            .pop_back()
            .ok_or_else(|| StackError::empty(dbg_line!(), Operation::Pop))
    }
}

impl<T, B: Backing<T>> Default for Stack<T, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, B: Backing<T> + Clone> Clone for Stack<T, B> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
            element: PhantomData,
        }
    }
}

impl<T: fmt::Debug, B: Backing<T>> fmt::Debug for Stack<T, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, B: Backing<T>> PartialEq for Stack<T, B> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq, B: Backing<T>> Eq for Stack<T, B> {}

impl<T, B: Backing<T>, const N: usize> From<[T; N]> for Stack<T, B> {
    fn from(array: [T; N]) -> Self {
        array.into_iter().collect()
    }
}

impl<T, B: Backing<T>> FromIterator<T> for Stack<T, B> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

impl<T, B: Backing<T>> Extend<T> for Stack<T, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.elements.reserve(iter.size_hint().0);
        for value in iter {
            self.elements.push_back(value);
        }
    }
}

impl<'a, T, B: Backing<T>> IntoIterator for &'a Stack<T, B> {
    type Item = &'a T;
    type IntoIter = B::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, B: Backing<T>> Lifo for Stack<T, B> {
    type Item = T;
    type Popped = ();
    type Iter<'a> = B::Iter<'a>
    where
        Self: 'a;

    fn push(&mut self, value: T) -> Result<(), StackError> {
        Stack::push(self, value);
        Ok(())
    }

    fn pop(&mut self) -> Result<(), StackError> {
        Stack::pop(self)
    }

    fn top(&self) -> Result<&T, StackError> {
        Stack::top(self)
    }

    fn len(&self) -> usize {
        Stack::len(self)
    }

    fn clear(&mut self) {
        Stack::clear(self);
    }

    fn iter(&self) -> Self::Iter<'_> {
        Stack::iter(self)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use crate::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lifo_order() {
        let mut stack: Stack<i32> = Stack::new();
        for value in 1..=5 {
            stack.push(value);
        }

        let mut popped = Vec::new();
        while !stack.is_empty() {
            popped.push(*stack.top().unwrap());
            stack.pop().unwrap();
        }

        assert_eq!(popped, [5, 4, 3, 2, 1]);
        assert!(stack.is_empty());
    }

    #[test]
    fn empty_tracks_count() {
        let mut stack: Stack<&str, VecDeque<&str>> = Stack::new();
        assert!(stack.is_empty());

        stack.push("hello");
        assert!(!stack.is_empty());
        stack.push("world");
        stack.pop().unwrap();
        assert!(!stack.is_empty());
        stack.pop().unwrap();
        assert!(stack.is_empty());
    }

    #[test]
    fn empty_stack_rejects_pop_and_top() {
        let mut stack: Stack<i32> = Stack::default();

        let Err(StackError::Empty(error)) = stack.pop() else {
            panic!("Expected pop on an empty stack to fail");
        };
        assert_eq!(error.operation, Operation::Pop);

        let Err(StackError::Empty(error)) = stack.top() else {
            panic!("Expected top on an empty stack to fail");
        };
        assert_eq!(error.operation, Operation::Top);

        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn top_does_not_mutate() {
        let stack = Stack::<i32>::from([1, 2, 3]);
        for _ in 0..10 {
            assert_eq!(stack.top(), Ok(&3));
        }
        assert_eq!(stack.len(), 3);
    }

    #[test]
    fn backing_policies_are_independent() {
        let mut ints: Stack<i32> = Stack::with_capacity(4);
        let mut doubles: Stack<f64, VecDeque<f64>> = Stack::new();

        ints.push(7);
        doubles.push(42.42);

        assert_eq!(ints.top(), Ok(&7));
        assert_eq!(doubles.top(), Ok(&42.42));

        ints.pop().unwrap();
        doubles.pop().unwrap();
        assert!(ints.is_empty() && doubles.is_empty());
    }

    #[test]
    fn collects_bottom_to_top() {
        let stack: Stack<char> = "abc".chars().collect();
        assert_eq!(stack.top(), Ok(&'c'));

        let items: String = stack.iter().collect();
        assert_eq!(items, "abc");
        assert_eq!(format!("{stack:?}"), "['a', 'b', 'c']");
    }

    #[test]
    fn assign_widens_and_keeps_order() {
        let source = Stack::<i32>::from([10, 20, 30]);
        let mut destination: Stack<f64, VecDeque<f64>> = Stack::from([5.5, 6.6, 7.7, 8.8]);

        destination.assign_from(&source);

        assert_eq!(destination.len(), 3);
        assert_eq!(destination.iter().copied().collect::<Vec<_>>(), [10.0, 20.0, 30.0]);
        assert_eq!(source.len(), 3);
        assert_eq!(source.top(), Ok(&30));
    }

    #[test]
    fn equality_is_element_wise() {
        let a = Stack::<i32>::from([1, 2]);
        let mut b = Stack::<i32>::new();
        b.push(1);
        assert_ne!(a, b);
        b.push(2);
        assert_eq!(a, b);
    }
}
