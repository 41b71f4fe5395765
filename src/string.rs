use std::collections::{vec_deque, VecDeque};

use crate::{Lifo, Stack, StackError};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringStack {
    elements: Stack<String, VecDeque<String>>,
}

impl StringStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, text: impl Into<String>) {
        self.elements.push(text.into());
    }

    pub fn pop(&mut self) -> Result<(), StackError> {
        self.elements.pop()
    }

    pub fn top(&self) -> Result<&str, StackError> {
        self.elements.top().map(String::as_str)
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

    pub fn iter(&self) -> vec_deque::Iter<'_, String> {
        self.elements.iter()
    }

    pub fn assign_from<S>(&mut self, source: &S)
    where
        S: Lifo,
        S::Item: Clone,
        String: From<S::Item>,
    {
        self.elements.assign_from(source);
    }
}

impl<S: Into<String>> FromIterator<S> for StringStack {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a StringStack {
    type Item = &'a String;
    type IntoIter = vec_deque::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Lifo for StringStack {
    type Item = String;
    type Popped = ();
    type Iter<'a> = vec_deque::Iter<'a, String>
    where
        Self: 'a;

    fn push(&mut self, text: String) -> Result<(), StackError> {
        StringStack::push(self, text);
        Ok(())
    }

    fn pop(&mut self) -> Result<(), StackError> {
        StringStack::pop(self)
    }

    fn top(&self) -> Result<&String, StackError> {
        self.elements.top()
    }

    fn len(&self) -> usize {
        self.elements.len()
    }

    fn clear(&mut self) {
        self.elements.clear();
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.elements.iter()
    }
}
