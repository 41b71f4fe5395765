use crate::StackError;

pub trait Lifo {
    type Item;

    type Popped;

    type Iter<'a>: DoubleEndedIterator<Item = &'a Self::Item> + ExactSizeIterator
    where
        Self: 'a;

    fn push(&mut self, value: Self::Item) -> Result<(), StackError>;

    fn pop(&mut self) -> Result<Self::Popped, StackError>;

    fn top(&self) -> Result<&Self::Item, StackError>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn capacity(&self) -> Option<usize> {
        None
    }

    fn clear(&mut self);

    fn iter(&self) -> Self::Iter<'_>;
}
