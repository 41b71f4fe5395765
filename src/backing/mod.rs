mod deque;
mod vec;

pub trait Backing<T>: Default {
    type Iter<'a>: DoubleEndedIterator<Item = &'a T> + ExactSizeIterator
    where
        Self: 'a,
        T: 'a;

    fn push_back(&mut self, value: T);

    fn pop_back(&mut self) -> Option<T>;

    fn back(&self) -> Option<&T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self);

    fn reserve(&mut self, _additional: usize) {}

    fn iter(&self) -> Self::Iter<'_>;
}

pub trait DoubleEndedBacking<T>: Backing<T> {
    fn push_front(&mut self, value: T);

    fn pop_front(&mut self) -> Option<T>;

    fn front(&self) -> Option<&T>;
}
