use crate::{Lifo, PointerStack, Stack, StringStack};

pub trait StackElement: Sized {
    type Stack: Lifo<Item = Self> + Default;
}

pub type StackOf<T> = <T as StackElement>::Stack;

macro_rules! value_elements {
    ($($type: ty),* $(,)?) => {
        $(
            impl StackElement for $type {
                type Stack = Stack<$type>;
            }
        )*
    };
}

value_elements!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
);

impl StackElement for String {
    type Stack = StringStack;
}

impl<T> StackElement for *mut T {
    type Stack = PointerStack<T>;
}
