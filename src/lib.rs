#[macro_export]
macro_rules! dbg_line {
    () => {
        format!("{}:{}", file!(), line!())
    };
}

mod assign;
pub mod backing;
mod bounded;
pub mod error;
mod lifo;
mod pointer;
mod select;
mod stack;
mod string;

pub use assign::assign;
pub use backing::{Backing, DoubleEndedBacking};
pub use bounded::BoundedStack;
pub use error::{CapacityExceeded, EmptyStack, Operation, StackError};
pub use lifo::Lifo;
pub use pointer::PointerStack;
pub use select::{StackElement, StackOf};
pub use stack::Stack;
pub use string::StringStack;
