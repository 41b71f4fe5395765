use std::fmt::{self, Display};

use miette::{Diagnostic, ErrReport};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Push,
    Pop,
    Top,
    Assign,
}

impl Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Push => "push",
            Operation::Pop => "pop",
            Operation::Top => "top",
            Operation::Assign => "assign",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum StackError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Empty(#[from] EmptyStack),

    #[error(transparent)]
    #[diagnostic(transparent)]
    CapacityExceeded(#[from] CapacityExceeded),
}

impl StackError {
    pub fn into_err_report(self) -> ErrReport {
        self.into()
    }

    pub(crate) fn empty(dbg_line: String, operation: Operation) -> Self {
        tracing::debug!(%operation, %dbg_line, "rejected operation on empty stack");
        EmptyStack {
            dbg_line,
            operation,
        }
        .into()
    }

    pub(crate) fn capacity_exceeded(
        dbg_line: String,
        operation: Operation,
        capacity: usize,
        requested: usize,
    ) -> Self {
        tracing::debug!(%operation, capacity, requested, "rejected operation over capacity");
        CapacityExceeded {
            dbg_line,
            operation,
            capacity,
            requested,
        }
        .into()
    }
}

#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
#[error("empty-stack")]
#[diagnostic(
    code(stack::empty),
    help("[{}] `{}` needs at least one element, but the stack is empty", self.dbg_line, self.operation),
)]
pub struct EmptyStack {
    pub dbg_line: String,
    pub operation: Operation,
}

#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
#[error("capacity-exceeded")]
#[diagnostic(
    code(stack::capacity_exceeded),
    help(
        "[{}] `{}` needs room for {} elements, but the stack holds at most {}",
        self.dbg_line, self.operation, self.requested, self.capacity
    ),
)]
pub struct CapacityExceeded {
    pub dbg_line: String,
    pub operation: Operation,
    pub capacity: usize,
    pub requested: usize,
}

#[cfg(test)]
mod tests {
    use crate::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn operation_display() {
        assert_eq!(Operation::Push.to_string(), "push");
        assert_eq!(Operation::Assign.to_string(), "assign");
    }

    #[test]
    fn empty_diagnostic() {
        let error = StackError::empty(dbg_line!(), Operation::Top);
        assert_eq!(error.to_string(), "empty-stack");

        let report = error.into_err_report();
        let code = report.code().map(|code| code.to_string());
        assert_eq!(code.as_deref(), Some("stack::empty"));

        let help = report.help().map(|help| help.to_string()).unwrap_or_default();
        assert!(help.contains("`top` needs at least one element"));
    }

    #[test]
    fn capacity_diagnostic() {
        let error = StackError::capacity_exceeded(dbg_line!(), Operation::Push, 5, 6);
        let StackError::CapacityExceeded(inner) = &error else {
            panic!("Expected a capacity error, got {error:?}");
        };
        assert_eq!(inner.capacity, 5);
        assert_eq!(inner.requested, 6);

        let report = error.into_err_report();
        let help = report.help().map(|help| help.to_string()).unwrap_or_default();
        assert!(help.contains("room for 6 elements"));
        assert!(help.contains("at most 5"));
    }
}
