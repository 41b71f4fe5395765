use std::collections::VecDeque;

use miette::{Diagnostic, Result, SourceSpan};
use stacks::{BoundedStack, Lifo, Stack, StackError};
use thiserror::Error;

pub const BOUNDED_CAPACITY: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Push(i64),
    Pop,
    Top,
    Len,
    Empty,
}

#[derive(Error, Debug, Diagnostic, Clone)]
#[error("unknown-operation")]
#[diagnostic(
    code(eval::unknown_operation),
    help("[{}] Expected push:<integer>, pop, top, len or empty, got {:?} instead", self.dbg_line, self.actual),
)]
pub struct UnknownOperation {
    pub dbg_line: String,
    pub actual: String,
    #[source_code]
    pub src: String,
    #[label("Unknown operation: {:?}", self.actual)]
    pub position: SourceSpan,
}

#[derive(Error, Debug, Diagnostic, Clone)]
#[error("rejected-operation")]
#[diagnostic(
    code(eval::rejected_operation),
    help("[{}] Operation {} was rejected, the ones before it were applied", self.dbg_line, self.index + 1),
)]
pub struct RejectedOperation {
    pub dbg_line: String,
    pub index: usize,
    #[source]
    #[diagnostic_source]
    pub error: StackError,
    #[source_code]
    pub src: String,
    #[label("Rejected: {}", self.error)]
    pub position: SourceSpan,
}

#[derive(Debug, Default)]
pub struct Evaluation {
    pub lines: Vec<String>,
    pub rejected: Option<(usize, StackError)>,
}

// Non-empty words with their byte offsets.
fn words(source: &str) -> impl Iterator<Item = (usize, &str)> {
    source
        .split(' ')
        .scan(0, |offset, word| {
            let start = *offset;
            *offset += word.len() + 1;
            Some((start, word))
        })
        .filter(|(_, word)| !word.is_empty())
}

pub fn parse(source: &str) -> Result<Vec<Op>, UnknownOperation> {
    words(source)
        .map(|(start, word)| {
            let op = match word {
                "pop" => Some(Op::Pop),
                "top" => Some(Op::Top),
                "len" => Some(Op::Len),
                "empty" => Some(Op::Empty),
                _ => word
                    .strip_prefix("push:")
                    .and_then(|value| value.parse().ok())
                    .map(Op::Push),
            };

            op.ok_or_else(|| UnknownOperation {
                dbg_line: stacks::dbg_line!(),
                actual: word.to_owned(),
                src: source.to_owned(),
                position: (start, word.len()).into(),
            })
        })
        .collect()
}

// Stops at the first rejected operation.
pub fn apply<S: Lifo<Item = i64>>(stack: &mut S, ops: &[Op]) -> Evaluation {
    let mut evaluation = Evaluation {
        lines: Vec::with_capacity(ops.len()),
        rejected: None,
    };

    for (index, op) in ops.iter().enumerate() {
        match step(stack, *op) {
            Ok(line) => evaluation.lines.push(line),
            Err(error) => {
                evaluation.rejected = Some((index, error));
                break;
            }
        }
    }
    evaluation
}

fn step<S: Lifo<Item = i64>>(stack: &mut S, op: Op) -> Result<String, StackError> {
    Ok(match op {
        Op::Push(value) => {
            stack.push(value)?;
            format!("push {value}")
        }
        Op::Pop => {
            stack.pop()?;
            "pop".to_owned()
        }
        Op::Top => format!("top -> {}", stack.top()?),
        Op::Len => format!("len -> {}", stack.len()),
        Op::Empty => format!("empty -> {}", stack.is_empty()),
    })
}

fn rejected(source: &str, index: usize, error: StackError) -> RejectedOperation {
    let position = words(source)
        .nth(index)
        .map(|(start, word)| (start, word.len()))
        .unwrap_or((0, source.len()));

    RejectedOperation {
        dbg_line: stacks::dbg_line!(),
        index,
        error,
        src: source.to_owned(),
        position: position.into(),
    }
}

pub fn run(backing: &str, source: &str) -> Result<()> {
    let ops = parse(source)?;
    tracing::debug!(backing, operations = ops.len(), "evaluating");

    let evaluation = match backing {
        "deque" => apply(&mut Stack::<i64, VecDeque<i64>>::new(), &ops),
        "bounded" => apply(&mut BoundedStack::<i64, BOUNDED_CAPACITY>::new(), &ops),
        _ => apply(&mut Stack::<i64>::new(), &ops),
    };

    for line in &evaluation.lines {
        println!("{line}");
    }

    match evaluation.rejected {
        Some((index, error)) => Err(rejected(source, index, error).into()),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_operations() {
        let ops = parse("push:1  push:-2 top pop len empty").unwrap();
        assert_eq!(
            ops,
            [
                Op::Push(1),
                Op::Push(-2),
                Op::Top,
                Op::Pop,
                Op::Len,
                Op::Empty
            ]
        );
    }

    #[test]
    fn points_at_unknown_operation() {
        let error = parse("push:1 peek pop").unwrap_err();
        assert_eq!(error.actual, "peek");
        assert_eq!(error.position.offset(), 7);
        assert_eq!(error.position.len(), 4);

        let error = parse("push:x").unwrap_err();
        assert_eq!(error.position.offset(), 0);
    }

    #[test]
    fn applies_in_lifo_order() {
        let ops = parse("push:1 push:2 top pop top len empty").unwrap();
        let evaluation = apply(&mut Stack::<i64>::new(), &ops);
        assert!(evaluation.rejected.is_none());
        assert_eq!(
            evaluation.lines,
            ["push 1", "push 2", "top -> 2", "pop", "top -> 1", "len -> 1", "empty -> false"]
        );
    }

    #[test]
    fn every_backing_agrees() {
        let ops = parse("push:4 push:5 pop top").unwrap();
        let vec = apply(&mut Stack::<i64>::new(), &ops).lines;
        let deque = apply(&mut Stack::<i64, VecDeque<i64>>::new(), &ops).lines;
        let bounded = apply(&mut BoundedStack::<i64, BOUNDED_CAPACITY>::new(), &ops).lines;
        assert_eq!(vec, deque);
        assert_eq!(vec, bounded);
    }

    #[test]
    fn keeps_lines_before_a_rejected_operation() {
        let ops = parse("push:1 top pop pop").unwrap();
        let evaluation = apply(&mut Stack::<i64>::new(), &ops);

        assert_eq!(evaluation.lines, ["push 1", "top -> 1", "pop"]);
        assert!(matches!(evaluation.rejected, Some((3, StackError::Empty(_)))));
    }

    #[test]
    fn stops_at_first_violation() {
        let ops = parse("pop push:1").unwrap();
        let evaluation = apply(&mut Stack::<i64>::new(), &ops);
        assert!(evaluation.lines.is_empty());
        assert!(matches!(evaluation.rejected, Some((0, StackError::Empty(_)))));

        let ops = vec![Op::Push(0); BOUNDED_CAPACITY + 1];
        let mut bounded = BoundedStack::<i64, BOUNDED_CAPACITY>::new();
        let evaluation = apply(&mut bounded, &ops);
        assert_eq!(evaluation.lines.len(), BOUNDED_CAPACITY);
        assert!(matches!(
            evaluation.rejected,
            Some((BOUNDED_CAPACITY, StackError::CapacityExceeded(_)))
        ));
        assert_eq!(bounded.len(), BOUNDED_CAPACITY);
    }

    #[test]
    fn rejection_points_at_the_failing_word() {
        let source = "push:1  pop pop";
        let ops = parse(source).unwrap();
        let (index, error) = apply(&mut Stack::<i64>::new(), &ops).rejected.unwrap();

        let diagnostic = rejected(source, index, error);
        assert_eq!(diagnostic.index, 2);
        assert_eq!(diagnostic.position.offset(), 12);
        assert_eq!(diagnostic.position.len(), 3);
    }
}
