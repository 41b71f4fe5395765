use crate::{error::Operation, Lifo, StackError};

/// Keeps `source` order. A bounded `destination` too small for `source` is
/// rejected before it is cleared.
pub fn assign<D, S>(destination: &mut D, source: &S) -> Result<(), StackError>
where
    D: Lifo,
    S: Lifo,
    S::Item: Clone,
    D::Item: From<S::Item>,
{
    let requested = source.len();
    if let Some(capacity) = destination.capacity() {
        if requested > capacity {
            return Err(StackError::capacity_exceeded(
                dbg_line!(),
                Operation::Assign,
                capacity,
                requested,
            ));
        }
    }

    destination.clear();
    for element in source.iter() {
        destination.push(element.clone().into())?;
    }

    tracing::trace!(elements = requested, "assigned stack contents");
    Ok(())
}
