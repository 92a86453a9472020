use std::ops::Add;

/// Cumulative scan: for each prefix of the input, the accumulated result of
/// the supplied associative binary operation.
///
/// One output element is produced per input element, in one pass; the first
/// output equals the first input. Empty input produces no output.
pub fn cumulative<I, T, F>(values: I, mut op: F) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    T: Copy,
    F: FnMut(T, T) -> T,
{
    let iter = values.into_iter();
    let mut out = Vec::with_capacity(iter.size_hint().0);
    let mut acc: Option<T> = None;
    for v in iter {
        let next = match acc {
            Some(prev) => op(prev, v),
            None => v,
        };
        out.push(next);
        acc = Some(next);
    }
    out
}

/// Writes `start, start + step, start + 2*step, ...` into `dest`.
pub fn fill_step<T>(dest: &mut [T], start: T, step: T)
where
    T: Copy + Add<Output = T>,
{
    let mut value = start;
    for slot in dest.iter_mut() {
        *slot = value;
        value = value + step;
    }
}
