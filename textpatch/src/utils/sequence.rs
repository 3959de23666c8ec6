//! Non-mutating counterparts of `Vec::remove(0)` and `Vec::pop`.

/// Returns every element but the first. Empty for slices with at most one element.
pub fn remove_first_element<T: Clone>(seq: &[T]) -> Vec<T> {
    seq.get(1..).map(<[T]>::to_vec).unwrap_or_default()
}

/// Returns every element but the last. Empty for slices with at most one element.
pub fn remove_last_element<T: Clone>(seq: &[T]) -> Vec<T> {
    match seq.split_last() {
        Some((_, rest)) => rest.to_vec(),
        None => Vec::new(),
    }
}
