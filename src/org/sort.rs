//! Deterministic ordering for name lists returned in backend order.

/// Return the names in ascending byte-wise order. Duplicates are kept; callers de-duplicate.
pub fn sort_names<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut sorted: Vec<String> = names.into_iter().map(|n| n.as_ref().to_string()).collect();
    sorted.sort();
    sorted
}
