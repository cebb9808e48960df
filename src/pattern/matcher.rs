// Tue Jan 13 2026 - Alex

/// Returns the offset of the first window of `haystack` whose elements all
/// satisfy `eq(haystack_item, needle_item)` against `needle`.
///
/// An empty needle matches at offset 0.
pub fn search_by<T, F>(haystack: &[T], needle: &[T], mut eq: F) -> Option<usize>
where
    F: FnMut(&T, &T) -> bool,
{
    if needle.is_empty() {
        return Some(0);
    }
    if haystack.len() < needle.len() {
        return None;
    }

    haystack
        .windows(needle.len())
        .position(|window| window.iter().zip(needle.iter()).all(|(h, n)| eq(h, n)))
}

/// Byte comparator treating `wildcard` on the needle side as match-any.
pub fn wildcard_eq(wildcard: u8) -> impl Fn(&u8, &u8) -> bool + Copy {
    move |&data, &pattern| data == pattern || pattern == wildcard
}
