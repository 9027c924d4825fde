/// Number of questions on a single page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Returns the `page`-th window (1-indexed) of `items`.
///
/// A page past the end of the collection is empty, and so is any page below 1.
/// Callers decide whether an empty page means "not found".
pub fn paginate<T>(items: &[T], page: i64) -> &[T] {
    let Some(start) = page
        .checked_sub(1)
        .and_then(|p| usize::try_from(p).ok())
        .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE))
    else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(QUESTIONS_PER_PAGE).min(items.len());
    &items[start..end]
}
