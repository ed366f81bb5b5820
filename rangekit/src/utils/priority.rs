//! Priority-based fallback chains.

/// Return the first present value of an ordered list of candidates.
///
/// ```
/// use rangekit::utils::priority::first_present;
///
/// assert_eq!(first_present([None, Some(2), Some(3)]), Some(2));
/// assert_eq!(first_present::<u8, _>([None, None]), None);
/// ```
pub fn first_present<T, I>(candidates: I) -> Option<T>
where
    I: IntoIterator<Item = Option<T>>,
{
    candidates.into_iter().flatten().next()
}

/// Like [`first_present`], with a required final fallback.
pub fn first_present_or<T, I>(candidates: I, fallback: T) -> T
where
    I: IntoIterator<Item = Option<T>>,
{
    first_present(candidates).unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_present_skips_leading_none() {
        assert_eq!(first_present([None, None, Some("c")]), Some("c"));
    }

    #[test]
    fn test_first_present_prefers_earliest() {
        assert_eq!(first_present([Some(1), Some(2)]), Some(1));
    }

    #[test]
    fn test_first_present_or_falls_back() {
        assert_eq!(first_present_or([None::<u8>, None], 9), 9);
        assert_eq!(first_present_or([None, Some(4)], 9), 4);
    }
}
