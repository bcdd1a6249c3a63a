/// Number of questions returned per page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Returns the `page_number`-th slice of `page_size` items, 1-based.
///
/// Page numbers below 1 are treated as page 1. A page past the end of
/// `items` is empty rather than an error.
pub fn paginate<T>(items: Vec<T>, page_number: i64, page_size: usize) -> Vec<T> {
    let page_index = usize::try_from(page_number.max(1) - 1).unwrap_or(usize::MAX);
    let start = page_index.saturating_mul(page_size);

    items.into_iter().skip(start).take(page_size).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: i64) -> Vec<i64> {
        (1..=n).collect()
    }

    #[test]
    fn test_first_page_is_first_ten() {
        assert_eq!(paginate(numbers(25), 1, 10), numbers(10));
    }

    #[test]
    fn test_short_input_fits_on_one_page() {
        assert_eq!(paginate(numbers(4), 1, 10), numbers(4));
    }

    #[test]
    fn test_last_page_is_partial() {
        assert_eq!(paginate(numbers(25), 3, 10), vec![21, 22, 23, 24, 25]);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        assert!(paginate(numbers(25), 4, 10).is_empty());
        assert!(paginate(Vec::<i64>::new(), 1, 10).is_empty());
    }

    #[test]
    fn test_non_positive_page_clamps_to_first() {
        assert_eq!(paginate(numbers(15), 0, 10), numbers(10));
        assert_eq!(paginate(numbers(15), -3, 10), numbers(10));
    }

    #[test]
    fn test_huge_page_number_does_not_overflow() {
        assert!(paginate(numbers(15), i64::MAX, QUESTIONS_PER_PAGE).is_empty());
    }
}
