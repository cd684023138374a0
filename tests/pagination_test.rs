#[cfg(test)]
mod pagination {
    use crestline::models::filter::{total_pages, PageResult, PropertyFilter, PAGE_SIZE};

    #[test]
    fn total_pages_is_ceiling_division() {
        assert_eq!(total_pages(0, PAGE_SIZE), 0);
        assert_eq!(total_pages(1, PAGE_SIZE), 1);
        assert_eq!(total_pages(PAGE_SIZE, PAGE_SIZE), 1);
        assert_eq!(total_pages(PAGE_SIZE + 1, PAGE_SIZE), 2);
        assert_eq!(total_pages(100, PAGE_SIZE), 12);
    }

    #[test]
    fn offset_advances_by_whole_pages() {
        let mut filter = PropertyFilter::default();
        assert_eq!(filter.offset(), 0);

        filter.page = 2;
        assert_eq!(filter.offset(), PAGE_SIZE);

        filter.page = 5;
        assert_eq!(filter.offset(), 4 * PAGE_SIZE);
    }

    #[test]
    fn absurd_page_numbers_never_overflow_the_offset() {
        let mut filter = PropertyFilter::default();
        filter.page = i64::MAX;

        let offset = filter.offset();
        assert!(offset >= 0);
        assert_eq!(offset, i64::MAX);

        filter.page = i64::MAX / PAGE_SIZE;
        assert!(filter.offset() >= 0);
    }

    #[test]
    fn empty_page_past_the_end_keeps_the_count() {
        // a search that matched 14 rows but was asked for page 999
        let result = PageResult::new(Vec::new(), 14, 999);

        assert!(result.records.is_empty());
        assert_eq!(result.total_count, 14);
        assert_eq!(result.total_pages, 2);
        assert_eq!(result.current_page, 999);
    }

    #[test]
    fn zero_matches_is_a_valid_result() {
        let result = PageResult::new(Vec::new(), 0, 1);

        assert!(result.records.is_empty());
        assert_eq!(result.total_count, 0);
        assert_eq!(result.total_pages, 0);
    }
}
