#[cfg(test)]
mod filter_parsing {
    use crestline::models::filter::{PropertyFilter, SearchParams};
    use crestline::models::property::ListingKind;

    fn params() -> SearchParams {
        SearchParams::default()
    }

    #[test]
    fn empty_form_means_no_constraints() {
        let filter = params().into_filter();
        assert_eq!(filter, PropertyFilter::default());
        assert_eq!(filter.page, 1);
    }

    #[test]
    fn blank_fields_are_treated_as_absent() {
        let mut raw = params();
        raw.location = Some("".to_string());
        raw.keyword = Some("   ".to_string());
        raw.min_price = Some("".to_string());

        let filter = raw.into_filter();
        assert_eq!(filter, PropertyFilter::default());
    }

    #[test]
    fn malformed_numbers_are_dropped_not_fatal() {
        let mut raw = params();
        raw.min_price = Some("cheap".to_string());
        raw.max_price = Some("1e999x".to_string());
        raw.bedrooms = Some("many".to_string());
        raw.property_type = Some("villa".to_string());

        let filter = raw.into_filter();
        assert_eq!(filter, PropertyFilter::default());
    }

    #[test]
    fn non_positive_numbers_are_dropped() {
        let mut raw = params();
        raw.min_price = Some("-100".to_string());
        raw.max_price = Some("0".to_string());
        raw.bedrooms = Some("-2".to_string());

        let filter = raw.into_filter();
        assert_eq!(filter.min_price, None);
        assert_eq!(filter.max_price, None);
        assert_eq!(filter.min_bedrooms, None);
    }

    #[test]
    fn one_bad_field_does_not_abort_the_rest() {
        let mut raw = params();
        raw.location = Some("London".to_string());
        raw.min_price = Some("100000".to_string());
        raw.max_price = Some("not a number".to_string());
        raw.bedrooms = Some("2".to_string());

        let filter = raw.into_filter();
        assert_eq!(filter.location.as_deref(), Some("London"));
        assert_eq!(filter.min_price, Some(100000.0));
        assert_eq!(filter.max_price, None);
        assert_eq!(filter.min_bedrooms, Some(2));
    }

    #[test]
    fn page_defaults_to_one_and_is_clamped() {
        assert_eq!(params().into_filter().page, 1);

        let mut raw = params();
        raw.page = Some("0".to_string());
        assert_eq!(raw.into_filter().page, 1);

        let mut raw = params();
        raw.page = Some("-3".to_string());
        assert_eq!(raw.into_filter().page, 1);

        let mut raw = params();
        raw.page = Some("seven".to_string());
        assert_eq!(raw.into_filter().page, 1);

        let mut raw = params();
        raw.page = Some("7".to_string());
        assert_eq!(raw.into_filter().page, 7);
    }

    #[test]
    fn giant_page_numbers_stay_usable() {
        let mut raw = params();
        raw.page = Some(i64::MAX.to_string());

        let filter = raw.into_filter();
        assert_eq!(filter.page, i64::MAX);
        assert!(filter.offset() >= 0);
    }

    #[test]
    fn infinite_prices_are_dropped() {
        let mut raw = params();
        raw.min_price = Some("1e999".to_string());
        raw.max_price = Some("inf".to_string());

        let filter = raw.into_filter();
        assert_eq!(filter.min_price, None);
        assert_eq!(filter.max_price, None);
    }

    #[test]
    fn listing_kind_accepts_both_spellings() {
        assert_eq!(ListingKind::parse("rent"), Some(ListingKind::Rent));
        assert_eq!(ListingKind::parse("sale"), Some(ListingKind::Sale));
        // the old search form posted the raw is_for_rent flag
        assert_eq!(ListingKind::parse("1"), Some(ListingKind::Rent));
        assert_eq!(ListingKind::parse("0"), Some(ListingKind::Sale));
        assert_eq!(ListingKind::parse("castle"), None);
    }

    #[test]
    fn keyword_is_kept_verbatim_for_the_query() {
        let mut raw = params();
        raw.keyword = Some("  Garden Flat ".to_string());

        let filter = raw.into_filter();
        assert_eq!(filter.keyword.as_deref(), Some("Garden Flat"));
    }
}
