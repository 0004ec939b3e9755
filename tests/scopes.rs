//! The scope family over the built-in schemas.

use std::sync::Arc;

use calendrical::{
    Component, DateParts, DayNumber, Range,
    schema::{GregorianSchema, SchemaId},
    scope::{
        BoundedBelowScope, CalendarScope, GregorianProlepticScope, GregorianStandardScope, MinMaxYearScope,
        ProlepticScope, StandardScope,
    },
    segment::SegmentBuilder,
};

fn year_error(result: Result<(), calendrical::CalendarError>) -> bool {
    result.is_err_and(|err| err.is_range() && err.component() == Some(Component::Year))
}

#[test]
fn proleptic_scope_rejects_years_outside() {
    let scope = ProlepticScope::new(Arc::new(GregorianSchema::new()), DayNumber::ZERO).unwrap();
    for year in [-9999, 10_000] {
        let err = scope.validate_year_month_day(year, 1, 1).unwrap_err();
        assert_eq!(err.component(), Some(Component::Year));
        assert!(err.to_string().starts_with("year = "), "{err}");
    }
    assert!(scope.validate_year_month_day(-9998, 1, 1).is_ok());
    assert!(scope.validate_year_month_day(9999, 12, 31).is_ok());
}

#[test]
fn bounded_below_scope_compares_with_the_minimum_date() {
    let scope =
        BoundedBelowScope::new(Arc::new(GregorianSchema::new()), DayNumber::ZERO, DateParts::new(2000, 6, 15), 9999)
            .unwrap();
    assert!(scope.validate_year_month_day(2000, 6, 15).is_ok());
    assert!(scope.validate_year_month_day(2000, 12, 31).is_ok());
    assert!(scope.validate_year_month_day(2000, 6, 14).is_err());
    assert!(year_error(scope.validate_year_month_day(1999, 12, 31)));
}

#[test]
fn every_scope_rejects_the_neighbouring_years() {
    for id in SchemaId::ALL {
        let epoch = id.default_epoch();
        let scopes: Vec<Box<dyn CalendarScope>> = vec![
            Box::new(ProlepticScope::new(id.schema(), epoch).unwrap()),
            Box::new(StandardScope::new(id.schema(), epoch).unwrap()),
            Box::new(MinMaxYearScope::new(id.schema(), epoch, Range::new(100, 200).unwrap()).unwrap()),
            Box::new(BoundedBelowScope::new(id.schema(), epoch, DateParts::new(100, 2, 3), 200).unwrap()),
        ];
        for scope in scopes {
            let (min, max) = scope.segment().supported_years().endpoints();
            assert!(year_error(scope.validate_year(min - 1)), "{id}: {scope:?}");
            assert!(year_error(scope.validate_year(max + 1)), "{id}");
            assert!(year_error(scope.validate_year_month(max + 1, 1)), "{id}");
            assert!(year_error(scope.validate_year_month_day(min - 1, 1, 1)), "{id}");
            assert!(year_error(scope.validate_ordinal(min - 1, 1)), "{id}");
            assert!(scope.validate_year(max).is_ok(), "{id}");
            assert!(scope.validate_year_month_day(max, 1, 1).is_ok(), "{id}");
        }
    }
}

#[test]
fn segments_are_consistent() {
    for id in SchemaId::ALL {
        let schema = id.schema();
        let scope = StandardScope::new(Arc::clone(&schema), id.default_epoch()).unwrap();
        let segment = scope.segment();
        let (min_year, max_year) = segment.supported_years().endpoints();
        let (min_days, max_days) = segment.supported_days().endpoints();
        assert_eq!(schema.get_start_of_year(min_year), min_days, "{id}");
        assert_eq!(schema.get_end_of_year(max_year), max_days, "{id}");
        assert_eq!(segment.supported_months().min(), schema.get_start_of_year_in_months(min_year), "{id}");
        assert_eq!(segment.supported_months().max(), schema.get_end_of_year_in_months(max_year), "{id}");
        assert!(segment.is_complete());

        let (first, last) = scope.domain().endpoints();
        assert_eq!(first, id.default_epoch());
        assert_eq!(last.days_since(first).unwrap(), max_days, "{id}");
    }
}

#[test]
fn partial_first_year_segment() {
    let mut builder = SegmentBuilder::new(SchemaId::Hebrew.schema());
    builder.set_min_date(DateParts::new(5784, 6, 1)).unwrap().set_max_to_end_of_year(5790).unwrap();
    let segment = builder.build().unwrap();
    assert!(!segment.is_complete());
    assert_eq!(segment.min_max_date_parts().min(), DateParts::new(5784, 6, 1));
    assert_eq!(segment.min_max_month_parts().min().to_tuple(), (5784, 6));
    assert_eq!(segment.min_max_ordinal_parts().max().year, 5790);
}

#[test]
fn gregorian_scopes_match_the_generic_ones() {
    let generic = StandardScope::new(Arc::new(GregorianSchema::new()), DayNumber::ZERO).unwrap();
    let fast = GregorianStandardScope::new(DayNumber::ZERO).unwrap();
    let proleptic = ProlepticScope::new(Arc::new(GregorianSchema::new()), DayNumber::ZERO).unwrap();
    let fast_proleptic = GregorianProlepticScope::new(DayNumber::ZERO).unwrap();
    for year in [-10_000, -9998, -1, 0, 1, 1900, 2000, 2023, 2024, 9999, 10_000] {
        for month in 0..=13 {
            for day in [0, 1, 28, 29, 30, 31, 32] {
                assert_eq!(
                    fast.validate_year_month_day(year, month, day),
                    generic.validate_year_month_day(year, month, day)
                );
                assert_eq!(
                    fast_proleptic.validate_year_month_day(year, month, day),
                    proleptic.validate_year_month_day(year, month, day)
                );
            }
        }
    }
}

#[test]
fn anchoring_far_from_zero_overflows() {
    let err = StandardScope::new(SchemaId::Julian.schema(), DayNumber::new(i32::MAX - 1_000)).unwrap_err();
    assert!(err.is_overflow());
    assert_eq!(err.component(), Some(Component::DayNumber));
    assert!(StandardScope::new(SchemaId::Julian.schema(), DayNumber::new(i32::MIN)).is_ok());
}
