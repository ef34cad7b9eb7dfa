use std::collections::HashSet;

use pretty_assertions::assert_eq;
use rstest::*;

use intervaltree_core::models::{Interval, Query};
use intervaltree_core::IntervalError;

type Iv = Interval<i32, &'static str>;

#[fixture]
fn intervals() -> Vec<Iv> {
    vec![
        Interval::new(0, 5),
        Interval::new(3, 8),
        Interval::with_data(5, 10, "x"),
        Interval::new(-4, -1),
        Interval::new(7, 7),
        Interval::new(9, 2),
        Interval::with_data(0, 20, "wide"),
        Interval::new(12, 13),
    ]
}

fn pairs(intervals: &[Iv]) -> Vec<(&Iv, &Iv)> {
    intervals
        .iter()
        .flat_map(|a| intervals.iter().map(move |b| (a, b)))
        .collect()
}

mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[rstest]
    fn test_overlap_is_symmetric(intervals: Vec<Iv>) {
        for (a, b) in pairs(&intervals) {
            assert_eq!(a.overlaps(b), b.overlaps(a), "{a} vs {b}");
        }
    }

    #[rstest]
    fn test_overlaps_own_range_unless_null(intervals: Vec<Iv>) {
        for a in &intervals {
            assert_eq!(a.overlaps((*a.begin(), *a.end())), !a.is_null(), "{a}");
        }
    }

    #[rstest]
    fn test_overlap_size_is_symmetric_and_positive(intervals: Vec<Iv>) {
        for (a, b) in pairs(&intervals) {
            if a.is_null() || b.is_null() || !a.overlaps(b) {
                continue;
            }
            assert_eq!(a.overlap_size(b), b.overlap_size(a), "{a} vs {b}");
            assert!(a.overlap_size(b) > 0, "{a} vs {b}");
        }
    }

    fn disjoint_pairs(intervals: &[Iv]) -> (Vec<(&Iv, &Iv)>, Vec<(&Iv, &Iv)>) {
        pairs(intervals)
            .into_iter()
            .filter(|(a, b)| !a.is_null() && !b.is_null() && !a.overlaps(*b))
            .partition(|(a, b)| a.end() == b.begin() || b.end() == a.begin())
    }

    #[rstest]
    fn test_touching_intervals_have_zero_gap(intervals: Vec<Iv>) {
        let (touching, _) = disjoint_pairs(&intervals);
        assert!(!touching.is_empty());

        for (a, b) in touching {
            assert_eq!(a.overlap_size(b), 0, "{a} vs {b}");
            assert_eq!(a.distance_to(b), 0, "{a} vs {b}");
            assert_eq!(b.distance_to(a), 0, "{a} vs {b}");
        }
    }

    #[rstest]
    fn test_separated_intervals_have_symmetric_positive_gap(intervals: Vec<Iv>) {
        let (_, separated) = disjoint_pairs(&intervals);
        assert!(!separated.is_empty());

        for (a, b) in separated {
            assert_eq!(a.overlap_size(b), 0, "{a} vs {b}");
            assert_eq!(a.distance_to(b), b.distance_to(a), "{a} vs {b}");
            assert!(a.distance_to(b) > 0, "{a} vs {b}");
        }
    }

    #[rstest]
    fn test_separated_intervals_have_positive_gap() {
        let a = Iv::new(0, 5);
        let b = Iv::new(8, 10);
        assert_eq!(a.distance_to(&b), 3);
        assert_eq!(b.distance_to(&a), 3);
    }

    #[rstest]
    fn test_mutual_containment_means_range_match(intervals: Vec<Iv>) {
        for (a, b) in pairs(&intervals) {
            if a.contains_interval(b) && b.contains_interval(a) {
                assert!(a.range_matches(b), "{a} vs {b}");
            }
        }
    }

    #[rstest]
    fn test_hash_collides_on_range_but_equality_needs_payload() {
        let x = Iv::with_data(0, 5, "x");
        let y = Iv::with_data(0, 5, "y");

        assert!(x.range_matches(&y));
        assert_ne!(x, y);

        let set: HashSet<Iv> = [x.clone(), y.clone(), x.clone()].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains(&x));
        assert!(set.contains(&y));
    }

    #[rstest]
    fn test_sort_fixture() {
        let mut intervals: Vec<Iv> = vec![
            Interval::new(5, 10),
            Interval::new(1, 3),
            Interval::with_data(1, 3, "z"),
            Interval::with_data(1, 3, "a"),
        ];
        intervals.sort_by(Interval::compare);

        assert_eq!(
            intervals,
            vec![
                Interval::new(1, 3),
                Interval::with_data(1, 3, "a"),
                Interval::with_data(1, 3, "z"),
                Interval::new(5, 10),
            ]
        );
    }

    #[rstest]
    fn test_compare_is_antisymmetric(intervals: Vec<Iv>) {
        for (a, b) in pairs(&intervals) {
            assert_eq!(a.compare(b), b.compare(a).reverse(), "{a} vs {b}");
        }
    }

    #[rstest]
    #[case(Interval::new(5, 5))]
    #[case(Interval::new(6, 2))]
    fn test_null_interval(#[case] null: Iv) {
        let other = Iv::new(0, 10);

        assert!(null.is_null());
        assert!(matches!(null.lt(&other), Err(IntervalError::NullInterval)));
        assert!(matches!(null.le(&other), Err(IntervalError::NullInterval)));
        assert!(matches!(null.gt(&other), Err(IntervalError::NullInterval)));
        assert!(matches!(null.ge(&other), Err(IntervalError::NullInterval)));

        assert!(!null.overlaps(*null.begin()));
        assert!(!null.contains_point(null.begin()));
        assert_eq!(null.length(), 0);
    }

    #[rstest]
    #[case(Interval::new(5, 10), true)]
    #[case(Interval::new(4, 10), false)]
    fn test_lt_touching_vs_overlapping(#[case] other: Iv, #[case] expected: bool) {
        assert_eq!(Iv::new(1, 5).lt(&other).unwrap(), expected);
    }

    #[rstest]
    fn test_point_and_range_asymmetry() {
        let a = Iv::new(5, 10);

        assert_eq!(a.gt(Query::Point(5)).unwrap(), false);
        assert_eq!(a.gt(Query::range(1, 5)).unwrap(), true);
        assert_eq!(a.ge(Query::Point(5)).unwrap(), true);
        assert_eq!(a.ge(Query::range(5, 6)).unwrap(), true);
    }

    #[rstest]
    fn test_repr_round_trip(intervals: Vec<Iv>) {
        for a in &intervals {
            let owned: Interval<i32, String> =
                Interval::from_parts(*a.begin(), *a.end(), a.data().map(|d| d.to_string()));
            let text = owned.to_repr().unwrap();
            let parsed: Interval<i32, String> = text.parse().unwrap();
            assert_eq!(parsed, owned, "{text}");
        }
    }

    #[rstest]
    fn test_serde_round_trip() {
        let a: Interval<u64, Vec<u8>> = Interval::with_data(10, 20, vec![1, 2, 3]);
        let json = serde_json::to_string(&a).unwrap();
        let back: Interval<u64, Vec<u8>> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);
    }

    #[cfg(feature = "chrono")]
    #[rstest]
    fn test_date_intervals() {
        use chrono::{NaiveDate, TimeDelta};

        let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
        let a: Interval<NaiveDate> = Interval::new(day(1), day(10));
        let b: Interval<NaiveDate> = Interval::new(day(15), day(20));

        assert_eq!(a.length(), TimeDelta::days(9));
        assert!(!a.overlaps(&b));
        assert_eq!(a.distance_to(&b), TimeDelta::days(5));
        assert_eq!(a.distance_to(day(12)), TimeDelta::days(2));
        assert!(a.overlaps(day(3)));
        assert_eq!(a.to_string(), r#"Interval("2024-01-01", "2024-01-10")"#);
    }
}
