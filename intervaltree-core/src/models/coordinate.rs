use std::fmt::Debug;

use num_traits::identities::zero;

use super::query::Query;

/// A value that can serve as an interval endpoint.
///
/// Endpoints must be ordered and subtractable. Subtracting two endpoints
/// yields a [`Coordinate::Distance`]: the number type itself for plain
/// numbers, a `chrono::TimeDelta` for dates and timestamps (with the
/// `chrono` feature).
///
/// ```
/// use intervaltree_core::models::Coordinate;
///
/// assert_eq!(10u32.distance_from(&4), 6);
/// assert_eq!(<f64 as Coordinate>::zero(), 0.0);
/// ```
pub trait Coordinate: PartialOrd + Clone {
    type Distance: PartialOrd + Clone + Debug;

    /// The zero of the distance domain.
    fn zero() -> Self::Distance;

    /// `self - origin`
    fn distance_from(&self, origin: &Self) -> Self::Distance;
}

macro_rules! impl_point_query {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Query<$t> {
                #[inline]
                fn from(point: $t) -> Self {
                    Query::Point(point)
                }
            }
        )*
    };
}

macro_rules! impl_signed_coordinate {
    ($($t:ty),*) => {
        $(
            impl Coordinate for $t {
                type Distance = $t;

                #[inline]
                fn zero() -> $t {
                    zero::<$t>()
                }

                #[inline]
                fn distance_from(&self, origin: &$t) -> $t {
                    *self - *origin
                }
            }
        )*
        impl_point_query!($($t),*);
    };
}

// Unsigned distances can't go negative: a gap measured against a null
// operand clamps to zero instead of underflowing.
macro_rules! impl_unsigned_coordinate {
    ($($t:ty),*) => {
        $(
            impl Coordinate for $t {
                type Distance = $t;

                #[inline]
                fn zero() -> $t {
                    zero::<$t>()
                }

                #[inline]
                fn distance_from(&self, origin: &$t) -> $t {
                    self.checked_sub(*origin).unwrap_or_else(zero::<$t>)
                }
            }
        )*
        impl_point_query!($($t),*);
    };
}

impl_signed_coordinate!(i8, i16, i32, i64, i128, isize, f32, f64);
impl_unsigned_coordinate!(u8, u16, u32, u64, u128, usize);

#[cfg(feature = "chrono")]
mod time {
    use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, TimeZone};

    use super::{Coordinate, Query};

    macro_rules! impl_naive_coordinate {
        ($($t:ty),*) => {
            $(
                impl Coordinate for $t {
                    type Distance = TimeDelta;

                    fn zero() -> TimeDelta {
                        TimeDelta::zero()
                    }

                    fn distance_from(&self, origin: &$t) -> TimeDelta {
                        self.signed_duration_since(*origin)
                    }
                }

                impl From<$t> for Query<$t> {
                    fn from(point: $t) -> Self {
                        Query::Point(point)
                    }
                }
            )*
        };
    }

    impl_naive_coordinate!(NaiveDate, NaiveDateTime);

    impl<Tz> Coordinate for DateTime<Tz>
    where
        Tz: TimeZone,
    {
        type Distance = TimeDelta;

        fn zero() -> TimeDelta {
            TimeDelta::zero()
        }

        fn distance_from(&self, origin: &DateTime<Tz>) -> TimeDelta {
            self.clone().signed_duration_since(origin.clone())
        }
    }

    impl<Tz> From<DateTime<Tz>> for Query<DateTime<Tz>>
    where
        Tz: TimeZone,
    {
        fn from(point: DateTime<Tz>) -> Self {
            Query::Point(point)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_integer_distance() {
        assert_eq!(7i32.distance_from(&10), -3);
        assert_eq!(10u64.distance_from(&7), 3);
        assert_eq!(3u32.distance_from(&9), 0);
        assert_eq!(u8::MIN.distance_from(&u8::MAX), 0);
        assert_eq!(<usize as Coordinate>::zero(), 0);
    }

    #[rstest]
    fn test_float_distance() {
        assert_eq!(2.5f64.distance_from(&1.0), 1.5);
        assert_eq!(<f32 as Coordinate>::zero(), 0.0);
    }

    #[cfg(feature = "chrono")]
    #[rstest]
    fn test_date_distance() {
        use chrono::{NaiveDate, TimeDelta};

        let a = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let b = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        assert_eq!(a.distance_from(&b), TimeDelta::days(29));
        assert_eq!(<NaiveDate as Coordinate>::zero(), TimeDelta::zero());
    }
}
