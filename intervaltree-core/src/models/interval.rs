use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::coordinate::Coordinate;
use super::payload::Payload;
use super::query::Query;
use crate::errors::{IntervalError, Result};

/// Represent a range from [begin, end)
/// Inclusive begin, exclusive of end
///
/// An interval is immutable once built. It never validates its bounds: an
/// interval with `begin >= end` is simply *null* (see [`Interval::is_null`]).
/// The optional `data` payload plays no part in the geometry; it only matters
/// for equality and as the sort tie-breaker.
///
/// Equality and hashing treat the payload differently: `==` compares begin,
/// end and data, while [`Hash`] only feeds begin and end. Intervals with the
/// same range always collide, whatever they carry, so a hash match says
/// nothing about full equality.
///
/// ```
/// use intervaltree_core::models::Interval;
///
/// let gene: Interval<u32, &str> = Interval::with_data(100, 200, "BRCA1");
///
/// assert!(gene.overlaps((150u32, 250u32)));
/// assert!(gene.overlaps(199u32));
/// assert!(!gene.overlaps(200u32));
/// assert_eq!(gene.length(), 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval<P, D = ()> {
    begin: P,
    end: P,
    data: Option<D>,
}

impl<P, D> Interval<P, D> {
    /// Build an interval without a payload.
    pub fn new(begin: P, end: P) -> Self {
        Interval {
            begin,
            end,
            data: None,
        }
    }

    /// Build an interval carrying `data`.
    pub fn with_data(begin: P, end: P, data: D) -> Self {
        Interval {
            begin,
            end,
            data: Some(data),
        }
    }

    pub fn from_parts(begin: P, end: P, data: Option<D>) -> Self {
        Interval { begin, end, data }
    }

    pub fn begin(&self) -> &P {
        &self.begin
    }

    pub fn end(&self) -> &P {
        &self.end
    }

    pub fn data(&self) -> Option<&D> {
        self.data.as_ref()
    }

    /// The fields needed to rebuild this interval.
    pub fn fields(&self) -> (&P, &P, Option<&D>) {
        (&self.begin, &self.end, self.data.as_ref())
    }

    pub fn into_parts(self) -> (P, P, Option<D>) {
        (self.begin, self.end, self.data)
    }

    /// Shallow copy: the payload is cloned, not rebuilt.
    pub fn copy(&self) -> Self
    where
        P: Clone,
        D: Clone,
    {
        Interval {
            begin: self.begin.clone(),
            end: self.end.clone(),
            data: self.data.clone(),
        }
    }
}

impl<P, D> Interval<P, D>
where
    P: Coordinate,
{
    ///
    /// Whether the interval overlaps the given point, range or interval.
    ///
    /// The argument's shape decides which test runs: points use
    /// [`contains_point`](Self::contains_point), everything with a begin and
    /// an end uses [`overlaps_range`](Self::overlaps_range).
    ///
    #[inline]
    pub fn overlaps<Q>(&self, query: Q) -> bool
    where
        Q: Into<Query<P>>,
    {
        match query.into() {
            Query::Point(point) => self.overlaps_point(&point),
            Query::Range { begin, end } => self.overlaps_range(&begin, &end),
        }
    }

    /// Check if the interval shares any point with `[begin, end)`.
    /// Touching endpoints do not overlap.
    #[inline]
    pub fn overlaps_range(&self, begin: &P, end: &P) -> bool {
        *begin < self.end && *end > self.begin
    }

    #[inline]
    pub fn overlaps_point(&self, point: &P) -> bool {
        self.contains_point(point)
    }

    #[inline]
    pub fn overlaps_interval<E>(&self, other: &Interval<P, E>) -> bool {
        self.overlaps_range(&other.begin, &other.end)
    }

    ///
    /// Size of the overlap with the given point, range or interval, or the
    /// domain zero if they don't overlap.
    ///
    /// A point has no width, so the overlap with a point is always zero.
    ///
    pub fn overlap_size<Q>(&self, query: Q) -> P::Distance
    where
        Q: Into<Query<P>>,
    {
        match query.into() {
            Query::Point(_) => P::zero(),
            Query::Range { begin, end } => self.overlap_size_range(&begin, &end),
        }
    }

    pub fn overlap_size_range(&self, begin: &P, end: &P) -> P::Distance {
        if !self.overlaps_range(begin, end) {
            return P::zero();
        }
        let lo = partial_max(&self.begin, begin);
        let hi = partial_min(&self.end, end);
        hi.distance_from(lo)
    }

    pub fn overlap_size_interval<E>(&self, other: &Interval<P, E>) -> P::Distance {
        self.overlap_size_range(&other.begin, &other.end)
    }

    /// Whether `begin <= point < end`.
    #[inline]
    pub fn contains_point(&self, point: &P) -> bool {
        self.begin <= *point && *point < self.end
    }

    /// Whether the begins equal and the ends equal; the payload is ignored.
    pub fn range_matches<E>(&self, other: &Interval<P, E>) -> bool {
        self.begin == other.begin && self.end == other.end
    }

    /// Whether `other` lies within this interval.
    pub fn contains_interval<E>(&self, other: &Interval<P, E>) -> bool {
        self.begin <= other.begin && self.end >= other.end
    }

    ///
    /// Size of the gap between this interval and the given point, range or
    /// interval. Zero if they touch or overlap.
    ///
    pub fn distance_to<Q>(&self, query: Q) -> P::Distance
    where
        Q: Into<Query<P>>,
    {
        match query.into() {
            Query::Point(point) => self.distance_to_point(&point),
            Query::Range { begin, end } => self.distance_to_range(&begin, &end),
        }
    }

    pub fn distance_to_range(&self, begin: &P, end: &P) -> P::Distance {
        if self.overlaps_range(begin, end) {
            return P::zero();
        }
        if self.begin < *begin {
            begin.distance_from(&self.end)
        } else {
            self.begin.distance_from(end)
        }
    }

    pub fn distance_to_interval<E>(&self, other: &Interval<P, E>) -> P::Distance {
        self.distance_to_range(&other.begin, &other.end)
    }

    pub fn distance_to_point(&self, point: &P) -> P::Distance {
        if self.overlaps_point(point) {
            return P::zero();
        }
        if self.end <= *point {
            point.distance_from(&self.end)
        } else {
            self.begin.distance_from(point)
        }
    }

    /// Whether this is the null interval, i.e. `end <= begin`.
    #[inline]
    pub fn is_null(&self) -> bool {
        self.begin >= self.end
    }

    /// The distance covered by this interval; zero when null.
    pub fn length(&self) -> P::Distance {
        if self.is_null() {
            return P::zero();
        }
        self.end.distance_from(&self.begin)
    }

    fn ensure_comparable(&self, other: &Query<P>) -> Result<()> {
        if self.is_null() || other.is_null() {
            log::debug!("refusing a directional comparison involving a null interval");
            return Err(IntervalError::NullInterval);
        }
        Ok(())
    }

    ///
    /// Strictly less than: no part of this interval extends higher than or
    /// into `other`.
    ///
    /// # Errors
    ///
    /// [`IntervalError::NullInterval`] if either operand is a null interval.
    ///
    pub fn lt<Q>(&self, other: Q) -> Result<bool>
    where
        Q: Into<Query<P>>,
    {
        let other = other.into();
        self.ensure_comparable(&other)?;
        Ok(match other {
            Query::Point(point) => self.end <= point,
            Query::Range { begin, .. } => self.end <= begin,
        })
    }

    ///
    /// Less than or overlaps: no part of this interval extends higher than
    /// `other`.
    ///
    /// # Errors
    ///
    /// [`IntervalError::NullInterval`] if either operand is a null interval.
    ///
    pub fn le<Q>(&self, other: Q) -> Result<bool>
    where
        Q: Into<Query<P>>,
    {
        let other = other.into();
        self.ensure_comparable(&other)?;
        Ok(match other {
            Query::Point(point) => self.end <= point,
            Query::Range { end, .. } => self.end <= end,
        })
    }

    ///
    /// Strictly greater than: no part of this interval extends lower than or
    /// into `other`.
    ///
    /// # Errors
    ///
    /// [`IntervalError::NullInterval`] if either operand is a null interval.
    ///
    pub fn gt<Q>(&self, other: Q) -> Result<bool>
    where
        Q: Into<Query<P>>,
    {
        let other = other.into();
        self.ensure_comparable(&other)?;
        Ok(match other {
            Query::Point(point) => self.begin > point,
            Query::Range { end, .. } => self.begin >= end,
        })
    }

    ///
    /// Greater than or overlaps: no part of this interval extends lower than
    /// `other`.
    ///
    /// # Errors
    ///
    /// [`IntervalError::NullInterval`] if either operand is a null interval.
    ///
    pub fn ge<Q>(&self, other: Q) -> Result<bool>
    where
        Q: Into<Query<P>>,
    {
        let other = other.into();
        self.ensure_comparable(&other)?;
        Ok(match other {
            Query::Point(point) => self.begin >= point,
            Query::Range { begin, .. } => self.begin >= begin,
        })
    }

    /// Position of this interval relative to a bare point, as if the point
    /// were a one-element key: ordered by begin, and an interval starting at
    /// the point sorts after it.
    pub fn compare_point(&self, point: &P) -> Ordering {
        match cmp_coordinates(&self.begin, point) {
            Ordering::Equal => Ordering::Greater,
            ord => ord,
        }
    }
}

impl<P, D> Interval<P, D>
where
    P: Coordinate,
    D: Payload,
{
    ///
    /// Total order used for sorting and indexing.
    ///
    /// Sorting is by begins, then by ends, then by payloads. An absent
    /// payload sorts before any present one. Payloads that cannot be ordered
    /// against each other fall back to comparing their [`Payload::kind`]
    /// names alphabetically, which keeps the order total for heterogeneous
    /// payloads.
    ///
    /// Coordinates that are not comparable (NaN) are treated as equal.
    ///
    /// ```
    /// use intervaltree_core::models::Interval;
    ///
    /// let mut intervals: Vec<Interval<i32, &str>> = vec![
    ///     Interval::new(5, 10),
    ///     Interval::with_data(1, 3, "z"),
    ///     Interval::new(1, 3),
    ///     Interval::with_data(1, 3, "a"),
    /// ];
    /// intervals.sort_by(Interval::compare);
    ///
    /// assert_eq!(intervals[0], Interval::new(1, 3));
    /// assert_eq!(intervals[1], Interval::with_data(1, 3, "a"));
    /// ```
    pub fn compare(&self, other: &Self) -> Ordering {
        let by_range = cmp_coordinates(&self.begin, &other.begin)
            .then_with(|| cmp_coordinates(&self.end, &other.end));
        if by_range != Ordering::Equal {
            return by_range;
        }

        match (&self.data, &other.data) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => a.try_cmp(b).unwrap_or_else(|| {
                log::trace!(
                    "payloads are not comparable, ordering by kind ({} vs {})",
                    a.kind(),
                    b.kind()
                );
                a.kind().cmp(b.kind())
            }),
        }
    }

    /// `compare(other) < 0`
    pub fn sorts_before(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Less
    }

    /// `compare(other) > 0`
    pub fn sorts_after(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Greater
    }
}

/// Depends on begin and end only.
impl<P, D> Hash for Interval<P, D>
where
    P: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.begin.hash(state);
        self.end.hash(state);
    }
}

#[inline]
fn cmp_coordinates<P: PartialOrd>(a: &P, b: &P) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

#[inline]
fn partial_max<'a, P: PartialOrd>(a: &'a P, b: &'a P) -> &'a P {
    if b > a { b } else { a }
}

#[inline]
fn partial_min<'a, P: PartialOrd>(a: &'a P, b: &'a P) -> &'a P {
    if b < a { b } else { a }
}
