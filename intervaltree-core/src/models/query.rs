use std::ops::Range;

use super::coordinate::Coordinate;
use super::interval::Interval;

///
/// The argument accepted by the shape-dispatching interval operations
/// ([`Interval::overlaps`], [`Interval::overlap_size`], [`Interval::distance_to`]
/// and the directional predicates).
///
/// A query is either a bare point or anything with a begin and an end. Callers
/// usually don't build one by hand: tuples, [`Range`]s, intervals and the plain
/// coordinate types all convert into the right variant.
///
/// ```
/// use intervaltree_core::models::{Interval, Query};
///
/// let point: Query<u32> = 7u32.into();
/// let range: Query<u32> = (3u32, 9u32).into();
/// let iv: Interval<u32> = Interval::new(3, 9);
///
/// assert_eq!(point, Query::Point(7));
/// assert_eq!(range, Query::from(&iv));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Query<P> {
    Point(P),
    Range { begin: P, end: P },
}

impl<P> Query<P>
where
    P: Coordinate,
{
    pub fn point(point: P) -> Self {
        Query::Point(point)
    }

    pub fn range(begin: P, end: P) -> Self {
        Query::Range { begin, end }
    }

    /// Whether this is an empty range. Points are never null.
    pub fn is_null(&self) -> bool {
        match self {
            Query::Point(_) => false,
            Query::Range { begin, end } => begin >= end,
        }
    }
}

impl<P> From<(P, P)> for Query<P> {
    fn from((begin, end): (P, P)) -> Self {
        Query::Range { begin, end }
    }
}

impl<P> From<Range<P>> for Query<P> {
    fn from(range: Range<P>) -> Self {
        Query::Range {
            begin: range.start,
            end: range.end,
        }
    }
}

impl<P, D> From<&Interval<P, D>> for Query<P>
where
    P: Clone,
{
    fn from(interval: &Interval<P, D>) -> Self {
        Query::Range {
            begin: interval.begin().clone(),
            end: interval.end().clone(),
        }
    }
}

impl<P, D> From<Interval<P, D>> for Query<P> {
    fn from(interval: Interval<P, D>) -> Self {
        let (begin, end, _) = interval.into_parts();
        Query::Range { begin, end }
    }
}
