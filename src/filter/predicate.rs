use super::Filter;
use crate::models::{Interface, SegmentSet};

/// Keeps segments whose expanded hop sequence satisfies a predicate.
pub struct Predicate<F> {
    predicate: F,
}

/// Builds a [`Filter`] that keeps `seg` iff `predicate(seg.path_interfaces())` holds.
pub fn from_predicate<F>(predicate: F) -> Predicate<F>
where
    F: Fn(&[Interface]) -> bool,
{
    Predicate { predicate }
}

impl<F> Filter for Predicate<F>
where
    F: Fn(&[Interface]) -> bool,
{
    fn filter(&self, segments: SegmentSet) -> SegmentSet {
        let kept = segments
            .segments
            .into_iter()
            .filter(|seg| (self.predicate)(&seg.path_interfaces()))
            .collect();
        SegmentSet::new(kept, segments.src_ia, segments.dst_ia)
    }
}
