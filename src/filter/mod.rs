/*!
Filter pipeline: a composable `SegmentSet -> SegmentSet` operation.

The core ships five shapes (`Predicate`, `AclPolicy`-backed, `SequencePolicy`-backed,
[`SrcDstPathEnumerator`], and [`Chain`]); it never ships a concrete ACL or sequence
engine; those are opaque collaborators supplied by the host.
*/
mod acl;
mod composition;
mod enumerator;
mod predicate;
mod sequence;

pub use acl::{from_acl, AclPolicy};
pub use composition::{from_filters, Chain};
pub use enumerator::SrcDstPathEnumerator;
pub use predicate::{from_predicate, Predicate};
pub use sequence::{from_sequence, SequencePolicy};

use crate::models::SegmentSet;

/// A pure, stateless `SegmentSet -> SegmentSet` operation that preserves
/// `srcIA`/`dstIA`. Filters are values, not an open class hierarchy.
pub trait Filter {
    fn filter(&self, segments: SegmentSet) -> SegmentSet;
}

impl<F: Filter + ?Sized> Filter for Box<F> {
    fn filter(&self, segments: SegmentSet) -> SegmentSet {
        (**self).filter(segments)
    }
}
