use super::Filter;
use crate::enumerate::src_dst_paths;
use crate::models::SegmentSet;
use std::rc::Rc;

/// Replaces `segments` with the end-to-end compositions reachable from `srcIA` to
/// `dstIA` within [`crate::enumerate::MAX_SEG_LEN`] hops.
pub struct SrcDstPathEnumerator;

impl Filter for SrcDstPathEnumerator {
    fn filter(&self, segments: SegmentSet) -> SegmentSet {
        let enumerated = src_dst_paths(&segments.segments, segments.src_ia, segments.dst_ia);
        let wrapped = enumerated.into_iter().map(Rc::new).collect();
        SegmentSet::new(wrapped, segments.src_ia, segments.dst_ia)
    }
}
