/*!
Maps negotiated segments back to the user-visible paths they came from.
*/
use crate::enumerate::src_dst_paths;
use crate::models::{fingerprint_of, Interface, SegmentSet};

impl SegmentSet {
    /// Returns the subset of `paths` whose fingerprint matches some end-to-end
    /// segment reachable from this set's `srcIA`/`dstIA`. `paths` and segment
    /// fingerprints are computed by the same rule, so they compare directly.
    pub fn matching_paths<'a>(&self, paths: &'a [Vec<Interface>]) -> Vec<&'a Vec<Interface>> {
        let enumerated = src_dst_paths(&self.segments, self.src_ia, self.dst_ia);
        let fingerprints: std::collections::HashSet<&str> =
            enumerated.iter().map(|s| s.fingerprint()).collect();
        paths
            .iter()
            .filter(|path| fingerprints.contains(fingerprint_of(path).as_str()))
            .collect()
    }
}
