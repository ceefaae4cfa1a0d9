/*!
Path enumeration: lifts per-hop segments into end-to-end compositions.
*/
use crate::models::{Ia, Segment};
use std::collections::HashMap;
use std::rc::Rc;

/// SCION-specific bound: up-segment + core-segment + down-segment.
pub const MAX_SEG_LEN: usize = 3;

/// Enumerates every cycle-free join of `segments` from `src_ia` to `dst_ia`, bounded
/// by [`MAX_SEG_LEN`]. Segments with `srcIA == dstIA` are discarded up front as
/// trivial self-loops. The enumerator does not deduplicate by fingerprint; callers
/// that need set semantics should do that themselves.
pub fn src_dst_paths(segments: &[Rc<Segment>], src_ia: Ia, dst_ia: Ia) -> Vec<Segment> {
    let mut buckets: HashMap<Ia, Vec<Rc<Segment>>> = HashMap::new();
    for seg in segments {
        if seg.src_ia() == seg.dst_ia() {
            continue;
        }
        buckets.entry(seg.src_ia()).or_default().push(seg.clone());
    }

    let lists = expand(src_ia, dst_ia, MAX_SEG_LEN, &buckets);
    flatten(lists)
}

/// Depth-first expansion from `cur` toward `dst`, yielding every cycle-free suffix
/// (as an ordered list of segments) within `remaining` hops.
fn expand(
    cur: Ia,
    dst: Ia,
    remaining: usize,
    buckets: &HashMap<Ia, Vec<Rc<Segment>>>,
) -> Vec<Vec<Rc<Segment>>> {
    if cur == dst {
        return vec![Vec::new()];
    }
    if remaining == 0 {
        return Vec::new();
    }
    let Some(bucket) = buckets.get(&cur) else {
        return Vec::new();
    };

    let mut results = Vec::new();
    for seg in bucket {
        for suffix in expand(seg.dst_ia(), dst, remaining - 1, buckets) {
            if suffix.iter().any(|s| s.dst_ia() == cur) {
                continue;
            }
            let mut list = Vec::with_capacity(suffix.len() + 1);
            list.push(seg.clone());
            list.extend(suffix);
            results.push(list);
        }
    }
    results
}

fn flatten(lists: Vec<Vec<Rc<Segment>>>) -> Vec<Segment> {
    lists
        .into_iter()
        .filter_map(|list| match list.len() {
            0 => None,
            1 => Some((*list[0]).clone()),
            _ => Some(
                Segment::composition(list)
                    .expect("enumerator only joins adjacent srcIA/dstIA-matched segments"),
            ),
        })
        .collect()
}
