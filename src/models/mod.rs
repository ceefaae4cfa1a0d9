//! The Segment DAG data model: identity types (`Ia`, `Interface`), the segment
//! node itself, and the set of segments a negotiation operates over.

mod ia;
mod segment;
mod segment_set;

pub use ia::{fingerprint_of, Ia, Interface, ParseIaError, PathInterfaces};
pub use segment::Segment;
pub use segment_set::SegmentSet;
