/*!
CONPASS is a two-party consent-negotiation protocol for inter-domain path
selection in a segment-routed network. Two peers, an *initiator* and a
*responder*, exchange the path segments they are each willing to use so that
only segments (and segment compositions) both sides consent to are retained.

Each side runs a local [`filter`] pipeline (ACL, hop-sequence matching, path
enumeration, arbitrary predicates, and composition of the above) before and
after exchanging segments over a reliable byte stream. The wire format shares
a segment DAG across peers by fingerprint, so a segment already known to both
sides is never retransmitted; it is only referenced by index.

```no_run
use conpass::filter::{from_filters, Filter, SrcDstPathEnumerator};
use conpass::models::{Ia, Segment, SegmentSet};
use conpass::negotiate::Initiator;
use std::net::TcpStream;
use std::rc::Rc;

# fn build_segment() -> Rc<Segment> { unimplemented!() }
let src: Ia = "19-ffaa:0:1303".parse().unwrap();
let dst: Ia = "17-ffaa:0:1107".parse().unwrap();
let segments = vec![build_segment()];
let initial = SegmentSet::new(segments, src, dst);

let filter = from_filters(vec![Box::new(SrcDstPathEnumerator) as Box<dyn Filter>]);
let initiator = Initiator::new(filter);
let mut stream = TcpStream::connect("127.0.0.1:4242")?;
let accepted = initiator.negotiate_over(&mut stream, initial)?;
# Ok::<(), conpass::error::Error>(())
```
*/
mod codec;
pub mod enumerate;
pub mod error;
pub mod filter;
mod io;
pub mod models;
pub mod negotiate;
mod path_match;

#[cfg(test)]
mod testutil;
