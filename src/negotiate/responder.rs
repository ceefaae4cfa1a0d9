use super::{NegotiationObserver, NoopObserver};
use crate::codec::{decode, encode, read_message, write_message};
use crate::error::Error;
use crate::filter::Filter;
use crate::models::SegmentSet;
use log::{debug, trace};
use std::io::{Read, Write};

/// Answers one negotiation request. Unlike the initiator, the responder applies
/// its filter exactly once.
pub struct Responder<F, O = NoopObserver> {
    filter: F,
    observer: O,
}

impl<F: Filter> Responder<F, NoopObserver> {
    pub fn new(filter: F) -> Self {
        Responder {
            filter,
            observer: NoopObserver,
        }
    }
}

impl<F: Filter, O: NegotiationObserver> Responder<F, O> {
    pub fn with_observer(filter: F, observer: O) -> Self {
        Responder { filter, observer }
    }

    pub fn negotiate_over<S: Read + Write>(&self, stream: &mut S) -> Result<SegmentSet, Error> {
        trace!("responder: awaiting request");
        let request_bytes = read_message(stream)?;
        let request = decode(&request_bytes, &[])?;
        self.observer.on_message_decoded(&request.accepted);
        debug!(
            "responder: received {} segments, {} accepted",
            request.all.len(),
            request.accepted.len()
        );

        let accepted_in = SegmentSet::new(request.accepted, request.src_ia, request.dst_ia);
        trace!("responder: applying local filter");
        let filtered_out = self.filter.filter(accepted_in);

        // `old` is the full list the initiator sent, not just the accepted subset,
        // so a future round could still reference an unaccepted subsegment.
        let encoded = encode(
            &filtered_out.segments,
            &request.all,
            filtered_out.src_ia,
            filtered_out.dst_ia,
        )?;
        self.observer.on_message_encoded(&encoded.sent);
        debug!(
            "responder: sending reply with {} segments",
            encoded.sent.len()
        );
        write_message(stream, &encoded.bytes)?;

        Ok(filtered_out)
    }
}
