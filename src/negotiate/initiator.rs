use super::{NegotiationObserver, NoopObserver};
use crate::codec::{decode, encode, read_message, write_message};
use crate::error::Error;
use crate::filter::Filter;
use crate::models::SegmentSet;
use log::{debug, trace};
use std::io::{Read, Write};

/// Sends the first message of a negotiation and applies its filter both before
/// sending and after receiving the reply, enforcing a final local check that the
/// responder's reply is still policy-admissible.
pub struct Initiator<F, O = NoopObserver> {
    filter: F,
    observer: O,
}

impl<F: Filter> Initiator<F, NoopObserver> {
    pub fn new(filter: F) -> Self {
        Initiator {
            filter,
            observer: NoopObserver,
        }
    }
}

impl<F: Filter, O: NegotiationObserver> Initiator<F, O> {
    pub fn with_observer(filter: F, observer: O) -> Self {
        Initiator { filter, observer }
    }

    pub fn negotiate_over<S: Read + Write>(
        &self,
        stream: &mut S,
        initial: SegmentSet,
    ) -> Result<SegmentSet, Error> {
        trace!("initiator: applying local filter before send");
        let filtered1 = self.filter.filter(initial);

        let encoded = encode(
            &filtered1.segments,
            &[],
            filtered1.src_ia,
            filtered1.dst_ia,
        )?;
        self.observer.on_message_encoded(&encoded.sent);
        debug!(
            "initiator: sending request with {} segments",
            encoded.sent.len()
        );
        write_message(stream, &encoded.bytes)?;

        trace!("initiator: awaiting reply");
        let reply_bytes = read_message(stream)?;
        let reply = decode(&reply_bytes, &encoded.sent)?;
        self.observer.on_message_decoded(&reply.accepted);
        debug!(
            "initiator: received {} accepted segments",
            reply.accepted.len()
        );

        trace!("initiator: applying local filter after receive");
        let accepted = SegmentSet::new(reply.accepted, reply.src_ia, reply.dst_ia);
        Ok(self.filter.filter(accepted))
    }
}
