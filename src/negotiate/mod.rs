/*!
Two-round negotiation state machines between an initiator and a responder over a
reliable, ordered, bidirectional byte stream.
*/
mod initiator;
mod responder;

pub use initiator::Initiator;
pub use responder::Responder;

use crate::models::Segment;
use std::rc::Rc;

/// Diagnostic hook invoked at each negotiation step. Ambient `log` tracing always
/// happens regardless of whether an observer is installed; this is the richer,
/// structured capability for a host that wants more than line-based tracing.
/// No behavior depends on an observer being present; it is purely observational.
pub trait NegotiationObserver {
    fn on_message_encoded(&self, _sent: &[Rc<Segment>]) {}
    fn on_message_decoded(&self, _accepted: &[Rc<Segment>]) {}
}

/// An observer that does nothing; the default when none is supplied.
pub struct NoopObserver;

impl NegotiationObserver for NoopObserver {}
