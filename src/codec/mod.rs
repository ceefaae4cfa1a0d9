/*!
Wire codec: binary encoding of a [`SegmentSet`](crate::models::SegmentSet) that
preserves DAG sharing across the wire and across negotiation rounds.
*/
mod header;

use crate::error::{DecodeError, Error};
use crate::io::{ReadUtils, WriteUtils};
use crate::models::{Ia, Interface, Segment};
use bytes::{Buf, BufMut, Bytes, BytesMut};
use header::{RawHeader, HEADER_LEN};
use std::collections::HashMap;
use std::io::{Read, Write};
use std::rc::Rc;
use zerocopy::{FromBytes, IntoBytes};

/// Result of [`encode`]: the framed bytes, and the segments in the order the peer
/// will assign them indices (the caller's next `oldsegs`).
pub struct Encoded {
    pub bytes: Vec<u8>,
    pub sent: Vec<Rc<Segment>>,
}

/// Result of [`decode`]: every segment in the message, the subset flagged
/// `accepted`, and the `(srcIA, dstIA)` context carried in the header.
#[derive(Debug)]
pub struct Decoded {
    pub all: Vec<Rc<Segment>>,
    pub accepted: Vec<Rc<Segment>>,
    pub src_ia: Ia,
    pub dst_ia: Ia,
}

/// Encodes `newsegs` against `oldsegs` (the shared history).
pub fn encode(
    newsegs: &[Rc<Segment>],
    oldsegs: &[Rc<Segment>],
    src_ia: Ia,
    dst_ia: Ia,
) -> Result<Encoded, Error> {
    let mut index: HashMap<String, u16> = oldsegs
        .iter()
        .enumerate()
        .map(|(i, s)| (s.fingerprint().to_string(), i as u16))
        .collect();
    let mut cursor = oldsegs.len() as u16;
    let mut body = BytesMut::new();
    let mut sent = Vec::new();

    for seg in newsegs {
        if let Segment::Composition { children, .. } = seg.as_ref() {
            for child in children {
                ensure_emitted(child, &mut index, &mut cursor, &mut body, &mut sent)?;
            }
        }
        if let Some(&idx) = index.get(seg.fingerprint()) {
            write_wrapper(&mut body, idx);
            index.insert(seg.fingerprint().to_string(), cursor);
            sent.push(Rc::new(Segment::composition_unchecked(vec![seg.clone()])));
        } else {
            write_record(&mut body, seg, &index, true)?;
            index.insert(seg.fingerprint().to_string(), cursor);
            sent.push(seg.clone());
        }
        cursor += 1;
    }

    let num_segs = cursor - oldsegs.len() as u16;
    let msg_len = (HEADER_LEN + body.len()) as u32;
    let header = RawHeader::new(num_segs, msg_len, src_ia, dst_ia);

    let mut bytes = Vec::with_capacity(msg_len as usize);
    bytes.extend_from_slice(header.as_bytes());
    bytes.extend_from_slice(&body);
    Ok(Encoded { bytes, sent })
}

/// Recursively emits every transitive Composition child of `seg` not already in
/// `index`, in post-order, with `accepted=false`. Returns `seg`'s own index.
fn ensure_emitted(
    seg: &Rc<Segment>,
    index: &mut HashMap<String, u16>,
    cursor: &mut u16,
    body: &mut BytesMut,
    sent: &mut Vec<Rc<Segment>>,
) -> Result<u16, Error> {
    if let Some(&idx) = index.get(seg.fingerprint()) {
        return Ok(idx);
    }
    if let Segment::Composition { children, .. } = seg.as_ref() {
        for child in children {
            ensure_emitted(child, index, cursor, body, sent)?;
        }
    }
    let idx = *cursor;
    write_record(body, seg, index, false)?;
    index.insert(seg.fingerprint().to_string(), idx);
    sent.push(seg.clone());
    *cursor += 1;
    Ok(idx)
}

fn write_record(
    body: &mut BytesMut,
    seg: &Segment,
    index: &HashMap<String, u16>,
    accepted: bool,
) -> Result<(), Error> {
    let accepted_bit = if accepted { 0b10 } else { 0 };
    match seg {
        Segment::Literal { interfaces, .. } => {
            if interfaces.len() > u8::MAX as usize {
                return Err(DecodeError::SizeLimit.into());
            }
            body.put_u8(accepted_bit);
            body.put_u8(interfaces.len() as u8);
            body.put_u16(0);
            for iface in interfaces {
                body.put_u64(iface.id);
                body.put_u64(iface.ia.to_u64());
            }
        }
        Segment::Composition { children, .. } => {
            if children.len() > u8::MAX as usize {
                return Err(DecodeError::SizeLimit.into());
            }
            body.put_u8(0b01 | accepted_bit);
            body.put_u8(children.len() as u8);
            body.put_u16(0);
            for child in children {
                let idx = *index
                    .get(child.fingerprint())
                    .expect("child must be emitted before its parent");
                body.put_u16(idx);
            }
        }
    }
    Ok(())
}

fn write_wrapper(body: &mut BytesMut, child_idx: u16) {
    body.put_u8(0b01 | 0b10);
    body.put_u8(1);
    body.put_u16(0);
    body.put_u16(child_idx);
}

fn require(buf: &Bytes, n: usize) -> Result<(), Error> {
    if buf.remaining() < n {
        Err(DecodeError::ShortBuffer.into())
    } else {
        Ok(())
    }
}

fn try_get_u8(buf: &mut Bytes) -> Result<u8, Error> {
    buf.try_get_u8().map_err(|_| DecodeError::ShortBuffer.into())
}

fn try_get_u16(buf: &mut Bytes) -> Result<u16, Error> {
    buf.try_get_u16().map_err(|_| DecodeError::ShortBuffer.into())
}

fn try_get_u64(buf: &mut Bytes) -> Result<u64, Error> {
    buf.try_get_u64().map_err(|_| DecodeError::ShortBuffer.into())
}

/// Decodes a message against `oldsegs` (the shared history).
pub fn decode(bytes: &[u8], oldsegs: &[Rc<Segment>]) -> Result<Decoded, Error> {
    if bytes.len() < HEADER_LEN {
        return Err(DecodeError::ShortBuffer.into());
    }
    let raw = RawHeader::ref_from_bytes(&bytes[..HEADER_LEN])
        .expect("slice is exactly HEADER_LEN bytes with no alignment requirement");
    let hdr_len = raw.hdr_len as usize;
    if hdr_len < HEADER_LEN {
        return Err(DecodeError::SizeLimit.into());
    }
    let msg_len = raw.msg_len.get() as usize;
    if msg_len > bytes.len() || msg_len < hdr_len {
        return Err(DecodeError::SizeLimit.into());
    }
    let num_segs = raw.num_segs.get() as usize;
    let src_ia = Ia::from_u64(raw.src_ia.get());
    let dst_ia = Ia::from_u64(raw.dst_ia.get());

    let mut body = Bytes::copy_from_slice(&bytes[hdr_len..msg_len]);
    let mut newsegs: Vec<Rc<Segment>> = Vec::with_capacity(num_segs);
    let mut accepted = Vec::new();

    for _ in 0..num_segs {
        let flags = try_get_u8(&mut body)?;
        if flags & 0b1111_1100 != 0 {
            return Err(DecodeError::BadFlags.into());
        }
        let is_composition = flags & 0b01 != 0;
        let is_accepted = flags & 0b10 != 0;
        let seglen = try_get_u8(&mut body)?;
        if seglen == 0 {
            return Err(DecodeError::SegLenZero.into());
        }
        let optlen = try_get_u16(&mut body)? as usize;

        let seg = if is_composition {
            let bound = oldsegs.len() + newsegs.len();
            let mut children = Vec::with_capacity(seglen as usize);
            for _ in 0..seglen {
                let idx = try_get_u16(&mut body)? as usize;
                if idx >= bound {
                    return Err(DecodeError::ForwardReference.into());
                }
                let child = if idx < oldsegs.len() {
                    oldsegs[idx].clone()
                } else {
                    newsegs[idx - oldsegs.len()].clone()
                };
                children.push(child);
            }
            Rc::new(Segment::composition_unchecked(children))
        } else {
            let mut interfaces = Vec::with_capacity(seglen as usize);
            for _ in 0..seglen {
                let id = try_get_u64(&mut body)?;
                let ia = Ia::from_u64(try_get_u64(&mut body)?);
                interfaces.push(Interface::new(id, ia));
            }
            Rc::new(
                Segment::literal(interfaces)
                    .expect("seglen > 0 guarantees a non-empty interface list"),
            )
        };

        require(&body, optlen)?;
        body.advance(optlen);

        if is_accepted {
            accepted.push(seg.clone());
        }
        newsegs.push(seg);
    }

    if body.has_remaining() {
        return Err(DecodeError::NumSegsMismatch.into());
    }

    Ok(Decoded {
        all: newsegs,
        accepted,
        src_ia,
        dst_ia,
    })
}

/// Writes `msg` (the bytes returned by [`encode`]) prefixed by the outer 4-byte
/// big-endian length duplicate.
pub fn write_message<W: Write>(w: &mut W, msg: &[u8]) -> Result<(), Error> {
    w.write_u32_be(msg.len() as u32)?;
    w.write_all(msg)?;
    Ok(())
}

/// Reads one length-prefixed message off `r`. An EOF anywhere in the frame,
/// including before the length prefix, surfaces as `DecodeError::ShortBuffer`.
pub fn read_message<R: Read>(r: &mut R) -> Result<Vec<u8>, Error> {
    let len = r.read_u32_be()? as usize;
    let mut buf = vec![0u8; len];
    r.read_exact(&mut buf)?;
    Ok(buf)
}
