use crate::models::Ia;
use zerocopy::big_endian::{U16, U32, U64};
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

pub(crate) const HEADER_LEN: usize = 24;

/// On-wire message header (24 bytes).
#[derive(IntoBytes, FromBytes, KnownLayout, Immutable)]
#[repr(C)]
pub(crate) struct RawHeader {
    pub version: u8,
    pub hdr_len: u8,
    pub num_segs: U16,
    pub msg_len: U32,
    pub src_ia: U64,
    pub dst_ia: U64,
}

const _: () = assert!(size_of::<RawHeader>() == HEADER_LEN);

impl RawHeader {
    pub(crate) fn new(num_segs: u16, msg_len: u32, src_ia: Ia, dst_ia: Ia) -> Self {
        RawHeader {
            version: 0,
            hdr_len: HEADER_LEN as u8,
            num_segs: U16::new(num_segs),
            msg_len: U32::new(msg_len),
            src_ia: U64::new(src_ia.to_u64()),
            dst_ia: U64::new(dst_ia.to_u64()),
        }
    }
}
