/*!
Stream-framing helpers: the outer 4-byte big-endian length prefix that wraps every
wire message. The message body itself is read/written by [`crate::codec`].
*/
use byteorder::{ReadBytesExt, WriteBytesExt, BE};
use std::io::{self, Read, Write};

/// Reads fixed-width big-endian integers off any [`Read`]r.
pub trait ReadUtils: Read {
    fn read_u32_be(&mut self) -> io::Result<u32> {
        self.read_u32::<BE>()
    }
}

impl<R: Read + ?Sized> ReadUtils for R {}

/// Writes fixed-width big-endian integers to any [`Write`]r.
pub trait WriteUtils: Write {
    fn write_u32_be(&mut self, v: u32) -> io::Result<()> {
        self.write_u32::<BE>(v)
    }
}

impl<W: Write + ?Sized> WriteUtils for W {}
