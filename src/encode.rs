use byteorder::{LittleEndian, WriteBytesExt};
use std::io::Write;

use super::errors::Result;

/// Anything that has an exact on-wire byte layout.
///
/// Encoders append to the writer instead of filling pre-sized slices, so a
/// record can never be written past the end of its buffer.
pub trait Encodable {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<()>;

    fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.encode(&mut buffer)?;
        Ok(buffer)
    }
}

pub trait Decodable {
    fn from_bytes(bytes: &[u8]) -> Result<Self>
    where
        Self: Sized;
}

pub fn encode<T: Encodable>(object: &T) -> Result<Vec<u8>> {
    object.to_bytes()
}

pub fn decode<T: Decodable>(bytes: &[u8]) -> Result<T> {
    T::from_bytes(bytes)
}

impl Encodable for u8 {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        Ok(writer.write_u8(*self)?)
    }
}

impl Encodable for u16 {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        Ok(writer.write_u16::<LittleEndian>(*self)?)
    }
}

impl Encodable for u32 {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        Ok(writer.write_u32::<LittleEndian>(*self)?)
    }
}

impl Encodable for u64 {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        Ok(writer.write_u64::<LittleEndian>(*self)?)
    }
}

impl Encodable for i32 {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        Ok(writer.write_i32::<LittleEndian>(*self)?)
    }
}

impl Encodable for i64 {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        Ok(writer.write_i64::<LittleEndian>(*self)?)
    }
}

// raw bytes are copied verbatim, no length prefix
impl<const N: usize> Encodable for [u8; N] {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        Ok(writer.write_all(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    struct Test {
        value: u32,
        tag: u16,
    }

    impl Encodable for Test {
        fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
            self.value.encode(writer)?;
            self.tag.encode(writer)
        }
    }

    #[test]
    fn test_encode_struct() {
        let test = Test {
            value: 256,
            tag: 0xbeef,
        };
        let bytes = encode(&test).unwrap();

        assert_eq!(bytes, vec![0x00, 0x01, 0x00, 0x00, 0xef, 0xbe]);
    }

    #[test]
    fn test_signed_little_endian() {
        assert_eq!((-2i32).to_bytes().unwrap(), vec![0xfe, 0xff, 0xff, 0xff]);
        assert_eq!(
            1i64.to_bytes().unwrap(),
            vec![0x01, 0, 0, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn test_raw_bytes_verbatim() {
        let raw: [u8; 4] = [0xde, 0xad, 0xbe, 0xef];
        assert_eq!(raw.to_bytes().unwrap(), raw.to_vec());
    }

    #[quickcheck]
    fn u64_matches_le_bytes(value: u64) -> bool {
        value.to_bytes().unwrap() == value.to_le_bytes().to_vec()
    }

    #[quickcheck]
    fn u16_matches_le_bytes(value: u16) -> bool {
        value.to_bytes().unwrap() == value.to_le_bytes().to_vec()
    }
}
