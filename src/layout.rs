use solana_address::Address;

use crate::errors::CodecError;

pub const PUBKEY_LEN: usize = 32;

/// Fixed-width little-endian wire encoding.
///
/// Every field of an on-chain record implements this. Composite records read
/// their fields in wire order through a shared cursor, so a record's codec is
/// exactly its field list and nothing else.
pub trait Layout: Sized {
    const WIDTH: usize;

    fn read(buf: &[u8], offset: &mut usize) -> Result<Self, CodecError>;

    /// Writes exactly `WIDTH` bytes at `offset`. Callers size the buffer up
    /// front; encode paths always allocate the full account length.
    fn write(&self, buf: &mut [u8], offset: &mut usize);
}

macro_rules! impl_layout_for_int {
    ($($ty:ty),* $(,)?) => {$(
        impl Layout for $ty {
            const WIDTH: usize = core::mem::size_of::<$ty>();

            fn read(buf: &[u8], offset: &mut usize) -> Result<Self, CodecError> {
                if buf.len() < *offset + Self::WIDTH {
                    return Err(CodecError::TruncatedBuffer {
                        needed: *offset + Self::WIDTH,
                        got: buf.len(),
                    });
                }
                let mut bytes = [0u8; core::mem::size_of::<$ty>()];
                bytes.copy_from_slice(&buf[*offset..*offset + Self::WIDTH]);
                *offset += Self::WIDTH;
                Ok(<$ty>::from_le_bytes(bytes))
            }

            fn write(&self, buf: &mut [u8], offset: &mut usize) {
                buf[*offset..*offset + Self::WIDTH].copy_from_slice(&self.to_le_bytes());
                *offset += Self::WIDTH;
            }
        }
    )*};
}

impl_layout_for_int!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

impl Layout for Address {
    const WIDTH: usize = PUBKEY_LEN;

    fn read(buf: &[u8], offset: &mut usize) -> Result<Self, CodecError> {
        if buf.len() < *offset + PUBKEY_LEN {
            return Err(CodecError::TruncatedBuffer {
                needed: *offset + PUBKEY_LEN,
                got: buf.len(),
            });
        }
        let mut bytes = [0u8; PUBKEY_LEN];
        bytes.copy_from_slice(&buf[*offset..*offset + PUBKEY_LEN]);
        *offset += PUBKEY_LEN;
        Ok(Address::new_from_array(bytes))
    }

    fn write(&self, buf: &mut [u8], offset: &mut usize) {
        buf[*offset..*offset + PUBKEY_LEN].copy_from_slice(&self.to_bytes());
        *offset += PUBKEY_LEN;
    }
}

impl<T: Layout + Copy + Default, const N: usize> Layout for [T; N] {
    const WIDTH: usize = T::WIDTH * N;

    fn read(buf: &[u8], offset: &mut usize) -> Result<Self, CodecError> {
        let mut out = [T::default(); N];
        for slot in &mut out {
            *slot = T::read(buf, offset)?;
        }
        Ok(out)
    }

    fn write(&self, buf: &mut [u8], offset: &mut usize) {
        for item in self {
            item.write(buf, offset);
        }
    }
}
