use crate::discriminator::DISCRIMINATOR_LEN;
use crate::errors::CodecError;
use crate::layout::Layout;

/// A top-level on-chain record: an 8-byte type discriminator followed by a
/// fixed field layout. Concrete account types supply their discriminator
/// constant and field list; decode and encode come for free.
///
/// `decode` does not verify which program owns the account. Callers decoding
/// raw bytes directly are responsible for that check;
/// [`AccountFetcher`](crate::fetch::AccountFetcher) performs it on every
/// fetch.
pub trait ProgramAccount: Layout {
    const DISCRIMINATOR: [u8; DISCRIMINATOR_LEN];

    /// Discriminator plus body width: the exact number of bytes `decode`
    /// consumes and `encode` produces. Accounts on chain may be allocated
    /// larger than this; trailing bytes are ignored.
    const SIZE: usize = DISCRIMINATOR_LEN + Self::WIDTH;

    fn decode(data: &[u8]) -> Result<Self, CodecError> {
        if data.len() < DISCRIMINATOR_LEN {
            return Err(CodecError::TruncatedBuffer {
                needed: Self::SIZE,
                got: data.len(),
            });
        }
        let mut found = [0u8; DISCRIMINATOR_LEN];
        found.copy_from_slice(&data[..DISCRIMINATOR_LEN]);
        if found != Self::DISCRIMINATOR {
            return Err(CodecError::BadDiscriminator {
                expected: Self::DISCRIMINATOR,
                found,
            });
        }
        if data.len() < Self::SIZE {
            return Err(CodecError::TruncatedBuffer {
                needed: Self::SIZE,
                got: data.len(),
            });
        }
        let mut offset = DISCRIMINATOR_LEN;
        Self::read(data, &mut offset)
    }

    fn encode(&self) -> Vec<u8> {
        let mut out = vec![0u8; Self::SIZE];
        out[..DISCRIMINATOR_LEN].copy_from_slice(&Self::DISCRIMINATOR);
        let mut offset = DISCRIMINATOR_LEN;
        self.write(&mut out, &mut offset);
        out
    }
}
