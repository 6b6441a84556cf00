use sha2::{Digest, Sha256};

pub const CHECKSUM_SIZE: usize = 4;

/// Computes the Bitcoin checksum for the given payload: the first four bytes
/// of SHA256(SHA256(payload)), read as a little-endian u32.
pub fn checksum(data: &[u8]) -> u32 {
    let hash = Sha256::digest(Sha256::digest(data));

    let mut buffer = [0u8; CHECKSUM_SIZE];
    buffer.copy_from_slice(&hash[..CHECKSUM_SIZE]);

    u32::from_le_bytes(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_empty_payload() {
        assert_eq!(checksum(&[]), 0xe2e0f65d);
        assert_eq!(checksum(&[]).to_le_bytes(), [0x5d, 0xf6, 0xe0, 0xe2]);
    }

    #[quickcheck]
    fn deterministic(data: Vec<u8>) -> bool {
        checksum(&data) == checksum(&data)
    }

    #[quickcheck]
    fn detects_truncation(data: Vec<u8>) -> bool {
        data.is_empty() || checksum(&data) != checksum(&data[..data.len() - 1])
    }
}
