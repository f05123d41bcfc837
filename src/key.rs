//! Key types for S-AES.

/// 16-bit S-AES cipher key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SaesKey(pub u16);

impl From<u16> for SaesKey {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

/// Expanded round keys: pre-round key, round-1 key, round-2 key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys(pub [u16; 3]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=2).
    #[inline]
    pub fn get(&self, round: usize) -> u16 {
        self.0[round]
    }
}
