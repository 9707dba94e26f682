//! Byte order selection for structured access.

/// Byte order used when encoding or decoding multi-byte values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    LittleEndian,
    BigEndian,
}

impl ByteOrder {
    /// Byte order of the host.
    #[cfg(target_endian = "little")]
    pub const NATIVE: ByteOrder = ByteOrder::LittleEndian;
    /// Byte order of the host.
    #[cfg(target_endian = "big")]
    pub const NATIVE: ByteOrder = ByteOrder::BigEndian;

    /// True for [`ByteOrder::LittleEndian`].
    pub fn is_little(self) -> bool {
        self == ByteOrder::LittleEndian
    }

    /// True for [`ByteOrder::BigEndian`].
    pub fn is_big(self) -> bool {
        self == ByteOrder::BigEndian
    }
}

impl std::fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ByteOrder::LittleEndian => write!(f, "LittleEndian"),
            ByteOrder::BigEndian => write!(f, "BigEndian"),
        }
    }
}
