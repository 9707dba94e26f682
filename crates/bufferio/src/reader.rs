//! Bounds-checked byte reader used by structured decoding.

use crate::error::EncodingError;

/// Reads bytes from a slice with cursor tracking.
///
/// Every read is bounds-checked and fails with
/// [`EncodingError::ShortBuffer`] instead of panicking. Hand-written
/// [`FixedLayout`](crate::FixedLayout) implementations pull their bytes from
/// here.
///
/// # Example
///
/// ```
/// use bufferio::Reader;
///
/// let data = [0x01, 0x02, 0x03];
/// let mut reader = Reader::new(&data);
///
/// assert_eq!(reader.array::<2>().unwrap(), [0x01, 0x02]);
/// assert_eq!(reader.size(), 1);
/// assert!(reader.buf(2).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    data: &'a [u8],
    x: usize,
}

impl<'a> Reader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, x: 0 }
    }

    /// Current cursor position.
    pub fn position(&self) -> usize {
        self.x
    }

    /// Returns the number of remaining bytes.
    pub fn size(&self) -> usize {
        self.data.len() - self.x
    }

    /// Fails unless at least `needed` bytes remain.
    pub fn ensure(&self, needed: usize) -> Result<(), EncodingError> {
        let available = self.size();
        if needed > available {
            return Err(EncodingError::ShortBuffer { needed, available });
        }
        Ok(())
    }

    /// Returns the next `size` bytes and advances the cursor.
    pub fn buf(&mut self, size: usize) -> Result<&'a [u8], EncodingError> {
        self.ensure(size)?;
        let x = self.x;
        self.x += size;
        Ok(&self.data[x..self.x])
    }

    /// Reads exactly `N` bytes into an array.
    #[inline]
    pub fn array<const N: usize>(&mut self) -> Result<[u8; N], EncodingError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.buf(N)?);
        Ok(out)
    }
}
