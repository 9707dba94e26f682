//! Fixed-capacity byte buffer with cursor tracking.

use tracing::trace;

use crate::error::{BufferError, Result};
use crate::layout::{encode_to_vec, FixedLayout};
use crate::order::ByteOrder;
use crate::reader::Reader;

/// Seek addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Whence {
    /// Relative to the start of the buffer.
    Start,
    /// Relative to the cursor.
    Current,
    /// Relative to the end of the buffer. Not supported: seeking with it
    /// always fails with [`BufferError::Overrun`].
    End,
}

/// Maps the POSIX `whence` values: `0` start, `1` current, `2` end.
impl TryFrom<i32> for Whence {
    type Error = BufferError;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            0 => Ok(Whence::Start),
            1 => Ok(Whence::Current),
            2 => Ok(Whence::End),
            _ => {
                trace!(whence = value, "unknown seek mode");
                Err(BufferError::InvalidArgument("invalid whence"))
            }
        }
    }
}

/// A fixed-length byte region with a cursor.
///
/// The length is set at construction and never changes. Positional access
/// ([`read_at`](Buffer::read_at), [`write_at`](Buffer::write_at)) leaves the
/// cursor alone; sequential access ([`read`](Buffer::read),
/// [`write`](Buffer::write)) moves it by the number of bytes transferred.
///
/// A position at or past the end is an error; a transfer that starts in
/// range but would run off the end is silently truncated.
///
/// The storage `B` can be anything that derefs to a byte slice: a `Vec<u8>`
/// (the default), a boxed slice, an array, or a borrowed `&mut [u8]`. It is
/// wrapped, never copied.
///
/// # Example
///
/// ```
/// use bufferio::{Buffer, BufferError};
///
/// let mut buf = Buffer::with_capacity(10);
/// let data = [1, 2, 3, 4, 5, 6, 7, 8];
///
/// assert_eq!(buf.write_at(&data, 0), Ok(8));
/// assert_eq!(buf.write_at(&data, 8), Ok(2));
/// assert_eq!(buf.write_at(&data, 10), Err(BufferError::Overrun));
/// assert_eq!(buf.as_bytes(), &[1, 2, 3, 4, 5, 6, 7, 8, 1, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct Buffer<B = Vec<u8>> {
    buf: B,
    /// Cursor position, always `<= len`.
    off: usize,
}

impl Buffer<Vec<u8>> {
    /// Allocates a zero-filled buffer of `n` bytes.
    pub fn with_capacity(n: usize) -> Self {
        Self::from_bytes(vec![0; n])
    }
}

impl<B: AsRef<[u8]>> Buffer<B> {
    /// Wraps `buf` without copying. The cursor starts at 0.
    pub fn from_bytes(buf: B) -> Self {
        Self { buf, off: 0 }
    }

    /// Fixed size of the buffer in bytes.
    pub fn len(&self) -> usize {
        self.buf.as_ref().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current cursor position.
    pub fn position(&self) -> usize {
        self.off
    }

    /// Bytes between the cursor and the end.
    pub fn remaining(&self) -> usize {
        self.len() - self.off
    }

    /// The whole backing region, regardless of the cursor.
    pub fn as_bytes(&self) -> &[u8] {
        self.buf.as_ref()
    }

    /// Unwraps the backing storage.
    pub fn into_inner(self) -> B {
        self.buf
    }

    /// Moves the cursor back to 0. Contents are untouched.
    pub fn reset(&mut self) {
        self.off = 0;
    }

    /// Copies bytes starting at `offset` into `dst` without moving the
    /// cursor.
    ///
    /// Fails with [`BufferError::EndOfData`] if `offset` is at or past the
    /// end. Otherwise returns `min(dst.len(), len - offset)`.
    pub fn read_at(&self, dst: &mut [u8], offset: usize) -> Result<usize> {
        let src = self.as_bytes();
        if offset >= src.len() {
            trace!(offset, len = src.len(), "read_at past end");
            return Err(BufferError::EndOfData);
        }
        let n = dst.len().min(src.len() - offset);
        dst[..n].copy_from_slice(&src[offset..offset + n]);
        Ok(n)
    }

    /// Reads at the cursor and advances it by the number of bytes copied.
    pub fn read(&mut self, dst: &mut [u8]) -> Result<usize> {
        let n = self.read_at(dst, self.off)?;
        self.off += n;
        Ok(n)
    }

    /// Moves the cursor and returns its new position.
    ///
    /// Candidates at or past the end fail with [`BufferError::Overrun`];
    /// negative candidates fail with [`BufferError::InvalidArgument`].
    /// [`Whence::End`] always fails with [`BufferError::Overrun`]. On error the
    /// cursor does not move.
    pub fn seek(&mut self, offset: i64, whence: Whence) -> Result<usize> {
        let len = self.len();
        let position = match whence {
            Whence::Start => i128::from(offset),
            Whence::Current => self.off as i128 + i128::from(offset),
            Whence::End => {
                trace!(offset, len, "seek relative to end is unsupported");
                return Err(BufferError::Overrun);
            }
        };

        if position >= len as i128 {
            trace!(offset, ?whence, len, "seek past end");
            return Err(BufferError::Overrun);
        }
        if position < 0 {
            trace!(offset, ?whence, "seek to negative position");
            return Err(BufferError::InvalidArgument("negative position"));
        }

        self.off = position as usize;
        Ok(self.off)
    }

    /// Decodes `target` from the bytes at the cursor.
    ///
    /// Unlike [`write_data`](Buffer::write_data) this does **not** advance
    /// the cursor: two consecutive calls decode the same bytes. Seek past the
    /// value explicitly to move on.
    ///
    /// Fails with [`BufferError::Encoding`] if fewer than
    /// `target.encoded_len()` bytes remain; `target` is untouched in that
    /// case.
    ///
    /// # Example
    ///
    /// ```
    /// use bufferio::{Buffer, ByteOrder};
    ///
    /// let buf = Buffer::from_bytes(vec![1, 2, 3, 4, 5, 6, 7, 8]);
    /// let mut words = [0u32; 2];
    /// buf.read_data(ByteOrder::BigEndian, &mut words).unwrap();
    /// assert_eq!(words, [0x0102_0304, 0x0506_0708]);
    /// assert_eq!(buf.position(), 0);
    /// ```
    pub fn read_data<T: FixedLayout + ?Sized>(
        &self,
        order: ByteOrder,
        target: &mut T,
    ) -> Result<()> {
        let mut reader = Reader::new(&self.as_bytes()[self.off..]);
        if let Err(err) = reader.ensure(target.encoded_len()) {
            trace!(%order, position = self.off, error = %err, "read_data short buffer");
            return Err(err.into());
        }
        target.decode(order, &mut reader)?;
        Ok(())
    }

    /// [`read_data`](Buffer::read_data) in little-endian order.
    pub fn read_data_le<T: FixedLayout + ?Sized>(&self, target: &mut T) -> Result<()> {
        self.read_data(ByteOrder::LittleEndian, target)
    }

    /// [`read_data`](Buffer::read_data) in big-endian order.
    pub fn read_data_be<T: FixedLayout + ?Sized>(&self, target: &mut T) -> Result<()> {
        self.read_data(ByteOrder::BigEndian, target)
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> Buffer<B> {
    /// Mutable view of the whole backing region.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        self.buf.as_mut()
    }

    /// Copies `data` into the buffer at `offset` without moving the cursor.
    ///
    /// Fails with [`BufferError::Overrun`] if `offset` is at or past the end,
    /// even for empty `data`. Otherwise returns `min(data.len(), len - offset)`.
    pub fn write_at(&mut self, data: &[u8], offset: usize) -> Result<usize> {
        let dst = self.buf.as_mut();
        if offset >= dst.len() {
            trace!(offset, len = dst.len(), "write_at past end");
            return Err(BufferError::Overrun);
        }
        let n = data.len().min(dst.len() - offset);
        dst[offset..offset + n].copy_from_slice(&data[..n]);
        Ok(n)
    }

    /// Writes at the cursor and advances it by the number of bytes copied.
    pub fn write(&mut self, data: &[u8]) -> Result<usize> {
        let n = self.write_at(data, self.off)?;
        self.off += n;
        Ok(n)
    }

    /// Encodes `value` and writes it at the cursor, advancing it.
    ///
    /// Behaves exactly like [`write`](Buffer::write) with the encoded bytes:
    /// an encoding longer than the remaining space is truncated. Returns the
    /// number of bytes written.
    pub fn write_data<T: FixedLayout + ?Sized>(
        &mut self,
        order: ByteOrder,
        value: &T,
    ) -> Result<usize> {
        let encoded = encode_to_vec(order, value);
        self.write(&encoded)
    }

    /// [`write_data`](Buffer::write_data) in little-endian order.
    pub fn write_data_le<T: FixedLayout + ?Sized>(&mut self, value: &T) -> Result<usize> {
        self.write_data(ByteOrder::LittleEndian, value)
    }

    /// [`write_data`](Buffer::write_data) in big-endian order.
    pub fn write_data_be<T: FixedLayout + ?Sized>(&mut self, value: &T) -> Result<usize> {
        self.write_data(ByteOrder::BigEndian, value)
    }
}
