//! `std::io` adapters.
//!
//! These let a [`Buffer`] stand in wherever a `Read`, `Write` or `Seek` is
//! expected. The std contracts differ from the inherent methods at the end of
//! the buffer: `io::Read` reports end of data as `Ok(0)` and `io::Write`
//! reports a full buffer as `Ok(0)`, which `write_all` turns into
//! [`io::ErrorKind::WriteZero`].

use std::io;

use crate::buffer::{Buffer, Whence};
use crate::error::BufferError;

impl From<BufferError> for io::Error {
    fn from(err: BufferError) -> Self {
        let kind = match err {
            BufferError::Overrun => io::ErrorKind::InvalidInput,
            BufferError::EndOfData => io::ErrorKind::UnexpectedEof,
            BufferError::InvalidArgument(_) => io::ErrorKind::InvalidInput,
            BufferError::Encoding(_) => io::ErrorKind::InvalidData,
        };
        io::Error::new(kind, err)
    }
}

impl<B: AsRef<[u8]>> io::Read for Buffer<B> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        match Buffer::read(self, buf) {
            Ok(n) => Ok(n),
            Err(BufferError::EndOfData) => Ok(0),
            Err(err) => Err(err.into()),
        }
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> io::Write for Buffer<B> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        match Buffer::write(self, buf) {
            Ok(n) => Ok(n),
            Err(BufferError::Overrun) => Ok(0),
            Err(err) => Err(err.into()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<B: AsRef<[u8]>> io::Seek for Buffer<B> {
    fn seek(&mut self, pos: io::SeekFrom) -> io::Result<u64> {
        let position = match pos {
            io::SeekFrom::Start(offset) => {
                let offset = i64::try_from(offset).map_err(|_| BufferError::Overrun)?;
                Buffer::seek(self, offset, Whence::Start)?
            }
            io::SeekFrom::Current(offset) => Buffer::seek(self, offset, Whence::Current)?,
            io::SeekFrom::End(offset) => Buffer::seek(self, offset, Whence::End)?,
        };
        Ok(position as u64)
    }

    // The default routes through `seek(Current(0))`, which overruns once the
    // cursor sits at the end of the buffer.
    fn stream_position(&mut self) -> io::Result<u64> {
        Ok(self.position() as u64)
    }

    fn rewind(&mut self) -> io::Result<()> {
        self.reset();
        Ok(())
    }
}
