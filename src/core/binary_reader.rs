use std::io::Cursor;

use byteorder::{LittleEndian, ReadBytesExt};
use thiserror::Error;

/// Bounds-checked little-endian reader over a borrowed buffer.
pub struct BinaryReader<'a> {
    buffer: &'a [u8],
    offset: usize,
}

impl<'a> BinaryReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            buffer: data,
            offset: 0,
        }
    }

    /// Reader positioned at `offset`; fails if the offset lies past the end.
    pub fn at(data: &'a [u8], offset: usize) -> Result<Self, BinaryReaderError> {
        let mut reader = Self::new(data);
        reader.seek(offset)?;
        Ok(reader)
    }

    pub fn seek(&mut self, offset: usize) -> Result<(), BinaryReaderError> {
        if offset > self.buffer.len() {
            return Err(BinaryReaderError::SeekOutOfBounds {
                offset,
                buffer_len: self.buffer.len(),
            });
        }
        self.offset = offset;
        Ok(())
    }

    pub fn read_fixed_array(&mut self, length: usize) -> Result<&'a [u8], BinaryReaderError> {
        self.check_bounds(length)?;
        let slice = &self.buffer[self.offset..self.offset + length];
        self.offset += length;
        Ok(slice)
    }

    pub fn read_u64(&mut self) -> Result<u64, BinaryReaderError> {
        self.check_bounds(8)?;
        let mut cursor = Cursor::new(&self.buffer[self.offset..self.offset + 8]);
        let value = cursor
            .read_u64::<LittleEndian>()
            .map_err(BinaryReaderError::Io)?;
        self.offset += 8;
        Ok(value)
    }

    /// Reads 32 raw bytes and returns them base58-encoded.
    pub fn read_pubkey(&mut self) -> Result<String, BinaryReaderError> {
        let bytes = self.read_fixed_array(32)?;
        Ok(bs58::encode(bytes).into_string())
    }

    fn check_bounds(&self, length: usize) -> Result<(), BinaryReaderError> {
        if self.offset + length > self.buffer.len() {
            return Err(BinaryReaderError::BufferOverflow {
                length,
                offset: self.offset,
                buffer_len: self.buffer.len(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum BinaryReaderError {
    #[error("buffer overflow: trying to read {length} bytes at offset {offset} from buffer of length {buffer_len}")]
    BufferOverflow {
        length: usize,
        offset: usize,
        buffer_len: usize,
    },
    #[error("cannot seek to offset {offset} in buffer of length {buffer_len}")]
    SeekOutOfBounds { offset: usize, buffer_len: usize },
    #[error("failed to read value: {0}")]
    Io(#[from] std::io::Error),
}
