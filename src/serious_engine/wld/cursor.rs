//byte-level reading for Serious Engine 1 WLD files
//
//WLD is a FourCC-tagged chunk container with no global table of contents,
//so everything above this module navigates by peeking identifiers and by
//scanning forward when the framing is lost

use byteorder::{ByteOrder, LittleEndian};
use std::fmt;
use std::io::SeekFrom;
use thiserror::Error;

/// Longest string any length-prefixed field may announce.
pub const MAX_STRING_LENGTH: i32 = 1_000_000;

//
// Chunk identifiers
//

/// A four-character chunk tag, compared byte-for-byte.
///
/// Identifiers are not aligned in the file and may contain a trailing
/// space ("BSC ") or, in corrupt files, arbitrary bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkId(pub [u8; 4]);

impl ChunkId {
    pub const fn new(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for ChunkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            if b.is_ascii_graphic() || b == b' ' {
                write!(f, "{}", b as char)?;
            } else {
                write!(f, "\\x{:02X}", b)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for ChunkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChunkId({})", self)
    }
}

//
// Errors
//

#[derive(Error, Debug)]
pub enum WldError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("truncated file: {needed} byte(s) past offset 0x{position:08X}")]
    Truncated { position: usize, needed: usize },

    #[error("invalid string length: {0}")]
    InvalidLength(i32),

    #[error("expected chunk '{expected}' but found '{actual}' at offset 0x{position:08X}")]
    UnexpectedChunk {
        expected: ChunkId,
        actual: ChunkId,
        position: usize,
    },

    #[error("world state marker 'WSTA' not found")]
    WstaNotFound,

    #[error("malformed chunk: {0}")]
    Malformed(String),
}

pub type Result<T> = std::result::Result<T, WldError>;

//
// Byte cursor
//

/// A positioned little-endian reader over a complete in-memory WLD file.
///
/// The position may be set past the end of the buffer; reads from such a
/// position fail with `Truncated` and leave the position untouched.
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn set_position(&mut self, pos: usize) {
        self.pos = pos;
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Bytes left between the position and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    pub fn seek(&mut self, from: SeekFrom) {
        self.pos = match from {
            SeekFrom::Start(offset) => offset as usize,
            SeekFrom::Current(offset) => (self.pos as i64 + offset).max(0) as usize,
            SeekFrom::End(offset) => (self.data.len() as i64 + offset).max(0) as usize,
        };
    }

    /// Borrow the next `count` bytes and advance past them.
    fn take(&mut self, count: usize) -> Result<&'a [u8]> {
        if self.remaining() < count {
            return Err(WldError::Truncated {
                position: self.pos,
                needed: count - self.remaining(),
            });
        }
        let bytes = &self.data[self.pos..self.pos + count];
        self.pos += count;
        Ok(bytes)
    }

    /// Fail early when `count` elements of `width` bytes cannot all fit in
    /// the remaining buffer. Keeps hostile counts from allocating first.
    pub fn require(&self, count: usize, width: usize) -> Result<()> {
        let total = count
            .checked_mul(width)
            .ok_or_else(|| WldError::Malformed(format!("element count {count} overflows")))?;
        if self.remaining() < total {
            return Err(WldError::Truncated {
                position: self.pos,
                needed: total - self.remaining(),
            });
        }
        Ok(())
    }

    pub fn skip(&mut self, count: usize) -> Result<()> {
        self.take(count).map(|_| ())
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.take(1)?[0] as i8)
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(LittleEndian::read_u16(self.take(2)?))
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(LittleEndian::read_i16(self.take(2)?))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(LittleEndian::read_u32(self.take(4)?))
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(LittleEndian::read_i32(self.take(4)?))
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(LittleEndian::read_f32(self.take(4)?))
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        Ok(LittleEndian::read_f64(self.take(8)?))
    }

    /// Read exactly `length` bytes as text. The format writes
    /// length-prefixed strings, occasionally with a NUL inside the counted
    /// bytes; whatever was written is returned verbatim.
    pub fn read_string(&mut self, length: i32) -> Result<String> {
        if length < 0 || length > MAX_STRING_LENGTH {
            return Err(WldError::InvalidLength(length));
        }
        let bytes = self.take(length as usize)?;
        Ok(String::from_utf8_lossy(bytes).to_string())
    }

    /// Read single bytes up to and including a terminating NUL (excluded
    /// from the result) or EOF.
    pub fn read_cstring(&mut self) -> Result<String> {
        let mut name = String::new();
        while let Ok(byte) = self.read_u8() {
            if byte == 0 {
                break;
            }
            name.push(byte as char);
        }
        Ok(name)
    }

    pub fn read_chunk_id(&mut self) -> Result<ChunkId> {
        let bytes = self.take(4)?;
        Ok(ChunkId([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn peek_chunk_id(&mut self) -> Result<ChunkId> {
        let pos = self.pos;
        let id = self.read_chunk_id();
        self.pos = pos;
        id
    }

    pub fn expect_chunk_id(&mut self, expected: ChunkId) -> Result<()> {
        let position = self.pos;
        let actual = self.read_chunk_id()?;
        if actual != expected {
            return Err(WldError::UnexpectedChunk {
                expected,
                actual,
                position,
            });
        }
        Ok(())
    }

    /// True when the next four bytes match `id`. Too-short buffers simply
    /// do not match.
    pub fn next_is(&mut self, id: ChunkId) -> bool {
        self.peek_chunk_id().map(|next| next == id).unwrap_or(false)
    }

    //
    // Chunk scanning
    //

    /// Byte-by-byte forward scan for `id`, starting at the current
    /// position. On a hit the cursor parks at the match without consuming
    /// it; on a miss the cursor is restored.
    ///
    /// FourCCs are not aligned in the file, so the window moves one byte
    /// at a time.
    pub fn find_chunk_in_file(&mut self, id: ChunkId) -> Option<usize> {
        let start = self.pos;
        while self.pos + 4 <= self.data.len() {
            if self.data[self.pos..self.pos + 4] == id.0 {
                return Some(self.pos);
            }
            self.pos += 1;
        }
        self.pos = start;
        None
    }

    /// Advance to the start of the next occurrence of `id`, or to EOF.
    pub fn skip_to_fourcc(&mut self, id: ChunkId) {
        while self.pos + 4 <= self.data.len() {
            if self.data[self.pos..self.pos + 4] == id.0 {
                return;
            }
            self.pos += 1;
        }
        self.pos = self.data.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_reads() {
        let data = [
            0x2A, 0xFF, 0x34, 0x12, 0x78, 0x56, 0x34, 0x12, 0x00, 0x00, 0x80, 0x3F,
        ];
        let mut cur = ByteCursor::new(&data);
        assert_eq!(cur.len(), 12);
        assert_eq!(cur.read_u8().unwrap(), 0x2A);
        assert_eq!(cur.read_i8().unwrap(), -1);
        assert_eq!(cur.read_u16().unwrap(), 0x1234);
        assert_eq!(cur.read_u32().unwrap(), 0x12345678);
        assert_eq!(cur.read_f32().unwrap(), 1.0);
        assert!(cur.at_eof());
    }

    #[test]
    fn test_read_f64() {
        let mut data = Vec::new();
        data.extend_from_slice(&(-2.5f64).to_le_bytes());
        let mut cur = ByteCursor::new(&data);
        assert_eq!(cur.read_f64().unwrap(), -2.5);
    }

    #[test]
    fn test_truncated_read_does_not_advance() {
        let data = [0x01, 0x02];
        let mut cur = ByteCursor::new(&data);
        match cur.read_u32() {
            Err(WldError::Truncated { position: 0, needed: 2 }) => {}
            other => panic!("expected Truncated, got {:?}", other.map(|_| ())),
        }
        assert_eq!(cur.position(), 0);
        assert_eq!(cur.read_u16().unwrap(), 0x0201);
    }

    #[test]
    fn test_read_string_envelope() {
        let data = b"Hello\0world";
        let mut cur = ByteCursor::new(data);
        assert!(matches!(
            cur.read_string(-1),
            Err(WldError::InvalidLength(-1))
        ));
        assert!(matches!(
            cur.read_string(MAX_STRING_LENGTH + 1),
            Err(WldError::InvalidLength(_))
        ));
        // the NUL is part of the counted bytes and stays in the result
        assert_eq!(cur.read_string(6).unwrap(), "Hello\0");
        assert!(matches!(
            cur.read_string(64),
            Err(WldError::Truncated { .. })
        ));
    }

    #[test]
    fn test_read_cstring() {
        let data = b"level1\0rest";
        let mut cur = ByteCursor::new(data);
        assert_eq!(cur.read_cstring().unwrap(), "level1");
        assert_eq!(cur.position(), 7);
        // EOF also terminates
        assert_eq!(cur.read_cstring().unwrap(), "rest");
    }

    #[test]
    fn test_peek_and_expect() {
        let data = b"WRLDWSTA";
        let mut cur = ByteCursor::new(data);
        assert_eq!(cur.peek_chunk_id().unwrap(), ChunkId(*b"WRLD"));
        assert_eq!(cur.position(), 0);
        cur.expect_chunk_id(ChunkId(*b"WRLD")).unwrap();
        match cur.expect_chunk_id(ChunkId(*b"WEND")) {
            Err(WldError::UnexpectedChunk {
                expected,
                actual,
                position,
            }) => {
                assert_eq!(expected, ChunkId(*b"WEND"));
                assert_eq!(actual, ChunkId(*b"WSTA"));
                assert_eq!(position, 4);
            }
            other => panic!("expected UnexpectedChunk, got {:?}", other),
        }
    }

    #[test]
    fn test_find_chunk_unaligned() {
        // match starts at offset 3, deliberately off any 4-byte boundary
        let data = b"xyzWSTAtail";
        let mut cur = ByteCursor::new(data);
        assert_eq!(cur.find_chunk_in_file(ChunkId(*b"WSTA")), Some(3));
        assert_eq!(cur.position(), 3);
        assert_eq!(cur.read_chunk_id().unwrap(), ChunkId(*b"WSTA"));
    }

    #[test]
    fn test_find_chunk_restores_on_miss() {
        let data = b"no markers here";
        let mut cur = ByteCursor::new(data);
        cur.set_position(2);
        assert_eq!(cur.find_chunk_in_file(ChunkId(*b"WSTA")), None);
        assert_eq!(cur.position(), 2);
    }

    #[test]
    fn test_find_chunk_at_current_position() {
        let data = b"WSTA";
        let mut cur = ByteCursor::new(data);
        assert_eq!(cur.find_chunk_in_file(ChunkId(*b"WSTA")), Some(0));
    }

    #[test]
    fn test_skip_to_fourcc_hits_eof() {
        let data = b"WE..WEN.";
        let mut cur = ByteCursor::new(data);
        cur.skip_to_fourcc(ChunkId(*b"WEND"));
        assert!(cur.at_eof());
    }

    #[test]
    fn test_seek_origins() {
        let data = [0u8; 16];
        let mut cur = ByteCursor::new(&data);
        cur.seek(SeekFrom::Start(8));
        assert_eq!(cur.position(), 8);
        cur.seek(SeekFrom::Current(-3));
        assert_eq!(cur.position(), 5);
        cur.seek(SeekFrom::End(-4));
        assert_eq!(cur.position(), 12);
        // clamped at zero rather than wrapping
        cur.seek(SeekFrom::Current(-64));
        assert_eq!(cur.position(), 0);
    }

    #[test]
    fn test_position_past_end_is_allowed() {
        let data = [0u8; 4];
        let mut cur = ByteCursor::new(&data);
        cur.set_position(100);
        assert!(cur.at_eof());
        assert_eq!(cur.remaining(), 0);
        assert!(matches!(cur.read_u8(), Err(WldError::Truncated { .. })));
    }

    #[test]
    fn test_chunk_id_display() {
        assert_eq!(ChunkId(*b"BSC ").to_string(), "BSC ");
        assert_eq!(ChunkId([b'A', 0x01, b'B', 0xFF]).to_string(), "A\\x01B\\xFF");
    }
}
