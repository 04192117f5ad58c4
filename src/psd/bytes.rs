use crate::psd::{PsdError, Result};

/// Forward-only big-endian cursor over an immutable byte slice.
///
/// Offsets reported in errors are absolute: they include the `base` the
/// cursor was created with, so a cursor over one resource block still points
/// at file positions.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
	base: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0 with base offset 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self::with_base(bytes, 0)
	}

	/// Create a cursor whose reported offsets start at `base`.
	pub fn with_base(bytes: &'a [u8], base: usize) -> Self {
		Self { bytes, pos: 0, base }
	}

	/// Return the position relative to the start of the slice.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Return the absolute byte offset of the next read.
	pub fn offset(&self) -> usize {
		self.base + self.pos
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Read exactly `n` bytes and advance cursor.
	pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
		if n > self.remaining() {
			return Err(PsdError::TruncatedStream {
				at: self.offset(),
				need: n,
				rem: self.remaining(),
			});
		}

		let start = self.pos;
		self.pos += n;
		Ok(&self.bytes[start..self.pos])
	}

	/// Skip `n` bytes.
	pub fn skip(&mut self, n: usize) -> Result<()> {
		let _ = self.read_exact(n)?;
		Ok(())
	}

	/// Read a four-byte code.
	pub fn read_code4(&mut self) -> Result<[u8; 4]> {
		self.read_array()
	}

	/// Read one byte.
	pub fn read_u8(&mut self) -> Result<u8> {
		let [byte] = self.read_array()?;
		Ok(byte)
	}

	/// Read a big-endian `u16`.
	pub fn read_u16(&mut self) -> Result<u16> {
		Ok(u16::from_be_bytes(self.read_array()?))
	}

	/// Read a big-endian `u32`.
	pub fn read_u32(&mut self) -> Result<u32> {
		Ok(u32::from_be_bytes(self.read_array()?))
	}

	/// Read a big-endian `i32`.
	pub fn read_i32(&mut self) -> Result<i32> {
		Ok(i32::from_be_bytes(self.read_array()?))
	}

	/// Read a big-endian IEEE-754 `f64`.
	pub fn read_f64(&mut self) -> Result<f64> {
		Ok(f64::from_be_bytes(self.read_array()?))
	}

	/// Read `n` raw bytes as a Latin-1 string.
	pub fn read_fixed_string(&mut self, n: usize) -> Result<String> {
		let raw = self.read_exact(n)?;
		Ok(raw.iter().copied().map(char::from).collect())
	}

	/// Read a key or class identifier.
	///
	/// A stored length of zero means exactly four raw bytes follow; any other
	/// length is the byte count of the identifier.
	pub fn read_id_string(&mut self) -> Result<String> {
		let len = self.read_u32()?;
		let len = if len == 0 { 4 } else { self.len_to_usize(len)? };
		self.read_fixed_string(len)
	}

	/// Read a UTF-16BE string prefixed by its `u32` code-unit count.
	///
	/// Every declared code unit is consumed; one trailing NUL terminator is
	/// dropped from the returned text, any further NULs are kept.
	pub fn read_unicode_string(&mut self) -> Result<String> {
		let count_at = self.offset();
		let count = self.read_u32()?;
		let count = self.len_to_usize(count)?;
		let byte_len = count.checked_mul(2).ok_or(PsdError::InvalidEncoding {
			at: count_at,
			reason: "unicode string length overflows",
		})?;
		let raw = self.read_exact(byte_len)?;

		let units = raw.chunks_exact(2).map(|pair| u16::from_be_bytes([pair[0], pair[1]]));
		let mut text = String::with_capacity(count);
		for ch in char::decode_utf16(units) {
			let ch = ch.map_err(|_| PsdError::InvalidEncoding {
				at: count_at,
				reason: "unpaired utf-16 surrogate",
			})?;
			text.push(ch);
		}

		if text.ends_with('\0') {
			text.pop();
		}
		Ok(text)
	}

	/// Read a Pascal string padded so that length byte plus text is even.
	pub fn read_pascal_string(&mut self) -> Result<String> {
		let len = usize::from(self.read_u8()?);
		let text = self.read_fixed_string(len)?;
		if (len + 1) % 2 != 0 {
			self.skip(1)?;
		}
		Ok(text)
	}

	fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
		let raw = self.read_exact(N)?;
		let mut out = [0_u8; N];
		out.copy_from_slice(raw);
		Ok(out)
	}

	fn len_to_usize(&self, len: u32) -> Result<usize> {
		usize::try_from(len).map_err(|_| PsdError::InvalidEncoding {
			at: self.offset(),
			reason: "length does not fit in memory",
		})
	}
}

#[cfg(test)]
mod tests;
