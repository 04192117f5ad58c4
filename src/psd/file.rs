use std::fs;
use std::path::Path;

use crate::psd::bytes::Cursor;
use crate::psd::{PsdHeader, ResourceBlock, ResourceIter, Result};

/// In-memory PSD file with the image-resource section located.
pub struct PsdFile {
	/// Parsed file header.
	pub header: PsdHeader,
	bytes: Vec<u8>,
	resources_offset: usize,
	resources_len: usize,
}

impl PsdFile {
	/// Read and frame a file from disk.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		Self::from_bytes(fs::read(path)?)
	}

	/// Frame an in-memory file.
	pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
		let header = PsdHeader::parse(&bytes)?;

		let mut cursor = Cursor::new(&bytes);
		cursor.skip(PsdHeader::SIZE)?;
		let color_mode_len = cursor.read_u32()? as usize;
		cursor.skip(color_mode_len)?;

		let resources_len = cursor.read_u32()? as usize;
		let resources_offset = cursor.offset();
		cursor.skip(resources_len)?;

		Ok(Self {
			header,
			bytes,
			resources_offset,
			resources_len,
		})
	}

	/// Absolute offset and length of the image-resource section.
	pub fn resources_range(&self) -> (usize, usize) {
		(self.resources_offset, self.resources_len)
	}

	/// Iterate image-resource blocks in file order.
	pub fn resources(&self) -> ResourceIter<'_> {
		let end = self.resources_offset + self.resources_len;
		ResourceIter::new(&self.bytes[self.resources_offset..end], self.resources_offset)
	}

	/// First resource block with `id`.
	pub fn find_resource(&self, id: u16) -> Result<Option<ResourceBlock<'_>>> {
		for block in self.resources() {
			let block = block?;
			if block.id == id {
				return Ok(Some(block));
			}
		}
		Ok(None)
	}
}

#[cfg(test)]
mod tests;
