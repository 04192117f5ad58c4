use tracing::debug;

use crate::psd::bytes::Cursor;
use crate::psd::{
	DESCRIPTOR_RESOURCE_ID, DecodeOptions, Descriptor, OsType, PsdError, RESOLUTION_INFO_RESOURCE_ID, ResolutionInfo, Result, decode_descriptor_with,
};

/// Signature every image-resource block starts with.
pub const RESOURCE_SIGNATURE: [u8; 4] = *b"8BIM";

/// Version prefix stored ahead of a descriptor inside resource blocks.
pub const DESCRIPTOR_VERSION: u32 = 16;

/// Borrowed view over one image-resource block.
#[derive(Debug, Clone)]
pub struct ResourceBlock<'a> {
	/// Numeric resource id.
	pub id: u16,
	/// Pascal-string name, usually empty.
	pub name: String,
	/// Payload bytes, without the trailing pad byte.
	pub data: &'a [u8],
	/// Absolute byte offset of the block signature.
	pub file_offset: usize,
	/// Absolute byte offset of the first payload byte.
	pub data_offset: usize,
}

/// Decoded resource payload.
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceData {
	/// Resource 1088.
	Descriptor {
		/// Version prefix (always 16).
		version: u32,
		/// Decoded descriptor.
		descriptor: Descriptor,
	},
	/// Resource 1005.
	ResolutionInfo(ResolutionInfo),
	/// Any other id; bytes stay in `ResourceBlock::data`.
	Raw,
}

impl ResourceBlock<'_> {
	/// Cursor over the payload reporting absolute offsets.
	pub fn cursor(&self) -> Cursor<'_> {
		Cursor::with_base(self.data, self.data_offset)
	}

	/// Decode the payload according to the block id.
	pub fn decode(&self, opt: &DecodeOptions) -> Result<ResourceData> {
		match self.id {
			DESCRIPTOR_RESOURCE_ID => {
				let (version, descriptor) = self.decode_descriptor(opt)?;
				Ok(ResourceData::Descriptor { version, descriptor })
			}
			RESOLUTION_INFO_RESOURCE_ID => Ok(ResourceData::ResolutionInfo(ResolutionInfo::parse(&mut self.cursor())?)),
			_ => Ok(ResourceData::Raw),
		}
	}

	/// Read the version prefix and the descriptor that follows it.
	///
	/// Works for any block id so callers can probe ids that embed a
	/// versioned descriptor.
	pub fn decode_descriptor(&self, opt: &DecodeOptions) -> Result<(u32, Descriptor)> {
		let mut cursor = self.cursor();
		let version = read_descriptor_version(&mut cursor)?;
		let descriptor = decode_descriptor_with(&mut cursor, opt)?;
		if cursor.remaining() > 0 {
			debug!(id = self.id, trailing = cursor.remaining(), "descriptor resource has trailing bytes");
		}
		Ok((version, descriptor))
	}
}

/// Read and check the `u32` version stored ahead of a descriptor.
pub fn read_descriptor_version(cursor: &mut Cursor<'_>) -> Result<u32> {
	let at = cursor.offset();
	let version = cursor.read_u32()?;
	if version != DESCRIPTOR_VERSION {
		return Err(PsdError::UnsupportedDescriptorVersion { version, at });
	}
	Ok(version)
}

/// Iterator over contiguous resource blocks of an image-resource section.
pub struct ResourceIter<'a> {
	cursor: Cursor<'a>,
	done: bool,
}

impl<'a> ResourceIter<'a> {
	/// Iterate the section bytes; `base` is the section's absolute offset.
	pub fn new(section: &'a [u8], base: usize) -> Self {
		Self {
			cursor: Cursor::with_base(section, base),
			done: false,
		}
	}

	fn parse_block(&mut self) -> Result<ResourceBlock<'a>> {
		let file_offset = self.cursor.offset();
		let signature = self.cursor.read_code4()?;
		if signature != RESOURCE_SIGNATURE {
			return Err(PsdError::BadResourceSignature {
				signature: OsType(signature),
				at: file_offset,
			});
		}

		let id = self.cursor.read_u16()?;
		let name = self.cursor.read_pascal_string()?;
		let size = self.cursor.read_u32()? as usize;
		let data_offset = self.cursor.offset();
		let data = self.cursor.read_exact(size)?;
		if size % 2 != 0 && self.cursor.remaining() > 0 {
			self.cursor.skip(1)?;
		}

		debug!(id, offset = file_offset, size, "resource block");
		Ok(ResourceBlock {
			id,
			name,
			data,
			file_offset,
			data_offset,
		})
	}
}

impl<'a> Iterator for ResourceIter<'a> {
	type Item = Result<ResourceBlock<'a>>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.done {
			return None;
		}

		if self.cursor.remaining() == 0 {
			self.done = true;
			return None;
		}

		let block = self.parse_block();
		if block.is_err() {
			self.done = true;
		}
		Some(block)
	}
}

#[cfg(test)]
mod tests;
