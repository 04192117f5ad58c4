use crate::psd::bytes::Cursor;
use crate::psd::{PsdError, Result};

/// Parsed PSD/PSB file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PsdHeader {
	/// 1 for PSD, 2 for PSB.
	pub version: u16,
	/// Channel count including alpha.
	pub channels: u16,
	/// Image height in pixels.
	pub height: u32,
	/// Image width in pixels.
	pub width: u32,
	/// Bits per channel.
	pub depth: u16,
	/// Color mode code (3 = RGB, 4 = CMYK, ...).
	pub color_mode: u16,
}

impl PsdHeader {
	/// Encoded header size in bytes.
	pub const SIZE: usize = 26;

	/// Parse a header from the beginning of `bytes`.
	pub fn parse(bytes: &[u8]) -> Result<Self> {
		let mut cursor = Cursor::new(bytes);
		if bytes.len() < 4 {
			let mut magic = [0_u8; 4];
			magic[..bytes.len()].copy_from_slice(bytes);
			return Err(PsdError::NotPsd { magic });
		}

		let magic = cursor.read_code4()?;
		if &magic != b"8BPS" {
			return Err(PsdError::NotPsd { magic });
		}

		let version = cursor.read_u16()?;
		if !matches!(version, 1 | 2) {
			return Err(PsdError::UnsupportedVersion { version });
		}

		cursor.skip(6)?;
		let channels = cursor.read_u16()?;
		let height = cursor.read_u32()?;
		let width = cursor.read_u32()?;
		let depth = cursor.read_u16()?;
		let color_mode = cursor.read_u16()?;

		Ok(Self {
			version,
			channels,
			height,
			width,
			depth,
			color_mode,
		})
	}

	/// Whether this is a large-document (PSB) file.
	pub fn is_psb(&self) -> bool {
		self.version == 2
	}

	/// Display label for the color mode.
	pub fn color_mode_label(&self) -> &'static str {
		match self.color_mode {
			0 => "bitmap",
			1 => "grayscale",
			2 => "indexed",
			3 => "rgb",
			4 => "cmyk",
			7 => "multichannel",
			8 => "duotone",
			9 => "lab",
			_ => "unknown",
		}
	}
}
