//! Shared test helpers: big-endian builders for synthetic PSD data.

use std::fs;
use std::path::{Path, PathBuf};

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve the workspace target directory.
pub fn target_dir() -> PathBuf {
	std::env::var_os("CARGO_TARGET_DIR")
		.map(PathBuf::from)
		.unwrap_or_else(|| workspace_root().join("target"))
}

/// Write generated bytes under `<target>/psdesc-fixtures/<name>` and return the path.
pub fn write_fixture(name: &str, bytes: &[u8]) -> PathBuf {
	let dir = target_dir().join("psdesc-fixtures");
	fs::create_dir_all(&dir).expect("fixture dir is creatable");
	let path = dir.join(name);
	fs::write(&path, bytes).expect("fixture is writable");
	path
}

/// Append-only big-endian byte builder.
#[derive(Debug, Default, Clone)]
pub struct PsdBytes {
	buf: Vec<u8>,
}

impl PsdBytes {
	/// Empty builder.
	pub fn new() -> Self {
		Self::default()
	}

	/// Append one byte.
	pub fn u8(mut self, value: u8) -> Self {
		self.buf.push(value);
		self
	}

	/// Append a big-endian `u16`.
	pub fn u16(mut self, value: u16) -> Self {
		self.buf.extend_from_slice(&value.to_be_bytes());
		self
	}

	/// Append a big-endian `u32`.
	pub fn u32(mut self, value: u32) -> Self {
		self.buf.extend_from_slice(&value.to_be_bytes());
		self
	}

	/// Append a big-endian `i32`.
	pub fn i32(mut self, value: i32) -> Self {
		self.buf.extend_from_slice(&value.to_be_bytes());
		self
	}

	/// Append a big-endian `f64`.
	pub fn f64(mut self, value: f64) -> Self {
		self.buf.extend_from_slice(&value.to_be_bytes());
		self
	}

	/// Append raw bytes.
	pub fn raw(mut self, bytes: &[u8]) -> Self {
		self.buf.extend_from_slice(bytes);
		self
	}

	/// Append a four-byte tag.
	pub fn tag(self, tag: &[u8; 4]) -> Self {
		self.raw(tag)
	}

	/// Append an identifier with the zero-length, four-byte encoding.
	pub fn id4(self, id: &[u8; 4]) -> Self {
		self.u32(0).raw(id)
	}

	/// Append an identifier with an explicit length prefix.
	pub fn id(self, id: &str) -> Self {
		self.u32(id.len() as u32).raw(id.as_bytes())
	}

	/// Append a UTF-16BE string with its code-unit count.
	pub fn unicode(self, text: &str) -> Self {
		let units: Vec<u16> = text.encode_utf16().collect();
		let mut out = self.u32(units.len() as u32);
		for unit in units {
			out = out.u16(unit);
		}
		out
	}

	/// Append a Pascal string padded to an even total length.
	pub fn pascal(self, text: &str) -> Self {
		let out = self.u8(text.len() as u8).raw(text.as_bytes());
		if (text.len() + 1) % 2 != 0 { out.u8(0) } else { out }
	}

	/// Append a descriptor header: display name, class id, item count.
	pub fn descriptor_header(self, name: &str, class_id: &[u8; 4], item_count: u32) -> Self {
		self.unicode(name).id4(class_id).u32(item_count)
	}

	/// Append an item key plus type tag.
	pub fn item(self, key: &str, tag: &[u8; 4]) -> Self {
		let out = if key.len() == 4 { self.u32(0).raw(key.as_bytes()) } else { self.id(key) };
		out.tag(tag)
	}

	/// Finish and return the bytes.
	pub fn build(self) -> Vec<u8> {
		self.buf
	}
}

/// Encode one `8BIM` resource block, including the odd-size pad byte.
pub fn resource_block(id: u16, name: &str, data: &[u8]) -> Vec<u8> {
	let out = PsdBytes::new().tag(b"8BIM").u16(id).pascal(name).u32(data.len() as u32).raw(data);
	let out = if data.len() % 2 != 0 { out.u8(0) } else { out };
	out.build()
}

/// Encode a minimal RGB PSD whose image-resource section holds `blocks`.
pub fn psd_file(blocks: &[Vec<u8>]) -> Vec<u8> {
	let section: Vec<u8> = blocks.concat();
	PsdBytes::new()
		.tag(b"8BPS")
		.u16(1)
		.raw(&[0; 6])
		.u16(3)
		.u32(64)
		.u32(32)
		.u16(8)
		.u16(3)
		.u32(0)
		.u32(section.len() as u32)
		.raw(&section)
		.build()
}

/// Scenario descriptor: class `tst `, one `long` item `nm  ` holding 42.
pub fn scenario_descriptor() -> Vec<u8> {
	PsdBytes::new().descriptor_header("", b"tst ", 1).item("nm  ", b"long").i32(42).build()
}
