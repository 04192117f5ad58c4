use std::fmt;

/// Four-byte type or unit code as stored on disk.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OsType(pub [u8; 4]);

impl OsType {
	/// `obj ` reference value.
	pub const REFERENCE: Self = Self(*b"obj ");
	/// `Objc` nested descriptor.
	pub const DESCRIPTOR: Self = Self(*b"Objc");
	/// `VlLs` value list.
	pub const LIST: Self = Self(*b"VlLs");
	/// `doub` double-precision float.
	pub const DOUBLE: Self = Self(*b"doub");
	/// `UntF` float with a unit code.
	pub const UNIT_FLOAT: Self = Self(*b"UntF");
	/// `TEXT` Unicode string.
	pub const TEXT: Self = Self(*b"TEXT");
	/// `enum` enumerated value.
	pub const ENUM: Self = Self(*b"enum");
	/// `long` 32-bit integer.
	pub const INTEGER: Self = Self(*b"long");
	/// `comp` large integer.
	pub const LARGE_INTEGER: Self = Self(*b"comp");
	/// `bool` boolean.
	pub const BOOLEAN: Self = Self(*b"bool");
	/// `GlbO` global object.
	pub const GLOBAL_OBJECT: Self = Self(*b"GlbO");
	/// `type` class.
	pub const CLASS: Self = Self(*b"type");
	/// `GlbC` global class.
	pub const GLOBAL_CLASS: Self = Self(*b"GlbC");
	/// `alis` alias.
	pub const ALIAS: Self = Self(*b"alis");
	/// `tdta` raw data.
	pub const RAW_DATA: Self = Self(*b"tdta");

	/// Tags the decoder recognizes but does not consume payload for.
	pub const ACKNOWLEDGED: [Self; 6] = [
		Self::LARGE_INTEGER,
		Self::GLOBAL_OBJECT,
		Self::CLASS,
		Self::GLOBAL_CLASS,
		Self::ALIAS,
		Self::RAW_DATA,
	];

	/// Printable label; non-printable bytes render as `.`.
	pub fn label(&self) -> String {
		self.0
			.iter()
			.map(|byte| if byte.is_ascii_graphic() || *byte == b' ' { char::from(*byte) } else { '.' })
			.collect()
	}
}

impl From<[u8; 4]> for OsType {
	fn from(value: [u8; 4]) -> Self {
		Self(value)
	}
}

impl fmt::Display for OsType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.label())
	}
}

impl fmt::Debug for OsType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "OsType({:?})", self.label())
	}
}
