use thiserror::Error;

use crate::psd::OsType;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, PsdError>;

/// Errors produced while reading PSD framing and decoding descriptors.
#[derive(Debug, Error)]
pub enum PsdError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Not enough bytes remained for a requested read.
	#[error("truncated stream at offset {at}, need {need} bytes, remaining {rem}")]
	TruncatedStream {
		/// Absolute byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Type tag is not part of the descriptor dispatch table.
	#[error("unknown type tag '{tag}' at offset {at}")]
	UnknownTypeTag {
		/// Offending tag.
		tag: OsType,
		/// Absolute byte offset of the tag.
		at: usize,
	},
	/// Acknowledged tag rejected by the strict tag policy.
	#[error("unsupported type tag '{tag}' at offset {at}")]
	UnsupportedTypeTag {
		/// Offending tag.
		tag: OsType,
		/// Absolute byte offset of the tag.
		at: usize,
	},
	/// Malformed string data or an unusable length value.
	#[error("invalid encoding at offset {at}: {reason}")]
	InvalidEncoding {
		/// Absolute byte offset of the malformed field.
		at: usize,
		/// Short description of the problem.
		reason: &'static str,
	},
	/// Descriptor/list nesting exceeded the configured limit.
	#[error("decode depth exceeded (max={max_depth})")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Declared item count exceeded the configured limit.
	#[error("item count {count} at offset {at} exceeds limit {max}")]
	ItemCountTooLarge {
		/// Declared count.
		count: u32,
		/// Configured maximum.
		max: u32,
		/// Absolute byte offset of the count field.
		at: usize,
	},
	/// Decode aborted through a cancel token.
	#[error("decode cancelled")]
	Cancelled,
	/// Decode ran past its deadline.
	#[error("decode deadline exceeded")]
	DeadlineExceeded,
	/// File does not start with the `8BPS` signature.
	#[error("not a PSD file (magic={magic:?})")]
	NotPsd {
		/// First up-to-4 bytes of the file.
		magic: [u8; 4],
	},
	/// Unsupported PSD/PSB version field.
	#[error("unsupported file version {version} (expected 1 or 2)")]
	UnsupportedVersion {
		/// Parsed version.
		version: u16,
	},
	/// Resource block signature is not `8BIM`.
	#[error("bad resource signature '{signature}' at offset {at}")]
	BadResourceSignature {
		/// Signature tag found.
		signature: OsType,
		/// Absolute byte offset of the block.
		at: usize,
	},
	/// Descriptor resource carried an unexpected version prefix.
	#[error("unsupported descriptor version {version} at offset {at} (expected 16)")]
	UnsupportedDescriptorVersion {
		/// Parsed version.
		version: u32,
		/// Absolute byte offset of the version field.
		at: usize,
	},
	/// Requested resource id was not present.
	#[error("resource not found: {id}")]
	ResourceNotFound {
		/// Requested resource id.
		id: u16,
	},
	/// CLI offset argument was invalid.
	#[error("invalid offset: {value}")]
	InvalidOffset {
		/// User-provided offset string.
		value: String,
	},
	/// Failure inside a descriptor, annotated with the item path.
	#[error("at {path}{}: {source}", tag_suffix(.tag))]
	Located {
		/// Key/index path from the root descriptor, e.g. `$.Lyr .bounds[2]`.
		path: String,
		/// Type tag being decoded when the failure happened.
		tag: Option<OsType>,
		/// Underlying failure.
		source: Box<PsdError>,
	},
}

impl PsdError {
	/// Strip any path annotation and return the underlying failure.
	pub fn root_cause(&self) -> &PsdError {
		let mut err = self;
		while let PsdError::Located { source, .. } = err {
			err = source;
		}
		err
	}
}

fn tag_suffix(tag: &Option<OsType>) -> String {
	match tag {
		Some(tag) => format!(" in '{tag}'"),
		None => String::new(),
	}
}
