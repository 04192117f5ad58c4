//! Recursive descriptor, list, and type-tag dispatch decoding.

use std::fmt::Write as _;

use tracing::{debug, trace, warn};

use crate::psd::bytes::Cursor;
use crate::psd::leaf;
use crate::psd::value::{Descriptor, DescriptorItem, Value};
use crate::psd::{DecodeOptions, OsType, PsdError, Result, UnsupportedTagPolicy};

/// Image-resource id of the descriptor resource block.
pub const DESCRIPTOR_RESOURCE_ID: u16 = 1088;

// Smallest on-disk item: zero key length + 4-byte key + tag.
const MIN_DESCRIPTOR_ITEM_LEN: usize = 12;
// Smallest on-disk list element: a tag with no payload.
const MIN_LIST_ITEM_LEN: usize = 4;

/// Decode one descriptor with default options.
pub fn decode_descriptor(cursor: &mut Cursor<'_>) -> Result<Descriptor> {
	decode_descriptor_with(cursor, &DecodeOptions::default())
}

/// Decode one descriptor starting at the cursor's current position.
///
/// On success the cursor sits just past the descriptor. On failure nothing is
/// returned; the cursor position is unspecified.
pub fn decode_descriptor_with(cursor: &mut Cursor<'_>, opt: &DecodeOptions) -> Result<Descriptor> {
	opt.check_live()?;
	let mut ctx = DecodeCtx { opt, path: Vec::new() };
	ctx.descriptor(cursor, 0)
}

enum PathStep {
	Key(String),
	Index(usize),
}

struct DecodeCtx<'o> {
	opt: &'o DecodeOptions,
	path: Vec<PathStep>,
}

impl DecodeCtx<'_> {
	fn descriptor(&mut self, cursor: &mut Cursor<'_>, depth: u32) -> Result<Descriptor> {
		self.descriptor_body(cursor, depth).map_err(|err| self.locate(err, None))
	}

	fn descriptor_body(&mut self, cursor: &mut Cursor<'_>, depth: u32) -> Result<Descriptor> {
		self.enter(depth)?;

		let start = cursor.offset();
		let display_name = cursor.read_unicode_string()?;
		let class_id = cursor.read_id_string()?;
		let item_count = self.opt.read_count(cursor)?;
		debug!(offset = start, class_id = %class_id, item_count, depth, "descriptor");

		let mut items = Vec::with_capacity(capacity_hint(item_count, cursor, MIN_DESCRIPTOR_ITEM_LEN));
		for _ in 0..item_count {
			self.opt.check_live()?;
			let key = cursor.read_id_string()?;
			let tag = OsType(cursor.read_code4()?);

			self.path.push(PathStep::Key(key.clone()));
			let value = self.value(cursor, tag, depth);
			self.path.pop();

			items.push(DescriptorItem { key, value: value? });
		}

		Ok(Descriptor {
			display_name,
			class_id,
			item_count,
			items,
		})
	}

	fn list(&mut self, cursor: &mut Cursor<'_>, depth: u32) -> Result<Vec<Value>> {
		self.list_body(cursor, depth).map_err(|err| self.locate(err, None))
	}

	fn list_body(&mut self, cursor: &mut Cursor<'_>, depth: u32) -> Result<Vec<Value>> {
		self.enter(depth)?;

		let count = self.opt.read_count(cursor)?;
		let mut values = Vec::with_capacity(capacity_hint(count, cursor, MIN_LIST_ITEM_LEN));
		for index in 0..count as usize {
			self.opt.check_live()?;
			let tag = OsType(cursor.read_code4()?);

			self.path.push(PathStep::Index(index));
			let value = self.value(cursor, tag, depth);
			self.path.pop();

			values.push(value?);
		}
		Ok(values)
	}

	/// Decode the payload for `tag`; the cursor sits just past the tag.
	fn value(&mut self, cursor: &mut Cursor<'_>, tag: OsType, depth: u32) -> Result<Value> {
		self.dispatch(cursor, tag, depth).map_err(|err| self.locate(err, Some(tag)))
	}

	fn dispatch(&mut self, cursor: &mut Cursor<'_>, tag: OsType, depth: u32) -> Result<Value> {
		let tag_at = cursor.offset().saturating_sub(4);
		trace!(offset = tag_at, tag = %tag, path = %self.render_path(), "item");

		let value = match tag {
			OsType::REFERENCE => Value::Reference(leaf::read_reference(cursor, self.opt)?),
			OsType::DESCRIPTOR => Value::Descriptor(self.descriptor(cursor, depth + 1)?),
			OsType::LIST => Value::List(self.list(cursor, depth + 1)?),
			OsType::DOUBLE => Value::Double(leaf::read_double(cursor)?),
			OsType::UNIT_FLOAT => Value::UnitFloat(leaf::read_unit_float(cursor)?),
			OsType::TEXT => Value::Text(leaf::read_text(cursor)?),
			OsType::ENUM => Value::Enum(leaf::read_enum(cursor)?),
			OsType::INTEGER => Value::Integer(leaf::read_integer(cursor)?),
			OsType::BOOLEAN => Value::Boolean(leaf::read_boolean(cursor)?),
			OsType::LARGE_INTEGER
			| OsType::GLOBAL_OBJECT
			| OsType::CLASS
			| OsType::GLOBAL_CLASS
			| OsType::ALIAS
			| OsType::RAW_DATA => match self.opt.unsupported_tags {
				UnsupportedTagPolicy::Acknowledge => {
					warn!(offset = tag_at, tag = %tag, path = %self.render_path(), "payload left unread; following items may be misaligned");
					Value::Unsupported(tag)
				}
				UnsupportedTagPolicy::Reject => return Err(PsdError::UnsupportedTypeTag { tag, at: tag_at }),
			},
			_ => return Err(PsdError::UnknownTypeTag { tag, at: tag_at }),
		};
		Ok(value)
	}

	fn enter(&self, depth: u32) -> Result<()> {
		if depth >= self.opt.max_depth {
			return Err(PsdError::DepthExceeded { max_depth: self.opt.max_depth });
		}
		Ok(())
	}

	/// Attach the current path unless an inner frame already did.
	fn locate(&self, err: PsdError, tag: Option<OsType>) -> PsdError {
		match err {
			PsdError::Located { .. } => err,
			err => PsdError::Located {
				path: self.render_path(),
				tag,
				source: Box::new(err),
			},
		}
	}

	fn render_path(&self) -> String {
		let mut out = String::from("$");
		for step in &self.path {
			let _ = match step {
				PathStep::Key(key) => write!(out, ".{key}"),
				PathStep::Index(index) => write!(out, "[{index}]"),
			};
		}
		out
	}
}

fn capacity_hint(count: u32, cursor: &Cursor<'_>, min_item_len: usize) -> usize {
	(count as usize).min(cursor.remaining() / min_item_len)
}
