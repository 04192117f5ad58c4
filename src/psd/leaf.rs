//! Fixed-layout and length-prefixed value readers used by the dispatcher.

use crate::psd::bytes::Cursor;
use crate::psd::value::{ClassRef, EnumValue, Reference, ReferenceItem, UnitFloat};
use crate::psd::{DecodeOptions, OsType, PsdError, Result};

/// `doub`: big-endian f64.
pub fn read_double(cursor: &mut Cursor<'_>) -> Result<f64> {
	cursor.read_f64()
}

/// `UntF`: unit code followed by f64.
pub fn read_unit_float(cursor: &mut Cursor<'_>) -> Result<UnitFloat> {
	let unit = OsType(cursor.read_code4()?);
	let value = cursor.read_f64()?;
	Ok(UnitFloat { unit, value })
}

/// `TEXT`: UTF-16 string.
pub fn read_text(cursor: &mut Cursor<'_>) -> Result<String> {
	cursor.read_unicode_string()
}

/// `enum`: type id then value id.
pub fn read_enum(cursor: &mut Cursor<'_>) -> Result<EnumValue> {
	let type_id = cursor.read_id_string()?;
	let value = cursor.read_id_string()?;
	Ok(EnumValue { type_id, value })
}

/// `long`: big-endian i32.
pub fn read_integer(cursor: &mut Cursor<'_>) -> Result<i32> {
	cursor.read_i32()
}

/// `bool`: one byte, nonzero is true.
pub fn read_boolean(cursor: &mut Cursor<'_>) -> Result<bool> {
	Ok(cursor.read_u8()? != 0)
}

/// `obj `: counted list of reference forms.
///
/// The count obeys `opt.max_items`; cancellation is polled before each form.
pub fn read_reference(cursor: &mut Cursor<'_>, opt: &DecodeOptions) -> Result<Reference> {
	let count = opt.read_count(cursor)?;
	let mut items = Vec::with_capacity((count as usize).min(cursor.remaining() / 4));
	for _ in 0..count {
		opt.check_live()?;
		items.push(read_reference_item(cursor)?);
	}
	Ok(Reference { items })
}

fn read_reference_item(cursor: &mut Cursor<'_>) -> Result<ReferenceItem> {
	let at = cursor.offset();
	let form = cursor.read_code4()?;
	let item = match &form {
		b"prop" => ReferenceItem::Property {
			class: read_class_ref(cursor)?,
			key_id: cursor.read_id_string()?,
		},
		b"Clss" => ReferenceItem::Class(read_class_ref(cursor)?),
		b"Enmr" => ReferenceItem::EnumeratedReference {
			class: read_class_ref(cursor)?,
			type_id: cursor.read_id_string()?,
			value: cursor.read_id_string()?,
		},
		b"rele" => ReferenceItem::Offset {
			class: read_class_ref(cursor)?,
			value: cursor.read_u32()?,
		},
		b"Idnt" => ReferenceItem::Identifier(cursor.read_u32()?),
		b"indx" => ReferenceItem::Index(cursor.read_u32()?),
		b"name" => ReferenceItem::Name {
			class: read_class_ref(cursor)?,
			value: cursor.read_unicode_string()?,
		},
		_ => return Err(PsdError::UnknownTypeTag { tag: OsType(form), at }),
	};
	Ok(item)
}

fn read_class_ref(cursor: &mut Cursor<'_>) -> Result<ClassRef> {
	let name = cursor.read_unicode_string()?;
	let class_id = cursor.read_id_string()?;
	Ok(ClassRef { name, class_id })
}

#[cfg(test)]
mod tests;
