use psdesc::psd::{Descriptor, PsdError, ReferenceItem, Result, Value};

/// Emit a serializable payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) {
	match serde_json::to_string_pretty(payload) {
		Ok(text) => println!("{text}"),
		Err(err) => eprintln!("error: json encode failed: {err}"),
	}
}

/// Parse decimal or `0x`-prefixed hex byte offset.
pub(crate) fn parse_offset(value: &str) -> Result<usize> {
	let parsed = if let Some(stripped) = value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
		usize::from_str_radix(stripped, 16)
	} else {
		value.parse::<usize>()
	};

	parsed.map_err(|_| PsdError::InvalidOffset { value: value.to_owned() })
}

/// Render a decoded descriptor as a JSON tree.
pub(crate) fn descriptor_to_json(descriptor: &Descriptor) -> serde_json::Value {
	use serde_json::Value as JsonValue;

	let items: Vec<JsonValue> = descriptor
		.items
		.iter()
		.map(|item| {
			serde_json::json!({
				"key": item.key,
				"tag": item.value.tag().label(),
				"kind": item.value.kind_name(),
				"value": value_to_json(&item.value),
			})
		})
		.collect();

	serde_json::json!({
		"name": descriptor.display_name,
		"class": descriptor.class_id,
		"item_count": descriptor.item_count,
		"items": items,
	})
}

fn value_to_json(value: &Value) -> serde_json::Value {
	use serde_json::Value as JsonValue;

	match value {
		Value::Reference(reference) => {
			let items: Vec<JsonValue> = reference.items.iter().map(reference_item_to_json).collect();
			JsonValue::Array(items)
		}
		Value::Descriptor(item) => descriptor_to_json(item),
		Value::List(items) => JsonValue::Array(items.iter().map(value_to_json).collect()),
		Value::Double(v) => serde_json::json!(v),
		Value::UnitFloat(v) => serde_json::json!({ "unit": v.unit.label(), "value": v.value }),
		Value::Text(v) => serde_json::json!(v),
		Value::Enum(v) => serde_json::json!({ "type": v.type_id, "value": v.value }),
		Value::Integer(v) => serde_json::json!(v),
		Value::Boolean(v) => serde_json::json!(v),
		Value::Unsupported(tag) => serde_json::json!({ "unsupported": tag.label() }),
	}
}

fn reference_item_to_json(item: &ReferenceItem) -> serde_json::Value {
	let form = item.form().label();
	match item {
		ReferenceItem::Property { class, key_id } => {
			serde_json::json!({ "form": form, "class": class.class_id, "name": class.name, "key": key_id })
		}
		ReferenceItem::Class(class) => serde_json::json!({ "form": form, "class": class.class_id, "name": class.name }),
		ReferenceItem::EnumeratedReference { class, type_id, value } => {
			serde_json::json!({ "form": form, "class": class.class_id, "name": class.name, "type": type_id, "value": value })
		}
		ReferenceItem::Offset { class, value } => serde_json::json!({ "form": form, "class": class.class_id, "name": class.name, "value": value }),
		ReferenceItem::Identifier(value) | ReferenceItem::Index(value) => serde_json::json!({ "form": form, "value": value }),
		ReferenceItem::Name { class, value } => serde_json::json!({ "form": form, "class": class.class_id, "name": class.name, "value": value }),
	}
}
