use psdesc::psd::{Descriptor, ReferenceItem, Value};

/// Output truncation limits for decoded descriptors.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of items printed for a single descriptor.
	pub max_items_per_descriptor: usize,
	/// Maximum number of Unicode scalar values printed for strings.
	pub max_string_len: usize,
	/// Maximum number of elements printed for lists.
	pub max_list_items: usize,
	/// Maximum recursive print depth for nested descriptors/lists.
	pub max_print_depth: u32,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_items_per_descriptor: 200,
			max_string_len: 200,
			max_list_items: 32,
			max_print_depth: 16,
		}
	}
}

/// Print one descriptor tree.
pub fn print_descriptor(descriptor: &Descriptor, indent: usize, depth: u32, options: PrintOptions) {
	let pad = " ".repeat(indent);
	let name = if descriptor.display_name.is_empty() {
		String::new()
	} else {
		format!(" \"{}\"", truncate(&descriptor.display_name, options.max_string_len))
	};

	if depth >= options.max_print_depth {
		println!("{pad}'{}'{name} {{ ... {} items }}", descriptor.class_id, descriptor.items.len());
		return;
	}

	println!("{pad}'{}'{name} {{", descriptor.class_id);
	for item in descriptor.items.iter().take(options.max_items_per_descriptor) {
		print!("{pad}  '{}' <{}> = ", item.key, item.value.tag());
		if matches!(item.value, Value::Descriptor(_) | Value::List(_)) {
			println!();
			print_value(&item.value, indent + 4, depth + 1, options);
		} else {
			print_value(&item.value, 0, depth + 1, options);
		}
	}
	if descriptor.items.len() > options.max_items_per_descriptor {
		println!("{pad}  ... {} more items", descriptor.items.len() - options.max_items_per_descriptor);
	}
	println!("{pad}}}");
}

fn print_value(value: &Value, indent: usize, depth: u32, options: PrintOptions) {
	let pad = " ".repeat(indent);
	match value {
		Value::Descriptor(item) => print_descriptor(item, indent, depth, options),
		Value::List(items) => {
			if depth >= options.max_print_depth {
				println!("{pad}[... {} items]", items.len());
				return;
			}
			println!("{pad}[");
			for item in items.iter().take(options.max_list_items) {
				print_value(item, indent + 2, depth + 1, options);
			}
			if items.len() > options.max_list_items {
				println!("{pad}  ... {} more", items.len() - options.max_list_items);
			}
			println!("{pad}]");
		}
		Value::Reference(reference) => {
			let forms: Vec<String> = reference.items.iter().map(render_reference_item).collect();
			println!("{pad}ref[{}]", forms.join(" > "));
		}
		Value::Double(v) => println!("{pad}{v}"),
		Value::UnitFloat(v) => match v.unit_name() {
			Some(unit) => println!("{pad}{} {unit}", v.value),
			None => println!("{pad}{} '{}'", v.value, v.unit),
		},
		Value::Text(v) => println!("{pad}\"{}\"", truncate(v, options.max_string_len)),
		Value::Enum(v) => println!("{pad}{}::{}", v.type_id, v.value),
		Value::Integer(v) => println!("{pad}{v}"),
		Value::Boolean(v) => println!("{pad}{v}"),
		Value::Unsupported(tag) => println!("{pad}<unsupported '{tag}'>"),
	}
}

fn render_reference_item(item: &ReferenceItem) -> String {
	match item {
		ReferenceItem::Property { class, key_id } => format!("{}.{key_id}", class.class_id),
		ReferenceItem::Class(class) => class.class_id.clone(),
		ReferenceItem::EnumeratedReference { class, value, .. } => format!("{}={value}", class.class_id),
		ReferenceItem::Offset { class, value } => format!("{}+{value}", class.class_id),
		ReferenceItem::Identifier(value) => format!("#{value}"),
		ReferenceItem::Index(value) => format!("[{value}]"),
		ReferenceItem::Name { class, value } => format!("{}:\"{value}\"", class.class_id),
	}
}

fn truncate(input: &str, max_len: usize) -> String {
	if input.chars().count() <= max_len {
		return input.to_owned();
	}
	let out: String = input.chars().take(max_len).collect();
	format!("{out}...")
}
