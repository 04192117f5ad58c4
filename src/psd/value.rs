use crate::psd::OsType;

/// One decoded descriptor value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// `obj ` reference chain.
	Reference(Reference),
	/// `Objc` nested descriptor.
	Descriptor(Descriptor),
	/// `VlLs` list; element kinds may differ.
	List(Vec<Value>),
	/// `doub`.
	Double(f64),
	/// `UntF`.
	UnitFloat(UnitFloat),
	/// `TEXT`.
	Text(String),
	/// `enum`.
	Enum(EnumValue),
	/// `long`.
	Integer(i32),
	/// `bool`.
	Boolean(bool),
	/// Tag known to the format whose payload is left unread.
	Unsupported(OsType),
}

impl Value {
	/// Type tag this value was decoded from.
	pub fn tag(&self) -> OsType {
		match self {
			Value::Reference(_) => OsType::REFERENCE,
			Value::Descriptor(_) => OsType::DESCRIPTOR,
			Value::List(_) => OsType::LIST,
			Value::Double(_) => OsType::DOUBLE,
			Value::UnitFloat(_) => OsType::UNIT_FLOAT,
			Value::Text(_) => OsType::TEXT,
			Value::Enum(_) => OsType::ENUM,
			Value::Integer(_) => OsType::INTEGER,
			Value::Boolean(_) => OsType::BOOLEAN,
			Value::Unsupported(tag) => *tag,
		}
	}

	/// Short lowercase kind name.
	pub fn kind_name(&self) -> &'static str {
		match self {
			Value::Reference(_) => "reference",
			Value::Descriptor(_) => "descriptor",
			Value::List(_) => "list",
			Value::Double(_) => "double",
			Value::UnitFloat(_) => "unit_float",
			Value::Text(_) => "text",
			Value::Enum(_) => "enum",
			Value::Integer(_) => "integer",
			Value::Boolean(_) => "boolean",
			Value::Unsupported(_) => "unsupported",
		}
	}

	/// Borrow as nested descriptor.
	pub fn as_descriptor(&self) -> Option<&Descriptor> {
		match self {
			Value::Descriptor(item) => Some(item),
			_ => None,
		}
	}

	/// Borrow as list elements.
	pub fn as_list(&self) -> Option<&[Value]> {
		match self {
			Value::List(items) => Some(items),
			_ => None,
		}
	}

	/// Integer payload.
	pub fn as_i32(&self) -> Option<i32> {
		match self {
			Value::Integer(v) => Some(*v),
			_ => None,
		}
	}

	/// Float payload of `doub` or `UntF`.
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Value::Double(v) => Some(*v),
			Value::UnitFloat(v) => Some(v.value),
			_ => None,
		}
	}

	/// Text payload.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Value::Text(v) => Some(v),
			_ => None,
		}
	}

	/// Boolean payload.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Value::Boolean(v) => Some(*v),
			_ => None,
		}
	}
}

/// Recursive key/value record.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Descriptor {
	/// Human-readable name.
	pub display_name: String,
	/// Class identifier.
	pub class_id: String,
	/// Item count as declared on disk; equals `items.len()` after decoding.
	pub item_count: u32,
	/// Items in stream order. Duplicate keys are kept.
	pub items: Vec<DescriptorItem>,
}

impl Descriptor {
	/// First value stored under `key`.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.items.iter().find(|item| item.key == key).map(|item| &item.value)
	}

	/// Every value stored under `key`, in stream order.
	pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a Value> + 'a {
		self.items.iter().filter(move |item| item.key == key).map(|item| &item.value)
	}

	/// Number of decoded items.
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Whether the descriptor has no items.
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}
}

/// One `(key, value)` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptorItem {
	/// Item key.
	pub key: String,
	/// Decoded value.
	pub value: Value,
}

/// Float tagged with a unit code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitFloat {
	/// Unit code such as `#Pxl`.
	pub unit: OsType,
	/// Raw value.
	pub value: f64,
}

impl UnitFloat {
	/// Human name for the well-known unit codes.
	pub fn unit_name(&self) -> Option<&'static str> {
		match &self.unit.0 {
			b"#Ang" => Some("angle"),
			b"#Rsl" => Some("density"),
			b"#Rlt" => Some("distance"),
			b"#Nne" => Some("none"),
			b"#Prc" => Some("percent"),
			b"#Pxl" => Some("pixels"),
			_ => None,
		}
	}
}

/// Enumerated value: type id plus selected value id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
	/// Enumeration type identifier.
	pub type_id: String,
	/// Selected value identifier.
	pub value: String,
}

/// Decoded `obj ` reference.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Reference {
	/// Reference items in stream order.
	pub items: Vec<ReferenceItem>,
}

/// Class name and identifier pair used by reference items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassRef {
	/// Unicode class name.
	pub name: String,
	/// Class identifier.
	pub class_id: String,
}

/// One form inside a reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceItem {
	/// `prop`.
	Property {
		/// Owning class.
		class: ClassRef,
		/// Property key identifier.
		key_id: String,
	},
	/// `Clss`.
	Class(ClassRef),
	/// `Enmr`.
	EnumeratedReference {
		/// Owning class.
		class: ClassRef,
		/// Enumeration type identifier.
		type_id: String,
		/// Enumeration value identifier.
		value: String,
	},
	/// `rele`.
	Offset {
		/// Owning class.
		class: ClassRef,
		/// Offset value.
		value: u32,
	},
	/// `Idnt`.
	Identifier(u32),
	/// `indx`.
	Index(u32),
	/// `name`.
	Name {
		/// Owning class.
		class: ClassRef,
		/// Referenced name.
		value: String,
	},
}

impl ReferenceItem {
	/// Form tag of this item.
	pub fn form(&self) -> OsType {
		OsType(match self {
			ReferenceItem::Property { .. } => *b"prop",
			ReferenceItem::Class(_) => *b"Clss",
			ReferenceItem::EnumeratedReference { .. } => *b"Enmr",
			ReferenceItem::Offset { .. } => *b"rele",
			ReferenceItem::Identifier(_) => *b"Idnt",
			ReferenceItem::Index(_) => *b"indx",
			ReferenceItem::Name { .. } => *b"name",
		})
	}
}
