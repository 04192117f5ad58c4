use psdesc_testkit::PsdBytes;

use crate::psd::{CancelToken, ClassRef, Cursor, DecodeOptions, OsType, PsdError, ReferenceItem, read_boolean, read_enum, read_reference, read_unit_float};

#[test]
fn unit_float_reads_unit_and_value() {
	let bytes = PsdBytes::new().tag(b"#Pxl").f64(12.5).build();
	let value = read_unit_float(&mut Cursor::new(&bytes)).expect("unit float reads");
	assert_eq!(value.unit, OsType(*b"#Pxl"));
	assert_eq!(value.unit_name(), Some("pixels"));
	assert_eq!(value.value, 12.5);
}

#[test]
fn unit_float_truncated_is_error_not_panic() {
	let bytes = PsdBytes::new().tag(b"#Ang").u32(0).build();
	let err = read_unit_float(&mut Cursor::new(&bytes)).expect_err("short float fails");
	assert!(matches!(err, PsdError::TruncatedStream { at: 4, need: 8, rem: 4 }));
}

#[test]
fn enum_reads_two_identifiers() {
	let bytes = PsdBytes::new().id4(b"Ornt").id("Hrzn").build();
	let value = read_enum(&mut Cursor::new(&bytes)).expect("enum reads");
	assert_eq!(value.type_id, "Ornt");
	assert_eq!(value.value, "Hrzn");
}

#[test]
fn boolean_is_nonzero_byte() {
	assert!(read_boolean(&mut Cursor::new(&[2])).expect("bool reads"));
	assert!(!read_boolean(&mut Cursor::new(&[0])).expect("bool reads"));
}

#[test]
fn reference_reads_every_form() {
	let bytes = PsdBytes::new()
		.u32(4)
		.tag(b"prop")
		.unicode("Layer")
		.id4(b"Lyr ")
		.id4(b"Nm  ")
		.tag(b"Enmr")
		.unicode("")
		.id4(b"Lyr ")
		.id4(b"Ordn")
		.id4(b"Trgt")
		.tag(b"Idnt")
		.u32(7)
		.tag(b"name")
		.unicode("Doc")
		.id4(b"Dcmn")
		.unicode("Untitled-1")
		.build();

	let mut cursor = Cursor::new(&bytes);
	let reference = read_reference(&mut cursor, &DecodeOptions::default()).expect("reference reads");
	assert_eq!(cursor.remaining(), 0);
	assert_eq!(reference.items.len(), 4);
	assert_eq!(
		reference.items[0],
		ReferenceItem::Property {
			class: ClassRef {
				name: "Layer".to_owned(),
				class_id: "Lyr ".to_owned(),
			},
			key_id: "Nm  ".to_owned(),
		}
	);
	assert_eq!(reference.items[1].form(), OsType(*b"Enmr"));
	assert_eq!(reference.items[2], ReferenceItem::Identifier(7));
	let ReferenceItem::Name { value, .. } = &reference.items[3] else {
		panic!("expected name form");
	};
	assert_eq!(value, "Untitled-1");
}

#[test]
fn reference_rejects_unknown_form() {
	let bytes = PsdBytes::new().u32(1).tag(b"zzzz").build();
	let err = read_reference(&mut Cursor::new(&bytes), &DecodeOptions::default()).expect_err("unknown form fails");
	assert!(matches!(err, PsdError::UnknownTypeTag { tag, at: 4 } if tag == OsType(*b"zzzz")));
}

#[test]
fn reference_count_obeys_item_limit() {
	let bytes = PsdBytes::new().u32(5).build();
	let opt = DecodeOptions {
		max_items: 4,
		..DecodeOptions::default()
	};
	let err = read_reference(&mut Cursor::new(&bytes), &opt).expect_err("count above limit fails");
	assert!(matches!(err, PsdError::ItemCountTooLarge { count: 5, max: 4, at: 0 }));
}

#[test]
fn reference_polls_cancellation() {
	let bytes = PsdBytes::new().u32(1).tag(b"Idnt").u32(7).build();
	let token = CancelToken::new();
	token.cancel();
	let opt = DecodeOptions::default().with_cancel(token);
	let err = read_reference(&mut Cursor::new(&bytes), &opt).expect_err("cancelled");
	assert!(matches!(err, PsdError::Cancelled));
}
