use psdesc_testkit::PsdBytes;

use crate::psd::{Cursor, PsdError};

#[test]
fn reads_big_endian_integers() {
	let bytes = PsdBytes::new().u16(0x0102).u32(0x0304_0506).i32(-2).f64(1.5).build();
	let mut cursor = Cursor::new(&bytes);
	assert_eq!(cursor.read_u16().expect("u16"), 0x0102);
	assert_eq!(cursor.read_u32().expect("u32"), 0x0304_0506);
	assert_eq!(cursor.read_i32().expect("i32"), -2);
	assert_eq!(cursor.read_f64().expect("f64"), 1.5);
	assert_eq!(cursor.remaining(), 0);
}

#[test]
fn zero_length_id_reads_four_raw_bytes() {
	let bytes = PsdBytes::new().u32(0).raw(&[0x01, 0x1f, 0x7f, b' ']).u8(0xAA).build();
	let mut cursor = Cursor::new(&bytes);
	let id = cursor.read_id_string().expect("id reads");
	assert_eq!(id, "\u{1}\u{1f}\u{7f} ");
	assert_eq!(cursor.pos(), 8);
}

#[test]
fn prefixed_id_reads_declared_length() {
	let bytes = PsdBytes::new().id("documentMode").build();
	let mut cursor = Cursor::new(&bytes);
	assert_eq!(cursor.read_id_string().expect("id reads"), "documentMode");
	assert_eq!(cursor.remaining(), 0);
}

#[test]
fn unicode_string_consumes_terminator_and_trims_it() {
	let bytes = PsdBytes::new().unicode("Layer\0").u8(7).build();
	let mut cursor = Cursor::new(&bytes);
	assert_eq!(cursor.read_unicode_string().expect("string reads"), "Layer");
	assert_eq!(cursor.read_u8().expect("next byte"), 7);
}

#[test]
fn unicode_string_keeps_embedded_nul() {
	let bytes = PsdBytes::new().unicode("a\0b").build();
	let mut cursor = Cursor::new(&bytes);
	assert_eq!(cursor.read_unicode_string().expect("string reads"), "a\0b");
}

#[test]
fn unicode_string_trims_only_one_terminator() {
	let bytes = PsdBytes::new().unicode("a\0\0").build();
	let mut cursor = Cursor::new(&bytes);
	assert_eq!(cursor.read_unicode_string().expect("string reads"), "a\0");
	assert_eq!(cursor.remaining(), 0);
}

#[test]
fn unicode_string_rejects_unpaired_surrogate() {
	let bytes = PsdBytes::new().u32(1).u16(0xD800).build();
	let err = Cursor::new(&bytes).read_unicode_string().expect_err("lone surrogate fails");
	assert!(matches!(err, PsdError::InvalidEncoding { at: 0, .. }));
}

#[test]
fn unicode_string_with_huge_count_is_truncation() {
	let bytes = PsdBytes::new().u32(0x4000_0000).u16(0x41).build();
	let err = Cursor::new(&bytes).read_unicode_string().expect_err("oversized count fails");
	assert!(matches!(err, PsdError::TruncatedStream { at: 4, .. }));
}

#[test]
fn pascal_string_skips_pad_byte() {
	let bytes = PsdBytes::new().pascal("ab").u8(9).build();
	let mut cursor = Cursor::new(&bytes);
	assert_eq!(cursor.read_pascal_string().expect("pascal reads"), "ab");
	assert_eq!(cursor.read_u8().expect("next byte"), 9);

	let bytes = PsdBytes::new().pascal("").u8(9).build();
	let mut cursor = Cursor::new(&bytes);
	assert_eq!(cursor.read_pascal_string().expect("empty pascal reads"), "");
	assert_eq!(cursor.read_u8().expect("next byte"), 9);
}

#[test]
fn truncation_reports_absolute_offset() {
	let bytes = [0_u8; 3];
	let mut cursor = Cursor::with_base(&bytes, 100);
	cursor.skip(1).expect("one byte available");
	let err = cursor.read_u32().expect_err("short read fails");
	assert!(matches!(err, PsdError::TruncatedStream { at: 101, need: 4, rem: 2 }));
}
