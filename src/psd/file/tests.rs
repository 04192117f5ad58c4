use psdesc_testkit::{PsdBytes, psd_file, resource_block, scenario_descriptor, write_fixture};

use crate::psd::{PsdError, PsdFile};

#[test]
fn locates_resource_section_after_color_mode_data() {
	let descriptor = PsdBytes::new().u32(16).raw(&scenario_descriptor()).build();
	let bytes = psd_file(&[resource_block(1005, "", &[0; 16]), resource_block(1088, "", &descriptor)]);
	let file = PsdFile::from_bytes(bytes).expect("file frames");

	let (offset, len) = file.resources_range();
	assert_eq!(offset, 34);
	assert!(len > 0);
	let ids: Vec<u16> = file.resources().map(|block| block.expect("block parses").id).collect();
	assert_eq!(ids, [1005, 1088]);
	assert!(file.find_resource(1088).expect("scan succeeds").is_some());
	assert!(file.find_resource(1036).expect("scan succeeds").is_none());
}

#[test]
fn resource_section_overrunning_file_is_truncated() {
	let mut bytes = psd_file(&[resource_block(1005, "", &[0; 16])]);
	bytes.truncate(bytes.len() - 4);
	let err = PsdFile::from_bytes(bytes).err().expect("short file fails");
	assert!(matches!(err, PsdError::TruncatedStream { .. }));
}

#[test]
fn open_reads_from_disk() {
	let path = write_fixture("file_open_reads_from_disk.psd", &psd_file(&[]));
	let file = PsdFile::open(&path).expect("fixture opens");
	assert_eq!(file.header.width, 32);
	assert_eq!(file.resources().count(), 0);
}
