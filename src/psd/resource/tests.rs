use psdesc_testkit::{PsdBytes, resource_block, scenario_descriptor};

use crate::psd::{DecodeOptions, OsType, PsdError, ResourceData, ResourceIter, Value};

fn versioned(descriptor: &[u8]) -> Vec<u8> {
	PsdBytes::new().u32(16).raw(descriptor).build()
}

#[test]
fn iterates_blocks_with_padding() {
	let section = [resource_block(1005, "", &[0; 16]), resource_block(1044, "id", &[0, 0, 0, 7, 1])].concat();
	let blocks: Vec<_> = ResourceIter::new(&section, 0).collect::<Result<_, _>>().expect("blocks parse");

	assert_eq!(blocks.len(), 2);
	assert_eq!(blocks[0].id, 1005);
	assert_eq!(blocks[0].data_offset, 12);
	assert_eq!(blocks[1].id, 1044);
	assert_eq!(blocks[1].name, "id");
	assert_eq!(blocks[1].data, [0, 0, 0, 7, 1]);
	assert_eq!(blocks[1].file_offset, 28);
}

#[test]
fn bad_signature_stops_iteration() {
	let section = [resource_block(1000, "", &[1, 2]), PsdBytes::new().tag(b"8BPS").u16(1).build()].concat();
	let mut iter = ResourceIter::new(&section, 40);
	iter.next().expect("first block").expect("first block parses");
	let err = iter.next().expect("second item").expect_err("bad signature fails");
	assert!(matches!(err, PsdError::BadResourceSignature { signature, at: 54 } if signature == OsType(*b"8BPS")));
	assert!(iter.next().is_none());
}

#[test]
fn descriptor_block_decodes_after_version() {
	let section = resource_block(1088, "", &versioned(&scenario_descriptor()));
	let block = ResourceIter::new(&section, 0).next().expect("block").expect("block parses");

	let ResourceData::Descriptor { version, descriptor } = block.decode(&DecodeOptions::default()).expect("descriptor decodes") else {
		panic!("expected descriptor resource");
	};
	assert_eq!(version, 16);
	assert_eq!(descriptor.get("nm  "), Some(&Value::Integer(42)));
}

#[test]
fn descriptor_cannot_read_past_its_block() {
	let descriptor = scenario_descriptor();
	let short = versioned(&descriptor[..descriptor.len() - 2]);
	let section = [resource_block(1088, "", &short), resource_block(1005, "", &[0; 16])].concat();
	let block = ResourceIter::new(&section, 0).next().expect("block").expect("block parses");

	let err = block.decode(&DecodeOptions::default()).expect_err("truncated block fails");
	assert!(matches!(err.root_cause(), PsdError::TruncatedStream { .. }));
}

#[test]
fn wrong_descriptor_version_is_rejected() {
	let data = PsdBytes::new().u32(15).raw(&scenario_descriptor()).build();
	let section = resource_block(1088, "", &data);
	let block = ResourceIter::new(&section, 100).next().expect("block").expect("block parses");
	let err = block.decode(&DecodeOptions::default()).expect_err("version 15 fails");
	assert!(matches!(err, PsdError::UnsupportedDescriptorVersion { version: 15, at: 112 }));
}

#[test]
fn resolution_info_decodes_fixed_point() {
	let data = PsdBytes::new().u32(72 << 16).u16(1).u16(2).u32((300 << 16) | 0x8000).u16(1).u16(1).build();
	let section = resource_block(1005, "", &data);
	let block = ResourceIter::new(&section, 0).next().expect("block").expect("block parses");

	let ResourceData::ResolutionInfo(info) = block.decode(&DecodeOptions::default()).expect("resolution decodes") else {
		panic!("expected resolution info");
	};
	assert_eq!(info.h_res, 72.0);
	assert_eq!(info.width_unit, 2);
	assert_eq!(info.v_res, 300.5);
}

#[test]
fn unknown_ids_stay_raw() {
	let section = resource_block(1036, "", &[9, 9, 9]);
	let block = ResourceIter::new(&section, 0).next().expect("block").expect("block parses");
	assert_eq!(block.decode(&DecodeOptions::default()).expect("raw decodes"), ResourceData::Raw);
	assert_eq!(block.data, [9, 9, 9]);
}
