use std::path::PathBuf;

use psdesc::psd::{DESCRIPTOR_RESOURCE_ID, PsdFile, RESOLUTION_INFO_RESOURCE_ID, Result};

use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// Print header fields and the image-resource table.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json } = args;

	let file = PsdFile::open(&path)?;
	let header = file.header;
	let (section_offset, section_len) = file.resources_range();
	let mut resources = Vec::new();
	for block in file.resources() {
		let block = block?;
		resources.push(ResourceJson {
			id: block.id,
			kind: resource_kind(block.id),
			name: block.name,
			offset: block.file_offset,
			size: block.data.len(),
		});
	}

	if json {
		let payload = InfoJson {
			path: path.display().to_string(),
			version: header.version,
			channels: header.channels,
			width: header.width,
			height: header.height,
			depth: header.depth,
			color_mode: header.color_mode_label(),
			resource_section_offset: section_offset,
			resource_section_len: section_len,
			resources,
		};
		emit_json(&payload);
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("format: {}", if header.is_psb() { "psb" } else { "psd" });
	println!("channels: {}", header.channels);
	println!("size: {}x{}", header.width, header.height);
	println!("depth: {}", header.depth);
	println!("color_mode: {}", header.color_mode_label());
	println!("resource_section: offset={section_offset} len={section_len}");
	println!("resources: {}", resources.len());
	for item in &resources {
		let name = if item.name.is_empty() { "-" } else { item.name.as_str() };
		println!("  {:>5} {:<12} offset={} size={} name={}", item.id, item.kind, item.offset, item.size, name);
	}

	Ok(())
}

fn resource_kind(id: u16) -> &'static str {
	match id {
		DESCRIPTOR_RESOURCE_ID => "descriptor",
		RESOLUTION_INFO_RESOURCE_ID => "resolution",
		_ => "raw",
	}
}

#[derive(serde::Serialize)]
struct ResourceJson {
	id: u16,
	kind: &'static str,
	name: String,
	offset: usize,
	size: usize,
}

#[derive(serde::Serialize)]
struct InfoJson {
	path: String,
	version: u16,
	channels: u16,
	width: u32,
	height: u32,
	depth: u16,
	color_mode: &'static str,
	resource_section_offset: usize,
	resource_section_len: usize,
	resources: Vec<ResourceJson>,
}
