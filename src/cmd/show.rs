use std::path::PathBuf;

use psdesc::psd::{DESCRIPTOR_RESOURCE_ID, PsdError, PsdFile, Result};

use crate::cmd::decode_args::DecodeArgs;
use crate::cmd::print::{PrintOptions, print_descriptor};
use crate::cmd::util::{descriptor_to_json, emit_json};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	/// Resource id holding a versioned descriptor.
	#[arg(long, default_value_t = DESCRIPTOR_RESOURCE_ID)]
	pub id: u16,
	#[arg(long)]
	pub json: bool,
	#[command(flatten)]
	pub decode: DecodeArgs,
}

/// Decode and print every descriptor resource with the requested id.
pub fn run(args: Args) -> Result<()> {
	let Args { path, id, json, decode } = args;
	let decode = decode.to_options();

	let file = PsdFile::open(&path)?;
	let mut decoded = Vec::new();
	for block in file.resources() {
		let block = block?;
		if block.id != id {
			continue;
		}
		let (version, descriptor) = block.decode_descriptor(&decode)?;
		decoded.push((block.file_offset, version, descriptor));
	}

	if decoded.is_empty() {
		return Err(PsdError::ResourceNotFound { id });
	}

	if json {
		let payload = ShowJson {
			path: path.display().to_string(),
			id,
			descriptors: decoded
				.iter()
				.map(|(offset, version, descriptor)| ShowDescriptorJson {
					offset: *offset,
					version: *version,
					descriptor: descriptor_to_json(descriptor),
				})
				.collect(),
		};
		emit_json(&payload);
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("id: {id}");
	for (offset, version, descriptor) in &decoded {
		println!("resource offset={offset} version={version}:");
		print_descriptor(descriptor, 2, 0, PrintOptions::default());
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct ShowDescriptorJson {
	offset: usize,
	version: u32,
	descriptor: serde_json::Value,
}

#[derive(serde::Serialize)]
struct ShowJson {
	path: String,
	id: u16,
	descriptors: Vec<ShowDescriptorJson>,
}
