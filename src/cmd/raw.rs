use std::fs;
use std::path::PathBuf;

use psdesc::psd::{Cursor, PsdError, Result, decode_descriptor_with, read_descriptor_version};

use crate::cmd::decode_args::DecodeArgs;
use crate::cmd::print::{PrintOptions, print_descriptor};
use crate::cmd::util::{descriptor_to_json, emit_json, parse_offset};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	/// Byte offset of the descriptor (decimal or 0x-hex).
	#[arg(long, default_value = "0")]
	pub offset: String,
	/// Expect the 4-byte version prefix ahead of the descriptor.
	#[arg(long)]
	pub versioned: bool,
	#[arg(long)]
	pub json: bool,
	#[command(flatten)]
	pub decode: DecodeArgs,
}

/// Decode a bare descriptor from an arbitrary byte blob.
pub fn run(args: Args) -> Result<()> {
	let Args {
		path,
		offset,
		versioned,
		json,
		decode,
	} = args;
	let start = parse_offset(&offset)?;
	let decode = decode.to_options();

	let bytes = fs::read(&path)?;
	let slice = bytes.get(start..).ok_or(PsdError::InvalidOffset { value: offset.clone() })?;
	let mut cursor = Cursor::with_base(slice, start);
	let version = if versioned { Some(read_descriptor_version(&mut cursor)?) } else { None };
	let descriptor = decode_descriptor_with(&mut cursor, &decode)?;
	let end = cursor.offset();

	if json {
		let payload = RawJson {
			path: path.display().to_string(),
			offset: start,
			end,
			version,
			descriptor: descriptor_to_json(&descriptor),
		};
		emit_json(&payload);
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("range: {start}..{end}");
	if let Some(version) = version {
		println!("version: {version}");
	}
	print_descriptor(&descriptor, 0, 0, PrintOptions::default());

	Ok(())
}

#[derive(serde::Serialize)]
struct RawJson {
	path: String,
	offset: usize,
	end: usize,
	#[serde(skip_serializing_if = "Option::is_none")]
	version: Option<u32>,
	descriptor: serde_json::Value,
}
