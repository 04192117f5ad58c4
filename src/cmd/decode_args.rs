use std::time::Duration;

use psdesc::psd::DecodeOptions;

/// Decode limit flags shared by `show` and `raw`.
#[derive(clap::Args, Debug, Clone)]
pub struct DecodeArgs {
	#[arg(long = "max-depth")]
	pub max_depth: Option<u32>,
	#[arg(long = "max-items")]
	pub max_items: Option<u32>,
	/// Fail on tags whose payload is not decoded instead of acknowledging them.
	#[arg(long = "strict-tags")]
	pub strict_tags: bool,
	#[arg(long = "timeout-ms")]
	pub timeout_ms: Option<u64>,
}

impl DecodeArgs {
	pub(crate) fn to_options(&self) -> DecodeOptions {
		let mut decode = if self.strict_tags { DecodeOptions::strict() } else { DecodeOptions::default() };
		if let Some(max_depth) = self.max_depth {
			decode.max_depth = max_depth;
		}
		if let Some(max_items) = self.max_items {
			decode.max_items = max_items;
		}
		if let Some(timeout_ms) = self.timeout_ms {
			decode = decode.with_timeout(Duration::from_millis(timeout_ms));
		}
		decode
	}
}
