use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crate::psd::bytes::Cursor;
use crate::psd::{PsdError, Result};

/// How the dispatcher treats tags whose payload layout it does not read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnsupportedTagPolicy {
	/// Yield `Value::Unsupported(tag)` without consuming payload bytes.
	#[default]
	Acknowledge,
	/// Fail with `PsdError::UnsupportedTypeTag`.
	Reject,
}

/// Shared flag for cooperative cancellation of a running decode.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
	/// Create an untriggered token.
	pub fn new() -> Self {
		Self::default()
	}

	/// Request cancellation; visible to every clone.
	pub fn cancel(&self) {
		self.0.store(true, Ordering::Relaxed);
	}

	/// Whether cancellation was requested.
	pub fn is_cancelled(&self) -> bool {
		self.0.load(Ordering::Relaxed)
	}
}

/// Runtime limits and behavior switches for descriptor decoding.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Maximum descriptor/list nesting, counting the root descriptor.
	pub max_depth: u32,
	/// Maximum declared item count for one descriptor or list.
	pub max_items: u32,
	/// Treatment of `comp`, `GlbO`, `type`, `GlbC`, `alis`, and `tdta`.
	pub unsupported_tags: UnsupportedTagPolicy,
	/// Optional cancellation flag, polled before every item.
	pub cancel: Option<CancelToken>,
	/// Optional wall-clock deadline, polled before every item.
	pub deadline: Option<Instant>,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			max_depth: 128,
			max_items: 1 << 20,
			unsupported_tags: UnsupportedTagPolicy::Acknowledge,
			cancel: None,
			deadline: None,
		}
	}
}

impl DecodeOptions {
	/// Preset that rejects every tag whose payload is not decoded.
	pub fn strict() -> Self {
		Self {
			unsupported_tags: UnsupportedTagPolicy::Reject,
			..Self::default()
		}
	}

	/// Set a deadline `timeout` from now.
	///
	/// A timeout too large to represent as an `Instant` leaves no deadline.
	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.deadline = Instant::now().checked_add(timeout);
		self
	}

	/// Attach a cancel token.
	pub fn with_cancel(mut self, token: CancelToken) -> Self {
		self.cancel = Some(token);
		self
	}

	pub(crate) fn check_live(&self) -> Result<()> {
		if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
			return Err(PsdError::Cancelled);
		}
		if self.deadline.is_some_and(|deadline| Instant::now() >= deadline) {
			return Err(PsdError::DeadlineExceeded);
		}
		Ok(())
	}

	/// Read a `u32` element count and reject it above `max_items`.
	pub(crate) fn read_count(&self, cursor: &mut Cursor<'_>) -> Result<u32> {
		let at = cursor.offset();
		let count = cursor.read_u32()?;
		if count > self.max_items {
			return Err(PsdError::ItemCountTooLarge {
				count,
				max: self.max_items,
				at,
			});
		}
		Ok(count)
	}
}
