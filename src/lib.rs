//! Public library API for decoding Photoshop image-resource descriptors.

/// PSD file framing, resource blocks, and the recursive descriptor decoder.
pub mod psd;
