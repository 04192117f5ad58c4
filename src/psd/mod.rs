mod bytes;
mod descriptor;
mod error;
mod file;
mod header;
mod leaf;
mod options;
mod ostype;
mod resolution;
mod resource;
mod value;

/// Big-endian forward-only byte cursor.
pub use bytes::Cursor;
/// Descriptor decoding entry points.
pub use descriptor::{DESCRIPTOR_RESOURCE_ID, decode_descriptor, decode_descriptor_with};
/// Error and result aliases.
pub use error::{PsdError, Result};
/// File abstraction.
pub use file::PsdFile;
/// File header representation.
pub use header::PsdHeader;
/// Leaf value readers.
pub use leaf::{read_boolean, read_double, read_enum, read_integer, read_reference, read_text, read_unit_float};
/// Decode limits, tag policy, and cancellation.
pub use options::{CancelToken, DecodeOptions, UnsupportedTagPolicy};
/// Four-byte type code.
pub use ostype::OsType;
/// Resolution info resource.
pub use resolution::{RESOLUTION_INFO_RESOURCE_ID, ResolutionInfo};
/// Resource block framing.
pub use resource::{DESCRIPTOR_VERSION, RESOURCE_SIGNATURE, ResourceBlock, ResourceData, ResourceIter, read_descriptor_version};
/// Decoded value model.
pub use value::{ClassRef, Descriptor, DescriptorItem, EnumValue, Reference, ReferenceItem, UnitFloat, Value};
