use crate::psd::Result;
use crate::psd::bytes::Cursor;

/// Image-resource id of the resolution info block.
pub const RESOLUTION_INFO_RESOURCE_ID: u16 = 1005;

/// Horizontal/vertical resolution and display units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolutionInfo {
	/// Horizontal resolution in pixels per inch.
	pub h_res: f64,
	/// Display unit for horizontal resolution (1 = PPI, 2 = PPCM).
	pub h_res_unit: u16,
	/// Display unit for width (1 = in, 2 = cm, 3 = pt, 4 = picas, 5 = columns).
	pub width_unit: u16,
	/// Vertical resolution in pixels per inch.
	pub v_res: f64,
	/// Display unit for vertical resolution.
	pub v_res_unit: u16,
	/// Display unit for height.
	pub height_unit: u16,
}

impl ResolutionInfo {
	/// Encoded size in bytes.
	pub const SIZE: usize = 16;

	/// Parse a resolution info payload.
	pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self> {
		let h_res = read_fixed_16_16(cursor)?;
		let h_res_unit = cursor.read_u16()?;
		let width_unit = cursor.read_u16()?;
		let v_res = read_fixed_16_16(cursor)?;
		let v_res_unit = cursor.read_u16()?;
		let height_unit = cursor.read_u16()?;
		Ok(Self {
			h_res,
			h_res_unit,
			width_unit,
			v_res,
			v_res_unit,
			height_unit,
		})
	}
}

fn read_fixed_16_16(cursor: &mut Cursor<'_>) -> Result<f64> {
	Ok(f64::from(cursor.read_u32()?) / 65536.0)
}
