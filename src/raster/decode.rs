use image::imageops::FilterType;

use crate::{
    foundation::core::Detail,
    foundation::error::{TraceError, TraceResult},
    raster::buffer::RasterBuffer,
};

/// Decode encoded image bytes and downscale to the detail level's cap.
///
/// The resample is a single uniform scale of `min(1, cap / max(w, h))`:
/// images already within the cap pass through at their native size, and
/// nothing is ever upscaled. Triangle (bilinear) filtering keeps the result
/// deterministic for a given input.
pub fn decode_for_detail(bytes: &[u8], detail: Detail) -> TraceResult<RasterBuffer> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|err| TraceError::decode(format!("load image from memory: {err}")))?;

    let (src_w, src_h) = (dyn_img.width(), dyn_img.height());
    if src_w == 0 || src_h == 0 {
        return Err(TraceError::decode("image has a zero dimension"));
    }

    let cap = detail.profile().resample_cap;
    let scale = (f64::from(cap) / f64::from(src_w.max(src_h))).min(1.0);

    let rgba = if scale < 1.0 {
        let w = (f64::from(src_w) * scale).round().max(1.0) as u32;
        let h = (f64::from(src_h) * scale).round().max(1.0) as u32;
        dyn_img.resize_exact(w, h, FilterType::Triangle).to_rgba8()
    } else {
        dyn_img.to_rgba8()
    };

    let (width, height) = rgba.dimensions();
    Ok(RasterBuffer::from_rgba8(width, height, rgba.into_raw()))
}

#[cfg(test)]
#[path = "../../tests/unit/raster/decode.rs"]
mod tests;
