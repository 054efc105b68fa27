use crate::{
    foundation::core::TraceOptions,
    foundation::error::TraceResult,
    pipeline::scheduler::Scheduler,
    raster::buffer::RasterBuffer,
};

/// Pixels binarized between scheduler checkpoints.
///
/// The pass shares a thread with interactive work in the host, so it runs in
/// bounded chunks rather than one sweep over the buffer.
pub const CHUNK_PIXELS: usize = 40_000;

/// Alpha below which a pixel is forced to background when
/// [`TraceOptions::remove_background`] is set.
pub const BACKGROUND_ALPHA_CUTOFF: u8 = 128;

/// Threshold the buffer into a binary mask, in place.
///
/// Per pixel: luminance `0.299 R + 0.587 G + 0.114 B` maps to 255 (above the
/// threshold) or 0, optionally inverted; low-alpha pixels are forced to 255
/// when background removal is on. The result lands in R, G and B with alpha
/// pinned to 255, so the buffer itself becomes the mask read by
/// [`RasterBuffer::foreground`].
///
/// Yields to `scheduler` between chunks of [`CHUNK_PIXELS`] pixels; a
/// checkpoint error aborts the pass with the buffer partially written.
pub fn binarize_in_place(
    buffer: &mut RasterBuffer,
    options: &TraceOptions,
    scheduler: &mut dyn Scheduler,
) -> TraceResult<()> {
    let threshold = f32::from(options.threshold);
    let mut first = true;

    for chunk in buffer.data_mut().chunks_mut(CHUNK_PIXELS * 4) {
        if !first {
            scheduler.checkpoint()?;
        }
        first = false;

        for px in chunk.chunks_exact_mut(4) {
            let luminance =
                0.299 * f32::from(px[0]) + 0.587 * f32::from(px[1]) + 0.114 * f32::from(px[2]);
            let mut value: u8 = if luminance > threshold { 255 } else { 0 };
            if options.invert {
                value = 255 - value;
            }
            if options.remove_background && px[3] < BACKGROUND_ALPHA_CUTOFF {
                value = 255;
            }
            px[0] = value;
            px[1] = value;
            px[2] = value;
            px[3] = 255;
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/raster/binarize.rs"]
mod tests;
