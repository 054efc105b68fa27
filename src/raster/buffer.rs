/// Channel value below which a binarized pixel counts as foreground.
pub const FOREGROUND_CUTOFF: u8 = 128;

/// Owned RGBA8 pixel buffer, row-major, 4 bytes per pixel.
///
/// One buffer is owned exclusively by one pipeline invocation. Binarization
/// overwrites the channels in place, after which the buffer doubles as the
/// binary mask queried through [`RasterBuffer::foreground`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RasterBuffer {
    /// Wrap raw RGBA8 bytes. The byte length must be `width * height * 4`.
    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize * 4);
        Self {
            width,
            height,
            data,
        }
    }

    /// Buffer width, px.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Buffer height, px.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total pixel count.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Raw RGBA8 bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw RGBA8 bytes.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the buffer, returning `(width, height, rgba8)`.
    pub fn into_parts(self) -> (u32, u32, Vec<u8>) {
        (self.width, self.height, self.data)
    }

    /// Whether the binarized pixel at `(x, y)` is foreground.
    ///
    /// Out-of-range coordinates read as background, so callers can probe a
    /// one-cell apron around the buffer without bounds bookkeeping. Only
    /// meaningful after binarization has written mask values into the
    /// channels.
    pub fn foreground(&self, x: i64, y: i64) -> bool {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return false;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        self.data[idx] < FOREGROUND_CUTOFF
    }
}
