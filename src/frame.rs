use bitvec::prelude::*;

pub const WIDTH: usize = 64;
pub const HEIGHT: usize = 32;
pub(crate) const MEM_LENGTH: usize = WIDTH * HEIGHT / 8;
const ROW_LENGTH: usize = WIDTH / 8;

/// A 64x32 monochrome framebuffer with XOR sprite compositing
///
/// Internally the data is stored as rows concatenated from top to bottom
/// of the frame. Rows are represented as individual bits of continuous
/// memory, matching the state of pixels from left to the right.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Frame([u8; MEM_LENGTH]);

/// A shared view over a `Frame`
///
/// The read surface handed to a rendering collaborator: raw row bytes,
/// per-pixel access, and row iteration. Never mutates.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct FrameView<'a>(&'a [u8; MEM_LENGTH]);

impl<'a> FrameView<'a> {
    /// View the raw memory of a frame
    pub fn as_raw(&self) -> &[u8] {
        self.0
    }

    /// Read the pixel at (x, y), or `None` out of bounds
    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        self.iter_rows_as_bitslices()
            .nth(y)
            .and_then(|row| row.get(x))
            .map(|bit| *bit)
    }

    /// Get iterator over rows in a form of `BitSlice`s
    pub fn iter_rows_as_bitslices(&self) -> impl Iterator<Item = &'a BitSlice<Msb0, u8>> {
        self.0.chunks(ROW_LENGTH).map(|row| row.view_bits::<_>())
    }
}

impl Frame {
    pub(crate) fn new() -> Self {
        Self([0; MEM_LENGTH])
    }

    /// Get view over frame
    pub fn view(&self) -> FrameView<'_> {
        FrameView(&self.0)
    }

    /// Read the pixel at (x, y), or `None` out of bounds
    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        self.view().get(x, y)
    }

    /// Turn every pixel off
    pub(crate) fn clear(&mut self) {
        self.0 = [0; MEM_LENGTH];
    }

    /// XOR one row of sprite data into the frame, most significant bit first
    ///
    /// Coordinates wrap around both edges rather than clipping. Returns
    /// whether any pixel toggled from on to off, the collision condition.
    pub(crate) fn draw_row(&mut self, x: usize, y: usize, bits: u8) -> bool {
        let start = (y % HEIGHT) * ROW_LENGTH;
        let row = self.0[start..start + ROW_LENGTH].view_bits_mut::<Msb0>();
        let mut collision = false;
        for offset in 0..8 {
            if bits & (0x80 >> offset) != 0 {
                if let Some(mut bit) = row.get_mut((x + offset) % WIDTH) {
                    collision |= *bit;
                    *bit ^= true;
                }
            }
        }
        collision
    }
}

#[cfg(test)]
impl Frame {
    pub(crate) fn as_raw_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

#[cfg(test)]
mod frame_test {
    use super::*;

    #[test]
    fn get() {
        let mut frame = Frame::new();
        frame.as_raw_mut()[0] = 0b1000_0000;

        assert_eq!(frame.get(0, 0), Some(true));
        assert_eq!(frame.get(1, 0), Some(false));
        assert_eq!(frame.get(0, 1), Some(false));
        assert_eq!(frame.get(WIDTH, 0), None);
        assert_eq!(frame.get(0, HEIGHT), None);
    }

    #[test]
    fn draw_row_sets_pixels_msb_first() {
        let mut frame = Frame::new();
        assert!(!frame.draw_row(0, 0, 0b1010_0001));

        assert_eq!(frame.get(0, 0), Some(true));
        assert_eq!(frame.get(1, 0), Some(false));
        assert_eq!(frame.get(2, 0), Some(true));
        assert_eq!(frame.get(7, 0), Some(true));
        assert_eq!(frame.get(8, 0), Some(false));
    }

    #[test]
    fn draw_row_reports_collision_on_unset() {
        let mut frame = Frame::new();
        assert!(!frame.draw_row(4, 2, 0xFF));
        // Overlaps in a single pixel
        assert!(frame.draw_row(11, 2, 0x80));
        assert_eq!(frame.get(11, 2), Some(false));
        // No overlap left
        assert!(!frame.draw_row(11, 2, 0x80));
        assert_eq!(frame.get(11, 2), Some(true));
    }

    #[test]
    fn draw_row_twice_is_involution() {
        let mut frame = Frame::new();
        frame.as_raw_mut()[8] = 0b0011_1100;

        let before = frame.clone();
        frame.draw_row(3, 1, 0xA5);
        assert_ne!(frame, before);
        // The second identical draw restores every pixel, and collides
        // exactly where the first draw found lit pixels
        assert!(frame.draw_row(3, 1, 0xA5));
        assert_eq!(frame, before);
    }

    #[test]
    fn draw_row_wraps_horizontally() {
        let mut frame = Frame::new();
        frame.draw_row(60, 0, 0xFF);

        for x in 60..64 {
            assert_eq!(frame.get(x, 0), Some(true));
        }
        for x in 0..4 {
            assert_eq!(frame.get(x, 0), Some(true));
        }
        assert_eq!(frame.get(4, 0), Some(false));
        assert_eq!(frame.get(59, 0), Some(false));
    }

    #[test]
    fn draw_row_wraps_vertically() {
        let mut frame = Frame::new();
        frame.draw_row(0, HEIGHT + 3, 0x80);
        assert_eq!(frame.get(0, 3), Some(true));
    }

    #[test]
    fn clear_resets_every_pixel() {
        let mut frame = Frame::new();
        for chunk in frame.as_raw_mut().iter_mut() {
            *chunk = 0xFF;
        }
        frame.clear();
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                assert_eq!(frame.get(x, y), Some(false));
            }
        }
    }

    #[test]
    fn view_exposes_raw_rows() {
        let mut frame = Frame::new();
        frame.draw_row(0, 0, 0xF0);
        assert_eq!(frame.view().as_raw()[0], 0xF0);
        assert_eq!(frame.view().iter_rows_as_bitslices().count(), HEIGHT);
    }
}
