use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// The FrameBuffer is indexed as [y][x]; each cell holds 0 (off) or 1 (on)
pub type FrameBuffer = [[u8; DISPLAY_WIDTH]; DISPLAY_HEIGHT];

/// # Display
/// The Chip-8 display is composed of 64x32 monochrome pixels.
///
/// Pixels only change through an XOR draw or a full clear. Coordinates wrap
/// around both edges rather than clipping. The display remembers whether it
/// changed since the frame was last handed to a renderer.
#[derive(Debug, Clone)]
pub struct Display {
    frame_buffer: FrameBuffer,
    dirty: bool,
}

impl Display {
    pub fn new() -> Self {
        Display {
            frame_buffer: [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
            dirty: false,
        }
    }

    /// Turns every pixel off
    pub fn clear(&mut self) {
        self.frame_buffer = [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
        self.dirty = true;
    }

    /// Flips a single pixel and reports whether it was lit beforehand.
    ///
    /// # Arguments
    /// * `x` the column, taken modulo the display width
    /// * `y` the row, taken modulo the display height
    pub fn draw_pixel(&mut self, x: usize, y: usize) -> bool {
        let pixel = &mut self.frame_buffer[y % DISPLAY_HEIGHT][x % DISPLAY_WIDTH];
        let collision = *pixel == 1;
        *pixel ^= 1;
        self.dirty = true;
        collision
    }

    /// A read-only view of every pixel, for rendering by some external display
    pub fn get_display(&self) -> &FrameBuffer {
        &self.frame_buffer
    }

    /// Returns a copy of the FrameBuffer if it changed since the last call
    pub fn take_frame(&mut self) -> Option<FrameBuffer> {
        if self.dirty {
            self.dirty = false;
            Some(self.frame_buffer)
        } else {
            None
        }
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}
