use anyhow::Result;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::WindowCanvas;

use vm8::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use vm8::FrameBuffer;

const BYTES_PER_PIXEL: usize = 3;

/// # Window
/// Renders the Chip-8 FrameBuffer into an SDL2 window.
/// The window only gets a call to `render` when the FrameBuffer changed.
pub struct Window {
    canvas: WindowCanvas,
}

impl Window {
    /// Opens a window bound to an sdl2 context.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context with which to draw
    /// * `scale` the size multiplier for each pixel
    pub fn new(sdl: &sdl2::Sdl, scale: u32) -> Result<Self> {
        let video_subsystem = sdl.video().map_err(anyhow::Error::msg)?;
        let window = video_subsystem
            .window(
                "vm8",
                DISPLAY_WIDTH as u32 * scale,
                DISPLAY_HEIGHT as u32 * scale,
            )
            .position_centered()
            .opengl()
            .build()?;
        let mut canvas = window.into_canvas().build()?;
        canvas.clear();
        canvas.present();

        Ok(Window { canvas })
    }

    /// Formats a Chip-8 FrameBuffer as rows of RGB24 pixels.
    ///
    /// Each on/off cell becomes three identical 0/255 intensity bytes, rows concatenated.
    ///
    /// # Arguments
    /// * `frame` a Chip-8 FrameBuffer
    fn frame_to_rgb24(frame: &FrameBuffer) -> Vec<u8> {
        frame
            .iter()
            .flat_map(|row| row.iter())
            .flat_map(|pixel| std::iter::repeat(pixel * 255).take(BYTES_PER_PIXEL))
            .collect()
    }

    /// Uploads the FrameBuffer as a streaming texture stretched over the whole window.
    ///
    /// # Arguments
    /// * `frame` a Chip-8 FrameBuffer
    pub fn render(&mut self, frame: &FrameBuffer) -> Result<()> {
        let texture_creator = self.canvas.texture_creator();
        let mut texture = texture_creator.create_texture_streaming(
            PixelFormatEnum::RGB24,
            DISPLAY_WIDTH as u32,
            DISPLAY_HEIGHT as u32,
        )?;

        let pixels = Window::frame_to_rgb24(frame);
        let row_bytes = DISPLAY_WIDTH * BYTES_PER_PIXEL;
        texture
            .with_lock(None, |buffer: &mut [u8], pitch: usize| {
                for (y, row) in pixels.chunks(row_bytes).enumerate() {
                    buffer[y * pitch..y * pitch + row_bytes].copy_from_slice(row);
                }
            })
            .map_err(anyhow::Error::msg)?;

        self.canvas
            .copy(&texture, None, None)
            .map_err(anyhow::Error::msg)?;
        self.canvas.present();
        Ok(())
    }
}
