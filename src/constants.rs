/// Bytes of addressable memory
pub const MEMORY_SIZE: usize = 4096;

/// Address at which programs are loaded and execution begins
pub const PROGRAM_START: u16 = 0x200;

/// Largest program that fits between `PROGRAM_START` and the end of memory
pub const MAX_PROGRAM_SIZE: usize = MEMORY_SIZE - PROGRAM_START as usize;

pub const REGISTER_COUNT: usize = 16;
pub const STACK_SIZE: usize = 16;
pub const KEY_COUNT: usize = 16;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

/// Rate (Hz) at which the reference hardware decrements its timers.
/// Hosts that call `step` once per frame at this rate get authentic timer speed.
pub const TIMER_FREQUENCY: u32 = 60;

/// Height in bytes of each glyph in the sprite sheet
pub const SPRITE_BYTES: u16 = 5;

/// # Sprite sheet
/// Glyphs for the hex digits 0..F, each 8 pixels wide and 5 rows tall.
/// Lives at 0x000 in memory so the glyph for digit `d` starts at `d * SPRITE_BYTES`.
#[rustfmt::skip]
pub const SPRITE_SHEET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
