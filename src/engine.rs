use std::io::Read;

use log::{debug, info, trace};

use crate::constants::{
    MAX_PROGRAM_SIZE, MEMORY_SIZE, PROGRAM_START, REGISTER_COUNT, SPRITE_SHEET, STACK_SIZE,
};
use crate::display::{Display, FrameBuffer};
use crate::error::{Error, Result};
use crate::instruction;
use crate::keyboard::Keyboard;
use crate::opcode::Opcode;

/// Whether the engine makes progress when stepped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    /// Blocked by `Fx0A` until a key press is written into the register
    WaitingForKey(usize),
}

/// # Engine
/// Executes Chip-8 programs one instruction at a time.
///
/// ## CPU
/// Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) is the carry, borrow and collision flag
/// - (i) a 16-bit memory address register
///
/// Counter
/// - (pc) a 16-bit program counter, wrapping on overflow
///
/// Pointer
/// - (sp) an 8-bit stack pointer, wrapping on overflow
///     - it is bumped before a push, so slot 0 is only ever read by an unbalanced return
///
/// Timers
/// - 2 8-bit timers (delay & sound), each decremented once per step while above 0
///
/// ## Memory
/// - 16 slot stack of return addresses, indexed by sp modulo 16
/// - 4096 bytes of addressable memory; addresses wrap modulo 4096
///     - 0x000..0x050 holds the sprite sheet
///     - 0x200.. holds the loaded program
///
/// ## Peripherals
/// - a `Display` drawn to by `00E0` and `Dxyn`
/// - a `Keyboard` queried by `Ex9E`, `ExA1` and `Fx0A`
pub struct Engine {
    pub(crate) v: [u8; REGISTER_COUNT],
    pub(crate) i: u16,
    pub(crate) pc: u16,
    pub(crate) sp: u8,
    pub(crate) delay_timer: u8,
    pub(crate) sound_timer: u8,
    pub(crate) stack: [u16; STACK_SIZE],
    pub(crate) memory: [u8; MEMORY_SIZE],
    pub(crate) display: Display,
    pub(crate) keyboard: Keyboard,
}

impl Engine {
    /// Creates an engine that takes ownership of its peripherals.
    /// Held keys carry over, but a pending key request is dropped since only `Fx0A` may make one.
    ///
    /// # Arguments
    /// * `display` the display drawn to by the program
    /// * `keyboard` the keypad read by the program
    pub fn new(display: Display, mut keyboard: Keyboard) -> Self {
        keyboard.cancel_key_request();
        let mut memory = [0; MEMORY_SIZE];
        memory[..SPRITE_SHEET.len()].copy_from_slice(&SPRITE_SHEET);

        Engine {
            v: [0; REGISTER_COUNT],
            i: 0,
            pc: PROGRAM_START,
            sp: 0,
            delay_timer: 0,
            sound_timer: 0,
            stack: [0; STACK_SIZE],
            memory,
            display,
            keyboard,
        }
    }

    /// Puts the machine back into its power-on state, including its peripherals.
    /// Any loaded program is erased.
    pub fn reset(&mut self) {
        *self = Engine::new(Display::new(), Keyboard::new());
    }

    /// Copies a program into memory at 0x200.
    /// Registers and the program counter are left alone; `reset` first for a clean run.
    ///
    /// # Arguments
    /// * `program` the raw program image
    pub fn load_program(&mut self, program: &[u8]) -> Result<()> {
        if program.len() > MAX_PROGRAM_SIZE {
            return Err(Error::RomTooLarge {
                size: program.len(),
                max_size: MAX_PROGRAM_SIZE,
            });
        }
        let start = PROGRAM_START as usize;
        self.memory[start..start + program.len()].copy_from_slice(program);
        info!("Loaded program [size: {}]", program.len());
        Ok(())
    }

    /// Load a rom from some source
    ///
    /// # Arguments
    /// * `reader` a reader that yields the whole ROM
    pub fn load_rom(&mut self, reader: &mut dyn Read) -> Result<()> {
        let mut program = Vec::new();
        reader.read_to_end(&mut program)?;
        self.load_program(&program)
    }

    /// Advances the machine by a single cycle
    /// - does nothing while waiting for a key press
    /// - decrements both timers
    /// - fetches the opcode at pc and moves pc past it
    /// - executes the opcode, which may overwrite pc
    pub fn step(&mut self) {
        if self.is_paused() {
            return;
        }

        self.delay_timer = self.delay_timer.saturating_sub(1);
        self.sound_timer = self.sound_timer.saturating_sub(1);

        let op = self.fetch();
        trace!(
            "{:04X} {:<16} pc{:04X} i{:04X} sp{:02X} v{:02X?}",
            op.word(),
            op.to_string(),
            self.pc,
            self.i,
            self.sp,
            self.v
        );
        self.pc = self.pc.wrapping_add(2);
        instruction::from_op(op)(op, self);
    }

    /// Gets the opcode currently pointed at by the pc.
    /// Memory is stored as bytes, but opcodes are 16 bits so we combine two subsequent bytes.
    fn fetch(&self) -> Opcode {
        Opcode::from_bytes(self.read(self.pc), self.read(self.pc.wrapping_add(1)))
    }

    /// Forwards a key press to the keyboard and resumes execution if a register was waiting on it.
    ///
    /// # Arguments
    /// * `key` the 8-bit representation of the key that was pressed
    pub fn key_down(&mut self, key: u8) {
        if let Some(register) = self.keyboard.on_key_down(key) {
            self.v[register] = key;
            debug!("Stored key {:X} in V{:X}, resuming", key, register);
        }
    }

    /// Forwards a key release to the keyboard.
    ///
    /// # Arguments
    /// * `key` the 8-bit representation of the key that was released
    pub fn key_up(&mut self, key: u8) {
        self.keyboard.on_key_up(key);
    }

    /// Returns the FrameBuffer if the display changed since it was last taken
    pub fn take_frame(&mut self) -> Option<FrameBuffer> {
        self.display.take_frame()
    }

    /// Blocks further steps until the next key press lands in `register`
    pub(crate) fn wait_for_key(&mut self, register: usize) {
        self.keyboard.set_on_key_press(register);
        debug!("Waiting for key press into V{:X}", register);
    }

    /// Reads a byte; the address wraps around the end of memory
    pub(crate) fn read(&self, addr: u16) -> u8 {
        self.memory[addr as usize % MEMORY_SIZE]
    }

    /// Writes a byte; the address wraps around the end of memory
    pub(crate) fn write(&mut self, addr: u16, value: u8) {
        self.memory[addr as usize % MEMORY_SIZE] = value;
    }

    pub fn is_paused(&self) -> bool {
        self.run_state() != RunState::Running
    }

    /// Derived from the keyboard's pending request, the only record of a waiting `Fx0A`
    pub fn run_state(&self) -> RunState {
        match self.keyboard.register_needing_key() {
            Some(register) => RunState::WaitingForKey(register),
            None => RunState::Running,
        }
    }

    /// True while the sound timer is counting down and a host should beep
    pub fn sound_active(&self) -> bool {
        self.sound_timer > 0
    }

    pub fn registers(&self) -> &[u8; REGISTER_COUNT] {
        &self.v
    }

    pub fn index(&self) -> u16 {
        self.i
    }

    pub fn program_counter(&self) -> u16 {
        self.pc
    }

    pub fn stack_pointer(&self) -> u8 {
        self.sp
    }

    pub fn stack(&self) -> &[u16; STACK_SIZE] {
        &self.stack
    }

    pub fn delay_timer(&self) -> u8 {
        self.delay_timer
    }

    pub fn sound_timer(&self) -> u8 {
        self.sound_timer
    }

    pub fn memory(&self) -> &[u8; MEMORY_SIZE] {
        &self.memory
    }

    pub fn display(&self) -> &Display {
        &self.display
    }

    pub fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Display::new(), Keyboard::new())
    }
}
