use std::fmt;

/// # Opcodes
///
/// Chip-8 opcodes are 16 bits each, stored big-endian. Their behavior is cased on some combination of:
/// - `(n, _, _, _)` broad categorization; applies to all opcodes
/// - `(_, _, _, n)` specific behavior within a category
/// - `(_, _, n, n)` more specific behavior within a category
/// - `(_, n, n, n)` some fixed function that doesn't require variables (e.g. CLS; clear screen)
///
/// Nibbles not used to determine the operation often (but not always) carry important data.
/// - `(_, n, n, n)` a 12-bit address
/// - `(_, _, n, n)` a byte that is assigned to and/or compared with Vx
/// - `(_, n, _, _)` either the register Vx or the range of registers V0..=Vx
/// - `(_, _, n, _)` the register Vy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode(u16);

impl Opcode {
    pub fn new(word: u16) -> Self {
        Opcode(word)
    }

    /// Combines two consecutive memory bytes into an opcode.
    ///
    /// # Arguments
    /// * `high` the byte at the program counter
    /// * `low` the byte following it
    pub fn from_bytes(high: u8, low: u8) -> Self {
        Opcode(u16::from(high) << 8 | u16::from(low))
    }

    pub fn word(self) -> u16 {
        self.0
    }

    /// The opcode's four nibbles, most significant first.
    pub fn nibbles(self) -> (u8, u8, u8, u8) {
        (
            ((self.0 & 0xF000) >> 12) as u8,
            self.x() as u8,
            self.y() as u8,
            self.n(),
        )
    }

    /// `[_x__]` as a register index
    pub fn x(self) -> usize {
        ((self.0 & 0x0F00) >> 8) as usize
    }

    /// `[__y_]` as a register index
    pub fn y(self) -> usize {
        ((self.0 & 0x00F0) >> 4) as usize
    }

    /// `[___n]`
    pub fn n(self) -> u8 {
        (self.0 & 0x000F) as u8
    }

    /// `[__kk]`
    pub fn kk(self) -> u8 {
        (self.0 & 0x00FF) as u8
    }

    /// `[_nnn]`
    pub fn addr(self) -> u16 {
        self.0 & 0x0FFF
    }
}

impl From<u16> for Opcode {
    fn from(word: u16) -> Self {
        Opcode(word)
    }
}

/// Disassembles the opcode into its conventional mnemonic.
/// Words that don't decode to an instruction are shown as `DATA`.
impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (x, y, n, kk, addr) = (self.x(), self.y(), self.n(), self.kk(), self.addr());
        match self.nibbles() {
            (0x0, 0x0, 0xE, 0x0) => write!(f, "CLS"),
            (0x0, 0x0, 0xE, 0xE) => write!(f, "RET"),
            (0x1, ..) => write!(f, "JP {:#05X}", addr),
            (0x2, ..) => write!(f, "CALL {:#05X}", addr),
            (0x3, ..) => write!(f, "SE V{:X}, {:#04X}", x, kk),
            (0x4, ..) => write!(f, "SNE V{:X}, {:#04X}", x, kk),
            (0x5, ..) => write!(f, "SE V{:X}, V{:X}", x, y),
            (0x6, ..) => write!(f, "LD V{:X}, {:#04X}", x, kk),
            (0x7, ..) => write!(f, "ADD V{:X}, {:#04X}", x, kk),
            (0x8, .., 0x0) => write!(f, "LD V{:X}, V{:X}", x, y),
            (0x8, .., 0x1) => write!(f, "OR V{:X}, V{:X}", x, y),
            (0x8, .., 0x2) => write!(f, "AND V{:X}, V{:X}", x, y),
            (0x8, .., 0x3) => write!(f, "XOR V{:X}, V{:X}", x, y),
            (0x8, .., 0x4) => write!(f, "ADD V{:X}, V{:X}", x, y),
            (0x8, .., 0x5) => write!(f, "SUB V{:X}, V{:X}", x, y),
            (0x8, .., 0x6) => write!(f, "SHR V{:X}", x),
            (0x8, .., 0x7) => write!(f, "SUBN V{:X}, V{:X}", x, y),
            (0x8, .., 0xE) => write!(f, "SHL V{:X}", x),
            (0x9, ..) => write!(f, "SNE V{:X}, V{:X}", x, y),
            (0xA, ..) => write!(f, "LD I, {:#05X}", addr),
            (0xB, ..) => write!(f, "JP V0, {:#05X}", addr),
            (0xC, ..) => write!(f, "RND V{:X}, {:#04X}", x, kk),
            (0xD, ..) => write!(f, "DRW V{:X}, V{:X}, {}", x, y, n),
            (0xE, .., 0x9, 0xE) => write!(f, "SKP V{:X}", x),
            (0xE, .., 0xA, 0x1) => write!(f, "SKNP V{:X}", x),
            (0xF, .., 0x0, 0x7) => write!(f, "LD V{:X}, DT", x),
            (0xF, .., 0x0, 0xA) => write!(f, "LD V{:X}, K", x),
            (0xF, .., 0x1, 0x5) => write!(f, "LD DT, V{:X}", x),
            (0xF, .., 0x1, 0x8) => write!(f, "LD ST, V{:X}", x),
            (0xF, .., 0x1, 0xE) => write!(f, "ADD I, V{:X}", x),
            (0xF, .., 0x2, 0x9) => write!(f, "LD F, V{:X}", x),
            (0xF, .., 0x3, 0x3) => write!(f, "LD B, V{:X}", x),
            (0xF, .., 0x5, 0x5) => write!(f, "LD [I], V{:X}", x),
            (0xF, .., 0x6, 0x5) => write!(f, "LD V{:X}, [I]", x),
            _ => write!(f, "DATA {:#06X}", self.0),
        }
    }
}
