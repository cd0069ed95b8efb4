use crate::constants::SPRITE_BYTES;
use crate::engine::Engine;
use crate::opcode::Opcode;

/// pc has already been moved past the current instruction when these run, so
/// a skip only needs to move it by one more instruction.
fn skip_if(engine: &mut Engine, condition: bool) {
    if condition {
        engine.pc = engine.pc.wrapping_add(2);
    }
}

/// unrecognised opcode; ignored
pub fn nop(_op: Opcode, _engine: &mut Engine) {}

/// clear
pub fn clr(_op: Opcode, engine: &mut Engine) {
    engine.display.clear();
}

/// PC = STACK[SP]; SP -= 1
pub fn rts(_op: Opcode, engine: &mut Engine) {
    engine.pc = engine.stack[engine.sp as usize % engine.stack.len()];
    engine.sp = engine.sp.wrapping_sub(1);
}

/// PC = addr
pub fn jump(op: Opcode, engine: &mut Engine) {
    engine.pc = op.addr();
}

/// SP += 1; STACK[SP] = PC; PC = addr
pub fn call(op: Opcode, engine: &mut Engine) {
    engine.sp = engine.sp.wrapping_add(1);
    let slot = engine.sp as usize % engine.stack.len();
    engine.stack[slot] = engine.pc;
    engine.pc = op.addr();
}

/// if Vx == kk then pc += 2
pub fn ske(op: Opcode, engine: &mut Engine) {
    let condition = engine.v[op.x()] == op.kk();
    skip_if(engine, condition);
}

/// if Vx != kk then pc += 2
pub fn skne(op: Opcode, engine: &mut Engine) {
    let condition = engine.v[op.x()] != op.kk();
    skip_if(engine, condition);
}

/// if Vx == Vy then pc += 2
pub fn skre(op: Opcode, engine: &mut Engine) {
    let condition = engine.v[op.x()] == engine.v[op.y()];
    skip_if(engine, condition);
}

/// Vx = kk
pub fn load(op: Opcode, engine: &mut Engine) {
    engine.v[op.x()] = op.kk();
}

/// Vx += kk
/// Add kk to Vx; allow for overflow but implicitly drop it
pub fn add(op: Opcode, engine: &mut Engine) {
    engine.v[op.x()] = engine.v[op.x()].wrapping_add(op.kk());
}

/// Vx = Vy
pub fn mv(op: Opcode, engine: &mut Engine) {
    engine.v[op.x()] = engine.v[op.y()];
}

/// Vx |= Vy
pub fn or(op: Opcode, engine: &mut Engine) {
    engine.v[op.x()] |= engine.v[op.y()];
}

/// Vx &= Vy
pub fn and(op: Opcode, engine: &mut Engine) {
    engine.v[op.x()] &= engine.v[op.y()];
}

/// Vx ^= Vy
pub fn xor(op: Opcode, engine: &mut Engine) {
    engine.v[op.x()] ^= engine.v[op.y()];
}

/// Vx += Vy; VF = overflow
/// VF is written last, so the flag wins when x is F
pub fn addr(op: Opcode, engine: &mut Engine) {
    let (res, over) = engine.v[op.x()].overflowing_add(engine.v[op.y()]);
    engine.v[op.x()] = res;
    engine.v[0xF] = over as u8;
}

/// VF = Vx > Vy; Vx -= Vy
/// VF is written first, so the result wins when x is F
pub fn sub(op: Opcode, engine: &mut Engine) {
    engine.v[0xF] = (engine.v[op.x()] > engine.v[op.y()]) as u8;
    engine.v[op.x()] = engine.v[op.x()].wrapping_sub(engine.v[op.y()]);
}

/// VF = Vx & 1; Vx >>= 1
/// Vy is ignored
pub fn shr(op: Opcode, engine: &mut Engine) {
    engine.v[0xF] = engine.v[op.x()] & 0x1;
    engine.v[op.x()] >>= 1;
}

/// VF = Vy > Vx; Vx = Vy - Vx
pub fn subn(op: Opcode, engine: &mut Engine) {
    engine.v[0xF] = (engine.v[op.y()] > engine.v[op.x()]) as u8;
    engine.v[op.x()] = engine.v[op.y()].wrapping_sub(engine.v[op.x()]);
}

/// VF = Vx & 0x80; Vx <<= 1
/// Vy is ignored and VF keeps the raw bit (0x80) rather than 1
pub fn shl(op: Opcode, engine: &mut Engine) {
    engine.v[0xF] = engine.v[op.x()] & 0x80;
    engine.v[op.x()] <<= 1;
}

/// if Vx != Vy then pc += 2
pub fn skrne(op: Opcode, engine: &mut Engine) {
    let condition = engine.v[op.x()] != engine.v[op.y()];
    skip_if(engine, condition);
}

/// I = addr
pub fn loadi(op: Opcode, engine: &mut Engine) {
    engine.i = op.addr();
}

/// I = V0 + addr
pub fn jumpi(op: Opcode, engine: &mut Engine) {
    engine.i = op.addr().wrapping_add(u16::from(engine.v[0x0]));
}

/// Vx = rand_byte & kk
pub fn rand(op: Opcode, engine: &mut Engine) {
    let rand_byte: u8 = rand::random();
    engine.v[op.x()] = rand_byte & op.kk();
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs a sprite from memory I..I+n onto the display at x, y with wrapping.
/// Sets VF if any lit pixel was erased, otherwise clears it
pub fn draw(op: Opcode, engine: &mut Engine) {
    let x = engine.v[op.x()] as usize;
    let y = engine.v[op.y()] as usize;
    let mut collision = false;

    for row in 0..op.n() {
        let sprite_row = engine.read(engine.i.wrapping_add(u16::from(row)));
        for bit in 0..8 {
            if sprite_row & (0x80 >> bit) != 0 {
                collision |= engine.display.draw_pixel(x + bit, y + row as usize);
            }
        }
    }

    engine.v[0xF] = collision as u8;
}

/// if Vx.pressed then pc += 2
pub fn skpr(op: Opcode, engine: &mut Engine) {
    let condition = engine.keyboard.is_pressed(engine.v[op.x()]);
    skip_if(engine, condition);
}

/// if !Vx.pressed then pc += 2
pub fn skup(op: Opcode, engine: &mut Engine) {
    let condition = !engine.keyboard.is_pressed(engine.v[op.x()]);
    skip_if(engine, condition);
}

/// Vx = DT
pub fn moved(op: Opcode, engine: &mut Engine) {
    engine.v[op.x()] = engine.delay_timer;
}

/// await keypress for Vx
pub fn keyd(op: Opcode, engine: &mut Engine) {
    engine.wait_for_key(op.x());
}

/// DT = Vx
pub fn loads(op: Opcode, engine: &mut Engine) {
    engine.delay_timer = engine.v[op.x()];
}

/// ST = Vx
pub fn ld(op: Opcode, engine: &mut Engine) {
    engine.sound_timer = engine.v[op.x()];
}

/// I += Vx
pub fn addi(op: Opcode, engine: &mut Engine) {
    engine.i = engine.i.wrapping_add(u16::from(engine.v[op.x()]));
}

/// I = Vx * 5
/// Set I to the memory address of the sprite for Vx
/// See constants::SPRITE_SHEET for more details
pub fn ldspr(op: Opcode, engine: &mut Engine) {
    engine.i = u16::from(engine.v[op.x()]) * SPRITE_BYTES;
}

/// mem[I..I+3] = bcd(Vx)
/// Store BCD repr of Vx in memory starting at address i
pub fn bcd(op: Opcode, engine: &mut Engine) {
    let value = engine.v[op.x()];
    let digits = [value / 100, value / 10 % 10, value % 10];
    for (offset, digit) in digits.iter().enumerate() {
        engine.write(engine.i.wrapping_add(offset as u16), *digit);
    }
}

/// mem[I..=I+x] = V0..=Vx
/// I itself is left unchanged
pub fn stor(op: Opcode, engine: &mut Engine) {
    for register in 0..=op.x() {
        engine.write(engine.i.wrapping_add(register as u16), engine.v[register]);
    }
}

/// V0..=Vx = mem[I..=I+x]
/// I itself is left unchanged
pub fn read(op: Opcode, engine: &mut Engine) {
    for register in 0..=op.x() {
        engine.v[register] = engine.read(engine.i.wrapping_add(register as u16));
    }
}
