use core::convert::TryFrom;

use heapless::{consts::U16, Vec};
use log::{debug, trace, warn};

use crate::context::Context;
use crate::frame::{Frame, FrameView};
use crate::opcode::OpCode;
use crate::timer::{Timer, TimerState};

const MEM_SIZE: usize = 4096;
const PROG_START: u16 = 0x200;

/// Font sprites for hexadecimal digits 0-F, 5 bytes per glyph, kept at
/// the bottom of memory so that FX29 resolves a glyph address as VX * 5
const FONT: [u8; 80] = [
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

/// Result of a single interpreter step
///
/// The machine never blocks on input; a key-wait instruction that finds
/// no key down reports `AwaitingKey` with the program counter rewound,
/// so the same instruction re-executes on the next step. The driver
/// decides whether to retry immediately or yield.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Status {
    Running,
    AwaitingKey,
}

/// The CHIP-8 machine: registers, memory, stack, timers and framebuffer,
/// stepped by an external driver
///
/// `tick_chip` executes exactly one instruction; `tick_timers` decrements
/// the two countdown timers and is meant to be called at a fixed rate
/// (conventionally 60 Hz) independent of the instruction rate. All
/// platform I/O goes through the injected [`Context`].
pub struct Crisp8<C: Context + Sized> {
    ctx: C,
    v: [u8; 16],
    i: u16,
    pc: u16,
    frame: Frame,
    memory: [u8; MEM_SIZE],
    stack: Vec<u16, U16>,
    delay_timer: Timer,
    sound_timer: Timer,
}

impl<C: Context + Sized> Crisp8<C> {
    pub fn new(ctx: C) -> Self {
        let mut memory = [0; MEM_SIZE];
        memory[..FONT.len()].copy_from_slice(&FONT);
        Self {
            ctx,
            v: [0; 16],
            i: 0,
            pc: PROG_START,
            frame: Frame::new(),
            memory,
            stack: Vec::new(),
            delay_timer: Timer::new(),
            sound_timer: Timer::new(),
        }
    }

    /// Create a machine with `prog` already loaded
    pub fn load(ctx: C, prog: &[u8]) -> Self {
        let mut chip = Self::new(ctx);
        chip.load_program(prog);
        chip
    }

    /// Load program from slice of bytes to memory from 0x200 (_start address)
    ///
    /// Bytes past the end of memory are dropped.
    pub fn load_program(&mut self, prog: &[u8]) {
        self.memory[PROG_START as usize..]
            .iter_mut()
            .zip(prog)
            .for_each(|(mem, &prog)| *mem = prog);
        debug!("loaded {} byte program at {:#05X}", prog.len(), PROG_START);
    }

    /// View over the current frame, for the rendering collaborator
    pub fn frame(&self) -> FrameView<'_> {
        self.frame.view()
    }

    pub fn context(&self) -> &C {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut C {
        &mut self.ctx
    }

    /// Read the 16-bit word at pc, big-endian, and advance pc by 2
    fn fetch(&mut self) -> Result<u16, &'static str> {
        let pc = self.pc as usize;
        if pc + 1 >= MEM_SIZE {
            return Err("Attempted to fetch out of address space");
        }
        let word = u16::from(self.memory[pc]) << 8 | u16::from(self.memory[pc + 1]);
        self.pc += 2;
        Ok(word)
    }

    /// Fetch, decode and execute a single instruction
    ///
    /// Words that decode to no known opcode are ignored and execution
    /// continues; bounds violations poison the machine instance.
    pub fn tick_chip(&mut self) -> Result<Status, &'static str> {
        let raw = self.fetch()?;
        match OpCode::try_from(raw) {
            Ok(opcode) => {
                trace!(
                    "{:04X} -> {:X?} i: {:#05X} pc: {:#05X}",
                    raw,
                    opcode,
                    self.i,
                    self.pc,
                );
                self.execute(opcode)
            }
            Err(_) => {
                warn!("ignoring unrecognized opcode {:#06X}", raw);
                Ok(Status::Running)
            }
        }
    }

    /// Decrement delay and sound timers once
    ///
    /// Driven by the caller at a fixed real-time rate, decoupled from
    /// the instruction rate. Lowers the sound trigger when the sound
    /// timer runs out.
    pub fn tick_timers(&mut self) {
        self.delay_timer.decrement();
        if self.sound_timer.decrement() == TimerState::Finished {
            self.ctx.sound_off();
        }
    }
}

// OpCodes impls
impl<C: Context + Sized> Crisp8<C> {
    #[rustfmt::skip]
    fn execute(&mut self, opcode: OpCode) -> Result<Status, &'static str> {
        match opcode {
            OpCode::_0NNN { nnn }     => self.exec_ml_subroutine_at(nnn),
            OpCode::_00E0             => self.clear_screen(),
            OpCode::_00EE             => self.subroutine_return(),
            OpCode::_1NNN { nnn }     => self.jump_to(nnn),
            OpCode::_2NNN { nnn }     => self.exec_subroutine_at(nnn),
            OpCode::_3XNN { x, nn }   => self.skip_if_vx_eq_nn(x, nn),
            OpCode::_4XNN { x, nn }   => self.skip_if_vx_ne_nn(x, nn),
            OpCode::_5XY0 { x, y }    => self.skip_if_vx_eq_vy(x, y),
            OpCode::_6XNN { x, nn }   => self.assign_vx_nn(x, nn),
            OpCode::_7XNN { x, nn }   => self.assign_add_vx_nn(x, nn),
            OpCode::_8XY0 { x, y }    => self.assign_vx_vy(x, y),
            OpCode::_8XY1 { x, y }    => self.assign_or_vx_vy(x, y),
            OpCode::_8XY2 { x, y }    => self.assign_and_vx_vy(x, y),
            OpCode::_8XY3 { x, y }    => self.assign_xor_vx_vy(x, y),
            OpCode::_8XY4 { x, y }    => self.assign_add_vx_vy(x, y),
            OpCode::_8XY5 { x, y }    => self.assign_sub_vx_vy(x, y),
            OpCode::_8XY6 { x, .. }   => self.assign_vx_shifted_r(x),
            OpCode::_8XY7 { x, y }    => self.assign_vx_vy_sub_vx(x, y),
            OpCode::_8XYE { x, .. }   => self.assign_vx_shifted_l(x),
            OpCode::_9XY0 { x, y }    => self.skip_if_vx_ne_vy(x, y),
            OpCode::_ANNN { nnn }     => self.assign_i_nnn(nnn),
            OpCode::_BNNN { nnn }     => self.jump_to_nnn_add_v0(nnn),
            OpCode::_CXNN { x, nn }   => self.assign_vx_random_in_nn(x, nn),
            OpCode::_DXYN { x, y, n } => self.draw_n_at_vx_vy(x, y, n),
            OpCode::_EX9E { x }       => self.skip_if_vx_in_keys(x),
            OpCode::_EXA1 { x }       => self.skip_if_vx_not_in_keys(x),
            OpCode::_FX07 { x }       => self.assign_vx_delay_t(x),
            OpCode::_FX0A { x }       => return self.assign_vx_wait_for_key(x),
            OpCode::_FX15 { x }       => self.assign_delay_t_vx(x),
            OpCode::_FX18 { x }       => self.assign_sound_t_vx(x),
            OpCode::_FX1E { x }       => self.assign_add_i_vx(x),
            OpCode::_FX29 { x }       => self.assign_i_addr_of_sprite_vx(x),
            OpCode::_FX33 { x }       => self.assign_mem_at_i_bcd_of_vx(x),
            OpCode::_FX55 { x }       => self.assign_mem_at_i_v0_to_vx(x),
            OpCode::_FX65 { x }       => self.assign_v0_to_vx_mem_at_i(x),
        }
        .map(|_| Status::Running)
    }

    /// Execute machine language subroutine at address NNN
    /// 0NNN { nnn: u16 },
    ///
    /// There is no host machine code to run; treated as a no-op.
    fn exec_ml_subroutine_at(&mut self, _nnn: u16) -> Result<(), &'static str> {
        Ok(())
    }

    /// Clear the screen
    /// 00E0,
    fn clear_screen(&mut self) -> Result<(), &'static str> {
        self.frame.clear();
        Ok(())
    }

    /// Return from a subroutine
    /// 00EE,
    fn subroutine_return(&mut self) -> Result<(), &'static str> {
        self.stack
            .pop()
            .ok_or("Can't return. Not in subroutine")
            .map(|addr| self.pc = addr)
    }

    /// Jump to address NNN
    /// 1NNN { nnn: u16 },
    fn jump_to(&mut self, nnn: u16) -> Result<(), &'static str> {
        self.pc = nnn;
        Ok(())
    }

    /// Execute subroutine starting at address NNN
    /// 2NNN { nnn: u16 },
    fn exec_subroutine_at(&mut self, nnn: u16) -> Result<(), &'static str> {
        self.stack
            .push(self.pc)
            .or(Err("Cannot enter subroutine, stack is full"))
            .map(|_| self.pc = nnn)
    }

    /// Skip the following instruction if the value of register VX equals NN
    /// 3XNN { x: u8, nn: u8 },
    fn skip_if_vx_eq_nn(&mut self, x: u8, nn: u8) -> Result<(), &'static str> {
        if self.v[x as usize] == nn {
            self.pc += 2;
        }
        Ok(())
    }

    /// Skip the following instruction if the value of register VX is not equal to NN
    /// 4XNN { x: u8, nn: u8 },
    fn skip_if_vx_ne_nn(&mut self, x: u8, nn: u8) -> Result<(), &'static str> {
        if self.v[x as usize] != nn {
            self.pc += 2;
        }
        Ok(())
    }

    /// Skip the following instruction if the value of register VX is equal to the value of register VY
    /// 5XY0 { x: u8, y: u8 },
    fn skip_if_vx_eq_vy(&mut self, x: u8, y: u8) -> Result<(), &'static str> {
        if self.v[x as usize] == self.v[y as usize] {
            self.pc += 2;
        }
        Ok(())
    }

    /// Store number NN in register VX
    /// 6XNN { x: u8, nn: u8 },
    fn assign_vx_nn(&mut self, x: u8, nn: u8) -> Result<(), &'static str> {
        self.v[x as usize] = nn;
        Ok(())
    }

    /// Add the value NN to register VX
    /// 7XNN { x: u8, nn: u8 },
    ///
    /// On carry VF is raised; without one VF keeps its previous value.
    fn assign_add_vx_nn(&mut self, x: u8, nn: u8) -> Result<(), &'static str> {
        let (value, carry) = self.v[x as usize].overflowing_add(nn);
        self.v[x as usize] = value;
        if carry {
            self.v[0xF] = 0x01u8;
        }
        Ok(())
    }

    /// Store the value of register VY in register VX
    /// 8XY0 { x: u8, y: u8 },
    fn assign_vx_vy(&mut self, x: u8, y: u8) -> Result<(), &'static str> {
        self.v[x as usize] = self.v[y as usize];
        Ok(())
    }

    /// Set VX to VX OR VY
    /// 8XY1 { x: u8, y: u8 },
    fn assign_or_vx_vy(&mut self, x: u8, y: u8) -> Result<(), &'static str> {
        self.v[x as usize] |= self.v[y as usize];
        Ok(())
    }

    /// Set VX to VX AND VY
    /// 8XY2 { x: u8, y: u8 },
    fn assign_and_vx_vy(&mut self, x: u8, y: u8) -> Result<(), &'static str> {
        self.v[x as usize] &= self.v[y as usize];
        Ok(())
    }

    /// Set VX to VX XOR VY
    /// 8XY3 { x: u8, y: u8 },
    fn assign_xor_vx_vy(&mut self, x: u8, y: u8) -> Result<(), &'static str> {
        self.v[x as usize] ^= self.v[y as usize];
        Ok(())
    }

    /// Add the value of register VY to register VX, Set VF to 01 if a carry occurs, Set VF to 00 if a carry does not occur
    /// 8XY4 { x: u8, y: u8 },
    fn assign_add_vx_vy(&mut self, x: u8, y: u8) -> Result<(), &'static str> {
        let (value, overflow) = self.v[x as usize].overflowing_add(self.v[y as usize]);
        self.v[x as usize] = value;
        self.v[0xF] = if !overflow { 0x00u8 } else { 0x01u8 };
        Ok(())
    }

    /// Subtract the value of register VY from register VX, Set VF to 00 if a borrow occurs, Set VF to 01 if a borrow does not occur
    /// 8XY5 { x: u8, y: u8 },
    fn assign_sub_vx_vy(&mut self, x: u8, y: u8) -> Result<(), &'static str> {
        let (value, borrow) = self.v[x as usize].overflowing_sub(self.v[y as usize]);
        self.v[x as usize] = value;
        self.v[0xF] = if borrow { 0x00u8 } else { 0x01u8 };
        Ok(())
    }

    /// Shift VX right one bit, Set register VF to the least significant bit prior to the shift
    /// 8XY6 { x: u8, y: u8 },
    fn assign_vx_shifted_r(&mut self, x: u8) -> Result<(), &'static str> {
        let vx = self.v[x as usize];
        self.v[x as usize] = vx >> 1;
        self.v[0xF] = vx & 0x01u8;
        Ok(())
    }

    /// Set register VX to the value of VY minus VX, Set VF to 00 if a borrow occurs, Set VF to 01 if a borrow does not occur
    /// 8XY7 { x: u8, y: u8 },
    fn assign_vx_vy_sub_vx(&mut self, x: u8, y: u8) -> Result<(), &'static str> {
        let (value, borrow) = self.v[y as usize].overflowing_sub(self.v[x as usize]);
        self.v[x as usize] = value;
        self.v[0xF] = if borrow { 0x00u8 } else { 0x01u8 };
        Ok(())
    }

    /// Shift VX left one bit, Set register VF to the most significant bit prior to the shift
    /// 8XYE { x: u8, y: u8 },
    fn assign_vx_shifted_l(&mut self, x: u8) -> Result<(), &'static str> {
        let vx = self.v[x as usize];
        self.v[x as usize] = vx << 1;
        self.v[0xF] = vx >> 7;
        Ok(())
    }

    /// Skip the following instruction if the value of register VX is not equal to the value of register VY
    /// 9XY0 { x: u8, y: u8 },
    fn skip_if_vx_ne_vy(&mut self, x: u8, y: u8) -> Result<(), &'static str> {
        if self.v[x as usize] != self.v[y as usize] {
            self.pc += 2;
        }
        Ok(())
    }

    /// Store memory address NNN in register I
    /// ANNN { nnn: u16 },
    fn assign_i_nnn(&mut self, nnn: u16) -> Result<(), &'static str> {
        self.i = nnn;
        Ok(())
    }

    /// Jump to address NNN + V0, modulo the addressable memory size
    /// BNNN { nnn: u16 },
    fn jump_to_nnn_add_v0(&mut self, nnn: u16) -> Result<(), &'static str> {
        self.pc = (u16::from(self.v[0]) + nnn) % (MEM_SIZE as u16);
        Ok(())
    }

    /// Set VX to a uniformly distributed random number in 0..=NN
    /// CXNN { x: u8, nn: u8 },
    fn assign_vx_random_in_nn(&mut self, x: u8, nn: u8) -> Result<(), &'static str> {
        let random = u16::from(self.ctx.gen_random());
        self.v[x as usize] = (random % (u16::from(nn) + 1)) as u8;
        Ok(())
    }

    /// Draw a sprite at position VX, VY with N bytes of sprite data starting at the address stored in I, Set VF to 01 if any set pixels are changed to unset, and 00 otherwise
    /// DXYN { x: u8, y: u8, n: u8 },
    fn draw_n_at_vx_vy(&mut self, x: u8, y: u8, n: u8) -> Result<(), &'static str> {
        if self.i as usize + n as usize > self.memory.len() {
            return Err("Attempted to read sprite data out of address space");
        }
        let vx = self.v[x as usize] as usize;
        let vy = self.v[y as usize] as usize;
        self.v[0xF] = 0x00u8;
        for row in 0..n as usize {
            let bits = self.memory[self.i as usize + row];
            if self.frame.draw_row(vx, vy + row, bits) {
                self.v[0xF] = 0x01u8;
            }
        }
        Ok(())
    }

    /// Skip the following instruction if the key corresponding to the hex value currently stored in register VX is pressed
    /// EX9E { x: u8 },
    fn skip_if_vx_in_keys(&mut self, x: u8) -> Result<(), &'static str> {
        let key = self.v[x as usize] & 0x0Fu8;
        if self.ctx.is_down(key) {
            self.pc += 2;
        }
        Ok(())
    }

    /// Skip the following instruction if the key corresponding to the hex value currently stored in register VX is not pressed
    /// EXA1 { x: u8 },
    fn skip_if_vx_not_in_keys(&mut self, x: u8) -> Result<(), &'static str> {
        let key = self.v[x as usize] & 0x0Fu8;
        if !self.ctx.is_down(key) {
            self.pc += 2;
        }
        Ok(())
    }

    /// Store the current value of the delay timer in register VX
    /// FX07 { x: u8 },
    fn assign_vx_delay_t(&mut self, x: u8) -> Result<(), &'static str> {
        self.v[x as usize] = self.delay_timer.load();
        Ok(())
    }

    /// Wait for a keypress and store the result in register VX
    /// FX0A { x: u8 },
    ///
    /// Never blocks. With no key down the pc rewinds over this
    /// instruction and the caller is told the machine is waiting, so the
    /// query repeats on the next step.
    fn assign_vx_wait_for_key(&mut self, x: u8) -> Result<Status, &'static str> {
        match self.ctx.poll_any() {
            Some(key) => {
                self.v[x as usize] = key;
                Ok(Status::Running)
            }
            None => {
                self.pc -= 2;
                Ok(Status::AwaitingKey)
            }
        }
    }

    /// Set the delay timer to the value of register VX
    /// FX15 { x: u8 },
    fn assign_delay_t_vx(&mut self, x: u8) -> Result<(), &'static str> {
        self.delay_timer.store(self.v[x as usize]);
        Ok(())
    }

    /// Set the sound timer to the value of register VX
    /// FX18 { x: u8 },
    fn assign_sound_t_vx(&mut self, x: u8) -> Result<(), &'static str> {
        let value = self.v[x as usize];
        self.sound_timer.store(value);
        if value > 0 {
            self.ctx.sound_on();
        } else {
            self.ctx.sound_off();
        }
        Ok(())
    }

    /// Add the value stored in register VX to register I, modulo the addressable memory size
    /// FX1E { x: u8 },
    ///
    /// On overflow past the address space VF is raised; otherwise VF
    /// keeps its previous value.
    fn assign_add_i_vx(&mut self, x: u8) -> Result<(), &'static str> {
        let sum = self.i + u16::from(self.v[x as usize]);
        if sum >= MEM_SIZE as u16 {
            self.v[0xF] = 0x01u8;
        }
        self.i = sum % (MEM_SIZE as u16);
        Ok(())
    }

    /// Set I to the memory address of the sprite data corresponding to the hexadecimal digit stored in register VX
    /// FX29 { x: u8 },
    fn assign_i_addr_of_sprite_vx(&mut self, x: u8) -> Result<(), &'static str> {
        self.i = u16::from(self.v[x as usize]) * 5;
        Ok(())
    }

    /// Store the binary-coded decimal equivalent of the value stored in register VX at addresses I, I+1, and I+2
    /// FX33 { x: u8 },
    fn assign_mem_at_i_bcd_of_vx(&mut self, x: u8) -> Result<(), &'static str> {
        if ((self.i + 2) as usize) < self.memory.len() {
            let value = self.v[x as usize];
            self.memory[self.i as usize] = value / 100u8;
            self.memory[(self.i + 1) as usize] = (value % 100) / 10u8;
            self.memory[(self.i + 2) as usize] = value % 10u8;
            Ok(())
        } else {
            Err("Attempted to set memory out of address space")
        }
    }

    /// Store the values of registers V0 to VX inclusive in memory starting at address I
    /// FX55 { x: u8 },
    fn assign_mem_at_i_v0_to_vx(&mut self, x: u8) -> Result<(), &'static str> {
        if self.i as usize + x as usize >= self.memory.len() {
            return Err("Attempted to store data out of address space");
        }
        for idx in 0..=x as usize {
            self.memory[self.i as usize + idx] = self.v[idx];
        }
        Ok(())
    }

    /// Fill registers V0 to VX inclusive with the values stored in memory starting at address I
    /// FX65 { x: u8 },
    fn assign_v0_to_vx_mem_at_i(&mut self, x: u8) -> Result<(), &'static str> {
        if self.i as usize + x as usize >= self.memory.len() {
            return Err("Attempted to load memory out of address space");
        }
        for idx in 0..=x as usize {
            self.v[idx] = self.memory[self.i as usize + idx];
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::testing::TestingContext;

    #[test]
    fn fonts_loaded_at_construction() {
        let chip = Crisp8::new(TestingContext::new(0));
        assert_eq!(&chip.memory[..5], &[0xF0, 0x90, 0x90, 0x90, 0xF0]);
        assert_eq!(&chip.memory[0x4B..0x50], &[0xF0, 0x80, 0xF0, 0x80, 0x80]);
        assert!(chip.memory[0x50..].iter().all(|&b| b == 0));
    }

    #[test]
    fn load_program_copies_at_0x200() {
        let mut chip = Crisp8::new(TestingContext::new(0));
        chip.load_program(&[0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(&chip.memory[0x200..0x204], &[0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(chip.memory[0x204], 0x00);
    }

    #[test]
    fn load_program_truncates_at_end_of_memory() {
        let prog = [0xABu8; MEM_SIZE];
        let chip = Crisp8::load(TestingContext::new(0), &prog);
        assert_eq!(chip.memory[MEM_SIZE - 1], 0xAB);
        // Fonts are left alone
        assert_eq!(chip.memory[0], 0xF0);
    }

    #[test]
    fn fetch_reads_big_endian_and_advances() {
        let mut chip = Crisp8::load(TestingContext::new(0), &[0xAA, 0xBB, 0xCC, 0xDD]);
        assert_eq!(chip.fetch(), Ok(0xAABBu16));
        assert_eq!(chip.pc, 0x202u16);
        assert_eq!(chip.fetch(), Ok(0xCCDDu16));
        assert_eq!(chip.pc, 0x204u16);
    }

    #[test]
    fn fetch_out_of_address_space_fails() {
        let mut chip = Crisp8::new(TestingContext::new(0));
        chip.pc = 0x0FFEu16;
        assert!(chip.fetch().is_ok());
        assert_eq!(chip.pc, 0x1000u16);
        assert_eq!(chip.fetch(), Err("Attempted to fetch out of address space"));
    }

    #[test]
    fn tick_chip_treats_unknown_opcode_as_noop() {
        // FX00 decodes to nothing known
        let mut chip = Crisp8::load(TestingContext::new(0), &[0xFA, 0x00]);
        assert_eq!(chip.tick_chip(), Ok(Status::Running));
        assert_eq!(chip.pc, 0x202u16);
        assert_eq!(chip.v, [0; 16]);
    }

    #[test]
    fn tick_timers_decrements_both_and_floors_at_zero() {
        let mut chip = Crisp8::new(TestingContext::new(0));
        chip.delay_timer.store(2);
        chip.tick_timers();
        assert_eq!(chip.delay_timer.load(), 1);
        chip.tick_timers();
        chip.tick_timers();
        assert_eq!(chip.delay_timer.load(), 0);
        assert_eq!(chip.sound_timer.load(), 0);
    }

    #[test]
    fn tick_timers_lowers_sound_trigger_when_finished() {
        let mut chip = Crisp8::new(TestingContext::new(0));
        chip.assign_vx_nn(0, 2).unwrap();
        chip.assign_sound_t_vx(0).unwrap();
        assert!(chip.ctx.is_sound_on());
        chip.tick_timers();
        assert!(chip.ctx.is_sound_on());
        chip.tick_timers();
        assert!(!chip.ctx.is_sound_on());
    }
}
