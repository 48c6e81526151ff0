//! Context for accessing functionalities of the platform that `Crisp8` is
//! emulated on.
//!
//! The machine core performs no I/O of its own: key sampling, randomness
//! and the sound trigger all come through this trait, injected at
//! construction. Implementations back the queries with whatever the
//! platform provides; the core only ever issues instantaneous,
//! non-blocking calls.

/// Trait aggregating platform functionalities
pub trait Context {
    /// Report whether key `key` (`0x0..=0xF`) is currently pressed
    ///
    /// Instantaneous query with no memory of past state.
    fn is_down(&mut self, key: u8) -> bool;
    /// Return the first currently pressed key, if any
    ///
    /// Must never block. Key-wait semantics are built by the machine
    /// re-executing the waiting instruction on successive steps until
    /// this returns a key.
    fn poll_any(&mut self) -> Option<u8>;
    /// Generate a random 8-bit number
    ///
    /// The only source of nondeterminism in the machine; the context
    /// owns seeding.
    fn gen_random(&mut self) -> u8;
    /// Raise the sound trigger
    ///
    /// Called when the sound timer is loaded with a non-zero value.
    fn sound_on(&mut self);
    /// Lower the sound trigger
    ///
    /// Called by `tick_timers` when the sound timer counts down to zero.
    fn sound_off(&mut self);
}
