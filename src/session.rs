// src/session.rs
//! Headless state of the interactive cipher tool
//!
//! Holds what the user typed, the chosen shift and direction, and the derived
//! output. Every setter recomputes the output, so `result()` is always in
//! sync with the inputs.

use crate::core::{transform, Shift};
use crate::enums::Mode;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    input: String,
    shift: Shift,
    mode: Mode,
    result: String,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from configured defaults instead of the built-in ones
    pub fn with_settings(shift: Shift, mode: Mode) -> Self {
        Self {
            shift,
            mode,
            ..Self::default()
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn shift(&self) -> Shift {
        self.shift
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    /// Whether there is anything worth copying out
    pub fn has_result(&self) -> bool {
        !self.result.is_empty()
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
        self.refresh();
    }

    pub fn set_shift(&mut self, shift: Shift) {
        self.shift = shift;
        self.refresh();
    }

    /// Apply raw text from the shift box; see [`Shift::resolve_input`]
    pub fn set_shift_input(&mut self, raw: &str) {
        self.set_shift(Shift::resolve_input(self.shift, raw));
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.refresh();
    }

    pub fn toggle_mode(&mut self) {
        self.set_mode(self.mode.toggled());
    }

    /// Clear the text and restore the default shift. The mode is kept.
    pub fn reset(&mut self) {
        self.input.clear();
        self.result.clear();
        self.shift = Shift::DEFAULT;
    }

    fn refresh(&mut self) {
        self.result = if self.input.is_empty() {
            String::new()
        } else {
            transform(&self.input, self.shift.into(), self.mode)
        };
    }
}
