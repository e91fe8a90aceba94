//! Typewriter sequencing as an explicit step machine.
//!
//! The web frontend drives this from an async task, sleeping `delay_ms`
//! after applying each step; keeping the sequencing here makes the visit
//! order and pacing testable without a browser.

use rand::Rng;

use crate::constants::{TYPE_CHAR_DELAY_MS, TYPE_LINE_PAUSE_MS, TYPE_REDUCED_HOLD_MS};

#[derive(Clone, Debug)]
pub struct TypewriterConfig {
    /// Inclusive per-character delay range.
    pub char_delay_ms: (u64, u64),
    /// Pause after each completed line.
    pub line_pause_ms: u64,
    /// How long a line is held when shown instantly under reduced motion.
    pub reduced_hold_ms: u64,
    /// Repeat the whole sequence indefinitely.
    pub loop_lines: bool,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            char_delay_ms: TYPE_CHAR_DELAY_MS,
            line_pause_ms: TYPE_LINE_PAUSE_MS,
            reduced_hold_ms: TYPE_REDUCED_HOLD_MS,
            loop_lines: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeAction {
    /// Replace the display text wholesale.
    SetText(String),
    /// Append one character to the display text.
    AppendChar(char),
    /// Leave the text as-is for the duration of the step.
    Hold,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeStep {
    pub action: TypeAction,
    pub delay_ms: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    LineStart,
    Typing,
    LineEnd,
    Finished,
}

pub struct TypewriterScript {
    lines: Vec<String>,
    config: TypewriterConfig,
    reduced_motion: bool,
    line: usize,
    chars: Vec<char>,
    pos: usize,
    phase: Phase,
}

impl TypewriterScript {
    pub fn new(lines: Vec<String>, config: TypewriterConfig, reduced_motion: bool) -> Self {
        let phase = if lines.is_empty() {
            Phase::Finished
        } else {
            Phase::LineStart
        };
        Self {
            lines,
            config,
            reduced_motion,
            line: 0,
            chars: Vec::new(),
            pos: 0,
            phase,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Produce the next step, or `None` once a non-looping run has played
    /// every line. A looping script never returns `None`.
    pub fn next_step<R: Rng>(&mut self, rng: &mut R) -> Option<TypeStep> {
        loop {
            match self.phase {
                Phase::Finished => return None,
                Phase::LineStart => {
                    let line = self.lines.get(self.line)?;
                    if self.reduced_motion {
                        let text = line.clone();
                        self.phase = Phase::LineEnd;
                        return Some(TypeStep {
                            action: TypeAction::SetText(text),
                            delay_ms: self.config.reduced_hold_ms,
                        });
                    }
                    self.chars = line.chars().collect();
                    self.pos = 0;
                    self.phase = Phase::Typing;
                    return Some(TypeStep {
                        action: TypeAction::SetText(String::new()),
                        delay_ms: 0,
                    });
                }
                Phase::Typing => {
                    if self.pos < self.chars.len() {
                        let ch = self.chars[self.pos];
                        self.pos += 1;
                        let (lo, hi) = self.config.char_delay_ms;
                        return Some(TypeStep {
                            action: TypeAction::AppendChar(ch),
                            delay_ms: rng.gen_range(lo.min(hi)..=lo.max(hi)),
                        });
                    }
                    self.phase = Phase::LineEnd;
                }
                Phase::LineEnd => {
                    self.advance_line();
                    return Some(TypeStep {
                        action: TypeAction::Hold,
                        delay_ms: self.config.line_pause_ms,
                    });
                }
            }
        }
    }

    fn advance_line(&mut self) {
        self.line += 1;
        if self.line < self.lines.len() {
            self.phase = Phase::LineStart;
        } else if self.config.loop_lines && !self.lines.is_empty() {
            self.line = 0;
            self.phase = Phase::LineStart;
        } else {
            self.phase = Phase::Finished;
        }
    }
}
