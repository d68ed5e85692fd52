//! Hero typing effect
//!
//! Types a role one character at a time, holds it, deletes it, then moves on
//! to the next role. Time is supplied by the caller through
//! [`Typewriter::advance`], so the render loop drives it and tests can step
//! it exactly.

use std::time::Duration;

use crate::constants::typing::{DELETE_DELAY, HOLD_DELAY, TYPE_DELAY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    /// Role fully typed, waiting before deleting
    Holding,
    Deleting,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    roles: Vec<String>,
    role_idx: usize,
    /// Visible prefix length, in chars
    visible: usize,
    phase: Phase,
    /// Time left until the next step
    until_next: Duration,
}

impl Typewriter {
    pub fn new(roles: Vec<String>) -> Self {
        Self {
            roles,
            role_idx: 0,
            visible: 0,
            phase: Phase::Typing,
            until_next: TYPE_DELAY,
        }
    }

    /// Currently visible text
    pub fn text(&self) -> &str {
        let Some(role) = self.roles.get(self.role_idx) else {
            return "";
        };
        match role.char_indices().nth(self.visible) {
            Some((byte_idx, _)) => &role[..byte_idx],
            None => role,
        }
    }

    pub fn role_index(&self) -> usize {
        self.role_idx
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Advance the clock. Returns true if the visible text changed.
    pub fn advance(&mut self, mut elapsed: Duration) -> bool {
        if self.roles.is_empty() {
            return false;
        }

        let mut changed = false;
        while elapsed >= self.until_next {
            elapsed -= self.until_next;
            changed |= self.step();
        }
        self.until_next -= elapsed;
        changed
    }

    fn role_len(&self) -> usize {
        self.roles[self.role_idx].chars().count()
    }

    fn step(&mut self) -> bool {
        match self.phase {
            Phase::Typing => {
                let full = self.role_len();
                let changed = self.visible < full;
                if changed {
                    self.visible += 1;
                }
                if self.visible >= full {
                    self.phase = Phase::Holding;
                    self.until_next = HOLD_DELAY;
                } else {
                    self.until_next = TYPE_DELAY;
                }
                changed
            }
            Phase::Holding => {
                self.phase = Phase::Deleting;
                self.until_next = DELETE_DELAY;
                false
            }
            Phase::Deleting => {
                let changed = self.visible > 0;
                self.visible = self.visible.saturating_sub(1);
                if self.visible == 0 {
                    self.role_idx = (self.role_idx + 1) % self.roles.len();
                    self.phase = Phase::Typing;
                    self.until_next = TYPE_DELAY;
                } else {
                    self.until_next = DELETE_DELAY;
                }
                changed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_types_one_char_per_delay() {
        let mut tw = Typewriter::new(vec!["Rust".to_string(), "Go".to_string()]);
        assert_eq!(tw.text(), "");
        assert!(!tw.advance(ms(94)));
        assert!(tw.advance(ms(1)));
        assert_eq!(tw.text(), "R");
        tw.advance(ms(95 * 3));
        assert_eq!(tw.text(), "Rust");
        assert_eq!(tw.phase(), Phase::Holding);
    }

    #[test]
    fn test_holds_then_deletes_then_next_role() {
        let mut tw = Typewriter::new(vec!["Rust".to_string(), "Go".to_string()]);
        tw.advance(ms(95 * 4));
        // Hold, then the first deletion 45ms later
        tw.advance(ms(1300 + 44));
        assert_eq!(tw.text(), "Rust");
        tw.advance(ms(1));
        assert_eq!(tw.text(), "Rus");
        tw.advance(ms(45 * 3));
        assert_eq!(tw.text(), "");
        assert_eq!(tw.role_index(), 1);
        tw.advance(ms(95));
        assert_eq!(tw.text(), "G");
    }

    #[test]
    fn test_wraps_to_first_role() {
        let mut tw = Typewriter::new(vec!["A".to_string(), "B".to_string()]);
        // Per role: type 95 + hold 1300 + delete 45
        tw.advance(ms((95 + 1300 + 45) * 2));
        assert_eq!(tw.role_index(), 0);
        assert_eq!(tw.text(), "");
    }

    #[test]
    fn test_multibyte_roles() {
        let mut tw = Typewriter::new(vec!["héllo".to_string()]);
        tw.advance(ms(95 * 2));
        assert_eq!(tw.text(), "hé");
    }

    #[test]
    fn test_no_roles() {
        let mut tw = Typewriter::new(Vec::new());
        assert!(!tw.advance(ms(10_000)));
        assert_eq!(tw.text(), "");
    }
}
