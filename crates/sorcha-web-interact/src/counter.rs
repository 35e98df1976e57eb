//! Stat counter animation frames.

/// Number of increments from zero to the target.
pub const STEPS: u32 = 50;

/// Interval between frames, in milliseconds.
pub const TICK_MS: i32 = 30;

/// A numeric stat such as `12` or `80%`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatTarget {
    value: i64,
    percent: bool,
}

impl StatTarget {
    /// Parse the text of a stat element. Returns `None` for anything that is
    /// not a number with an optional trailing `%`, such as `∞` or `10k+`.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let (number, percent) = match text.strip_suffix('%') {
            Some(number) => (number.trim_end(), true),
            None => (text, false),
        };

        if number.is_empty() {
            return None;
        }

        let value: f64 = number.parse().ok()?;
        if !value.is_finite() {
            return None;
        }

        Some(Self {
            value: value.trunc() as i64,
            percent,
        })
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    /// Render `n` with this stat's suffix.
    pub fn format(&self, n: i64) -> String {
        if self.percent {
            format!("{}%", n)
        } else {
            n.to_string()
        }
    }

    /// Frames to display, one per tick, starting after the first interval.
    pub fn frames(&self) -> Counter {
        Counter {
            target: *self,
            current: 0.0,
            increment: self.value as f64 / STEPS as f64,
            done: false,
        }
    }
}

/// Iterator over the text shown on each tick of a counter animation.
///
/// Intermediate frames show the floor of the running total, which stays below
/// the target; the last frame is the exact target.
#[derive(Debug, Clone)]
pub struct Counter {
    target: StatTarget,
    current: f64,
    increment: f64,
    done: bool,
}

impl Counter {
    /// Whether the final frame has been produced.
    pub fn is_done(&self) -> bool {
        self.done
    }
}

impl Iterator for Counter {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }

        self.current += self.increment;
        let target = self.target.value as f64;

        if self.current >= target {
            self.done = true;
            Some(self.target.format(self.target.value))
        } else {
            Some(self.target.format(self.current.floor() as i64))
        }
    }
}
