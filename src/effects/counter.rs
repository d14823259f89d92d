/// One frame of a counter animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterFrame {
    Running(u64),
    Done(u64),
}

impl CounterFrame {
    pub fn value(self) -> u64 {
        match self {
            CounterFrame::Running(v) | CounterFrame::Done(v) => v,
        }
    }
}

/// Counts from zero up to `target` in equal steps, one per tick.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    increment: f64,
    current: f64,
}

impl CounterAnimation {
    pub fn new(target: u64, duration_ms: u32, tick_ms: u32) -> Self {
        let ticks = (duration_ms as f64 / tick_ms.max(1) as f64).max(1.0);
        Self {
            target,
            increment: target as f64 / ticks,
            current: 0.0,
        }
    }

    pub fn tick(&mut self) -> CounterFrame {
        self.current += self.increment;
        if self.current >= self.target as f64 {
            CounterFrame::Done(self.target)
        } else {
            CounterFrame::Running(self.current.floor() as u64)
        }
    }
}

/// Parse a `data-counter` attribute the way `parseInt` would: leading digits only.
pub fn parse_counter_target(raw: &str) -> Option<u64> {
    let digits: String = raw
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// `1234567` -> `"1,234,567"`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
