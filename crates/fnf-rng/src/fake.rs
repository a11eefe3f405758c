//! Deterministic fakes for replay testing

use crate::Rnd;

/// Always answers the same value, clamped into the requested range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedRnd {
    value: i32,
}

impl FixedRnd {
    pub fn new(value: i32) -> Self {
        Self { value }
    }

    /// Always returns the minimum of the requested range.
    pub fn min() -> Self {
        Self::new(i32::MIN)
    }

    /// Always returns the maximum of the requested range.
    pub fn max() -> Self {
        Self::new(i32::MAX)
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn set_value(&mut self, value: i32) {
        self.value = value;
    }
}

impl Rnd for FixedRnd {
    fn next_uniform(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        self.value.clamp(min, max)
    }
}

/// Walks upward through each requested range, one step per call.
///
/// The n-th call (counting from zero) answers `min + n % (max - min + 1)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AscendingRnd {
    calls: u64,
}

impl AscendingRnd {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of values handed out since creation or the last reset
    pub fn calls(&self) -> u64 {
        self.calls
    }

    pub fn reset(&mut self) {
        self.calls = 0;
    }
}

impl Rnd for AscendingRnd {
    fn next_uniform(&mut self, min: i32, max: i32) -> i32 {
        let n = self.calls;
        self.calls += 1;
        if min >= max {
            return min;
        }
        let span = (i64::from(max) - i64::from(min) + 1) as u64;
        let offset = (n % span) as i64;
        (i64::from(min) + offset) as i32
    }
}

/// Answers a scripted list of values in order, each clamped into the
/// requested range. Once the script runs out it keeps answering the last
/// value, or the range minimum for an empty script.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceRnd {
    values: Vec<i32>,
    calls: usize,
}

impl SequenceRnd {
    pub fn new(values: impl Into<Vec<i32>>) -> Self {
        Self {
            values: values.into(),
            calls: 0,
        }
    }

    /// Number of values handed out since creation or the last reset
    pub fn calls(&self) -> usize {
        self.calls
    }

    /// Scripted values not handed out yet
    pub fn remaining(&self) -> &[i32] {
        &self.values[self.calls.min(self.values.len())..]
    }

    pub fn reset(&mut self) {
        self.calls = 0;
    }
}

impl Rnd for SequenceRnd {
    fn next_uniform(&mut self, min: i32, max: i32) -> i32 {
        let value = self
            .values
            .get(self.calls)
            .or(self.values.last())
            .copied()
            .unwrap_or(min);
        self.calls += 1;
        if min >= max {
            return min;
        }
        value.clamp(min, max)
    }
}
