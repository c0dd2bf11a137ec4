use crate::error::{ConsistError, Result};

/// Lazy arithmetic sequence from `lower` to `upper` inclusive
///
/// Yields `lower, lower + step, ...` for as long as the value stays at or
/// below `upper`.
pub struct Interval {
    next: Option<i64>,
    upper: i64,
    step: i64,
}

impl Interval {
    /// Build an interval, rejecting bounds that cannot terminate
    pub fn new(lower: i64, upper: i64, step: i64) -> Result<Self> {
        if lower > upper {
            return Err(ConsistError::InvalidInterval(
                "upper bound must be higher than lower bound".to_string(),
            ));
        }
        if step <= 0 {
            return Err(ConsistError::InvalidInterval(
                "step must be positive".to_string(),
            ));
        }
        Ok(Self {
            next: Some(lower),
            upper,
            step,
        })
    }
}

impl Iterator for Interval {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let value = self.next?;
        self.next = value
            .checked_add(self.step)
            .filter(|next| *next <= self.upper);
        Some(value)
    }
}
