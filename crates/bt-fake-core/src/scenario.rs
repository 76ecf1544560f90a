//! Canned return-value programs.
//!
//! Each scenario expands to a plain return value or a return sequence on a
//! fake, so its behaviour follows the usual sequence rules: values are consumed
//! in order and the last one latches.

/// A return-value program for a fake.
#[derive(Debug, Clone, PartialEq)]
pub enum ReturnScenario<R> {
    /// Return the same value on every call.
    Always(R),
    /// Return the values in order; the last one repeats.
    Sequence(Vec<R>),
    /// Succeed `successes` times, then return `err` from then on.
    FailAfter {
        /// Calls that return `ok`.
        successes: usize,
        /// Value of the successful calls.
        ok: R,
        /// Value of every later call.
        err: R,
    },
    /// Fail the first call only.
    FailOnce {
        /// Value of every later call.
        ok: R,
        /// Value of the first call.
        err: R,
    },
}

impl<R: Clone> ReturnScenario<R> {
    /// The return sequence this scenario programs.
    pub fn into_sequence(self) -> Vec<R> {
        match self {
            ReturnScenario::Always(value) => vec![value],
            ReturnScenario::Sequence(values) => values,
            ReturnScenario::FailAfter { successes, ok, err } => {
                let mut values = vec![ok; successes];
                values.push(err);
                values
            }
            ReturnScenario::FailOnce { ok, err } => vec![err, ok],
        }
    }
}
