//! Fake function records.
//!
//! A [`Fake`] is the bookkeeping behind one faked symbol: how often it was
//! called, with which arguments, and what it should return. Fakes are declared
//! as statics (see [`fake_value_fn!`](crate::fake_value_fn)) so the code under
//! test can call a plain function while the test programs and inspects the
//! matching record.
//!
//! # Call policy
//!
//! On every invocation the fake
//!
//! 1. increments its call count and stores the captured arguments,
//! 2. delegates to the next custom fake of the custom sequence, if one is set,
//! 3. otherwise delegates to the custom fake, if one is set,
//! 4. otherwise returns the next value of the return sequence (the last value
//!    latches),
//! 5. otherwise returns the programmed return value, which is `R::default()`
//!    (zero, `false`, `None`) until a test sets one.
//!
//! Out-parameters are only ever written by custom fakes.
//!
//! The record lock is released before a custom fake runs, so a custom fake may
//! call other fakes or inspect its own record.

use std::fmt;
use std::sync::Arc;

use parking_lot::{const_mutex, Mutex};
use tracing::{trace, warn};

use crate::config;
use crate::error::{FakeError, Result};
use crate::history;
use crate::scenario::ReturnScenario;

/// What a fake invocation resolved to.
pub enum Outcome<R, F: ?Sized> {
    /// Return this value.
    Return(R),
    /// Call this custom fake with the live arguments and report its result
    /// through [`Fake::returned`].
    Delegate(Arc<F>),
}

struct FakeFn<A, R, F: ?Sized> {
    call_count: usize,
    arg_history: Vec<A>,
    arg_histories_dropped: usize,
    last_args: Option<A>,
    return_val: Option<R>,
    return_val_seq: Vec<R>,
    return_val_seq_idx: usize,
    return_val_history: Vec<R>,
    return_vals_dropped: usize,
    custom_fake: Option<Arc<F>>,
    custom_fake_seq: Vec<Arc<F>>,
    custom_fake_seq_idx: usize,
}

impl<A, R, F: ?Sized> FakeFn<A, R, F> {
    const fn new() -> Self {
        Self {
            call_count: 0,
            arg_history: Vec::new(),
            arg_histories_dropped: 0,
            last_args: None,
            return_val: None,
            return_val_seq: Vec::new(),
            return_val_seq_idx: 0,
            return_val_history: Vec::new(),
            return_vals_dropped: 0,
            custom_fake: None,
            custom_fake_seq: Vec::new(),
            custom_fake_seq_idx: 0,
        }
    }

    fn next_custom(&mut self) -> Option<Arc<F>> {
        if !self.custom_fake_seq.is_empty() {
            let last = self.custom_fake_seq.len() - 1;
            let idx = self.custom_fake_seq_idx.min(last);
            if self.custom_fake_seq_idx <= last {
                self.custom_fake_seq_idx += 1;
            }
            return Some(Arc::clone(&self.custom_fake_seq[idx]));
        }
        self.custom_fake.clone()
    }
}

impl<A, R: Clone + Default, F: ?Sized> FakeFn<A, R, F> {
    fn next_return(&mut self) -> R {
        if self.return_val_seq.is_empty() {
            return self.return_val.clone().unwrap_or_default();
        }
        let last = self.return_val_seq.len() - 1;
        let idx = self.return_val_seq_idx.min(last);
        if self.return_val_seq_idx <= last {
            self.return_val_seq_idx += 1;
        }
        self.return_val_seq[idx].clone()
    }

    fn save_return(&mut self, name: &'static str, value: &R, bound: Option<usize>) {
        if bound.map_or(true, |cap| self.return_val_history.len() < cap) {
            self.return_val_history.push(value.clone());
        } else {
            self.return_vals_dropped += 1;
            if self.return_vals_dropped == 1 {
                warn!(fake = name, bound = ?bound, "return value history full, dropping values");
            }
        }
    }
}

/// Record and programming handle of one faked function.
///
/// `A` is the tuple of captured arguments, `R` the return type and `F` the
/// unsized custom-fake type (`dyn Fn(..) -> R + Send + Sync`).
pub struct Fake<A, R, F: ?Sized> {
    name: &'static str,
    state: Mutex<FakeFn<A, R, F>>,
}

impl<A, R, F: ?Sized> Fake<A, R, F> {
    /// Empty record for the symbol `name`.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            state: const_mutex(FakeFn::new()),
        }
    }

    /// Name of the faked symbol.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Invocations since the last reset.
    pub fn call_count(&self) -> usize {
        self.state.lock().call_count
    }

    /// Calls whose arguments were discarded because the history was full.
    pub fn arg_histories_dropped(&self) -> usize {
        self.state.lock().arg_histories_dropped
    }

    /// Returned values discarded because the history was full.
    pub fn return_vals_dropped(&self) -> usize {
        self.state.lock().return_vals_dropped
    }

    /// Program the value returned when no sequence or custom fake applies.
    pub fn set_return_val(&self, value: R) {
        self.state.lock().return_val = Some(value);
    }

    /// Program values returned in order; the last one latches.
    pub fn set_return_val_seq(&self, values: Vec<R>) {
        let mut state = self.state.lock();
        state.return_val_seq = values;
        state.return_val_seq_idx = 0;
    }

    /// Replace the fake's behaviour entirely.
    pub fn set_custom_fake(&self, custom: Arc<F>) {
        self.state.lock().custom_fake = Some(custom);
    }

    /// Use these custom fakes in order; the last one latches.
    ///
    /// A non-empty custom sequence takes precedence over [`set_custom_fake`](Self::set_custom_fake).
    pub fn set_custom_fake_seq(&self, customs: Vec<Arc<F>>) {
        let mut state = self.state.lock();
        state.custom_fake_seq = customs;
        state.custom_fake_seq_idx = 0;
    }

    /// Drop the custom fake and custom sequence, keeping counts and history.
    pub fn clear_custom_fake(&self) {
        let mut state = self.state.lock();
        state.custom_fake = None;
        state.custom_fake_seq.clear();
        state.custom_fake_seq_idx = 0;
    }

    /// Zero the record: counts, histories, programmed values and custom fakes.
    pub fn reset(&self) {
        *self.state.lock() = FakeFn::new();
    }
}

impl<A: Clone, R: Clone + Default, F: ?Sized> Fake<A, R, F> {
    /// Record one invocation and decide how it resolves.
    ///
    /// Called by the functions generated with [`fake_value_fn!`](crate::fake_value_fn).
    pub fn record(&self, args: A) -> Outcome<R, F> {
        let bound = config::active().arg_history_len;
        let mut state = self.state.lock();
        state.call_count += 1;
        let call = state.call_count;

        state.last_args = Some(args.clone());
        if bound.map_or(true, |cap| state.arg_history.len() < cap) {
            state.arg_history.push(args);
        } else {
            state.arg_histories_dropped += 1;
            if state.arg_histories_dropped == 1 {
                warn!(fake = self.name, bound = ?bound, "argument history full, dropping arguments");
            }
        }

        let outcome = match state.next_custom() {
            Some(custom) => Outcome::Delegate(custom),
            None => {
                let value = state.next_return();
                state.save_return(self.name, &value, bound);
                Outcome::Return(value)
            }
        };
        drop(state);

        history::push(self.name);
        trace!(fake = self.name, call, "fake invoked");
        outcome
    }

    /// Store the value a custom fake produced and hand it back.
    pub fn returned(&self, value: R) -> R {
        let bound = config::active().arg_history_len;
        self.state.lock().save_return(self.name, &value, bound);
        value
    }

    /// Captured arguments of every retained call, oldest first.
    ///
    /// Element `k` holds the arguments of call `k` as a tuple, so the `j`-th
    /// argument of the `k`-th call is `arg_history()[k].j`.
    pub fn arg_history(&self) -> Vec<A> {
        self.state.lock().arg_history.clone()
    }

    /// Captured arguments of call `index` (zero-based).
    pub fn call_args(&self, index: usize) -> Result<A> {
        let state = self.state.lock();
        if index >= state.call_count {
            return Err(FakeError::CallOutOfRange {
                fake: self.name,
                index,
                call_count: state.call_count,
            });
        }
        state
            .arg_history
            .get(index)
            .cloned()
            .ok_or(FakeError::HistoryDropped {
                fake: self.name,
                index,
                retained: state.arg_history.len(),
            })
    }

    /// Arguments of the most recent call, even if the history was full.
    pub fn last_args(&self) -> Option<A> {
        self.state.lock().last_args.clone()
    }

    /// Values returned so far, including those produced by custom fakes.
    ///
    /// Shares the `arg_history_len` bound with the argument history; values
    /// past it are counted by [`return_vals_dropped`](Self::return_vals_dropped).
    pub fn return_val_history(&self) -> Vec<R> {
        self.state.lock().return_val_history.clone()
    }

    /// The value returned when no sequence or custom fake applies.
    pub fn return_val(&self) -> R {
        self.state.lock().return_val.clone().unwrap_or_default()
    }

    /// Program the fake from a [`ReturnScenario`].
    pub fn apply(&self, scenario: ReturnScenario<R>) {
        match scenario {
            ReturnScenario::Always(value) => {
                self.set_return_val_seq(Vec::new());
                self.set_return_val(value);
            }
            other => self.set_return_val_seq(other.into_sequence()),
        }
    }
}

impl<A, R, F: ?Sized> fmt::Debug for Fake<A, R, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fake")
            .field("name", &self.name)
            .field("call_count", &self.call_count())
            .finish()
    }
}

/// Signature-independent view of a fake, used for group resets.
pub trait FakeControl: Sync {
    /// Name of the faked symbol.
    fn name(&self) -> &'static str;

    /// Invocations since the last reset.
    fn call_count(&self) -> usize;

    /// Zero the record.
    fn reset(&self);
}

impl<A: Send, R: Send, F: ?Sized + Send + Sync> FakeControl for Fake<A, R, F> {
    fn name(&self) -> &'static str {
        Fake::name(self)
    }

    fn call_count(&self) -> usize {
        Fake::call_count(self)
    }

    fn reset(&self) {
        Fake::reset(self)
    }
}

/// Reset every fake of a list.
pub fn reset_fakes(fakes: &[&dyn FakeControl]) {
    for fake in fakes {
        fake.reset();
    }
    tracing::debug!(count = fakes.len(), "reset fakes");
}
