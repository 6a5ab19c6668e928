//! Three-step linear wizard: Upload → Configure → Preview.
//!
//! Moving forward is gated by an async validator and guarded by the store's
//! processing flag; a second request arriving while one is validating is
//! turned away, not queued. Moving back is never gated.

use std::future::Future;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::store::SharedStore;

pub const TOTAL_STEPS: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Step {
    Upload,
    Configure,
    Preview,
}

impl Step {
    pub fn number(self) -> u8 {
        match self {
            Step::Upload => 1,
            Step::Configure => 2,
            Step::Preview => 3,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Step::Upload),
            2 => Some(Step::Configure),
            3 => Some(Step::Preview),
            _ => None,
        }
    }

    pub fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    pub fn previous(self) -> Option<Self> {
        self.number().checked_sub(1).and_then(Self::from_number)
    }
}

impl From<Step> for u8 {
    fn from(step: Step) -> u8 {
        step.number()
    }
}

impl TryFrom<u8> for Step {
    type Error = String;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Step::from_number(n).ok_or_else(|| format!("step must be 1..={TOTAL_STEPS}, got {n}"))
    }
}

/// Outcome of a forward request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "step", rename_all = "snake_case")]
pub enum Transition {
    Advanced(Step),
    /// The validator refused; the step is unchanged.
    Rejected(Step),
    /// Another forward request is still validating.
    Busy(Step),
}

/// Jumps to step `number`. Numbers outside 1..=3 are ignored.
pub fn go_to_step(store: &SharedStore, number: u8) -> Option<Step> {
    let step = Step::from_number(number)?;
    store.lock().set_step(step);
    info!("Wizard moved to step {}", step.number());
    Some(step)
}

/// Clears the processing flag on every exit path, including a validator panic.
/// After a reset the flag belongs to the new session and is left alone.
struct ProcessingGuard {
    store: SharedStore,
    generation: u64,
}

impl Drop for ProcessingGuard {
    fn drop(&mut self) {
        let mut store = self.store.lock();
        if store.generation() == self.generation {
            store.set_processing(false);
        }
    }
}

pub async fn go_to_next_step<F, Fut>(store: &SharedStore, from: Step, validator: F) -> Transition
where
    F: FnOnce(Step) -> Fut,
    Fut: Future<Output = bool>,
{
    let generation = {
        let mut guard = store.lock();
        if guard.is_processing() {
            debug!("Step transition already in progress, ignoring");
            return Transition::Busy(guard.step());
        }
        guard.set_processing(true);
        guard.generation()
    };
    let _processing = ProcessingGuard {
        store: store.clone(),
        generation,
    };

    let valid = validator(from).await;

    let mut guard = store.lock();
    if guard.generation() != generation {
        debug!("Wizard was reset during the step transition, dropping it");
        return Transition::Rejected(guard.step());
    }
    match from.next().filter(|_| valid) {
        Some(next) => {
            guard.set_step(next);
            info!("Wizard advanced to step {}", next.number());
            Transition::Advanced(next)
        }
        None => Transition::Rejected(guard.step()),
    }
}

/// Goes back one step; stays on the first step.
pub fn go_to_previous_step(store: &SharedStore) -> Step {
    let mut guard = store.lock();
    let current = guard.step();
    match current.previous() {
        Some(previous) => {
            guard.set_step(previous);
            previous
        }
        None => current,
    }
}
