//! Thread-safe handle serializing access to one machine.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::machine::{BrewOutcome, CoffeeMachine};
use crate::supplies::{RefillDelta, SupplyLevels};

/// Cloneable handle to a single machine shared across threads.
///
/// Every operation holds the lock for its whole duration, so brews, refills
/// and withdrawals never interleave.
#[derive(Debug, Clone, Default)]
pub struct SharedMachine {
    inner: Arc<Mutex<CoffeeMachine>>,
}

impl SharedMachine {
    pub fn new(machine: CoffeeMachine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(machine)),
        }
    }

    // Every mutation is a single `apply`, so a panic elsewhere cannot leave
    // the machine half-updated; recover the guard instead of propagating.
    fn lock(&self) -> MutexGuard<'_, CoffeeMachine> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn brew(&self, drink: &str) -> BrewOutcome {
        self.lock().brew(drink)
    }

    pub fn refill(&self, delta: RefillDelta) {
        self.lock().refill(delta);
    }

    pub fn take_money(&self) -> i64 {
        self.lock().take_money()
    }

    pub fn state(&self) -> SupplyLevels {
        self.lock().state()
    }

    /// Run `f` with exclusive access to the machine.
    pub fn with<R>(&self, f: impl FnOnce(&mut CoffeeMachine) -> R) -> R {
        f(&mut self.lock())
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn concurrent_brews_never_oversell() {
        // Water for exactly 40 espressos.
        let machine = SharedMachine::new(
            CoffeeMachine::builder()
                .supplies(crate::SupplyOverrides {
                    water: Some(10_000),
                    ..Default::default()
                })
                .build(),
        );

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let machine = machine.clone();
                thread::spawn(move || {
                    (0..10)
                        .filter(|_| machine.brew("espresso").is_success())
                        .count()
                })
            })
            .collect();

        let brewed: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();

        assert_eq!(brewed, 40);
        let state = machine.state();
        assert_eq!(state.water, 0);
        assert_eq!(state.cups, 60);
        assert_eq!(state.money, 500 + 40 * 4);
    }

    #[test]
    fn clones_share_one_machine() {
        let a = SharedMachine::default();
        let b = a.clone();

        a.refill(RefillDelta {
            beans: 5,
            ..Default::default()
        });
        assert_eq!(b.state().beans, 1005);
        assert_eq!(b.take_money(), 500);
        assert_eq!(a.take_money(), 0);
        assert!(a.with(|m| m.can_brew(&crate::Recipe::LATTE)));
    }
}
