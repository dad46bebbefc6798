//! Id generation for documents saved without an id.

use uuid::Uuid;

use docstore_core::config::IdStrategy;

/// Per-store id source.
///
/// The counter lives on the generator instance, so two stores hand out
/// overlapping ids; uniqueness only holds within one store.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    strategy: IdStrategy,
    counter: u64,
}

impl IdGenerator {
    pub fn new(strategy: IdStrategy) -> Self {
        Self { strategy, counter: 0 }
    }

    pub fn strategy(&self) -> IdStrategy {
        self.strategy
    }

    /// Produces the next id for which `is_taken` returns `false`.
    ///
    /// Candidates already claimed (for example by a caller-supplied id
    /// inserted under [`UnknownIdPolicy::Insert`](docstore_core::config::UnknownIdPolicy::Insert))
    /// are skipped. Skipped counter values are consumed.
    pub fn next_id(&mut self, is_taken: impl Fn(&str) -> bool) -> String {
        loop {
            let candidate = match self.strategy {
                IdStrategy::Counter => {
                    self.counter += 1;
                    self.counter.to_string()
                }
                IdStrategy::Uuid => Uuid::new_v4().to_string(),
            };

            if !is_taken(&candidate) {
                return candidate;
            }
        }
    }
}
