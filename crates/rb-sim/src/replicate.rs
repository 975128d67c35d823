//! Independent runs of one configuration under several seeds.

use rb_behavior::BehaviorModel;
use rb_core::RebellionConfig;

use crate::{NoopObserver, SimBuilder, SimResult, TickSummary};

/// The history of one replicate.
#[derive(Clone, Debug, PartialEq)]
pub struct Replicate {
    pub seed:    u64,
    pub history: Vec<TickSummary>,
}

/// Run `config` once per seed and return the histories in seed order.
///
/// Each run builds its own [`Sim`][crate::Sim] (and so its own `SimRng`)
/// from a copy of `config` whose `seed` is replaced.  With the `parallel`
/// feature the runs execute on Rayon's thread pool; the results are the same
/// either way.
///
/// # Errors
///
/// The first error any run reports, in seed order.
pub fn run_replicates<B: BehaviorModel + Clone>(
    config:   &RebellionConfig,
    behavior: &B,
    seeds:    &[u64],
) -> SimResult<Vec<Replicate>> {
    let run_one = |&seed: &u64| -> SimResult<Replicate> {
        let config = RebellionConfig { seed, ..config.clone() };
        let mut sim = SimBuilder::new(config, behavior.clone()).build()?;
        sim.run(&mut NoopObserver)?;
        Ok(Replicate { seed, history: sim.into_history() })
    };

    #[cfg(not(feature = "parallel"))]
    {
        seeds.iter().map(run_one).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        seeds.par_iter().map(run_one).collect()
    }
}
