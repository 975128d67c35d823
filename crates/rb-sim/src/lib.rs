//! `rb-sim`: the tick scheduler for the rust_rebellion simulator.
//!
//! # Tick loop
//!
//! ```text
//! setup:
//!   build population (risk, hardship per agent)  → place on free patches
//!   record summary for tick 0
//!
//! for tick in 1..=config.total_ticks:
//!   ① Order: shuffle every EntityId with the run's SimRng.
//!   ② Entities: for each id in that order:
//!                  plan_move → apply immediately
//!                  plan_act  → apply immediately
//!   ③ Jail: decrease_jail_term() on every agent.
//!   ④ Summary: count quiet / jailed / rebelling agents.
//! ```
//!
//! Updates are sequential and interleaved: an entity sees the grid as left
//! by every entity processed before it in the same tick.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | [`run_replicates`] runs seeds on Rayon's thread pool.   |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rb_behavior::RebellionRules;
//! use rb_core::RebellionConfig;
//! use rb_sim::{NoopObserver, SimBuilder};
//!
//! let config = RebellionConfig::default();
//! let rules = RebellionRules::from_config(&config);
//! let mut sim = SimBuilder::new(config, rules).build()?;
//! sim.run(&mut NoopObserver)?;
//! for summary in sim.history() {
//!     println!("{summary}");
//! }
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod replicate;
pub mod sim;
pub mod summary;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use replicate::{Replicate, run_replicates};
pub use sim::Sim;
pub use summary::TickSummary;
