//! Read-compute-write operations over the record store.
//!
//! Each operation loads the records it needs, runs the pure computation
//! from studyquest-core, and writes back with the version it read. Nothing
//! is written when validation fails.

pub mod leaderboard;
pub mod learner;
pub mod quest;
pub mod review;
