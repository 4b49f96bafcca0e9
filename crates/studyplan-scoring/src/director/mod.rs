//! Score directors own the working schedule and keep its score current.

mod incremental;
mod recording;
mod simple;
mod traits;

#[cfg(test)]
mod tests;

pub use incremental::IncrementalScoreDirector;
pub use recording::RecordingScoreDirector;
pub use simple::SimpleScoreDirector;
pub use traits::ScoreDirector;
