//! Moves and move selection over session dates and start times.

mod change;
mod selector;
mod swap;
mod traits;


pub use change::ChangeMove;
pub use selector::{MoveSelector, RandomMoveSelector};
pub use swap::SwapMove;
pub use traits::{Move, StudyMove};
