mod action;
mod player;

pub use action::Action;
pub use player::{MOVE_STEP, MoveError, Player, TURN_STEP_DEG};
