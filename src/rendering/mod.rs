//! Frame rendering for the breathing circle.

mod frame;
mod snapshot;

pub use frame::{CircleState, Frame, FrameRenderer};
pub use snapshot::save_frame;
