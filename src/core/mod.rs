pub mod energy;
pub mod error;
pub mod kinematics;
pub mod quiz;
pub mod sequencer;
pub mod trajectory;
pub mod window;
