//! Bomp simulation
//!
//! Pure of rendering and host concerns. Randomness only comes from the
//! seeded `Random`, so a fixed seed reproduces a scene.

pub mod bomp;
pub mod decay;
pub mod placement;
pub mod rng;
pub mod scene;
pub mod tick;

pub use bomp::{Bomp, BompParams, Degree};
pub use decay::JumpPose;
pub use placement::place_bomps;
pub use rng::Random;
pub use scene::Scene;
pub use tick::{crossed_threshold, update_bomp, update_bomps};
