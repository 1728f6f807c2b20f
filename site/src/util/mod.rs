//! Interaction helpers for the presentation layer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure modules (`motion`, `reveal`, `tilt`) hold the math and state machines
//! and are tested natively. The `*_binding`/`*_observer` modules and `dom`
//! wire them to the browser and only exist in hydrate builds.

pub mod motion;
pub mod reveal;
pub mod tilt;

#[cfg(feature = "hydrate")]
pub mod dom;
#[cfg(feature = "hydrate")]
pub mod reveal_observer;
#[cfg(feature = "hydrate")]
pub mod tilt_binding;
