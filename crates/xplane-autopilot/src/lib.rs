//! Takeoff sequencer for X-Plane.
//!
//! [`TakeoffController`] consumes decoded `DATA` telemetry one tick at a time
//! and answers with the packets to send back: a brake release and full
//! throttle on the first tick, then one joystick command per tick that holds
//! the runway heading, rotates once the wings carry enough lift, and levels
//! off when the climb is complete.
//!
//! ```
//! use xplane_autopilot::{Phase, TakeoffConfig, TakeoffController};
//! use xplane_protocol::DataPacket;
//!
//! let mut controller = TakeoffController::new(TakeoffConfig::default())?;
//! controller.begin();
//!
//! let mut tick = DataPacket::new();
//! tick.insert(17, [0.0, 0.0, 90.0, 90.0, 0.0, 0.0, 0.0, 0.0]);
//! let outbound = controller.on_tick(&tick);
//! assert_eq!(outbound.len(), 2);
//! assert!(matches!(controller.phase(), Phase::Throttle { .. }));
//! # Ok::<(), xplane_autopilot::ConfigError>(())
//! ```
//!
//! The controller is synchronous and owns all of its state. Hosts that
//! receive telemetry concurrently must funnel every tick for one controller
//! through a single sequence.

#![deny(static_mut_refs)]

pub mod config;
pub mod controller;

pub use config::{ConfigError, TakeoffConfig};
pub use controller::{Phase, TakeoffController, heading_error};
