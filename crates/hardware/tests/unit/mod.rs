//! # Unit Components
//!
//! This module serves as the central hub for the unit tests of the
//! controller. It mirrors the crate's module layout: shared data types,
//! configuration, the hardware core, and the simulation driver.
