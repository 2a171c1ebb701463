#![no_std]

//! Samsung HDPTX HDMI/DP combo transmitter PHY support.
//!
//! ROPLL divider/sigma-delta parameter solver plus a thin bring-up harness
//! over injected register access. Register value sequences, resets and clock
//! gating stay with the host firmware.

pub mod constants;
pub mod rational;
pub mod errors;
pub mod config;
pub mod rates;
pub mod solver;
pub mod device;
