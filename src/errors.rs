//! Error types

/// Driver errors
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum Error {
    /// No divider/multiplier combination reaches the requested bit rate.
    /// Expected for rates outside the achievable VCO window, not a fault.
    NoPllParameters,
    /// Register bus access failed
    Bus,
    /// PLL/lane readiness was not reported within the poll budget
    LockTimeout,
}
