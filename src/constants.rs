//! Constants

/// Default reference clock, kHz (24 MHz crystal on the reference design)
pub const REF_CLK_KHZ: u32 = 24_000;

/// ROPLL VCO lower bound, kHz
pub const VCO_FREQ_MIN: u32 = 2_000_000;

/// ROPLL VCO upper bound, kHz
pub const VCO_FREQ_MAX: u32 = 4_000_000;

/// Minimum feedback multiplier divisor
pub const MDIV_MIN: u32 = 20;

/// Maximum feedback multiplier divisor
pub const MDIV_MAX: u32 = 255;

/// Maximum post divider; candidates are 1 or any even value up to this
pub const SDIV_MAX: u32 = 16;

/// SDC clock search floor, kHz
pub const SDC_CLK_MIN: u32 = 264_000;

/// SDC clock search ceiling, kHz
pub const SDC_CLK_MAX: u32 = 750_000;

/// Sigma-delta modulation order
pub const SDM_ORDER: u32 = 8;

/// Sigma-delta numerator field is 7 bits wide
pub const SDM_NUM_MAX: u32 = 0x7f;

/// Sigma-delta denominator field is 8 bits wide
pub const SDM_DENO_MAX: u32 = 0xff;

/// Status poll attempts before giving up on lock
pub const STATUS_POLL_TRIES: u32 = 50;

/// Pause between PLL clock-ready polls, us
pub const CLK_RDY_POLL_DELAY_US: u16 = 20;

/// Pause between lane-ready polls, us
pub const PHY_RDY_POLL_DELAY_US: u16 = 100;
