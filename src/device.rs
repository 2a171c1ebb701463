//! PHY bring-up harness
//!
//! The hardware collaborators are injected: a register-write sink and a
//! status poll behind [`RegisterBus`], pacing behind the embedded-hal
//! blocking delay. The surrounding firmware owns resets, clock gates and the
//! actual register sequences; this layer only resolves the PLL setting and
//! runs the readiness protocol.

use embedded_hal::blocking::delay::DelayUs;

use crate::constants::*;
use crate::config::RoPllConfig;
use crate::errors::*;
use crate::solver;

/// PHY status word bits, as reported by the readiness poll
pub const PLL_LOCK_DONE: u32 = 1 << 3;
pub const PHY_CLK_RDY: u32 = 1 << 2;
pub const PHY_RDY: u32 = 1 << 1;
pub const SB_RDY: u32 = 1 << 0;

/// Access to the PHY from the host firmware.
///
/// `write` lands a 32-bit value at a byte offset inside the PHY block;
/// `status` samples the readiness bitmask (`PLL_LOCK_DONE` and friends).
pub trait RegisterBus {
    fn write(&mut self, offset: u32, value: u32) -> Result<(), Error>;
    fn status(&mut self) -> Result<u32, Error>;
}

/// HDMI/DP combo transmitter PHY
pub struct Hdptx<BUS> {
    bus: BUS,
}

impl<BUS> Hdptx<BUS>
where BUS: RegisterBus,
{
    /// Wraps a register bus. The PHY is assumed held in reset by the caller
    /// until a configuration has been applied.
    pub fn new(bus: BUS) -> Self {
        Hdptx { bus }
    }

    /// Gives the bus back
    pub fn release(self) -> BUS {
        self.bus
    }

    /// ROPLL setting for a TMDS bit rate, from the standard-rate table or the
    /// divider search.
    pub fn ropll_tmds_config(&self, bit_rate_khz: u32) -> Result<RoPllConfig, Error> {
        solver::tmds_config(bit_rate_khz).ok_or(Error::NoPllParameters)
    }

    /// Applies a caller-computed (offset, value) register sequence.
    pub fn write_sequence(&mut self, seq: &[(u32, u32)]) -> Result<(), Error> {
        for &(offset, value) in seq {
            self.bus.write(offset, value)?;
        }
        Ok(())
    }

    /// Single non-blocking check for the recovered PLL clock.
    pub fn poll_clk_ready(&mut self) -> nb::Result<(), Error> {
        if self.bus.status()? & PHY_CLK_RDY != 0 {
            Ok(())
        } else {
            Err(nb::Error::WouldBlock)
        }
    }

    /// Blocks until the ROPLL reports a ready clock, polling every 20us.
    pub fn wait_clk_ready<D>(&mut self, delay: &mut D) -> Result<(), Error>
    where D: DelayUs<u16>,
    {
        self.wait_status(delay, PHY_CLK_RDY, CLK_RDY_POLL_DELAY_US)
    }

    /// Blocks until the lanes are up and the PLL reports lock, polling every
    /// 100us.
    pub fn wait_phy_ready<D>(&mut self, delay: &mut D) -> Result<(), Error>
    where D: DelayUs<u16>,
    {
        self.wait_status(delay, PHY_RDY | PLL_LOCK_DONE, PHY_RDY_POLL_DELAY_US)
    }

    fn wait_status<D>(&mut self, delay: &mut D, mask: u32, pause_us: u16) -> Result<(), Error>
    where D: DelayUs<u16>,
    {
        for _ in 0..STATUS_POLL_TRIES {
            if self.bus.status()? & mask == mask {
                return Ok(());
            }
            delay.delay_us(pause_us);
        }
        Err(Error::LockTimeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoopDelay;

    impl DelayUs<u16> for NoopDelay {
        fn delay_us(&mut self, _us: u16) {}
    }

    /// Status reads report `ready_bits` once `ready_after` polls have
    /// happened; writes are logged up to the buffer size.
    struct MockBus {
        ready_bits: u32,
        ready_after: u32,
        polls: u32,
        writes: [(u32, u32); 8],
        nwrites: usize,
        fail_writes: bool,
    }

    impl MockBus {
        fn new(ready_bits: u32, ready_after: u32) -> Self {
            MockBus {
                ready_bits,
                ready_after,
                polls: 0,
                writes: [(0, 0); 8],
                nwrites: 0,
                fail_writes: false,
            }
        }
    }

    impl RegisterBus for MockBus {
        fn write(&mut self, offset: u32, value: u32) -> Result<(), Error> {
            if self.fail_writes {
                return Err(Error::Bus);
            }
            self.writes[self.nwrites] = (offset, value);
            self.nwrites += 1;
            Ok(())
        }

        fn status(&mut self) -> Result<u32, Error> {
            self.polls += 1;
            if self.polls > self.ready_after {
                Ok(self.ready_bits)
            } else {
                Ok(0)
            }
        }
    }

    #[test]
    fn clk_ready_after_some_polls() {
        let mut phy = Hdptx::new(MockBus::new(PHY_CLK_RDY, 3));
        phy.wait_clk_ready(&mut NoopDelay).unwrap();
        assert_eq!(phy.release().polls, 4);
    }

    #[test]
    fn clk_ready_times_out() {
        let mut phy = Hdptx::new(MockBus::new(PHY_CLK_RDY, 1000));
        assert_eq!(phy.wait_clk_ready(&mut NoopDelay), Err(Error::LockTimeout));
        assert_eq!(phy.release().polls, STATUS_POLL_TRIES);
    }

    #[test]
    fn phy_ready_needs_both_bits() {
        // lane ready alone is not enough without PLL lock
        let mut phy = Hdptx::new(MockBus::new(PHY_RDY, 0));
        assert_eq!(phy.wait_phy_ready(&mut NoopDelay), Err(Error::LockTimeout));

        let mut phy = Hdptx::new(MockBus::new(PHY_RDY | PLL_LOCK_DONE | SB_RDY, 0));
        phy.wait_phy_ready(&mut NoopDelay).unwrap();
    }

    #[test]
    fn nonblocking_poll() {
        let mut phy = Hdptx::new(MockBus::new(PHY_CLK_RDY, 2));
        assert!(matches!(phy.poll_clk_ready(), Err(nb::Error::WouldBlock)));
        assert!(matches!(phy.poll_clk_ready(), Err(nb::Error::WouldBlock)));
        assert!(matches!(phy.poll_clk_ready(), Ok(())));
    }

    #[test]
    fn write_sequence_lands_in_order() {
        let mut phy = Hdptx::new(MockBus::new(0, 0));
        phy.write_sequence(&[(0x0144, 0x7c), (0x0154, 0x7c), (0x0168, 0x10)])
            .unwrap();
        let bus = phy.release();
        assert_eq!(bus.nwrites, 3);
        assert_eq!(bus.writes[0], (0x0144, 0x7c));
        assert_eq!(bus.writes[2], (0x0168, 0x10));
    }

    #[test]
    fn bus_error_propagates() {
        let mut bus = MockBus::new(0, 0);
        bus.fail_writes = true;
        let mut phy = Hdptx::new(bus);
        assert_eq!(phy.write_sequence(&[(0, 0)]), Err(Error::Bus));
    }

    #[test]
    fn config_resolution_maps_not_found() {
        let phy = Hdptx::new(MockBus::new(0, 0));
        assert_eq!(phy.ropll_tmds_config(42), Err(Error::NoPllParameters));
        let cfg = phy.ropll_tmds_config(2_970_000).unwrap();
        assert_eq!(cfg.pms_mdiv, 124);
    }
}
