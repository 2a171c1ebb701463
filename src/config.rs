//! ROPLL configuration record

/// A complete ROPLL divider/modulator setting for one TMDS bit rate.
///
/// Value record: computed (or looked up) once per rate request, never mutated
/// afterwards. Field values are the raw register-field encodings consumed by
/// the downstream programming sequence; in particular `pms_sdiv` stores the
/// post divider minus one, per the hardware convention.
#[derive(Debug,Copy,Clone,Default,PartialEq,Eq)]
pub struct RoPllConfig {
    /// TMDS bit rate this setting serves, kHz
    pub bit_rate: u32,
    /// Feedback multiplier divisor M
    pub pms_mdiv: u8,
    /// M value latched for the AFC (auto frequency calibration) path
    pub pms_mdiv_afc: u8,
    /// Predivider P
    pub pms_pdiv: u8,
    /// Reference input divider
    pub pms_refdiv: u8,
    /// Post divider S, stored minus one
    pub pms_sdiv: u8,
    pub pms_iqdiv_rstn: u8,
    pub ref_clk_sel: u8,
    /// Sigma-delta modulator enable
    pub sdm_en: u8,
    pub sdm_rstn: u8,
    pub sdc_frac_en: u8,
    pub sdc_rstn: u8,
    pub sdm_clk_div: u8,
    /// Primary fractional denominator
    pub sdm_deno: u8,
    /// Primary fractional numerator sign (1 = subtract from M)
    pub sdm_num_sign: u8,
    /// Primary fractional numerator
    pub sdm_num: u8,
    /// SDC divider order, stored as order minus three
    pub sdc_n: u8,
    /// Spread-spectrum ("sub") fractional numerator
    pub sdc_num: u8,
    /// Spread-spectrum ("sub") fractional denominator
    pub sdc_deno: u8,
    pub sdc_ndiv_rstn: u8,
    pub ssc_en: u8,
    pub ssc_fm_dev: u8,
    pub ssc_fm_freq: u8,
    pub ssc_clk_div_sel: u8,
    pub ana_cpp_ctrl: u8,
    pub ana_lpf_c_sel: u8,
    pub cd_tx_ser_rate_sel: u8,
}

impl RoPllConfig {
    /// Raw post divider value (the stored field is the divider minus one)
    #[inline]
    pub fn sdiv(&self) -> u32 {
        self.pms_sdiv as u32 + 1
    }

    /// True when the fractional sigma-delta path is in use
    #[inline]
    pub fn sdm_enabled(&self) -> bool {
        self.sdm_en != 0
    }
}
