//! Precomputed ROPLL settings for standard TMDS rates
//!
//! Hand-tuned configurations for the common display pixel clocks. These are
//! fixed data, reproduced verbatim for bit-exact hardware compatibility; the
//! solver only runs for rates not listed here.

use crate::config::RoPllConfig;

/// ROPLL settings for the standard TMDS bit rates, kHz
pub const ROPLL_TMDS_CONFIGS: [RoPllConfig; 20] = [
    RoPllConfig {
        bit_rate: 5_940_000,
        pms_mdiv: 124, pms_mdiv_afc: 124, pms_pdiv: 1, pms_refdiv: 1, pms_sdiv: 0,
        pms_iqdiv_rstn: 1, ref_clk_sel: 1, sdm_en: 1, sdm_rstn: 1, sdc_frac_en: 1,
        sdc_rstn: 1, sdm_clk_div: 1, sdm_deno: 62, sdm_num_sign: 1, sdm_num: 16,
        sdc_n: 5, sdc_num: 0, sdc_deno: 1, sdc_ndiv_rstn: 1, ssc_en: 0,
        ssc_fm_dev: 0x20, ssc_fm_freq: 0x0c, ssc_clk_div_sel: 1, ana_cpp_ctrl: 0x0e, ana_lpf_c_sel: 0, cd_tx_ser_rate_sel: 0,
    },
    RoPllConfig {
        bit_rate: 3_712_500,
        pms_mdiv: 155, pms_mdiv_afc: 155, pms_pdiv: 1, pms_refdiv: 1, pms_sdiv: 1,
        pms_iqdiv_rstn: 1, ref_clk_sel: 1, sdm_en: 1, sdm_rstn: 1, sdc_frac_en: 1,
        sdc_rstn: 1, sdm_clk_div: 1, sdm_deno: 62, sdm_num_sign: 1, sdm_num: 16,
        sdc_n: 5, sdc_num: 0, sdc_deno: 1, sdc_ndiv_rstn: 1, ssc_en: 0,
        ssc_fm_dev: 0x20, ssc_fm_freq: 0x0c, ssc_clk_div_sel: 1, ana_cpp_ctrl: 0x0e, ana_lpf_c_sel: 0, cd_tx_ser_rate_sel: 0,
    },
    RoPllConfig {
        bit_rate: 2_970_000,
        pms_mdiv: 124, pms_mdiv_afc: 124, pms_pdiv: 1, pms_refdiv: 1, pms_sdiv: 1,
        pms_iqdiv_rstn: 1, ref_clk_sel: 1, sdm_en: 1, sdm_rstn: 1, sdc_frac_en: 1,
        sdc_rstn: 1, sdm_clk_div: 1, sdm_deno: 62, sdm_num_sign: 1, sdm_num: 16,
        sdc_n: 5, sdc_num: 0, sdc_deno: 1, sdc_ndiv_rstn: 1, ssc_en: 0,
        ssc_fm_dev: 0x20, ssc_fm_freq: 0x0c, ssc_clk_div_sel: 1, ana_cpp_ctrl: 0x0e, ana_lpf_c_sel: 0, cd_tx_ser_rate_sel: 0,
    },
    RoPllConfig {
        bit_rate: 1_620_000,
        pms_mdiv: 135, pms_mdiv_afc: 135, pms_pdiv: 1, pms_refdiv: 1, pms_sdiv: 3,
        pms_iqdiv_rstn: 1, ref_clk_sel: 1, sdm_en: 0, sdm_rstn: 1, sdc_frac_en: 1,
        sdc_rstn: 1, sdm_clk_div: 1, sdm_deno: 4, sdm_num_sign: 0, sdm_num: 3,
        sdc_n: 5, sdc_num: 5, sdc_deno: 16, sdc_ndiv_rstn: 1, ssc_en: 0,
        ssc_fm_dev: 0x20, ssc_fm_freq: 0x0c, ssc_clk_div_sel: 1, ana_cpp_ctrl: 0x0e, ana_lpf_c_sel: 0, cd_tx_ser_rate_sel: 0,
    },
    RoPllConfig {
        bit_rate: 1_856_250,
        pms_mdiv: 155, pms_mdiv_afc: 155, pms_pdiv: 1, pms_refdiv: 1, pms_sdiv: 3,
        pms_iqdiv_rstn: 1, ref_clk_sel: 1, sdm_en: 1, sdm_rstn: 1, sdc_frac_en: 1,
        sdc_rstn: 1, sdm_clk_div: 1, sdm_deno: 62, sdm_num_sign: 1, sdm_num: 16,
        sdc_n: 5, sdc_num: 0, sdc_deno: 1, sdc_ndiv_rstn: 1, ssc_en: 0,
        ssc_fm_dev: 0x20, ssc_fm_freq: 0x0c, ssc_clk_div_sel: 1, ana_cpp_ctrl: 0x0e, ana_lpf_c_sel: 0, cd_tx_ser_rate_sel: 0,
    },
    RoPllConfig {
        bit_rate: 1_540_000,
        pms_mdiv: 193, pms_mdiv_afc: 193, pms_pdiv: 1, pms_refdiv: 1, pms_sdiv: 5,
        pms_iqdiv_rstn: 1, ref_clk_sel: 1, sdm_en: 1, sdm_rstn: 1, sdc_frac_en: 1,
        sdc_rstn: 1, sdm_clk_div: 1, sdm_deno: 193, sdm_num_sign: 1, sdm_num: 32,
        sdc_n: 2, sdc_num: 1, sdc_deno: 1, sdc_ndiv_rstn: 1, ssc_en: 0,
        ssc_fm_dev: 0x20, ssc_fm_freq: 0x0c, ssc_clk_div_sel: 1, ana_cpp_ctrl: 0x0e, ana_lpf_c_sel: 0, cd_tx_ser_rate_sel: 0,
    },
    RoPllConfig {
        bit_rate: 1_485_000,
        pms_mdiv: 123, pms_mdiv_afc: 123, pms_pdiv: 1, pms_refdiv: 1, pms_sdiv: 3,
        pms_iqdiv_rstn: 1, ref_clk_sel: 1, sdm_en: 1, sdm_rstn: 1, sdc_frac_en: 1,
        sdc_rstn: 1, sdm_clk_div: 1, sdm_deno: 4, sdm_num_sign: 0, sdm_num: 3,
        sdc_n: 5, sdc_num: 5, sdc_deno: 16, sdc_ndiv_rstn: 1, ssc_en: 0,
        ssc_fm_dev: 0x20, ssc_fm_freq: 0x0c, ssc_clk_div_sel: 1, ana_cpp_ctrl: 0x0e, ana_lpf_c_sel: 0, cd_tx_ser_rate_sel: 0,
    },
    RoPllConfig {
        bit_rate: 1_462_500,
        pms_mdiv: 122, pms_mdiv_afc: 122, pms_pdiv: 1, pms_refdiv: 1, pms_sdiv: 3,
        pms_iqdiv_rstn: 1, ref_clk_sel: 1, sdm_en: 1, sdm_rstn: 1, sdc_frac_en: 1,
        sdc_rstn: 1, sdm_clk_div: 1, sdm_deno: 244, sdm_num_sign: 1, sdm_num: 16,
        sdc_n: 2, sdc_num: 1, sdc_deno: 1, sdc_ndiv_rstn: 1, ssc_en: 0,
        ssc_fm_dev: 0x20, ssc_fm_freq: 0x0c, ssc_clk_div_sel: 1, ana_cpp_ctrl: 0x0e, ana_lpf_c_sel: 0, cd_tx_ser_rate_sel: 0,
    },
    RoPllConfig {
        bit_rate: 1_190_000,
        pms_mdiv: 149, pms_mdiv_afc: 149, pms_pdiv: 1, pms_refdiv: 1, pms_sdiv: 5,
        pms_iqdiv_rstn: 1, ref_clk_sel: 1, sdm_en: 1, sdm_rstn: 1, sdc_frac_en: 1,
        sdc_rstn: 1, sdm_clk_div: 1, sdm_deno: 149, sdm_num_sign: 1, sdm_num: 16,
        sdc_n: 2, sdc_num: 1, sdc_deno: 1, sdc_ndiv_rstn: 1, ssc_en: 0,
        ssc_fm_dev: 0x20, ssc_fm_freq: 0x0c, ssc_clk_div_sel: 1, ana_cpp_ctrl: 0x0e, ana_lpf_c_sel: 0, cd_tx_ser_rate_sel: 0,
    },
    RoPllConfig {
        bit_rate: 1_065_000,
        pms_mdiv: 89, pms_mdiv_afc: 89, pms_pdiv: 1, pms_refdiv: 1, pms_sdiv: 3,
        pms_iqdiv_rstn: 1, ref_clk_sel: 1, sdm_en: 1, sdm_rstn: 1, sdc_frac_en: 1,
        sdc_rstn: 1, sdm_clk_div: 1, sdm_deno: 89, sdm_num_sign: 1, sdm_num: 16,
        sdc_n: 1, sdc_num: 0, sdc_deno: 1, sdc_ndiv_rstn: 1, ssc_en: 0,
        ssc_fm_dev: 0x20, ssc_fm_freq: 0x0c, ssc_clk_div_sel: 1, ana_cpp_ctrl: 0x0e, ana_lpf_c_sel: 0, cd_tx_ser_rate_sel: 0,
    },
    RoPllConfig {
        bit_rate: 1_080_000,
        pms_mdiv: 135, pms_mdiv_afc: 135, pms_pdiv: 1, pms_refdiv: 1, pms_sdiv: 5,
        pms_iqdiv_rstn: 1, ref_clk_sel: 1, sdm_en: 0, sdm_rstn: 1, sdc_frac_en: 0,
        sdc_rstn: 1, sdm_clk_div: 1, sdm_deno: 9, sdm_num_sign: 0, sdm_num: 5,
        sdc_n: 0, sdc_num: 20, sdc_deno: 24, sdc_ndiv_rstn: 1, ssc_en: 0,
        ssc_fm_dev: 0x20, ssc_fm_freq: 0x0c, ssc_clk_div_sel: 1, ana_cpp_ctrl: 0x0e, ana_lpf_c_sel: 0, cd_tx_ser_rate_sel: 0,
    },
    RoPllConfig {
        bit_rate: 855_000,
        pms_mdiv: 214, pms_mdiv_afc: 214, pms_pdiv: 1, pms_refdiv: 1, pms_sdiv: 11,
        pms_iqdiv_rstn: 1, ref_clk_sel: 1, sdm_en: 1, sdm_rstn: 1, sdc_frac_en: 1,
        sdc_rstn: 1, sdm_clk_div: 1, sdm_deno: 214, sdm_num_sign: 1, sdm_num: 16,
        sdc_n: 2, sdc_num: 1, sdc_deno: 1, sdc_ndiv_rstn: 1, ssc_en: 0,
        ssc_fm_dev: 0x20, ssc_fm_freq: 0x0c, ssc_clk_div_sel: 1, ana_cpp_ctrl: 0x0e, ana_lpf_c_sel: 0, cd_tx_ser_rate_sel: 0,
    },
    RoPllConfig {
        bit_rate: 835_000,
        pms_mdiv: 105, pms_mdiv_afc: 105, pms_pdiv: 1, pms_refdiv: 1, pms_sdiv: 5,
        pms_iqdiv_rstn: 1, ref_clk_sel: 1, sdm_en: 1, sdm_rstn: 1, sdc_frac_en: 1,
        sdc_rstn: 1, sdm_clk_div: 1, sdm_deno: 42, sdm_num_sign: 1, sdm_num: 16,
        sdc_n: 1, sdc_num: 0, sdc_deno: 1, sdc_ndiv_rstn: 1, ssc_en: 0,
        ssc_fm_dev: 0x20, ssc_fm_freq: 0x0c, ssc_clk_div_sel: 1, ana_cpp_ctrl: 0x0e, ana_lpf_c_sel: 0, cd_tx_ser_rate_sel: 0,
    },
    RoPllConfig {
        bit_rate: 928_125,
        pms_mdiv: 155, pms_mdiv_afc: 155, pms_pdiv: 1, pms_refdiv: 1, pms_sdiv: 7,
        pms_iqdiv_rstn: 1, ref_clk_sel: 1, sdm_en: 1, sdm_rstn: 1, sdc_frac_en: 1,
        sdc_rstn: 1, sdm_clk_div: 1, sdm_deno: 62, sdm_num_sign: 1, sdm_num: 16,
        sdc_n: 5, sdc_num: 0, sdc_deno: 1, sdc_ndiv_rstn: 1, ssc_en: 0,
        ssc_fm_dev: 0x20, ssc_fm_freq: 0x0c, ssc_clk_div_sel: 1, ana_cpp_ctrl: 0x0e, ana_lpf_c_sel: 0, cd_tx_ser_rate_sel: 0,
    },
    RoPllConfig {
        bit_rate: 742_500,
        pms_mdiv: 124, pms_mdiv_afc: 124, pms_pdiv: 1, pms_refdiv: 1, pms_sdiv: 7,
        pms_iqdiv_rstn: 1, ref_clk_sel: 1, sdm_en: 1, sdm_rstn: 1, sdc_frac_en: 1,
        sdc_rstn: 1, sdm_clk_div: 1, sdm_deno: 62, sdm_num_sign: 1, sdm_num: 16,
        sdc_n: 5, sdc_num: 0, sdc_deno: 1, sdc_ndiv_rstn: 1, ssc_en: 0,
        ssc_fm_dev: 0x20, ssc_fm_freq: 0x0c, ssc_clk_div_sel: 1, ana_cpp_ctrl: 0x0e, ana_lpf_c_sel: 0, cd_tx_ser_rate_sel: 0,
    },
    RoPllConfig {
        bit_rate: 650_000,
        pms_mdiv: 162, pms_mdiv_afc: 162, pms_pdiv: 1, pms_refdiv: 1, pms_sdiv: 11,
        pms_iqdiv_rstn: 1, ref_clk_sel: 1, sdm_en: 1, sdm_rstn: 1, sdc_frac_en: 1,
        sdc_rstn: 1, sdm_clk_div: 1, sdm_deno: 54, sdm_num_sign: 0, sdm_num: 16,
        sdc_n: 4, sdc_num: 1, sdc_deno: 1, sdc_ndiv_rstn: 1, ssc_en: 0,
        ssc_fm_dev: 0x20, ssc_fm_freq: 0x0c, ssc_clk_div_sel: 1, ana_cpp_ctrl: 0x0e, ana_lpf_c_sel: 0, cd_tx_ser_rate_sel: 0,
    },
    RoPllConfig {
        bit_rate: 337_500,
        pms_mdiv: 112, pms_mdiv_afc: 112, pms_pdiv: 1, pms_refdiv: 1, pms_sdiv: 15,
        pms_iqdiv_rstn: 1, ref_clk_sel: 1, sdm_en: 1, sdm_rstn: 1, sdc_frac_en: 1,
        sdc_rstn: 1, sdm_clk_div: 1, sdm_deno: 2, sdm_num_sign: 0, sdm_num: 1,
        sdc_n: 5, sdc_num: 1, sdc_deno: 1, sdc_ndiv_rstn: 1, ssc_en: 0,
        ssc_fm_dev: 0x20, ssc_fm_freq: 0x0c, ssc_clk_div_sel: 1, ana_cpp_ctrl: 0x0e, ana_lpf_c_sel: 0, cd_tx_ser_rate_sel: 0,
    },
    RoPllConfig {
        bit_rate: 400_000,
        pms_mdiv: 100, pms_mdiv_afc: 100, pms_pdiv: 1, pms_refdiv: 1, pms_sdiv: 11,
        pms_iqdiv_rstn: 1, ref_clk_sel: 1, sdm_en: 0, sdm_rstn: 1, sdc_frac_en: 0,
        sdc_rstn: 1, sdm_clk_div: 1, sdm_deno: 9, sdm_num_sign: 0, sdm_num: 5,
        sdc_n: 0, sdc_num: 20, sdc_deno: 24, sdc_ndiv_rstn: 1, ssc_en: 0,
        ssc_fm_dev: 0x20, ssc_fm_freq: 0x0c, ssc_clk_div_sel: 1, ana_cpp_ctrl: 0x0e, ana_lpf_c_sel: 0, cd_tx_ser_rate_sel: 0,
    },
    RoPllConfig {
        bit_rate: 270_000,
        pms_mdiv: 90, pms_mdiv_afc: 90, pms_pdiv: 1, pms_refdiv: 1, pms_sdiv: 15,
        pms_iqdiv_rstn: 1, ref_clk_sel: 1, sdm_en: 0, sdm_rstn: 1, sdc_frac_en: 0,
        sdc_rstn: 1, sdm_clk_div: 1, sdm_deno: 9, sdm_num_sign: 0, sdm_num: 5,
        sdc_n: 0, sdc_num: 20, sdc_deno: 24, sdc_ndiv_rstn: 1, ssc_en: 0,
        ssc_fm_dev: 0x20, ssc_fm_freq: 0x0c, ssc_clk_div_sel: 1, ana_cpp_ctrl: 0x0e, ana_lpf_c_sel: 0, cd_tx_ser_rate_sel: 0,
    },
    RoPllConfig {
        bit_rate: 251_750,
        pms_mdiv: 84, pms_mdiv_afc: 84, pms_pdiv: 1, pms_refdiv: 1, pms_sdiv: 15,
        pms_iqdiv_rstn: 1, ref_clk_sel: 1, sdm_en: 1, sdm_rstn: 1, sdc_frac_en: 1,
        sdc_rstn: 1, sdm_clk_div: 1, sdm_deno: 168, sdm_num_sign: 1, sdm_num: 16,
        sdc_n: 4, sdc_num: 1, sdc_deno: 1, sdc_ndiv_rstn: 1, ssc_en: 0,
        ssc_fm_dev: 0x20, ssc_fm_freq: 0x0c, ssc_clk_div_sel: 1, ana_cpp_ctrl: 0x0e, ana_lpf_c_sel: 0, cd_tx_ser_rate_sel: 0,
    },
];

/// Looks up the hand-tuned setting for an exact standard rate match
pub fn lookup(bit_rate_khz: u32) -> Option<&'static RoPllConfig> {
    ROPLL_TMDS_CONFIGS.iter().find(|c| c.bit_rate == bit_rate_khz)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_rates_hit() {
        for rate in [5_940_000, 2_970_000, 1_485_000, 270_000] {
            assert!(lookup(rate).is_some(), "missing {}", rate);
        }
    }

    #[test]
    fn unknown_rate_misses() {
        assert!(lookup(0).is_none());
        assert!(lookup(1_000_000).is_none());
        assert!(lookup(5_940_001).is_none());
    }

    #[test]
    fn stored_values_match_documentation() {
        let c = lookup(5_940_000).unwrap();
        assert_eq!(c.pms_mdiv, 124);
        assert_eq!(c.pms_sdiv, 0);
        assert_eq!(c.sdm_deno, 62);
        assert_eq!(c.sdm_num, 16);

        let c = lookup(1_485_000).unwrap();
        assert_eq!(c.pms_mdiv, 0x7b);
        assert_eq!(c.pms_sdiv, 3);

        let c = lookup(270_000).unwrap();
        assert_eq!(c.pms_mdiv, 0x5a);
        assert_eq!(c.pms_sdiv, 0xf);
        assert_eq!(c.sdm_en, 0);
    }

    #[test]
    fn table_wide_invariants() {
        for c in ROPLL_TMDS_CONFIGS.iter() {
            assert!((20..=255).contains(&(c.pms_mdiv as u32)), "rate {}", c.bit_rate);
            assert_eq!(c.pms_mdiv, c.pms_mdiv_afc, "rate {}", c.bit_rate);
            assert_eq!(c.pms_pdiv, 1, "rate {}", c.bit_rate);
            assert_eq!(c.pms_refdiv, 1, "rate {}", c.bit_rate);
            assert!(c.sdiv() <= 16, "rate {}", c.bit_rate);
        }
    }

    #[test]
    fn rates_are_unique() {
        for (i, a) in ROPLL_TMDS_CONFIGS.iter().enumerate() {
            for b in ROPLL_TMDS_CONFIGS.iter().skip(i + 1) {
                assert_ne!(a.bit_rate, b.bit_rate);
            }
        }
    }
}
