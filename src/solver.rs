//! ROPLL parameter search
//!
//! Finds integer divider and fractional sigma-delta settings that synthesize a
//! target TMDS bit rate from the reference clock. Known standard rates take
//! the hand-tuned table in [`crate::rates`]; everything else goes through the
//! divider search here.

use crate::{config::RoPllConfig, constants::*, rates, rational};

#[inline]
fn div_round_up(n: u32, d: u32) -> u32 {
    (n + d - 1) / d
}

/// Searches divider/multiplier settings producing `bit_rate_khz / 2` from a
/// `ref_khz` reference.
///
/// Post divider candidates are 1 and the even values up to 16, taken in
/// ascending order; the first candidate whose VCO frequency and multiplier
/// land in range wins, even when a later candidate would divide exactly.
/// When the reference multiple cannot hit the VCO target exactly, the
/// remainder is folded into the sigma-delta modulator: the SDC clock walk
/// picks the first candidate whose eight-fold multiple exceeds the reference
/// multiple, then both fractional terms come out of the continued-fraction
/// approximation bounded to their 7/8-bit register fields.
///
/// Returns `None` when no post divider satisfies the constraints; expected
/// for bit rates outside the achievable VCO window.
pub fn pll_params(ref_khz: u32, bit_rate_khz: u32) -> Option<RoPllConfig> {
    if ref_khz == 0 {
        return None;
    }

    let fout = bit_rate_khz / 2;

    for sdiv in 1..=SDIV_MAX {
        if sdiv % 2 == 1 && sdiv != 1 {
            continue;
        }

        let fvco = u64::from(fout) * u64::from(sdiv);
        if fvco < u64::from(VCO_FREQ_MIN) || fvco > u64::from(VCO_FREQ_MAX) {
            continue;
        }
        let fvco = fvco as u32;

        let mdiv = div_round_up(fvco, ref_khz);
        if mdiv < MDIV_MIN || mdiv > MDIV_MAX {
            continue;
        }

        let mut k = 0;
        let mut lc = 0;
        let mut k_sub = 0;
        let mut lc_sub = 0;

        if ref_khz * mdiv != fvco {
            // Smallest SDC clock whose N-fold multiple exceeds the reference
            // multiple; reject the whole Sdiv candidate if the walk tops out.
            let mut sdc = SDC_CLK_MIN;
            while sdc <= SDC_CLK_MAX {
                if sdc * SDM_ORDER > ref_khz * mdiv {
                    break;
                }
                sdc += ref_khz;
            }
            if sdc > SDC_CLK_MAX {
                continue;
            }

            let prim = rational::best_approximation(
                ref_khz * mdiv - fvco,
                sdc / 16,
                SDM_NUM_MAX,
                SDM_DENO_MAX,
            );
            k = prim.numerator;
            lc = prim.denominator;

            let sub = rational::best_approximation(
                sdc * SDM_ORDER - ref_khz * mdiv,
                sdc,
                SDM_NUM_MAX,
                SDM_DENO_MAX,
            );
            k_sub = sub.numerator;
            lc_sub = sub.denominator;
        }

        let mut cfg = RoPllConfig {
            bit_rate: bit_rate_khz,
            ..RoPllConfig::default()
        };
        cfg.pms_mdiv = mdiv as u8;
        cfg.pms_mdiv_afc = mdiv as u8;
        cfg.pms_pdiv = 1;
        cfg.pms_refdiv = 1;
        cfg.pms_sdiv = (sdiv - 1) as u8;

        cfg.sdm_en = (k > 0) as u8;
        if cfg.sdm_en != 0 {
            cfg.sdm_deno = lc as u8;
            cfg.sdm_num_sign = 1;
            cfg.sdm_num = k as u8;
            cfg.sdc_n = (SDM_ORDER - 3) as u8;
            cfg.sdc_num = k_sub as u8;
            cfg.sdc_deno = lc_sub as u8;
        }

        return Some(cfg);
    }

    None
}

/// ROPLL setting for a TMDS bit rate: hand-tuned table entry when the rate is
/// a known standard one, computed search at the default reference otherwise.
pub fn tmds_config(bit_rate_khz: u32) -> Option<RoPllConfig> {
    if let Some(cfg) = rates::lookup(bit_rate_khz) {
        return Some(*cfg);
    }
    pll_params(REF_CLK_KHZ, bit_rate_khz)
}
