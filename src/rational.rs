//! Best rational approximation
//!
//! Continued-fraction convergent search, the classical helper clock drivers
//! use to pick fractional divider values that fit fixed-width register fields.

/// A fraction approximating some target ratio under size bounds
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct Approximation {
    pub numerator: u32,
    pub denominator: u32,
}

/// Finds the fraction closest to `given_numerator / given_denominator` among
/// those with numerator `<= max_numerator` and denominator `<= max_denominator`.
///
/// `n/d` is reduced each iteration via the Euclidean algorithm, `a` being the
/// current continued-fraction term. `n2/d2`, `n1/d1` and `n0/d0` are the
/// current, previous and second-previous convergents. Once the next convergent
/// overflows a bound the result is whichever of the previous convergent or the
/// largest in-bounds semiconvergent (final term `t`) lies closer to the target
/// ratio. On the first term there is no previous convergent to fall back to,
/// so the semiconvergent is taken unconditionally; the bound quotients for `t`
/// are only evaluated against nonzero divisors.
///
/// Pure function. With `given_denominator > 0` the returned denominator is
/// always nonzero; a zero input denominator is a degenerate case that yields
/// the seed convergent `1/0`.
pub fn best_approximation(
    given_numerator: u32,
    given_denominator: u32,
    max_numerator: u32,
    max_denominator: u32,
) -> Approximation {
    let mut n = given_numerator;
    let mut d = given_denominator;
    let (mut n0, mut d0) = (0u32, 1u32);
    let (mut n1, mut d1) = (1u32, 0u32);

    while d != 0 {
        // next continued-fraction term
        let dp = d;
        let a = n / d;
        d = n % d;
        n = dp;

        let n2 = n0 + a * n1;
        let d2 = d0 + a * d1;

        if n2 > max_numerator || d2 > max_denominator {
            let mut t = u32::MAX;
            if d1 != 0 {
                t = (max_denominator - d0) / d1;
            }
            if n1 != 0 {
                t = t.min((max_numerator - n0) / n1);
            }

            // Semiconvergent vs previous convergent: keep whichever is
            // closer to n/d.
            if d1 == 0 || 2 * t > a || (2 * t == a && d0 * dp > d1 * d) {
                n1 = n0 + t * n1;
                d1 = d0 + t * d1;
            }
            break;
        }

        n0 = n1;
        n1 = n2;
        d0 = d1;
        d1 = d2;
    }

    Approximation { numerator: n1, denominator: d1 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_fraction_within_bounds() {
        let a = best_approximation(1, 3, 127, 255);
        assert_eq!(a, Approximation { numerator: 1, denominator: 3 });
    }

    #[test]
    fn exact_fraction_is_reduced() {
        let a = best_approximation(45, 24, 127, 255);
        assert_eq!(a, Approximation { numerator: 15, denominator: 8 });
    }

    #[test]
    fn zero_numerator() {
        for d in [1, 2, 7, 255, 100_000] {
            let a = best_approximation(0, d, 127, 255);
            assert_eq!(a, Approximation { numerator: 0, denominator: 1 });
        }
    }

    #[test]
    fn previous_convergent_wins() {
        // 127/20 = 6.35; under den <= 8 the convergent 19/3 beats the
        // semiconvergent 51/8
        let a = best_approximation(127, 20, 127, 8);
        assert_eq!(a, Approximation { numerator: 19, denominator: 3 });
    }

    #[test]
    fn semiconvergent_wins() {
        // 31/10 = 3.1; under den <= 6 the semiconvergent 19/6 beats the
        // convergent 3/1
        let a = best_approximation(31, 10, 127, 6);
        assert_eq!(a, Approximation { numerator: 19, denominator: 6 });
    }

    #[test]
    fn first_term_exceeds_numerator_bound() {
        // a = 123 on the very first term; no previous convergent exists, the
        // result clamps to the numerator bound instead of dividing by d1 = 0
        let a = best_approximation(1230, 10, 100, 100);
        assert_eq!(a, Approximation { numerator: 100, denominator: 1 });
    }

    #[test]
    fn bounds_always_hold() {
        for n in 1..60u32 {
            for d in 1..60u32 {
                for (max_n, max_d) in [(127, 255), (10, 10), (3, 7)] {
                    let a = best_approximation(n, d, max_n, max_d);
                    assert!(a.numerator <= max_n, "{}/{} under ({},{})", n, d, max_n, max_d);
                    assert!(a.denominator <= max_d, "{}/{} under ({},{})", n, d, max_n, max_d);
                    assert!(a.denominator > 0, "{}/{} under ({},{})", n, d, max_n, max_d);
                }
            }
        }
    }

    #[test]
    fn idempotent() {
        let a = best_approximation(96_000, 264_000, 127, 255);
        let b = best_approximation(96_000, 264_000, 127, 255);
        assert_eq!(a, b);
        assert_eq!(a, Approximation { numerator: 4, denominator: 11 });
    }
}
