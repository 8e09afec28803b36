//! Quantization index modulation.
//!
//! A bit is written by moving a coefficient onto one of two interleaved
//! lattices of step `q` and read back by checking which lattice the
//! coefficient is closest to. Both codecs overwrite the coefficient
//! regardless of its previous value, so decoding needs no original.

use enum_dispatch::enum_dispatch;

/// Writes and reads one bit per scalar coefficient
#[enum_dispatch]
pub trait QimCodec {
    /// Moves `coefficient` onto the lattice of `bit`
    fn encode(&self, coefficient: f64, q: f64, bit: bool) -> f64;

    /// Reads the bit back, `true` iff the remainder modulo `q` is at least `q / 2`
    fn decode(&self, coefficient: f64, q: f64) -> bool;
}

/// The two codecs, selected by the embedding domain
#[enum_dispatch(QimCodec)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantizer {
    MagnitudeSignQim,
    SignedQim,
}

/// Quantizes the magnitude and keeps the sign, used in the cosine domain.
///
/// Offsets are `q/4` for `0` and `3q/4` for `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MagnitudeSignQim;

impl QimCodec for MagnitudeSignQim {
    fn encode(&self, coefficient: f64, q: f64, bit: bool) -> f64 {
        let magnitude = coefficient.abs();
        let base = (magnitude / q).floor() * q;
        let target = base + if bit { 0.75 * q } else { 0.25 * q };

        if coefficient < 0.0 {
            -target
        } else {
            target
        }
    }

    fn decode(&self, coefficient: f64, q: f64) -> bool {
        coefficient.abs().rem_euclid(q) >= q / 2.0
    }
}

/// Quantizes the signed value, used directly on wavelet coefficients.
///
/// Offsets are `q/4` for `0` and `0.98q` for `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SignedQim;

impl QimCodec for SignedQim {
    fn encode(&self, coefficient: f64, q: f64, bit: bool) -> f64 {
        let base = (coefficient / q).floor() * q;
        base + if bit { 0.98 * q } else { 0.25 * q }
    }

    fn decode(&self, coefficient: f64, q: f64) -> bool {
        coefficient.rem_euclid(q) >= q / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEPS: [f64; 4] = [4.0, 12.0, 18.0, 64.0];
    const COEFFICIENTS: [f64; 9] = [-300.5, -37.0, -5.2, -0.1, 0.0, 0.3, 7.7, 42.0, 1234.56];

    /// offsets in units of `q`, all strictly inside `(lower, upper)`
    fn offsets(lower: f64, upper: f64) -> impl Iterator<Item = f64> {
        (1..20).map(move |i| lower + (upper - lower) * i as f64 / 20.0)
    }

    #[test]
    fn magnitude_sign_should_keep_the_sign() {
        let qim = MagnitudeSignQim;

        assert_eq!(qim.encode(-37.0, 12.0, false), -39.0);
        assert_eq!(qim.encode(37.0, 12.0, true), 45.0);
        assert_eq!(qim.encode(0.0, 12.0, true), 9.0);
    }

    #[test]
    fn signed_should_quantize_towards_negative_infinity() {
        let qim = SignedQim;

        assert_eq!(qim.encode(-5.0, 10.0, false), -7.5);
        assert!((qim.encode(-5.0, 10.0, true) - (-0.2)).abs() < 1e-12);
        assert_eq!(qim.encode(25.0, 10.0, false), 22.5);
    }

    #[test]
    fn magnitude_sign_should_tolerate_a_quarter_step() {
        let qim = MagnitudeSignQim;
        for q in STEPS {
            for c in COEFFICIENTS {
                for bit in [false, true] {
                    let encoded = qim.encode(c, q, bit);
                    for delta in offsets(-0.25, 0.25) {
                        assert_eq!(
                            qim.decode(encoded + delta * q, q),
                            bit,
                            "c={c} q={q} bit={bit} delta={delta}q"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn signed_should_tolerate_a_quarter_step_for_zero() {
        let qim = SignedQim;
        for q in STEPS {
            for c in COEFFICIENTS {
                let encoded = qim.encode(c, q, false);
                for delta in offsets(-0.25, 0.25) {
                    assert!(!qim.decode(encoded + delta * q, q), "c={c} q={q} delta={delta}q");
                }
            }
        }
    }

    #[test]
    fn signed_one_should_tolerate_downward_drift_only() {
        let qim = SignedQim;
        for q in STEPS {
            for c in COEFFICIENTS {
                let encoded = qim.encode(c, q, true);
                for delta in offsets(-0.48, 0.02) {
                    assert!(qim.decode(encoded + delta * q, q), "c={c} q={q} delta={delta}q");
                }
                // drifting up by more than 0.02q wraps into the next cell
                assert!(!qim.decode(encoded + 0.1 * q, q));
            }
        }
    }

    #[test]
    fn should_overwrite_regardless_of_previous_value() {
        for quantizer in [Quantizer::from(MagnitudeSignQim), Quantizer::from(SignedQim)] {
            for c in COEFFICIENTS {
                assert!(quantizer.decode(quantizer.encode(c, 18.0, true), 18.0));
                assert!(!quantizer.decode(quantizer.encode(c, 18.0, false), 18.0));
            }
        }
    }
}
