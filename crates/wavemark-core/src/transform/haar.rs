//! Single level 2D Haar decomposition.
//!
//! Every 2x2 neighbourhood `[a b; c d]` of the plane becomes one sample in
//! each subband:
//!
//! ```text
//! LL = (a + b + c + d) / 2
//! HL = (a - b + c - d) / 2
//! LH = (a + b - c - d) / 2
//! HH = (a - b - c + d) / 2
//! ```
//!
//! The `1/2` scale makes the transform orthonormal, so [`inverse`] is the
//! same butterfly again.

use super::Plane;

/// The four subbands of a one level decomposition, each half the size of the plane
#[derive(Debug, Clone, PartialEq)]
pub struct Subbands {
    pub ll: Plane,
    pub hl: Plane,
    pub lh: Plane,
    pub hh: Plane,
}

/// Decomposes `plane` into its subbands.
///
/// A trailing odd row or column is ignored.
pub fn forward(plane: &Plane) -> Subbands {
    let width = plane.width() / 2;
    let height = plane.height() / 2;

    let mut ll = Plane::new(width, height);
    let mut hl = Plane::new(width, height);
    let mut lh = Plane::new(width, height);
    let mut hh = Plane::new(width, height);

    for i in 0..height {
        for j in 0..width {
            let a = plane.get(2 * i, 2 * j);
            let b = plane.get(2 * i, 2 * j + 1);
            let c = plane.get(2 * i + 1, 2 * j);
            let d = plane.get(2 * i + 1, 2 * j + 1);

            ll.set(i, j, (a + b + c + d) / 2.0);
            hl.set(i, j, (a - b + c - d) / 2.0);
            lh.set(i, j, (a + b - c - d) / 2.0);
            hh.set(i, j, (a - b - c + d) / 2.0);
        }
    }

    Subbands { ll, hl, lh, hh }
}

/// Rebuilds the plane from its subbands, all four must share the same dimensions
pub fn inverse(subbands: &Subbands) -> Plane {
    let Subbands { ll, hl, lh, hh } = subbands;
    let mut plane = Plane::new(ll.width() * 2, ll.height() * 2);

    for i in 0..ll.height() {
        for j in 0..ll.width() {
            let (s, h, v, d) = (ll.get(i, j), hl.get(i, j), lh.get(i, j), hh.get(i, j));

            plane.set(2 * i, 2 * j, (s + h + v + d) / 2.0);
            plane.set(2 * i, 2 * j + 1, (s - h + v - d) / 2.0);
            plane.set(2 * i + 1, 2 * j, (s + h - v - d) / 2.0);
            plane.set(2 * i + 1, 2 * j + 1, (s - h - v + d) / 2.0);
        }
    }

    plane
}

#[cfg(test)]
mod tests {
    use super::*;

    fn random_plane(width: usize, height: usize, seed: u64) -> Plane {
        let mut rng = fastrand::Rng::with_seed(seed);
        Plane::from_fn(width, height, |_, _| rng.f64() * 255.0)
    }

    #[test]
    fn should_split_a_2x2_neighbourhood() {
        let p = Plane::from_vec(2, 2, vec![10.0, 4.0, 6.0, 2.0]).unwrap();
        let s = forward(&p);

        assert_eq!(s.ll.get(0, 0), 11.0);
        assert_eq!(s.hl.get(0, 0), 5.0);
        assert_eq!(s.lh.get(0, 0), 3.0);
        assert_eq!(s.hh.get(0, 0), 1.0);
    }

    #[test]
    fn should_produce_half_sized_subbands() {
        let s = forward(&Plane::new(64, 32));

        for band in [&s.ll, &s.hl, &s.lh, &s.hh] {
            assert_eq!((band.width(), band.height()), (32, 16));
        }
    }

    #[test]
    fn should_invert_exactly() {
        for (i, (w, h)) in [(2, 2), (8, 6), (64, 64), (30, 50)].into_iter().enumerate() {
            let p = random_plane(w, h, i as u64);
            let restored = inverse(&forward(&p));

            for (a, b) in p.as_slice().iter().zip(restored.as_slice()) {
                assert!((a - b).abs() < 1e-9, "{a} != {b} on {w}x{h}");
            }
        }
    }

    #[test]
    fn should_ignore_a_trailing_odd_row_and_column() {
        let p = random_plane(9, 7, 11);

        assert_eq!(forward(&p), forward(&p.cropped_to_even()));
        assert_eq!(forward(&p).ll.width(), 4);
        assert_eq!(forward(&p).ll.height(), 3);
    }

    #[test]
    fn should_keep_flat_planes_free_of_detail() {
        let s = forward(&Plane::from_fn(16, 16, |_, _| 128.0));

        assert!(s.hl.as_slice().iter().all(|&c| c == 0.0));
        assert!(s.lh.as_slice().iter().all(|&c| c == 0.0));
        assert!(s.hh.as_slice().iter().all(|&c| c == 0.0));
    }
}
