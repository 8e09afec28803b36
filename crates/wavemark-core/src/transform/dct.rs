//! 8x8 type-II DCT and its type-III inverse.
//!
//! ```text
//! F(u,v) = 1/4 C(u) C(v) sum_x sum_y f(x,y) cos((2x+1)u pi/16) cos((2y+1)v pi/16)
//! f(x,y) = 1/4 sum_u sum_v C(u) C(v) F(u,v) cos((2x+1)u pi/16) cos((2y+1)v pi/16)
//! ```
//!
//! with `C(0) = 1/sqrt(2)` and `C(k) = 1` otherwise.

use std::f64::consts::{FRAC_1_SQRT_2, PI};

use crate::error::WatermarkError;
use crate::result::Result;

/// The only supported block edge length
pub const BLOCK_SIZE: usize = 8;

/// One square tile, indexed `[row][col]` in the sample domain and `[u][v]` in the frequency domain
pub type Block = [[f64; BLOCK_SIZE]; BLOCK_SIZE];

/// Forward and inverse 8x8 cosine transform with a precomputed basis
#[derive(Debug, Clone)]
pub struct BlockTransform {
    /// `cos[x][u] = C(u) * cos((2x+1) u pi / 16)`
    cos: Block,
}

impl BlockTransform {
    /// Creates the transform for `block_size`, anything but 8 is rejected
    pub fn new(block_size: usize) -> Result<Self> {
        if block_size != BLOCK_SIZE {
            return Err(WatermarkError::Configuration(format!(
                "block size {block_size} is not supported, only {BLOCK_SIZE} is"
            )));
        }

        let mut cos = [[0.0; BLOCK_SIZE]; BLOCK_SIZE];
        for (x, row) in cos.iter_mut().enumerate() {
            for (u, c) in row.iter_mut().enumerate() {
                let scale = if u == 0 { FRAC_1_SQRT_2 } else { 1.0 };
                *c = scale * (((2 * x + 1) * u) as f64 * PI / (2 * BLOCK_SIZE) as f64).cos();
            }
        }

        Ok(Self { cos })
    }

    pub fn forward(&self, block: &Block) -> Block {
        let mut out = [[0.0; BLOCK_SIZE]; BLOCK_SIZE];
        for (u, out_row) in out.iter_mut().enumerate() {
            for (v, f) in out_row.iter_mut().enumerate() {
                let mut sum = 0.0;
                for (x, row) in block.iter().enumerate() {
                    let cxu = self.cos[x][u];
                    for (y, &sample) in row.iter().enumerate() {
                        sum += sample * cxu * self.cos[y][v];
                    }
                }
                *f = 0.25 * sum;
            }
        }
        out
    }

    pub fn inverse(&self, coefficients: &Block) -> Block {
        let mut out = [[0.0; BLOCK_SIZE]; BLOCK_SIZE];
        for (x, out_row) in out.iter_mut().enumerate() {
            for (y, sample) in out_row.iter_mut().enumerate() {
                let mut sum = 0.0;
                for (u, row) in coefficients.iter().enumerate() {
                    let cxu = self.cos[x][u];
                    for (v, &f) in row.iter().enumerate() {
                        sum += f * cxu * self.cos[y][v];
                    }
                }
                *sample = 0.25 * sum;
            }
        }
        out
    }
}
