use super::{Band, BandSelection, EmbeddingDomain, Grid, Locator};
use crate::error::WatermarkError;
use crate::qim::{MagnitudeSignQim, QimCodec, Quantizer};
use crate::result::Result;
use crate::transform::{Block, BlockTransform, Plane, Subbands, BLOCK_SIZE};

/// One slot per full 8x8 block of the selected detail band(s).
///
/// The slot's coefficient is the `(u, v)` entry of the block's cosine
/// transform, a mid frequency by default. Partial blocks at the right and
/// bottom edge carry nothing.
#[derive(Debug, Clone)]
pub struct BlockDctDomain {
    subbands: Subbands,
    locator: Locator,
    transform: BlockTransform,
    uv: (usize, usize),
}

impl BlockDctDomain {
    pub fn new(
        subbands: Subbands,
        selection: BandSelection,
        block_size: usize,
        uv: (usize, usize),
    ) -> Result<Self> {
        let transform = BlockTransform::new(block_size)?;
        if uv.0 >= BLOCK_SIZE || uv.1 >= BLOCK_SIZE {
            return Err(WatermarkError::Configuration(format!(
                "frequency position {uv:?} lies outside a {BLOCK_SIZE}x{BLOCK_SIZE} block"
            )));
        }

        let grid = |band: &Plane| Grid::new(band.height() / BLOCK_SIZE, band.width() / BLOCK_SIZE);
        let locator = Locator::new(selection, grid(&subbands.hl), grid(&subbands.lh));

        Ok(Self {
            subbands,
            locator,
            transform,
            uv,
        })
    }

    pub fn into_subbands(self) -> Subbands {
        self.subbands
    }

    fn band(&self, band: Band) -> &Plane {
        match band {
            Band::Hl => &self.subbands.hl,
            Band::Lh => &self.subbands.lh,
        }
    }

    fn band_mut(&mut self, band: Band) -> &mut Plane {
        match band {
            Band::Hl => &mut self.subbands.hl,
            Band::Lh => &mut self.subbands.lh,
        }
    }

    /// Maps the slot's coefficient through `f` with one forward and one inverse transform
    fn update_coefficient(&mut self, slot: usize, f: impl FnOnce(f64) -> f64) -> bool {
        let Some(at) = self.locator.locate(slot) else {
            return false;
        };
        let (u, v) = self.uv;

        let mut coefficients = self
            .transform
            .forward(&read_block(self.band(at.band), at.row, at.col));
        coefficients[u][v] = f(coefficients[u][v]);
        let block = self.transform.inverse(&coefficients);
        write_block(self.band_mut(at.band), at.row, at.col, &block);

        true
    }
}

fn read_block(plane: &Plane, block_row: usize, block_col: usize) -> Block {
    let (row0, col0) = (block_row * BLOCK_SIZE, block_col * BLOCK_SIZE);
    let mut block = [[0.0; BLOCK_SIZE]; BLOCK_SIZE];
    for (x, row) in block.iter_mut().enumerate() {
        for (y, sample) in row.iter_mut().enumerate() {
            *sample = plane.get(row0 + x, col0 + y);
        }
    }
    block
}

fn write_block(plane: &mut Plane, block_row: usize, block_col: usize, block: &Block) {
    let (row0, col0) = (block_row * BLOCK_SIZE, block_col * BLOCK_SIZE);
    for (x, row) in block.iter().enumerate() {
        for (y, &sample) in row.iter().enumerate() {
            plane.set(row0 + x, col0 + y, sample);
        }
    }
}

impl EmbeddingDomain for BlockDctDomain {
    fn capacity(&self) -> usize {
        self.locator.capacity()
    }

    fn quantizer(&self) -> Quantizer {
        MagnitudeSignQim.into()
    }

    fn read_coefficient(&self, slot: usize) -> Option<f64> {
        let at = self.locator.locate(slot)?;
        let block = read_block(self.band(at.band), at.row, at.col);
        let (u, v) = self.uv;

        Some(self.transform.forward(&block)[u][v])
    }

    fn write_coefficient(&mut self, slot: usize, value: f64) -> bool {
        self.update_coefficient(slot, |_| value)
    }

    fn embed_bit(&mut self, slot: usize, bit: bool, q: f64) -> bool {
        let quantizer = self.quantizer();
        self.update_coefficient(slot, |c| quantizer.encode(c, q, bit))
    }

    fn subbands(&self) -> &Subbands {
        &self.subbands
    }
}
