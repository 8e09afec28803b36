use super::{Band, BandSelection, EmbeddingDomain, Grid, Locator};
use crate::qim::{Quantizer, SignedQim};
use crate::transform::{Plane, Subbands};

/// One slot per coefficient of the selected detail band(s)
#[derive(Debug, Clone)]
pub struct WaveletDomain {
    subbands: Subbands,
    locator: Locator,
}

impl WaveletDomain {
    pub fn new(subbands: Subbands, selection: BandSelection) -> Self {
        let grid = |band: &Plane| Grid::new(band.height(), band.width());
        let locator = Locator::new(selection, grid(&subbands.hl), grid(&subbands.lh));

        Self { subbands, locator }
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
}

impl EmbeddingDomain for WaveletDomain {
    fn capacity(&self) -> usize {
        self.locator.capacity()
    }

    fn quantizer(&self) -> Quantizer {
        SignedQim.into()
    }

    fn read_coefficient(&self, slot: usize) -> Option<f64> {
        let at = self.locator.locate(slot)?;
        Some(self.band(at.band).get(at.row, at.col))
    }

    fn write_coefficient(&mut self, slot: usize, value: f64) -> bool {
        let Some(at) = self.locator.locate(slot) else {
            return false;
        };
        self.band_mut(at.band).set(at.row, at.col, value);
        true
    }

    fn subbands(&self) -> &Subbands {
        &self.subbands
    }
}
