//! Writing a watermark into a channel plane or an image

use log::{debug, warn};

use crate::domain::{Domain, EmbeddingDomain};
use crate::media::image::{crop_even, decode, encode, read_channel, write_channel};
use crate::media::WatermarkOptions;
use crate::payload::{Frame, HEADER_BITS};
use crate::permutation::Permutation;
use crate::result::Result;
use crate::transform::{haar, Plane};
use crate::WatermarkError;

/// What an embedding did to a plane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbedStats {
    /// Slots the plane offers
    pub capacity: usize,
    /// Slots the repetition coded frame occupied
    pub frame_bits: usize,
    /// Slots the locator could not place, left unwritten
    pub skipped_slots: usize,
}

/// The watermarked image together with the [`EmbedStats`] of its plane
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedReport {
    pub image: Vec<u8>,
    pub capacity: usize,
    pub frame_bits: usize,
    pub skipped_slots: usize,
}

/// Slots of a carrier and the longest text that fits into them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityInfo {
    pub slots: usize,
    pub max_payload_bytes: usize,
}

impl CapacityInfo {
    pub fn new(slots: usize, reps: usize) -> Self {
        let frame_bits = slots / reps.max(1);

        Self {
            slots,
            max_payload_bytes: frame_bits.saturating_sub(HEADER_BITS) / 8,
        }
    }
}

/// Embeds `text` into the even part of `plane`.
///
/// A trailing odd row or column is left as it is. Nothing is modified
/// when the frame does not fit.
pub fn embed_plane(plane: &mut Plane, text: &str, options: &WatermarkOptions) -> Result<EmbedStats> {
    options.validate()?;

    let mut domain = Domain::new(haar::forward(&plane.cropped_to_even()), options)?;
    let stats = write_frame(&mut domain, text.as_bytes(), options)?;
    let marked = haar::inverse(&domain.into_subbands());

    for row in 0..marked.height() {
        for col in 0..marked.width() {
            plane.set(row, col, marked.get(row, col));
        }
    }

    Ok(stats)
}

/// Embeds `text` into image bytes and encodes the result as `options.output` asks
pub fn embed(image: &[u8], text: &str, options: &WatermarkOptions) -> Result<Vec<u8>> {
    embed_with_report(image, text, options).map(|report| report.image)
}

pub fn embed_with_report(image: &[u8], text: &str, options: &WatermarkOptions) -> Result<EmbedReport> {
    options.validate()?;

    let mut carrier = crop_even(decode(image)?)?;
    let mut plane = read_channel(&carrier, options.channel);
    debug!(
        "embedding {} bytes into channel {} of a {}x{} image",
        text.len(),
        options.channel,
        plane.width(),
        plane.height()
    );

    let stats = embed_plane(&mut plane, text, options)?;
    write_channel(&mut carrier, options.channel, &plane);

    Ok(EmbedReport {
        image: encode(&carrier, options.output, options.jpeg_quality)?,
        capacity: stats.capacity,
        frame_bits: stats.frame_bits,
        skipped_slots: stats.skipped_slots,
    })
}

/// Slots an image offers under `options`
pub fn capacity(image: &[u8], options: &WatermarkOptions) -> Result<CapacityInfo> {
    options.validate()?;

    let carrier = crop_even(decode(image)?)?;
    plane_capacity(&read_channel(&carrier, options.channel), options)
}

pub fn plane_capacity(plane: &Plane, options: &WatermarkOptions) -> Result<CapacityInfo> {
    options.validate()?;

    let domain = Domain::new(haar::forward(&plane.cropped_to_even()), options)?;
    Ok(CapacityInfo::new(domain.capacity(), options.reps))
}

fn write_frame(domain: &mut Domain, payload: &[u8], options: &WatermarkOptions) -> Result<EmbedStats> {
    let capacity = domain.capacity();
    let bits = Frame::new(payload)?.repeated(options.reps);

    if bits.len() > capacity {
        return Err(WatermarkError::Capacity {
            required: bits.len(),
            available: capacity,
        });
    }
    debug!(
        "{} strategy: {} of {capacity} slots for {} bytes",
        options.strategy,
        bits.len(),
        payload.len()
    );

    let permutation = Permutation::new(capacity, options.seed);
    let skipped_slots = write_bits(domain, &permutation, &bits, options.q);

    Ok(EmbedStats {
        capacity,
        frame_bits: bits.len(),
        skipped_slots,
    })
}

/// Writes `bits` along `permutation`, returns how many slots were skipped.
///
/// The permutation spans exactly the domain's capacity, so with consistent
/// options nothing is ever skipped.
fn write_bits(domain: &mut Domain, permutation: &Permutation, bits: &[bool], q: f64) -> usize {
    let mut skipped_slots = 0;
    for (position, &bit) in bits.iter().enumerate() {
        let slot = permutation.slot(position);
        if !domain.embed_bit(slot, bit, q) {
            skipped_slots += 1;
            warn!("slot {slot} lies outside the coefficient grid, skipped ({skipped_slots} so far)");
        }
    }
    skipped_slots
}
