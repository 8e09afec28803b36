mod common;

use common::{carrier, carrier_png, png};
use wavemark_core::*;

#[test]
fn wavelet_watermark_survives_png() {
    let options = WatermarkOptions::wavelet().with_q(64.0);
    let marked = embed(&carrier_png(256, 256), "Hello, wavelets", &options).unwrap();

    assert_eq!(extract(&marked, &options).unwrap(), "Hello, wavelets");
}

#[test]
fn block_dct_watermark_survives_png() {
    let options = WatermarkOptions::block_dct();
    let marked = embed(&carrier_png(512, 512), "block dct", &options).unwrap();

    let report = extract_with_report(&marked, &options).unwrap();

    assert_eq!(report.text, "block dct");
    assert_eq!(report.byte_len, 9);
    assert_eq!(report.skipped_slots, 0);
}

#[test]
fn dual_band_doubles_capacity() {
    let single = WatermarkOptions::block_dct();
    let dual = WatermarkOptions::block_dct().with_bands(BandSelection::HlLh);
    let carrier = carrier_png(256, 256);

    assert_eq!(capacity(&carrier, &single).unwrap().slots, 256);
    assert_eq!(capacity(&carrier, &dual).unwrap().slots, 512);

    // (32 + 5 * 8) * 5 = 360 slots, too many for one band
    assert!(matches!(
        embed(&carrier, "dual!", &single),
        Err(WatermarkError::Capacity {
            required: 360,
            available: 256
        })
    ));
    let marked = embed(&carrier, "dual!", &dual).unwrap();
    assert_eq!(extract(&marked, &dual).unwrap(), "dual!");
}

#[test]
fn embed_report_matches_capacity_query() {
    let options = WatermarkOptions::block_dct();
    let carrier = carrier_png(512, 512);

    let report = embed_with_report(&carrier, "hi", &options).unwrap();
    let info = capacity(&carrier, &options).unwrap();

    assert_eq!(report.capacity, info.slots);
    assert_eq!(report.frame_bits, (32 + 16) * 5);
    assert_eq!(report.skipped_slots, 0);
    assert_eq!(info.max_payload_bytes, 21);
}

#[test]
fn only_the_selected_channel_changes() {
    let options = WatermarkOptions::block_dct().with_channel(2);
    let original = carrier(512, 512);

    let marked = embed(&png(&original), "blue", &options).unwrap();
    let marked = image::load_from_memory(&marked).unwrap().to_rgba8();

    let mut blue_changed = false;
    for (before, after) in original.pixels().zip(marked.pixels()) {
        assert_eq!(before[0], after[0]);
        assert_eq!(before[1], after[1]);
        assert_eq!(before[3], after[3]);
        blue_changed |= before[2] != after[2];
    }
    assert!(blue_changed);
    assert_eq!(extract(&png(&marked), &options).unwrap(), "blue");
}

#[test]
fn odd_sized_carriers_are_cropped() {
    let options = WatermarkOptions::block_dct();
    let marked = embed(&carrier_png(513, 515), "odd", &options).unwrap();

    let dimensions = image::load_from_memory(&marked).unwrap().to_rgba8().dimensions();

    assert_eq!(dimensions, (512, 514));
    assert_eq!(extract(&marked, &options).unwrap(), "odd");
}

#[test]
fn mismatching_options_do_not_reveal_the_text() {
    let options = WatermarkOptions::block_dct();
    let marked = embed(&carrier_png(512, 512), "secret", &options).unwrap();

    let mismatches = [
        options.clone().with_seed(Some(4321)),
        options.clone().with_seed(None),
        options.clone().with_channel(1),
        options.clone().with_dct_uv(3, 2),
    ];
    for other in mismatches {
        let result = extract(&marked, &other);
        assert!(
            !matches!(&result, Ok(text) if text == "secret"),
            "{other:?} revealed the text"
        );
    }
}

#[test]
fn jpeg_output_is_written_on_request() {
    let options = WatermarkOptions::block_dct()
        .with_q(64.0)
        .with_reps(9)
        .with_output(OutputFormat::Jpeg);

    let marked = embed(&carrier_png(384, 384), "ok", &options).unwrap();

    assert_eq!(&marked[..3], &[0xFF, 0xD8, 0xFF]);
}

#[test]
fn broken_input_is_rejected() {
    let options = WatermarkOptions::default();

    assert!(matches!(
        embed(b"GIF89a, or maybe not", "x", &options),
        Err(WatermarkError::InvalidImageMedia)
    ));
    assert!(matches!(
        extract(&carrier_png(1, 64), &options),
        Err(WatermarkError::ImageTooSmall {
            width: 1,
            height: 64
        })
    ));
    assert!(matches!(
        embed(&carrier_png(16, 16), "far too long for this", &options),
        Err(WatermarkError::Capacity { .. })
    ));
    assert!(matches!(
        embed(&carrier_png(64, 64), "x", &options.clone().with_channel(3)),
        Err(WatermarkError::Configuration(_))
    ));
}
