mod common;

use ascii_art::brightness::{compute_brightness, BrightnessCache};
use ascii_art::error::AsciiArtError;
use ascii_art::image::{PixelGrid, Rgb};
use ascii_art::matcher::CharMatcher;
use ascii_art::pad::{pad, PAD_COLOR};
use ascii_art::partition::partition;
use ascii_art::render::{render, render_with_report, ResolutionBounds};
use common::glyphs::{counting_table, ramp_table};
use common::synthetic_image::{checkerboard, horizontal_ramp, noise};

#[test]
fn padding_yields_smallest_power_of_two_dimensions() {
    for (w, h) in [(1, 1), (3, 5), (17, 16), (100, 33), (64, 65)] {
        let src = noise(w, h, 7);
        let padded = pad(&src);
        let (pw, ph) = (padded.width(), padded.height());
        assert!(pw.is_power_of_two() && ph.is_power_of_two(), "{w}x{h}");
        assert!(pw >= w && ph >= h);
        assert!(pw == 1 || pw / 2 < w, "{w} -> {pw}");
        assert!(ph == 1 || ph / 2 < h, "{h} -> {ph}");
    }
}

#[test]
fn padding_is_idempotent() {
    let src = noise(20, 9, 3);
    let once = pad(&src);
    let twice = pad(&once);
    assert_eq!(once, twice);
}

#[test]
fn padding_centres_content() {
    let src = noise(5, 6, 11);
    let padded = pad(&src);
    assert_eq!((padded.width(), padded.height()), (8, 8));
    // Offsets are (8-5)/2 = 1 and (8-6)/2 = 1.
    for y in 0..8 {
        for x in 0..8 {
            let inside = (1..6).contains(&x) && (1..7).contains(&y);
            let expected = if inside {
                src.get(x - 1, y - 1)
            } else {
                PAD_COLOR
            };
            assert_eq!(padded.get(x, y), expected, "({x},{y})");
        }
    }
}

#[test]
fn partition_tiles_reassemble_source() {
    let src = noise(32, 16, 5);
    for resolution in [1usize, 2, 4, 8, 16, 32] {
        if resolution < 2 {
            // 32 / 1 = 32-pixel tiles do not divide the 16-pixel height.
            assert!(partition(&src, resolution).is_err());
            continue;
        }
        let parts = partition(&src, resolution).expect("valid resolution");
        let sub = 32 / resolution;
        assert_eq!(parts.cols(), resolution);
        assert_eq!(parts.rows(), 16 / sub);
        let rebuilt = PixelGrid::from_fn(32, 16, |x, y| {
            parts
                .get(y / sub, x / sub)
                .expect("tile in range")
                .get(x % sub, y % sub)
        });
        assert_eq!(rebuilt, src, "resolution {resolution}");
    }
}

#[test]
fn checkerboard_brightness_alternates_between_extremes() {
    let grid = compute_brightness(&checkerboard(16, 16, 4), 4).expect("brightness");
    for row in 0..4 {
        for col in 0..4 {
            let expected = if (row + col) % 2 == 0 { 0.0 } else { 1.0 };
            assert_eq!(grid.get(row, col), expected, "tile ({row},{col})");
        }
    }
}

#[test]
fn cache_returns_identical_grid_without_recomputing() {
    let mut cache = BrightnessCache::new();
    let a = noise(16, 16, 42);
    let b = noise(16, 16, 42);
    let first = cache.get_or_compute(&a, 8).expect("first").clone();
    let second = cache.get_or_compute(&b, 8).expect("second").clone();
    assert_eq!(first, second);
    assert_eq!(cache.computations(), 1);
    assert_eq!(cache.image_count(), 1);
}

#[test]
fn ramp_renders_in_increasing_ink_order() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut glyphs = ramp_table();
    let matcher = CharMatcher::new(" .:-=+*#%@".chars(), &mut glyphs);
    let mut cache = BrightnessCache::new();
    let grid = render(&horizontal_ramp(64, 8), &matcher, 8, &mut cache).expect("render");
    assert_eq!((grid.rows(), grid.cols()), (1, 8));

    let inks: Vec<f64> = grid
        .row(0)
        .iter()
        .map(|&c| matcher.normalized_brightness(c).expect("rendered char is live"))
        .collect();
    assert!(inks.windows(2).all(|w| w[0] <= w[1]), "{inks:?}");
    assert!(inks[0] < inks[7], "{inks:?}");
}

#[test]
fn charset_edits_change_subsequent_renders() {
    let (mut glyphs, calls) = counting_table();
    let mut matcher = CharMatcher::new(['a', 'b', 'c'], &mut glyphs);
    let mut cache = BrightnessCache::new();
    let image = checkerboard(8, 8, 4);

    let before = render(&image, &matcher, 2, &mut cache).expect("render");
    assert_eq!(before.to_lines(), vec!["ac", "ca"]);

    matcher.add('~', &mut glyphs);
    let after = render(&image, &matcher, 2, &mut cache).expect("render");
    assert_eq!(after.to_lines(), vec!["a~", "~a"]);

    matcher.remove('~');
    matcher.add('~', &mut glyphs);
    assert_eq!(calls.get(), 4, "glyphs are rasterized once each");
    assert_eq!(cache.computations(), 1);
}

#[test]
fn empty_charset_render_is_an_error() {
    let mut glyphs = ramp_table();
    let mut matcher = CharMatcher::new(['x'], &mut glyphs);
    matcher.remove('x');
    let mut cache = BrightnessCache::new();
    let err = render(&checkerboard(4, 4, 2), &matcher, 2, &mut cache).unwrap_err();
    assert_eq!(err, AsciiArtError::EmptyCharset);
}

#[test]
fn report_describes_render() {
    let mut glyphs = ramp_table();
    let matcher = CharMatcher::new(['.', '#'], &mut glyphs);
    let mut cache = BrightnessCache::new();
    let image = PixelGrid::filled(48, 20, Rgb::gray(200));
    let bounds = ResolutionBounds::for_image(&pad(&image));
    assert_eq!((bounds.min, bounds.max), (2, 64));

    let out = render_with_report(&image, &matcher, 16, &mut cache).expect("render");
    let report = &out.report;
    assert_eq!((report.input.padded_width, report.input.padded_height), (64, 32));
    assert_eq!((report.rows, report.cols), (8, 16));
    assert_eq!(report.charset, "#.");
    let labels: Vec<&str> = report.timings.stages.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, ["pad", "brightness", "match"]);

    let json = serde_json::to_value(report).expect("serialize");
    assert_eq!(json["input"]["paddedWidth"], 64);
    assert_eq!(json["brightnessCached"], false);
}
