mod common;

use ascii_art::config::ShellConfig;
use ascii_art::image::io::save_rgb_image;
use ascii_art::shell::{Flow, Session};
use common::glyphs::ramp_table;
use common::synthetic_image::checkerboard;

fn session_with(charset: &str, resolution: usize) -> Session {
    let config = ShellConfig {
        charset: charset.to_string(),
        resolution,
        ..ShellConfig::default()
    };
    Session::new(&checkerboard(16, 8, 4), ramp_table(), &config)
}

fn run(session: &mut Session, line: &str) -> (Flow, String) {
    let mut out = Vec::new();
    let flow = session.execute(line, &mut out).expect("in-memory write");
    (flow, String::from_utf8(out).expect("utf8 output"))
}

#[test]
fn chars_lists_sorted_charset() {
    let mut session = session_with("cab", 4);
    assert_eq!(run(&mut session, "chars").1, "a b c\n");
    run(&mut session, "add z-x");
    run(&mut session, "remove b");
    run(&mut session, "add space");
    assert_eq!(run(&mut session, "chars").1, "  a c x y z\n");
}

#[test]
fn add_all_and_remove_all() {
    let mut session = session_with("0", 4);
    run(&mut session, "add all");
    assert_eq!(session.matcher().len(), 95);
    run(&mut session, "remove all");
    assert!(session.matcher().is_empty());
    assert_eq!(
        run(&mut session, "asciiArt").1,
        "Did not execute. Charset is empty.\n"
    );
}

#[test]
fn resolution_changes_respect_bounds() {
    // 16x8 image: valid resolutions are 2..=16.
    let mut session = session_with("ab", 4);
    assert_eq!(run(&mut session, "res up").1, "Resolution set to 8\n");
    assert_eq!(run(&mut session, "res up").1, "Resolution set to 16\n");
    assert_eq!(
        run(&mut session, "res up").1,
        "Did not change resolution due to exceeding boundaries.\n"
    );
    assert_eq!(session.resolution(), 16);
    run(&mut session, "res down");
    run(&mut session, "res down");
    run(&mut session, "res down");
    assert_eq!(session.resolution(), 2);
    assert_eq!(
        run(&mut session, "res down").1,
        "Did not change resolution due to exceeding boundaries.\n"
    );
}

#[test]
fn out_of_range_startup_resolution_is_clamped() {
    let session = session_with("ab", 100);
    assert_eq!(session.resolution(), 16);
}

#[test]
fn ascii_art_prints_to_console() {
    let mut session = session_with("ab", 4);
    // 4x4 tiles over a 4-pixel checkerboard alternate black/white.
    let (_, text) = run(&mut session, "asciiArt");
    assert_eq!(text, "a b a b \nb a b a \n");
}

#[test]
fn html_output_writes_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let html_path = dir.path().join("out.html");
    let config = ShellConfig {
        charset: "ab".to_string(),
        resolution: 4,
        html_path: html_path.clone(),
        ..ShellConfig::default()
    };
    let mut session = Session::new(&checkerboard(16, 8, 4), ramp_table(), &config);
    assert_eq!(run(&mut session, "output html").1, "");
    assert_eq!(run(&mut session, "asciiArt").1, "");
    let html = std::fs::read_to_string(&html_path).expect("html written");
    assert!(html.contains("abab<br>"));
}

#[test]
fn image_command_loads_and_reports_failures() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("board.png");
    save_rgb_image(&checkerboard(6, 6, 3), &path).expect("save");

    let mut session = session_with("ab", 16);
    let (_, text) = run(&mut session, &format!("image {}", path.display()));
    assert_eq!(text, "");
    assert_eq!(session.image().width(), 8);
    assert_eq!(session.resolution(), 8);

    let (_, text) = run(&mut session, "image missing-file.png");
    assert_eq!(text, "Did not execute due to problem with image file.\n");
}

#[test]
fn bad_commands_report_and_continue() {
    let mut session = session_with("ab", 4);
    assert_eq!(
        run(&mut session, "paint"),
        (
            Flow::Continue,
            "Did not execute due to incorrect command.\n".to_string()
        )
    );
    assert_eq!(
        run(&mut session, "output pdf").1,
        "Did not change output method due to incorrect format.\n"
    );
    assert_eq!(run(&mut session, "exit").0, Flow::Exit);
}
