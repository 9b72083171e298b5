//! Interactive session state: the composition root for one shell.
//!
//! The session owns the glyph brightness table, the brightness cache, the
//! live matcher and the current (padded) image, and hands references to the
//! render pipeline for every `asciiArt` command.
use super::command::{CharSelection, Command, OutputKind, ResChange};
use crate::brightness::BrightnessCache;
use crate::config::ShellConfig;
use crate::glyph::GlyphBrightnessTable;
use crate::image::io::load_rgb_image;
use crate::image::PixelGrid;
use crate::matcher::CharMatcher;
use crate::output::{AsciiOutput, ConsoleOutput, HtmlOutput};
use crate::pad::pad;
use crate::render::{render, ResolutionBounds};
use log::{debug, info, warn};
use std::io::{self, Write};
use std::path::Path;

/// What the read loop should do after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Session {
    glyphs: GlyphBrightnessTable,
    cache: BrightnessCache,
    matcher: CharMatcher,
    image: PixelGrid,
    resolution: usize,
    output: OutputKind,
    html: HtmlOutput,
}

impl Session {
    /// Start a session on `image` (padded here) with settings from `config`.
    pub fn new(
        image: &PixelGrid,
        mut glyphs: GlyphBrightnessTable,
        config: &ShellConfig,
    ) -> Self {
        let matcher = CharMatcher::new(config.charset.chars(), &mut glyphs);
        let cache = match config.cache_images {
            Some(limit) => BrightnessCache::with_image_limit(limit),
            None => BrightnessCache::new(),
        };
        let image = pad(image).into_owned();
        let resolution = clamp_resolution(config.resolution, &image);
        if resolution != config.resolution {
            warn!(
                "resolution {} outside bounds for {}x{} image, using {}",
                config.resolution,
                image.width(),
                image.height(),
                resolution
            );
        }
        Self {
            glyphs,
            cache,
            matcher,
            image,
            resolution,
            output: OutputKind::Console,
            html: HtmlOutput::new(&config.html_path, &config.html_font),
        }
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn matcher(&self) -> &CharMatcher {
        &self.matcher
    }

    pub fn image(&self) -> &PixelGrid {
        &self.image
    }

    /// Parse and run one input line, writing user-facing text to `out`.
    pub fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "{err}")?;
                return Ok(Flow::Continue);
            }
        };
        debug!("shell command {command:?}");
        match command {
            Command::Exit => return Ok(Flow::Exit),
            Command::Chars => {
                let listed: Vec<String> =
                    self.matcher.charset().iter().map(char::to_string).collect();
                writeln!(out, "{}", listed.join(" "))?;
            }
            Command::Add(selection) => self.add(&selection),
            Command::Remove(selection) => self.remove(&selection),
            Command::Res(change) => self.change_resolution(change, out)?,
            Command::Image(path) => self.change_image(&path, out)?,
            Command::Output(kind) => self.output = kind,
            Command::AsciiArt => self.ascii_art(out)?,
        }
        Ok(Flow::Continue)
    }

    fn add(&mut self, selection: &CharSelection) {
        for c in selection.chars() {
            self.matcher.add(c, &mut self.glyphs);
        }
    }

    fn remove(&mut self, selection: &CharSelection) {
        for c in selection.chars() {
            self.matcher.remove(c);
        }
    }

    fn change_resolution<W: Write>(&mut self, change: ResChange, out: &mut W) -> io::Result<()> {
        let requested = match change {
            ResChange::Up => self.resolution.saturating_mul(2),
            ResChange::Down => self.resolution / 2,
        };
        if ResolutionBounds::for_image(&self.image).contains(requested) {
            self.resolution = requested;
            writeln!(out, "Resolution set to {requested}")
        } else {
            writeln!(out, "Did not change resolution due to exceeding boundaries.")
        }
    }

    fn change_image<W: Write>(&mut self, path: &Path, out: &mut W) -> io::Result<()> {
        match load_rgb_image(path) {
            Ok(image) => {
                self.image = pad(&image).into_owned();
                let clamped = clamp_resolution(self.resolution, &self.image);
                if clamped != self.resolution {
                    info!("resolution adjusted from {} to {clamped}", self.resolution);
                    self.resolution = clamped;
                }
                Ok(())
            }
            Err(err) => {
                warn!("{err}");
                writeln!(out, "Did not execute due to problem with image file.")
            }
        }
    }

    fn ascii_art<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if self.matcher.is_empty() {
            return writeln!(out, "Did not execute. Charset is empty.");
        }
        let grid = match render(&self.image, &self.matcher, self.resolution, &mut self.cache) {
            Ok(grid) => grid,
            Err(err) => return writeln!(out, "Did not execute: {err}."),
        };
        match self.output {
            OutputKind::Console => ConsoleOutput.write_to(&grid, out),
            OutputKind::Html => match self.html.out(&grid) {
                Ok(()) => Ok(()),
                Err(err) => writeln!(out, "Did not execute: {err}."),
            },
        }
    }
}

/// Round `resolution` up to a power of two and pull it into the valid range
/// of the padded `image`; any such value tiles the image exactly.
fn clamp_resolution(resolution: usize, image: &PixelGrid) -> usize {
    let bounds = ResolutionBounds::for_image(image);
    resolution
        .max(1)
        .next_power_of_two()
        .clamp(bounds.min, bounds.max)
}
