//! Render sinks for character grids: terminal and HTML file.
use crate::error::{AsciiArtError, Result};
use crate::image::io::{encode_error, ensure_parent_dir};
use crate::render::CharGrid;
use log::info;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Destination for a rendered grid.
pub trait AsciiOutput {
    fn out(&self, grid: &CharGrid) -> Result<()>;
}

/// Prints the grid to stdout, each character followed by a space.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleOutput;

impl ConsoleOutput {
    pub fn write_to<W: Write>(&self, grid: &CharGrid, mut sink: W) -> io::Result<()> {
        for row in grid.iter_rows() {
            let mut line = String::with_capacity(row.len() * 2);
            for &c in row {
                line.push(c);
                line.push(' ');
            }
            writeln!(sink, "{line}")?;
        }
        sink.flush()
    }
}

impl AsciiOutput for ConsoleOutput {
    fn out(&self, grid: &CharGrid) -> Result<()> {
        let stdout = io::stdout();
        self.write_to(grid, stdout.lock())
            .map_err(|e| encode_error(Path::new("<stdout>"), e.to_string()))
    }
}

/// Writes the grid into a standalone HTML page using a monospace font.
#[derive(Clone, Debug)]
pub struct HtmlOutput {
    pub path: PathBuf,
    pub font_name: String,
}

impl HtmlOutput {
    pub fn new(path: impl Into<PathBuf>, font_name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            font_name: font_name.into(),
        }
    }

    pub fn to_html(&self, grid: &CharGrid) -> String {
        let mut body = String::new();
        for row in grid.iter_rows() {
            for &c in row {
                push_escaped(&mut body, c);
            }
            body.push_str("<br>\n");
        }
        format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n<title>ASCII Art</title>\n</head>\n\
             <body>\n<div style=\"font-family: '{font}', monospace; font-size: 4px; \
             line-height: 1; letter-spacing: 2px; white-space: pre;\">\n{body}</div>\n</body>\n</html>\n",
            font = self.font_name.replace('\'', ""),
        )
    }
}

impl AsciiOutput for HtmlOutput {
    fn out(&self, grid: &CharGrid) -> Result<()> {
        ensure_parent_dir(&self.path)?;
        fs::write(&self.path, self.to_html(grid)).map_err(|e| AsciiArtError::Encode {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;
        info!(
            "wrote {}x{} character grid to {}",
            grid.cols(),
            grid.rows(),
            self.path.display()
        );
        Ok(())
    }
}

fn push_escaped(out: &mut String, c: char) {
    match c {
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '&' => out.push_str("&amp;"),
        '"' => out.push_str("&quot;"),
        ' ' => out.push_str("&nbsp;"),
        _ => out.push(c),
    }
}
