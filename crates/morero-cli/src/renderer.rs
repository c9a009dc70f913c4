//! Terminal rendering module for rich markdown output
//!
//! Markdown from the display types is rendered with termimad, keeping the
//! `#` marks of headers visible. Plain mode prints the markdown unchanged.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// A run of markdown lines rendered the same way.
#[derive(Debug, PartialEq, Eq)]
enum Block<'a> {
    Header(&'a str),
    Body(Vec<&'a str>),
}

/// Split markdown into header lines and the bodies between them. Lines
/// inside code fences never count as headers.
fn blocks(markdown: &str) -> Vec<Block<'_>> {
    let mut blocks = Vec::new();
    let mut body = Vec::new();
    let mut in_fence = false;

    for line in markdown.lines() {
        if line.trim_start().starts_with("```") {
            in_fence = !in_fence;
        }
        if !in_fence && line.starts_with('#') {
            if !body.is_empty() {
                blocks.push(Block::Body(std::mem::take(&mut body)));
            }
            blocks.push(Block::Header(line));
        } else {
            body.push(line);
        }
    }
    if !body.is_empty() {
        blocks.push(Block::Body(body));
    }
    blocks
}

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.code_block.set_bg(Color::AnsiValue(238));
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for block in blocks(markdown) {
            match block {
                Block::Header(line) => println!("\x1b[34m{line}\x1b[0m"),
                Block::Body(lines) => self.skin.print_text(&lines.join("\n")),
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
    }

    #[test]
    fn test_default_is_rich() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);
    }

    #[test]
    fn test_blocks_split_on_headers() {
        let markdown = "# Title\n\nintro\n## Table\n| a | b |\n|---|---|\n";
        assert_eq!(
            blocks(markdown),
            vec![
                Block::Header("# Title"),
                Block::Body(vec!["", "intro"]),
                Block::Header("## Table"),
                Block::Body(vec!["| a | b |", "|---|---|"]),
            ]
        );
    }

    #[test]
    fn test_blocks_ignore_hashes_in_code() {
        let markdown = "```text\n# not a header\n```\n";
        assert_eq!(
            blocks(markdown),
            vec![Block::Body(vec!["```text", "# not a header", "```"])]
        );
    }
}
