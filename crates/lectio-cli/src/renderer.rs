//! Terminal output for markdown views.
//!
//! Rich output goes through a termimad skin; plain output prints the markdown
//! as is, which keeps it stable for scripts and tests.

use std::io::{self, IsTerminal};

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin, StyledChar};

/// Prints markdown either styled or verbatim.
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::DarkCyan);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));
        skin.bullet = StyledChar::from_fg_char(Color::DarkCyan, '•');

        Self { rich_enabled, skin }
    }

    /// Styled output only when color is wanted and stdout is a terminal.
    pub fn for_stdout(color: bool) -> Self {
        Self::new(color && io::stdout().is_terminal())
    }

    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            self.skin.print_text(markdown);
        } else {
            print!("{markdown}");
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
        renderer.render("# Title\n").unwrap();
    }

    #[test]
    fn test_default_is_rich() {
        assert!(TerminalRenderer::default().rich_enabled);
    }

    #[test]
    fn test_no_color_is_never_rich() {
        assert!(!TerminalRenderer::for_stdout(false).rich_enabled);
    }
}
