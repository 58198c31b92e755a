use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const LIST_HINTS: &str =
    " ↑/↓: Select │ n: New │ e: Edit │ p: Publish │ d: Delete │ r: Reload │ q: Quit";
const MODAL_HINTS: &str = " Tab: Next field │ Ctrl+S: Save │ Esc: Close";
const CONFIRM_HINTS: &str = " y: Delete │ n/Esc: Keep";

/// Which key set the footer advertises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterMode {
    List,
    Modal,
    Confirm,
}

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, area: Rect, mode: FooterMode, error: Option<&str>) -> Paragraph<'static> {
        let hints = match mode {
            FooterMode::List => LIST_HINTS,
            FooterMode::Modal => MODAL_HINTS,
            FooterMode::Confirm => CONFIRM_HINTS,
        };
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = match error {
            Some(error) => Line::from(vec![Span::styled(
                format!(" {}", error),
                Style::default().fg(STATUS_ERROR),
            )]),
            None => Line::from(vec![
                Span::styled(hints, text_style),
                Span::styled(" ".repeat(padding), text_style),
                Span::styled(version, text_style),
            ]),
        };

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
