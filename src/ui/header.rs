use crate::ui::theme::{FROSTING_PINK, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const TITLE: &str = "Dessert Clicker";
const SHARE_HINT: &str = "⇪ s: Share ";

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let title_style = Style::default()
            .fg(FROSTING_PINK)
            .add_modifier(Modifier::BOLD);
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let title = format!("  {}", TITLE);
        let used = title.chars().count() + SHARE_HINT.chars().count() + 3;
        let padding = (area.width as usize).saturating_sub(used);

        let line = Line::from(vec![
            Span::styled(title, title_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled("│  ", separator_style),
            Span::styled(SHARE_HINT, text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
