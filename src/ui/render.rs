use crate::session::SessionState;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::notice::{NoticeLevel, NoticeState};
use crate::ui::theme::{
    FROSTING_PINK, GLOBAL_BORDER, HEADER_TEXT, NOTICE_BORDER, STATUS_ERROR, STATUS_OK,
};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let regions = layout_regions(frame.area());

    frame.render_widget(Header::new().widget(regions.header), regions.header);
    frame.render_widget(Clear, regions.dessert);
    frame.render_widget(dessert_widget(app.session()), regions.dessert);
    frame.render_widget(stats_widget(app.session()), regions.stats);
    frame.render_widget(Footer::new().widget(regions.footer), regions.footer);

    draw_notice(frame, app.notice(), regions.dessert);
}

fn dessert_widget(state: &SessionState) -> Paragraph<'static> {
    let item = state.active_item();
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            item.glyph.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            item.name.clone(),
            Style::default()
                .fg(FROSTING_PINK)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("${} each", item.unit_price),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
        )),
    ];

    Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

fn stats_widget(state: &SessionState) -> Paragraph<'static> {
    let text_style = Style::default().fg(HEADER_TEXT);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Desserts Sold: {}", state.sold_count()),
            text_style,
        )),
        Line::from(Span::styled(
            format!("Total Revenue: ${}", state.revenue()),
            text_style,
        )),
    ];
    Paragraph::new(lines).alignment(Alignment::Center)
}

fn draw_notice(frame: &mut Frame<'_>, notice: &NoticeState, within: ratatui::layout::Rect) {
    let (Some(message), Some(level)) = (notice.message(), notice.level()) else {
        return;
    };
    let color = match level {
        NoticeLevel::Info => STATUS_OK,
        NoticeLevel::Error => STATUS_ERROR,
    };

    let width = (message.chars().count() as u16).saturating_add(4);
    let mut area = centered_rect_by_size(within, width, 3);
    // Sit near the bottom edge of the dessert, like a toast
    area.y = within.y + within.height.saturating_sub(area.height + 1);

    frame.render_widget(Clear, area);
    let widget = Paragraph::new(Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(color),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(NOTICE_BORDER)),
    );
    frame.render_widget(widget, area);
}
