use crate::notification::Notification;
use crate::ui::app::App;
use crate::ui::cards::render_cards;
use crate::ui::footer::{Footer, FooterMode};
use crate::ui::form::{render_confirm_delete, render_modal};
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{STATUS_ERROR, STATUS_OK};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let state = app.posts();
    let area = frame.area();
    let (header, banner, body, footer) = layout_regions(area, state.notification.is_some());

    frame.render_widget(
        Header::new().widget(app.api_endpoint(), state.posts().len()),
        header,
    );

    if let Some(notification) = &state.notification {
        frame.render_widget(banner_widget(notification), banner);
    }

    frame.render_widget(Clear, body);
    render_cards(frame, body, state.posts(), state.selected);

    let mode = if state.is_confirming_delete() {
        FooterMode::Confirm
    } else if state.modal.is_open() {
        FooterMode::Modal
    } else {
        FooterMode::List
    };
    frame.render_widget(
        Footer::new().widget(footer, mode, app.last_command_error()),
        footer,
    );

    if state.modal.is_open() {
        render_modal(frame, body, &state.modal);
    }
    if let Some(pending) = &state.confirm_delete {
        render_confirm_delete(frame, body, pending);
    }
}

fn banner_widget(notification: &Notification) -> Paragraph<'_> {
    let color = if notification.is_error() {
        STATUS_ERROR
    } else {
        STATUS_OK
    };
    let line = Line::from(Span::styled(
        notification.message.as_str(),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    ));
    Paragraph::new(line).style(Style::default().bg(color)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    )
}
