//! Create/edit modal and delete confirmation overlays.

use crate::ui::layout::centered_rect_by_size;
use crate::ui::posts::{DraftField, ModalState, PendingDelete};
use crate::ui::theme::{ACCENT, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const MODAL_WIDTH: u16 = 60;
const CONTENT_ROWS: usize = 6;
const CONFIRM_WIDTH: u16 = 50;

pub fn modal_title(modal: &ModalState) -> &'static str {
    if modal.is_edit_mode() {
        "Edit Post"
    } else {
        "Create Post"
    }
}

pub fn submit_label(modal: &ModalState) -> &'static str {
    if modal.is_edit_mode() {
        "Update Post"
    } else {
        "Add Post"
    }
}

fn field_label(label: &str, focused: bool) -> Line<'static> {
    let style = if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(HEADER_TEXT)
    };
    let marker = if focused { "▸ " } else { "  " };
    Line::from(Span::styled(format!("{marker}{label}"), style))
}

fn placeholder_or<'a>(value: &'a str, placeholder: &'static str) -> Span<'a> {
    if value.is_empty() {
        Span::styled(placeholder, Style::default().fg(MUTED_TEXT))
    } else {
        Span::styled(value, Style::default().fg(HEADER_TEXT))
    }
}

pub fn render_modal(frame: &mut Frame<'_>, area: Rect, modal: &ModalState) {
    let (Some(draft), Some(field)) = (modal.draft(), modal.field()) else {
        return;
    };

    let mut lines = vec![field_label("Title", field == DraftField::Title)];
    lines.push(Line::from(vec![
        Span::raw("  "),
        placeholder_or(&draft.title, "Enter post title"),
    ]));
    lines.push(Line::from(""));
    lines.push(field_label("Content", field == DraftField::Content));

    if draft.content.is_empty() {
        lines.push(Line::from(vec![
            Span::raw("  "),
            placeholder_or("", "Enter post content"),
        ]));
    } else {
        let content: Vec<&str> = draft.content.split('\n').collect();
        // Keep the tail visible while typing.
        let skip = content.len().saturating_sub(CONTENT_ROWS);
        for line in content.into_iter().skip(skip) {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(line, Style::default().fg(HEADER_TEXT)),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(
            format!("[Ctrl+S] {}", submit_label(modal)),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled("[Esc] Close", Style::default().fg(STATUS_ERROR)),
    ]));

    let height = lines.len() as u16 + 2;
    let rect = centered_rect_by_size(area, MODAL_WIDTH, height);
    frame.render_widget(Clear, rect);
    let block = Block::default()
        .title(Span::styled(
            modal_title(modal),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        rect,
    );
}

pub fn render_confirm_delete(frame: &mut Frame<'_>, area: Rect, pending: &PendingDelete) {
    let lines = vec![
        Line::from("Are you sure you want to delete this post?"),
        Line::from(Span::styled(
            pending.title.as_str(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[y] Delete", Style::default().fg(STATUS_ERROR)),
            Span::raw("   "),
            Span::styled("[n] Keep", Style::default().fg(HEADER_TEXT)),
        ]),
    ];

    let rect = centered_rect_by_size(area, CONFIRM_WIDTH, lines.len() as u16 + 2);
    frame.render_widget(Clear, rect);
    let block = Block::default()
        .title(" Delete Post ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(STATUS_ERROR));
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        rect,
    );
}
