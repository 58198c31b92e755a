//! One bordered card per post, in store order.

use crate::api::{Post, PostStatus};
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER, STATUS_DRAFT,
    STATUS_ERROR, STATUS_OK,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

const MAX_CONTENT_LINES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostAction {
    Edit,
    Publish,
    Delete,
}

impl PostAction {
    pub fn key(&self) -> char {
        match self {
            PostAction::Edit => 'e',
            PostAction::Publish => 'p',
            PostAction::Delete => 'd',
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PostAction::Edit => "Edit",
            PostAction::Publish => "Publish",
            PostAction::Delete => "Delete",
        }
    }

    fn color(&self) -> Color {
        match self {
            PostAction::Edit => STATUS_DRAFT,
            PostAction::Publish => STATUS_OK,
            PostAction::Delete => STATUS_ERROR,
        }
    }
}

/// Edit and Delete always; Publish only while the post is a draft.
pub fn post_actions(post: &Post) -> Vec<PostAction> {
    let mut actions = vec![PostAction::Edit];
    if post.status.can_publish() {
        actions.push(PostAction::Publish);
    }
    actions.push(PostAction::Delete);
    actions
}

pub fn status_color(status: PostStatus) -> Color {
    match status {
        PostStatus::Draft => STATUS_DRAFT,
        PostStatus::Published => STATUS_OK,
    }
}

fn content_lines(post: &Post) -> Vec<Line<'_>> {
    let mut lines: Vec<Line> = post
        .content
        .lines()
        .take(MAX_CONTENT_LINES)
        .map(|line| Line::from(Span::styled(line, Style::default().fg(MUTED_TEXT))))
        .collect();
    if post.content.lines().count() > MAX_CONTENT_LINES {
        lines.push(Line::from(Span::styled("…", Style::default().fg(MUTED_TEXT))));
    }
    if lines.is_empty() {
        lines.push(Line::from(""));
    }
    lines
}

/// Rows the card occupies, borders included.
pub fn card_height(post: &Post) -> u16 {
    // content + status + actions + two borders
    content_lines(post).len() as u16 + 4
}

pub fn card_widget(post: &Post, selected: bool) -> Paragraph<'_> {
    let mut lines = content_lines(post);
    lines.push(Line::from(vec![
        Span::raw("Status: "),
        Span::styled(
            post.status.as_str(),
            Style::default()
                .fg(status_color(post.status))
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    let mut actions = Vec::new();
    for action in post_actions(post) {
        if !actions.is_empty() {
            actions.push(Span::raw("  "));
        }
        actions.push(Span::styled(
            format!("[{}] {}", action.key(), action.label()),
            Style::default().fg(action.color()),
        ));
    }
    lines.push(Line::from(actions));

    let border = if selected { POPUP_BORDER } else { GLOBAL_BORDER };
    let mut block = Block::default()
        .title(Span::styled(
            post.title.as_str(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    if selected {
        block = block.style(Style::default().bg(ACTIVE_HIGHLIGHT));
    }

    Paragraph::new(lines).block(block).wrap(Wrap { trim: false })
}

/// First card to draw so that `selected` is on screen.
fn first_visible(posts: &[Post], selected: usize, height: u16) -> usize {
    let selected = selected.min(posts.len().saturating_sub(1));
    let mut start = selected;
    let mut used = card_height(&posts[selected]);
    while start > 0 {
        let above = card_height(&posts[start - 1]);
        if used + above > height {
            break;
        }
        used += above;
        start -= 1;
    }
    start
}

pub fn render_cards(frame: &mut Frame<'_>, area: Rect, posts: &[Post], selected: usize) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    if posts.is_empty() {
        let placeholder = Paragraph::new(Line::from(Span::styled(
            "No posts yet. Press n to create one.",
            Style::default().fg(MUTED_TEXT),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(placeholder, area);
        return;
    }

    let start = first_visible(posts, selected, area.height);
    let mut y = area.y;
    let bottom = area.y + area.height;
    for (index, post) in posts.iter().enumerate().skip(start) {
        let remaining = bottom.saturating_sub(y);
        let height = card_height(post);
        if height > remaining && index != start {
            break;
        }
        let rect = Rect {
            x: area.x,
            y,
            width: area.width,
            height: height.min(remaining),
        };
        frame.render_widget(card_widget(post, index == selected), rect);
        y += rect.height;
        if y >= bottom {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::PostId;

    fn post(id: &str, content: &str, status: PostStatus) -> Post {
        Post {
            id: PostId::new(id).unwrap(),
            title: format!("Post {id}"),
            content: content.to_string(),
            status,
        }
    }

    #[test]
    fn draft_offers_all_actions() {
        let actions = post_actions(&post("1", "x", PostStatus::Draft));
        assert_eq!(
            actions,
            vec![PostAction::Edit, PostAction::Publish, PostAction::Delete]
        );
    }

    #[test]
    fn published_has_no_publish_action() {
        let actions = post_actions(&post("1", "x", PostStatus::Published));
        assert_eq!(actions, vec![PostAction::Edit, PostAction::Delete]);
    }

    #[test]
    fn long_content_is_truncated() {
        let long = post("1", "a\nb\nc\nd\ne", PostStatus::Draft);
        // three lines + ellipsis + status + actions + borders
        assert_eq!(card_height(&long), 8);
        let empty = post("2", "", PostStatus::Draft);
        assert_eq!(card_height(&empty), 5);
    }

    #[test]
    fn selection_scrolls_into_view() {
        let posts: Vec<Post> = (1..=5)
            .map(|i| post(&i.to_string(), "x", PostStatus::Draft))
            .collect();
        // each card is 5 rows; 10 rows fit two cards
        assert_eq!(first_visible(&posts, 0, 10), 0);
        assert_eq!(first_visible(&posts, 1, 10), 0);
        assert_eq!(first_visible(&posts, 4, 10), 3);
    }
}
