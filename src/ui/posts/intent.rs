use crate::api::{Post, PostId};
use crate::notification::NotificationKind;
use crate::store::ReloadTicket;
use crate::ui::mvi::Intent;

use super::state::{DraftField, FormDraft};

/// Edits applied to the open draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftEdit {
    Insert(char),
    /// Moves to content from the title; inserts a line break in content.
    Newline,
    Backspace,
    NextField,
    PreviousField,
    Focus(DraftField),
}

#[derive(Debug, Clone)]
pub enum PostsIntent {
    /// A reload is about to be sent; allocates its ticket.
    ReloadIssued,
    /// A reload came back. Applied only if newer than the held snapshot.
    Loaded {
        ticket: ReloadTicket,
        posts: Vec<Post>,
    },

    OpenCreate,
    /// Opens in edit mode when the draft carries an id, create mode otherwise.
    OpenEdit { draft: FormDraft },
    /// Cancel, or backdrop dismissal. Resets the draft.
    Close,
    Edit(DraftEdit),
    /// Create or update succeeded.
    Saved,

    SelectNext,
    SelectPrevious,

    RequestDelete { id: PostId, title: String },
    /// Confirmed or declined; either way the dialog goes away.
    DismissDelete,

    Notify {
        message: String,
        kind: NotificationKind,
    },
    NotificationExpired { id: u64 },
}

impl Intent for PostsIntent {}
