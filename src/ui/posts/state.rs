use crate::api::{NewPost, Post, PostId, PostStatus, PostUpdate};
use crate::notification::Notification;
use crate::store::PostStore;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftField {
    #[default]
    Title,
    Content,
}

impl DraftField {
    pub fn toggle(self) -> Self {
        match self {
            DraftField::Title => DraftField::Content,
            DraftField::Content => DraftField::Title,
        }
    }
}

/// Unsaved edit buffer behind the modal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormDraft {
    pub id: Option<PostId>,
    pub title: String,
    pub content: String,
    pub status: PostStatus,
}

impl From<&Post> for FormDraft {
    fn from(post: &Post) -> Self {
        Self {
            id: Some(post.id.clone()),
            title: post.title.clone(),
            content: post.content.clone(),
            status: post.status,
        }
    }
}

impl FormDraft {
    /// First required field that is still blank.
    pub fn first_missing_field(&self) -> Option<DraftField> {
        if self.title.trim().is_empty() {
            Some(DraftField::Title)
        } else if self.content.trim().is_empty() {
            Some(DraftField::Content)
        } else {
            None
        }
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Content => &self.content,
        }
    }

    pub(crate) fn field_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::Title => &mut self.title,
            DraftField::Content => &mut self.content,
        }
    }
}

/// Modal lifecycle. `Idle` means the modal is closed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Idle,
    Composing {
        draft: FormDraft,
        field: DraftField,
    },
    Editing {
        target: PostId,
        draft: FormDraft,
        field: DraftField,
    },
}

/// Request that submitting the open modal would send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(NewPost),
    Update { id: PostId, update: PostUpdate },
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::Idle)
    }

    pub fn is_edit_mode(&self) -> bool {
        matches!(self, ModalState::Editing { .. })
    }

    pub fn draft(&self) -> Option<&FormDraft> {
        match self {
            ModalState::Idle => None,
            ModalState::Composing { draft, .. } | ModalState::Editing { draft, .. } => Some(draft),
        }
    }

    pub fn field(&self) -> Option<DraftField> {
        match self {
            ModalState::Idle => None,
            ModalState::Composing { field, .. } | ModalState::Editing { field, .. } => Some(*field),
        }
    }

    /// The mode alone picks the endpoint; a leftover id in a composing draft
    /// never turns a create into an update.
    pub fn submission(&self) -> Option<Submission> {
        match self {
            ModalState::Idle => None,
            ModalState::Composing { draft, .. } => Some(Submission::Create(NewPost {
                title: draft.title.clone(),
                content: draft.content.clone(),
                status: draft.status,
            })),
            ModalState::Editing { target, draft, .. } => Some(Submission::Update {
                id: target.clone(),
                update: PostUpdate {
                    id: target.clone(),
                    title: draft.title.clone(),
                    content: draft.content.clone(),
                    status: draft.status,
                },
            }),
        }
    }
}

/// Delete awaiting the user's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    pub id: PostId,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PostsState {
    pub store: PostStore,
    /// Card cursor; always < store.len() unless the list is empty.
    pub selected: usize,
    pub modal: ModalState,
    pub confirm_delete: Option<PendingDelete>,
    pub notification: Option<Notification>,
    /// Count of notifications shown so far; the latest one's id.
    pub notifications_shown: u64,
}

impl UiState for PostsState {}

impl PostsState {
    pub fn posts(&self) -> &[Post] {
        self.store.posts()
    }

    pub fn selected_post(&self) -> Option<&Post> {
        self.store.get(self.selected)
    }

    pub fn is_confirming_delete(&self) -> bool {
        self.confirm_delete.is_some()
    }
}
