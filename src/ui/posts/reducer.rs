//! Reducer for the post management view.

use crate::notification::Notification;
use crate::ui::mvi::Reducer;

use super::intent::{DraftEdit, PostsIntent};
use super::state::{DraftField, FormDraft, ModalState, PendingDelete, PostsState};

/// Pure transitions for [`PostsState`].
///
/// Network calls, reload scheduling and notification timers are driven by
/// `App` around the dispatch.
pub struct PostsReducer;

impl Reducer for PostsReducer {
    type State = PostsState;
    type Intent = PostsIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PostsIntent::ReloadIssued => {
                state.store.issue();
                state
            }

            PostsIntent::Loaded { ticket, posts } => {
                if state.store.apply(ticket, posts) {
                    state.selected = state.selected.min(state.store.len().saturating_sub(1));
                }
                state
            }

            PostsIntent::OpenCreate => {
                state.modal = ModalState::Composing {
                    draft: FormDraft::default(),
                    field: DraftField::Title,
                };
                state
            }

            PostsIntent::OpenEdit { draft } => {
                state.modal = match draft.id.clone() {
                    Some(target) => ModalState::Editing {
                        target,
                        draft,
                        field: DraftField::Title,
                    },
                    None => ModalState::Composing {
                        draft,
                        field: DraftField::Title,
                    },
                };
                state
            }

            PostsIntent::Close | PostsIntent::Saved => {
                state.modal = ModalState::Idle;
                state
            }

            PostsIntent::Edit(edit) => {
                state.modal = apply_edit(state.modal, edit);
                state
            }

            PostsIntent::SelectNext => {
                if !state.store.is_empty() {
                    state.selected = if state.selected + 1 >= state.store.len() {
                        0
                    } else {
                        state.selected + 1
                    };
                }
                state
            }

            PostsIntent::SelectPrevious => {
                if !state.store.is_empty() {
                    state.selected = if state.selected == 0 {
                        state.store.len() - 1
                    } else {
                        state.selected - 1
                    };
                }
                state
            }

            PostsIntent::RequestDelete { id, title } => {
                state.confirm_delete = Some(PendingDelete { id, title });
                state
            }

            PostsIntent::DismissDelete => {
                state.confirm_delete = None;
                state
            }

            PostsIntent::Notify { message, kind } => {
                state.notifications_shown += 1;
                state.notification = Some(Notification {
                    id: state.notifications_shown,
                    message,
                    kind,
                });
                state
            }

            PostsIntent::NotificationExpired { id } => {
                // A stale expiry must not blank a newer message.
                if state.notification.as_ref().is_some_and(|n| n.id == id) {
                    state.notification = None;
                }
                state
            }
        }
    }
}

fn apply_edit(modal: ModalState, edit: DraftEdit) -> ModalState {
    match modal {
        ModalState::Idle => ModalState::Idle,
        ModalState::Composing { mut draft, field } => {
            let field = edit_draft(&mut draft, field, edit);
            ModalState::Composing { draft, field }
        }
        ModalState::Editing {
            target,
            mut draft,
            field,
        } => {
            let field = edit_draft(&mut draft, field, edit);
            ModalState::Editing {
                target,
                draft,
                field,
            }
        }
    }
}

/// Applies `edit` and returns the field that has focus afterwards.
fn edit_draft(draft: &mut FormDraft, field: DraftField, edit: DraftEdit) -> DraftField {
    match edit {
        DraftEdit::Insert(ch) => {
            draft.field_mut(field).push(ch);
            field
        }
        DraftEdit::Newline => match field {
            DraftField::Title => DraftField::Content,
            DraftField::Content => {
                draft.content.push('\n');
                field
            }
        },
        DraftEdit::Backspace => {
            draft.field_mut(field).pop();
            field
        }
        DraftEdit::NextField | DraftEdit::PreviousField => field.toggle(),
        DraftEdit::Focus(target) => target,
    }
}
