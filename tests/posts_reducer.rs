mod common;

use common::post;
use post_console::api::{PostId, PostStatus};
use post_console::notification::NotificationKind;
use post_console::ui::mvi::Reducer;
use post_console::ui::posts::{
    DraftEdit, DraftField, FormDraft, ModalState, PostsIntent, PostsReducer, PostsState,
    Submission,
};

fn reduce_all(state: PostsState, intents: Vec<PostsIntent>) -> PostsState {
    intents.into_iter().fold(state, PostsReducer::reduce)
}

fn loaded(posts: Vec<post_console::api::Post>) -> PostsState {
    let state = PostsReducer::reduce(PostsState::default(), PostsIntent::ReloadIssued);
    let ticket = state.store.last_issued();
    PostsReducer::reduce(state, PostsIntent::Loaded { ticket, posts })
}

fn notify(message: &str) -> PostsIntent {
    PostsIntent::Notify {
        message: message.to_string(),
        kind: NotificationKind::Success,
    }
}

#[test]
fn open_create_starts_blank_draft() {
    let state = PostsReducer::reduce(PostsState::default(), PostsIntent::OpenCreate);
    assert!(state.modal.is_open());
    assert!(!state.modal.is_edit_mode());
    assert_eq!(state.modal.draft(), Some(&FormDraft::default()));
    assert_eq!(state.modal.field(), Some(DraftField::Title));
}

#[test]
fn open_edit_with_id_targets_that_post() {
    let state = loaded(vec![post("7", "Seven", PostStatus::Draft)]);
    let draft = FormDraft::from(&state.posts()[0]);
    let state = PostsReducer::reduce(state, PostsIntent::OpenEdit { draft });

    assert!(state.modal.is_edit_mode());
    match state.modal.submission() {
        Some(Submission::Update { id, update }) => {
            assert_eq!(id.as_str(), "7");
            assert_eq!(update.title, "Seven");
        }
        other => panic!("expected update, got {:?}", other),
    }
}

#[test]
fn open_edit_without_id_composes() {
    let draft = FormDraft {
        title: "Prefilled".to_string(),
        ..FormDraft::default()
    };
    let state = PostsReducer::reduce(PostsState::default(), PostsIntent::OpenEdit { draft });
    assert!(!state.modal.is_edit_mode());
    assert!(matches!(
        state.modal.submission(),
        Some(Submission::Create(ref new)) if new.title == "Prefilled"
    ));
}

#[test]
fn composing_with_leftover_id_still_creates() {
    let state = PostsState {
        modal: ModalState::Composing {
            draft: FormDraft {
                id: PostId::new("stale"),
                title: "T".to_string(),
                content: "C".to_string(),
                status: PostStatus::Draft,
            },
            field: DraftField::Title,
        },
        ..PostsState::default()
    };
    assert!(matches!(
        state.modal.submission(),
        Some(Submission::Create(_))
    ));
}

#[test]
fn typing_targets_focused_field() {
    let state = reduce_all(
        PostsState::default(),
        vec![
            PostsIntent::OpenCreate,
            PostsIntent::Edit(DraftEdit::Insert('H')),
            PostsIntent::Edit(DraftEdit::Insert('i')),
            PostsIntent::Edit(DraftEdit::NextField),
            PostsIntent::Edit(DraftEdit::Insert('x')),
            PostsIntent::Edit(DraftEdit::Newline),
            PostsIntent::Edit(DraftEdit::Insert('y')),
            PostsIntent::Edit(DraftEdit::Backspace),
        ],
    );
    let draft = state.modal.draft().unwrap();
    assert_eq!(draft.title, "Hi");
    assert_eq!(draft.content, "x\n");
}

#[test]
fn edits_without_modal_are_ignored() {
    let state = PostsReducer::reduce(
        PostsState::default(),
        PostsIntent::Edit(DraftEdit::Insert('a')),
    );
    assert_eq!(state.modal, ModalState::Idle);
}

#[test]
fn close_discards_draft() {
    let state = reduce_all(
        PostsState::default(),
        vec![
            PostsIntent::OpenCreate,
            PostsIntent::Edit(DraftEdit::Insert('a')),
            PostsIntent::Close,
        ],
    );
    assert_eq!(state.modal, ModalState::Idle);

    let reopened = PostsReducer::reduce(state, PostsIntent::OpenCreate);
    assert_eq!(reopened.modal.draft(), Some(&FormDraft::default()));
}

#[test]
fn failure_notification_keeps_modal_and_draft() {
    let state = reduce_all(
        PostsState::default(),
        vec![
            PostsIntent::OpenCreate,
            PostsIntent::Edit(DraftEdit::Insert('a')),
            PostsIntent::Notify {
                message: "Failed to save post.".to_string(),
                kind: NotificationKind::Error,
            },
        ],
    );
    assert!(state.modal.is_open());
    assert_eq!(state.modal.draft().unwrap().title, "a");
    assert!(state.notification.as_ref().unwrap().is_error());
}

#[test]
fn saved_closes_modal() {
    let state = reduce_all(
        PostsState::default(),
        vec![PostsIntent::OpenCreate, PostsIntent::Saved],
    );
    assert_eq!(state.modal, ModalState::Idle);
}

#[test]
fn newer_notification_survives_older_expiry() {
    let state = reduce_all(
        PostsState::default(),
        vec![notify("Post created successfully!"), notify("Post deleted successfully!")],
    );
    let first_id = state.notification.as_ref().unwrap().id - 1;

    let state = PostsReducer::reduce(state, PostsIntent::NotificationExpired { id: first_id });
    assert_eq!(
        state.notification.as_ref().unwrap().message,
        "Post deleted successfully!"
    );

    let current = state.notification.as_ref().unwrap().id;
    let state = PostsReducer::reduce(state, PostsIntent::NotificationExpired { id: current });
    assert!(state.notification.is_none());
}

#[test]
fn stale_reload_is_dropped() {
    let state = reduce_all(
        PostsState::default(),
        vec![PostsIntent::ReloadIssued],
    );
    let older = state.store.last_issued();
    let state = PostsReducer::reduce(state, PostsIntent::ReloadIssued);
    let newer = state.store.last_issued();

    let state = PostsReducer::reduce(
        state,
        PostsIntent::Loaded {
            ticket: newer,
            posts: vec![post("1", "Fresh", PostStatus::Published)],
        },
    );
    let state = PostsReducer::reduce(
        state,
        PostsIntent::Loaded {
            ticket: older,
            posts: vec![],
        },
    );

    assert_eq!(state.posts().len(), 1);
    assert_eq!(state.posts()[0].title, "Fresh");
    assert_eq!(state.store.last_applied(), newer);
}

#[test]
fn reload_replaces_list_and_clamps_selection() {
    let state = loaded(vec![
        post("1", "One", PostStatus::Draft),
        post("2", "Two", PostStatus::Draft),
        post("3", "Three", PostStatus::Draft),
    ]);
    let state = reduce_all(
        state,
        vec![PostsIntent::SelectPrevious, PostsIntent::ReloadIssued],
    );
    assert_eq!(state.selected, 2);

    let ticket = state.store.last_issued();
    let state = PostsReducer::reduce(
        state,
        PostsIntent::Loaded {
            ticket,
            posts: vec![post("1", "One", PostStatus::Draft)],
        },
    );
    assert_eq!(state.selected, 0);
    assert_eq!(state.selected_post().unwrap().id.as_str(), "1");
}

#[test]
fn selection_wraps_around() {
    let state = loaded(vec![
        post("1", "One", PostStatus::Draft),
        post("2", "Two", PostStatus::Draft),
    ]);
    let state = PostsReducer::reduce(state, PostsIntent::SelectNext);
    assert_eq!(state.selected, 1);
    let state = PostsReducer::reduce(state, PostsIntent::SelectNext);
    assert_eq!(state.selected, 0);
}

#[test]
fn delete_confirmation_can_be_dismissed() {
    let state = loaded(vec![post("9", "Nine", PostStatus::Draft)]);
    let state = PostsReducer::reduce(
        state,
        PostsIntent::RequestDelete {
            id: PostId::new("9").unwrap(),
            title: "Nine".to_string(),
        },
    );
    assert!(state.is_confirming_delete());

    let state = PostsReducer::reduce(state, PostsIntent::DismissDelete);
    assert!(!state.is_confirming_delete());
    assert_eq!(state.posts().len(), 1);
}
