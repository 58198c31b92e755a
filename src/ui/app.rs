use crate::api::PostStatus;
use crate::error::OperationError;
use crate::notification::{NotificationKind, NotificationTimer};
use crate::ui::events::AppEvent;
use crate::ui::mvi::Reducer;
use crate::ui::posts::{DraftEdit, FormDraft, PostsIntent, PostsReducer, PostsState, Submission};
use crate::worker::{ApiEvent, UiCommand, UiCommandSender};
use std::sync::mpsc;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Controller for the post management view.
///
/// Owns the view state and performs the side effects around each reducer
/// dispatch: issuing API commands, reloading after mutations and scheduling
/// notification expiry.
pub struct App {
    should_quit: bool,
    posts: PostsState,
    api_endpoint: String,
    command_sender: Option<UiCommandSender>,
    notification_timer: Option<NotificationTimer>,
    event_sender: Option<mpsc::Sender<AppEvent>>,
    last_command_error: Option<String>,
}

impl App {
    pub fn new(api_endpoint: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            posts: PostsState::default(),
            api_endpoint: api_endpoint.into(),
            command_sender: None,
            notification_timer: None,
            event_sender: None,
            last_command_error: None,
        }
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    /// Expiries are delivered back as `AppEvent::NotificationExpired`.
    pub fn set_notification_timer(
        &mut self,
        timer: NotificationTimer,
        events: mpsc::Sender<AppEvent>,
    ) {
        self.notification_timer = Some(timer);
        self.event_sender = Some(events);
    }

    pub fn posts(&self) -> &PostsState {
        &self.posts
    }

    pub fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn last_command_error(&self) -> Option<&str> {
        self.last_command_error.as_deref()
    }

    // ========================================================================
    // User intent
    // ========================================================================

    /// Initial load when the view comes up.
    pub fn mount(&mut self) {
        self.reload();
    }

    /// Full re-fetch of the collection.
    pub fn reload(&mut self) -> bool {
        self.dispatch(PostsIntent::ReloadIssued);
        let ticket = self.posts.store.last_issued();
        self.send_command(UiCommand::Reload { ticket })
    }

    pub fn open_create(&mut self) {
        self.dispatch(PostsIntent::OpenCreate);
    }

    pub fn open_edit(&mut self, draft: FormDraft) {
        self.dispatch(PostsIntent::OpenEdit { draft });
    }

    pub fn open_edit_selected(&mut self) {
        let Some(post) = self.posts.selected_post() else {
            return;
        };
        let draft = FormDraft::from(post);
        self.open_edit(draft);
    }

    pub fn close_modal(&mut self) {
        self.dispatch(PostsIntent::Close);
    }

    pub fn edit_draft(&mut self, edit: DraftEdit) {
        self.dispatch(PostsIntent::Edit(edit));
    }

    /// Send the open draft as a create or update.
    ///
    /// A blank required field is not sent; focus jumps to it instead.
    pub fn submit(&mut self) -> bool {
        let Some(draft) = self.posts.modal.draft() else {
            return false;
        };
        if let Some(missing) = draft.first_missing_field() {
            self.edit_draft(DraftEdit::Focus(missing));
            return false;
        }

        match self.posts.modal.submission() {
            Some(Submission::Create(post)) => {
                tracing::info!(title = %post.title, "Creating post");
                self.send_command(UiCommand::Create(post))
            }
            Some(Submission::Update { id, update }) => {
                tracing::info!(%id, "Updating post");
                self.send_command(UiCommand::Update { id, update })
            }
            None => false,
        }
    }

    pub fn select_next(&mut self) {
        self.dispatch(PostsIntent::SelectNext);
    }

    pub fn select_previous(&mut self) {
        self.dispatch(PostsIntent::SelectPrevious);
    }

    /// Ask for confirmation before deleting the selected post.
    pub fn request_delete_selected(&mut self) {
        let Some(post) = self.posts.selected_post() else {
            return;
        };
        let intent = PostsIntent::RequestDelete {
            id: post.id.clone(),
            title: post.title.clone(),
        };
        self.dispatch(intent);
    }

    pub fn confirm_delete(&mut self) -> bool {
        let Some(pending) = self.posts.confirm_delete.clone() else {
            return false;
        };
        self.dispatch(PostsIntent::DismissDelete);
        tracing::info!(id = %pending.id, "Deleting post");
        self.send_command(UiCommand::Delete { id: pending.id })
    }

    pub fn cancel_delete(&mut self) {
        self.dispatch(PostsIntent::DismissDelete);
    }

    /// Publish the selected post. Not offered for already published posts.
    pub fn publish_selected(&mut self) -> bool {
        let Some(post) = self.posts.selected_post() else {
            return false;
        };
        if !post.status.can_publish() {
            return false;
        }
        let id = post.id.clone();
        tracing::info!(%id, "Publishing post");
        self.send_command(UiCommand::Publish { id })
    }

    // ========================================================================
    // Outcomes
    // ========================================================================

    pub fn on_api_event(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::Loaded { ticket, result } => match result {
                Ok(posts) => {
                    let count = posts.len();
                    self.dispatch(PostsIntent::Loaded { ticket, posts });
                    if self.posts.store.last_applied() == ticket {
                        tracing::info!(count, ticket = ticket.value(), "Posts loaded");
                    } else {
                        tracing::debug!(ticket = ticket.value(), "Dropped stale reload");
                    }
                }
                Err(err) if ticket < self.posts.store.last_applied() => {
                    tracing::debug!(
                        ticket = ticket.value(),
                        error = %err.details(),
                        "Dropped stale reload failure"
                    );
                }
                Err(err) => self.report_failure(err),
            },
            ApiEvent::Created(result) => self.on_saved(result, "Post created successfully!"),
            ApiEvent::Updated(result) => self.on_saved(result, "Post updated successfully!"),
            ApiEvent::Published { id, result } => match result {
                Ok(()) => {
                    tracing::info!(%id, status = %PostStatus::Published, "Post published");
                    self.notify("Post published successfully!", NotificationKind::Success);
                    self.reload();
                }
                Err(err) => self.report_failure(err),
            },
            ApiEvent::Deleted { id, result } => match result {
                Ok(()) => {
                    tracing::info!(%id, "Post deleted");
                    self.notify("Post deleted successfully!", NotificationKind::Success);
                    self.reload();
                }
                Err(err) => self.report_failure(err),
            },
        }
    }

    pub fn on_notification_expired(&mut self, id: u64) {
        self.dispatch(PostsIntent::NotificationExpired { id });
    }

    fn on_saved(&mut self, result: Result<(), OperationError>, message: &str) {
        match result {
            Ok(()) => {
                self.notify(message, NotificationKind::Success);
                self.dispatch(PostsIntent::Saved);
                self.reload();
            }
            // Modal and draft stay as they are so the user can retry.
            Err(err) => self.report_failure(err),
        }
    }

    fn report_failure(&mut self, err: OperationError) {
        tracing::warn!(error = %err.details(), "{}", err.user_message());
        self.notify(err.user_message(), NotificationKind::Error);
    }

    fn notify(&mut self, message: &str, kind: NotificationKind) {
        self.dispatch(PostsIntent::Notify {
            message: message.to_string(),
            kind,
        });
        let id = self.posts.notifications_shown;
        if let (Some(timer), Some(events)) = (&mut self.notification_timer, &self.event_sender) {
            let events = events.clone();
            timer.schedule(id, move |id| {
                let _ = events.send(AppEvent::NotificationExpired(id));
            });
        }
    }

    fn dispatch(&mut self, intent: PostsIntent) {
        dispatch_mvi!(self, posts, PostsReducer, intent);
    }

    fn send_command(&mut self, command: UiCommand) -> bool {
        let Some(sender) = &self.command_sender else {
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => {
                self.last_command_error = None;
                true
            }
            Err(err) => {
                tracing::error!("Command send failed: {}", err);
                self.last_command_error = Some(format!("Command send failed: {}", err));
                false
            }
        }
    }
}
