//! Post management view: state machine over the list, modal, delete
//! confirmation and notification banner.

mod intent;
mod reducer;
mod state;

pub use intent::{DraftEdit, PostsIntent};
pub use reducer::PostsReducer;
pub use state::{DraftField, FormDraft, ModalState, PendingDelete, PostsState, Submission};
