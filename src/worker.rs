//! Executes API commands issued by the UI thread.
//!
//! Every command runs as its own task. There is no in-flight guard: two
//! commands sent back to back run concurrently and report in completion order.

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::api::{NewPost, Post, PostId, PostUpdate, PostsClient};
use crate::error::OperationError;
use crate::store::ReloadTicket;

pub const COMMAND_BUFFER: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    Reload { ticket: ReloadTicket },
    Create(NewPost),
    Update { id: PostId, update: PostUpdate },
    Publish { id: PostId },
    Delete { id: PostId },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Outcome of one command.
#[derive(Debug)]
pub enum ApiEvent {
    Loaded {
        ticket: ReloadTicket,
        result: Result<Vec<Post>, OperationError>,
    },
    Created(Result<(), OperationError>),
    Updated(Result<(), OperationError>),
    Published {
        id: PostId,
        result: Result<(), OperationError>,
    },
    Deleted {
        id: PostId,
        result: Result<(), OperationError>,
    },
}

pub fn command_channel() -> (UiCommandSender, mpsc::Receiver<UiCommand>) {
    mpsc::channel(COMMAND_BUFFER)
}

/// Run a single command to completion.
pub async fn execute(client: &PostsClient, command: UiCommand) -> ApiEvent {
    match command {
        UiCommand::Reload { ticket } => ApiEvent::Loaded {
            ticket,
            result: client.list_posts().await.map_err(OperationError::Fetch),
        },
        UiCommand::Create(post) => ApiEvent::Created(
            client
                .create_post(&post)
                .await
                .map_err(OperationError::Submit),
        ),
        UiCommand::Update { id, update } => ApiEvent::Updated(
            client
                .update_post(&id, &update)
                .await
                .map_err(OperationError::Submit),
        ),
        UiCommand::Publish { id } => {
            let result = client
                .publish_post(&id)
                .await
                .map_err(OperationError::Publish);
            ApiEvent::Published { id, result }
        }
        UiCommand::Delete { id } => {
            let result = client
                .delete_post(&id)
                .await
                .map_err(OperationError::Delete);
            ApiEvent::Deleted { id, result }
        }
    }
}

/// Drain `commands` on `runtime`, handing each outcome to `on_event`.
///
/// The loop ends once every sender has been dropped.
pub fn spawn_worker<F>(
    runtime: &Handle,
    client: PostsClient,
    mut commands: mpsc::Receiver<UiCommand>,
    on_event: F,
) -> JoinHandle<()>
where
    F: Fn(ApiEvent) + Clone + Send + 'static,
{
    let spawner = runtime.clone();
    runtime.spawn(async move {
        while let Some(command) = commands.recv().await {
            tracing::debug!(?command, "Dispatching API command");
            let client = client.clone();
            let on_event = on_event.clone();
            spawner.spawn(async move {
                let event = execute(&client, command).await;
                on_event(event);
            });
        }
        tracing::debug!("Command channel closed, worker exiting");
    })
}
