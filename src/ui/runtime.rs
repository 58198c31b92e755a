use crate::api::PostsClient;
use crate::config::Config;
use crate::notification::NotificationTimer;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::worker::{command_channel, spawn_worker};
use std::sync::mpsc::RecvTimeoutError;
use tokio::runtime::Handle;

/// Run the console until the user quits.
///
/// The UI loop owns the thread it is called on; API calls and notification
/// timers run on `runtime`.
pub fn run(config: &Config, runtime: &Handle) -> anyhow::Result<()> {
    let client = PostsClient::new(&config.api)?;
    let tick_rate = config.ui.tick_rate();

    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);

    let (command_tx, command_rx) = command_channel();
    let api_events = events.sender();
    let worker = spawn_worker(runtime, client.clone(), command_rx, move |event| {
        let _ = api_events.send(AppEvent::Api(event));
    });

    let mut app = App::new(client.base_url().as_str());
    app.set_command_sender(command_tx);
    app.set_notification_timer(
        NotificationTimer::new(runtime.clone(), config.ui.notification_window()),
        events.sender(),
    );
    tracing::info!(endpoint = %client.base_url(), "Console started");
    app.mount();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(event) => apply_event(&mut app, event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    // Dropping the app closes the command channel, which ends the worker loop.
    drop(app);
    worker.abort();
    drop(guard);
    tracing::info!("Console stopped");
    Ok(())
}

/// Feed one event into the app.
pub fn apply_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Tick | AppEvent::Resize(_, _) => {}
        AppEvent::Api(event) => app.on_api_event(event),
        AppEvent::NotificationExpired(id) => app.on_notification_expired(id),
    }
}
