//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use mock_api::{CapturedRequest, MockApi, MockResponse};
use post_console::api::{Post, PostId, PostStatus, PostsClient};
use post_console::config::ApiConfig;
use post_console::ui::app::App;
use post_console::ui::events::{AppEvent, EventHandler};
use post_console::ui::runtime::apply_event;
use post_console::worker::{command_channel, spawn_worker};
use std::time::{Duration, Instant};
use tokio::runtime::Runtime;
use tokio::task::JoinHandle;

pub fn post(id: &str, title: &str, status: PostStatus) -> Post {
    Post {
        id: PostId::new(id).unwrap(),
        title: title.to_string(),
        content: format!("{title} body"),
        status,
    }
}

pub fn client_for(base_url: &str) -> PostsClient {
    let config = ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
    };
    PostsClient::new(&config).expect("client")
}

/// An `App` wired to a real worker and a mock API, driven synchronously
/// from the test thread the same way the UI loop drives it.
pub struct Harness {
    pub app: App,
    pub mock: MockApi,
    events: EventHandler,
    worker: JoinHandle<()>,
    rt: Runtime,
}

impl Harness {
    pub fn start() -> Self {
        let rt = Runtime::new().expect("runtime");
        let mock = rt.block_on(MockApi::start());
        let client = client_for(&mock.base_url());

        let events = EventHandler::detached();
        let api_events = events.sender();
        let (command_tx, command_rx) = command_channel();
        let worker = spawn_worker(rt.handle(), client, command_rx, move |event| {
            let _ = api_events.send(AppEvent::Api(event));
        });

        let mut app = App::new(mock.base_url());
        app.set_command_sender(command_tx);

        Self {
            app,
            mock,
            events,
            worker,
            rt,
        }
    }

    pub fn enqueue(&self, resp: MockResponse) {
        self.rt.block_on(self.mock.enqueue_response(resp));
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.rt.block_on(self.mock.captured_requests())
    }

    /// Feed events into the app until `done` holds or five seconds pass.
    pub fn pump_until(&mut self, done: impl Fn(&App) -> bool) -> bool {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if done(&self.app) {
                return true;
            }
            if let Ok(event) = self.events.next(Duration::from_millis(20)) {
                apply_event(&mut self.app, event);
            }
        }
        done(&self.app)
    }

    /// Apply whatever arrives within `window` without waiting for a condition.
    pub fn settle(&mut self, window: Duration) {
        let deadline = Instant::now() + window;
        while Instant::now() < deadline {
            if let Ok(event) = self.events.next(Duration::from_millis(20)) {
                apply_event(&mut self.app, event);
            }
        }
    }

    pub fn notification(&self) -> Option<&str> {
        self.app
            .posts()
            .notification
            .as_ref()
            .map(|n| n.message.as_str())
    }
}

impl Drop for Harness {
    fn drop(&mut self) {
        self.worker.abort();
    }
}
