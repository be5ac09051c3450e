pub mod test_helpers {
    use std::sync::mpsc::{self, Receiver, Sender};
    use std::time::{Duration, Instant};

    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::app::App;
    use crate::ask::{AskRequest, AskResponse, QueryClient};
    use crate::config::Config;

    pub fn test_app() -> App {
        App::new(&Config::default())
    }

    /// App whose worker channels are held by the test
    pub fn app_with_channels() -> (App, Receiver<AskRequest>, Sender<AskResponse>) {
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        let mut app = test_app();
        app.ask.set_channels(request_tx, response_rx);
        (app, request_rx, response_tx)
    }

    /// App backed by a real worker talking to `endpoint`
    pub fn app_for_endpoint(endpoint: &str) -> App {
        let client = QueryClient::new(endpoint).unwrap();
        App::with_worker(&Config::default(), client)
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.handle_key_event(key(KeyCode::Char(ch)));
        }
    }

    /// Endpoint on a port nothing listens on
    pub fn unreachable_endpoint() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        format!("http://127.0.0.1:{}/query", port)
    }

    /// Poll until the in-flight request settles. Returns false on timeout.
    pub fn wait_for_response(app: &mut App, timeout_ms: u64) -> bool {
        let start = Instant::now();
        let timeout = Duration::from_millis(timeout_ms);

        while start.elapsed() < timeout {
            app.poll_response();
            if !app.ask.loading {
                return true;
            }
            std::thread::sleep(Duration::from_millis(10));
        }

        false
    }
}
