use std::net::SocketAddr;
use std::time::Duration;

use app::{AppConfig, AppState};
use tokio::task::JoinHandle;

/// In-process test server
///
/// Binds the application router to an ephemeral localhost port and exposes a
/// `reqwest` client that does not follow redirects, so tests can observe the
/// redirect issued after a valid submission.
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: reqwest::Client,
    handle: JoinHandle<()>,
}

impl TestServer {
    pub async fn start() -> Result<Self, Box<dyn std::error::Error>> {
        let state = AppState::new(AppConfig::default())?;
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            if let Err(err) = axum::serve(listener, app::router(state)).await {
                eprintln!("test server stopped: {err}");
            }
        });

        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            handle,
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
