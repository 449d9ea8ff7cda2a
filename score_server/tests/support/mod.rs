// Shared primitives for one-time server bootstrapping across integration tests.
use score_server::JsonFileScoreStore;
use std::{
    path::PathBuf,
    sync::{Arc, OnceLock},
    time::Duration,
};

// Base URL and score file published once the server is bound.
static SERVER: OnceLock<(String, PathBuf)> = OnceLock::new();

/// Ensure the test server is running and return its base URL.
pub fn ensure_server() -> &'static str {
    server().0.as_str()
}

/// Score file backing the shared test server.
pub fn scores_file() -> &'static PathBuf {
    &server().1
}

fn server() -> &'static (String, PathBuf) {
    SERVER.get_or_init(|| {
        let published = Arc::new(OnceLock::<(String, PathBuf)>::new());
        let published_thread = Arc::clone(&published);
        // An OS thread keeps the server alive across `#[tokio::test]` runtimes.
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("test runtime");
            runtime.block_on(async move {
                // The temp dir lives as long as this thread, i.e. the test binary.
                let dir = tempfile::tempdir().expect("score tempdir");
                let path = dir.path().join("scores.json");
                let store = Arc::new(JsonFileScoreStore::new(&path));

                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind ephemeral test port");
                let addr = listener.local_addr().expect("get local addr");
                let _ = published_thread.set((format!("http://{addr}"), path));

                score_server::run(listener, store).await.expect("server failed");
                drop(dir);
            });
        });
        wait_for_readiness(published)
    })
}

// Wait for the address to be published, then for the socket to accept.
fn wait_for_readiness(published: Arc<OnceLock<(String, PathBuf)>>) -> (String, PathBuf) {
    let server = loop {
        if let Some(server) = published.get() {
            break server.clone();
        }
        std::thread::sleep(Duration::from_millis(10));
    };

    let addr = server
        .0
        .strip_prefix("http://")
        .expect("base url should use http://");
    for _ in 0..100 {
        if std::net::TcpStream::connect(addr).is_ok() {
            return server;
        }
        std::thread::sleep(Duration::from_millis(20));
    }

    panic!("server did not become ready in time");
}
