#[tokio::main]
async fn main() -> std::io::Result<()> {
    score_server::run_with_config().await
}
