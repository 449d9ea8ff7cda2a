#[tokio::main]
async fn main() -> std::io::Result<()> {
    game_core::run_with_config().await.map(|_| ())
}
