#[tokio::main]
async fn main() -> anyhow::Result<()> {
    review_store_api::start_server().await
}
