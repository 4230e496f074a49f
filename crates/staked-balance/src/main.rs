#[tokio::main]
async fn main() {
    staked_balance::start(std::env::args()).await;
}
