#[tokio::main]
async fn main() {
    gold_hangman::cli::run().await;
}
