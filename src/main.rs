#[tokio::main]
async fn main() {
    if let Err(e) = sghss::run().await {
        eprintln!("{:?}", e);
        std::process::exit(1);
    }
}
