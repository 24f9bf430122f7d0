#[tokio::main]
async fn main() {
    if let Err(e) = acmeauth::run().await {
        eprintln!("{:?}", e);
        std::process::exit(1);
    }
}
