use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = omdb_relay::cli::Cli::parse();
    if let Err(e) = omdb_relay::cmd::dispatch(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
