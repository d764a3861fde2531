// minicat - entry point

use minicat::cli::CliHandler;
use minicat::utils::Logger;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let handler = CliHandler::new();

    if let Err(e) = handler.run().await {
        Logger::error(&format!("{} failed: {}", e.stage(), e));
        eprintln!("{}", e.format_detailed());
        std::process::exit(1);
    }
}
