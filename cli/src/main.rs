use clap::Parser;
use presentation::cli::{Cli, CoachApp};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut app = CoachApp::new();
    app.run(cli).await?;
    Ok(())
}
