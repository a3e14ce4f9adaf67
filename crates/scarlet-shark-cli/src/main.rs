//! sshark - Scarlet Shark threat intelligence CLI

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    scarlet_shark_cli::run().await
}
