use std::error::Error;

use log::{info, LevelFilter};
use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

use socktest::client::{ClientConfig, ClientSocket};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // console belongs to the tick lines, diagnostics only show up on warn
    let term_logger = TermLogger::new(
        LevelFilter::Warn,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
    CombinedLogger::init(vec![term_logger])?;

    let mut client = ClientSocket::connect(ClientConfig::default()).await?;
    client.handshake().await?;
    info!("client up");

    // never returns Ok, any transport failure ends the process
    client.run().await?;
    Ok(())
}
