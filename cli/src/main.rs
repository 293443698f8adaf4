use std::io::Write;

use zulrah_cli::CliContext;
use zulrah_cli::commands::{self, Commands};
use zulrah_cli::logging;
use zulrah_cli::readline;

#[tokio::main]
async fn main() -> Result<(), String> {
    logging::init();
    let ctx = CliContext::new();

    // Scripts passed on the command line run before the prompt opens
    for path in std::env::args().skip(1) {
        if let Err(err) = commands::replay(&path, &ctx).await {
            eprintln!("{err}");
        }
    }

    loop {
        let line = readline()?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match respond(line, &ctx).await {
            Ok(quit) => {
                if quit {
                    break;
                }
            }
            Err(err) => {
                write!(std::io::stdout(), "{err}").map_err(|e| e.to_string())?;
                std::io::stdout().flush().map_err(|e| e.to_string())?;
            }
        }
    }

    Ok(())
}

async fn respond(line: &str, ctx: &CliContext) -> Result<bool, String> {
    match commands::parse_line(line)? {
        Some(Commands::Replay { path }) => {
            commands::replay(&path, ctx).await?;
            Ok(false)
        }
        Some(command) => commands::run(command, ctx).await,
        None => Ok(false),
    }
}
