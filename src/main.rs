use clap::Parser;
use shopykart::api::{StoreApi, DEFAULT_BASE_URL};
use shopykart::router::Route;
use shopykart::shell::{App, Command};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::EnvFilter;

/// Browse the catalog, fill a cart, and run a mock checkout.
#[derive(Parser)]
#[command(name = "shopykart")]
#[command(about = "Interactive storefront session over a hosted product API")]
struct Cli {
    /// Base URL of the product API
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Open a single route (e.g. "/products?search=shirt"), print it, and exit
    #[arg(long)]
    route: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("shopykart=info")),
        )
        .init();

    let cli = Cli::parse();
    let mut app = App::new(StoreApi::with_base_url(cli.api_url));

    // One-shot mode: render a single route and exit.
    if let Some(target) = cli.route {
        let route = Route::parse(&target)?;
        println!("{}", app.open(route).await);
        return Ok(());
    }

    println!("ShopyKart. Type `help` for commands.");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    loop {
        stdout
            .write_all(format!("shopykart ({})> ", app.badge()).as_bytes())
            .await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break; // stdin closed
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match Command::parse(line) {
            Ok(Command::Quit) => break,
            Ok(command) => println!("{}", app.execute(command).await),
            Err(err) => println!("{err}"),
        }
    }

    Ok(())
}
