use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use dishx_api::RestApi;
use dishx_core::RestaurantRecord;
use dishx_service::{catalog_view, filter, options, similar, CatalogManager};

/// Content-based restaurant recommendations
#[derive(Parser, Debug)]
#[command(name = "dishx")]
#[command(about = "Filter a restaurant catalog and find similar restaurants", long_about = None)]
struct Args {
    /// Path to the JSON restaurant catalog
    #[arg(short, long)]
    catalog: PathBuf,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the whole catalog
    List,

    /// Restaurants matching every preference
    Filter {
        #[arg(long)]
        city: String,

        #[arg(long)]
        cuisine: String,

        #[arg(long, value_enum)]
        delivery: DeliveryArg,

        /// Inclusive price ceiling
        #[arg(long, default_value_t = 500.0)]
        max_price: f64,
    },

    /// The five restaurants most similar to NAME
    Similar {
        name: String,
    },

    /// Distinct cities and cuisines
    Options,

    /// Serve the REST API
    Serve {
        /// HTTP API port
        #[arg(long, default_value_t = 8080)]
        http_port: u16,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum DeliveryArg {
    Yes,
    No,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting DishX v{}", env!("CARGO_PKG_VERSION"));
    info!("Catalog: {:?}", args.catalog);

    let manager = Arc::new(CatalogManager::new());
    manager.load_file(&args.catalog)?;
    let handle = manager.handle()?;

    match args.command {
        Command::List => print_records(catalog_view(&handle).iter()),
        Command::Filter { city, cuisine, delivery, max_price } => {
            let delivery = matches!(delivery, DeliveryArg::Yes);
            let matches = filter(&handle, &city, &cuisine, delivery, max_price);
            if matches.is_empty() {
                println!("No restaurant found for your preferences");
            } else {
                print_records(matches.into_iter());
            }
        }
        Command::Similar { name } => {
            for entry in similar(&handle, &name)? {
                println!("{} (Similarity Score: {:.2})", entry.name, entry.score);
            }
        }
        Command::Options => {
            println!("{}", serde_json::to_string_pretty(&options(&handle))?);
        }
        Command::Serve { http_port } => serve(manager, http_port).await?,
    }

    Ok(())
}

fn print_records<'a>(records: impl Iterator<Item = &'a RestaurantRecord>) {
    for r in records {
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            r.name, r.city, r.cuisine, r.delivery, r.average_cost, r.rating
        );
    }
}

async fn serve(manager: Arc<CatalogManager>, http_port: u16) -> anyhow::Result<()> {
    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on port {}", http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(manager, http_port).await {
                tracing::error!("HTTP server error: {}", e);
            }
        })
    });

    info!("HTTP API: http://localhost:{}/", http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}
