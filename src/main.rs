use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use color_harmony::{generate_schemes, Rgb};
use color_oven::api;
use color_oven::assets::{AssetCategory, AssetLoader};
use color_oven::models::Product;
use color_oven::server;

#[derive(Parser)]
#[command(name = "color-oven")]
#[command(about = "Color Oven - color harmony schemes and color-filtered product search")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Print the harmony schemes for a color as JSON
    Schemes {
        /// Color as "#rrggbb", "rgb" shorthand, or "rgb(r, g, b)"
        color: String,

        /// Single-line JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
    /// Print a color in hex, RGB and HSL notation
    Info {
        /// Color as "#rrggbb", "rgb" shorthand, or "rgb(r, g, b)"
        color: String,
    },
    /// Extract embedded assets to filesystem for customization
    Init {
        /// Extract config.yaml
        #[arg(long)]
        config: bool,

        /// Extract catalog.json
        #[arg(long)]
        catalog: bool,

        /// Overwrite existing files
        #[arg(long, short)]
        force: bool,

        /// List embedded assets without extracting
        #[arg(long)]
        list: bool,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Color Oven API",
        description = "Color harmony schemes and color-filtered product search",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(
        api::handle_color_schemes,
        api::handle_color_info,
        api::handle_product_search,
    ),
    components(schemas(
        color_harmony::HarmonySchemes,
        color_harmony::Rgb,
        color_harmony::HslPercent,
        api::ColorInfo,
        api::ProductSearchRequest,
        Product,
    )),
    tags(
        (name = "Color", description = "Color conversion and harmony schemes"),
        (name = "Products", description = "Product search filtered by color")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => run_server().await,
        Some(Commands::Schemes { color, compact }) => run_schemes_command(&color, compact),
        Some(Commands::Info { color }) => run_info_command(&color),
        Some(Commands::Init {
            config,
            catalog,
            force,
            list,
        }) => run_init_command(config, catalog, force, list),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Minimal logging for one-shot commands
fn init_cli_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "color_oven=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

fn parse_color(color: &str) -> anyhow::Result<Rgb> {
    color
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid color '{color}': {e}"))
}

/// Print schemes without starting the server
fn run_schemes_command(color: &str, compact: bool) -> anyhow::Result<()> {
    init_cli_tracing();

    let schemes = generate_schemes(parse_color(color)?);
    let json = if compact {
        serde_json::to_string(&schemes)?
    } else {
        serde_json::to_string_pretty(&schemes)?
    };
    println!("{json}");

    Ok(())
}

fn run_info_command(color: &str) -> anyhow::Result<()> {
    init_cli_tracing();

    let info = api::ColorInfo::from(parse_color(color)?);
    println!("Hex: {}", info.hex);
    println!("RGB: {}", info.css);
    println!(
        "HSL: hsl({}, {}%, {}%)",
        info.hsl.h, info.hsl.s, info.hsl.l
    );

    Ok(())
}

/// Extract embedded assets to filesystem
fn run_init_command(config: bool, catalog: bool, force: bool, list: bool) -> anyhow::Result<()> {
    if list {
        println!("Embedded assets:\n");
        for f in AssetLoader::list_embedded() {
            println!("  {f}");
        }
        return Ok(());
    }

    let mut categories = Vec::new();
    if config {
        categories.push(AssetCategory::Config);
    }
    if catalog {
        categories.push(AssetCategory::Catalog);
    }
    if categories.is_empty() {
        categories = vec![AssetCategory::Config, AssetCategory::Catalog];
    }

    // Paths from CONFIG_FILE / CATALOG_FILE, or the working directory
    let loader = AssetLoader::from_env();
    let report = loader.init(&categories, force)?;

    if !report.written.is_empty() {
        println!("Extracted {} files:", report.written.len());
        for f in &report.written {
            println!("  + {f}");
        }
    }
    if !report.skipped.is_empty() {
        println!(
            "\nSkipped {} existing files (use --force to overwrite):",
            report.skipped.len()
        );
        for f in &report.skipped {
            println!("  - {f}");
        }
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();
    let catalog_file = std::env::var("CATALOG_FILE").ok();
    let has_credentials = std::env::var("PRODUCT_CLIENT_ID").is_ok()
        && std::env::var("PRODUCT_CLIENT_SECRET").is_ok();

    println!("Color Oven v{VERSION}");
    println!("Color harmony schemes and color-filtered product search\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR    = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE  = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  CATALOG_FILE = {}",
        catalog_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  PRODUCT_CLIENT_ID/SECRET = {}",
        if has_credentials { "set" } else { "(not set)" }
    );

    fn source(path: Option<&str>) -> String {
        match path {
            Some(p) if std::path::Path::new(p).exists() => p.to_string(),
            Some(_) => "embedded (file not found)".to_string(),
            None => "embedded".to_string(),
        }
    }

    println!("\nAsset Sources:");
    println!("  Config:  {}", source(config_file.as_deref()));
    println!("  Catalog: {}", source(catalog_file.as_deref()));

    println!("\nCommands:");
    println!("  color-oven serve            Start the HTTP server");
    println!("  color-oven schemes <COLOR>  Print harmony schemes as JSON");
    println!("  color-oven info <COLOR>     Print a color in hex, RGB and HSL");
    println!("  color-oven init             Extract embedded assets");
    println!("\nRun 'color-oven --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "color_oven=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let asset_loader = Arc::new(AssetLoader::from_env());

    let describe = |p: Option<&std::path::Path>| {
        p.map(|p| p.display().to_string())
            .unwrap_or_else(|| "embedded".to_string())
    };
    tracing::info!(
        config = %describe(asset_loader.config_file()),
        catalog = %describe(asset_loader.catalog_file()),
        "Asset sources configured"
    );

    let state = server::create_app_state(asset_loader)?;
    tracing::info!(
        source = state.product_source.name(),
        cache_entries = state.config.cache.max_entries,
        "Application state ready"
    );

    // Build router: start with shared API routes, add production-only routes
    let app = server::build_router(state)
        // OpenAPI documentation (production only)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Color Oven server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
