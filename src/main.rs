use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use canvas_filters::api;
use canvas_filters::models::{AppConfig, PresetConfig};
use canvas_filters::rendering::PngFileSink;
use canvas_filters::server;
use canvas_filters::services::{FilterService, ImageLoader, ImageSource};
use pixel_filter::Filter;

#[derive(Parser)]
#[command(name = "canvas-filters")]
#[command(about = "Per-pixel color filters for RGBA images")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a filter to an image and write the result as PNG
    Apply {
        /// Source image: http(s) URL or local path
        #[arg(short, long)]
        input: String,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Filter name (see `filters`)
        #[arg(short, long)]
        filter: Option<String>,

        /// Filter amount
        #[arg(short, long)]
        amount: Option<f32>,

        /// Preset name from config (see `presets`)
        #[arg(short, long)]
        preset: Option<String>,
    },
    /// Print the RGBA bytes of one pixel
    Pixel {
        /// Source image: http(s) URL or local path
        #[arg(short, long)]
        input: String,

        /// Column, starting at 0
        #[arg(short, long)]
        x: u32,

        /// Row, starting at 0
        #[arg(short, long)]
        y: u32,
    },
    /// List available filters
    Filters,
    /// List configured presets
    Presets,
    /// Start the HTTP server
    Serve,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Canvas Filters API",
        description = "Per-pixel color filters for RGBA images",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(api::handle_filter, api::handle_filters, api::handle_presets),
    components(schemas(api::FilterInfo, PresetConfig)),
    tags(
        (name = "Filter", description = "Image filtering"),
        (name = "Catalog", description = "Available filters and presets")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Apply {
            input,
            output,
            filter,
            amount,
            preset,
        } => {
            init_cli_logging();
            let config = load_config();
            tokio::task::spawn_blocking(move || {
                run_apply_command(config, &input, &output, filter, amount, preset)
            })
            .await?
        }
        Commands::Pixel { input, x, y } => {
            init_cli_logging();
            let config = load_config();
            tokio::task::spawn_blocking(move || run_pixel_command(config, &input, x, y)).await?
        }
        Commands::Filters => {
            run_filters_command();
            Ok(())
        }
        Commands::Presets => {
            init_cli_logging();
            run_presets_command(&load_config());
            Ok(())
        }
        Commands::Serve => run_server().await,
    }
}

/// Minimal logging for one-shot commands
fn init_cli_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "canvas_filters=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

fn load_config() -> AppConfig {
    let config_file = std::env::var("CONFIG_FILE").ok().map(PathBuf::from);
    AppConfig::load(config_file.as_deref())
}

/// Filter a single image to a PNG file (no server needed)
fn run_apply_command(
    config: AppConfig,
    input: &str,
    output: &Path,
    filter: Option<String>,
    amount: Option<f32>,
    preset: Option<String>,
) -> anyhow::Result<()> {
    let adjustment =
        config.resolve_adjustment(filter.as_deref(), amount, preset.as_deref())?;

    let config = Arc::new(config);
    let service = FilterService::new(Arc::new(ImageLoader::new(config.clone())), config);
    let sink = PngFileSink::new(output);

    let result = service.render(input, &adjustment, &sink)?;
    println!(
        "Applied {} (amount {}) to {}x{} image in {:.2} ms -> {}",
        adjustment.filter,
        adjustment.amount,
        result.filtered.width(),
        result.filtered.height(),
        result.elapsed.as_secs_f64() * 1000.0,
        output.display()
    );

    Ok(())
}

fn run_pixel_command(config: AppConfig, input: &str, x: u32, y: u32) -> anyhow::Result<()> {
    let image = ImageLoader::new(Arc::new(config)).load(input)?;
    let [r, g, b, a] = image.pixel(x, y).ok_or_else(|| {
        anyhow::anyhow!(
            "pixel ({x}, {y}) is outside the {}x{} image",
            image.width(),
            image.height()
        )
    })?;
    println!("({x}, {y}) = [{r}, {g}, {b}, {a}]");
    Ok(())
}

fn run_filters_command() {
    println!("Filters:");
    for filter in Filter::ALL {
        let note = if filter.uses_amount() {
            ""
        } else {
            " (ignores amount)"
        };
        println!("  {filter}{note}");
    }
}

fn run_presets_command(config: &AppConfig) {
    let mut presets: Vec<_> = config.presets.iter().collect();
    presets.sort_by(|a, b| a.0.cmp(b.0));

    println!("Presets:");
    for (name, preset) in presets {
        let marker = if config.default_preset.as_deref() == Some(name.as_str()) {
            " (default)"
        } else {
            ""
        };
        println!("  {name:<12} {} {}{marker}", preset.filter, preset.amount);
    }
}

async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "canvas_filters=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let state = server::create_app_state(load_config());

    // Build router: start with shared API routes, add production-only routes
    let app = server::build_router(state)
        // OpenAPI documentation (production only)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Canvas filters server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
