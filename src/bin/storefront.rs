use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use minimal_shop::{
    config::{self, AppConfig},
    format::format_price,
    models::{Product, Section},
    render::{render_panel, RenderSettings},
    services::{content, filtered_products, Catalog, ViewState},
    session::Session,
};
use serde::Serialize;
use tracing::debug;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let app_config = match &cli.config_dir {
        Some(dir) => config::load_config_from(dir, &config::run_env()),
        None => config::load_config(),
    }
    .context("failed to load configuration")?;
    config::init_tracing(app_config.log_level(), app_config.log_json);
    debug!(environment = %app_config.environment, "configuration ready");

    let catalog = Catalog::builtin();
    match cli.command {
        Commands::Catalog(args) => handle_catalog(catalog, &app_config, args, cli.json)?,
        Commands::Categories => handle_categories(catalog, cli.json)?,
        Commands::Show(args) => handle_show(catalog, &app_config, args, cli.json)?,
        Commands::Session(args) => handle_session(catalog, &app_config, args, cli.json)?,
    }

    Ok(())
}

#[derive(Parser)]
#[command(
    name = "storefront",
    about = "Minimal Shop storefront: browse the catalog and fill a cart",
    version
)]
struct Cli {
    #[arg(
        long,
        global = true,
        action = ArgAction::SetTrue,
        help = "Render command output as JSON when available"
    )]
    json: bool,
    #[arg(long, global = true, help = "Directory holding default.toml and profile configs")]
    config_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog products matching a search query and category
    Catalog(CatalogArgs),
    /// List product categories
    Categories,
    /// Render one panel of a fresh session
    Show(ShowArgs),
    /// Run an interactive session reading commands from stdin or a script
    Session(SessionArgs),
}

#[derive(Args)]
struct CatalogArgs {
    #[arg(long, short, default_value = "", help = "Case-insensitive name search")]
    query: String,
    #[arg(long, short, default_value = "all", help = "Category id, or 'all'")]
    category: String,
}

#[derive(Args)]
struct ShowArgs {
    #[arg(help = "home, catalog, cart, about, reviews or contacts")]
    section: Section,
}

#[derive(Args)]
struct SessionArgs {
    #[arg(long, help = "Read commands from this file instead of stdin")]
    script: Option<PathBuf>,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn render_product(product: &Product, settings: &RenderSettings) {
    println!(
        "- [{}] {} • {} • {}",
        product.id,
        product.name,
        product.category,
        format_price(product.price, &settings.currency_symbol)
    );
}

fn handle_catalog(
    catalog: &Catalog,
    app_config: &AppConfig,
    args: CatalogArgs,
    json: bool,
) -> Result<()> {
    let products = filtered_products(catalog.products(), &args.query, &args.category);
    if json {
        return print_json(&products);
    }

    if products.is_empty() {
        println!("Товары не найдены");
        return Ok(());
    }
    let settings = app_config.render_settings();
    for product in products {
        render_product(product, &settings);
    }
    Ok(())
}

fn handle_categories(catalog: &Catalog, json: bool) -> Result<()> {
    if json {
        return print_json(&catalog.categories());
    }
    for category in catalog.categories() {
        println!("- {} • {}", category.id, category.name);
    }
    Ok(())
}

fn handle_show(catalog: &Catalog, app_config: &AppConfig, args: ShowArgs, json: bool) -> Result<()> {
    let state = ViewState::starting_at(args.section);
    if json {
        return print_json(&state.summary(catalog));
    }
    print!(
        "{}",
        render_panel(&state, catalog, content::builtin(), &app_config.render_settings())
    );
    Ok(())
}

fn handle_session(
    catalog: &Catalog,
    app_config: &AppConfig,
    args: SessionArgs,
    json: bool,
) -> Result<()> {
    let state = ViewState::starting_at(app_config.initial_section());
    let mut session = Session::new(
        state,
        catalog,
        content::builtin(),
        app_config.render_settings(),
    )
    .with_json(json);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.script {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            session.run(BufReader::new(file), &mut out)
        }
        None => session.run(io::stdin().lock(), &mut out),
    }
    .context("session aborted")?;
    Ok(())
}
