//! ConceptLab CLI - generate and browse product concepts
//!
//! Talks to a running ConceptLab API; nothing is persisted apart from config.

mod api;
mod config;
mod products;
mod studio;

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use conceptlab::{catalog, Category, ProductLine, ThreadRandom};
use dialoguer::{Input, Select};
use tracing_subscriber::EnvFilter;

use api::{ConceptClient, GenerateParams};
use config::Config;
use products::{Product, ProductShaper};
use studio::{Phase, Studio};

#[derive(Parser)]
#[command(name = "conceptlab")]
#[command(about = "ConceptLab CLI - generate and browse product concepts", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the API is reachable and configured
    Health,

    /// List product categories and their brands
    Categories,

    /// Generate concepts once and print them
    Generate {
        /// Category key (e.g. laundry, oral-care)
        #[arg(short, long)]
        category: String,
        /// Brand (random brand of the category if omitted)
        #[arg(short, long)]
        brand: Option<String>,
        /// Number of concepts (server clamps to its batch limit)
        #[arg(short = 'n', long)]
        count: Option<u32>,
        /// Print products as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive session: generate, browse and favorite concepts
    Studio,

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set the API base URL
    SetUrl {
        /// e.g. http://localhost:8000
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Health => cmd_health().await,
        Commands::Categories => cmd_categories(),
        Commands::Generate { category, brand, count, json } => {
            cmd_generate(category, brand, count, json).await
        }
        Commands::Studio => cmd_studio().await,
        Commands::Config { action } => cmd_config(action.unwrap_or(ConfigAction::Show)),
    }
}

fn client_for(config: &Config) -> Result<ConceptClient> {
    ConceptClient::new(&config.base_url, config.timeout()).context("Failed to build HTTP client")
}

fn shaper() -> ProductShaper {
    ProductShaper::new(Arc::new(ThreadRandom))
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_health() -> Result<()> {
    let config = Config::load()?;
    let client = client_for(&config)?;

    print!("Checking {}... ", client.base_url());
    let health = match client.health().await {
        Ok(h) => {
            println!("{}", "OK".green());
            h
        }
        Err(e) => {
            println!("{}", "Failed".red());
            return Err(e.into());
        }
    };

    println!("  {} {}", "Status:".bold(), health.status);
    println!("  {} {}", "Message:".bold(), health.message);
    if let Some(version) = &health.version {
        println!("  {} {}", "Version:".bold(), version);
    }
    if let Some(env) = &health.env {
        let key = if env.has_openai_key {
            format!("set ({}...)", env.key_prefix).green()
        } else {
            "not set".red()
        };
        println!("  {} {}", "OpenAI key:".bold(), key);
        if let Some(mode) = &env.image_generation {
            println!("  {} {}", "Images:".bold(), mode);
        }
    }

    Ok(())
}

fn cmd_categories() -> Result<()> {
    println!("{}", "Categories:".bold());
    for line in ProductLine::ALL {
        println!(
            "  {} {} {}",
            line.key().cyan(),
            line.label().dimmed(),
            catalog::brands(line).join(", ")
        );
    }
    Ok(())
}

async fn cmd_generate(
    category: String,
    brand: Option<String>,
    count: Option<u32>,
    json: bool,
) -> Result<()> {
    let config = Config::load()?;
    let client = client_for(&config)?;

    let category = Category::new(&category)?;
    let params = GenerateParams {
        category: category.key().to_string(),
        brand: brand.filter(|b| !b.trim().is_empty()),
        count: count.or(config.default_count),
    };

    if !json {
        println!("Generating {} concepts...", category.display_name().cyan());
    }

    let resp = client.generate(&params).await?;
    let products = shaper().shape_all(resp.images, &params.category, params.brand.as_deref());

    if json {
        println!("{}", serde_json::to_string_pretty(&products)?);
        return Ok(());
    }

    println!(
        "{} {} concept(s) (session {})",
        "✓".green(),
        products.len(),
        resp.session_id.dimmed()
    );
    for product in &products {
        print_product(product, false);
    }

    Ok(())
}

async fn cmd_studio() -> Result<()> {
    let config = Config::load()?;
    let client = client_for(&config)?;
    let shaper = shaper();
    let mut studio = Studio::new(config.default_count);

    println!("{} {}", "ConceptLab Studio".bold(), client.base_url().dimmed());

    const ACTIONS: [&str; 6] = [
        "Choose category",
        "Choose brand",
        "Generate",
        "Browse products",
        "Favorites",
        "Quit",
    ];

    loop {
        let header = format!(
            "[{} / {}] {} product(s), {} favorite(s)",
            studio.selected_category().unwrap_or("no category"),
            studio.selected_brand().unwrap_or("any brand"),
            studio.products().len(),
            studio.favorites().len()
        );
        let choice = Select::new()
            .with_prompt(header)
            .items(&ACTIONS)
            .default(0)
            .interact()
            .context("Failed to read selection")?;

        match choice {
            0 => choose_category(&mut studio)?,
            1 => choose_brand(&mut studio)?,
            2 => {
                println!("Generating...");
                match studio.generate(&client, &shaper).await {
                    Ok(added) => match studio.phase() {
                        Phase::Failed(message) => println!("{} {}", "✗".red(), message),
                        _ => println!("{} {} new product(s)", "✓".green(), added),
                    },
                    Err(e) => println!("{} {}", "!".yellow(), e),
                }
            }
            3 => browse(&mut studio)?,
            4 => {
                let favorites: Vec<&Product> = studio
                    .favorites()
                    .iter()
                    .filter_map(|id| studio.product(*id))
                    .collect();
                if favorites.is_empty() {
                    println!("No favorites yet.");
                }
                for product in favorites {
                    print_product(product, false);
                }
            }
            _ => break,
        }
    }

    Ok(())
}

fn choose_category(studio: &mut Studio) -> Result<()> {
    let mut items: Vec<String> = ProductLine::ALL.iter().map(|l| l.label().to_string()).collect();
    items.push("Other...".to_string());

    let choice = Select::new()
        .with_prompt("Category")
        .items(&items)
        .default(0)
        .interact()
        .context("Failed to read category")?;

    match ProductLine::ALL.get(choice) {
        Some(line) => studio.select_category(line.key()),
        None => {
            let key: String = Input::new()
                .with_prompt("Category key")
                .interact_text()
                .context("Failed to read category")?;
            studio.select_category(&key);
        }
    }
    Ok(())
}

fn choose_brand(studio: &mut Studio) -> Result<()> {
    let Some(category) = studio.selected_category() else {
        println!("{} Select a category first", "!".yellow());
        return Ok(());
    };
    let brands = category
        .parse::<ProductLine>()
        .map(catalog::brands)
        .unwrap_or(&[]);

    let mut items = vec!["Any brand".to_string()];
    items.extend(brands.iter().map(|b| b.to_string()));

    let choice = Select::new()
        .with_prompt("Brand")
        .items(&items)
        .default(0)
        .interact()
        .context("Failed to read brand")?;

    studio.select_brand(brands.get(choice.wrapping_sub(1)).copied());
    Ok(())
}

fn browse(studio: &mut Studio) -> Result<()> {
    if studio.products().is_empty() {
        println!("Nothing generated yet.");
        return Ok(());
    }

    let items: Vec<String> = studio
        .products()
        .iter()
        .map(|p| {
            let star = if studio.is_favorite(p.id) { "★" } else { " " };
            format!("{} {}", star, p.display_name())
        })
        .collect();
    let choice = Select::new()
        .with_prompt("Product")
        .items(&items)
        .default(0)
        .interact()
        .context("Failed to read product")?;

    let Some(id) = studio.products().get(choice).map(|p| p.id) else {
        bail!("Selection out of range");
    };
    print_product(studio.select_product(id)?, true);

    let toggle = Select::new()
        .with_prompt("Action")
        .items(&["Back", "Toggle favorite"])
        .default(0)
        .interact()
        .context("Failed to read action")?;
    if toggle == 1 {
        let now = studio.toggle_favorite(id)?;
        let label = if now { "Added to favorites" } else { "Removed from favorites" };
        println!("{} {}", "✓".green(), label);
    }
    Ok(())
}

fn print_product(product: &Product, detailed: bool) {
    let marker = if product.is_placeholder {
        " (placeholder)".yellow().to_string()
    } else {
        String::new()
    };
    println!(
        "  {} {} [{}]{}",
        product.id.to_string()[..8].dimmed(),
        product.display_name().cyan().bold(),
        product.sustainability_score.to_string().green(),
        marker
    );

    if !detailed {
        return;
    }

    println!("    {} {}", "Brand:".bold(), product.brand);
    println!("    {} {}", "Category:".bold(), product.category);
    if product.concept.product_name.is_some() {
        println!("    {} {}", "Line name:".bold(), product.name);
    }
    let copy = [
        ("Innovation:", &product.concept.innovation),
        ("Disruption:", &product.concept.market_disruption),
        ("Insight:", &product.concept.consumer_insight),
        ("Price:", &product.concept.price),
    ];
    for (label, value) in copy {
        if let Some(value) = value {
            println!("    {} {}", label.bold(), value);
        }
    }
    for feature in &product.features {
        println!("    - {}", feature);
    }
    if !product.prompt.is_empty() {
        println!("    {} {}", "Prompt:".bold(), truncate_string(&product.prompt, 120).dimmed());
    }
    println!("    {} {}", "Image:".bold(), truncate_string(&product.image_url, 80));
    println!(
        "    {} {}",
        "Created:".bold(),
        product.created_at.format("%Y-%m-%d %H:%M:%S")
    );
}

fn truncate_string(s: &str, max_chars: usize) -> String {
    let chars: String = s.chars().take(max_chars).collect();
    if s.chars().count() > max_chars {
        format!("{}...", chars)
    } else {
        s.to_string()
    }
}

fn cmd_config(action: ConfigAction) -> Result<()> {
    let mut config = Config::load()?;

    match action {
        ConfigAction::Show => {
            println!("{}", "Configuration:".bold());
            println!("  {} {:?}", "Config file:".dimmed(), Config::config_path()?);
            println!("  {} {}", "API URL:".dimmed(), config.base_url);
            println!("  {} {}s", "Timeout:".dimmed(), config.timeout_secs);
            match config.default_count {
                Some(n) => println!("  {} {}", "Default count:".dimmed(), n),
                None => println!("  {} {}", "Default count:".dimmed(), "server default".dimmed()),
            }
        }
        ConfigAction::SetUrl { url } => {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                bail!("URL must start with http:// or https://");
            }
            config.set_base_url(&url);
            config.save()?;
            println!("{} API URL set to {}", "✓".green(), config.base_url);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("short", 10), "short");
        assert_eq!(truncate_string("a longer line", 6), "a long...");
        assert_eq!(truncate_string("ÄÖÜäöü", 3), "ÄÖÜ...");
    }

    #[test]
    fn test_cli_parses_generate() {
        let cli = Cli::try_parse_from([
            "conceptlab", "generate", "--category", "laundry", "-n", "3", "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::Generate { category, brand, count, json } => {
                assert_eq!(category, "laundry");
                assert!(brand.is_none());
                assert_eq!(count, Some(3));
                assert!(json);
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_config_defaults_to_show() {
        let cli = Cli::try_parse_from(["conceptlab", "config"]).unwrap();
        assert!(matches!(cli.command, Commands::Config { action: None }));
    }
}
