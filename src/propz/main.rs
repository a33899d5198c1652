use chrono::{NaiveDate, Utc};
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use propz::api::{CmdMessage, MessageLevel, PropzApi};
use propz::config::PropzConfig;
use propz::criteria::{Bounds, Criteria};
use propz::dataset::load_dataset;
use propz::error::Result;
use propz::favourites::Favourites;
use propz::filter::property_added_date;
use propz::model::Property;
use propz::store::fs::{FsBackend, SLOT_FILENAME};
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands, FavAction};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: PropzApi<FsBackend>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Config is handled before the dataset loads so a data file can be set
    // while none is configured yet.
    if let Some(Commands::Config { key, value }) = &cli.command {
        return handle_config(key.clone(), value.clone());
    }

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Search {
            kind,
            min_price,
            max_price,
            min_beds,
            max_beds,
            since,
            postcode,
        }) => handle_search(
            &mut ctx, kind, min_price, max_price, min_beds, max_beds, since, postcode,
        ),
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::View { id }) => handle_view(&ctx, &id),
        Some(Commands::Fav { action }) => handle_fav(&mut ctx, action),
        Some(Commands::Config { .. }) => unreachable!("handled above"),
    }
}

fn bounds_from(min: Option<f64>, max: Option<f64>) -> Option<Bounds> {
    match (min, max) {
        (None, None) => None,
        (min, max) => Some(Bounds::new(min.unwrap_or(0.0), max.unwrap_or(f64::MAX))),
    }
}

fn data_root() -> PathBuf {
    if let Ok(dir) = std::env::var("PROPZ_DATA_DIR") {
        return PathBuf::from(dir);
    }
    let proj_dirs =
        ProjectDirs::from("com", "propz", "propz").expect("Could not determine data dir");
    proj_dirs.data_dir().to_path_buf()
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let root = data_root();
    let config = PropzConfig::load(&root).unwrap_or_default();

    let data_file = cli
        .data
        .clone()
        .or(config.data_file)
        .unwrap_or_else(|| PathBuf::from("data/properties.json"));

    let properties = load_dataset(&data_file)?;
    let favourites = Favourites::open(FsBackend::new(root.join(SLOT_FILENAME)));

    Ok(AppContext {
        api: PropzApi::new(properties, favourites),
    })
}

#[allow(clippy::too_many_arguments)]
fn handle_search(
    ctx: &mut AppContext,
    kind: Option<String>,
    min_price: Option<f64>,
    max_price: Option<f64>,
    min_beds: Option<f64>,
    max_beds: Option<f64>,
    since: Option<NaiveDate>,
    postcode: Option<String>,
) -> Result<()> {
    let criteria = Criteria {
        kind,
        price: bounds_from(min_price, max_price),
        bedrooms: bounds_from(min_beds, max_beds),
        added_since: since,
        postcode,
    };
    ctx.api.set_criteria(criteria);

    let result = ctx.api.search()?;
    println!("Showing {} result(s)", result.listed.len());
    let favourite_ids = favourite_ids(&ctx.api);
    print_properties(&result.listed, &favourite_ids);
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.search()?;
    let favourite_ids = favourite_ids(&ctx.api);
    print_properties(&result.listed, &favourite_ids);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api.view(id)?;
    if let Some(property) = &result.property {
        print_property_detail(property);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_fav(ctx: &mut AppContext, action: Option<FavAction>) -> Result<()> {
    let result = match action {
        Some(FavAction::Add { id }) => ctx.api.favourite(&id)?,
        Some(FavAction::Rm { id }) => ctx.api.unfavourite(&id)?,
        Some(FavAction::Toggle { id }) => ctx.api.toggle_favourite(&id)?,
        Some(FavAction::Clear) => ctx.api.clear_favourites()?,
        None => ctx.api.favourites()?,
    };

    if !result.favourites.is_empty() {
        println!("{}", "Favourites".bold());
        print_properties(&result.favourites, &[]);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(key: Option<String>, value: Option<String>) -> Result<()> {
    let root = data_root();
    let mut config = PropzConfig::load(&root).unwrap_or_default();

    match (key.as_deref(), value) {
        (None, _) | (Some("data-file"), None) => {
            match &config.data_file {
                Some(path) => println!("data-file = {}", path.display()),
                None => println!("data-file is not set"),
            }
        }
        (Some("data-file"), Some(v)) => {
            config.data_file = Some(PathBuf::from(&v));
            config.save(&root)?;
            println!("data-file = {}", v);
        }
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
        }
    }
    Ok(())
}

fn favourite_ids(api: &PropzApi<FsBackend>) -> Vec<String> {
    api.favourites()
        .map(|r| r.favourites.into_iter().map(|p| p.id).collect())
        .unwrap_or_default()
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;
const PRICE_WIDTH: usize = 12;
const TIME_WIDTH: usize = 16;
const FAV_MARKER: &str = "★";

fn print_properties(properties: &[Property], favourite_ids: &[String]) {
    if properties.is_empty() {
        return;
    }

    for property in properties {
        let is_fav = favourite_ids.contains(&property.id);
        let left_prefix = if is_fav {
            format!("  {} ", FAV_MARKER.yellow())
        } else {
            "    ".to_string()
        };
        // The colored marker embeds ANSI codes, so the width is fixed by hand.
        let left_prefix_width = 4;

        let id_str = format!("{}  ", property.id);
        let id_width = id_str.width();

        let summary = summary_line(property);
        let price_col = format!(
            "{:>width$}",
            format_price(property.price_value()),
            width = PRICE_WIDTH
        );
        let time_ago = format_time_ago(property_added_date(property));

        let fixed = left_prefix_width + id_width + PRICE_WIDTH + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed);

        let summary_display = truncate_to_width(&summary, available);
        let padding = available.saturating_sub(summary_display.width());

        println!(
            "{}{}{}{}{}{}",
            left_prefix,
            id_str.cyan(),
            summary_display,
            " ".repeat(padding),
            price_col.green(),
            time_ago.dimmed()
        );
    }
}

fn summary_line(property: &Property) -> String {
    let kind = property.type_name().unwrap_or("N/A");
    let beds = match property.bedroom_count() {
        Some(b) => format!("{} bed", b),
        None => "– bed".to_string(),
    };
    let location = property.location_text().unwrap_or("Property");
    format!("{} · {} · {}", kind, beds, location)
}

fn print_property_detail(property: &Property) {
    use propz::commands::view::{gallery, map_embed_url};

    let title = property.location_text().unwrap_or("Property");
    println!("{} {}", property.id.cyan(), title.bold());
    println!("--------------------------------");

    println!(
        "{} {}",
        "Price:".bold(),
        format_price(property.price_value()).green()
    );
    if let Some(kind) = property.type_name() {
        println!("{} {}", "Type:".bold(), kind);
    }
    if let Some(beds) = property.bedroom_count() {
        println!("{} {}", "Bedrooms:".bold(), beds);
    }
    if let Some(baths) = property.bathroom_count() {
        println!("{} {}", "Bathrooms:".bold(), baths);
    }
    if let Some(tenure) = &property.tenure {
        println!("{} {}", "Tenure:".bold(), tenure);
    }
    if let Some(area) = &property.postcode_area {
        println!("{} {}", "Postcode area:".bold(), area);
    }
    if let Some(added) = property_added_date(property) {
        println!("{} {}", "Added:".bold(), added.format("%-d %B %Y"));
    }

    let description = property
        .description
        .as_deref()
        .or(property.short_description.as_deref());
    if let Some(text) = description {
        println!("\n{}", text);
    }

    let images = gallery(property);
    if !images.is_empty() {
        println!("\n{}", "Gallery".bold());
        for image in images {
            println!("  {}", image);
        }
    }
    if let Some(plan) = property.floor_plan_path() {
        println!("{} {}", "Floor plan:".bold(), plan);
    }
    if let Some(url) = map_embed_url(property) {
        println!("{} {}", "Map:".bold(), url.underline());
    }
}

fn format_price(value: Option<f64>) -> String {
    let value = match value {
        Some(v) => v,
        None => return "Price N/A".to_string(),
    };

    let whole = value.round() as i64;
    let digits = whole.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if whole < 0 {
        format!("-£{}", grouped)
    } else {
        format!("£{}", grouped)
    }
}

fn format_time_ago(date: Option<NaiveDate>) -> String {
    let date = match date {
        Some(d) => d,
        None => return format!("{:>width$}", "", width = TIME_WIDTH),
    };

    let now = Utc::now().date_naive();
    let duration = (now - date).to_std().unwrap_or_default();

    let formatter = timeago::Formatter::new();
    let time_str = format!("added {}", formatter.convert(duration));
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
