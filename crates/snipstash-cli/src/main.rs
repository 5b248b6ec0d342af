mod config;
mod json_source;

use anyhow::{ensure, Result};
use clap::{Parser, Subcommand};
use json_source::JsonFileSource;
use snipstash_core::suggest::{KeywordTagger, Tagger};
use snipstash_core::{CollectionView, DateRange, FilterPatch, ItemId, RawRow};
use std::path::PathBuf;
use time::OffsetDateTime;

#[derive(Parser)]
#[command(name = "snipstash", version, about = "Browse and prune a snipstash capture library")]
struct Cli {
    /// Path to the JSON capture library (defaults to the configured one)
    #[arg(long, global = true)]
    library: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Save a capture into the library
    Add {
        /// The captured text
        content: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        url: Option<String>,
        /// Comma-joined tag list
        #[arg(long)]
        tags: Option<String>,
        /// ISO date; defaults to today
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        image: Option<String>,
        /// Merge keyword-derived tag suggestions into --tags
        #[arg(long)]
        suggest_tags: bool,
    },
    /// List captures, filtered and paginated
    List {
        /// Case-insensitive substring over title, content, and tags
        #[arg(long)]
        search: Option<String>,
        /// Exact tag match
        #[arg(long)]
        tag: Option<String>,
        /// today, week, or month
        #[arg(long)]
        range: Option<DateRange>,
        /// Reveal every page, not just the first
        #[arg(long)]
        all: bool,
        #[arg(long)]
        json: bool,
    },
    /// Print the deduplicated tag index
    Tags {
        #[arg(long)]
        json: bool,
    },
    /// Print collection statistics
    Stats {
        #[arg(long)]
        json: bool,
    },
    /// Delete a capture by the id shown in `list`
    Delete { id: u32 },
    /// Suggest tags for a piece of text
    Suggest { text: String },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = config::load_settings();
    let library = cli
        .library
        .or(settings.library)
        .unwrap_or_else(config::default_library_path);
    let page_size = settings
        .page_size
        .unwrap_or(snipstash_core::DEFAULT_PAGE_SIZE);
    let source = JsonFileSource::new(&library);

    match cli.command {
        Commands::Add {
            content,
            title,
            url,
            tags,
            date,
            image,
            suggest_tags,
        } => {
            ensure!(!content.trim().is_empty(), "refusing to save empty content");
            let tags = if suggest_tags {
                let suggested = KeywordTagger::new().suggest(
                    title.as_deref().unwrap_or(""),
                    &content,
                    url.as_deref().unwrap_or(""),
                );
                merge_tags(tags.as_deref(), &suggested)
            } else {
                tags
            };
            let row = RawRow {
                title,
                content: Some(content),
                url,
                tags,
                date: date.or_else(|| Some(OffsetDateTime::now_utc().date().to_string())),
                image,
            };
            source.append(row)?;
            println!("saved to {}", library.display());
        }
        Commands::List {
            search,
            tag,
            range,
            all,
            json,
        } => {
            let mut view = CollectionView::with_page_size(source, page_size);
            view.reload()?;
            let mut patch = FilterPatch::default();
            if let Some(s) = search {
                patch = patch.search(s);
            }
            if tag.is_some() {
                patch = patch.tag(tag);
            }
            if range.is_some() {
                patch = patch.range(range);
            }
            view.set_filter(patch);
            if all {
                loop {
                    let before = view.visible_items().len();
                    view.load_more();
                    if view.visible_items().len() == before {
                        break;
                    }
                }
            }
            let items = view.visible_items();
            if json {
                println!("{}", serde_json::to_string_pretty(&items)?);
            } else {
                for item in &items {
                    println!(
                        "{}\t{}\t{}\t[{}]",
                        item.id,
                        item.date,
                        preview(&item.title),
                        item.tags.join(", ")
                    );
                }
                if items.len() < view.filtered_len() {
                    println!(
                        "({} of {} shown; pass --all for the rest)",
                        items.len(),
                        view.filtered_len()
                    );
                }
            }
        }
        Commands::Tags { json } => {
            let mut view = CollectionView::new(source);
            view.reload()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&view.tags())?);
            } else {
                for tag in view.tags() {
                    println!("{tag}");
                }
            }
        }
        Commands::Stats { json } => {
            let mut view = CollectionView::new(source);
            view.reload()?;
            let stats = view.stats();
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("items:     {}", stats.total_items);
                println!("tags:      {}", stats.total_tags);
                println!("this month: {}", stats.this_month);
                println!("websites:  {}", stats.unique_websites);
            }
        }
        Commands::Delete { id } => {
            let mut view = CollectionView::new(source);
            view.reload()?;
            view.delete_item(ItemId(id))?;
            println!("deleted {id}");
        }
        Commands::Suggest { text } => {
            let tags = KeywordTagger::new().suggest("", &text, "");
            if tags.is_empty() {
                println!("(no suggestions)");
            } else {
                println!("{}", tags.join(", "));
            }
        }
    }

    Ok(())
}

fn merge_tags(given: Option<&str>, suggested: &[String]) -> Option<String> {
    let mut tags: Vec<String> = given
        .unwrap_or("")
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();
    for tag in suggested {
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.clone());
        }
    }
    if tags.is_empty() {
        None
    } else {
        Some(tags.join(", "))
    }
}

fn preview(s: &str) -> String {
    const MAX: usize = 60;
    let flat = s.replace('\n', " ");
    if flat.chars().count() > MAX {
        let cut: String = flat.chars().take(MAX).collect();
        format!("{cut}…")
    } else {
        flat
    }
}
