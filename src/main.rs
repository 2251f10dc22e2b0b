// SPDX-License-Identifier: MPL-2.0
use gallery_lens::app::{paths, Gallery, Message};
use gallery_lens::config;
use gallery_lens::domain::selection::Selection;
use gallery_lens::domain::ui::PageSize;
use gallery_lens::infrastructure::source_for;
use gallery_lens::render::RenderItem;
use std::process::ExitCode;

const HELP: &str = "\
Usage: gallery_lens [OPTIONS] [DOCUMENT]

Loads a gallery document (file path or http(s) URL) and prints the
rendering instructions as JSON.

Options:
  --config-dir DIR      Directory holding settings.toml
  --category NAME       Category to select (default: all)
  --subcategory NAME    Subcategory of --category to select
  --pages N             Pages to reveal (default: 1)
  --page-size N         Photos per page (overrides settings)
  --taxonomy            Print the category index instead
  --stories             Print the story cards instead
  -h, --help            Show this help
";

struct Args {
    config_dir: Option<String>,
    category: Option<String>,
    subcategory: Option<String>,
    pages: usize,
    page_size: Option<usize>,
    taxonomy: bool,
    stories: bool,
    document: Option<String>,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }
    Ok(Some(Args {
        config_dir: args.opt_value_from_str("--config-dir")?,
        category: args.opt_value_from_str("--category")?,
        subcategory: args.opt_value_from_str("--subcategory")?,
        pages: args.opt_value_from_str("--pages")?.unwrap_or(1),
        page_size: args.opt_value_from_str("--page-size")?,
        taxonomy: args.contains("--taxonomy"),
        stories: args.contains("--stories"),
        document: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    }))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    paths::init_cli_overrides(args.config_dir.clone());
    let (settings, warning) = config::load();
    if let Some(warning) = warning {
        log::warn!("Using default settings: {}", warning);
    }

    let page_size = args
        .page_size
        .map_or_else(|| settings.page_size(), PageSize::new);
    let mut gallery = Gallery::new(settings.to_taxonomy_order(), page_size);

    let location = args
        .document
        .clone()
        .unwrap_or_else(|| settings.document().to_string());
    let source = source_for(&location, settings.fetch_timeout());

    let mut output = gallery.load(&source).await;
    if gallery.error().is_some() {
        return ExitCode::FAILURE;
    }

    if args.taxonomy {
        let taxonomy = gallery.query().map(|q| q.taxonomy().clone()).unwrap_or_default();
        return print_json(&taxonomy);
    }

    if args.stories {
        return print_json(&gallery.update(Message::ShowStories));
    }

    if let Some(category) = args.category.as_deref() {
        let selection = Selection::from_names(category, args.subcategory.as_deref());
        output = gallery.update(Message::Select(selection));
    }
    for _ in 1..args.pages {
        let more = gallery.update(Message::LoadMore);
        if more.items.is_empty() {
            break;
        }
        output.items.extend(more.items);
    }
    output.items.retain(|item| *item != RenderItem::LoadMore);
    if gallery.query().is_some_and(|q| q.has_more()) {
        output.items.push(RenderItem::LoadMore);
    }

    print_json(&output)
}

fn print_json<T: serde::Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("Failed to serialize output: {}", err);
            ExitCode::FAILURE
        }
    }
}
