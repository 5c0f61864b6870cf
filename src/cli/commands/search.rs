//! Search command - keyword search over asset paths.

use super::{load_catalog, print_json};
use crate::assets::is_image;
use crate::catalog::Catalog;
use crate::cli::args::{OutputFormat, SearchArgs};
use crate::context::AppContext;
use crate::error::Result;
use crate::search::{results_title, search, SearchOutcome, EXAMPLE_QUERIES};
use crate::utils::{header, hint};

pub async fn run_search(args: SearchArgs, ctx: &AppContext) -> Result<()> {
    if args.examples {
        print_examples();
        return Ok(());
    }

    let query = args.query.join(" ");
    let assets = load_catalog(ctx, Catalog::Assets).await?;

    let outcome = if args.all_types {
        search(&assets, &query, |_| true)
    } else {
        search(&assets, &query, is_image)
    };

    match args.output {
        OutputFormat::Json => print_json(&outcome)?,
        OutputFormat::Paths => {
            for path in outcome.results() {
                println!("{}", display_path(ctx, path, args.urls));
            }
        }
        OutputFormat::Text => match &outcome {
            SearchOutcome::NotExecuted => {
                hint("Enter a search query, e.g. `search kazuma`. Prefix a word with ! to exclude it.");
                print_examples();
            }
            SearchOutcome::Matched(results) => {
                header(&results_title(results.len(), &query));
                if results.is_empty() {
                    hint("No assets matched");
                }
                for path in results {
                    println!("{}", display_path(ctx, path, args.urls));
                }
            }
        },
    }

    Ok(())
}

fn display_path(ctx: &AppContext, path: &str, urls: bool) -> String {
    if urls {
        ctx.config.source.asset_url(path)
    } else {
        path.to_string()
    }
}

fn print_examples() {
    header("Example queries");
    for query in EXAMPLE_QUERIES {
        println!("  {}", query);
    }
}
