//! Files command - browse the asset tree one directory at a time.

use super::{load_tree, print_json};
use crate::cli::args::{FilesArgs, OutputFormat};
use crate::context::AppContext;
use crate::error::Result;
use crate::tree::{list_children, Node};
use crate::utils::{dim, hint, pluralize, warning};
use crate::view::BrowserSession;
use colored::Colorize;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct EntryRow<'a> {
    name: &'a str,
    path: &'a str,
    #[serde(rename = "type")]
    kind: &'static str,
}

impl<'a> From<&'a Node> for EntryRow<'a> {
    fn from(node: &'a Node) -> Self {
        Self {
            name: &node.name,
            path: &node.path,
            kind: node.kind.name(),
        }
    }
}

pub async fn run_files(args: FilesArgs, ctx: &AppContext) -> Result<()> {
    let (_, tree) = load_tree(ctx).await?;
    let session = BrowserSession::at_path(&args.path);

    let contents = match list_children(&tree, &session.current_path) {
        Ok(contents) => contents,
        Err(e) => {
            warning(&e.to_string());
            Vec::new()
        }
    };

    match args.output {
        OutputFormat::Text => print_text(&session, &contents),
        OutputFormat::Json => {
            let rows: Vec<EntryRow> = contents.iter().map(|node| EntryRow::from(*node)).collect();
            print_json(&rows)?;
        }
        OutputFormat::Paths => {
            for node in &contents {
                println!("{}", node.path);
            }
        }
    }

    Ok(())
}

fn print_text(session: &BrowserSession, contents: &[&Node]) {
    println!("{}", session.breadcrumbs().join(" > ").bold());

    if contents.is_empty() {
        hint("Empty directory");
        return;
    }

    for node in contents {
        if node.is_dir() {
            let count = node.file_count() as usize;
            println!(
                "  {}  {}",
                format!("{}/", node.name).blue().bold(),
                dim(&pluralize(count, "file", "files"))
            );
        } else {
            println!("  {}", node.name);
        }
    }
}
