//! Story, video, music, sound and spine commands.

use super::{load_catalog, print_json};
use crate::catalog::Catalog;
use crate::cli::args::{MediaArgs, OutputFormat, SpinesArgs, StoriesArgs};
use crate::context::AppContext;
use crate::error::{AssetBrowserError, Result};
use crate::media::{
    group_sounds, skeleton_files, sort_stories, sort_tracks, SpinePlayerConfig, StoryDocument,
    StoryEntry, StoryLine,
};
use crate::utils::{dim, header, hint, pluralize};
use colored::Colorize;

pub async fn run_stories(args: StoriesArgs, ctx: &AppContext) -> Result<()> {
    let stories = load_catalog(ctx, Catalog::Stories).await?;

    let Some(file) = args.file else {
        let entries = sort_stories(&stories);
        match args.output {
            OutputFormat::Json => print_json(&entries)?,
            OutputFormat::Paths => {
                for entry in &entries {
                    println!("{}", entry.filename);
                }
            }
            OutputFormat::Text => print_story_list(&entries),
        }
        return Ok(());
    };

    if !stories.iter().any(|s| *s == file) {
        return Err(AssetBrowserError::PathNotFound(file));
    }

    let client = ctx.client()?;
    let content = client.fetch_text(&ctx.config.source.story_url(&file)).await?;
    let document = StoryDocument::parse(&content);

    match args.output {
        OutputFormat::Json => print_json(&document)?,
        OutputFormat::Text | OutputFormat::Paths => print_story(&document),
    }
    Ok(())
}

fn print_story_list(entries: &[StoryEntry]) {
    let mut current_group: Option<&str> = None;
    for entry in entries {
        if current_group != Some(entry.group.as_str()) {
            header(&entry.group);
            current_group = Some(entry.group.as_str());
        }
        println!("  {}  {}", entry.part, dim(&entry.filename));
    }
}

fn print_story(document: &StoryDocument) {
    println!("{}", document.title.bold());
    println!();
    for line in &document.lines {
        match line {
            StoryLine::Dialogue { speaker, text } => {
                println!("{}: {}", speaker.cyan().bold(), text)
            }
            StoryLine::Narration { text } => println!("{}", text.italic()),
            StoryLine::Blank => println!(),
        }
    }
    println!();
    println!(
        "{}",
        dim(&pluralize(document.dialogue_count(), "dialogue line", "dialogue lines"))
    );
}

pub async fn run_videos(args: MediaArgs, ctx: &AppContext) -> Result<()> {
    let videos = load_catalog(ctx, Catalog::Videos).await?;
    run_tracks(args, &videos, |path| ctx.config.source.video_url(path))
}

pub async fn run_music(args: MediaArgs, ctx: &AppContext) -> Result<()> {
    let music = load_catalog(ctx, Catalog::Music).await?;
    run_tracks(args, &music, |path| ctx.config.source.audio_url(path))
}

fn run_tracks<F>(args: MediaArgs, paths: &[String], url_for: F) -> Result<()>
where
    F: Fn(&str) -> String,
{
    if let Some(path) = args.url {
        println!("{}", url_for(checked_entry(paths, path)?.as_str()));
        return Ok(());
    }

    let entries = sort_tracks(paths);
    match args.output {
        OutputFormat::Json => print_json(&entries)?,
        OutputFormat::Paths => {
            for entry in &entries {
                println!("{}", entry.path);
            }
        }
        OutputFormat::Text => {
            if entries.is_empty() {
                hint("No entries");
            }
            for entry in &entries {
                println!("{}/{}", dim(&entry.category), entry.name);
            }
        }
    }
    Ok(())
}

pub async fn run_sounds(args: MediaArgs, ctx: &AppContext) -> Result<()> {
    let sounds = load_catalog(ctx, Catalog::Sounds).await?;

    if let Some(path) = args.url {
        let path = checked_entry(&sounds, path)?;
        println!("{}", ctx.config.source.audio_url(&path));
        return Ok(());
    }

    let groups = group_sounds(&sounds);
    match args.output {
        OutputFormat::Json => print_json(&groups)?,
        OutputFormat::Paths => {
            for entry in groups.iter().flat_map(|group| &group.items) {
                println!("{}", entry.path);
            }
        }
        OutputFormat::Text => {
            for group in &groups {
                header(&format!(
                    "{} ({})",
                    group.category,
                    pluralize(group.items.len(), "sound", "sounds")
                ));
                for entry in &group.items {
                    println!("  {}", entry.display_name);
                }
            }
        }
    }
    Ok(())
}

pub async fn run_spines(args: SpinesArgs, ctx: &AppContext) -> Result<()> {
    let assets = load_catalog(ctx, Catalog::Assets).await?;
    let skeletons = skeleton_files(&assets);

    match args.path {
        Some(path) => {
            let path = checked_entry(&skeletons, path)?;
            let mut config = SpinePlayerConfig::for_skeleton(&ctx.config.source.asset_base, &path);
            if args.no_animation {
                config = config.without_animation();
            }
            print_json(&config)?;
        }
        None => {
            for path in &skeletons {
                println!("{}", path);
            }
        }
    }
    Ok(())
}

/// The entry itself when the list contains it
fn checked_entry(entries: &[String], path: String) -> Result<String> {
    if entries.contains(&path) {
        Ok(path)
    } else {
        Err(AssetBrowserError::PathNotFound(path))
    }
}
