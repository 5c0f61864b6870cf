//! Open command - show a browser view by route, the way the tab bar would.

use super::{
    run_files, run_gallery, run_images, run_music, run_search, run_sounds, run_spines, run_stories,
    run_videos,
};
use crate::cli::args::{
    FilesArgs, GalleryArgs, ImagesArgs, MediaArgs, OpenArgs, OutputFormat, SearchArgs, SpinesArgs,
    StoriesArgs,
};
use crate::context::AppContext;
use crate::error::Result;
use crate::gallery::Gallery;
use crate::view::{BrowserSession, View};
use colored::Colorize;

pub async fn run_open(args: OpenArgs, ctx: &AppContext) -> Result<()> {
    let session = BrowserSession::new(View::from_route(&args.route));
    tracing::debug!("Route '{}' resolved to view {}", args.route, session.view);
    println!("{} {}", session.view.label().bold(), session.view.route().dimmed());

    let output = OutputFormat::Text;
    match session.view {
        View::Files => {
            run_files(
                FilesArgs {
                    path: session.current_path.join("/"),
                    output,
                },
                ctx,
            )
            .await
        }
        View::ImageFolders => run_images(ImagesArgs { folder: None, urls: false }, ctx).await,
        View::MemberCards => open_gallery(Gallery::MemberCards, ctx).await,
        View::MemberIcons => open_gallery(Gallery::MemberIcons, ctx).await,
        View::StoryBackgrounds => open_gallery(Gallery::StoryBackgrounds, ctx).await,
        View::StoryStills => open_gallery(Gallery::StoryStills, ctx).await,
        View::SpineAnimations => {
            run_spines(
                SpinesArgs {
                    path: None,
                    no_animation: false,
                },
                ctx,
            )
            .await
        }
        View::Stories => run_stories(StoriesArgs { file: None, output }, ctx).await,
        View::Videos => run_videos(MediaArgs { url: None, output }, ctx).await,
        View::Music => run_music(MediaArgs { url: None, output }, ctx).await,
        View::Sounds => run_sounds(MediaArgs { url: None, output }, ctx).await,
        View::Search => {
            run_search(
                SearchArgs {
                    query: Vec::new(),
                    all_types: false,
                    examples: false,
                    urls: false,
                    output,
                },
                ctx,
            )
            .await
        }
    }
}

async fn open_gallery(kind: Gallery, ctx: &AppContext) -> Result<()> {
    run_gallery(
        GalleryArgs {
            kind,
            urls: false,
            output: OutputFormat::Text,
        },
        ctx,
    )
    .await
}
