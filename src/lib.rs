// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use crate::application::{
    parse_note_id, DraftStore, NoteBrowser, NoteCreator, NoteRepository, NoteViewer,
};
use crate::cli::args::{Args, Command};
use crate::constants::SEARCH_DEBOUNCE_MS;
use crate::domain::DraftPatch;
use crate::infrastructure::{CachedNoteRepository, Config, Debouncer, NoteHubRepository};
use crate::ports::TextPresenter;

pub async fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting notehub with arguments");

    let mut config = Config::load_or_default(args.config.as_deref())?;
    config.apply_env();

    // Initialize infrastructure
    let api = NoteHubRepository::new(&config.api)?;
    let repository = CachedNoteRepository::new(api);
    let drafts = Arc::new(DraftStore::new());
    let presenter = TextPresenter::new();
    let per_page = config.browse.per_page;

    match args.command {
        Command::List {
            tag,
            search,
            page,
            json,
        } => run_list(&repository, &presenter, per_page, tag, search, page, json).await,
        Command::View { note_id, json } => run_view(repository, &presenter, &note_id, json).await,
        Command::Create {
            title,
            content,
            tag,
        } => run_create(repository, drafts, title, content, tag).await,
        Command::Browse { tag } => run_browse(repository, drafts, &presenter, per_page, tag).await,
    }
}

async fn run_list<R: NoteRepository>(
    repository: &R,
    presenter: &TextPresenter,
    per_page: u32,
    tag: String,
    search: Option<String>,
    page: u32,
    json: bool,
) -> Result<()> {
    let mut browser = NoteBrowser::new(tag, per_page);
    if let Some(search) = search {
        browser.set_search(search);
    }
    browser.set_page(page);

    info!(page = browser.page(), tag = browser.tag(), "Listing notes");
    let notes_page = repository.list_notes(&browser.query()).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&notes_page)?);
    } else {
        println!("{}", presenter.render_list(&notes_page));
    }
    Ok(())
}

async fn run_view<R: NoteRepository>(
    repository: R,
    presenter: &TextPresenter,
    note_id: &str,
    json: bool,
) -> Result<()> {
    // Invalid ids are rejected at this boundary; the repository is never
    // consulted for them.
    let id = match parse_note_id(note_id) {
        Ok(id) => id,
        Err(e) => {
            println!("{e}");
            return Ok(());
        }
    };

    let viewer = NoteViewer::new(repository);
    info!(note_id = id, "Viewing note");
    let note = viewer.view_note(id).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&note)?);
    } else {
        println!("{}", presenter.render_note(&note));
    }
    Ok(())
}

async fn run_create<R: NoteRepository>(
    repository: R,
    drafts: Arc<DraftStore>,
    title: String,
    content: String,
    tag: String,
) -> Result<()> {
    drafts.set(DraftPatch {
        title: Some(title),
        content: Some(content),
        tag: Some(tag),
    });

    let creator = NoteCreator::new(repository, drafts);
    let note = creator.create_from_draft().await?;

    println!("Created note {} \"{}\"", note.id, note.title);
    Ok(())
}

const BROWSE_HELP: &str = "\
Commands:
  <text>             search notes (runs once you stop typing)
  n / p              next / previous page
  tag <name>         switch tag filter (all, Todo, Work, Personal, Meeting, Shopping)
  open <id>          view a note
  title <text>       set the draft title
  content <text>     set the draft content
  note-tag <name>    set the draft tag
  show               show the current draft
  submit             create a note from the draft
  help               show this help
  q                  quit";

enum BrowseEvent {
    Line(Option<String>),
    SearchSettled(String),
}

/// Interactive browsing session: an event loop over stdin input and the
/// search debounce timer. One read is in flight at a time; its result is
/// rendered for whatever query the browser currently holds.
async fn run_browse<R: NoteRepository + Clone>(
    repository: R,
    drafts: Arc<DraftStore>,
    presenter: &TextPresenter,
    per_page: u32,
    tag: String,
) -> Result<()> {
    let mut browser = NoteBrowser::new(tag, per_page);
    let mut debouncer = Debouncer::new(Duration::from_millis(SEARCH_DEBOUNCE_MS));
    let creator = NoteCreator::new(repository.clone(), Arc::clone(&drafts));
    let viewer = NoteViewer::new(repository.clone());

    info!(tag = browser.tag(), "Starting browse session");
    let mut total_pages = show_page(&repository, presenter, &browser).await;
    println!("{BROWSE_HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let event = tokio::select! {
            line = lines.next_line() => BrowseEvent::Line(line.context("Failed to read input")?),
            search = debouncer.settled() => BrowseEvent::SearchSettled(search),
        };

        match event {
            BrowseEvent::Line(None) => break,
            BrowseEvent::SearchSettled(search) => {
                browser.set_search(search);
                total_pages = show_page(&repository, presenter, &browser).await;
            }
            BrowseEvent::Line(Some(line)) => {
                let line = line.trim();
                match line {
                    "" => {}
                    "q" | "quit" => break,
                    "help" => println!("{BROWSE_HELP}"),
                    "n" => {
                        browser.next_page(total_pages);
                        total_pages = show_page(&repository, presenter, &browser).await;
                    }
                    "p" => {
                        browser.prev_page();
                        total_pages = show_page(&repository, presenter, &browser).await;
                    }
                    "show" => println!("{}", presenter.render_draft(&drafts.get())),
                    "submit" => match creator.create_from_draft().await {
                        Ok(note) => {
                            println!("Created note {} \"{}\"", note.id, note.title);
                            total_pages = show_page(&repository, presenter, &browser).await;
                        }
                        Err(e) => eprintln!("{e}"),
                    },
                    _ => {
                        if let Some(tag) = line.strip_prefix("tag ") {
                            browser.set_tag(tag.trim());
                            debouncer.cancel();
                            total_pages = show_page(&repository, presenter, &browser).await;
                        } else if let Some(raw_id) = line.strip_prefix("open ") {
                            match parse_note_id(raw_id) {
                                Ok(id) => match viewer.view_note(id).await {
                                    Ok(note) => println!("{}", presenter.render_note(&note)),
                                    Err(e) => eprintln!("{e}"),
                                },
                                Err(e) => println!("{e}"),
                            }
                        } else if let Some(title) = line.strip_prefix("title ") {
                            drafts.set(DraftPatch::title(title));
                        } else if let Some(content) = line.strip_prefix("content ") {
                            drafts.set(DraftPatch::content(content));
                        } else if let Some(tag) = line.strip_prefix("note-tag ") {
                            drafts.set(DraftPatch::tag(tag.trim()));
                        } else {
                            debouncer.input(line);
                        }
                    }
                }
            }
        }
    }

    Ok(())
}

/// Fetch and render the browser's current page. Read failures render an
/// error line in place of the list; the session stays usable.
async fn show_page<R: NoteRepository>(
    repository: &R,
    presenter: &TextPresenter,
    browser: &NoteBrowser,
) -> u32 {
    println!("Loading notes...");
    match repository.list_notes(&browser.query()).await {
        Ok(page) => {
            println!("{}", presenter.render_list(&page));
            page.total_pages.max(1)
        }
        Err(e) => {
            eprintln!("{e}");
            1
        }
    }
}

#[cfg(test)]
/// must be public to be used from integration tests
mod tests {
    use crate::util::testing;
    #[ctor::ctor]
    fn init() {
        testing::init_test_setup().expect("Failed to initialize test setup");
    }
}
