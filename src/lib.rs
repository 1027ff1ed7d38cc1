// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod shell;
pub mod util;

use anyhow::Result;
use std::io::{self, Write};
use tracing::{debug, info};

use crate::application::NoteRepository;
use crate::cli::args::{Args, Command};
use crate::constants::DEFAULT_BASE_URL;
use crate::infrastructure::HttpNoteRepository;
use crate::ports::TextPresenter;
use crate::shell::{Route, Screen, Shell};

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting notecli with arguments");

    // Initialize infrastructure
    let base_url = args.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let repository = HttpNoteRepository::new(&base_url);

    // Initialize application and presentation
    let mut shell = Shell::new(repository);
    let presenter = TextPresenter::new();

    match args.command {
        Command::List { tags, json } => {
            shell.navigate(Route::List { tags });
            if json {
                if let Screen::List(controller) = shell.screen() {
                    println!("{}", serde_json::to_string_pretty(&controller.notes)?);
                }
            } else {
                print_screen(&presenter, &shell);
            }
        }
        Command::View { note_id, json } => {
            info!(note_id, "Viewing note");
            shell.navigate(Route::Detail(note_id));
            if json {
                if let Screen::Detail(controller) = shell.screen() {
                    if let Some(note) = &controller.note {
                        println!("{}", serde_json::to_string_pretty(note)?);
                    }
                }
            } else {
                print_screen(&presenter, &shell);
            }
        }
        Command::Create { title, body, tags } => {
            shell.navigate(Route::Create);
            if let Screen::CreateForm(controller) = shell.screen_mut() {
                controller.title = title;
                controller.body = body;
                controller.tags_text = tags;
            }
            shell.submit_create();
            print_screen(&presenter, &shell);
        }
        Command::Edit {
            note_id,
            title,
            body,
            tags,
        } => {
            shell.navigate(Route::Edit(note_id));
            if let Screen::EditForm(controller) = shell.screen_mut() {
                if let Some(title) = title {
                    controller.title = title;
                }
                if let Some(body) = body {
                    controller.body = body;
                }
                if let Some(tags) = tags {
                    controller.tags_text = tags;
                }
            }
            shell.submit_edit();
            print_screen(&presenter, &shell);
        }
        Command::Delete { note_id, yes } => {
            info!(note_id, "Deleting note");
            shell.navigate(Route::Detail(note_id));
            if matches!(shell.screen(), Screen::Detail(controller) if controller.note.is_some()) {
                shell.request_delete();
                if yes || confirm("Delete note? This action cannot be undone.")? {
                    shell.confirm_delete();
                } else {
                    shell.cancel_delete();
                    println!("Aborted.");
                    return Ok(());
                }
            }
            print_screen(&presenter, &shell);
        }
        Command::Open { path } => {
            let route: Route = path.parse()?;
            shell.navigate(route);
            print_screen(&presenter, &shell);
        }
    }

    // A failure recorded by the active controller is already visible in the
    // rendered screen; still exit non-zero so scripts can rely on it.
    if let Some(err) = shell.screen().error() {
        return Err(err.clone().into());
    }
    Ok(())
}

fn print_screen<R: NoteRepository>(presenter: &TextPresenter, shell: &Shell<R>) {
    println!("{}", presenter.render_header(shell.route()));
    println!("{}", presenter.render(shell.screen()));
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let answer = line.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}
