use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use serde::Serialize;
use std::fmt::{self, Write as _};
use std::io::Stdout;
use std::time::Duration;
use tracing::{debug, info};

use crate::app::{handle_input, App};
use crate::domain::{Gender, User};
use crate::ui;

// Configure event poll timeout (ms)
const EVENT_POLL_TIMEOUT: u64 = 50;

/// Run the application in headless mode (no UI)
pub fn run_headless(app: &App, json: bool) -> Result<()> {
    let output = if json {
        render_headless_json(app)?
    } else {
        render_headless_roster(app)?
    };
    println!("{output}");
    Ok(())
}

fn render_headless_roster(app: &App) -> Result<String, fmt::Error> {
    let users = app.store.users();
    let mut out = String::new();

    writeln!(out, "\nUser Manager")?;
    writeln!(out, "============")?;

    if users.is_empty() {
        writeln!(out, "No users found.")?;
    } else {
        writeln!(
            out,
            "{:<4} {:<20} {:<8} {:<5} Address",
            "#", "Name", "Gender", "Age"
        )?;
        for (index, user) in users.iter().enumerate() {
            writeln!(
                out,
                "{:<4} {:<20} {:<8} {:<5} {}",
                index + 1,
                user.name,
                user.gender.label(),
                user.age,
                user.address
            )?;
        }
    }

    write!(out, "\nTotal Users: {}", users.len())?;
    Ok(out)
}

fn render_headless_json(app: &App) -> Result<String> {
    let users = app.store.users();
    let roster = HeadlessRoster {
        total_users: users.len(),
        users: users
            .iter()
            .enumerate()
            .map(|(index, user)| HeadlessUser::new(index, user))
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&roster)?)
}

#[derive(Serialize)]
struct HeadlessRoster<'a> {
    total_users: usize,
    users: Vec<HeadlessUser<'a>>,
}

#[derive(Serialize)]
struct HeadlessUser<'a> {
    index: usize,
    id: u64,
    name: &'a str,
    gender: Gender,
    age: u32,
    address: &'a str,
}

impl<'a> HeadlessUser<'a> {
    fn new(index: usize, user: &'a User) -> Self {
        Self {
            index: index + 1,
            id: user.id.get(),
            name: &user.name,
            gender: user.gender,
            age: user.age,
            address: &user.address,
        }
    }
}

/// Run the main application event loop
pub fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    info!(users = app.store.len(), "event loop started");

    loop {
        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                handle_input(app, key);
                if !app.running {
                    break;
                }
            }
            Event::Resize(width, height) => {
                debug!(width, height, "terminal resized");
                terminal.autoresize()?;
            }
            _ => {}
        }
    }

    info!(users = app.store.len(), "event loop finished");
    Ok(())
}
