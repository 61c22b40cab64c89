//! Calendar event CLI commands

use clap::Subcommand;

use super::parse_month_arg;
use crate::config::settings::Settings;
use crate::display::{format_event_details, format_event_list};
use crate::error::{TrackerError, TrackerResult};
use crate::models::color;
use crate::services::{CreateEventInput, EventService};
use crate::state::parse_date;
use crate::storage::Storage;

/// Event subcommands
#[derive(Subcommand)]
pub enum EventCommands {
    /// Add an event to a calendar day
    Add {
        /// Event date (YYYY-MM-DD or the configured display format)
        date: String,
        /// Event title
        title: String,
        /// Display color as #rrggbb (default from settings)
        #[arg(short, long)]
        color: Option<String>,
    },
    /// List events
    List {
        /// Only events in this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Show event details
    Show {
        /// Event ID (full or short)
        event: String,
    },
    /// Delete an event
    Delete {
        /// Event ID (full or short)
        event: String,
    },
}

/// Handle an event command
pub fn handle_event_command(
    storage: &Storage,
    settings: &Settings,
    cmd: EventCommands,
) -> TrackerResult<()> {
    let service = EventService::new(storage);

    match cmd {
        EventCommands::Add { date, title, color } => {
            let date = parse_date(&date, &settings.date_format).ok_or_else(|| {
                TrackerError::Validation(format!(
                    "Invalid date: '{}'. Use YYYY-MM-DD or {}.",
                    date, settings.date_format
                ))
            })?;

            let color = color.unwrap_or_else(|| settings.default_event_color.clone());
            if color::parse_hex(&color).is_none() {
                return Err(TrackerError::Validation(format!(
                    "Invalid color: '{}'. Use the form #rrggbb.",
                    color
                )));
            }

            let event = service.create(CreateEventInput { date, title, color })?;

            println!("Added event: {}", event.title);
            println!("  Date: {}", event.date.format(&settings.date_format));
            println!("  ID: {}", event.id);
        }

        EventCommands::List { month } => {
            let events = match parse_month_arg(month.as_deref())? {
                Some(month) => service.list_for_month(month)?,
                None => service.list_all()?,
            };
            print!("{}", format_event_list(&events, settings));
        }

        EventCommands::Show { event } => {
            let found = service
                .find(&event)?
                .ok_or_else(|| TrackerError::event_not_found(&event))?;
            print!("{}", format_event_details(&found, settings));
        }

        EventCommands::Delete { event } => {
            let deleted = service.delete_by_identifier(&event)?;
            println!("Deleted event: {} ({})", deleted.title, deleted.id);
        }
    }

    Ok(())
}
