// UI layer: provides a simple interactive menu using `dialoguer` on top of
// the data-access trait. The flow never sees an error type; it branches on
// the boolean/empty results the contract hands back.

use crate::api::{CustomerApi, CustomerRequest};
use crate::config::MOTIVATIONAL_QUOTES;
use anyhow::Result;
use dialoguer::{Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use rand::seq::SliceRandom;
use std::path::PathBuf;

/// Main interactive menu. Receives the data-access implementation selected
/// at startup and runs a select loop until the user chooses "Exit".
pub fn main_menu(api: Box<dyn CustomerApi>) -> Result<()> {
    loop {
        let items = vec![
            "Register customer",
            "View pending requests",
            "Send video document",
            "Exit",
        ];
        let selection = Select::new().items(&items).default(0).interact()?;
        match selection {
            0 => handle_register(api.as_ref())?,
            1 => handle_pending(api.as_ref())?,
            2 => handle_upload(api.as_ref())?,
            3 => break,
            _ => {}
        }
    }
    Ok(())
}

fn progress_spinner(msg: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    spinner.set_message(msg);
    spinner
}

/// Collect the three registration fields and call the API.
fn handle_register(api: &dyn CustomerApi) -> Result<()> {
    let name: String = Input::new().with_prompt("Customer name").interact_text()?;
    let phone: String = Input::new().with_prompt("Phone number").interact_text()?;
    let video_name: String = Input::new().with_prompt("Video name").interact_text()?;

    let spinner = progress_spinner("Registering...");
    let ok = api.register_customer(&name, &phone, &video_name);
    spinner.finish_and_clear();

    if ok {
        println!("Request registered, the customer is in the queue.");
    } else {
        println!("Registration failed, try again.");
    }
    Ok(())
}

/// Print the pending queue. Unknown record shapes render as dashes rather
/// than failing the listing.
fn handle_pending(api: &dyn CustomerApi) -> Result<()> {
    let spinner = progress_spinner("Fetching pending requests...");
    let pending = api.get_pending_requests();
    spinner.finish_and_clear();

    if pending.is_empty() {
        println!("No pending requests.");
        return Ok(());
    }
    println!("{} pending request(s):", pending.len());
    for req in &pending {
        println!(
            "  {} | {} | {} | {}",
            req.id().unwrap_or("-"),
            req.customer_name().unwrap_or("-"),
            req.video_name().unwrap_or("-"),
            req.requested_at().unwrap_or("-")
        );
    }
    Ok(())
}

/// Pick a pending request, ask for the video file and upload it.
fn handle_upload(api: &dyn CustomerApi) -> Result<()> {
    let pending = api.get_pending_requests();
    if pending.is_empty() {
        println!("Nothing to deliver: the pending queue is empty.");
        return Ok(());
    }

    let labels: Vec<String> = pending.iter().map(row_label).collect();
    let selection = Select::new().items(&labels).default(0).interact()?;
    let chosen = &pending[selection];

    let request_id = chosen.id().unwrap_or("").to_string();
    // The backend record normally carries the phone number; ask only when
    // it doesn't.
    let phone = match chosen.phone_number() {
        Some(p) => p.to_string(),
        None => Input::new().with_prompt("Phone number").interact_text()?,
    };
    let path: String = Input::new().with_prompt("Video file path").interact_text()?;
    let file_path = PathBuf::from(path);

    let spinner = progress_spinner("Uploading...");
    let ok = api.upload_document(&request_id, &file_path, &phone);
    spinner.finish_and_clear();

    if ok {
        if let Some(quote) = MOTIVATIONAL_QUOTES.choose(&mut rand::thread_rng()) {
            println!("Delivered! {}", quote);
        }
    } else {
        println!("Upload failed, try again.");
    }
    Ok(())
}

fn row_label(req: &CustomerRequest) -> String {
    format!(
        "{} - {} ({})",
        req.customer_name().unwrap_or("unknown"),
        req.video_name().unwrap_or("untitled"),
        req.phone_number().unwrap_or("no phone")
    )
}
