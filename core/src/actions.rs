//! Per-command orchestration: parse CLI-level input, make the one remote
//! call, write the result to the injected sink.
//!
//! Every action takes `(sink, base_url, raw args)` and returns the first
//! error encountered unchanged. ID arguments are parsed before any network
//! call, so a bad ID never costs a round-trip. Actions never read global
//! state and write only to the sink they are given.

use std::io::Write;

use crate::client::TodoClient;
use crate::error::ClientError;
use crate::format;

/// `list`: fetch every task and render the table.
pub fn list_action(w: &mut dyn Write, base_url: &str) -> Result<(), ClientError> {
    let items = TodoClient::new(base_url).fetch_all()?;
    format::print_items(w, &items)
}

/// `view <id>`: fetch one task and render the detail block.
pub fn view_action(w: &mut dyn Write, base_url: &str, id: &str) -> Result<(), ClientError> {
    let item_id = parse_item_id(id)?;
    let item = TodoClient::new(base_url).fetch_one(item_id)?;
    format::print_item(w, &item)
}

/// `add <words>...`: join the arguments into one task string and create it.
pub fn add_action(w: &mut dyn Write, base_url: &str, args: &[String]) -> Result<(), ClientError> {
    let task = args.join(" ");
    TodoClient::new(base_url).create(&task)?;
    writeln!(w, "Added item: {task} : to the list")?;
    Ok(())
}

/// `complete <id>`: flip the task's done flag on the server.
pub fn complete_action(w: &mut dyn Write, base_url: &str, id: &str) -> Result<(), ClientError> {
    let item_id = parse_item_id(id)?;
    TodoClient::new(base_url).mark_complete(item_id)?;
    writeln!(w, "Item number {item_id} marked as complete")?;
    Ok(())
}

/// `del <id>`: remove the task from the server.
pub fn delete_action(w: &mut dyn Write, base_url: &str, id: &str) -> Result<(), ClientError> {
    let item_id = parse_item_id(id)?;
    TodoClient::new(base_url).remove(item_id)?;
    writeln!(w, "Item number {item_id} deleted from the list")?;
    Ok(())
}

fn parse_item_id(arg: &str) -> Result<u64, ClientError> {
    arg.parse()
        .map_err(|_| ClientError::NotANumber(arg.to_string()))
}
