//! Duplicates Command
//!
//! Scan the address book for duplicates and merge them.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use carnet_core::{ContactId, ContactManager, DuplicatePair, EventDispatcher, DUPLICATE_THRESHOLD};
use dialoguer::Confirm;
use serde::Serialize;

use super::{open_storage, parse_id};
use crate::config::CliConfig;
use crate::display;

/// JSON document printed by `duplicates --json`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DuplicateReport<'a> {
    scanned: usize,
    threshold: f64,
    pairs: &'a [DuplicatePair],
}

/// Lists likely duplicate pairs.
pub fn list(config: &CliConfig, json: bool) -> Result<()> {
    let storage = open_storage(config)?;
    let manager = ContactManager::new(&storage, Arc::new(EventDispatcher::new()));

    let contacts = manager.list_contacts()?;
    let pairs = manager.find_duplicates()?;

    if json {
        let report = DuplicateReport {
            scanned: contacts.len(),
            threshold: DUPLICATE_THRESHOLD,
            pairs: &pairs,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if pairs.is_empty() {
        display::success(&format!("No duplicates among {} contacts", contacts.len()));
        return Ok(());
    }

    let names: HashMap<ContactId, String> = contacts
        .iter()
        .filter_map(|c| c.id().map(|id| (id, format!("{} ({})", c.display_name(), id))))
        .collect();
    let label = |id: Option<ContactId>| {
        id.and_then(|id| names.get(&id).cloned())
            .unwrap_or_else(|| "?".to_string())
    };

    println!();
    println!("Possible duplicates ({}):", pairs.len());
    println!();

    display::display_duplicates_table(&pairs, |pair, first| {
        if first {
            label(pair.contact1_id)
        } else {
            label(pair.contact2_id)
        }
    });

    println!();
    display::info("Merge a pair with: carnet merge <keep-id> <merge-id>");

    Ok(())
}

/// Merges `source` into `target`, asking first unless `yes` is set.
pub fn merge(config: &CliConfig, target: &str, source: &str, yes: bool) -> Result<()> {
    let target_id = parse_id(target)?;
    let source_id = parse_id(source)?;
    let storage = open_storage(config)?;
    let manager = ContactManager::new(&storage, Arc::new(EventDispatcher::new()));

    if !yes {
        let keep = manager.get_contact_required(target_id)?;
        let fold = manager.get_contact_required(source_id)?;
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Merge {} ({}) into {} ({}) and delete it?",
                fold.display_name(),
                source_id,
                keep.display_name(),
                target_id
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            display::info("Merge cancelled");
            return Ok(());
        }
    }

    let outcome = manager.merge_contacts(target_id, source_id)?;
    display::success(&format!(
        "Merged contact {} into {}",
        outcome.deleted_id,
        target_id
    ));
    display::display_merge_outcome(&outcome);

    Ok(())
}
