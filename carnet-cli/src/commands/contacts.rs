//! Contacts Command
//!
//! Add, list, view, and manage contacts.

use std::sync::Arc;

use anyhow::Result;
use carnet_core::{ContactManager, ContactRecord, EventDispatcher};

use super::{open_storage, parse_id};
use crate::config::CliConfig;
use crate::display;

/// Fields collected from the `add` arguments.
pub struct NewContact {
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

impl From<NewContact> for ContactRecord {
    fn from(new: NewContact) -> Self {
        let mut record = ContactRecord::new(new.last_name, new.first_name, new.email);
        record.set_phone(new.phone);
        record.set_address(new.address);
        record.set_city(new.city);
        record.set_country(new.country);
        record
    }
}

/// Adds a contact.
pub fn add(config: &CliConfig, contact: NewContact) -> Result<()> {
    let storage = open_storage(config)?;
    let manager = ContactManager::new(&storage, Arc::new(EventDispatcher::new()));

    let saved = manager.add_contact(contact.into())?;
    let id = saved.id().map(|id| id.to_string()).unwrap_or_default();
    display::success(&format!("Added {} (ID {})", saved.display_name(), id));

    Ok(())
}

/// Lists all contacts, or only favorites.
pub fn list(config: &CliConfig, favorites_only: bool) -> Result<()> {
    let storage = open_storage(config)?;
    let manager = ContactManager::new(&storage, Arc::new(EventDispatcher::new()));

    let contacts = if favorites_only {
        manager.list_favorites()?
    } else {
        manager.list_contacts()?
    };

    if contacts.is_empty() {
        if favorites_only {
            display::info("No favorites yet. Mark one with:");
            println!("  carnet favorite <id>");
        } else {
            display::info("No contacts yet. Add one with:");
            println!("  carnet add <last-name> <first-name> <email>");
        }
        return Ok(());
    }

    println!();
    let title = if favorites_only { "Favorites" } else { "Contacts" };
    println!("{} ({}):", title, contacts.len());
    println!();

    display::display_contacts_table(&contacts);

    println!();

    Ok(())
}

/// Shows details for a specific contact.
pub fn show(config: &CliConfig, id: &str) -> Result<()> {
    let id = parse_id(id)?;
    let storage = open_storage(config)?;
    let manager = ContactManager::new(&storage, Arc::new(EventDispatcher::new()));

    match manager.get_contact(id)? {
        Some(contact) => display::display_contact_details(&contact),
        None => display::warning(&format!("Contact {} not found", id)),
    }

    Ok(())
}

/// Searches contacts by name.
pub fn search(config: &CliConfig, query: &str) -> Result<()> {
    let storage = open_storage(config)?;
    let manager = ContactManager::new(&storage, Arc::new(EventDispatcher::new()));
    let results = manager.search_contacts(query)?;

    if results.is_empty() {
        display::info(&format!("No contacts matching '{}'", query));
        return Ok(());
    }

    println!();
    println!("Search results for '{}':", query);
    println!();

    display::display_contacts_table(&results);

    println!();

    Ok(())
}

/// Removes a contact.
pub fn remove(config: &CliConfig, id: &str) -> Result<()> {
    let id = parse_id(id)?;
    let storage = open_storage(config)?;
    let manager = ContactManager::new(&storage, Arc::new(EventDispatcher::new()));

    let contact = manager.get_contact_required(id)?;
    manager.remove_contact(id)?;
    display::success(&format!("Removed contact: {}", contact.display_name()));

    Ok(())
}

/// Toggles the favorite marker.
pub fn favorite(config: &CliConfig, id: &str) -> Result<()> {
    let id = parse_id(id)?;
    let storage = open_storage(config)?;
    let manager = ContactManager::new(&storage, Arc::new(EventDispatcher::new()));

    let name = manager.get_contact_required(id)?.display_name();
    if manager.toggle_favorite(id)? {
        display::success(&format!("{} added to favorites", name));
    } else {
        display::success(&format!("{} removed from favorites", name));
    }

    Ok(())
}
