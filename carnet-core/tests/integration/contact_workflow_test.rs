//! Contact Workflow Integration Tests
//!
//! Tests for contact management and favorites across database reopens.

use std::sync::Arc;

use carnet_core::{ContactManager, ContactRecord, EventDispatcher, Storage};
use tempfile::TempDir;

/// Test: Contact management workflow
#[test]
fn test_contact_management_workflow() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("contacts.db");
    let storage = Storage::open(&path).unwrap();
    let manager = ContactManager::new(&storage, Arc::new(EventDispatcher::new()));

    // Initially no contacts
    assert_eq!(manager.contact_count().unwrap(), 0);

    let awa = manager
        .add_contact(ContactRecord::new("Diop", "Awa", "awa@example.sn").with_city("Dakar"))
        .unwrap();
    manager
        .add_contact(ContactRecord::new("Sow", "Ibrahima", "ibou@example.sn"))
        .unwrap();
    manager
        .add_contact(ContactRecord::new("Fall", "Omar", "omar@example.sn"))
        .unwrap();

    assert_eq!(manager.contact_count().unwrap(), 3);
    assert_eq!(manager.list_contacts().unwrap().len(), 3);

    let awa_id = awa.id().unwrap();
    let loaded = manager.get_contact(awa_id).unwrap().unwrap();
    assert_eq!(loaded.display_name(), "Awa Diop");

    // Search contacts
    assert_eq!(manager.search_contacts("awa").unwrap().len(), 1);
    assert_eq!(manager.search_contacts("o").unwrap().len(), 3);
    assert!(manager.search_contacts("xyz").unwrap().is_empty());

    // Favorites
    manager.toggle_favorite(awa_id).unwrap();

    // Update
    let mut edited = manager.get_contact_required(awa_id).unwrap();
    edited.set_phone(Some("771234567".into()));
    manager.update_contact(&edited).unwrap();

    // Remove
    let omar = manager.search_contacts("omar").unwrap().remove(0);
    manager.remove_contact(omar.id().unwrap()).unwrap();

    drop(manager);
    drop(storage);

    // Everything survives a reopen
    let storage = Storage::open(&path).unwrap();
    let manager = ContactManager::new(&storage, Arc::new(EventDispatcher::new()));

    assert_eq!(manager.contact_count().unwrap(), 2);
    let favorites = manager.list_favorites().unwrap();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].phone(), Some("771234567"));
    assert_eq!(favorites[0].city(), Some("Dakar"));
}
