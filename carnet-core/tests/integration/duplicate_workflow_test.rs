//! Duplicate Workflow Integration Tests
//!
//! Scan, review and merge duplicates until the address book is clean.

use std::sync::Arc;

use carnet_core::{ContactManager, ContactRecord, EventDispatcher, MergeField, Storage};
use tempfile::TempDir;

fn seed(manager: &ContactManager<'_, Storage>) {
    let contacts = [
        ContactRecord::new("Diop", "Awa", "awa@example.sn").with_phone("771234567"),
        ContactRecord::new("DIOP", "Awa", "awa.diop@work.sn")
            .with_phone("771234567")
            .with_address("12 rue Carnot")
            .with_city("Dakar"),
        ContactRecord::new("Ndiaye", "Fatou", "fatou@example.sn")
            .with_phone("781112233")
            .with_country("Sénégal"),
        ContactRecord::new("Ndiaye", "Fatu", "fatu@example.sn").with_phone("781112233"),
        ContactRecord::new("Sow", "Ibrahima", "ibou@example.sn"),
    ];
    for contact in contacts {
        manager.add_contact(contact).unwrap();
    }
}

/// Test: every flagged pair can be merged and the book ends up clean
#[test]
fn test_scan_and_merge_until_clean() {
    let dir = TempDir::new().unwrap();
    let storage = Storage::open(dir.path().join("contacts.db")).unwrap();
    let manager = ContactManager::new(&storage, Arc::new(EventDispatcher::new()));
    seed(&manager);

    let pairs = manager.find_duplicates().unwrap();
    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[0].score_percent(), 100);
    assert_eq!(pairs[1].score_percent(), 93);

    for pair in &pairs {
        let target = pair.contact1_id.unwrap();
        let source = pair.contact2_id.unwrap();
        manager.merge_contacts(target, source).unwrap();
    }

    assert_eq!(manager.contact_count().unwrap(), 3);
    assert!(manager.find_duplicates().unwrap().is_empty());

    let awa = manager.search_contacts("awa").unwrap().remove(0);
    assert_eq!(awa.email(), "awa@example.sn");
    assert_eq!(awa.address(), Some("12 rue Carnot"));
    assert_eq!(awa.city(), Some("Dakar"));

    let fatou = manager.search_contacts("fatou").unwrap().remove(0);
    assert_eq!(fatou.country(), Some("Sénégal"));
}

/// Test: merge reports exactly the fields it filled
#[test]
fn test_merge_reports_completed_fields() {
    let storage = Storage::in_memory().unwrap();
    let manager = ContactManager::new(&storage, Arc::new(EventDispatcher::new()));
    seed(&manager);

    let pair = manager.find_duplicates().unwrap().remove(0);
    let outcome = manager
        .merge_contacts(pair.contact1_id.unwrap(), pair.contact2_id.unwrap())
        .unwrap();

    assert_eq!(
        outcome.completed_fields,
        vec![MergeField::Address, MergeField::City]
    );
    assert_eq!(Some(outcome.deleted_id), pair.contact2_id);
}
