// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for api::contact_manager

mod common;

use std::sync::{Arc, Mutex};

use carnet_core::*;
use common::{person, person_with_phone};

struct Recorder {
    events: Arc<Mutex<Vec<CarnetEvent>>>,
}

impl Recorder {
    fn dispatcher() -> (Arc<EventDispatcher>, Self) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        let mut dispatcher = EventDispatcher::new();
        dispatcher.add_handler(Arc::new(CallbackHandler::new(move |event| {
            sink.lock().unwrap().push(event);
        })));
        (Arc::new(dispatcher), Recorder { events })
    }

    fn take(&self) -> Vec<CarnetEvent> {
        std::mem::take(&mut *self.events.lock().unwrap())
    }
}

#[test]
fn test_add_contact_assigns_id_and_emits_event() {
    let store = MemoryStore::new();
    let (events, recorder) = Recorder::dispatcher();
    let manager = ContactManager::new(&store, events);

    let saved = manager.add_contact(person("Diop", "Awa")).unwrap();
    let id = saved.id().unwrap();

    assert_eq!(manager.contact_count().unwrap(), 1);
    assert_eq!(
        recorder.take(),
        vec![CarnetEvent::ContactAdded { contact_id: id }]
    );
}

#[test]
fn test_add_contact_rejects_invalid_record() {
    let store = MemoryStore::new();
    let (events, recorder) = Recorder::dispatcher();
    let manager = ContactManager::new(&store, events);

    let err = manager
        .add_contact(ContactRecord::new("Diop", "  ", "awa@example.sn"))
        .unwrap_err();
    assert!(matches!(
        err,
        CarnetError::Validation(ValidationError::EmptyValue { .. })
    ));

    let err = manager
        .add_contact(ContactRecord::new("Diop", "Awa", "awa.example.sn"))
        .unwrap_err();
    assert!(matches!(
        err,
        CarnetError::Validation(ValidationError::InvalidEmail(_))
    ));

    assert_eq!(manager.contact_count().unwrap(), 0);
    assert!(recorder.take().is_empty());
}

#[test]
fn test_add_contact_rejects_taken_email() {
    let store = Storage::in_memory().unwrap();
    let manager = ContactManager::new(&store, Arc::new(EventDispatcher::new()));

    manager
        .add_contact(ContactRecord::new("Diop", "Awa", "awa@example.sn"))
        .unwrap();
    let err = manager
        .add_contact(ContactRecord::new("Ndiaye", "Awa", "awa@example.sn"))
        .unwrap_err();

    assert!(matches!(
        err,
        CarnetError::Storage(StorageError::AlreadyExists(_))
    ));
}

#[test]
fn test_add_contact_rejects_saved_record() {
    let store = MemoryStore::new();
    let manager = ContactManager::new(&store, Arc::new(EventDispatcher::new()));

    let saved = manager.add_contact(person("Diop", "Awa")).unwrap();
    let err = manager.add_contact(saved).unwrap_err();
    assert!(matches!(err, CarnetError::InvalidState(_)));
}

#[test]
fn test_get_contact_required_not_found() {
    let store = MemoryStore::new();
    let manager = ContactManager::new(&store, Arc::new(EventDispatcher::new()));

    assert!(manager.get_contact(ContactId::new(9)).unwrap().is_none());
    let err = manager.get_contact_required(ContactId::new(9)).unwrap_err();
    assert_eq!(err.to_string(), CarnetError::ContactNotFound(ContactId::new(9)).to_string());
}

#[test]
fn test_update_contact_reports_changed_fields() {
    let store = MemoryStore::new();
    let (events, recorder) = Recorder::dispatcher();
    let manager = ContactManager::new(&store, events);

    let mut contact = manager.add_contact(person("Diop", "Awa")).unwrap();
    recorder.take();

    contact.set_city(Some("Dakar".into()));
    contact.set_phone(Some("771234567".into()));
    let changed = manager.update_contact(&contact).unwrap();

    assert_eq!(changed, vec!["phone".to_string(), "city".to_string()]);
    assert_eq!(
        recorder.take(),
        vec![CarnetEvent::ContactUpdated {
            contact_id: contact.id().unwrap(),
            changed_fields: changed,
        }]
    );

    let unchanged = manager.update_contact(&contact).unwrap();
    assert!(unchanged.is_empty());
    assert!(recorder.take().is_empty());
}

#[test]
fn test_update_unsaved_contact_fails() {
    let store = MemoryStore::new();
    let manager = ContactManager::new(&store, Arc::new(EventDispatcher::new()));

    let err = manager.update_contact(&person("Diop", "Awa")).unwrap_err();
    assert!(matches!(err, CarnetError::InvalidState(_)));
}

#[test]
fn test_remove_contact() {
    let store = MemoryStore::new();
    let (events, recorder) = Recorder::dispatcher();
    let manager = ContactManager::new(&store, events);

    let id = manager.add_contact(person("Diop", "Awa")).unwrap().id().unwrap();
    recorder.take();

    manager.remove_contact(id).unwrap();
    assert_eq!(
        recorder.take(),
        vec![CarnetEvent::ContactRemoved { contact_id: id }]
    );

    let err = manager.remove_contact(id).unwrap_err();
    assert!(matches!(err, CarnetError::ContactNotFound(missing) if missing == id));
}

#[test]
fn test_toggle_favorite() {
    let store = MemoryStore::new();
    let manager = ContactManager::new(&store, Arc::new(EventDispatcher::new()));

    let awa = manager.add_contact(person("Diop", "Awa")).unwrap().id().unwrap();
    manager.add_contact(person("Sow", "Ibrahima")).unwrap();

    assert!(manager.toggle_favorite(awa).unwrap());
    let favorites = manager.list_favorites().unwrap();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].id(), Some(awa));

    assert!(!manager.toggle_favorite(awa).unwrap());
    assert!(manager.list_favorites().unwrap().is_empty());
}

#[test]
fn test_search_contacts() {
    let store = Storage::in_memory().unwrap();
    let manager = ContactManager::new(&store, Arc::new(EventDispatcher::new()));

    manager.add_contact(person("Diop", "Awa")).unwrap();
    manager.add_contact(person("Sow", "Ibrahima")).unwrap();

    let found = manager.search_contacts("ibra").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].last_name(), "Sow");
}

#[test]
fn test_find_and_merge_duplicates() {
    let store = Storage::in_memory().unwrap();
    let (events, recorder) = Recorder::dispatcher();
    let manager = ContactManager::new(&store, events);

    let target = manager
        .add_contact(person_with_phone("Diop", "Awa", "771234567"))
        .unwrap();
    let source = manager
        .add_contact(
            ContactRecord::new("diop", "awa", "a.diop@example.sn")
                .with_phone("771234567")
                .with_city("Dakar"),
        )
        .unwrap();
    manager.add_contact(person("Sow", "Ibrahima")).unwrap();
    recorder.take();

    let pairs = manager.find_duplicates().unwrap();
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].contact1_id, target.id());
    assert_eq!(pairs[0].contact2_id, source.id());
    assert_eq!(pairs[0].score_percent(), 100);

    let outcome = manager
        .merge_contacts(target.id().unwrap(), source.id().unwrap())
        .unwrap();
    assert_eq!(outcome.merged.city(), Some("Dakar"));
    assert_eq!(manager.contact_count().unwrap(), 2);
    assert!(manager.find_duplicates().unwrap().is_empty());

    assert_eq!(
        recorder.take(),
        vec![CarnetEvent::ContactsMerged {
            target_id: target.id().unwrap(),
            source_id: source.id().unwrap(),
            completed_fields: vec![MergeField::City],
        }]
    );
}

#[test]
fn test_failed_merge_emits_nothing() {
    let store = MemoryStore::new();
    let (events, recorder) = Recorder::dispatcher();
    let manager = ContactManager::new(&store, events);

    let id = manager.add_contact(person("Diop", "Awa")).unwrap().id().unwrap();
    recorder.take();

    assert!(manager.merge_contacts(id, ContactId::new(999)).is_err());
    assert!(manager.merge_contacts(id, id).is_err());
    assert!(recorder.take().is_empty());
    assert_eq!(manager.contact_count().unwrap(), 1);
}
