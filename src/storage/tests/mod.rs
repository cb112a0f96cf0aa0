//! Unit tests for the ofono storage provider
//!
//! The provider is built from synthesized records; a recording account
//! manager captures every pushed value.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]

use std::{cell::RefCell, collections::HashMap};

use super::{
    AccountManager, AccountStorage, OFONO_PROVIDER_INFO, OfonoAccountStorage, RestrictionFlags,
    StorageError,
};
use crate::{discovery::synthesize_records, services::SimNames};

type Pushed = (String, String, Option<String>);

#[derive(Default)]
struct RecordingManager {
    pushed: RefCell<Vec<Pushed>>,
}

impl RecordingManager {
    fn pushed(&self) -> Vec<Pushed> {
        self.pushed.borrow().clone()
    }
}

impl AccountManager for RecordingManager {
    fn set_value(&self, account: &str, key: &str, value: Option<&str>) {
        self.pushed.borrow_mut().push((
            account.to_string(),
            key.to_string(),
            value.map(str::to_string),
        ));
    }
}

fn storage(count: i32, sim_names: &[(&str, &str)]) -> OfonoAccountStorage {
    let sim_names: SimNames = sim_names
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    OfonoAccountStorage::new(synthesize_records(count, "account", "ril_", &sim_names).unwrap())
}

fn snapshot(storage: &OfonoAccountStorage) -> (Vec<String>, Vec<Pushed>) {
    let manager = RecordingManager::default();
    for name in storage.list() {
        storage.get(&manager, &name, None);
    }
    (storage.list(), manager.pushed())
}

#[test]
fn list_is_reverse_discovery_order() {
    let storage = storage(3, &[]);

    assert_eq!(
        storage.list(),
        vec![
            "ofono/ofono/account2",
            "ofono/ofono/account1",
            "ofono/ofono/account0",
        ]
    );
}

#[test]
fn list_of_empty_store_is_empty() {
    assert!(storage(0, &[]).list().is_empty());
}

#[test]
fn get_without_key_pushes_every_param_once() {
    let storage = storage(2, &[("/ril_1", "Work")]);
    let manager = RecordingManager::default();

    assert!(storage.get(&manager, "ofono/ofono/account1", None));

    let pushed = manager.pushed();
    let record = &storage.accounts()[1];
    assert_eq!(pushed.len(), record.params().len());

    let by_key: HashMap<String, Option<String>> = pushed
        .into_iter()
        .map(|(account, key, value)| {
            assert_eq!(account, "ofono/ofono/account1");
            (key, value)
        })
        .collect();
    assert_eq!(by_key.len(), record.params().len());
    for (key, value) in record.params() {
        assert_eq!(by_key.get(key), Some(&Some(value.clone())), "{key}");
    }
    assert_eq!(by_key.get("DisplayName"), Some(&Some("Work".to_string())));
}

#[test]
fn get_with_key_pushes_single_value() {
    let storage = storage(1, &[]);
    let manager = RecordingManager::default();

    assert!(storage.get(&manager, "ofono/ofono/account0", Some("param-modem-objpath")));

    assert_eq!(
        manager.pushed(),
        vec![(
            "ofono/ofono/account0".to_string(),
            "param-modem-objpath".to_string(),
            Some("/ril_0".to_string()),
        )]
    );
}

#[test]
fn get_with_unset_key_pushes_none() {
    let storage = storage(1, &[]);
    let manager = RecordingManager::default();

    assert!(storage.get(&manager, "ofono/ofono/account0", Some("DisplayName")));

    assert_eq!(
        manager.pushed(),
        vec![(
            "ofono/ofono/account0".to_string(),
            "DisplayName".to_string(),
            None,
        )]
    );
}

#[test]
fn get_unknown_account_reports_not_found() {
    let storage = storage(2, &[]);
    let manager = RecordingManager::default();

    assert!(!storage.get(&manager, "ofono/ofono/account7", None));
    assert!(!storage.get(&manager, "ofono/ofono/account7", Some("protocol")));
    assert!(manager.pushed().is_empty());
}

#[test]
fn lookup_requires_exact_match() {
    let storage = storage(1, &[]);
    let manager = RecordingManager::default();

    assert!(!storage.get(&manager, "ofono/ofono/account", None));
    assert!(!storage.get(&manager, "OFONO/ofono/account0", None));
    assert_eq!(storage.get_identifier("ofono/ofono/account0 "), None);
}

#[test]
fn writes_are_rejected_and_change_nothing() {
    let storage = storage(2, &[("/ril_0", "SIM 1")]);
    let before = snapshot(&storage);

    assert!(!storage.set("ofono/ofono/account0", "protocol", Some("sip")));
    assert!(!storage.set("ofono/ofono/account0", "DisplayName", None));
    assert!(!storage.set("ofono/ofono/account9", "protocol", Some("sip")));
    assert!(!storage.delete("ofono/ofono/account0", None));
    assert!(!storage.delete("ofono/ofono/account1", Some("Enabled")));
    assert!(!storage.delete("never/seen", Some("Enabled")));
    assert!(!storage.commit());

    assert_eq!(snapshot(&storage), before);
}

#[test]
fn create_is_refused_with_reason() {
    let storage = storage(1, &[]);
    let params = HashMap::from([("account".to_string(), "me".to_string())]);

    let err = storage.create("ofono", "ofono", &params).unwrap_err();

    assert_eq!(
        err,
        StorageError::InvalidArgument(
            "Ofono ril account manager cannot create accounts".to_string()
        )
    );
    assert_eq!(err.dbus_name(), "org.freedesktop.Telepathy.Error.InvalidArgument");
    assert_eq!(storage.list().len(), 1);
}

#[test]
fn identifier_is_discovery_index() {
    let storage = storage(3, &[]);

    assert_eq!(storage.get_identifier("ofono/ofono/account0"), Some(0));
    assert_eq!(storage.get_identifier("ofono/ofono/account2"), Some(2));
    assert_eq!(storage.get_identifier("ofono/ofono/account3"), None);
}

#[test]
fn known_accounts_are_fully_locked() {
    let storage = storage(1, &[]);

    let flags = storage.get_restrictions("ofono/ofono/account0");

    assert_eq!(flags, RestrictionFlags::LOCKED);
    assert_eq!(flags.bits(), 0b1111);
    assert!(flags.contains(RestrictionFlags::CANNOT_SET_PRESENCE));
}

#[test]
fn unknown_accounts_get_all_bits() {
    let storage = storage(1, &[]);

    assert_eq!(storage.get_restrictions("ofono/ofono/account1").bits(), u32::MAX);
}

#[test]
fn provider_identity() {
    let info = storage(0, &[]).info();

    assert_eq!(info, OFONO_PROVIDER_INFO);
    assert_eq!(info.name, "ofono-account");
    assert_eq!(info.priority, 90);
    assert_eq!(info.provider, "im.telepathy.Account.Storage.Ofono");
}

#[test]
fn provider_identity_serializes_every_field() {
    let value = serde_json::to_value(OFONO_PROVIDER_INFO).unwrap();

    assert_eq!(
        value,
        serde_json::json!({
            "name": "ofono-account",
            "description": "Provide ril modem accounts for telepathy-ofono",
            "priority": 90,
            "provider": "im.telepathy.Account.Storage.Ofono",
        })
    );
}

#[test]
fn usable_as_trait_object() {
    let storage: Box<dyn AccountStorage> = Box::new(storage(1, &[]));

    assert_eq!(storage.list(), vec!["ofono/ofono/account0"]);
}
