//! Property-Based Testing for Connector Operations
//!
//! Uses proptest to generate attribute sets and check the merge, projection
//! and round-trip invariants hold for arbitrary inputs.

use nop_connector::connector::{merge_attributes, project_attributes};
use nop_connector::schema::{AttributeType, CURRENT_PASSWORD, FLAG_ORDER, NAME, synthesize};
use nop_connector::storage::InMemoryStorage;
use nop_connector::{
    Attribute, AttributeSet, ConnectorConfiguration, ConnectorOperations, NopConnector,
    ObjectClass, OperationOptions,
};
use proptest::prelude::*;
use serde_json::Value;

/// Strategy for attribute names, occasionally hitting the special ones
fn attribute_name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[A-Z][a-z]{0,6}",
        1 => Just(NAME.to_string()),
        1 => Just(CURRENT_PASSWORD.to_string()),
    ]
}

fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        "[a-z0-9]{0,8}".prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
    ]
}

prop_compose! {
    fn attribute_strategy()
        (name in attribute_name_strategy(),
         values in prop::collection::vec(value_strategy(), 0..3))
        -> Attribute {
        Attribute::new(name, values)
    }
}

fn attribute_set_strategy() -> impl Strategy<Value = AttributeSet> {
    prop::collection::vec(attribute_strategy(), 0..8).prop_map(AttributeSet::from)
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
}

proptest! {
    #[test]
    fn merge_keeps_existing_and_applies_incoming(
        existing in attribute_set_strategy(),
        incoming in attribute_set_strategy(),
    ) {
        let merged = merge_attributes(&existing, incoming.clone());

        prop_assert_eq!(
            merged.get(CURRENT_PASSWORD),
            existing.get(CURRENT_PASSWORD)
        );
        for attr in incoming.iter().filter(|a| a.name() != CURRENT_PASSWORD) {
            prop_assert_eq!(merged.get(attr.name()), Some(attr));
        }
        for attr in existing.iter().filter(|a| !incoming.contains(a.name())) {
            prop_assert_eq!(merged.get(attr.name()), Some(attr));
        }
    }

    #[test]
    fn projection_is_subset_and_keeps_name(
        attributes in attribute_set_strategy(),
        requested in prop::collection::vec(attribute_name_strategy(), 0..4),
    ) {
        let projected = project_attributes(&attributes, Some(requested.as_slice()));

        for attr in projected.iter() {
            prop_assert_eq!(attributes.get(attr.name()), Some(attr));
            prop_assert!(attr.name() == NAME || requested.iter().any(|r| r == attr.name()));
        }
        prop_assert_eq!(projected.contains(NAME), attributes.contains(NAME));
    }

    #[test]
    fn synthesis_is_deterministic_for_any_catalogue_prefix(len in 0usize..=13) {
        let types = &AttributeType::catalogue()[..len];
        let first = synthesize(FLAG_ORDER, types);
        let second = synthesize(FLAG_ORDER, types);
        prop_assert_eq!(&first, &second);
        if len == 0 {
            prop_assert!(first.is_empty());
        }
    }

    #[test]
    fn create_then_search_round_trips(objects in prop::collection::vec(attribute_set_strategy(), 1..6)) {
        let rt = runtime();
        let connector = NopConnector::new(ConnectorConfiguration::default(), InMemoryStorage::new());
        let account = ObjectClass::account();
        let options = OperationOptions::default();

        let found = rt.block_on(async {
            for attributes in &objects {
                connector.create(&account, attributes.clone(), &options).await.unwrap();
            }
            let mut found = Vec::new();
            connector
                .search(&account, None, |object| { found.push(object.attributes); true }, &options)
                .await
                .unwrap();
            found
        });

        prop_assert_eq!(found, objects);
    }
}
