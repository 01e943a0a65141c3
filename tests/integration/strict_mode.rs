//! Strict-mode validation of writes against the synthesized schema.

use crate::common::fixtures::{account_minimal, account_with_credentials};
use crate::common::{create_connector, search_all};
use nop_connector::schema::{ENABLE, LOCK_OUT};
use nop_connector::storage::StorageProvider;
use nop_connector::{
    Attribute, AttributeSet, ConnectorError, ConnectorOperations, ObjectClass, OperationOptions,
    Uid, ValidationError,
};

#[tokio::test]
async fn test_missing_name_rejected_only_in_strict_mode() {
    let options = OperationOptions::default();
    let account = ObjectClass::account();
    let nameless = AttributeSet::new().with(Attribute::single("Email", "e"));

    let lenient = create_connector(false).await;
    assert!(lenient.create(&account, nameless.clone(), &options).await.is_ok());

    let strict = create_connector(true).await;
    let result = strict.create(&account, nameless, &options).await;
    match result {
        Err(ConnectorError::Validation(ValidationError::MissingRequiredAttribute {
            attribute,
        })) => assert_eq!(attribute, "__NAME__"),
        other => panic!("expected missing required attribute, got {:?}", other),
    }
    assert_eq!(strict.storage().count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_operational_attributes_accepted() {
    let connector = create_connector(true).await;
    let options = OperationOptions::default();

    let uid = connector
        .create(
            &ObjectClass::account(),
            account_with_credentials("x").with(Attribute::single(LOCK_OUT, false)),
            &options,
        )
        .await
        .unwrap();
    let stored = connector.storage().get(&uid).await.unwrap().unwrap();
    assert!(stored.contains(ENABLE));
}

#[tokio::test]
async fn test_non_writable_attribute_rejected_without_side_effects() {
    let connector = create_connector(true).await;
    let account = ObjectClass::account();
    let options = OperationOptions::default();

    let schema = connector.schema().await.unwrap();
    let info = schema.find_object_class_info(account.as_str()).unwrap();
    let read_only = info.non_writable_attributes().next().unwrap().name.clone();

    let result = connector
        .create(
            &account,
            account_minimal("x").with(Attribute::single(read_only.clone(), "v")),
            &options,
        )
        .await;
    match result {
        Err(ConnectorError::Validation(ValidationError::NonWritableAttribute { attribute })) => {
            assert_eq!(attribute, read_only)
        }
        other => panic!("expected non-writable attribute, got {:?}", other),
    }

    let uid = connector
        .create(&account, account_minimal("y"), &options)
        .await
        .unwrap();
    assert_eq!(uid.value(), "1");
}

#[tokio::test]
async fn test_writable_synthesized_attribute_accepted() {
    let connector = create_connector(true).await;
    let account = ObjectClass::account();
    let options = OperationOptions::default();

    let schema = connector.schema().await.unwrap();
    let info = schema.find_object_class_info(account.as_str()).unwrap();
    let writable: Vec<_> = info
        .attributes
        .iter()
        .filter(|attr| attr.is_writable() && attr.name.contains('_') && !attr.name.starts_with("__"))
        .map(|attr| Attribute::single(attr.name.clone(), "v"))
        .collect();
    assert!(!writable.is_empty());

    let mut attributes = account_minimal("x");
    attributes.extend(writable);
    assert!(connector.create(&account, attributes, &options).await.is_ok());
}

#[tokio::test]
async fn test_update_does_not_require_name() {
    let connector = create_connector(true).await;
    let account = ObjectClass::account();
    let options = OperationOptions::default();

    let uid = connector
        .create(&account, account_minimal("x"), &options)
        .await
        .unwrap();
    connector
        .update(
            &account,
            &uid,
            AttributeSet::new().with(Attribute::single("Phone", "p")),
            &options,
        )
        .await
        .unwrap();

    let objects = search_all(&connector, &options).await;
    assert_eq!(objects[0].name(), Some("x"));
    assert!(objects[0].attributes.contains("Phone"));
}

#[tokio::test]
async fn test_unknown_object_class_rejected_in_strict_mode() {
    let connector = create_connector(true).await;
    let result = connector
        .create(
            &ObjectClass::new("__GROUP__"),
            account_minimal("g"),
            &OperationOptions::default(),
        )
        .await;
    assert!(matches!(
        result,
        Err(ConnectorError::Validation(ValidationError::UnknownObjectClass { .. }))
    ));
}

#[tokio::test]
async fn test_update_of_missing_object_is_unknown_even_with_read_only_payload() {
    let connector = create_connector(true).await;
    let account = ObjectClass::account();
    let options = OperationOptions::default();

    let schema = connector.schema().await.unwrap();
    let info = schema.find_object_class_info(account.as_str()).unwrap();
    let read_only = info.non_writable_attributes().next().unwrap().name.clone();

    let result = connector
        .update(
            &account,
            &Uid::new("404"),
            AttributeSet::new().with(Attribute::single(read_only, 1)),
            &options,
        )
        .await;
    assert_unknown_uid!(result);
    assert_eq!(connector.storage().count().await.unwrap(), 0);
}
