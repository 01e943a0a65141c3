//! Concurrent access to a shared connector.

use crate::common::fixtures::account_minimal;
use crate::common::{create_connector, search_all};
use futures::future::join_all;
use nop_connector::storage::StorageProvider;
use nop_connector::{Attribute, AttributeSet, ConnectorOperations, ObjectClass, OperationOptions};
use std::collections::HashSet;
use std::sync::Arc;

#[tokio::test]
async fn test_concurrent_creates_get_distinct_uids() {
    let connector = Arc::new(create_connector(false).await);
    let account = ObjectClass::account();
    let options = OperationOptions::default();

    let creates = (0..100).map(|i| {
        let connector = Arc::clone(&connector);
        let account = account.clone();
        let options = options.clone();
        tokio::spawn(async move {
            connector
                .create(&account, account_minimal(&format!("user{}", i)), &options)
                .await
                .unwrap()
        })
    });

    let uids: Vec<_> = join_all(creates)
        .await
        .into_iter()
        .map(|handle| handle.unwrap())
        .collect();
    let distinct: HashSet<_> = uids.iter().collect();

    assert_eq!(distinct.len(), 100);
    assert_eq!(connector.storage().count().await.unwrap(), 100);
    assert_eq!(search_all(&connector, &options).await.len(), 100);
}

#[tokio::test]
async fn test_concurrent_updates_all_apply() {
    let connector = Arc::new(create_connector(false).await);
    let account = ObjectClass::account();
    let options = OperationOptions::default();

    let uid = connector
        .create(&account, account_minimal("shared"), &options)
        .await
        .unwrap();

    let updates = (0..20).map(|i| {
        let connector = Arc::clone(&connector);
        let account = account.clone();
        let options = options.clone();
        let uid = uid.clone();
        tokio::spawn(async move {
            connector
                .update(
                    &account,
                    &uid,
                    AttributeSet::new().with(Attribute::single(format!("Attr{}", i), i)),
                    &options,
                )
                .await
        })
    });

    for result in join_all(updates).await {
        assert_eq!(result.unwrap().unwrap(), uid);
    }

    let stored = connector.storage().get(&uid).await.unwrap().unwrap();
    assert_eq!(stored.len(), 21);
}

#[tokio::test]
async fn test_concurrent_update_and_delete_resolve_cleanly() {
    for _ in 0..20 {
        let connector = Arc::new(create_connector(false).await);
        let account = ObjectClass::account();
        let options = OperationOptions::default();

        let uid = connector
            .create(&account, account_minimal("victim"), &options)
            .await
            .unwrap();

        let update = {
            let connector = Arc::clone(&connector);
            let (account, options, uid) = (account.clone(), options.clone(), uid.clone());
            tokio::spawn(async move {
                connector
                    .update(
                        &account,
                        &uid,
                        AttributeSet::new().with(Attribute::single("Phone", "p")),
                        &options,
                    )
                    .await
            })
        };
        let delete = {
            let connector = Arc::clone(&connector);
            let (account, options, uid) = (account.clone(), options.clone(), uid.clone());
            tokio::spawn(async move { connector.delete(&account, &uid, &options).await })
        };

        let (update, delete) = (update.await.unwrap(), delete.await.unwrap());

        // Either order is valid, but never a half-applied update.
        assert!(delete.is_ok());
        match update {
            Ok(returned) => assert_eq!(returned, uid),
            Err(e) => assert!(e.is_unknown_uid()),
        }
        assert_eq!(connector.storage().count().await.unwrap(), 0);
    }
}
