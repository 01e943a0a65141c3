//! The operation contract a provisioning connector exposes.
//!
//! The design is async-first: every storage-touching operation returns a
//! `Send` future. Script operations complete immediately and are plain
//! methods.

use super::filter::Filter;
use crate::error::ConnectorResult;
use crate::object::{AttributeSet, ConnectorObject, ObjectClass, OperationOptions, ScriptContext, Uid};
use crate::schema::Schema;
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;

/// Create, update, delete, search, schema and script operations.
pub trait ConnectorOperations {
    /// Store a new object and return its freshly allocated identifier.
    fn create(
        &self,
        object_class: &ObjectClass,
        attributes: AttributeSet,
        options: &OperationOptions,
    ) -> impl Future<Output = ConnectorResult<Uid>> + Send;

    /// Merge `attributes` into an existing object; returns the same `uid`.
    fn update(
        &self,
        object_class: &ObjectClass,
        uid: &Uid,
        attributes: AttributeSet,
        options: &OperationOptions,
    ) -> impl Future<Output = ConnectorResult<Uid>> + Send;

    /// Remove an object.
    fn delete(
        &self,
        object_class: &ObjectClass,
        uid: &Uid,
        options: &OperationOptions,
    ) -> impl Future<Output = ConnectorResult<()>> + Send;

    /// Hand matching objects to `handler` until it returns `false`.
    fn search<H>(
        &self,
        object_class: &ObjectClass,
        filter: Option<&Filter>,
        handler: H,
        options: &OperationOptions,
    ) -> impl Future<Output = ConnectorResult<()>> + Send
    where
        H: FnMut(ConnectorObject) -> bool + Send;

    /// The connector schema, computed on first use.
    fn schema(&self) -> impl Future<Output = ConnectorResult<Arc<Schema>>> + Send;

    fn run_script_on_connector(
        &self,
        context: &ScriptContext,
        options: &OperationOptions,
    ) -> ConnectorResult<Value>;

    fn run_script_on_resource(
        &self,
        context: &ScriptContext,
        options: &OperationOptions,
    ) -> ConnectorResult<Value>;
}
