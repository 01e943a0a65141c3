//! The no-op connector over a pluggable object store.
//!
//! # Example Usage
//!
//! ```rust
//! use nop_connector::{ConnectorConfiguration, ConnectorOperations, NopConnector};
//! use nop_connector::object::{Attribute, AttributeSet, ObjectClass, OperationOptions};
//! use nop_connector::storage::InMemoryStorage;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConnectorConfiguration::default().with_strict(true);
//! let connector = NopConnector::init(config, InMemoryStorage::new()).await?;
//! let account = ObjectClass::account();
//! let options = OperationOptions::default();
//!
//! let uid = connector
//!     .create(&account, AttributeSet::new().with(Attribute::name_of("jdoe")), &options)
//!     .await?;
//!
//! let mut names = Vec::new();
//! connector
//!     .search(&account, None, |object| {
//!         names.push(object.name().map(str::to_string));
//!         true
//!     }, &options)
//!     .await?;
//! assert_eq!(names, vec![Some("jdoe".to_string())]);
//!
//! connector.delete(&account, &uid, &options).await?;
//! # Ok(())
//! # }
//! ```

use super::filter::{Filter, FilterTranslator, PassThroughFilterTranslator};
use super::merge::merge_attributes;
use super::operations::ConnectorOperations;
use super::projection::project_attributes;
use super::uid_generator::UidGenerator;
use super::validation;
use crate::config::ConnectorConfiguration;
use crate::error::{ConnectorError, ConnectorResult, ValidationError};
use crate::object::{
    Attribute, AttributeSet, ConnectorObject, ObjectClass, OperationOptions, ScriptContext, Uid,
};
use crate::schema::{Schema, account_schema};
use crate::storage::StorageProvider;
use log::{debug, info, trace};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Result returned by both script operations.
pub const SCRIPT_RESULT: &str = "OK";

/// Produces the schema the first time it is needed.
pub type SchemaSource = Arc<dyn Fn() -> ConnectorResult<Schema> + Send + Sync>;

/// Connector owning the object store, the identifier counter and the
/// schema cache.
///
/// The schema is computed at most once per connector. A failed computation
/// caches nothing, so the next call tries again.
pub struct NopConnector<S: StorageProvider> {
    configuration: ConnectorConfiguration,
    storage: S,
    uids: UidGenerator,
    schema: OnceCell<Arc<Schema>>,
    schema_source: SchemaSource,
}

impl<S: StorageProvider> NopConnector<S> {
    /// Create a connector whose schema is synthesized lazily.
    pub fn new(configuration: ConnectorConfiguration, storage: S) -> Self {
        Self::with_schema_source(configuration, storage, account_schema)
    }

    /// Create a connector that obtains its schema from `source`.
    pub fn with_schema_source<F>(
        configuration: ConnectorConfiguration,
        storage: S,
        source: F,
    ) -> Self
    where
        F: Fn() -> ConnectorResult<Schema> + Send + Sync + 'static,
    {
        Self {
            configuration,
            storage,
            uids: UidGenerator::new(),
            schema: OnceCell::new(),
            schema_source: Arc::new(source),
        }
    }

    /// Validate the configuration, build the connector and compute its
    /// schema up front.
    pub async fn init(configuration: ConnectorConfiguration, storage: S) -> ConnectorResult<Self> {
        configuration.validate()?;
        let connector = Self::new(configuration, storage);
        let schema = connector.schema().await?;
        info!(
            "Initialized connector (strict: {}, object classes: {:?})",
            connector.configuration.strict,
            schema.object_class_names()
        );
        Ok(connector)
    }

    /// Release resources. Nothing is held, so this only logs.
    pub fn dispose(&self) {
        debug!("Disposing connector");
    }

    pub fn configuration(&self) -> &ConnectorConfiguration {
        &self.configuration
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn create_filter_translator(
        &self,
        _object_class: &ObjectClass,
        _options: &OperationOptions,
    ) -> PassThroughFilterTranslator {
        PassThroughFilterTranslator
    }

    /// Update an object whose identifier travels in the payload as the
    /// `__UID__` attribute.
    ///
    /// An unknown identifier is reported before the payload is validated.
    pub async fn update_attributes(
        &self,
        object_class: &ObjectClass,
        mut attributes: AttributeSet,
        _options: &OperationOptions,
    ) -> ConnectorResult<Uid> {
        let uid = attributes.take_uid()?;

        info!("Updating {} object '{}'", object_class, uid);
        trace!("Update attributes: {:?}", attributes.names().collect::<Vec<_>>());

        if !self.storage.exists(&uid).await.map_err(Self::storage_error)? {
            debug!("Update target '{}' does not exist", uid);
            return Err(ConnectorError::unknown_uid(uid.value()));
        }

        self.check_write(object_class, &attributes, false).await?;

        // A delete may land between the existence check and the merge.
        let merged = self
            .storage
            .modify(&uid, move |existing| merge_attributes(existing, attributes))
            .await
            .map_err(Self::storage_error)?;

        match merged {
            Some(_) => Ok(uid),
            None => {
                debug!("Update target '{}' was deleted concurrently", uid);
                Err(ConnectorError::unknown_uid(uid.value()))
            }
        }
    }

    /// Run one native query, handing projected objects to `handler` until it
    /// returns `false`. The query itself is ignored: every object matches.
    ///
    /// Returns the number of objects handed to the handler.
    pub async fn execute_query<H>(
        &self,
        object_class: &ObjectClass,
        query: Option<&str>,
        handler: &mut H,
        options: &OperationOptions,
    ) -> ConnectorResult<usize>
    where
        H: FnMut(ConnectorObject) -> bool + Send,
    {
        trace!("Executing query {:?} on {}", query, object_class);
        let attributes_to_get = options.attributes_to_get.as_deref();

        let visited = self
            .storage
            .scan(|uid, attributes| {
                handler(ConnectorObject::new(
                    uid.clone(),
                    object_class.clone(),
                    project_attributes(attributes, attributes_to_get),
                ))
            })
            .await
            .map_err(Self::storage_error)?;

        debug!("Query on {} returned {} objects", object_class, visited);
        Ok(visited)
    }

    async fn check_write(
        &self,
        object_class: &ObjectClass,
        attributes: &AttributeSet,
        check_required: bool,
    ) -> ConnectorResult<()> {
        if !self.configuration.strict {
            return Ok(());
        }

        let schema = self.schema().await?;
        let info = schema
            .find_object_class_info(object_class.as_str())
            .ok_or_else(|| ValidationError::unknown_object_class(object_class.as_str()))?;
        validation::validate_attributes(info, attributes, check_required)?;
        Ok(())
    }

    fn storage_error(error: S::Error) -> ConnectorError {
        ConnectorError::storage(error.to_string())
    }
}

impl<S: StorageProvider> ConnectorOperations for NopConnector<S> {
    async fn create(
        &self,
        object_class: &ObjectClass,
        attributes: AttributeSet,
        _options: &OperationOptions,
    ) -> ConnectorResult<Uid> {
        info!("Creating {} object", object_class);
        trace!("Create attributes: {:?}", attributes.names().collect::<Vec<_>>());

        self.check_write(object_class, &attributes, true).await?;

        let uid = self.uids.next();
        self.storage
            .insert(uid.clone(), attributes)
            .await
            .map_err(Self::storage_error)?;

        debug!("Created {} object '{}'", object_class, uid);
        Ok(uid)
    }

    async fn update(
        &self,
        object_class: &ObjectClass,
        uid: &Uid,
        attributes: AttributeSet,
        options: &OperationOptions,
    ) -> ConnectorResult<Uid> {
        self.update_attributes(object_class, attributes.with(Attribute::uid(uid)), options)
            .await
    }

    async fn delete(
        &self,
        object_class: &ObjectClass,
        uid: &Uid,
        _options: &OperationOptions,
    ) -> ConnectorResult<()> {
        info!("Deleting {} object '{}'", object_class, uid);

        let existed = self
            .storage
            .remove(uid)
            .await
            .map_err(Self::storage_error)?;

        if existed {
            Ok(())
        } else {
            Err(ConnectorError::unknown_uid(uid.value()))
        }
    }

    async fn search<H>(
        &self,
        object_class: &ObjectClass,
        filter: Option<&Filter>,
        mut handler: H,
        options: &OperationOptions,
    ) -> ConnectorResult<()>
    where
        H: FnMut(ConnectorObject) -> bool + Send,
    {
        let queries = self
            .create_filter_translator(object_class, options)
            .translate(filter);

        if queries.is_empty() {
            self.execute_query(object_class, None, &mut handler, options)
                .await?;
        }
        for query in &queries {
            self.execute_query(object_class, Some(query.as_str()), &mut handler, options)
                .await?;
        }
        Ok(())
    }

    async fn schema(&self) -> ConnectorResult<Arc<Schema>> {
        let schema = self
            .schema
            .get_or_try_init(|| async {
                debug!("Computing connector schema");
                (self.schema_source)().map(Arc::new)
            })
            .await?;
        Ok(Arc::clone(schema))
    }

    fn run_script_on_connector(
        &self,
        context: &ScriptContext,
        _options: &OperationOptions,
    ) -> ConnectorResult<Value> {
        debug!("Ignoring {} script on connector", context.language);
        Ok(Value::String(SCRIPT_RESULT.to_string()))
    }

    fn run_script_on_resource(
        &self,
        context: &ScriptContext,
        _options: &OperationOptions,
    ) -> ConnectorResult<Value> {
        debug!("Ignoring {} script on resource", context.language);
        Ok(Value::String(SCRIPT_RESULT.to_string()))
    }
}

impl<S: StorageProvider + fmt::Debug> fmt::Debug for NopConnector<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NopConnector")
            .field("configuration", &self.configuration)
            .field("storage", &self.storage)
            .field("uids", &self.uids)
            .field("schema_cached", &self.schema.initialized())
            .finish()
    }
}
