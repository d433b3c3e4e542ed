//! Directory: the contact provider
//!
//! Every operation follows the same path: resolve the address, validate
//! any supplied field values, execute against the table, and, for a
//! successful mutation, notify the change hub at the operated address.
//! Id-scoping wins: an item address forces the effective filter to
//! `id = <id>` regardless of any caller-supplied filter.

use std::sync::Arc;

use tracing::{debug, warn};

use rolodex_core::{
    schema, AddressResolver, ContactId, ContactPatch, ContactValues, Error, Filter, Gender,
    NewContact, Order, Projection, Resolved, Result, Row,
};
use rolodex_notify::ChangeHub;
use rolodex_storage::ContactTable;

use crate::config::DirectoryConfig;
use crate::validate::{validate_insert, validate_update, UpdateCheck};

/// The contact directory provider
///
/// Owns the file-backed table, the injected address resolver, and the
/// change hub. Cheap to share behind an `Arc`; all methods take `&self`.
#[derive(Debug)]
pub struct Directory {
    table: ContactTable,
    resolver: AddressResolver,
    hub: Arc<ChangeHub>,
}

impl Directory {
    /// Open a directory with its own change hub
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the table
    /// file exists but fails verification.
    pub fn open(config: DirectoryConfig) -> Result<Self> {
        Self::open_with_hub(config, Arc::new(ChangeHub::new()))
    }

    /// Open a directory sharing an existing change hub
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Directory::open`].
    pub fn open_with_hub(config: DirectoryConfig, hub: Arc<ChangeHub>) -> Result<Self> {
        config.validate()?;
        let table = ContactTable::open(&config.data_path)?;
        Ok(Self {
            table,
            resolver: AddressResolver::new(config.authority),
            hub,
        })
    }

    /// The resolver answering for this directory's addresses
    pub fn resolver(&self) -> &AddressResolver {
        &self.resolver
    }

    /// The change hub mutations report to
    pub fn hub(&self) -> &Arc<ChangeHub> {
        &self.hub
    }

    /// Query rows at an address
    ///
    /// An item address is scoped to its id, overriding `filter`. Rows
    /// come back in `order` if given, else in storage order (ascending
    /// id), projected lazily down to `projection`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedAddress`] if resolution fails.
    pub fn query(
        &self,
        address: &str,
        projection: &Projection,
        filter: &Filter,
        order: Option<&Order>,
    ) -> Result<Rows> {
        let effective = self.effective_filter(address, filter)?;
        let records = self.table.select(&effective, order);
        debug!(address, rows = records.len(), "query");
        Ok(Rows {
            projection: projection.clone(),
            records: records.into_iter(),
        })
    }

    /// Insert a new record at the collection address
    ///
    /// Validates first; nothing is persisted on a validation failure.
    /// On success the new identifier is returned and observers of the
    /// address hear a change.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedOperation`] for a non-collection address,
    /// [`Error::InvalidArgument`] from validation, [`Error::Storage`] if
    /// the write fails.
    pub fn insert(&self, address: &str, values: &ContactValues) -> Result<ContactId> {
        match self.resolver.resolve(address)? {
            Resolved::Collection => {}
            Resolved::Item(_) => {
                return Err(Error::UnsupportedOperation(format!(
                    "insert is not supported for {address}"
                )))
            }
        }

        validate_insert(values)?;

        let contact = NewContact {
            // Present and non-empty after validation
            name: values.name.clone().unwrap_or_default(),
            email: values.email.clone(),
            gender: values
                .gender
                .and_then(Gender::from_ordinal)
                .unwrap_or_default(),
            mobile: values.mobile.clone(),
        };

        let id = self.table.insert(contact).map_err(|e| {
            warn!(address, error = %e, "insert failed");
            e
        })?;

        self.hub.notify(address);
        Ok(id)
    }

    /// Update rows at an address with a partial record
    ///
    /// An item address forces the filter to its id. A partial record
    /// with no keys returns 0 without touching storage; zero matched
    /// rows is a valid outcome, not an error. Observers hear a change
    /// only when at least one row was touched.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedAddress`] on resolution failure,
    /// [`Error::InvalidArgument`] from validation, [`Error::Storage`] if
    /// the write fails.
    pub fn update(&self, address: &str, values: &ContactValues, filter: &Filter) -> Result<usize> {
        let effective = self.effective_filter(address, filter)?;

        match validate_update(values)? {
            UpdateCheck::NoOp => return Ok(0),
            UpdateCheck::Apply => {}
        }

        let patch = ContactPatch {
            name: values.name.clone(),
            email: values.email.clone(),
            gender: values.gender.and_then(Gender::from_ordinal),
            mobile: values.mobile.clone(),
        };

        let affected = self.table.update(&effective, &patch)?;
        if affected > 0 {
            self.hub.notify(address);
        }
        Ok(affected)
    }

    /// Delete rows at an address
    ///
    /// An item address forces the filter to its id. No field validation
    /// applies. Observers hear a change only when at least one row was
    /// removed.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedAddress`] on resolution failure,
    /// [`Error::Storage`] if the write fails.
    pub fn delete(&self, address: &str, filter: &Filter) -> Result<usize> {
        let effective = self.effective_filter(address, filter)?;

        let removed = self.table.delete(&effective)?;
        if removed > 0 {
            self.hub.notify(address);
        }
        Ok(removed)
    }

    /// Resource-type tag of an address
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedAddress`] if resolution fails.
    pub fn resource_type(&self, address: &str) -> Result<&'static str> {
        Ok(match self.resolver.resolve(address)? {
            Resolved::Collection => schema::CONTENT_LIST_TYPE,
            Resolved::Item(_) => schema::CONTENT_ITEM_TYPE,
        })
    }

    // Item addresses force an id-equality filter; the caller's filter only
    // applies at the collection address.
    fn effective_filter(&self, address: &str, filter: &Filter) -> Result<Filter> {
        Ok(match self.resolver.resolve(address)? {
            Resolved::Collection => filter.clone(),
            Resolved::Item(id) => Filter::IdEq(id),
        })
    }
}

/// A finite, non-restartable sequence of projected rows
///
/// Projection happens lazily as the iterator is advanced; once consumed
/// the sequence cannot be rewound; issue a fresh query instead.
#[derive(Debug)]
pub struct Rows {
    projection: Projection,
    records: std::vec::IntoIter<rolodex_core::ContactRow>,
}

impl Iterator for Rows {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        self.records
            .next()
            .map(|record| Row::project(&record, &self.projection))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.records.size_hint()
    }
}

impl ExactSizeIterator for Rows {}
