use super::error::PhoneError;
use super::types::{BulkAddOutcome, PhoneList};
use crate::storage::SharedStore;

use anyhow::Context;
use serde_json::Value;

/// Read-modify-write access to the phone lists in the store.
///
/// Each call reads the list once and writes it back at most once. Nothing is
/// locked between the two, so concurrent writers to the same `file` can
/// overwrite each other.
#[derive(Clone)]
pub struct PhoneBook {
    store: SharedStore,
}

impl PhoneBook {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Loads the list for `file`; a key that was never written is an empty list.
    pub async fn list(&self, file: &str) -> Result<PhoneList, PhoneError> {
        let value = self.store.get(file).await?;
        let list = match value {
            None | Some(Value::Null) => PhoneList::default(),
            Some(value) => serde_json::from_value(value)
                .with_context(|| format!("stored value for {} is not a phone list", file))?,
        };
        Ok(list)
    }

    async fn save(&self, file: &str, list: &PhoneList) -> Result<(), PhoneError> {
        let value = serde_json::to_value(list).context("failed to encode phone list")?;
        self.store.set(file, value).await?;
        Ok(())
    }

    /// Appends an already validated phone. Returns the new total.
    pub async fn add(&self, file: &str, phone: String) -> Result<usize, PhoneError> {
        let mut list = self.list(file).await?;

        if list.contains(&phone) {
            return Err(PhoneError::AlreadyExists);
        }

        list.push(phone.clone());
        self.save(file, &list).await?;

        tracing::info!("Phone added to {}: {}, Total: {}", file, phone, list.len());

        Ok(list.len())
    }

    /// Appends every phone not already present, in input order, with a single write.
    ///
    /// A phone repeated within the batch counts as a duplicate from its second
    /// occurrence on.
    pub async fn bulk_add(
        &self,
        file: &str,
        phones: Vec<String>,
    ) -> Result<BulkAddOutcome, PhoneError> {
        let mut list = self.list(file).await?;
        let mut added = 0;
        let mut duplicates = Vec::new();

        for phone in phones {
            if list.contains(&phone) {
                duplicates.push(phone);
            } else {
                list.push(phone);
                added += 1;
            }
        }

        self.save(file, &list).await?;

        tracing::info!(
            "Bulk add to {}: {} new, {} duplicates",
            file,
            added,
            duplicates.len()
        );

        Ok(BulkAddOutcome {
            added,
            duplicates,
            total: list.len(),
        })
    }
}
