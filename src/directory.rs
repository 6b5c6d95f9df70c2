//! The in-memory contact directory.
//!
//! This is the core of the application: a mapping from unique contact
//! name to record, with every mutation validated up front. An operation
//! either fully succeeds or leaves the directory exactly as it was.

use crate::domain::{Age, ContactName, GmailAddress, MobileNumber, ValidationError};
use crate::error::{DirectoryError, DirectoryResult};
use crate::models::Contact;
use crate::observability::EventLog;
use std::collections::BTreeMap;
use std::sync::Arc;

/// In-memory collection of contacts, keyed by unique name.
///
/// The directory owns its records exclusively and is accessed from a
/// single thread of control; records live only for the process lifetime.
/// Iteration order (and therefore search result order) is lexicographic
/// by name.
pub struct ContactDirectory {
    contacts: BTreeMap<String, Contact>,
    log: Arc<dyn EventLog>,
}

impl ContactDirectory {
    /// Create an empty directory writing events to the given log.
    pub fn new(log: Arc<dyn EventLog>) -> Self {
        Self {
            contacts: BTreeMap::new(),
            log,
        }
    }

    /// Validate all three data fields, in order, into a ready-to-insert record.
    ///
    /// Nothing is constructed on failure, which is what makes create and
    /// update atomic: the map is only touched after this returns Ok.
    fn validate_record(
        name: ContactName,
        age_input: &str,
        email_input: &str,
        mobile_input: &str,
    ) -> Result<Contact, ValidationError> {
        let age = Age::parse(age_input)?;
        let email = GmailAddress::new(email_input)?;
        let mobile_no = MobileNumber::new(mobile_input)?;
        Ok(Contact::new(name, age, email, mobile_no))
    }

    /// Insert a new contact.
    ///
    /// Fails with [`DirectoryError::AlreadyExists`] if the name is taken,
    /// before any field validation happens. Field failures abort the whole
    /// operation with no state change.
    pub fn create(
        &mut self,
        name: &str,
        age_input: &str,
        email_input: &str,
        mobile_input: &str,
    ) -> DirectoryResult<()> {
        let key = ContactName::new(name).map_err(|e| {
            self.log.error(&format!("Create rejected: {}", e));
            DirectoryError::from(e)
        })?;

        if self.contacts.contains_key(key.as_str()) {
            self.log
                .warn(&format!("Create rejected: contact '{}' already exists", key));
            return Err(DirectoryError::AlreadyExists(key.into_inner()));
        }

        let contact =
            Self::validate_record(key, age_input, email_input, mobile_input).map_err(|e| {
                self.log
                    .error(&format!("Create rejected for '{}': {}", name, e));
                DirectoryError::from(e)
            })?;

        self.contacts
            .insert(contact.name.as_str().to_string(), contact);
        self.log.info(&format!("Created contact '{}'", name));
        Ok(())
    }

    /// Look up a contact by exact name.
    pub fn view(&self, name: &str) -> DirectoryResult<&Contact> {
        match self.contacts.get(name) {
            Some(contact) => {
                self.log.info(&format!("Viewed contact '{}'", name));
                Ok(contact)
            }
            None => {
                // A miss on a read is a normal outcome, not a fault
                self.log
                    .info(&format!("Lookup for unknown contact '{}'", name));
                Err(DirectoryError::NotFound(name.to_string()))
            }
        }
    }

    /// Replace an existing contact's record.
    ///
    /// Fails with [`DirectoryError::NotFound`] if the name is absent.
    /// All three fields are re-validated with the same rules as
    /// [`create`](Self::create); on any failure the stored record is left
    /// untouched. On success the record is replaced as a whole.
    pub fn update(
        &mut self,
        name: &str,
        age_input: &str,
        email_input: &str,
        mobile_input: &str,
    ) -> DirectoryResult<()> {
        if !self.contacts.contains_key(name) {
            self.log
                .warn(&format!("Update failed: no contact named '{}'", name));
            return Err(DirectoryError::NotFound(name.to_string()));
        }

        // The key is known to exist, so its name already passed validation
        let key = ContactName::new(name).map_err(DirectoryError::from)?;
        let contact =
            Self::validate_record(key, age_input, email_input, mobile_input).map_err(|e| {
                self.log
                    .error(&format!("Update rejected for '{}': {}", name, e));
                DirectoryError::from(e)
            })?;

        self.contacts.insert(name.to_string(), contact);
        self.log.info(&format!("Updated contact '{}'", name));
        Ok(())
    }

    /// Remove a contact, returning the removed record.
    pub fn delete(&mut self, name: &str) -> DirectoryResult<Contact> {
        match self.contacts.remove(name) {
            Some(contact) => {
                self.log.info(&format!("Deleted contact '{}'", name));
                Ok(contact)
            }
            None => {
                self.log
                    .warn(&format!("Delete failed: no contact named '{}'", name));
                Err(DirectoryError::NotFound(name.to_string()))
            }
        }
    }

    /// Case-insensitive substring search over contact names.
    ///
    /// Returns matches in directory iteration order. An empty result is a
    /// normal outcome, never an error.
    pub fn search(&self, query: &str) -> Vec<&Contact> {
        let needle = query.to_lowercase();
        let matches: Vec<&Contact> = self
            .contacts
            .values()
            .filter(|contact| contact.name.as_str().to_lowercase().contains(&needle))
            .collect();

        self.log.info(&format!(
            "Search for '{}' matched {} contact(s)",
            query,
            matches.len()
        ));
        matches
    }

    /// Number of contacts currently stored.
    pub fn count(&self) -> usize {
        self.contacts.len()
    }

    /// Whether the directory holds no contacts.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Iterate over all contacts in directory order.
    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observability::NullLog;

    fn directory() -> ContactDirectory {
        ContactDirectory::new(Arc::new(NullLog))
    }

    #[test]
    fn test_create_and_view() {
        let mut dir = directory();
        dir.create("Alice", "30", "alice@gmail.com", "1234567890")
            .unwrap();

        let contact = dir.view("Alice").unwrap();
        assert_eq!(contact.age.value(), 30);
        assert_eq!(contact.email.as_str(), "alice@gmail.com");
        assert_eq!(contact.mobile_no.as_str(), "1234567890");
    }

    #[test]
    fn test_duplicate_check_runs_before_field_validation() {
        let mut dir = directory();
        dir.create("Alice", "30", "alice@gmail.com", "1234567890")
            .unwrap();

        // Even with garbage fields, the duplicate key is reported first
        let err = dir.create("Alice", "abc", "nope", "123").unwrap_err();
        assert_eq!(err, DirectoryError::AlreadyExists("Alice".to_string()));
    }

    #[test]
    fn test_create_rejects_empty_name() {
        let mut dir = directory();
        let err = dir
            .create("  ", "30", "alice@gmail.com", "1234567890")
            .unwrap_err();
        assert_eq!(err, DirectoryError::InvalidData(ValidationError::EmptyName));
        assert!(dir.is_empty());
    }

    #[test]
    fn test_update_requires_existing_name() {
        let mut dir = directory();
        let err = dir
            .update("Ghost", "30", "ghost@gmail.com", "1234567890")
            .unwrap_err();
        assert_eq!(err, DirectoryError::NotFound("Ghost".to_string()));
    }

    #[test]
    fn test_delete_returns_removed_record() {
        let mut dir = directory();
        dir.create("Alice", "30", "alice@gmail.com", "1234567890")
            .unwrap();

        let removed = dir.delete("Alice").unwrap();
        assert_eq!(removed.name.as_str(), "Alice");
        assert_eq!(dir.count(), 0);
    }

    #[test]
    fn test_iter_is_ordered_by_name() {
        let mut dir = directory();
        dir.create("Carol", "25", "carol@gmail.com", "1111111111")
            .unwrap();
        dir.create("Alice", "30", "alice@gmail.com", "2222222222")
            .unwrap();
        dir.create("Bob", "41", "bob@gmail.com", "3333333333")
            .unwrap();

        let names: Vec<&str> = dir.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
    }
}
