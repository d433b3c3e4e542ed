//! Caller-side save policy for editor-style flows
//!
//! The storage engine stores a phone number exactly as given, absent
//! included. Interactive editors historically defaulted an unprovided
//! number to a literal sentinel before saving; that substitution is a
//! policy of this calling layer, not a storage invariant, so it lives
//! here and nowhere deeper.

use tracing::debug;

use rolodex_core::{ContactId, ContactValues, Filter, Gender, Result};
use rolodex_engine::Directory;

/// Sentinel persisted for a phone number the user left blank
pub const UNPROVIDED_MOBILE: &str = "unprovided";

/// Form input collected by an editor flow
///
/// Fields hold raw user input; [`ContactDraft::save`] trims them before
/// anything else looks at them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    /// Name field
    pub name: String,
    /// Email field
    pub email: String,
    /// Selected gender, `Unknown` when untouched
    pub gender: Gender,
    /// Phone number field
    pub mobile: String,
}

impl ContactDraft {
    /// An untouched form
    pub fn new() -> Self {
        Self::default()
    }

    /// True if every field is blank and the gender was never selected
    fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
            && self.email.trim().is_empty()
            && self.mobile.trim().is_empty()
            && self.gender == Gender::Unknown
    }

    /// Save this draft through the directory
    ///
    /// With no `target` and an entirely blank form, nothing is saved and
    /// [`SaveOutcome::Nothing`] comes back. Otherwise the draft inserts
    /// at the collection address (no target) or updates the target's
    /// item address. A blank phone number is defaulted to
    /// [`UNPROVIDED_MOBILE`] before the values reach the engine.
    ///
    /// # Errors
    ///
    /// Propagates validation and storage errors from the engine; in
    /// particular a blank name on a non-blank draft fails with
    /// `InvalidArgument`.
    pub fn save(&self, directory: &Directory, target: Option<ContactId>) -> Result<SaveOutcome> {
        if target.is_none() && self.is_blank() {
            debug!("blank draft, nothing to save");
            return Ok(SaveOutcome::Nothing);
        }

        let mobile = match self.mobile.trim() {
            "" => UNPROVIDED_MOBILE,
            trimmed => trimmed,
        };
        let values = ContactValues::new()
            .name(self.name.trim())
            .email(self.email.trim())
            .gender(self.gender)
            .mobile(mobile);

        match target {
            None => {
                let collection = directory.resolver().collection_address();
                let id = directory.insert(&collection, &values)?;
                Ok(SaveOutcome::Created(id))
            }
            Some(id) => {
                let item = directory.resolver().item_address(id);
                let affected = directory.update(&item, &values, &Filter::All)?;
                Ok(SaveOutcome::Updated(affected))
            }
        }
    }
}

/// Result of saving a draft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Blank draft with no target; nothing touched storage
    Nothing,
    /// A new record was inserted
    Created(ContactId),
    /// An existing record was updated; zero means the target row is gone
    Updated(usize),
}
