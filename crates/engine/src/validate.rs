//! Validation gate for writes
//!
//! Pure checks applied before any storage mutation. Well-behaved callers
//! reject bad input before it gets here; the engine re-checks regardless.
//! Validation never touches storage and never talks to the notifier.

use rolodex_core::{ContactValues, Error, Gender, Result};

/// Outcome of checking a partial record for update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateCheck {
    /// At least one field is present and every present field is valid
    Apply,
    /// No fields are present; the caller should return 0 affected rows
    /// without touching storage
    NoOp,
}

/// Check a record proposed for insert
///
/// Requires a non-empty name, a gender inside the domain, and, when a
/// non-empty mobile is supplied, exactly 10 characters.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] naming the first violated
/// constraint.
pub fn validate_insert(values: &ContactValues) -> Result<()> {
    match &values.name {
        Some(name) if !name.is_empty() => {}
        _ => return Err(Error::InvalidArgument("contact requires a name")),
    }

    match values.gender {
        Some(ordinal) if Gender::from_ordinal(ordinal).is_some() => {}
        _ => return Err(Error::InvalidArgument("contact requires a valid gender")),
    }

    if let Some(mobile) = &values.mobile {
        if !valid_mobile(mobile) {
            return Err(Error::InvalidArgument("contact requires a valid number"));
        }
    }

    Ok(())
}

/// Check a partial record proposed for update
///
/// Each constraint is applied only when the corresponding key is
/// present; a record with no keys at all signals [`UpdateCheck::NoOp`].
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] naming the first violated
/// constraint.
pub fn validate_update(values: &ContactValues) -> Result<UpdateCheck> {
    if let Some(name) = &values.name {
        if name.is_empty() {
            return Err(Error::InvalidArgument("contact requires a name"));
        }
    }

    if let Some(ordinal) = values.gender {
        if Gender::from_ordinal(ordinal).is_none() {
            return Err(Error::InvalidArgument("contact requires a valid gender"));
        }
    }

    if let Some(mobile) = &values.mobile {
        if !valid_mobile(mobile) {
            return Err(Error::InvalidArgument("contact requires a valid number"));
        }
    }

    if values.is_empty() {
        return Ok(UpdateCheck::NoOp);
    }
    Ok(UpdateCheck::Apply)
}

// Empty is permitted; a supplied number must be exactly 10 characters.
fn valid_mobile(mobile: &str) -> bool {
    mobile.is_empty() || mobile.chars().count() == 10
}
