//! Merge-patch of metadata documents
//!
//! Merging `patch` into `target`:
//!
//! - for each key of `patch`, if both sides hold objects at that key they are
//!   merged recursively;
//! - otherwise the value of `patch` replaces the one in `target` (or is
//!   inserted). Scalars and arrays are replaced, never combined, and `null` is
//!   stored like any other value.
//!
//! A non-object `patch` replaces `target` entirely; an object `patch` applied to
//! a non-object `target` starts from `{}`.

use crate::document::{Document, Object};

/// Applies `patch` to `target` in place.
pub fn merge_patch(target: &mut Document, patch: &Document) {
    let Document::Object(patch_fields) = patch else {
        *target = patch.clone();
        return;
    };

    if !target.is_object() {
        *target = Document::Object(Object::new());
    }

    if let Document::Object(target_fields) = target {
        for (key, value) in patch_fields {
            match target_fields.get_mut(key) {
                Some(existing) if existing.is_object() && value.is_object() => {
                    merge_patch(existing, value);
                }
                _ => {
                    target_fields.insert(key.clone(), value.clone());
                }
            }
        }
    }
}

/// Returns `target` with `patch` applied.
pub fn merged(mut target: Document, patch: &Document) -> Document {
    merge_patch(&mut target, patch);
    target
}
