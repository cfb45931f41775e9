use std::collections::BTreeSet;

use crate::auth::application::domain::entities::UserId;

/// Membership changes that turn one roster into another.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterDiff {
    pub to_add: BTreeSet<UserId>,
    pub to_remove: BTreeSet<UserId>,
}

impl RosterDiff {
    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}

/// Members in `current` but not `desired` are removed; the reverse are added.
/// Members in both are left alone.
pub fn reconcile(current: &BTreeSet<UserId>, desired: &BTreeSet<UserId>) -> RosterDiff {
    RosterDiff {
        to_add: desired.difference(current).copied().collect(),
        to_remove: current.difference(desired).copied().collect(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterSelectionError {
    #[error("'{0}' is not a user id")]
    InvalidKey(String),
}

/// Reads the desired roster from submitted form keys.
///
/// Each key names a checked user. Keys starting with `_` belong to the
/// framework (`_token`, `_method`) and are skipped.
pub fn desired_members<I, S>(keys: I) -> Result<BTreeSet<UserId>, RosterSelectionError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut desired = BTreeSet::new();

    for key in keys {
        let key = key.as_ref().trim();
        if key.starts_with('_') {
            continue;
        }

        let id = key
            .parse::<i64>()
            .ok()
            .filter(|id| *id > 0)
            .ok_or_else(|| RosterSelectionError::InvalidKey(key.to_string()))?;

        desired.insert(UserId::from(id));
    }

    Ok(desired)
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::btreeset;

    fn ids(raw: &[i64]) -> BTreeSet<UserId> {
        raw.iter().copied().map(UserId::from).collect()
    }

    #[test]
    fn reconcile_replaces_roster_with_selection() {
        // current {A, B}, desired {B, C}
        let diff = reconcile(&ids(&[1, 2]), &ids(&[2, 3]));

        assert_eq!(diff.to_add, btreeset! { UserId::from(3) });
        assert_eq!(diff.to_remove, btreeset! { UserId::from(1) });
    }

    #[test]
    fn reconcile_same_sets_is_empty() {
        let diff = reconcile(&ids(&[4, 5]), &ids(&[4, 5]));
        assert!(diff.is_empty());
    }

    #[test]
    fn reconcile_empty_selection_clears_roster() {
        let diff = reconcile(&ids(&[1, 2]), &BTreeSet::new());

        assert!(diff.to_add.is_empty());
        assert_eq!(diff.to_remove, ids(&[1, 2]));
    }

    #[test]
    fn reconcile_from_empty_adds_everything() {
        let diff = reconcile(&BTreeSet::new(), &ids(&[7]));

        assert_eq!(diff.to_add, ids(&[7]));
        assert!(diff.to_remove.is_empty());
    }

    #[test]
    fn desired_members_skips_framework_fields() {
        let desired = desired_members(["_token", "_method", "3", "8"]).unwrap();
        assert_eq!(desired, ids(&[3, 8]));
    }

    #[test]
    fn desired_members_collapses_duplicates() {
        let desired = desired_members(["3", "3", " 3 "]).unwrap();
        assert_eq!(desired, ids(&[3]));
    }

    #[test]
    fn desired_members_rejects_non_numeric_key() {
        let err = desired_members(["3", "abc"]).unwrap_err();
        assert_eq!(err, RosterSelectionError::InvalidKey("abc".to_string()));
    }

    #[test]
    fn desired_members_rejects_non_positive_id() {
        assert!(desired_members(["0"]).is_err());
        assert!(desired_members(["-4"]).is_err());
    }
}
