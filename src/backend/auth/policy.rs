/**
 * Ownership Policy
 *
 * One predicate for every per-resource check. Rules compare the
 * authenticated subject with the resource's owner or with the targeted
 * user. Callers run it after loading the resource and before mutating
 * anything.
 */

use thiserror::Error;

use crate::shared::user::UserId;

/// Which comparison an operation is subject to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnershipRule {
    /// Acting on a user account: only that user may do it.
    /// Profile update, profile delete, password change.
    SelfMutation,
    /// Acting on a publication: only its author may do it.
    /// Publication update, publication delete.
    Authorship,
    /// Follow / unfollow: targeting yourself is the forbidden case.
    AntiReflexive,
}

impl OwnershipRule {
    /// True when a match between subject and target is what gets rejected
    fn rejects_match(self) -> bool {
        matches!(self, Self::AntiReflexive)
    }
}

fn denial(rule: &OwnershipRule) -> &'static str {
    match rule {
        OwnershipRule::SelfMutation => "cannot modify another user's account",
        OwnershipRule::Authorship => "cannot modify a publication that is not yours",
        OwnershipRule::AntiReflexive => "cannot follow or unfollow yourself",
    }
}

/// A rule refused the action
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", denial(.rule))]
pub struct PolicyViolation {
    pub rule: OwnershipRule,
}

/// Check `rule` for `subject` acting on something owned by (or aimed at) `target`
pub fn authorize(rule: OwnershipRule, subject: UserId, target: UserId) -> Result<(), PolicyViolation> {
    let same = subject == target;
    if same == rule.rejects_match() {
        tracing::warn!(?rule, subject, target, "Ownership rule denied request");
        return Err(PolicyViolation { rule });
    }
    Ok(())
}
