//! Ownership policy - who may mutate an entity.
//!
//! Author identity is a bare string, so authorization here is an identity
//! comparison. The policy is a seam: services only ever ask it, never
//! compare strings themselves, so a real identity system can replace the
//! comparison without touching business logic.

/// Decides whether `actor` may mutate an entity created by `owner`.
pub trait OwnershipPolicy: Send + Sync {
    fn allows(&self, actor: &str, owner: &str) -> bool;
}

/// The shipped policy: the actor must be the recorded creator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatch;

impl OwnershipPolicy for ExactMatch {
    fn allows(&self, actor: &str, owner: &str) -> bool {
        actor == owner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_compares_identities() {
        assert!(ExactMatch.allows("alice", "alice"));
        assert!(!ExactMatch.allows("bob", "alice"));
    }
}
