//! Explicit chaining context for nested resources.
//!
//! A [`ChainContext`] remembers the most recently referenced identifier per
//! [`ResourceKind`] so a fluent call sequence such as
//! `client.ticket_fields().with_id(42).options().find_all(..)` can omit the
//! parent id on the nested call. The context is owned by the resource values
//! that carry it; nothing is stored globally.
//!
//! # Invariants
//! - At most one identifier is held per resource kind; setting replaces.
//! - Empty identifiers are never stored.

use std::collections::HashMap;

use crate::identifier::Identifier;

/// Resource kinds that can be referenced from a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    TicketField,
    TicketFieldOption,
}

impl ResourceKind {
    /// Returns the string label for this kind.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::TicketField => "ticket_field",
            ResourceKind::TicketFieldOption => "ticket_field_option",
        }
    }
}

/// Identifiers remembered along a fluent call chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainContext {
    values: HashMap<ResourceKind, Identifier>,
}

impl ChainContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`ChainContext::set`].
    pub fn with(mut self, kind: ResourceKind, id: impl Into<Identifier>) -> Self {
        self.set(kind, id);
        self
    }

    /// Remember `id` for `kind`, returning the value it replaced.
    ///
    /// Setting an empty identifier clears the slot instead.
    pub fn set(&mut self, kind: ResourceKind, id: impl Into<Identifier>) -> Option<Identifier> {
        let id = id.into();
        if id.is_empty() {
            return self.values.remove(&kind);
        }
        self.values.insert(kind, id)
    }

    /// The identifier currently remembered for `kind`.
    pub fn get(&self, kind: ResourceKind) -> Option<&Identifier> {
        self.values.get(&kind)
    }

    /// Forget the identifier for `kind`.
    pub fn clear(&mut self, kind: ResourceKind) -> Option<Identifier> {
        self.values.remove(&kind)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_previous_value() {
        let mut chain = ChainContext::new();
        assert_eq!(chain.set(ResourceKind::TicketField, 1u64), None);
        assert_eq!(
            chain.set(ResourceKind::TicketField, 2u64),
            Some(Identifier::Number(1))
        );
        assert_eq!(
            chain.get(ResourceKind::TicketField),
            Some(&Identifier::Number(2))
        );
    }

    #[test]
    fn test_kinds_are_independent() {
        let chain = ChainContext::new()
            .with(ResourceKind::TicketField, 42u64)
            .with(ResourceKind::TicketFieldOption, 7u64);

        assert_eq!(
            chain.get(ResourceKind::TicketField),
            Some(&Identifier::Number(42))
        );
        assert_eq!(
            chain.get(ResourceKind::TicketFieldOption),
            Some(&Identifier::Number(7))
        );
    }

    #[test]
    fn test_empty_identifier_clears_slot() {
        let mut chain = ChainContext::new().with(ResourceKind::TicketField, 42u64);
        chain.set(ResourceKind::TicketField, "");
        assert_eq!(chain.get(ResourceKind::TicketField), None);
        assert!(chain.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut chain = ChainContext::new().with(ResourceKind::TicketFieldOption, 3u64);
        assert_eq!(
            chain.clear(ResourceKind::TicketFieldOption),
            Some(Identifier::Number(3))
        );
        assert!(chain.is_empty());
    }
}
