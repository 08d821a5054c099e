//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// An entity is identified by a single key. Two entities with the same key are
/// the same entity, whatever their other fields hold.
pub trait Entity {
    /// Identity key type.
    type Id: Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the identity key.
    fn id(&self) -> &Self::Id;
}

/// Returns `true` when both entities carry the same identity key.
pub fn same_identity<E: Entity>(a: &E, b: &E) -> bool {
    a.id() == b.id()
}

/// Implements `PartialEq`, `Eq` and `Hash` for an [`Entity`] in terms of its
/// identity key only.
///
/// Entities with mutable fields must not derive structural equality: sets and
/// maps of entities are keyed by identity.
#[macro_export]
macro_rules! impl_identity_eq {
    ($t:ty) => {
        impl ::core::cmp::PartialEq for $t {
            fn eq(&self, other: &Self) -> bool {
                $crate::entity::same_identity(self, other)
            }
        }

        impl ::core::cmp::Eq for $t {}

        impl ::core::hash::Hash for $t {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                ::core::hash::Hash::hash($crate::Entity::id(self), state);
            }
        }
    };
}
