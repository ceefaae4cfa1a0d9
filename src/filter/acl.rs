use super::{from_predicate, Predicate};
use crate::models::Interface;

/// Opaque boolean collaborator deciding whether a hop sequence is acceptable.
/// The core never ships a concrete ACL engine; a policy instance is supplied
/// by the host.
pub trait AclPolicy {
    fn accept(&self, interfaces: &[Interface]) -> bool;
}

/// `FromACL(acl)`: `FromPredicate(s -> acl.accept(s.path_interfaces()))`.
pub fn from_acl<P: AclPolicy>(acl: P) -> Predicate<impl Fn(&[Interface]) -> bool> {
    from_predicate(move |interfaces: &[Interface]| acl.accept(interfaces))
}

// Concrete ACL fixtures live under `#[cfg(test)]` in `crate::testutil`.
