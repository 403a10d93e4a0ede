//! Tests for key namespacing

use loadcache_domain::Namespace;

mod billing {
    #[derive(Debug)]
    pub struct Account;
}

mod identity {
    #[derive(Debug)]
    pub struct Account;
}

#[test]
fn test_namespace_from_type_is_fully_qualified() {
    let ns = Namespace::of::<billing::Account>();
    assert!(ns.as_str().ends_with("billing::Account"));
    assert!(ns.as_str().contains("namespace_tests"));
}

#[test]
fn test_same_type_name_in_different_modules_does_not_collide() {
    let billing = Namespace::of::<billing::Account>();
    let identity = Namespace::of::<identity::Account>();
    assert_ne!(billing, identity);
    assert_ne!(billing.key_for(&42), identity.key_for(&42));
}

#[test]
fn test_namespace_is_stable_for_a_type() {
    assert_eq!(Namespace::of::<Vec<u8>>(), Namespace::of::<Vec<u8>>());
}

#[test]
fn test_key_format() {
    let ns = Namespace::new("users").unwrap();
    assert_eq!(ns.key_for(&17), "users:17");
    assert_eq!(ns.key_for("alice"), "users:alice");
    assert_eq!(ns.key_prefix(), "users:");
}

#[test]
fn test_keys_are_not_escaped() {
    // Documented limitation: separators inside keys are kept verbatim.
    let ns = Namespace::new("a").unwrap();
    assert_eq!(ns.key_for("b:c"), "a:b:c");
}

#[test]
fn test_explicit_namespace_cannot_nest_inside_another() {
    let err = Namespace::new("users:admin").unwrap_err();
    assert!(err.to_string().contains("users:admin"));
    assert!(Namespace::new("").is_err());
}

#[test]
fn test_type_namespaces_do_not_own_each_other() {
    let billing = Namespace::of::<billing::Account>();
    let identity = Namespace::of::<identity::Account>();
    assert!(!billing.owns(&identity.key_for(&1)));
    assert!(!identity.owns(&billing.key_for(&1)));
}

#[test]
fn test_owns_matches_only_own_prefix() {
    let ns = Namespace::new("users").unwrap();
    assert!(ns.owns("users:1"));
    assert!(!ns.owns("users_archive:1"));
    assert!(!ns.owns("users"));
    assert!(!ns.owns("orders:1"));
}

#[test]
fn test_display_matches_as_str() {
    let ns = Namespace::new("orders").unwrap();
    assert_eq!(ns.to_string(), "orders");
    assert_eq!(ns.as_ref(), "orders");
}
