//! End-to-end behavior of the access-control store over an in-memory medium.

use std::sync::Arc;

use primecity_auth::{
    AccessControlConfig, AccessControlStore, AccessError, AdminAction, AssignedRole,
    NewAdministrator, Permission, Role,
};
use primecity_core::{AdminId, KeyValueStore, Locale};
use primecity_infra::InMemoryKeyValueStore;
use proptest::prelude::*;

type Store = AccessControlStore<Arc<InMemoryKeyValueStore>>;

fn open() -> Store {
    AccessControlStore::open(
        Arc::new(InMemoryKeyValueStore::new()),
        AccessControlConfig::default(),
    )
    .unwrap()
}

fn owner_id() -> AdminId {
    AdminId::new("owner-1")
}

/// Log in as the owner and add an administrator with `role`.
fn add_as_owner(store: &Store, username: &str, role: Role) -> AdminId {
    store.login("owner", "admin123").unwrap();
    store
        .add_administrator(NewAdministrator::new(username, "pw123456", username, role))
        .unwrap()
        .id
}

fn roster_len(store: &Store) -> usize {
    let raw = store.storage().get("admins").unwrap();
    serde_json::from_str::<Vec<serde_json::Value>>(&raw).unwrap().len()
}

#[test]
fn login_sets_credential_free_session() {
    let store = open();
    let id = add_as_owner(&store, "a", Role::Admin);
    store.logout();

    // Overwrite the generated password so the scenario uses literal credentials.
    let raw = store.storage().get("admins").unwrap();
    let patched = raw.replace("\"pw123456\"", "\"b\"");
    store.storage().set("admins", patched).unwrap();

    let session = store.login("a", "b").unwrap();
    assert_eq!(session.id, id);
    assert_eq!(session.role, AssignedRole::Known(Role::Admin));
    assert_eq!(store.current_session(), Some(session));

    let raw_session = store.storage().get("admin-session").unwrap();
    assert!(!raw_session.contains("password"));
}

#[test]
fn failed_logins_share_one_generic_message() {
    let store = open();

    let wrong_password = store.login("owner", "wrong").unwrap_err();
    let unknown_user = store.login("x", "admin123").unwrap_err();

    assert!(matches!(wrong_password, AccessError::InvalidCredentials));
    assert!(matches!(unknown_user, AccessError::InvalidCredentials));
    for locale in [Locale::Ar, Locale::En] {
        assert_eq!(wrong_password.localized(locale), unknown_user.localized(locale));
    }
    assert!(!store.is_logged_in());
}

#[test]
fn login_is_case_sensitive() {
    let store = open();
    assert!(store.login("OWNER", "admin123").is_err());
    assert!(store.login("owner", "ADMIN123").is_err());
}

#[test]
fn login_overwrites_previous_session() {
    let store = open();
    add_as_owner(&store, "viewer1", Role::Viewer);
    assert_eq!(store.current_role(), Some(Role::Owner.into()));

    store.login("viewer1", "pw123456").unwrap();
    assert_eq!(store.current_role(), Some(Role::Viewer.into()));
    assert!(!store.has_permission(Permission::ManageRoles));
}

#[test]
fn logout_clears_session() {
    let store = open();
    store.login("owner", "admin123").unwrap();
    assert!(store.is_logged_in());

    store.logout();
    assert!(!store.is_logged_in());
    assert_eq!(store.current_role(), None);
    assert!(store.storage().get("admin-session").is_none());
}

#[test]
fn permission_checks_fail_closed() {
    let store = open();
    assert!(!store.has_permission(Permission::ViewApplications));
    assert!(!store.has_permission_named("viewApplications"));

    store.login("owner", "admin123").unwrap();
    assert!(store.has_permission_named("exportData"));
    assert!(!store.has_permission_named("rebootServer"));
}

#[test]
fn roster_is_visible_only_with_manage_roles() {
    let store = open();
    add_as_owner(&store, "adm", Role::Admin);
    add_as_owner(&store, "mod", Role::Moderator);
    add_as_owner(&store, "view", Role::Viewer);

    assert_eq!(store.list_administrators().len(), 4);

    for username in ["adm", "mod", "view"] {
        store.login(username, "pw123456").unwrap();
        assert!(store.list_administrators().is_empty(), "{username}");
        assert_eq!(store.find_administrator(&owner_id()), None);
    }

    store.logout();
    assert!(store.list_administrators().is_empty());
}

#[test]
fn roster_includes_stored_passwords() {
    let store = open();
    store.login("owner", "admin123").unwrap();
    let owner = store.find_administrator(&owner_id()).unwrap();
    assert_eq!(owner.password, "admin123");
}

#[test]
fn duplicate_username_is_rejected() {
    let store = open();
    add_as_owner(&store, "a", Role::Admin);
    assert_eq!(roster_len(&store), 2);

    let err = store
        .add_administrator(NewAdministrator::new("a", "other", "Other", Role::Viewer))
        .unwrap_err();
    assert!(matches!(err, AccessError::UsernameTaken));
    assert_eq!(roster_len(&store), 2);

    // Usernames compare case-sensitively.
    store
        .add_administrator(NewAdministrator::new("A", "other", "Other", Role::Viewer))
        .unwrap();
    assert_eq!(roster_len(&store), 3);
}

#[test]
fn added_administrators_get_distinct_ids() {
    let store = open();
    let a = add_as_owner(&store, "a", Role::Viewer);
    let b = add_as_owner(&store, "b", Role::Viewer);
    assert_ne!(a, b);
    assert_ne!(a, owner_id());
}

#[test]
fn mutations_require_manage_roles() {
    let store = open();
    let target = add_as_owner(&store, "view", Role::Viewer);
    add_as_owner(&store, "adm", Role::Admin);
    store.login("adm", "pw123456").unwrap();

    let add = store
        .add_administrator(NewAdministrator::new("z", "z", "Z", Role::Viewer))
        .unwrap_err();
    assert!(matches!(add, AccessError::PermissionDenied { action: AdminAction::Add }));

    let update = store
        .update_administrator_role(&target, Role::Admin)
        .unwrap_err();
    assert!(matches!(
        update,
        AccessError::PermissionDenied { action: AdminAction::UpdateRole }
    ));

    let delete = store.delete_administrator(&target).unwrap_err();
    assert!(matches!(
        delete,
        AccessError::PermissionDenied { action: AdminAction::Delete }
    ));

    assert_eq!(roster_len(&store), 3);
}

#[test]
fn unknown_ids_are_not_found() {
    let store = open();
    store.login("owner", "admin123").unwrap();
    let missing = AdminId::new("admin-missing");

    assert!(matches!(
        store.update_administrator_role(&missing, Role::Viewer),
        Err(AccessError::NotFound)
    ));
    assert!(matches!(
        store.delete_administrator(&missing),
        Err(AccessError::NotFound)
    ));
}

#[test]
fn owner_cannot_be_demoted_or_deleted() {
    let store = open();
    store.login("owner", "admin123").unwrap();

    for role in [Role::Admin, Role::Moderator, Role::Viewer] {
        let err = store.update_administrator_role(&owner_id(), role).unwrap_err();
        assert!(matches!(
            err,
            AccessError::OwnerProtected { action: AdminAction::UpdateRole }
        ));
    }
    let err = store.delete_administrator(&owner_id()).unwrap_err();
    assert!(matches!(err, AccessError::OwnerProtected { action: AdminAction::Delete }));

    // Re-asserting the owner role is allowed and changes nothing.
    store.update_administrator_role(&owner_id(), Role::Owner).unwrap();

    let owner = store.find_administrator(&owner_id()).unwrap();
    assert!(owner.is_owner());
}

#[test]
fn role_update_and_delete_apply_in_place() {
    let store = open();
    let a = add_as_owner(&store, "a", Role::Viewer);
    let b = add_as_owner(&store, "b", Role::Viewer);
    let c = add_as_owner(&store, "c", Role::Viewer);

    store.update_administrator_role(&b, Role::Moderator).unwrap();
    store.delete_administrator(&a).unwrap();

    let ids: Vec<AdminId> = store.list_administrators().into_iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![owner_id(), b.clone(), c]);
    assert_eq!(
        store.find_administrator(&b).unwrap().role,
        AssignedRole::Known(Role::Moderator)
    );
}

#[test]
fn a_second_owner_may_be_added_and_is_then_protected() {
    let store = open();
    let second = add_as_owner(&store, "co-owner", Role::Owner);

    assert!(matches!(
        store.delete_administrator(&second),
        Err(AccessError::OwnerProtected { .. })
    ));

    store.login("co-owner", "pw123456").unwrap();
    assert_eq!(store.list_administrators().len(), 2);
}

#[test]
fn promoting_to_owner_is_permitted() {
    let store = open();
    let a = add_as_owner(&store, "a", Role::Admin);
    store.update_administrator_role(&a, Role::Owner).unwrap();
    assert!(store.find_administrator(&a).unwrap().is_owner());
}

#[test]
fn explanation_matches_permission_check() {
    let store = open();
    add_as_owner(&store, "mod", Role::Moderator);
    store.login("mod", "pw123456").unwrap();

    for p in Permission::ALL {
        assert_eq!(store.explain_permission(p).granted, store.has_permission(p));
    }
}

#[test]
fn catalog_uses_configured_locale() {
    let store = open();
    let names: Vec<&str> = store.role_catalog().iter().map(|d| d.display_name).collect();
    assert_eq!(names, vec!["المالك", "مدير", "مشرف", "مشاهد"]);
}

#[derive(Debug, Clone)]
enum Op {
    LoginOwner,
    LoginAdmin,
    Logout,
    Demote(Role),
    Delete,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::LoginOwner),
        Just(Op::LoginAdmin),
        Just(Op::Logout),
        prop::sample::select(vec![Role::Admin, Role::Moderator, Role::Viewer]).prop_map(Op::Demote),
        Just(Op::Delete),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        ..ProptestConfig::default()
    })]

    /// Property: no sequence of role changes or deletes aimed at the owner,
    /// under any session, removes or demotes it.
    #[test]
    fn owner_survives_any_sequence(ops in prop::collection::vec(arb_op(), 1..20)) {
        let store = open();
        add_as_owner(&store, "adm", Role::Admin);
        store.logout();

        for op in ops {
            match op {
                Op::LoginOwner => { store.login("owner", "admin123").unwrap(); }
                Op::LoginAdmin => { store.login("adm", "pw123456").unwrap(); }
                Op::Logout => store.logout(),
                Op::Demote(role) => {
                    prop_assert!(store.update_administrator_role(&owner_id(), role).is_err());
                }
                Op::Delete => {
                    prop_assert!(store.delete_administrator(&owner_id()).is_err());
                }
            }
        }

        let raw = store.storage().get("admins").unwrap();
        let admins: Vec<primecity_auth::AdministratorRecord> = serde_json::from_str(&raw).unwrap();
        let owners: Vec<_> = admins.iter().filter(|a| a.id == owner_id()).collect();
        prop_assert_eq!(owners.len(), 1);
        prop_assert!(owners[0].is_owner());
    }

    /// Property: repeated bootstrap calls never produce a second record.
    #[test]
    fn bootstrap_is_idempotent(calls in 1usize..8) {
        let store = open();
        for _ in 0..calls {
            prop_assert!(!store.ensure_default_owner().unwrap());
        }
        prop_assert_eq!(roster_len(&store), 1);
    }
}
