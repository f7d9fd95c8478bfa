mod common;

use common::{alice, benson, guest, name, person, sam, vendor};
use wedlog_core::{EntityKind, Guest, ListError, Person, Phone, RsvpStatus, UniqueEntityList};

#[test]
fn add_then_contains_and_second_add_is_duplicate() {
    let mut list = UniqueEntityList::new();
    list.add(alice()).unwrap();
    assert!(list.contains(&alice()));

    let err = list.add(alice()).unwrap_err();
    assert_eq!(err, ListError::Duplicate(EntityKind::Person));
    assert_eq!(list.len(), 1);
}

#[test]
fn contains_uses_identity_not_full_equality() {
    let mut list = UniqueEntityList::new();
    list.add(alice()).unwrap();

    let edited = person("ALICE pauline", Some("11111111"), None);
    assert!(list.contains(&edited));
    assert!(!list.contains(&benson()));
}

#[test]
fn add_preserves_insertion_order() {
    let mut list = UniqueEntityList::new();
    list.add(vendor("Caterer", None)).unwrap();
    list.add(vendor("Band", None)).unwrap();
    list.add(vendor("Florist", None)).unwrap();

    let names = list
        .iter()
        .map(|vendor| vendor.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["Caterer", "Band", "Florist"]);
}

#[test]
fn set_entity_updates_in_place() {
    let mut list = UniqueEntityList::new();
    list.add(guest("Ana", RsvpStatus::No, None)).unwrap();
    list.add(sam()).unwrap();
    list.add(guest("Zed", RsvpStatus::Yes, Some(2))).unwrap();

    let mut confirmed = sam();
    confirmed.rsvp_status = RsvpStatus::Yes;
    list.set_entity(&sam(), confirmed.clone()).unwrap();

    assert_eq!(list.get(1), Some(&confirmed));
    assert_eq!(list.len(), 3);
}

#[test]
fn set_entity_missing_target_is_not_found() {
    let mut list: UniqueEntityList<Guest> = UniqueEntityList::new();
    list.add(guest("Ana", RsvpStatus::No, None)).unwrap();

    let err = list.set_entity(&sam(), sam()).unwrap_err();
    assert_eq!(err, ListError::NotFound(EntityKind::Guest));
}

#[test]
fn set_entity_target_lookup_requires_full_equality() {
    let mut list = UniqueEntityList::new();
    list.add(alice()).unwrap();

    let stale = person("Alice Pauline", Some("11111111"), None);
    let err = list.set_entity(&stale, benson()).unwrap_err();
    assert_eq!(err, ListError::NotFound(EntityKind::Person));
}

#[test]
fn set_entity_rejects_collision_with_another_entity() {
    let mut list = UniqueEntityList::new();
    list.add(alice()).unwrap();
    list.add(benson()).unwrap();

    let renamed = person("benson meier", None, None);
    let err = list.set_entity(&alice(), renamed).unwrap_err();
    assert_eq!(err, ListError::Duplicate(EntityKind::Person));
    assert_eq!(list.as_slice(), &[alice(), benson()]);
}

#[test]
fn set_entity_allows_same_identity_edit() {
    let mut list = UniqueEntityList::new();
    list.add(alice()).unwrap();

    let mut edited = alice();
    edited.phone = Some(Phone::parse("99990000").unwrap());
    list.set_entity(&alice(), edited.clone()).unwrap();
    assert_eq!(list.as_slice(), &[edited]);
}

#[test]
fn remove_requires_full_equality() {
    let mut list = UniqueEntityList::new();
    list.add(alice()).unwrap();

    let same_name = person("Alice Pauline", None, None);
    let err = list.remove(&same_name).unwrap_err();
    assert_eq!(err, ListError::NotFound(EntityKind::Person));
    assert_eq!(list.len(), 1);

    let removed = list.remove(&alice()).unwrap();
    assert_eq!(removed, alice());
    assert!(list.is_empty());
}

#[test]
fn replace_all_adopts_order() {
    let mut list = UniqueEntityList::new();
    list.add(benson()).unwrap();

    let replacement = vec![
        person("Carl Kurz", None, None),
        alice(),
        person("Daniel Meier", None, None),
    ];
    list.replace_all(replacement.clone()).unwrap();
    assert_eq!(list.as_slice(), replacement.as_slice());
}

#[test]
fn replace_all_with_duplicates_keeps_current_contents() {
    let mut list = UniqueEntityList::new();
    list.add(benson()).unwrap();

    let err = list
        .replace_all(vec![alice(), person("alice PAULINE", None, None)])
        .unwrap_err();
    assert_eq!(err, ListError::Duplicate(EntityKind::Person));
    assert_eq!(list.as_slice(), &[benson()]);
}

#[test]
fn lists_compare_by_contents_and_order() {
    let mut first: UniqueEntityList<Person> = UniqueEntityList::new();
    let mut second = UniqueEntityList::new();
    first.add(alice()).unwrap();
    first.add(benson()).unwrap();
    second.add(benson()).unwrap();
    second.add(alice()).unwrap();
    assert_ne!(first, second);

    second.replace_all(vec![alice(), benson()]).unwrap();
    assert_eq!(first, second);
}

#[test]
fn iterating_a_borrowed_list_yields_all_entities() {
    let mut list = UniqueEntityList::new();
    list.add(guest("Ana", RsvpStatus::No, None)).unwrap();
    list.add(guest("Bo", RsvpStatus::Yes, None)).unwrap();

    let mut count = 0;
    for guest in &list {
        assert_ne!(guest.name, name("Zed"));
        count += 1;
    }
    assert_eq!(count, 2);
}
