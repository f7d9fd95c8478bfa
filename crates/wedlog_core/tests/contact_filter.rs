mod common;

use common::{caterer, florist, giselle, guest, person, sam};
use wedlog_core::{
    ContactFilter, EntityKind, FieldKind, FilterCriterion, FilterError, Guest, RsvpStatus,
    UniqueEntityList,
};

fn criterion(field: FieldKind, value: &str) -> FilterCriterion {
    FilterCriterion::new(field, value)
}

#[test]
fn zero_criteria_is_empty_filter() {
    let err = ContactFilter::build(EntityKind::Guest, &[]).unwrap_err();
    assert_eq!(err, FilterError::EmptyFilter);
}

#[test]
fn blank_name_is_empty_field() {
    let err = ContactFilter::build(EntityKind::Person, &[criterion(FieldKind::Name, "   ")])
        .unwrap_err();
    assert_eq!(err, FilterError::EmptyField(FieldKind::Name));
}

#[test]
fn blank_rsvp_is_empty_field() {
    let err =
        ContactFilter::build(EntityKind::Guest, &[criterion(FieldKind::Rsvp, "")]).unwrap_err();
    assert_eq!(err, FilterError::EmptyField(FieldKind::Rsvp));
}

#[test]
fn guest_fields_are_rejected_for_vendors() {
    let err = ContactFilter::build(EntityKind::Vendor, &[criterion(FieldKind::Table, "1")])
        .unwrap_err();
    assert_eq!(
        err,
        FilterError::UnsupportedField {
            kind: EntityKind::Vendor,
            field: FieldKind::Table,
        }
    );
}

#[test]
fn repeated_field_is_rejected() {
    let err = ContactFilter::build(
        EntityKind::Person,
        &[
            criterion(FieldKind::Name, "alex"),
            criterion(FieldKind::Name, "bea"),
        ],
    )
    .unwrap_err();
    assert_eq!(err, FilterError::DuplicateField(FieldKind::Name));
}

#[test]
fn unknown_rsvp_keyword_is_rejected() {
    let err = ContactFilter::build(EntityKind::Guest, &[criterion(FieldKind::Rsvp, "maybe")])
        .unwrap_err();
    assert_eq!(
        err,
        FilterError::InvalidKeyword {
            field: FieldKind::Rsvp,
            keyword: "maybe".to_string(),
        }
    );
}

#[test]
fn name_filter_matches_whole_words_only() {
    let people = vec![
        person("Alex Tan", None, None),
        person("Alexandra Lee", None, None),
    ];
    let filter =
        ContactFilter::build(EntityKind::Person, &[criterion(FieldKind::Name, "Alex")]).unwrap();

    let matched = filter.apply(&people);
    assert_eq!(matched, vec![&people[0]]);
}

#[test]
fn name_filter_is_case_insensitive_and_any_keyword() {
    let people = vec![
        person("Alex Tan", None, None),
        person("Bea Ong", None, None),
        person("Carl Lim", None, None),
    ];
    let filter =
        ContactFilter::build(EntityKind::Person, &[criterion(FieldKind::Name, "ong TAN")])
            .unwrap();

    let names = filter
        .apply(&people)
        .into_iter()
        .map(|person| person.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["Alex Tan", "Bea Ong"]);
}

#[test]
fn criteria_are_and_combined() {
    let guests = vec![
        giselle(),
        guest("Gina Tan", RsvpStatus::No, Some(3)),
        guest("Hal Tan", RsvpStatus::Yes, Some(4)),
    ];
    let filter = ContactFilter::build(
        EntityKind::Guest,
        &[
            criterion(FieldKind::Rsvp, "yes"),
            criterion(FieldKind::Table, "3"),
        ],
    )
    .unwrap();

    assert_eq!(filter.apply(&guests), vec![&guests[0]]);
}

#[test]
fn blank_optional_field_matches_missing_values() {
    let vendors = vec![florist(), caterer()];
    let filter =
        ContactFilter::build(EntityKind::Vendor, &[criterion(FieldKind::Phone, " ")]).unwrap();

    assert_eq!(filter.apply(&vendors), vec![&vendors[1]]);
}

#[test]
fn email_and_address_match_substrings() {
    let vendors = vec![florist(), caterer()];
    let by_email =
        ContactFilter::build(EntityKind::Vendor, &[criterion(FieldKind::Email, "FEAST")]).unwrap();
    assert_eq!(by_email.apply(&vendors), vec![&vendors[1]]);

    let guests = vec![giselle(), sam()];
    let by_address =
        ContactFilter::build(EntityKind::Guest, &[criterion(FieldKind::Address, "payoh")])
            .unwrap();
    assert_eq!(by_address.apply(&guests), vec![&guests[0]]);
}

#[test]
fn filtering_a_list_view_leaves_the_list_untouched() {
    let mut list: UniqueEntityList<Guest> = UniqueEntityList::new();
    list.add(giselle()).unwrap();
    list.add(sam()).unwrap();
    let before = list.clone();

    let filter =
        ContactFilter::build(EntityKind::Guest, &[criterion(FieldKind::Rsvp, "pending")]).unwrap();
    let matched = filter.apply(list.as_slice());
    assert_eq!(matched, vec![&sam()]);
    assert_eq!(list, before);
}

#[test]
fn show_all_accepts_everything() {
    let guests = vec![giselle(), sam()];
    let filter = ContactFilter::show_all();
    assert!(filter.is_show_all());
    assert_eq!(filter.apply(&guests).len(), 2);
}

#[test]
fn built_filter_remembers_its_category() {
    let filter = ContactFilter::build(
        EntityKind::Guest,
        &[criterion(FieldKind::Rsvp, "pending")],
    )
    .unwrap();

    assert_eq!(filter.kind(), Some(EntityKind::Guest));
    assert!(filter.ensure_kind(EntityKind::Guest).is_ok());
    assert_eq!(
        filter.ensure_kind(EntityKind::Vendor),
        Err(FilterError::KindMismatch {
            expected: EntityKind::Vendor,
            found: EntityKind::Guest,
        })
    );
    assert_eq!(ContactFilter::show_all().kind(), None);
    assert!(ContactFilter::show_all()
        .ensure_kind(EntityKind::Person)
        .is_ok());
}
