//! Integration tests for the upcoming-birthdays query.

mod fixtures;

use fixtures::*;

#[test]
fn test_window_is_half_open() {
    let today = today();
    let book = sample_book(vec![
        sample_record("Six", &[], Some(&birthday_in(today, 6))),
        sample_record("Seven", &[], Some(&birthday_in(today, 7))),
    ]);

    assert_eq!(book.upcoming_birthdays(7, today), vec!["Six"]);
    assert_eq!(book.upcoming_birthdays(8, today), vec!["Six", "Seven"]);
}

#[test]
fn test_today_is_included_and_past_is_excluded() {
    let today = today();
    let book = sample_book(vec![
        sample_record("Past", &[], Some(&birthday_in(today, -1))),
        sample_record("Today", &[], Some(&birthday_in(today, 0))),
        sample_record("Nobirthday", &["1234567890"], None),
    ]);

    assert_eq!(book.upcoming_birthdays(7, today), vec!["Today"]);
}

#[test]
fn test_order_follows_insertion_not_date() {
    let today = today();
    let book = sample_book(vec![
        sample_record("Later", &[], Some(&birthday_in(today, 5))),
        sample_record("Sooner", &[], Some(&birthday_in(today, 1))),
        sample_record("Tied", &[], Some(&birthday_in(today, 5))),
    ]);

    assert_eq!(
        book.upcoming_birthdays(7, today),
        vec!["Later", "Sooner", "Tied"]
    );
}

#[test]
fn test_window_wraps_year_end() {
    let today = date(2026, 12, 28);
    let book = sample_book(vec![
        sample_record("Eve", &[], Some("31.12.1999")),
        sample_record("Jan", &[], Some("03.01.2001")),
        sample_record("Feb", &[], Some("04.02.2001")),
    ]);

    let detailed = book.upcoming_birthdays_detailed(7, today);
    let summary: Vec<(&str, i64)> = detailed
        .iter()
        .map(|u| (u.name.as_str(), u.days_until))
        .collect();
    assert_eq!(summary, vec![("Eve", 3), ("Jan", 6)]);
    assert_eq!(detailed[1].date, date(2027, 1, 3));
}

#[test]
fn test_query_agrees_with_record_arithmetic() {
    let today = today();
    let book = sample_book(
        (0..30i64)
            .map(|offset| {
                let name = "a".repeat(offset as usize + 1);
                sample_record(&name, &[], Some(&birthday_in(today, offset * 13)))
            })
            .collect(),
    );

    let upcoming = book.upcoming_birthdays_detailed(30, today);
    assert!(!upcoming.is_empty());
    for entry in upcoming {
        let record = book.find(entry.name.as_str()).unwrap();
        assert_eq!(record.days_to_next_birthday(today), Some(entry.days_until));
        assert!(entry.days_until < 30);
    }
}
