//! Integration tests for the requested-item dashboard helpers
//!
//! Items are decoded from API-shaped JSON, then run through the same chain
//! the dashboard uses: filter, sort, badge.

use chrono::{DateTime, Duration, Utc};
use opsdesk_core::{
    filter_items, is_overdue, needs_attention, sorted_by_priority_and_date, status_badge_variant,
    BadgeVariant, ItemFilter,
};
use opsdesk_domain::{Priority, RequestStatus, RequestedItem};
use serde_json::json;

fn now() -> DateTime<Utc> {
    "2026-10-18T12:00:00Z".parse().unwrap()
}

fn item(id: &str, status: &str, priority: &str, age_days: i64) -> RequestedItem {
    let created_at = (now() - Duration::days(age_days)).to_rfc3339();
    serde_json::from_value(json!({
        "id": id,
        "businessId": "b-1",
        "requestStatus": status,
        "priority": priority,
        "itemName": format!("Part {id}"),
        "qty": "100",
        "createdAt": created_at
    }))
    .expect("fixture should decode")
}

fn backlog() -> Vec<RequestedItem> {
    vec![
        item("a", "1_Neue Anfrage", "Normal", 45),
        item("b", "2_Anfrage in Prüfung", "High", 2),
        item("c", "5_Angebot Lieferant erhalten", "Normal", 31),
        item("d", "3_Anfrage Phase", "High", 40),
        item("e", "6_Angebot an Kunde gesendet", "Normal", 90),
        item("f", "1_Neue Anfrage", "Normal", 30),
    ]
}

#[test]
fn test_dashboard_flags() {
    let items = backlog();
    let overdue: Vec<&str> =
        items.iter().filter(|i| is_overdue(i, now())).map(|i| i.id.as_str()).collect();
    let attention: Vec<&str> =
        items.iter().filter(|i| needs_attention(i)).map(|i| i.id.as_str()).collect();

    // "e" is old but past the early phases; "f" sits exactly on the boundary.
    assert_eq!(overdue, vec!["a", "c", "d"]);
    assert_eq!(attention, vec!["b", "d"]);
}

#[test]
fn test_every_early_status_goes_overdue_after_31_days() {
    let early = [
        RequestStatus::NewRequest,
        RequestStatus::RequestInReview,
        RequestStatus::RequestPhase,
        RequestStatus::RequestSentToSupplier,
        RequestStatus::SupplierQuoteReceived,
    ];
    for status in RequestStatus::ALL {
        let candidate = item("x", status.as_str(), "Normal", 31);
        assert_eq!(is_overdue(&candidate, now()), early.contains(status), "{status}");
    }
}

#[test]
fn test_sort_then_filter_keeps_priority_order() {
    let sorted = sorted_by_priority_and_date(&backlog());
    let ids: Vec<&str> = sorted.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "d", "f", "c", "a", "e"]);

    let filter = ItemFilter { priority: Some(Priority::High), ..Default::default() };
    let high: Vec<&str> =
        filter_items(&sorted, &filter, now()).into_iter().map(|i| i.id.as_str()).collect();
    assert_eq!(high, vec!["b", "d"]);
}

#[test]
fn test_overdue_filter_with_search() {
    let items = backlog();
    let filter =
        ItemFilter { search: Some("  part C ".into()), only_overdue: true, ..Default::default() };

    let matched = filter_items(&items, &filter, now());
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].id, "c");
}

#[test]
fn test_badges_for_pipeline_labels() {
    let danger_first = "Projekt gestoppt - besprechen";
    assert_eq!(status_badge_variant(danger_first), BadgeVariant::Danger);

    let variants: Vec<BadgeVariant> =
        RequestStatus::ALL.iter().map(|s| status_badge_variant(s.as_str())).collect();
    assert!(variants.contains(&BadgeVariant::Success));
    assert!(variants.contains(&BadgeVariant::Primary));
    assert_eq!(status_badge_variant("1_Neue Anfrage"), BadgeVariant::Secondary);
}

#[test]
fn test_rows_with_new_status_labels_stay_on_the_dashboard() -> anyhow::Result<()> {
    let mut items = backlog();
    items.push(serde_json::from_value(json!({
        "id": "g",
        "businessId": "b-1",
        "requestStatus": "46_Neuer Status",
        "priority": null,
        "itemName": "Part g",
        "createdAt": (now() - Duration::days(60)).to_rfc3339()
    }))?);

    let newcomer = items.last().ok_or_else(|| anyhow::anyhow!("backlog is empty"))?;
    assert!(!is_overdue(newcomer, now()));
    assert!(!needs_attention(newcomer));
    assert_eq!(status_badge_variant(newcomer.request_status.as_str()), BadgeVariant::Secondary);

    let sorted = sorted_by_priority_and_date(&items);
    assert_eq!(sorted.last().map(|i| i.id.as_str()), Some("e"));
    assert_eq!(sorted.len(), 7);
    Ok(())
}
