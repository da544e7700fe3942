//! Derived views over requested items
//!
//! Pure, synchronous helpers the list and dashboard screens use on arrays
//! they already fetched: ordering, overdue and attention flags, badge
//! variants, and client-side filtering.

mod badges;
mod validation;

use std::cmp::Ordering;

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use opsdesk_domain::constants::OVERDUE_AFTER_DAYS;
use opsdesk_domain::{Priority, RequestStatus, RequestedItem};

pub use badges::{priority_badge_variant, status_badge_variant, BadgeVariant};
pub use validation::validate_new_requested_item;

/// Statuses that count towards the overdue check.
pub const OVERDUE_CANDIDATE_STATUSES: [RequestStatus; 5] = [
    RequestStatus::NewRequest,
    RequestStatus::RequestInReview,
    RequestStatus::RequestPhase,
    RequestStatus::RequestSentToSupplier,
    RequestStatus::SupplierQuoteReceived,
];

/// The first three pipeline phases.
pub const INTAKE_STATUSES: [RequestStatus; 3] =
    [RequestStatus::NewRequest, RequestStatus::RequestInReview, RequestStatus::RequestPhase];

/// Sort in place: `High` before `Normal`, then newest `created_at` first.
///
/// The sort is stable, so items with equal priority and timestamp keep their
/// relative order. Callers holding on to the pre-sort order must clone first
/// or use [`sorted_by_priority_and_date`].
pub fn sort_items_by_priority_and_date(items: &mut [RequestedItem]) {
    items.sort_by(compare_priority_then_date);
}

/// Sorted copy; the input slice is left untouched.
pub fn sorted_by_priority_and_date(items: &[RequestedItem]) -> Vec<RequestedItem> {
    let mut sorted = items.to_vec();
    sort_items_by_priority_and_date(&mut sorted);
    sorted
}

fn compare_priority_then_date(a: &RequestedItem, b: &RequestedItem) -> Ordering {
    priority_rank(a.priority)
        .cmp(&priority_rank(b.priority))
        .then_with(|| compare_created_desc(&a.created_at, &b.created_at))
}

const fn priority_rank(priority: Priority) -> u8 {
    match priority {
        Priority::High => 0,
        Priority::Normal => 1,
    }
}

fn compare_created_desc(a: &str, b: &str) -> Ordering {
    match (parse_timestamp(a), parse_timestamp(b)) {
        (Some(a), Some(b)) => b.cmp(&a),
        // Unparseable timestamps sink to the end of their priority group.
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => b.cmp(a),
    }
}

/// True when the item is still in an early phase and was created more than
/// 30 days before `now`. Exactly 30 days is not overdue.
pub fn is_overdue(item: &RequestedItem, now: DateTime<Utc>) -> bool {
    let Some(status) = item.request_status.known() else {
        return false;
    };
    if !OVERDUE_CANDIDATE_STATUSES.contains(&status) {
        return false;
    }
    let Some(created_at) = parse_timestamp(&item.created_at) else {
        return false;
    };
    created_at < now - Duration::days(OVERDUE_AFTER_DAYS)
}

/// High priority items still in one of the first three phases.
pub fn needs_attention(item: &RequestedItem) -> bool {
    item.priority == Priority::High
        && item.request_status.known().is_some_and(|status| INTAKE_STATUSES.contains(&status))
}

/// Status label without its `N_` phase prefix, e.g. `"Neue Anfrage"`.
///
/// Labels without a numeric prefix are returned unchanged.
pub fn status_label(status: &str) -> &str {
    match status.split_once('_') {
        Some((prefix, rest)) if is_phase_prefix(prefix) => rest,
        _ => status,
    }
}

/// Numeric phase prefix of a status label, if it has one.
pub fn status_phase(status: &str) -> Option<u8> {
    status
        .split_once('_')
        .filter(|(prefix, _)| is_phase_prefix(prefix))
        .and_then(|(prefix, _)| prefix.parse().ok())
}

fn is_phase_prefix(prefix: &str) -> bool {
    !prefix.is_empty() && prefix.bytes().all(|b| b.is_ascii_digit())
}

/// Client-side narrowing of an already fetched list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFilter {
    /// Case-insensitive match on item name, item number and material
    pub search: Option<String>,
    pub status: Option<RequestStatus>,
    pub priority: Option<Priority>,
    pub business_id: Option<String>,
    pub only_overdue: bool,
    pub only_attention: bool,
}

/// Apply `filter` to `items`, preserving order.
pub fn filter_items<'a>(
    items: &'a [RequestedItem],
    filter: &ItemFilter,
    now: DateTime<Utc>,
) -> Vec<&'a RequestedItem> {
    let needle = filter
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    items
        .iter()
        .filter(|item| filter.status.map_or(true, |s| item.request_status == s))
        .filter(|item| filter.priority.map_or(true, |p| item.priority == p))
        .filter(|item| {
            filter.business_id.as_deref().map_or(true, |id| item.business_id == id)
        })
        .filter(|item| !filter.only_overdue || is_overdue(item, now))
        .filter(|item| !filter.only_attention || needs_attention(item))
        .filter(|item| needle.as_deref().map_or(true, |n| matches_search(item, n)))
        .collect()
}

fn matches_search(item: &RequestedItem, needle: &str) -> bool {
    [Some(item.item_name.as_str()), item.item_number.as_deref(), item.material.as_deref()]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Parse the server's timestamp strings.
///
/// Accepts RFC 3339, naive `YYYY-MM-DDTHH:MM:SS[.f]` (taken as UTC) and bare
/// dates (midnight UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
