//! Badge colour classification for status and priority labels

use opsdesk_domain::Priority;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeVariant {
    Danger,
    Success,
    Warning,
    Primary,
    Secondary,
}

impl BadgeVariant {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Danger => "danger",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }
}

/// Ordered classification table; the first variant with a matching substring
/// wins. Matching is case-sensitive on the raw status label.
const STATUS_BADGE_RULES: &[(BadgeVariant, &[&str])] = &[
    (BadgeVariant::Danger, &["gestoppt", "abgelehnt"]),
    (
        BadgeVariant::Success,
        &["Freigabe", "Eingang beim Kunde", "Zahlung erhalten", "abgeschlossen"],
    ),
    (BadgeVariant::Warning, &["besprechen", "Korrektur", "offen"]),
    (BadgeVariant::Primary, &["Produktion", "versendet", "Bestellung"]),
];

/// Badge variant for a status label.
///
/// Takes the raw label rather than [`opsdesk_domain::RequestStatus`] so that
/// labels the client does not know yet still get a colour.
pub fn status_badge_variant(status: &str) -> BadgeVariant {
    STATUS_BADGE_RULES
        .iter()
        .find(|(_, needles)| needles.iter().any(|needle| status.contains(needle)))
        .map_or(BadgeVariant::Secondary, |(variant, _)| *variant)
}

pub const fn priority_badge_variant(priority: Priority) -> BadgeVariant {
    match priority {
        Priority::High => BadgeVariant::Danger,
        Priority::Normal => BadgeVariant::Secondary,
    }
}

#[cfg(test)]
mod tests {
    use opsdesk_domain::RequestStatus;

    use super::*;

    #[test]
    fn danger_wins_over_warning() {
        assert_eq!(
            status_badge_variant("Projekt gestoppt, mit Kunde besprechen"),
            BadgeVariant::Danger
        );
    }

    #[test]
    fn success_wins_over_warning_and_primary() {
        assert_eq!(
            status_badge_variant("Freigabe offen nach Produktion"),
            BadgeVariant::Success
        );
    }

    #[test]
    fn known_statuses_classify() {
        let cases = [
            (RequestStatus::ProjectStopped, BadgeVariant::Danger),
            (RequestStatus::TrialRejected, BadgeVariant::Danger),
            (RequestStatus::SampleApproved, BadgeVariant::Success),
            (RequestStatus::SeriesReceivedByCustomer, BadgeVariant::Success),
            (RequestStatus::ComplaintClosed, BadgeVariant::Success),
            (RequestStatus::DiscussWithCustomer, BadgeVariant::Warning),
            (RequestStatus::PaymentOpen, BadgeVariant::Warning),
            (RequestStatus::ComplaintDiscussWithSupplier, BadgeVariant::Warning),
            (RequestStatus::SampleInProduction, BadgeVariant::Primary),
            (RequestStatus::TrialOrderPlaced, BadgeVariant::Primary),
            (RequestStatus::NewRequest, BadgeVariant::Secondary),
        ];
        for (status, expected) in cases {
            assert_eq!(status_badge_variant(status.as_str()), expected, "{status}");
        }
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(status_badge_variant("GESTOPPT"), BadgeVariant::Secondary);
        assert_eq!(status_badge_variant(""), BadgeVariant::Secondary);
    }

    #[test]
    fn priority_badges() {
        assert_eq!(priority_badge_variant(Priority::High).as_str(), "danger");
        assert_eq!(priority_badge_variant(Priority::Normal).as_str(), "secondary");
    }
}
