//! Requested-item types
//!
//! A requested item tracks a customer's sourcing request through the
//! sample → trial → series-production pipeline. The status is a flat label
//! table; the numeric prefix of each label orders the pipeline but no
//! transition is ever validated.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::impl_domain_label_conversions;

/// Pipeline position of a requested item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RequestStatus {
    ProjectStopped,
    #[default]
    NewRequest,
    RequestInReview,
    RequestPhase,
    RequestSentToSupplier,
    SupplierQuoteReceived,
    QuoteSentToCustomer,
    DiscussWithCustomer,
    SampleRequested,
    SampleInProduction,
    SampleShipped,
    SampleReceivedAtWarehouse,
    SampleReceivedByCustomer,
    SampleApproved,
    SampleRejected,
    SampleCorrection,
    TrialOrderReceived,
    TrialOrderPlaced,
    TrialInProduction,
    TrialQualityCheck,
    TrialShipped,
    TrialReceivedAtWarehouse,
    TrialReceivedByCustomer,
    TrialApproved,
    TrialRejected,
    TrialCorrection,
    SeriesOrderReceived,
    SeriesOrderPlaced,
    ToolingInProgress,
    ToolingApproved,
    SeriesInProduction,
    SeriesQualityCheck,
    SeriesPacking,
    SeriesReadyToShip,
    SeriesShipped,
    SeriesCustomsClearance,
    SeriesReceivedAtWarehouse,
    SeriesOutForDelivery,
    InvoiceIssued,
    PaymentOpen,
    PaymentReceived,
    ComplaintOpen,
    ComplaintDiscussWithSupplier,
    ComplaintClosed,
    ReorderPlanned,
    SeriesReceivedByCustomer,
}

impl_domain_label_conversions!(RequestStatus {
    ProjectStopped => "0_Projekt gestoppt",
    NewRequest => "1_Neue Anfrage",
    RequestInReview => "2_Anfrage in Prüfung",
    RequestPhase => "3_Anfrage Phase",
    RequestSentToSupplier => "4_Anfrage an Lieferanten gesendet",
    SupplierQuoteReceived => "5_Angebot Lieferant erhalten",
    QuoteSentToCustomer => "6_Angebot an Kunde gesendet",
    DiscussWithCustomer => "7_Mit Kunde besprechen",
    SampleRequested => "8_Muster angefordert",
    SampleInProduction => "9_Muster in Produktion",
    SampleShipped => "10_Muster versendet",
    SampleReceivedAtWarehouse => "11_Muster Eingang Lager",
    SampleReceivedByCustomer => "12_Muster Eingang beim Kunde",
    SampleApproved => "13_Muster Freigabe durch Kunde",
    SampleRejected => "14_Muster abgelehnt",
    SampleCorrection => "15_Muster Korrektur",
    TrialOrderReceived => "16_Trial Auftrag erhalten",
    TrialOrderPlaced => "17_Trial Bestellung an Lieferant",
    TrialInProduction => "18_Trial in Produktion",
    TrialQualityCheck => "19_Trial Qualitätsprüfung",
    TrialShipped => "20_Trial versendet",
    TrialReceivedAtWarehouse => "21_Trial Eingang Lager",
    TrialReceivedByCustomer => "22_Trial Eingang beim Kunde",
    TrialApproved => "23_Trial Freigabe durch Kunde",
    TrialRejected => "24_Trial abgelehnt",
    TrialCorrection => "25_Trial Korrektur",
    SeriesOrderReceived => "26_Serienauftrag erhalten",
    SeriesOrderPlaced => "27_Serienbestellung an Lieferant",
    ToolingInProgress => "28_Werkzeug in Fertigung",
    ToolingApproved => "29_Werkzeug Freigabe",
    SeriesInProduction => "30_Serienteil in Produktion",
    SeriesQualityCheck => "31_Serienteil Qualitätsprüfung",
    SeriesPacking => "32_Serienteil Verpackung",
    SeriesReadyToShip => "33_Serienteil versandbereit",
    SeriesShipped => "34_Serienteil versendet",
    SeriesCustomsClearance => "35_Serienteil Zollabfertigung",
    SeriesReceivedAtWarehouse => "36_Serienteil Eingang Lager",
    SeriesOutForDelivery => "37_Serienteil Auslieferung",
    InvoiceIssued => "38_Rechnung erstellt",
    PaymentOpen => "39_Zahlung offen",
    PaymentReceived => "40_Zahlung erhalten",
    ComplaintOpen => "41_Reklamation offen",
    ComplaintDiscussWithSupplier => "42_Reklamation mit Lieferant besprechen",
    ComplaintClosed => "43_Reklamation abgeschlossen",
    ReorderPlanned => "44_Nachbestellung geplant",
    SeriesReceivedByCustomer => "45_Serienteil Eingang beim Kunde",
});

impl RequestStatus {
    /// Numeric pipeline prefix of the label (`"3_Anfrage Phase"` → 3).
    pub fn phase(&self) -> u8 {
        self.as_str()
            .split_once('_')
            .and_then(|(prefix, _)| prefix.parse().ok())
            .unwrap_or_default()
    }

    /// Human label without the numeric prefix.
    pub fn display_label(&self) -> &'static str {
        let label = self.as_str();
        label.split_once('_').map_or(label, |(_, rest)| rest)
    }
}

/// Status label as received from the server.
///
/// Labels outside the known table are kept verbatim so that one new pipeline
/// step on the server does not make a whole list undecodable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StatusLabel {
    Known(RequestStatus),
    Unknown(String),
}

impl StatusLabel {
    pub const fn known(&self) -> Option<RequestStatus> {
        match self {
            Self::Known(status) => Some(*status),
            Self::Unknown(_) => None,
        }
    }

    /// Raw wire label.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(status) => status.as_str(),
            Self::Unknown(label) => label,
        }
    }
}

impl Default for StatusLabel {
    fn default() -> Self {
        Self::Known(RequestStatus::default())
    }
}

impl From<RequestStatus> for StatusLabel {
    fn from(status: RequestStatus) -> Self {
        Self::Known(status)
    }
}

impl From<String> for StatusLabel {
    fn from(label: String) -> Self {
        label.parse().map_or(Self::Unknown(label), Self::Known)
    }
}

impl From<StatusLabel> for String {
    fn from(label: StatusLabel) -> Self {
        match label {
            StatusLabel::Known(status) => status.as_str().to_string(),
            StatusLabel::Unknown(label) => label,
        }
    }
}

impl PartialEq<RequestStatus> for StatusLabel {
    fn eq(&self, other: &RequestStatus) -> bool {
        self.known() == Some(*other)
    }
}

impl fmt::Display for StatusLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request urgency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Priority {
    High,
    #[default]
    Normal,
}

impl_domain_label_conversions!(Priority {
    High => "High",
    Normal => "Normal",
});

/// Delivery cadence of a recurring request or list item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DeliveryInterval {
    Once,
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    HalfYearly,
    Yearly,
}

impl_domain_label_conversions!(DeliveryInterval {
    Once => "Einmalig",
    Daily => "Täglich",
    Weekly => "Wöchentlich",
    Monthly => "Monatlich",
    Quarterly => "Quartalsweise",
    HalfYearly => "Halbjährlich",
    Yearly => "Jährlich",
});

/// `null` decodes as the default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `null` and unknown labels decode as [`Priority::Normal`].
fn lenient_priority<'de, D>(deserializer: D) -> Result<Priority, D::Error>
where
    D: Deserializer<'de>,
{
    let label = Option::<String>::deserialize(deserializer)?;
    Ok(label.and_then(|label| label.parse().ok()).unwrap_or_default())
}

/// Whether the request carries additional items beyond the main one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ExtraItems {
    Yes,
    #[default]
    No,
}

impl_domain_label_conversions!(ExtraItems {
    Yes => "YES",
    No => "NO",
});

/// Requested item as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct RequestedItem {
    pub id: String,
    pub business_id: String,
    #[serde(default)]
    pub contact_person_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub request_status: StatusLabel,
    #[serde(default, deserialize_with = "lenient_priority")]
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub priority: Priority,
    #[serde(default)]
    #[cfg_attr(feature = "ts-gen", ts(type = "string | null"))]
    pub interval: Option<DeliveryInterval>,
    pub item_name: String,
    #[serde(default)]
    pub item_number: Option<String>,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub dimensions: Option<String>,
    #[serde(default)]
    pub qty: String,
    #[serde(default)]
    pub target_price: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    #[cfg_attr(feature = "ts-gen", ts(type = "string | null"))]
    pub extra_items: Option<ExtraItems>,
    #[serde(default)]
    pub extra_items_descriptions: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    /// Opaque server timestamp (RFC 3339 in practice)
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Payload for creating a requested item
///
/// Required fields are plain strings so that the client-side validator can
/// report every empty one before anything is sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRequestedItem {
    pub business_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_person_id: Option<String>,
    pub item_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
    pub qty: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    pub priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<DeliveryInterval>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_status: Option<RequestStatus>,
    pub extra_items: ExtraItems,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_items_descriptions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Partial update; only the fields that are set are sent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestedItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_person_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_status: Option<RequestStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<DeliveryInterval>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_items: Option<ExtraItems>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_items_descriptions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// List filters for requested items
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestedItemFilters {
    pub business_id: Option<String>,
    pub request_status: Option<RequestStatus>,
    pub priority: Option<Priority>,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// Body of the bulk status endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkStatusUpdate {
    pub ids: Vec<String>,
    pub request_status: RequestStatus,
}

/// Body of the bulk delete endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulkDelete {
    pub ids: Vec<String>,
}
