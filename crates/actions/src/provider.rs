//! Data provider endpoints and response payloads.

use std::time::Duration;

use fetcher::FetchRequest;
use serde::{Deserialize, Deserializer};

/// Where the actions fetch their data from.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Base URL of the health information API.
    pub health_api_url: String,
    /// CoWIN public sessions-by-district endpoint.
    pub centers_url: String,
    /// WHO Global Health Observatory indicator endpoint.
    pub indicators_url: String,
    /// District used when the user does not name one.
    pub default_district_id: String,
    /// Timeout for each fetch attempt.
    pub timeout: Duration,
    /// Retries after the first attempt.
    pub max_retries: u32,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            health_api_url: "http://127.0.0.1:8000".to_string(),
            centers_url:
                "https://cdn-api.co-vin.in/api/v2/appointment/sessions/public/calendarByDistrict"
                    .to_string(),
            indicators_url: "https://ghoapi.azureedge.net/api/Indicator".to_string(),
            default_district_id: "145".to_string(),
            timeout: FetchRequest::DEFAULT_TIMEOUT,
            max_retries: FetchRequest::DEFAULT_MAX_RETRIES,
        }
    }
}

impl ProviderConfig {
    /// Build a request for a path under the health API.
    pub fn health_request(&self, path: &str, language: &str) -> FetchRequest {
        let url = format!("{}{}", self.health_api_url.trim_end_matches('/'), path);
        self.request(url, language)
    }

    /// Build a request for an absolute URL with the configured retry settings.
    pub fn request(&self, url: impl Into<String>, language: &str) -> FetchRequest {
        FetchRequest::new(url, language)
            .timeout(self.timeout)
            .max_retries(self.max_retries)
    }
}

/// A field that providers send either as one string or as a list.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum TextOrList {
    Text(String),
    List(Vec<String>),
}

impl TextOrList {
    fn joined(&self) -> String {
        match self {
            TextOrList::Text(text) => text.trim().to_string(),
            TextOrList::List(items) => items
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

/// Response of the topic endpoints (symptoms, schedule, prevention).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TopicPayload {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub symptoms: Option<TextOrList>,
    #[serde(default)]
    pub tips: Option<TextOrList>,
    #[serde(default)]
    pub schedule: Option<Vec<ScheduleEntry>>,
}

/// One row of a vaccine schedule.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleEntry {
    #[serde(default)]
    pub vaccine: Option<String>,
    #[serde(default)]
    pub due: Option<String>,
}

impl ScheduleEntry {
    /// `"vaccine (due)"`, or `None` for a row without a vaccine name.
    fn line(&self) -> Option<String> {
        let vaccine = non_blank(&self.vaccine)?;
        Some(match non_blank(&self.due) {
            Some(due) => format!("{} ({})", vaccine, due),
            None => vaccine.to_string(),
        })
    }
}

impl TopicPayload {
    /// The first non-empty summary-like field, as reply text.
    pub fn summary_text(&self) -> Option<String> {
        let schedule = self.schedule.as_ref().map(|entries| {
            entries
                .iter()
                .filter_map(ScheduleEntry::line)
                .collect::<Vec<_>>()
                .join(", ")
        });

        [
            self.summary.as_ref().map(|s| s.trim().to_string()),
            self.symptoms.as_ref().map(TextOrList::joined),
            self.tips.as_ref().map(TextOrList::joined),
            schedule,
        ]
        .into_iter()
        .flatten()
        .find(|s| !s.is_empty())
    }
}

/// Response of the CoWIN calendar endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CentersPayload {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub centers: Vec<Center>,
}

/// A vaccination center.
#[derive(Debug, Clone, Deserialize)]
pub struct Center {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub fee_type: Option<String>,
}

impl Center {
    /// `"name (address), fee_type"`, or `None` for an unnamed center.
    pub fn line(&self) -> Option<String> {
        let mut line = non_blank(&self.name)?.to_string();
        if let Some(address) = non_blank(&self.address) {
            line.push_str(&format!(" ({})", address));
        }
        if let Some(fee_type) = non_blank(&self.fee_type) {
            line.push_str(&format!(", {}", fee_type));
        }
        Some(line)
    }
}

/// Response of the WHO indicator endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IndicatorsPayload {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub value: Vec<Indicator>,
}

/// A WHO GHO indicator.
#[derive(Debug, Clone, Deserialize)]
pub struct Indicator {
    #[serde(rename = "IndicatorName", default)]
    pub indicator_name: Option<String>,
}

fn non_blank(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Providers send `null` for an empty list.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_preferred() {
        let payload: TopicPayload =
            serde_json::from_str(r#"{"summary":"fever","symptoms":["rash"]}"#).unwrap();
        assert_eq!(payload.summary_text().as_deref(), Some("fever"));
    }

    #[test]
    fn test_symptoms_list_joined() {
        let payload: TopicPayload =
            serde_json::from_str(r#"{"summary":"","symptoms":["fever"," rash",""]}"#).unwrap();
        assert_eq!(payload.summary_text().as_deref(), Some("fever, rash"));
    }

    #[test]
    fn test_schedule_rendered() {
        let payload: TopicPayload = serde_json::from_str(
            r#"{"schedule":[{"vaccine":"BCG","due":"at birth"},{"vaccine":"OPV"}]}"#,
        )
        .unwrap();
        assert_eq!(payload.summary_text().as_deref(), Some("BCG (at birth), OPV"));
    }

    #[test]
    fn test_schedule_rows_without_vaccine_skipped() {
        let payload: TopicPayload =
            serde_json::from_str(r#"{"schedule":[{"due":"at birth"},{"vaccine":"OPV","due":null}]}"#)
                .unwrap();
        assert_eq!(payload.summary_text().as_deref(), Some("OPV"));

        let payload: TopicPayload =
            serde_json::from_str(r#"{"schedule":[{"due":"at birth"}]}"#).unwrap();
        assert_eq!(payload.summary_text(), None);
    }

    #[test]
    fn test_center_line_with_partial_fields() {
        let payload: CentersPayload = serde_json::from_str(
            r#"{"centers":[
                {"name":"PHC Sadar","address":null,"fee_type":"Free"},
                {"address":"Block 2"},
                {"name":"CHC Khanna","address":"GT Road"}
            ]}"#,
        )
        .unwrap();
        let lines: Vec<String> = payload.centers.iter().filter_map(Center::line).collect();
        assert_eq!(lines, vec!["PHC Sadar, Free", "CHC Khanna (GT Road)"]);
    }

    #[test]
    fn test_null_lists_are_empty() {
        let centers: CentersPayload = serde_json::from_str(r#"{"centers":null}"#).unwrap();
        assert!(centers.centers.is_empty());
        let indicators: IndicatorsPayload = serde_json::from_str(r#"{"value":null}"#).unwrap();
        assert!(indicators.value.is_empty());
    }

    #[test]
    fn test_missing_fields_have_no_summary() {
        assert_eq!(TopicPayload::default().summary_text(), None);
        let payload: TopicPayload = serde_json::from_str(r#"{"other":1}"#).unwrap();
        assert_eq!(payload.summary_text(), None);
    }

    #[test]
    fn test_health_request_path() {
        let config = ProviderConfig {
            health_api_url: "http://api.local/".to_string(),
            max_retries: 1,
            ..Default::default()
        };
        let request = config.health_request("/vaccines/schedule", "hi");
        assert_eq!(request.endpoint, "http://api.local/vaccines/schedule");
        assert_eq!(request.language, "hi");
        assert_eq!(request.max_retries, 1);
    }
}
