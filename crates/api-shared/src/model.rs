//! Wire types for the assessment API.
//!
//! All bodies are JSON with camelCase keys, matching what the browser front
//! end sends and expects. Optional sections of [`ResultRecord`] are omitted
//! from the wire entirely when absent; consumers must tolerate every
//! combination of missing sections.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The questionnaire record accumulated by the assessment form.
///
/// Every scalar is a string because the values come straight from HTML
/// inputs; parsing happens server-side during scoring. List fields keep
/// insertion order and may contain duplicates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct AssessmentAnswers {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub blood_type: String,
    pub height: String,
    pub weight: String,

    pub sleep_hours: String,
    pub exercise_frequency: String,
    pub diet_type: String,
    pub alcohol_consumption: String,
    pub smoking_habits: String,
    pub stress_level: String,
    pub additional_notes: String,

    pub existing_conditions: Vec<String>,
    pub medications: Vec<String>,
    pub allergies: Vec<String>,
    pub family_history: Vec<String>,
    pub current_symptoms: Vec<String>,
}

/// The scored record consumed by the dashboard.
///
/// `user` is always present; the remaining sections are optional from the
/// producer's perspective and each one renders a placeholder when missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    pub user: UserProfile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_assessment: Option<HealthAssessment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Recommendations>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkups: Option<Vec<Checkup>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_type: Option<String>,
    /// Height in centimetres.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Weight in kilograms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthAssessment {
    /// Overall score, expected range 0-100.
    pub health_score: u32,
    #[serde(default)]
    pub warning_flags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    pub diet: DietPlan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DietPlan {
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
    pub snacks: String,
    #[serde(default)]
    pub include: Vec<String>,
    #[serde(default)]
    pub limit: Vec<String>,
}

/// A scheduled follow-up appointment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Checkup {
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: String,
    pub provider: String,
}

/// Chat request body for `POST /api/chatbot`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatReq {
    pub message: String,
}

/// Chat response body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatRes {
    pub reply: String,
}

/// Health check response body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_use_camel_case_keys() {
        let answers = AssessmentAnswers {
            name: "Ada".into(),
            blood_type: "O+".into(),
            existing_conditions: vec!["Asthma".into()],
            ..Default::default()
        };

        let json = serde_json::to_value(&answers).expect("serialize answers");
        assert_eq!(json["bloodType"], "O+");
        assert_eq!(json["existingConditions"][0], "Asthma");
    }

    #[test]
    fn result_record_tolerates_missing_sections() {
        let json = r#"{"user":{"name":"Ada","age":35}}"#;
        let record: ResultRecord = serde_json::from_str(json).expect("deserialize record");

        assert_eq!(record.user.name, "Ada");
        assert_eq!(record.user.age, Some(35));
        assert!(record.user.height.is_none());
        assert!(record.health_assessment.is_none());
        assert!(record.recommendations.is_none());
        assert!(record.metrics.is_none());
        assert!(record.checkups.is_none());
    }

    #[test]
    fn absent_sections_are_omitted_from_the_wire() {
        let record = ResultRecord {
            user: UserProfile {
                name: "Ada".into(),
                age: None,
                blood_type: None,
                height: None,
                weight: None,
            },
            health_assessment: None,
            recommendations: None,
            metrics: None,
            checkups: None,
        };

        let json = serde_json::to_value(&record).expect("serialize record");
        assert!(json.get("healthAssessment").is_none());
        assert!(json.get("metrics").is_none());
        assert!(json.get("checkups").is_none());
    }

    #[test]
    fn checkup_kind_is_named_type_on_the_wire() {
        let checkup = Checkup {
            date: NaiveDate::from_ymd_opt(2026, 9, 15).expect("valid date"),
            kind: "General physical".into(),
            provider: "Primary care".into(),
        };

        let json = serde_json::to_value(&checkup).expect("serialize checkup");
        assert_eq!(json["type"], "General physical");
        assert_eq!(json["date"], "2026-09-15");
    }
}
