//! Dashboard presenter.
//!
//! Pure view-model construction over a [`ResultRecord`]. The record is
//! immutable once received; every optional section renders a fixed
//! placeholder when absent rather than failing, so a sparse record still
//! produces a complete dashboard.

use api_shared::model::ResultRecord;

pub const NO_DIET_PLACEHOLDER: &str = "No diet recommendations available";
pub const NO_METRICS_PLACEHOLDER: &str = "No metrics available";
pub const NO_CHECKUPS_PLACEHOLDER: &str = "No checkups scheduled";
pub const NOT_AVAILABLE: &str = "Not available";
pub const NOT_SPECIFIED: &str = "Not specified";

/// Discrete status bucket derived from the health score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
    Healthy,
    Fair,
    NeedsAttention,
    NeedsCheckup,
    Unknown,
}

impl HealthStatus {
    /// Fixed thresholds: `>=80` healthy, `>=60` fair, `>=40` needs
    /// attention, anything lower needs a checkup. An absent score is
    /// unknown.
    pub fn from_score(score: Option<u32>) -> Self {
        match score {
            Some(score) if score >= 80 => Self::Healthy,
            Some(score) if score >= 60 => Self::Fair,
            Some(score) if score >= 40 => Self::NeedsAttention,
            Some(_) => Self::NeedsCheckup,
            None => Self::Unknown,
        }
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Healthy => "healthy",
            Self::Fair => "fair",
            Self::NeedsAttention => "needs attention",
            Self::NeedsCheckup => "needs checkup",
            Self::Unknown => "unknown",
        };
        write!(f, "{label}")
    }
}

/// Body mass index from height in centimetres and weight in kilograms,
/// rounded to one decimal place.
pub fn bmi(height_cm: f64, weight_kg: f64) -> f64 {
    let raw = weight_kg / (height_cm / 100.0).powi(2);
    (raw * 10.0).round() / 10.0
}

/// BMI display value; both measurements must be present.
pub fn bmi_display(height_cm: Option<f64>, weight_kg: Option<f64>) -> String {
    match (height_cm, weight_kg) {
        (Some(height), Some(weight)) if height > 0.0 => format!("{:.1}", bmi(height, weight)),
        _ => NOT_AVAILABLE.to_owned(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileItem {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricItem {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckupItem {
    pub date: String,
    pub kind: String,
    pub provider: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DietView {
    /// Meal label and text, in display order.
    pub meals: Vec<(&'static str, String)>,
    pub include: Vec<String>,
    pub limit: Vec<String>,
}

/// Everything the dashboard renders, fully derived from one record.
///
/// Optional sections stay `None` when the record lacked them; the explicit
/// default branch lives in [`DashboardView::render_lines`].
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub greeting: String,
    pub profile: Vec<ProfileItem>,
    pub status: HealthStatus,
    /// Score display, `"?"` when no assessment section is present.
    pub score: String,
    pub warning_flags: Vec<String>,
    pub diet: Option<DietView>,
    pub metrics: Option<Vec<MetricItem>>,
    pub checkups: Option<Vec<CheckupItem>>,
}

impl DashboardView {
    pub fn from_record(record: &ResultRecord) -> Self {
        let user = &record.user;
        let score = record
            .health_assessment
            .as_ref()
            .map(|assessment| assessment.health_score);

        let profile = vec![
            ProfileItem {
                label: "Name",
                value: user.name.clone(),
            },
            ProfileItem {
                label: "Age",
                value: user
                    .age
                    .map_or_else(|| NOT_SPECIFIED.to_owned(), |age| age.to_string()),
            },
            ProfileItem {
                label: "Blood Type",
                value: user
                    .blood_type
                    .clone()
                    .unwrap_or_else(|| NOT_SPECIFIED.to_owned()),
            },
            ProfileItem {
                label: "Height",
                value: user
                    .height
                    .map_or_else(|| NOT_SPECIFIED.to_owned(), |h| format!("{h} cm")),
            },
            ProfileItem {
                label: "Weight",
                value: user
                    .weight
                    .map_or_else(|| NOT_SPECIFIED.to_owned(), |w| format!("{w} kg")),
            },
            ProfileItem {
                label: "BMI",
                value: bmi_display(user.height, user.weight),
            },
        ];

        let diet = record.recommendations.as_ref().map(|recs| DietView {
            meals: vec![
                ("Breakfast", recs.diet.breakfast.clone()),
                ("Lunch", recs.diet.lunch.clone()),
                ("Dinner", recs.diet.dinner.clone()),
                ("Snacks", recs.diet.snacks.clone()),
            ],
            include: recs.diet.include.clone(),
            limit: recs.diet.limit.clone(),
        });

        let metrics = record.metrics.as_ref().map(|metrics| {
            metrics
                .iter()
                .map(|(name, value)| MetricItem {
                    name: name.clone(),
                    value: value.clone(),
                })
                .collect()
        });

        let checkups = record.checkups.as_ref().map(|checkups| {
            checkups
                .iter()
                .map(|checkup| CheckupItem {
                    date: checkup.date.format("%Y-%m-%d").to_string(),
                    kind: checkup.kind.clone(),
                    provider: checkup.provider.clone(),
                })
                .collect()
        });

        Self {
            greeting: format!("Welcome, {}", user.name),
            profile,
            status: HealthStatus::from_score(score),
            score: score.map_or_else(|| "?".to_owned(), |s| s.to_string()),
            warning_flags: record
                .health_assessment
                .as_ref()
                .map(|assessment| assessment.warning_flags.clone())
                .unwrap_or_default(),
            diet,
            metrics,
            checkups,
        }
    }

    /// Flattens the view into display lines, substituting the fixed
    /// placeholder for each missing section.
    pub fn render_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        lines.push(self.greeting.clone());
        lines.push(format!("Health Status: {}", self.status));
        lines.push(format!("Health Score: {}", self.score));

        for item in &self.profile {
            lines.push(format!("{}: {}", item.label, item.value));
        }

        for flag in &self.warning_flags {
            lines.push(format!("Warning: {flag}"));
        }

        match &self.diet {
            Some(diet) => {
                for (label, text) in &diet.meals {
                    lines.push(format!("{label}: {text}"));
                }
                lines.push(format!("Include: {}", diet.include.join(", ")));
                lines.push(format!("Limit: {}", diet.limit.join(", ")));
            }
            None => lines.push(NO_DIET_PLACEHOLDER.to_owned()),
        }

        match &self.metrics {
            Some(metrics) => {
                for metric in metrics {
                    lines.push(format!("{}: {}", metric.name, metric.value));
                }
            }
            None => lines.push(NO_METRICS_PLACEHOLDER.to_owned()),
        }

        match &self.checkups {
            Some(checkups) => {
                for checkup in checkups {
                    lines.push(format!(
                        "{} - {} ({})",
                        checkup.date, checkup.kind, checkup.provider
                    ));
                }
            }
            None => lines.push(NO_CHECKUPS_PLACEHOLDER.to_owned()),
        }

        lines
    }
}

/// Lifecycle of one dashboard mount.
///
/// `Loading` is entered only when no record was pre-supplied; `Ready` and
/// `Error` are terminal for that mount, with re-navigation as the only
/// recovery path.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardState {
    Loading,
    Ready(Box<DashboardView>),
    Error(String),
}

impl DashboardState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api_shared::model::{HealthAssessment, UserProfile};

    fn bare_record(name: &str) -> ResultRecord {
        ResultRecord {
            user: UserProfile {
                name: name.into(),
                age: Some(35),
                blood_type: Some("O+".into()),
                height: Some(175.0),
                weight: Some(70.0),
            },
            health_assessment: None,
            recommendations: None,
            metrics: None,
            checkups: None,
        }
    }

    #[test]
    fn status_bucket_boundaries() {
        assert_eq!(HealthStatus::from_score(Some(80)), HealthStatus::Healthy);
        assert_eq!(HealthStatus::from_score(Some(79)), HealthStatus::Fair);
        assert_eq!(HealthStatus::from_score(Some(60)), HealthStatus::Fair);
        assert_eq!(
            HealthStatus::from_score(Some(59)),
            HealthStatus::NeedsAttention
        );
        assert_eq!(
            HealthStatus::from_score(Some(40)),
            HealthStatus::NeedsAttention
        );
        assert_eq!(
            HealthStatus::from_score(Some(39)),
            HealthStatus::NeedsCheckup
        );
        assert_eq!(HealthStatus::from_score(None), HealthStatus::Unknown);
    }

    #[test]
    fn status_labels_use_spaces() {
        assert_eq!(HealthStatus::NeedsAttention.to_string(), "needs attention");
        assert_eq!(HealthStatus::NeedsCheckup.to_string(), "needs checkup");
    }

    #[test]
    fn bmi_rounds_to_one_decimal() {
        assert_eq!(bmi(175.0, 70.0), 22.9);
        assert_eq!(bmi_display(Some(175.0), Some(70.0)), "22.9");
    }

    #[test]
    fn bmi_needs_both_measurements() {
        assert_eq!(bmi_display(None, Some(70.0)), NOT_AVAILABLE);
        assert_eq!(bmi_display(Some(175.0), None), NOT_AVAILABLE);
        assert_eq!(bmi_display(None, None), NOT_AVAILABLE);
    }

    #[test]
    fn sparse_record_renders_placeholders_without_panicking() {
        let view = DashboardView::from_record(&bare_record("Ada"));
        assert_eq!(view.status, HealthStatus::Unknown);
        assert_eq!(view.score, "?");

        let lines = view.render_lines();
        assert!(lines.contains(&NO_DIET_PLACEHOLDER.to_owned()));
        assert!(lines.contains(&NO_METRICS_PLACEHOLDER.to_owned()));
        assert!(lines.contains(&NO_CHECKUPS_PLACEHOLDER.to_owned()));
    }

    #[test]
    fn missing_metrics_alone_renders_the_metrics_placeholder() {
        let mut record = bare_record("Ada");
        record.health_assessment = Some(HealthAssessment {
            health_score: 85,
            warning_flags: vec![],
        });

        let view = DashboardView::from_record(&record);
        assert_eq!(view.status, HealthStatus::Healthy);
        assert_eq!(view.score, "85");
        assert!(view.metrics.is_none());
        assert!(view
            .render_lines()
            .contains(&NO_METRICS_PLACEHOLDER.to_owned()));
    }

    #[test]
    fn profile_includes_derived_bmi() {
        let view = DashboardView::from_record(&bare_record("Ada"));
        let bmi_item = view
            .profile
            .iter()
            .find(|item| item.label == "BMI")
            .expect("bmi row");
        assert_eq!(bmi_item.value, "22.9");
        assert_eq!(view.greeting, "Welcome, Ada");
    }

    #[test]
    fn loading_is_the_only_non_terminal_state() {
        assert!(!DashboardState::Loading.is_terminal());
        assert!(DashboardState::Error("boom".into()).is_terminal());
        let view = DashboardView::from_record(&bare_record("Ada"));
        assert!(DashboardState::Ready(Box::new(view)).is_terminal());
    }
}
