//! Scoring engine behind `POST /api/health-assessment`.
//!
//! Turns a submitted [`AssessmentAnswers`] record into the scored
//! [`ResultRecord`] the dashboard consumes. Scoring is deterministic: the
//! score starts at 100 and each reported condition, symptom, or adverse
//! lifestyle answer deducts a fixed amount, saturating at 0.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Days, NaiveDate, Utc};

use api_shared::model::{
    AssessmentAnswers, Checkup, DietPlan, HealthAssessment, Recommendations, ResultRecord,
    UserProfile,
};

use crate::dashboard::bmi;
use crate::error::{AnswersError, AnswersResult};

const CONDITION_DEDUCTION: i32 = 8;
const SYMPTOM_DEDUCTION: i32 = 5;

/// Checks the submitted record against the original form's `required`
/// hints: name, age, and gender must be present, and numeric fields must
/// parse when non-empty.
pub fn validate_answers(answers: &AssessmentAnswers) -> AnswersResult<()> {
    if answers.name.trim().is_empty() {
        return Err(AnswersError::MissingName);
    }
    if answers.age.trim().is_empty() {
        return Err(AnswersError::MissingAge);
    }
    if answers.gender.trim().is_empty() {
        return Err(AnswersError::MissingGender);
    }

    parse_number("age", &answers.age)?;
    if !answers.height.trim().is_empty() {
        parse_number("height", &answers.height)?;
    }
    if !answers.weight.trim().is_empty() {
        parse_number("weight", &answers.weight)?;
    }

    Ok(())
}

/// Scores an answers record against today's date.
pub fn score_assessment(answers: &AssessmentAnswers) -> ResultRecord {
    score_assessment_at(answers, Utc::now().date_naive())
}

/// Deterministic scoring with an explicit reference date for the checkup
/// schedule.
pub fn score_assessment_at(answers: &AssessmentAnswers, today: NaiveDate) -> ResultRecord {
    let age = answers.age.trim().parse::<u32>().ok();
    let height = positive_number(&answers.height);
    let weight = positive_number(&answers.weight);

    let mut score: i32 = 100;
    let mut flags: Vec<String> = Vec::new();

    // Duplicate checkbox entries must not be charged twice.
    let conditions = distinct_entries(&answers.existing_conditions);
    for condition in &conditions {
        score -= CONDITION_DEDUCTION;
        flags.push(format!("Monitor existing condition: {condition}"));
    }

    let symptoms = distinct_entries(&answers.current_symptoms);
    score -= SYMPTOM_DEDUCTION * symptoms.len() as i32;
    if symptoms.len() >= 3 {
        flags.push("Multiple active symptoms reported".to_owned());
    }

    match answers.smoking_habits.as_str() {
        "regular" => {
            score -= 15;
            flags.push("Regular smoker".to_owned());
        }
        "occasional" => score -= 8,
        "former" => score -= 3,
        _ => {}
    }

    match answers.alcohol_consumption.as_str() {
        "daily" => {
            score -= 10;
            flags.push("Daily alcohol consumption".to_owned());
        }
        "weekly" => score -= 4,
        _ => {}
    }

    match answers.stress_level.as_str() {
        "severe" => {
            score -= 12;
            flags.push("Severe stress level reported".to_owned());
        }
        "high" => score -= 8,
        "moderate" => score -= 3,
        _ => {}
    }

    match answers.sleep_hours.as_str() {
        "less-than-5" => {
            score -= 8;
            flags.push("Sleeping less than 5 hours per night".to_owned());
        }
        "5-6" => score -= 4,
        "more-than-8" => score -= 2,
        _ => {}
    }

    match answers.exercise_frequency.as_str() {
        "never" => {
            score -= 8;
            flags.push("No regular exercise".to_owned());
        }
        "1-2-times" => score -= 3,
        _ => {}
    }

    let body_mass_index = match (height, weight) {
        (Some(h), Some(w)) => Some(bmi(h, w)),
        _ => None,
    };
    if let Some(value) = body_mass_index {
        if value < 18.5 {
            score -= 5;
            flags.push("BMI below healthy range".to_owned());
        } else if value >= 30.0 {
            score -= 10;
            flags.push("BMI above healthy range".to_owned());
        } else if value >= 25.0 {
            score -= 5;
        }
    }

    let health_score = score.clamp(0, 100) as u32;
    tracing::debug!(health_score, flags = flags.len(), "scored assessment");

    ResultRecord {
        user: UserProfile {
            name: answers.name.trim().to_owned(),
            age,
            blood_type: non_empty(&answers.blood_type),
            height,
            weight,
        },
        health_assessment: Some(HealthAssessment {
            health_score,
            warning_flags: flags,
        }),
        recommendations: Some(Recommendations {
            diet: diet_plan_for(&answers.diet_type),
        }),
        metrics: Some(build_metrics(answers, body_mass_index)),
        checkups: Some(schedule_checkups(health_score, age, today)),
    }
}

fn parse_number(field: &'static str, value: &str) -> AnswersResult<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| AnswersError::InvalidNumber {
            field,
            value: value.to_owned(),
        })
}

fn positive_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|n| *n > 0.0)
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Distinct non-blank entries, ignoring the "None" checkbox sentinel.
fn distinct_entries(entries: &[String]) -> BTreeSet<&str> {
    entries
        .iter()
        .map(|entry| entry.trim())
        .filter(|entry| !entry.is_empty() && !entry.eq_ignore_ascii_case("none"))
        .collect()
}

fn build_metrics(answers: &AssessmentAnswers, body_mass_index: Option<f64>) -> BTreeMap<String, String> {
    let mut metrics = BTreeMap::new();

    if let Some(value) = body_mass_index {
        metrics.insert("BMI".to_owned(), format!("{value:.1}"));
        let category = if value < 18.5 {
            "Underweight"
        } else if value < 25.0 {
            "Healthy"
        } else if value < 30.0 {
            "Overweight"
        } else {
            "Obese"
        };
        metrics.insert("BMI category".to_owned(), category.to_owned());
    }

    if let Some(sleep) = non_empty(&answers.sleep_hours) {
        metrics.insert("Sleep".to_owned(), sleep);
    }
    if let Some(exercise) = non_empty(&answers.exercise_frequency) {
        metrics.insert("Exercise frequency".to_owned(), exercise);
    }
    if let Some(stress) = non_empty(&answers.stress_level) {
        metrics.insert("Stress level".to_owned(), stress);
    }

    metrics
}

fn diet_plan_for(diet_type: &str) -> DietPlan {
    match diet_type {
        "vegetarian" | "vegan" => DietPlan {
            breakfast: "Overnight oats with chia seeds and berries".to_owned(),
            lunch: "Quinoa bowl with roasted vegetables and chickpeas".to_owned(),
            dinner: "Lentil curry with brown rice and spinach".to_owned(),
            snacks: "Hummus with carrot sticks".to_owned(),
            include: vec![
                "Leafy greens".to_owned(),
                "Berries".to_owned(),
                "Nuts".to_owned(),
                "Legumes".to_owned(),
                "Whole grains".to_owned(),
            ],
            limit: vec![
                "Processed foods".to_owned(),
                "Added sugars".to_owned(),
                "Excessive caffeine".to_owned(),
            ],
        },
        "keto" => DietPlan {
            breakfast: "Scrambled eggs with avocado".to_owned(),
            lunch: "Chicken salad with olive oil dressing".to_owned(),
            dinner: "Baked salmon with buttered greens".to_owned(),
            snacks: "A handful of almonds".to_owned(),
            include: vec![
                "Leafy greens".to_owned(),
                "Nuts".to_owned(),
                "Fatty fish".to_owned(),
                "Olive oil".to_owned(),
            ],
            limit: vec![
                "Added sugars".to_owned(),
                "Refined grains".to_owned(),
                "Starchy vegetables".to_owned(),
            ],
        },
        _ => DietPlan {
            breakfast: "Oatmeal with berries and nuts".to_owned(),
            lunch: "Grilled chicken salad with olive oil dressing".to_owned(),
            dinner: "Baked salmon with steamed vegetables".to_owned(),
            snacks: "Apple slices with almond butter".to_owned(),
            include: vec![
                "Leafy greens".to_owned(),
                "Berries".to_owned(),
                "Nuts".to_owned(),
                "Fatty fish".to_owned(),
                "Whole grains".to_owned(),
            ],
            limit: vec![
                "Processed foods".to_owned(),
                "Added sugars".to_owned(),
                "Excessive caffeine".to_owned(),
            ],
        },
    }
}

fn schedule_checkups(health_score: u32, age: Option<u32>, today: NaiveDate) -> Vec<Checkup> {
    let physical_in = if health_score < 40 {
        14
    } else if health_score < 60 {
        30
    } else {
        180
    };

    let mut checkups = vec![
        Checkup {
            date: today + Days::new(physical_in),
            kind: "General physical".to_owned(),
            provider: "Primary care".to_owned(),
        },
        Checkup {
            date: today + Days::new(90),
            kind: "Dental cleaning".to_owned(),
            provider: "Dental clinic".to_owned(),
        },
    ];

    if age.is_some_and(|age| age >= 40) {
        checkups.push(Checkup {
            date: today + Days::new(120),
            kind: "Eye exam".to_owned(),
            provider: "Optometrist".to_owned(),
        });
    }

    checkups
}
