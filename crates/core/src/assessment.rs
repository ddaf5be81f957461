//! Assessment form controller.
//!
//! Owns the four-section questionnaire wizard and the single mutable
//! [`AssessmentAnswers`] record for the in-progress session. The record is
//! mutated field-by-field as the user types and transferred by value at
//! submit; submission itself goes through `hale-client`, so a failed submit
//! leaves the form untouched.

use api_shared::model::AssessmentAnswers;

/// Number of wizard sections.
pub const FORM_STEPS: u8 = 4;

/// Checkbox options offered on the health conditions section.
pub const CONDITION_OPTIONS: [&str; 7] = [
    "Diabetes",
    "Hypertension",
    "Heart Disease",
    "Asthma",
    "Cancer",
    "Thyroid Disorder",
    "None",
];

/// Checkbox options offered on the current symptoms section.
pub const SYMPTOM_OPTIONS: [&str; 10] = [
    "Fever",
    "Cough",
    "Shortness of breath",
    "Fatigue",
    "Headache",
    "Body aches",
    "Sore throat",
    "Nausea",
    "Dizziness",
    "None",
];

/// Scalar fields of the answers record, one per single-valued input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarField {
    Name,
    Age,
    Gender,
    BloodType,
    Height,
    Weight,
    SleepHours,
    ExerciseFrequency,
    DietType,
    AlcoholConsumption,
    SmokingHabits,
    StressLevel,
    AdditionalNotes,
}

/// List fields of the answers record, one per multi-valued input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListCategory {
    ExistingConditions,
    Medications,
    Allergies,
    FamilyHistory,
    CurrentSymptoms,
}

/// Wizard state: the current section and the accumulated answers.
#[derive(Debug, Clone, Default)]
pub struct AssessmentForm {
    current_step: u8,
    answers: AssessmentAnswers,
}

impl AssessmentForm {
    /// Starts a fresh form at section 1 with empty answers.
    pub fn new() -> Self {
        Self {
            current_step: 1,
            answers: AssessmentAnswers::default(),
        }
    }

    pub fn current_step(&self) -> u8 {
        self.current_step
    }

    pub fn answers(&self) -> &AssessmentAnswers {
        &self.answers
    }

    /// Moves to the next section. No-op on the final section.
    pub fn advance(&mut self) {
        if self.current_step < FORM_STEPS {
            self.current_step += 1;
        }
    }

    /// Moves to the previous section. No-op on the first section.
    pub fn retreat(&mut self) {
        if self.current_step > 1 {
            self.current_step -= 1;
        }
    }

    /// Whether a "previous" control should be shown.
    pub fn can_retreat(&self) -> bool {
        self.current_step > 1
    }

    /// Whether the form shows "submit" instead of "next".
    pub fn is_final_step(&self) -> bool {
        self.current_step == FORM_STEPS
    }

    /// Progress fraction for the progress bar, `current_step / 4`.
    pub fn progress(&self) -> f32 {
        f32::from(self.current_step) / f32::from(FORM_STEPS)
    }

    /// Overwrites a scalar field with the latest input value.
    pub fn set_scalar(&mut self, field: ScalarField, value: impl Into<String>) {
        *self.scalar_mut(field) = value.into();
    }

    /// Checkbox semantics: adds `value` when `present` and not already in the
    /// list, removes every occurrence otherwise. Toggling the same value on
    /// twice yields a single occurrence.
    pub fn toggle_list_member(&mut self, category: ListCategory, value: &str, present: bool) {
        let list = self.list_mut(category);
        if present {
            if !list.iter().any(|entry| entry == value) {
                list.push(value.to_owned());
            }
        } else {
            list.retain(|entry| entry != value);
        }
    }

    /// Textarea semantics: replaces the list with one entry per line. Empty
    /// lines are kept as empty strings and duplicates are preserved, matching
    /// the literal input.
    pub fn set_list_from_text(&mut self, category: ListCategory, text: &str) {
        *self.list_mut(category) = text.split('\n').map(str::to_owned).collect();
    }

    /// Transfers the answers by value for submission. The form is consumed;
    /// a new session starts from [`AssessmentForm::new`].
    pub fn into_answers(self) -> AssessmentAnswers {
        self.answers
    }

    fn scalar_mut(&mut self, field: ScalarField) -> &mut String {
        let answers = &mut self.answers;
        match field {
            ScalarField::Name => &mut answers.name,
            ScalarField::Age => &mut answers.age,
            ScalarField::Gender => &mut answers.gender,
            ScalarField::BloodType => &mut answers.blood_type,
            ScalarField::Height => &mut answers.height,
            ScalarField::Weight => &mut answers.weight,
            ScalarField::SleepHours => &mut answers.sleep_hours,
            ScalarField::ExerciseFrequency => &mut answers.exercise_frequency,
            ScalarField::DietType => &mut answers.diet_type,
            ScalarField::AlcoholConsumption => &mut answers.alcohol_consumption,
            ScalarField::SmokingHabits => &mut answers.smoking_habits,
            ScalarField::StressLevel => &mut answers.stress_level,
            ScalarField::AdditionalNotes => &mut answers.additional_notes,
        }
    }

    fn list_mut(&mut self, category: ListCategory) -> &mut Vec<String> {
        let answers = &mut self.answers;
        match category {
            ListCategory::ExistingConditions => &mut answers.existing_conditions,
            ListCategory::Medications => &mut answers.medications,
            ListCategory::Allergies => &mut answers.allergies,
            ListCategory::FamilyHistory => &mut answers.family_history,
            ListCategory::CurrentSymptoms => &mut answers.current_symptoms,
        }
    }
}
