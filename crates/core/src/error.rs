/// Validation failures for a submitted answers record.
///
/// Mirrors the `required` hints on the original form: name, age, and gender
/// must be present, and numeric fields must parse when supplied.
#[derive(Debug, thiserror::Error)]
pub enum AnswersError {
    #[error("name is required")]
    MissingName,
    #[error("age is required")]
    MissingAge,
    #[error("gender is required")]
    MissingGender,
    #[error("{field} is not a number: {value}")]
    InvalidNumber { field: &'static str, value: String },
}

pub type AnswersResult<T> = std::result::Result<T, AnswersError>;
