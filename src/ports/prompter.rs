use crate::domain::AppError;

/// Port for interactive questions.
///
/// Every method returns the default (or `None`) when the answer is left empty.
pub trait Prompter {
    /// Free-text input with a default.
    fn input(&self, prompt: &str, default: &str) -> Result<String, AppError>;

    /// Free-text input that may be left blank.
    fn optional_input(
        &self,
        prompt: &str,
        default: Option<&str>,
    ) -> Result<Option<String>, AppError>;

    /// Pick one item; returns the selected index.
    fn select(&self, prompt: &str, items: &[String], default: usize) -> Result<usize, AppError>;

    /// Pick any number of items; returns the selected indices.
    fn multi_select(
        &self,
        prompt: &str,
        items: &[String],
        defaults: &[bool],
    ) -> Result<Vec<usize>, AppError>;

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, AppError>;
}
