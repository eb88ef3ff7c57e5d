use crate::errors::{AppError, AppResult};

/// Value of a field that is either typed in or picked from the values
/// already present in the schedule (locations, categories).
///
/// `picked` is 1-based, matching the numbering printed by `options`.
/// Returns `None` when neither is given; giving both is rejected.
pub fn choose(
    field: &str,
    typed: Option<&str>,
    picked: Option<usize>,
    known: &[String],
) -> AppResult<Option<String>> {
    match (typed, picked) {
        (Some(_), Some(_)) => Err(AppError::Validation(format!(
            "{field}: give either a new value or a pick from the list, not both"
        ))),
        (Some(t), None) => {
            if t.trim().is_empty() {
                return Err(AppError::Validation(format!("{field} is empty")));
            }
            Ok(Some(t.trim().to_string()))
        }
        (None, Some(n)) => n
            .checked_sub(1)
            .and_then(|i| known.get(i))
            .cloned()
            .map(Some)
            .ok_or_else(|| {
                AppError::Validation(format!(
                    "{field}: pick {n} does not exist ({} known values)",
                    known.len()
                ))
            }),
        (None, None) => Ok(None),
    }
}
