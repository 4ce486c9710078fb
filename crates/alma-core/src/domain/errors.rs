pub type AlmaResult<T> = Result<T, AlmaError>;
pub type ParserResult<T> = AlmaResult<T>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlmaErrorCategory {
    InputValidationError,
    IoSystemError,
    ComputationError,
    InternalError,
}

impl AlmaErrorCategory {
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::InputValidationError => 2,
            Self::IoSystemError => 3,
            Self::ComputationError => 4,
            Self::InternalError => 5,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InputValidationError => "InputValidationError",
            Self::IoSystemError => "IoSystemError",
            Self::ComputationError => "ComputationError",
            Self::InternalError => "InternalError",
        }
    }
}

/// Error raised by every fallible operation of the automation layer.
///
/// `placeholder` is a stable dotted code (`INPUT.PARAMETER_LOOKUP`,
/// `RUN.ALMA_EXIT`, ...) that callers can match on without parsing messages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} [{}] {}", .category.as_str(), .placeholder, .message)]
pub struct AlmaError {
    category: AlmaErrorCategory,
    placeholder: &'static str,
    message: String,
}

impl AlmaError {
    pub fn new(
        category: AlmaErrorCategory,
        placeholder: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            placeholder,
            message: message.into(),
        }
    }

    pub fn input_validation(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(AlmaErrorCategory::InputValidationError, placeholder, message)
    }

    pub fn io_system(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(AlmaErrorCategory::IoSystemError, placeholder, message)
    }

    pub fn computation(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(AlmaErrorCategory::ComputationError, placeholder, message)
    }

    pub fn internal(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(AlmaErrorCategory::InternalError, placeholder, message)
    }

    pub const fn category(&self) -> AlmaErrorCategory {
        self.category
    }

    pub const fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn exit_code(&self) -> i32 {
        self.category.exit_code()
    }

    pub fn diagnostic_line(&self) -> String {
        format!("ERROR: [{}] {}", self.placeholder, self.message)
    }

    pub fn fatal_exit_line(&self) -> String {
        format!("FATAL EXIT CODE: {}", self.exit_code())
    }
}

#[cfg(test)]
mod tests {
    use super::{AlmaError, AlmaErrorCategory};

    #[test]
    fn exit_mapping_is_stable() {
        let cases = [
            (AlmaErrorCategory::InputValidationError, 2, "InputValidationError"),
            (AlmaErrorCategory::IoSystemError, 3, "IoSystemError"),
            (AlmaErrorCategory::ComputationError, 4, "ComputationError"),
            (AlmaErrorCategory::InternalError, 5, "InternalError"),
        ];

        for (category, exit_code, name) in cases {
            assert_eq!(category.exit_code(), exit_code);
            assert_eq!(category.as_str(), name);
        }
    }

    #[test]
    fn fatal_error_renders_diagnostic_lines() {
        let error = AlmaError::input_validation(
            "INPUT.PARAMETER_LOOKUP",
            "parameter 'no_layer' is not defined in 'parameters.json'",
        );

        assert_eq!(error.exit_code(), 2);
        assert_eq!(
            error.diagnostic_line(),
            "ERROR: [INPUT.PARAMETER_LOOKUP] parameter 'no_layer' is not defined in 'parameters.json'"
        );
        assert_eq!(error.fatal_exit_line(), "FATAL EXIT CODE: 2");
    }

    #[test]
    fn display_includes_category_and_code() {
        let error = AlmaError::computation("RUN.ALMA_EXIT", "ALMA3 exited with exit code 3");
        assert_eq!(
            error.to_string(),
            "ComputationError [RUN.ALMA_EXIT] ALMA3 exited with exit code 3"
        );
    }
}
