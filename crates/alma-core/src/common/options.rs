/// How the output reader treats data lines that do not have the expected
/// number of columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParsePolicy {
    /// Skip such lines; an output file without data rows is an empty series.
    #[default]
    Lenient,
    /// Reject such lines and reject outputs without any data row.
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    pub show_output: bool,
    pub show_start_stop: bool,
    pub parse_policy: ParsePolicy,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            show_output: false,
            show_start_stop: true,
            parse_policy: ParsePolicy::Lenient,
        }
    }
}

impl RunOptions {
    pub fn quiet() -> Self {
        Self {
            show_start_stop: false,
            ..Self::default()
        }
    }

    pub fn with_parse_policy(mut self, parse_policy: ParsePolicy) -> Self {
        self.parse_policy = parse_policy;
        self
    }
}
