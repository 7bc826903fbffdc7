use serde::Serialize;

/// Exception details of the exception in a chain.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExceptionDetails {
    /// In case exception is nested (outer exception contains inner one), the
    /// id and outerId properties are used to represent the nesting.
    pub id: i32,

    /// The value of outerId is a reference to an element in exceptions that
    /// represents the outer exception.
    pub outer_id: i32,

    /// Exception type name.
    pub type_name: String,

    /// Exception message.
    pub message: String,

    /// Indicates if full exception stack is provided in the exception.
    pub has_full_stack: bool,

    /// Text describing the stack. Either stack or parsedStack should have a
    /// value.
    pub stack: String,

    /// List of stack frames. Levels are ordered from caller to callee.
    pub parsed_stack: Vec<StackFrame>,
}

impl ExceptionDetails {
    /// Single unchained exception with a raw stack text and no parsed frames.
    pub fn new(
        type_name: impl Into<String>,
        message: impl Into<String>,
        stack: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            outer_id: 0,
            type_name: type_name.into(),
            message: message.into(),
            has_full_stack: false,
            stack: stack.into(),
            parsed_stack: Vec::new(),
        }
    }
}

/// Stack frame information.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StackFrame {
    /// Level in the call chain. Level zero is the last frame where the
    /// exception was thrown.
    pub level: i32,

    pub method: String,

    pub assembly: String,

    pub file_name: String,

    pub line: i32,
}
