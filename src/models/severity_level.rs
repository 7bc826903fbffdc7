use serde_repr::Serialize_repr;

/// Defines the level of severity for an exception.
///
/// Serializes as the numeric codes the ingestion schema defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr)]
#[repr(i32)]
pub enum SeverityLevel {
    Verbose = 0,
    Information = 1,
    Warning = 2,
    Error = 3,
    Critical = 4,
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(SeverityLevel::Verbose, "0" ; "verbose")]
    #[test_case(SeverityLevel::Information, "1" ; "information")]
    #[test_case(SeverityLevel::Warning, "2" ; "warning")]
    #[test_case(SeverityLevel::Error, "3" ; "error")]
    #[test_case(SeverityLevel::Critical, "4" ; "critical")]
    fn serializes_as_number(level: SeverityLevel, expected: &'static str) {
        assert_eq!(expected, serde_json::to_string(&level).unwrap());
    }
}
