#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    InvalidArguments = 2,
    SourceNotFound = 3,
    PermissionError = 4,
    RenameError = 5,
    Cancelled = 6,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success as i32, 0);
        assert_eq!(ExitCode::GeneralError as i32, 1);
        assert_eq!(ExitCode::InvalidArguments as i32, 2);
        assert_eq!(ExitCode::SourceNotFound as i32, 3);
        assert_eq!(ExitCode::PermissionError as i32, 4);
        assert_eq!(ExitCode::RenameError as i32, 5);
        assert_eq!(ExitCode::Cancelled as i32, 6);
    }

    #[test]
    fn test_exit_code_into_i32() {
        let code: i32 = ExitCode::RenameError.into();
        assert_eq!(code, 5);
    }
}
