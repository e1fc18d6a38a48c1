// Error handling macros

/// Return early with an `InvalidArgument` error if a condition is not satisfied
#[macro_export]
macro_rules! ensure_argument {
    ($cond:expr, $($arg:tt)+) => {
        if !($cond) {
            return Err($crate::ContractError::InvalidArgument(format!($($arg)+)));
        }
    };
}

/// Bail early with a `MalformedResponse` error
#[macro_export]
macro_rules! bail_malformed {
    ($($arg:tt)+) => {
        return Err($crate::ContractError::MalformedResponse(format!($($arg)+)))
    };
}

#[cfg(test)]
mod tests {
    use crate::{ContractError, ContractResult};

    fn positive(value: i64) -> ContractResult<i64> {
        ensure_argument!(value > 0, "value must be positive, got {}", value);
        Ok(value)
    }

    fn arity(len: usize) -> ContractResult<()> {
        if len != 2 {
            bail_malformed!("expected 2 values, got {}", len);
        }
        Ok(())
    }

    #[test]
    fn test_ensure_argument() {
        assert_eq!(positive(3), Ok(3));
        assert_eq!(
            positive(-1),
            Err(ContractError::InvalidArgument("value must be positive, got -1".into()))
        );
    }

    #[test]
    fn test_bail_malformed() {
        assert!(arity(2).is_ok());
        assert!(matches!(arity(1), Err(ContractError::MalformedResponse(_))));
    }
}
