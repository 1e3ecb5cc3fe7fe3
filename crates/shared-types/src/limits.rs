//! Structural length checks. These run before any state lookup, on every
//! path that admits or validates an operation.

use crate::entities::{NameKey, NameOperation};
use crate::errors::NameError;
use crate::params::NameParams;

/// Rejects identifiers longer than `max_name_len`.
pub fn check_name_len(name: &NameKey, params: &NameParams) -> Result<(), NameError> {
    if name.len() > params.max_name_len {
        return Err(NameError::NameTooLong {
            len: name.len(),
            max: params.max_name_len,
        });
    }
    Ok(())
}

/// Rejects values longer than `max_value_len`.
pub fn check_value_len(value: &[u8], params: &NameParams) -> Result<(), NameError> {
    if value.len() > params.max_value_len {
        return Err(NameError::ValueTooLong {
            len: value.len(),
            max: params.max_value_len,
        });
    }
    Ok(())
}

/// Runs the length checks for the clear-text fields of `operation`.
///
/// Claims carry only a fixed-size commitment and always pass.
pub fn check_limits(operation: &NameOperation, params: &NameParams) -> Result<(), NameError> {
    match operation {
        NameOperation::Claim { .. } => Ok(()),
        NameOperation::Reveal { name, value, .. } => {
            check_name_len(name, params)?;
            check_value_len(value, params)
        }
        NameOperation::Update { name, value, .. } => {
            check_name_len(name, params)?;
            value
                .as_deref()
                .map_or(Ok(()), |value| check_value_len(value, params))
        }
    }
}
