use crate::error::OpError;
use crate::models::ItemPayload;

/// Body fields an operation may require.
#[derive(Debug, Clone, Copy)]
pub enum RequiredField {
    Name,
    Price,
}

impl RequiredField {
    const fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Price => "price",
        }
    }

    fn is_provided(self, payload: &ItemPayload) -> bool {
        match self {
            Self::Name => payload.provided_name().is_some(),
            Self::Price => payload.provided_price().is_some(),
        }
    }
}

/// Check that every required field is provided (present and non-zero-valued).
///
/// Pure check with no side effects. The message grammar is part of the API
/// contract: `#name field is required` for one missing field,
/// `#name and #price fields are required` for several.
pub fn check_fields(payload: &ItemPayload, required: &[RequiredField]) -> Result<(), OpError> {
    let missing: Vec<&str> = required
        .iter()
        .filter(|field| !field.is_provided(payload))
        .map(|field| field.key())
        .collect();

    match missing.as_slice() {
        [] => Ok(()),
        [field] => Err(OpError::Validation(format!("#{field} field is required"))),
        fields => {
            let listed = fields
                .iter()
                .map(|field| format!("#{field}"))
                .collect::<Vec<_>>()
                .join(" and ");
            Err(OpError::Validation(format!("{listed} fields are required")))
        }
    }
}
