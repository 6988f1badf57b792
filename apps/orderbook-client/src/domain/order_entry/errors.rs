//! Order entry validation errors.

use std::fmt;

use thiserror::Error;

/// Numeric input field of the order form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderField {
    /// Limit price.
    Price,
    /// Notional amount (buy) or share count (sell).
    Quantity,
}

impl fmt::Display for OrderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Price => write!(f, "Preço"),
            Self::Quantity => write!(f, "Quantidade"),
        }
    }
}

/// Client-side rejection of raw order input. Never reaches the network.
///
/// The `Display` text is meant for direct display to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field did not parse as a decimal number.
    #[error("{field} deve ser um número válido.")]
    NotANumber {
        /// The offending field.
        field: OrderField,
        /// The raw input as typed.
        raw: String,
    },
}

impl ValidationError {
    /// The field that failed validation.
    #[must_use]
    pub const fn field(&self) -> OrderField {
        match self {
            Self::NotANumber { field, .. } => *field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_a_number_message_names_field() {
        let err = ValidationError::NotANumber {
            field: OrderField::Price,
            raw: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Preço deve ser um número válido.");
        assert_eq!(err.field(), OrderField::Price);
    }
}
