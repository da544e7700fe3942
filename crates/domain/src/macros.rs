//! Macro for wiring string labels onto closed domain enums
//!
//! The API transports every enumerated field (request status, priority,
//! delivery interval, order status, ...) as a plain string label. This macro
//! keeps the label table next to the enum and derives everything the client
//! needs from it: `as_str`, the ordered `ALL` table, `Display`, `FromStr` and
//! the `String` conversions used by `#[serde(try_from, into)]`.
//!
//! # Example
//!
//! ```rust
//! use opsdesk_domain::impl_domain_label_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum PaymentState {
//!     Open,
//!     Paid,
//! }
//!
//! impl_domain_label_conversions!(PaymentState {
//!     Open => "open",
//!     Paid => "paid",
//! });
//!
//! assert_eq!(PaymentState::Paid.as_str(), "paid");
//! assert_eq!("OPEN".parse::<PaymentState>().unwrap(), PaymentState::Open);
//! ```

/// Implements label conversions for a fieldless enum.
///
/// Parsing trims surrounding whitespace and compares ASCII
/// case-insensitively against the declared labels; the declared label is
/// always what gets written back out.
#[macro_export]
macro_rules! impl_domain_label_conversions {
    ($enum_name:ident { $($variant:ident => $label:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Every variant in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Wire label of this variant.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                let needle = s.trim();
                $(
                    if needle.eq_ignore_ascii_case($label) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(format!("Invalid {}: {}", stringify!($enum_name), s))
            }
        }

        impl TryFrom<String> for $enum_name {
            type Error = String;

            fn try_from(value: String) -> ::std::result::Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$enum_name> for String {
            fn from(value: $enum_name) -> Self {
                value.as_str().to_string()
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestCadence {
        Once,
        Weekly,
        Yearly,
    }

    impl_domain_label_conversions!(TestCadence {
        Once => "Einmalig",
        Weekly => "Wöchentlich",
        Yearly => "Jährlich",
    });

    #[test]
    fn display_uses_declared_label() {
        assert_eq!(TestCadence::Once.to_string(), "Einmalig");
        assert_eq!(TestCadence::Weekly.to_string(), "Wöchentlich");
    }

    #[test]
    fn parse_is_ascii_case_insensitive() {
        assert_eq!(TestCadence::from_str("einmalig").unwrap(), TestCadence::Once);
        assert_eq!(TestCadence::from_str("JäHRLICH").unwrap(), TestCadence::Yearly);
        assert_eq!(TestCadence::from_str("  Wöchentlich ").unwrap(), TestCadence::Weekly);
    }

    #[test]
    fn parse_rejects_unknown_labels() {
        let result = TestCadence::from_str("daily");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid TestCadence: daily"));
        assert!(TestCadence::from_str("").is_err());
    }

    #[test]
    fn all_preserves_declaration_order() {
        assert_eq!(TestCadence::ALL, &[TestCadence::Once, TestCadence::Weekly, TestCadence::Yearly]);
    }

    #[test]
    fn string_conversions_round_trip() {
        for cadence in TestCadence::ALL {
            let label: String = (*cadence).into();
            assert_eq!(TestCadence::try_from(label).unwrap(), *cadence);
        }
    }
}
