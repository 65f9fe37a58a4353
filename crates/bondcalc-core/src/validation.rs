//! Shared validation contract for bond inputs.
//!
//! The rules live in a single declarative table, [`BOND_RULES`]. The client
//! checks a form against it before submitting, and the HTTP service checks
//! every request against the same table, so the two can never drift.
//!
//! Rules are evaluated field by field in table order. The first failing rule
//! of a field produces that field's message and the remaining rules of the
//! field are skipped. All failing fields are reported together.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{BondForm, BondInputs, CouponFrequency};

/// A field of the bond form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    /// Face value.
    FaceValue,
    /// Annual coupon rate.
    AnnualCouponRate,
    /// Market price.
    MarketPrice,
    /// Years to maturity.
    YearsToMaturity,
    /// Coupon frequency.
    CouponFrequency,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 5] = [
        Field::FaceValue,
        Field::AnnualCouponRate,
        Field::MarketPrice,
        Field::YearsToMaturity,
        Field::CouponFrequency,
    ];

    /// Returns the wire name of the field.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Field::FaceValue => "faceValue",
            Field::AnnualCouponRate => "annualCouponRate",
            Field::MarketPrice => "marketPrice",
            Field::YearsToMaturity => "yearsToMaturity",
            Field::CouponFrequency => "couponFrequency",
        }
    }

    /// Returns the form label of the field.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Field::FaceValue => "Face Value ($)",
            Field::AnnualCouponRate => "Annual Coupon Rate (%)",
            Field::MarketPrice => "Market Price ($)",
            Field::YearsToMaturity => "Years to Maturity",
            Field::CouponFrequency => "Coupon Frequency",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A constraint a field value must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// A value must be present (non-blank for text).
    Required,
    /// A finite number strictly greater than zero.
    Positive,
    /// A finite number greater than or equal to zero.
    NonNegative,
    /// A maturity no longer than [`MAX_YEARS_TO_MATURITY`].
    MaturityLimit,
    /// A recognized coupon frequency name.
    Frequency,
}

/// A raw field value as read from a form.
#[derive(Debug, Clone, Copy)]
enum RawValue<'a> {
    Number(Option<f64>),
    Text(Option<&'a str>),
}

impl Constraint {
    fn is_satisfied_by(self, value: RawValue<'_>) -> bool {
        match (self, value) {
            (Constraint::Required, RawValue::Number(v)) => v.is_some(),
            (Constraint::Required, RawValue::Text(v)) => v.is_some_and(|s| !s.trim().is_empty()),
            (Constraint::Positive, RawValue::Number(Some(v))) => v.is_finite() && v > 0.0,
            (Constraint::NonNegative, RawValue::Number(Some(v))) => v.is_finite() && v >= 0.0,
            (Constraint::MaturityLimit, RawValue::Number(Some(v))) => v <= MAX_YEARS_TO_MATURITY,
            (Constraint::Frequency, RawValue::Text(Some(s))) => {
                s.parse::<CouponFrequency>().is_ok()
            }
            _ => false,
        }
    }
}

/// One row of the validation table.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    /// The field checked.
    pub field: Field,
    /// The constraint applied.
    pub constraint: Constraint,
    /// Message reported when the constraint fails.
    pub message: &'static str,
}

/// The bond form validation rules.
pub const BOND_RULES: &[FieldRule] = &[
    FieldRule {
        field: Field::FaceValue,
        constraint: Constraint::Required,
        message: "Face value is required",
    },
    FieldRule {
        field: Field::FaceValue,
        constraint: Constraint::Positive,
        message: "Face value must be greater than 0",
    },
    FieldRule {
        field: Field::AnnualCouponRate,
        constraint: Constraint::Required,
        message: "Coupon rate is required",
    },
    FieldRule {
        field: Field::AnnualCouponRate,
        constraint: Constraint::NonNegative,
        message: "Coupon rate must be 0 or greater",
    },
    FieldRule {
        field: Field::MarketPrice,
        constraint: Constraint::Required,
        message: "Market price is required",
    },
    FieldRule {
        field: Field::MarketPrice,
        constraint: Constraint::Positive,
        message: "Market price must be greater than 0",
    },
    FieldRule {
        field: Field::YearsToMaturity,
        constraint: Constraint::Required,
        message: "Years to maturity is required",
    },
    FieldRule {
        field: Field::YearsToMaturity,
        constraint: Constraint::Positive,
        message: "Years to maturity must be greater than 0",
    },
    FieldRule {
        field: Field::YearsToMaturity,
        constraint: Constraint::MaturityLimit,
        message: "Years to maturity must be 100 or less",
    },
    FieldRule {
        field: Field::CouponFrequency,
        constraint: Constraint::Required,
        message: "Coupon frequency is required",
    },
    FieldRule {
        field: Field::CouponFrequency,
        constraint: Constraint::Frequency,
        message: "Coupon frequency must be one of: annual, semiAnnual",
    },
];

/// Longest accepted maturity in years.
pub const MAX_YEARS_TO_MATURITY: f64 = 100.0;

/// Reported when maturity rounds to zero coupon periods.
pub const MIN_PERIOD_MESSAGE: &str = "Years to maturity must cover at least one coupon period";

/// A single failed field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// The failing field.
    pub field: Field,
    /// The user-facing message.
    pub message: String,
}

/// Every validation failure of a form, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// Returns true if nothing failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// The individual field errors.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// The message for one field, if it failed.
    #[must_use]
    pub fn message_for(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// All messages in field order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.message.clone()).collect()
    }

    fn push(&mut self, field: Field, message: &str) {
        self.errors.push(FieldError {
            field,
            message: message.to_string(),
        });
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

fn raw_value(form: &BondForm, field: Field) -> RawValue<'_> {
    match field {
        Field::FaceValue => RawValue::Number(form.face_value),
        Field::AnnualCouponRate => RawValue::Number(form.annual_coupon_rate),
        Field::MarketPrice => RawValue::Number(form.market_price),
        Field::YearsToMaturity => RawValue::Number(form.years_to_maturity),
        Field::CouponFrequency => RawValue::Text(form.coupon_frequency.as_deref()),
    }
}

/// Validates a raw form against [`BOND_RULES`].
pub fn validate_form(form: &BondForm) -> Result<BondInputs, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    for field in Field::ALL {
        let value = raw_value(form, field);
        if let Some(rule) = BOND_RULES
            .iter()
            .filter(|r| r.field == field)
            .find(|r| !r.constraint.is_satisfied_by(value))
        {
            errors.push(field, rule.message);
        }
    }

    let frequency = form
        .coupon_frequency
        .as_deref()
        .and_then(|s| s.parse::<CouponFrequency>().ok());

    if let (Some(years), Some(frequency)) = (form.years_to_maturity, frequency) {
        if errors.message_for(Field::YearsToMaturity).is_none() && frequency.periods_for(years) == 0
        {
            errors.push(Field::YearsToMaturity, MIN_PERIOD_MESSAGE);
        }
    }

    match (
        form.face_value,
        form.annual_coupon_rate,
        form.market_price,
        form.years_to_maturity,
        frequency,
    ) {
        (Some(face_value), Some(annual_coupon_rate), Some(market_price), Some(years), Some(freq))
            if errors.is_empty() =>
        {
            Ok(BondInputs {
                face_value,
                annual_coupon_rate,
                market_price,
                years_to_maturity: years,
                coupon_frequency: freq,
            })
        }
        _ => {
            log::debug!("bond form rejected: {}", errors);
            Err(errors)
        }
    }
}
