use super::{Footprint, ProductData, Rating};

/// The worst (highest) value a 0-9 grade may take.
pub const MAX_GRADE: u8 = 9;

/// A product document that cannot be stored as given.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// A required field is missing or empty
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    /// The identifier contains characters that cannot be used as a store key
    #[error("identifier {0:?} must not contain whitespace or '/'")]
    MalformedIdentifier(String),

    /// A 0-9 grade is out of range
    #[error("`{field}` must be between 0 and {max}, got {value}", max = MAX_GRADE)]
    GradeOutOfRange {
        /// The offending field
        field: &'static str,
        /// The rejected value
        value: u8,
    },

    /// A measured quantity is negative, infinite or NaN
    #[error("`{field}` must be a finite, non-negative number, got {value}")]
    InvalidQuantity {
        /// The offending field
        field: &'static str,
        /// The rejected value
        value: f64,
    },

    /// An update tried to change the identifier of an existing record
    #[error("the identifier of {existing} cannot be changed to {requested}")]
    IdentifierChanged {
        /// The identifier of the stored record
        existing: String,
        /// The identifier found in the update
        requested: String,
    },
}

impl ProductData {
    /// Check the invariants every stored record must satisfy.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.barcode.is_empty() {
            return Err(ValidationError::MissingField("barcode"));
        }
        if self
            .barcode
            .chars()
            .any(|c| c.is_whitespace() || c == '/')
        {
            return Err(ValidationError::MalformedIdentifier(
                self.barcode.to_string(),
            ));
        }
        if let Some(rating) = &self.rating {
            rating.validate()?;
        }
        if let Some(footprint) = &self.footprint {
            footprint.validate()?;
        }
        Ok(())
    }
}

impl Rating {
    fn validate(&self) -> Result<(), ValidationError> {
        grade("efficiency", self.efficiency)?;
        grade("recyclability", self.recyclability)?;
        grade("repairability", self.repairability)?;
        quantity("energy", self.energy)?;
        quantity("co2", self.co2)?;
        quantity("other_greenhouse_gas", self.other_greenhouse_gas)?;
        quantity("water", self.water)?;
        quantity("plastic", self.plastic)?;
        quantity("lifetime", self.lifetime)
    }
}

impl Footprint {
    fn validate(&self) -> Result<(), ValidationError> {
        quantity("carbon_footprint", self.carbon_footprint)?;
        quantity("production_stage", self.production_stage)?;
        quantity("transportation_stage", self.transportation_stage)?;
        quantity("retail_stage", self.retail_stage)
    }
}

fn grade(field: &'static str, value: Option<u8>) -> Result<(), ValidationError> {
    match value {
        Some(value) if value > MAX_GRADE => Err(ValidationError::GradeOutOfRange { field, value }),
        _ => Ok(()),
    }
}

fn quantity(field: &'static str, value: Option<f64>) -> Result<(), ValidationError> {
    match value {
        Some(value) if !value.is_finite() || value < 0.0 => {
            Err(ValidationError::InvalidQuantity { field, value })
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn product(barcode: &str) -> ProductData {
        ProductData {
            barcode: barcode.into(),
            kind: "appliance".into(),
            category: "fridge".into(),
            model: "F1".into(),
            brand: "Acme".into(),
            rating: None,
            footprint: None,
        }
    }

    #[test]
    fn accepts_plain_record() {
        assert_eq!(product("4006381333931").validate(), Ok(()));
    }

    #[rstest]
    #[case("", ValidationError::MissingField("barcode"))]
    #[case("40 06", ValidationError::MalformedIdentifier("40 06".into()))]
    #[case("40/06", ValidationError::MalformedIdentifier("40/06".into()))]
    fn rejects_bad_identifiers(#[case] barcode: &str, #[case] expected: ValidationError) {
        assert_eq!(product(barcode).validate(), Err(expected));
    }

    #[test]
    fn grades_stop_at_nine() {
        let mut data = product("4006381333931");
        data.rating = Some(Rating {
            efficiency: Some(MAX_GRADE),
            repairability: Some(10),
            ..Default::default()
        });
        assert_eq!(
            data.validate(),
            Err(ValidationError::GradeOutOfRange {
                field: "repairability",
                value: 10
            })
        );
    }

    #[rstest]
    #[case(-1.0)]
    #[case(f64::INFINITY)]
    fn quantities_must_be_finite_and_non_negative(#[case] water: f64) {
        let mut data = product("4006381333931");
        data.rating = Some(Rating {
            water: Some(water),
            ..Default::default()
        });
        assert!(matches!(
            data.validate(),
            Err(ValidationError::InvalidQuantity { field: "water", .. })
        ));
    }

    #[test]
    fn footprint_stages_are_checked() {
        let mut data = product("4006381333931");
        data.footprint = Some(Footprint {
            retail_stage: Some(-0.5),
            ..Default::default()
        });
        assert!(data.validate().is_err());
    }
}
