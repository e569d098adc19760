use super::{Footprint, ProductData, ProductId, Rating, ValidationError};

/// A partial product document, as sent to an update.
///
/// Every field is optional. Present fields overwrite the stored field as a
/// whole; absent fields leave it untouched.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct ProductPatch {
    /// The barcode; accepted only if it matches the record being updated
    #[cfg_attr(
        feature = "serde",
        serde(alias = "barcode_id", skip_serializing_if = "Option::is_none")
    )]
    pub barcode: Option<ProductId>,
    /// The type of product
    #[cfg_attr(
        feature = "serde",
        serde(rename = "type", skip_serializing_if = "Option::is_none")
    )]
    pub kind: Option<String>,
    /// The category of this product, within its type
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub category: Option<String>,
    /// The model number of this product
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub model: Option<String>,
    /// The vendor of this product
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub brand: Option<String>,
    /// A replacement rating block
    #[cfg_attr(
        feature = "serde",
        serde(alias = "rating_data", skip_serializing_if = "Option::is_none")
    )]
    pub rating: Option<Rating>,
    /// A replacement footprint block
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub footprint: Option<Footprint>,
}

impl ProductData {
    /// Overwrite every field present in `patch`.
    ///
    /// The identifier is immutable: a patch carrying a different barcode is
    /// rejected and `self` is left unchanged.
    pub fn merge(&mut self, patch: ProductPatch) -> Result<(), ValidationError> {
        let ProductPatch {
            barcode,
            kind,
            category,
            model,
            brand,
            rating,
            footprint,
        } = patch;

        if let Some(requested) = barcode {
            if requested != self.barcode {
                return Err(ValidationError::IdentifierChanged {
                    existing: self.barcode.to_string(),
                    requested: requested.into(),
                });
            }
        }

        if let Some(kind) = kind {
            self.kind = kind;
        }
        if let Some(category) = category {
            self.category = category;
        }
        if let Some(model) = model {
            self.model = model;
        }
        if let Some(brand) = brand {
            self.brand = brand;
        }
        if let Some(rating) = rating {
            self.rating = Some(rating);
        }
        if let Some(footprint) = footprint {
            self.footprint = Some(footprint);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored() -> ProductData {
        ProductData {
            barcode: "8711000000000".into(),
            kind: "food".into(),
            category: "coffee".into(),
            model: "250g".into(),
            brand: "Bean Co".into(),
            rating: Some(Rating {
                co2: Some(1.2),
                ..Default::default()
            }),
            footprint: None,
        }
    }

    #[test]
    fn untouched_fields_survive() {
        let mut data = stored();
        data.merge(ProductPatch {
            brand: Some("Roast Co".into()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(data.brand, "Roast Co");
        assert_eq!(data.kind, "food");
        assert_eq!(data.model, "250g");
        assert_eq!(data.rating.unwrap().co2, Some(1.2));
    }

    #[test]
    fn present_rating_replaces_the_block() {
        let mut data = stored();
        data.merge(ProductPatch {
            rating: Some(Rating {
                water: Some(140.0),
                ..Default::default()
            }),
            ..Default::default()
        })
        .unwrap();

        let rating = data.rating.unwrap();
        assert_eq!(rating.water, Some(140.0));
        assert_eq!(rating.co2, None);
    }

    #[test]
    fn same_barcode_is_accepted() {
        let mut data = stored();
        let patch = ProductPatch {
            barcode: Some("8711000000000".into()),
            model: Some("500g".into()),
            ..Default::default()
        };
        assert_eq!(data.merge(patch), Ok(()));
        assert_eq!(data.model, "500g");
    }

    #[test]
    fn identifier_is_immutable() {
        let mut data = stored();
        let patch = ProductPatch {
            barcode: Some("0000000000000".into()),
            model: Some("500g".into()),
            ..Default::default()
        };
        assert!(matches!(
            data.merge(patch),
            Err(ValidationError::IdentifierChanged { .. })
        ));
        assert_eq!(data, stored());
    }

    #[test]
    fn patch_json_is_sparse() {
        let patch: ProductPatch = serde_json::from_str(r#"{"brand": "Roast Co"}"#).unwrap();
        assert_eq!(
            patch,
            ProductPatch {
                brand: Some("Roast Co".into()),
                ..Default::default()
            }
        );
    }
}
