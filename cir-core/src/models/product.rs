use super::ProductId;

/// A product record as returned by the repository.
///
/// `id` is populated by the system from the stored `barcode` and is never read
/// from client input; everything else is the flattened [`ProductData`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct ProductRecord {
    /// The unique product identifier, always equal to `data.barcode`
    pub id: ProductId,
    /// The stored product document
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub data: ProductData,
}

impl From<ProductData> for ProductRecord {
    fn from(data: ProductData) -> Self {
        Self {
            id: data.barcode.clone(),
            data,
        }
    }
}

/// The stored document describing a product and its climate impact.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct ProductData {
    /// The barcode of this product (EAN-13 or similar); also its store key
    #[cfg_attr(feature = "serde", serde(alias = "barcode_id"))]
    pub barcode: ProductId,
    /// The type of product
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: String,
    /// The category of this product, within its type
    pub category: String,
    /// The model number of this product
    pub model: String,
    /// The vendor of this product
    pub brand: String,
    /// The climate impact rating of this product
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            alias = "rating_data",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub rating: Option<Rating>,
    /// Supply-chain carbon footprint data for this product
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub footprint: Option<Footprint>,
}

/// The climate impact rating of a product.
///
/// Every metric is independently optional: an absent metric is unknown, which
/// is not the same as a zero.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Rating {
    /// The efficiency-in-use grade (0-9, where 0 is best)
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub efficiency: Option<u8>,
    /// The energy (J) to produce this item
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub energy: Option<f64>,
    /// The CO2 released (kg) to produce this item
    #[cfg_attr(
        feature = "serde",
        serde(alias = "CO2", skip_serializing_if = "Option::is_none")
    )]
    pub co2: Option<f64>,
    /// The other greenhouse gases released (kg) to produce this item
    #[cfg_attr(
        feature = "serde",
        serde(alias = "otherGG", skip_serializing_if = "Option::is_none")
    )]
    pub other_greenhouse_gas: Option<f64>,
    /// The volume of water (litres) to produce this item
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub water: Option<f64>,
    /// The amount of plastic (kg) included in this item
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub plastic: Option<f64>,
    /// The expected lifetime (years) of this item
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub lifetime: Option<f64>,
    /// The recyclability grade (0-9, where 0 is best)
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub recyclability: Option<u8>,
    /// The right-to-repair grade (0-9, where 0 is best)
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub repairability: Option<u8>,
}

/// Supply-chain carbon footprint of a product, broken down by stage.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Footprint {
    /// Total carbon footprint (kg CO2e)
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub carbon_footprint: Option<f64>,
    /// Whether the product can be recycled
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub is_recyclable: Option<bool>,
    /// Emissions attributed to production (kg CO2e)
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub production_stage: Option<f64>,
    /// Emissions attributed to transportation (kg CO2e)
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub transportation_stage: Option<f64>,
    /// Emissions attributed to retail (kg CO2e)
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub retail_stage: Option<f64>,
    /// When the footprint was assessed, as given by the source
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub date: Option<String>,
    /// Free-form description of the product or assessment
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub description: Option<String>,
    /// Identifier of the record this one supersedes
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub previous_reference: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kettle() -> ProductData {
        ProductData {
            barcode: "5012345678900".into(),
            kind: "appliance".into(),
            category: "kettle".into(),
            model: "K-200".into(),
            brand: "Acme".into(),
            rating: Some(Rating {
                efficiency: Some(2),
                co2: Some(0.0),
                ..Default::default()
            }),
            footprint: None,
        }
    }

    #[test]
    fn record_id_comes_from_barcode() {
        let record = ProductRecord::from(kettle());
        assert_eq!(record.id, record.data.barcode);
        assert_eq!(record.id.as_str(), "5012345678900");
    }

    #[test]
    fn json_uses_flat_layout_and_omits_absent_metrics() {
        let json = serde_json::to_value(ProductRecord::from(kettle())).unwrap();
        assert_eq!(json["id"], "5012345678900");
        assert_eq!(json["barcode"], "5012345678900");
        assert_eq!(json["type"], "appliance");
        // zero is present, unknown is absent
        assert_eq!(json["rating"]["co2"], 0.0);
        assert!(json["rating"].get("water").is_none());
        assert!(json.get("footprint").is_none());
    }

    #[test]
    fn legacy_field_names_are_accepted() {
        let data: ProductData = serde_json::from_value(serde_json::json!({
            "barcode_id": "5012345678900",
            "type": "appliance",
            "category": "kettle",
            "model": "K-200",
            "brand": "Acme",
            "rating_data": { "efficiency": 2, "CO2": 0.0, "otherGG": 1.5 }
        }))
        .unwrap();

        let rating = data.rating.unwrap();
        assert_eq!(data.barcode.as_str(), "5012345678900");
        assert_eq!(rating.co2, Some(0.0));
        assert_eq!(rating.other_greenhouse_gas, Some(1.5));
        assert_eq!(rating.water, None);
    }

    #[test]
    fn descriptive_fields_are_required() {
        let missing_brand = serde_json::json!({
            "barcode": "5012345678900",
            "type": "appliance",
            "category": "kettle",
            "model": "K-200"
        });
        assert!(serde_json::from_value::<ProductData>(missing_brand).is_err());
    }
}
