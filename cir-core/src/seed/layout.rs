//! Header-mapped parsing of seed sources.
//!
//! A seed source is comma-separated text whose first row is a header. The
//! header decides the layout, and every cell is looked up by column name, so
//! reordered columns still load correctly while missing or unexpected columns
//! are rejected before anything is written.

use crate::models::{Footprint, ProductData, ProductId, Rating, ValidationError};
use csv::StringRecord;
use std::{
    collections::{HashMap, HashSet},
    io,
    path::Path,
    str::FromStr,
};

/// The column set of a seed source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedLayout {
    /// Descriptive fields plus a climate impact rating, keyed by `barcode`
    Rating,
    /// Supply-chain carbon footprint, keyed by `identifier`
    Footprint,
}

const RATING_COLUMNS: [&str; 15] = [
    "type",
    "brand",
    "category",
    "model",
    "barcode",
    "efficiency",
    "production_energy",
    "transport_energy",
    "plastic",
    "lifetime",
    "water",
    "recyclability",
    "co2",
    "other_ghg",
    "repairability",
];

const FOOTPRINT_COLUMNS: [&str; 10] = [
    "identifier",
    "carbon_footprint",
    "current_company",
    "is_recyclable",
    "production_stage",
    "transportation_stage",
    "retail_stage",
    "date",
    "description",
    "previous_reference",
];

impl SeedLayout {
    /// The columns a header of this layout must contain, and nothing else.
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            SeedLayout::Rating => &RATING_COLUMNS,
            SeedLayout::Footprint => &FOOTPRINT_COLUMNS,
        }
    }

    /// The column holding the record identifier.
    pub fn key_column(self) -> &'static str {
        match self {
            SeedLayout::Rating => "barcode",
            SeedLayout::Footprint => "identifier",
        }
    }

    fn detect(names: &[String]) -> Option<Self> {
        [SeedLayout::Rating, SeedLayout::Footprint]
            .into_iter()
            .find(|layout| names.iter().any(|name| name == layout.key_column()))
    }
}

/// A seed source that cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// The source could not be read
    #[error("failed to read seed source: {0}")]
    Io(#[from] io::Error),

    /// The source is not well-formed delimited text
    #[error("malformed seed source: {0}")]
    Csv(#[from] csv::Error),

    /// The header names neither a `barcode` nor an `identifier` column
    #[error("unrecognized seed header: no `barcode` or `identifier` column")]
    UnrecognizedHeader,

    /// A column required by the layout is absent
    #[error("seed header is missing column `{0}`")]
    MissingColumn(&'static str),

    /// The header names a column outside the layout, or names one twice
    #[error("seed header has unexpected column `{0}`")]
    UnexpectedColumn(String),

    /// A cell does not parse as the column's type
    #[error("line {line}: column `{column}` has invalid value {value:?}")]
    InvalidCell {
        /// 1-based line number in the source
        line: u64,
        /// The column name
        column: &'static str,
        /// The raw cell
        value: String,
    },

    /// A row parses but does not form a valid record
    #[error("line {line}: {source}")]
    InvalidRow {
        /// 1-based line number in the source
        line: u64,
        /// Why the record was rejected
        source: ValidationError,
    },

    /// Two rows share an identifier, so importing both would fail part way
    #[error("line {line}: identifier {key} already appears earlier in the source")]
    DuplicateKey {
        /// 1-based line number of the repeated row
        line: u64,
        /// The repeated identifier
        key: ProductId,
    },
}

/// A parsed and validated seed source, ready to import.
#[derive(Debug, Clone)]
pub struct SeedSource {
    layout: SeedLayout,
    rows: Vec<ProductData>,
}

impl SeedSource {
    /// Read and parse a seed file.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let bytes = tokio::fs::read(path).await?;
        Self::parse(bytes.as_slice())
    }

    /// Parse a seed source, validating every row before returning.
    pub fn parse<R: io::Read>(reader: R) -> Result<Self, SeedError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let names = reader
            .headers()?
            .iter()
            .map(|name| name.to_ascii_lowercase())
            .collect::<Vec<_>>();
        let layout = SeedLayout::detect(&names).ok_or(SeedError::UnrecognizedHeader)?;
        let columns = column_index(layout, &names)?;

        let mut rows = Vec::new();
        let mut seen = HashSet::new();
        for record in reader.records() {
            let record = record?;
            let row = Row {
                record: &record,
                columns: &columns,
                line: record.position().map(|p| p.line()).unwrap_or_default(),
            };
            let data = match layout {
                SeedLayout::Rating => row.rating_product()?,
                SeedLayout::Footprint => row.footprint_product()?,
            };
            data.validate().map_err(|source| SeedError::InvalidRow {
                line: row.line,
                source,
            })?;
            if !seen.insert(data.barcode.clone()) {
                return Err(SeedError::DuplicateKey {
                    line: row.line,
                    key: data.barcode,
                });
            }
            rows.push(data);
        }

        Ok(Self { layout, rows })
    }

    /// The layout selected by the header.
    pub fn layout(&self) -> SeedLayout {
        self.layout
    }

    /// The parsed records, in file order.
    pub fn rows(&self) -> &[ProductData] {
        &self.rows
    }

    /// The number of data rows (the header excluded).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the source holds no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Consume the source, yielding its records in file order.
    pub fn into_rows(self) -> Vec<ProductData> {
        self.rows
    }
}

fn column_index(
    layout: SeedLayout,
    names: &[String],
) -> Result<HashMap<&'static str, usize>, SeedError> {
    let mut columns = HashMap::with_capacity(names.len());
    for (index, name) in names.iter().enumerate() {
        let known = layout
            .columns()
            .iter()
            .find(|column| **column == name.as_str())
            .ok_or_else(|| SeedError::UnexpectedColumn(name.clone()))?;
        if columns.insert(*known, index).is_some() {
            return Err(SeedError::UnexpectedColumn(name.clone()));
        }
    }
    match layout.columns().iter().find(|c| !columns.contains_key(*c)) {
        Some(missing) => Err(SeedError::MissingColumn(*missing)),
        None => Ok(columns),
    }
}

struct Row<'a> {
    record: &'a StringRecord,
    columns: &'a HashMap<&'static str, usize>,
    line: u64,
}

impl Row<'_> {
    fn text(&self, column: &'static str) -> &str {
        self.columns
            .get(column)
            .and_then(|index| self.record.get(*index))
            .unwrap_or_default()
    }

    fn optional_text(&self, column: &'static str) -> Option<String> {
        Some(self.text(column))
            .filter(|value| !value.is_empty())
            .map(str::to_owned)
    }

    fn invalid(&self, column: &'static str) -> SeedError {
        SeedError::InvalidCell {
            line: self.line,
            column,
            value: self.text(column).to_owned(),
        }
    }

    /// Empty cells are absent values, not zeros.
    fn number<T: FromStr>(&self, column: &'static str) -> Result<Option<T>, SeedError> {
        match self.text(column) {
            "" => Ok(None),
            value => value.parse().map(Some).map_err(|_| self.invalid(column)),
        }
    }

    fn flag(&self, column: &'static str) -> Result<Option<bool>, SeedError> {
        match self.text(column).to_ascii_lowercase().as_str() {
            "" => Ok(None),
            "true" | "yes" | "y" | "1" => Ok(Some(true)),
            "false" | "no" | "n" | "0" => Ok(Some(false)),
            _ => Err(self.invalid(column)),
        }
    }

    fn rating_product(&self) -> Result<ProductData, SeedError> {
        let production: Option<f64> = self.number("production_energy")?;
        let transport: Option<f64> = self.number("transport_energy")?;
        let energy = match (production, transport) {
            (None, None) => None,
            (production, transport) => Some(production.unwrap_or(0.0) + transport.unwrap_or(0.0)),
        };

        Ok(ProductData {
            barcode: self.text("barcode").into(),
            kind: self.text("type").to_owned(),
            category: self.text("category").to_owned(),
            model: self.text("model").to_owned(),
            brand: self.text("brand").to_owned(),
            rating: Some(Rating {
                efficiency: self.number("efficiency")?,
                energy,
                co2: self.number("co2")?,
                other_greenhouse_gas: self.number("other_ghg")?,
                water: self.number("water")?,
                plastic: self.number("plastic")?,
                lifetime: self.number("lifetime")?,
                recyclability: self.number("recyclability")?,
                repairability: self.number("repairability")?,
            }),
            footprint: None,
        })
    }

    fn footprint_product(&self) -> Result<ProductData, SeedError> {
        Ok(ProductData {
            barcode: self.text("identifier").into(),
            kind: String::new(),
            category: String::new(),
            model: String::new(),
            brand: self.text("current_company").to_owned(),
            rating: None,
            footprint: Some(Footprint {
                carbon_footprint: self.number("carbon_footprint")?,
                is_recyclable: self.flag("is_recyclable")?,
                production_stage: self.number("production_stage")?,
                transportation_stage: self.number("transportation_stage")?,
                retail_stage: self.number("retail_stage")?,
                date: self.optional_text("date"),
                description: self.optional_text("description"),
                previous_reference: self.optional_text("previous_reference"),
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RATING_SOURCE: &str = "\
type,brand,category,model,barcode,efficiency,production_energy,transport_energy,plastic,lifetime,water,recyclability,co2,other_ghg,repairability
appliance,Acme,kettle,K-200,5012345678900,2,1000,250.5,0.3,8,40,3,12.5,0.4,4
appliance,Acme,toaster,T-10,5012345678917,,,,,,,,,,
";

    #[test]
    fn rating_layout_maps_columns_by_name() {
        let source = SeedSource::parse(RATING_SOURCE.as_bytes()).unwrap();
        assert_eq!(source.layout(), SeedLayout::Rating);
        assert_eq!(source.len(), 2);

        let kettle = &source.rows()[0];
        let rating = kettle.rating.as_ref().unwrap();
        assert_eq!(kettle.barcode.as_str(), "5012345678900");
        assert_eq!(kettle.kind, "appliance");
        assert_eq!(kettle.brand, "Acme");
        assert_eq!(rating.efficiency, Some(2));
        assert_eq!(rating.energy, Some(1250.5));
        assert_eq!(rating.co2, Some(12.5));
        assert_eq!(rating.other_greenhouse_gas, Some(0.4));
        assert_eq!(rating.repairability, Some(4));
    }

    #[test]
    fn empty_cells_are_absent() {
        let source = SeedSource::parse(RATING_SOURCE.as_bytes()).unwrap();
        assert_eq!(source.rows()[1].rating, Some(Rating::default()));
    }

    #[test]
    fn column_order_does_not_matter() {
        let reordered = "\
barcode,type,brand,category,model,repairability,efficiency,production_energy,transport_energy,plastic,lifetime,water,recyclability,co2,other_ghg
5012345678900,appliance,Acme,kettle,K-200,4,2,,250,,,,,,
";
        let source = SeedSource::parse(reordered.as_bytes()).unwrap();
        let rating = source.rows()[0].rating.clone().unwrap();
        assert_eq!(rating.repairability, Some(4));
        assert_eq!(rating.efficiency, Some(2));
        assert_eq!(rating.energy, Some(250.0));
    }

    #[test]
    fn footprint_layout() {
        let source = "\
identifier,carbon_footprint,current_company,is_recyclable,production_stage,transportation_stage,retail_stage,date,description,previous_reference
FP-001,3.2,Green Goods,yes,2.0,0.8,0.4,2020-08-01,Oat drink 1l,
FP-002,1.1,Green Goods,no,,,,2020-08-02,Oat drink 250ml,FP-000
";
        let source = SeedSource::parse(source.as_bytes()).unwrap();
        assert_eq!(source.layout(), SeedLayout::Footprint);

        let first = &source.rows()[0];
        let footprint = first.footprint.as_ref().unwrap();
        assert_eq!(first.barcode.as_str(), "FP-001");
        assert_eq!(first.brand, "Green Goods");
        assert_eq!(footprint.is_recyclable, Some(true));
        assert_eq!(footprint.retail_stage, Some(0.4));
        assert_eq!(footprint.previous_reference, None);

        let second = source.rows()[1].footprint.clone().unwrap();
        assert_eq!(second.production_stage, None);
        assert_eq!(second.previous_reference.as_deref(), Some("FP-000"));
    }

    #[test]
    fn missing_column_is_rejected() {
        let source = "type,brand,category,model,barcode\nappliance,Acme,kettle,K-200,1\n";
        assert!(matches!(
            SeedSource::parse(source.as_bytes()),
            Err(SeedError::MissingColumn("efficiency"))
        ));
    }

    #[test]
    fn extra_column_is_rejected() {
        let header = format!("{},colour", RATING_COLUMNS.join(","));
        assert!(matches!(
            SeedSource::parse(header.as_bytes()),
            Err(SeedError::UnexpectedColumn(column)) if column == "colour"
        ));
    }

    #[test]
    fn unknown_header_is_rejected() {
        assert!(matches!(
            SeedSource::parse("name,price\nkettle,10\n".as_bytes()),
            Err(SeedError::UnrecognizedHeader)
        ));
    }

    #[test]
    fn bad_cell_reports_line_and_column() {
        let source = RATING_SOURCE.replace("12.5", "lots");
        match SeedSource::parse(source.as_bytes()) {
            Err(SeedError::InvalidCell { line, column, value }) => {
                assert_eq!(line, 2);
                assert_eq!(column, "co2");
                assert_eq!(value, "lots");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn invalid_row_is_rejected_before_import() {
        let source = RATING_SOURCE.replace(",2,1000", ",12,1000");
        assert!(matches!(
            SeedSource::parse(source.as_bytes()),
            Err(SeedError::InvalidRow {
                line: 2,
                source: ValidationError::GradeOutOfRange { .. }
            })
        ));
    }

    #[test]
    fn repeated_identifier_is_rejected_before_import() {
        let source = format!(
            "{RATING_SOURCE}appliance,Acme,kettle,K-201,5012345678900,1,,,,,,,,,\n"
        );
        match SeedSource::parse(source.as_bytes()) {
            Err(SeedError::DuplicateKey { line, key }) => {
                assert_eq!(line, 4);
                assert_eq!(key.as_str(), "5012345678900");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
