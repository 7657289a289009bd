use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use arrow::array::{Array, ArrayRef, AsArray};
use arrow::datatypes::{DataType, Float32Type, Float64Type, Int32Type, Int64Type};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;
use serde_json::Value as JsonValue;

use super::model::{PenguinDataset, Record, Species};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a penguin dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.parquet` – one row per penguin, nullable numeric columns
/// * `.json`    – `[{ "species": "Adelie", "island": "Torgersen", ... }, ...]`
/// * `.csv`     – palmerpenguins layout, `NA` for missing values
pub fn load_file(path: &Path) -> Result<PenguinDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "parquet" | "pq" => load_parquet(path),
        "json" => load_json(path),
        "csv" => load_csv(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
    .with_context(|| format!("loading {}", path.display()))?;

    log::info!("Loaded {} penguins from {}", dataset.len(), path.display());
    Ok(dataset)
}

/// Dataset compiled into the binary, shown when no file is given at startup.
///
/// `assets/penguins.csv` follows the palmerpenguins layout and row counts
/// (344 penguins, 152 Adelie, 124 Gentoo, 68 Chinstrap) but its measurements
/// are synthetic. Replacing it with the real palmerpenguins CSV needs no code
/// change.
const BUNDLED_CSV: &str = include_str!("../../assets/penguins.csv");

/// Parse the bundled dataset.
pub fn bundled() -> Result<PenguinDataset> {
    read_csv(BUNDLED_CSV.as_bytes()).context("parsing bundled penguins.csv")
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

fn load_json(path: &Path) -> Result<PenguinDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    parse_json(&text)
}

/// Records-oriented JSON, as written by `df.to_json(orient='records')`:
///
/// ```json
/// [
///   { "species": "Adelie", "island": "Torgersen",
///     "bill_length_mm": 39.1, "bill_depth_mm": 18.7, "body_mass_g": 3750 },
///   { "species": "Adelie", "island": "Torgersen",
///     "bill_length_mm": null, "bill_depth_mm": null, "body_mass_g": null }
/// ]
/// ```
pub fn parse_json(text: &str) -> Result<PenguinDataset> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;
    let rows = root.as_array().context("Expected top-level JSON array")?;

    let records = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            Record::deserialize(row).with_context(|| format!("Row {i}: invalid penguin record"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(PenguinDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// One CSV line. Unparseable numeric cells (the `NA` convention) are missing.
#[derive(Debug, Deserialize)]
struct CsvRow {
    species: String,
    island: String,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    bill_length_mm: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    bill_depth_mm: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    flipper_length_mm: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    body_mass_g: Option<f64>,
    #[serde(default)]
    sex: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    year: Option<i32>,
}

fn load_csv(path: &Path) -> Result<PenguinDataset> {
    let file = std::fs::File::open(path).context("opening CSV")?;
    read_csv(file)
}

/// CSV layout: header row naming at least `species`, `island`,
/// `bill_length_mm`, `bill_depth_mm` and `body_mass_g`. Other columns are
/// ignored unless they are `flipper_length_mm`, `sex` or `year`.
pub fn read_csv<R: Read>(input: R) -> Result<PenguinDataset> {
    let mut reader = csv::Reader::from_reader(input);

    let headers = reader.headers().context("reading CSV headers")?.clone();
    for required in ["species", "island", "bill_length_mm", "bill_depth_mm", "body_mass_g"] {
        if !headers.iter().any(|h| h == required) {
            bail!("CSV missing '{required}' column");
        }
    }

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<CsvRow>().enumerate() {
        let row = result.with_context(|| format!("CSV row {row_no}"))?;
        let species = row
            .species
            .parse::<Species>()
            .with_context(|| format!("CSV row {row_no}"))?;

        records.push(Record {
            species,
            island: row.island,
            bill_length_mm: row.bill_length_mm,
            bill_depth_mm: row.bill_depth_mm,
            flipper_length_mm: row.flipper_length_mm,
            body_mass_g: row.body_mass_g,
            sex: row.sex.filter(|s| !s.is_empty() && s != "NA"),
            year: row.year,
        });
    }

    Ok(PenguinDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file of penguin rows.
///
/// Expected schema:
/// - `species`, `island`: Utf8 or LargeUtf8
/// - `bill_length_mm`, `bill_depth_mm`, `body_mass_g`: Float64/Float32/Int64/Int32,
///   nullable
/// - optional `flipper_length_mm` (numeric), `sex` (string), `year` (integer)
///
/// Works with files written by **Pandas**, **Polars** and `generate_sample`.
pub fn load_parquet(path: &Path) -> Result<PenguinDataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;

        let species_col = required_column(&batch, "species")?;
        let island_col = required_column(&batch, "island")?;
        let length_col = required_column(&batch, "bill_length_mm")?;
        let depth_col = required_column(&batch, "bill_depth_mm")?;
        let mass_col = required_column(&batch, "body_mass_g")?;
        let flipper_col = optional_column(&batch, "flipper_length_mm");
        let sex_col = optional_column(&batch, "sex");
        let year_col = optional_column(&batch, "year");

        // Row numbers in messages count across batches.
        let offset = records.len();
        for row in 0..batch.num_rows() {
            let at = offset + row;
            let species_name = string_at(species_col, row)
                .with_context(|| format!("Row {at}: reading 'species'"))?
                .with_context(|| format!("Row {at}: species is null"))?;
            let species = species_name
                .parse::<Species>()
                .with_context(|| format!("Row {at}"))?;

            let island = string_at(island_col, row)
                .with_context(|| format!("Row {at}: reading 'island'"))?
                .unwrap_or_default();

            let flipper_length_mm = match flipper_col {
                Some(col) => f64_at(col, row)
                    .with_context(|| format!("Row {at}: reading 'flipper_length_mm'"))?,
                None => None,
            };
            let sex = match sex_col {
                Some(col) => {
                    string_at(col, row).with_context(|| format!("Row {at}: reading 'sex'"))?
                }
                None => None,
            };
            let year = match year_col {
                Some(col) => {
                    i32_at(col, row).with_context(|| format!("Row {at}: reading 'year'"))?
                }
                None => None,
            };

            records.push(Record {
                species,
                island,
                bill_length_mm: f64_at(length_col, row)
                    .with_context(|| format!("Row {at}: reading 'bill_length_mm'"))?,
                bill_depth_mm: f64_at(depth_col, row)
                    .with_context(|| format!("Row {at}: reading 'bill_depth_mm'"))?,
                flipper_length_mm,
                body_mass_g: f64_at(mass_col, row)
                    .with_context(|| format!("Row {at}: reading 'body_mass_g'"))?,
                sex,
                year,
            });
        }
    }

    Ok(PenguinDataset::from_records(records))
}

// -- Parquet / Arrow helpers --

fn required_column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a ArrayRef> {
    let idx = batch
        .schema()
        .index_of(name)
        .map_err(|_| anyhow::anyhow!("Parquet file missing '{name}' column"))?;
    Ok(batch.column(idx))
}

fn optional_column<'a>(batch: &'a RecordBatch, name: &str) -> Option<&'a ArrayRef> {
    let idx = batch.schema().index_of(name).ok()?;
    Some(batch.column(idx))
}

/// Read a nullable string cell.
fn string_at(col: &ArrayRef, row: usize) -> Result<Option<String>> {
    if col.is_null(row) {
        return Ok(None);
    }
    let value = match col.data_type() {
        DataType::Utf8 => col.as_string::<i32>().value(row),
        DataType::LargeUtf8 => col.as_string::<i64>().value(row),
        other => bail!("Expected string column, got {other:?}"),
    };
    Ok(Some(value.to_string()))
}

/// Read a nullable numeric cell as `f64`. Null and NaN are both missing.
fn f64_at(col: &ArrayRef, row: usize) -> Result<Option<f64>> {
    if col.is_null(row) {
        return Ok(None);
    }
    let value = match col.data_type() {
        DataType::Float64 => col.as_primitive::<Float64Type>().value(row),
        DataType::Float32 => col.as_primitive::<Float32Type>().value(row) as f64,
        DataType::Int64 => col.as_primitive::<Int64Type>().value(row) as f64,
        DataType::Int32 => col.as_primitive::<Int32Type>().value(row) as f64,
        other => bail!("Expected numeric column, got {other:?}"),
    };
    Ok((!value.is_nan()).then_some(value))
}

/// Read a nullable integer cell. Values that do not fit an `i32`, and float
/// cells with a fractional part, are errors rather than truncated.
fn i32_at(col: &ArrayRef, row: usize) -> Result<Option<i32>> {
    if col.is_null(row) {
        return Ok(None);
    }
    let value = match col.data_type() {
        DataType::Int32 => col.as_primitive::<Int32Type>().value(row),
        DataType::Int64 => {
            let wide = col.as_primitive::<Int64Type>().value(row);
            i32::try_from(wide).with_context(|| format!("{wide} does not fit in i32"))?
        }
        DataType::Float64 | DataType::Float32 => {
            let Some(v) = f64_at(col, row)? else {
                return Ok(None);
            };
            if v.fract() != 0.0 || v < i32::MIN as f64 || v > i32::MAX as f64 {
                bail!("{v} is not a whole i32");
            }
            v as i32
        }
        other => bail!("Expected integer column, got {other:?}"),
    };
    Ok(Some(value))
}
