use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Float64Array, Int32Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

use penguin_dash::data::loader;

/// Write the bundled penguin dataset as Parquet, in the layout the Parquet
/// loader reads back.
fn main() -> Result<()> {
    env_logger::init();

    let dataset = loader::bundled()?;
    let records = &dataset.records;

    let schema = Arc::new(Schema::new(vec![
        Field::new("species", DataType::Utf8, false),
        Field::new("island", DataType::Utf8, false),
        Field::new("bill_length_mm", DataType::Float64, true),
        Field::new("bill_depth_mm", DataType::Float64, true),
        Field::new("flipper_length_mm", DataType::Float64, true),
        Field::new("body_mass_g", DataType::Float64, true),
        Field::new("sex", DataType::Utf8, true),
        Field::new("year", DataType::Int32, true),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(StringArray::from_iter_values(
                records.iter().map(|r| r.species.as_str()),
            )),
            Arc::new(StringArray::from_iter_values(
                records.iter().map(|r| r.island.as_str()),
            )),
            Arc::new(Float64Array::from_iter(records.iter().map(|r| r.bill_length_mm))),
            Arc::new(Float64Array::from_iter(records.iter().map(|r| r.bill_depth_mm))),
            Arc::new(Float64Array::from_iter(records.iter().map(|r| r.flipper_length_mm))),
            Arc::new(Float64Array::from_iter(records.iter().map(|r| r.body_mass_g))),
            Arc::new(StringArray::from_iter(records.iter().map(|r| r.sex.as_deref()))),
            Arc::new(Int32Array::from_iter(records.iter().map(|r| r.year))),
        ],
    )
    .context("building record batch")?;

    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "penguins_sample.parquet".to_string());
    let file = std::fs::File::create(&output_path)
        .with_context(|| format!("creating {output_path}"))?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing record batch")?;
    writer.close().context("closing parquet writer")?;

    println!("Wrote {} penguins to {output_path}", dataset.len());
    Ok(())
}
