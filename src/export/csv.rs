//! CSV Export functionality
//!
//! Exports the raw synthetic dataset, one row per (city, category) with one
//! column per month.

use crate::dataset::Dataset;
use crate::error::DashboardResult;
use crate::models::{City, CostCategory, MONTH_LABELS};
use std::io::Write;

/// Export every series of the dataset to CSV
pub fn export_dataset_csv<W: Write>(dataset: &Dataset, writer: W) -> DashboardResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header = vec!["City", "Category"];
    header.extend(MONTH_LABELS);
    header.extend(["Min", "Max", "Average"]);
    csv_writer.write_record(&header)?;

    for city in City::ALL {
        for category in CostCategory::ALL {
            let series = dataset.series(category, city);
            let mut record = vec![city.name().to_string(), category.to_string()];
            record.extend(series.values().iter().map(|v| format!("{:.2}", v)));
            for summary in [series.min(), series.max(), series.mean()] {
                record.push(format!("{:.2}", summary));
            }
            csv_writer.write_record(&record)?;
        }
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MonthlySeries, MONTHS};

    #[test]
    fn test_dataset_csv_rows() {
        let dataset = Dataset::from_fn(|category, _| match category {
            CostCategory::Rent => MonthlySeries::new([1500.0; MONTHS]),
            CostCategory::Groceries => MonthlySeries::new([350.5; MONTHS]),
            CostCategory::Utilities => MonthlySeries::new([99.99; MONTHS]),
        });

        let mut buffer = Vec::new();
        export_dataset_csv(&dataset, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 1 + City::COUNT * 3);
        assert!(lines[0].starts_with("City,Category,2024-07,"));
        assert!(lines[0].ends_with("2025-06,Min,Max,Average"));
        assert!(lines[1].starts_with("Toronto,rent,1500.00,"));
        assert!(lines[2].ends_with(",350.50"));
    }

    #[test]
    fn test_summary_columns() {
        let mut values = [300.0; MONTHS];
        values[3] = 310.0;
        values[9] = 290.0;
        let dataset = Dataset::from_fn(|_, _| MonthlySeries::new(values));

        let mut buffer = Vec::new();
        export_dataset_csv(&dataset, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let first_row = text.lines().nth(1).unwrap();

        assert!(first_row.ends_with(",290.00,310.00,300.00"));
    }

    #[test]
    fn test_names_with_punctuation_are_quoted_correctly() {
        let dataset = Dataset::generate_seeded(1);
        let mut buffer = Vec::new();
        export_dataset_csv(&dataset, &mut buffer).unwrap();

        let mut reader = csv::Reader::from_reader(buffer.as_slice());
        let cities: Vec<String> = reader
            .records()
            .map(|r| r.unwrap()[0].to_string())
            .collect();
        assert!(cities.iter().any(|c| c == "St. John's"));
        assert!(cities.iter().any(|c| c == "Quebec City"));
    }
}
