use crate::Error;

/// One ranked entity: an opaque label and one raw value per criterion.
#[derive(Clone, Debug, PartialEq)]
pub struct Alternative {
    pub label: String,
    pub values: Vec<f64>,
}

/// A table of alternatives. Every row has exactly one value per criterion column, all values are
/// finite, and there are at least 2 criteria.
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    label_header: String,
    criteria: Vec<String>,
    rows: Vec<Alternative>,
}

impl Table {
    pub fn new(
        label_header: impl Into<String>,
        criteria: Vec<String>,
        rows: Vec<Alternative>,
    ) -> Result<Self, Error> {
        if criteria.len() < 2 {
            return Err(Error::InsufficientColumns {
                found: criteria.len() + 1,
            });
        }
        for (index, row) in rows.iter().enumerate() {
            if row.values.len() != criteria.len() {
                return Err(Error::RaggedRow {
                    row: index + 1,
                    expected: criteria.len() + 1,
                    found: row.values.len() + 1,
                });
            }
            if let Some((column, value)) = criteria
                .iter()
                .zip(&row.values)
                .find(|(_, value)| !value.is_finite())
            {
                return Err(Error::NonNumericCriterion {
                    row: index + 1,
                    column: column.clone(),
                    value: value.to_string(),
                });
            }
        }
        Ok(Self {
            label_header: label_header.into(),
            criteria,
            rows,
        })
    }

    /// Build a table from a header and string records, the way a delimited file reader hands them
    /// over. The first field of the header and of each record is the label column. Row numbers in
    /// errors are 1-based and do not count the header.
    pub fn from_records<H, R, F>(header: H, records: R) -> Result<Self, Error>
    where
        H: IntoIterator,
        H::Item: AsRef<str>,
        R: IntoIterator<Item = F>,
        F: IntoIterator,
        F::Item: AsRef<str>,
    {
        let header: Vec<String> = header.into_iter().map(|h| h.as_ref().to_string()).collect();
        if header.len() < 3 {
            return Err(Error::InsufficientColumns {
                found: header.len(),
            });
        }
        let mut header = header.into_iter();
        let label_header = header.next().unwrap_or_default();
        let criteria: Vec<String> = header.collect();

        let rows = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                let fields: Vec<String> = record
                    .into_iter()
                    .map(|f| f.as_ref().to_string())
                    .collect();
                if fields.len() != criteria.len() + 1 {
                    return Err(Error::RaggedRow {
                        row: index + 1,
                        expected: criteria.len() + 1,
                        found: fields.len(),
                    });
                }
                let mut fields = fields.into_iter();
                let label = fields.next().unwrap_or_default();
                let values = criteria
                    .iter()
                    .zip(fields)
                    .map(|(column, field)| parse_criterion(index + 1, column, field))
                    .collect::<Result<Vec<f64>, Error>>()?;
                Ok(Alternative { label, values })
            })
            .collect::<Result<Vec<Alternative>, Error>>()?;

        Self::new(label_header, criteria, rows)
    }

    pub fn label_header(&self) -> &str {
        &self.label_header
    }

    pub fn criteria(&self) -> &[String] {
        &self.criteria
    }

    pub fn rows(&self) -> &[Alternative] {
        &self.rows
    }

    /// Total column count, label column included.
    pub fn column_count(&self) -> usize {
        self.criteria.len() + 1
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over the raw values of criterion column `index`, in row order.
    pub fn column(&self, index: usize) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(move |row| row.values[index])
    }
}

fn parse_criterion(row: usize, column: &str, field: String) -> Result<f64, Error> {
    match field.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(Error::NonNumericCriterion {
            row,
            column: column.to_string(),
            value: field,
        }),
    }
}

#[cfg(test)]
mod test {
    use super::{Alternative, Table};
    use crate::Error;

    #[test]
    fn from_records() {
        let table = Table::from_records(
            ["Model", "Price", "Storage"],
            [["M1", "250", " 16"], ["M2", "200.5", "32"]],
        )
        .unwrap();
        assert_eq!(table.label_header(), "Model");
        assert_eq!(table.criteria(), ["Price", "Storage"]);
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.rows()[1],
            Alternative {
                label: "M2".to_string(),
                values: vec![200.5, 32.0],
            }
        );
        assert_eq!(table.column(0).collect::<Vec<_>>(), vec![250.0, 200.5]);
    }

    #[test]
    fn insufficient_columns() {
        assert_eq!(
            Table::from_records(["Model", "Price"], [["M1", "250"]]),
            Err(Error::InsufficientColumns { found: 2 })
        );
        assert_eq!(
            Table::new("Model", vec!["Price".to_string()], vec![]),
            Err(Error::InsufficientColumns { found: 2 })
        );
    }

    #[test]
    fn non_numeric_criterion() {
        assert_eq!(
            Table::from_records(
                ["Model", "Price", "Storage"],
                [["M1", "250", "16"], ["M2", "cheap", "32"]],
            ),
            Err(Error::NonNumericCriterion {
                row: 2,
                column: "Price".to_string(),
                value: "cheap".to_string(),
            })
        );
        assert!(matches!(
            Table::from_records(["Model", "Price", "Storage"], [["M1", "NaN", "16"]]),
            Err(Error::NonNumericCriterion { row: 1, .. })
        ));
    }

    #[test]
    fn ragged_row() {
        let records: Vec<Vec<&str>> = vec![vec!["M1", "250", "16"], vec!["M2", "200"]];
        assert_eq!(
            Table::from_records(["Model", "Price", "Storage"], records),
            Err(Error::RaggedRow {
                row: 2,
                expected: 3,
                found: 2,
            })
        );
        let rows = vec![Alternative {
            label: "M1".to_string(),
            values: vec![1.0, 2.0, 3.0],
        }];
        assert_eq!(
            Table::new("Model", vec!["A".to_string(), "B".to_string()], rows),
            Err(Error::RaggedRow {
                row: 1,
                expected: 3,
                found: 4,
            })
        );
    }
}
