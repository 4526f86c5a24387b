use std::fmt;

use crate::domain::{ItemRecord, OrderRecord};

const ORDER_COLUMNS: [&str; 4] = ["ID", "customer_id", "tracking_id", "status"];
const ITEM_COLUMNS: [&str; 5] = ["Item ID", "Product_id", "quantity", "Price", "Order ID"];

/// A rendered search result: a fixed header and one row per record, in the
/// order the server returned them.
///
/// The default value is a container that has not been rendered into yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultsTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ResultsTable {
    pub fn orders(records: &[OrderRecord]) -> Self {
        Self {
            columns: ORDER_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows: records
                .iter()
                .map(|o| vec![o.id.clone(), o.customer_id.clone(), o.tracking_id.clone(), o.status.clone()])
                .collect(),
        }
    }

    pub fn items(records: &[ItemRecord]) -> Self {
        Self {
            columns: ITEM_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows: records
                .iter()
                .map(|i| {
                    vec![
                        i.id.clone(),
                        i.product_id.clone(),
                        i.quantity.clone(),
                        i.price.clone(),
                        i.order_id.clone(),
                    ]
                })
                .collect(),
        }
    }

    pub fn is_rendered(&self) -> bool {
        !self.columns.is_empty()
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }
}

impl fmt::Display for ResultsTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.widths();
        write_row(f, &self.columns, &widths)?;
        let rule = widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("-+-");
        writeln!(f, "{rule}")?;
        for row in &self.rows {
            write_row(f, row, &widths)?;
        }
        Ok(())
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, cells: &[String], widths: &[usize]) -> fmt::Result {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(" | ");
    writeln!(f, "{}", line.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, product_id: &str) -> ItemRecord {
        ItemRecord {
            id: id.into(),
            order_id: "7".into(),
            product_id: product_id.into(),
            quantity: "1".into(),
            price: "9.99".into(),
        }
    }

    #[test]
    fn empty_listing_renders_header_only() {
        let table = ResultsTable::items(&[]);
        assert!(table.is_rendered());
        assert!(table.rows.is_empty());

        let text = table.to_string();
        assert_eq!(text.lines().count(), 2);
        assert!(text.starts_with("Item ID | Product_id | quantity | Price | Order ID"));
    }

    #[test]
    fn rows_keep_server_order() {
        let table = ResultsTable::items(&[item("3", "300"), item("1", "100")]);
        assert_eq!(table.rows[0][0], "3");
        assert_eq!(table.rows[1][0], "1");
        assert_eq!(table.rows[1], vec!["1", "100", "1", "9.99", "7"]);
    }

    #[test]
    fn columns_are_padded_to_widest_cell() {
        let order = OrderRecord {
            id: "12345678901".into(),
            customer_id: "42".into(),
            tracking_id: "T1".into(),
            status: "PLACED".into(),
            created_time: String::new(),
        };
        let text = ResultsTable::orders(&[order]).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "ID          | customer_id | tracking_id | status");
        assert_eq!(lines[2], "12345678901 | 42          | T1          | PLACED");
    }

    #[test]
    fn default_table_is_not_rendered() {
        assert!(!ResultsTable::default().is_rendered());
    }
}
