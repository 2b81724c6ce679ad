use super::cell::CellValue;
use chrono::NaiveDate;

/// One spreadsheet row: named cells in column order.
///
/// Rows carry whatever columns their sheet defines; no key is enforced and
/// duplicates are kept.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: Vec<(String, CellValue)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pair `columns` with `row`; cells past the end of a short row are `Empty`.
    pub fn from_row(columns: &[String], row: &[CellValue]) -> Self {
        let fields = columns
            .iter()
            .enumerate()
            .map(|(i, c)| (c.clone(), row.get(i).cloned().unwrap_or(CellValue::Empty)))
            .collect();
        Self { fields }
    }

    pub fn get(&self, name: &str) -> Option<&CellValue> {
        self.fields.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    /// Display text of a non-blank field.
    pub fn text(&self, name: &str) -> Option<String> {
        self.get(name)
            .filter(|v| !v.is_blank())
            .map(|v| v.to_string().trim().to_string())
    }

    /// Display text of a field, `default` when missing or blank.
    pub fn text_or(&self, name: &str, default: &str) -> String {
        self.text(name).unwrap_or_else(|| default.to_string())
    }

    /// Replace the value of `name`, or append it as a new trailing column.
    pub fn set(&mut self, name: &str, value: CellValue) {
        match self.fields.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value,
            None => self.fields.push((name.to_string(), value)),
        }
    }

    pub fn with(mut self, name: &str, value: impl Into<CellValue>) -> Self {
        self.set(name, value.into());
        self
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A record whose `Date` column parsed to `date`.
#[derive(Debug, Clone, PartialEq)]
pub struct DatedRecord {
    pub date: NaiveDate,
    pub record: Record,
}
