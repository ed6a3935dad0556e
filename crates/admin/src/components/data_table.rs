//! Data table component types.
//!
//! These types build the option object handed to the data-grid widget. They
//! serialize to the widget's own key names (`dom`, `pagingType`,
//! `lengthMenu`, ...), so the page only has to pass the JSON through.

use std::collections::BTreeSet;

use regex::Regex;
use serde::ser::SerializeTuple;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Errors raised while building a table configuration.
#[derive(Debug, Error)]
pub enum GridError {
    /// The length menu has no entries.
    #[error("length menu cannot be empty")]
    EmptyLengthMenu,
    /// A page length of zero rows was requested.
    #[error("page length must be at least one row")]
    ZeroPageLength,
    /// A column search pattern failed to compile.
    #[error("invalid column search pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Pagination control style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PagingType {
    Numbers,
    Simple,
    SimpleNumbers,
    Full,
    FullNumbers,
    FirstLastNumbers,
}

/// One entry of the page-length dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLength {
    Rows(u32),
    /// Show every row; sent to the widget as `-1`.
    All,
}

impl PageLength {
    fn value(self) -> i64 {
        match self {
            Self::Rows(rows) => i64::from(rows),
            Self::All => -1,
        }
    }

    fn label(self) -> LengthLabel {
        match self {
            Self::Rows(rows) => LengthLabel::Rows(rows),
            Self::All => LengthLabel::Text("All"),
        }
    }
}

/// Dropdown label: row counts stay numeric, "All" is text.
#[derive(Serialize)]
#[serde(untagged)]
enum LengthLabel {
    Rows(u32),
    Text(&'static str),
}

/// Page-length dropdown, serialized as `[[values...], [labels...]]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthMenu(Vec<PageLength>);

impl LengthMenu {
    /// Build a length menu.
    ///
    /// # Errors
    ///
    /// Returns an error if `lengths` is empty or contains a zero-row entry.
    pub fn new(lengths: Vec<PageLength>) -> Result<Self, GridError> {
        if lengths.is_empty() {
            return Err(GridError::EmptyLengthMenu);
        }
        if lengths.contains(&PageLength::Rows(0)) {
            return Err(GridError::ZeroPageLength);
        }
        Ok(Self(lengths))
    }

    /// A single "All" entry.
    #[must_use]
    pub fn all_only() -> Self {
        Self(vec![PageLength::All])
    }

    #[must_use]
    pub fn lengths(&self) -> &[PageLength] {
        &self.0
    }
}

impl Serialize for LengthMenu {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let values: Vec<i64> = self.0.iter().map(|l| l.value()).collect();
        let labels: Vec<LengthLabel> = self.0.iter().map(|l| l.label()).collect();
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&values)?;
        tuple.serialize_element(&labels)?;
        tuple.end()
    }
}

/// Toolbar button provided by the widget's button extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TableButton {
    /// Column visibility picker.
    #[serde(rename = "colvis")]
    ColumnVisibility,
}

/// Option for a column filter dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    /// Option value.
    pub value: String,
    /// Display label.
    pub label: String,
}

impl FilterOption {
    /// Create a new filter option.
    #[must_use]
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// Select filter placed in a column's footer.
///
/// The dropdown lists the column's distinct values in sorted order after a
/// blank entry that clears the filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnFilter {
    pub column: String,
    pub options: Vec<FilterOption>,
}

impl ColumnFilter {
    /// Build the dropdown from the cell values of a column.
    pub fn from_values<I, S>(column: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let distinct: BTreeSet<String> = values
            .into_iter()
            .map(|value| value.as_ref().to_string())
            .collect();

        let options = std::iter::once(FilterOption::new("", ""))
            .chain(distinct.iter().map(|value| FilterOption::new(value, value)))
            .collect();

        Self {
            column: column.to_string(),
            options,
        }
    }

    /// Search pattern the widget applies for a selected value.
    ///
    /// The value must match the whole cell, so it is regex-escaped and
    /// anchored. An empty selection clears the search.
    #[must_use]
    pub fn search_pattern(selected: &str) -> String {
        if selected.is_empty() {
            String::new()
        } else {
            format!("^{}$", regex::escape(selected))
        }
    }

    /// Keep the cells that the widget would show for `selected`.
    ///
    /// # Errors
    ///
    /// Returns `GridError::Pattern` if the search pattern does not compile.
    pub fn filter_cells<'a>(
        selected: &str,
        cells: &'a [String],
    ) -> Result<Vec<&'a String>, GridError> {
        let pattern = Self::search_pattern(selected);
        if pattern.is_empty() {
            return Ok(cells.iter().collect());
        }
        let matcher = Regex::new(&pattern)?;
        Ok(cells.iter().filter(|cell| matcher.is_match(cell)).collect())
    }
}

/// Configuration for a data table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataTableConfig {
    /// Unique table identifier (element id of the table).
    #[serde(skip)]
    pub table_id: String,
    /// Layout string placing the widget's controls (`B`uttons, `l`ength,
    /// `f`ilter, `r`processing, `t`able, `i`nfo, `p`agination).
    pub dom: String,
    /// Pagination control style.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paging_type: Option<PagingType>,
    /// Whether the table scrolls horizontally.
    pub scroll_x: bool,
    /// Page-length dropdown.
    pub length_menu: LengthMenu,
    /// Toolbar buttons.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<TableButton>,
    /// Whether to build a select filter in every column footer.
    pub column_filters: bool,
}

impl DataTableConfig {
    /// Create a new data table configuration.
    #[must_use]
    pub fn new(table_id: &str) -> Self {
        Self {
            table_id: table_id.to_string(),
            dom: "lfrtip".to_string(),
            paging_type: None,
            scroll_x: false,
            length_menu: LengthMenu::all_only(),
            buttons: vec![],
            column_filters: false,
        }
    }

    /// Set the control layout string.
    #[must_use]
    pub fn dom(mut self, dom: &str) -> Self {
        self.dom = dom.to_string();
        self
    }

    /// Set the pagination style.
    #[must_use]
    pub const fn paging(mut self, paging_type: PagingType) -> Self {
        self.paging_type = Some(paging_type);
        self
    }

    /// Enable horizontal scrolling.
    #[must_use]
    pub const fn scroll_x(mut self) -> Self {
        self.scroll_x = true;
        self
    }

    /// Set the page-length dropdown.
    #[must_use]
    pub fn length_menu(mut self, length_menu: LengthMenu) -> Self {
        self.length_menu = length_menu;
        self
    }

    /// Add a toolbar button.
    #[must_use]
    pub fn button(mut self, button: TableButton) -> Self {
        self.buttons.push(button);
        self
    }

    /// Build footer select filters for every column.
    #[must_use]
    pub const fn with_column_filters(mut self) -> Self {
        self.column_filters = true;
        self
    }

    /// Option object as JSON for the page.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

/// Build the staff products table configuration.
#[must_use]
pub fn products_staff_table_config() -> DataTableConfig {
    let lengths = LengthMenu(vec![
        PageLength::Rows(25),
        PageLength::Rows(50),
        PageLength::Rows(100),
        PageLength::All,
    ]);

    DataTableConfig::new("products_staff_table")
        .dom("Blfrtip")
        .paging(PagingType::FullNumbers)
        .scroll_x()
        .length_menu(lengths)
        .button(TableButton::ColumnVisibility)
        .with_column_filters()
}

/// Build the cart table configuration: a bare table showing every row.
#[must_use]
pub fn cart_table_config() -> DataTableConfig {
    DataTableConfig::new("cart_table")
        .dom("")
        .length_menu(LengthMenu::all_only())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_products_config_json() {
        let value = products_staff_table_config().to_json().unwrap();
        assert_eq!(value["dom"], "Blfrtip");
        assert_eq!(value["pagingType"], "full_numbers");
        assert_eq!(value["scrollX"], true);
        assert_eq!(
            value["lengthMenu"],
            json!([[25, 50, 100, -1], [25, 50, 100, "All"]])
        );
        assert_eq!(value["buttons"], json!(["colvis"]));
        assert_eq!(value["columnFilters"], true);
        assert!(value.get("tableId").is_none());
        assert!(value.get("columns").is_none());
    }

    #[test]
    fn test_cart_config_json() {
        let value = cart_table_config().to_json().unwrap();
        assert_eq!(
            value,
            json!({
                "dom": "",
                "scrollX": false,
                "lengthMenu": [[-1], ["All"]],
                "columnFilters": false
            })
        );
    }

    #[test]
    fn test_length_menu_validation() {
        assert!(matches!(
            LengthMenu::new(vec![]),
            Err(GridError::EmptyLengthMenu)
        ));
        assert!(matches!(
            LengthMenu::new(vec![PageLength::Rows(0)]),
            Err(GridError::ZeroPageLength)
        ));
        let menu = LengthMenu::new(vec![PageLength::Rows(10), PageLength::All]).unwrap();
        assert_eq!(menu.lengths().len(), 2);
    }

    #[test]
    fn test_column_filter_options_sorted_unique() {
        let filter = ColumnFilter::from_values("category", ["Tea", "Coffee", "Tea", "Cocoa"]);
        let values: Vec<&str> = filter.options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["", "Cocoa", "Coffee", "Tea"]);
    }

    #[test]
    fn test_search_pattern_escaped_and_anchored() {
        assert_eq!(ColumnFilter::search_pattern(""), "");
        assert_eq!(ColumnFilter::search_pattern("Tea"), "^Tea$");
        assert_eq!(ColumnFilter::search_pattern("1.50 (x)"), r"^1\.50 \(x\)$");
    }

    #[test]
    fn test_filter_cells_whole_match() {
        let cells = vec![
            "Tea".to_string(),
            "Green Tea".to_string(),
            "Tea".to_string(),
            "T.a".to_string(),
        ];
        let matched = ColumnFilter::filter_cells("Tea", &cells).unwrap();
        assert_eq!(matched.len(), 2);
        let matched = ColumnFilter::filter_cells("T.a", &cells).unwrap();
        assert_eq!(matched, vec![&"T.a".to_string()]);
        let matched = ColumnFilter::filter_cells("", &cells).unwrap();
        assert_eq!(matched.len(), 4);
    }
}
