use serde::Serialize;

/// Course details extracted from one row of the course sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseRecord {
    pub code: String,
    pub title: String,
    pub credits: String,
    pub faculty: String,
    pub department: String,
    /// (week column, planned topic) in sheet order; blank weeks are skipped
    pub weeks: Vec<(String, String)>,
    pub internal_assessment: String,
    pub mid_semester: String,
    pub end_semester: String,
}
