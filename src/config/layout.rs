use serde::{Deserialize, Serialize};

/// Named-column contract for the `course details` sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseLayout {
    pub code: String,
    pub title: String,
    pub credits: String,
    pub faculty: String,
    pub department: String,
    pub weeks: Vec<String>,
    pub internal_assessment: String,
    pub mid_semester: String,
    pub end_semester: String,
}

impl Default for CourseLayout {
    fn default() -> Self {
        Self {
            code: "Course Code".to_string(),
            title: "Course Title".to_string(),
            credits: "Credits".to_string(),
            faculty: "Faculty".to_string(),
            department: "Department".to_string(),
            weeks: (1..=15).map(|w| format!("Week {w}")).collect(),
            internal_assessment: "Internal Assessment".to_string(),
            mid_semester: "Mid Semester Exam".to_string(),
            end_semester: "End Semester Exam".to_string(),
        }
    }
}

impl CourseLayout {
    /// Every column the layout requires, in sheet order.
    pub fn required_columns(&self) -> Vec<&str> {
        let mut cols = vec![
            self.code.as_str(),
            self.title.as_str(),
            self.credits.as_str(),
            self.faculty.as_str(),
            self.department.as_str(),
        ];
        cols.extend(self.weeks.iter().map(String::as_str));
        cols.push(self.internal_assessment.as_str());
        cols.push(self.mid_semester.as_str());
        cols.push(self.end_semester.as_str());
        cols
    }

    /// Columns of `layout` that are absent from `header`.
    pub fn missing_from<'a>(&'a self, header: &[String]) -> Vec<&'a str> {
        self.required_columns()
            .into_iter()
            .filter(|c| !header.iter().any(|h| h == c))
            .collect()
    }
}
