//! The fixed student record written through the round trip

/// Three-field text record. Rendered as `Label: value` lines, one per
/// field, trailing newline included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub student_number: String,
    pub name: String,
    pub course: String,
}

impl Default for Record {
    fn default() -> Self {
        Self {
            student_number: "00611723".to_string(),
            name: "Andrew McCord".to_string(),
            course: "Operating Systems".to_string(),
        }
    }
}

impl Record {
    /// Render the record to the UTF-8 text that goes on disk.
    pub fn render(&self) -> String {
        format!(
            "Student Number: {}\nName: {}\nCourse: {}\n",
            self.student_number, self.name, self.course
        )
    }
}
