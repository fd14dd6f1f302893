//! Static descriptors of supported grades and file formats

use serde::{Deserialize, Serialize};
use tactile_core::Grade;

/// Description of one Braille grade
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeDescriptor {
    /// Wire identifier
    pub grade: Grade,
    /// Display name
    pub name: String,
    /// What the grade does
    pub description: String,
    /// Who it suits
    pub recommended: String,
}

/// Supported download format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFormat {
    /// File extension including the dot
    pub extension: String,
    /// What the format contains
    pub description: String,
}

/// Everything the info endpoint reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrailleInfo {
    /// Supported grades
    pub supported_grades: Vec<GradeDescriptor>,
    /// Feature list
    pub features: Vec<String>,
    /// Download formats
    pub file_formats: Vec<FileFormat>,
}

impl GradeDescriptor {
    /// Descriptor for `grade`
    pub fn for_grade(grade: Grade) -> Self {
        let (name, description, recommended) = match grade {
            Grade::Grade1 => (
                "Grade 1 (Uncontracted)",
                "Letter-by-letter transcription with no contractions",
                "Beginners, mathematical content, proper names",
            ),
            Grade::Grade2 => (
                "Grade 2 (Contracted)",
                "Uses contractions and abbreviations for efficiency",
                "General reading, literature, most documents",
            ),
        };

        Self {
            grade,
            name: name.to_string(),
            description: description.to_string(),
            recommended: recommended.to_string(),
        }
    }
}

/// Static service description
pub fn braille_info() -> BrailleInfo {
    BrailleInfo {
        supported_grades: Grade::ALL.into_iter().map(GradeDescriptor::for_grade).collect(),
        features: [
            "Real-time conversion",
            "Multiple Braille grades",
            "Print-ready formatting",
            "BRF file format support",
            "Statistics and metadata",
            "Copy/paste functionality",
        ]
        .into_iter()
        .map(String::from)
        .collect(),
        file_formats: vec![
            FileFormat {
                extension: ".brf".to_string(),
                description: "Braille Ready Format - standard for Braille files".to_string(),
            },
            FileFormat {
                extension: ".txt".to_string(),
                description: "Plain text with Braille Unicode characters".to_string(),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_grades_in_order() {
        let info = braille_info();
        let grades: Vec<Grade> = info.supported_grades.iter().map(|g| g.grade).collect();
        assert_eq!(grades, vec![Grade::Grade1, Grade::Grade2]);
        assert_eq!(info.supported_grades[1].name, "Grade 2 (Contracted)");
    }

    #[test]
    fn test_file_formats() {
        let info = braille_info();
        let extensions: Vec<&str> = info
            .file_formats
            .iter()
            .map(|f| f.extension.as_str())
            .collect();
        assert_eq!(extensions, vec![".brf", ".txt"]);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(braille_info()).unwrap();
        assert_eq!(json["supportedGrades"][0]["grade"], "grade1");
        assert_eq!(json["fileFormats"][0]["extension"], ".brf");
        assert_eq!(json["features"].as_array().unwrap().len(), 6);
    }
}
