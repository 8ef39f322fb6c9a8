use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::EmptyName;

/// Opaque record identifier.
///
/// The data service is free to send ids as JSON integers or strings; both land
/// here as canonical text so that `1` and `"1"` compare equal. A fractional
/// number is not an id and fails to decode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordId(pub String);

impl RecordId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Signed(i64),
            Unsigned(u64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Signed(v) => Self(v.to_string()),
            RawId::Unsigned(v) => Self(v.to_string()),
            RawId::Text(v) => Self(v),
        })
    }
}

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub RecordId);

        impl $name {
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(RecordId(value.to_string()))
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(RecordId(value))
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(RecordId(value.to_string()))
            }
        }
    };
}

id_newtype!(StudentId);
id_newtype!(SemesterId);
id_newtype!(ClassId);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    #[serde(rename = "student_name", alias = "name")]
    pub name: String,
    #[serde(default)]
    pub semesters: Vec<Semester>,
}

impl Student {
    /// First semester whose id equals `id`.
    pub fn semester(&self, id: &SemesterId) -> Option<&Semester> {
        self.semesters.iter().find(|semester| &semester.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Semester {
    pub id: SemesterId,
    pub name: String,
    #[serde(default)]
    pub classes: Vec<Class>,
}

impl Semester {
    /// First class whose id equals `id`.
    pub fn class(&self, id: &ClassId) -> Option<&Class> {
        self.classes.iter().find(|class| &class.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
    pub id: ClassId,
    pub name: String,
    #[serde(default)]
    pub grades: Vec<Grade>,
}

impl Class {
    /// The grade record shown for this enrollment. Later records are ignored.
    pub fn grade(&self) -> Option<&Grade> {
        self.grades.first()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    #[serde(default, rename = "midterm_grade", alias = "midterm")]
    pub midterm: Option<f64>,
    #[serde(default, rename = "final_grade", alias = "final")]
    pub final_grade: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A student name ready to be sent to the data service: trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchName(String);

impl SearchName {
    pub fn parse(raw: &str) -> Result<Self, EmptyName> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(EmptyName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
