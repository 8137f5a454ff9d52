use std::fmt;
use std::path::Path;

/// Directory-name suffix of second-coursework (Spark) projects.
pub const SPARK_SUFFIX: &str = "-spark";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Cw1,
    Cw2,
}

impl Variant {
    /// Plain suffix test on the path text; `foo-spark/` does not match.
    pub fn for_project(dir: &Path) -> Self {
        if dir.to_string_lossy().ends_with(SPARK_SUFFIX) {
            Variant::Cw2
        } else {
            Variant::Cw1
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Cw1 => "cw1",
            Variant::Cw2 => "cw2",
        }
    }

    pub fn source_file_name(self) -> String {
        format!("ImdbSuiteTester.{}.scala", self.as_str())
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
