use std::fmt::{self, Display};

#[derive(Debug)]
pub struct CatalogError {
    info: String,
}

impl CatalogError {
    pub fn new(info: String) -> Self {
        Self { info }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        match value.classify() {
            serde_json::error::Category::Io => Self::new(format!("{value}")),
            serde_json::error::Category::Syntax => Self::new(format!(
                "Syntax error at line {} column {}",
                value.line(),
                value.column()
            )),
            serde_json::error::Category::Data => Self::new(format!("Invalid data: {value}")),
            serde_json::error::Category::Eof => Self::new(format!("Unexpected end of input")),
        }
    }
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.info)
    }
}

impl std::error::Error for CatalogError {}

#[derive(Debug)]
pub struct TypeError {
    info: String,
}

impl TypeError {
    pub fn new(info: &str) -> Self {
        Self {
            info: info.to_string(),
        }
    }
}

impl Display for TypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.info)
    }
}

impl std::error::Error for TypeError {}
