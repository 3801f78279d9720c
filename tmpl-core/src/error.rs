use thiserror::Error;

#[derive(Error, Debug)]
pub enum TmplError {
    #[error("Template '{0}' not found")]
    TemplateNotFound(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Processor error: {0}")]
    Processor(#[from] ProcessorError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TmplError {
    /// HTTP status a hosting framework should answer with. Every failure here is server-side.
    pub fn status_code(&self) -> u16 {
        500
    }
}

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("{processor} failed: {reason}")]
    Failed { processor: String, reason: String },
}

impl ProcessorError {
    pub fn failed(processor: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Failed {
            processor: processor.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TmplError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_and_status() {
        let errors = [
            TmplError::TemplateNotFound("index.html".to_string()),
            TmplError::Render("Variable `foo` not found".to_string()),
            TmplError::Processor(ProcessorError::failed("session", "store offline")),
            TmplError::Config("bad glob".to_string()),
            TmplError::Serialization(serde_json::from_str::<serde_json::Value>("{").unwrap_err()),
        ];
        let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();

        assert_eq!(messages[0], "Template 'index.html' not found");
        assert_eq!(messages[1], "Render error: Variable `foo` not found");
        assert_eq!(messages[2], "Processor error: session failed: store offline");
        assert_eq!(messages[3], "Config error: bad glob");
        assert!(messages[4].starts_with("Serialization error: "));
        assert!(errors.iter().all(|e| e.status_code() == 500));
    }
}
