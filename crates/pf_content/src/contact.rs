use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Just the rough shape: something@something.something
    static ref EMAIL_SHAPE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
}

#[derive(Debug, PartialEq)]
pub enum ValidationError {
    MissingName,
    MissingEmail,
    MissingMessage,
    InvalidEmail,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingName => write!(f, "Your name is required"),
            Self::MissingEmail => write!(f, "Your email is required"),
            Self::MissingMessage => write!(f, "A message is required"),
            Self::InvalidEmail => write!(f, "That email address does not look valid"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Local acknowledgement of a submitted form. Nothing leaves the process.
#[derive(Debug, PartialEq)]
pub struct Acknowledgement {
    pub message: String,
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new() -> Self {
        ContactForm {
            name: "".to_string(),
            email: "".to_string(),
            message: "".to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }

        if self.email.trim().is_empty() {
            return Err(ValidationError::MissingEmail);
        }

        if !EMAIL_SHAPE.is_match(self.email.trim()) {
            return Err(ValidationError::InvalidEmail);
        }

        if self.message.trim().is_empty() {
            return Err(ValidationError::MissingMessage);
        }

        Ok(())
    }

    /// Submission is local only: validate, acknowledge, clear the fields.
    /// On failure the fields are left untouched.
    pub fn submit(&mut self) -> Result<Acknowledgement, ValidationError> {
        self.validate()?;

        let ack = Acknowledgement {
            message: format!(
                "Thank you for your message, {}! I'll get back to you soon.",
                self.name
            ),
        };

        self.name.clear();
        self.email.clear();
        self.message.clear();

        Ok(ack)
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}
