//! Input validation limits applied by callers before touching the network

/// Maximum length for person names (256 chars)
pub const MAX_NAME_LEN: usize = 256;

/// Maximum hobbies per person (100)
pub const MAX_HOBBIES_PER_PERSON: usize = 100;

/// Maximum hobby length (64 chars)
pub const MAX_HOBBY_LEN: usize = 64;

/// Maximum plausible age (150)
pub const MAX_AGE: u32 = 150;

/// Maximum friend suggestions in a single query (1000)
pub const MAX_SUGGESTIONS: usize = 1000;

/// Validation error type
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    EmptyName,
    NameTooLong { len: usize, max: usize },
    TooManyHobbies { count: usize, max: usize },
    EmptyHobby,
    HobbyTooLong { len: usize, max: usize },
    AgeTooLarge { age: u32, max: u32 },
    ZeroSuggestions,
    TooManySuggestions { count: usize, max: usize },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::NameTooLong { len, max } => {
                write!(f, "Name too long: {} chars (max {})", len, max)
            }
            Self::TooManyHobbies { count, max } => {
                write!(f, "Too many hobbies: {} (max {})", count, max)
            }
            Self::EmptyHobby => write!(f, "Hobby cannot be empty"),
            Self::HobbyTooLong { len, max } => {
                write!(f, "Hobby too long: {} chars (max {})", len, max)
            }
            Self::AgeTooLarge { age, max } => write!(f, "Age too large: {} (max {})", age, max),
            Self::ZeroSuggestions => write!(f, "Suggestion count must be positive"),
            Self::TooManySuggestions { count, max } => {
                write!(f, "Too many suggestions requested: {} (max {})", count, max)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate a person's name
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::NameTooLong {
            len: name.chars().count(),
            max: MAX_NAME_LEN,
        });
    }
    Ok(())
}

/// Validate a hobby list
pub fn validate_hobbies(hobbies: &[String]) -> Result<(), ValidationError> {
    if hobbies.len() > MAX_HOBBIES_PER_PERSON {
        return Err(ValidationError::TooManyHobbies {
            count: hobbies.len(),
            max: MAX_HOBBIES_PER_PERSON,
        });
    }
    for hobby in hobbies {
        if hobby.trim().is_empty() {
            return Err(ValidationError::EmptyHobby);
        }
        if hobby.chars().count() > MAX_HOBBY_LEN {
            return Err(ValidationError::HobbyTooLong {
                len: hobby.chars().count(),
                max: MAX_HOBBY_LEN,
            });
        }
    }
    Ok(())
}

/// Validate age
pub fn validate_age(age: u32) -> Result<(), ValidationError> {
    if age > MAX_AGE {
        return Err(ValidationError::AgeTooLarge { age, max: MAX_AGE });
    }
    Ok(())
}

/// Validate the requested number of suggestions
pub fn validate_suggestion_count(count: usize) -> Result<(), ValidationError> {
    if count == 0 {
        return Err(ValidationError::ZeroSuggestions);
    }
    if count > MAX_SUGGESTIONS {
        return Err(ValidationError::TooManySuggestions {
            count,
            max: MAX_SUGGESTIONS,
        });
    }
    Ok(())
}
