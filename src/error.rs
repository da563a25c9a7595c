use thiserror::Error;

#[derive(Error, Debug)]
pub enum FollowCheckError {
    #[error("Input file not found: {path}")]
    NotFound { path: String },

    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("File is not valid UTF-8 text: {path}")]
    Decode { path: String },
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for FollowCheckError {
    fn user_message(&self) -> String {
        match self {
            FollowCheckError::NotFound { path } => {
                format!("Input file not found: {}", path)
            }
            FollowCheckError::Io(err) => {
                format!("An I/O error occurred while reading the file: {}", err)
            }
            FollowCheckError::Decode { path } => {
                format!("A decoding error occurred while reading {}: not valid UTF-8", path)
            }
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            FollowCheckError::NotFound { .. } => Some(
                "Make sure both export files sit side by side. Copy the Follow/Followers \
                 panels from your account's following/followers views on the website into \
                 following.txt (accounts you follow) and followers.txt (accounts following you)."
                    .to_string(),
            ),
            FollowCheckError::Decode { .. } => Some(
                "Re-save the export as plain UTF-8 text. Word processors sometimes write a \
                 different encoding."
                    .to_string(),
            ),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FollowCheckError>;
