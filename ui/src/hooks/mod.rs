pub mod use_content;
pub mod use_fetch;
pub mod use_place_suggestions;
pub mod use_title;

pub use use_content::use_content;
pub use use_fetch::{FetchHookReturn, use_fetch};
pub use use_place_suggestions::use_place_suggestions;
pub use use_title::use_title;

/// Distinguishes "not loaded yet" from "loaded and empty".
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    NotFetched,
    Fetched(T),
}

impl<T> FetchState<T> {
    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::NotFetched => None,
            Self::Fetched(data) => Some(data),
        }
    }

    pub fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }
}
