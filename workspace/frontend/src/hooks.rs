/// API fetch state enum
#[derive(Clone, PartialEq)]
pub enum FetchState<T> {
    NotStarted,
    Loading,
    Success(T),
    Error(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::NotStarted
    }
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&String> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }
}

/// Where a rendered section's data came from.
///
/// Every section that can fall back to generated demo content resolves to
/// one of these two tags before rendering, so templates branch on the tag
/// instead of on scattered null checks.
#[derive(Clone, PartialEq)]
pub enum DataSource<T> {
    /// Data fetched from the prediction API.
    Live(T),
    /// The API call failed or returned nothing; the section renders its
    /// deterministic demo content instead.
    Unavailable,
}

impl<T> DataSource<T> {
    pub fn is_live(&self) -> bool {
        matches!(self, Self::Live(_))
    }

    pub fn live(&self) -> Option<&T> {
        match self {
            Self::Live(data) => Some(data),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_state_accessors() {
        let state: FetchState<i32> = FetchState::Success(7);
        assert!(state.is_success());
        assert_eq!(state.data(), Some(&7));
        assert!(state.error().is_none());

        let state: FetchState<i32> = FetchState::Error("boom".to_string());
        assert!(state.is_error());
        assert_eq!(state.error().map(String::as_str), Some("boom"));
    }

    #[test]
    fn data_source_tags() {
        let live = DataSource::Live(vec![1, 2]);
        assert!(live.is_live());
        assert_eq!(live.live(), Some(&vec![1, 2]));

        let unavailable: DataSource<Vec<i32>> = DataSource::Unavailable;
        assert!(!unavailable.is_live());
        assert!(unavailable.live().is_none());
    }
}
