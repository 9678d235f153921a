//! Loading / Error / Empty selection for list and detail views

/// What a list view should render
#[derive(Debug, Clone, PartialEq)]
pub enum ListState<T> {
    Loading,
    Error(String),
    Empty,
    Ready(Vec<T>),
}

impl<T: Clone> ListState<T> {
    /// Errors win over data; cached data shows while a refresh runs.
    /// An empty result is never an error.
    pub fn select(data: Option<&Vec<T>>, loading: bool, error: Option<&str>) -> Self {
        if let Some(error) = error {
            return Self::Error(error.to_string());
        }
        match data {
            Some(items) if items.is_empty() => Self::Empty,
            Some(items) => Self::Ready(items.clone()),
            None if loading => Self::Loading,
            None => Self::Empty,
        }
    }
}

/// What a single-entity view should render
#[derive(Debug, Clone, PartialEq)]
pub enum EntityState<T> {
    Loading,
    Error(String),
    NotFound,
    Ready(T),
}

impl<T: Clone> EntityState<T> {
    pub fn select(data: Option<&Option<T>>, loading: bool, error: Option<&str>) -> Self {
        if let Some(error) = error {
            return Self::Error(error.to_string());
        }
        match data {
            Some(Some(entity)) => Self::Ready(entity.clone()),
            Some(None) => Self::NotFound,
            None if loading => Self::Loading,
            None => Self::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_selection() {
        assert_eq!(ListState::<u8>::select(None, true, None), ListState::Loading);
        assert_eq!(ListState::<u8>::select(Some(&vec![]), false, None), ListState::Empty);
        assert_eq!(ListState::select(Some(&vec![1]), true, None), ListState::Ready(vec![1]));
        assert_eq!(
            ListState::<u8>::select(None, false, Some("Network error")),
            ListState::Error("Network error".to_string())
        );
        assert_eq!(
            ListState::select(Some(&vec![1]), false, Some("boom")),
            ListState::Error("boom".to_string())
        );
    }

    #[test]
    fn test_entity_selection() {
        assert_eq!(EntityState::<u8>::select(None, true, None), EntityState::Loading);
        assert_eq!(EntityState::<u8>::select(Some(&None), false, None), EntityState::NotFound);
        assert_eq!(EntityState::select(Some(&Some(3)), false, None), EntityState::Ready(3));
        assert_eq!(EntityState::<u8>::select(None, false, None), EntityState::NotFound);
    }
}
