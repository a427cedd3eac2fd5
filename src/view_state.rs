//! View State Transitions
//!
//! Every backend call ends in one of two ways: the collection is replaced or
//! a refresh is requested on success, and a single alert is raised on failure.
//! Kept free of Leptos so the transitions can be tested natively.

use crate::models::Grocery;
use crate::store::AppState;

/// Result of one backend call, as far as the view cares
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Full table read succeeded; `generation` is the reload that issued it
    Listed { generation: u32, groceries: Vec<Grocery> },
    /// Insert or delete succeeded
    Mutated,
    /// Any backend error, raw message
    Failed(String),
}

impl Outcome {
    pub fn from_list(generation: u32, result: Result<Vec<Grocery>, String>) -> Self {
        match result {
            Ok(groceries) => Outcome::Listed { generation, groceries },
            Err(e) => Outcome::Failed(e),
        }
    }

    pub fn from_mutation<T>(result: Result<T, String>) -> Self {
        match result {
            Ok(_) => Outcome::Mutated,
            Err(e) => Outcome::Failed(e),
        }
    }
}

/// What the component layer has to do after applying an outcome
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Followup {
    #[default]
    None,
    /// Re-run the initial load
    Refresh,
    /// Blocking notification with the raw error
    Alert(String),
}

impl AppState {
    pub fn apply(&mut self, outcome: Outcome) -> Followup {
        match outcome {
            // a newer reload has started; its listing wins
            Outcome::Listed { generation, .. } if generation != self.generation => Followup::None,
            Outcome::Listed { groceries, .. } => {
                self.groceries = groceries;
                Followup::None
            }
            Outcome::Mutated => {
                self.reset_draft();
                Followup::Refresh
            }
            Outcome::Failed(message) => Followup::Alert(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Price;

    fn grocery(id: i64, name: &str, price: f64) -> Grocery {
        Grocery { id, name: name.to_string(), price: Some(Price::Number(price)), created_at: None }
    }

    fn labels(state: &AppState) -> Vec<String> {
        state.groceries.iter().map(Grocery::label).collect()
    }

    #[test]
    fn test_list_replaces_in_backend_order() {
        let mut state = AppState::new();
        state.groceries = vec![grocery(1, "Stale", 1.0)];

        let fetched = vec![grocery(3, "Eggs", 4.0), grocery(1, "Bread", 2.0), grocery(2, "Milk", 2.5)];
        let followup = state.apply(Outcome::from_list(0, Ok(fetched.clone())));

        assert_eq!(followup, Followup::None);
        assert_eq!(state.groceries, fetched);
    }

    #[test]
    fn test_empty_table_renders_nothing_and_no_alert() {
        let mut state = AppState::new();
        let followup = state.apply(Outcome::from_list(0, Ok(vec![])));
        assert_eq!(followup, Followup::None);
        assert!(state.groceries.is_empty());
    }

    #[test]
    fn test_failed_list_alerts_once_and_keeps_state() {
        let mut state = AppState::new();
        let existing = vec![grocery(1, "Bread", 2.0)];
        state.groceries = existing.clone();

        for _ in 0..3 {
            let followup = state.apply(Outcome::from_list(0, Err("connection refused".into())));
            assert_eq!(followup, Followup::Alert("connection refused".into()));
            assert_eq!(state.groceries, existing);
        }
    }

    #[test]
    fn test_add_success_refreshes_then_shows_item_once() {
        let mut state = AppState::new();
        state.name = "Milk".into();
        state.price = "2.5".into();

        let created = grocery(9, "Milk", 2.5);
        let followup = state.apply(Outcome::from_mutation(Ok(created.clone())));
        assert_eq!(followup, Followup::Refresh);
        assert_eq!(state.name, "");
        assert_eq!(state.price, crate::store::DEFAULT_PRICE);

        // the refresh re-lists from the backend
        state.apply(Outcome::from_list(0, Ok(vec![grocery(1, "Bread", 2.0), created])));
        let milk = labels(&state).into_iter().filter(|l| l == "Milk - $2.5").count();
        assert_eq!(milk, 1);
    }

    #[test]
    fn test_add_failure_alerts_without_refresh_and_keeps_inputs() {
        let mut state = AppState::new();
        state.name = "Milk".into();
        state.price = "abc".into();

        let followup = state.apply(Outcome::from_mutation::<Grocery>(Err("invalid input syntax for type numeric".into())));
        assert_eq!(followup, Followup::Alert("invalid input syntax for type numeric".into()));
        assert_eq!(state.name, "Milk");
        assert_eq!(state.price, "abc");
    }

    #[test]
    fn test_delete_success_refreshes_and_item_is_gone() {
        let mut state = AppState::new();
        state.groceries = vec![grocery(7, "Milk", 2.5), grocery(8, "Eggs", 4.0)];

        let followup = state.apply(Outcome::from_mutation(Ok(())));
        assert_eq!(followup, Followup::Refresh);

        state.apply(Outcome::from_list(0, Ok(vec![grocery(8, "Eggs", 4.0)])));
        assert!(state.groceries.iter().all(|g| g.id != 7));
    }

    #[test]
    fn test_delete_failure_alerts_without_refresh() {
        let mut state = AppState::new();
        state.groceries = vec![grocery(7, "Milk", 2.5)];

        let followup = state.apply(Outcome::from_mutation::<()>(Err("permission denied".into())));
        assert_eq!(followup, Followup::Alert("permission denied".into()));
        assert_eq!(state.groceries.len(), 1);
    }

    #[test]
    fn test_stale_listing_is_dropped() {
        let mut state = AppState::new();
        state.groceries = vec![grocery(7, "Milk", 2.5), grocery(8, "Eggs", 4.0)];

        // two deletes in a row: reload 1 then reload 2
        state.begin_reload(1);
        state.begin_reload(2);

        let fresh = vec![];
        assert_eq!(state.apply(Outcome::from_list(2, Ok(fresh))), Followup::None);
        assert!(state.groceries.is_empty());

        // reload 1 read the table before the second delete and lands last
        let stale = vec![grocery(8, "Eggs", 4.0)];
        assert_eq!(state.apply(Outcome::from_list(1, Ok(stale))), Followup::None);
        assert!(state.groceries.is_empty());
    }

    #[test]
    fn test_stale_listing_failure_still_alerts() {
        let mut state = AppState::new();
        state.begin_reload(3);
        let followup = state.apply(Outcome::from_list(2, Err("timeout".into())));
        assert_eq!(followup, Followup::Alert("timeout".into()));
    }

    #[test]
    fn test_raw_price_kept_until_refresh() {
        let mut state = AppState::new();
        assert_eq!(state.price, crate::store::DEFAULT_PRICE);

        // a number input mid-edit reports an empty value; it is stored as-is
        state.price = String::new();
        let followup = state.apply(Outcome::from_mutation::<Grocery>(Err("null value in column \"price\"".into())));
        assert!(matches!(followup, Followup::Alert(_)));
        assert_eq!(state.price, "");
    }
}
