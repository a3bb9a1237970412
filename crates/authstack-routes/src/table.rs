//! The concurrent in-memory route table.

use dashmap::DashMap;

use crate::model::{Route, RouteKey};

/// Thread-safe, in-memory table of route metadata keyed by (URL, method).
///
/// The table is constructed explicitly and shared by reference; there is
/// no process-wide instance. `DashMap` provides internal synchronization,
/// so concurrent lookups and updates need no external lock.
///
/// # Examples
///
/// ```
/// use authstack_routes::{Route, RouteKey, RouteMethod, RouteTable};
///
/// let table = RouteTable::new();
/// let key = RouteKey::new("/api/v1/widgets", RouteMethod::Get);
/// table.insert(key.clone(), Route::default());
/// assert_eq!(table.len(), 1);
/// assert!(table.get(&key).is_some());
/// ```
#[derive(Debug, Default)]
pub struct RouteTable {
    inner: DashMap<RouteKey, Route>,
}

impl RouteTable {
    /// Create a new empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: DashMap::new(),
        }
    }

    /// Register a route, returning the previous entry for the key if any.
    pub fn insert(&self, key: RouteKey, route: Route) -> Option<Route> {
        self.inner.insert(key, route)
    }

    /// Look up the route registered for the given key.
    #[must_use]
    pub fn get(&self, key: &RouteKey) -> Option<Route> {
        self.inner.get(key).map(|entry| entry.value().clone())
    }

    /// Remove the route registered for the given key.
    pub fn remove(&self, key: &RouteKey) -> Option<Route> {
        self.inner.remove(key).map(|(_, route)| route)
    }

    /// Remove all routes.
    pub fn reset(&self) {
        self.inner.clear();
    }

    /// Number of registered routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the table holds no routes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RouteMethod;

    fn widget_route() -> Route {
        Route {
            endpoint: "https://widgets.internal".to_owned(),
            resource: Some("widgets".to_owned()),
            verb: Some("get".to_owned()),
            ..Route::default()
        }
    }

    #[test]
    fn test_should_insert_and_get_route() {
        let table = RouteTable::new();
        let key = RouteKey::new("/api/v1/widgets", RouteMethod::Get);

        assert!(table.is_empty());
        assert!(table.insert(key.clone(), widget_route()).is_none());

        let route = table.get(&key).expect("route");
        assert_eq!(route.endpoint, "https://widgets.internal");
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_should_return_previous_route_on_overwrite() {
        let table = RouteTable::new();
        let key = RouteKey::new("/api/v1/widgets", RouteMethod::Get);

        table.insert(key.clone(), widget_route());
        let replaced = table.insert(
            key.clone(),
            Route {
                endpoint: "https://widgets-v2.internal".to_owned(),
                ..Route::default()
            },
        );

        assert_eq!(replaced.expect("previous").endpoint, "https://widgets.internal");
        assert_eq!(table.get(&key).expect("route").endpoint, "https://widgets-v2.internal");
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_should_isolate_methods_on_same_url() {
        let table = RouteTable::new();
        table.insert(RouteKey::new("/api/v1/widgets", RouteMethod::Get), widget_route());

        assert!(table.get(&RouteKey::new("/api/v1/widgets", RouteMethod::Post)).is_none());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_should_remove_route() {
        let table = RouteTable::new();
        let key = RouteKey::new("/api/v1/widgets", RouteMethod::Delete);

        table.insert(key.clone(), widget_route());
        let removed = table.remove(&key);

        assert!(removed.is_some());
        assert!(table.get(&key).is_none());
        assert!(table.is_empty());
    }

    #[test]
    fn test_should_reset_table() {
        let table = RouteTable::new();
        table.insert(RouteKey::new("/a", RouteMethod::Get), widget_route());
        table.insert(RouteKey::new("/b", RouteMethod::Post), widget_route());

        assert_eq!(table.len(), 2);
        table.reset();
        assert!(table.is_empty());
    }

    #[test]
    fn test_should_share_table_across_threads() {
        let table = std::sync::Arc::new(RouteTable::new());

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let table = table.clone();
                std::thread::spawn(move || {
                    table.insert(RouteKey::new(format!("/r/{i}"), RouteMethod::Get), Route::default());
                })
            })
            .collect();

        for handle in handles {
            handle.join().expect("thread");
        }
        assert_eq!(table.len(), 4);
    }
}
