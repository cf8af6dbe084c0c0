use crate::config::SearchSettings;
use crate::core::ComponentId;
use crate::search::SearchProvider;
use crate::search::catalog::{Catalog, SearchOutcome};
use indexmap::IndexMap;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct SearchCompletion {
    pub component: ComponentId,
    pub run_id: u64,
    pub query: String,
    pub outcome: SearchOutcome,
}

/// Runs catalog lookups on worker threads. Only the latest run per component
/// is delivered; aborted and superseded runs are dropped on drain.
pub struct SearchExecutor {
    catalog: Arc<Catalog>,
    settings: Arc<SearchSettings>,
    completion_tx: Sender<SearchCompletion>,
    completion_rx: Receiver<SearchCompletion>,
    latest_run: IndexMap<ComponentId, u64>,
    sequence: u64,
}

impl SearchExecutor {
    pub fn new(catalog: Catalog, settings: SearchSettings) -> Self {
        let (completion_tx, completion_rx) = mpsc::channel::<SearchCompletion>();
        Self {
            catalog: Arc::new(catalog),
            settings: Arc::new(settings),
            completion_tx,
            completion_rx,
            latest_run: IndexMap::new(),
            sequence: 0,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    pub fn is_running(&self, component: &ComponentId) -> bool {
        self.latest_run.contains_key(component)
    }

    pub fn drain_ready(&mut self) -> Vec<SearchCompletion> {
        let mut out = Vec::<SearchCompletion>::new();
        loop {
            match self.completion_rx.try_recv() {
                Ok(completion) => {
                    let current = self.latest_run.get(&completion.component).copied();
                    if current == Some(completion.run_id) {
                        self.latest_run.shift_remove(&completion.component);
                        out.push(completion);
                    } else {
                        tracing::trace!(
                            component = %completion.component,
                            run_id = completion.run_id,
                            "dropping superseded search result"
                        );
                    }
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        out
    }
}

impl SearchProvider for SearchExecutor {
    fn trigger(&mut self, component: &ComponentId, query: &str) {
        self.sequence = self.sequence.saturating_add(1);
        let run_id = self.sequence;
        self.latest_run.insert(component.clone(), run_id);

        let catalog = Arc::clone(&self.catalog);
        let settings = Arc::clone(&self.settings);
        let completion_tx = self.completion_tx.clone();
        let component = component.clone();
        let query = query.to_string();
        tracing::debug!(%component, run_id, %query, "search started");

        std::thread::spawn(move || {
            if settings.latency_ms > 0 {
                std::thread::sleep(Duration::from_millis(settings.latency_ms));
            }
            let outcome = catalog.lookup(&query, &settings);
            let _ = completion_tx.send(SearchCompletion {
                component,
                run_id,
                query,
                outcome,
            });
        });
    }

    fn abort(&mut self, component: &ComponentId) {
        if let Some(run_id) = self.latest_run.shift_remove(component) {
            tracing::debug!(%component, run_id, "search aborted");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SearchExecutor;
    use crate::config::SearchSettings;
    use crate::core::ComponentId;
    use crate::search::SearchProvider;
    use crate::search::catalog::{Catalog, SearchOutcome};
    use std::time::{Duration, Instant};

    fn executor() -> SearchExecutor {
        let settings = SearchSettings {
            latency_ms: 0,
            minimum_search_length: 1,
            ..SearchSettings::default()
        };
        SearchExecutor::new(Catalog::from_labels(["Canada", "Chad"]), settings)
    }

    fn wait_for(executor: &mut SearchExecutor, count: usize) -> Vec<super::SearchCompletion> {
        let deadline = Instant::now() + Duration::from_secs(2);
        let mut out = Vec::new();
        while out.len() < count && Instant::now() < deadline {
            out.extend(executor.drain_ready());
            std::thread::sleep(Duration::from_millis(5));
        }
        out
    }

    #[test]
    fn latest_run_is_delivered() {
        let mut executor = executor();
        let id = ComponentId::new("country");
        executor.trigger(&id, "Can");

        let completions = wait_for(&mut executor, 1);
        assert_eq!(completions.len(), 1);
        assert_eq!(completions[0].query, "Can");
        assert!(matches!(
            &completions[0].outcome,
            SearchOutcome::Matches { entries, .. } if entries.len() == 1
        ));
        assert!(!executor.is_running(&id));
    }

    #[test]
    fn aborted_run_is_dropped() {
        let mut executor = executor();
        let id = ComponentId::new("country");
        executor.trigger(&id, "Can");
        executor.abort(&id);

        std::thread::sleep(Duration::from_millis(50));
        assert!(executor.drain_ready().is_empty());
    }

    #[test]
    fn superseded_run_is_dropped() {
        let mut executor = executor();
        let id = ComponentId::new("country");
        executor.trigger(&id, "C");
        executor.trigger(&id, "Cha");

        let completions = wait_for(&mut executor, 1);
        std::thread::sleep(Duration::from_millis(50));
        let mut all = completions;
        all.extend(executor.drain_ready());
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].query, "Cha");
    }
}
