// ── Selector manager ──
//
// Orchestrates the picker pipeline: loads the catalog through a
// `RegionDataLoader`, keeps the canonical and working lists, applies
// sorts, and records every executed command so it can be replayed, in
// order, against each freshly sorted list.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use crate::command::Command;
use crate::error::CoreError;
use crate::loader::RegionDataLoader;
use crate::model::RegionRecord;

/// Sort field for [`SelectorManager::sort`].
///
/// All three fields sort by exact string comparison -- dial codes are
/// NOT compared numerically ("+1" < "+30" < "+886" lexicographically).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Code,
    DialCode,
}

/// The main entry point for consumers.
///
/// Owns the canonical catalog (`original`), the observed list
/// (`working`), and the append-only command history. All mutation flows
/// through [`load_data`](Self::load_data), [`sort`](Self::sort), and
/// [`execute`](Self::execute); callers only ever see immutable views or
/// snapshots.
///
/// After every `sort` or `execute`, `working` equals the stable sort of
/// `original` (if one was requested) with the full history replayed on
/// top. `load_data` is the one operation that breaks that equation: it
/// stores the raw load result without replaying history, and the host
/// re-sorts if it wants prior commands re-applied to the new catalog.
pub struct SelectorManager<L> {
    loader: L,
    original: Vec<RegionRecord>,
    working: Vec<RegionRecord>,
    history: Vec<Command>,
    /// Working-list snapshot, rebuilt on mutation for UI subscribers.
    snapshot: watch::Sender<Arc<Vec<RegionRecord>>>,
    /// Version counter, bumped on every published mutation.
    version: watch::Sender<u64>,
}

impl<L: RegionDataLoader> SelectorManager<L> {
    /// Create a manager with empty lists and an empty history. Does NOT
    /// load -- call [`load_data`](Self::load_data) to populate.
    pub fn new(loader: L) -> Self {
        let (snapshot, _) = watch::channel(Arc::new(Vec::new()));
        let (version, _) = watch::channel(0u64);
        Self {
            loader,
            original: Vec::new(),
            working: Vec::new(),
            history: Vec::new(),
            snapshot,
            version,
        }
    }

    // ── Loading ──────────────────────────────────────────────────────

    /// Load the catalog through the data source, once.
    ///
    /// On success both lists are replaced wholesale with the raw result
    /// and the loaded records are returned. The command history is kept
    /// but NOT replayed; call [`sort`](Self::sort) to re-apply it to the
    /// new catalog. On failure all state is left untouched and the
    /// loader's error is propagated verbatim.
    ///
    /// The `&mut self` receiver makes overlapping loads unrepresentable,
    /// so there is no last-writer-wins hazard to document away.
    pub async fn load_data(&mut self) -> Result<Vec<RegionRecord>, CoreError> {
        let regions = self.loader.load().await.inspect_err(|error| {
            debug!(%error, "region catalog load failed");
        })?;
        debug!(count = regions.len(), "region catalog loaded");
        self.original = regions.clone();
        self.working = regions.clone();
        self.publish();
        Ok(regions)
    }

    // ── Sorting & commands ───────────────────────────────────────────

    /// Rebuild the working list: stable ascending sort of the canonical
    /// list on `key`, then replay of every recorded command in execution
    /// order. Leaves the canonical list and the history untouched.
    /// No-op safe on an empty catalog.
    pub fn sort(&mut self, key: SortKey) {
        let mut list = self.original.clone();
        match key {
            SortKey::Name => list.sort_by(|a, b| a.name.cmp(&b.name)),
            SortKey::Code => list.sort_by(|a, b| a.code.cmp(&b.code)),
            SortKey::DialCode => list.sort_by(|a, b| a.dial_code.cmp(&b.dial_code)),
        }
        for command in &self.history {
            list = command.apply(list);
        }
        debug!(?key, commands = self.history.len(), "sorted and replayed");
        self.working = list;
        self.publish();
    }

    /// Execute a command against the working list and record it for
    /// future replay.
    ///
    /// Guard: against an empty working list the call is a no-op -- the
    /// command is neither executed nor recorded, so the history never
    /// accumulates entries that had no visible effect.
    pub fn execute(&mut self, command: Command) {
        if self.working.is_empty() {
            debug!(?command, "dropped command against empty working list");
            return;
        }
        self.history.push(command.clone());
        let list = std::mem::take(&mut self.working);
        self.working = command.apply(list);
        self.publish();
    }

    /// Pin the given regions to the front of the list, in the order given.
    pub fn pin_regions(&mut self, codes: Vec<String>) {
        self.execute(Command::Pin(codes));
    }

    /// Restrict the list to the given regions.
    pub fn restrict_regions(&mut self, codes: Vec<String>) {
        self.execute(Command::Restrict(codes));
    }

    /// Drop every recorded command and reset the working list to the
    /// canonical order (the replay of an empty history).
    pub fn clear_history(&mut self) {
        self.history.clear();
        self.working = self.original.clone();
        self.publish();
    }

    // ── Observable state ─────────────────────────────────────────────

    /// The list the host should display.
    pub fn regions(&self) -> &[RegionRecord] {
        &self.working
    }

    /// The canonical catalog as last loaded.
    pub fn original_regions(&self) -> &[RegionRecord] {
        &self.original
    }

    /// Every command executed so far, in replay order.
    pub fn history(&self) -> &[Command] {
        &self.history
    }

    /// Subscribe to working-list snapshots via a `watch::Receiver`.
    /// Every mutation publishes a fresh `Arc`'d snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Arc<Vec<RegionRecord>>> {
        self.snapshot.subscribe()
    }

    /// Current mutation count. Starts at 0 and increments once per
    /// published change (load, sort, executed command, history reset);
    /// commands dropped by the empty-list guard do not count.
    pub fn version(&self) -> u64 {
        *self.version.borrow()
    }

    /// Broadcast the current working list to subscribers and bump the
    /// version counter.
    /// `send_modify` updates unconditionally, even with zero receivers.
    fn publish(&self) {
        let snap = Arc::new(self.working.clone());
        self.snapshot.send_modify(|s| *s = snap);
        self.version.send_modify(|v| *v += 1);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // ── Test loaders ────────────────────────────────────────────────

    struct StaticLoader(Vec<RegionRecord>);

    impl RegionDataLoader for StaticLoader {
        async fn load(&self) -> Result<Vec<RegionRecord>, CoreError> {
            Ok(self.0.clone())
        }
    }

    struct FailingLoader;

    impl RegionDataLoader for FailingLoader {
        async fn load(&self) -> Result<Vec<RegionRecord>, CoreError> {
            Err(CoreError::Load {
                message: "catalog unavailable".into(),
            })
        }
    }

    // ── Fixtures ────────────────────────────────────────────────────

    fn tw() -> RegionRecord {
        RegionRecord::new("Taiwan", "TW", "+886")
    }

    fn us() -> RegionRecord {
        RegionRecord::new("United States", "US", "+1")
    }

    fn gr() -> RegionRecord {
        RegionRecord::new("Greece", "GR", "+30")
    }

    fn items() -> Vec<RegionRecord> {
        vec![tw(), us(), gr()]
    }

    async fn loaded_manager() -> SelectorManager<StaticLoader> {
        let mut manager = SelectorManager::new(StaticLoader(items()));
        manager.load_data().await.unwrap();
        manager
    }

    fn codes(list: &[RegionRecord]) -> Vec<&str> {
        list.iter().map(|r| r.code.as_str()).collect()
    }

    // ── Initial state ───────────────────────────────────────────────

    #[test]
    fn fresh_manager_is_empty() {
        let manager = SelectorManager::new(FailingLoader);
        assert!(manager.regions().is_empty());
        assert!(manager.original_regions().is_empty());
        assert!(manager.history().is_empty());
    }

    // ── Loading ─────────────────────────────────────────────────────

    #[tokio::test]
    async fn load_success_sets_both_lists() {
        let mut manager = SelectorManager::new(StaticLoader(items()));

        let loaded = manager.load_data().await.unwrap();

        assert_eq!(loaded, items());
        assert_eq!(manager.original_regions(), items());
        assert_eq!(manager.regions(), items());
    }

    #[tokio::test]
    async fn load_empty_catalog_is_delivered() {
        let mut manager = SelectorManager::new(StaticLoader(Vec::new()));

        let loaded = manager.load_data().await.unwrap();

        assert!(loaded.is_empty());
        assert!(manager.regions().is_empty());
    }

    #[tokio::test]
    async fn load_failure_leaves_state_untouched() {
        let mut manager = SelectorManager::new(FailingLoader);

        let err = manager.load_data().await.unwrap_err();

        assert!(
            matches!(&err, CoreError::Load { message } if message == "catalog unavailable"),
            "got: {err:?}"
        );
        assert!(manager.regions().is_empty());
        assert!(manager.original_regions().is_empty());
    }

    #[tokio::test]
    async fn reload_replaces_catalog_wholesale() {
        let mut manager = loaded_manager().await;
        manager.loader = StaticLoader(vec![gr()]);

        manager.load_data().await.unwrap();

        assert_eq!(manager.original_regions(), vec![gr()]);
        assert_eq!(manager.regions(), vec![gr()]);
    }

    #[tokio::test]
    async fn load_does_not_replay_history() {
        let mut manager = loaded_manager().await;
        manager.restrict_regions(vec!["GR".into()]);

        manager.load_data().await.unwrap();

        // Raw load result, restrict not re-applied until the next sort.
        assert_eq!(manager.regions(), items());
        assert_eq!(manager.history().len(), 1);
    }

    // ── Sorting ─────────────────────────────────────────────────────

    #[tokio::test]
    async fn sort_by_name() {
        let mut manager = loaded_manager().await;
        manager.sort(SortKey::Name);
        assert_eq!(manager.regions(), vec![gr(), tw(), us()]);
    }

    #[tokio::test]
    async fn sort_by_code() {
        let mut manager = loaded_manager().await;
        manager.sort(SortKey::Code);
        assert_eq!(manager.regions(), vec![gr(), tw(), us()]);
    }

    #[tokio::test]
    async fn sort_by_dial_code_is_lexicographic() {
        let mut manager = loaded_manager().await;
        manager.sort(SortKey::DialCode);
        // "+1" < "+30" < "+886" as strings, not as numbers.
        assert_eq!(manager.regions(), vec![us(), gr(), tw()]);
    }

    #[tokio::test]
    async fn sort_is_stable_on_ties() {
        let shared_dial = vec![
            RegionRecord::new("Canada", "CA", "+1"),
            RegionRecord::new("United States", "US", "+1"),
            RegionRecord::new("Greece", "GR", "+30"),
        ];
        let mut manager = SelectorManager::new(StaticLoader(shared_dial));
        manager.load_data().await.unwrap();

        manager.sort(SortKey::DialCode);

        // CA and US tie on "+1" and keep their original relative order.
        assert_eq!(codes(manager.regions()), ["CA", "US", "GR"]);
    }

    #[tokio::test]
    async fn sort_leaves_original_untouched() {
        let mut manager = loaded_manager().await;
        manager.sort(SortKey::Name);
        assert_eq!(manager.original_regions(), items());
    }

    #[test]
    fn sort_on_empty_catalog_is_noop_safe() {
        let mut manager = SelectorManager::new(FailingLoader);
        manager.sort(SortKey::Name);
        assert!(manager.regions().is_empty());
    }

    // ── Command execution ───────────────────────────────────────────

    #[test]
    fn execute_on_empty_working_list_records_nothing() {
        let mut manager = SelectorManager::new(FailingLoader);

        manager.execute(Command::Restrict(vec!["GR".into()]));
        manager.pin_regions(vec!["TW".into()]);

        assert!(manager.history().is_empty());
        assert!(manager.regions().is_empty());
    }

    #[tokio::test]
    async fn execute_applies_and_records() {
        let mut manager = loaded_manager().await;

        manager.restrict_regions(vec!["GR".into(), "US".into()]);

        assert_eq!(codes(manager.regions()), ["US", "GR"]);
        assert_eq!(
            manager.history(),
            vec![Command::Restrict(vec!["GR".into(), "US".into()])]
        );
    }

    #[tokio::test]
    async fn pin_orders_front_by_forward_code_order() {
        let catalog = vec![
            RegionRecord::new("Alpha", "A", "+1"),
            RegionRecord::new("Bravo", "B", "+2"),
            RegionRecord::new("Charlie", "C", "+3"),
            RegionRecord::new("Delta", "D", "+4"),
        ];
        let mut manager = SelectorManager::new(StaticLoader(catalog));
        manager.load_data().await.unwrap();

        manager.pin_regions(vec!["C".into(), "A".into()]);

        assert_eq!(codes(manager.regions()), ["A", "C", "B", "D"]);
    }

    // ── Replay across sorts ─────────────────────────────────────────

    #[tokio::test]
    async fn restrict_survives_resort() {
        let mut manager = loaded_manager().await;
        manager.restrict_regions(vec!["GR".into(), "US".into()]);

        manager.sort(SortKey::Name);

        // Restrict replayed on top of the fresh name sort.
        assert_eq!(manager.regions(), vec![gr(), us()]);
    }

    #[tokio::test]
    async fn multiple_commands_replay_in_recorded_order() {
        let mut manager = loaded_manager().await;
        manager.pin_regions(vec!["TW".into()]);
        manager.restrict_regions(vec!["TW".into(), "GR".into()]);

        manager.sort(SortKey::DialCode);

        // Dial-code sort gives [US, GR, TW]; pin moves TW up, restrict
        // then drops US -- same order the commands were issued in.
        assert_eq!(manager.regions(), vec![tw(), gr()]);
        assert_eq!(manager.history().len(), 2);
    }

    #[tokio::test]
    async fn resort_replays_every_time() {
        let mut manager = loaded_manager().await;
        manager.restrict_regions(vec!["GR".into()]);

        manager.sort(SortKey::Name);
        manager.sort(SortKey::DialCode);

        assert_eq!(manager.regions(), vec![gr()]);
        assert_eq!(manager.history().len(), 1);
    }

    // ── History reset ───────────────────────────────────────────────

    #[tokio::test]
    async fn clear_history_resets_working_to_canonical() {
        let mut manager = loaded_manager().await;
        manager.restrict_regions(vec!["GR".into()]);

        manager.clear_history();

        assert!(manager.history().is_empty());
        assert_eq!(manager.regions(), items());
    }

    // ── Version counter ─────────────────────────────────────────────

    #[tokio::test]
    async fn version_bumps_on_every_mutation() {
        let mut manager = SelectorManager::new(StaticLoader(items()));
        assert_eq!(manager.version(), 0);

        manager.load_data().await.unwrap();
        assert_eq!(manager.version(), 1);

        manager.restrict_regions(vec!["GR".into()]);
        assert_eq!(manager.version(), 2);

        manager.sort(SortKey::Name);
        assert_eq!(manager.version(), 3);

        manager.clear_history();
        assert_eq!(manager.version(), 4);
    }

    #[test]
    fn version_unchanged_when_command_is_dropped() {
        let mut manager = SelectorManager::new(FailingLoader);

        manager.execute(Command::Pin(vec!["TW".into()]));

        assert_eq!(manager.version(), 0);
    }

    // ── Snapshot subscription ───────────────────────────────────────

    #[tokio::test]
    async fn subscribers_observe_mutations() {
        let mut manager = SelectorManager::new(StaticLoader(items()));
        let mut rx = manager.subscribe();
        assert!(rx.borrow().is_empty());

        manager.load_data().await.unwrap();
        assert!(rx.has_changed().unwrap());
        assert_eq!(**rx.borrow_and_update(), items());

        manager.restrict_regions(vec!["TW".into()]);
        assert_eq!(**rx.borrow_and_update(), vec![tw()]);
    }
}
