//! Observer refresh signals across the provider boundary

use std::sync::Arc;

use tempfile::TempDir;

use rolodex::{ContactValues, Filter, Gender, Observer, Projection};

use crate::common::{open_directory, terminous, Recorder};

#[test]
fn list_observer_hears_every_mutation_in_order() {
    let dir = TempDir::new().unwrap();
    let directory = open_directory(&dir);
    let collection = directory.resolver().collection_address();

    let recorder = Recorder::new();
    let _sub = directory
        .hub()
        .subscribe(collection.clone(), Arc::clone(&recorder) as Arc<dyn Observer>);

    let id = directory.insert(&collection, &terminous()).unwrap();
    let item = directory.resolver().item_address(id);
    directory
        .update(&item, &ContactValues::new().name("Renamed"), &Filter::All)
        .unwrap();
    directory.delete(&item, &Filter::All).unwrap();

    directory.hub().drain();
    let seen = recorder.seen.lock();
    assert_eq!(*seen, vec![collection.clone(), item.clone(), item]);
}

#[test]
fn failed_writes_emit_no_signal() {
    let dir = TempDir::new().unwrap();
    let directory = open_directory(&dir);
    let collection = directory.resolver().collection_address();

    let recorder = Recorder::new();
    let _sub = directory
        .hub()
        .subscribe(collection.clone(), Arc::clone(&recorder) as Arc<dyn Observer>);

    // Validation failure: nothing persisted, nothing announced.
    let bad = ContactValues::new().name("").gender(Gender::Unknown);
    assert!(directory.insert(&collection, &bad).is_err());

    // Empty partial update: short-circuits before storage.
    directory
        .update(&collection, &ContactValues::new(), &Filter::All)
        .unwrap();

    directory.hub().drain();
    assert!(recorder.seen.lock().is_empty());
}

#[test]
fn item_observer_ignores_other_rows() {
    let dir = TempDir::new().unwrap();
    let directory = open_directory(&dir);
    let collection = directory.resolver().collection_address();

    let a = directory.insert(&collection, &terminous()).unwrap();
    let b = directory
        .insert(
            &collection,
            &ContactValues::new().name("Ada").gender(Gender::Female),
        )
        .unwrap();

    let recorder = Recorder::new();
    let _sub = directory.hub().subscribe(
        directory.resolver().item_address(a),
        Arc::clone(&recorder) as Arc<dyn Observer>,
    );

    let item_b = directory.resolver().item_address(b);
    directory
        .update(&item_b, &ContactValues::new().name("Grace"), &Filter::All)
        .unwrap();

    directory.hub().drain();
    assert!(recorder.seen.lock().is_empty());
}

#[test]
fn cancelled_observer_hears_nothing_further() {
    let dir = TempDir::new().unwrap();
    let directory = open_directory(&dir);
    let collection = directory.resolver().collection_address();

    let recorder = Recorder::new();
    let sub = directory
        .hub()
        .subscribe(collection.clone(), Arc::clone(&recorder) as Arc<dyn Observer>);

    directory.insert(&collection, &terminous()).unwrap();
    directory.hub().drain();
    assert_eq!(recorder.seen.lock().len(), 1);

    sub.cancel();
    assert_eq!(directory.hub().observer_count(), 0);

    directory
        .insert(
            &collection,
            &ContactValues::new().name("Ada").gender(Gender::Female),
        )
        .unwrap();
    directory.hub().drain();
    assert_eq!(recorder.seen.lock().len(), 1);
}

#[test]
fn observer_requeries_on_change() {
    let dir = TempDir::new().unwrap();
    let directory = Arc::new(open_directory(&dir));
    let collection = directory.resolver().collection_address();

    // A view that refreshes its row count on every signal, the way a
    // list screen re-runs its loader.
    struct CountingView {
        directory: Arc<rolodex::Directory>,
        counts: parking_lot::Mutex<Vec<usize>>,
    }

    impl Observer for CountingView {
        fn on_change(&self, address: &str) {
            let count = self
                .directory
                .query(address, &Projection::All, &Filter::All, None)
                .map(Iterator::count)
                .unwrap_or(0);
            self.counts.lock().push(count);
        }
    }

    let view = Arc::new(CountingView {
        directory: Arc::clone(&directory),
        counts: parking_lot::Mutex::new(Vec::new()),
    });
    let _sub = directory
        .hub()
        .subscribe(collection.clone(), Arc::clone(&view) as Arc<dyn Observer>);

    directory.insert(&collection, &terminous()).unwrap();
    directory
        .insert(
            &collection,
            &ContactValues::new().name("Ada").gender(Gender::Female),
        )
        .unwrap();
    directory.delete(&collection, &Filter::All).unwrap();

    directory.hub().drain();
    assert_eq!(*view.counts.lock(), vec![1, 2, 0]);
}
