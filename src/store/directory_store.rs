//! Handle-keyed collection of directories.
//!
//! The store owns both the handle counter and the handle → directory map.
//! Creating or deleting a directory takes the store's write lock; looking up
//! a handle takes its read lock. Each directory carries its own lock, so
//! work on different directories never contends past the lookup.

use super::directory::Directory;
use crate::domain::DirectoryHandle;
use crate::error::{MaptelError, MaptelResult};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A directory shared between the store and in-flight operations.
pub type SharedDirectory = Arc<RwLock<Directory>>;

#[derive(Debug)]
struct StoreInner {
    /// Next handle to issue; `None` once `u64::MAX` has been issued.
    next_id: Option<u64>,
    directories: HashMap<DirectoryHandle, SharedDirectory>,
}

impl Default for StoreInner {
    fn default() -> Self {
        Self {
            next_id: Some(0),
            directories: HashMap::new(),
        }
    }
}

/// Owns every directory and issues unique, never-reused handles.
#[derive(Debug, Default)]
pub struct DirectoryStore {
    inner: RwLock<StoreInner>,
}

impl DirectoryStore {
    /// Create an empty store whose first handle will be 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an empty directory under the next unused handle.
    ///
    /// # Errors
    ///
    /// Returns `MaptelError::HandlesExhausted` once every `u64` handle has
    /// been issued. The counter never wraps, so no handle is issued twice.
    pub fn create(&self) -> MaptelResult<DirectoryHandle> {
        let mut inner = self.write();
        let id = inner.next_id.ok_or(MaptelError::HandlesExhausted)?;
        inner.next_id = id.checked_add(1);

        let handle = DirectoryHandle::new(id);
        inner
            .directories
            .insert(handle, Arc::new(RwLock::new(Directory::new())));
        Ok(handle)
    }

    /// Store whose next handle is `next_id`.
    #[cfg(test)]
    pub(crate) fn starting_at(next_id: u64) -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                next_id: Some(next_id),
                directories: HashMap::new(),
            }),
        }
    }

    /// Remove the directory under `handle` and discard its entries.
    ///
    /// # Errors
    ///
    /// Returns `MaptelError::UnknownHandle` if no such directory exists,
    /// including when it was already deleted.
    pub fn delete(&self, handle: DirectoryHandle) -> MaptelResult<()> {
        self.write()
            .directories
            .remove(&handle)
            .map(|_| ())
            .ok_or(MaptelError::UnknownHandle(handle))
    }

    /// Look up the directory under `handle`.
    pub fn find(&self, handle: DirectoryHandle) -> MaptelResult<SharedDirectory> {
        self.read()
            .directories
            .get(&handle)
            .cloned()
            .ok_or(MaptelError::UnknownHandle(handle))
    }

    /// Run `f` with shared access to the directory under `handle`.
    pub fn with_directory<R>(
        &self,
        handle: DirectoryHandle,
        f: impl FnOnce(&Directory) -> R,
    ) -> MaptelResult<R> {
        let shared = self.find(handle)?;
        let directory = shared.read().unwrap_or_else(PoisonError::into_inner);
        Ok(f(&directory))
    }

    /// Run `f` with exclusive access to the directory under `handle`.
    ///
    /// Mutations go through the stored directory itself, never a copy.
    pub fn with_directory_mut<R>(
        &self,
        handle: DirectoryHandle,
        f: impl FnOnce(&mut Directory) -> R,
    ) -> MaptelResult<R> {
        let shared = self.find(handle)?;
        let mut directory = shared.write().unwrap_or_else(PoisonError::into_inner);
        Ok(f(&mut directory))
    }

    pub fn contains(&self, handle: DirectoryHandle) -> bool {
        self.read().directories.contains_key(&handle)
    }

    /// Number of live directories.
    pub fn len(&self) -> usize {
        self.read().directories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // A panic while holding the lock cannot leave the map half-updated:
    // every mutation is a single HashMap call.
    fn read(&self) -> RwLockReadGuard<'_, StoreInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PhoneNumber;
    use crate::resolver;
    use std::thread;

    fn num(s: &str) -> PhoneNumber {
        PhoneNumber::new(s).unwrap()
    }

    #[test]
    fn test_handles_start_at_zero_and_increase() {
        let store = DirectoryStore::new();
        assert_eq!(store.create().unwrap(), DirectoryHandle::new(0));
        assert_eq!(store.create().unwrap(), DirectoryHandle::new(1));
        assert_eq!(store.create().unwrap(), DirectoryHandle::new(2));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_handles_not_reused_after_delete() {
        let store = DirectoryStore::new();
        let first = store.create().unwrap();
        store.delete(first).unwrap();

        let second = store.create().unwrap();
        assert_ne!(first, second);
        assert_eq!(second, DirectoryHandle::new(1));
    }

    #[test]
    fn test_delete_twice_is_unknown_handle() {
        let store = DirectoryStore::new();
        let handle = store.create().unwrap();

        assert!(store.delete(handle).is_ok());
        assert_eq!(store.delete(handle), Err(MaptelError::UnknownHandle(handle)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_find_unknown_handle() {
        let store = DirectoryStore::new();
        let result = store.find(DirectoryHandle::new(5));
        assert!(matches!(result, Err(MaptelError::UnknownHandle(h)) if h.get() == 5));
    }

    #[test]
    fn test_mutation_persists_in_store() {
        let store = DirectoryStore::new();
        let handle = store.create().unwrap();

        store
            .with_directory_mut(handle, |dir| {
                dir.insert(
                    PhoneNumber::new("111").unwrap(),
                    PhoneNumber::new("222").unwrap(),
                )
            })
            .unwrap();

        let len = store.with_directory(handle, |dir| dir.len()).unwrap();
        assert_eq!(len, 1);
    }

    #[test]
    fn test_delete_discards_entries() {
        let store = DirectoryStore::new();
        let handle = store.create().unwrap();
        store
            .with_directory_mut(handle, |dir| {
                dir.insert(
                    PhoneNumber::new("1").unwrap(),
                    PhoneNumber::new("2").unwrap(),
                )
            })
            .unwrap();

        store.delete(handle).unwrap();
        assert!(!store.contains(handle));
        assert!(store.with_directory(handle, |dir| dir.len()).is_err());
    }

    #[test]
    fn test_concurrent_create_yields_distinct_handles() {
        let store = Arc::new(DirectoryStore::new());
        let workers: Vec<_> = (0..4)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || (0..50).map(|_| store.create().unwrap()).collect::<Vec<_>>())
            })
            .collect();

        let mut handles: Vec<_> = workers
            .into_iter()
            .flat_map(|w| w.join().unwrap())
            .collect();
        handles.sort();
        handles.dedup();

        assert_eq!(handles.len(), 200);
        assert_eq!(store.len(), 200);
    }

    #[test]
    fn test_counter_exhaustion_does_not_wrap() {
        let store = DirectoryStore::starting_at(u64::MAX - 1);
        assert_eq!(store.create().unwrap(), DirectoryHandle::new(u64::MAX - 1));
        assert_eq!(store.create().unwrap(), DirectoryHandle::new(u64::MAX));

        assert_eq!(store.create(), Err(MaptelError::HandlesExhausted));
        assert_eq!(store.create(), Err(MaptelError::HandlesExhausted));
        assert_eq!(store.len(), 2);
        assert!(!store.contains(DirectoryHandle::new(0)));
    }

    #[test]
    fn test_poisoned_directory_lock_is_recovered() {
        let store = Arc::new(DirectoryStore::new());
        let handle = store.create().unwrap();

        let worker = {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                let _ = store.with_directory_mut(handle, |dir| {
                    dir.insert(num("1"), num("2"));
                    panic!("writer died holding the directory lock");
                });
            })
        };
        assert!(worker.join().is_err());
        assert!(store.find(handle).unwrap().is_poisoned());

        // The insert made before the panic is still visible.
        assert_eq!(store.with_directory(handle, |dir| dir.len()).unwrap(), 1);

        store
            .with_directory_mut(handle, |dir| dir.insert(num("3"), num("4")))
            .unwrap();
        let resolved = store
            .with_directory(handle, |dir| resolver::resolve(dir, &num("1")).number)
            .unwrap();
        assert_eq!(resolved, num("2"));
        assert_eq!(store.with_directory(handle, |dir| dir.len()).unwrap(), 2);
    }

    #[test]
    fn test_concurrent_insert_and_resolve_on_one_directory() {
        let store = Arc::new(DirectoryStore::new());
        let handle = store.create().unwrap();

        let workers: Vec<_> = (1..=4u32)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for i in 0..500u32 {
                        let src = num(&format!("{}{:04}", t, i));
                        let dst = num(&format!("9{}{:04}", t, i));
                        store
                            .with_directory_mut(handle, |dir| dir.insert(src.clone(), dst.clone()))
                            .unwrap();

                        let resolved = store
                            .with_directory(handle, |dir| resolver::resolve(dir, &src).number)
                            .unwrap();
                        assert_eq!(resolved, dst);
                    }
                })
            })
            .collect();

        for worker in workers {
            worker.join().unwrap();
        }

        assert_eq!(store.with_directory(handle, |dir| dir.len()).unwrap(), 2000);
    }
}
