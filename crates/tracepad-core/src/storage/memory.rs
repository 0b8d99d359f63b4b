//! In-memory storage implementation.

use super::{BoxFuture, Storage, StorageError, StorageResult};
use crate::progress::ProgressBook;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory storage for testing and ephemeral use.
#[derive(Default)]
pub struct MemoryStorage {
    books: RwLock<HashMap<String, ProgressBook>>,
}

impl MemoryStorage {
    /// Create a new empty memory storage.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn save(&self, key: &str, book: &ProgressBook) -> BoxFuture<'_, StorageResult<()>> {
        let key = key.to_string();
        let book = book.clone();
        Box::pin(async move {
            let mut books = self.books.write().map_err(|e| {
                StorageError::Other(format!("Lock error: {}", e))
            })?;
            books.insert(key, book);
            Ok(())
        })
    }

    fn load(&self, key: &str) -> BoxFuture<'_, StorageResult<ProgressBook>> {
        let key = key.to_string();
        Box::pin(async move {
            let books = self.books.read().map_err(|e| {
                StorageError::Other(format!("Lock error: {}", e))
            })?;
            books.get(&key)
                .cloned()
                .ok_or_else(|| StorageError::NotFound(key))
        })
    }

    fn delete(&self, key: &str) -> BoxFuture<'_, StorageResult<()>> {
        let key = key.to_string();
        Box::pin(async move {
            let mut books = self.books.write().map_err(|e| {
                StorageError::Other(format!("Lock error: {}", e))
            })?;
            books.remove(&key);
            Ok(())
        })
    }

    fn list(&self) -> BoxFuture<'_, StorageResult<Vec<String>>> {
        Box::pin(async move {
            let books = self.books.read().map_err(|e| {
                StorageError::Other(format!("Lock error: {}", e))
            })?;
            Ok(books.keys().cloned().collect())
        })
    }

    fn exists(&self, key: &str) -> BoxFuture<'_, StorageResult<bool>> {
        let key = key.to_string();
        Box::pin(async move {
            let books = self.books.read().map_err(|e| {
                StorageError::Other(format!("Lock error: {}", e))
            })?;
            Ok(books.contains_key(&key))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block_on<F: std::future::Future>(f: F) -> F::Output {
        // Simple blocking executor for tests
        use std::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};

        fn dummy_raw_waker() -> RawWaker {
            fn no_op(_: *const ()) {}
            fn clone(_: *const ()) -> RawWaker {
                dummy_raw_waker()
            }
            static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, no_op, no_op, no_op);
            RawWaker::new(std::ptr::null(), &VTABLE)
        }

        let waker = unsafe { Waker::from_raw(dummy_raw_waker()) };
        let mut cx = Context::from_waker(&waker);
        let mut f = std::pin::pin!(f);

        loop {
            match f.as_mut().poll(&mut cx) {
                Poll::Ready(result) => return result,
                Poll::Pending => {}
            }
        }
    }

    #[test]
    fn test_save_and_load() {
        let storage = MemoryStorage::new();
        let book = ProgressBook::new("asha");

        block_on(storage.save("asha", &book)).unwrap();
        let loaded = block_on(storage.load("asha")).unwrap();

        assert_eq!(book.id, loaded.id);
    }

    #[test]
    fn test_not_found() {
        let storage = MemoryStorage::new();
        let result = block_on(storage.load("nonexistent"));

        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[test]
    fn test_exists() {
        let storage = MemoryStorage::new();
        let book = ProgressBook::new("asha");

        assert!(!block_on(storage.exists("asha")).unwrap());
        block_on(storage.save("asha", &book)).unwrap();
        assert!(block_on(storage.exists("asha")).unwrap());
    }

    #[test]
    fn test_delete() {
        let storage = MemoryStorage::new();
        let book = ProgressBook::new("asha");

        block_on(storage.save("asha", &book)).unwrap();
        block_on(storage.delete("asha")).unwrap();
        assert!(!block_on(storage.exists("asha")).unwrap());
    }

    #[test]
    fn test_list() {
        let storage = MemoryStorage::new();
        let book = ProgressBook::new("asha");

        block_on(storage.save("asha", &book)).unwrap();
        block_on(storage.save("ravi", &book)).unwrap();

        let list = block_on(storage.list()).unwrap();
        assert_eq!(list.len(), 2);
        assert!(list.contains(&"asha".to_string()));
        assert!(list.contains(&"ravi".to_string()));
    }
}
