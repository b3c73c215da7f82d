use std::sync::{Arc, Mutex};

use crate::ports::ActiveDocument;

/// Active-document double whose answer tests can switch at any time.
#[derive(Clone, Debug, Default)]
pub struct StubActiveDocument {
    path: Arc<Mutex<Option<String>>>,
}

impl StubActiveDocument {
    pub fn new(path: Option<&str>) -> Self {
        Self { path: Arc::new(Mutex::new(path.map(str::to_string))) }
    }

    pub fn set(&self, path: Option<&str>) {
        *self.path.lock().unwrap() = path.map(str::to_string);
    }
}

impl ActiveDocument for StubActiveDocument {
    fn current_active_document_path(&self) -> Option<String> {
        self.path.lock().unwrap().clone()
    }
}
