use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::error::ModelError;
use crate::models::classifier_trait::Classifier;
use crate::models::gbdt::GbdtClassifier;
use crate::schema::Disease;

/// Storage access seam for classifier artifacts. `ModelStore` never
/// touches the filesystem directly, so tests can count reads.
pub trait ArtifactReader {
    fn read(&self, path: &Path, name: &str) -> Result<Arc<dyn Classifier>, ModelError>;
}

/// Reads gbdt artifacts from disk.
pub struct GbdtArtifactReader;

impl ArtifactReader for GbdtArtifactReader {
    fn read(&self, path: &Path, name: &str) -> Result<Arc<dyn Classifier>, ModelError> {
        Ok(Arc::new(GbdtClassifier::load(path, name)?))
    }
}

/// Path-keyed cache of loaded classifiers.
///
/// Invariant: one storage read per distinct path per store lifetime;
/// every later `load` of that path returns the cached object.
pub struct ModelStore {
    reader: Box<dyn ArtifactReader>,
    cache: HashMap<PathBuf, Arc<dyn Classifier>>,
}

impl ModelStore {
    pub fn new() -> Self {
        Self::with_reader(Box::new(GbdtArtifactReader))
    }

    pub fn with_reader(reader: Box<dyn ArtifactReader>) -> Self {
        ModelStore {
            reader,
            cache: HashMap::new(),
        }
    }

    /// Load the artifact at `path`, reading storage at most once per path.
    pub fn load(&mut self, path: &Path, name: &str) -> Result<Arc<dyn Classifier>, ModelError> {
        if let Some(model) = self.cache.get(path) {
            log::debug!("classifier cache hit for {}", path.display());
            return Ok(Arc::clone(model));
        }

        let model = self.reader.read(path, name)?;
        self.cache.insert(path.to_path_buf(), Arc::clone(&model));
        Ok(model)
    }
}

impl Default for ModelStore {
    fn default() -> Self {
        Self::new()
    }
}

/// The three classifiers the app serves, loaded once at startup and
/// read-only afterwards.
pub struct AppContext {
    parkinson: Arc<dyn Classifier>,
    liver: Arc<dyn Classifier>,
    kidney: Arc<dyn Classifier>,
}

impl AppContext {
    /// Load every artifact named in the config. Any failure here is fatal:
    /// the caller aborts before serving a single request.
    pub fn initialize(config: &AppConfig) -> Result<Self, ModelError> {
        Self::initialize_with(config, &mut ModelStore::new())
    }

    pub fn initialize_with(config: &AppConfig, store: &mut ModelStore) -> Result<Self, ModelError> {
        Ok(AppContext {
            parkinson: store.load(&config.models.parkinson, Disease::Parkinson.slug())?,
            liver: store.load(&config.models.liver, Disease::Liver.slug())?,
            kidney: store.load(&config.models.kidney, Disease::Kidney.slug())?,
        })
    }

    /// Assemble a context from already-built classifiers.
    pub fn from_parts(
        parkinson: Arc<dyn Classifier>,
        liver: Arc<dyn Classifier>,
        kidney: Arc<dyn Classifier>,
    ) -> Self {
        AppContext {
            parkinson,
            liver,
            kidney,
        }
    }

    pub fn classifier(&self, disease: Disease) -> &dyn Classifier {
        match disease {
            Disease::Parkinson => self.parkinson.as_ref(),
            Disease::Liver => self.liver.as_ref(),
            Disease::Kidney => self.kidney.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;
    use std::cell::Cell;
    use std::rc::Rc;

    struct FixedLabel(i32);

    impl Classifier for FixedLabel {
        fn predict(&self, x: &Array2<f32>) -> Result<Vec<i32>, ModelError> {
            Ok(vec![self.0; x.nrows()])
        }
    }

    struct SpyReader {
        reads: Rc<Cell<usize>>,
    }

    impl ArtifactReader for SpyReader {
        fn read(&self, _path: &Path, _name: &str) -> Result<Arc<dyn Classifier>, ModelError> {
            self.reads.set(self.reads.get() + 1);
            Ok(Arc::new(FixedLabel(1)))
        }
    }

    #[test]
    fn second_load_of_same_path_hits_the_cache() {
        let reads = Rc::new(Cell::new(0));
        let mut store = ModelStore::with_reader(Box::new(SpyReader {
            reads: Rc::clone(&reads),
        }));

        let first = store.load(Path::new("models/a.json"), "a").unwrap();
        let second = store.load(Path::new("models/a.json"), "a").unwrap();

        assert_eq!(reads.get(), 1);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn distinct_paths_each_read_storage_once() {
        let reads = Rc::new(Cell::new(0));
        let mut store = ModelStore::with_reader(Box::new(SpyReader {
            reads: Rc::clone(&reads),
        }));

        store.load(Path::new("models/a.json"), "a").unwrap();
        store.load(Path::new("models/b.json"), "b").unwrap();
        store.load(Path::new("models/a.json"), "a").unwrap();

        assert_eq!(reads.get(), 2);
    }

    #[test]
    fn read_failure_is_not_cached() {
        struct FailingReader {
            reads: Rc<Cell<usize>>,
        }

        impl ArtifactReader for FailingReader {
            fn read(&self, path: &Path, _name: &str) -> Result<Arc<dyn Classifier>, ModelError> {
                self.reads.set(self.reads.get() + 1);
                Err(ModelError::Read {
                    path: path.to_path_buf(),
                    reason: "missing".to_string(),
                })
            }
        }

        let reads = Rc::new(Cell::new(0));
        let mut store = ModelStore::with_reader(Box::new(FailingReader {
            reads: Rc::clone(&reads),
        }));

        assert!(store.load(Path::new("models/a.json"), "a").is_err());
        assert!(store.load(Path::new("models/a.json"), "a").is_err());
        assert_eq!(reads.get(), 2);
    }
}
