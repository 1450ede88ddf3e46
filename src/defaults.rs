use crate::{error::Error, result::Result};
use fslock::LockFile;
use path_macro::path;
use std::{
    fs,
    path::{Path, PathBuf},
};
use toml::{value::Table, Value};
use tracing::{debug, warn};

const DEFAULTS_PATH: &str = "defaults.toml";
const LOCK_PATH: &str = ".defaults.lock";
const STAGING_PATH: &str = ".defaults.toml.tmp";

/// Key-value pairs of a defaults suite, as read at one point in time.
///
/// Lookups are lenient: a key that is absent or holds a value of another
/// type answers `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Defaults {
    values: Table,
}

impl Defaults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn bool(&self, key: &str) -> Option<bool> {
        self.get(key)?.as_bool()
    }

    pub fn string(&self, key: &str) -> Option<&str> {
        self.get(key)?.as_str()
    }

    pub fn integer(&self, key: &str) -> Option<i64> {
        self.get(key)?.as_integer()
    }

    pub fn set<V: Into<Value>>(&mut self, key: &str, value: V) {
        self.values.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl From<Table> for Defaults {
    fn from(values: Table) -> Self {
        Self { values }
    }
}

/// A named defaults area shared between processes.
///
/// The suite lives in its own directory under the store root. The host
/// application writes `defaults.toml`; readers only ever read it. Writers
/// serialize through an advisory lock file and replace the file with a rename,
/// so a reader sees either the old or the new contents and never writes.
#[derive(Debug, Clone)]
pub struct SharedDefaults {
    path: PathBuf,
}

impl SharedDefaults {
    pub fn open<P: AsRef<Path>>(store_dir: P, suite: &str) -> Result<Self> {
        if suite.is_empty()
            || suite == "."
            || suite == ".."
            || suite.contains(|c: char| c == '/' || c == '\\')
        {
            return Err(Error::InvalidSuite { name: suite.into() });
        }
        let store_dir: &Path = store_dir.as_ref();
        Ok(Self {
            path: path![store_dir / suite],
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn defaults_path(&self) -> PathBuf {
        path![self.path / DEFAULTS_PATH]
    }

    fn lock_path(&self) -> PathBuf {
        path![self.path / LOCK_PATH]
    }

    fn staging_path(&self) -> PathBuf {
        path![self.path / STAGING_PATH]
    }

    fn setup(&self) -> Result<()> {
        fs::create_dir_all(&self.path)?;
        Ok(())
    }

    fn get_lock(&self) -> Result<LockFile> {
        let mut lock = LockFile::open(&self.lock_path())?;
        lock.lock()?;
        Ok(lock)
    }

    fn read_unlocked(&self) -> Result<Defaults> {
        if fs::metadata(self.defaults_path()).is_err() {
            return Ok(Defaults::new());
        }
        let values: Table = toml::from_str(&fs::read_to_string(self.defaults_path())?)?;
        Ok(values.into())
    }

    /// Reads the suite without creating anything in it. A suite that was never
    /// written is empty.
    pub fn load(&self) -> Result<Defaults> {
        if fs::metadata(&self.path).is_err() {
            debug!(suite = %self.path.display(), "defaults suite does not exist yet");
            return Ok(Defaults::new());
        }
        if fs::metadata(self.lock_path()).is_err() {
            return self.read_unlocked();
        }

        match self.get_lock() {
            Ok(mut lock) => {
                let defaults = self.read_unlocked();
                lock.unlock()?;
                defaults
            }
            Err(err) => {
                debug!(error = %err, "cannot take defaults lock, reading without it");
                self.read_unlocked()
            }
        }
    }

    /// Reads the suite, treating any storage fault as an empty suite.
    pub fn snapshot(&self) -> Defaults {
        self.load().unwrap_or_else(|err| {
            warn!(
                suite = %self.path.display(),
                error = %err,
                "unreadable defaults suite, treating as empty"
            );
            Defaults::new()
        })
    }

    pub fn save(&self, defaults: &Defaults) -> Result<()> {
        self.update(|current| *current = defaults.clone())
    }

    /// Applies `f` to the stored values and writes them back while holding
    /// the lock, so concurrent writers do not lose each other's keys.
    pub fn update<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Defaults),
    {
        self.setup()?;

        let mut lock = self.get_lock()?;
        let result = self.read_unlocked().and_then(|mut defaults| {
            f(&mut defaults);
            fs::write(self.staging_path(), toml::to_string(&defaults.values)?)?;
            fs::rename(self.staging_path(), self.defaults_path())?;
            Ok(())
        });
        lock.unlock()?;

        result
    }
}
