//! Size-based rotating file plus in-memory ring of recent lines

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing_subscriber::fmt::MakeWriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollingConfig {
    /// Rotate once the active file would exceed this size
    pub max_bytes: u64,
    /// Rotated files kept besides the active one
    pub max_files: usize,
    /// Lines kept in memory
    pub capacity: usize,
}

impl Default for RollingConfig {
    fn default() -> Self {
        Self {
            max_bytes: 1024 * 1024,
            max_files: 3,
            capacity: 200,
        }
    }
}

struct Inner {
    path: PathBuf,
    file: File,
    written: u64,
    recent: VecDeque<String>,
    config: RollingConfig,
}

/// Cloneable handle; all clones share one file and one ring
#[derive(Clone)]
pub struct RollingLog {
    inner: Arc<Mutex<Inner>>,
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

fn rotated_path(path: &Path, index: usize) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(format!(".{}", index));
    PathBuf::from(name)
}

impl RollingLog {
    pub fn open(dir: &Path, app_name: &str, config: RollingConfig) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}.log", app_name));
        let file = open_append(&path)?;
        let written = file.metadata()?.len();

        Ok(Self {
            inner: Arc::new(Mutex::new(Inner {
                path,
                file,
                written,
                recent: VecDeque::with_capacity(config.capacity),
                config,
            })),
        })
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // a panic mid-write leaves the state usable
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn path(&self) -> PathBuf {
        self.lock().path.clone()
    }

    pub fn recent_lines(&self) -> Vec<String> {
        self.lock().recent.iter().cloned().collect()
    }

    /// Append raw bytes, rotating first if they would overflow the active file
    pub fn append(&self, buf: &[u8]) -> io::Result<()> {
        let mut inner = self.lock();
        let incoming = buf.len() as u64;
        if inner.written > 0 && inner.written + incoming > inner.config.max_bytes {
            inner.rotate()?;
        }

        inner.file.write_all(buf)?;
        inner.written += incoming;
        inner.remember(buf);
        Ok(())
    }
}

impl Inner {
    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;

        let max = self.config.max_files;
        if max == 0 {
            self.file = OpenOptions::new().create(true).write(true).truncate(true).open(&self.path)?;
            self.written = 0;
            return Ok(());
        }

        let oldest = rotated_path(&self.path, max);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for index in (1..max).rev() {
            let from = rotated_path(&self.path, index);
            if from.exists() {
                fs::rename(&from, rotated_path(&self.path, index + 1))?;
            }
        }
        fs::rename(&self.path, rotated_path(&self.path, 1))?;

        self.file = open_append(&self.path)?;
        self.written = 0;
        Ok(())
    }

    fn remember(&mut self, buf: &[u8]) {
        if self.config.capacity == 0 {
            return;
        }
        for line in String::from_utf8_lossy(buf).lines() {
            if line.trim().is_empty() {
                continue;
            }
            if self.recent.len() == self.config.capacity {
                self.recent.pop_front();
            }
            self.recent.push_back(line.to_string());
        }
    }
}

impl Write for RollingLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.append(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.lock().file.flush()
    }
}

impl<'a> MakeWriter<'a> for RollingLog {
    type Writer = RollingLog;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
