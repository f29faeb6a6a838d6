use std::fs;
use std::sync::Arc;
use std::sync::RwLock;

use camino::Utf8Path;
use camino::Utf8PathBuf;

use crate::f;
use crate::file::File;
use crate::report;
use crate::report::Fatal;
use crate::report::Report;

/// A source context, which owns source files.
///
/// Files are never removed from a context once added, so a [`File`] (and any
/// [`Span`][crate::Span] within it) is valid for as long as the context is.
///
/// Contexts are cheap to clone: clones refer to the same set of files.
#[derive(Default, Clone)]
pub struct Context {
  state: Arc<State>,
}

#[derive(Default)]
struct State {
  // File contents are never mutated after insertion, so their heap buffers
  // stay put even when this vector grows.
  files: RwLock<Vec<(Utf8PathBuf, String)>>,
}

impl Context {
  /// Creates a new source context.
  pub fn new() -> Self {
    Self::default()
  }

  /// Creates a new [`Report`] for diagnostics about files in this context,
  /// with default options.
  pub fn new_report(&self) -> Report {
    self.new_report_with(Default::default())
  }

  /// Creates a new [`Report`] with the given options.
  pub fn new_report_with(&self, opts: report::Options) -> Report {
    Report::new(self, opts)
  }

  /// Adds a new file to this source context.
  pub fn new_file(
    &self,
    path: impl Into<Utf8PathBuf>,
    text: impl Into<String>,
  ) -> File {
    let mut files = self.state.files.write().unwrap();
    files.push((path.into(), text.into()));
    let idx = files.len() - 1;
    drop(files);

    self.file(idx).unwrap_or_else(|| bug!("lost file {} after adding it", idx))
  }

  /// Adds a new file to this source context from the file system.
  ///
  /// If the file cannot be read, or is not UTF-8, an error is added to
  /// `report`.
  pub fn open_file(
    &self,
    path: impl AsRef<Utf8Path>,
    report: &Report,
  ) -> Result<File, Fatal> {
    let path = path.as_ref();
    let bytes = match fs::read(path) {
      Ok(bytes) => bytes,
      Err(e) => {
        report.error(f!("could not open input file `{path}`: {e}"));
        return report.fatal();
      }
    };

    let Ok(utf8) = String::from_utf8(bytes) else {
      report.error(f!("input file `{path}` was not valid UTF-8"));
      return report.fatal();
    };

    Ok(self.new_file(path.to_path_buf(), utf8))
  }

  /// Gets the `idx`th file in this source context.
  pub fn file(&self, idx: usize) -> Option<File> {
    let files = self.state.files.read().unwrap();
    let (path, text) = files.get(idx)?;
    let path = path.as_path() as *const Utf8Path;
    let text = text.as_str() as *const str;
    drop(files);

    // SAFETY: files are never mutated or removed while the state is alive, and
    // `self` keeps the state alive for the returned lifetime.
    let (path, text) = unsafe { (&*path, &*text) };
    Some(File { path, text, ctx: self, idx })
  }

  pub(crate) fn is_same(&self, that: &Context) -> bool {
    Arc::ptr_eq(&self.state, &that.state)
  }

  /// Gets the number of files currently tracked by this source context.
  pub fn file_count(&self) -> usize {
    self.state.files.read().unwrap().len()
  }
}
