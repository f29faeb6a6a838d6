use std::fmt;
use std::io;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering::SeqCst;
use std::sync::Mutex;

use annotate_snippets::renderer::AnsiColor;
use annotate_snippets::renderer::Style;
use annotate_snippets::Annotation;
use annotate_snippets::AnnotationType;
use annotate_snippets::Renderer;
use annotate_snippets::Slice;
use annotate_snippets::Snippet;
use annotate_snippets::SourceAnnotation;

use crate::plural;
use crate::report::diagnostic::Info;
use crate::report::Options;
use crate::report::Report;

/// The shared state of a [`Report`].
pub struct State {
  pub opts: Options,
  diagnostics: Mutex<Vec<Info>>,
  errors: AtomicUsize,
}

impl State {
  pub fn new(opts: Options) -> Self {
    Self {
      opts,
      diagnostics: Mutex::new(Vec::new()),
      errors: AtomicUsize::new(0),
    }
  }

  pub fn error_count(&self) -> usize {
    self.errors.load(SeqCst)
  }

  pub fn insert_diagnostic(&self, info: Info) {
    if info.kind == AnnotationType::Error {
      self.errors.fetch_add(1, SeqCst);
    }

    // A poisoned lock only means some other diagnostic panicked halfway
    // through being inserted; the vector itself is still fine.
    let mut diagnostics = match self.diagnostics.lock() {
      Ok(lock) => lock,
      Err(poison) => poison.into_inner(),
    };
    diagnostics.push(info);
  }
}

/// Dumps the contents of `report` to `sink`.
pub fn finish(report: &Report, sink: impl io::Write) -> io::Result<()> {
  struct Writer<W: io::Write> {
    sink: W,
    error: Option<io::Error>,
  }

  impl<W: io::Write> fmt::Write for Writer<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
      self.sink.write_all(s.as_bytes()).map_err(|e| {
        self.error = Some(e);
        fmt::Error
      })
    }
  }

  let mut out = Writer { sink, error: None };
  render_fmt(report, &report.state.opts, &mut out).map_err(|_| {
    if let Some(e) = out.error.take() {
      return e;
    }

    io::Error::new(io::ErrorKind::Other, "formatter error")
  })
}

/// Dumps this collection of errors as user-displayable text into `sink`.
pub fn render_fmt(
  report: &Report,
  opts: &Options,
  sink: &mut dyn fmt::Write,
) -> fmt::Result {
  let mut renderer = Renderer::plain();
  #[rustfmt::skip]
  #[allow(clippy::let_unit_value)]
  let _ = if opts.color {
    renderer = Renderer::styled()
      .error(Style::new().fg_color(Some(AnsiColor::BrightRed.into())).bold())
      .warning(Style::new().fg_color(Some(AnsiColor::BrightYellow.into())).bold())
      .note(Style::new().fg_color(Some(AnsiColor::BrightGreen.into())).bold())
      .info(Style::new().fg_color(Some(AnsiColor::BrightBlue.into())).bold())
      .help(Style::new().fg_color(Some(AnsiColor::BrightCyan.into())).bold());
  };

  let diagnostics = match report.state.diagnostics.lock() {
    Ok(lock) => lock,
    Err(poison) => poison.into_inner(),
  };

  let mut errors = 0;
  for e in diagnostics.iter() {
    if e.kind == AnnotationType::Error {
      errors += 1;
    }

    let mut snippet = Snippet {
      title: Some(Annotation {
        id: None,
        label: Some(&e.message),
        annotation_type: e.kind,
      }),
      footer: Vec::new(),
      slices: Vec::new(),
    };

    // Consecutive labels in the same file share a slice.
    let mut cur_file = None;
    for label in &e.labels {
      let loc = label.loc;
      let Some(file) = report.ctx.file(loc.file) else {
        bug!("diagnostic refers to a file that is not in its context")
      };

      if cur_file != Some(loc.file) {
        cur_file = Some(loc.file);
        snippet.slices.push(Slice {
          source: file.text(..),
          line_start: 1,
          origin: Some(file.path().as_str()),
          annotations: Vec::new(),
          fold: true,
        });
      }

      let Some(slice) = snippet.slices.last_mut() else { continue };
      let (mut start, mut end) = (loc.range.start(), loc.range.end());
      if start == end && !slice.source.is_empty() {
        // Empty ranges still need something to underline. Widen them by one
        // byte, backwards if they sit at the very end of the file.
        if end == slice.source.len() {
          start = end - 1;
        } else {
          end = start + 1;
        }
      }

      slice.annotations.push(SourceAnnotation {
        range: (start, end),
        label: &label.message,
        annotation_type: label.kind,
      });
    }

    // Crop the starts of each slice to only incorporate the annotations.
    for slice in &mut snippet.slices {
      let earliest_start = slice
        .annotations
        .iter()
        .map(|a| a.range.0)
        .min()
        .unwrap_or(0);
      let (count, start_idx) = slice.source[..earliest_start]
        .bytes()
        .enumerate()
        .filter_map(|(i, c)| (c == b'\n').then_some(i + 1))
        .enumerate()
        .map(|(i, j)| (i + 1, j))
        .last()
        .unwrap_or_default();

      slice.line_start = count + 1;
      slice.source = &slice.source[start_idx..];
      for a in &mut slice.annotations {
        a.range.0 = char_offset(slice.source, a.range.0 - start_idx);
        a.range.1 = char_offset(slice.source, a.range.1 - start_idx);
      }
    }

    for (note, kind) in &e.notes {
      snippet.footer.push(Annotation {
        id: None,
        label: Some(note),
        annotation_type: *kind,
      });
    }

    let footer;
    if let Some(at) = e.reported_at.filter(|_| opts.show_report_locations) {
      footer = format!("reported at: {at}");
      snippet.footer.push(Annotation {
        id: None,
        label: Some(&footer),
        annotation_type: AnnotationType::Note,
      });
    }

    write!(sink, "{}\n\n", renderer.render(snippet))?;
  }

  if errors != 0 {
    let message = format!("aborting due to {errors} error{}", plural(errors));

    let aborting = Snippet {
      title: Some(Annotation {
        id: None,
        label: Some(&message),
        annotation_type: AnnotationType::Error,
      }),
      footer: Vec::new(),
      slices: Vec::new(),
    };

    writeln!(sink, "{}", renderer.render(aborting))?;
  }

  Ok(())
}

/// Converts a byte offset into `text` into the number of chars before it,
/// which is what annotate-snippets measures ranges in. Offsets inside of a
/// char round up past it.
fn char_offset(text: &str, byte: usize) -> usize {
  text.char_indices().take_while(|&(i, _)| i < byte).count()
}
