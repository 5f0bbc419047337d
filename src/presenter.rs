//! Draws a tree as text, one frame per step.
//!
//! A [`Presenter`] is an [`Observer`] so it is handed to the `_with` operations of a [`Tree`].
//! Every insertion, visited node and found value produces a frame like this one, taken while a
//! search for `8` is at node `10` after `5` was found earlier:
//!
//! ```text
//! == visiting 10
//!                      [5]
//!             /              \
//!             3              7
//!   /              \                   \
//!   1              4                 (10)
//!        \                        /
//!        2                        8
//! ```
//!
//! Found values are drawn as `[v]` and the node currently being visited as `(v)`. Found values
//! stay marked for the life of the presenter.

use std::collections::BTreeSet;
use std::fmt::Display;
use std::io::{self, Write};
use std::thread;

use tracing::warn;

use crate::config::PresenterConfig;
use crate::error::Result;
use crate::layout::Layout;
use crate::observer::Observer;
use crate::tree::Tree;

/// Writes text frames of a tree to `W`.
///
/// # Examples
///
/// ```
/// use bstviz::config::PresenterConfig;
/// use bstviz::presenter::Presenter;
/// use bstviz::tree::Tree;
///
/// let mut tree = Tree::new();
/// let mut presenter = Presenter::new(Vec::new(), PresenterConfig::default().with_cell_width(3))?;
/// for x in [2, 1, 3] {
///     tree.insert_with(x, &mut presenter);
/// }
/// assert!(tree.search_with(&3, &mut presenter));
///
/// // Three insertions, two visits and one find.
/// assert_eq!(presenter.frames(), 6);
///
/// let out = String::from_utf8(presenter.finish()?).unwrap();
/// assert!(out.ends_with("== found 3\n    2\n /     \\\n 1    [3]\n\n"));
/// # Ok::<(), bstviz::error::Error>(())
/// ```
#[derive(Debug)]
pub struct Presenter<T, W> {
    out: W,
    config: PresenterConfig,
    /// Shape of the tree as of the last structural change.
    layout: Layout<T>,
    /// Values that a search has found.
    found: BTreeSet<T>,
    frames: usize,
    /// The first write failure. Once set no more frames are written.
    error: Option<io::Error>,
}

impl<T, W> Presenter<T, W>
where
    T: Ord + Clone + Display,
    W: Write,
{
    /// Creates a presenter writing to `out`. Fails if `config` is unusable.
    pub fn new(out: W, config: PresenterConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            out,
            config,
            layout: Layout::default(),
            found: BTreeSet::new(),
            frames: 0,
            error: None,
        })
    }

    /// Draws a single frame of `tree` with nothing highlighted but previously found values.
    pub fn render(&mut self, tree: &Tree<T>) -> Result<()> {
        self.layout = Layout::of(tree);
        self.draw("tree", None)?;
        self.frames += 1;

        Ok(())
    }

    /// Values found so far.
    pub fn found(&self) -> &BTreeSet<T> {
        &self.found
    }

    /// Number of frames written so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Flushes and returns the underlying writer, or the first error hit while drawing.
    pub fn finish(mut self) -> Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err.into());
        }
        self.out.flush()?;

        Ok(self.out)
    }

    /// Draws a frame unless an earlier one failed. Tree operations can't fail so the error is
    /// kept for [`finish`][Presenter::finish] instead of being returned.
    fn frame(&mut self, title: &str, current: Option<&T>) {
        if self.error.is_some() {
            return;
        }

        match self.draw(title, current) {
            Ok(()) => self.frames += 1,
            Err(err) => {
                warn!(error = %err, frames = self.frames, "frame write failed, dropping the rest");
                self.error = Some(err);
            }
        }
    }

    fn pause(&self) {
        if !self.config.step_delay.is_zero() {
            thread::sleep(self.config.step_delay);
        }
    }

    fn draw(&mut self, title: &str, current: Option<&T>) -> io::Result<()> {
        let mut text = format!("== {title}\n");
        if self.layout.width() == 0 {
            text.push_str("(empty)\n");
        }
        let width = self.cell_width();
        for row in 0..self.layout.depth() {
            if row > 0 {
                push_line(&mut text, self.connectors(row, width));
            }
            push_line(&mut text, self.nodes(row, current, width));
        }
        text.push('\n');

        self.out.write_all(text.as_bytes())
    }

    /// The configured cell width, widened to fit the longest marked label. Nodes with adjacent
    /// in-order ranks are always ancestor and descendant, so two nodes on one row are at least a
    /// whole cell apart and labels that fit their cells can't touch.
    fn cell_width(&self) -> usize {
        let widest = self
            .layout
            .placements()
            .iter()
            .map(|p| p.value.to_string().chars().count() + 2)
            .max()
            .unwrap_or(0);

        self.config.cell_width.max(widest)
    }

    /// The labels of every node on `row`, each centered in its cell.
    fn nodes(&self, row: usize, current: Option<&T>, width: usize) -> String {
        let mut line = String::new();
        let mut len = 0;
        for placement in self.layout.placements().iter().filter(|p| p.row == row) {
            let start = placement.column * width;
            if len < start {
                line.extend(std::iter::repeat(' ').take(start - len));
                len = start;
            }
            let cell = format!("{:^width$}", self.label(&placement.value, current));
            len += cell.chars().count();
            line.push_str(&cell);
        }

        line
    }

    /// A `/` or `\` above the center of every node on `row`, leaning toward its parent.
    fn connectors(&self, row: usize, width: usize) -> String {
        let mut line = vec![' '; self.layout.width() * width];
        for edge in self.layout.edges() {
            let Some(child) = self.layout.at(edge.child) else {
                continue;
            };
            if child.row == row {
                line[edge.child * width + width / 2] = if edge.child < edge.parent {
                    '/'
                } else {
                    '\\'
                };
            }
        }

        line.into_iter().collect()
    }

    fn label(&self, value: &T, current: Option<&T>) -> String {
        if self.found.contains(value) {
            format!("[{value}]")
        } else if current == Some(value) {
            format!("({value})")
        } else {
            value.to_string()
        }
    }
}

fn push_line(text: &mut String, line: String) {
    text.push_str(line.trim_end());
    text.push('\n');
}

impl<T, W> Observer<T> for Presenter<T, W>
where
    T: Ord + Clone + Display,
    W: Write,
{
    fn on_structure_changed(&mut self, tree: &Tree<T>) {
        self.layout = Layout::of(tree);
        self.frame(&format!("inserted, {} nodes", tree.len()), None);
    }

    fn on_node_visited(&mut self, value: &T) {
        self.frame(&format!("visiting {value}"), Some(value));
        self.pause();
    }

    fn on_value_found(&mut self, value: &T) {
        self.found.insert(value.clone());
        self.frame(&format!("found {value}"), Some(value));
    }
}
