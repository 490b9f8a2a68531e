/*!

  The application controller: a fixed collection of gate panels with
  whole-collection reset and export.

*/

use crate::error::ExportError;
use crate::gate::GateKind;
use crate::panel::GatePanel;
use std::path::Path;
use tracing::{debug, info};

/// The full set of gate panels, one per [GateKind], in the fixed display
/// order AND, OR, NOT, NAND, NOR, XOR, XNOR.
///
/// Panels are created once at startup and live for the process duration;
/// none is ever added or removed.
#[derive(Debug, Clone)]
pub struct Workbench {
    panels: Vec<GatePanel>,
}

impl Workbench {
    /// Creates a workbench with every panel reset to inputs (0, 0)
    pub fn new() -> Self {
        Self {
            panels: GateKind::ALL.into_iter().map(GatePanel::new).collect(),
        }
    }

    /// Returns the panels in fixed display order
    pub fn panels(&self) -> &[GatePanel] {
        &self.panels
    }

    /// Returns the panel for `kind`
    pub fn panel(&self, kind: GateKind) -> &GatePanel {
        self.panels
            .iter()
            .find(|p| p.kind() == kind)
            .expect("workbench holds a panel for every kind")
    }

    /// Returns the panel for `kind` mutably
    pub fn panel_mut(&mut self, kind: GateKind) -> &mut GatePanel {
        self.panels
            .iter_mut()
            .find(|p| p.kind() == kind)
            .expect("workbench holds a panel for every kind")
    }

    /// Resets every panel to inputs (0, 0), in fixed order
    pub fn reset_all(&mut self) {
        for panel in &mut self.panels {
            panel.reset();
        }
        info!("reset all panels");
    }

    /// Concatenates every panel's export block, in fixed order.
    ///
    /// The panels' current inputs do not affect the artifact: each block is
    /// the full enumerated truth table for its kind.
    pub fn export_text(&self) -> String {
        self.panels.iter().map(GatePanel::export_text).collect()
    }

    /// Assembles the full export artifact in memory, then writes it to
    /// `path` in a single shot, overwriting any previous artifact.
    ///
    /// Errors only if the destination cannot be written; nothing is
    /// persisted partially from this layer.
    pub fn export_all(&self, path: &Path) -> Result<(), ExportError> {
        let contents = self.export_text();
        debug!(bytes = contents.len(), "assembled export artifact");
        std::fs::write(path, &contents).map_err(|source| ExportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "exported truth tables");
        Ok(())
    }
}

impl Default for Workbench {
    fn default() -> Self {
        Self::new()
    }
}
