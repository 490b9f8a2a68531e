/*!

  Stateful per-gate panels: input toggling, live output, and truth tables.

*/

use crate::gate::{Bit, GateKind};

/// One enumerated row of a gate's truth table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TruthRow {
    /// The first input
    pub a: Bit,
    /// The second input, `None` for unary kinds
    pub b: Option<Bit>,
    /// The gate output for these inputs
    pub y: Bit,
}

impl std::fmt::Display for TruthRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.b {
            Some(b) => write!(f, "{} {} {}", self.a, b, self.y),
            None => write!(f, "{} - {}", self.a, self.y),
        }
    }
}

/// The interactive state of one displayed gate: its kind and current inputs.
///
/// The output is never stored. Every read recomputes it from the inputs, so
/// it can never go stale.
#[derive(Debug, Clone)]
pub struct GatePanel {
    kind: GateKind,
    input_a: Bit,
    input_b: Bit,
}

impl GatePanel {
    /// Creates a panel for `kind` with both inputs at 0
    pub fn new(kind: GateKind) -> Self {
        Self {
            kind,
            input_a: 0,
            input_b: 0,
        }
    }

    /// Returns the gate kind of this panel
    pub fn kind(&self) -> GateKind {
        self.kind
    }

    /// Returns the current first input
    pub fn input_a(&self) -> Bit {
        self.input_a
    }

    /// Returns the current second input. Meaningless for unary kinds.
    pub fn input_b(&self) -> Bit {
        self.input_b
    }

    /// Sets the first input
    pub fn set_input_a(&mut self, value: Bit) {
        debug_assert!(value <= 1, "gate inputs must be bits");
        self.input_a = value;
    }

    /// Sets the second input. No-op for unary kinds, which have no second input.
    pub fn set_input_b(&mut self, value: Bit) {
        debug_assert!(value <= 1, "gate inputs must be bits");
        if !self.kind.is_unary() {
            self.input_b = value;
        }
    }

    /// Flips the first input between 0 and 1
    pub fn toggle_a(&mut self) {
        self.input_a = 1 - self.input_a;
    }

    /// Flips the second input. No-op for unary kinds.
    pub fn toggle_b(&mut self) {
        if !self.kind.is_unary() {
            self.input_b = 1 - self.input_b;
        }
    }

    /// Sets both inputs to the values of a clicked truth row. `b` is ignored
    /// for unary kinds.
    pub fn select_truth_row(&mut self, a: Bit, b: Bit) {
        self.set_input_a(a);
        self.set_input_b(b);
    }

    /// Returns both inputs to 0
    pub fn reset(&mut self) {
        self.input_a = 0;
        self.input_b = 0;
    }

    /// Evaluates the gate on the current inputs
    pub fn output(&self) -> Bit {
        self.kind.eval(self.input_a, self.input_b)
    }

    /// Enumerates the full truth table for this panel's kind, in fixed row
    /// order: (0,0),(0,1),(1,0),(1,1) for binary kinds, (0),(1) for NOT.
    pub fn truth_rows(&self) -> Vec<TruthRow> {
        if self.kind.is_unary() {
            (0..2)
                .map(|a| TruthRow {
                    a,
                    b: None,
                    y: self.kind.eval(a, 0),
                })
                .collect()
        } else {
            [(0, 0), (0, 1), (1, 0), (1, 1)]
                .into_iter()
                .map(|(a, b)| TruthRow {
                    a,
                    b: Some(b),
                    y: self.kind.eval(a, b),
                })
                .collect()
        }
    }

    /// Returns the index of the truth row matching the current inputs.
    ///
    /// A direct tuple lookup: `a` for unary kinds, `2a + b` otherwise.
    pub fn highlighted_row(&self) -> usize {
        if self.kind.is_unary() {
            self.input_a as usize
        } else {
            ((self.input_a << 1) | self.input_b) as usize
        }
    }

    /// Emits this panel's truth table as a fixed-format text block: a header
    /// line naming the gate, a column header, one line per row (with `-` in
    /// place of the absent second input for NOT), and a trailing blank line.
    pub fn export_text(&self) -> String {
        let mut text = format!("{} Gate\nA B Y\n", self.kind.name());
        for row in self.truth_rows() {
            text.push_str(&row.to_string());
            text.push('\n');
        }
        text.push('\n');
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_never_stale() {
        let mut panel = GatePanel::new(GateKind::Xor);
        assert_eq!(panel.output(), 0);
        panel.set_input_a(1);
        assert_eq!(panel.output(), 1);
        panel.set_input_b(1);
        assert_eq!(panel.output(), 0);
    }

    #[test]
    fn unary_ignores_b() {
        let mut panel = GatePanel::new(GateKind::Not);
        panel.set_input_b(1);
        panel.toggle_b();
        assert_eq!(panel.input_b(), 0);
        assert_eq!(panel.output(), 1);
    }
}
