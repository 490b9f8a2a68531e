#![warn(missing_docs, unreachable_pub)]
/*!

`gate-lab`

An interactive truth-table workbench for the seven boolean gate kinds
(AND, OR, NOT, NAND, NOR, XOR, XNOR): per-gate toggleable inputs, live
output recomputation, truth-row highlighting, and export of every truth
table to one text artifact.

*/
#![doc = "## Simple Example\n```"]
#![doc = r#"use gate_lab::gate::GateKind;
use gate_lab::workbench::Workbench;

let mut bench = Workbench::new();

// Drive the AND gate to (1, 1)
let and = bench.panel_mut(GateKind::And);
and.toggle_a();
and.toggle_b();
assert_eq!(and.output(), 1);
assert_eq!(and.highlighted_row(), 3);

// The export artifact enumerates full tables regardless of panel state
assert!(bench.export_text().starts_with("AND Gate\nA B Y\n0 0 0\n"));"#]
#![doc = "\n```"]

pub mod config;
pub mod error;
pub mod gate;
pub mod panel;
pub mod util;
pub mod workbench;
