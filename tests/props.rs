use gate_lab::gate::{Bit, GateKind};
use gate_lab::panel::GatePanel;
use proptest::prelude::*;

fn any_kind() -> impl Strategy<Value = GateKind> {
    proptest::sample::select(GateKind::ALL.to_vec())
}

fn any_bit() -> impl Strategy<Value = Bit> {
    prop_oneof![Just(0), Just(1)]
}

proptest! {
    #[test]
    fn toggles_are_involutions(kind in any_kind(), a in any_bit(), b in any_bit()) {
        let mut panel = GatePanel::new(kind);
        panel.select_truth_row(a, b);
        let before = (panel.input_a(), panel.input_b(), panel.output());

        panel.toggle_a();
        panel.toggle_a();
        panel.toggle_b();
        panel.toggle_b();

        prop_assert_eq!((panel.input_a(), panel.input_b(), panel.output()), before);
    }

    #[test]
    fn output_matches_engine(kind in any_kind(), a in any_bit(), b in any_bit()) {
        let mut panel = GatePanel::new(kind);
        panel.select_truth_row(a, b);
        prop_assert_eq!(panel.output(), kind.eval(a, b));
        prop_assert!(panel.output() <= 1);
    }

    #[test]
    fn highlight_points_at_current_inputs(kind in any_kind(), a in any_bit(), b in any_bit()) {
        let mut panel = GatePanel::new(kind);
        panel.select_truth_row(a, b);

        let row = panel.truth_rows()[panel.highlighted_row()];
        prop_assert_eq!(row.a, panel.input_a());
        if let Some(row_b) = row.b {
            prop_assert_eq!(row_b, panel.input_b());
        }
        prop_assert_eq!(row.y, panel.output());
    }

    #[test]
    fn reset_wins_from_any_state(kind in any_kind(), a in any_bit(), b in any_bit(), flips in 0usize..4) {
        let mut panel = GatePanel::new(kind);
        panel.select_truth_row(a, b);
        for _ in 0..flips {
            panel.toggle_a();
            panel.toggle_b();
        }
        panel.reset();
        prop_assert_eq!((panel.input_a(), panel.input_b()), (0, 0));
        prop_assert_eq!(panel.highlighted_row(), 0);
    }
}
