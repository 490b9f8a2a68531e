/*!

  The gate engine: pure evaluation rules for the seven supported gate kinds.

*/

use bitvec::vec::BitVec;

/// A logic level constrained to 0 or 1.
pub type Bit = u8;

/// One of the seven supported boolean gate kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateKind {
    /// y = a & b
    And,
    /// y = a | b
    Or,
    /// y = !a (unary)
    Not,
    /// y = !(a & b)
    Nand,
    /// y = !(a | b)
    Nor,
    /// y = a ^ b
    Xor,
    /// y = !(a ^ b)
    Xnor,
}

impl GateKind {
    /// Every supported kind, in the fixed order the application displays and exports them.
    pub const ALL: [GateKind; 7] = [
        GateKind::And,
        GateKind::Or,
        GateKind::Not,
        GateKind::Nand,
        GateKind::Nor,
        GateKind::Xor,
        GateKind::Xnor,
    ];

    /// Returns the number of inputs this kind consumes
    pub const fn arity(self) -> usize {
        match self {
            GateKind::Not => 1,
            _ => 2,
        }
    }

    /// Returns `true` if the kind has a single input
    pub const fn is_unary(self) -> bool {
        self.arity() == 1
    }

    /// Returns the upper-case display name of the kind
    pub const fn name(self) -> &'static str {
        match self {
            GateKind::And => "AND",
            GateKind::Or => "OR",
            GateKind::Not => "NOT",
            GateKind::Nand => "NAND",
            GateKind::Nor => "NOR",
            GateKind::Xor => "XOR",
            GateKind::Xnor => "XNOR",
        }
    }

    /// Evaluates the gate on the given inputs. `b` is ignored for unary kinds.
    ///
    /// Inputs must already be constrained to 0 or 1 by the caller.
    pub fn eval(self, a: Bit, b: Bit) -> Bit {
        debug_assert!(a <= 1 && b <= 1, "gate inputs must be bits");
        match self {
            GateKind::And => a & b,
            GateKind::Or => a | b,
            GateKind::Not => {
                if a == 0 {
                    1
                } else {
                    0
                }
            }
            GateKind::Nand => {
                if a & b != 0 { 0 } else { 1 }
            }
            GateKind::Nor => {
                if a | b != 0 { 0 } else { 1 }
            }
            GateKind::Xor => a ^ b,
            GateKind::Xnor => {
                if a ^ b != 0 { 0 } else { 1 }
            }
        }
    }

    /// Returns the lookup-table INIT value for this kind: the output of every
    /// truth row, packed in row order with row 0 at bit 0.
    pub fn init_vector(self) -> BitVec {
        (0..1usize << self.arity())
            .map(|row| {
                let a = (row >> (self.arity() - 1)) as Bit;
                let b = (row & 1) as Bit;
                self.eval(a, b) != 0
            })
            .collect()
    }

    /// Emits the INIT value as a sized binary literal, msb first, like `4'b1000`
    pub fn init_literal(self) -> String {
        let bv = self.init_vector();
        format!(
            "{}'b{}",
            bv.len(),
            bv.iter()
                .rev()
                .map(|b| if *b { '1' } else { '0' })
                .collect::<String>()
        )
    }
}

impl std::fmt::Display for GateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The error returned when a string names no supported gate kind
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown gate kind: {0}")]
pub struct ParseGateError(pub String);

impl std::str::FromStr for GateKind {
    type Err = ParseGateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "AND" => Ok(GateKind::And),
            "OR" => Ok(GateKind::Or),
            "NOT" => Ok(GateKind::Not),
            "NAND" => Ok(GateKind::Nand),
            "NOR" => Ok(GateKind::Nor),
            "XOR" => Ok(GateKind::Xor),
            "XNOR" => Ok(GateKind::Xnor),
            _ => Err(ParseGateError(s.to_string())),
        }
    }
}
