use ariadne::{Color, Fmt};
use yansi::Paint;

/// Operand shapes an opcode can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// `V<n>`
    Variable,
    /// `V<n>` or `D<n>`
    Parameter,
    /// `L<name>` or a bare number
    Label,
    /// One or more labels, up to the next opcode.
    Labels,
}

impl Operand {
    pub fn describe(&self) -> &'static str {
        match self {
            Operand::Variable => "a variable",
            Operand::Parameter => "a variable or data operand",
            Operand::Label | Operand::Labels => "a label",
        }
    }

    fn placeholder(&self) -> &'static str {
        match self {
            Operand::Variable => "V<n>",
            Operand::Parameter => "V<n>|D<n>",
            Operand::Label => "L<name>",
            Operand::Labels => "L<name>...",
        }
    }
}

macro_rules! opcodes {
    ($($variant:ident = $code:literal => $name:literal [$($operand:ident),*]),* $(,)?) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Opcode {
            $($variant = $code),*
        }

        impl Opcode {
            pub const ALL: &'static [Opcode] = &[$(Opcode::$variant),*];

            pub fn from_code(code: u32) -> Option<Opcode> {
                match code {
                    $($code => Some(Opcode::$variant),)*
                    _ => None,
                }
            }

            pub fn name(&self) -> &'static str {
                match self {
                    $(Opcode::$variant => $name),*
                }
            }

            /// Operands that follow the opcode, in source order.
            pub fn signature(&self) -> &'static [Operand] {
                match self {
                    $(Opcode::$variant => &[$(Operand::$operand),*]),*
                }
            }
        }
    };
}

opcodes! {
    Label  = 0  => "label"  [Label],
    Mov    = 1  => "mov"    [Variable, Parameter],
    Add    = 2  => "add"    [Variable, Parameter],
    Sub    = 3  => "sub"    [Variable, Parameter],
    Mul    = 4  => "mul"    [Variable, Parameter],
    Div    = 5  => "div"    [Variable, Parameter],
    Mod    = 6  => "mod"    [Variable, Parameter],
    Exp    = 7  => "exp"    [Variable, Parameter],
    And    = 8  => "and"    [Variable, Parameter],
    Or     = 9  => "or"     [Variable, Parameter],
    Xor    = 10 => "xor"    [Variable, Parameter],
    Not    = 11 => "not"    [Variable],
    Print  = 12 => "print"  [Parameter],
    Input  = 13 => "input"  [Variable],
    GetArr = 14 => "getarr" [Variable, Parameter, Variable],
    SetArr = 15 => "setarr" [Variable, Parameter, Parameter],
    Goto   = 16 => "goto"   [Label],
    JumpIf = 17 => "jumpif" [Parameter, Label],
    Switch = 18 => "switch" [Parameter, Labels],
}

impl Opcode {
    pub fn code(&self) -> u32 {
        *self as u32
    }

    /// Colored usage line for diagnostics, e.g. `O14 V<n> V<n>|D<n> V<n>`.
    pub fn syntax(&self) -> String {
        let mut out = format!(
            "{} is written as: {}",
            Fmt::fg(self.name(), Color::Blue).bold(),
            Fmt::fg(format!("O{}", self.code()), Color::Yellow).bold(),
        );
        for operand in self.signature() {
            out.push(' ');
            out.push_str(
                &Fmt::fg(operand.placeholder(), Color::Rgb(150, 200, 100))
                    .bold()
                    .to_string(),
            );
        }
        out
    }
}
