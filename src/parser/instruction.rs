use crate::ast::{Instruction, LabelRef, Opcode, Operand, Value, Variable};
use crate::error::ParseError;
use crate::lexer::Token;
use crate::parser::Parser;

use std::ops::Range;

/// A decoded operand, before it is slotted into an instruction.
#[derive(Debug)]
enum Arg {
    Variable(Variable),
    Value(Value),
    Label(LabelRef),
    Labels(Vec<LabelRef>),
}

impl Parser {
    /// `instruction := OPCODE operand*`, operands as declared by the opcode.
    pub fn parse_instruction(&mut self) -> Result<(Instruction, Range<usize>), ParseError> {
        let Some((token, span_opcode)) = self.tokens.next() else {
            return Err(ParseError::UnexpectedEof {
                expected: "an opcode",
                span: self.eof.clone(),
                opcode: None,
            });
        };

        let Token::Opcode(code) = token else {
            return Err(unexpected("an opcode", &token, span_opcode, None));
        };
        let Some(opcode) = Opcode::from_code(code) else {
            return Err(ParseError::UnknownOpcode {
                code,
                span: span_opcode,
            });
        };

        let mut span = span_opcode.clone();
        let mut args = Vec::with_capacity(opcode.signature().len());
        for operand in opcode.signature() {
            let (arg, arg_span) = self.parse_operand(opcode, *operand)?;
            span.end = arg_span.end;
            args.push(arg);
        }

        Ok((build(opcode, args), span))
    }

    fn parse_operand(
        &mut self,
        opcode: Opcode,
        operand: Operand,
    ) -> Result<(Arg, Range<usize>), ParseError> {
        let Some((token, span)) = self.tokens.next() else {
            return Err(ParseError::UnexpectedEof {
                expected: operand.describe(),
                span: self.eof.clone(),
                opcode: Some(opcode),
            });
        };

        match (operand, token) {
            (Operand::Variable, Token::Variable(index)) => {
                Ok((Arg::Variable(Variable::new(index)), span))
            }
            (Operand::Parameter, Token::Variable(index)) => {
                Ok((Arg::Value(Value::Variable(Variable::new(index))), span))
            }
            (Operand::Parameter, Token::Data(value)) => Ok((Arg::Value(Value::Constant(value)), span)),
            (Operand::Label, Token::Label(name) | Token::Number(name)) => {
                Ok((Arg::Label(name), span))
            }
            (Operand::Labels, Token::Label(name) | Token::Number(name)) => {
                let mut labels = vec![name];
                let mut span = span;
                while let Some((Token::Label(_) | Token::Number(_), _)) = self.tokens.peek() {
                    let Some((Token::Label(name) | Token::Number(name), next)) = self.tokens.next()
                    else {
                        unreachable!()
                    };
                    labels.push(name);
                    span.end = next.end;
                }
                Ok((Arg::Labels(labels), span))
            }
            (operand, token) => Err(unexpected(operand.describe(), &token, span, Some(opcode))),
        }
    }
}

fn unexpected(
    expected: &'static str,
    token: &Token,
    span: Range<usize>,
    opcode: Option<Opcode>,
) -> ParseError {
    ParseError::UnexpectedToken {
        expected,
        found: token.kind(),
        lexeme: token.to_string(),
        span,
        opcode,
    }
}

/// Assembles the instruction. `args` always matches `opcode.signature()`,
/// `parse_operand` guarantees the shape of every slot.
fn build(opcode: Opcode, args: Vec<Arg>) -> Instruction {
    let mut args = Args(args.into_iter());

    match opcode {
        Opcode::Label => Instruction::Label(args.label()),
        Opcode::Mov => Instruction::Mov {
            dest: args.variable(),
            src: args.value(),
        },
        Opcode::Add => Instruction::Add {
            dest: args.variable(),
            src: args.value(),
        },
        Opcode::Sub => Instruction::Sub {
            dest: args.variable(),
            src: args.value(),
        },
        Opcode::Mul => Instruction::Mul {
            dest: args.variable(),
            src: args.value(),
        },
        Opcode::Div => Instruction::Div {
            dest: args.variable(),
            src: args.value(),
        },
        Opcode::Mod => Instruction::Mod {
            dest: args.variable(),
            src: args.value(),
        },
        Opcode::Exp => Instruction::Exp {
            dest: args.variable(),
            src: args.value(),
        },
        Opcode::And => Instruction::And {
            dest: args.variable(),
            src: args.value(),
        },
        Opcode::Or => Instruction::Or {
            dest: args.variable(),
            src: args.value(),
        },
        Opcode::Xor => Instruction::Xor {
            dest: args.variable(),
            src: args.value(),
        },
        Opcode::Not => Instruction::Not {
            dest: args.variable(),
        },
        Opcode::Print => Instruction::Print {
            value: args.value(),
        },
        Opcode::Input => Instruction::Input {
            dest: args.variable(),
        },
        Opcode::GetArr => Instruction::GetArr {
            dest: args.variable(),
            index: args.value(),
            array: args.variable(),
        },
        Opcode::SetArr => Instruction::SetArr {
            array: args.variable(),
            index: args.value(),
            value: args.value(),
        },
        Opcode::Goto => Instruction::Goto {
            target: args.label(),
        },
        Opcode::JumpIf => Instruction::JumpIf {
            condition: args.value(),
            target: args.label(),
        },
        Opcode::Switch => Instruction::Switch {
            selector: args.value(),
            targets: args.labels(),
        },
    }
}

// Struct literal fields are evaluated in the order written, which is the
// order the operands were parsed in.
struct Args(std::vec::IntoIter<Arg>);

impl Args {
    fn variable(&mut self) -> Variable {
        match self.0.next() {
            Some(Arg::Variable(var)) => var,
            other => unreachable!("expected variable operand, got {:?}", other),
        }
    }

    fn value(&mut self) -> Value {
        match self.0.next() {
            Some(Arg::Value(value)) => value,
            other => unreachable!("expected value operand, got {:?}", other),
        }
    }

    fn label(&mut self) -> LabelRef {
        match self.0.next() {
            Some(Arg::Label(label)) => label,
            other => unreachable!("expected label operand, got {:?}", other),
        }
    }

    fn labels(&mut self) -> Vec<LabelRef> {
        match self.0.next() {
            Some(Arg::Labels(labels)) => labels,
            other => unreachable!("expected label list, got {:?}", other),
        }
    }
}
