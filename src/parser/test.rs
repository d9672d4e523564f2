use super::*;
use crate::ast::{Instruction, Opcode, Value, Variable};
use crate::lexer::tokenize;

fn parse_str(input: &str) -> Result<Program, ParseError> {
    let tokens = tokenize(input).expect("test input should lex");
    let mut parser = Parser::new(tokens);
    parser.parse_program()
}

fn v(index: usize) -> Variable {
    Variable::new(index)
}

#[test]
fn test_parse_print() {
    let program = parse_str("O12 V3").unwrap();
    assert_eq!(program.len(), 1);
    assert_eq!(
        program.instructions[0],
        Instruction::Print {
            value: Value::Variable(v(3))
        }
    );
    assert_eq!(program.spans[0], 0..6);
}

#[test]
fn test_parse_set_arr() {
    let program = parse_str("O15 V1 D3 V2").unwrap();
    assert_eq!(
        program.instructions[0],
        Instruction::SetArr {
            array: v(1),
            index: Value::Constant(3),
            value: Value::Variable(v(2)),
        }
    );
}

#[test]
fn test_parse_binary_ops() {
    let program = parse_str(
        "O1 V0 D5
         O2 V0 D-3
         O3 V0 V1
         O4 V0 D2
         O5 V0 D2
         O6 V0 D2
         O7 V0 D2
         O8 V0 V1
         O9 V0 V1
         O10 V0 V1",
    )
    .unwrap();

    let opcodes: Vec<Opcode> = program.instructions.iter().map(|i| i.opcode()).collect();
    assert_eq!(
        opcodes,
        vec![
            Opcode::Mov,
            Opcode::Add,
            Opcode::Sub,
            Opcode::Mul,
            Opcode::Div,
            Opcode::Mod,
            Opcode::Exp,
            Opcode::And,
            Opcode::Or,
            Opcode::Xor,
        ]
    );
    assert_eq!(
        program.instructions[1],
        Instruction::Add {
            dest: v(0),
            src: Value::Constant(-3)
        }
    );
    assert_eq!(
        program.instructions[2],
        Instruction::Sub {
            dest: v(0),
            src: Value::Variable(v(1))
        }
    );
}

#[test]
fn test_parse_unary_ops() {
    let program = parse_str("O11 V2 O13 V4").unwrap();
    assert_eq!(program.instructions[0], Instruction::Not { dest: v(2) });
    assert_eq!(program.instructions[1], Instruction::Input { dest: v(4) });
}

#[test]
fn test_parse_get_arr() {
    let program = parse_str("O14 V0 V1 V2").unwrap();
    assert_eq!(
        program.instructions[0],
        Instruction::GetArr {
            dest: v(0),
            index: Value::Variable(v(1)),
            array: v(2),
        }
    );
}

#[test]
fn test_parse_control_flow() {
    let program = parse_str("O0 Lloop O16 Lloop O17 V0 Lend O0 7 O16 7").unwrap();
    assert_eq!(program.instructions[0], Instruction::Label("Lloop".to_string()));
    assert_eq!(
        program.instructions[1],
        Instruction::Goto {
            target: "Lloop".to_string()
        }
    );
    assert_eq!(
        program.instructions[2],
        Instruction::JumpIf {
            condition: Value::Variable(v(0)),
            target: "Lend".to_string()
        }
    );
    assert_eq!(program.instructions[3], Instruction::Label("7".to_string()));
    assert_eq!(
        program.instructions[4],
        Instruction::Goto {
            target: "7".to_string()
        }
    );
}

#[test]
fn test_parse_switch_labels() {
    let program = parse_str("O18 V0 La 2 Lc O12 D1").unwrap();
    assert_eq!(program.len(), 2);
    assert_eq!(
        program.instructions[0],
        Instruction::Switch {
            selector: Value::Variable(v(0)),
            targets: vec!["La".to_string(), "2".to_string(), "Lc".to_string()],
        }
    );
    assert_eq!(program.spans[0], 0..14);
}

#[test]
fn test_every_opcode_has_a_parse() {
    // one sample per opcode, in table order
    let samples = [
        "O0 La",
        "O1 V0 D1",
        "O2 V0 D1",
        "O3 V0 D1",
        "O4 V0 D1",
        "O5 V0 D1",
        "O6 V0 D1",
        "O7 V0 D1",
        "O8 V0 D1",
        "O9 V0 D1",
        "O10 V0 D1",
        "O11 V0",
        "O12 D1",
        "O13 V0",
        "O14 V0 D1 V1",
        "O15 V0 D1 D2",
        "O16 La",
        "O17 D1 La",
        "O18 D1 La Lb",
    ];
    assert_eq!(samples.len(), Opcode::ALL.len());

    for (sample, opcode) in samples.iter().zip(Opcode::ALL) {
        let program = parse_str(sample).unwrap();
        assert_eq!(program.len(), 1, "{}", sample);
        assert_eq!(program.instructions[0].opcode(), *opcode, "{}", sample);
        assert_eq!(program.instructions[0].to_string(), *sample);
    }
}

#[test]
fn test_unknown_opcode() {
    let err = parse_str("O12 D1 O99 V0").unwrap_err();
    assert_eq!(err, ParseError::UnknownOpcode { code: 99, span: 7..10 });
}

#[test]
fn test_wrong_operand_kind() {
    // the destination of an arithmetic op must be a register
    let err = parse_str("O2 D1 D2").unwrap_err();
    match err {
        ParseError::UnexpectedToken {
            expected,
            found,
            lexeme,
            span,
            opcode,
        } => {
            assert_eq!(opcode, Some(Opcode::Add));
            assert_eq!(expected, "a variable");
            assert_eq!(found, "data");
            assert_eq!(lexeme, "D1");
            assert_eq!(span, 3..5);
        }
        other => panic!("expected UnexpectedToken, got {:?}", other),
    }
}

#[test]
fn test_instruction_must_start_with_opcode() {
    let err = parse_str("V1 O12 V1").unwrap_err();
    assert!(matches!(
        err,
        ParseError::UnexpectedToken {
            expected: "an opcode",
            found: "variable",
            ..
        }
    ));
}

#[test]
fn test_missing_operand() {
    let err = parse_str("O15 V1 D0").unwrap_err();
    assert_eq!(
        err,
        ParseError::UnexpectedEof {
            expected: "a variable or data operand",
            span: 9..9,
            opcode: Some(Opcode::SetArr),
        }
    );
}

#[test]
fn test_empty_program() {
    assert_eq!(parse_str("  \n ").unwrap_err(), ParseError::EmptyProgram);
}

#[test]
fn test_listing_reparses() {
    let source = "O0 Lstart O1 V0 D5 O14 V1 D0 V0 O17 V1 Lstart";
    let program = parse_str(source).unwrap();
    let listing: String = program
        .instructions
        .iter()
        .map(|i| format!("{}\n", i))
        .collect();
    let reparsed = parse_str(&listing).unwrap();
    assert_eq!(program.instructions, reparsed.instructions);
}
