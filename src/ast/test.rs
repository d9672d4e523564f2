use super::*;

#[test]
fn test_opcode_codes_round_trip() {
    for (i, opcode) in Opcode::ALL.iter().enumerate() {
        assert_eq!(opcode.code(), i as u32);
        assert_eq!(Opcode::from_code(opcode.code()), Some(*opcode));
    }
    assert_eq!(Opcode::from_code(Opcode::ALL.len() as u32), None);
    assert_eq!(Opcode::from_code(u32::MAX), None);
}

#[test]
fn test_reference_codes() {
    assert_eq!(Opcode::from_code(12), Some(Opcode::Print));
    assert_eq!(Opcode::from_code(15), Some(Opcode::SetArr));
}

#[test]
fn test_signatures() {
    assert_eq!(Opcode::Label.signature(), &[Operand::Label]);
    assert_eq!(Opcode::Not.signature(), &[Operand::Variable]);
    assert_eq!(
        Opcode::GetArr.signature(),
        &[Operand::Variable, Operand::Parameter, Operand::Variable]
    );
    assert_eq!(
        Opcode::SetArr.signature(),
        &[Operand::Variable, Operand::Parameter, Operand::Parameter]
    );
    assert_eq!(
        Opcode::Switch.signature(),
        &[Operand::Parameter, Operand::Labels]
    );
}

#[test]
fn test_syntax_note_mentions_operands() {
    let syntax = Opcode::GetArr.syntax();
    assert!(syntax.contains("getarr"));
    assert!(syntax.contains("O14"));
    assert!(syntax.contains("V<n>|D<n>"));
}

#[test]
fn test_program_listing() {
    let program = Program::new(vec![
        Instruction::Mov {
            dest: Variable::new(0),
            src: Value::Constant(5),
        },
        Instruction::Print {
            value: Variable::new(0).into(),
        },
    ]);
    assert_eq!(program.listing(), "0000  O1 V0 D5\n0001  O12 V0\n");
    assert_eq!(program.span(1), Some(0..0));
    assert_eq!(program.span(2), None);
}
