//! SIA Assembler.
//!
//! Translates line-oriented SIA assembly into the flat binary image the emulator loads. It
//! provides:
//! 1. **Parsing:** Each line is parsed against the `sia.pest` grammar: a mnemonic followed by
//!    register, integer or unrecognised operand tokens, case-insensitive, with `#` comments.
//! 2. **Operand Checking:** Registers, immediates and offsets are range-checked against the
//!    width of their encoding field.
//! 3. **Recovery:** A malformed line contributes no bytes and is reported as an `AsmError`;
//!    assembly continues with the next line, so bytes already emitted are never disturbed.
//!
//! Operand orders follow the SIA manual, including the inverted `move imm rX`.

use pest::Parser;
use pest::iterators::Pair;
use tracing::warn;

use self::grammar::{Rule, SiaParser};
use crate::common::constants::NUM_REGISTERS;
use crate::common::error::AsmError;
use crate::isa::encode::encode;
use crate::isa::instruction::{AluOp, BranchCond, Instruction};

mod grammar {
    use pest_derive::Parser;

    #[derive(Parser)]
    #[grammar = "asm/sia.pest"]
    pub(super) struct SiaParser;
}

/// Largest half-word address a call or jump can hold (24 bits).
const MAX_HALF_ADDRESS: i64 = 0x00FF_FFFF;

/// Result of assembling a whole source file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Assembly {
    /// Binary image, instructions concatenated in source order.
    pub bytes: Vec<u8>,
    /// One entry per skipped line, in source order.
    pub diagnostics: Vec<AsmError>,
}

impl Assembly {
    /// Whether every line assembled.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Assembles a source file.
///
/// Malformed lines are skipped, logged with `warn!` and collected in
/// [`Assembly::diagnostics`].
///
/// # Examples
///
/// ```
/// use siasim_core::asm::assemble;
///
/// let out = assemble("move 5 r1\nbogus r1\nhalt\n");
/// assert_eq!(out.bytes, vec![0xB1, 0x05, 0x00, 0x00]);
/// assert_eq!(out.diagnostics.len(), 1);
/// assert_eq!(out.diagnostics[0].line(), 2);
/// ```
pub fn assemble(src: &str) -> Assembly {
    let mut out = Assembly::default();
    for (idx, text) in src.lines().enumerate() {
        match assemble_line(text, idx + 1) {
            Ok(Some(inst)) => {
                let (bytes, len) = encode(&inst);
                out.bytes.extend_from_slice(&bytes[..len]);
            }
            Ok(None) => {}
            Err(e) => {
                warn!("skipping line: {e}");
                out.diagnostics.push(e);
            }
        }
    }
    out
}

/// Assembles one source line.
///
/// # Arguments
///
/// * `text` - The line, without its terminator.
/// * `line` - 1-based line number used in diagnostics.
///
/// # Returns
///
/// `Ok(None)` for blank and comment-only lines, otherwise the parsed instruction.
///
/// # Errors
///
/// Returns an `AsmError` describing the first problem found on the line.
pub fn assemble_line(text: &str, line: usize) -> Result<Option<Instruction>, AsmError> {
    let parsed = SiaParser::parse(Rule::line, text).map_err(|e| AsmError::Syntax {
        line,
        message: e.to_string(),
    })?;
    let mut tokens = parsed
        .flat_map(Pair::into_inner)
        .filter(|pair| pair.as_rule() != Rule::EOI);
    let Some(head) = tokens.next() else {
        return Ok(None);
    };
    let lowered = head.as_str().to_ascii_lowercase();
    let mnemonic = lowered.as_str();
    let ops = Operands {
        line,
        mnemonic,
        tokens: tokens.collect(),
    };

    if let Some(op) = AluOp::ALL.into_iter().find(|op| op.mnemonic() == mnemonic) {
        ops.expect(3)?;
        return Ok(Some(Instruction::Alu {
            op,
            ra: ops.register(0)?,
            rb: ops.register(1)?,
            rc: ops.register(2)?,
        }));
    }

    if let Some(cond) = BranchCond::ALL
        .into_iter()
        .find(|cond| cond.mnemonic() == mnemonic)
    {
        ops.expect(3)?;
        let ra = ops.register(0)?;
        let rb = ops.register(1)?;
        let bytes = ops.even(2, i16::MIN as i64 * 2, i16::MAX as i64 * 2)?;
        return Ok(Some(Instruction::Branch {
            cond,
            ra,
            rb,
            offset: (bytes / 2) as i16,
        }));
    }

    let inst = match mnemonic {
        "call" | "jump" => {
            ops.expect(1)?;
            let target = (ops.even(0, 0, MAX_HALF_ADDRESS * 2)? / 2) as u32;
            if mnemonic == "call" {
                Instruction::Call { target }
            } else {
                Instruction::Jump { target }
            }
        }
        "load" => {
            ops.expect(3)?;
            Instruction::Load {
                rd: ops.register(0)?,
                base: ops.register(1)?,
                offset: ops.number(2, -8, 7)? as i8,
            }
        }
        "store" => {
            ops.expect(3)?;
            Instruction::Store {
                rs: ops.register(0)?,
                base: ops.register(1)?,
                offset: ops.number(2, -8, 7)? as i8,
            }
        }
        "return" => Instruction::Return,
        "push" => {
            ops.expect(1)?;
            Instruction::Push {
                reg: ops.register(0)?,
            }
        }
        "pop" => {
            ops.expect(1)?;
            Instruction::Pop {
                reg: ops.register(0)?,
            }
        }
        "move" => {
            ops.expect(2)?;
            let imm = ops.number(0, i8::MIN as i64, i8::MAX as i64)? as i8;
            Instruction::Move {
                rd: ops.register(1)?,
                imm,
            }
        }
        "interrupt" => {
            ops.expect(1)?;
            Instruction::Interrupt {
                code: ops.number(0, 0, u8::MAX as i64)? as u8,
            }
        }
        "halt" => Instruction::Halt,
        _ => {
            return Err(AsmError::UnknownMnemonic {
                line,
                mnemonic: mnemonic.to_string(),
            });
        }
    };
    Ok(Some(inst))
}

/// Operand tokens of one line, with the context needed to report errors.
struct Operands<'a> {
    line: usize,
    mnemonic: &'a str,
    tokens: Vec<Pair<'a, Rule>>,
}

impl Operands<'_> {
    /// Fails unless at least `count` operands are present. Extra operands are ignored.
    fn expect(&self, count: usize) -> Result<(), AsmError> {
        if self.tokens.len() < count {
            return Err(AsmError::MissingOperand {
                line: self.line,
                mnemonic: self.mnemonic.to_string(),
                expected: count,
            });
        }
        Ok(())
    }

    fn token(&self, idx: usize) -> Option<(Rule, &str)> {
        self.tokens
            .get(idx)
            .map(|pair| (pair.as_rule(), pair.as_str()))
    }

    fn text(&self, idx: usize) -> String {
        self.token(idx)
            .map(|(_, text)| text.to_string())
            .unwrap_or_default()
    }

    /// Reads a `register` token `rN` with `N` in `0..16`.
    fn register(&self, idx: usize) -> Result<usize, AsmError> {
        self.token(idx)
            .filter(|&(rule, _)| rule == Rule::register)
            .and_then(|(_, text)| text.get(1..))
            .and_then(|n| n.parse::<usize>().ok())
            .filter(|&n| n < NUM_REGISTERS)
            .ok_or_else(|| AsmError::InvalidRegister {
                line: self.line,
                operand: self.text(idx),
            })
    }

    /// Reads an `integer` token in `min..=max`.
    fn number(&self, idx: usize, min: i64, max: i64) -> Result<i64, AsmError> {
        self.token(idx)
            .filter(|&(rule, _)| rule == Rule::integer)
            .and_then(|(_, text)| text.parse::<i64>().ok())
            .filter(|n| (min..=max).contains(n))
            .ok_or_else(|| AsmError::InvalidImmediate {
                line: self.line,
                operand: self.text(idx),
                min,
                max,
            })
    }

    /// Reads an even `integer` token in `min..=max`.
    fn even(&self, idx: usize, min: i64, max: i64) -> Result<i64, AsmError> {
        let value = self.number(idx, min, max)?;
        if value % 2 != 0 {
            return Err(AsmError::OddOffset {
                line: self.line,
                value,
            });
        }
        Ok(value)
    }
}
