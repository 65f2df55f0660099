//! AST → IR lowering
//!
//! The generator walks the tree depth-first, pre-order, and produces one
//! module of LLVM-style textual IR:
//!
//! ```text
//! @.str = private unnamed_addr constant [3 x i8] c"hi\00", align 1
//! declare void @print_string(i8*)
//!
//! define i32 @main() {
//!   call void @print_string(i8* getelementptr inbounds ([3 x i8], [3 x i8]* @.str, i32 0, i32 0))
//!   ret i32 0
//! }
//! ```
//!
//! Only Echo nodes produce instructions. Program and Define are walked for
//! their children; Define has no lowering of its own yet.

use crate::codegen::constants::StringPool;
use crate::codegen::errors::CodegenError;
use crate::options::Options;
use crate::parser::ast::{Node, NodeKind};
use std::io;

/// Emits IR for a parsed program
pub struct IrGenerator<'a> {
    options: &'a Options,
}

impl<'a> IrGenerator<'a> {
    pub fn new(options: &'a Options) -> Self {
        IrGenerator { options }
    }

    /// Lower `program` to IR text. The tree is only read, so generating
    /// twice yields the same output.
    pub fn generate(&self, program: &Node) -> Result<String, CodegenError> {
        if program.kind != NodeKind::Program {
            return Err(CodegenError::NotAProgram {
                found: program.kind,
            });
        }

        let pool = StringPool::collect(program)?;
        let mut out = String::new();

        self.emit_preamble(&pool, &mut out)?;
        self.emit_node(program, &pool, &mut out)?;
        self.emit_postamble(&mut out)?;

        Ok(out)
    }

    /// Lower `program` and write the IR to `writer`.
    pub fn write_to<W: io::Write>(&self, program: &Node, mut writer: W) -> Result<(), CodegenError> {
        let ir = self.generate(program)?;
        writer.write_all(ir.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    fn emit_preamble(&self, pool: &StringPool, out: &mut String) -> Result<(), CodegenError> {
        for constant in pool.iter() {
            push_line(
                out,
                &format!(
                    "@{} = private unnamed_addr constant {} c\"{}\", align 1",
                    constant.symbol,
                    constant.array_type(),
                    constant.escaped()
                ),
            )?;
        }
        push_line(out, &format!("declare void @{}(i8*)", self.options.print_symbol))?;
        push_line(out, "")?;
        push_line(out, &format!("define i32 @{}() {{", self.options.entry_symbol))
    }

    fn emit_node(&self, node: &Node, pool: &StringPool, out: &mut String) -> Result<(), CodegenError> {
        if node.kind == NodeKind::Echo {
            let constant = node
                .value
                .as_deref()
                .and_then(|text| pool.get(text))
                .ok_or(CodegenError::MissingLiteral {
                    location: node.location,
                })?;
            let ty = constant.array_type();
            push_line(
                out,
                &format!(
                    "  call void @{}(i8* getelementptr inbounds ({ty}, {ty}* @{}, i32 0, i32 0))",
                    self.options.print_symbol, constant.symbol
                ),
            )?;
        }

        for child in &node.children {
            self.emit_node(child, pool, out)?;
        }
        Ok(())
    }

    fn emit_postamble(&self, out: &mut String) -> Result<(), CodegenError> {
        push_line(out, "  ret i32 0")?;
        push_line(out, "}")
    }
}

fn push_line(out: &mut String, line: &str) -> Result<(), CodegenError> {
    out.try_reserve(line.len() + 1)?;
    out.push_str(line);
    out.push('\n');
    Ok(())
}
