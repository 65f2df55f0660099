//! Global string constants referenced by the emitted IR
//!
//! Every distinct Echo literal gets exactly one constant. Symbols follow the
//! usual LLVM naming: `.str`, `.str.1`, `.str.2`, ... in order of first
//! appearance during a pre-order walk, so the output is deterministic.

use crate::codegen::errors::CodegenError;
use crate::parser::ast::{Node, NodeKind};
use rustc_hash::FxHashMap;
use std::collections::TryReserveError;

/// One NUL-terminated global byte array
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringConstant {
    /// Symbol name without the leading `@`
    pub symbol: String,
    pub text: String,
}

impl StringConstant {
    /// Array length in bytes, terminator included
    pub fn byte_len(&self) -> usize {
        self.text.len() + 1
    }

    /// `[N x i8]`
    pub fn array_type(&self) -> String {
        format!("[{} x i8]", self.byte_len())
    }

    /// Contents as an IR `c"..."` body, terminator included
    pub fn escaped(&self) -> String {
        let mut out = escape_bytes(self.text.as_bytes());
        out.push_str("\\00");
        out
    }
}

/// Interned string literals, in first-seen order
#[derive(Debug, Default)]
pub struct StringPool {
    constants: Vec<StringConstant>,
    index: FxHashMap<String, usize>,
}

impl StringPool {
    pub fn new() -> Self {
        StringPool::default()
    }

    /// Intern the literal of every Echo node under `root`.
    pub fn collect(root: &Node) -> Result<Self, CodegenError> {
        let mut pool = StringPool::new();
        for node in root.preorder() {
            if node.kind != NodeKind::Echo {
                continue;
            }
            let text = node.value.as_deref().ok_or(CodegenError::MissingLiteral {
                location: node.location,
            })?;
            pool.intern(text)?;
        }
        Ok(pool)
    }

    /// Return the constant for `text`, creating it on first sight.
    pub fn intern(&mut self, text: &str) -> Result<&StringConstant, TryReserveError> {
        if let Some(&slot) = self.index.get(text) {
            return Ok(&self.constants[slot]);
        }

        let slot = self.constants.len();
        self.constants.try_reserve(1)?;
        self.index.try_reserve(1)?;
        self.constants.push(StringConstant {
            symbol: symbol_name(slot),
            text: text.to_string(),
        });
        self.index.insert(text.to_string(), slot);
        Ok(&self.constants[slot])
    }

    pub fn get(&self, text: &str) -> Option<&StringConstant> {
        self.index.get(text).map(|&slot| &self.constants[slot])
    }

    pub fn iter(&self) -> impl Iterator<Item = &StringConstant> {
        self.constants.iter()
    }

    pub fn len(&self) -> usize {
        self.constants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }
}

fn symbol_name(slot: usize) -> String {
    if slot == 0 {
        ".str".to_string()
    } else {
        format!(".str.{}", slot)
    }
}

/// Printable ASCII other than `"` and `\` is kept as is; every other byte
/// becomes `\XX`.
pub fn escape_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for &b in bytes {
        if (b' '..=b'~').contains(&b) && b != b'"' && b != b'\\' {
            out.push(b as char);
        } else {
            out.push_str(&format!("\\{:02X}", b));
        }
    }
    out
}
