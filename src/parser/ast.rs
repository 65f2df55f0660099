// AST (Abstract Syntax Tree) definitions for the Cedar front end

use std::collections::TryReserveError;
use std::fmt;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for SourceLocation {
    fn default() -> Self {
        SourceLocation::new(1, 1)
    }
}

/// Kind tag of an AST node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Program,
    Define,
    Echo,
    // Expression kinds: built by `Parser::parse_expression` only
    String,
    Number,
    Identifier,
}

impl NodeKind {
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Program => "Program",
            NodeKind::Define => "Define",
            NodeKind::Echo => "Echo",
            NodeKind::String => "String",
            NodeKind::Number => "Number",
            NodeKind::Identifier => "Identifier",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One syntactic construct.
///
/// A node owns its children outright, so the tree rooted at the Program node
/// is dropped as a unit. `target` holds the second identifier of a Define
/// (`define Foo -> Bar`) and is never a child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub value: Option<String>,
    pub target: Option<String>,
    pub children: Vec<Node>,
    pub location: SourceLocation,
}

impl Node {
    pub fn new(kind: NodeKind, value: Option<String>) -> Self {
        Node {
            kind,
            value,
            target: None,
            children: Vec::new(),
            location: SourceLocation::default(),
        }
    }

    pub fn at(mut self, location: SourceLocation) -> Self {
        self.location = location;
        self
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Append `child` to `parent`'s children.
    ///
    /// Returns `Ok(false)` without touching anything when either side is
    /// absent. Growth of the child list is fallible so that allocation
    /// failure reaches the caller instead of aborting.
    pub fn add_child(
        parent: Option<&mut Node>,
        child: Option<Node>,
    ) -> Result<bool, TryReserveError> {
        let (Some(parent), Some(child)) = (parent, child) else {
            return Ok(false);
        };
        parent.children.try_reserve(1)?;
        parent.children.push(child);
        Ok(true)
    }

    /// Depth-first pre-order walk over this node and its descendants.
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder { stack: vec![self] }
    }

    /// Indented pre-order dump, one `[Kind] value` line per node.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out, 0);
        out
    }

    fn render_into(&self, out: &mut String, depth: usize) {
        for _ in 0..depth {
            out.push_str("  ");
        }
        out.push('[');
        out.push_str(self.kind.name());
        out.push(']');
        if let Some(value) = &self.value {
            out.push(' ');
            out.push_str(value);
        }
        if let Some(target) = &self.target {
            out.push_str(" -> ");
            out.push_str(target);
        }
        out.push('\n');
        for child in &self.children {
            child.render_into(out, depth + 1);
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Iterator returned by [`Node::preorder`]
pub struct Preorder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn echo(text: &str) -> Node {
        Node::new(NodeKind::Echo, Some(text.to_string()))
    }

    #[test]
    fn test_add_child_appends_in_order() {
        let mut program = Node::new(NodeKind::Program, None);
        assert!(Node::add_child(Some(&mut program), Some(echo("a"))).unwrap());
        assert!(Node::add_child(Some(&mut program), Some(echo("b"))).unwrap());

        let values: Vec<_> = program
            .children
            .iter()
            .map(|c| c.value.as_deref().unwrap())
            .collect();
        assert_eq!(values, vec!["a", "b"]);
    }

    #[test]
    fn test_add_child_absent_side_is_noop() {
        let mut program = Node::new(NodeKind::Program, None);
        assert!(!Node::add_child(Some(&mut program), None).unwrap());
        assert!(!Node::add_child(None, Some(echo("lost"))).unwrap());
        assert!(program.children.is_empty());
    }

    #[test]
    fn test_render_indents_by_depth() {
        let mut define = Node::new(NodeKind::Define, Some("Foo".to_string())).with_target("Bar");
        Node::add_child(Some(&mut define), Some(echo("x"))).unwrap();
        let mut program = Node::new(NodeKind::Program, None);
        Node::add_child(Some(&mut program), Some(define)).unwrap();

        assert_eq!(program.render(), "[Program]\n  [Define] Foo -> Bar\n    [Echo] x\n");
    }

    #[test]
    fn test_preorder_visits_parent_before_children() {
        let mut define = Node::new(NodeKind::Define, Some("Foo".to_string()));
        Node::add_child(Some(&mut define), Some(echo("inner"))).unwrap();
        let mut program = Node::new(NodeKind::Program, None);
        Node::add_child(Some(&mut program), Some(define)).unwrap();
        Node::add_child(Some(&mut program), Some(echo("outer"))).unwrap();

        let kinds: Vec<_> = program.preorder().map(|n| n.kind).collect();
        assert_eq!(
            kinds,
            vec![NodeKind::Program, NodeKind::Define, NodeKind::Echo, NodeKind::Echo]
        );
        let last = program.preorder().last().unwrap();
        assert_eq!(last.value.as_deref(), Some("outer"));
    }
}
