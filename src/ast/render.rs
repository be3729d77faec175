//! Canonical rendering of syntax trees back to shell source.
//!
//! Most nodes print themselves in the obvious way; the subtlety is all in
//! the statement-joining rules. Statements are normally separated by
//! `"; "`, but a statement carrying a here-document redirect must be
//! followed by a real newline or its body would swallow the next statement
//! on re-parse. Compound-command bodies additionally collapse to a `"; "`
//! sentinel when empty, so `{}` and friends stay lexically valid.

use crate::ast::types::*;
use crate::token::Token;

/// Common capability of every AST node: report where it came from and
/// render itself as canonical shell source.
pub trait Node {
    /// Position of the first token that produced this node, or
    /// [`Position::UNKNOWN`] for synthetically empty nodes. Nodes anchored
    /// at a closing delimiter (such as [`Block`]) report that instead.
    fn pos(&self) -> Position;

    /// Canonical shell source for this node. A [`File`]'s render is a
    /// complete, re-parseable script; any other node's render is a fragment
    /// embeddable where the grammar allows it.
    fn render(&self) -> String;
}

fn first_pos<N: Node>(nodes: &[N]) -> Position {
    nodes.first().map_or(Position::UNKNOWN, Node::pos)
}

fn node_join<N: Node>(nodes: &[N], sep: &str) -> String {
    let mut out = String::new();
    for (i, n) in nodes.iter().enumerate() {
        if i > 0 {
            out.push_str(sep);
        }
        out.push_str(&n.render());
    }
    out
}

/// Join statements with `"; "`, switching to a newline after any statement
/// that carries a here-document redirect. With `end` set, a trailing
/// heredoc also forces one final newline (the terminating form, used at
/// file scope and at the end of bare lists).
fn stmt_join_with_end(stmts: &[Stmt], end: bool) -> String {
    let mut out = String::new();
    let mut newline = false;
    for (i, s) in stmts.iter().enumerate() {
        if newline {
            out.push('\n');
        } else if i > 0 {
            out.push_str("; ");
        }
        out.push_str(&s.render());
        newline = s.has_heredoc();
    }
    if newline && end {
        out.push('\n');
    }
    out
}

fn stmt_join(stmts: &[Stmt]) -> String {
    stmt_join_with_end(stmts, true)
}

/// Inline statement list for compound-command bodies: a leading space, the
/// statement join, and a trailing `"; "` unless the join already ended in
/// the newline a heredoc demanded. An empty body is the `"; "` sentinel.
fn stmt_list(stmts: &[Stmt]) -> String {
    if stmts.is_empty() {
        return "; ".to_string();
    }
    let joined = stmt_join(stmts);
    if joined.ends_with('\n') {
        format!(" {}", joined)
    } else {
        format!(" {}; ", joined)
    }
}

impl StmtKind {
    /// The wrapped command as a renderable node, if one is present.
    fn as_node(&self) -> Option<&dyn Node> {
        match self {
            StmtKind::None => None,
            StmtKind::Command(c) => Some(c),
            StmtKind::Subshell(s) => Some(s),
            StmtKind::Block(b) => Some(b),
            StmtKind::If(i) => Some(i),
            StmtKind::While(w) => Some(w),
            StmtKind::Until(u) => Some(u),
            StmtKind::For(f) => Some(f),
            StmtKind::Case(c) => Some(c),
            StmtKind::FuncDecl(f) => Some(f.as_ref()),
            StmtKind::Binary(b) => Some(b.as_ref()),
        }
    }
}

impl Node for File {
    fn pos(&self) -> Position {
        first_pos(&self.stmts)
    }

    fn render(&self) -> String {
        stmt_join(&self.stmts)
    }
}

impl Node for Stmt {
    fn pos(&self) -> Position {
        self.position
    }

    fn render(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if self.negated {
            parts.push(Token::Bang.to_string());
        }
        if let Some(node) = self.kind.as_node() {
            parts.push(node.render());
        }
        for assign in &self.assigns {
            parts.push(assign.render());
        }
        for redir in &self.redirs {
            parts.push(redir.render());
        }
        if self.background {
            parts.push(Token::Amp.to_string());
        }
        parts.join(" ")
    }
}

impl Node for Assign {
    fn pos(&self) -> Position {
        self.name.pos()
    }

    fn render(&self) -> String {
        format!("{}={}", self.name.render(), self.value.render())
    }
}

impl Node for Redirect {
    fn pos(&self) -> Position {
        self.op_pos
    }

    fn render(&self) -> String {
        let n = self.n.as_ref().map(Node::render).unwrap_or_default();
        format!("{}{}{}", n, self.op, self.word.render())
    }
}

impl Node for Command {
    fn pos(&self) -> Position {
        first_pos(&self.args)
    }

    fn render(&self) -> String {
        node_join(&self.args, " ")
    }
}

impl Node for Subshell {
    fn pos(&self) -> Position {
        self.lparen
    }

    fn render(&self) -> String {
        if self.stmts.is_empty() {
            // Keep an inner space so this cannot be read back as ().
            return "( )".to_string();
        }
        format!("({})", stmt_join(&self.stmts))
    }
}

impl Node for Block {
    fn pos(&self) -> Position {
        self.rbrace
    }

    fn render(&self) -> String {
        format!("{{{}}}", stmt_list(&self.stmts))
    }
}

impl Node for IfStmt {
    fn pos(&self) -> Position {
        self.if_pos
    }

    fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&Token::If.to_string());
        out.push_str(&stmt_list(&self.conds));
        out.push_str(&Token::Then.to_string());
        out.push_str(&stmt_list(&self.then_stmts));
        for elif in &self.elifs {
            out.push_str(&elif.render());
        }
        if !self.else_stmts.is_empty() {
            out.push_str(&Token::Else.to_string());
            out.push_str(&stmt_list(&self.else_stmts));
        }
        out.push_str(&Token::Fi.to_string());
        out
    }
}

impl Node for Elif {
    fn pos(&self) -> Position {
        self.elif_pos
    }

    fn render(&self) -> String {
        format!(
            "{}{}{}{}",
            Token::Elif,
            stmt_list(&self.conds),
            Token::Then,
            stmt_list(&self.then_stmts)
        )
    }
}

impl Node for WhileStmt {
    fn pos(&self) -> Position {
        self.while_pos
    }

    fn render(&self) -> String {
        format!(
            "{}{}{}{}{}",
            Token::While,
            stmt_list(&self.conds),
            Token::Do,
            stmt_list(&self.do_stmts),
            Token::Done
        )
    }
}

impl Node for UntilStmt {
    fn pos(&self) -> Position {
        self.until_pos
    }

    fn render(&self) -> String {
        format!(
            "{}{}{}{}{}",
            Token::Until,
            stmt_list(&self.conds),
            Token::Do,
            stmt_list(&self.do_stmts),
            Token::Done
        )
    }
}

impl Node for ForStmt {
    fn pos(&self) -> Position {
        self.for_pos
    }

    fn render(&self) -> String {
        let mut out = format!("{} {}", Token::For, self.name.render());
        if !self.word_list.is_empty() {
            out.push_str(&format!(" {} {}", Token::In, node_join(&self.word_list, " ")));
        }
        out.push_str(&format!(
            "; {}{}{}",
            Token::Do,
            stmt_list(&self.do_stmts),
            Token::Done
        ));
        out
    }
}

impl Node for CaseStmt {
    fn pos(&self) -> Position {
        self.case_pos
    }

    fn render(&self) -> String {
        let mut out = format!("{} {} {}", Token::Case, self.word.render(), Token::In);
        for (i, plist) in self.list.iter().enumerate() {
            out.push_str(if i == 0 { " " } else { ";; " });
            out.push_str(&plist.render());
        }
        out.push_str(&format!("; {}", Token::Esac));
        out
    }
}

impl Node for PatternList {
    fn pos(&self) -> Position {
        first_pos(&self.patterns)
    }

    fn render(&self) -> String {
        format!(
            "{}) {}",
            node_join(&self.patterns, " | "),
            stmt_join(&self.stmts)
        )
    }
}

impl Node for BinaryExpr {
    fn pos(&self) -> Position {
        self.x.pos()
    }

    fn render(&self) -> String {
        format!("{} {} {}", self.x.render(), self.op, self.y.render())
    }
}

impl Node for FuncDecl {
    fn pos(&self) -> Position {
        self.position
    }

    fn render(&self) -> String {
        if self.bash_style {
            format!("{} {}() {}", Token::Function, self.name.render(), self.body.render())
        } else {
            format!("{}() {}", self.name.render(), self.body.render())
        }
    }
}

impl Node for Word {
    fn pos(&self) -> Position {
        first_pos(&self.parts)
    }

    fn render(&self) -> String {
        node_join(&self.parts, "")
    }
}

impl Node for WordPart {
    fn pos(&self) -> Position {
        match self {
            WordPart::Lit(l) => l.pos(),
            WordPart::SglQuoted(q) => q.pos(),
            WordPart::DblQuoted(q) => q.pos(),
            WordPart::ParamExp(p) => p.pos(),
            WordPart::ArithmExp(a) => a.pos(),
            WordPart::CmdSubst(c) => c.pos(),
        }
    }

    fn render(&self) -> String {
        match self {
            WordPart::Lit(l) => l.render(),
            WordPart::SglQuoted(q) => q.render(),
            WordPart::DblQuoted(q) => q.render(),
            WordPart::ParamExp(p) => p.render(),
            WordPart::ArithmExp(a) => a.render(),
            WordPart::CmdSubst(c) => c.render(),
        }
    }
}

impl Node for Lit {
    fn pos(&self) -> Position {
        self.value_pos
    }

    fn render(&self) -> String {
        self.value.clone()
    }
}

impl Node for SglQuoted {
    fn pos(&self) -> Position {
        self.quote_pos
    }

    fn render(&self) -> String {
        format!("'{}'", self.value)
    }
}

impl Node for DblQuoted {
    fn pos(&self) -> Position {
        self.quote_pos
    }

    fn render(&self) -> String {
        format!("\"{}\"", node_join(&self.parts, ""))
    }
}

impl Node for ParamExp {
    fn pos(&self) -> Position {
        self.exp_pos
    }

    fn render(&self) -> String {
        if self.short {
            format!("${}", self.text)
        } else {
            format!("${{{}}}", self.text)
        }
    }
}

impl Node for ArithmExp {
    fn pos(&self) -> Position {
        self.exp_pos
    }

    fn render(&self) -> String {
        format!("$(({}))", node_join(&self.words, " "))
    }
}

impl Node for CmdSubst {
    fn pos(&self) -> Position {
        self.left
    }

    fn render(&self) -> String {
        if self.backquotes {
            format!("`{}`", stmt_join(&self.stmts))
        } else {
            format!("$({})", stmt_join(&self.stmts))
        }
    }
}
