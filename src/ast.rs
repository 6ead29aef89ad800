use std::{
    rc::Rc,
    sync::atomic::{AtomicUsize, Ordering},
};

/// A shared, immutable list of statements.
///
/// Function literals, `if`/`while` bodies and whole modules are all blocks.
/// Function values hold the block by reference, so every activation of a
/// function walks the same parsed nodes.
pub type Block = Rc<[Statement]>;

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the scalar constants that can appear directly in
/// source code. Arrays, objects and functions are built from nested
/// expressions and have their own [`ExprKind`] variants.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A boolean literal: `t` or `f`.
    Boolean(bool),
    /// A number literal such as `5`, `-2` or `0.25`.
    Number(f64),
    /// A single-quoted string literal.
    String(Rc<str>),
    /// The `null` literal.
    Null,
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::String(value.into())
    }
}

/// One step of a path: `.name` or `[expr]`.
///
/// Accessors are applied, in order, to the value an expression produces.
/// The same type also names variables, because `x`, `.x` and `['x']` all
/// denote the key `x` in the active scope.
#[derive(Debug, Clone, PartialEq)]
pub enum Accessor {
    /// A literal key, written `.name` (or a bare identifier as a variable).
    Name(String),
    /// A computed key, written `[expr]`.
    Index(Box<Expr>),
}

/// Identity of a placeholder node.
///
/// Every parsed placeholder receives a fresh id. Scopes memoize resolved
/// placeholders by this id, so re-evaluating the same node within one
/// activation never consumes another positional argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlaceholderId(usize);

impl PlaceholderId {
    /// Allocates an id that no other placeholder in this process shares.
    #[must_use]
    pub fn fresh() -> Self {
        static NEXT: AtomicUsize = AtomicUsize::new(0);

        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// An argument placeholder: `_ index? ,? default? _`.
#[derive(Debug, Clone, PartialEq)]
pub struct Placeholder {
    /// Node identity used for memoization.
    pub id:      PlaceholderId,
    /// Explicit positional slot (`_1_`). Without it the scope's cursor is
    /// used and advanced.
    pub index:   Option<usize>,
    /// Expression used when the slot is absent (`_,0_`).
    pub default: Option<Box<Expr>>,
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every expression carries a path of accessors applied after its base
/// value is produced, and the source line it started on.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    /// What produces the base value.
    pub kind: ExprKind,
    /// Accessors applied to the base value, in order.
    pub path: Vec<Accessor>,
    /// Line number in the source code.
    pub line: usize,
}

impl Expr {
    /// Creates an expression with an empty path.
    ///
    /// ## Example
    /// ```
    /// use meth::ast::{Expr, ExprKind, LiteralValue};
    ///
    /// let expr = Expr::new(ExprKind::Literal(LiteralValue::Number(5.0)), 3);
    ///
    /// assert!(expr.path.is_empty());
    /// assert_eq!(expr.line, 3);
    /// ```
    #[must_use]
    pub const fn new(kind: ExprKind, line: usize) -> Self {
        Self { kind,
               path: Vec::new(),
               line }
    }
}

/// The base of an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// A scalar literal (`t`, `5`, `'text'`, `null`).
    Literal(LiteralValue),
    /// Array literal `|a, b, c|`.
    Array(Vec<Expr>),
    /// Object literal `{key: value, ...}`, entries in source order.
    Object(Vec<(String, Expr)>),
    /// Function literal `<...>`. Evaluating it captures the active scope.
    Function(Block),
    /// A variable reference, looked up in the active scope only.
    Variable(Accessor),
    /// The `parent` keyword: the active scope's parent scope.
    Parent,
    /// An argument placeholder.
    Argument(Placeholder),
    /// `load <value>`: a builtin or sibling-file module.
    Load(Box<Expr>),
    /// `returning <value>`: records the scope's return value and yields it.
    Returning(Box<Expr>),
    /// Function-style call `subject@(callee, args...)`.
    ///
    /// The first argument is the callee; it is invoked with the subject
    /// followed by the remaining arguments.
    FunctionExecution {
        /// The value passed as the first positional argument.
        subject: Box<Expr>,
        /// Callee followed by the remaining arguments. Never empty.
        args:    Vec<Expr>,
    },
    /// Method-style call `subject(args...)`: the subject is the callee.
    MethodExecution {
        /// The callee.
        subject: Box<Expr>,
        /// Arguments passed positionally.
        args:    Vec<Expr>,
    },
}

/// What an assignment writes to.
#[derive(Debug, Clone, PartialEq)]
pub enum AssignTarget {
    /// `= value;` replaces the active scope's entries.
    Scope,
    /// A named entry of the active scope (`x`, `.x`, `[expr]`).
    Variable(Accessor),
    /// The parent scope; only valid with a non-empty path (`parent.x = 1;`).
    Parent,
}

/// Represents a statement.
///
/// Statements are the units of a block. They are executed in order against
/// a scope.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A standalone expression evaluated for its side effects.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// An assignment such as `x = 1;`, `x.y[0] = 2;` or `= {a: 1};`.
    Assignment {
        /// The written entry.
        target: AssignTarget,
        /// Accessors between the target and the written key. The last one
        /// names the key that is set.
        path:   Vec<Accessor>,
        /// The assigned value.
        value:  Expr,
        /// Line number in the source code.
        line:   usize,
    },
    /// `return value;`: terminates the enclosing call.
    Return {
        /// The returned value.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `if cond: body`.
    If {
        /// The condition, tested for truthiness.
        condition: Expr,
        /// Statements run against the enclosing scope.
        body:      Block,
        /// Line number in the source code.
        line:      usize,
    },
    /// `while cond: body`.
    While {
        /// The condition, tested for truthiness before every iteration.
        condition: Expr,
        /// Statements run against the enclosing scope.
        body:      Block,
        /// Line number in the source code.
        line:      usize,
    },
}

impl Statement {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Expression { line, .. }
            | Self::Assignment { line, .. }
            | Self::Return { line, .. }
            | Self::If { line, .. }
            | Self::While { line, .. } => *line,
        }
    }
}
