//! The statement/expression node family.
//!
//! Expressions are statements here, as in the front end this models: one
//! dense kind enum covers both, and the traversal engine dispatches on it
//! with a single `match`. Several groups of concrete kinds share one payload
//! shape on purpose — all call-like expressions carry a [`CallExpr`], all
//! casts a [`CastExpr`] — because their recursion needs are identical and
//! the engine handles each group in one arm.

use serde::{Deserialize, Serialize};

use crate::ids::{DeclId, QualifierId, StmtId, TemplateArgId, TypeLocId};
use crate::name::DeclName;

/// A statement/expression-family node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stmt {
    pub kind: StmtKind,
}

/// Concrete kind of a statement or expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StmtKind {
    // ---- Statements ----
    Compound { body: Vec<StmtId> },
    DeclStmt { decls: Vec<DeclId> },
    Null,
    If {
        init: Option<StmtId>,
        cond: StmtId,
        then_branch: StmtId,
        else_branch: Option<StmtId>,
    },
    While { cond: StmtId, body: StmtId },
    Do { body: StmtId, cond: StmtId },
    For {
        init: Option<StmtId>,
        cond: Option<StmtId>,
        inc: Option<StmtId>,
        body: StmtId,
    },
    /// Range-based for. `begin`/`end`/`cond`/`inc` are the synthesized
    /// desugaring when the front end recorded it; `loop_var` is the
    /// declaration statement for the loop variable.
    ForRange {
        init: Option<StmtId>,
        range: StmtId,
        begin: Option<StmtId>,
        end: Option<StmtId>,
        cond: Option<StmtId>,
        inc: Option<StmtId>,
        loop_var: StmtId,
        body: StmtId,
    },
    Switch {
        init: Option<StmtId>,
        cond: StmtId,
        body: StmtId,
    },
    Case {
        lhs: StmtId,
        /// Second value of a GNU case range, when present.
        rhs: Option<StmtId>,
        sub: StmtId,
    },
    Default { sub: StmtId },
    Break,
    Continue,
    Return { value: Option<StmtId> },
    Label { name: String, sub: StmtId },
    Goto { label: String },
    IndirectGoto { target: StmtId },
    Try {
        try_block: StmtId,
        handlers: Vec<StmtId>,
    },
    Catch {
        /// The caught exception declaration; absent for `catch (...)`.
        exception_decl: Option<DeclId>,
        block: StmtId,
    },

    // ---- Expressions ----
    /// A reference to a declared entity, possibly qualified and possibly
    /// carrying explicit template arguments. The referenced declaration is
    /// a back-edge and is not traversed.
    DeclRef {
        qualifier: Option<QualifierId>,
        name: DeclName,
        template_args: Vec<TemplateArgId>,
        target: DeclId,
    },
    Member {
        base: StmtId,
        qualifier: Option<QualifierId>,
        name: DeclName,
        template_args: Vec<TemplateArgId>,
        is_arrow: bool,
    },
    Literal(Literal),
    Paren { sub: StmtId },
    Unary { op: UnaryOp, sub: StmtId },
    Binary {
        op: BinaryOp,
        lhs: StmtId,
        rhs: StmtId,
    },
    Conditional {
        cond: StmtId,
        true_expr: StmtId,
        false_expr: StmtId,
    },
    /// All call-like expressions: one payload, one traversal shape.
    Call(CallExpr),
    /// All cast-like expressions: one payload, one traversal shape.
    Cast(CastExpr),
    ArraySubscript { lhs: StmtId, rhs: StmtId },
    /// `sizeof`/`alignof`, over either a written type or an expression.
    UnaryExprOrTypeTrait {
        written_type: Option<TypeLocId>,
        operand: Option<StmtId>,
    },
    /// Braced initializer list with its two parallel views. The views may
    /// be the identical child list; the engine still visits both.
    InitList(InitListExpr),
    /// Constructor invocation, including the written-type form of a
    /// temporary object expression.
    Construct(ConstructExpr),
    New {
        placement: Vec<StmtId>,
        array_size: Option<StmtId>,
        allocated_type: TypeLocId,
        init: Option<StmtId>,
    },
    Delete { operand: StmtId },
    Throw { operand: Option<StmtId> },
    Lambda(LambdaExpr),

    /// A statement/expression kind outside the classified set. Traversal
    /// treats it as a leaf rather than failing.
    Unclassified { tag: u32 },
}

/// Payload shared by every call-like expression kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallExpr {
    pub form: CallForm,
    pub callee: StmtId,
    pub args: Vec<StmtId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallForm {
    Plain,
    MemberCall,
    OperatorCall,
}

/// Payload shared by every cast-like expression kind.
///
/// Implicit casts have no written type; explicit casts always do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastExpr {
    pub form: CastForm,
    pub operand: StmtId,
    pub written_type: Option<TypeLocId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CastForm {
    Implicit,
    CStyle,
    Static,
    Dynamic,
    Reinterpret,
    Const,
    Functional,
}

impl CastForm {
    /// True for casts the programmer wrote out, which carry written type
    /// syntax to visit.
    pub fn is_explicit(&self) -> bool {
        !matches!(self, CastForm::Implicit)
    }
}

/// The two parallel views of a braced initializer list.
///
/// The syntactic view is what the programmer wrote; the semantic view is
/// the front end's filled-in arrangement. Often, but not always, they are
/// the identical child list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitListExpr {
    pub syntactic: Vec<StmtId>,
    pub semantic: Vec<StmtId>,
}

impl InitListExpr {
    /// True when the two views are the same children, in which case the
    /// default traversal visits each child twice.
    pub fn views_coincide(&self) -> bool {
        self.syntactic == self.semantic
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstructExpr {
    /// The invoked constructor; a back-edge, not traversed.
    pub ctor: DeclId,
    pub args: Vec<StmtId>,
    /// Written type of a temporary object expression, e.g. `T(1, 2)`.
    pub written_type: Option<TypeLocId>,
}

/// A lambda expression.
///
/// `captures` and `capture_inits` are parallel arrays paired by positional
/// index. The synthesized closure class is owned here: it is lexically
/// nested in the enclosing scope but only visited as a child of this
/// expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LambdaExpr {
    pub captures: Vec<Capture>,
    pub capture_inits: Vec<StmtId>,
    pub closure_class: DeclId,
}

/// One capture descriptor of a lambda.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Capture {
    /// True for init-captures, which introduce a fresh variable; the
    /// traversal then descends into that variable declaration. False for
    /// captures of existing variables; the traversal then descends into
    /// the paired initializer expression.
    pub introduces_variable: bool,
    /// The fresh variable, for init-captures.
    pub variable: Option<DeclId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    Int(i64),
    Float(f64),
    Bool(bool),
    Char(char),
    String(String),
    NullPtr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOp {
    Plus,
    Minus,
    Not,
    BitNot,
    Deref,
    AddrOf,
    PreInc,
    PreDec,
    PostInc,
    PostDec,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    And,
    Or,
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,
    Lt,
    Gt,
    Le,
    Ge,
    Eq,
    Ne,
    Assign,
    AddAssign,
    SubAssign,
    Comma,
}

impl Stmt {
    /// Short kind name for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            StmtKind::Compound { .. } => "Compound",
            StmtKind::DeclStmt { .. } => "DeclStmt",
            StmtKind::Null => "Null",
            StmtKind::If { .. } => "If",
            StmtKind::While { .. } => "While",
            StmtKind::Do { .. } => "Do",
            StmtKind::For { .. } => "For",
            StmtKind::ForRange { .. } => "ForRange",
            StmtKind::Switch { .. } => "Switch",
            StmtKind::Case { .. } => "Case",
            StmtKind::Default { .. } => "Default",
            StmtKind::Break => "Break",
            StmtKind::Continue => "Continue",
            StmtKind::Return { .. } => "Return",
            StmtKind::Label { .. } => "Label",
            StmtKind::Goto { .. } => "Goto",
            StmtKind::IndirectGoto { .. } => "IndirectGoto",
            StmtKind::Try { .. } => "Try",
            StmtKind::Catch { .. } => "Catch",
            StmtKind::DeclRef { .. } => "DeclRef",
            StmtKind::Member { .. } => "Member",
            StmtKind::Literal(_) => "Literal",
            StmtKind::Paren { .. } => "Paren",
            StmtKind::Unary { .. } => "Unary",
            StmtKind::Binary { .. } => "Binary",
            StmtKind::Conditional { .. } => "Conditional",
            StmtKind::Call(_) => "Call",
            StmtKind::Cast(c) => match c.form {
                CastForm::Implicit => "ImplicitCast",
                _ => "ExplicitCast",
            },
            StmtKind::ArraySubscript { .. } => "ArraySubscript",
            StmtKind::UnaryExprOrTypeTrait { .. } => "UnaryExprOrTypeTrait",
            StmtKind::InitList(_) => "InitList",
            StmtKind::Construct(_) => "Construct",
            StmtKind::New { .. } => "New",
            StmtKind::Delete { .. } => "Delete",
            StmtKind::Throw { .. } => "Throw",
            StmtKind::Lambda(_) => "Lambda",
            StmtKind::Unclassified { .. } => "Unclassified",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coinciding_views_are_detected() {
        let shared = InitListExpr {
            syntactic: vec![StmtId(1), StmtId(2)],
            semantic: vec![StmtId(1), StmtId(2)],
        };
        assert!(shared.views_coincide());

        let distinct = InitListExpr {
            syntactic: vec![StmtId(1)],
            semantic: vec![StmtId(3)],
        };
        assert!(!distinct.views_coincide());
    }

    #[test]
    fn implicit_cast_has_no_written_type() {
        assert!(!CastForm::Implicit.is_explicit());
        assert!(CastForm::Static.is_explicit());
        assert!(CastForm::Functional.is_explicit());
    }
}
