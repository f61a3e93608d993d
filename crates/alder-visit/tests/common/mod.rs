//! Shared fixtures and collectors for the traversal tests.
//!
//! Fixture builders are deterministic: building the same fixture twice
//! yields trees whose node ids line up, which the facade-equivalence tests
//! rely on.

// Not every test binary uses every fixture or accessor.
#![allow(dead_code)]

use alder_ast::{
    Ast, DeclId, DeclKind, DeclName, DeclaratorData, FunctionData, FunctionForm, InitListExpr,
    LambdaExpr, Literal, ParamData, RecordData, RecordKeyword, SpecializationData,
    SpecializationKind, StmtId, StmtKind, TemplateData, TemplateParamList, TypeLoc, TypeLocId,
    TypeLocKind, VarData,
};
use alder_visit::{walk_decl, walk_stmt, DeclContext, StmtContext, Visitor};

// ============================================================================
// Event collector
// ============================================================================

/// One visited node, with the context it was visited under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Decl(DeclContext, DeclId),
    Stmt(StmtContext, StmtId),
}

impl Event {
    pub fn decl_id(&self) -> Option<DeclId> {
        match self {
            Event::Decl(_, id) => Some(*id),
            Event::Stmt(..) => None,
        }
    }

    pub fn stmt_id(&self) -> Option<StmtId> {
        match self {
            Event::Stmt(_, id) => Some(*id),
            Event::Decl(..) => None,
        }
    }
}

/// Records the declaration and statement visitation sequence.
pub struct Collector<'a> {
    pub ast: &'a Ast,
    pub events: Vec<Event>,
    pub definition_first: bool,
}

impl<'a> Collector<'a> {
    pub fn new(ast: &'a Ast) -> Self {
        Collector {
            ast,
            events: Vec::new(),
            definition_first: false,
        }
    }

    pub fn definition_first(ast: &'a Ast) -> Self {
        Collector {
            ast,
            events: Vec::new(),
            definition_first: true,
        }
    }

    pub fn decl_events(&self) -> Vec<(DeclContext, DeclId)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Decl(ctx, id) => Some((*ctx, *id)),
                Event::Stmt(..) => None,
            })
            .collect()
    }

    /// How many times `id` was visited, regardless of context.
    pub fn decl_visits(&self, id: DeclId) -> usize {
        self.events
            .iter()
            .filter(|e| e.decl_id() == Some(id))
            .count()
    }

    pub fn stmt_visits(&self, id: StmtId) -> usize {
        self.events
            .iter()
            .filter(|e| e.stmt_id() == Some(id))
            .count()
    }

    /// Visits of `id` under one specific context.
    pub fn decl_visits_in(&self, context: DeclContext, id: DeclId) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::Decl(c, d) if *c == context && *d == id))
            .count()
    }

    /// Position of the first visit of `id`, if any.
    pub fn first_decl_visit(&self, id: DeclId) -> Option<usize> {
        self.events.iter().position(|e| e.decl_id() == Some(id))
    }
}

impl Visitor for Collector<'_> {
    fn ast(&self) -> &Ast {
        self.ast
    }

    fn instantiations_after_definitions(&self) -> bool {
        self.definition_first
    }

    fn visit_decl(&mut self, context: DeclContext, decl: DeclId) {
        self.events.push(Event::Decl(context, decl));
        walk_decl(self, context, decl);
    }

    fn visit_stmt(&mut self, context: StmtContext, stmt: StmtId) {
        self.events.push(Event::Stmt(context, stmt));
        walk_stmt(self, context, stmt);
    }
}

// ============================================================================
// Small construction helpers
// ============================================================================

pub fn record(is_definition: bool) -> RecordData {
    RecordData {
        keyword: RecordKeyword::Struct,
        qualifier: None,
        bases: vec![],
        members: vec![],
        is_definition,
        closure_of: None,
    }
}

pub fn int_type(ast: &mut Ast) -> TypeLocId {
    ast.push_type_loc(TypeLoc {
        kind: TypeLocKind::Builtin { name: "int".into() },
    })
}

pub fn declarator(type_loc: Option<TypeLocId>) -> DeclaratorData {
    DeclaratorData {
        qualifier: None,
        outer_params: vec![],
        type_loc,
        implicit_type: None,
        trailing_requires: None,
    }
}

pub fn function(
    type_loc: Option<TypeLocId>,
    params: Vec<DeclId>,
    body: Option<StmtId>,
) -> DeclKind {
    DeclKind::Function(FunctionData {
        declarator: declarator(type_loc),
        form: FunctionForm::Free,
        params,
        ctor_inits: vec![],
        body,
        is_definition: body.is_some(),
        specialization: None,
    })
}

pub fn method(
    type_loc: Option<TypeLocId>,
    params: Vec<DeclId>,
    body: Option<StmtId>,
) -> DeclKind {
    match function(type_loc, params, body) {
        DeclKind::Function(mut f) => {
            f.form = FunctionForm::Method;
            DeclKind::Function(f)
        }
        _ => unreachable!(),
    }
}

pub fn int_param(ast: &mut Ast, name: &str) -> DeclId {
    let ty = int_type(ast);
    ast.push_decl(
        DeclName::ident(name),
        DeclKind::Param(ParamData {
            declarator: declarator(Some(ty)),
            default_value: None,
        }),
    )
}

pub fn int_literal(ast: &mut Ast, value: i64) -> StmtId {
    ast.push_stmt(StmtKind::Literal(Literal::Int(value)))
}

pub fn int_var(ast: &mut Ast, name: &str, init: Option<StmtId>) -> DeclId {
    let ty = int_type(ast);
    ast.push_decl(
        DeclName::ident(name),
        DeclKind::Var(VarData {
            declarator: declarator(Some(ty)),
            init,
            is_definition: true,
            specialization: None,
        }),
    )
}

pub fn template_data(templated: DeclId) -> TemplateData {
    TemplateData {
        params: TemplateParamList::default(),
        templated,
        specializations: vec![],
    }
}

pub fn implicit_instantiation(of: DeclId) -> SpecializationData {
    SpecializationData {
        kind: SpecializationKind::ImplicitInstantiation,
        instantiated_from: Some(of),
        args_written: None,
    }
}

// ============================================================================
// Fixtures
// ============================================================================

/// A translation unit with a function (params through a function type
/// locator, a body with a few statements) and a global variable.
pub struct SimpleTu {
    pub ast: Ast,
    pub function: DeclId,
    pub var: DeclId,
}

pub fn simple_tu() -> SimpleTu {
    let mut ast = Ast::new();

    let param = int_param(&mut ast, "x");
    let ret = int_type(&mut ast);
    let fn_loc = ast.push_type_loc(TypeLoc {
        kind: TypeLocKind::Function {
            ret,
            params: vec![param],
        },
    });

    let lit = int_literal(&mut ast, 1);
    let ret_stmt = ast.push_stmt(StmtKind::Return { value: Some(lit) });
    let body = ast.push_stmt(StmtKind::Compound {
        body: vec![ret_stmt],
    });
    let function = ast.push_decl(DeclName::ident("f"), function(Some(fn_loc), vec![param], Some(body)));

    let init = int_literal(&mut ast, 7);
    let var = int_var(&mut ast, "g", Some(init));

    let tu = ast.push_decl(
        DeclName::Anonymous,
        DeclKind::TranslationUnit {
            members: vec![function, var],
        },
    );
    ast.set_root(tu);

    SimpleTu { ast, function, var }
}

/// A class template declared twice (forward declaration first, so the
/// forward declaration is canonical; the redeclaration is the definition)
/// with two implicit instantiations.
pub struct TemplateTu {
    pub ast: Ast,
    pub canonical: DeclId,
    pub definition: DeclId,
    pub canonical_record: DeclId,
    pub definition_record: DeclId,
    pub instantiations: Vec<DeclId>,
}

pub fn template_with_redecls() -> TemplateTu {
    let mut ast = Ast::new();

    let fwd_record = ast.push_decl(DeclName::ident("Box"), DeclKind::Record(record(false)));
    let canonical = ast.push_decl(
        DeclName::ident("Box"),
        DeclKind::ClassTemplate(template_data(fwd_record)),
    );

    let member = int_var(&mut ast, "value", None);
    let mut def_rec = record(true);
    def_rec.members = vec![member];
    let def_record = ast.push_decl(DeclName::ident("Box"), DeclKind::Record(def_rec));
    let definition = ast.push_redecl(
        DeclName::ident("Box"),
        DeclKind::ClassTemplate(template_data(def_record)),
        canonical,
    );

    let mut instantiations = Vec::new();
    for _ in 0..2 {
        let spec = ast.push_decl(
            DeclName::ident("Box"),
            DeclKind::ClassTemplateSpecialization {
                spec: implicit_instantiation(canonical),
                record: record(true),
            },
        );
        ast.mark_implicit(spec);
        ast.register_specialization(canonical, spec);
        instantiations.push(spec);
    }

    let tu = ast.push_decl(
        DeclName::Anonymous,
        DeclKind::TranslationUnit {
            members: vec![canonical, definition],
        },
    );
    ast.set_root(tu);

    TemplateTu {
        ast,
        canonical,
        definition,
        canonical_record: fwd_record,
        definition_record: def_record,
        instantiations,
    }
}

/// An outer class template whose body nests an inner class template, with
/// two distinct (outer-argument, inner-argument) instantiation
/// combinations. Each combination appears as one outer instantiation
/// containing one inner instantiation.
pub struct NestedTemplates {
    pub ast: Ast,
    pub outer: DeclId,
    pub outer_record: DeclId,
    pub inner: DeclId,
    pub outer_instantiations: Vec<DeclId>,
    pub inner_instantiations: Vec<DeclId>,
}

pub fn nested_templates() -> NestedTemplates {
    let mut ast = Ast::new();

    let inner_record = ast.push_decl(DeclName::ident("Inner"), DeclKind::Record(record(true)));
    let inner = ast.push_decl(
        DeclName::ident("Inner"),
        DeclKind::ClassTemplate(template_data(inner_record)),
    );

    let mut outer_rec = record(true);
    outer_rec.members = vec![inner];
    let outer_record = ast.push_decl(DeclName::ident("Outer"), DeclKind::Record(outer_rec));
    let outer = ast.push_decl(
        DeclName::ident("Outer"),
        DeclKind::ClassTemplate(template_data(outer_record)),
    );

    let mut outer_instantiations = Vec::new();
    let mut inner_instantiations = Vec::new();
    for _ in 0..2 {
        let inner_spec = ast.push_decl(
            DeclName::ident("Inner"),
            DeclKind::ClassTemplateSpecialization {
                spec: implicit_instantiation(inner),
                record: record(true),
            },
        );
        ast.mark_implicit(inner_spec);

        let mut outer_spec_rec = record(true);
        outer_spec_rec.members = vec![inner_spec];
        let outer_spec = ast.push_decl(
            DeclName::ident("Outer"),
            DeclKind::ClassTemplateSpecialization {
                spec: implicit_instantiation(outer),
                record: outer_spec_rec,
            },
        );
        ast.mark_implicit(outer_spec);
        ast.register_specialization(outer, outer_spec);

        // The inner instantiation hangs off the outer instantiation's
        // member list, not the inner template's specialization set, which
        // mirrors how member templates of instantiated classes surface.
        outer_instantiations.push(outer_spec);
        inner_instantiations.push(inner_spec);
    }

    let tu = ast.push_decl(
        DeclName::Anonymous,
        DeclKind::TranslationUnit {
            members: vec![outer],
        },
    );
    ast.set_root(tu);

    NestedTemplates {
        ast,
        outer,
        outer_record,
        inner,
        outer_instantiations,
        inner_instantiations,
    }
}

/// A function whose body contains a capture-less lambda. The closure class
/// carries the implicit call operator (parameters reached through its
/// function type locator) and, because there are no captures, an implicit
/// invoker function sharing the same parameter declarations but carrying
/// no written signature.
pub struct LambdaTu {
    pub ast: Ast,
    pub host: DeclId,
    pub lambda: StmtId,
    pub closure_class: DeclId,
    pub call_operator: DeclId,
    pub invoker: DeclId,
    pub lambda_param: DeclId,
}

pub fn lambda_no_captures() -> LambdaTu {
    let mut ast = Ast::new();

    let lambda_param = int_param(&mut ast, "n");
    let ret = int_type(&mut ast);
    let call_loc = ast.push_type_loc(TypeLoc {
        kind: TypeLocKind::Function {
            ret,
            params: vec![lambda_param],
        },
    });

    let lambda_body = ast.push_stmt(StmtKind::Compound { body: vec![] });
    let call_operator = ast.push_decl(
        DeclName::Operator("()".into()),
        method(Some(call_loc), vec![lambda_param], Some(lambda_body)),
    );
    ast.mark_implicit(call_operator);

    // The capture-less case: an invoker with the same parameters and no
    // written signature of its own.
    let invoker = ast.push_decl(
        DeclName::ident("__invoke"),
        function(None, vec![lambda_param], None),
    );
    ast.mark_implicit(invoker);

    let mut closure_rec = record(true);
    closure_rec.members = vec![call_operator, invoker];
    let closure_class = ast.push_decl(DeclName::Anonymous, DeclKind::Record(closure_rec));
    ast.mark_implicit(closure_class);

    let lambda = ast.push_stmt(StmtKind::Lambda(LambdaExpr {
        captures: vec![],
        capture_inits: vec![],
        closure_class,
    }));
    match &mut ast.decl_mut(closure_class).kind {
        DeclKind::Record(r) => r.closure_of = Some(lambda),
        _ => unreachable!(),
    }

    let host_body = ast.push_stmt(StmtKind::Compound { body: vec![lambda] });
    let host = ast.push_decl(DeclName::ident("host"), function(None, vec![], Some(host_body)));

    let tu = ast.push_decl(
        DeclName::Anonymous,
        DeclKind::TranslationUnit {
            members: vec![host],
        },
    );
    ast.set_root(tu);

    LambdaTu {
        ast,
        host,
        lambda,
        closure_class,
        call_operator,
        invoker,
        lambda_param,
    }
}

/// A variable initialized by an initializer list whose syntactic and
/// semantic views coincide, next to one whose views differ.
pub struct InitListTu {
    pub ast: Ast,
    pub shared_children: Vec<StmtId>,
    pub shared_list: StmtId,
    pub syn_child: StmtId,
    pub sem_child: StmtId,
    pub split_list: StmtId,
}

pub fn init_lists() -> InitListTu {
    let mut ast = Ast::new();

    let a = int_literal(&mut ast, 1);
    let b = int_literal(&mut ast, 2);
    let shared_list = ast.push_stmt(StmtKind::InitList(InitListExpr {
        syntactic: vec![a, b],
        semantic: vec![a, b],
    }));
    let shared_var = int_var(&mut ast, "coinciding", Some(shared_list));

    let syn_child = int_literal(&mut ast, 3);
    let sem_child = int_literal(&mut ast, 4);
    let split_list = ast.push_stmt(StmtKind::InitList(InitListExpr {
        syntactic: vec![syn_child],
        semantic: vec![sem_child],
    }));
    let split_var = int_var(&mut ast, "distinct", Some(split_list));

    let tu = ast.push_decl(
        DeclName::Anonymous,
        DeclKind::TranslationUnit {
            members: vec![shared_var, split_var],
        },
    );
    ast.set_root(tu);

    InitListTu {
        ast,
        shared_children: vec![a, b],
        shared_list,
        syn_child,
        sem_child,
        split_list,
    }
}
