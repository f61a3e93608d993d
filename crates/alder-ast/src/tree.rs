//! The arena that owns every node, plus the query surface consumed by the
//! traversal engine.
//!
//! The tree is built once (by a front end, a deserializer, or a test
//! fixture) and then consumed read-only: identity and equality of nodes,
//! canonical-declaration resolution, kind classification, child access,
//! specialization-set enumeration, and is-definition queries. The arena
//! never frees individual nodes; a node's id stays valid for the arena's
//! lifetime.
//!
//! Out-of-range ids are programming-invariant violations and panic with a
//! diagnostic; they are not a recoverable condition.

use serde::{Deserialize, Serialize};

use crate::decl::{Decl, DeclKind, SpecializationKind};
use crate::ids::{DeclId, QualifierId, StmtId, TemplateArgId, TypeLocId};
use crate::name::{DeclName, Qualifier};
use crate::stmt::{Stmt, StmtKind};
use crate::template::TemplateArg;
use crate::type_loc::TypeLoc;

/// An already-built syntax tree.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ast {
    decls: Vec<Decl>,
    stmts: Vec<Stmt>,
    type_locs: Vec<TypeLoc>,
    template_args: Vec<TemplateArg>,
    qualifiers: Vec<Qualifier>,
    /// The translation unit, once set.
    root: Option<DeclId>,
}

impl Ast {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Node access
    // ------------------------------------------------------------------

    pub fn decl(&self, id: DeclId) -> &Decl {
        match self.decls.get(id.index()) {
            Some(d) => d,
            None => panic!("dangling declaration id: {id}"),
        }
    }

    pub fn stmt(&self, id: StmtId) -> &Stmt {
        match self.stmts.get(id.index()) {
            Some(s) => s,
            None => panic!("dangling statement id: {id}"),
        }
    }

    pub fn type_loc(&self, id: TypeLocId) -> &TypeLoc {
        match self.type_locs.get(id.index()) {
            Some(t) => t,
            None => panic!("dangling type locator id: {id}"),
        }
    }

    pub fn template_arg(&self, id: TemplateArgId) -> &TemplateArg {
        match self.template_args.get(id.index()) {
            Some(a) => a,
            None => panic!("dangling template argument id: {id}"),
        }
    }

    pub fn qualifier(&self, id: QualifierId) -> &Qualifier {
        match self.qualifiers.get(id.index()) {
            Some(q) => q,
            None => panic!("dangling qualifier id: {id}"),
        }
    }

    pub fn decl_mut(&mut self, id: DeclId) -> &mut Decl {
        match self.decls.get_mut(id.index()) {
            Some(d) => d,
            None => panic!("dangling declaration id: {id}"),
        }
    }

    pub fn stmt_mut(&mut self, id: StmtId) -> &mut Stmt {
        match self.stmts.get_mut(id.index()) {
            Some(s) => s,
            None => panic!("dangling statement id: {id}"),
        }
    }

    pub fn decl_count(&self) -> usize {
        self.decls.len()
    }

    pub fn stmt_count(&self) -> usize {
        self.stmts.len()
    }

    /// The translation unit.
    ///
    /// Panics if the tree was built without one; a rooted tree is a
    /// precondition for whole-tree traversal.
    pub fn root(&self) -> DeclId {
        match self.root {
            Some(root) => root,
            None => panic!("tree has no translation unit root"),
        }
    }

    // ------------------------------------------------------------------
    // Identity and redeclaration chains
    // ------------------------------------------------------------------

    /// The canonical representative of `id`'s redeclaration chain.
    pub fn canonical_decl(&self, id: DeclId) -> DeclId {
        self.decl(id).canonical
    }

    /// True iff `id` is its own canonical representative.
    pub fn is_canonical(&self, id: DeclId) -> bool {
        self.canonical_decl(id) == id
    }

    /// True iff `a` and `b` declare the same entity.
    pub fn same_entity(&self, a: DeclId, b: DeclId) -> bool {
        self.canonical_decl(a) == self.canonical_decl(b)
    }

    /// All redeclarations of `id`'s entity, in declaration order
    /// (the canonical declaration first).
    pub fn redeclarations(&self, id: DeclId) -> Vec<DeclId> {
        let canonical = self.canonical_decl(id);
        (0..self.decls.len() as u32)
            .map(DeclId::new)
            .filter(|&d| self.decl(d).canonical == canonical)
            .collect()
    }

    /// Whether this particular declaration is the defining one for its
    /// category. Categories without a declaration/definition distinction
    /// (namespaces, parameters, aliases) count as definitions.
    pub fn decl_is_definition(&self, id: DeclId) -> bool {
        let decl = self.decl(id);
        match &decl.kind {
            DeclKind::Record(r) => r.is_definition,
            DeclKind::ClassTemplateSpecialization { record, .. } => record.is_definition,
            DeclKind::ClassTemplatePartialSpecialization { record, .. } => record.is_definition,
            DeclKind::Enum(e) => e.is_definition,
            DeclKind::Function(f) => f.is_definition,
            DeclKind::Var(v) => v.is_definition,
            DeclKind::ClassTemplate(t)
            | DeclKind::FunctionTemplate(t)
            | DeclKind::VarTemplate(t) => self.decl_is_definition(t.templated),
            _ => true,
        }
    }

    /// Among the redeclarations of `id`'s entity, the one that is the
    /// definition, if a definition exists anywhere.
    pub fn definition_of(&self, id: DeclId) -> Option<DeclId> {
        self.redeclarations(id)
            .into_iter()
            .find(|&d| self.decl_is_definition(d))
    }

    // ------------------------------------------------------------------
    // Templates and specializations
    // ------------------------------------------------------------------

    /// The raw specialization set a visit of `template_decl` draws from.
    ///
    /// For a primary template this is the canonical declaration's set. A
    /// partial specialization has no set of its own; its instantiations
    /// live in the primary's set (distinguished by their instantiated-from
    /// back-pointers), so the primary's set is returned for it as well.
    pub fn specialization_set(&self, template_decl: DeclId) -> Vec<DeclId> {
        let decl = self.decl(template_decl);
        if let Some(data) = self.decl(self.canonical_decl(template_decl)).as_template() {
            return data.specializations.clone();
        }
        if let DeclKind::ClassTemplatePartialSpecialization { spec, .. } = &decl.kind {
            let primary = match spec.instantiated_from {
                Some(p) => p,
                None => panic!(
                    "partial specialization {template_decl} has no primary template back-pointer"
                ),
            };
            return self.specialization_set(primary);
        }
        panic!(
            "specialization set requested for non-template {} {template_decl}",
            decl.kind_name()
        );
    }

    /// The template `spec` was instantiated from, if resolved.
    pub fn instantiated_from(&self, spec: DeclId) -> Option<DeclId> {
        self.decl(spec)
            .specialization()
            .and_then(|s| s.instantiated_from)
    }

    /// The specialization kind of `spec`, if it is a specialization.
    pub fn specialization_kind(&self, spec: DeclId) -> Option<SpecializationKind> {
        self.decl(spec).specialization().map(|s| s.kind)
    }

    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Push a first declaration; it becomes its own canonical
    /// representative.
    pub fn push_decl(&mut self, name: DeclName, kind: DeclKind) -> DeclId {
        let id = DeclId::new(self.decls.len() as u32);
        self.decls.push(Decl {
            name,
            kind,
            canonical: id,
            implicit: false,
        });
        id
    }

    /// Push a redeclaration of an existing entity.
    pub fn push_redecl(&mut self, name: DeclName, kind: DeclKind, of: DeclId) -> DeclId {
        let canonical = self.canonical_decl(of);
        let id = DeclId::new(self.decls.len() as u32);
        self.decls.push(Decl {
            name,
            kind,
            canonical,
            implicit: false,
        });
        id
    }

    pub fn push_stmt(&mut self, kind: StmtKind) -> StmtId {
        let id = StmtId::new(self.stmts.len() as u32);
        self.stmts.push(Stmt { kind });
        id
    }

    pub fn push_type_loc(&mut self, type_loc: TypeLoc) -> TypeLocId {
        let id = TypeLocId::new(self.type_locs.len() as u32);
        self.type_locs.push(type_loc);
        id
    }

    pub fn push_template_arg(&mut self, arg: TemplateArg) -> TemplateArgId {
        let id = TemplateArgId::new(self.template_args.len() as u32);
        self.template_args.push(arg);
        id
    }

    pub fn push_qualifier(&mut self, qualifier: Qualifier) -> QualifierId {
        let id = QualifierId::new(self.qualifiers.len() as u32);
        self.qualifiers.push(qualifier);
        id
    }

    /// Mark a declaration as compiler-synthesized.
    pub fn mark_implicit(&mut self, id: DeclId) {
        self.decl_mut(id).implicit = true;
    }

    /// Record `spec` in the specialization set of `template_decl`'s
    /// canonical declaration.
    pub fn register_specialization(&mut self, template_decl: DeclId, spec: DeclId) {
        let canonical = self.canonical_decl(template_decl);
        let kind_name = self.decl(canonical).kind_name();
        match &mut self.decl_mut(canonical).kind {
            DeclKind::ClassTemplate(t)
            | DeclKind::FunctionTemplate(t)
            | DeclKind::VarTemplate(t) => t.specializations.push(spec),
            _ => panic!("cannot register a specialization on non-template {kind_name} at {canonical}"),
        }
    }

    pub fn set_root(&mut self, root: DeclId) {
        self.root = Some(root);
    }
}
