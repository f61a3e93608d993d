//! Walk functions: the default recursion bodies behind every hook.
//!
//! Each `walk_*` function classifies a node by its concrete kind and visits
//! the node's structurally-owned children, passing a context tag that names
//! each child's role. Overriding clients re-invoke the matching `walk_*` to
//! continue below a node.
//!
//! Every walk clones the node's kind payload before recursing: hooks take
//! `&mut self` and may consult the tree, so the walk must not hold a borrow
//! of the tree across a hook call. Payloads are id lists and small values,
//! so the clones stay cheap.
//!
//! Failure semantics are deliberate and binary: impossible states (a
//! dangling id, a specialization-set entry without specialization data, an
//! unpaired capture) panic, because they mean the tree violated an
//! invariant or the engine has a coverage bug; kinds outside the classified
//! set are silent no-op leaves, so new node kinds degrade coverage instead
//! of crashing.

use alder_ast::{
    Ast, BaseSpecifier, CastForm, CtorInit, CtorInitTarget, DeclId, DeclKind, DeclName,
    FunctionForm, LambdaExpr, QualifierId, QualifierSegment, RecordData, StmtId, StmtKind,
    TemplateArgId, TemplateArgKind, TemplateParamList, TypeLocId, TypeLocKind,
};

use crate::context::{
    DeclContext, DeclNameContext, QualifierContext, StmtContext, TemplateArgContext, TypeContext,
};
use crate::traits::Visitor;

// ============================================================================
// Entry point
// ============================================================================

/// Start a whole-tree traversal at the translation unit root.
///
/// All other movement through the tree happens via the recursive calls the
/// walk functions make from inside the default hook bodies.
pub fn walk_tree<V: Visitor + ?Sized>(v: &mut V) {
    let root = v.ast().root();
    v.visit_decl(DeclContext::None, root);
}

// ============================================================================
// Declaration walk
// ============================================================================

/// Visit the children of a declaration.
///
/// Declaration kinds form an overlapping lattice, so classification here is
/// an ordered chain of category tests, most specific first. The order is
/// load-bearing: reordering the tests changes which handler claims a node.
pub fn walk_decl<V: Visitor + ?Sized>(v: &mut V, _context: DeclContext, id: DeclId) {
    let decl = v.ast().decl(id).clone();

    // 1. Template declarations. Tested before the entity categories their
    //    templated declaration belongs to.
    if let Some(template) = decl.as_template() {
        visit_template_param_list(v, &template.params);
        v.visit_decl(DeclContext::TemplateTemplated, template.templated);
        visit_template_instantiations_if_scheduled(v, id);
        return;
    }

    // 2. Class template partial specializations: records that additionally
    //    carry a parameter list, a written argument pattern, and their own
    //    attributed instantiations.
    if let DeclKind::ClassTemplatePartialSpecialization {
        params,
        args_written,
        record,
        ..
    } = &decl.kind
    {
        visit_template_param_list(v, params);
        visit_template_arg_list(v, TemplateArgContext::PartialSpecializationArgs, args_written);
        walk_record_parts(v, record);
        visit_template_instantiations_if_scheduled(v, id);
        return;
    }

    // 3. Full class template specializations: records with written
    //    arguments when the programmer spelled them out.
    if let DeclKind::ClassTemplateSpecialization { spec, record } = &decl.kind {
        if let Some(args) = &spec.args_written {
            visit_template_arg_list(v, TemplateArgContext::ExplicitSpecializationArgs, args);
        }
        walk_record_parts(v, record);
        return;
    }

    // 4. The declarator family: variables, parameters, fields, functions.
    if decl.as_declarator().is_some() {
        walk_declarator_decl(v, id, &decl.kind, &decl.name);
        return;
    }

    // 5. Remaining kinds are each a single unambiguous category.
    match &decl.kind {
        DeclKind::TranslationUnit { members } => {
            visit_container_members(v, DeclContext::TranslationUnitMember, members);
        }
        DeclKind::Namespace { members } => {
            visit_container_members(v, DeclContext::NamespaceMember, members);
        }
        DeclKind::LinkageSpec { members, .. } => {
            visit_container_members(v, DeclContext::LinkageSpecMember, members);
        }
        DeclKind::Export { members } => {
            visit_container_members(v, DeclContext::ExportMember, members);
        }

        DeclKind::Record(record) => {
            walk_record_parts(v, record);
        }
        DeclKind::Enum(e) => {
            visit_qualifier_opt(v, QualifierContext::Enum, e.qualifier);
            visit_type_loc_opt(v, TypeContext::EnumUnderlying, e.underlying);
            visit_decl_list(v, DeclContext::EnumMember, &e.members);
        }
        DeclKind::EnumConstant { init } => {
            visit_stmt_opt(v, StmtContext::EnumConstantInit, *init);
        }
        DeclKind::TypeAlias { type_loc } => {
            v.visit_type_loc(TypeContext::TypeAliasType, *type_loc);
        }

        DeclKind::TemplateTypeParam { default_type } => {
            visit_type_loc_opt(v, TypeContext::TemplateTypeParamDefault, *default_type);
        }
        DeclKind::NonTypeTemplateParam {
            type_loc,
            default_value,
        } => {
            visit_type_loc_opt(v, TypeContext::NonTypeTemplateParamType, *type_loc);
            visit_stmt_opt(v, StmtContext::NonTypeTemplateParamDefault, *default_value);
        }
        DeclKind::TemplateTemplateParam { params } => {
            visit_template_param_list(v, params);
        }

        DeclKind::Friend(target) => {
            visit_friend_target(v, DeclContext::FriendDecl, target);
        }
        DeclKind::FriendTemplate { params, target } => {
            visit_template_param_list(v, params);
            visit_friend_target(v, DeclContext::FriendTemplateDecl, target);
        }

        DeclKind::StaticAssert { condition, message } => {
            v.visit_stmt(StmtContext::StaticAssertCondition, *condition);
            visit_stmt_opt(v, StmtContext::StaticAssertMessage, *message);
        }
        DeclKind::FileScopeAsm { string } => {
            v.visit_stmt(StmtContext::FileScopeAsmString, *string);
        }

        // Unclassified kinds are leaves, not errors.
        DeclKind::Unclassified { .. } => {}

        DeclKind::ClassTemplate(_)
        | DeclKind::FunctionTemplate(_)
        | DeclKind::VarTemplate(_)
        | DeclKind::ClassTemplateSpecialization { .. }
        | DeclKind::ClassTemplatePartialSpecialization { .. }
        | DeclKind::Var(_)
        | DeclKind::Param(_)
        | DeclKind::Field(_)
        | DeclKind::Function(_) => {
            unreachable!("claimed by an earlier category test: {}", decl.kind_name())
        }
    }
}

/// Children shared by every declarator-family kind, then the kind-specific
/// tail.
fn walk_declarator_decl<V: Visitor + ?Sized>(
    v: &mut V,
    id: DeclId,
    kind: &DeclKind,
    name: &DeclName,
) {
    let dd = match kind {
        DeclKind::Var(d) => &d.declarator,
        DeclKind::Param(d) => &d.declarator,
        DeclKind::Field(d) => &d.declarator,
        DeclKind::Function(d) => &d.declarator,
        _ => unreachable!("not a declarator kind: {id}"),
    }
    .clone();

    // The qualifier comes before the type it qualifies.
    visit_qualifier_opt(v, QualifierContext::Declarator, dd.qualifier);
    for list in &dd.outer_params {
        visit_template_param_list(v, list);
    }
    match dd.type_loc {
        Some(tl) => v.visit_type_loc(TypeContext::DeclaratorType, tl),
        None => {
            if let Some(sem_type) = &dd.implicit_type {
                v.visit_implicit_type(TypeContext::DeclaratorType, sem_type);
            }
        }
    }
    visit_stmt_opt(v, StmtContext::DeclaratorTrailingRequires, dd.trailing_requires);

    match kind {
        DeclKind::Var(var) => {
            if let Some(args) = var.specialization.as_ref().and_then(|s| s.args_written.clone()) {
                visit_template_arg_list(v, TemplateArgContext::ExplicitSpecializationArgs, &args);
            }
            visit_stmt_opt(v, StmtContext::VarInit, var.init);
        }
        DeclKind::Param(param) => {
            visit_stmt_opt(v, StmtContext::ParamDefaultValue, param.default_value);
        }
        DeclKind::Field(field) => {
            visit_stmt_opt(v, StmtContext::FieldBitWidth, field.bit_width);
            visit_stmt_opt(v, StmtContext::FieldInit, field.init);
        }
        DeclKind::Function(f) => {
            v.visit_decl_name(DeclNameContext::Function, name);
            if let Some(args) = f.specialization.as_ref().and_then(|s| s.args_written.clone()) {
                visit_template_arg_list(v, TemplateArgContext::ExplicitSpecializationArgs, &args);
            }

            // Parameters are reached through the function-type locator
            // when one exists; the direct loop is only the fallback for
            // declarations with no written signature.
            let through_locator = dd
                .type_loc
                .and_then(|tl| function_type_loc(v.ast(), tl))
                .is_some();
            if !through_locator {
                visit_implicit_function_parameters(v, id);
            }

            // Member initializers belong to the defining declaration only.
            if f.is_definition && matches!(f.form, FunctionForm::Constructor) {
                visit_ctor_initializers(v, &f.ctor_inits);
            }
            visit_stmt_opt(v, StmtContext::FunctionBody, f.body);
        }
        _ => unreachable!("not a declarator kind: {id}"),
    }
}

/// Visit the children of a record payload: qualifier, base specifiers
/// (definitions only), then members.
///
/// A member that is the synthesized closure class of a lambda is skipped
/// here; it is visited as a child of the closure-creating expression
/// instead.
pub fn walk_record_parts<V: Visitor + ?Sized>(v: &mut V, record: &RecordData) {
    visit_qualifier_opt(v, QualifierContext::Record, record.qualifier);
    if record.is_definition {
        visit_record_bases(v, &record.bases);
    }
    visit_container_members(v, DeclContext::RecordMember, &record.members);
}

// ============================================================================
// Statement/expression walk
// ============================================================================

/// Visit the children of a statement or expression.
///
/// Dispatch is one dense `match`. Kinds that share a payload shape — every
/// call-like kind, every cast-like kind, every literal — share one arm,
/// because their recursion needs are identical.
pub fn walk_stmt<V: Visitor + ?Sized>(v: &mut V, _context: StmtContext, id: StmtId) {
    let kind = v.ast().stmt(id).kind.clone();
    match kind {
        StmtKind::Compound { body } => {
            visit_stmt_list(v, StmtContext::CompoundElement, &body);
        }
        StmtKind::DeclStmt { decls } => {
            visit_decl_list(v, DeclContext::DeclStmtDecl, &decls);
        }
        StmtKind::If {
            init,
            cond,
            then_branch,
            else_branch,
        } => {
            visit_stmt_opt(v, StmtContext::IfInit, init);
            v.visit_stmt(StmtContext::IfCond, cond);
            v.visit_stmt(StmtContext::IfThen, then_branch);
            visit_stmt_opt(v, StmtContext::IfElse, else_branch);
        }
        StmtKind::While { cond, body } => {
            v.visit_stmt(StmtContext::WhileCond, cond);
            v.visit_stmt(StmtContext::WhileBody, body);
        }
        StmtKind::Do { body, cond } => {
            v.visit_stmt(StmtContext::DoBody, body);
            v.visit_stmt(StmtContext::DoCond, cond);
        }
        StmtKind::For {
            init,
            cond,
            inc,
            body,
        } => {
            visit_stmt_opt(v, StmtContext::ForInit, init);
            visit_stmt_opt(v, StmtContext::ForCond, cond);
            visit_stmt_opt(v, StmtContext::ForInc, inc);
            v.visit_stmt(StmtContext::ForBody, body);
        }
        StmtKind::ForRange {
            init,
            range,
            begin,
            end,
            cond,
            inc,
            loop_var,
            body,
        } => {
            visit_stmt_opt(v, StmtContext::ForRangeInit, init);
            v.visit_stmt(StmtContext::ForRangeRange, range);
            visit_stmt_opt(v, StmtContext::ForRangeBegin, begin);
            visit_stmt_opt(v, StmtContext::ForRangeEnd, end);
            visit_stmt_opt(v, StmtContext::ForRangeCond, cond);
            visit_stmt_opt(v, StmtContext::ForRangeInc, inc);
            v.visit_stmt(StmtContext::ForRangeLoopVar, loop_var);
            v.visit_stmt(StmtContext::ForRangeBody, body);
        }
        StmtKind::Switch { init, cond, body } => {
            visit_stmt_opt(v, StmtContext::SwitchInit, init);
            v.visit_stmt(StmtContext::SwitchCond, cond);
            v.visit_stmt(StmtContext::SwitchBody, body);
        }
        StmtKind::Case { lhs, rhs, sub } => {
            v.visit_stmt(StmtContext::CaseLhs, lhs);
            visit_stmt_opt(v, StmtContext::CaseRhs, rhs);
            v.visit_stmt(StmtContext::CaseSub, sub);
        }
        StmtKind::Default { sub } => {
            v.visit_stmt(StmtContext::DefaultSub, sub);
        }
        StmtKind::Return { value } => {
            visit_stmt_opt(v, StmtContext::ReturnValue, value);
        }
        StmtKind::Label { sub, .. } => {
            v.visit_stmt(StmtContext::LabelSub, sub);
        }
        StmtKind::IndirectGoto { target } => {
            v.visit_stmt(StmtContext::IndirectGotoTarget, target);
        }
        StmtKind::Try { try_block, handlers } => {
            v.visit_stmt(StmtContext::TryBlock, try_block);
            visit_stmt_list(v, StmtContext::TryHandler, &handlers);
        }
        StmtKind::Catch {
            exception_decl,
            block,
        } => {
            visit_decl_opt(v, DeclContext::CatchExceptionDecl, exception_decl);
            v.visit_stmt(StmtContext::CatchBlock, block);
        }

        StmtKind::DeclRef {
            qualifier,
            name,
            template_args,
            ..
        } => {
            visit_qualifier_opt(v, QualifierContext::DeclRef, qualifier);
            v.visit_decl_name(DeclNameContext::DeclRef, &name);
            visit_template_arg_list(v, TemplateArgContext::DeclRefArgs, &template_args);
        }
        StmtKind::Member {
            base,
            qualifier,
            template_args,
            ..
        } => {
            v.visit_stmt(StmtContext::MemberBase, base);
            visit_qualifier_opt(v, QualifierContext::Member, qualifier);
            visit_template_arg_list(v, TemplateArgContext::MemberArgs, &template_args);
        }
        StmtKind::Paren { sub } => {
            v.visit_stmt(StmtContext::ParenSub, sub);
        }
        StmtKind::Unary { sub, .. } => {
            v.visit_stmt(StmtContext::UnaryOperand, sub);
        }
        StmtKind::Binary { lhs, rhs, .. } => {
            v.visit_stmt(StmtContext::BinaryLhs, lhs);
            v.visit_stmt(StmtContext::BinaryRhs, rhs);
        }
        StmtKind::Conditional {
            cond,
            true_expr,
            false_expr,
        } => {
            v.visit_stmt(StmtContext::ConditionalCond, cond);
            v.visit_stmt(StmtContext::ConditionalTrue, true_expr);
            v.visit_stmt(StmtContext::ConditionalFalse, false_expr);
        }

        // One arm for every call-like kind.
        StmtKind::Call(call) => {
            v.visit_stmt(StmtContext::CallCallee, call.callee);
            visit_stmt_list(v, StmtContext::CallArg, &call.args);
        }

        // One arm for every cast-like kind. Implicit casts have no written
        // type; explicit casts always do.
        StmtKind::Cast(cast) => match cast.form {
            CastForm::Implicit => {
                v.visit_stmt(StmtContext::ImplicitCastOperand, cast.operand);
            }
            _ => {
                visit_type_loc_opt(v, TypeContext::ExplicitCastType, cast.written_type);
                v.visit_stmt(StmtContext::ExplicitCastOperand, cast.operand);
            }
        },

        StmtKind::ArraySubscript { lhs, rhs } => {
            v.visit_stmt(StmtContext::ArraySubscriptLhs, lhs);
            v.visit_stmt(StmtContext::ArraySubscriptRhs, rhs);
        }
        StmtKind::UnaryExprOrTypeTrait {
            written_type,
            operand,
        } => {
            visit_type_loc_opt(v, TypeContext::UnaryExprOrTypeTraitType, written_type);
            visit_stmt_opt(v, StmtContext::UnaryExprOrTypeTraitOperand, operand);
        }

        // Both views are visited; when they coincide the children are
        // deliberately visited twice.
        StmtKind::InitList(_) => {
            v.visit_init_list_syntactic(id);
            v.visit_init_list_semantic(id);
        }

        StmtKind::Construct(construct) => {
            visit_type_loc_opt(v, TypeContext::ConstructWrittenType, construct.written_type);
            visit_stmt_list(v, StmtContext::ConstructArg, &construct.args);
        }
        StmtKind::New {
            placement,
            array_size,
            allocated_type,
            init,
        } => {
            visit_stmt_list(v, StmtContext::NewPlacementArg, &placement);
            v.visit_type_loc(TypeContext::NewAllocatedType, allocated_type);
            visit_stmt_opt(v, StmtContext::NewArraySize, array_size);
            visit_stmt_opt(v, StmtContext::NewInit, init);
        }
        StmtKind::Delete { operand } => {
            v.visit_stmt(StmtContext::DeleteOperand, operand);
        }
        StmtKind::Throw { operand } => {
            visit_stmt_opt(v, StmtContext::ThrowOperand, operand);
        }

        StmtKind::Lambda(lambda) => {
            visit_lambda_captures(v, &lambda);
            v.visit_decl(DeclContext::LambdaClosureClass, lambda.closure_class);
        }

        // One arm for every leaf kind.
        StmtKind::Null
        | StmtKind::Break
        | StmtKind::Continue
        | StmtKind::Goto { .. }
        | StmtKind::Literal(_) => {}

        // Unclassified kinds are leaves, not errors.
        StmtKind::Unclassified { .. } => {}
    }
}

// ============================================================================
// Type-locator walk
// ============================================================================

/// Visit the children of a written type.
pub fn walk_type_loc<V: Visitor + ?Sized>(v: &mut V, _context: TypeContext, id: TypeLocId) {
    let kind = v.ast().type_loc(id).kind.clone();
    match kind {
        TypeLocKind::Qualified { inner, .. } => {
            v.visit_type_loc(TypeContext::QualifiedInner, inner);
        }
        TypeLocKind::Pointer { pointee } => {
            v.visit_type_loc(TypeContext::PointerPointee, pointee);
        }
        TypeLocKind::LValueReference { pointee } => {
            v.visit_type_loc(TypeContext::LValueReferencePointee, pointee);
        }
        TypeLocKind::RValueReference { pointee } => {
            v.visit_type_loc(TypeContext::RValueReferencePointee, pointee);
        }
        TypeLocKind::MemberPointer {
            class_type,
            pointee,
        } => {
            v.visit_type_loc(TypeContext::MemberPointerClass, class_type);
            v.visit_type_loc(TypeContext::MemberPointerPointee, pointee);
        }
        TypeLocKind::Array { element, size } => {
            v.visit_type_loc(TypeContext::ArrayElement, element);
            visit_stmt_opt(v, StmtContext::ArraySizeExpr, size);
        }
        TypeLocKind::Function { ret, params } => {
            v.visit_type_loc(TypeContext::FunctionReturn, ret);
            visit_function_type_params(v, &params);
        }
        TypeLocKind::Paren { inner } => {
            v.visit_type_loc(TypeContext::ParenInner, inner);
        }
        TypeLocKind::Elaborated { qualifier, named } => {
            visit_qualifier_opt(v, QualifierContext::Elaborated, qualifier);
            v.visit_type_loc(TypeContext::ElaboratedNamed, named);
        }
        TypeLocKind::TemplateSpecialization { args, .. } => {
            visit_template_arg_list(v, TemplateArgContext::TemplateSpecializationType, &args);
        }
        TypeLocKind::PackExpansion { pattern } => {
            v.visit_type_loc(TypeContext::PackExpansionPattern, pattern);
        }
        TypeLocKind::Atomic { value } => {
            v.visit_type_loc(TypeContext::AtomicValue, value);
        }
        TypeLocKind::Decltype { expr } => {
            v.visit_stmt(StmtContext::DecltypeExpr, expr);
        }
        TypeLocKind::TypeOfExpr { expr } => {
            v.visit_stmt(StmtContext::TypeOfExpr, expr);
        }

        // Leaves, including kinds outside the classified set.
        TypeLocKind::Builtin { .. }
        | TypeLocKind::Named { .. }
        | TypeLocKind::Unclassified { .. } => {}
    }
}

// ============================================================================
// Template-argument walk
// ============================================================================

/// Visit the children of a template argument.
pub fn walk_template_arg<V: Visitor + ?Sized>(
    v: &mut V,
    _context: TemplateArgContext,
    id: TemplateArgId,
) {
    let kind = v.ast().template_arg(id).kind.clone();
    match kind {
        TemplateArgKind::Type { type_loc } => {
            v.visit_type_loc(TypeContext::TemplateArgument, type_loc);
        }
        TemplateArgKind::Expression { expr } => {
            v.visit_stmt(StmtContext::TemplateArgument, expr);
        }
        TemplateArgKind::Pack { elements } => {
            for element in elements {
                v.visit_template_arg(TemplateArgContext::PackElement, element);
            }
        }

        // Leaves, including kinds outside the classified set.
        TemplateArgKind::Template { .. }
        | TemplateArgKind::Integral { .. }
        | TemplateArgKind::Unclassified { .. } => {}
    }
}

// ============================================================================
// Qualifier walk
// ============================================================================

/// Visit the children of a name qualifier: its prefix first, then its
/// final component.
pub fn walk_qualifier<V: Visitor + ?Sized>(v: &mut V, context: QualifierContext, id: QualifierId) {
    let prefix = v.ast().qualifier(id).prefix;
    if let Some(prefix) = prefix {
        v.visit_qualifier(context, prefix);
    }
    visit_qualifier_final_component(v, id);
}

/// Visit the final component of a qualifier, ignoring its prefix.
pub fn visit_qualifier_final_component<V: Visitor + ?Sized>(v: &mut V, id: QualifierId) {
    let segment = v.ast().qualifier(id).segment.clone();
    match segment {
        QualifierSegment::TypeSpec { type_loc } => {
            v.visit_type_loc(TypeContext::QualifierSegment, type_loc);
        }
        QualifierSegment::Global
        | QualifierSegment::Namespace { .. }
        | QualifierSegment::Identifier { .. }
        | QualifierSegment::Unclassified { .. } => {}
    }
}

// ============================================================================
// Declaration-name walk
// ============================================================================

/// Visit the children of a declaration name: the written target type of a
/// conversion function; nothing otherwise.
pub fn walk_decl_name<V: Visitor + ?Sized>(v: &mut V, _context: DeclNameContext, name: &DeclName) {
    if let DeclName::Conversion { type_loc } = name {
        v.visit_type_loc(TypeContext::DeclarationName, *type_loc);
    }
}

// ============================================================================
// Dual-view walks
// ============================================================================

fn init_list_views(ast: &Ast, id: StmtId) -> (Vec<StmtId>, Vec<StmtId>) {
    match &ast.stmt(id).kind {
        StmtKind::InitList(init_list) => {
            (init_list.syntactic.clone(), init_list.semantic.clone())
        }
        _ => panic!(
            "initializer-list view requested for {} {id}",
            ast.stmt(id).kind_name()
        ),
    }
}

/// Visit the syntactic view of an initializer list's children.
pub fn walk_init_list_syntactic<V: Visitor + ?Sized>(v: &mut V, id: StmtId) {
    let (syntactic, _) = init_list_views(v.ast(), id);
    visit_stmt_list(v, StmtContext::InitListSyntacticElement, &syntactic);
}

/// Visit the semantic view of an initializer list's children.
pub fn walk_init_list_semantic<V: Visitor + ?Sized>(v: &mut V, id: StmtId) {
    let (_, semantic) = init_list_views(v.ast(), id);
    visit_stmt_list(v, StmtContext::InitListSemanticElement, &semantic);
}

// ============================================================================
// Template instantiation scheduling
// ============================================================================

enum TemplateCategory {
    Class,
    Function,
    Var,
}

/// Decide whether visiting `template_decl` is the scheduled moment to
/// visit its instantiations, and if so dispatch to the per-category
/// auxiliary hook.
///
/// Default policy: the canonical declaration is the scheduled moment, so
/// each specialization's containing traversal happens exactly once no
/// matter how many redeclarations exist. Definition-first policy
/// (experimental): the defining declaration is the scheduled moment,
/// falling back to the canonical declaration when no definition exists
/// anywhere. Gating on the definition alone would lose instantiations of a
/// never-defined primary whose partial specialization is defined, which is
/// why canonical gating is the default.
pub fn visit_template_instantiations_if_scheduled<V: Visitor + ?Sized>(
    v: &mut V,
    template_decl: DeclId,
) {
    let definition_first = v.instantiations_after_definitions();
    let category;
    {
        let ast = v.ast();
        let canonical = ast.canonical_decl(template_decl);
        let scheduled = if definition_first {
            match ast.definition_of(canonical) {
                Some(def) => def == template_decl,
                None => template_decl == canonical,
            }
        } else {
            template_decl == canonical
        };
        if !scheduled {
            return;
        }
        category = match &ast.decl(canonical).kind {
            DeclKind::ClassTemplate(_) | DeclKind::ClassTemplatePartialSpecialization { .. } => {
                TemplateCategory::Class
            }
            DeclKind::FunctionTemplate(_) => TemplateCategory::Function,
            DeclKind::VarTemplate(_) => TemplateCategory::Var,
            _ => panic!(
                "instantiation scheduling for non-template {} {template_decl}",
                ast.decl(canonical).kind_name()
            ),
        };
    }
    match category {
        TemplateCategory::Class => v.visit_class_template_instantiations(template_decl),
        TemplateCategory::Function => v.visit_function_template_instantiations(template_decl),
        TemplateCategory::Var => v.visit_var_template_instantiations(template_decl),
    }
}

/// Visit the instantiations attributed to `template_decl`.
///
/// The raw specialization set lives on the primary's canonical
/// declaration; each entry is attributed by resolving its
/// instantiated-from back-pointer and comparing canonical identities, so
/// an instantiation produced from a partial specialization is visited
/// under the partial and not the primary. Entries with no back-pointer at
/// all are attributed to the primary. Explicit specializations are never
/// visited here; they are ordinary members of their lexical context.
pub fn walk_template_instantiations<V: Visitor + ?Sized>(
    v: &mut V,
    template_decl: DeclId,
    context: DeclContext,
) {
    let (set, me, is_primary) = {
        let ast = v.ast();
        let me = ast.canonical_decl(template_decl);
        let set = ast.specialization_set(template_decl);
        let is_primary = ast.decl(me).as_template().is_some();
        (set, me, is_primary)
    };
    for spec in set {
        let attributed = {
            let ast = v.ast();
            let kind = match ast.specialization_kind(spec) {
                Some(kind) => kind,
                None => panic!(
                    "specialization set entry {} {spec} has no specialization data",
                    ast.decl(spec).kind_name()
                ),
            };
            kind.is_instantiation()
                && match ast.instantiated_from(spec) {
                    Some(from) => ast.canonical_decl(from) == me,
                    None => is_primary,
                }
        };
        if attributed {
            v.visit_decl(context, spec);
        }
    }
}

// ============================================================================
// Optional-node helpers
// ============================================================================

macro_rules! opt_visitors {
    (
        $( $family:ident : $ctx:ty, $id:ty ),* $(,)?
    ) => {
        paste::paste! {
            $(
                #[doc = concat!(
                    "Visit an optional ", stringify!($family), " node, doing nothing on absence."
                )]
                pub fn [<visit_ $family _opt>]<V: Visitor + ?Sized>(
                    v: &mut V,
                    context: $ctx,
                    node: Option<$id>,
                ) {
                    if let Some(node) = node {
                        v.[<visit_ $family>](context, node);
                    }
                }
            )*
        }
    };
}

opt_visitors! {
    decl: DeclContext, DeclId,
    stmt: StmtContext, StmtId,
    type_loc: TypeContext, TypeLocId,
    qualifier: QualifierContext, QualifierId,
}

// ============================================================================
// Collection helpers
// ============================================================================

/// Visit every statement in a list under one shared context tag.
pub fn visit_stmt_list<V: Visitor + ?Sized>(v: &mut V, context: StmtContext, stmts: &[StmtId]) {
    for &stmt in stmts {
        v.visit_stmt(context, stmt);
    }
}

/// Visit every declaration in a list under one shared context tag.
pub fn visit_decl_list<V: Visitor + ?Sized>(v: &mut V, context: DeclContext, decls: &[DeclId]) {
    for &decl in decls {
        v.visit_decl(context, decl);
    }
}

/// Visit every template argument in a list under one shared context tag.
pub fn visit_template_arg_list<V: Visitor + ?Sized>(
    v: &mut V,
    context: TemplateArgContext,
    args: &[TemplateArgId],
) {
    for &arg in args {
        v.visit_template_arg(context, arg);
    }
}

/// Visit the member declarations of a container, skipping synthesized
/// closure classes (those are visited under their lambda expression).
pub fn visit_container_members<V: Visitor + ?Sized>(
    v: &mut V,
    context: DeclContext,
    members: &[DeclId],
) {
    for &member in members {
        if is_closure_class(v.ast(), member) {
            continue;
        }
        v.visit_decl(context, member);
    }
}

/// In a template parameter list, visit the parameters, then the requires
/// clause if present.
pub fn visit_template_param_list<V: Visitor + ?Sized>(v: &mut V, list: &TemplateParamList) {
    visit_decl_list(v, DeclContext::TemplateParameter, &list.params);
    visit_stmt_opt(v, StmtContext::TemplateRequiresClause, list.requires_clause);
}

/// Visit the base specifiers of a record definition.
pub fn visit_record_bases<V: Visitor + ?Sized>(v: &mut V, bases: &[BaseSpecifier]) {
    for base in bases {
        visit_base_specifier(v, base);
    }
}

/// Visit the written class type in one base specifier.
pub fn visit_base_specifier<V: Visitor + ?Sized>(v: &mut V, base: &BaseSpecifier) {
    v.visit_type_loc(TypeContext::RecordBase, base.type_loc);
}

/// Visit a constructor's member initializers.
pub fn visit_ctor_initializers<V: Visitor + ?Sized>(v: &mut V, inits: &[CtorInit]) {
    for init in inits {
        visit_ctor_initializer(v, init);
    }
}

/// Visit one member initializer: the written class type when it
/// initializes a base or delegates to a sibling constructor, then the
/// initializer expression. A member target has no separate type syntax.
pub fn visit_ctor_initializer<V: Visitor + ?Sized>(v: &mut V, init: &CtorInit) {
    match &init.target {
        CtorInitTarget::Base { type_loc } | CtorInitTarget::Delegating { type_loc } => {
            v.visit_type_loc(TypeContext::CtorInitializer, *type_loc);
        }
        CtorInitTarget::Member { .. } => {}
    }
    v.visit_stmt(StmtContext::CtorInitializerInit, init.init);
}

/// Visit the parameter declarations referenced by a function type
/// locator.
pub fn visit_function_type_params<V: Visitor + ?Sized>(v: &mut V, params: &[DeclId]) {
    visit_decl_list(v, DeclContext::FunctionTypeParameter, params);
}

/// Fallback parameter visitation for a function declaration with no
/// written signature (an implicit declaration): loop over the parameters
/// directly.
pub fn visit_implicit_function_parameters<V: Visitor + ?Sized>(v: &mut V, function: DeclId) {
    let params = match v.ast().decl(function).as_function() {
        Some(f) => f.params.clone(),
        None => panic!(
            "implicit parameter visitation for non-function {} {function}",
            v.ast().decl(function).kind_name()
        ),
    };
    visit_decl_list(v, DeclContext::ImplicitFunctionParameter, &params);
}

/// Visit a lambda's captures, pairing each capture descriptor with its
/// initializer expression by positional index. A capture that introduces
/// a fresh variable recurses into that variable's declaration; a capture
/// of an existing variable recurses into the paired initializer.
pub fn visit_lambda_captures<V: Visitor + ?Sized>(v: &mut V, lambda: &LambdaExpr) {
    for (index, capture) in lambda.captures.iter().enumerate() {
        if capture.introduces_variable {
            let variable = match capture.variable {
                Some(variable) => variable,
                None => panic!("init-capture at index {index} has no variable declaration"),
            };
            v.visit_decl(DeclContext::LambdaCaptureVariable, variable);
        } else {
            let init = match lambda.capture_inits.get(index) {
                Some(&init) => init,
                None => panic!("capture at index {index} has no paired initializer"),
            };
            v.visit_stmt(StmtContext::LambdaCaptureInit, init);
        }
    }
}

// ============================================================================
// Private queries
// ============================================================================

fn visit_friend_target<V: Visitor + ?Sized>(
    v: &mut V,
    context: DeclContext,
    target: &alder_ast::FriendTarget,
) {
    match target {
        alder_ast::FriendTarget::Decl(decl) => v.visit_decl(context, *decl),
        alder_ast::FriendTarget::Type(type_loc) => {
            v.visit_type_loc(TypeContext::FriendType, *type_loc)
        }
    }
}

/// Find the function type locator inside `tl`, peeling wrapper locators.
fn function_type_loc(ast: &Ast, mut tl: TypeLocId) -> Option<TypeLocId> {
    loop {
        match &ast.type_loc(tl).kind {
            TypeLocKind::Function { .. } => return Some(tl),
            TypeLocKind::Paren { inner } | TypeLocKind::Qualified { inner, .. } => tl = *inner,
            TypeLocKind::Elaborated { named, .. } => tl = *named,
            _ => return None,
        }
    }
}

fn is_closure_class(ast: &Ast, decl: DeclId) -> bool {
    matches!(ast.decl(decl).as_record(), Some(record) if record.closure_of.is_some())
}
