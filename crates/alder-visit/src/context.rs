//! The context vocabulary: one enum per traversable node family.
//!
//! A context tag records the structural role a node plays relative to the
//! parent that reached it — not the node's own kind. Exactly one tag is
//! attached to each traversal call. Contexts give clients a crude but
//! useful basis for filtering; anything finer grained than a fixed-size tag
//! has to live in the client's own traversal state.
//!
//! Every enum starts with a `None` placeholder, used only when a traversal
//! is initiated from outside the engine, and exposes `COUNT` so the
//! name-lookup tables can be checked for matching cardinality at compile
//! time. The raw-value lookups (`from_raw`, `name_of_raw`,
//! `symbol_of_raw`) fail closed: an out-of-range value yields `None` or
//! `"unknown"` instead of aborting, so a corrupted or unmapped tag can
//! never crash a printer.

use static_assertions::const_assert_eq;

macro_rules! context_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $symbol:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )*
        }

        impl $name {
            /// Every enumerator, in declaration order.
            pub const ALL: &'static [Self] = &[ $( Self::$variant ),* ];

            /// Number of enumerators.
            pub const COUNT: usize = Self::ALL.len();

            const NAMES: &'static [&'static str] = &[ $( stringify!($variant) ),* ];

            const SYMBOLS: &'static [&'static str] = &[ $( $symbol ),* ];

            /// The display name of this tag.
            pub fn name(self) -> &'static str {
                Self::NAMES[self as usize]
            }

            /// The machine-readable symbol of this tag, for serialization
            /// in diagnostic output.
            pub fn symbol(self) -> &'static str {
                Self::SYMBOLS[self as usize]
            }

            /// Recover a tag from its raw value; `None` if out of range.
            pub fn from_raw(raw: u32) -> Option<Self> {
                Self::ALL.get(raw as usize).copied()
            }

            /// Display name for a raw value, `"unknown"` if out of range.
            pub fn name_of_raw(raw: u32) -> &'static str {
                Self::NAMES.get(raw as usize).copied().unwrap_or("unknown")
            }

            /// Symbol for a raw value, `"unknown"` if out of range.
            pub fn symbol_of_raw(raw: u32) -> &'static str {
                Self::SYMBOLS.get(raw as usize).copied().unwrap_or("unknown")
            }
        }

        // The enumerator list and its lookup tables must stay in step.
        const_assert_eq!($name::COUNT, $name::NAMES.len());
        const_assert_eq!($name::COUNT, $name::SYMBOLS.len());
    };
}

context_enum! {
    /// Roles a declaration can occupy relative to its parent.
    DeclContext {
        /// Root-call placeholder; never produced by the engine itself.
        None => "none",

        // ---- Context is a declaration ----
        TranslationUnitMember => "translation-unit-member",
        NamespaceMember => "namespace-member",
        LinkageSpecMember => "linkage-spec-member",
        ExportMember => "export-member",
        RecordMember => "record-member",
        EnumMember => "enum-member",
        TemplateTemplated => "template-templated",
        TemplateParameter => "template-parameter",
        FriendDecl => "friend-decl",
        FriendTemplateDecl => "friend-template-decl",
        ClassTemplateInstantiation => "class-template-instantiation",
        FunctionTemplateInstantiation => "function-template-instantiation",
        VarTemplateInstantiation => "var-template-instantiation",
        ImplicitFunctionParameter => "implicit-function-parameter",

        // ---- Context is a type locator ----
        FunctionTypeParameter => "function-type-parameter",

        // ---- Context is a statement ----
        CatchExceptionDecl => "catch-exception-decl",
        DeclStmtDecl => "decl-stmt-decl",
        LambdaClosureClass => "lambda-closure-class",
        LambdaCaptureVariable => "lambda-capture-variable",
    }
}

context_enum! {
    /// Roles a statement or expression can occupy relative to its parent.
    StmtContext {
        /// Root-call placeholder; never produced by the engine itself.
        None => "none",

        // ---- Context is a declaration ----
        DeclaratorTrailingRequires => "declarator-trailing-requires",
        VarInit => "var-init",
        ParamDefaultValue => "param-default-value",
        FunctionBody => "function-body",
        FieldBitWidth => "field-bit-width",
        FieldInit => "field-init",
        EnumConstantInit => "enum-constant-init",
        StaticAssertCondition => "static-assert-condition",
        StaticAssertMessage => "static-assert-message",
        FileScopeAsmString => "file-scope-asm-string",
        TemplateRequiresClause => "template-requires-clause",
        NonTypeTemplateParamDefault => "non-type-template-param-default",
        CtorInitializerInit => "ctor-initializer-init",

        // ---- Context is a type locator ----
        TypeOfExpr => "type-of-expr",
        DecltypeExpr => "decltype-expr",
        ArraySizeExpr => "array-size-expr",

        // ---- Context is a statement ----
        CompoundElement => "compound-element",
        IfInit => "if-init",
        IfCond => "if-cond",
        IfThen => "if-then",
        IfElse => "if-else",
        WhileCond => "while-cond",
        WhileBody => "while-body",
        DoBody => "do-body",
        DoCond => "do-cond",
        ForInit => "for-init",
        ForCond => "for-cond",
        ForInc => "for-inc",
        ForBody => "for-body",
        ForRangeInit => "for-range-init",
        ForRangeRange => "for-range-range",
        ForRangeBegin => "for-range-begin",
        ForRangeEnd => "for-range-end",
        ForRangeCond => "for-range-cond",
        ForRangeInc => "for-range-inc",
        ForRangeLoopVar => "for-range-loop-var",
        ForRangeBody => "for-range-body",
        SwitchInit => "switch-init",
        SwitchCond => "switch-cond",
        SwitchBody => "switch-body",
        CaseLhs => "case-lhs",
        CaseRhs => "case-rhs",
        CaseSub => "case-sub",
        DefaultSub => "default-sub",
        ReturnValue => "return-value",
        LabelSub => "label-sub",
        IndirectGotoTarget => "indirect-goto-target",
        TryBlock => "try-block",
        TryHandler => "try-handler",
        CatchBlock => "catch-block",
        MemberBase => "member-base",
        ParenSub => "paren-sub",
        UnaryOperand => "unary-operand",
        BinaryLhs => "binary-lhs",
        BinaryRhs => "binary-rhs",
        ConditionalCond => "conditional-cond",
        ConditionalTrue => "conditional-true",
        ConditionalFalse => "conditional-false",
        CallCallee => "call-callee",
        CallArg => "call-arg",
        ImplicitCastOperand => "implicit-cast-operand",
        ExplicitCastOperand => "explicit-cast-operand",
        ArraySubscriptLhs => "array-subscript-lhs",
        ArraySubscriptRhs => "array-subscript-rhs",
        UnaryExprOrTypeTraitOperand => "unary-expr-or-type-trait-operand",
        InitListSyntacticElement => "init-list-syntactic-element",
        InitListSemanticElement => "init-list-semantic-element",
        ConstructArg => "construct-arg",
        NewPlacementArg => "new-placement-arg",
        NewArraySize => "new-array-size",
        NewInit => "new-init",
        DeleteOperand => "delete-operand",
        ThrowOperand => "throw-operand",
        LambdaCaptureInit => "lambda-capture-init",

        // ---- Other contexts ----
        TemplateArgument => "template-argument",
    }
}

context_enum! {
    /// Roles a written type can occupy relative to its parent.
    TypeContext {
        /// Root-call placeholder; never produced by the engine itself.
        None => "none",

        // ---- Context is a declaration ----
        DeclaratorType => "declarator-type",
        TypeAliasType => "type-alias-type",
        EnumUnderlying => "enum-underlying",
        RecordBase => "record-base",
        CtorInitializer => "ctor-initializer",
        FriendType => "friend-type",
        TemplateTypeParamDefault => "template-type-param-default",
        NonTypeTemplateParamType => "non-type-template-param-type",

        // ---- Context is a type locator ----
        QualifiedInner => "qualified-inner",
        PointerPointee => "pointer-pointee",
        LValueReferencePointee => "lvalue-reference-pointee",
        RValueReferencePointee => "rvalue-reference-pointee",
        MemberPointerClass => "member-pointer-class",
        MemberPointerPointee => "member-pointer-pointee",
        ArrayElement => "array-element",
        FunctionReturn => "function-return",
        ParenInner => "paren-inner",
        ElaboratedNamed => "elaborated-named",
        PackExpansionPattern => "pack-expansion-pattern",
        AtomicValue => "atomic-value",

        // ---- Context is a statement ----
        NewAllocatedType => "new-allocated-type",
        ExplicitCastType => "explicit-cast-type",
        ConstructWrittenType => "construct-written-type",
        UnaryExprOrTypeTraitType => "unary-expr-or-type-trait-type",

        // ---- Other contexts ----
        TemplateArgument => "template-argument",
        QualifierSegment => "qualifier-segment",
        DeclarationName => "declaration-name",
    }
}

context_enum! {
    /// Roles a template argument can occupy relative to its parent.
    TemplateArgContext {
        /// Root-call placeholder; never produced by the engine itself.
        None => "none",

        // ---- Context is a declaration ----
        PartialSpecializationArgs => "partial-specialization-args",
        ExplicitSpecializationArgs => "explicit-specialization-args",

        // ---- Context is a type locator ----
        TemplateSpecializationType => "template-specialization-type",

        // ---- Context is a statement ----
        DeclRefArgs => "decl-ref-args",
        MemberArgs => "member-args",

        // ---- Other contexts ----
        PackElement => "pack-element",
    }
}

context_enum! {
    /// Roles a name qualifier can occupy relative to its parent.
    QualifierContext {
        /// Root-call placeholder; never produced by the engine itself.
        None => "none",

        // ---- Context is a declaration ----
        Declarator => "declarator",
        Record => "record",
        Enum => "enum",

        // ---- Context is a type locator ----
        Elaborated => "elaborated",

        // ---- Context is a statement ----
        DeclRef => "decl-ref",
        Member => "member",
    }
}

context_enum! {
    /// Roles a declaration name can occupy relative to its parent.
    DeclNameContext {
        /// Root-call placeholder; never produced by the engine itself.
        None => "none",

        // ---- Context is a declaration ----
        Function => "function",

        // ---- Context is a statement ----
        DeclRef => "decl-ref",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_match_enumerators() {
        assert_eq!(DeclContext::None.name(), "None");
        assert_eq!(DeclContext::RecordMember.name(), "RecordMember");
        assert_eq!(StmtContext::FunctionBody.name(), "FunctionBody");
        assert_eq!(TypeContext::DeclaratorType.name(), "DeclaratorType");
    }

    #[test]
    fn symbols_are_machine_readable() {
        assert_eq!(DeclContext::RecordMember.symbol(), "record-member");
        assert_eq!(StmtContext::CallArg.symbol(), "call-arg");
        assert_eq!(QualifierContext::DeclRef.symbol(), "decl-ref");
    }

    #[test]
    fn raw_round_trip() {
        for (i, &ctx) in StmtContext::ALL.iter().enumerate() {
            assert_eq!(StmtContext::from_raw(i as u32), Some(ctx));
        }
    }

    #[test]
    fn out_of_range_raw_values_fail_closed() {
        assert_eq!(DeclContext::from_raw(10_000), None);
        assert_eq!(DeclContext::name_of_raw(10_000), "unknown");
        assert_eq!(DeclContext::symbol_of_raw(10_000), "unknown");
        assert_eq!(TemplateArgContext::name_of_raw(u32::MAX), "unknown");
    }

    #[test]
    fn none_is_always_the_first_enumerator() {
        assert_eq!(DeclContext::from_raw(0), Some(DeclContext::None));
        assert_eq!(StmtContext::from_raw(0), Some(StmtContext::None));
        assert_eq!(TypeContext::from_raw(0), Some(TypeContext::None));
        assert_eq!(TemplateArgContext::from_raw(0), Some(TemplateArgContext::None));
        assert_eq!(QualifierContext::from_raw(0), Some(QualifierContext::None));
        assert_eq!(DeclNameContext::from_raw(0), Some(DeclNameContext::None));
    }
}
