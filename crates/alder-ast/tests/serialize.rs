//! JSON round-trip of a built tree: the external front end is out of
//! scope, so serialized trees are how the tooling layer receives input.

use alder_ast::{
    Ast, DeclKind, DeclName, DeclaratorData, FunctionData, FunctionForm, Literal, StmtKind,
    TypeLoc, TypeLocKind, VarData,
};

#[test]
fn tree_round_trips_through_json() {
    let mut ast = Ast::new();

    let ret = ast.push_type_loc(TypeLoc {
        kind: TypeLocKind::Builtin { name: "int".into() },
    });
    let lit = ast.push_stmt(StmtKind::Literal(Literal::Int(1)));
    let ret_stmt = ast.push_stmt(StmtKind::Return { value: Some(lit) });
    let body = ast.push_stmt(StmtKind::Compound {
        body: vec![ret_stmt],
    });
    let function = ast.push_decl(
        DeclName::ident("f"),
        DeclKind::Function(FunctionData {
            declarator: DeclaratorData {
                type_loc: Some(ret),
                ..DeclaratorData::default()
            },
            form: FunctionForm::Free,
            params: vec![],
            ctor_inits: vec![],
            body: Some(body),
            is_definition: true,
            specialization: None,
        }),
    );
    let var = ast.push_decl(
        DeclName::ident("g"),
        DeclKind::Var(VarData {
            declarator: DeclaratorData::default(),
            init: None,
            is_definition: true,
            specialization: None,
        }),
    );
    let tu = ast.push_decl(
        DeclName::Anonymous,
        DeclKind::TranslationUnit {
            members: vec![function, var],
        },
    );
    ast.set_root(tu);

    let json = serde_json::to_string_pretty(&ast).expect("serialize");
    let back: Ast = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(back.decl_count(), ast.decl_count());
    assert_eq!(back.stmt_count(), ast.stmt_count());
    assert_eq!(back.root(), tu);
    assert_eq!(back.decl(function).name, DeclName::ident("f"));
    assert_eq!(back.decl(function).kind, ast.decl(function).kind);
    assert!(back.decl_is_definition(function));
}
