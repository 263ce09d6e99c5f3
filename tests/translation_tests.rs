//! Integration tests for SSA translation and value numbering.

use ssac::ast::{BinOp, Expr, Function, Stmt};
use ssac::ir::{IrGraph, LocalValueNumbering, NoOptimizer, NodeKind, SsaTranslation};
use ssac::CompileError;

fn ret(value: Expr) -> Stmt {
    Stmt::Return { value }
}

fn assign(name: &str, value: Expr) -> Stmt {
    Stmt::Assign {
        name: name.into(),
        value,
    }
}

fn translate(function: &Function) -> IrGraph {
    SsaTranslation::new(function, LocalValueNumbering::new())
        .translate()
        .expect("translation failed")
}

fn count_kind(graph: &IrGraph, want: fn(&NodeKind) -> bool) -> usize {
    graph.node_ids().filter(|id| want(graph.kind(*id))).count()
}

#[test]
fn return_literal_graph_shape() {
    let function = Function::new("main", vec![ret(Expr::IntLit(42))]);
    let graph = translate(&function);

    assert_eq!(graph.name(), "main");
    assert_eq!(count_kind(&graph, |k| matches!(k, NodeKind::ConstInt(42))), 1);
    assert_eq!(count_kind(&graph, |k| matches!(k, NodeKind::Return)), 1);
    assert_eq!(count_kind(&graph, |k| matches!(k, NodeKind::Start)), 1);
    // The end block's control predecessor is the return.
    let end_preds = graph.preds(graph.end_block());
    assert_eq!(end_preds.len(), 1);
    assert!(matches!(graph.kind(end_preds[0]), NodeKind::Return));
}

#[test]
fn arithmetic_expression_graph_shape() {
    // return 3 + 4 * 2;
    let function = Function::new(
        "main",
        vec![ret(Expr::binary(
            BinOp::Add,
            Expr::IntLit(3),
            Expr::binary(BinOp::Mul, Expr::IntLit(4), Expr::IntLit(2)),
        ))],
    );
    let graph = translate(&function);

    assert_eq!(count_kind(&graph, |k| matches!(k, NodeKind::Mul)), 1);
    assert_eq!(count_kind(&graph, |k| matches!(k, NodeKind::Add)), 1);
    assert_eq!(count_kind(&graph, |k| matches!(k, NodeKind::Return)), 1);
    assert_eq!(count_kind(&graph, |k| matches!(k, NodeKind::ConstInt(_))), 3);
}

#[test]
fn identical_expressions_are_value_numbered() {
    // a = 1 + 1; b = 1 + 1; return a - b;  -- both adds at different
    // source positions must collapse into one node.
    let one_plus_one = || Expr::binary(BinOp::Add, Expr::IntLit(1), Expr::IntLit(1));
    let function = Function::new(
        "main",
        vec![
            assign("a", one_plus_one()),
            assign("b", one_plus_one()),
            ret(Expr::binary(BinOp::Sub, Expr::var("a"), Expr::var("b"))),
        ],
    );
    let graph = translate(&function);

    assert_eq!(count_kind(&graph, |k| matches!(k, NodeKind::Add)), 1);
    assert_eq!(count_kind(&graph, |k| matches!(k, NodeKind::ConstInt(1))), 1);
    // Both subtraction operands are the shared add node.
    let graph_sub = graph
        .node_ids()
        .find(|id| matches!(graph.kind(*id), NodeKind::Sub))
        .expect("no sub node");
    let preds = graph.preds(graph_sub);
    assert_eq!(preds[0], preds[1]);
}

#[test]
fn value_numbering_is_idempotent_across_occurrences() {
    // A third occurrence still resolves to the same retained node.
    let one_plus_one = || Expr::binary(BinOp::Add, Expr::IntLit(1), Expr::IntLit(1));
    let function = Function::new(
        "main",
        vec![
            assign("a", one_plus_one()),
            assign("b", one_plus_one()),
            assign("c", one_plus_one()),
            ret(Expr::var("c")),
        ],
    );
    let graph = translate(&function);
    assert_eq!(count_kind(&graph, |k| matches!(k, NodeKind::Add)), 1);
}

#[test]
fn no_optimizer_keeps_duplicates() {
    let one_plus_one = || Expr::binary(BinOp::Add, Expr::IntLit(1), Expr::IntLit(1));
    let function = Function::new(
        "main",
        vec![
            assign("a", one_plus_one()),
            assign("b", one_plus_one()),
            ret(Expr::binary(BinOp::Sub, Expr::var("a"), Expr::var("b"))),
        ],
    );
    let graph = SsaTranslation::new(&function, NoOptimizer)
        .translate()
        .expect("translation failed");

    assert_eq!(count_kind(&graph, |k| matches!(k, NodeKind::Add)), 2);
    assert_eq!(count_kind(&graph, |k| matches!(k, NodeKind::ConstInt(1))), 2);
}

#[test]
fn div_and_mod_share_operands_but_not_side_effects() {
    // return 10 / 3 + 10 % 3;  -- constants dedup, but the mod consumes
    // the side-effect token the div produced, so the two stay distinct.
    let function = Function::new(
        "main",
        vec![ret(Expr::binary(
            BinOp::Add,
            Expr::binary(BinOp::Div, Expr::IntLit(10), Expr::IntLit(3)),
            Expr::binary(BinOp::Mod, Expr::IntLit(10), Expr::IntLit(3)),
        ))],
    );
    let graph = translate(&function);

    assert_eq!(count_kind(&graph, |k| matches!(k, NodeKind::ConstInt(_))), 2);
    assert_eq!(count_kind(&graph, |k| matches!(k, NodeKind::Div)), 1);
    assert_eq!(count_kind(&graph, |k| matches!(k, NodeKind::Mod)), 1);

    let div = graph
        .node_ids()
        .find(|id| matches!(graph.kind(*id), NodeKind::Div))
        .expect("no div node");
    let modulo = graph
        .node_ids()
        .find(|id| matches!(graph.kind(*id), NodeKind::Mod))
        .expect("no mod node");
    // Same value operands by identity.
    assert_eq!(graph.preds(div)[0], graph.preds(modulo)[0]);
    assert_eq!(graph.preds(div)[1], graph.preds(modulo)[1]);
    // Different side-effect predecessors: mod is ordered after div.
    assert_ne!(graph.preds(div)[2], graph.preds(modulo)[2]);
}

#[test]
fn variable_reads_resolve_to_last_definition() {
    // a = 1; a = 2; return a;
    let function = Function::new(
        "main",
        vec![
            assign("a", Expr::IntLit(1)),
            assign("a", Expr::IntLit(2)),
            ret(Expr::var("a")),
        ],
    );
    let graph = translate(&function);

    let ret_node = graph.preds(graph.end_block())[0];
    let result = graph.pred_skip_proj(ret_node, 1);
    assert!(matches!(graph.kind(result), NodeKind::ConstInt(2)));
}

#[test]
fn undefined_variable_is_a_structured_error() {
    let function = Function::new("main", vec![ret(Expr::var("ghost"))]);
    let err = SsaTranslation::new(&function, LocalValueNumbering::new())
        .translate()
        .unwrap_err();
    assert!(matches!(
        err,
        CompileError::UndefinedVariable { ref name, .. } if name == "ghost"
    ));
}

#[test]
fn missing_return_is_a_structured_error() {
    let function = Function::new("main", vec![assign("a", Expr::IntLit(1))]);
    let err = SsaTranslation::new(&function, LocalValueNumbering::new())
        .translate()
        .unwrap_err();
    assert!(matches!(err, CompileError::MissingReturn { .. }));
}
