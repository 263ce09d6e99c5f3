//! Compiles the built-in sample program `main { result = 3 + 4 * 2; return result; }`.
//!
//! Prints the assembly to stdout, or assembles it into an executable when
//! given an output path. With `DUMP_GRAPHS=vcg` the IR graphs are written
//! into ./graphs first. The resulting executable exits with status 11.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use ssac::ast::{BinOp, Expr, Function, Stmt};
use ssac::{driver, CodeGenerator};

fn sample_program() -> Vec<Function> {
    let body = vec![
        Stmt::Assign {
            name: "result".into(),
            value: Expr::binary(
                BinOp::Add,
                Expr::IntLit(3),
                Expr::binary(BinOp::Mul, Expr::IntLit(4), Expr::IntLit(2)),
            ),
        },
        Stmt::Return {
            value: Expr::var("result"),
        },
    ];
    vec![Function::new("main", body)]
}

fn main() -> ExitCode {
    env_logger::init();

    let program = sample_program();
    let graphs = match ssac::translate_program(&program) {
        Ok(graphs) => graphs,
        Err(e) => {
            eprintln!("translation failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    if driver::graph_dump_requested() {
        if let Err(e) = driver::dump_graphs(&graphs, Path::new("graphs")) {
            eprintln!("graph dump failed: {e}");
            return ExitCode::FAILURE;
        }
    }

    let asm = match CodeGenerator::new().generate_code(&graphs) {
        Ok(asm) => asm,
        Err(e) => {
            eprintln!("code generation failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    match std::env::args().nth(1) {
        Some(output) => {
            if let Err(e) = driver::write_and_assemble(&asm, &PathBuf::from(output)) {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        None => {
            print!("{asm}");
            ExitCode::SUCCESS
        }
    }
}
