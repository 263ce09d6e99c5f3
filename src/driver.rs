//! Driver-side collaborators: file output, external assembler, graph dumps.
//!
//! Everything here touches the filesystem, the environment or child
//! processes, which the core itself never does. Process termination and
//! exit-code selection stay with the embedding application; this module
//! only reports failures as [`CompileError`]s.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::core::{CompileError, CompileResult};
use crate::ir::{printer, IrGraph};

/// Writes `asm` to `<output>.s` and hands it to the system assembler/linker
/// (`gcc <output>.s -o <output>`).
///
/// The subprocess call blocks; a non-zero exit surfaces as
/// [`CompileError::Assembler`] with the child's exit code.
pub fn write_and_assemble(asm: &str, output: &Path) -> CompileResult<()> {
    let asm_path = PathBuf::from(format!("{}.s", output.display()));
    std::fs::write(&asm_path, asm)?;
    log::debug!("assembling {} -> {}", asm_path.display(), output.display());
    let status = Command::new("gcc")
        .arg(&asm_path)
        .arg("-o")
        .arg(output)
        .status()?;
    if !status.success() {
        return Err(CompileError::Assembler {
            code: status.code().unwrap_or(-1),
        });
    }
    Ok(())
}

/// Whether the user asked for VCG graph dumps (`DUMP_GRAPHS=vcg`).
pub fn graph_dump_requested() -> bool {
    std::env::var("DUMP_GRAPHS").map(|v| v == "vcg").unwrap_or(false)
}

/// Writes one `<function>-before-codegen.vcg` per graph into `dir`.
pub fn dump_graphs(graphs: &[IrGraph], dir: &Path) -> CompileResult<()> {
    std::fs::create_dir_all(dir)?;
    for graph in graphs {
        let path = dir.join(format!("{}-before-codegen.vcg", graph.name()));
        log::debug!("dumping graph {} to {}", graph.name(), path.display());
        std::fs::write(path, printer::print_vcg(graph))?;
    }
    Ok(())
}
