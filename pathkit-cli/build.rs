//! Build script for pathkit-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this structure synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("pathkit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Normalize, resolve and compare filesystem paths")
        .long_about(
            "Command-line tool for lexical path normalization, symlink-aware resolution, \
             relative path computation and project root discovery",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("directory")
                .short('C')
                .long("directory")
                .help("Run as if started in DIR")
                .value_name("DIR")
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Load an additional configuration file")
                .value_name("FILE")
                .global(true)
                .env("PATHKIT_CONFIG"),
        )
        .subcommands(vec![
            Command::new("normalize")
                .about("Lexically normalize a path")
                .long_about("Collapse '.', '..' and repeated separators without touching the filesystem"),
            Command::new("resolve")
                .about("Resolve a path to its absolute canonical form")
                .long_about("Follow symlinks where the path exists; accept targets that do not exist yet"),
            Command::new("relative")
                .about("Print the relative path between two absolute paths"),
            Command::new("is-subpath")
                .about("Test whether one path lies inside another")
                .long_about("Exit with status 0 if CHILD is PARENT or lies below it, 1 otherwise"),
            Command::new("relationship")
                .about("Describe how two paths relate"),
            Command::new("project-root")
                .about("Find the nearest project root")
                .long_about("Walk up from START until a directory containing a project marker is found"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "OUT_DIR is not set")
    })?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    fs::write(man_dir.join("pathkit.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
